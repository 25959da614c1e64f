//! Expense advances ("entregas a rendir") are floats handed to a responsible
//! person, later accounted for item by item. Items accumulate from several
//! operational sub-domains and are eventually settled by being projected into
//! a cash movement (see [cash_movement transactions][tx]).
//!
//! Once liquidated, an advance is immutable. The backend enforces that
//! authoritatively; the transactions here assert it optimistically the same
//! way the admin screens do.
//!
//! [tx]: ../../transactions/cash_movement/

use crate::{
    models::{
        cost_center::CostCenterID,
        user::UserID,
    },
};
use getset::{Getters, Setters};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

/// The operational sub-domain an advance item originated in. The two fishing
/// variants are separate on purpose: own-fleet and third-party-fleet expenses
/// are accounted separately upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceSource {
    Fishing,
    ThirdPartyFishing,
    Purchasing,
    Sales,
    Warehouse,
    Services,
    Maintenance,
}

/// One itemized expense inside an advance.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub(crate)")]
pub struct AdvanceItem {
    /// The backend's row key for this item, carried into the cash movement
    /// line that settles it.
    id: i64,
    /// Where the expense came from.
    source: AdvanceSource,
    /// What the money was spent on.
    description: String,
    /// Supporting document, ie an invoice number.
    document_reference: Option<String>,
    /// The cost center this expense is charged to, when known.
    cost_center_id: Option<CostCenterID>,
    /// The amount spent.
    amount: Decimal,
    /// Whether this item has already been applied to a cash movement.
    settled: bool,
}

impl AdvanceItem {
    /// Create a new, unsettled item.
    pub fn new<T: Into<String>>(id: i64, source: AdvanceSource, description: T, document_reference: Option<String>, cost_center_id: Option<CostCenterID>, amount: Decimal) -> Self {
        Self {
            id,
            source,
            description: description.into(),
            document_reference,
            cost_center_id,
            amount,
            settled: false,
        }
    }
}

megui_model! {
    /// An expense advance: the float, its responsible person, and the
    /// itemized expenses accounted against it.
    pub struct ExpenseAdvance {
        /// The user accountable for this advance.
        responsible_id: UserID,
        /// What the advance was handed out for.
        description: String,
        /// The advanced amount.
        amount: Decimal,
        /// The itemized expenses accounted so far.
        items: Vec<AdvanceItem>,
        /// Set once the advance is closed out. Liquidated advances are
        /// immutable.
        #[builder(default)]
        liquidated: bool,
    }
    ExpenseAdvanceID
    ExpenseAdvanceBuilder
}

impl ExpenseAdvance {
    /// The items not yet applied to a cash movement.
    pub fn pending_items(&self) -> Vec<&AdvanceItem> {
        self.items().iter().filter(|i| !i.settled()).collect()
    }

    /// Whether any item remains unsettled.
    pub fn has_pending(&self) -> bool {
        self.items().iter().any(|i| !*i.settled())
    }

    /// Sum of all itemized amounts, settled or not.
    pub fn itemized_total(&self) -> Decimal {
        self.items().iter().map(|i| i.amount().clone()).sum()
    }

    /// Mark the given item ids settled. Unknown ids are ignored.
    pub(crate) fn settle_items(&mut self, item_ids: &[i64]) {
        for item in self.items_mut().iter_mut() {
            if item_ids.contains(item.id()) {
                item.set_settled(true);
            }
        }
    }
}
