//! Cash movements ("movimientos de caja") record money entering or leaving a
//! cash box, itemized into lines tagged with cost centers. Lines created by
//! the advance-application flow keep a provenance link back to the advance
//! item they settle.

use crate::{
    models::{
        cost_center::CostCenterID,
        expense_advance::ExpenseAdvanceID,
    },
};
use chrono::{DateTime, Utc};
use getset::{Getters, Setters};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

/// Direction of the movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashMovementKind {
    Income,
    Expense,
}

/// One line of a cash movement.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub(crate)")]
pub struct CashMovementLine {
    /// What this line pays or collects.
    description: String,
    /// The cost center charged, when known.
    cost_center_id: Option<CostCenterID>,
    /// The line amount, always non-negative; direction comes from the
    /// movement's kind.
    amount: Decimal,
    /// The advance this line settles an item of, if it came from the
    /// application flow.
    advance_id: Option<ExpenseAdvanceID>,
    /// The settled item's row key within that advance.
    advance_item_id: Option<i64>,
}

impl CashMovementLine {
    /// Create a new line with no advance provenance.
    pub fn new<T: Into<String>>(description: T, cost_center_id: Option<CostCenterID>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            cost_center_id,
            amount,
            advance_id: None,
            advance_item_id: None,
        }
    }

    /// Create a line that settles an advance item.
    pub fn applied_from<T: Into<String>>(description: T, cost_center_id: Option<CostCenterID>, amount: Decimal, advance_id: ExpenseAdvanceID, advance_item_id: i64) -> Self {
        Self {
            description: description.into(),
            cost_center_id,
            amount,
            advance_id: Some(advance_id),
            advance_item_id: Some(advance_item_id),
        }
    }
}

megui_model! {
    /// A cash movement and its lines.
    pub struct CashMovement {
        /// Whether money came in or went out.
        kind: CashMovementKind,
        /// The accounting date of the movement (distinct from the audit
        /// timestamps).
        occurred: DateTime<Utc>,
        /// Voucher/receipt reference, when one exists.
        #[builder(setter(strip_option), default)]
        reference: Option<String>,
        /// What the movement is about.
        description: String,
        /// The itemized lines.
        lines: Vec<CashMovementLine>,
    }
    CashMovementID
    CashMovementBuilder
}

impl CashMovement {
    /// The movement's total: the sum of its line amounts.
    pub fn total(&self) -> Decimal {
        self.lines().iter().map(|l| l.amount().clone()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;

    #[test]
    fn totals_lines() {
        let now = util::time::now();
        let movement = CashMovement::builder()
            .id(CashMovementID::new(77))
            .kind(CashMovementKind::Expense)
            .occurred(now.clone())
            .description("caja chica semana 31")
            .lines(vec![
                CashMovementLine::new("utiles", Some(CostCenterID::new(4)), num!(80)),
                CashMovementLine::new("movilidad", None, num!(35.40)),
            ])
            .active(true)
            .created(now.clone())
            .updated(now.clone())
            .build().unwrap();
        assert_eq!(movement.total(), num!(115.40));
        assert_eq!(movement.reference(), &None);
    }
}
