//! Cash movements, including the application flow that turns pending expense
//! advance items into a movement draft.
//!
//! Application is the one multi-model transaction in the crate: it creates
//! the movement and updates every advance it drew from, all in one
//! modification list, so the caller can ship the whole thing to the backend
//! as a unit.
//!
//! See the [cash movement model.][1]
//!
//! [1]: ../../models/cash_movement/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        cash_movement::{CashMovement, CashMovementID, CashMovementKind, CashMovementLine},
        cost_center::CostCenter,
        expense_advance::ExpenseAdvance,
        user::User,
    },
};
use rust_decimal::prelude::*;

fn check_lines(lines: &[CashMovementLine]) -> Result<()> {
    for line in lines {
        if line.amount() < &Decimal::zero() {
            Err(Error::NegativeAmount)?;
        }
    }
    Ok(())
}

/// Create a new `CashMovement` from explicit lines.
pub fn create<T: Into<String>>(caller: &User, id: CashMovementID, kind: CashMovementKind, occurred: &DateTime<Utc>, reference: Option<String>, description: T, lines: Vec<CashMovementLine>, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CashMovementCreate)?;
    check_lines(&lines)?;
    let mut builder = CashMovement::builder()
        .id(id)
        .kind(kind)
        .occurred(occurred.clone())
        .description(description)
        .lines(lines)
        .active(active)
        .created(now.clone())
        .updated(now.clone());
    if let Some(reference) = reference {
        builder = builder.reference(reference);
    }
    let model = builder
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `CashMovement`.
pub fn update(caller: &User, mut subject: CashMovement, occurred: Option<DateTime<Utc>>, reference: Option<String>, description: Option<String>, lines: Option<Vec<CashMovementLine>>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CashMovementUpdate)?;
    if let Some(lines) = lines.as_ref() {
        check_lines(lines)?;
    }
    if let Some(occurred) = occurred {
        subject.set_occurred(occurred);
    }
    if reference.is_some() {
        subject.set_reference(reference);
    }
    if let Some(description) = description {
        subject.set_description(description);
    }
    if let Some(lines) = lines {
        subject.set_lines(lines);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `CashMovement`.
pub fn delete(caller: &User, mut subject: CashMovement, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CashMovementDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("cash_movement".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}

/// Project every pending item of the given advances into a new expense
/// movement draft, marking those items settled on their advances.
///
/// Each pending item becomes one line carrying its provenance (advance id +
/// item id). Cost center references are resolved against `cost_centers`; a
/// dangling reference leaves the line untagged rather than failing the whole
/// application. Advances whose items are all settled contribute nothing and
/// pass through untouched; if *nothing* pending is found at all, the
/// application is refused.
pub fn apply_advances<T: Into<String>>(caller: &User, id: CashMovementID, occurred: &DateTime<Utc>, reference: Option<String>, description: T, advances: Vec<ExpenseAdvance>, cost_centers: &[CostCenter], now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CashMovementApply)?;
    let mut lines: Vec<CashMovementLine> = Vec::new();
    let mut touched: Vec<ExpenseAdvance> = Vec::new();
    for mut advance in advances {
        if advance.is_deleted() {
            Err(Error::ObjectIsDeleted("expense_advance".into()))?;
        }
        if !advance.is_active() {
            Err(Error::ObjectIsInactive("expense_advance".into()))?;
        }
        if *advance.liquidated() {
            Err(Error::ObjectIsLiquidated("expense_advance".into()))?;
        }
        let pending: Vec<_> = advance.pending_items().into_iter().cloned().collect();
        if pending.is_empty() {
            continue;
        }
        let mut item_ids = Vec::with_capacity(pending.len());
        for item in &pending {
            let cost_center_id = item.cost_center_id()
                .and_then(|ccid| cost_centers.iter().find(|cc| cc.id() == &ccid))
                .map(|cc| cc.id().clone());
            lines.push(CashMovementLine::applied_from(
                item.description().clone(),
                cost_center_id,
                item.amount().clone(),
                advance.id().clone(),
                *item.id(),
            ));
            item_ids.push(*item.id());
        }
        advance.settle_items(&item_ids);
        advance.set_updated(now.clone());
        touched.push(advance);
    }
    if lines.is_empty() {
        Err(Error::NothingToApply)?;
    }
    let mut builder = CashMovement::builder()
        .id(id)
        // applied items are money already spent out of the cash box
        .kind(CashMovementKind::Expense)
        .occurred(occurred.clone())
        .description(description)
        .lines(lines)
        .active(true)
        .created(now.clone())
        .updated(now.clone());
    if let Some(reference) = reference {
        builder = builder.reference(reference);
    }
    let movement = builder
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    let mut mods = Modifications::new();
    mods.push(Op::Create, movement);
    for advance in touched {
        mods.push(Op::Update, advance);
    }
    Ok(mods)
}
