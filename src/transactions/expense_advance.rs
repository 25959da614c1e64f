//! Expense advances ("entregas a rendir"). Creation and upkeep are ordinary
//! CRUD; the interesting rules are the terminal ones: an advance can only be
//! liquidated once nothing is pending, and once liquidated it is immutable.
//!
//! See the [expense advance model.][1]
//!
//! [1]: ../../models/expense_advance/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        expense_advance::{AdvanceItem, ExpenseAdvance, ExpenseAdvanceID},
        user::User,
    },
};
use rust_decimal::prelude::*;

fn check_amounts(amount: &Decimal, items: &[AdvanceItem]) -> Result<()> {
    if amount < &Decimal::zero() {
        Err(Error::NegativeAmount)?;
    }
    for item in items {
        if item.amount() < &Decimal::zero() {
            Err(Error::NegativeAmount)?;
        }
    }
    Ok(())
}

/// Create a new `ExpenseAdvance` for a responsible user.
pub fn create<T: Into<String>>(caller: &User, responsible: &User, id: ExpenseAdvanceID, description: T, amount: Decimal, items: Vec<AdvanceItem>, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AdvanceCreate)?;
    if responsible.is_deleted() {
        Err(Error::ObjectIsDeleted("user".into()))?;
    }
    check_amounts(&amount, &items)?;
    let model = ExpenseAdvance::builder()
        .id(id)
        .responsible_id(responsible.id().clone())
        .description(description)
        .amount(amount)
        .items(items)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `ExpenseAdvance`. Refused once liquidated.
pub fn update(caller: &User, mut subject: ExpenseAdvance, description: Option<String>, amount: Option<Decimal>, items: Option<Vec<AdvanceItem>>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AdvanceUpdate)?;
    if *subject.liquidated() {
        Err(Error::ObjectIsLiquidated("expense_advance".into()))?;
    }
    check_amounts(amount.as_ref().unwrap_or(subject.amount()), items.as_ref().map(|x| x.as_slice()).unwrap_or(&[]))?;
    if let Some(description) = description {
        subject.set_description(description);
    }
    if let Some(amount) = amount {
        subject.set_amount(amount);
    }
    if let Some(items) = items {
        subject.set_items(items);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Liquidate an `ExpenseAdvance`, closing it out for good. Every item must
/// be settled first.
pub fn liquidate(caller: &User, mut subject: ExpenseAdvance, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AdvanceLiquidate)?;
    if *subject.liquidated() {
        Err(Error::ObjectIsLiquidated("expense_advance".into()))?;
    }
    if subject.has_pending() {
        Err(Error::AdvanceHasPendingItems)?;
    }
    subject.set_liquidated(true);
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete an `ExpenseAdvance`. Liquidated advances stay, forever.
pub fn delete(caller: &User, mut subject: ExpenseAdvance, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AdvanceDelete)?;
    if *subject.liquidated() {
        Err(Error::ObjectIsLiquidated("expense_advance".into()))?;
    }
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("expense_advance".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::Role,
        models::{
            expense_advance::AdvanceSource,
            user::UserID,
        },
        util::{self, test::*},
    };

    fn items() -> Vec<AdvanceItem> {
        vec![
            AdvanceItem::new(1, AdvanceSource::Fishing, "viveres zarpe", None, None, num!(200)),
            AdvanceItem::new(2, AdvanceSource::Maintenance, "soldadura casco", Some("F001-4410".into()), None, num!(350)),
        ]
    }

    #[test]
    fn can_create() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Treasury]), &now);
        let responsible = make_user(&UserID::new(14), None, &now);
        let id = ExpenseAdvanceID::new(300);

        let mods = create(&user, &responsible, id.clone(), "gastos zarpe ancash 3", num!(1000), items(), true, &now).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let model = mods[0].clone().expect_op::<ExpenseAdvance>(Op::Create).unwrap();
        assert_eq!(model.id(), &id);
        assert_eq!(model.responsible_id(), responsible.id());
        assert_eq!(model.amount(), &num!(1000));
        assert_eq!(model.liquidated(), &false);
        assert_eq!(model.pending_items().len(), 2);

        let res = create(&user, &responsible, id.clone(), "gastos", num!(-5), vec![], true, &now);
        assert_eq!(res, Err(Error::NegativeAmount));

        let mut gone = responsible.clone();
        gone.set_deleted(Some(now.clone()));
        let res = create(&user, &gone, id.clone(), "gastos", num!(10), vec![], true, &now);
        assert_eq!(res, Err(Error::ObjectIsDeleted("user".into())));

        let user2 = make_user(&UserID::new(2), Some(vec![Role::Logistics]), &now);
        let res = create(&user2, &responsible, id.clone(), "gastos", num!(10), vec![], true, &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));
    }

    #[test]
    fn update_respects_liquidation() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Treasury]), &now);
        let responsible = make_user(&UserID::new(14), None, &now);
        let mods = create(&user, &responsible, ExpenseAdvanceID::new(300), "gastos", num!(1000), items(), true, &now).unwrap().into_vec();
        let subject = mods[0].clone().expect_op::<ExpenseAdvance>(Op::Create).unwrap();

        let now2 = util::time::now();
        let mods = update(&user, subject.clone(), Some("gastos zarpe".into()), Some(num!(1200)), None, None, &now2).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<ExpenseAdvance>(Op::Update).unwrap();
        assert_eq!(subject2.description(), "gastos zarpe");
        assert_eq!(subject2.amount(), &num!(1200));
        assert_eq!(subject2.updated(), &now2);

        let res = update(&user, subject.clone(), None, Some(num!(-1)), None, None, &now2);
        assert_eq!(res, Err(Error::NegativeAmount));

        let mut liquidated = subject.clone();
        liquidated.set_liquidated(true);
        let res = update(&user, liquidated, Some("no toques esto".into()), None, None, None, &now2);
        assert_eq!(res, Err(Error::ObjectIsLiquidated("expense_advance".into())));
    }

    #[test]
    fn liquidate_requires_settled_items() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Treasury]), &now);
        let responsible = make_user(&UserID::new(14), None, &now);
        let mods = create(&user, &responsible, ExpenseAdvanceID::new(300), "gastos", num!(1000), items(), true, &now).unwrap().into_vec();
        let subject = mods[0].clone().expect_op::<ExpenseAdvance>(Op::Create).unwrap();

        let res = liquidate(&user, subject.clone(), &now);
        assert_eq!(res, Err(Error::AdvanceHasPendingItems));

        let mut settled = subject.clone();
        settled.settle_items(&[1, 2]);
        let now2 = util::time::now();
        let mods = liquidate(&user, settled, &now2).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<ExpenseAdvance>(Op::Update).unwrap();
        assert_eq!(subject2.liquidated(), &true);
        assert_eq!(subject2.updated(), &now2);

        // liquidating twice makes no sense
        let res = liquidate(&user, subject2, &now2);
        assert_eq!(res, Err(Error::ObjectIsLiquidated("expense_advance".into())));
    }

    #[test]
    fn can_delete() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Treasury]), &now);
        let responsible = make_user(&UserID::new(14), None, &now);
        let mods = create(&user, &responsible, ExpenseAdvanceID::new(300), "gastos", num!(1000), vec![], true, &now).unwrap().into_vec();
        let subject = mods[0].clone().expect_op::<ExpenseAdvance>(Op::Create).unwrap();

        let mods = delete(&user, subject.clone(), &now).unwrap().into_vec();
        assert!(mods[0].clone().expect_op::<ExpenseAdvance>(Op::Delete).unwrap().is_deleted());

        let mut liquidated = subject.clone();
        liquidated.set_liquidated(true);
        let res = delete(&user, liquidated, &now);
        assert_eq!(res, Err(Error::ObjectIsLiquidated("expense_advance".into())));

        double_deleted_tester!(subject, "expense_advance", |subject| delete(&user, subject, &now));
    }
}
