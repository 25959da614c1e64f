//! Units of measure for product dimensions and sale units.
//!
//! See the [unit of measure model.][1]
//!
//! [1]: ../../models/unit_of_measure/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        unit_of_measure::{UnitOfMeasure, UnitOfMeasureID},
        user::User,
    },
};

/// Create a new `UnitOfMeasure`.
pub fn create<T: Into<String>>(caller: &User, id: UnitOfMeasureID, name: T, symbol: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogCreate)?;
    let model = UnitOfMeasure::builder()
        .id(id)
        .name(name)
        .symbol(symbol)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `UnitOfMeasure`.
pub fn update(caller: &User, mut subject: UnitOfMeasure, name: Option<String>, symbol: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogUpdate)?;
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(symbol) = symbol {
        subject.set_symbol(symbol);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `UnitOfMeasure`.
pub fn delete(caller: &User, mut subject: UnitOfMeasure, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("unit_of_measure".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
