//! Families are the top level of the product taxonomy.
//!
//! See the [family model.][1]
//!
//! [1]: ../../models/family/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        family::{Family, FamilyID},
        user::User,
    },
};

/// Create a new `Family`.
pub fn create<T: Into<String>>(caller: &User, id: FamilyID, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogCreate)?;
    let model = Family::builder()
        .id(id)
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `Family`.
pub fn update(caller: &User, mut subject: Family, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogUpdate)?;
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `Family`.
pub fn delete(caller: &User, mut subject: Family, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("family".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
