//! Subfamilies live under a parent family and carry the name the description
//! assembler can prefix onto a product's description.
//!
//! See the [subfamily model.][1]
//!
//! [1]: ../../models/subfamily/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        family::Family,
        subfamily::{Subfamily, SubfamilyID},
        user::User,
    },
};

/// Create a new `Subfamily` under the given family.
pub fn create<T: Into<String>>(caller: &User, family: &Family, id: SubfamilyID, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogCreate)?;
    if family.is_deleted() {
        Err(Error::ObjectIsDeleted("family".into()))?;
    }
    let model = Subfamily::builder()
        .id(id)
        .family_id(family.id().clone())
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `Subfamily`. Re-parenting is not a thing; the screens
/// delete and recreate instead.
pub fn update(caller: &User, mut subject: Subfamily, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
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

/// Delete a `Subfamily`.
pub fn delete(caller: &User, mut subject: Subfamily, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("subfamily".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
