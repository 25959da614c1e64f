//! Colors for the product catalog.

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        color::{Color, ColorID},
        user::User,
    },
};

/// Create a new `Color`.
pub fn create<T: Into<String>>(caller: &User, id: ColorID, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogCreate)?;
    let model = Color::builder()
        .id(id)
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `Color`.
pub fn update(caller: &User, mut subject: Color, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
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

/// Delete a `Color`.
pub fn delete(caller: &User, mut subject: Color, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("color".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
