//! Cost centers tag financial movement lines with an accounting dimension.
//!
//! See the [cost center model.][1]
//!
//! [1]: ../../models/cost_center/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        cost_center::{CostCenter, CostCenterID},
        user::User,
    },
};

/// Create a new `CostCenter`.
pub fn create<T: Into<String>>(caller: &User, id: CostCenterID, code: T, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CostCenterCreate)?;
    let model = CostCenter::builder()
        .id(id)
        .code(code)
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `CostCenter`.
pub fn update(caller: &User, mut subject: CostCenter, code: Option<String>, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CostCenterUpdate)?;
    if let Some(code) = code {
        subject.set_code(code);
    }
    if let Some(name) = name {
        subject.set_name(name);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `CostCenter`.
pub fn delete(caller: &User, mut subject: CostCenter, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CostCenterDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("cost_center".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
