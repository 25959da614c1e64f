//! Storage types for the product catalog.

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        storage_type::{StorageType, StorageTypeID},
        user::User,
    },
};

/// Create a new `StorageType`.
pub fn create<T: Into<String>>(caller: &User, id: StorageTypeID, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogCreate)?;
    let model = StorageType::builder()
        .id(id)
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `StorageType`.
pub fn update(caller: &User, mut subject: StorageType, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
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

/// Delete a `StorageType`.
pub fn delete(caller: &User, mut subject: StorageType, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("storage_type".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::Role,
        models::user::UserID,
        util::{self, test::*},
    };

    #[test]
    fn crud_works() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Logistics]), &now);
        let mods = create(&user, StorageTypeID::new(9), "ALMACEN TECHADO", true, &now).unwrap().into_vec();
        let subject = mods[0].clone().expect_op::<StorageType>(Op::Create).unwrap();
        assert_eq!(subject.name(), "ALMACEN TECHADO");

        let mods = update(&user, subject, Some("ALMACEN ABIERTO".into()), None, &now).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<StorageType>(Op::Update).unwrap();
        assert_eq!(subject2.name(), "ALMACEN ABIERTO");

        let mods = delete(&user, subject2, &now).unwrap().into_vec();
        assert!(mods[0].clone().expect_op::<StorageType>(Op::Delete).unwrap().is_deleted());

        let user2 = make_user(&UserID::new(2), None, &now);
        let res = create(&user2, StorageTypeID::new(11), "REFRIGERADO", true, &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));
    }
}
