//! Material types for the product catalog. The backend seeds id 1 as the
//! "unspecified" row; nothing here treats it specially, but the description
//! assembler refuses to render it.
//!
//! See the [material type model.][1]
//!
//! [1]: ../../models/material_type/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        material_type::{MaterialType, MaterialTypeID},
        user::User,
    },
};

/// Create a new `MaterialType`.
pub fn create<T: Into<String>>(caller: &User, id: MaterialTypeID, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogCreate)?;
    let model = MaterialType::builder()
        .id(id)
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `MaterialType`.
pub fn update(caller: &User, mut subject: MaterialType, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
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

/// Delete a `MaterialType`.
pub fn delete(caller: &User, mut subject: MaterialType, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::CatalogDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("material_type".into()))?;
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
    fn can_create() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Logistics]), &now);
        let id = MaterialTypeID::new(3);
        let mods = create(&user, id.clone(), "GALVANIZADO", true, &now).unwrap().into_vec();
        let model = mods[0].clone().expect_op::<MaterialType>(Op::Create).unwrap();
        assert_eq!(model.id(), &id);
        assert_eq!(model.name(), "GALVANIZADO");

        let user2 = make_user(&UserID::new(2), None, &now);
        let res = create(&user2, id.clone(), "GALVANIZADO", true, &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));
    }

    #[test]
    fn can_update() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Logistics]), &now);
        let mods = create(&user, MaterialTypeID::new(3), "GALVANISADO", true, &now).unwrap().into_vec();
        let subject = mods[0].clone().expect_op::<MaterialType>(Op::Create).unwrap();

        let now2 = util::time::now();
        let mods = update(&user, subject, Some("GALVANIZADO".into()), None, &now2).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<MaterialType>(Op::Update).unwrap();
        assert_eq!(subject2.name(), "GALVANIZADO");
        assert_eq!(subject2.updated(), &now2);
    }

    #[test]
    fn can_delete() {
        let now = util::time::now();
        let user = make_user(&UserID::new(1), Some(vec![Role::Logistics]), &now);
        let mods = create(&user, MaterialTypeID::new(3), "GALVANIZADO", true, &now).unwrap().into_vec();
        let subject = mods[0].clone().expect_op::<MaterialType>(Op::Create).unwrap();

        let mods = delete(&user, subject.clone(), &now).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<MaterialType>(Op::Delete).unwrap();
        assert!(subject2.is_deleted());

        double_deleted_tester!(subject, "material_type", |subject| delete(&user, subject, &now));
    }
}
