//! Users are the admin-system operators everything else gets permission
//! checked against.
//!
//! See the [user model.][1]
//!
//! [1]: ../../models/user/index.html

use chrono::{DateTime, Utc};
use crate::{
    access::{Permission, Role},
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        user::{User, UserID},
    },
};

/// Create a user.
pub fn create<T: Into<String>>(caller: &User, id: UserID, roles: Vec<Role>, email: T, name: T, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::UserCreate)?;
    let model = User::builder()
        .id(id)
        .roles(roles)
        .email(email)
        .name(name)
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update a user's basic info.
pub fn update(caller: &User, mut subject: User, email: Option<String>, name: Option<String>, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::UserUpdate)?;
    if let Some(email) = email {
        subject.set_email(email);
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

/// Update a user's roles.
pub fn set_roles(caller: &User, mut subject: User, roles: Vec<Role>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::UserSetRoles)?;
    subject.set_roles(roles);
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a user.
pub fn delete(caller: &User, mut subject: User, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::UserDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("user".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{self, test::*};

    #[test]
    fn can_create() {
        let now = util::time::now();
        let admin = make_user(&UserID::new(1), Some(vec![Role::SuperAdmin]), &now);
        let id = UserID::new(20);
        let mods = create(&admin, id.clone(), vec![Role::Treasury], "caja@megui.example", "Rosa P.", true, &now).unwrap().into_vec();
        assert_eq!(mods.len(), 1);

        let model = mods[0].clone().expect_op::<User>(Op::Create).unwrap();
        assert_eq!(model.id(), &id);
        assert_eq!(model.roles(), &vec![Role::Treasury]);
        assert_eq!(model.email(), "caja@megui.example");
        assert_eq!(model.name(), "Rosa P.");

        // guests can self-register
        let guest = make_user(&UserID::new(2), Some(vec![Role::Guest]), &now);
        assert!(create(&guest, UserID::new(21), vec![Role::User], "x@y.z", "x", true, &now).is_ok());

        let nobody = make_user(&UserID::new(3), Some(vec![]), &now);
        let res = create(&nobody, UserID::new(22), vec![Role::User], "x@y.z", "x", true, &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));
    }

    #[test]
    fn can_update_and_set_roles() {
        let now = util::time::now();
        let admin = make_user(&UserID::new(1), Some(vec![Role::SuperAdmin]), &now);
        let subject = make_user(&UserID::new(20), Some(vec![Role::User]), &now);

        let now2 = util::time::now();
        let mods = update(&admin, subject.clone(), Some("nuevo@megui.example".into()), None, None, &now2).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<User>(Op::Update).unwrap();
        assert_eq!(subject2.email(), "nuevo@megui.example");
        assert_eq!(subject2.name(), subject.name());
        assert_eq!(subject2.updated(), &now2);

        let mods = set_roles(&admin, subject2, vec![Role::Logistics], &now2).unwrap().into_vec();
        let subject3 = mods[0].clone().expect_op::<User>(Op::Update).unwrap();
        assert_eq!(subject3.roles(), &vec![Role::Logistics]);

        let peon = make_user(&UserID::new(5), None, &now);
        let res = set_roles(&peon, subject.clone(), vec![Role::SuperAdmin], &now2);
        assert_eq!(res, Err(Error::InsufficientPrivileges));
    }

    #[test]
    fn can_delete() {
        let now = util::time::now();
        let admin = make_user(&UserID::new(1), Some(vec![Role::SuperAdmin]), &now);
        let subject = make_user(&UserID::new(20), None, &now);

        let mods = delete(&admin, subject.clone(), &now).unwrap().into_vec();
        let subject2 = mods[0].clone().expect_op::<User>(Op::Delete).unwrap();
        assert!(subject2.is_deleted());

        double_deleted_tester!(subject, "user", |subject| delete(&admin, subject, &now));
    }
}
