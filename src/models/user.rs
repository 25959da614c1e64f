//! The user model describes an admin-system user and holds the roles used for
//! the optimistic permission checks the transactions perform.

use crate::{
    access::{Permission, Role},
    error::{Error, Result},
};

megui_model! {
    /// A user of the admin system.
    pub struct User {
        /// The roles this user has, which in turn describe the permissions
        /// the user is granted.
        roles: Vec<Role>,
        /// Login email
        email: String,
        /// Full display name
        name: String,
    }
    UserID
    UserBuilder
}

impl User {
    /// Determine if a user can perform an action. Returns an error if not,
    /// so transactions can bail with `?`.
    pub fn access_check(&self, permission: Permission) -> Result<()> {
        for role in self.roles() {
            if role.can(&permission) {
                return Ok(());
            }
        }
        Err(Error::InsufficientPrivileges)
    }
}
