//! The access module defines the various top-level permissions within the
//! system and the roles that contain those permissions.
//!
//! Roles can have multiple Permission objects. Permissions are additive,
//! meaning everyone starts with *no* permissions (returning
//! [Error::InsufficientPrivileges][err_priv]) and permissions are added
//! (allowed) from there.
//!
//! Note that the authoritative enforcement of these rules lives in the
//! backend; what we assert here is the same optimistic check the admin
//! screens perform before issuing a request.
//!
//! [err_priv]: ../error/enum.Error.html#variant.InsufficientPrivileges

use crate::{
    error::{Error, Result},
};
use serde::{Serialize, Deserialize};

/// Define the system-wide permissions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Permission {
    All,
    AllBut(Vec<Permission>),

    AdvanceCreate,
    AdvanceDelete,
    AdvanceLiquidate,
    AdvanceUpdate,

    CashMovementApply,
    CashMovementCreate,
    CashMovementDelete,
    CashMovementUpdate,

    CatalogCreate,
    CatalogDelete,
    CatalogUpdate,

    CostCenterCreate,
    CostCenterDelete,
    CostCenterUpdate,

    ProductCreate,
    ProductDelete,
    ProductUpdate,

    UserAdminCreate,
    UserAdminUpdate,
    UserCreate,
    UserDelete,
    UserSetRoles,
    UserUpdate,
}

/// Define the system-wide roles users can have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Role {
    SuperAdmin,
    IdentityAdmin,
    Treasury,
    Logistics,
    User,
    Guest,
}

impl Role {
    /// For a given role, return the permissions that role has access to.
    pub fn permissions(&self) -> Vec<Permission> {
        match *self {
            Role::SuperAdmin => {
                vec![Permission::All]
            }
            Role::IdentityAdmin => {
                vec![
                    Permission::UserAdminCreate,
                    Permission::UserAdminUpdate,
                    Permission::UserDelete,
                    Permission::UserSetRoles,
                    Permission::UserUpdate,
                ]
            }
            Role::Treasury => {
                vec![
                    Permission::AdvanceCreate,
                    Permission::AdvanceUpdate,
                    Permission::AdvanceDelete,
                    Permission::AdvanceLiquidate,
                    Permission::CashMovementCreate,
                    Permission::CashMovementUpdate,
                    Permission::CashMovementDelete,
                    Permission::CashMovementApply,
                    Permission::CostCenterCreate,
                    Permission::CostCenterUpdate,
                    Permission::CostCenterDelete,
                ]
            }
            Role::Logistics => {
                vec![
                    Permission::CatalogCreate,
                    Permission::CatalogUpdate,
                    Permission::CatalogDelete,
                    Permission::ProductCreate,
                    Permission::ProductUpdate,
                    Permission::ProductDelete,
                ]
            }
            Role::User => {
                vec![
                    Permission::UserUpdate,
                    Permission::UserDelete,
                ]
            }
            Role::Guest => {
                vec![
                    Permission::UserCreate,
                ]
            }
        }
    }

    /// Determine if a role has a specific permission.
    pub fn can(&self, perm: &Permission) -> bool {
        for p in &self.permissions() {
            match p {
                Permission::All => {
                    return true;
                }
                Permission::AllBut(x) => {
                    if x.contains(perm) {
                        return false;
                    }
                    return true;
                }
                _ => {
                    if p == perm {
                        return true
                    }
                }
            }
        }
        false
    }
}

/// Check if a guest can perform an action.
pub fn guest_check(perm: Permission) -> Result<()> {
    if (Role::Guest).can(&perm) {
        Ok(())
    } else {
        Err(Error::InsufficientPrivileges)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn permissions_work() {
        let super_admin = Role::SuperAdmin;
        assert!(super_admin.can(&Permission::All));
        assert!(super_admin.can(&Permission::UserCreate));
        assert!(super_admin.can(&Permission::ProductUpdate));
        assert!(super_admin.can(&Permission::CashMovementApply));
        assert!(super_admin.can(&Permission::AdvanceLiquidate));

        let treasury = Role::Treasury;
        assert!(treasury.can(&Permission::CashMovementCreate));
        assert!(treasury.can(&Permission::CashMovementApply));
        assert!(treasury.can(&Permission::AdvanceLiquidate));
        assert!(treasury.can(&Permission::CostCenterUpdate));
        assert!(!treasury.can(&Permission::ProductCreate));
        assert!(!treasury.can(&Permission::CatalogUpdate));
        assert!(!treasury.can(&Permission::UserSetRoles));

        let logistics = Role::Logistics;
        assert!(logistics.can(&Permission::ProductCreate));
        assert!(logistics.can(&Permission::CatalogDelete));
        assert!(!logistics.can(&Permission::CashMovementCreate));
        assert!(!logistics.can(&Permission::AdvanceCreate));

        let guest = Role::Guest;
        assert!(guest.can(&Permission::UserCreate));
        assert!(!guest.can(&Permission::UserUpdate));
    }

    #[test]
    fn guest_check_works() {
        assert!(guest_check(Permission::UserCreate).is_ok());
        assert_eq!(guest_check(Permission::ProductCreate), Err(Error::InsufficientPrivileges));
    }
}
