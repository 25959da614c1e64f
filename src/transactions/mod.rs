//! Transactions are the primary interface for interacting with the admin
//! core. They are responsible for taking the needed information (which must
//! be passed in) and returning a list of modifications that the caller is
//! responsible for applying to whatever storage medium they are using.
//!
//! The high-level picture here is that we're creating a functional API for
//! the models within the system and the interactions between them. The logic
//! all lives in the transactions (and in some cases the models) but storage
//! happens somewhere else and we don't touch it here.
//!
//! In the deployed system "somewhere else" is the ERP backend: the admin
//! screens run these transactions optimistically, then ship the resulting
//! modifications over the wire. The backend re-validates everything it is
//! authoritative for (permissions, liquidation immutability, record state).

pub mod brand;
pub mod cash_movement;
pub mod color;
pub mod cost_center;
pub mod country;
pub mod expense_advance;
pub mod family;
pub mod material_type;
pub mod product;
pub mod storage_type;
pub mod subfamily;
pub mod unit_of_measure;
pub mod user;
