//! The models module houses all of the entities the admin system operates on:
//! the master-data catalogs, products, cost centers, cash movements, and
//! expense advances ("entregas a rendir").
//!
//! Models are constructed through builders, carry audit timestamps, and are
//! soft-deleted. They hold no storage logic whatsoever; see the
//! [transactions][tx] module for how they get created and changed.
//!
//! [tx]: ../transactions/

use crate::error::{Error, Result};
use serde::{Serialize, Deserialize};
use std::convert::TryFrom;

#[macro_use]
mod lib;

load_models!{ pub mod }

load_models!{ pub enum Model }

/// The different operations that can be performed on a model. Returned from
/// transactions alongside the model the operation applies to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// Create the model
    Create,
    /// Update the model
    Update,
    /// Delete the model
    Delete,
}

/// A pairing of an operation and a model, the unit the caller's storage layer
/// actually applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    op: Op,
    model: Model,
}

impl Modification {
    /// The operation of this modification
    pub fn op(&self) -> &Op {
        &self.op
    }

    /// The model of this modification
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Unwrap this modification into the given model type, verifying the
    /// operation matches what the caller expects. Mostly useful in tests.
    pub fn expect_op<T: TryFrom<Model, Error = Error>>(self, op: Op) -> Result<T> {
        if self.op != op {
            Err(Error::OpMismatch)?;
        }
        T::try_from(self.model)
    }
}

/// An ordered list of modifications, the return value of every transaction.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Modifications {
    modifications: Vec<Modification>,
}

impl Modifications {
    /// Create a new, empty modification set
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a modification set with one modification in it
    pub fn new_single<T: Into<Model>>(op: Op, model: T) -> Self {
        let mut mods = Self::new();
        mods.push(op, model);
        mods
    }

    /// Push a modification onto the set
    pub fn push<T: Into<Model>>(&mut self, op: Op, model: T) {
        self.modifications.push(Modification { op, model: model.into() });
    }

    /// Push an already-built modification onto the set
    pub fn push_raw(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Consume the set, returning the inner modification list
    pub fn into_vec(self) -> Vec<Modification> {
        self.modifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            family::{Family, FamilyID},
            user::User,
        },
        util,
    };

    fn make_family(now: &chrono::DateTime<chrono::Utc>) -> Family {
        Family::builder()
            .id(FamilyID::new(8))
            .name("FERRETERIA")
            .active(true)
            .created(now.clone())
            .updated(now.clone())
            .build().unwrap()
    }

    #[test]
    fn modifications_push_and_unwrap() {
        let now = util::time::now();
        let family = make_family(&now);

        let mods = Modifications::new_single(Op::Create, family.clone()).into_vec();
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].op(), &Op::Create);

        let unwrapped = mods[0].clone().expect_op::<Family>(Op::Create).unwrap();
        assert_eq!(unwrapped, family);
    }

    #[test]
    fn expect_op_guards() {
        let now = util::time::now();
        let family = make_family(&now);

        let mods = Modifications::new_single(Op::Update, family.clone()).into_vec();
        let res = mods[0].clone().expect_op::<Family>(Op::Delete);
        assert_eq!(res, Err(Error::OpMismatch));

        let res = mods[0].clone().expect_op::<User>(Op::Update);
        assert_eq!(res, Err(Error::WrongModelType));
    }
}
