//! Products tie the catalogs together. The interesting part is that a
//! product's `assembled_description` is derived state: every save runs the
//! attribute set back through the [description assembler][assembler] so the
//! persisted string can never drift from the attributes.
//!
//! [assembler]: ../../description/

use chrono::{DateTime, Utc};
use crate::{
    access::Permission,
    description::{self, AssembleOptions, Catalogs},
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        product::{Product, ProductAttributes, ProductID},
        user::User,
    },
};

/// Create a new `Product` from its attribute set. The assembled description
/// is computed here, not taken from the caller.
pub fn create(caller: &User, id: ProductID, attributes: ProductAttributes, catalogs: &Catalogs, options: &AssembleOptions, active: bool, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ProductCreate)?;
    let assembled = description::assemble(&attributes, catalogs, options);
    let model = Product::builder()
        .id(id)
        .attributes(attributes)
        .assembled_description(assembled.upper())
        .active(active)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Update an existing `Product`, recomputing its assembled description.
pub fn update(caller: &User, mut subject: Product, attributes: Option<ProductAttributes>, catalogs: &Catalogs, options: &AssembleOptions, active: Option<bool>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ProductUpdate)?;
    if let Some(attributes) = attributes {
        subject.set_attributes(attributes);
    }
    if let Some(active) = active {
        subject.set_active(active);
    }
    let assembled = description::assemble(subject.attributes(), catalogs, options);
    subject.set_assembled_description(assembled.upper());
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Delete a `Product`.
pub fn delete(caller: &User, mut subject: Product, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::ProductDelete)?;
    if subject.is_deleted() {
        Err(Error::ObjectIsDeleted("product".into()))?;
    }
    subject.set_deleted(Some(now.clone()));
    Ok(Modifications::new_single(Op::Delete, subject))
}
