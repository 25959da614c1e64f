//! Subfamilies are the second level of the product taxonomy, always scoped to
//! a parent family. The description assembler uses that scoping: a subfamily
//! only resolves when its parent family matches the product's family.

use crate::{
    models::{
        family::FamilyID,
    },
};

megui_model! {
    /// A product subfamily, namespaced under its parent family. We have no
    /// interest in a free-floating "ACERO" subfamily; it only means something
    /// within the family that declared it.
    pub struct Subfamily {
        /// The parent family this subfamily belongs to.
        family_id: FamilyID,
        /// The subfamily's display name.
        name: String,
    }
    SubfamilyID
    SubfamilyBuilder
}
