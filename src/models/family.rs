//! Families are the top level of the product taxonomy. Subfamilies hang off
//! of a family and products reference both.

megui_model! {
    /// A product family, ie "FERRETERIA" or "REPUESTOS".
    pub struct Family {
        /// The family's display name.
        name: String,
    }
    FamilyID
    FamilyBuilder
}
