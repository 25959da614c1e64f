//! Countries of provenance for the product catalog.

megui_model! {
    /// A country, used as a product's origin. The `name` field holds the
    /// display form the description assembler renders (the demonym, ie
    /// "CHINO" rather than "CHINA", as the catalog maintainers load it).
    pub struct Country {
        /// Display name rendered into assembled descriptions.
        name: String,
    }
    CountryID
    CountryBuilder
}
