//! Brands for the product catalog.

megui_model! {
    /// A product brand.
    pub struct Brand {
        /// The brand's display name.
        name: String,
    }
    BrandID
    BrandBuilder
}
