//! Units of measure, referenced by product dimensions and by the product's
//! own sale unit.

megui_model! {
    /// A unit of measure, ie "MILIMETROS" with symbol "MM".
    pub struct UnitOfMeasure {
        /// The unit's full display name.
        name: String,
        /// The short symbol rendered into assembled descriptions.
        symbol: String,
    }
    UnitOfMeasureID
    UnitOfMeasureBuilder
}
