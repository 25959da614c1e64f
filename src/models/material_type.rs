//! Material types classify what a product is made of. The backend seeds id 1
//! as the "unspecified" entry; the description assembler never renders it.

megui_model! {
    /// A material type, ie "ACERO INOXIDABLE" or "PVC". Id 1 is reserved for
    /// the unspecified default.
    pub struct MaterialType {
        /// The material's display name.
        name: String,
    }
    MaterialTypeID
    MaterialTypeBuilder
}
