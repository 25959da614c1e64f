//! Storage types describe how a product must be kept in the warehouse
//! (ambient, refrigerated, flammables cabinet, ...).

megui_model! {
    /// A storage type.
    pub struct StorageType {
        /// The storage type's display name.
        name: String,
    }
    StorageTypeID
    StorageTypeBuilder
}
