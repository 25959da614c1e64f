//! Cost centers ("centros de costo") are the accounting dimension tagged onto
//! financial movement lines. They carry no math of their own here; they are a
//! catalog the treasury screens resolve against.

megui_model! {
    /// A cost center.
    pub struct CostCenter {
        /// The cost center's accounting code, ie "02.01.03".
        code: String,
        /// The cost center's display name.
        name: String,
    }
    CostCenterID
    CostCenterBuilder
}
