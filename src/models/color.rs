//! Colors for the product catalog. Like material types, the backend seeds
//! id 1 as the "unspecified" entry; whether the description assembler skips
//! it is configurable (see [AssembleOptions][opts]).
//!
//! [opts]: ../../description/struct.AssembleOptions.html

megui_model! {
    /// A product color.
    pub struct Color {
        /// The color's display name.
        name: String,
    }
    ColorID
    ColorBuilder
}
