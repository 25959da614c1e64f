//! A set of utilities for working with the numbers that move through the
//! treasury side of the system.

/// Create a number.
///
/// This is mostly a wrapper around different number types that makes it easier
/// to swap out amount types project-wide without having to change each
/// instance by hand, but can also be used by callers of the core to create
/// amounts more seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
