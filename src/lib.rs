/// A macro that standardizes including, exporting, and creating wrapper type(s)
/// for our heroic models.
macro_rules! load_models {
    (
        @pub use
        $( ($path:ident, $model:ident, $($extratypes:ident),*), )*
    ) => {
        pub use models::{
            $( $path::{$model, $($extratypes),*}, )*
        };
    };

    (
        @pub mod
        $( ($path:ident, $($_rest:tt)*), )*
    ) => {
        $(
            pub mod $path;
        )*
    };

    // create an enum that wraps our models in CUD
    (
        @pub enum $enumname:ident
        $( ($path:ident, $model:ident, $($_extratypes:ident),*), )*
    ) => {
        /// An enum that allows returning *any* model type. This is mainly used
        /// along with [Op](enum.Op.html) to specify modifications (ie
        /// `[Op::Create, User]`).
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum $enumname {
            $(
                $model(crate::models::$path::$model),
            )*
        }

        $(
            impl From<crate::models::$path::$model> for $enumname {
                fn from(model: crate::models::$path::$model) -> Self {
                    $enumname::$model(model)
                }
            }

            impl std::convert::TryFrom<$enumname> for crate::models::$path::$model {
                type Error = crate::error::Error;

                fn try_from(wrapper: $enumname) -> std::result::Result<Self, Self::Error> {
                    match wrapper {
                        $enumname::$model(model) => Ok(model),
                        _ => Err(crate::error::Error::WrongModelType),
                    }
                }
            }
        )*
    };

    // entry point
    ($($load_type:tt)*) => {
        load_models! {
            @$($load_type)*
            // kind of trying to load based on dependency order here, but it's not perfect.
            (user, User, UserID),
            (family, Family, FamilyID),
            (subfamily, Subfamily, SubfamilyID),
            (material_type, MaterialType, MaterialTypeID),
            (brand, Brand, BrandID),
            (color, Color, ColorID),
            (country, Country, CountryID),
            (unit_of_measure, UnitOfMeasure, UnitOfMeasureID),
            (storage_type, StorageType, StorageTypeID),
            (cost_center, CostCenter, CostCenterID),
            (product, Product, ProductID, ProductAttributes, DimensionSet, Dimension),
            (expense_advance, ExpenseAdvance, ExpenseAdvanceID, AdvanceItem, AdvanceSource),
            (cash_movement, CashMovement, CashMovementID, CashMovementLine, CashMovementKind),
        }
    };
}

pub mod error;
#[macro_use]
mod util;
pub mod access;
pub mod models;
pub mod description;
pub mod transactions;

load_models!{ pub use }
