//! Products and the attribute set their assembled description derives from.
//!
//! A product's editable fields live in [ProductAttributes], which is exactly
//! the working set the product form mutates. The persisted
//! `assembled_description` is derived from the attributes by the
//! [description assembler][assembler] on every save; it is never edited
//! directly.
//!
//! [assembler]: ../../description/

use crate::{
    models::{
        brand::BrandID,
        color::ColorID,
        country::CountryID,
        family::FamilyID,
        material_type::MaterialTypeID,
        storage_type::StorageTypeID,
        subfamily::SubfamilyID,
        unit_of_measure::UnitOfMeasureID,
    },
};
use getset::{Getters, Setters};
use serde::{Serialize, Deserialize};

/// One named measurement: a free-text magnitude plus an optional unit
/// reference. The value stays a string because it comes straight from a form
/// field; a blank value means the measurement is absent.
#[derive(Clone, Debug, Default, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
pub struct Dimension {
    /// The magnitude as entered, ie "5" or "3.5".
    value: String,
    /// The unit this magnitude is expressed in.
    unit_id: Option<UnitOfMeasureID>,
}

impl Dimension {
    /// Create a new dimension.
    pub fn new<T: Into<String>>(value: T, unit_id: Option<UnitOfMeasureID>) -> Self {
        Self {
            value: value.into(),
            unit_id,
        }
    }

    /// A dimension with a blank value contributes nothing.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// The six named measurements a product can carry, plus a free-text note that
/// trails the whole block. Render order is fixed regardless of which fields
/// are populated: diameter, width, height, length, thickness, angle.
#[derive(Clone, Debug, Default, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
pub struct DimensionSet {
    diameter: Dimension,
    width: Dimension,
    height: Dimension,
    length: Dimension,
    thickness: Dimension,
    angle: Dimension,
    /// Free text appended after the measurements, ie "SCH40".
    extra_note: Option<String>,
}

impl DimensionSet {
    /// The measurements in their fixed render order.
    pub fn in_order(&self) -> [&Dimension; 6] {
        [&self.diameter, &self.width, &self.height, &self.length, &self.thickness, &self.angle]
    }

    /// Whether any measurement carries a value.
    pub fn has_values(&self) -> bool {
        self.in_order().iter().any(|d| !d.is_blank())
    }
}

/// The editable attribute set the assembled description derives from. Each
/// `apply_*` flag turns a facet on; the facet still only renders when its
/// reference resolves against the caller's catalogs.
#[derive(Clone, Debug, PartialEq, Getters, Setters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub", set = "pub")]
pub struct ProductAttributes {
    /// Required free-text base description.
    base_description: String,
    /// Optional free-text continuation of the base description.
    #[builder(setter(strip_option), default)]
    extended_description: Option<String>,
    /// The family selected on the form. Subfamily resolution is scoped to it.
    #[builder(setter(strip_option), default)]
    family_id: Option<FamilyID>,
    /// Whether the subfamily name prefixes the description.
    #[builder(default)]
    apply_subfamily: bool,
    #[builder(setter(strip_option), default)]
    subfamily_id: Option<SubfamilyID>,
    /// Material type renders whenever it resolves past the reserved default,
    /// no apply flag involved.
    #[builder(setter(strip_option), default)]
    material_type_id: Option<MaterialTypeID>,
    #[builder(default)]
    dimensions: DimensionSet,
    #[builder(default)]
    apply_brand: bool,
    #[builder(setter(strip_option), default)]
    brand_id: Option<BrandID>,
    #[builder(default)]
    apply_origin: bool,
    #[builder(setter(strip_option), default)]
    origin_id: Option<CountryID>,
    #[builder(default)]
    apply_color: bool,
    #[builder(setter(strip_option), default)]
    color_id: Option<ColorID>,
    #[builder(default)]
    apply_unit_of_measure: bool,
    #[builder(setter(strip_option), default)]
    unit_of_measure_id: Option<UnitOfMeasureID>,
    #[builder(default)]
    apply_storage_type: bool,
    #[builder(setter(strip_option), default)]
    storage_type_id: Option<StorageTypeID>,
}

impl ProductAttributes {
    pub fn builder() -> ProductAttributesBuilder {
        ProductAttributesBuilder::default()
    }
}

megui_model! {
    /// A product in the catalog: its editable attribute set plus the derived
    /// description persisted alongside it.
    pub struct Product {
        /// The editable working set.
        attributes: ProductAttributes,
        /// The derived display string. Recomputed from `attributes` by the
        /// product transactions on every save.
        assembled_description: String,
    }
    ProductID
    ProductBuilder
}
