//! The description assembler builds a product's single display string (the
//! "descripción armada") from its attribute set and the catalog lookup
//! tables the caller supplies.
//!
//! The assembler is a pure function: no fetching, no mutation, no failure
//! mode. A reference that does not resolve against the supplied catalogs
//! simply leaves its facet out of the result. Facets always render in the
//! same fixed order no matter how the attributes were edited:
//!
//! 1. subfamily name (when applied and resolved within the selected family)
//! 2. base description, extended description
//! 3. material type (when resolved past the reserved default entry)
//! 4. dimensions: diameter, width, height, length, thickness, angle, each as
//!    `value symbol`, then the extra dimension note
//! 5. brand
//! 6. origin
//! 7. color
//! 8. unit of measure
//! 9. storage type
//!
//! Screens recompute this on every relevant field change, so it has to stay
//! cheap: lookups are linear scans over the small in-memory catalogs.

use crate::{
    models::{
        brand::{Brand, BrandID},
        color::{Color, ColorID},
        country::{Country, CountryID},
        material_type::{MaterialType, MaterialTypeID},
        product::ProductAttributes,
        storage_type::{StorageType, StorageTypeID},
        subfamily::{Subfamily, SubfamilyID},
        unit_of_measure::{UnitOfMeasure, UnitOfMeasureID},
    },
};
use serde::{Serialize, Deserialize};

/// Catalog entries with this id are the backend-seeded "unspecified" rows.
const RESERVED_DEFAULT_ID: i64 = 1;

/// The catalog lookup tables the assembler resolves references against. The
/// assembler only ever reads these; fetching and caching them is the
/// caller's business. An empty table just means none of its references
/// resolve.
#[derive(Clone, Debug, Default)]
pub struct Catalogs<'a> {
    subfamilies: &'a [Subfamily],
    material_types: &'a [MaterialType],
    brands: &'a [Brand],
    countries: &'a [Country],
    colors: &'a [Color],
    units_of_measure: &'a [UnitOfMeasure],
    storage_types: &'a [StorageType],
}

impl<'a> Catalogs<'a> {
    pub fn new(subfamilies: &'a [Subfamily], material_types: &'a [MaterialType], brands: &'a [Brand], countries: &'a [Country], colors: &'a [Color], units_of_measure: &'a [UnitOfMeasure], storage_types: &'a [StorageType]) -> Self {
        Self {
            subfamilies,
            material_types,
            brands,
            countries,
            colors,
            units_of_measure,
            storage_types,
        }
    }

    pub fn subfamily(&self, id: SubfamilyID) -> Option<&'a Subfamily> {
        self.subfamilies.iter().find(|x| x.id() == &id)
    }

    pub fn material_type(&self, id: MaterialTypeID) -> Option<&'a MaterialType> {
        self.material_types.iter().find(|x| x.id() == &id)
    }

    pub fn brand(&self, id: BrandID) -> Option<&'a Brand> {
        self.brands.iter().find(|x| x.id() == &id)
    }

    pub fn country(&self, id: CountryID) -> Option<&'a Country> {
        self.countries.iter().find(|x| x.id() == &id)
    }

    pub fn color(&self, id: ColorID) -> Option<&'a Color> {
        self.colors.iter().find(|x| x.id() == &id)
    }

    pub fn unit_of_measure(&self, id: UnitOfMeasureID) -> Option<&'a UnitOfMeasure> {
        self.units_of_measure.iter().find(|x| x.id() == &id)
    }

    pub fn storage_type(&self, id: StorageTypeID) -> Option<&'a StorageType> {
        self.storage_types.iter().find(|x| x.id() == &id)
    }
}

/// Knobs for the parts of the algorithm the product screens disagree on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembleOptions {
    /// When set, the reserved default color (id 1) never renders, mirroring
    /// the guard material types always have. Off by default, matching the
    /// general product form.
    pub exclude_default_color: bool,
}

/// An assembled description. Holds the naturally-cased concatenation;
/// screens that show (or persist) the canonical uppercase form call
/// [upper](#method.upper).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assembled(String);

impl Assembled {
    /// The assembled string as built from the attribute values.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The assembled string folded to uppercase.
    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }

    /// Consume into the raw string.
    pub fn into_raw(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Assembled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Assemble a product description from its attributes.
///
/// Never fails: an absent or unresolvable reference means its facet is left
/// out. The result is trimmed and carries no doubled spaces.
pub fn assemble(attrs: &ProductAttributes, catalogs: &Catalogs, options: &AssembleOptions) -> Assembled {
    let mut fragments: Vec<String> = Vec::with_capacity(8);

    // the subfamily prefix only counts when it resolves *within* the family
    // selected on the form. a stale reference left over from a family switch
    // must not leak into the description.
    if *attrs.apply_subfamily() {
        if let Some(subfamily) = attrs.subfamily_id().and_then(|id| catalogs.subfamily(id)) {
            if attrs.family_id().as_ref() == Some(subfamily.family_id()) {
                fragments.push(subfamily.name().clone());
            }
        }
    }

    fragments.push(attrs.base_description().clone());
    if let Some(extended) = attrs.extended_description() {
        fragments.push(extended.clone());
    }

    // material type has no apply flag; id 1 is the seeded "unspecified" row
    // and never renders
    if let Some(material) = attrs.material_type_id().and_then(|id| catalogs.material_type(id)) {
        if material.id().as_i64() > RESERVED_DEFAULT_ID {
            fragments.push(material.name().clone());
        }
    }

    let dims = attrs.dimensions();
    for dim in dims.in_order().iter() {
        if dim.is_blank() {
            continue;
        }
        fragments.push(dim.value().clone());
        if let Some(unit) = dim.unit_id().and_then(|id| catalogs.unit_of_measure(id)) {
            fragments.push(unit.symbol().clone());
        }
    }
    if let Some(note) = dims.extra_note() {
        fragments.push(note.clone());
    }

    if *attrs.apply_brand() {
        if let Some(brand) = attrs.brand_id().and_then(|id| catalogs.brand(id)) {
            fragments.push(brand.name().clone());
        }
    }

    if *attrs.apply_origin() {
        if let Some(country) = attrs.origin_id().and_then(|id| catalogs.country(id)) {
            fragments.push(country.name().clone());
        }
    }

    if *attrs.apply_color() {
        if let Some(color) = attrs.color_id().and_then(|id| catalogs.color(id)) {
            if !options.exclude_default_color || color.id().as_i64() > RESERVED_DEFAULT_ID {
                fragments.push(color.name().clone());
            }
        }
    }

    if *attrs.apply_unit_of_measure() {
        if let Some(unit) = attrs.unit_of_measure_id().and_then(|id| catalogs.unit_of_measure(id)) {
            fragments.push(unit.symbol().clone());
        }
    }

    if *attrs.apply_storage_type() {
        if let Some(storage) = attrs.storage_type_id().and_then(|id| catalogs.storage_type(id)) {
            fragments.push(storage.name().clone());
        }
    }

    // fragments may carry their own inner whitespace (free-text fields), so
    // normalize the whole thing in one pass
    let joined = fragments.join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    Assembled(collapsed)
}
