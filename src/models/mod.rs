use serde::{Deserialize, Serialize};

pub mod values;

pub use values::{parse_price, parse_size, Area, Price};

/// Core listing data model.
///
/// One unit of sellable/rentable real estate as it comes out of the
/// spreadsheet. Every field is a display string; `price` and `size` are
/// converted to comparable numbers on demand via [`Price`] and [`Area`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Transaction or property category label (매매, 아파트, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the building/complex.
    pub complex: String,
    /// Floor-area class, possibly with a trailing unit glyph or A/B suffix.
    pub size: String,
    /// Building/floor descriptor.
    pub unit: String,
    /// "8억 5,000" (lump sum) or "5,000/250" (deposit/monthly).
    pub price: String,
    /// Free-text descriptive tags.
    pub features: String,
    /// Coarse grouping tag.
    pub category: String,
}
