//! Upstream response types.
//!
//! Every field is optional: neither upstream documents a contract, and the
//! game-data API drops or nulls nested objects freely. Field names are the
//! lowercased upstream names because [`crate::parse`] lowercases every key
//! before deserializing, which makes matching case-insensitive.
//!
//! ## Shop layouts
//! The shop comes in two layouts that cannot be parsed from the same
//! payload:
//!
//! - `/v2/shop`: `data.entries[]`, each with `regularPrice`, `finalPrice`,
//!   an optional `bundle.name`, an optional `section.name`, and `items[]`.
//! - `/v2/shop/br`: `data.sections[]`, each with `name` and its own
//!   `entries[]` carrying `regularPrice` and `items[]` only.
//!
//! Entries and sections are kept as raw [`serde_json::Value`]s here and
//! decoded one at a time during normalization, so one malformed entry does
//! not discard the entries before it.

use fnbot_core::ShopLayout;
use serde::Deserialize;

use crate::error::ApiError;
use crate::parse::decode;

/// Envelope used by the game-data API: `{"status": 200, "data": {...}}`.
///
/// Missing `Option` fields deserialize to `None` without `#[serde(default)]`,
/// which would otherwise demand `T: Default`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Option<i64>,
    pub data: Option<T>,
}

// ---------------------------------------------------------------------------
// /v1/map
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MapData {
    #[serde(default)]
    pub images: Option<MapImages>,
}

#[derive(Debug, Deserialize)]
pub struct MapImages {
    /// Map image with points of interest labelled.
    #[serde(default)]
    pub pois: Option<String>,
}

pub type MapRecord = ApiResponse<MapData>;

// ---------------------------------------------------------------------------
// /v2/shop, /v2/shop/br
// ---------------------------------------------------------------------------

/// Any object whose only interesting field is `name` (bundles, sections,
/// items).
#[derive(Debug, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShopEntriesData {
    #[serde(default)]
    pub entries: Option<Vec<serde_json::Value>>,
}

/// A flat-layout entry.
#[derive(Debug, Deserialize)]
pub struct ShopEntry {
    #[serde(default, rename = "regularprice")]
    pub regular_price: Option<i64>,
    #[serde(default, rename = "finalprice")]
    pub final_price: Option<i64>,
    #[serde(default)]
    pub bundle: Option<Named>,
    #[serde(default)]
    pub section: Option<Named>,
    #[serde(default)]
    pub items: Option<Vec<Named>>,
}

#[derive(Debug, Deserialize)]
pub struct ShopSectionsData {
    #[serde(default)]
    pub sections: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct ShopSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub entries: Option<Vec<serde_json::Value>>,
}

/// An entry nested under a section. Carries no bundle or section of its own.
#[derive(Debug, Deserialize)]
pub struct SectionEntry {
    #[serde(default, rename = "regularprice")]
    pub regular_price: Option<i64>,
    #[serde(default)]
    pub items: Option<Vec<Named>>,
}

/// A shop payload tagged with the layout it was decoded as.
#[derive(Debug)]
pub enum ShopRecord {
    Entries(ApiResponse<ShopEntriesData>),
    Sections(ApiResponse<ShopSectionsData>),
}

impl ShopRecord {
    /// Decodes `body` as the given layout. Never attempts the other one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Deserialize`] if the envelope does not match.
    pub fn decode(layout: ShopLayout, body: &str) -> Result<Self, ApiError> {
        match layout {
            ShopLayout::Entries => decode(body, "shop(entries)").map(ShopRecord::Entries),
            ShopLayout::Sections => decode(body, "shop(sections)").map(ShopRecord::Sections),
        }
    }
}

// ---------------------------------------------------------------------------
// status page summary.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StatusRecord {
    #[serde(default)]
    pub status: Option<StatusInfo>,
    #[serde(default)]
    pub components: Option<Vec<ComponentRecord>>,
    /// Only the count matters, so incidents stay untyped.
    #[serde(default)]
    pub incidents: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct StatusInfo {
    #[serde(default)]
    pub indicator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComponentRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// /v2/news/br
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NewsData {
    #[serde(default)]
    pub motds: Option<Vec<Motd>>,
}

/// "Message of the day" news tile.
#[derive(Debug, Deserialize)]
pub struct Motd {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

pub type NewsRecord = ApiResponse<NewsData>;

// ---------------------------------------------------------------------------
// /v2/cosmetics/br/search
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct Cosmetic {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<DisplayPair>,
    #[serde(default)]
    pub rarity: Option<DisplayPair>,
    #[serde(default)]
    pub images: Option<CosmeticImages>,
    #[serde(default)]
    pub introduction: Option<Introduction>,
}

/// `{ "value": "outfit", "displayValue": "Outfit" }`
#[derive(Debug, Deserialize)]
pub struct DisplayPair {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, rename = "displayvalue")]
    pub display_value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CosmeticImages {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Introduction {
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

pub type CosmeticRecord = ApiResponse<Cosmetic>;
