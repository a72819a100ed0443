//! Display-stable records produced by normalization.
//!
//! Every string here that feeds display is non-optional: absence upstream is
//! resolved to a fallback before a record is built. The records carry no
//! time-varying state except the map URL token, and nothing outlives a
//! single command invocation.

use serde::{Deserialize, Serialize};

/// Why a command could not produce its normal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network, TLS, or non-success HTTP status.
    Transport,
    /// The body did not match the expected shape.
    Parse,
    /// The upstream answered, but had nothing for the request.
    NotFound,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Parse => write!(f, "parse"),
            FailureKind::NotFound => write!(f, "not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub detail: String,
}

impl Failure {
    #[must_use]
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.kind, self.detail)
    }
}

/// Outcome of a command whose result may legitimately be missing.
///
/// `Absent` means the upstream answered but had nothing to show (no status
/// object, no news, no cosmetic by that name). `Failed` means the request or
/// decode went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Lookup<T> {
    Found(T),
    Absent,
    Failed(Failure),
}

impl<T> Lookup<T> {
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent | Lookup::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Lookup::Failed(failure) => Some(failure),
            Lookup::Found(_) | Lookup::Absent => None,
        }
    }
}

/// Map image lookup result. The two error paths are values, never panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MapResult {
    /// POI map URL with a `t=<unix seconds>` token appended.
    Image { url: String },
    /// The response decoded but carried no `images.pois`.
    NotFound,
    /// The request itself failed.
    FetchFailed { failure: Failure },
}

/// One sellable unit in the item shop. A bundle contributes its own line
/// plus one line per contained item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopLine {
    pub name: String,
    pub cost: i64,
    pub section_name: String,
}

/// Shop lines plus, when accumulation stopped early, the reason it stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopListing {
    pub lines: Vec<ShopLine>,
    pub interrupted: Option<Failure>,
}

impl ShopListing {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusComponent {
    pub id: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Upstream indicator passed through verbatim (`none`, `minor`, `major`,
    /// `critical`, or anything else the status page invents).
    pub indicator: String,
    pub description: String,
    pub components: Vec<StatusComponent>,
    pub has_incidents: bool,
    pub incident_count: usize,
}

/// A news message with full, untruncated text. An empty `image_url` means
/// the message has no image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub title: String,
    pub body: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub type_value: Option<String>,
    pub type_display: Option<String>,
    pub rarity_value: Option<String>,
    pub rarity_display: Option<String>,
    pub icon_url: Option<String>,
    pub featured_url: Option<String>,
    pub introduction_chapter: Option<String>,
    pub introduction_season: Option<String>,
    pub introduction_text: Option<String>,
}
