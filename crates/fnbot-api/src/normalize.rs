//! Normalization of upstream records into the display-stable records in
//! [`fnbot_core::records`].
//!
//! Each function is a single pass with no I/O. Missing upstream fields are
//! replaced by the fallbacks below; nothing here returns an error. The shop
//! normalizers return whatever they accumulated when an entry fails to
//! decode, with the reason recorded in [`ShopListing::interrupted`].

use chrono::{DateTime, Utc};
use fnbot_core::{
    CosmeticResult, Failure, FailureKind, MapResult, NewsEntry, ServiceStatus, ShopLine,
    ShopListing, StatusComponent,
};

use crate::parse::decode_value;
use crate::types::{
    CosmeticRecord, DisplayPair, MapRecord, NewsRecord, SectionEntry, ShopEntriesData, ShopEntry,
    ShopRecord, ShopSection, ShopSectionsData, StatusRecord,
};

/// Section name for flat-layout entries without one.
pub const FEATURED_SECTION: &str = "Featured";
/// Section name for sectioned-layout sections without one.
pub const UNCATEGORIZED_SECTION: &str = "Uncategorized";
pub const UNKNOWN_ITEM: &str = "Unknown Item";
pub const UNKNOWN_INDICATOR: &str = "unknown";
pub const UNKNOWN_COMPONENT: &str = "Unknown Component";
pub const UNKNOWN_COSMETIC: &str = "Unknown Cosmetic";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Appends the disambiguation token `t=<unix seconds>` to a map URL.
///
/// The upstream serves the same filename even after the map changes, so
/// without the token chat clients keep showing a stale cached image.
#[must_use]
pub fn cache_busted_url(url: &str, now: DateTime<Utc>) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}t={}", now.timestamp())
}

/// Extracts the POI map URL; `NotFound` when any level of nesting is missing.
#[must_use]
pub fn normalize_map(record: MapRecord, now: DateTime<Utc>) -> MapResult {
    match record
        .data
        .and_then(|d| d.images)
        .and_then(|i| i.pois)
        .filter(|url| !url.trim().is_empty())
    {
        Some(url) => MapResult::Image {
            url: cache_busted_url(&url, now),
        },
        None => MapResult::NotFound,
    }
}

/// Flattens a shop payload into one line per sellable unit.
#[must_use]
pub fn normalize_shop(record: ShopRecord) -> ShopListing {
    match record {
        ShopRecord::Entries(envelope) => normalize_shop_entries(envelope.data),
        ShopRecord::Sections(envelope) => normalize_shop_sections(envelope.data),
    }
}

/// Flat layout: a bundle contributes its own line at `finalPrice`, then each
/// contained item gets a line at the same price, so N items plus a bundle
/// yields N+1 lines.
#[must_use]
pub fn normalize_shop_entries(data: Option<ShopEntriesData>) -> ShopListing {
    let mut listing = ShopListing::default();
    let Some(entries) = data.and_then(|d| d.entries) else {
        listing.interrupted = Some(missing_list("data.entries"));
        return listing;
    };

    for (idx, raw) in entries.into_iter().enumerate() {
        let entry: ShopEntry = match decode_value(raw, &format!("shop entry {idx}")) {
            Ok(entry) => entry,
            Err(err) => {
                listing.interrupted = Some(err.failure());
                break;
            }
        };

        let section_name = entry
            .section
            .and_then(|s| s.name)
            .unwrap_or_else(|| FEATURED_SECTION.to_string());
        let cost = entry.final_price.unwrap_or_default();

        if let Some(bundle_name) = entry.bundle.and_then(|b| b.name) {
            listing.lines.push(ShopLine {
                name: bundle_name,
                cost,
                section_name: section_name.clone(),
            });
        }

        for item in entry.items.into_iter().flatten() {
            listing.lines.push(ShopLine {
                name: item.name.unwrap_or_else(|| UNKNOWN_ITEM.to_string()),
                cost,
                section_name: section_name.clone(),
            });
        }
    }

    listing
}

/// Sectioned layout: every item in every entry gets a line at the entry's
/// `regularPrice`. There is no bundle line because this layout has no bundle.
#[must_use]
pub fn normalize_shop_sections(data: Option<ShopSectionsData>) -> ShopListing {
    let mut listing = ShopListing::default();
    let Some(sections) = data.and_then(|d| d.sections) else {
        listing.interrupted = Some(missing_list("data.sections"));
        return listing;
    };

    'sections: for (section_idx, raw_section) in sections.into_iter().enumerate() {
        let section: ShopSection =
            match decode_value(raw_section, &format!("shop section {section_idx}")) {
                Ok(section) => section,
                Err(err) => {
                    listing.interrupted = Some(err.failure());
                    break;
                }
            };

        let section_name = section
            .name
            .unwrap_or_else(|| UNCATEGORIZED_SECTION.to_string());

        for (entry_idx, raw_entry) in section.entries.into_iter().flatten().enumerate() {
            let context = format!("shop section {section_idx} entry {entry_idx}");
            let entry: SectionEntry = match decode_value(raw_entry, &context) {
                Ok(entry) => entry,
                Err(err) => {
                    listing.interrupted = Some(err.failure());
                    break 'sections;
                }
            };

            let cost = entry.regular_price.unwrap_or_default();
            for item in entry.items.into_iter().flatten() {
                listing.lines.push(ShopLine {
                    name: item.name.unwrap_or_else(|| UNKNOWN_ITEM.to_string()),
                    cost,
                    section_name: section_name.clone(),
                });
            }
        }
    }

    listing
}

/// Builds the service status, or `None` when the payload has no `status`
/// object. The indicator is passed through without validation.
#[must_use]
pub fn normalize_status(record: StatusRecord) -> Option<ServiceStatus> {
    let status = record.status?;
    let incident_count = record.incidents.as_ref().map_or(0, Vec::len);

    let components = record
        .components
        .unwrap_or_default()
        .into_iter()
        .map(|c| StatusComponent {
            id: c.id.unwrap_or_default(),
            name: c.name.unwrap_or_else(|| UNKNOWN_COMPONENT.to_string()),
            status: c.status.unwrap_or_else(|| UNKNOWN_INDICATOR.to_string()),
        })
        .collect();

    Some(ServiceStatus {
        indicator: status
            .indicator
            .unwrap_or_else(|| UNKNOWN_INDICATOR.to_string()),
        description: status.description.unwrap_or_default(),
        components,
        has_incidents: incident_count > 0,
        incident_count,
    })
}

/// Maps news tiles verbatim. Text is never shortened here; limits are a
/// presentation concern.
#[must_use]
pub fn normalize_news(record: NewsRecord) -> Option<Vec<NewsEntry>> {
    let motds = record.data?.motds?;
    Some(
        motds
            .into_iter()
            .map(|m| NewsEntry {
                title: m.title.unwrap_or_default(),
                body: m.body.unwrap_or_default(),
                image_url: m.image.unwrap_or_default(),
            })
            .collect(),
    )
}

/// Unwraps the single search hit. Matching is left to the upstream search.
#[must_use]
pub fn normalize_cosmetic(record: CosmeticRecord) -> Option<CosmeticResult> {
    let cosmetic = record.data?;
    let (type_value, type_display) = split_pair(cosmetic.kind);
    let (rarity_value, rarity_display) = split_pair(cosmetic.rarity);
    let (icon_url, featured_url) = cosmetic
        .images
        .map_or((None, None), |i| (non_empty(i.icon), non_empty(i.featured)));
    let (introduction_chapter, introduction_season, introduction_text) = cosmetic
        .introduction
        .map_or((None, None, None), |i| (i.chapter, i.season, i.text));

    Some(CosmeticResult {
        id: cosmetic.id.unwrap_or_default(),
        name: cosmetic
            .name
            .unwrap_or_else(|| UNKNOWN_COSMETIC.to_string()),
        description: cosmetic
            .description
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        type_value,
        type_display,
        rarity_value,
        rarity_display,
        icon_url,
        featured_url,
        introduction_chapter,
        introduction_season,
        introduction_text,
    })
}

fn split_pair(pair: Option<DisplayPair>) -> (Option<String>, Option<String>) {
    pair.map_or((None, None), |p| (p.value, p.display_value))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn missing_list(path: &str) -> Failure {
    Failure::new(
        FailureKind::Parse,
        format!("shop payload has no {path} list"),
    )
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
