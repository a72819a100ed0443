//! Turns command results into replies.
//!
//! All length limits, filtering and colors live here. The records coming in
//! carry full text; nothing upstream of this module truncates.

use chrono::{DateTime, Utc};
use fnbot_core::{
    BotProfile, CosmeticResult, Lookup, MapResult, NewsEntry, ServiceStatus, ShopListing,
    StatusComponent,
};
use serde::Serialize;

use crate::embed::{truncate_chars, Color, Embed};

/// Shop section text is cut to this many characters when it overflows the
/// field limit, leaving room for the truncation marker.
const SHOP_SECTION_CUT: usize = 1000;
const MAX_NEWS_ENTRIES: usize = 3;
const NEWS_BODY_LIMIT: usize = 500;
/// Components shown when none match the game filter.
const MAX_UNFILTERED_COMPONENTS: usize = 10;
const STATUS_COMPONENT_FILTER: &str = "fortnite";

const MAP_COLOR: Color = Color::rgb(0, 150, 255);
const SHOP_COLOR: Color = Color::rgb(255, 100, 0);
const NEWS_COLOR: Color = Color::rgb(0, 150, 255);

/// Exactly one of these is produced per command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Reply {
    Embed(Embed),
    Message(String),
}

impl Reply {
    #[must_use]
    pub fn render_text(&self) -> String {
        match self {
            Reply::Embed(embed) => embed.render_text(),
            Reply::Message(message) => format!("{message}\n"),
        }
    }
}

#[must_use]
pub fn unavailable_reply(command: &str, profile: BotProfile) -> Reply {
    Reply::Message(format!(
        "The /{command} command is not available on this bot ({profile})."
    ))
}

#[must_use]
pub fn map_reply(result: &MapResult, profile: BotProfile) -> Reply {
    match result {
        MapResult::Image { url } => Reply::Embed(
            Embed::new("🗺️ Current Battle Royale Map")
                .color(MAP_COLOR)
                .image(url.clone())
                .footer(profile.map_footer()),
        ),
        MapResult::NotFound => {
            Reply::Message("Error: Map URL not found in API response structure.".to_string())
        }
        MapResult::FetchFailed { failure } => Reply::Message(format!(
            "Error fetching data from API: {}",
            failure.detail
        )),
    }
}

#[must_use]
pub fn shop_reply(listing: &ShopListing) -> Reply {
    if listing.is_empty() {
        return Reply::Message(
            "The item shop is currently empty or failed to load. Try again later!".to_string(),
        );
    }

    let mut embed = Embed::new("🛍️ Fortnite Item Shop (Today)")
        .description(format!("Total items found: **{}**", listing.lines.len()))
        .color(SHOP_COLOR);

    for (section, lines) in group_by_section(listing) {
        let content = lines
            .iter()
            .map(|line| format!("• **{}** ({} V-Bucks)", line.name, line.cost))
            .collect::<Vec<_>>()
            .join("\n");
        let content = if content.chars().count() > crate::embed::FIELD_VALUE_LIMIT {
            format!(
                "{}\n... (truncated)",
                truncate_chars(&content, SHOP_SECTION_CUT)
            )
        } else {
            content
        };
        embed = embed.field(
            format!("___{section} (Items: {})___", lines.len()),
            content,
            false,
        );
    }

    Reply::Embed(embed.footer("Prices are in V-Bucks. Fortnite-API.com"))
}

/// Groups lines by section, keeping sections in first-seen order.
fn group_by_section(listing: &ShopListing) -> Vec<(&str, Vec<&fnbot_core::ShopLine>)> {
    let mut groups: Vec<(&str, Vec<&fnbot_core::ShopLine>)> = Vec::new();
    for line in &listing.lines {
        match groups
            .iter_mut()
            .find(|(name, _)| *name == line.section_name)
        {
            Some((_, lines)) => lines.push(line),
            None => groups.push((line.section_name.as_str(), vec![line])),
        }
    }
    groups
}

#[must_use]
pub fn status_reply(result: &Lookup<ServiceStatus>, now: DateTime<Utc>) -> Reply {
    let Lookup::Found(status) = result else {
        return Reply::Message(
            "Failed to fetch the server status. Please try again later or contact a developer for support."
                .to_string(),
        );
    };

    let mut embed = Embed::new("Epic Games Server Status")
        .color(indicator_color(&status.indicator))
        .description(format!("**{}**", status.description))
        .timestamp(now);

    for component in shown_components(&status.components) {
        embed = embed.field(
            component.name.clone(),
            format!(
                "{} {}",
                status_emoji(&component.status),
                humanize_status(&component.status)
            ),
            true,
        );
    }

    if status.has_incidents {
        embed = embed.field(
            "Active Incidents: ",
            format!("{} incident(s) currently active.", status.incident_count),
            false,
        );
    }

    Reply::Embed(embed.footer("Status via status.epicgames.com"))
}

/// Components whose name mentions the game, or the first ten when none do.
fn shown_components(components: &[StatusComponent]) -> Vec<&StatusComponent> {
    let matching: Vec<&StatusComponent> = components
        .iter()
        .filter(|c| c.name.to_lowercase().contains(STATUS_COMPONENT_FILTER))
        .collect();
    if matching.is_empty() {
        components.iter().take(MAX_UNFILTERED_COMPONENTS).collect()
    } else {
        matching
    }
}

#[must_use]
pub fn indicator_color(indicator: &str) -> Color {
    match indicator {
        "none" => Color::GREEN,
        "minor" => Color::GOLD,
        "major" => Color::ORANGE,
        "critical" => Color::RED,
        _ => Color::LIGHTER_GREY,
    }
}

#[must_use]
pub fn status_emoji(status: &str) -> &'static str {
    match status {
        "operational" => "🟢",
        "degraded_performance" => "🟡",
        "partial_outage" => "🟠",
        "major_outage" => "🔴",
        _ => "⚪",
    }
}

/// `partial_outage` -> `Partial outage`.
#[must_use]
pub fn humanize_status(status: &str) -> String {
    let spaced = status.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}

#[must_use]
pub fn news_reply(result: &Lookup<Vec<NewsEntry>>, now: DateTime<Utc>) -> Reply {
    let entries = match result {
        Lookup::Found(entries) if !entries.is_empty() => entries,
        _ => {
            return Reply::Message(
                "No news is available at the moment. Please try again later.".to_string(),
            )
        }
    };

    let mut embed = Embed::new("Fortnite News")
        .color(NEWS_COLOR)
        .timestamp(now);

    for entry in entries.iter().take(MAX_NEWS_ENTRIES) {
        let body = if entry.body.chars().count() > NEWS_BODY_LIMIT {
            format!("{}...", truncate_chars(&entry.body, NEWS_BODY_LIMIT))
        } else {
            entry.body.clone()
        };
        let title = if entry.title.is_empty() {
            "Untitled".to_string()
        } else {
            entry.title.clone()
        };
        embed = embed.field(title, body, false);
    }

    if let Some(first) = entries.first().filter(|e| !e.image_url.is_empty()) {
        embed = embed.thumbnail(first.image_url.clone());
    }

    Reply::Embed(embed.footer("Data from Fortnite-API.com"))
}

#[must_use]
pub fn cosmetic_reply(result: &Lookup<CosmeticResult>, query: &str) -> Reply {
    let Lookup::Found(cosmetic) = result else {
        return Reply::Message(format!(
            "Could not find a cosmetic name with **{query}**. Please try again and enter a correct cosmetic name."
        ));
    };

    let mut embed = Embed::new(cosmetic.name.clone())
        .description(cosmetic.description.clone())
        .color(rarity_color(cosmetic.rarity_value.as_deref()));

    if let Some(kind) = &cosmetic.type_display {
        embed = embed.field("Type", kind.clone(), true);
    }
    if let Some(rarity) = &cosmetic.rarity_display {
        embed = embed.field("Rarity", rarity.clone(), true);
    }
    if let Some(introduced) = &cosmetic.introduction_text {
        embed = embed.field("Introduced", introduced.clone(), true);
    }
    if let Some(icon) = &cosmetic.icon_url {
        embed = embed.image(icon.clone());
    }

    Reply::Embed(embed.footer("Data from Fortnite-API.com."))
}

#[must_use]
pub fn rarity_color(rarity: Option<&str>) -> Color {
    match rarity.map(str::to_lowercase).as_deref() {
        Some("legendary") => Color::rgb(211, 120, 65),
        Some("epic") => Color::rgb(177, 91, 226),
        Some("rare") => Color::rgb(73, 172, 242),
        Some("uncommon") => Color::rgb(96, 170, 58),
        Some("common") => Color::rgb(190, 190, 190),
        _ => Color::DEFAULT,
    }
}

#[cfg(test)]
#[path = "present_test.rs"]
mod tests;
