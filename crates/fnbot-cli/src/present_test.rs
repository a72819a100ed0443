use chrono::TimeZone;
use fnbot_core::{Failure, FailureKind, ShopLine};

use super::*;
use crate::embed::FIELD_VALUE_LIMIT;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn expect_embed(reply: Reply) -> Embed {
    match reply {
        Reply::Embed(embed) => embed,
        Reply::Message(message) => panic!("expected embed, got message: {message}"),
    }
}

fn expect_message(reply: Reply) -> String {
    match reply {
        Reply::Message(message) => message,
        Reply::Embed(embed) => panic!("expected message, got embed: {}", embed.title),
    }
}

fn line(name: &str, cost: i64, section: &str) -> ShopLine {
    ShopLine {
        name: name.to_string(),
        cost,
        section_name: section.to_string(),
    }
}

fn component(name: &str, status: &str) -> StatusComponent {
    StatusComponent {
        id: name.to_lowercase(),
        name: name.to_string(),
        status: status.to_string(),
    }
}

fn status(indicator: &str, components: Vec<StatusComponent>, incidents: usize) -> ServiceStatus {
    ServiceStatus {
        indicator: indicator.to_string(),
        description: "All Systems Operational".to_string(),
        components,
        has_incidents: incidents > 0,
        incident_count: incidents,
    }
}

fn cosmetic() -> CosmeticResult {
    CosmeticResult {
        id: "CID_028_Athena_Commando_F".to_string(),
        name: "Renegade Raider".to_string(),
        description: "Rare renegade raider outfit.".to_string(),
        type_value: Some("outfit".to_string()),
        type_display: Some("Outfit".to_string()),
        rarity_value: Some("Rare".to_string()),
        rarity_display: Some("Rare".to_string()),
        icon_url: Some("https://img/raider.png".to_string()),
        featured_url: None,
        introduction_chapter: Some("1".to_string()),
        introduction_season: Some("1".to_string()),
        introduction_text: Some("Introduced in Chapter 1, Season 1.".to_string()),
    }
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_image_uses_profile_footer() {
    let result = MapResult::Image {
        url: "https://img/map.png?t=1".to_string(),
    };

    let full = expect_embed(map_reply(&result, BotProfile::BattleBus));
    assert_eq!(full.image_url.as_deref(), Some("https://img/map.png?t=1"));
    assert_eq!(full.footer.as_deref(), Some("Via Fortnite-API.com"));

    let lite = expect_embed(map_reply(&result, BotProfile::MapAndLootPool));
    assert_eq!(lite.footer.as_deref(), Some("Data from Fortnite-API.com"));
}

#[test]
fn map_not_found_and_failure_are_messages() {
    assert_eq!(
        expect_message(map_reply(&MapResult::NotFound, BotProfile::BattleBus)),
        "Error: Map URL not found in API response structure."
    );

    let failed = MapResult::FetchFailed {
        failure: Failure::new(FailureKind::Transport, "unexpected status 500"),
    };
    assert_eq!(
        expect_message(map_reply(&failed, BotProfile::BattleBus)),
        "Error fetching data from API: unexpected status 500"
    );
}

// ---------------------------------------------------------------------------
// shop
// ---------------------------------------------------------------------------

#[test]
fn shop_groups_sections_in_first_seen_order() {
    let listing = ShopListing {
        lines: vec![
            line("Fishstick", 1200, "Featured"),
            line("Raven", 2000, "Daily"),
            line("Fish Food", 300, "Featured"),
        ],
        interrupted: None,
    };

    let embed = expect_embed(shop_reply(&listing));
    assert_eq!(embed.description.as_deref(), Some("Total items found: **3**"));
    assert_eq!(embed.fields.len(), 2);
    assert_eq!(embed.fields[0].name, "___Featured (Items: 2)___");
    assert_eq!(
        embed.fields[0].value,
        "• **Fishstick** (1200 V-Bucks)\n• **Fish Food** (300 V-Bucks)"
    );
    assert_eq!(embed.fields[1].name, "___Daily (Items: 1)___");
}

#[test]
fn shop_truncates_long_sections() {
    let lines = (0..100)
        .map(|i| line(&format!("Item number {i}"), 500, "Featured"))
        .collect();
    let listing = ShopListing {
        lines,
        interrupted: None,
    };

    let embed = expect_embed(shop_reply(&listing));
    let value = &embed.fields[0].value;
    assert!(value.ends_with("\n... (truncated)"));
    assert!(value.chars().count() <= FIELD_VALUE_LIMIT);
}

#[test]
fn shop_partial_listing_still_renders() {
    let listing = ShopListing {
        lines: vec![line("Crackshot", 800, "Featured")],
        interrupted: Some(Failure::new(FailureKind::Parse, "entry 1")),
    };
    assert!(matches!(shop_reply(&listing), Reply::Embed(_)));
}

#[test]
fn shop_empty_is_message() {
    assert_eq!(
        expect_message(shop_reply(&ShopListing::default())),
        "The item shop is currently empty or failed to load. Try again later!"
    );
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_prefers_fortnite_components() {
    let result = Lookup::Found(status(
        "minor",
        vec![
            component("Website", "operational"),
            component("Fortnite Login", "partial_outage"),
            component("FORTNITE Matchmaking", "degraded_performance"),
        ],
        0,
    ));

    let embed = expect_embed(status_reply(&result, now()));
    assert_eq!(embed.color, Some(Color::GOLD));
    assert_eq!(embed.description.as_deref(), Some("**All Systems Operational**"));
    assert_eq!(embed.timestamp, Some(now()));
    let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Fortnite Login", "FORTNITE Matchmaking"]);
    assert_eq!(embed.fields[0].value, "🟠 Partial outage");
    assert!(embed.fields.iter().all(|f| f.inline));
}

#[test]
fn status_falls_back_to_first_ten_components() {
    let components = (0..15)
        .map(|i| component(&format!("Service {i}"), "operational"))
        .collect();
    let result = Lookup::Found(status("none", components, 0));

    let embed = expect_embed(status_reply(&result, now()));
    assert_eq!(embed.color, Some(Color::GREEN));
    assert_eq!(embed.fields.len(), 10);
    assert_eq!(embed.fields[0].value, "🟢 Operational");
}

#[test]
fn status_reports_incidents() {
    let result = Lookup::Found(status("critical", vec![], 2));
    let embed = expect_embed(status_reply(&result, now()));
    assert_eq!(embed.color, Some(Color::RED));
    let last = embed.fields.last().expect("incident field");
    assert_eq!(last.name, "Active Incidents: ");
    assert_eq!(last.value, "2 incident(s) currently active.");
    assert!(!last.inline);
}

#[test]
fn status_failure_and_absence_share_message() {
    let failed: Lookup<ServiceStatus> =
        Lookup::Failed(Failure::new(FailureKind::Transport, "timeout"));
    let expected = "Failed to fetch the server status. Please try again later or contact a developer for support.";
    assert_eq!(expect_message(status_reply(&failed, now())), expected);
    assert_eq!(expect_message(status_reply(&Lookup::Absent, now())), expected);
}

#[test]
fn status_helpers_cover_unknown_values() {
    assert_eq!(indicator_color("major"), Color::ORANGE);
    assert_eq!(indicator_color("unknown"), Color::LIGHTER_GREY);
    assert_eq!(status_emoji("major_outage"), "🔴");
    assert_eq!(status_emoji("under_maintenance"), "⚪");
    assert_eq!(humanize_status("degraded_performance"), "Degraded performance");
    assert_eq!(humanize_status(""), "Unknown");
}

// ---------------------------------------------------------------------------
// news
// ---------------------------------------------------------------------------

#[test]
fn news_shows_three_entries_with_first_image() {
    let entries = (1..=4)
        .map(|i| NewsEntry {
            title: format!("Tile {i}"),
            body: "b".repeat(600),
            image_url: format!("https://img/{i}.png"),
        })
        .collect();

    let embed = expect_embed(news_reply(&Lookup::Found(entries), now()));
    assert_eq!(embed.fields.len(), 3);
    assert_eq!(embed.thumbnail_url.as_deref(), Some("https://img/1.png"));
    assert_eq!(embed.fields[0].value.chars().count(), 503);
    assert!(embed.fields[0].value.ends_with("..."));
    assert_eq!(embed.footer.as_deref(), Some("Data from Fortnite-API.com"));
}

#[test]
fn news_without_image_or_title() {
    let entries = vec![NewsEntry {
        title: String::new(),
        body: "Short".to_string(),
        image_url: String::new(),
    }];

    let embed = expect_embed(news_reply(&Lookup::Found(entries), now()));
    assert!(embed.thumbnail_url.is_none());
    assert_eq!(embed.fields[0].name, "Untitled");
    assert_eq!(embed.fields[0].value, "Short");
}

#[test]
fn news_absent_is_message() {
    assert_eq!(
        expect_message(news_reply(&Lookup::Absent, now())),
        "No news is available at the moment. Please try again later."
    );
    assert_eq!(
        expect_message(news_reply(&Lookup::Found(Vec::new()), now())),
        "No news is available at the moment. Please try again later."
    );
}

// ---------------------------------------------------------------------------
// cosmetic
// ---------------------------------------------------------------------------

#[test]
fn cosmetic_embed_has_rarity_color_and_fields() {
    let embed = expect_embed(cosmetic_reply(&Lookup::Found(cosmetic()), "raider"));
    assert_eq!(embed.title, "Renegade Raider");
    assert_eq!(embed.color, Some(Color::rgb(73, 172, 242)));
    let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Type", "Rarity", "Introduced"]);
    assert_eq!(embed.image_url.as_deref(), Some("https://img/raider.png"));
}

#[test]
fn cosmetic_skips_missing_optional_fields() {
    let bare = CosmeticResult {
        type_value: None,
        type_display: None,
        rarity_value: None,
        rarity_display: None,
        icon_url: None,
        introduction_text: None,
        ..cosmetic()
    };

    let embed = expect_embed(cosmetic_reply(&Lookup::Found(bare), "raider"));
    assert!(embed.fields.is_empty());
    assert!(embed.image_url.is_none());
    assert_eq!(embed.color, Some(Color::DEFAULT));
}

#[test]
fn cosmetic_miss_echoes_query() {
    assert_eq!(
        expect_message(cosmetic_reply(&Lookup::Absent, "nope")),
        "Could not find a cosmetic name with **nope**. Please try again and enter a correct cosmetic name."
    );
}

#[test]
fn rarity_color_ignores_case() {
    assert_eq!(rarity_color(Some("LEGENDARY")), Color::rgb(211, 120, 65));
    assert_eq!(rarity_color(Some("epic")), Color::rgb(177, 91, 226));
    assert_eq!(rarity_color(Some("mythic")), Color::DEFAULT);
    assert_eq!(rarity_color(None), Color::DEFAULT);
}

#[test]
fn reply_serializes_with_type_tag() {
    let value = serde_json::to_value(Reply::Message("hi".to_string())).expect("serialize");
    assert_eq!(value, serde_json::json!({ "type": "message", "content": "hi" }));
}
