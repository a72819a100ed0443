//! Platform-neutral rich message model.
//!
//! Mirrors the subset of a chat embed the bot uses. Field values are capped
//! at the platform limit when added, so callers can pass arbitrarily long
//! text.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Platform limit for a single field value, in characters.
pub const FIELD_VALUE_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const DEFAULT: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(46, 204, 113);
    pub const GOLD: Color = Color::rgb(241, 196, 15);
    pub const ORANGE: Color = Color::rgb(230, 126, 34);
    pub const RED: Color = Color::rgb(231, 76, 60);
    pub const LIGHTER_GREY: Color = Color::rgb(149, 165, 166);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        let value = value.into();
        self.fields.push(EmbedField {
            name: name.into(),
            value: truncate_chars(&value, FIELD_VALUE_LIMIT).to_string(),
            inline,
        });
        self
    }

    #[must_use]
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Plain-text rendering for terminals.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = format!("== {} ==\n", self.title);
        if let Some(description) = &self.description {
            out.push_str(description);
            out.push('\n');
        }
        for field in &self.fields {
            out.push('\n');
            out.push_str(&field.name);
            out.push('\n');
            out.push_str(&field.value);
            out.push('\n');
        }
        if let Some(url) = &self.image_url {
            out.push_str(&format!("\nimage: {url}\n"));
        }
        if let Some(url) = &self.thumbnail_url {
            out.push_str(&format!("thumbnail: {url}\n"));
        }
        match (&self.footer, self.timestamp) {
            (Some(footer), Some(at)) => {
                out.push_str(&format!("\n-- {footer} | {}\n", at.format("%Y-%m-%d %H:%M UTC")));
            }
            (Some(footer), None) => out.push_str(&format!("\n-- {footer}\n")),
            (None, Some(at)) => out.push_str(&format!("\n-- {}\n", at.format("%Y-%m-%d %H:%M UTC"))),
            (None, None) => {}
        }
        out
    }
}

/// Returns at most `max` characters of `s`, never splitting a character.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
