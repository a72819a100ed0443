//! Command dispatch for the CLI.
//!
//! Called from `main` once config, logging, and the service are set up. Each
//! handler asks the service for a result, logs what went wrong (the service
//! itself never logs), and turns the result into a [`Reply`].

use chrono::Utc;
use clap::Subcommand;
use fnbot_api::FortniteService;
use fnbot_core::{BotProfile, Lookup, MapResult};

use crate::present::{
    cosmetic_reply, map_reply, news_reply, shop_reply, status_reply, unavailable_reply, Reply,
};

/// Bot commands, one per slash command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show the current Battle Royale map
    Map,
    /// Show today's item shop
    Shop,
    /// Show Epic Games server status
    Status,
    /// Show the latest Battle Royale news
    News,
    /// Look up a cosmetic by name
    Cosmetic {
        /// Cosmetic name to search for (e.g., "Renegade Raider")
        name: String,
    },
}

impl Commands {
    /// Slash-command name as registered on the chat platform.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Map => "map",
            Commands::Shop => "shop",
            Commands::Status => "status",
            Commands::News => "news",
            Commands::Cosmetic { .. } => "cosmetic",
        }
    }
}

/// Runs one command and returns the single reply for it.
///
/// Commands the profile does not register get an "unavailable" message
/// without touching the network.
pub(crate) async fn run_command(
    service: &FortniteService,
    profile: BotProfile,
    command: &Commands,
) -> Reply {
    if !profile.allows(command.name()) {
        tracing::info!(command = command.name(), %profile, "command not registered for profile");
        return unavailable_reply(command.name(), profile);
    }

    match command {
        Commands::Map => run_map(service, profile).await,
        Commands::Shop => run_shop(service).await,
        Commands::Status => run_status(service).await,
        Commands::News => run_news(service).await,
        Commands::Cosmetic { name } => run_cosmetic(service, name).await,
    }
}

async fn run_map(service: &FortniteService, profile: BotProfile) -> Reply {
    let result = service.get_map().await;
    match &result {
        MapResult::FetchFailed { failure } => {
            tracing::warn!(error = %failure, "map fetch failed");
        }
        MapResult::NotFound => tracing::warn!("map response carried no POI image"),
        MapResult::Image { .. } => {}
    }
    map_reply(&result, profile)
}

async fn run_shop(service: &FortniteService) -> Reply {
    let listing = service.get_shop().await;
    if let Some(failure) = &listing.interrupted {
        tracing::warn!(
            error = %failure,
            lines_kept = listing.lines.len(),
            layout = %service.shop_layout(),
            "shop normalization interrupted"
        );
    }
    shop_reply(&listing)
}

async fn run_status(service: &FortniteService) -> Reply {
    let result = service.get_status().await;
    log_lookup("status", &result);
    status_reply(&result, Utc::now())
}

async fn run_news(service: &FortniteService) -> Reply {
    let result = service.get_news().await;
    log_lookup("news", &result);
    news_reply(&result, Utc::now())
}

async fn run_cosmetic(service: &FortniteService, name: &str) -> Reply {
    let result = service.get_cosmetic(name).await;
    log_lookup("cosmetic", &result);
    cosmetic_reply(&result, name)
}

fn log_lookup<T>(command: &str, result: &Lookup<T>) {
    match result {
        Lookup::Failed(failure) => tracing::warn!(command, error = %failure, "lookup failed"),
        Lookup::Absent => tracing::debug!(command, "lookup returned nothing"),
        Lookup::Found(_) => {}
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
