#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which command set the running bot exposes.
///
/// `BattleBus` is the full bot (map, shop, status, news, cosmetic);
/// `MapAndLootPool` only answers the map command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotProfile {
    BattleBus,
    MapAndLootPool,
}

impl BotProfile {
    /// Footer shown under the map image. The two bots never agreed on it.
    #[must_use]
    pub fn map_footer(self) -> &'static str {
        match self {
            BotProfile::BattleBus => "Via Fortnite-API.com",
            BotProfile::MapAndLootPool => "Data from Fortnite-API.com",
        }
    }

    /// Names of the commands this profile answers, in registration order.
    #[must_use]
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            BotProfile::BattleBus => &["map", "shop", "status", "news", "cosmetic"],
            BotProfile::MapAndLootPool => &["map"],
        }
    }

    #[must_use]
    pub fn allows(self, command: &str) -> bool {
        self.commands().contains(&command)
    }
}

impl std::fmt::Display for BotProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotProfile::BattleBus => write!(f, "battle-bus"),
            BotProfile::MapAndLootPool => write!(f, "map-and-loot-pool"),
        }
    }
}

/// Upstream shop payload layout. The two layouts cannot be parsed from the
/// same payload, so the layout is chosen up front and also decides which
/// endpoint is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopLayout {
    /// Flat `data.entries[]` with per-entry bundle and section (`/v2/shop`).
    Entries,
    /// `data.sections[]` each holding its own entries (`/v2/shop/br`).
    Sections,
}

impl std::fmt::Display for ShopLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopLayout::Entries => write!(f, "entries"),
            ShopLayout::Sections => write!(f, "sections"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub profile: BotProfile,
    pub api_base_url: String,
    pub status_base_url: String,
    pub language: String,
    pub shop_layout: ShopLayout,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
