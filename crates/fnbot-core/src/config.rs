use crate::app_config::{AppConfig, BotProfile, Environment, ShopLayout};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the
/// production endpoints with the full command set.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let env = parse_environment(&or_default("FNBOT_ENV", "development"))?;
    let log_level = or_default("FNBOT_LOG_LEVEL", "info");
    let profile = parse_profile(&or_default("FNBOT_PROFILE", "battle-bus"))?;

    let api_base_url = non_empty("FNBOT_API_BASE_URL", "https://fortnite-api.com")?;
    let status_base_url = non_empty("FNBOT_STATUS_BASE_URL", "https://status.epicgames.com")?;
    let language = non_empty("FNBOT_LANGUAGE", "en")?;
    let shop_layout = parse_shop_layout(&or_default("FNBOT_SHOP_LAYOUT", "entries"))?;

    let request_timeout_secs = parse_u64("FNBOT_REQUEST_TIMEOUT_SECS", "100")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FNBOT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("FNBOT_USER_AGENT", "fnbot/0.1 (fortnite-data-bot)");

    Ok(AppConfig {
        env,
        log_level,
        profile,
        api_base_url,
        status_base_url,
        language,
        shop_layout,
        request_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FNBOT_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// Parse a profile name. Also used by the CLI `--profile` override.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `battle-bus` or `map-and-loot-pool`.
pub fn parse_profile(s: &str) -> Result<BotProfile, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "battle-bus" => Ok(BotProfile::BattleBus),
        "map-and-loot-pool" => Ok(BotProfile::MapAndLootPool),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FNBOT_PROFILE".to_string(),
            reason: format!("expected battle-bus or map-and-loot-pool; got '{other}'"),
        }),
    }
}

fn parse_shop_layout(s: &str) -> Result<ShopLayout, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "entries" => Ok(ShopLayout::Entries),
        "sections" => Ok(ShopLayout::Sections),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FNBOT_SHOP_LAYOUT".to_string(),
            reason: format!("expected entries or sections; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
