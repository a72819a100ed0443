mod commands;
mod embed;
mod present;

use anyhow::Context;
use clap::Parser;
use fnbot_api::FortniteService;
use tracing_subscriber::EnvFilter;

use crate::commands::{run_command, Commands};

#[derive(Debug, Parser)]
#[command(name = "fnbot")]
#[command(about = "Fortnite data bot command runner")]
struct Cli {
    /// Print the reply as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Override the bot profile (battle-bus or map-and-loot-pool)
    #[arg(long, global = true)]
    profile: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = fnbot_core::load_app_config().context("failed to load configuration")?;
    if let Some(profile) = cli.profile.as_deref() {
        config.profile = fnbot_core::config::parse_profile(profile)?;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        env = %config.env,
        profile = %config.profile,
        shop_layout = %config.shop_layout,
        "configuration loaded"
    );

    let Some(command) = cli.command else {
        println!(
            "fnbot ({}) commands: {}",
            config.profile,
            config.profile.commands().join(", ")
        );
        return Ok(());
    };

    let service =
        FortniteService::from_config(&config).context("failed to build upstream client")?;
    let reply = run_command(&service, config.profile, &command).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        print!("{}", reply.render_text());
    }

    Ok(())
}
