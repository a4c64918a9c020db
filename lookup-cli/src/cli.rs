use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use lookup_core::{
    Config, LookupController, RenderOutcome, WeatherApiProvider, config::DEFAULT_BASE_URL,
    provider_from_config,
};

use crate::terminal::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Current weather for a location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and, optionally, a different API base URL.
    Configure,

    /// Look up the weather for one location.
    Show {
        /// Free-text location, e.g. "London" or "48.85,2.35".
        location: String,

        /// Print the report as JSON instead of the rendered page.
        #[arg(long)]
        json: bool,
    },

    /// Keep prompting for locations until cancelled.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, json } => show(&location, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    cfg.set_api_key(api_key.trim().to_string());

    let base_url = Text::new("API base URL:")
        .with_default(cfg.base_url())
        .prompt()
        .context("Failed to read base URL")?;
    cfg.base_url = (base_url != DEFAULT_BASE_URL).then_some(base_url);

    let path = cfg.save()?;
    tracing::info!(
        path = %path.display(),
        custom_base_url = cfg.base_url.is_some(),
        "configuration saved"
    );
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn controller(quiet: bool) -> anyhow::Result<LookupController<WeatherApiProvider, TerminalView>> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;
    tracing::debug!(base_url = provider.base_url(), timeout = ?cfg.timeout(), "provider ready");

    Ok(LookupController::new(provider, TerminalView::new(quiet)))
}

async fn show(location: &str, json: bool) -> anyhow::Result<()> {
    let mut controller = controller(json)?;

    match controller.on_submit(location).await {
        None => bail!("Location must not be empty"),
        Some(RenderOutcome::Found(report)) if json => {
            let out = serde_json::to_string_pretty(&report)
                .context("Failed to serialize weather report")?;
            println!("{out}");
        }
        Some(RenderOutcome::Found(_)) => print!("{}", controller.view().page()),
        Some(RenderOutcome::NotFound) => {
            eprint!("{}", controller.view().page());
            bail!("No weather data for '{location}'");
        }
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut controller = controller(false)?;

    loop {
        let input = Text::new("Location:")
            .with_help_message("Enter submits, Esc quits")
            .prompt();

        let location = match input {
            Ok(location) => location,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        if controller.on_submit(&location).await.is_some() {
            print!("{}", controller.view().page());
        }
    }

    Ok(())
}
