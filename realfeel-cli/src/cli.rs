use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use realfeel_core::{
    Config, RealFeelError, RealFeelResult, RealFeelService, provider_from_config,
};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "realfeel", version, about = "Perceived temperature from current weather")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Compute the real feel for a coordinate or a known city.
    Show {
        #[arg(long, allow_hyphen_values = true, requires = "lon", required_unless_present = "city")]
        lat: Option<String>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<String>,

        /// City name from the catalog, e.g. "Berlin".
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the cities in the catalog.
    Cities,

    /// Interactively write the config file.
    Configure,
}

impl Cli {
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }

    pub fn load_config(&self) -> anyhow::Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let path = self.config_path()?;

        match self.command {
            Command::Serve { host, port } => {
                let mut config = config;
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                server::run(&config).await?;
            }
            Command::Show { lat, lon, city, json } => {
                let provider = provider_from_config(&config)?;
                let service = RealFeelService::new(Arc::from(provider));

                let result = match city {
                    Some(name) => {
                        let catalog = config.catalog();
                        let city = catalog
                            .find(&name)
                            .ok_or_else(|| anyhow!("Unknown city '{name}'. Run `realfeel cities` to list them."))?;
                        let coordinate = city.coordinate().map_err(present)?;
                        service.real_feel_at(&coordinate).await
                    }
                    None => {
                        service
                            .get_real_feel(lat.as_deref().unwrap_or_default(), lon.as_deref().unwrap_or_default())
                            .await
                    }
                }
                .map_err(present)?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print_result(&result);
                }
            }
            Command::Cities => {
                let catalog = config.catalog();
                if catalog.is_empty() {
                    println!("No cities configured.");
                }
                for city in catalog.all() {
                    println!("{:<16} {:>9.4} {:>9.4}", city.name, city.lat, city.lon);
                }
            }
            Command::Configure => {
                let updated = prompt_config(config)?;
                updated.save_to(&path)?;
                println!("Saved configuration to {}", path.display());
            }
        }

        Ok(())
    }
}

fn present(err: RealFeelError) -> anyhow::Error {
    anyhow!("{}\n  ({err})", err.user_message())
}

fn print_result(result: &RealFeelResult) {
    let m = &result.measurements;

    println!("Real feel: {:.1} °C", result.real_feel);
    println!("  observed at     {}", m.timestamp.format("%Y-%m-%d %H:%M %:z"));
    println!("  temperature     {:.1} °C", m.temperature);
    println!("  humidity        {:.0} %", m.relative_humidity);
    println!("  wind            {:.1} km/h", m.wind_speed);
    println!("  sunshine        {:.0} min/h", m.solar_signal);
    println!("  cloud cover     {:.0} %", m.cloud_cover);
}

fn prompt_config(mut config: Config) -> anyhow::Result<Config> {
    config.provider.base_url = Text::new("Weather provider base URL:")
        .with_default(&config.provider.base_url)
        .prompt()
        .context("Failed to read provider base URL")?;

    config.provider.timeout_seconds = CustomType::<u64>::new("Provider timeout (seconds):")
        .with_default(config.provider.timeout_seconds)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read provider timeout")?;

    config.server.host = Text::new("Server host:")
        .with_default(&config.server.host)
        .prompt()
        .context("Failed to read server host")?;

    config.server.port = CustomType::<u16>::new("Server port:")
        .with_default(config.server.port)
        .with_error_message("Please enter a port number between 0 and 65535")
        .prompt()
        .context("Failed to read server port")?;

    let levels = vec!["error", "warn", "info", "debug", "trace"];
    let start = levels.iter().position(|l| *l == config.log_level).unwrap_or(2);
    config.log_level = Select::new("Log level:", levels)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read log level")?
        .to_string();

    Ok(config)
}
