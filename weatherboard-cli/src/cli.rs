use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use weatherboard_core::{Config, WeatherProvider, provider_from_config};

use crate::favorites::{FavoriteCity, Favorites};
use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherboard", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current conditions and the daily forecast for a city.
    Show {
        /// City name, optionally with a country hint, e.g. "London,GB".
        city: String,
    },

    /// Manage the favorite cities list.
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorite cities, seeding the defaults on first use.
    List,

    /// Add a city to the favorites.
    Add {
        /// City name.
        city: String,

        /// Optional ISO country code, e.g. "GB".
        #[arg(long)]
        country: Option<String>,
    },

    /// Remove a city from the favorites.
    Remove {
        /// City name (matched case-insensitively).
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
            Command::Favorites { command } => favorites(command),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty.");
    }

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        bail!("City name must not be empty.");
    }

    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let data = provider.fetch_weather_data(city).await?;

    println!("{}", render::render_current(&data.current));
    println!();
    println!("{}", render::render_forecast(&data.forecast));

    Ok(())
}

fn favorites(command: FavoritesCommand) -> anyhow::Result<()> {
    let mut favs = Favorites::load();

    match command {
        FavoritesCommand::List => {
            if favs.seed_if_empty() {
                favs.save()?;
            }
            for fav in favs.cities() {
                match &fav.country {
                    Some(country) => println!("{}, {country}", fav.name),
                    None => println!("{}", fav.name),
                }
            }
        }
        FavoritesCommand::Add { city, country } => {
            let city = city.trim();
            if city.is_empty() {
                bail!("City name must not be empty.");
            }

            if favs.add(FavoriteCity::new(city, country)) {
                favs.save()?;
                println!("Added {city} to favorites.");
            } else {
                println!("{city} is already a favorite.");
            }
        }
        FavoritesCommand::Remove { city } => {
            if favs.remove(city.trim()) {
                favs.save()?;
                println!("Removed {city} from favorites.");
            } else {
                println!("{city} is not in the favorites.");
            }
        }
    }

    Ok(())
}
