//! Favorites list, persisted as a single JSON array in the platform data
//! directory. Seeded with five default cities when empty, matching a fresh
//! dashboard install.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteCity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl FavoriteCity {
    pub fn new(name: impl Into<String>, country: Option<String>) -> Self {
        Self { name: name.into(), country }
    }
}

/// In-memory favorites list; persistence is explicit via [`Favorites::save`].
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    cities: Vec<FavoriteCity>,
}

impl Favorites {
    /// Load the list from disk. A missing or unreadable file degrades to an
    /// empty list rather than an error.
    pub fn load() -> Self {
        let Ok(path) = favorites_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| serde_json::from_str(&contents).map_err(anyhow::Error::from))
        {
            Ok(cities) => Self { cities },
            Err(err) => {
                warn!("failed to load favorites from {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write the list back to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = favorites_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create favorites directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&self.cities)
            .context("Failed to serialize favorites to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write favorites file: {}", path.display()))?;

        Ok(())
    }

    pub fn cities(&self) -> &[FavoriteCity] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Case-insensitive membership check by city name.
    pub fn contains(&self, name: &str) -> bool {
        self.cities.iter().any(|fav| fav.name.eq_ignore_ascii_case(name))
    }

    /// Add a city unless one with the same name (case-insensitive) exists.
    /// Returns whether the list changed.
    pub fn add(&mut self, city: FavoriteCity) -> bool {
        if self.contains(&city.name) {
            return false;
        }
        self.cities.push(city);
        true
    }

    /// Remove a city by name, case-insensitively. Returns whether the list
    /// changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.cities.len();
        self.cities.retain(|fav| !fav.name.eq_ignore_ascii_case(name));
        self.cities.len() != before
    }

    /// Seed the default cities into an empty list. Returns whether anything
    /// was added.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.cities = default_cities();
        true
    }
}

fn default_cities() -> Vec<FavoriteCity> {
    vec![
        FavoriteCity::new("Beijing", Some("CN".to_string())),
        FavoriteCity::new("New York", Some("US".to_string())),
        FavoriteCity::new("London", Some("GB".to_string())),
        FavoriteCity::new("Tokyo", Some("JP".to_string())),
        FavoriteCity::new("Sydney", Some("AU".to_string())),
    ]
}

/// Path to the favorites file.
fn favorites_file_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "weatherboard", "weatherboard")
        .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

    Ok(dirs.data_dir().join("favorites.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_case_insensitive_on_duplicates() {
        let mut favs = Favorites::default();

        assert!(favs.add(FavoriteCity::new("London", Some("GB".to_string()))));
        assert!(!favs.add(FavoriteCity::new("london", None)));
        assert_eq!(favs.cities().len(), 1);
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut favs = Favorites::default();
        favs.add(FavoriteCity::new("Tokyo", Some("JP".to_string())));

        assert!(favs.remove("TOKYO"));
        assert!(favs.is_empty());
        assert!(!favs.remove("Tokyo"));
    }

    #[test]
    fn contains_matches_by_name_only() {
        let mut favs = Favorites::default();
        favs.add(FavoriteCity::new("Sydney", Some("AU".to_string())));

        assert!(favs.contains("sydney"));
        assert!(!favs.contains("Sydne"));
    }

    #[test]
    fn seeds_five_defaults_only_when_empty() {
        let mut favs = Favorites::default();

        assert!(favs.seed_if_empty());
        assert_eq!(favs.cities().len(), 5);
        assert!(favs.contains("Beijing"));
        assert!(favs.contains("Sydney"));

        assert!(!favs.seed_if_empty());

        let mut nonempty = Favorites::default();
        nonempty.add(FavoriteCity::new("Oslo", None));
        assert!(!nonempty.seed_if_empty());
        assert_eq!(nonempty.cities().len(), 1);
    }

    #[test]
    fn favorites_round_trip_through_json() {
        let mut favs = Favorites::default();
        favs.add(FavoriteCity::new("London", Some("GB".to_string())));
        favs.add(FavoriteCity::new("Oslo", None));

        let json = serde_json::to_string(favs.cities()).unwrap();
        let parsed: Vec<FavoriteCity> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favs.cities());

        // A country-less entry serializes without the field, as the
        // dashboard's storage format does.
        assert!(!json.contains("\"country\":null"));
    }
}
