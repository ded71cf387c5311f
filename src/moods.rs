/// The mood registry: an immutable table mapping mood ids to display
/// metadata and base colors, loaded once at startup.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::color;
use crate::types::PALETTE_SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoodError {
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
    #[error("mood registry is empty")]
    EmptyRegistry,
    #[error("duplicate mood '{0}'")]
    DuplicateMood(String),
    #[error("mood '{id}' must have exactly 4 colors, found {found}")]
    WrongColorCount { id: String, found: usize },
    #[error("mood '{id}' has invalid hex color '{color}'")]
    InvalidColor { id: String, color: String },
}

/// One mood: display metadata plus the base colors palettes derive from.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Mood {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub colors: Vec<String>,
}

/// Read-only lookup from mood id to its metadata. Validated on
/// construction; exposes no mutation path.
#[derive(Debug)]
pub struct MoodRegistry {
    moods: Vec<Mood>,
}

#[derive(Deserialize)]
struct RegistryFile {
    moods: Vec<Mood>,
}

impl MoodRegistry {
    /// The stock registry used when no configuration file is present.
    pub fn builtin() -> Self {
        let mood = |id: &str, name: &str, icon: &str, description: &str, colors: [&str; 4]| Mood {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        };
        Self {
            moods: vec![
                mood(
                    "happy",
                    "Happy",
                    "😊",
                    "Bright, upbeat colors",
                    ["#FFD93D", "#6BCF7F", "#4D96FF", "#FF6B6B"],
                ),
                mood(
                    "calm",
                    "Calm",
                    "😌",
                    "Soft, relaxing tones",
                    ["#A8E6CF", "#88D8B0", "#68C4AF", "#4ECDC4"],
                ),
                mood(
                    "energetic",
                    "Energetic",
                    "⚡",
                    "Vibrant, high-energy colors",
                    ["#FF6B6B", "#FF8E53", "#FF6B9D", "#C44569"],
                ),
                mood(
                    "creative",
                    "Creative",
                    "🎨",
                    "An inspiring, eclectic mix",
                    ["#A8E6CF", "#FFD93D", "#FF8A80", "#B39DDB"],
                ),
                mood(
                    "focus",
                    "Focus",
                    "🎯",
                    "Muted tones that stay out of the way",
                    ["#78909C", "#90A4AE", "#607D8B", "#546E7A"],
                ),
            ],
        }
    }

    /// Build a registry from an explicit mood table, rejecting tables the
    /// variation engine cannot work with.
    pub fn from_moods(moods: Vec<Mood>) -> Result<Self, MoodError> {
        if moods.is_empty() {
            return Err(MoodError::EmptyRegistry);
        }
        for (index, mood) in moods.iter().enumerate() {
            if moods[..index].iter().any(|other| other.id == mood.id) {
                return Err(MoodError::DuplicateMood(mood.id.clone()));
            }
            if mood.colors.len() != PALETTE_SIZE {
                return Err(MoodError::WrongColorCount {
                    id: mood.id.clone(),
                    found: mood.colors.len(),
                });
            }
            if let Some(bad) = mood.colors.iter().find(|c| !color::is_valid_hex(c)) {
                return Err(MoodError::InvalidColor {
                    id: mood.id.clone(),
                    color: bad.clone(),
                });
            }
        }
        Ok(Self { moods })
    }

    /// Parse a TOML mood table (`[[moods]]` entries).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(contents)?;
        Ok(Self::from_moods(file.moods)?)
    }

    /// Look up a mood by id.
    pub fn get(&self, id: &str) -> Result<&Mood, MoodError> {
        self.moods
            .iter()
            .find(|mood| mood.id == id)
            .ok_or_else(|| MoodError::UnknownMood(id.to_string()))
    }

    /// All moods, in configuration order.
    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    /// Position of a mood id in configuration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.moods.iter().position(|mood| mood.id == id)
    }
}

/// Load the registry: an explicit path must parse, the per-user default
/// path is picked up when present, otherwise the built-in table is used.
pub fn load_registry(path: Option<&Path>) -> Result<MoodRegistry> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(MoodRegistry::builtin()),
        },
    };
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read mood file {}", path.display()))?;
    MoodRegistry::from_toml_str(&contents)
        .with_context(|| format!("invalid mood file {}", path.display()))
}

/// Returns the default mood file path inside the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_local_dir().map(|dir| dir.join("palettr").join("moods.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_moods_are_well_formed() {
        let registry = MoodRegistry::builtin();
        assert!(!registry.moods().is_empty());
        for mood in registry.moods() {
            assert_eq!(mood.colors.len(), PALETTE_SIZE, "mood {}", mood.id);
            for c in &mood.colors {
                assert!(color::is_valid_hex(c), "mood {} color {c}", mood.id);
            }
        }
        // Re-validating the table must not find anything wrong either.
        let moods = registry.moods().to_vec();
        assert!(MoodRegistry::from_moods(moods).is_ok());
    }

    #[test]
    fn lookup_finds_known_moods() {
        let registry = MoodRegistry::builtin();
        let mood = registry.get("calm").unwrap();
        assert_eq!(mood.name, "Calm");
        assert_eq!(registry.position("calm"), Some(1));
    }

    #[test]
    fn lookup_rejects_unknown_moods() {
        let registry = MoodRegistry::builtin();
        assert_eq!(
            registry.get("nonexistent").unwrap_err(),
            MoodError::UnknownMood("nonexistent".to_string())
        );
    }

    #[test]
    fn parses_a_valid_toml_table() {
        let registry = MoodRegistry::from_toml_str(
            r##"
            [[moods]]
            id = "dusk"
            name = "Dusk"
            icon = "D"
            description = "Evening shades"
            colors = ["#112233", "#223344", "#334455", "#445566"]
            "##,
        )
        .unwrap();
        assert_eq!(registry.moods().len(), 1);
        assert_eq!(registry.get("dusk").unwrap().name, "Dusk");
    }

    #[test]
    fn rejects_wrong_color_count() {
        let err = MoodRegistry::from_moods(vec![Mood {
            id: "short".to_string(),
            name: "Short".to_string(),
            icon: "S".to_string(),
            description: String::new(),
            colors: vec!["#112233".to_string()],
        }])
        .unwrap_err();
        assert_eq!(
            err,
            MoodError::WrongColorCount {
                id: "short".to_string(),
                found: 1,
            }
        );
    }

    #[test]
    fn rejects_invalid_colors() {
        let err = MoodRegistry::from_toml_str(
            r##"
            [[moods]]
            id = "bad"
            name = "Bad"
            icon = "B"
            description = ""
            colors = ["#112233", "#223344", "#334455", "oops"]
            "##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn rejects_duplicates_and_empty_tables() {
        assert_eq!(
            MoodRegistry::from_moods(Vec::new()).unwrap_err(),
            MoodError::EmptyRegistry
        );

        let mood = Mood {
            id: "twice".to_string(),
            name: "Twice".to_string(),
            icon: "T".to_string(),
            description: String::new(),
            colors: vec![
                "#112233".to_string(),
                "#223344".to_string(),
                "#334455".to_string(),
                "#445566".to_string(),
            ],
        };
        assert_eq!(
            MoodRegistry::from_moods(vec![mood.clone(), mood]).unwrap_err(),
            MoodError::DuplicateMood("twice".to_string())
        );
    }
}
