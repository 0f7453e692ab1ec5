use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::ai::Difficulty;
use crate::error::{ConfigError, ParseError};
use crate::game::Player;

/// Who sits at the board: one human against the computer, or two humans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Single,
    Two,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::Single => "1 Player vs Computer",
            GameMode::Two => "2 Players",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" | "1-player" => Ok(GameMode::Single),
            "two" | "2" | "2-player" => Ok(GameMode::Two),
            _ => Err(ParseError::Mode(s.to_string())),
        }
    }
}

/// Game setup: mode, the human's colour and the computer's tier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Colour played by the human in single-player mode.
    pub human: Player,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::Single,
            human: Player::Red,
            difficulty: Difficulty::Low,
        }
    }
}

impl GameConfig {
    /// The colour the computer plays, if any.
    pub fn computer_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::Single => Some(self.human.other()),
            GameMode::Two => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the Trivial tier's RNG. Unset means seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the terminal UI waits for a key press per frame.
    pub poll_interval_ms: u64,
    /// Pause before the computer answers, so the human's piece is seen landing.
    pub computer_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            computer_delay_ms: 300,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 || self.ui.poll_interval_ms > 1_000 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be in [1, 1000]".into(),
            ));
        }
        if self.ui.computer_delay_ms > 5_000 {
            return Err(ConfigError::Validation(
                "ui.computer_delay_ms must be <= 5000".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.mode, GameMode::Single);
        assert_eq!(config.game.human, Player::Red);
        assert_eq!(config.game.difficulty, Difficulty::Low);
        assert_eq!(config.engine.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
difficulty = "high"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::High);
        // Other fields should be defaults
        assert_eq!(config.game.human, Player::Red);
        assert_eq!(config.ui.poll_interval_ms, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_legacy_difficulty_labels_are_accepted() {
        let config: AppConfig = toml::from_str("[game]\ndifficulty = \"insane\"\n").unwrap();
        assert_eq!(config.game.difficulty, Difficulty::High);
        let config: AppConfig = toml::from_str("[game]\ndifficulty = \"easy\"\n").unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Trivial);
    }

    #[test]
    fn test_unknown_difficulty_is_a_parse_error() {
        let err = toml::from_str::<AppConfig>("[game]\ndifficulty = \"extreme\"\n").unwrap_err();
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_computer_delay() {
        let mut config = AppConfig::default();
        config.ui.computer_delay_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
mode = "two"

[engine]
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.mode, GameMode::Two);
        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.game.computer_player(), None);
        // Others are defaults
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\npoll_interval_ms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_computer_plays_the_other_colour() {
        let mut game = GameConfig::default();
        assert_eq!(game.computer_player(), Some(Player::Yellow));
        game.human = Player::Yellow;
        assert_eq!(game.computer_player(), Some(Player::Red));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("2".parse::<GameMode>(), Ok(GameMode::Two));
        assert_eq!("Single".parse::<GameMode>(), Ok(GameMode::Single));
        assert!("three".parse::<GameMode>().is_err());
    }
}
