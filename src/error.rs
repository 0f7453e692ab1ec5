use std::path::PathBuf;

/// Errors returned when a piece cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("column index {0} is out of range (expected 0..7)")]
    InvalidColumn(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors produced when parsing user-facing names (CLI flags, config values).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown player '{0}' (expected red or yellow)")]
    Player(String),

    #[error("unknown difficulty '{0}' (expected trivial, low, medium or high)")]
    Difficulty(String),

    #[error("unknown game mode '{0}' (expected single or two)")]
    Mode(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_is_one_based() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 4 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column index 9 is out of range (expected 0..7)"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Difficulty("nightmare".to_string());
        assert_eq!(
            err.to_string(),
            "unknown difficulty 'nightmare' (expected trivial, low, medium or high)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.poll_interval_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.poll_interval_ms must be > 0"
        );
    }
}
