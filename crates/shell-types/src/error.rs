use std::fmt;

/// Failure while loading a UI configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The contents were not valid TOML or had the wrong shape.
    Parse { message: String },
}

impl ConfigError {
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::Parse {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => write!(f, "failed to read {path}: {message}"),
            ConfigError::Parse { message } => write!(f, "invalid UI config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::parse(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = ConfigError::io("ui.toml", "not found");
        assert_eq!(err.to_string(), "failed to read ui.toml: not found");
    }

    #[test]
    fn display_parse() {
        let err = ConfigError::parse("expected a table");
        assert_eq!(err.to_string(), "invalid UI config: expected a table");
    }
}
