use std::fmt;

/// TUI error types
#[derive(Debug, Clone)]
pub enum TuiError {
    Configuration(String),
    FileSystem(String),
    Catalog(String),
    Bridge(String),
    Internal(String),
}

impl fmt::Display for TuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuiError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            TuiError::FileSystem(msg) => write!(f, "File system error: {}", msg),
            TuiError::Catalog(msg) => write!(f, "Catalog error: {}", msg),
            TuiError::Bridge(msg) => write!(f, "Host bridge error: {}", msg),
            TuiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for TuiError {}

impl TuiError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn file_system(msg: impl Into<String>) -> Self {
        Self::FileSystem(msg.into())
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn bridge(msg: impl Into<String>) -> Self {
        Self::Bridge(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// Auto-convert common error types
impl From<std::io::Error> for TuiError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem(err.to_string())
    }
}

impl From<toml::de::Error> for TuiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for TuiError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Configuration(format!("TOML serialization error: {}", err))
    }
}

pub type TuiResult<T> = Result<T, TuiError>;
