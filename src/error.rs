use thiserror::Error;

/// Problems with the process configuration, raised before any game exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {flag} (expected `human` or `computer`)")]
    MissingPlayerKind { flag: &'static str },
    #[error("unrecognized player kind {value:?} for {flag} (expected `human` or `computer`)")]
    UnknownPlayerKind { flag: &'static str, value: String },
    #[error("malformed timed flag {0:?} (expected `yes` or `no`)")]
    MalformedTimedFlag(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown option {0}")]
    UnknownOption(String),
}

#[derive(Error, Debug)]
pub enum PigError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("input closed before {player} made a decision")]
    InputClosed { player: String },
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PigError {
    /// Process exit status: 2 for bad configuration, 1 for anything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            PigError::Config(_) => 2,
            PigError::InputClosed { .. } | PigError::Io { .. } => 1,
        }
    }
}
