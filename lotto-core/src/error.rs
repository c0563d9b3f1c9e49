use crate::types::Role;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Invalid ticket number '{0}': expected exactly 6 digits")]
    InvalidTicketNumber(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unauthorized: {required:?} role required, actor {actor_id} is {actual:?}")]
    Unauthorized {
        actor_id: u64,
        required: Role,
        actual: Role,
    },

    #[error("Unknown actor: {0}")]
    UnknownActor(u64),

    #[error("User already exists: {username}")]
    UserExists { username: String },

    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LottoError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    /// True for errors caused by the caller's input rather than by the system.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidTicketNumber(_)
                | Self::InvalidDate(_)
                | Self::Unauthorized { .. }
                | Self::UnknownActor(_)
                | Self::UserExists { .. }
                | Self::InvalidUsername(_)
        )
    }
}
