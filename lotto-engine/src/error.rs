use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Lotto core error: {0}")]
    Core(#[from] lotto_core::LottoError),

    #[error("No draw date after {0}")]
    CalendarOverflow(chrono::NaiveDate),

    #[error("Random source error: {0}")]
    RandomSource(String),
}

impl DrawError {
    /// True when the request was refused before any state changed.
    pub fn is_rejection(&self) -> bool {
        match self {
            DrawError::Core(e) => e.is_rejection(),
            _ => false,
        }
    }
}
