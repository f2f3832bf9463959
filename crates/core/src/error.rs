use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}
