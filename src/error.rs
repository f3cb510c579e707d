use thiserror::Error;

/// Gateway-level failures surfaced to the UI. Reads never bubble `Remote`
/// up to pages; the gateways swallow it and hand back an empty collection
/// so list views degrade to their empty state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Remote(String),

    /// Raised by form parsing before any store call is made.
    #[error("{0}")]
    Validation(String),
}

impl Error {
    /// The one validation failure every create/edit form can produce.
    pub fn required_fields() -> Error {
        Error::Validation("Please fill in all required fields".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
