use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Viewer configuration was given but could not be parsed as JSON.
    #[error("invalid viewer config: {message}")]
    InvalidConfig { message: String },

    /// A downstream renderer rejected the diagram description.
    #[error("render failed: {message}")]
    RenderRejected { message: String },
}
