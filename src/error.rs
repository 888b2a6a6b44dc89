use thiserror::Error;

pub type PickerResult<T> = Result<T, PickerError>;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid month: year={year}, month={month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Returned by `Renderer` implementations when a frame cannot be drawn.
    /// The engine propagates it unchanged from the request that rendered.
    #[error("render failed: {0}")]
    Render(String),
}
