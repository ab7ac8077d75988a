use thiserror::Error;

pub type StationResult<T> = Result<T, StationError>;

/// Failures of the headless trajectory tool. The simulation itself cannot
/// fail.
#[derive(Debug, Error)]
pub enum StationError {
    #[error("expected 4 or 5 arguments: <start_x> <start_y> <end_x> <end_y> [omega], got {0}")]
    ArgumentCount(usize),

    #[error("invalid {label}: '{value}', expected a number")]
    InvalidNumber { label: &'static str, value: String },

    #[error("omega {omega} is outside [{min}, {max}]")]
    OmegaOutOfRange { omega: f32, min: f32, max: f32 },

    #[error("launch point ({x}, {y}) is outside the station")]
    StartOutsideStation { x: f32, y: f32 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not render chart: {0}")]
    Chart(String),
}
