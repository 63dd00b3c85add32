#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("packing request contains no nodes")]
    EmptyNodes,
    #[error("node {id}: value must be a finite positive number, got {value}")]
    InvalidValue { id: String, value: f32 },
    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
    #[error("protected top height {protected} does not leave room on a canvas of height {height}")]
    ProtectedBandTooTall { protected: f32, height: f32 },
    #[error("area budget fraction must lie in (0, 1), got {fraction}")]
    InvalidBudget { fraction: f32 },
    #[error("size bounds invalid: min {min} must be positive and not exceed max {max}")]
    InvalidSizeBounds { min: f32, max: f32 },
    #[error("chart height must be positive, got {height}")]
    InvalidChartHeight { height: f32 },
    #[error("label grid size must be positive, got {grid_size}")]
    InvalidGridSize { grid_size: f32 },
    #[error("label {id}: anchor and height must be finite, height positive (anchor {anchor_y}, height {height})")]
    InvalidLabel {
        id: String,
        anchor_y: f32,
        height: f32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
