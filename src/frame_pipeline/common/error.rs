use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("frame buffer holds {actual} bytes but the declared height x width x channels shape needs {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid frame dimensions: width={width}, height={height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(u32),
}

pub type Result<T> = std::result::Result<T, PreprocessError>;
