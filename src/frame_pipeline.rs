//! Frame preprocessing pipeline module
//!
//! This module provides a structured approach to frame preprocessing, with
//! separate modules for buffer descriptors, vision primitives, and pipeline
//! orchestration.

pub mod common;
pub mod frame;
pub mod ops;
pub mod preprocess;

pub use common::{
    PreprocessError,
    Result,
};

pub use frame::{
    FrameBuffer,
    FrameView,
};

pub use ops::{
    ImageprocOps,
    VisionOps,
};

pub use preprocess::{
    FramePreprocessor,
    PreprocessConfig,
    PreprocessConfigBuilder,
    preprocess_frame,
};
