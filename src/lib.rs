//! Frame preprocessing for downstream vision consumers.
//!
//! Wraps caller-owned byte buffers in a validated descriptor, runs a fixed
//! grayscale, blur, edge-detection, channel-replication pipeline, and hands
//! back a freshly allocated three-channel frame.

pub mod frame_pipeline;
pub mod logger;

pub use frame_pipeline::{
    FrameBuffer, FramePreprocessor, FrameView, ImageprocOps, PreprocessConfig,
    PreprocessConfigBuilder, PreprocessError, Result, VisionOps, preprocess_frame,
};
