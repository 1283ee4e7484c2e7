use tracing::{info, instrument};

use crate::frame_pipeline::{
    common::error::Result,
    frame::{FrameBuffer, FrameView},
    ops::{ImageprocOps, VisionOps},
    preprocess::types::PreprocessConfig,
};

/// Fixed four-stage preprocessing pipeline: grayscale, Gaussian blur, Canny
/// edge detection, channel replication.
///
/// Generic over [`VisionOps`] so the primitives can be substituted; every
/// call is independent and holds no cross-call state.
pub struct FramePreprocessor<V: VisionOps> {
    ops: V,
    config: PreprocessConfig,
}

impl FramePreprocessor<ImageprocOps> {
    pub fn new(config: PreprocessConfig) -> Self {
        Self {
            ops: ImageprocOps,
            config,
        }
    }
}

impl<V: VisionOps> FramePreprocessor<V> {
    pub fn with_custom(ops: V, config: PreprocessConfig) -> Self {
        Self { ops, config }
    }

    /// Runs the four stages over `frame` and returns a freshly allocated
    /// three-channel buffer of the same height and width.
    ///
    /// `frame` was validated on construction; nothing is re-checked here.
    #[instrument(skip(self, frame), fields(
        width = frame.width(),
        height = frame.height(),
        channels = frame.channels()
    ))]
    pub fn preprocess(&self, frame: &FrameView<'_>) -> Result<FrameBuffer> {
        info!("Starting frame preprocessing");

        let gray = {
            let _span = tracing::info_span!("to_grayscale").entered();
            self.ops.to_grayscale(frame)?
        };

        let blurred = {
            let _span =
                tracing::info_span!("gaussian_blur", sigma = self.config.blur_sigma).entered();
            self.ops.gaussian_blur(&gray, self.config.blur_sigma)
        };

        let edges = {
            let _span = tracing::info_span!(
                "detect_edges",
                low = self.config.low_threshold,
                high = self.config.high_threshold
            )
            .entered();
            self.ops
                .detect_edges(&blurred, self.config.low_threshold, self.config.high_threshold)
        };

        let output = {
            let _span = tracing::info_span!("replicate_channels").entered();
            self.ops.replicate_channels(&edges)?
        };

        info!(
            width = output.width(),
            height = output.height(),
            "Frame preprocessing complete"
        );
        Ok(output)
    }

    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PreprocessConfig) {
        self.config = config;
    }
}

/// One-call surface: runs the pipeline with the default configuration and
/// the production primitives.
pub fn preprocess_frame(frame: &FrameView<'_>) -> Result<FrameBuffer> {
    FramePreprocessor::new(PreprocessConfig::default()).preprocess(frame)
}
