use image::GrayImage;

use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::frame::{FrameBuffer, FrameView};

/// The primitive capability set the pipeline is composed from: grayscale
/// conversion, Gaussian smoothing, edge detection, and channel replication.
pub trait VisionOps {
    fn to_grayscale(&self, frame: &FrameView<'_>) -> Result<GrayImage>;
    fn gaussian_blur(&self, image: &GrayImage, sigma: f32) -> GrayImage;
    fn detect_edges(
        &self,
        image: &GrayImage,
        low_threshold: f32,
        high_threshold: f32,
    ) -> GrayImage;
    fn replicate_channels(&self, image: &GrayImage) -> Result<FrameBuffer>;
}
