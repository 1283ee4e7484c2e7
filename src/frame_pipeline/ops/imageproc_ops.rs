//! Vision primitives backed by the `image` and `imageproc` crates.
//!
//! The pipeline treats these crates as a trusted external collaborator:
//! kernel coefficients, gradient computation, and hysteresis inside the blur
//! and edge-detection primitives are theirs, not re-specified here.

use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

use crate::frame_pipeline::common::error::{PreprocessError, Result};
use crate::frame_pipeline::frame::{FrameBuffer, FrameView};
use crate::frame_pipeline::ops::vision_ops::VisionOps;

/// BT.601 luma weights, applied to interleaved BGR samples.
const LUMA_BLUE: f32 = 0.114;
const LUMA_GREEN: f32 = 0.587;
const LUMA_RED: f32 = 0.299;

/// Production [`VisionOps`] implementation.
///
/// Stateless; a single instance is safe to share across threads and calls.
pub struct ImageprocOps;

impl VisionOps for ImageprocOps {
    /// Collapses a frame to a single luma channel.
    ///
    /// Three-channel input is reduced with the BT.601 weighted sum in BGR
    /// order. Single-channel input already is the luma plane and is carried
    /// over unchanged.
    fn to_grayscale(&self, frame: &FrameView<'_>) -> Result<GrayImage> {
        debug!(
            "Converting {}x{}x{} frame to grayscale",
            frame.width(),
            frame.height(),
            frame.channels()
        );

        let luma: Vec<u8> = match frame.channels() {
            1 => frame.data().to_vec(),
            _ => frame
                .data()
                .chunks_exact(3)
                .map(|bgr| {
                    let weighted = LUMA_BLUE * bgr[0] as f32
                        + LUMA_GREEN * bgr[1] as f32
                        + LUMA_RED * bgr[2] as f32;
                    weighted.round() as u8
                })
                .collect(),
        };

        let expected = frame.width() as usize * frame.height() as usize;
        let actual = luma.len();
        GrayImage::from_raw(frame.width(), frame.height(), luma)
            .ok_or(PreprocessError::ShapeMismatch { expected, actual })
    }

    fn gaussian_blur(&self, image: &GrayImage, sigma: f32) -> GrayImage {
        gaussian_blur_f32(image, sigma)
    }

    fn detect_edges(
        &self,
        image: &GrayImage,
        low_threshold: f32,
        high_threshold: f32,
    ) -> GrayImage {
        canny(image, low_threshold, high_threshold)
    }

    /// Spreads the single edge channel across all three output channels.
    ///
    /// No color is synthesized; the copy exists so downstream consumers see
    /// a uniform three-channel frame.
    fn replicate_channels(&self, image: &GrayImage) -> Result<FrameBuffer> {
        let (width, height) = image.dimensions();
        let mut data = Vec::with_capacity(image.as_raw().len() * 3);
        for &luma in image.as_raw() {
            data.extend_from_slice(&[luma, luma, luma]);
        }
        FrameBuffer::new(data, height, width, 3)
    }
}
