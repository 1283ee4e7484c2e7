#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use image::{GrayImage, Luma};

    use crate::frame_pipeline::common::error::{PreprocessError, Result};
    use crate::frame_pipeline::frame::{FrameBuffer, FrameView};
    use crate::frame_pipeline::ops::VisionOps;
    use crate::frame_pipeline::preprocess::pipeline::{FramePreprocessor, preprocess_frame};
    use crate::frame_pipeline::preprocess::types::PreprocessConfig;

    struct MockOps {
        fail_grayscale: bool,
        stages: Arc<Mutex<Vec<&'static str>>>,
    }

    impl MockOps {
        fn new(stages: Arc<Mutex<Vec<&'static str>>>) -> Self {
            Self {
                fail_grayscale: false,
                stages,
            }
        }

        fn failing(stages: Arc<Mutex<Vec<&'static str>>>) -> Self {
            Self {
                fail_grayscale: true,
                stages,
            }
        }
    }

    impl VisionOps for MockOps {
        fn to_grayscale(&self, frame: &FrameView<'_>) -> Result<GrayImage> {
            if self.fail_grayscale {
                return Err(PreprocessError::UnsupportedChannels(frame.channels()));
            }
            self.stages.lock().unwrap().push("grayscale");
            Ok(GrayImage::from_pixel(
                frame.width(),
                frame.height(),
                Luma([0u8]),
            ))
        }

        fn gaussian_blur(&self, image: &GrayImage, _sigma: f32) -> GrayImage {
            self.stages.lock().unwrap().push("blur");
            image.clone()
        }

        fn detect_edges(
            &self,
            image: &GrayImage,
            _low_threshold: f32,
            _high_threshold: f32,
        ) -> GrayImage {
            self.stages.lock().unwrap().push("edges");
            image.clone()
        }

        fn replicate_channels(&self, image: &GrayImage) -> Result<FrameBuffer> {
            self.stages.lock().unwrap().push("replicate");
            let (width, height) = image.dimensions();
            FrameBuffer::new(vec![0u8; (width * height * 3) as usize], height, width, 3)
        }
    }

    /// Interleaved BGR frame split into a dark top half and a bright bottom
    /// half.
    fn two_band_frame(height: u32, width: u32, channels: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity((height * width * channels) as usize);
        for y in 0..height {
            let value = if y < height / 2 { 0u8 } else { 255u8 };
            for _ in 0..width * channels {
                data.push(value);
            }
        }
        data
    }

    #[test]
    fn test_config_builder() {
        let config = PreprocessConfig::builder()
            .low_threshold(20.0)
            .high_threshold(60.0)
            .build();

        assert_eq!(config.low_threshold, 20.0);
        assert_eq!(config.high_threshold, 60.0);
        assert_eq!(config.blur_sigma, PreprocessConfig::default().blur_sigma);
    }

    #[test]
    fn test_stages_run_in_order() {
        let stages = Arc::new(Mutex::new(Vec::new()));
        let preprocessor = FramePreprocessor::with_custom(
            MockOps::new(stages.clone()),
            PreprocessConfig::default(),
        );

        let data = vec![0u8; 4 * 4 * 3];
        let frame = FrameView::new(&data, 4, 4, 3).unwrap();
        let result = preprocessor.preprocess(&frame);

        assert!(result.is_ok());
        assert_eq!(
            *stages.lock().unwrap(),
            vec!["grayscale", "blur", "edges", "replicate"]
        );
    }

    #[test]
    fn test_failing_primitive_stops_pipeline() {
        let stages = Arc::new(Mutex::new(Vec::new()));
        let preprocessor = FramePreprocessor::with_custom(
            MockOps::failing(stages.clone()),
            PreprocessConfig::default(),
        );

        let data = vec![0u8; 4 * 4 * 3];
        let frame = FrameView::new(&data, 4, 4, 3).unwrap();
        let result = preprocessor.preprocess(&frame);

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            PreprocessError::UnsupportedChannels(_)
        ));
        assert!(stages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_wrong_buffer_length() {
        let data = vec![0u8; 10];
        let result = FrameView::new(&data, 4, 4, 3);

        assert!(matches!(
            result.unwrap_err(),
            PreprocessError::ShapeMismatch {
                expected: 48,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let result = FrameView::new(&[], 0, 4, 3);

        assert!(matches!(
            result.unwrap_err(),
            PreprocessError::EmptyDimensions { .. }
        ));
    }

    #[test]
    fn test_rejects_unsupported_channel_count() {
        let data = vec![0u8; 4 * 4 * 4];
        let result = FrameView::new(&data, 4, 4, 4);

        assert!(matches!(
            result.unwrap_err(),
            PreprocessError::UnsupportedChannels(4)
        ));
    }

    #[test]
    fn test_constant_frame_has_no_edges() {
        let data = vec![0u8; 4 * 4 * 3];
        let frame = FrameView::new(&data, 4, 4, 3).unwrap();

        let output = preprocess_frame(&frame).unwrap();

        assert_eq!(output.height(), 4);
        assert_eq!(output.width(), 4);
        assert_eq!(output.channels(), 3);
        assert!(output.data().iter().all(|&sample| sample == 0));
    }

    #[test]
    fn test_band_boundary_is_marked() {
        let data = two_band_frame(16, 16, 3);
        let frame = FrameView::new(&data, 16, 16, 3).unwrap();

        let output = preprocess_frame(&frame).unwrap();

        // The edge map is binary, replicated across all three channels.
        assert!(output.data().iter().all(|&s| s == 0 || s == 255));
        for pixel in output.data().chunks_exact(3) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }

        assert!(output.data().contains(&255));

        // Rows far from the band boundary stay flat after smoothing.
        let row_bytes = 16 * 3;
        let quiet_rows = [0usize, 1, 14, 15];
        for row in quiet_rows {
            let start = row * row_bytes;
            assert!(
                output.data()[start..start + row_bytes]
                    .iter()
                    .all(|&s| s == 0),
                "row {row} should hold no edge pixels"
            );
        }
    }

    #[test]
    fn test_single_channel_input_is_accepted() {
        let data = two_band_frame(16, 16, 1);
        let frame = FrameView::new(&data, 16, 16, 1).unwrap();

        let output = preprocess_frame(&frame).unwrap();

        assert_eq!(output.height(), 16);
        assert_eq!(output.width(), 16);
        assert_eq!(output.channels(), 3);
        assert!(output.data().contains(&255));
    }

    #[test]
    fn test_identical_input_gives_identical_output() {
        let data = two_band_frame(16, 16, 3);
        let frame = FrameView::new(&data, 16, 16, 3).unwrap();

        let first = preprocess_frame(&frame).unwrap();
        let second = preprocess_frame(&frame).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_output_survives_png_round_trip() {
        let data = two_band_frame(16, 16, 3);
        let frame = FrameView::new(&data, 16, 16, 3).unwrap();
        let output = preprocess_frame(&frame).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.png");

        let encoded =
            image::RgbImage::from_raw(output.width(), output.height(), output.data().to_vec())
                .unwrap();
        encoded.save(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.as_raw().as_slice(), output.data());
    }
}
