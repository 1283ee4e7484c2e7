//! Pipeline configuration types

/// Standard deviation a 3x3 Gaussian kernel derives when none is specified.
const DERIVED_SIGMA_3X3: f32 = 0.8;

/// Default Canny thresholds, low:high kept at the conventional 1:3 ratio.
const DEFAULT_LOW_THRESHOLD: f32 = 30.0;
const DEFAULT_HIGH_THRESHOLD: f32 = 90.0;

/// Configuration for frame preprocessing
#[derive(Debug, Clone, Copy)]
pub struct PreprocessConfig {
    /// Canny low gradient-magnitude threshold
    pub low_threshold: f32,
    /// Canny high gradient-magnitude threshold
    pub high_threshold: f32,
    /// Standard deviation of the pre-detection smoothing Gaussian
    pub blur_sigma: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            blur_sigma: DERIVED_SIGMA_3X3,
        }
    }
}

impl PreprocessConfig {
    pub fn builder() -> PreprocessConfigBuilder {
        PreprocessConfigBuilder::default()
    }
}

/// Builder for PreprocessConfig
#[derive(Default)]
pub struct PreprocessConfigBuilder {
    low_threshold: Option<f32>,
    high_threshold: Option<f32>,
    blur_sigma: Option<f32>,
}

impl PreprocessConfigBuilder {
    pub fn low_threshold(mut self, threshold: f32) -> Self {
        self.low_threshold = Some(threshold);
        self
    }

    pub fn high_threshold(mut self, threshold: f32) -> Self {
        self.high_threshold = Some(threshold);
        self
    }

    pub fn blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = Some(sigma);
        self
    }

    pub fn build(self) -> PreprocessConfig {
        let default = PreprocessConfig::default();
        PreprocessConfig {
            low_threshold: self.low_threshold.unwrap_or(default.low_threshold),
            high_threshold: self.high_threshold.unwrap_or(default.high_threshold),
            blur_sigma: self.blur_sigma.unwrap_or(default.blur_sigma),
        }
    }
}
