use anyhow::{Context, Result};
use tracing::{error, info};

use vision_preproc::logger;
use vision_preproc::{FramePreprocessor, FrameView, ImageprocOps, PreprocessConfig};

fn main() -> Result<()> {
    logger::init();

    info!("Starting vision_preproc...");

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.png".to_string());
    let output = args.next().unwrap_or_else(|| "edges.png".to_string());

    let config = PreprocessConfig::builder().build();
    let preprocessor = FramePreprocessor::new(config);

    info!("Frame preprocessor initialized");
    info!(
        "Canny thresholds: {} / {}",
        preprocessor.config().low_threshold,
        preprocessor.config().high_threshold
    );
    info!("Blur sigma: {}", preprocessor.config().blur_sigma);

    match run(&preprocessor, &input, &output) {
        Ok(_) => info!("Preprocessing successful!"),
        Err(e) => error!("Preprocessing failed: {e:#}"),
    }

    Ok(())
}

fn run(preprocessor: &FramePreprocessor<ImageprocOps>, input: &str, output: &str) -> Result<()> {
    let decoded = image::open(input)
        .with_context(|| format!("failed to read {input}"))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();

    // The pipeline expects interleaved BGR; the decoder hands back RGB.
    let mut bgr = decoded.into_raw();
    for pixel in bgr.chunks_exact_mut(3) {
        pixel.swap(0, 2);
    }

    let frame = FrameView::new(&bgr, height, width, 3)?;
    let result = preprocessor.preprocess(&frame)?;

    // All three output channels are identical, so channel order no longer
    // matters on the way out.
    let encoded = image::RgbImage::from_raw(result.width(), result.height(), result.into_vec())
        .context("preprocessed frame has an inconsistent shape")?;
    encoded
        .save(output)
        .with_context(|| format!("failed to write {output}"))?;

    info!(width, height, "Wrote edge map");
    Ok(())
}
