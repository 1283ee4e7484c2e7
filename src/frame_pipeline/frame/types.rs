//! Frame buffer descriptor types

use crate::frame_pipeline::common::error::{PreprocessError, Result};

/// Borrowed view over a caller-owned frame buffer.
///
/// Samples are 8-bit unsigned, row-major, interleaved `(height, width,
/// channels)`. Three-channel data is interpreted as BGR. The shape is
/// validated once here; downstream stages trust the descriptor.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    data: &'a [u8],
    height: u32,
    width: u32,
    channels: u32,
}

impl<'a> FrameView<'a> {
    /// Wraps `data` without copying.
    ///
    /// Fails if either dimension is zero, the channel count is not 1 or 3,
    /// or `data` is not exactly `height * width * channels` bytes long.
    pub fn new(data: &'a [u8], height: u32, width: u32, channels: u32) -> Result<Self> {
        validate_shape(data.len(), height, width, channels)?;
        Ok(Self {
            data,
            height,
            width,
            channels,
        })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }
}

/// Owned frame buffer returned by the pipeline.
///
/// Holds its own storage, independent of any input the caller supplied, so
/// it stays valid after the input buffer is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    data: Vec<u8>,
    height: u32,
    width: u32,
    channels: u32,
}

impl FrameBuffer {
    /// Takes ownership of `data`, applying the same shape validation as
    /// [`FrameView::new`].
    pub fn new(data: Vec<u8>, height: u32, width: u32, channels: u32) -> Result<Self> {
        validate_shape(data.len(), height, width, channels)?;
        Ok(Self {
            data,
            height,
            width,
            channels,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Re-borrows the buffer as a pipeline input.
    pub fn as_view(&self) -> FrameView<'_> {
        FrameView {
            data: &self.data,
            height: self.height,
            width: self.width,
            channels: self.channels,
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

fn validate_shape(len: usize, height: u32, width: u32, channels: u32) -> Result<()> {
    if height == 0 || width == 0 {
        return Err(PreprocessError::EmptyDimensions { width, height });
    }
    if channels != 1 && channels != 3 {
        return Err(PreprocessError::UnsupportedChannels(channels));
    }
    let expected = height as usize * width as usize * channels as usize;
    if len != expected {
        return Err(PreprocessError::ShapeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}
