//! Frame buffer descriptor module
//!
//! This module provides the validated byte-buffer descriptors that cross the
//! caller boundary.

pub mod types;

pub use types::{FrameBuffer, FrameView};
