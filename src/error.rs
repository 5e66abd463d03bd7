use thiserror::Error;

use crate::document::{MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};

/// Errors raised by canvas mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error(
        "Canvas size {width}x{height} is outside {}-{} x {}-{}",
        MIN_WIDTH, MAX_WIDTH, MIN_HEIGHT, MAX_HEIGHT
    )]
    SizeOutOfBounds { width: u32, height: u32 },
}

/// Errors that can occur while writing the bitmap to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
