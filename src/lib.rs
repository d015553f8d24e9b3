//! Library for stitching and masking NIfTI volumes.
//!
//! Two operations on 3D neuroimaging data are provided: stitching two
//! overlapping stations acquired along the scanner z-axis into a single
//! continuous volume, and deriving a binary foreground mask from a single
//! volume with a median filter followed by Otsu thresholding.

pub mod common;
pub mod error;
pub mod io;
pub mod mask;
pub mod segment;
pub mod stitch;
