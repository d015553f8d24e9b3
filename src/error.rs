use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in either task. All of these are fatal at the
/// commandline boundary; the library surfaces them as `Result` so callers can
/// decide.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("unsupported task: '{0}' (expected 'stitch' or 'mask')")]
    UnsupportedTask(String),

    #[error("task 'stitch' requires --input_2")]
    MissingInput2,

    #[error("expected a 3D volume, got {0} dimensions")]
    NotThreeDimensional(usize),

    #[error("station x/y extents do not match: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),

    #[error(
        "computed z-overlap of {overlap} voxels is outside the stations' extents \
         (bottom: {bottom_z}, top: {top_z})"
    )]
    OverlapOutOfRange {
        overlap: isize,
        bottom_z: usize,
        top_z: usize,
    },

    #[error("segmentation failed: {0}")]
    Segmentation(String),

    #[error(transparent)]
    Nifti(#[from] nifti::NiftiError),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
