//! Load and save glue around the `nifti` crate.

use std::path::{Path, PathBuf};

use ndarray::Ix3;
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};

use crate::common::{OutputVolume, Station};
use crate::error::{Error, Result};

/// Builds the on-disk path for a filename stem, `<dir>/<stem>.nii.gz`.
pub fn volume_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.nii.gz"))
}

/// Reads a nifti file into a [`Station`].
///
/// The volume is converted to `f64` for computation and must be exactly 3D.
/// The affine is pulled from the header (sform/qform resolution is handled by
/// the `nifti` crate) and the header itself is kept as the write-time
/// reference.
pub fn load_station(path: &Path) -> Result<Station> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let obj = ReaderOptions::new().read_file(path)?;
    let header = obj.header().clone();
    let affine = header.affine::<f64>();
    let img = obj.into_volume().into_ndarray::<f64>()?;
    if img.ndim() != 3 {
        return Err(Error::NotThreeDimensional(img.ndim()));
    }
    let img = img.into_dimensionality::<Ix3>()?;
    Ok(Station::new(img, affine, header))
}

/// Writes an [`OutputVolume`] to `path` as int16 voxel data.
///
/// The carried header is used as the writer's reference with the output
/// affine stamped into it. Nothing is written until this point, so a failed
/// run leaves any pre-existing file untouched.
pub fn save_volume(path: &Path, output: &OutputVolume) -> Result<()> {
    let mut header = output.header.clone();
    header.set_affine(&output.affine);
    WriterOptions::new(path)
        .reference_header(&header)
        .write_nifti(&output.img)?;
    Ok(())
}
