use nalgebra::Matrix4;
use ndarray::Array3;
use nifti::NiftiHeader;

/// One acquired scan, positioned in scanner space by its affine.
///
/// The affine maps a homogeneous voxel index (x, y, z, 1) to a physical
/// scanner coordinate. The header rides along so outputs can be written
/// against a real reference header; the algorithms only touch `img` and
/// `affine`.
#[derive(Debug, Clone)]
pub struct Station {
    pub img: Array3<f64>,
    pub affine: Matrix4<f64>,
    pub header: NiftiHeader,
}

impl Station {
    pub fn new(img: Array3<f64>, affine: Matrix4<f64>, header: NiftiHeader) -> Self {
        Self {
            img,
            affine,
            header,
        }
    }
}

/// A finished result, already cast to the int16 range standard for nifti files.
#[derive(Debug, Clone)]
pub struct OutputVolume {
    pub img: Array3<i16>,
    pub affine: Matrix4<f64>,
    pub header: NiftiHeader,
}
