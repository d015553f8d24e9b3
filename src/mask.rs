//! Binary foreground masking of a single station.

use crate::common::{OutputVolume, Station};
use crate::error::Result;
use crate::segment;

/// Median filter radius used when the user does not pass `--blur_param`.
pub const DEFAULT_MEDIAN_RADIUS: usize = 4;

/// Creates a volumetric binary mask from a station.
///
/// Smoothing and thresholding are delegated to [`segment::median_otsu`]; the
/// smoothed volume is discarded and the boolean mask is converted to an
/// integer 0/1 volume. The station's affine and header pass through
/// unchanged.
pub fn mask(station: Station, median_radius: usize) -> Result<OutputVolume> {
    let (_smoothed, foreground) = segment::median_otsu(&station.img, median_radius)?;
    let img = foreground.mapv(|v| v as i16);
    Ok(OutputVolume {
        img,
        affine: station.affine,
        header: station.header,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix4;
    use ndarray::Array3;
    use nifti::NiftiHeader;

    fn two_block_station() -> Station {
        // x < 6 is dim background, x >= 6 is bright foreground; large enough
        // that even a radius-4 window never swallows the whole volume
        let mut img = Array3::<f64>::zeros((12, 12, 12));
        for x in 6..12 {
            for y in 0..12 {
                for z in 0..12 {
                    img[[x, y, z]] = 250.0;
                }
            }
        }
        let mut affine = Matrix4::identity();
        affine[(0, 3)] = -12.5;
        affine[(2, 3)] = 40.0;
        Station::new(img, affine, NiftiHeader::default())
    }

    #[test]
    fn mask_is_binary() {
        let out = mask(two_block_station(), 1).unwrap();
        assert!(out.img.iter().all(|&v| v == 0 || v == 1));
        assert!(out.img.iter().any(|&v| v == 1));
        assert!(out.img.iter().any(|&v| v == 0));
    }

    #[test]
    fn mask_keeps_the_input_affine() {
        let station = two_block_station();
        let affine = station.affine;
        let out = mask(station, 1).unwrap();
        assert_eq!(out.affine, affine);
        assert_eq!(out.img.dim(), (12, 12, 12));
    }

    #[test]
    fn default_radius_is_four() {
        assert_eq!(DEFAULT_MEDIAN_RADIUS, 4);
        // passing the default explicitly gives the same mask
        let explicit = mask(two_block_station(), 4).unwrap();
        let default = mask(two_block_station(), DEFAULT_MEDIAN_RADIUS).unwrap();
        assert_eq!(explicit.img, default.img);
    }
}
