//! Stitching of two overlapping stations along the scanner z-axis.

use nalgebra::Matrix4;
use ndarray::{concatenate, s, Array3, Axis};

use crate::common::{OutputVolume, Station};
use crate::error::{Error, Result};

/// Sorts two stations by their physical z-position, averages the voxels they
/// share, and concatenates them into one continuous volume.
///
/// The lowest z-position of a station is encoded in its affine, example below:
///
/// ```text
/// [a, 0, 0, xs]
/// [0, b, 0, ys]
/// [0, 0, c, zs]
/// [0, 0, 0, 1]
/// ```
///
/// here `zs` is the lowest z-position in scanner axes and `c` the
/// scanner-to-voxel scaling. Both stations are assumed to share x/y extents
/// and z voxel scale; the x/y extents and the computed overlap are checked up
/// front, everything else is taken on faith.
///
/// The output carries the bottom station's affine and header; the top
/// station's are discarded.
pub fn stitch(station_1: Station, station_2: Station) -> Result<OutputVolume> {
    // strict comparison, so two stations starting at the same z put the
    // second argument on top
    let (bottom, top) = if station_1.affine[(2, 3)] > station_2.affine[(2, 3)] {
        (station_2, station_1)
    } else {
        (station_1, station_2)
    };

    let (bx, by, bz) = bottom.img.dim();
    let (tx, ty, tz) = top.img.dim();
    if (bx, by) != (tx, ty) {
        return Err(Error::ShapeMismatch(bx, by, tx, ty));
    }

    let overlap = overlap_voxels(&bottom.affine, bottom.img.dim(), top.affine[(2, 3)]);
    if overlap < 1 || overlap as usize > bz || overlap as usize > tz {
        return Err(Error::OverlapOutOfRange {
            overlap,
            bottom_z: bz,
            top_z: tz,
        });
    }
    let overlap = overlap as usize;

    // for every shared z, average all x and y voxels from the two stations:
    // the top contributes its first `overlap` slices, the bottom its last
    let mut img_overlap = Array3::<f64>::zeros((bx, by, overlap));
    for k in 0..overlap {
        let top_slice = top.img.index_axis(Axis(2), k);
        let bottom_slice = bottom.img.index_axis(Axis(2), bz - overlap + k);
        img_overlap
            .index_axis_mut(Axis(2), k)
            .assign(&((&bottom_slice + &top_slice) / 2.0));
    }

    // bottom (minus overlap) at the lowest z, then the averaged block, then
    // top (minus overlap)
    let stitched = concatenate(
        Axis(2),
        &[
            bottom.img.slice(s![.., .., ..bz - overlap]),
            img_overlap.view(),
            top.img.slice(s![.., .., overlap..]),
        ],
    )?;

    // 16 bit signed integers are the standard at-rest format; the cast
    // truncates toward zero
    let img = stitched.mapv(|v| v as i16);
    Ok(OutputVolume {
        img,
        affine: bottom.affine,
        header: bottom.header,
    })
}

/// Number of z-slices physically present in both stations.
///
/// The bottom station's highest z-position is a dot product of row 2 of its
/// affine with the maximum voxel index `[xm, ym, zm, 1]`. Dividing the
/// distance down to the top station's z-start by the z voxel scale and adding
/// one gives the voxel count; the integer conversion truncates toward zero.
fn overlap_voxels(
    bottom_affine: &Matrix4<f64>,
    bottom_dim: (usize, usize, usize),
    top_z_start: f64,
) -> isize {
    let (xm, ym, zm) = bottom_dim;
    let bottom_z_end = bottom_affine[(2, 0)] * (xm - 1) as f64
        + bottom_affine[(2, 1)] * (ym - 1) as f64
        + bottom_affine[(2, 2)] * (zm - 1) as f64
        + bottom_affine[(2, 3)];
    ((bottom_z_end - top_z_start) / bottom_affine[(2, 2)] + 1.0) as isize
}
