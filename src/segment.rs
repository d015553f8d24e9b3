//! Median-filter smoothing and automatic Otsu thresholding.

use ndarray::Array3;

use crate::error::{Error, Result};

/// Histogram resolution used by Otsu's method.
const OTSU_BINS: usize = 256;

/// Smooths a volume with a median filter and binarizes it with an automatic
/// histogram-based Otsu threshold.
///
/// Returns the smoothed volume together with a boolean foreground mask of the
/// same shape. `median_radius` is the radius of the cubic filter window.
pub fn median_otsu(
    img: &Array3<f64>,
    median_radius: usize,
) -> Result<(Array3<f64>, Array3<bool>)> {
    if median_radius == 0 {
        return Err(Error::Segmentation(
            "median filter radius must be positive".to_string(),
        ));
    }
    let smoothed = median_filter(img, median_radius);
    let threshold = otsu_threshold(&smoothed)?;
    let mask = smoothed.mapv(|v| v > threshold);
    Ok((smoothed, mask))
}

/// 3D median filter with a cubic window of the given radius.
///
/// At the volume boundary the window shrinks to the in-bounds voxels rather
/// than padding, so border voxels take the median of a smaller neighborhood.
fn median_filter(img: &Array3<f64>, radius: usize) -> Array3<f64> {
    let (nx, ny, nz) = img.dim();
    let r = radius as isize;
    let mut out = Array3::<f64>::zeros((nx, ny, nz));
    let mut window = Vec::with_capacity((2 * radius + 1).pow(3));

    for x in 0..nx {
        for y in 0..ny {
            for z in 0..nz {
                window.clear();
                for wx in x as isize - r..=x as isize + r {
                    if wx < 0 || wx >= nx as isize {
                        continue;
                    }
                    for wy in y as isize - r..=y as isize + r {
                        if wy < 0 || wy >= ny as isize {
                            continue;
                        }
                        for wz in z as isize - r..=z as isize + r {
                            if wz < 0 || wz >= nz as isize {
                                continue;
                            }
                            window.push(img[[wx as usize, wy as usize, wz as usize]]);
                        }
                    }
                }
                window.sort_by(|a, b| a.total_cmp(b));
                out[[x, y, z]] = window[window.len() / 2];
            }
        }
    }
    out
}

/// Otsu's method: the threshold that maximizes inter-class variance over a
/// 256-bin histogram. The returned threshold sits at a bin edge.
fn otsu_threshold(img: &Array3<f64>) -> Result<f64> {
    let min_val = img.iter().fold(f64::MAX, |a, &b| a.min(b));
    let max_val = img.iter().fold(f64::MIN, |a, &b| a.max(b));

    if !(max_val - min_val).is_finite() || (max_val - min_val).abs() < 1e-10 {
        return Err(Error::Segmentation(
            "degenerate histogram: volume has a single intensity".to_string(),
        ));
    }

    let bin_width = (max_val - min_val) / OTSU_BINS as f64;
    let mut histogram = vec![0usize; OTSU_BINS];
    for &v in img {
        let bin = (((v - min_val) / bin_width).floor() as usize).min(OTSU_BINS - 1);
        histogram[bin] += 1;
    }

    let total = img.len() as f64;
    let mut sum_total = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_total += i as f64 * count as f64;
    }

    let mut sum_background = 0.0;
    let mut weight_background = 0.0;
    let mut max_variance = 0.0;
    let mut best_bin = 0;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count as f64;
        if weight_background == 0.0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }

        sum_background += t as f64 * count as f64;
        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum_total - sum_background) / weight_foreground;

        let variance =
            weight_background * weight_foreground * (mean_background - mean_foreground).powi(2);
        if variance > max_variance {
            max_variance = variance;
            best_bin = t;
        }
    }

    Ok(min_val + best_bin as f64 * bin_width)
}
