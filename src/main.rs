//! Commandline utility to stitch two overlapping nifti stations or to mask a
//! single nifti volume.
//!
//! The `stitch` task sorts two stations by their physical z-position, averages
//! the voxels in the overlap region, and writes one continuous volume. The
//! `mask` task smooths a volume with a median filter, binarizes it with Otsu
//! thresholding, and writes the resulting 0/1 volume.

use clap::Parser;
use std::path::Path;

use stitchnii::error::Error;
use stitchnii::mask::{self, DEFAULT_MEDIAN_RADIUS};
use stitchnii::{io, stitch};

// use clap to create commandline interface
#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Args {
    /// base directory for both input and output files
    #[arg(long)]
    dir: String,

    /// the task to run: 'stitch' or 'mask'
    #[arg(long)]
    task: String,

    /// filename stem (without .nii.gz) of the first/only input volume
    #[arg(long = "input_1")]
    input_1: String,

    /// filename stem of the second input volume (stitch only)
    #[arg(long = "input_2")]
    input_2: Option<String>,

    /// filename stem for the result
    #[arg(long)]
    output: String,

    /// radius of the median filter (mask only)
    #[arg(long = "blur_param")]
    blur_param: Option<usize>,
}

// main function parses commandline arguments and runs the selected task
fn main() {
    let cli = Args::parse();
    let dir = Path::new(&cli.dir);

    // the first input is needed for either task
    let input_path_1 = io::volume_path(dir, &cli.input_1);
    println!("Loading: {}", input_path_1.display());
    let station_1 = io::load_station(&input_path_1).unwrap_or_else(|e| {
        eprintln!("Error! {}", e);
        std::process::exit(-2);
    });

    let result = match cli.task.as_str() {
        "stitch" => {
            let input_2 = cli.input_2.unwrap_or_else(|| {
                eprintln!("Error! {}", Error::MissingInput2);
                std::process::exit(-2);
            });
            let input_path_2 = io::volume_path(dir, &input_2);
            println!("Loading: {}", input_path_2.display());
            let station_2 = io::load_station(&input_path_2).unwrap_or_else(|e| {
                eprintln!("Error! {}", e);
                std::process::exit(-2);
            });
            stitch::stitch(station_1, station_2)
        }
        "mask" => {
            let median_radius = cli.blur_param.unwrap_or(DEFAULT_MEDIAN_RADIUS);
            println!("Masking with median filter radius: {}", median_radius);
            mask::mask(station_1, median_radius)
        }
        other => {
            eprintln!("Error! {}", Error::UnsupportedTask(other.to_string()));
            std::process::exit(-2);
        }
    }
    .unwrap_or_else(|e| {
        eprintln!("Error! {}", e);
        std::process::exit(-2);
    });

    println!("Output shape: {:?}", result.img.shape());
    let output_path = io::volume_path(dir, &cli.output);
    io::save_volume(&output_path, &result).unwrap_or_else(|e| {
        eprintln!("Error! {}", e);
        std::process::exit(-2);
    });
    println!("Saved: {}", output_path.display());
}
