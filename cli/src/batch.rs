use phosphor_rendr::{ConversionSummary, PhosphorConfig, PhosphorError, convert_file};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions picked up in batch mode (compared lowercase)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Outcome of a directory run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<(PathBuf, ConversionSummary)>,
    pub failed: Vec<(PathBuf, PhosphorError)>,
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

/// `photo.jpg` -> `photo_crt.png` next to the input
pub fn default_single_output(input: &Path) -> PathBuf {
    input.with_file_name(format!("{}_crt.png", file_stem(input)))
}

/// `shots/` -> `shots_processed/` next to the input directory
pub fn default_batch_output(input_dir: &Path) -> PathBuf {
    match input_dir.file_name() {
        Some(name) => input_dir.with_file_name(format!("{}_processed", name.to_string_lossy())),
        None => input_dir.join("crt_processed"),
    }
}

/// `photo.jpg` -> `<output_dir>/crt_photo.png`
pub fn batch_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    output_dir.join(format!("crt_{}.png", file_stem(input)))
}

/// Image files directly inside `dir`, sorted by path
pub fn collect_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Convert every image in `input_dir` into `output_dir`
///
/// Files are converted in parallel. A failing file is recorded in the
/// report and does not stop the rest.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    config: &PhosphorConfig,
) -> Result<BatchReport, PhosphorError> {
    config.validate()?;

    let images = collect_images(input_dir)?;
    fs::create_dir_all(output_dir)?;
    log::info!(
        "batch: {} image(s) from {} into {}",
        images.len(),
        input_dir.display(),
        output_dir.display()
    );

    let results: Vec<_> = images
        .into_par_iter()
        .map(|input| {
            let output = batch_output_path(output_dir, &input);
            let result = convert_file(&input, &output, config);
            (input, result)
        })
        .collect();

    let mut report = BatchReport::default();
    for (input, result) in results {
        match result {
            Ok(summary) => report.converted.push((input, summary)),
            Err(e) => {
                log::error!("failed to process {}: {}", input.display(), e);
                report.failed.push((input, e));
            }
        }
    }

    Ok(report)
}
