mod batch;

use anyhow::{Context, bail};
use clap::Parser;
use phosphor_rendr::{ConversionSummary, Palette, PhosphorConfig, convert_file};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "phosphor")]
#[command(about = "Convert images to a monochrome CRT phosphor look")]
struct Cli {
    /// Input image file, or directory with --batch
    input: PathBuf,

    /// Output file, or directory with --batch
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Color palette: "mobile" or "shader"
    #[arg(short, long, default_value = "mobile")]
    palette: Palette,

    /// Disable the scanline effect
    #[arg(long)]
    no_scanlines: bool,

    /// Disable the glow effect
    #[arg(long)]
    no_glow: bool,

    /// Scale factor (e.g. 0.5 for half size)
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Use a solid background instead of transparent (currently has no effect)
    #[arg(long)]
    solid_bg: bool,

    /// Process all images in the input directory
    #[arg(long)]
    batch: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> PhosphorConfig {
        PhosphorConfig {
            palette: self.palette,
            scanlines: !self.no_scanlines,
            glow: !self.no_glow,
            scale: self.scale,
            transparent_background: !self.solid_bg,
        }
    }
}

fn print_summary(output: &Path, summary: &ConversionSummary) {
    println!("✓ Processed image saved to: {}", output.display());
    println!("  Size: {}x{}", summary.width, summary.height);
    println!("  Palette: {}", summary.palette);
    println!(
        "  Effects: Scanlines={}, Glow={}",
        summary.scanlines, summary.glow
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configure logging
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.config();
    config.validate()?;

    if cli.batch {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| batch::default_batch_output(&cli.input));

        let report = batch::run_batch(&cli.input, &output, &config)
            .with_context(|| format!("Failed to process directory {}", cli.input.display()))?;

        for (input, summary) in &report.converted {
            print_summary(&batch::batch_output_path(&output, input), summary);
        }
        println!(
            "\n{} converted, {} failed",
            report.converted.len(),
            report.failed.len()
        );

        if !report.failed.is_empty() {
            bail!("{} image(s) could not be processed", report.failed.len());
        }
    } else {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| batch::default_single_output(&cli.input));

        let summary = convert_file(&cli.input, &output, &config)
            .with_context(|| format!("Failed to process {}", cli.input.display()))?;
        print_summary(&output, &summary);
    }

    Ok(())
}
