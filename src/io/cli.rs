//! Command-line interface for estimating dimensions of PNG files in batch

use crate::algorithm::estimate::{DimensionEstimate, estimate_dimension};
use crate::algorithm::sizes::power_of_two_sizes;
use crate::analysis::binarize::mask_from_image;
use crate::io::configuration::{CSV_SUFFIX, DEFAULT_THRESHOLD, PLOT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::export_counts_csv;
use crate::io::plot::export_loglog_plot;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boxdim")]
#[command(
    author,
    version,
    about = "Estimate the box-counting fractal dimension of binary images"
)]
/// Command-line arguments for the dimension estimation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Intensity threshold; pixels below it count as foreground
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Largest box size to include in the ladder
    #[arg(short = 'b', long)]
    pub max_box_size: Option<u32>,

    /// Write a log-log chart PNG next to each input
    #[arg(short, long)]
    pub plot: bool,

    /// Write the (box size, count) sequence as CSV next to each input
    #[arg(short, long)]
    pub csv: bool,

    /// Suppress progress output and per-size count tables
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image loading, or estimation
    /// fails for any file.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            self.process_file(file)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(crate::io::error::io_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png") {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn box_sizes_for(&self, rows: u32, cols: u32) -> Result<Vec<u32>> {
        let mut sizes = power_of_two_sizes(rows, cols);
        if let Some(limit) = self.cli.max_box_size {
            if limit == 0 {
                return Err(invalid_parameter(
                    "max_box_size",
                    &limit,
                    &"largest box size must be positive",
                ));
            }
            sizes.retain(|&epsilon| epsilon <= limit);
        }
        Ok(sizes)
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let mask = mask_from_image(input_path, self.cli.threshold)?;
        let points = mask.foreground_points();
        let box_sizes = self.box_sizes_for(mask.rows(), mask.cols())?;

        let estimate = estimate_dimension(&points, &box_sizes)?;

        self.report(input_path, points.len(), (mask.rows(), mask.cols()), &estimate);

        if self.cli.plot {
            let plot_path = Self::derived_path(input_path, PLOT_SUFFIX, "png");
            export_loglog_plot(
                &estimate.box_sizes,
                &estimate.counts,
                &estimate.fit,
                &plot_path,
            )?;
        }

        if self.cli.csv {
            let csv_path = Self::derived_path(input_path, CSV_SUFFIX, "csv");
            export_counts_csv(&estimate.box_sizes, &estimate.counts, &csv_path)?;
        }

        Ok(())
    }

    // Results go to stdout; this is the tool's product, not diagnostics
    #[allow(clippy::print_stdout)]
    fn report(
        &self,
        input_path: &Path,
        foreground: usize,
        shape: (u32, u32),
        estimate: &DimensionEstimate,
    ) {
        if self.cli.quiet {
            println!(
                "{}\tD = {:.4}",
                input_path.display(),
                estimate.dimension()
            );
            return;
        }

        println!("{}", input_path.display());
        println!(
            "  {foreground} foreground pixels in {}x{} image",
            shape.0, shape.1
        );
        println!("  {:>8}  {:>10}", "box size", "count");
        for (&epsilon, &count) in estimate.box_sizes.iter().zip(&estimate.counts) {
            println!("  {epsilon:>8}  {count:>10}");
        }
        println!(
            "  dimension = {:.4}  (intercept = {:.4})",
            estimate.dimension(),
            estimate.fit.intercept
        );
    }

    fn derived_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.{}", stem.to_string_lossy(), suffix, extension);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(target: &str) -> Cli {
        Cli::parse_from(["boxdim", target])
    }

    #[test]
    fn derived_path_keeps_directory_and_replaces_extension() {
        let path = FileProcessor::derived_path(Path::new("scans/dla.png"), "_boxcount", "csv");
        assert_eq!(path, PathBuf::from("scans/dla_boxcount.csv"));
    }

    #[test]
    fn default_threshold_matches_configuration() {
        let cli = cli_for("input.png");
        assert_eq!(cli.threshold, DEFAULT_THRESHOLD);
        assert!(!cli.plot);
        assert!(!cli.csv);
    }

    #[test]
    fn ladder_truncation_respects_max_box_size() {
        let mut cli = cli_for("input.png");
        cli.max_box_size = Some(4);
        let processor = FileProcessor::new(cli);

        let sizes = processor.box_sizes_for(16, 16).expect("ladder failed");
        assert_eq!(sizes, vec![1, 2, 4]);
    }

    #[test]
    fn zero_max_box_size_is_rejected() {
        let mut cli = cli_for("input.png");
        cli.max_box_size = Some(0);
        let processor = FileProcessor::new(cli);
        assert!(processor.box_sizes_for(16, 16).is_err());
    }

    #[test]
    fn missing_target_is_an_error() {
        let mut processor = FileProcessor::new(cli_for("no/such/path.png"));
        assert!(processor.process().is_err());
    }
}
