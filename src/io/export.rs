//! CSV export of box-size/count sequences

use std::io::Write;
use std::path::Path;

use crate::io::error::{BoxCountError, Result, invalid_parameter};

/// Write the count sequence as a two-column CSV with a header row
///
/// Rows are `box_size,count`, in the order the counts were produced.
///
/// # Errors
///
/// Returns an error if the sequences are mismatched or the file cannot be
/// created or written.
pub fn export_counts_csv(box_sizes: &[u32], counts: &[usize], output_path: &Path) -> Result<()> {
    if box_sizes.len() != counts.len() {
        return Err(invalid_parameter(
            "counts",
            &counts.len(),
            &"CSV export requires one count per box size",
        ));
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| BoxCountError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let file = std::fs::File::create(output_path).map_err(|e| BoxCountError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);

    let write_error = |e: std::io::Error| BoxCountError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write file",
        source: e,
    };

    writeln!(writer, "box_size,count").map_err(write_error)?;
    for (&epsilon, &count) in box_sizes.iter().zip(counts) {
        writeln!(writer, "{epsilon},{count}").map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_sequences_are_rejected() {
        let result = export_counts_csv(&[1, 2], &[5], Path::new("unused.csv"));
        assert!(result.is_err());
    }
}
