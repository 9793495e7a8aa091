use crate::error::{SplitError, SplitResult};
use crate::excel::WorkbookSplitter;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the split command: validate, prepare the output directory,
/// convert, and report.
pub fn split(input: PathBuf, out_dir: PathBuf, verbose: bool) -> SplitResult<()> {
    // Input must exist before anything touches the filesystem
    if !input.is_file() {
        return Err(SplitError::InputNotFound(input));
    }

    prepare_output_dir(&out_dir)?;

    println!("{}", "Sheetsplit - workbook to CSV".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", out_dir.display());

    if verbose {
        println!("{}", "Reading workbook...".cyan());
    }

    let splitter = WorkbookSplitter::new(&input, &out_dir);
    let written = splitter.split()?;

    println!("{}", "Conversion complete".bold().green());
    if written.is_empty() {
        println!("   No sheets found - nothing written");
    } else {
        println!("   Output files:");
        for path in &written {
            println!("   - {}", path.display());
        }
    }
    println!();

    Ok(())
}

/// Ensure the output directory exists, creating it (single level, no
/// parents) if absent. A no-op when the directory already exists.
fn prepare_output_dir(path: &Path) -> SplitResult<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir(path).map_err(|source| SplitError::OutputDirCreation {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
