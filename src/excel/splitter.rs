//! Workbook splitter implementation - workbook (.xlsx etc.) → one CSV per sheet

use crate::error::{SplitError, SplitResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Splits one workbook file into per-sheet CSV files.
///
/// Sheets are visited in the order the workbook stores them. Each sheet is
/// rendered with the fixed CSV convention (comma separator, CRLF record
/// terminator, every field quoted) and written to
/// `<out_dir>/<prefix>_<sheet>.csv`, where `prefix` is the input file's
/// base name without its extension.
pub struct WorkbookSplitter {
    input: PathBuf,
    out_dir: PathBuf,
}

impl WorkbookSplitter {
    /// Create a new splitter for the given input workbook and output directory.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input: P, out_dir: Q) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Convert every sheet and return the output paths in sheet order.
    ///
    /// The first error aborts the run. Files already written stay on disk;
    /// there is no rollback and no per-sheet error isolation.
    pub fn split(&self) -> SplitResult<Vec<PathBuf>> {
        let mut workbook = open_workbook_auto(&self.input)?;

        let prefix = file_prefix(&self.input);
        let sheet_names = workbook.sheet_names().to_vec();

        let mut written = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            let csv_text = render_sheet(&range)?;

            let out_file = self.out_dir.join(format!("{prefix}_{sheet_name}.csv"));
            // Overwrites any previous output for this sheet
            fs::write(&out_file, csv_text)?;
            written.push(out_file);
        }

        Ok(written)
    }
}

/// Input file base name with the extension stripped.
pub fn file_prefix(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Render a sheet's cell range as CSV text.
///
/// Fixed convention: comma field separator, CRLF record separator, all
/// fields quoted regardless of content. An empty range renders as the
/// empty string.
pub fn render_sheet(range: &Range<Data>) -> SplitResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for row in range.rows() {
        writer.write_record(row.iter().map(format_cell))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SplitError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Format a single cell the way it appears in the CSV output.
fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        // Serial date-times keep their numeric serial value
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
