//! Sheetsplit - split a spreadsheet workbook into per-sheet CSV files
//!
//! Parses one workbook file (xlsx, xlsm, xlsb, xls, or ods) and writes one
//! CSV file per sheet into a target directory. Output files are named
//! `<prefix>_<sheet>.csv` where `prefix` is the input file's base name
//! without its extension.
//!
//! The CSV convention is fixed: comma field separator, CRLF record
//! separator, every field double-quoted.
//!
//! # Example
//!
//! ```no_run
//! use sheetsplit::excel::WorkbookSplitter;
//!
//! let splitter = WorkbookSplitter::new("book.xlsx", "out");
//! let written = splitter.split()?;
//!
//! for path in &written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), sheetsplit::error::SplitError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;

// Re-export commonly used types
pub use error::{SplitError, SplitResult};
pub use excel::WorkbookSplitter;
