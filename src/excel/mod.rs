//! Workbook reading and per-sheet CSV rendering

pub mod splitter;

pub use splitter::WorkbookSplitter;
