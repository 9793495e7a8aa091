use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use sheetsplit::cli;
use sheetsplit::error::EXIT_MISSING_ARGUMENTS;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheetsplit")]
#[command(about = "Split a spreadsheet workbook into one CSV file per sheet")]
#[command(long_about = "Sheetsplit - workbook to CSV conversion

Parses one workbook file and writes each sheet to its own CSV file in the
output directory, named <prefix>_<sheet>.csv after the input's base name.

FORMATS:
  Input:  .xlsx, .xlsm, .xlsb, .xls, .ods (auto-detected)
  Output: CSV with comma separators, CRLF line endings, all fields quoted

EXIT CODES:
  0   success
  81  missing arguments
  82  input file does not exist
  83  output directory could not be created
  99  conversion failed (parse, serialize, or write error)

EXAMPLE:
  sheetsplit book.xlsx out/
  → out/book_Sheet1.csv, out/book_Sheet2.csv, ...")]
#[command(version)]
struct Cli {
    /// Path to the input workbook
    input: PathBuf,

    /// Directory for the per-sheet CSV files (created if missing)
    output_dir: PathBuf,

    /// Show verbose conversion steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Missing arguments: expected <INPUT> <OUTPUT_DIR>");
            return ExitCode::from(EXIT_MISSING_ARGUMENTS);
        }
        Err(err) => err.exit(),
    };

    match cli::split(cli.input, cli.output_dir, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err.to_string().red());
            ExitCode::from(err.exit_code())
        }
    }
}
