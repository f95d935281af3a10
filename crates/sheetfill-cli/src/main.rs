//! Sheetfill CLI - formula propagation over tabular data

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetfill::letters_to_column;
use sheetfill::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetfill")]
#[command(
    author,
    version,
    about = "Propagate a formula template down a dataset and write a styled workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a formula down every data row of a CSV and write an XLSX table
    Fill {
        /// Input CSV file
        input: PathBuf,

        /// Formula template, e.g. "=SUM(B2:B2)"
        #[arg(short, long)]
        formula: String,

        /// Cell the template is anchored at
        #[arg(short, long, default_value = "B2")]
        anchor: String,

        /// Column to fill, as letters (default: first column after the data)
        #[arg(short, long)]
        column: Option<String>,

        /// Header label written above the filled column
        #[arg(long, default_value = "Result")]
        header: String,

        /// Table name
        #[arg(short, long, default_value = "ExcelData")]
        table: String,

        /// Table style (none, light1, light9, medium2, medium9, dark1)
        #[arg(long, default_value = "medium9")]
        style: String,

        /// Sheet name
        #[arg(long, default_value = "Processed")]
        sheet: String,

        /// Replace the input file instead of writing a new one
        #[arg(long, conflicts_with = "output")]
        overwrite: bool,

        /// Output XLSX file (default: <input>_output.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate a formula from its anchor cell to another cell
    Translate {
        /// Formula to translate
        #[arg(short, long)]
        formula: String,

        /// Cell the formula is anchored at
        #[arg(short, long, default_value = "B2")]
        anchor: String,

        /// Destination cell
        #[arg(short, long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fill {
            input,
            formula,
            anchor,
            column,
            header,
            table,
            style,
            sheet,
            overwrite,
            output,
        } => fill(
            &input,
            &formula,
            &anchor,
            column.as_deref(),
            &header,
            &table,
            &style,
            &sheet,
            overwrite,
            output.as_deref(),
        ),
        Commands::Translate {
            formula,
            anchor,
            to,
        } => translate(&formula, &anchor, &to),
    }
}

#[allow(clippy::too_many_arguments)]
fn fill(
    input: &PathBuf,
    formula: &str,
    anchor: &str,
    column: Option<&str>,
    header: &str,
    table_name: &str,
    style: &str,
    sheet_name: &str,
    overwrite: bool,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let mut grid = CsvReader::read_file(input, &CsvReadOptions::default())
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let anchor: CellAddress = anchor
        .parse()
        .with_context(|| format!("Invalid anchor cell '{anchor}'"))?;
    let template = FormulaTemplate::parse(formula, anchor);

    let target_col = match column {
        Some(letters) => letters_to_column(letters)
            .with_context(|| format!("Invalid column '{letters}'"))?,
        None => grid.column_count(),
    };

    let range = PropagationRange::data_rows(&grid, target_col)?;
    let outcome = propagate(&template, &range, &mut grid, header)?;

    match &outcome {
        PropagationOutcome::NotPropagatable { text } => {
            bail!("'{}' does not look like a formula", text);
        }
        PropagationOutcome::Applied { skipped, .. } => {
            eprintln!(
                "Filled {} rows with '{}'",
                outcome.written(),
                template.text()
            );
            if !skipped.is_empty() {
                let rows: Vec<String> =
                    skipped.iter().map(|r| (r + 1).to_string()).collect();
                eprintln!("Skipped rows: {}", rows.join(", "));
            }
        }
    }

    let style: TableStyle = style
        .parse()
        .with_context(|| format!("Unknown table style '{style}'"))?;
    let table = Table::over(&grid, table_name, style)?;
    let mut workbook = Workbook::from_grid(sheet_name, grid)?;
    workbook.add_table(0, table)?;

    let artifact = resolve_output(&workbook, overwrite, Some(input.as_path()), output)?;
    if artifact.is_overwrite() {
        eprintln!("Replaced '{}'", artifact.path().display());
    } else {
        eprintln!("Wrote '{}'", artifact.path().display());
    }
    println!("{}", artifact.path().display());

    Ok(())
}

fn translate(formula: &str, anchor: &str, to: &str) -> Result<()> {
    let anchor: CellAddress = anchor
        .parse()
        .with_context(|| format!("Invalid anchor cell '{anchor}'"))?;
    let destination: CellAddress = to
        .parse()
        .with_context(|| format!("Invalid destination cell '{to}'"))?;

    let template = FormulaTemplate::parse(formula, anchor);
    if !template.is_propagatable() {
        bail!("'{}' does not look like a formula", template.text());
    }

    let body = template.translate(destination)?;
    println!("={body}");
    Ok(())
}
