//! `locus annotate` command implementation
//!
//! Reads the identifier column of a table, resolves every distinct
//! identifier in order and writes the annotated table.

use crate::batch::{annotate_all, BatchSummary};
use crate::commands::records_table;
use crate::config::Config;
use crate::entrez::EntrezClient;
use crate::error::{CliError, Result};
use crate::progress::create_progress_bar;
use crate::resolver::Resolver;
use colored::Colorize;
use locus_common::table::{read_identifiers_from_path, write_records};
use locus_common::types::AnnotationRecord;
use locus_common::TableFormat;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "Annotated_Genes.csv";

/// Output path meaning standard output
pub const STDOUT: &str = "-";

/// Rows shown in the preview
const PREVIEW_ROWS: usize = 10;

/// Options for [`run`]
#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    pub input: PathBuf,
    pub output: String,
    pub column: String,
    pub format: Option<TableFormat>,
    pub preview: bool,
}

impl AnnotateOptions {
    fn writes_stdout(&self) -> bool {
        self.output == STDOUT
    }

    /// Explicit format, else inferred from the output path
    fn output_format(&self) -> TableFormat {
        match self.format {
            Some(format) => format,
            None if self.writes_stdout() => TableFormat::Csv,
            None => TableFormat::from_path(Path::new(&self.output)),
        }
    }
}

/// Run the annotate command
pub async fn run(config: &Config, options: AnnotateOptions) -> Result<()> {
    info!(
        input = %options.input.display(),
        column = %options.column,
        output = %options.output,
        "Running annotate command"
    );

    if !options.input.is_file() {
        return Err(CliError::FileNotFound(options.input.display().to_string()));
    }

    // Input problems are reported before any remote call
    let ids = read_identifiers_from_path(&options.input, &options.column)?;
    let client = EntrezClient::new(config.entrez_config()?)?;
    let resolver = Resolver::new(client);

    eprintln!(
        "{} {} identifiers from {}",
        "Annotating".cyan().bold(),
        ids.len(),
        options.input.display()
    );

    let progress = create_progress_bar(ids.len() as u64)?;
    let report = annotate_all(&resolver, &ids, config.request_delay(), &progress).await;
    progress.finish_and_clear();

    let format = options.output_format();
    if options.writes_stdout() {
        write_records(io::stdout().lock(), &report.records, format)?;
    } else {
        let mut writer = BufWriter::new(File::create(&options.output)?);
        write_records(&mut writer, &report.records, format)?;
        writer.flush()?;
    }

    print_summary(&report.summary);

    if !options.writes_stdout() {
        eprintln!("{} Output written to: {}", "✓".green(), options.output.cyan());

        if options.preview && !report.records.is_empty() {
            print_preview(&report.records);
        }
    }

    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    eprintln!(
        "{} {} resolved, {} not found, {} invalid, {} errors",
        "Summary:".bold(),
        summary.resolved.to_string().green(),
        summary.not_found.to_string().yellow(),
        summary.invalid.to_string().yellow(),
        summary.errors.to_string().red()
    );
}

fn print_preview(records: &[AnnotationRecord]) {
    let shown = records.len().min(PREVIEW_ROWS);
    println!();
    println!("{}", "Preview:".cyan().bold());
    println!("{}", records_table(&records[..shown]));

    if records.len() > shown {
        println!("... {} more rows", records.len() - shown);
    }
}
