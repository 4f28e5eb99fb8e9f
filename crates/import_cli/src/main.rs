use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use clientbook_import_core::{read_csv_file, suggest_mapping, validate_rows, FieldMapping};
use clientbook_import_report::{render_text, ImportReport};

#[derive(Debug, Parser)]
#[command(name = "clientbook-import")]
#[command(about = "Validate a client CSV export before importing it into Clientbook")]
struct Args {
    /// CSV file to validate
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Column mapping as a JSON object {"Source Header": "target_field"}.
    /// When omitted, a mapping is derived from the CSV headers.
    #[arg(short = 'm', long = "mapping")]
    mapping: Option<PathBuf>,

    /// Directory to write report.json into. When omitted, no report file
    /// is written.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "report_name",
        alias = "report-name",
        default_value = "report.json"
    )]
    report_name: String,

    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    /// Suppress the terminal summary; exit code still reflects validity.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let import = read_csv_file(&args.input)
        .with_context(|| format!("load input {}", args.input.display()))?;
    info!(
        rows = import.rows.len(),
        columns = import.headers.len(),
        "loaded {}",
        args.input.display()
    );

    let mapping = match args.mapping.as_deref() {
        Some(path) => FieldMapping::from_json_file(path)
            .with_context(|| format!("load mapping {}", path.display()))?,
        None => {
            let mapping = suggest_mapping(&import.headers);
            info!(
                mapped = mapping.mapped_column_count(),
                "derived column mapping from headers"
            );
            mapping
        }
    };

    let outcome = validate_rows(&import.rows, &mapping);
    let report = ImportReport::from_outcome(&outcome, env!("CARGO_PKG_VERSION"));

    if let Some(output) = args.output.as_deref() {
        std::fs::create_dir_all(output)
            .with_context(|| format!("create output dir {}", output.display()))?;
        let report_path = output.join(&args.report_name);
        report.write_json_with_format(&report_path, args.pretty)?;
        info!("report written to {}", report_path.display());
    }

    if !args.quiet {
        print!("{}", render_text(&report));
    }

    if report.is_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
