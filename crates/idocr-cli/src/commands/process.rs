//! Process command - extract fields from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use idocr_core::{DocumentIngestor, ExtractedRecord, IdentityParser, NativeIngestor, Upload};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, image, or text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Password for an encrypted PDF
    #[arg(long)]
    password: Option<String>,

    /// Model directory (overrides config)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// List the fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(model_dir) = &args.model_dir {
        config.models.model_dir = model_dir.clone();
    }

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Reading document...");
    let mut upload = Upload::new(fs::read(&args.input)?).with_password(args.password.clone());
    upload.file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    pb.set_message("Extracting text...");
    let ingestor = NativeIngestor::new(config);
    let text = match ingestor.ingest(&upload) {
        Ok(text) => text,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Extracting fields...");
    let result = IdentityParser::new().parse(&text);

    pb.finish_and_clear();

    let output = format_record(&result.record, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing {
        if result.missing_fields.is_empty() {
            eprintln!("{} All fields extracted", style("✓").green());
        } else {
            eprintln!("{}", style("Missing fields:").yellow());
            for field in &result.missing_fields {
                eprintln!("  - {}", field);
            }
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(record: &ExtractedRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let fields = record.fields();
    wtr.write_record(fields.iter().map(|(name, _)| *name))?;
    wtr.write_record(fields.iter().map(|(_, value)| *value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name:        {}\n", record.name));
    output.push_str(&format!("Guardian:    {}\n", record.guardian_name));
    output.push_str(&format!("Born:        {}\n", record.date_of_birth));
    output.push_str(&format!("Gender:      {}\n", record.gender));
    output.push_str(&format!("Identifier:  {}\n", record.identifier_number));
    output.push_str(&format!("Phone:       {}\n", record.phone_number));
    output.push('\n');

    output.push_str("Address:\n");
    output.push_str(&format!("  {}\n", record.format_address()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExtractedRecord {
        ExtractedRecord {
            name: "Ram Kumar".to_string(),
            date_of_birth: "01/02/1990".to_string(),
            district: "Pune, West".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let csv = format_csv(&record()).unwrap();
        let mut lines = csv.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("identifier_number,name,"));
        assert_eq!(header.split(',').count(), 13);

        let row = lines.next().unwrap();
        assert!(row.contains("Ram Kumar"));
        assert!(row.contains("\"Pune, West\""));
    }

    #[test]
    fn test_text_summary() {
        let text = format_text(&record());
        assert!(text.contains("Name:        Ram Kumar"));
        assert!(text.contains("Born:        01/02/1990"));
        assert!(text.contains("  Pune, West"));
    }
}
