use clap::Args;
use proteon_bio::sequence::{FastaRecord, DEFAULT_LINE_LENGTH};
use proteon_bio::RecordValidator;
use proteon_core::{max_fasta_length, Config, ProteonResult};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Args)]
pub struct FastaArgs {
    /// Input FASTA file holding one record
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Keep comment lines, writing the `;` header dialect
    #[arg(long)]
    pub comments: bool,

    /// Residues per output line (0 = no wrapping)
    #[arg(long, default_value_t = DEFAULT_LINE_LENGTH)]
    pub line_length: usize,

    /// Print the finalized record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Read, canonicalize, validate and hash one record
pub fn load_record(path: &Path, config: &Config) -> ProteonResult<FastaRecord> {
    let text = std::fs::read_to_string(path)?;

    let budget = max_fasta_length(&config.fasta);
    if text.chars().count() > budget {
        warn!(
            path = %path.display(),
            budget,
            "FASTA input is larger than the configured length budget"
        );
    }

    let mut record = FastaRecord::parse(&text)?;
    let hash = record.save(&RecordValidator::new(config.clone()))?;
    info!(path = %path.display(), sha256 = %hash, "loaded FASTA record");
    Ok(record)
}

pub fn run(args: FastaArgs, config: &Config) -> ProteonResult<()> {
    let record = load_record(&args.input, config)?;

    if args.json {
        let output = json!({
            "description": record.description,
            "comments": record.comments,
            "sequence": record.sequence,
            "length": record.len(),
            "sha256": record.content_hash(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", record.format(args.comments, args.line_length));
    }

    Ok(())
}
