use super::fasta::load_record;
use clap::Args;
use proteon_bio::alignment::{AlignmentRecord, MultipleAlignments};
use proteon_bio::RecordValidator;
use proteon_core::{Config, FormatError, ProteonResult};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Args)]
pub struct GrishinArgs {
    /// JSON file with one alignment object or an array of them
    #[arg(value_name = "JSON")]
    pub input: PathBuf,

    /// FASTA file with the full query sequence shared by all alignments
    #[arg(short, long, value_name = "FASTA")]
    pub query: Option<PathBuf>,

    /// Print the structured dump instead of Grishin text
    #[arg(long)]
    pub dump: bool,
}

/// Records from a JSON object or array; all share one group
pub fn read_alignments(value: &Value) -> ProteonResult<Vec<AlignmentRecord>> {
    let items = match value {
        Value::Array(items) => items.iter().collect::<Vec<_>>(),
        other => vec![other],
    };

    let group = MultipleAlignments::new();
    items
        .into_iter()
        .map(|item| {
            let record = AlignmentRecord::from_json(item)?;
            Ok(record.with_group(group.clone()))
        })
        .collect()
}

pub fn run(args: GrishinArgs, config: &Config) -> ProteonResult<()> {
    let text = std::fs::read_to_string(&args.input)?;
    let value: Value = serde_json::from_str(&text)?;
    let mut records = read_alignments(&value)?;

    if let Some(path) = &args.query {
        let query = Arc::new(load_record(path, config)?);
        for record in &mut records {
            record.full_query_sequence = Some(Arc::clone(&query));
        }
    }

    let validator = RecordValidator::new(config.clone());
    for record in &records {
        record.validate(&validator)?;
    }
    debug!(count = records.len(), "validated alignment records");

    if args.dump {
        let dumped: Vec<Value> = records.iter().map(|r| Value::Object(r.dump())).collect();
        let output = match dumped.len() {
            1 => dumped.into_iter().next().unwrap_or(Value::Null),
            _ => Value::Array(dumped),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let lines = records
            .iter()
            .map(|r| r.grishin_lines())
            .collect::<Result<String, FormatError>>()?;
        print!("{}", lines);
    }

    Ok(())
}
