use clap::Args;
use colored::*;
use proteon_core::{max_fasta_length, Config, ProteonResult};

#[derive(Args)]
pub struct BudgetArgs {
    /// Print only the total FASTA length budget
    #[arg(short, long)]
    pub quiet: bool,
}

fn limit(value: Option<usize>) -> String {
    value.map_or_else(|| "unbounded".dimmed().to_string(), |v| v.to_string())
}

pub fn run(args: BudgetArgs, config: &Config) -> ProteonResult<()> {
    let budget = max_fasta_length(&config.fasta);
    if args.quiet {
        println!("{}", budget);
        return Ok(());
    }

    let fasta = &config.fasta;
    println!("{}", "FASTA limits".bold());
    println!("  max_description_length  {}", fasta.max_description_length);
    println!("  max_comments_length     {}", limit(fasta.max_comments_length));
    println!("  max_sequence_length     {}", fasta.max_sequence_length);
    println!("  max_fasta_file_length   {}", limit(fasta.max_fasta_file_length));
    println!("{}", "Alignment identifiers".bold());
    println!("  pdb_code_length         {}", config.alignment.pdb_code_length);
    println!("  pdb_chain_length        {}", config.alignment.pdb_chain_length);
    println!();

    let source = if fasta.max_fasta_file_length.is_some() {
        "override"
    } else {
        "sum of field limits"
    };
    println!("{} {} ({})", "FASTA length budget:".green().bold(), budget, source);
    Ok(())
}
