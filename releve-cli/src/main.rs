use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use releve_core::locale::FRENCH;
use releve_core::{Transaction, read_transactions, write_transactions};
use releve_ingest::{ImportMode, parse_pea_csv};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "releve", version, about = "PEA statement importer for the savings tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a PEA CSV export and write the tracker's transactions JSON
    Import {
        /// Path to the CSV export (defaults to the tracker's statement file)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output JSON path (defaults to the tracker's transactions file)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Account label, used for the default output filename
        #[arg(long, default_value = "pea-main")]
        account: String,

        /// Keep rows whose quantity does not parse instead of aborting
        #[arg(long)]
        lenient: bool,
    },

    /// Summarize a previously imported transactions JSON
    Summary {
        /// Path to the transactions JSON (defaults to the tracker's file)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Account label, used for the default path
        #[arg(long, default_value = "pea-main")]
        account: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Import { csv, out, account, lenient } => {
            run_import(csv, out, &account, lenient)?;
        }

        Command::Summary { json, account } => {
            run_summary(json, &account)?;
        }
    }

    Ok(())
}

fn default_statement_csv() -> PathBuf {
    // Matches the tracker's data layout when run from the app root.
    PathBuf::from("data/savings/Suivi PEA - Actions PEA.csv")
}

fn default_transactions_json(account: &str) -> PathBuf {
    PathBuf::from("data/savings/transactions").join(format!("{account}.json"))
}

fn run_import(csv: Option<PathBuf>, out: Option<PathBuf>, account: &str, lenient: bool) -> Result<()> {
    let csv_path = csv.unwrap_or_else(default_statement_csv);
    if !csv_path.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv_path.display());
    }

    let mode = if lenient { ImportMode::Lenient } else { ImportMode::Strict };
    let parsed = parse_pea_csv(&csv_path, &FRENCH, mode)
        .with_context(|| format!("parsing {}", csv_path.display()))?;

    for issue in &parsed.issues {
        eprintln!(
            "warning: row {}: {} {:?} is not a number, kept with quantity 0",
            issue.row, issue.column, issue.value
        );
    }

    let out_path = out.unwrap_or_else(|| default_transactions_json(account));
    write_transactions(&out_path, &parsed.transactions)?;

    println!("Parsed {} rows from {}", parsed.transactions.len(), csv_path.display());
    println!("Wrote {} transactions to {}", parsed.transactions.len(), out_path.display());
    print_breakdown(&parsed.transactions);

    Ok(())
}

fn run_summary(json: Option<PathBuf>, account: &str) -> Result<()> {
    let json_path = json.unwrap_or_else(|| default_transactions_json(account));
    if !json_path.exists() {
        bail!(
            "transactions file not found: {} (run `releve import` first)",
            json_path.display()
        );
    }

    let transactions = read_transactions(&json_path)?;
    println!("{} transactions in {}", transactions.len(), json_path.display());
    print_breakdown(&transactions);

    Ok(())
}

fn print_breakdown(transactions: &[Transaction]) {
    let mut by_kind: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for tx in transactions {
        let entry = by_kind.entry(tx.kind.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += tx.total_amount;
    }

    for (kind, (count, total)) in &by_kind {
        println!("  {kind}: {count} transaction(s), {total:.2} €");
    }

    let tickers: BTreeSet<&str> = transactions
        .iter()
        .map(|t| t.ticker.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    if !tickers.is_empty() {
        println!("  {} distinct ticker(s)", tickers.len());
    }
}
