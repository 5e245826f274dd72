// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 The reconcile-rs Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim};
use reconcile_rs::{
    BankTransaction, EngineError, Invoice, ScoringWeights, DEFAULT_TOP_N, score_candidates,
};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

/// Reconciliation Engine - Score invoice/transaction CSV files
///
/// Reads invoices and bank transactions from CSV files, scores every pair,
/// and writes the ranked candidates as JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "reconcile-rs")]
#[command(about = "Scores invoices against bank transactions and ranks match candidates", long_about = None)]
struct Args {
    /// Path to CSV file with invoices
    ///
    /// Expected header: id,amount,invoice_date,description,vendor_name,invoice_number
    #[arg(value_name = "INVOICES")]
    invoices: PathBuf,

    /// Path to CSV file with bank transactions
    ///
    /// Expected header: id,amount,posted_at,description,reference
    #[arg(value_name = "TRANSACTIONS")]
    transactions: PathBuf,

    /// Candidates to keep per invoice
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Tenant identifier, passed through for audit logging only
    #[arg(long, default_value = "default")]
    tenant: String,
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    let invoices = match open_csv(&args.invoices).and_then(read_invoices) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error reading invoices '{}': {}", args.invoices.display(), e);
            process::exit(1);
        }
    };

    let transactions = match open_csv(&args.transactions).and_then(read_transactions) {
        Ok(records) => records,
        Err(e) => {
            eprintln!(
                "Error reading transactions '{}': {}",
                args.transactions.display(),
                e
            );
            process::exit(1);
        }
    };

    let result = score_candidates(
        &args.tenant,
        &invoices,
        &transactions,
        args.top_n,
        &ScoringWeights::default(),
    );

    if let Err(e) = write_result(&result, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

fn open_csv(path: &PathBuf) -> Result<BufReader<File>, EngineError> {
    Ok(BufReader::new(File::open(path)?))
}

/// Reads invoice records from a CSV reader.
///
/// Malformed rows are skipped so one bad record cannot abort the batch;
/// field-level problems (bad amounts, bad dates) are left to the engine,
/// which degrades the affected factor score instead.
///
/// # Errors
///
/// Returns an error only if the reader fails or the CSV structure is
/// unreadable.
pub fn read_invoices<R: Read>(reader: R) -> Result<Vec<Invoice>, EngineError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut invoices = Vec::new();
    for result in rdr.deserialize::<Invoice>() {
        match result {
            Ok(record) => invoices.push(record),
            Err(e) => {
                tracing::warn!("skipping malformed invoice row: {e}");
            }
        }
    }
    Ok(invoices)
}

/// Reads bank transaction records from a CSV reader.
///
/// Same lenient row handling as [`read_invoices`].
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<BankTransaction>, EngineError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for result in rdr.deserialize::<BankTransaction>() {
        match result {
            Ok(record) => transactions.push(record),
            Err(e) => {
                tracing::warn!("skipping malformed transaction row: {e}");
            }
        }
    }
    Ok(transactions)
}

/// Writes the scoring result as pretty-printed JSON.
pub fn write_result<W: Write>(
    result: &reconcile_rs::ScoringResult,
    mut writer: W,
) -> Result<(), EngineError> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}
