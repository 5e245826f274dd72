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

//! Benchmarks for the scoring engine.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single pair comparison
//! - Full batch scoring across batch sizes
//! - Text similarity on long descriptions

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use reconcile_rs::{
    BankTransaction, Invoice, ScoringWeights, DEFAULT_TOP_N, score_candidates, score_pair,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn make_invoice(i: usize) -> Invoice {
    Invoice {
        id: format!("inv-{i:05}").as_str().into(),
        amount: format!("{}.{:02}", 100 + i, i % 100),
        invoice_date: Some(format!("2024-01-{:02}", 1 + i % 28)),
        description: format!("Invoice {i} for professional services rendered"),
        vendor_name: format!("Vendor {} Consulting", i % 50),
        invoice_number: format!("INV-{i:05}"),
    }
}

fn make_transaction(i: usize) -> BankTransaction {
    BankTransaction {
        id: format!("tx-{i:05}").as_str().into(),
        amount: format!("{}.{:02}", 100 + i, i % 100),
        posted_at: Some(format!("2024-01-{:02}", 1 + (i + 2) % 28)),
        description: format!("Payment to Vendor {} Consulting ref {i}", i % 50),
        reference: format!("REF-{i:05}"),
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_score_pair(c: &mut Criterion) {
    let invoice = make_invoice(42);
    let transaction = make_transaction(42);
    let weights = ScoringWeights::default();

    c.bench_function("score_pair", |b| {
        b.iter(|| score_pair(black_box(&invoice), black_box(&transaction), &weights))
    });
}

fn bench_batch_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_candidates");
    let weights = ScoringWeights::default();

    for size in [10usize, 50, 200] {
        let invoices: Vec<_> = (0..size).map(make_invoice).collect();
        let transactions: Vec<_> = (0..size).map(make_transaction).collect();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(invoices, transactions),
            |b, (invoices, transactions)| {
                b.iter(|| {
                    score_candidates(
                        black_box("tenant-bench"),
                        invoices,
                        transactions,
                        DEFAULT_TOP_N,
                        &weights,
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_long_descriptions(c: &mut Criterion) {
    let mut invoice = make_invoice(1);
    let mut transaction = make_transaction(1);
    invoice.description = "Consolidated quarterly invoice covering managed infrastructure, \
                           support retainers, and licensing for the northeast region offices"
        .repeat(4);
    transaction.description = "ACH transfer consolidated quarterly payment managed infra \
                               support and licensing northeast region"
        .repeat(4);
    let weights = ScoringWeights::default();

    c.bench_function("score_pair_long_text", |b| {
        b.iter(|| score_pair(black_box(&invoice), black_box(&transaction), &weights))
    });
}

criterion_group!(
    benches,
    bench_score_pair,
    bench_batch_scoring,
    bench_long_descriptions
);
criterion_main!(benches);
