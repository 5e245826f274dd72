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

//! Candidate ranking.
//!
//! Pairs every invoice with every transaction, filters zero-score pairs,
//! sorts and truncates per invoice, then orders the combined list. A free
//! function over value collections: no internal state, so the parallel
//! evaluation below cannot affect the output ordering.

use crate::base::{InvoiceId, TransactionId};
use crate::explain::explain_match;
use crate::record::{BankTransaction, Invoice};
use crate::score::{ScoreBreakdown, ScoringWeights, score_pair};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Default per-invoice candidate cap.
pub const DEFAULT_TOP_N: usize = 5;

/// A scored invoice/transaction pairing that survived the zero-score filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub invoice_id: InvoiceId,
    pub transaction_id: TransactionId,
    pub score: u32,
    pub explanation: String,
    pub score_breakdown: ScoreBreakdown,
}

/// The engine's sole output artifact: ranked candidates plus batch counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub candidates: Vec<Candidate>,
    pub processed_invoices: usize,
    pub processed_transactions: usize,
    pub duration_ms: u64,
}

/// Scores every invoice against every transaction and returns ranked
/// candidates.
///
/// Per invoice, pairs with a positive total are kept, sorted by score
/// descending, and truncated to `top_n`. The per-invoice lists are then
/// concatenated in invoice order and sorted again by score descending.
/// Both sorts are stable, so tied candidates keep the order in which their
/// pairs were generated (invoice order, then transaction order) and
/// repeated runs on identical input produce identical output.
///
/// Invoices are scored in parallel; `rayon`'s indexed `map` preserves input
/// order, keeping the result deterministic.
///
/// `tenant_id` is passed through for audit logging only; the engine does no
/// tenant scoping. An empty invoice or transaction collection yields an
/// empty candidate list, and `top_n == 0` yields no candidates per invoice.
pub fn score_candidates(
    tenant_id: &str,
    invoices: &[Invoice],
    transactions: &[BankTransaction],
    top_n: usize,
    weights: &ScoringWeights,
) -> ScoringResult {
    let started = Instant::now();

    let per_invoice: Vec<Vec<Candidate>> = invoices
        .par_iter()
        .map(|invoice| {
            let mut candidates: Vec<Candidate> = transactions
                .iter()
                .filter_map(|transaction| {
                    let breakdown = score_pair(invoice, transaction, weights);
                    if breakdown.total == 0 {
                        return None;
                    }
                    Some(Candidate {
                        invoice_id: invoice.id.clone(),
                        transaction_id: transaction.id.clone(),
                        score: breakdown.total,
                        explanation: explain_match(invoice, transaction, &breakdown),
                        score_breakdown: breakdown,
                    })
                })
                .collect();

            // Stable sort: ties keep transaction iteration order.
            candidates.sort_by(|a, b| b.score.cmp(&a.score));
            candidates.truncate(top_n);
            candidates
        })
        .collect();

    let mut candidates: Vec<Candidate> = per_invoice.into_iter().flatten().collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let duration_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        tenant_id,
        invoices = invoices.len(),
        transactions = transactions.len(),
        candidates = candidates.len(),
        duration_ms,
        "scored reconciliation batch"
    );

    ScoringResult {
        candidates,
        processed_invoices: invoices.len(),
        processed_transactions: transactions.len(),
        duration_ms,
    }
}
