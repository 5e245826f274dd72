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

//! Pair comparator.
//!
//! Computes a [`ScoreBreakdown`] for one invoice/transaction pair from four
//! independent factors: amount match, date proximity, description
//! similarity, and vendor mention. Pure and infallible; malformed amounts
//! or dates degrade the affected factor to zero.

use crate::normalize::{clean_text, parse_date, similarity_ratio};
use crate::record::{BankTransaction, Invoice};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Amounts closer than this are considered identical.
const AMOUNT_EPSILON: Decimal = dec!(0.01);

/// Scoring weights for the four comparison factors.
///
/// An immutable configuration value captured by the comparator. The
/// defaults give a maximum total of 1600 when every factor fires:
///
/// | Factor | Weight |
/// |--------|--------|
/// | Exact amount | 1000 |
/// | Amount within tolerance | 500 |
/// | Date proximity (≤ 1 day) | 300 |
/// | Text similarity (identical) | 200 |
/// | Vendor mention | 100 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Awarded when amounts differ by less than one cent.
    pub exact_amount: u32,
    /// Awarded when amounts differ by at most `amount_tolerance_ratio`.
    pub amount_tolerance: u32,
    /// Awarded in full for a day distance of at most one; decays in steps
    /// to 70% within three days and 40% within seven.
    pub date_proximity: u32,
    /// Scaled by the description similarity ratio.
    pub text_similarity: u32,
    /// Awarded when the vendor name appears in the transaction description.
    pub vendor_match: u32,
    /// Relative amount difference accepted as a tolerance match.
    pub amount_tolerance_ratio: Decimal,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            exact_amount: 1000,
            amount_tolerance: 500,
            date_proximity: 300,
            text_similarity: 200,
            vendor_match: 100,
            amount_tolerance_ratio: dec!(0.01),
        }
    }
}

/// Per-factor sub-scores for one invoice/transaction pair.
///
/// Invariant: `total` always equals the sum of the four factor scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub exact_amount: u32,
    pub date_proximity: u32,
    pub text_similarity: u32,
    pub vendor_match: u32,
    pub total: u32,
}

/// Scores one invoice/transaction pair.
///
/// # Example
///
/// ```
/// use reconcile_rs::{score_pair, BankTransaction, Invoice, ScoringWeights};
///
/// let invoice = Invoice {
///     id: "inv-1".into(),
///     amount: "1500.00".into(),
///     invoice_date: Some("2024-01-15".into()),
///     description: "Office supplies".into(),
///     vendor_name: "Office Supplies Co".into(),
///     invoice_number: "INV-001".into(),
/// };
/// let transaction = BankTransaction {
///     id: "tx-1".into(),
///     amount: "1500.00".into(),
///     posted_at: Some("2024-01-16".into()),
///     description: "Payment to Office Supplies Co".into(),
///     reference: "REF-001".into(),
/// };
///
/// let breakdown = score_pair(&invoice, &transaction, &ScoringWeights::default());
/// assert_eq!(breakdown.exact_amount, 1000);
/// assert_eq!(breakdown.date_proximity, 300);
/// assert_eq!(breakdown.vendor_match, 100);
/// ```
pub fn score_pair(
    invoice: &Invoice,
    transaction: &BankTransaction,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let exact_amount = amount_score(invoice, transaction, weights);
    let date_proximity = date_proximity_score(invoice, transaction, weights);
    let text_similarity = text_similarity_score(invoice, transaction, weights);
    let vendor_match = vendor_match_score(invoice, transaction, weights);

    ScoreBreakdown {
        exact_amount,
        date_proximity,
        text_similarity,
        vendor_match,
        total: exact_amount + date_proximity + text_similarity + vendor_match,
    }
}

/// Exact match beats tolerance match; unparseable amounts score zero.
fn amount_score(
    invoice: &Invoice,
    transaction: &BankTransaction,
    weights: &ScoringWeights,
) -> u32 {
    let (Ok(invoice_amount), Ok(transaction_amount)) = (
        invoice.amount.trim().parse::<Decimal>(),
        transaction.amount.trim().parse::<Decimal>(),
    ) else {
        return 0;
    };

    let diff = (invoice_amount - transaction_amount).abs();
    if diff < AMOUNT_EPSILON {
        return weights.exact_amount;
    }

    // A zero-amount invoice defines no relative tolerance.
    if invoice_amount == Decimal::ZERO {
        return 0;
    }
    if diff / invoice_amount.abs() <= weights.amount_tolerance_ratio {
        return weights.amount_tolerance;
    }

    0
}

/// Stepped decay over day distance; missing or unparseable dates score zero.
fn date_proximity_score(
    invoice: &Invoice,
    transaction: &BankTransaction,
    weights: &ScoringWeights,
) -> u32 {
    let (Some(invoice_raw), Some(posted_raw)) = (&invoice.invoice_date, &transaction.posted_at)
    else {
        return 0;
    };
    let (Some(invoice_date), Some(posted_at)) = (parse_date(invoice_raw), parse_date(posted_raw))
    else {
        return 0;
    };

    let days = (invoice_date - posted_at).num_days().abs();
    match days {
        0..=1 => weights.date_proximity,
        2..=3 => weights.date_proximity * 70 / 100,
        4..=7 => weights.date_proximity * 40 / 100,
        _ => 0,
    }
}

/// Similarity ratio of the normalized descriptions, scaled to the weight.
fn text_similarity_score(
    invoice: &Invoice,
    transaction: &BankTransaction,
    weights: &ScoringWeights,
) -> u32 {
    let invoice_clean = clean_text(&invoice.description);
    let transaction_clean = clean_text(&transaction.description);
    if invoice_clean.is_empty() || transaction_clean.is_empty() {
        return 0;
    }

    let ratio = similarity_ratio(&invoice_clean, &transaction_clean);
    (ratio * f64::from(weights.text_similarity)).round() as u32
}

/// Full weight when the normalized vendor name appears in the normalized
/// transaction description.
fn vendor_match_score(
    invoice: &Invoice,
    transaction: &BankTransaction,
    weights: &ScoringWeights,
) -> u32 {
    let vendor_clean = clean_text(&invoice.vendor_name);
    if vendor_clean.is_empty() {
        return 0;
    }

    if clean_text(&transaction.description).contains(&vendor_clean) {
        weights.vendor_match
    } else {
        0
    }
}
