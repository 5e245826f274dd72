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

//! Deterministic match explanations.
//!
//! A finite lookup over the score breakdown: thresholds are evaluated
//! top-down and the first match wins. This is the fallback path when a
//! richer, non-deterministic explanation source is unavailable or disabled,
//! so downstream consumers can rely on the exact sentences and confidence
//! strings produced here.

use crate::record::{BankTransaction, Invoice};
use crate::score::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use std::fmt;

const PERFECT_THRESHOLD: u32 = 1400;
const STRONG_THRESHOLD: u32 = 1000;
const GOOD_THRESHOLD: u32 = 600;
const POTENTIAL_THRESHOLD: u32 = 300;

const HIGH_CONFIDENCE_THRESHOLD: u32 = 1200;
const MEDIUM_CONFIDENCE_THRESHOLD: u32 = 600;

/// Date proximity at or above this counts as "close dates" in a strong match.
const CLOSE_DATE_FACTOR: u32 = 200;
/// Text similarity at or above this counts as "similar descriptions".
const SIMILAR_TEXT_FACTOR: u32 = 100;

/// Confidence tier attached to a fallback explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        write!(f, "{tier}")
    }
}

/// Output of the fallback explanation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationResult {
    pub explanation: String,
    pub confidence: Confidence,
    pub score_breakdown: ScoreBreakdown,
    /// Always `false`: this generator never calls an external model.
    pub ai_generated: bool,
}

/// Generates the one-sentence explanation for a scored pair.
pub fn explain_match(
    invoice: &Invoice,
    transaction: &BankTransaction,
    breakdown: &ScoreBreakdown,
) -> String {
    explanation_sentence(invoice, transaction, breakdown, breakdown.total)
}

/// Maps a total score to its confidence tier.
pub fn confidence_tier(score: u32) -> Confidence {
    if score >= HIGH_CONFIDENCE_THRESHOLD {
        Confidence::High
    } else if score >= MEDIUM_CONFIDENCE_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Fallback explanation entry point.
///
/// Accepts a precomputed score and breakdown so hosts can re-explain
/// persisted candidates without rescoring. Thresholds are evaluated on the
/// supplied `score`.
pub fn fallback_explanation(
    invoice: &Invoice,
    transaction: &BankTransaction,
    score: u32,
    breakdown: ScoreBreakdown,
) -> ExplanationResult {
    ExplanationResult {
        explanation: explanation_sentence(invoice, transaction, &breakdown, score),
        confidence: confidence_tier(score),
        score_breakdown: breakdown,
        ai_generated: false,
    }
}

fn explanation_sentence(
    invoice: &Invoice,
    transaction: &BankTransaction,
    breakdown: &ScoreBreakdown,
    total: u32,
) -> String {
    if total >= PERFECT_THRESHOLD {
        let invoice_label = if invoice.invoice_number.is_empty() {
            invoice.id.to_string()
        } else {
            invoice.invoice_number.clone()
        };
        let transaction_label = if transaction.reference.is_empty() {
            transaction.id.to_string()
        } else {
            transaction.reference.clone()
        };
        return format!(
            "Perfect match: Invoice {invoice_label} and transaction {transaction_label} \
             have identical amounts of {} with similar dates and descriptions.",
            invoice.amount
        );
    }

    if total >= STRONG_THRESHOLD {
        let mut reasons = Vec::new();
        if breakdown.exact_amount > 0 {
            reasons.push("identical amounts");
        }
        if breakdown.date_proximity >= CLOSE_DATE_FACTOR {
            reasons.push("close dates");
        }
        if breakdown.text_similarity >= SIMILAR_TEXT_FACTOR {
            reasons.push("similar descriptions");
        }
        let reasons = if reasons.is_empty() {
            "multiple matching factors".to_owned()
        } else {
            reasons.join(" and ")
        };
        return format!("Strong match: {} with {reasons}.", invoice.amount);
    }

    if total >= GOOD_THRESHOLD {
        return "Good match: Amounts are similar with reasonable date proximity and some \
                description overlap."
            .to_owned();
    }

    if total >= POTENTIAL_THRESHOLD {
        return "Potential match: Some similarities found but requires manual review.".to_owned();
    }

    "Low confidence: Minimal similarities detected.".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(number: &str) -> Invoice {
        Invoice {
            id: "inv-1".into(),
            amount: "1500.00".into(),
            invoice_date: None,
            description: String::new(),
            vendor_name: String::new(),
            invoice_number: number.to_owned(),
        }
    }

    fn transaction(reference: &str) -> BankTransaction {
        BankTransaction {
            id: "tx-1".into(),
            amount: "1500.00".into(),
            posted_at: None,
            description: String::new(),
            reference: reference.to_owned(),
        }
    }

    fn breakdown(exact: u32, date: u32, text: u32, vendor: u32) -> ScoreBreakdown {
        ScoreBreakdown {
            exact_amount: exact,
            date_proximity: date,
            text_similarity: text,
            vendor_match: vendor,
            total: exact + date + text + vendor,
        }
    }

    #[test]
    fn perfect_match_names_number_and_reference() {
        let sentence = explain_match(
            &invoice("INV-001"),
            &transaction("REF-001"),
            &breakdown(1000, 300, 100, 100),
        );
        assert!(sentence.starts_with("Perfect match"));
        assert!(sentence.contains("INV-001"));
        assert!(sentence.contains("REF-001"));
        assert!(sentence.contains("1500.00"));
    }

    #[test]
    fn perfect_match_falls_back_to_ids() {
        let sentence = explain_match(
            &invoice(""),
            &transaction(""),
            &breakdown(1000, 300, 100, 100),
        );
        assert!(sentence.contains("inv-1"));
        assert!(sentence.contains("tx-1"));
    }

    #[test]
    fn strong_match_lists_contributing_factors() {
        let sentence = explain_match(
            &invoice("INV-001"),
            &transaction("REF-001"),
            &breakdown(1000, 210, 0, 0),
        );
        assert!(sentence.starts_with("Strong match"));
        assert!(sentence.contains("identical amounts and close dates"));
    }

    #[test]
    fn strong_match_without_individual_factors_is_generic() {
        // Total clears 1000 but no single factor clears its reason bar.
        let sentence = explanation_sentence(
            &invoice("INV-001"),
            &transaction("REF-001"),
            &breakdown(0, 150, 90, 100),
            1000,
        );
        assert!(sentence.contains("multiple matching factors"));
    }

    #[test]
    fn tier_sentences_at_thresholds() {
        let inv = invoice("INV-001");
        let tx = transaction("REF-001");
        let b = breakdown(0, 0, 0, 0);

        assert!(explanation_sentence(&inv, &tx, &b, 600).starts_with("Good match"));
        assert!(explanation_sentence(&inv, &tx, &b, 300).starts_with("Potential match"));
        assert!(explanation_sentence(&inv, &tx, &b, 299).starts_with("Low confidence"));
    }

    #[test]
    fn confidence_tier_boundaries() {
        assert_eq!(confidence_tier(1200), Confidence::High);
        assert_eq!(confidence_tier(1199), Confidence::Medium);
        assert_eq!(confidence_tier(600), Confidence::Medium);
        assert_eq!(confidence_tier(599), Confidence::Low);
        assert_eq!(confidence_tier(0), Confidence::Low);
    }

    #[test]
    fn fallback_is_never_ai_generated() {
        let result = fallback_explanation(
            &invoice("INV-001"),
            &transaction("REF-001"),
            1250,
            breakdown(1000, 150, 0, 100),
        );
        assert!(!result.ai_generated);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.score_breakdown.total, 1250);
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
    }
}
