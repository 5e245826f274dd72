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

//! # Reconcile
//!
//! This library matches invoices against bank transactions by computing a
//! deterministic compatibility score for every pair, ranking the surviving
//! candidates, and attaching a short human-readable explanation to each
//! match. It is built for reconciliation back-offices that need
//! explainable, reproducible matching without opaque inference.
//!
//! ## Core Components
//!
//! - [`score_pair`]: Multi-factor comparator for one invoice/transaction pair
//! - [`score_candidates`]: Ranker producing an ordered [`ScoringResult`]
//! - [`explain_match`] / [`fallback_explanation`]: Deterministic explanations
//! - [`ScoringWeights`]: Immutable factor-weight configuration
//!
//! ## Example
//!
//! ```
//! use reconcile_rs::{
//!     score_candidates, BankTransaction, Invoice, ScoringWeights, DEFAULT_TOP_N,
//! };
//!
//! let invoices = vec![Invoice {
//!     id: "inv-1".into(),
//!     amount: "1500.00".into(),
//!     invoice_date: Some("2024-01-15".into()),
//!     description: "Office supplies".into(),
//!     vendor_name: "Office Supplies Co".into(),
//!     invoice_number: "INV-001".into(),
//! }];
//! let transactions = vec![BankTransaction {
//!     id: "tx-1".into(),
//!     amount: "1500.00".into(),
//!     posted_at: Some("2024-01-16".into()),
//!     description: "Payment to Office Supplies Co".into(),
//!     reference: "REF-001".into(),
//! }];
//!
//! let result = score_candidates(
//!     "tenant-a",
//!     &invoices,
//!     &transactions,
//!     DEFAULT_TOP_N,
//!     &ScoringWeights::default(),
//! );
//! assert_eq!(result.candidates.len(), 1);
//! assert!(result.candidates[0].score >= 1400);
//! assert!(result.candidates[0].explanation.starts_with("Perfect match"));
//! ```
//!
//! ## Determinism
//!
//! The engine is stateless and side-effect free: identical inputs always
//! yield an identical candidate ordering (pairs may be scored in parallel,
//! but ordering is imposed only at the sort step, with stable tie-breaks).

mod base;
mod explain;
mod normalize;
mod rank;
mod record;
mod score;
pub mod error;

pub use base::{InvoiceId, TransactionId};
pub use error::EngineError;
pub use explain::{Confidence, ExplanationResult, confidence_tier, explain_match, fallback_explanation};
pub use rank::{Candidate, DEFAULT_TOP_N, ScoringResult, score_candidates};
pub use record::{BankTransaction, Invoice};
pub use score::{ScoreBreakdown, ScoringWeights, score_pair};
