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

//! Input value records consumed by the scoring engine.
//!
//! Amounts and dates are carried as raw strings and parsed leniently at
//! scoring time: a malformed field degrades the affected factor score to
//! zero instead of aborting the batch.

use crate::base::{InvoiceId, TransactionId};
use serde::{Deserialize, Serialize};

/// An invoice awaiting reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    /// Decimal amount as supplied by the host, currency-agnostic.
    pub amount: String,
    /// Invoice date in any of the accepted formats, if known.
    #[serde(default)]
    pub invoice_date: Option<String>,
    /// Free-text description, may be empty.
    #[serde(default)]
    pub description: String,
    /// Vendor name, may be empty.
    #[serde(default)]
    pub vendor_name: String,
    /// Invoice number, used only in explanation text.
    #[serde(default)]
    pub invoice_number: String,
}

/// A posted bank transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransaction {
    pub id: TransactionId,
    /// Decimal amount as supplied by the host, currency-agnostic.
    pub amount: String,
    /// Posting timestamp in any of the accepted formats, if known.
    #[serde(default)]
    pub posted_at: Option<String>,
    /// Free-text description, may be empty.
    #[serde(default)]
    pub description: String,
    /// Bank reference, used only in explanation text.
    #[serde(default)]
    pub reference: String,
}
