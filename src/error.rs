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

//! Error types for the host I/O surface.
//!
//! The scoring core itself never fails: malformed per-record data degrades
//! the affected factor score to zero. Errors exist only at the boundary
//! where records are loaded and results are written out.

use thiserror::Error;

/// Failures while loading records or emitting a scoring result.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input file could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Record stream was not a readable CSV of value records.
    #[error("malformed record stream: {0}")]
    Csv(#[from] csv::Error),

    /// Scoring result could not be encoded.
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
