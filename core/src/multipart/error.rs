/*
 * error.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Formdata, a multipart/form-data inspection library.
 *
 * Formdata is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Formdata is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Formdata.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Structural parse failures and render configuration errors.

use thiserror::Error;

/// Why a body could not be decomposed. `parse` turns every variant into the empty Multipart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("multipart body is empty")]
    EmptyBody,
    #[error("multipart boundary cannot be detected, provide a boundary explicitly instead")]
    BoundaryNotDetected,
    #[error("closing boundary --{boundary}-- not found")]
    MissingEndMarker { boundary: String },
    #[error("no sections delimited by --{boundary}")]
    NoSections { boundary: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
