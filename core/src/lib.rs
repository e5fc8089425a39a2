/*
 * lib.rs
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

//! Formdata core: decompose multipart/form-data bodies into typed parts and render them as text.

pub mod config;
pub mod multipart;

pub use config::RenderOptions;
pub use multipart::{parse, parse_slice, pretty_print, pretty_print_with, try_parse, Multipart, Part};
