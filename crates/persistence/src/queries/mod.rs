// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries.
//!
//! All queries in this module tree use Diesel DSL only and are generated
//! for both backends via the `backend_fn!` macro.

pub mod document_types;
pub mod employee_documents;
pub mod employees;
