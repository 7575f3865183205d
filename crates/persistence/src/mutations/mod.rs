// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutations.
//!
//! All mutations in this module tree use Diesel DSL, with the few
//! backend-specific helpers abstracted via the `PersistenceBackend` trait.
//! Check-then-act sequences are wrapped in transactions.

pub mod document_types;
pub mod employee_documents;
pub mod employees;

pub use employees::EmployeeChanges;
