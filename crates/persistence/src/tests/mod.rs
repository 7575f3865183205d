// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod assignment_tests;
mod backend_validation_tests;
mod document_type_tests;

use crate::{DocumentTypeData, EmployeeData, Persistence};
use doctrack_domain::generate_cpf;

pub fn setup_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

/// Creates an employee with a deterministic, valid CPF derived from `seed`.
pub fn create_test_employee(persistence: &mut Persistence, name: &str, seed: u64) -> EmployeeData {
    let cpf: String = generate_cpf(seed);
    persistence
        .create_employee(name, &cpf, "2024-01-15")
        .expect("Employee creation should succeed")
}

pub fn create_test_document_type(persistence: &mut Persistence, name: &str) -> DocumentTypeData {
    persistence
        .create_document_type(name)
        .expect("Document type creation should succeed")
}
