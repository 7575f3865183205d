// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Cpf, DomainError, generate_cpf, validate_document_type_name, validate_employee_name,
    validate_hire_date,
};

#[test]
fn test_validate_employee_name_accepts_normal_name() {
    assert!(validate_employee_name("Maria Silva").is_ok());
}

#[test]
fn test_validate_employee_name_rejects_empty() {
    assert!(matches!(
        validate_employee_name(""),
        Err(DomainError::InvalidName(_))
    ));
    assert!(matches!(
        validate_employee_name("   "),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_document_type_name_accepts_short_name() {
    assert!(validate_document_type_name("CPF").is_ok());
}

#[test]
fn test_validate_document_type_name_accepts_exactly_100_chars() {
    let name: String = "a".repeat(100);
    assert!(validate_document_type_name(&name).is_ok());
}

#[test]
fn test_validate_document_type_name_rejects_101_chars() {
    let name: String = "a".repeat(101);
    assert!(matches!(
        validate_document_type_name(&name),
        Err(DomainError::InvalidDocumentTypeName(_))
    ));
}

#[test]
fn test_validate_document_type_name_rejects_empty() {
    assert!(matches!(
        validate_document_type_name(" "),
        Err(DomainError::InvalidDocumentTypeName(_))
    ));
}

#[test]
fn test_validate_hire_date_accepts_iso_date() {
    let date = validate_hire_date("2024-03-15").unwrap();
    assert_eq!(date.to_string(), "2024-03-15");
}

#[test]
fn test_validate_hire_date_rejects_garbage() {
    assert!(matches!(
        validate_hire_date("15/03/2024"),
        Err(DomainError::InvalidHireDate { .. })
    ));
    assert!(matches!(
        validate_hire_date("not-a-date"),
        Err(DomainError::InvalidHireDate { .. })
    ));
}

#[test]
fn test_generated_cpfs_pass_validation() {
    for seed in [0_u64, 1, 42, 123_456_789, 999_999_999, 12_345_678_901] {
        let cpf: String = generate_cpf(seed);
        assert_eq!(cpf.len(), 11, "seed {seed} produced wrong length");
        assert!(
            Cpf::parse(&cpf).is_ok(),
            "seed {seed} produced invalid CPF {cpf}"
        );
    }
}

#[test]
fn test_generate_cpf_is_deterministic() {
    assert_eq!(generate_cpf(42), generate_cpf(42));
}

#[test]
fn test_generate_cpf_avoids_repeated_digit_bases() {
    // 111111111 would otherwise produce a repeated-digit CPF.
    let cpf: String = generate_cpf(111_111_111);
    assert!(Cpf::parse(&cpf).is_ok());
}
