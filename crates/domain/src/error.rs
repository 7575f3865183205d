// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and rule enforcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The CPF is malformed or fails checksum validation.
    InvalidCpf(String),
    /// The employee name is empty or invalid.
    InvalidName(String),
    /// The document type name is empty or exceeds the length limit.
    InvalidDocumentTypeName(String),
    /// The hire date does not parse as an ISO 8601 calendar date.
    InvalidHireDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The document status string is not a known status.
    InvalidDocumentStatus(String),
    /// The requested employee does not exist.
    EmployeeNotFound(i64),
    /// The requested document type does not exist.
    DocumentTypeNotFound(i64),
    /// An employee with this CPF already exists.
    DuplicateCpf(String),
    /// A document type with this name already exists.
    DuplicateDocumentTypeName(String),
    /// One or more referenced document types do not exist.
    DocumentTypesNotFound {
        /// Every requested identifier that did not resolve.
        ids: Vec<i64>,
    },
    /// One or more document types are already assigned to the employee.
    DocumentTypesAlreadyAssigned {
        /// The employee the assignment was attempted against.
        employee_name: String,
        /// The names of the document types that are already assigned.
        document_type_names: Vec<String>,
    },
    /// No assignment exists for the (employee, document type) pair.
    DocumentNotAssigned {
        /// The employee's name.
        employee_name: String,
        /// The document type's name.
        document_type_name: String,
    },
    /// The assignment has already been submitted.
    DocumentAlreadySubmitted {
        /// The employee's name.
        employee_name: String,
        /// The document type's name.
        document_type_name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCpf(msg) => write!(f, "Invalid CPF: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDocumentTypeName(msg) => {
                write!(f, "Invalid document type name: {msg}")
            }
            Self::InvalidHireDate { date_string, error } => {
                write!(f, "Invalid hire date '{date_string}': {error}")
            }
            Self::InvalidDocumentStatus(value) => {
                write!(f, "Invalid document status: '{value}'")
            }
            Self::EmployeeNotFound(id) => write!(f, "Employee with ID {id} not found"),
            Self::DocumentTypeNotFound(id) => {
                write!(f, "Document type with ID {id} not found")
            }
            Self::DuplicateCpf(cpf) => {
                write!(f, "An employee with CPF '{cpf}' already exists")
            }
            Self::DuplicateDocumentTypeName(name) => {
                write!(f, "A document type named '{name}' already exists")
            }
            Self::DocumentTypesNotFound { ids } => {
                let joined: String = ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "The following document type IDs do not exist: {joined}")
            }
            Self::DocumentTypesAlreadyAssigned {
                employee_name,
                document_type_names,
            } => {
                write!(
                    f,
                    "Document type(s) '{}' already assigned to employee '{employee_name}'",
                    document_type_names.join(", ")
                )
            }
            Self::DocumentNotAssigned {
                employee_name,
                document_type_name,
            } => {
                write!(
                    f,
                    "Document type '{document_type_name}' is not assigned to employee '{employee_name}'"
                )
            }
            Self::DocumentAlreadySubmitted {
                employee_name,
                document_type_name,
            } => {
                write!(
                    f,
                    "Document '{document_type_name}' for employee '{employee_name}' has already been submitted"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
