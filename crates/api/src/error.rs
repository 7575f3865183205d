// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use doctrack_domain::DomainError;
use doctrack_persistence::PersistenceError;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. The server layer maps each variant onto an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request conflicts with existing state.
    Conflict {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly across the API boundary.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCpf(msg) => ApiError::InvalidInput {
            field: String::from("cpf"),
            message: msg,
        },
        DomainError::InvalidName(msg) | DomainError::InvalidDocumentTypeName(msg) => {
            ApiError::InvalidInput {
                field: String::from("name"),
                message: msg,
            }
        }
        DomainError::InvalidHireDate { date_string, error } => ApiError::InvalidInput {
            field: String::from("hired_at"),
            message: format!("'{date_string}' is not a valid date: {error}"),
        },
        DomainError::InvalidDocumentStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{value}' is not a valid document status"),
        },
        DomainError::EmployeeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee with ID {id} does not exist"),
        },
        DomainError::DocumentTypeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Document type"),
            message: format!("Document type with ID {id} does not exist"),
        },
        DomainError::DuplicateCpf(cpf) => ApiError::Conflict {
            rule: String::from("unique_cpf"),
            message: format!("An employee with CPF '{cpf}' already exists"),
        },
        DomainError::DuplicateDocumentTypeName(name) => ApiError::Conflict {
            rule: String::from("unique_document_type_name"),
            message: format!("A document type named '{name}' already exists"),
        },
        DomainError::DocumentTypesNotFound { ids } => ApiError::InvalidInput {
            field: String::from("document_type_ids"),
            message: format!(
                "The following document type IDs do not exist: {}",
                ids.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        },
        DomainError::DocumentTypesAlreadyAssigned {
            employee_name,
            document_type_names,
        } => ApiError::Conflict {
            rule: String::from("unique_assignment"),
            message: format!(
                "Document type(s) '{}' already assigned to employee '{employee_name}'",
                document_type_names.join(", ")
            ),
        },
        DomainError::DocumentNotAssigned {
            employee_name,
            document_type_name,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!(
                "Document type '{document_type_name}' is not assigned to employee '{employee_name}'"
            ),
        },
        DomainError::DocumentAlreadySubmitted {
            employee_name,
            document_type_name,
        } => ApiError::Conflict {
            rule: String::from("single_submission"),
            message: format!(
                "Document '{document_type_name}' for employee '{employee_name}' has already been submitted"
            ),
        },
    }
}

/// Translates a persistence error into an API error, logging the original.
///
/// Constraint violations that survive the handler-level precondition checks
/// (lost races) are reported as conflicts; everything else is internal.
#[must_use]
pub fn translate_persistence_error(context: &str, err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(msg) => ApiError::Conflict {
            rule: String::from("unique_constraint"),
            message: msg.clone(),
        },
        PersistenceError::InvalidTransition(msg) => ApiError::Conflict {
            rule: String::from("single_submission"),
            message: msg.clone(),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg.clone(),
        },
        other => {
            error!("Persistence failure during {context}: {other}");
            ApiError::Internal {
                message: format!("Failed to {context}"),
            }
        }
    }
}
