// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for employees, document types, and assignments.
//!
//! Handlers run their precondition checks in a fixed order so that callers
//! get the most specific error available: existence before membership,
//! membership before state. Database constraints back every check; a
//! constraint violation that slips past a check (a lost race) still comes
//! back as a conflict rather than an internal error.

use doctrack_domain::{
    Cpf, DocumentStatus, DomainError, validate_document_type_name, validate_employee_name,
    validate_hire_date,
};
use doctrack_persistence::{
    DocumentTypeData, DocumentTypePage, EmployeeChanges, EmployeeData, EmployeeDocumentData,
    EmployeeDocumentWithRelations, EmployeePage, PendingDocumentFilter, PendingDocumentSet,
    Persistence,
};
use std::str::FromStr;
use tracing::info;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::mapper::{
    group_pending_rows, to_document_detail, to_document_type_info, to_employee_info,
};
use crate::request_response::{
    AssignDocumentTypesRequest, AssignDocumentTypesResponse, CreateDocumentTypeRequest,
    CreateEmployeeRequest, DEFAULT_PAGE_LIMIT, DeleteDocumentTypeResponse, DeleteEmployeeResponse,
    DocumentTypeInfo, DocumentTypeListResponse, EmployeeDocumentStatusResponse, EmployeeInfo,
    EmployeeListResponse, ListDocumentTypesRequest, ListEmployeesRequest,
    ListPendingDocumentsRequest, MAX_PAGE_LIMIT, PendingDocumentsPage, PendingEmployeeGroup,
    SubmitDocumentResponse, UnassignDocumentTypesRequest, UnassignDocumentTypesResponse,
    UpdateDocumentTypeRequest, UpdateEmployeeRequest,
};

/// Normalizes 1-based page and page-size parameters.
///
/// Out-of-range values are clamped rather than rejected: page floors at 1,
/// limit floors at 1 and caps at [`MAX_PAGE_LIMIT`].
const fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page: i64 = match page {
        Some(p) if p >= 1 => p,
        _ => 1,
    };
    let limit: i64 = match limit {
        Some(l) if l >= 1 => {
            if l > MAX_PAGE_LIMIT {
                MAX_PAGE_LIMIT
            } else {
                l
            }
        }
        _ => DEFAULT_PAGE_LIMIT,
    };
    (page, limit)
}

/// Number of pages needed to hold `total` items at `limit` per page.
const fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

/// Fetches an employee or fails with the not-found domain error.
fn require_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeData, ApiError> {
    persistence
        .get_employee(employee_id)
        .map_err(|e| translate_persistence_error("look up employee", &e))?
        .ok_or_else(|| translate_domain_error(DomainError::EmployeeNotFound(employee_id)))
}

/// Fetches a document type or fails with the not-found domain error.
fn require_document_type(
    persistence: &mut Persistence,
    document_type_id: i64,
) -> Result<DocumentTypeData, ApiError> {
    persistence
        .get_document_type(document_type_id)
        .map_err(|e| translate_persistence_error("look up document type", &e))?
        .ok_or_else(|| translate_domain_error(DomainError::DocumentTypeNotFound(document_type_id)))
}

// ============================================================================
// Employees
// ============================================================================

/// Creates a new employee.
///
/// The CPF is canonicalized (punctuation stripped) and checksum-validated
/// before the uniqueness check, so `123.456.789-09` and `12345678909`
/// refer to the same person.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed name, CPF, or hire date;
/// `Conflict` when the CPF is already registered.
pub fn create_employee(
    persistence: &mut Persistence,
    request: CreateEmployeeRequest,
) -> Result<EmployeeInfo, ApiError> {
    validate_employee_name(&request.name).map_err(translate_domain_error)?;
    let cpf: Cpf = Cpf::parse(&request.cpf).map_err(translate_domain_error)?;
    validate_hire_date(&request.hired_at).map_err(translate_domain_error)?;

    let existing: Option<EmployeeData> = persistence
        .get_employee_by_cpf(cpf.as_str())
        .map_err(|e| translate_persistence_error("look up employee by CPF", &e))?;
    if existing.is_some() {
        return Err(translate_domain_error(DomainError::DuplicateCpf(
            cpf.as_str().to_owned(),
        )));
    }

    let employee: EmployeeData = persistence
        .create_employee(&request.name, cpf.as_str(), &request.hired_at)
        .map_err(|e| translate_persistence_error("create employee", &e))?;

    info!(employee_id = employee.id, "Employee created");
    Ok(to_employee_info(employee))
}

/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no employee has the given ID.
pub fn get_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeInfo, ApiError> {
    let employee: EmployeeData = require_employee(persistence, employee_id)?;
    Ok(to_employee_info(employee))
}

/// Lists employees in insertion order, one page at a time.
///
/// # Errors
///
/// Returns `Internal` if the listing query fails.
pub fn list_employees(
    persistence: &mut Persistence,
    request: ListEmployeesRequest,
) -> Result<EmployeeListResponse, ApiError> {
    let (page, limit) = normalize_pagination(request.page, request.limit);
    let offset: i64 = (page - 1) * limit;

    let result: EmployeePage = persistence
        .list_employees(offset, limit)
        .map_err(|e| translate_persistence_error("list employees", &e))?;

    Ok(EmployeeListResponse {
        data: result.rows.into_iter().map(to_employee_info).collect(),
        total: result.total,
        page,
        limit,
        total_pages: total_pages(result.total, limit),
    })
}

/// Applies a partial update to an employee.
///
/// Only the provided fields change; each provided field is validated the
/// same way as at creation.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown employee, `InvalidInput` when
/// no fields are provided or a provided field is malformed, and `Conflict`
/// when a CPF change collides with another employee.
pub fn update_employee(
    persistence: &mut Persistence,
    employee_id: i64,
    request: UpdateEmployeeRequest,
) -> Result<EmployeeInfo, ApiError> {
    require_employee(persistence, employee_id)?;

    if request.name.is_none() && request.cpf.is_none() && request.hired_at.is_none() {
        return Err(ApiError::InvalidInput {
            field: String::from("body"),
            message: String::from("At least one field must be provided"),
        });
    }

    if let Some(name) = &request.name {
        validate_employee_name(name).map_err(translate_domain_error)?;
    }
    if let Some(hired_at) = &request.hired_at {
        validate_hire_date(hired_at).map_err(translate_domain_error)?;
    }

    // Canonicalize before the uniqueness check so formatting differences
    // cannot smuggle in a duplicate.
    let canonical_cpf: Option<Cpf> = match &request.cpf {
        Some(raw) => Some(Cpf::parse(raw).map_err(translate_domain_error)?),
        None => None,
    };
    if let Some(cpf) = &canonical_cpf {
        let holder: Option<EmployeeData> = persistence
            .get_employee_by_cpf(cpf.as_str())
            .map_err(|e| translate_persistence_error("look up employee by CPF", &e))?;
        if let Some(holder) = holder
            && holder.id != employee_id
        {
            return Err(translate_domain_error(DomainError::DuplicateCpf(
                cpf.as_str().to_owned(),
            )));
        }
    }

    let changes: EmployeeChanges<'_> = EmployeeChanges {
        name: request.name.as_deref(),
        cpf: canonical_cpf.as_ref().map(Cpf::as_str),
        hired_at: request.hired_at.as_deref(),
    };
    let updated: EmployeeData = persistence
        .update_employee(employee_id, changes)
        .map_err(|e| translate_persistence_error("update employee", &e))?;

    info!(employee_id, "Employee updated");
    Ok(to_employee_info(updated))
}

/// Deletes an employee; their assignments cascade away with them.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no employee has the given ID.
pub fn delete_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<DeleteEmployeeResponse, ApiError> {
    require_employee(persistence, employee_id)?;

    persistence
        .delete_employee(employee_id)
        .map_err(|e| translate_persistence_error("delete employee", &e))?;

    info!(employee_id, "Employee deleted");
    Ok(DeleteEmployeeResponse {
        employee_id,
        message: String::from("Employee deleted"),
    })
}

// ============================================================================
// Document Types
// ============================================================================

/// Creates a new document type.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty or over-long name, `Conflict` when
/// the name is already taken.
pub fn create_document_type(
    persistence: &mut Persistence,
    request: CreateDocumentTypeRequest,
) -> Result<DocumentTypeInfo, ApiError> {
    validate_document_type_name(&request.name).map_err(translate_domain_error)?;

    let existing: Option<DocumentTypeData> = persistence
        .get_document_type_by_name(&request.name)
        .map_err(|e| translate_persistence_error("look up document type by name", &e))?;
    if existing.is_some() {
        return Err(translate_domain_error(DomainError::DuplicateDocumentTypeName(
            request.name,
        )));
    }

    let document_type: DocumentTypeData = persistence
        .create_document_type(&request.name)
        .map_err(|e| translate_persistence_error("create document type", &e))?;

    info!(document_type_id = document_type.id, "Document type created");
    Ok(to_document_type_info(document_type))
}

/// Retrieves a document type by ID.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no document type has the given ID.
pub fn get_document_type(
    persistence: &mut Persistence,
    document_type_id: i64,
) -> Result<DocumentTypeInfo, ApiError> {
    let document_type: DocumentTypeData = require_document_type(persistence, document_type_id)?;
    Ok(to_document_type_info(document_type))
}

/// Lists document types in insertion order, one page at a time.
///
/// # Errors
///
/// Returns `Internal` if the listing query fails.
pub fn list_document_types(
    persistence: &mut Persistence,
    request: ListDocumentTypesRequest,
) -> Result<DocumentTypeListResponse, ApiError> {
    let (page, limit) = normalize_pagination(request.page, request.limit);
    let offset: i64 = (page - 1) * limit;

    let result: DocumentTypePage = persistence
        .list_document_types(offset, limit)
        .map_err(|e| translate_persistence_error("list document types", &e))?;

    Ok(DocumentTypeListResponse {
        data: result.rows.into_iter().map(to_document_type_info).collect(),
        total: result.total,
        page,
        limit,
        total_pages: total_pages(result.total, limit),
    })
}

/// Renames a document type.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown document type, `InvalidInput`
/// for a malformed name, and `Conflict` when the name is already taken by
/// a different document type.
pub fn update_document_type(
    persistence: &mut Persistence,
    document_type_id: i64,
    request: UpdateDocumentTypeRequest,
) -> Result<DocumentTypeInfo, ApiError> {
    require_document_type(persistence, document_type_id)?;
    validate_document_type_name(&request.name).map_err(translate_domain_error)?;

    let holder: Option<DocumentTypeData> = persistence
        .get_document_type_by_name(&request.name)
        .map_err(|e| translate_persistence_error("look up document type by name", &e))?;
    if let Some(holder) = holder
        && holder.id != document_type_id
    {
        return Err(translate_domain_error(DomainError::DuplicateDocumentTypeName(
            request.name,
        )));
    }

    let updated: DocumentTypeData = persistence
        .update_document_type(document_type_id, &request.name)
        .map_err(|e| translate_persistence_error("update document type", &e))?;

    info!(document_type_id, "Document type updated");
    Ok(to_document_type_info(updated))
}

/// Deletes a document type; its assignments cascade away with it.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no document type has the given ID.
pub fn delete_document_type(
    persistence: &mut Persistence,
    document_type_id: i64,
) -> Result<DeleteDocumentTypeResponse, ApiError> {
    require_document_type(persistence, document_type_id)?;

    persistence
        .delete_document_type(document_type_id)
        .map_err(|e| translate_persistence_error("delete document type", &e))?;

    info!(document_type_id, "Document type deleted");
    Ok(DeleteDocumentTypeResponse {
        document_type_id,
        message: String::from("Document type deleted"),
    })
}

// ============================================================================
// Assignments
// ============================================================================

/// Assigns document types to an employee, all-or-nothing.
///
/// Checks run in order: request shape, employee existence, document type
/// existence (every missing ID reported at once), then prior assignment
/// (every already-assigned name reported at once). Only when every check
/// passes are the PENDING rows created, inside one transaction.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty or duplicate-carrying ID list or
/// unknown document types, `ResourceNotFound` for an unknown employee, and
/// `Conflict` when any requested type is already assigned.
pub fn assign_document_types(
    persistence: &mut Persistence,
    employee_id: i64,
    request: AssignDocumentTypesRequest,
) -> Result<AssignDocumentTypesResponse, ApiError> {
    if request.document_type_ids.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("document_type_ids"),
            message: String::from("At least one document type ID must be provided"),
        });
    }
    for (index, id) in request.document_type_ids.iter().enumerate() {
        if request.document_type_ids[..index].contains(id) {
            return Err(ApiError::InvalidInput {
                field: String::from("document_type_ids"),
                message: format!("Document type ID {id} appears more than once"),
            });
        }
    }

    let employee: EmployeeData = require_employee(persistence, employee_id)?;

    let catalog: Vec<DocumentTypeData> = persistence
        .list_all_document_types()
        .map_err(|e| translate_persistence_error("list document types", &e))?;

    let mut missing_ids: Vec<i64> = Vec::new();
    let mut resolved: Vec<DocumentTypeData> = Vec::new();
    for id in &request.document_type_ids {
        match catalog.iter().find(|document_type| document_type.id == *id) {
            Some(document_type) => resolved.push(document_type.clone()),
            None => missing_ids.push(*id),
        }
    }
    if !missing_ids.is_empty() {
        return Err(translate_domain_error(DomainError::DocumentTypesNotFound {
            ids: missing_ids,
        }));
    }

    let mut already_assigned: Vec<String> = Vec::new();
    for document_type in &resolved {
        let existing: Option<EmployeeDocumentData> = persistence
            .find_employee_document(employee_id, document_type.id)
            .map_err(|e| translate_persistence_error("look up assignment", &e))?;
        if existing.is_some() {
            already_assigned.push(document_type.name.clone());
        }
    }
    if !already_assigned.is_empty() {
        return Err(translate_domain_error(
            DomainError::DocumentTypesAlreadyAssigned {
                employee_name: employee.name,
                document_type_names: already_assigned,
            },
        ));
    }

    let created: Vec<EmployeeDocumentWithRelations> = persistence
        .assign_document_types(employee_id, &request.document_type_ids)
        .map_err(|e| translate_persistence_error("assign document types", &e))?;

    info!(
        employee_id,
        count = created.len(),
        "Document types assigned"
    );
    Ok(AssignDocumentTypesResponse {
        employee_id,
        documents: created.iter().map(to_document_detail).collect(),
        message: format!("{} document type(s) assigned", created.len()),
    })
}

/// Unassigns document types from an employee.
///
/// Pairs that are not assigned are skipped silently; the response reports
/// how many assignments were actually removed.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty ID list and `ResourceNotFound` for
/// an unknown employee.
pub fn unassign_document_types(
    persistence: &mut Persistence,
    employee_id: i64,
    request: UnassignDocumentTypesRequest,
) -> Result<UnassignDocumentTypesResponse, ApiError> {
    if request.document_type_ids.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("document_type_ids"),
            message: String::from("At least one document type ID must be provided"),
        });
    }

    require_employee(persistence, employee_id)?;

    let removed: usize = persistence
        .unassign_document_types(employee_id, &request.document_type_ids)
        .map_err(|e| translate_persistence_error("unassign document types", &e))?;

    info!(employee_id, removed, "Document types unassigned");
    Ok(UnassignDocumentTypesResponse {
        employee_id,
        removed: i64::try_from(removed).unwrap_or(i64::MAX),
        message: format!("{removed} assignment(s) removed"),
    })
}

/// Submits a document, transitioning its assignment PENDING -> SUBMITTED.
///
/// Checks run in order: employee existence, document type existence,
/// assignment existence, then status. Submission is one-way; a second
/// submission for the same pair is a conflict.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown employee, document type, or
/// assignment, and `Conflict` when the document was already submitted.
pub fn submit_document(
    persistence: &mut Persistence,
    employee_id: i64,
    document_type_id: i64,
) -> Result<SubmitDocumentResponse, ApiError> {
    let employee: EmployeeData = require_employee(persistence, employee_id)?;
    let document_type: DocumentTypeData = require_document_type(persistence, document_type_id)?;

    let assignment: EmployeeDocumentData = persistence
        .find_employee_document(employee_id, document_type_id)
        .map_err(|e| translate_persistence_error("look up assignment", &e))?
        .ok_or_else(|| {
            translate_domain_error(DomainError::DocumentNotAssigned {
                employee_name: employee.name.clone(),
                document_type_name: document_type.name.clone(),
            })
        })?;

    let status: DocumentStatus =
        DocumentStatus::from_str(&assignment.status).map_err(translate_domain_error)?;
    if !status.can_submit() {
        return Err(translate_domain_error(DomainError::DocumentAlreadySubmitted {
            employee_name: employee.name,
            document_type_name: document_type.name,
        }));
    }

    let submitted: EmployeeDocumentData = persistence
        .submit_document(employee_id, document_type_id)
        .map_err(|e| translate_persistence_error("submit document", &e))?;

    info!(employee_id, document_type_id, "Document submitted");
    Ok(SubmitDocumentResponse {
        employee_id,
        document_type_id,
        status: submitted.status,
        submitted_at: submitted.submitted_at,
        message: format!("Document '{}' submitted", document_type.name),
    })
}

/// Retrieves the full document status picture for one employee.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown employee.
pub fn get_employee_document_status(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeDocumentStatusResponse, ApiError> {
    let employee: EmployeeData = require_employee(persistence, employee_id)?;

    let rows: Vec<EmployeeDocumentWithRelations> = persistence
        .list_documents_for_employee(employee_id)
        .map_err(|e| translate_persistence_error("list employee documents", &e))?;

    Ok(EmployeeDocumentStatusResponse {
        employee_id,
        employee_name: employee.name,
        documents: rows.iter().map(to_document_detail).collect(),
    })
}

/// Lists pending documents grouped by employee, paginated over employees.
///
/// The full filtered set is fetched, grouped by employee in first-seen
/// order, and only then paginated, so an employee's documents never
/// straddle a page boundary. Filters narrow the set before grouping;
/// filtering by an unknown employee or document type simply yields an
/// empty page.
///
/// # Errors
///
/// Returns `Internal` if the listing query fails.
pub fn list_pending_documents(
    persistence: &mut Persistence,
    request: ListPendingDocumentsRequest,
) -> Result<PendingDocumentsPage, ApiError> {
    let (page, limit) = normalize_pagination(request.page, request.limit);

    let filter: PendingDocumentFilter = PendingDocumentFilter {
        employee_id: request.employee_id,
        document_type_id: request.document_type_id,
    };
    let set: PendingDocumentSet = persistence
        .list_pending_documents(&filter)
        .map_err(|e| translate_persistence_error("list pending documents", &e))?;

    let groups: Vec<PendingEmployeeGroup> = group_pending_rows(&set.rows);
    let total_employees: i64 = i64::try_from(groups.len()).unwrap_or(i64::MAX);

    let start: usize = usize::try_from((page - 1) * limit).unwrap_or(usize::MAX);
    let page_groups: Vec<PendingEmployeeGroup> = groups
        .into_iter()
        .skip(start)
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .collect();

    Ok(PendingDocumentsPage {
        data: page_groups,
        total_employees,
        total_pending_documents: set.total,
        page,
        limit,
        total_pages: total_pages(total_employees, limit),
    })
}
