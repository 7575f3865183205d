// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure conversions from persistence rows to API DTOs.
//!
//! Join-backed rows ([`EmployeeDocumentWithRelations`]) always carry their
//! related names, so these conversions are total; no lookup can fail here.

use doctrack_persistence::{DocumentTypeData, EmployeeData, EmployeeDocumentWithRelations};

use crate::request_response::{
    DocumentDetail, DocumentTypeInfo, EmployeeInfo, PendingDocumentInfo, PendingEmployeeGroup,
};

pub fn to_employee_info(employee: EmployeeData) -> EmployeeInfo {
    EmployeeInfo {
        id: employee.id,
        name: employee.name,
        cpf: employee.cpf,
        hired_at: employee.hired_at,
        created_at: employee.created_at,
        updated_at: employee.updated_at,
    }
}

pub fn to_document_type_info(document_type: DocumentTypeData) -> DocumentTypeInfo {
    DocumentTypeInfo {
        id: document_type.id,
        name: document_type.name,
        created_at: document_type.created_at,
        updated_at: document_type.updated_at,
    }
}

pub fn to_document_detail(row: &EmployeeDocumentWithRelations) -> DocumentDetail {
    DocumentDetail {
        document_type_id: row.document_type_id,
        document_type_name: row.document_type_name.clone(),
        status: row.status.clone(),
        submitted_at: row.submitted_at.clone(),
    }
}

/// Groups pending assignment rows by employee, preserving insertion order.
///
/// Employees appear in the order of their earliest matching row, and each
/// group's documents keep their own insertion order. The rows must already
/// be ordered by assignment ID, which the persistence layer guarantees.
pub fn group_pending_rows(rows: &[EmployeeDocumentWithRelations]) -> Vec<PendingEmployeeGroup> {
    let mut groups: Vec<PendingEmployeeGroup> = Vec::new();

    for row in rows {
        let document: PendingDocumentInfo = PendingDocumentInfo {
            document_type_id: row.document_type_id,
            document_type_name: row.document_type_name.clone(),
            assigned_at: row.created_at.clone(),
        };

        match groups
            .iter_mut()
            .find(|group| group.employee_id == row.employee_id)
        {
            Some(group) => group.pending_documents.push(document),
            None => groups.push(PendingEmployeeGroup {
                employee_id: row.employee_id,
                employee_name: row.employee_name.clone(),
                employee_cpf: row.employee_cpf.clone(),
                pending_documents: vec![document],
            }),
        }
    }

    groups
}
