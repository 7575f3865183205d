// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{EmployeeData, EmployeePage};
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
struct EmployeeRow {
    id: i64,
    name: String,
    cpf: String,
    hired_at: String,
    created_at: String,
    updated_at: String,
}

impl From<EmployeeRow> for EmployeeData {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            cpf: row.cpf,
            hired_at: row.hired_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

backend_fn! {
/// Retrieves an employee by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee_by_id(
    conn: &mut _,
    employee_id: i64,
) -> Result<Option<EmployeeData>, PersistenceError> {
    debug!("Looking up employee by ID: {}", employee_id);

    let result: Result<EmployeeRow, diesel::result::Error> = employees::table
        .filter(employees::id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves an employee by canonical CPF.
///
/// The caller is responsible for normalizing the CPF to its 11-digit form
/// before lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no employee holds this CPF.
pub fn get_employee_by_cpf(
    conn: &mut _,
    cpf: &str,
) -> Result<Option<EmployeeData>, PersistenceError> {
    debug!("Looking up employee by CPF");

    let result: Result<EmployeeRow, diesel::result::Error> = employees::table
        .filter(employees::cpf.eq(cpf))
        .select(EmployeeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves one page of employees plus the total employee count.
///
/// The page and the count execute in a single transaction so the total
/// matches the returned page under concurrent writes.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(
    conn: &mut _,
    offset: i64,
    limit: i64,
) -> Result<EmployeePage, PersistenceError> {
    debug!(offset, limit, "Listing employees");

    conn.transaction(|conn| {
        let total: i64 = employees::table.count().get_result(conn)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .offset(offset)
            .limit(limit)
            .select(EmployeeRow::as_select())
            .load(conn)?;

        Ok(EmployeePage {
            rows: rows.into_iter().map(Into::into).collect(),
            total,
        })
    })
}
}
