// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Optional field updates for an employee.
///
/// `None` fields are left untouched by the update statement.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = employees)]
pub struct EmployeeChanges<'a> {
    pub name: Option<&'a str>,
    pub cpf: Option<&'a str>,
    pub hired_at: Option<&'a str>,
}

backend_fn! {
/// Creates a new employee.
///
/// The CPF must already be in canonical 11-digit form; the `cpf` column's
/// `UNIQUE` constraint backs the application-level duplicate check.
///
/// # Errors
///
/// Returns `UniqueViolation` if the CPF is already taken, or another error
/// if the insert fails.
pub fn create_employee(
    conn: &mut _,
    name: &str,
    cpf: &str,
    hired_at: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating employee: {}", name);

    diesel::insert_into(employees::table)
        .values((
            employees::name.eq(name),
            employees::cpf.eq(cpf),
            employees::hired_at.eq(hired_at),
        ))
        .execute(conn)?;

    let employee_id: i64 = conn.get_last_insert_rowid()?;

    info!(employee_id, "Employee created");
    Ok(employee_id)
}
}

backend_fn! {
/// Applies field updates to an employee and bumps `updated_at`.
///
/// # Errors
///
/// Returns `UniqueViolation` if a CPF change collides with another
/// employee, or another error if the update fails.
pub fn update_employee(
    conn: &mut _,
    employee_id: i64,
    changes: EmployeeChanges<'_>,
) -> Result<(), PersistenceError> {
    debug!(employee_id, "Updating employee");

    diesel::update(employees::table)
        .filter(employees::id.eq(employee_id))
        .set((
            changes,
            employees::updated_at
                .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes an employee.
///
/// Assignment rows cascade via the foreign key. Returns the number of
/// employee rows deleted (0 or 1).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_employee(conn: &mut _, employee_id: i64) -> Result<usize, PersistenceError> {
    info!(employee_id, "Deleting employee");

    let affected: usize = diesel::delete(employees::table)
        .filter(employees::id.eq(employee_id))
        .execute(conn)?;

    Ok(affected)
}
}
