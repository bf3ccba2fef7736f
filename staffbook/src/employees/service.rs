use super::dto::{EmployeeCreate, EmployeeOutput, EmployeePatch, EmployeeUpdate};
use super::entity::Model;
use super::repository::EmployeeRepository;
use crate::errors::ApiError;
use crate::mapping::Mapper;
use crate::validation::Validatable;
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;

const RESOURCE: &str = "Employee";

/// Entity fields that request payloads never write.
const PROTECTED_FIELDS: &[&str] = &["id"];

/// Employee use cases. Payloads are validated, mapped onto the entity with the
/// shared [`Mapper`] and persisted through `R`.
pub struct EmployeeService<R> {
    repository: R,
    mapper: Arc<Mapper>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    #[must_use]
    pub fn new(repository: R, mapper: Arc<Mapper>) -> Self {
        Self { repository, mapper }
    }

    #[must_use]
    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// # Errors
    ///
    /// Database failures.
    pub async fn all_employees(&self) -> Result<Vec<EmployeeOutput>, ApiError> {
        let employees = self.repository.find_all().await?;
        tracing::debug!(count = employees.len(), "Listing employees");
        Ok(employees
            .iter()
            .map(|employee| -> EmployeeOutput { self.mapper.create_and_map(employee, &[]) })
            .collect())
    }

    /// # Errors
    ///
    /// Validation failures, a taken email, or database failures.
    pub async fn add_employee(&self, dto: EmployeeCreate) -> Result<EmployeeOutput, ApiError> {
        dto.validate()?;

        let employee: Model = self.mapper.create_and_map(&dto, PROTECTED_FIELDS);
        let saved = self
            .repository
            .insert(employee)
            .await
            .map_err(persistence_error)?;

        tracing::info!(id = saved.id, "Employee created");
        Ok(self.mapper.create_and_map(&saved, &[]))
    }

    /// Replaces every editable field; absent optional fields become null.
    ///
    /// # Errors
    ///
    /// Validation failures, a route id that differs from the body id, an
    /// unknown id, a taken email, or database failures.
    pub async fn update_employee(&self, id: i32, dto: EmployeeUpdate) -> Result<(), ApiError> {
        dto.validate()?;
        if id != dto.id {
            return Err(ApiError::bad_request("Route id and body id do not match."));
        }

        let mut employee = self.employee_or_not_found(dto.id).await?;
        self.mapper
            .copy_into(&dto, &mut employee, false, PROTECTED_FIELDS);
        self.repository
            .update(employee)
            .await
            .map_err(persistence_error)?;

        tracing::info!(id, "Employee updated");
        Ok(())
    }

    /// Applies only the fields present in `dto`.
    ///
    /// # Errors
    ///
    /// Validation failures, an unknown id, a taken email, or database failures.
    pub async fn update_employee_partial(
        &self,
        id: i32,
        dto: EmployeePatch,
    ) -> Result<(), ApiError> {
        dto.validate()?;

        let mut employee = self.employee_or_not_found(id).await?;
        self.mapper
            .copy_into(&dto, &mut employee, true, PROTECTED_FIELDS);
        self.repository
            .update(employee)
            .await
            .map_err(persistence_error)?;

        tracing::info!(id, "Employee patched");
        Ok(())
    }

    /// # Errors
    ///
    /// An unknown id or database failures.
    pub async fn delete_employee(&self, id: i32) -> Result<(), ApiError> {
        let employee = self.employee_or_not_found(id).await?;
        self.repository.delete(employee.id).await?;

        tracing::info!(id, "Employee deleted");
        Ok(())
    }

    async fn employee_or_not_found(&self, id: i32) -> Result<Model, ApiError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(RESOURCE, Some(id.to_string())))
    }
}

/// `email` is the only unique column, so any unique violation on write is a
/// duplicate email.
fn persistence_error(err: DbErr) -> ApiError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::debug!(detail = %detail, "Duplicate employee email");
        return ApiError::conflict("email", "Email already exists.");
    }
    ApiError::from(err)
}
