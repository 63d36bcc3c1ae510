//! Customer service
//!
//! CRUD use cases for customers.

use std::sync::Arc;

use crate::domain::entities::CustomerRepresentation;
use crate::domain::ports::CustomerRepository;
use crate::error::DomainError;

/// Service for managing customers
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    customers: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(customers: Arc<CR>) -> Self {
        Self { customers }
    }

    /// List every customer
    pub async fn list(&self) -> Result<Vec<CustomerRepresentation>, DomainError> {
        let customers = self.customers.find_all().await?;
        Ok(customers.into_iter().map(Into::into).collect())
    }

    /// Get a customer by code
    pub async fn get(&self, code: &str) -> Result<CustomerRepresentation, DomainError> {
        self.customers
            .find_by_code(code)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(code))
    }

    /// Create a customer under the code it carries
    ///
    /// `customerCodeMain` is stored as given; it is not required to name an
    /// existing customer.
    pub async fn create(
        &self,
        representation: &CustomerRepresentation,
    ) -> Result<CustomerRepresentation, DomainError> {
        let customer = representation.validate()?;

        let created = self
            .customers
            .create(&customer)
            .await
            .map_err(|e| conflict_logged(e.into(), &customer.code))?;

        tracing::info!(customer_code = %created.code, "Customer created");
        Ok(created.into())
    }

    /// Replace every field of the customer stored under `code`
    pub async fn update(
        &self,
        code: &str,
        representation: &CustomerRepresentation,
    ) -> Result<CustomerRepresentation, DomainError> {
        let customer = representation.validate()?;

        if self.customers.find_by_code(code).await?.is_none() {
            return Err(not_found(code));
        }

        let updated = self
            .customers
            .update(code, &customer)
            .await
            .map_err(|e| conflict_logged(e.into(), code))?
            // deleted between the lookup and the write
            .ok_or_else(|| not_found(code))?;

        tracing::info!(customer_code = %code, new_code = %updated.code, "Customer updated");
        Ok(updated.into())
    }

    /// Delete a customer; deleting an unknown code is a no-op.
    ///
    /// Fails with a conflict while lots still reference the customer.
    pub async fn delete(&self, code: &str) -> Result<(), DomainError> {
        self.customers
            .delete(code)
            .await
            .map_err(|e| conflict_logged(e.into(), code))?;

        tracing::info!(customer_code = %code, "Customer deleted");
        Ok(())
    }
}

fn not_found(code: &str) -> DomainError {
    DomainError::NotFound(format!("Customer {} not found", code))
}

fn conflict_logged(err: DomainError, code: &str) -> DomainError {
    if let DomainError::Conflict { kind, message } = &err {
        tracing::warn!(
            customer_code = %code,
            %kind,
            error = %message,
            "Customer write rejected by store"
        );
    }
    err
}
