//! PostgreSQL adapter for CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::store_error;
use crate::domain::entities::{Customer, CustomerKind};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::StoreError;

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        let results = customers::Entity::find()
            .order_by_asc(customers::Column::CustomerCode)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        results.into_iter().map(Customer::try_from).collect()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Customer>, StoreError> {
        let result = customers::Entity::find_by_id(code.to_string())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        result.map(Customer::try_from).transpose()
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, StoreError> {
        let result = active_model(customer)
            .insert(&self.db)
            .await
            .map_err(store_error)?;

        result.try_into()
    }

    async fn update(
        &self,
        code: &str,
        customer: &Customer,
    ) -> Result<Option<Customer>, StoreError> {
        // update_many so that a new code in the replacement re-keys the row
        let mut results = customers::Entity::update_many()
            .set(active_model(customer))
            .filter(customers::Column::CustomerCode.eq(code))
            .exec_with_returning(&self.db)
            .await
            .map_err(store_error)?;

        results.pop().map(Customer::try_from).transpose()
    }

    async fn delete(&self, code: &str) -> Result<(), StoreError> {
        let result = customers::Entity::delete_by_id(code.to_string())
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(customer_code = %code, "Delete matched no customer");
        }

        Ok(())
    }
}

/// Every column set from the domain value
fn active_model(customer: &Customer) -> customers::ActiveModel {
    customers::ActiveModel {
        customer_code: Set(customer.code.clone()),
        customer_name: Set(customer.name.clone()),
        is_organization: Set(customer.kind.is_organization()),
        is_person: Set(customer.kind.is_person()),
        customer_inn: Set(customer.inn.clone()),
        customer_kpp: Set(customer.kpp.clone()),
        customer_legal_address: Set(customer.legal_address.clone()),
        customer_postal_address: Set(customer.postal_address.clone()),
        customer_email: Set(customer.email.clone()),
        customer_code_main: Set(customer.main_code.clone()),
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<customers::Model> for Customer {
    type Error = StoreError;

    fn try_from(model: customers::Model) -> Result<Self, Self::Error> {
        let kind = CustomerKind::from_flags(model.is_organization, model.is_person).ok_or_else(
            || {
                StoreError::Unexpected(format!(
                    "Customer {} has an invalid role combination",
                    model.customer_code
                ))
            },
        )?;

        Ok(Customer {
            code: model.customer_code,
            name: model.customer_name,
            kind,
            inn: model.customer_inn,
            kpp: model.customer_kpp,
            legal_address: model.customer_legal_address,
            postal_address: model.customer_postal_address,
            email: model.customer_email,
            main_code: model.customer_code_main,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_customer;

    #[test]
    fn active_model_sets_role_flags() {
        let customer = test_customer("ACME");
        let model = active_model(&customer);

        assert_eq!(model.is_organization, Set(true));
        assert_eq!(model.is_person, Set(false));
        assert_eq!(model.customer_code, Set("ACME".to_string()));
    }

    #[test]
    fn model_with_both_roles_is_rejected() {
        let model = customers::Model {
            customer_code: "BAD".to_string(),
            customer_name: "Bad".to_string(),
            is_organization: true,
            is_person: true,
            customer_inn: None,
            customer_kpp: None,
            customer_legal_address: None,
            customer_postal_address: None,
            customer_email: None,
            customer_code_main: None,
        };

        assert!(matches!(
            Customer::try_from(model),
            Err(StoreError::Unexpected(_))
        ));
    }

    #[test]
    fn model_maps_to_person() {
        let model = customers::Model {
            customer_code: "IVANOV".to_string(),
            customer_name: "Иванов И.И.".to_string(),
            is_organization: false,
            is_person: true,
            customer_inn: Some("500100732259".to_string()),
            customer_kpp: None,
            customer_legal_address: None,
            customer_postal_address: None,
            customer_email: Some("ivanov@example.ru".to_string()),
            customer_code_main: Some("ACME".to_string()),
        };

        let customer = Customer::try_from(model).unwrap();
        assert_eq!(customer.kind, CustomerKind::Person);
        assert_eq!(customer.main_code.as_deref(), Some("ACME"));
    }
}
