//! PostgreSQL adapter for LotRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};

use super::store_error;
use crate::domain::entities::{Lot, LotId, NewLot};
use crate::domain::ports::LotRepository;
use crate::entity::lots;
use crate::error::StoreError;

/// PostgreSQL implementation of LotRepository
pub struct PostgresLotRepository {
    db: DatabaseConnection,
}

impl PostgresLotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LotRepository for PostgresLotRepository {
    async fn find_all(&self) -> Result<Vec<Lot>, StoreError> {
        let results = lots::Entity::find()
            .order_by_asc(lots::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        results.into_iter().map(Lot::try_from).collect()
    }

    async fn find_by_id(&self, id: &LotId) -> Result<Option<Lot>, StoreError> {
        let result = lots::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(store_error)?;

        result.map(Lot::try_from).transpose()
    }

    async fn create(&self, lot: &NewLot) -> Result<Lot, StoreError> {
        // id left unset, BIGSERIAL assigns it
        let result = active_model(NotSet, lot)
            .insert(&self.db)
            .await
            .map_err(store_error)?;

        result.try_into()
    }

    async fn update(&self, id: &LotId, lot: &NewLot) -> Result<Option<Lot>, StoreError> {
        match active_model(Set(id.0), lot).update(&self.db).await {
            Ok(model) => model.try_into().map(Some),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(store_error(e)),
        }
    }

    async fn delete(&self, id: &LotId) -> Result<(), StoreError> {
        let result = lots::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(lot_id = %id, "Delete matched no lot");
        }

        Ok(())
    }
}

fn active_model(id: sea_orm::ActiveValue<i64>, lot: &NewLot) -> lots::ActiveModel {
    lots::ActiveModel {
        id,
        lot_name: Set(lot.name.clone()),
        customer_code: Set(lot.customer_code.clone()),
        price: Set(lot.price.clone()),
        currency_code: Set(lot.currency.to_string()),
        nds_rate: Set(lot.nds_rate.to_string()),
        place_delivery: Set(lot.place_delivery.clone()),
        date_delivery: Set(lot.date_delivery),
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<lots::Model> for Lot {
    type Error = StoreError;

    fn try_from(model: lots::Model) -> Result<Self, Self::Error> {
        let contents = NewLot {
            name: model.lot_name,
            customer_code: model.customer_code,
            price: model.price,
            currency: model.currency_code.parse().map_err(StoreError::Unexpected)?,
            nds_rate: model.nds_rate.parse().map_err(StoreError::Unexpected)?,
            place_delivery: model.place_delivery,
            date_delivery: model.date_delivery,
        };

        Ok(Lot::from_new(LotId(model.id), contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Currency, NdsRate};
    use crate::test_utils::test_new_lot;

    #[test]
    fn create_leaves_id_to_the_store() {
        let model = active_model(NotSet, &test_new_lot("ACME"));
        assert_eq!(model.id, NotSet);
        assert_eq!(model.currency_code, Set("USD".to_string()));
        assert_eq!(model.nds_rate, Set("20%".to_string()));
    }

    #[test]
    fn model_maps_enumerations() {
        let new = test_new_lot("ACME");
        let model = lots::Model {
            id: 5,
            lot_name: new.name.clone(),
            customer_code: new.customer_code.clone(),
            price: new.price,
            currency_code: "EUR".to_string(),
            nds_rate: "Без НДС".to_string(),
            place_delivery: None,
            date_delivery: new.date_delivery,
        };

        let lot = Lot::try_from(model).unwrap();
        assert_eq!(lot.id, LotId(5));
        assert_eq!(lot.currency, Currency::Eur);
        assert_eq!(lot.nds_rate, NdsRate::NoVat);
    }

    #[test]
    fn unknown_stored_currency_is_unexpected() {
        let new = test_new_lot("ACME");
        let model = lots::Model {
            id: 1,
            lot_name: new.name,
            customer_code: new.customer_code,
            price: new.price,
            currency_code: "GBP".to_string(),
            nds_rate: "20%".to_string(),
            place_delivery: None,
            date_delivery: None,
        };

        assert!(matches!(Lot::try_from(model), Err(StoreError::Unexpected(_))));
    }
}
