use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lot_name: String,
    pub customer_code: String,
    #[sea_orm(column_type = "Decimal(None)")]
    pub price: BigDecimal,
    pub currency_code: String,
    pub nds_rate: String,
    pub place_delivery: Option<String>,
    pub date_delivery: Option<DateTime>,
}

// The lot -> customer reference is enforced by the database only
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
