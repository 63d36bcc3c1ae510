use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_code: String,
    pub customer_name: String,
    pub is_organization: bool,
    pub is_person: bool,
    pub customer_inn: Option<String>,
    pub customer_kpp: Option<String>,
    pub customer_legal_address: Option<String>,
    pub customer_postal_address: Option<String>,
    pub customer_email: Option<String>,
    pub customer_code_main: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
