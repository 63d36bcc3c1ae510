//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Representations returned here pass validation unchanged, so tests can
//! break exactly one field with struct update syntax.

use std::str::FromStr;

use chrono::NaiveDateTime;
use bigdecimal::BigDecimal;

use crate::domain::entities::{
    Currency, Customer, CustomerKind, CustomerRepresentation, LotRepresentation, NdsRate, NewLot,
};

/// Create a validated organization with the given code
pub fn test_customer(code: &str) -> Customer {
    Customer {
        code: code.to_string(),
        name: format!("{} LLC", code),
        kind: CustomerKind::Organization,
        inn: Some("7707083893".to_string()),
        kpp: Some("770701001".to_string()),
        legal_address: Some("Moscow, Tverskaya 1".to_string()),
        postal_address: Some("Moscow, PO Box 12".to_string()),
        email: Some("info@acme.ru".to_string()),
        main_code: None,
    }
}

/// Wire shape of an organization
pub fn organization_representation(code: &str) -> CustomerRepresentation {
    CustomerRepresentation::from(test_customer(code))
}

/// Wire shape of a private person
pub fn person_representation(code: &str) -> CustomerRepresentation {
    CustomerRepresentation {
        customer_code: Some(code.to_string()),
        customer_name: Some("Иванов Иван Иванович".to_string()),
        is_organization: Some(false),
        is_person: Some(true),
        customer_inn: Some("500100732259".to_string()),
        customer_kpp: None,
        customer_legal_address: None,
        customer_postal_address: Some("Tula, Lenina 5-12".to_string()),
        customer_email: Some("ivanov@example.ru".to_string()),
        customer_code_main: None,
    }
}

/// Create validated lot contents owned by `customer_code`
pub fn test_new_lot(customer_code: &str) -> NewLot {
    NewLot {
        name: "Steel pipes".to_string(),
        customer_code: customer_code.to_string(),
        price: BigDecimal::from_str("1234.56").unwrap(),
        currency: Currency::Usd,
        nds_rate: NdsRate::Rate20,
        place_delivery: Some("Tula, warehouse 3".to_string()),
        date_delivery: Some(
            NaiveDateTime::parse_from_str("2024-03-01 10:00", "%Y-%m-%d %H:%M").unwrap(),
        ),
    }
}

/// Wire shape of a lot without an id
pub fn lot_representation(customer_code: &str) -> LotRepresentation {
    LotRepresentation {
        id: None,
        lot_name: Some("Steel pipes".to_string()),
        customer_code: Some(customer_code.to_string()),
        price: Some(BigDecimal::from_str("1234.56").unwrap()),
        currency_code: Some("USD".to_string()),
        nds_rate: Some("20%".to_string()),
        place_delivery: Some("Tula, warehouse 3".to_string()),
        date_delivery: Some("2024-03-01 10:00".to_string()),
    }
}
