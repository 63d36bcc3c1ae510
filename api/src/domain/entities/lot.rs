//! Lot domain entity
//!
//! A lot is a sale offer placed by a customer. Its identifier is assigned by
//! the store on creation and never changes afterwards.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{Checker, Rule, ValidationErrors};

use super::customer::{CODE_MAX, TEXT_MAX};

/// Wire and storage format of `dateDelivery`
pub const DATE_DELIVERY_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_DELIVERY_DISPLAY: &str = "yyyy-MM-dd HH:mm";

/// Store-assigned identifier of a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LotId(pub i64);

impl std::fmt::Display for LotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Currency a lot is priced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALLOWED: &'static str = "RUB|USD|EUR";
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Rub => write!(f, "RUB"),
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUB" => Ok(Currency::Rub),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// VAT rate applied to a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NdsRate {
    NoVat,
    Rate18,
    Rate20,
}

impl NdsRate {
    pub const ALLOWED: &'static str = "Без НДС|18%|20%";
}

impl std::fmt::Display for NdsRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdsRate::NoVat => write!(f, "Без НДС"),
            NdsRate::Rate18 => write!(f, "18%"),
            NdsRate::Rate20 => write!(f, "20%"),
        }
    }
}

impl std::str::FromStr for NdsRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Без НДС" => Ok(NdsRate::NoVat),
            "18%" => Ok(NdsRate::Rate18),
            "20%" => Ok(NdsRate::Rate20),
            _ => Err(format!("Unknown VAT rate: {}", s)),
        }
    }
}

/// Validated lot contents, everything except the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLot {
    pub name: String,
    /// Owning customer. Existence is checked by the store, not here.
    pub customer_code: String,
    /// Exact decimal, any number of digits
    pub price: BigDecimal,
    pub currency: Currency,
    pub nds_rate: NdsRate,
    pub place_delivery: Option<String>,
    pub date_delivery: Option<NaiveDateTime>,
}

/// A persisted lot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    pub id: LotId,
    pub name: String,
    pub customer_code: String,
    /// Exact decimal, any number of digits
    pub price: BigDecimal,
    pub currency: Currency,
    pub nds_rate: NdsRate,
    pub place_delivery: Option<String>,
    pub date_delivery: Option<NaiveDateTime>,
}

impl Lot {
    pub fn from_new(id: LotId, new: NewLot) -> Self {
        Lot {
            id,
            name: new.name,
            customer_code: new.customer_code,
            price: new.price,
            currency: new.currency,
            nds_rate: new.nds_rate,
            place_delivery: new.place_delivery,
            date_delivery: new.date_delivery,
        }
    }
}

/// External (API) shape of a lot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotRepresentation {
    pub id: Option<i64>,
    pub lot_name: Option<String>,
    pub customer_code: Option<String>,
    #[serde(default, with = "bigdecimal::serde::json_num_option")]
    pub price: Option<BigDecimal>,
    pub currency_code: Option<String>,
    pub nds_rate: Option<String>,
    pub place_delivery: Option<String>,
    /// `yyyy-MM-dd HH:mm`
    pub date_delivery: Option<String>,
}

impl LotRepresentation {
    /// Validate a representation submitted for creation; it must not carry an id
    pub fn validate_new(&self) -> Result<NewLot, ValidationErrors> {
        let mut checker = Checker::new();
        if self.id.is_some() {
            checker.fail("id", Rule::Immutable, "must be null, the id is assigned on creation");
        }
        self.check_fields(checker)
    }

    /// Validate a full replacement of lot `id`; a carried id must match it
    pub fn validate_replacement(&self, id: LotId) -> Result<NewLot, ValidationErrors> {
        let mut checker = Checker::new();
        if self.id.is_some_and(|carried| carried != id.0) {
            checker.fail("id", Rule::Immutable, "must match the id of the lot being updated");
        }
        self.check_fields(checker)
    }

    fn check_fields(&self, mut checker: Checker) -> Result<NewLot, ValidationErrors> {
        let name = checker.required_text("lotName", self.lot_name.as_deref(), TEXT_MAX);
        let customer_code =
            checker.required_text("customerCode", self.customer_code.as_deref(), CODE_MAX);
        let price = checker.required("price", self.price.clone());
        let currency: Option<Currency> =
            checker.one_of("currencyCode", self.currency_code.as_deref(), Currency::ALLOWED);
        let nds_rate: Option<NdsRate> =
            checker.one_of("ndsRate", self.nds_rate.as_deref(), NdsRate::ALLOWED);
        let place_delivery =
            checker.optional_text("placeDelivery", self.place_delivery.as_deref(), TEXT_MAX);
        let date_delivery = checker.date_time(
            "dateDelivery",
            self.date_delivery.as_deref(),
            DATE_DELIVERY_FORMAT,
            DATE_DELIVERY_DISPLAY,
        );

        let (Some(name), Some(customer_code), Some(price), Some(currency), Some(nds_rate)) =
            (name, customer_code, price, currency, nds_rate)
        else {
            return Err(checker.into_errors());
        };
        checker.finish()?;

        Ok(NewLot {
            name,
            customer_code,
            price,
            currency,
            nds_rate,
            place_delivery,
            date_delivery,
        })
    }
}

impl From<Lot> for LotRepresentation {
    fn from(lot: Lot) -> Self {
        LotRepresentation {
            id: Some(lot.id.0),
            lot_name: Some(lot.name),
            customer_code: Some(lot.customer_code),
            price: Some(lot.price),
            currency_code: Some(lot.currency.to_string()),
            nds_rate: Some(lot.nds_rate.to_string()),
            place_delivery: lot.place_delivery,
            date_delivery: lot
                .date_delivery
                .map(|dt| dt.format(DATE_DELIVERY_FORMAT).to_string()),
        }
    }
}
