//! Customer domain entity
//!
//! A customer is either an organization or a person and is addressed by a
//! short code chosen by the caller.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{Checker, Rule, ValidationErrors};

pub const CODE_MAX: usize = 32;
pub const TEXT_MAX: usize = 255;
pub const KPP_MAX: usize = 9;
pub const INN_MAX: usize = 12;

const INN_MESSAGE: &str = "ИНН должен содержать 10 или 12 цифр";
const ROLE_MESSAGE: &str = "Может быть указан или isOrganization или isPerson (но не оба)";

/// Whether a customer acts as an organization or as a private person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerKind {
    Organization,
    Person,
}

impl CustomerKind {
    /// Resolve the pair of role flags; exactly one of them must be set
    pub fn from_flags(is_organization: bool, is_person: bool) -> Option<Self> {
        match (is_organization, is_person) {
            (true, false) => Some(CustomerKind::Organization),
            (false, true) => Some(CustomerKind::Person),
            _ => None,
        }
    }

    pub fn is_organization(self) -> bool {
        self == CustomerKind::Organization
    }

    pub fn is_person(self) -> bool {
        self == CustomerKind::Person
    }
}

/// A validated customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub code: String,
    pub name: String,
    pub kind: CustomerKind,
    /// Taxpayer number, 10 digits for organizations and 12 for persons
    pub inn: Option<String>,
    /// Tax registration reason code
    pub kpp: Option<String>,
    pub legal_address: Option<String>,
    pub postal_address: Option<String>,
    pub email: Option<String>,
    /// Code of the head customer. Stored as is, never resolved.
    pub main_code: Option<String>,
}

/// External (API) shape of a customer
///
/// Every field is optional on the wire so that missing fields are reported
/// as violations rather than as deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRepresentation {
    pub customer_code: Option<String>,
    pub customer_name: Option<String>,
    pub is_organization: Option<bool>,
    pub is_person: Option<bool>,
    pub customer_inn: Option<String>,
    pub customer_kpp: Option<String>,
    pub customer_legal_address: Option<String>,
    pub customer_postal_address: Option<String>,
    pub customer_email: Option<String>,
    pub customer_code_main: Option<String>,
}

impl CustomerRepresentation {
    /// Check every field, then the role rule, and build the domain value
    pub fn validate(&self) -> Result<Customer, ValidationErrors> {
        let mut checker = Checker::new();

        let code = checker.required_text("customerCode", self.customer_code.as_deref(), CODE_MAX);
        let name = checker.required_text("customerName", self.customer_name.as_deref(), TEXT_MAX);
        let is_organization = checker.required("isOrganization", self.is_organization);
        let is_person = checker.required("isPerson", self.is_person);

        let inn = checker.optional_text("customerInn", self.customer_inn.as_deref(), INN_MAX);
        let inn = checker.pattern("customerInn", inn, inn_regex(), INN_MESSAGE);
        let kpp = checker.optional_text("customerKpp", self.customer_kpp.as_deref(), KPP_MAX);
        let legal_address = checker.optional_text(
            "customerLegalAddress",
            self.customer_legal_address.as_deref(),
            TEXT_MAX,
        );
        let postal_address = checker.optional_text(
            "customerPostalAddress",
            self.customer_postal_address.as_deref(),
            TEXT_MAX,
        );
        let email = checker.optional_text("customerEmail", self.customer_email.as_deref(), TEXT_MAX);
        let email = checker.email("customerEmail", email);
        let main_code =
            checker.optional_text("customerCodeMain", self.customer_code_main.as_deref(), CODE_MAX);

        let (Some(code), Some(name), Some(is_organization), Some(is_person)) =
            (code, name, is_organization, is_person)
        else {
            return Err(checker.into_errors());
        };
        checker.finish()?;

        let kind = CustomerKind::from_flags(is_organization, is_person).ok_or_else(|| {
            ValidationErrors::single("exactlyOneRole", Rule::ExactlyOneRole, ROLE_MESSAGE)
        })?;

        Ok(Customer {
            code,
            name,
            kind,
            inn,
            kpp,
            legal_address,
            postal_address,
            email,
            main_code,
        })
    }
}

impl From<Customer> for CustomerRepresentation {
    fn from(c: Customer) -> Self {
        CustomerRepresentation {
            customer_code: Some(c.code),
            customer_name: Some(c.name),
            is_organization: Some(c.kind.is_organization()),
            is_person: Some(c.kind.is_person()),
            customer_inn: c.inn,
            customer_kpp: c.kpp,
            customer_legal_address: c.legal_address,
            customer_postal_address: c.postal_address,
            customer_email: c.email,
            customer_code_main: c.main_code,
        }
    }
}

fn inn_regex() -> &'static Regex {
    static INN: OnceLock<Regex> = OnceLock::new();
    INN.get_or_init(|| Regex::new(r"^(\d{10}|\d{12})$").expect("INN pattern is a valid regex"))
}
