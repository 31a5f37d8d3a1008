// Copyright 2025 Cowboy AI, LLC.

//! Shipping addresses and order dispatch
//!
//! [`Address`] groups street, city, state and zip code into one value and
//! owns every rule about them. [`OrderProcessor`] and [`Customer`] only ask
//! the address whether it is valid.

use crate::console::Console;
use crate::errors::ValidationError;
use crate::formal_domain::{DomainConcept, DomainEntity, ValueObject};
use crate::users::is_blank;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, info_span, warn};

/// Shortest zip code accepted for shipping, in UTF-16 code units
pub const MIN_ZIP_CODE_LEN: usize = 3;

/// Shipping address as a single value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    /// Construct an address; validity is checked separately
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }

    /// Street line
    pub fn street(&self) -> &str {
        &self.street
    }
    /// City
    pub fn city(&self) -> &str {
        &self.city
    }
    /// State or province
    pub fn state(&self) -> &str {
        &self.state
    }
    /// Zip code
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Check every address rule, reporting the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.street) {
            return Err(ValidationError::EmptyStreet);
        }
        let zip_len = self.zip_code.encode_utf16().count();
        if zip_len < MIN_ZIP_CODE_LEN {
            return Err(ValidationError::ZipCodeTooShort {
                min: MIN_ZIP_CODE_LEN,
                actual: zip_len,
            });
        }
        Ok(())
    }

    /// True when [`Address::validate`] passes
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `<street>, <city>, <state> <zip>`
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_address())
    }
}

impl DomainConcept for Address {}
impl ValueObject for Address {}

/// An order awaiting shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: u32,
    total_amount: f64,
}

impl Order {
    /// Create an order
    pub fn new(order_id: u32, total_amount: f64) -> Self {
        Self {
            order_id,
            total_amount,
        }
    }

    /// Order total
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

impl DomainConcept for Order {}

impl DomainEntity for Order {
    type Id = u32;

    fn id(&self) -> u32 {
        self.order_id
    }
}

/// The customer placing an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    customer_id: u32,
    name: String,
}

impl Customer {
    /// Create a customer
    pub fn new(customer_id: u32, name: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
        }
    }

    /// Customer name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DomainConcept for Customer {}

impl DomainEntity for Customer {
    type Id = u32;

    fn id(&self) -> u32 {
        self.customer_id
    }
}

/// Ships orders to validated addresses
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderProcessor;

impl OrderProcessor {
    /// Create a processor
    pub fn new() -> Self {
        Self
    }

    /// Ship `order` to `address`, or print why the address was rejected
    pub fn ship_order(
        &self,
        order: &Order,
        customer: &Customer,
        address: &Address,
        console: &mut dyn Console,
    ) {
        let _span = info_span!(
            "ship_order",
            order_id = order.id(),
            customer_id = customer.id()
        )
        .entered();

        console.line("");
        console.line(&format!("Procesando envío para el pedido #{}...", order.id()));

        if let Err(reason) = address.validate() {
            warn!(reason = reason.field(), "shipment rejected");
            console.error(&format!("Error: La dirección de envío es inválida: {reason}"));
            return;
        }

        console.line(&format!("Enviando a: {}", address.full_address()));
        console.line("¡Pedido enviado con éxito!");
        info!(total = order.total_amount(), "order shipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use pretty_assertions::assert_eq;

    fn springfield() -> Address {
        Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "B1675")
    }

    #[test]
    fn address_rules() {
        assert!(springfield().is_valid());
        assert_eq!(
            Address::new("", "Springfield", "X", "B1675").validate(),
            Err(ValidationError::EmptyStreet)
        );
        assert_eq!(
            Address::new("   ", "Springfield", "X", "B1675").validate(),
            Err(ValidationError::EmptyStreet)
        );
        assert_eq!(
            Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "AB").validate(),
            Err(ValidationError::ZipCodeTooShort { min: 3, actual: 2 })
        );
        let three = Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "ABC");
        assert!(three.is_valid());
    }

    #[test]
    fn zip_length_counts_utf16_units() {
        // One astral character is two code units.
        assert!(Address::new("x", "c", "s", "\u{1F600}a").is_valid());
        assert_eq!(
            Address::new("x", "c", "s", "\u{1F600}").validate(),
            Err(ValidationError::ZipCodeTooShort { min: 3, actual: 2 })
        );
        assert_eq!(
            Address::new("\u{FEFF}", "c", "s", "B1675").validate(),
            Err(ValidationError::EmptyStreet)
        );
    }

    #[test]
    fn address_is_value_object() {
        let a = springfield();
        let b = a.clone();
        assert_eq!(a, b);

        let c = Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "C2000");
        assert_ne!(a, c);
        assert_eq!(a.zip_code(), "B1675");
    }

    #[test]
    fn full_address_format() {
        assert_eq!(
            springfield().full_address(),
            "Av. Siempre Viva 742, Springfield, Provincia X B1675"
        );
        assert_eq!(springfield().to_string(), springfield().full_address());
    }

    #[test]
    fn ships_to_valid_address() {
        let mut console = RecordingConsole::new();
        OrderProcessor::new().ship_order(
            &Order::new(2025, 45000.0),
            &Customer::new(101, "Constructora S.A."),
            &springfield(),
            &mut console,
        );

        assert_eq!(
            console.stdout(),
            vec![
                "",
                "Procesando envío para el pedido #2025...",
                "Enviando a: Av. Siempre Viva 742, Springfield, Provincia X B1675",
                "¡Pedido enviado con éxito!",
            ]
        );
        assert!(console.stderr().is_empty());
    }

    #[test]
    fn rejects_invalid_address_with_one_error() {
        let mut console = RecordingConsole::new();
        OrderProcessor::new().ship_order(
            &Order::new(2026, 1500.0),
            &Customer::new(101, "Constructora S.A."),
            &Address::new("Otra Calle 123", "Otra Ciudad", "Provincia Y", "AB"),
            &mut console,
        );

        let expected = "Error: La dirección de envío es inválida: \
                        El código postal debe tener al menos 3 caracteres (tiene 2).";
        assert_eq!(console.stderr(), vec![expected]);
        assert_eq!(console.stdout(), vec!["", "Procesando envío para el pedido #2026..."]);
        assert!(!console.contains("Enviando a"));
    }

    #[test]
    fn entity_ids() {
        assert_eq!(Order::new(7, 1.0).id(), 7);
        let customer = Customer::new(101, "Constructora S.A.");
        assert_eq!(customer.id(), 101);
        assert_eq!(customer.name(), "Constructora S.A.");
    }
}
