use pretty_assertions::assert_eq;
use refactor_kata::{sample_data, Address, OrderProcessor, RecordingConsole, ValidationError};

#[test]
fn address_validity_table() {
    assert!(!Address::new("", "Springfield", "X", "B1675").is_valid());
    assert!(!Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "AB").is_valid());
    assert!(Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "B1675").is_valid());
}

#[test]
fn empty_street_reported_before_short_zip() {
    let address = Address::new(" ", "Springfield", "X", "A");
    assert_eq!(address.validate(), Err(ValidationError::EmptyStreet));
}

#[test]
fn sample_shipments() {
    let processor = OrderProcessor::new();
    let customer = sample_data::customer();
    let mut console = RecordingConsole::new();

    for (order, address) in sample_data::shipments() {
        processor.ship_order(&order, &customer, &address, &mut console);
    }

    assert_eq!(
        console.stdout(),
        vec![
            "",
            "Procesando envío para el pedido #2025...",
            "Enviando a: Av. Siempre Viva 742, Springfield, Provincia X B1675",
            "¡Pedido enviado con éxito!",
            "",
            "Procesando envío para el pedido #2026...",
        ]
    );
    assert_eq!(console.stderr().len(), 1);
    assert!(console.stderr()[0].starts_with("Error: La dirección de envío es inválida"));
}

#[test]
fn address_round_trips_through_json() {
    let address = Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "B1675");
    let json = serde_json::to_value(&address).unwrap();
    assert_eq!(json["zip_code"], "B1675");
    let back: Address = serde_json::from_value(json).unwrap();
    assert_eq!(back, address);
}
