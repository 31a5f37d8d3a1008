// Copyright 2025 Cowboy AI, LLC.

//! Fixed data the demo binaries run against

use crate::employees::{Employee, Engineer, Intern, Manager};
use crate::shipping::{Address, Customer, Order};
use crate::users::User;

/// Four users: two valid actives, one inactive, one invalid active
pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Juan Pérez", "juan.perez@example.com", true),
        User::new(2, "Ana Gómez", "ana.gomez@example.com", false),
        User::new(3, "", "email.invalido", true),
        User::new(4, "Carlos Duty", "carlos.duty@example.com", true),
    ]
}

/// One employee per role
pub fn employees() -> Vec<Box<dyn Employee>> {
    vec![
        Box::new(Manager::new(
            "Ana",
            5000,
            vec!["Proyecto Phoenix".to_string(), "Proyecto Hydra".to_string()],
        )),
        Box::new(Engineer::new("Juan", 3000)),
        Box::new(Intern::new("Lucía", 1000)),
    ]
}

/// The customer both sample orders belong to
pub fn customer() -> Customer {
    Customer::new(101, "Constructora S.A.")
}

/// An order with a deliverable address followed by one whose zip code is too short
pub fn shipments() -> Vec<(Order, Address)> {
    vec![
        (
            Order::new(2025, 45000.0),
            Address::new("Av. Siempre Viva 742", "Springfield", "Provincia X", "B1675"),
        ),
        (
            Order::new(2026, 1500.0),
            Address::new("Otra Calle 123", "Otra Ciudad", "Provincia Y", "AB"),
        ),
    ]
}
