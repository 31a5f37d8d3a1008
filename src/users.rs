// Copyright 2025 Cowboy AI, LLC.

//! User validity and the active users report
//!
//! [`validate_user_fields`] is the only place that decides whether a
//! name/email pair is acceptable. The report and the registration flow both
//! delegate to it.

use crate::config::ReportConfig;
use crate::console::Console;
use crate::errors::ValidationError;
use crate::formal_domain::{DomainConcept, DomainEntity};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A user record as read by the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: u32,
    name: String,
    email: String,
    is_active: bool,
}

impl User {
    /// Create a user record
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_active,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the user should appear in reports
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Check this user's name and email
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_user_fields(&self.name, &self.email)
    }

    /// Report line for a valid user
    pub fn report_line(&self) -> String {
        format!("  - ID: {}, Nombre: {}, Email: {}", self.id, self.name, self.email)
    }
}

impl DomainConcept for User {}

impl DomainEntity for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// True when `text` has nothing but whitespace
///
/// The byte order mark (U+FEFF) counts as whitespace here, unlike `str::trim`.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

/// Validate a name/email pair, reporting the first failing field
///
/// The name must not be blank (see [`is_blank`]); the email must contain `@`.
pub fn validate_user_fields(name: &str, email: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::EmptyName);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// True when [`validate_user_fields`] accepts the pair
pub fn is_user_valid(name: &str, email: &str) -> bool {
    validate_user_fields(name, email).is_ok()
}

/// Produces user reports and handles registrations
#[derive(Debug, Clone)]
pub struct UserManager {
    date_format: String,
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

impl UserManager {
    /// Create a manager; an unusable date format falls back to the default
    pub fn new(config: &ReportConfig) -> Self {
        let has_error =
            StrftimeItems::new(&config.date_format).any(|item| matches!(item, Item::Error));
        let date_format = if has_error {
            warn!(format = %config.date_format, "invalid report date format, using default");
            ReportConfig::default().date_format
        } else {
            config.date_format.clone()
        };
        Self { date_format }
    }

    /// Print the report of active users, skipping invalid ones with a warning
    pub fn generate_active_users_report(&self, users: &[User], console: &mut dyn Console) {
        self.render_report(users, Local::now(), console);
    }

    fn render_report(
        &self,
        users: &[User],
        generated_at: DateTime<Local>,
        console: &mut dyn Console,
    ) {
        debug!(total = users.len(), "generating active users report");
        console.line("--- Iniciando la generación del reporte ---");

        let active: Vec<&User> = users.iter().filter(|u| u.is_active()).collect();
        console.line(&format!("Se encontraron {} usuarios activos.", active.len()));

        console.line("--- REPORTE DE USUARIOS ---");
        for user in active {
            match user.validate() {
                Ok(()) => console.line(&user.report_line()),
                Err(reason) => {
                    warn!(user_id = user.id(), reason = reason.field(), "skipping invalid user");
                    console.line(&format!(
                        "ADVERTENCIA: Usuario con ID {} tiene {} inválido.",
                        user.id(),
                        reason.field_label()
                    ));
                }
            }
        }

        console.line(&format!(
            "El reporte fue generado el {}",
            generated_at.format(&self.date_format)
        ));
        console.line("--- Fin del reporte ---");
    }

    /// Register a user; returns `false` and prints the reason when invalid
    ///
    /// Nothing is stored.
    pub fn register_new_user(&self, name: &str, email: &str, console: &mut dyn Console) -> bool {
        if let Err(reason) = validate_user_fields(name, email) {
            warn!(reason = reason.field(), "registration rejected");
            console.error(&format!("Error: {reason}"));
            return false;
        }

        info!(name, "user registered");
        console.line(&format!("Usuario \"{name}\" registrado correctamente."));
        true
    }
}
