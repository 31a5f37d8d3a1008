// Copyright 2025 Cowboy AI, LLC.

//! # Refactor Kata
//!
//! Three small domain scenarios, each written in its refactored shape:
//! - **users**: one validity rule for name/email shared by the active users
//!   report and registration
//! - **employees**: roles as separate types behind the [`Employee`] trait,
//!   each owning its bonus rule and report line
//! - **shipping**: [`Address`] as a value object owning its validation and
//!   formatting, consumed by [`OrderProcessor`]
//!
//! All output goes through the [`Console`] trait so the demo binaries print
//! to the terminal and tests record lines.

#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod employees;
mod errors;
pub mod formal_domain;
pub mod sample_data;
pub mod shipping;
pub mod telemetry;
pub mod users;

pub use config::{KataConfig, LoggingConfig, ReportConfig};
pub use console::{Console, ConsoleLine, RecordingConsole, StdConsole, Stream};
pub use employees::{BonusReport, Employee, EmployeeProfile, Engineer, Intern, Manager};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use formal_domain::{DomainConcept, DomainEntity, ValueObject};
pub use shipping::{Address, Customer, Order, OrderProcessor};
pub use telemetry::init_tracing;
pub use users::{is_user_valid, validate_user_fields, User, UserManager};
