// Copyright 2025 Cowboy AI, LLC.

//! Employee roles and bonus reporting
//!
//! Each role is its own type implementing [`Employee`]. Bonus rules and
//! report lines are resolved by the role itself, so a new role is a new
//! `impl Employee` and nothing else changes.
//!
//! ```rust
//! use refactor_kata::employees::{Employee, Engineer, Intern, Manager};
//!
//! let staff: Vec<Box<dyn Employee>> = vec![
//!     Box::new(Manager::new("Ana", 5000, vec!["Proyecto Phoenix".to_string()])),
//!     Box::new(Engineer::new("Juan", 3000)),
//!     Box::new(Intern::new("Lucía", 1000)),
//! ];
//! let total: f64 = staff.iter().map(|e| e.calculate_bonus()).sum();
//! assert!((total - 1800.0).abs() < 1e-9);
//! ```

use crate::console::Console;
use crate::formal_domain::DomainConcept;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Manager bonus as a fraction of salary
pub const MANAGER_BONUS_RATE: f64 = 0.2;
/// Engineer bonus as a fraction of salary
pub const ENGINEER_BONUS_RATE: f64 = 0.1;
/// Fixed intern bonus
pub const INTERN_BONUS: f64 = 500.0;

/// Attributes every role shares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    name: String,
    salary: u32,
}

impl EmployeeProfile {
    /// Create a profile
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    /// Employee name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monthly salary
    pub fn salary(&self) -> u32 {
        self.salary
    }
}

/// Behaviour every role provides
pub trait Employee {
    /// Shared attributes
    fn profile(&self) -> &EmployeeProfile;

    /// Label shown in report lines
    fn role_label(&self) -> &'static str;

    /// Bonus owed under this role's rule
    fn calculate_bonus(&self) -> f64;

    /// Employee name
    fn name(&self) -> &str {
        self.profile().name()
    }

    /// Monthly salary
    fn salary(&self) -> u32 {
        self.profile().salary()
    }

    /// One-line description; roles with extra detail extend the base line
    fn report_line(&self) -> String {
        base_report_line(self)
    }
}

/// `REPORTE: <name> (<role>) - Salario: $<salary>`
pub fn base_report_line<E: Employee + ?Sized>(employee: &E) -> String {
    format!(
        "REPORTE: {} ({}) - Salario: ${}",
        employee.name(),
        employee.role_label(),
        employee.salary()
    )
}

/// Manager: 20% bonus, report lists the number of managed projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    profile: EmployeeProfile,
    projects_managed: Vec<String>,
}

impl Manager {
    /// Create a manager
    pub fn new(name: impl Into<String>, salary: u32, projects_managed: Vec<String>) -> Self {
        Self {
            profile: EmployeeProfile::new(name, salary),
            projects_managed,
        }
    }

    /// Projects in the order they were assigned
    pub fn projects_managed(&self) -> &[String] {
        &self.projects_managed
    }
}

impl DomainConcept for Manager {}

impl Employee for Manager {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn role_label(&self) -> &'static str {
        "Manager"
    }

    fn calculate_bonus(&self) -> f64 {
        f64::from(self.salary()) * MANAGER_BONUS_RATE
    }

    fn report_line(&self) -> String {
        format!(
            "{} | Proyectos: {}",
            base_report_line(self),
            self.projects_managed.len()
        )
    }
}

/// Engineer: 10% bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engineer {
    profile: EmployeeProfile,
}

impl Engineer {
    /// Create an engineer
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            profile: EmployeeProfile::new(name, salary),
        }
    }
}

impl DomainConcept for Engineer {}

impl Employee for Engineer {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn role_label(&self) -> &'static str {
        "Engineer"
    }

    fn calculate_bonus(&self) -> f64 {
        f64::from(self.salary()) * ENGINEER_BONUS_RATE
    }
}

/// Intern: fixed bonus regardless of salary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intern {
    profile: EmployeeProfile,
}

impl Intern {
    /// Create an intern
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            profile: EmployeeProfile::new(name, salary),
        }
    }
}

impl DomainConcept for Intern {}

impl Employee for Intern {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn role_label(&self) -> &'static str {
        "Intern"
    }

    fn calculate_bonus(&self) -> f64 {
        INTERN_BONUS
    }
}

/// Prints bonus lines for a roster
pub struct BonusReport;

impl BonusReport {
    /// For each employee: announce, print the report line, then the bonus
    pub fn run(employees: &[Box<dyn Employee>], console: &mut dyn Console) {
        for employee in employees {
            console.line(&format!("Calculando bono para {}...", employee.name()));
            let bonus = employee.calculate_bonus();
            debug!(name = employee.name(), role = employee.role_label(), bonus, "bonus calculated");

            console.line(&employee.report_line());
            console.line(&format!("  -> Bono calculado: ${bonus}"));
            console.line("");
        }
    }

    /// Sum of every employee's bonus
    pub fn total(employees: &[Box<dyn Employee>]) -> f64 {
        employees.iter().map(|e| e.calculate_bonus()).sum()
    }
}
