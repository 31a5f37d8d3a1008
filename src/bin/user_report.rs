// Copyright 2025 Cowboy AI, LLC.

//! Active users report and registration demo

use anyhow::{Context, Result};
use refactor_kata::{init_tracing, sample_data, Console, KataConfig, StdConsole, UserManager};

fn main() -> Result<()> {
    let config = KataConfig::load().context("loading demo configuration")?;
    init_tracing(&config.logging);

    let mut console = StdConsole;
    console.line("Iniciando el script de demostración...");

    let manager = UserManager::new(&config.report);
    manager.generate_active_users_report(&sample_data::users(), &mut console);

    console.line("");
    manager.register_new_user("Lucía Fernández", "lucia.fernandez@example.com", &mut console);
    manager.register_new_user("Pedro", "pedro.example.com", &mut console);

    console.line("Script de demostración finalizado.");
    Ok(())
}
