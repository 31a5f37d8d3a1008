// Copyright 2025 Cowboy AI, LLC.

//! Employee bonus demo

use anyhow::{Context, Result};
use refactor_kata::{init_tracing, sample_data, BonusReport, Console, KataConfig, StdConsole};

fn main() -> Result<()> {
    let config = KataConfig::load().context("loading demo configuration")?;
    init_tracing(&config.logging);

    let mut console = StdConsole;
    console.line("--- Iniciando demo de 'Cimientos Raros' ---");
    BonusReport::run(&sample_data::employees(), &mut console);
    console.line("--- Fin de la demo ---");
    Ok(())
}
