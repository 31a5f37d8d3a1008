// Copyright 2025 Cowboy AI, LLC.

//! Order shipping demo

use anyhow::{Context, Result};
use refactor_kata::{init_tracing, sample_data, Console, KataConfig, OrderProcessor, StdConsole};

fn main() -> Result<()> {
    let config = KataConfig::load().context("loading demo configuration")?;
    init_tracing(&config.logging);

    let mut console = StdConsole;
    console.line("--- Iniciando demo de 'Los que duelen en el mantenimiento' ---");

    let processor = OrderProcessor::new();
    let customer = sample_data::customer();
    for (order, address) in sample_data::shipments() {
        processor.ship_order(&order, &customer, &address, &mut console);
    }

    console.line("");
    console.line("--- Fin de la demo ---");
    Ok(())
}
