use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::constants::TICK_PERIOD_IN_MS;
use crate::errors::KitchenError;
use crate::grid::{Direction, Grid, Position};
use crate::kitchen::Kitchen;
use crate::order::{Menu, Recipe};
use crate::order_ledger::ScoringMode;
use crate::player::Command;

#[derive(Deserialize, Debug)]
struct PlayerStart {
    x: usize,
    y: usize,
    facing: Direction,
}

/// Configuracion de la cocina tal como viene en el JSON.
#[derive(Deserialize, Debug)]
pub struct KitchenConfiguration {
    layout: Vec<String>,
    #[serde(default)]
    dispensers: HashMap<char, String>,
    player: PlayerStart,
    #[serde(default)]
    orders: Vec<Vec<String>>,
    #[serde(default)]
    menu: Vec<Recipe>,
    #[serde(default)]
    scoring: ScoringMode,
    tick_period_ms: Option<u64>,
    #[serde(default)]
    pub script: Vec<Command>,
}

impl KitchenConfiguration {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.unwrap_or(TICK_PERIOD_IN_MS))
    }

    /// Arma la cocina y encola los pedidos iniciales en el orden del archivo.
    pub fn build_kitchen(&self) -> Result<Kitchen, KitchenError> {
        let grid = Grid::from_layout(&self.layout, &self.dispensers)?;
        let start = Position::new(self.player.x, self.player.y);
        let mut kitchen = Kitchen::new(
            grid,
            start,
            self.player.facing,
            self.scoring,
            self.tick_period(),
        )?;
        for items in &self.orders {
            kitchen.enqueue_order(items.clone());
        }
        debug!("[READER] Added {} opening orders", self.orders.len());
        Ok(kitchen)
    }

    pub fn menu(&self) -> Menu {
        Menu::new(self.menu.clone())
    }
}

fn read_configuration_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<KitchenConfiguration, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let configuration: KitchenConfiguration = serde_json::from_reader(reader)?;
    Ok(configuration)
}

pub fn read_kitchen<P: AsRef<Path>>(path: P) -> Result<KitchenConfiguration, KitchenError> {
    let configuration = read_configuration_from_file(path)
        .map_err(|err| KitchenError::FileReaderError(err.to_string()))?;
    info!(
        "[READER] Loaded a {}x{} kitchen",
        configuration.layout.first().map(|row| row.chars().count()).unwrap_or(0),
        configuration.layout.len()
    );
    Ok(configuration)
}
