//! El jugador: posicion, hacia donde mira y lo que tiene en la mano.
use log::debug;
use serde::Deserialize;

use crate::{
    grid::{Direction, Grid, Position},
    ingredient::Ingredient,
    order_ledger::OrderLedger,
    station::Delivery,
};

/// Comandos discretos que llegan desde el input (o de un script).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Command {
    Move(Direction),
    Interact,
    PlaceOrPickup,
    /// Deja correr el ticker los ms indicados antes del siguiente comando.
    Wait(u64),
}

#[derive(Debug)]
pub struct Player {
    position: Position,
    facing: Direction,
    held: Option<Ingredient>,
}

impl Player {
    pub fn new(position: Position, facing: Direction) -> Player {
        Player {
            position,
            facing,
            held: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn held_ingredient(&self) -> Option<&Ingredient> {
        self.held.as_ref()
    }

    /// Celda a la que mira el jugador, si esta dentro de la grilla.
    pub fn facing_position(&self, grid: &Grid) -> Option<Position> {
        self.position
            .step(self.facing)
            .filter(|position| grid.contains(*position))
    }

    /// Siempre gira; solo avanza si la celda existe y se puede pisar.
    pub fn move_towards(&mut self, direction: Direction, grid: &Grid) {
        self.facing = direction;
        let Some(target) = self.position.step(direction) else {
            return;
        };
        match grid.station_at(target.x, target.y) {
            Ok(station) if station.is_standable() => self.position = target,
            Ok(station) => debug!("[PLAYER] Blocked by {:?} at {:?}", station.kind(), target),
            Err(err) => debug!("[PLAYER] Blocked: {}", err),
        }
    }

    pub fn interact(&self, grid: &mut Grid, ledger: &mut OrderLedger) -> Option<Delivery> {
        let Some(target) = self.facing_position(grid) else {
            debug!("[PLAYER] Facing outside the kitchen");
            return None;
        };
        grid.station_at_mut(target.x, target.y).ok()?.act(ledger)
    }

    pub fn place_or_pickup(&mut self, grid: &mut Grid) {
        let Some(target) = self.facing_position(grid) else {
            debug!("[PLAYER] Facing outside the kitchen");
            return;
        };
        if let Ok(station) = grid.station_at_mut(target.x, target.y) {
            station.place_or_pickup(&mut self.held);
        }
    }
}
