//! Grilla de estaciones de la cocina
use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    errors::KitchenError,
    station::{Station, StationKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }

    /// Celda vecina en la direccion dada. `None` si se sale por arriba o por la izquierda.
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Matriz rectangular de estaciones. Toda coordenada dentro de los limites tiene
/// exactamente una estacion (aunque sea piso).
pub struct Grid {
    width: usize,
    height: usize,
    stations: Vec<Station>,
}

impl Grid {
    /// Arma la grilla a partir de las filas del layout. Cualquier simbolo presente en
    /// `dispensers` es un dispenser del ingrediente asociado.
    pub fn from_layout(
        rows: &[String],
        dispensers: &HashMap<char, String>,
    ) -> Result<Grid, KitchenError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(KitchenError::InvalidLayout("empty layout".to_string()));
        }

        let mut stations = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(KitchenError::InvalidLayout(format!(
                    "row {} has {} tiles, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, symbol) in row.chars().enumerate() {
                let kind = station_kind(symbol, dispensers)?;
                stations.push(Station::new(kind, Position::new(x, y)));
            }
        }

        Ok(Grid {
            width,
            height,
            stations,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn station_at(&self, x: usize, y: usize) -> Result<&Station, KitchenError> {
        let index = self.index_of(x, y)?;
        Ok(&self.stations[index])
    }

    pub fn station_at_mut(&mut self, x: usize, y: usize) -> Result<&mut Station, KitchenError> {
        let index = self.index_of(x, y)?;
        Ok(&mut self.stations[index])
    }

    pub fn for_each_station<F: FnMut(&Station)>(&self, f: F) {
        self.stations.iter().for_each(f);
    }

    pub fn for_each_station_mut<F: FnMut(&mut Station)>(&mut self, f: F) {
        self.stations.iter_mut().for_each(f);
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, KitchenError> {
        if !self.contains(Position::new(x, y)) {
            return Err(KitchenError::OutOfBounds { x, y });
        }
        Ok(y * self.width + x)
    }
}

fn station_kind(
    symbol: char,
    dispensers: &HashMap<char, String>,
) -> Result<StationKind, KitchenError> {
    let kind = match symbol {
        '.' => StationKind::Floor,
        '#' => StationKind::Counter,
        '/' => StationKind::CuttingBoard,
        'G' => StationKind::Grill,
        'X' => StationKind::GarbageDisposal,
        'A' => StationKind::Assembler,
        other => match dispensers.get(&other) {
            Some(ingredient) => StationKind::Dispenser(ingredient.clone()),
            None => {
                return Err(KitchenError::InvalidLayout(format!(
                    "unknown tile symbol '{}'",
                    other
                )))
            }
        },
    };
    Ok(kind)
}
