use std::time::Duration;

use log::trace;

use crate::grid::Grid;

/// Avanza las estaciones (coccion en las parrillas) con un periodo fijo,
/// independiente del refresco de pantalla.
pub struct TickScheduler {
    period: Duration,
    ticks: u64,
}

impl TickScheduler {
    pub fn new(period: Duration) -> TickScheduler {
        TickScheduler { period, ticks: 0 }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn advance(&mut self, grid: &mut Grid) {
        grid.for_each_station_mut(|station| station.tick());
        self.ticks += 1;
        trace!("[SCHEDULER] Tick {}", self.ticks);
    }
}
