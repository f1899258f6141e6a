//! La cocina: duenia de la grilla, el jugador, los pedidos y el scheduler.
//! Toda mutacion pasa por aca, de a una por vez.
use std::time::Duration;

use log::{debug, info};

use crate::{
    errors::KitchenError,
    grid::{Direction, Grid, Position},
    order::OrderGenerator,
    order_ledger::{OrderLedger, ScoringMode},
    player::{Command, Player},
    station::Delivery,
    tick_scheduler::TickScheduler,
};

pub struct Kitchen {
    grid: Grid,
    player: Player,
    ledger: OrderLedger,
    scheduler: TickScheduler,
    served: Vec<Delivery>,
    register: u64,
}

impl Kitchen {
    pub fn new(
        grid: Grid,
        start: Position,
        facing: Direction,
        scoring: ScoringMode,
        tick_period: Duration,
    ) -> Result<Kitchen, KitchenError> {
        let standable = grid
            .station_at(start.x, start.y)
            .map(|station| station.is_standable())
            .unwrap_or(false);
        if !standable {
            return Err(KitchenError::InvalidStart {
                x: start.x,
                y: start.y,
            });
        }

        Ok(Kitchen {
            grid,
            player: Player::new(start, facing),
            ledger: OrderLedger::new(scoring),
            scheduler: TickScheduler::new(tick_period),
            served: Vec::new(),
            register: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn served(&self) -> &[Delivery] {
        &self.served
    }

    /// Puntaje acumulado de todas las entregas.
    pub fn register(&self) -> u64 {
        self.register
    }

    pub fn tick_period(&self) -> Duration {
        self.scheduler.period()
    }

    pub fn ticks(&self) -> u64 {
        self.scheduler.ticks()
    }

    pub fn enqueue_order(&mut self, items: Vec<String>) -> usize {
        self.ledger.enqueue(items)
    }

    pub fn new_order(&mut self, generator: &mut dyn OrderGenerator) -> Option<usize> {
        let items = generator.next_order()?;
        Some(self.ledger.enqueue(items))
    }

    pub fn move_player(&mut self, direction: Direction) {
        self.player.move_towards(direction, &self.grid);
    }

    pub fn place_or_pickup(&mut self) {
        self.player.place_or_pickup(&mut self.grid);
    }

    pub fn interact(&mut self) -> Option<Delivery> {
        let delivery = self.player.interact(&mut self.grid, &mut self.ledger)?;
        self.register += u64::from(delivery.score);
        info!(
            "[KITCHEN] Delivered order {} for {} points, register at {}",
            delivery.order_id, delivery.score, self.register
        );
        self.served.push(delivery.clone());
        Some(delivery)
    }

    pub fn apply(&mut self, command: Command) -> Option<Delivery> {
        debug!("[KITCHEN] Applying {:?}", command);
        match command {
            Command::Move(direction) => self.move_player(direction),
            Command::Interact => return self.interact(),
            Command::PlaceOrPickup => self.place_or_pickup(),
            Command::Wait(_) => {}
        }
        None
    }

    pub fn advance(&mut self) {
        self.scheduler.advance(&mut self.grid);
    }

    /// Volcado de texto de la grilla, con el jugador como `@`.
    pub fn render_text(&self) -> String {
        let (width, _) = self.grid.dimensions();
        let player = self.player.position();
        let mut text = String::new();
        self.grid.for_each_station(|station| {
            let position = station.position();
            if position == player {
                text.push('@');
            } else {
                text.push(station.kind().symbol());
            }
            if position.x + 1 == width {
                text.push('\n');
            }
        });
        text
    }
}
