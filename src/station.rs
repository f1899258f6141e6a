//! Estaciones de la cocina. Cada estacion ocupa una celda de la grilla y su
//! comportamiento depende de su tipo (pick up / place / swap / act / tick).
use log::{debug, warn};

use crate::{grid::Position, ingredient::Ingredient, order_ledger::OrderLedger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationKind {
    Floor,
    /// Fuente infinita del ingrediente indicado
    Dispenser(String),
    CuttingBoard,
    Grill,
    GarbageDisposal,
    Counter,
    Assembler,
}

impl StationKind {
    pub fn symbol(&self) -> char {
        match self {
            StationKind::Floor => '.',
            StationKind::Dispenser(_) => 'D',
            StationKind::CuttingBoard => '/',
            StationKind::Grill => 'G',
            StationKind::GarbageDisposal => 'X',
            StationKind::Counter => '#',
            StationKind::Assembler => 'A',
        }
    }

    fn stores_items(&self) -> bool {
        matches!(
            self,
            StationKind::CuttingBoard | StationKind::Grill | StationKind::Counter
        )
    }
}

/// Resultado de una entrega en un ensamblador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub order_id: usize,
    pub order: Vec<String>,
    pub composition: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct Station {
    kind: StationKind,
    position: Position,
    held: Option<Ingredient>,
    pending_composition: Vec<String>,
}

impl Station {
    pub fn new(kind: StationKind, position: Position) -> Station {
        Station {
            kind,
            position,
            held: None,
            pending_composition: Vec::new(),
        }
    }

    pub fn kind(&self) -> &StationKind {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn held_ingredient(&self) -> Option<&Ingredient> {
        self.held.as_ref()
    }

    pub fn pending_composition(&self) -> &[String] {
        &self.pending_composition
    }

    pub fn dispenser_kind(&self) -> Option<&str> {
        match &self.kind {
            StationKind::Dispenser(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_standable(&self) -> bool {
        self.kind == StationKind::Floor
    }

    /// Un dispenser siempre "tiene" algo para entregar.
    pub fn has_item(&self) -> bool {
        matches!(self.kind, StationKind::Dispenser(_)) || self.held.is_some()
    }

    /// Resuelve la accion del jugador sobre la estacion: intercambiar, levantar, dejar o
    /// nada, segun quien tenga un ingrediente.
    pub fn place_or_pickup(&mut self, hand: &mut Option<Ingredient>) {
        match (hand.is_some(), self.has_item()) {
            (true, true) => self.swap(hand),
            (false, true) => self.pickup(hand),
            (true, false) => self.place(hand),
            (false, false) => {}
        }
    }

    fn place(&mut self, hand: &mut Option<Ingredient>) {
        match &self.kind {
            kind if kind.stores_items() => {
                if self.held.is_none() {
                    self.held = hand.take();
                }
            }
            StationKind::GarbageDisposal => {
                if let Some(ingredient) = hand.take() {
                    debug!("[DISPOSAL] Threw away {}", ingredient.descriptor());
                }
            }
            StationKind::Assembler => {
                if let Some(ingredient) = hand.take() {
                    debug!("[ASSEMBLER] Added {}", ingredient.descriptor());
                    self.pending_composition.push(ingredient.descriptor());
                }
            }
            _ => {}
        }
    }

    fn pickup(&mut self, hand: &mut Option<Ingredient>) {
        if hand.is_some() {
            return;
        }
        match &self.kind {
            StationKind::Dispenser(name) => {
                debug!("[DISPENSER] Dispensed {}", name);
                *hand = Some(Ingredient::new(name));
            }
            kind if kind.stores_items() => *hand = self.held.take(),
            _ => {}
        }
    }

    fn swap(&mut self, hand: &mut Option<Ingredient>) {
        if self.kind.stores_items() && self.held.is_some() {
            std::mem::swap(hand, &mut self.held);
        }
    }

    /// Accion puntual. Solo el ensamblador produce una entrega.
    pub fn act(&mut self, ledger: &mut OrderLedger) -> Option<Delivery> {
        match self.kind {
            StationKind::CuttingBoard => {
                if let Some(ingredient) = self.held.as_mut() {
                    if ingredient.cut() {
                        debug!("[CUTTING BOARD] Cut {}", ingredient.name());
                    }
                }
                None
            }
            StationKind::Assembler => self.deliver(ledger),
            _ => None,
        }
    }

    fn deliver(&mut self, ledger: &mut OrderLedger) -> Option<Delivery> {
        match ledger.submit(&self.pending_composition) {
            Ok((order, score)) => Some(Delivery {
                order_id: order.id,
                order: order.items,
                composition: std::mem::take(&mut self.pending_composition),
                score,
            }),
            Err(err) => {
                warn!("[ASSEMBLER] Nothing delivered: {}", err);
                None
            }
        }
    }

    /// Actualizacion periodica. Solo la parrilla cambia algo: cocina lo que tiene.
    pub fn tick(&mut self) {
        if self.kind != StationKind::Grill {
            return;
        }
        if let Some(ingredient) = self.held.as_mut() {
            if ingredient.advance_cook() {
                debug!(
                    "[GRILL] {} at {:?} is now at cook level {}",
                    ingredient.name(),
                    self.position,
                    ingredient.cook_level()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_ledger::ScoringMode;

    fn station(kind: StationKind) -> Station {
        Station::new(kind, Position::new(0, 0))
    }

    fn count(hand: &Option<Ingredient>, station: &Station) -> usize {
        hand.iter().count() + station.held_ingredient().iter().count()
    }

    #[test]
    fn should_ignore_everything_on_the_floor() {
        let mut floor = station(StationKind::Floor);
        let mut hand = Some(Ingredient::new("lettuce"));
        floor.place_or_pickup(&mut hand);
        floor.tick();
        assert_eq!(Some(Ingredient::new("lettuce")), hand);
        assert_eq!(None, floor.held_ingredient());
    }

    #[test]
    fn should_dispense_a_fresh_ingredient_every_time() {
        let mut dispenser = station(StationKind::Dispenser("tomato".to_string()));
        let mut hand = None;
        dispenser.place_or_pickup(&mut hand);
        assert_eq!(Some(Ingredient::new("tomato")), hand);

        let mut counter = station(StationKind::Counter);
        if let Some(tomato) = hand.as_mut() {
            tomato.cut();
        }
        counter.place_or_pickup(&mut hand);
        dispenser.place_or_pickup(&mut hand);
        assert_eq!(Some(Ingredient::new("tomato")), hand);
        assert_eq!(Some("tomato"), dispenser.dispenser_kind());
    }

    #[test]
    fn should_not_take_items_into_a_dispenser() {
        let mut dispenser = station(StationKind::Dispenser("tomato".to_string()));
        let mut hand = Some(Ingredient::new("lettuce"));
        dispenser.place_or_pickup(&mut hand);
        assert_eq!(Some(Ingredient::new("lettuce")), hand);
    }

    #[test]
    fn should_place_and_pickup_from_a_counter_without_changes() {
        let mut counter = station(StationKind::Counter);
        let mut hand = Some(Ingredient::new("bun"));
        counter.place_or_pickup(&mut hand);
        assert_eq!(None, hand);
        assert_eq!(Some(&Ingredient::new("bun")), counter.held_ingredient());
        counter.act(&mut OrderLedger::new(ScoringMode::Proportional));
        counter.tick();
        counter.place_or_pickup(&mut hand);
        assert_eq!(Some(Ingredient::new("bun")), hand);
        assert_eq!(None, counter.held_ingredient());
    }

    #[test]
    fn should_only_change_on_tick_when_it_is_a_grill() {
        let kinds = [
            StationKind::Floor,
            StationKind::Dispenser("tomato".to_string()),
            StationKind::CuttingBoard,
            StationKind::GarbageDisposal,
            StationKind::Counter,
            StationKind::Assembler,
        ];
        for kind in kinds {
            let mut station = station(kind);
            let mut hand = Some(Ingredient::new("patty"));
            station.place_or_pickup(&mut hand);
            let held = station.held_ingredient().cloned();
            let composition = station.pending_composition().to_vec();

            for _ in 0..3 {
                station.tick();
                assert_eq!(held.as_ref(), station.held_ingredient());
                assert_eq!(composition, station.pending_composition());
            }
        }
    }

    #[test]
    fn should_keep_the_assembled_composition_on_tick() {
        let mut assembler = station(StationKind::Assembler);
        let mut hand = Some(Ingredient::new("patty"));
        assembler.place_or_pickup(&mut hand);
        assembler.tick();
        assembler.tick();
        assert_eq!(&["patty,0,0".to_string()], assembler.pending_composition());
    }

    #[test]
    fn should_preserve_the_count_on_place_swap_and_pickup() {
        for kind in [StationKind::Counter, StationKind::CuttingBoard, StationKind::Grill] {
            let mut station = station(kind);
            let mut hand = Some(Ingredient::new("lettuce"));

            station.place_or_pickup(&mut hand);
            assert_eq!(1, count(&hand, &station));
            assert_eq!(None, hand);

            hand = Some(Ingredient::new("tomato"));
            station.place_or_pickup(&mut hand);
            assert_eq!(2, count(&hand, &station));

            station.place_or_pickup(&mut hand);
            assert_eq!(2, count(&hand, &station));
            assert_eq!(Some(Ingredient::new("lettuce")), hand);

            hand = None;
            station.place_or_pickup(&mut hand);
            assert_eq!(1, count(&hand, &station));
            assert_eq!(Some(Ingredient::new("tomato")), hand);
            assert_eq!(None, station.held_ingredient());
        }
    }

    #[test]
    fn should_swap_ingredients_preserving_the_count() {
        let mut board = station(StationKind::CuttingBoard);
        let mut hand = Some(Ingredient::new("lettuce"));
        board.place_or_pickup(&mut hand);
        hand = Some(Ingredient::new("tomato"));
        let before = count(&hand, &board);
        board.place_or_pickup(&mut hand);
        assert_eq!(before, count(&hand, &board));
        assert_eq!(Some(Ingredient::new("lettuce")), hand);
        assert_eq!(Some(&Ingredient::new("tomato")), board.held_ingredient());
    }

    #[test]
    fn should_cut_on_the_cutting_board_only_once() {
        let mut ledger = OrderLedger::new(ScoringMode::Proportional);
        let mut board = station(StationKind::CuttingBoard);
        let mut hand = Some(Ingredient::new("lettuce"));
        board.place_or_pickup(&mut hand);
        board.act(&mut ledger);
        board.act(&mut ledger);
        assert_eq!(Some(1), board.held_ingredient().map(|i| i.cut_level()));
        board.tick();
        assert_eq!(Some(0), board.held_ingredient().map(|i| i.cook_level()));
    }

    #[test]
    fn should_cook_on_the_grill_until_burnt() {
        let mut grill = station(StationKind::Grill);
        let mut hand = Some(Ingredient::new("patty"));
        grill.place_or_pickup(&mut hand);
        let mut levels = Vec::new();
        for _ in 0..4 {
            grill.tick();
            levels.push(grill.held_ingredient().map(|i| i.cook_level()));
        }
        assert_eq!(vec![Some(1), Some(2), Some(2), Some(2)], levels);
        grill.place_or_pickup(&mut hand);
        assert_eq!(true, hand.map(|i| i.is_burnt()).unwrap_or(false));
    }

    #[test]
    fn should_destroy_what_goes_into_the_garbage() {
        let mut garbage = station(StationKind::GarbageDisposal);
        let mut hand = Some(Ingredient::new("patty"));
        garbage.place_or_pickup(&mut hand);
        assert_eq!(None, hand);
        assert_eq!(None, garbage.held_ingredient());
        garbage.place_or_pickup(&mut hand);
        assert_eq!(None, hand);
    }

    #[test]
    fn should_assemble_and_deliver_to_the_ledger() {
        let mut ledger = OrderLedger::new(ScoringMode::Proportional);
        ledger.enqueue(vec!["lettuce,1,0".to_string()]);
        let mut assembler = station(StationKind::Assembler);
        let mut lettuce = Ingredient::new("lettuce");
        lettuce.cut();
        let mut hand = Some(lettuce);
        assembler.place_or_pickup(&mut hand);
        assert_eq!(None, hand);
        assert_eq!(&["lettuce,1,0".to_string()], assembler.pending_composition());

        let delivery = assembler.act(&mut ledger).unwrap();
        assert_eq!(100, delivery.score);
        assert_eq!(0, delivery.order_id);
        assert_eq!(true, assembler.pending_composition().is_empty());
        assert_eq!(true, ledger.is_empty());
    }

    #[test]
    fn should_keep_the_composition_when_there_is_no_order() {
        let mut ledger = OrderLedger::new(ScoringMode::Proportional);
        let mut assembler = station(StationKind::Assembler);
        let mut hand = Some(Ingredient::new("bun"));
        assembler.place_or_pickup(&mut hand);
        assert_eq!(None, assembler.act(&mut ledger));
        assert_eq!(&["bun,0,0".to_string()], assembler.pending_composition());
    }
}
