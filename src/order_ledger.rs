//! Registro de pedidos pendientes y puntaje de las entregas
use std::collections::{HashMap, VecDeque};

use log::{debug, info};
use serde::Deserialize;

use crate::{errors::KitchenError, order::Order};

const FULL_SCORE: u32 = 100;

/// Como convertir la cantidad de errores de una entrega en puntaje.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// `100 * (len - incorrect) / len`, truncado y nunca menor a 0.
    #[default]
    Proportional,
    /// `100 * floor((len - incorrect) / len)`: cualquier error da 0.
    Strict,
}

/// Cola de pedidos pendientes. Cada entrega consume el pedido mas viejo, sin importar el puntaje.
pub struct OrderLedger {
    orders: VecDeque<Order>,
    next_id: usize,
    scoring: ScoringMode,
}

impl OrderLedger {
    pub fn new(scoring: ScoringMode) -> OrderLedger {
        OrderLedger {
            orders: VecDeque::new(),
            next_id: 0,
            scoring,
        }
    }

    pub fn enqueue(&mut self, items: Vec<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        debug!("[LEDGER] Added order {} {:?}", id, items);
        self.orders.push_back(Order::new(id, items));
        id
    }

    /// Puntua `composition` contra el pedido mas viejo y lo saca de la cola.
    pub fn submit(&mut self, composition: &[String]) -> Result<(Order, u32), KitchenError> {
        let order = self.orders.pop_front().ok_or(KitchenError::NoPendingOrder)?;
        let score = score_composition(&order.items, composition, self.scoring);
        info!("[LEDGER] Order {} served with score {}", order.id, score);
        Ok((order, score))
    }

    pub fn head(&self) -> Option<&Order> {
        self.orders.front()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }
}

/// Cuenta los errores de la entrega: por cada ingrediente del pedido, la diferencia
/// entre las cantidades pedidas y entregadas, mas uno por cada posicion que no coincide.
pub fn count_incorrect(order: &[String], composition: &[String]) -> usize {
    let mut required: HashMap<&str, usize> = HashMap::new();
    for item in order {
        *required.entry(item.as_str()).or_insert(0) += 1;
    }

    let mut incorrect = 0;
    for (item, required_count) in &required {
        let submitted_count = composition.iter().filter(|c| c.as_str() == *item).count();
        incorrect += required_count.abs_diff(submitted_count);
    }

    incorrect
        + order
            .iter()
            .zip(composition)
            .filter(|(wanted, given)| wanted != given)
            .count()
}

pub fn score_composition(order: &[String], composition: &[String], mode: ScoringMode) -> u32 {
    if order.len() != composition.len() {
        return 0;
    }
    if order == composition {
        return FULL_SCORE;
    }

    let len = order.len();
    let correct = len.saturating_sub(count_incorrect(order, composition));
    let score = match mode {
        ScoringMode::Proportional => FULL_SCORE as usize * correct / len,
        ScoringMode::Strict => FULL_SCORE as usize * (correct / len),
    };
    score as u32
}
