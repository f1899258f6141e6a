use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;

/// Un pedido pendiente: la composicion que se espera recibir en el ensamblador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: usize,
    pub items: Vec<String>,
}

impl Order {
    pub fn new(id: usize, items: Vec<String>) -> Order {
        Order { id, items }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub items: Vec<String>,
}

/// Fuente externa de pedidos nuevos.
pub trait OrderGenerator {
    fn next_order(&mut self) -> Option<Vec<String>>;
}

/// Genera pedidos eligiendo recetas de un menu fijo.
pub struct Menu {
    recipes: Vec<Recipe>,
    rng: StdRng,
}

impl Menu {
    pub fn new(recipes: Vec<Recipe>) -> Menu {
        Menu {
            recipes,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(recipes: Vec<Recipe>, seed: u64) -> Menu {
        Menu {
            recipes,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl OrderGenerator for Menu {
    fn next_order(&mut self) -> Option<Vec<String>> {
        let recipe = self.recipes.choose(&mut self.rng)?;
        debug!("[MENU] Picked recipe {}", recipe.name);
        Some(recipe.items.clone())
    }
}
