//! Ingredientes que circulan por la cocina.
use crate::constants::{MAX_COOK_LEVEL, MAX_CUT_LEVEL};

/// Un ingrediente con su nombre y dos progresos independientes: corte y coccion.
/// Los progresos solo avanzan; para "volver atras" hay que tirarlo y sacar otro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    name: String,
    cut_level: u8,
    cook_level: u8,
}

impl Ingredient {
    pub fn new(name: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            cut_level: 0,
            cook_level: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cut_level(&self) -> u8 {
        self.cut_level
    }

    pub fn cook_level(&self) -> u8 {
        self.cook_level
    }

    pub fn is_cut(&self) -> bool {
        self.cut_level >= MAX_CUT_LEVEL
    }

    pub fn is_burnt(&self) -> bool {
        self.cook_level >= MAX_COOK_LEVEL
    }

    /// Devuelve true si el ingrediente cambio.
    pub fn cut(&mut self) -> bool {
        if self.is_cut() {
            return false;
        }
        self.cut_level += 1;
        true
    }

    /// Devuelve true si el ingrediente cambio.
    pub fn advance_cook(&mut self) -> bool {
        if self.is_burnt() {
            return false;
        }
        self.cook_level += 1;
        true
    }

    /// Descriptor usado por los ensambladores y las ordenes: `nombre,corte,coccion`
    pub fn descriptor(&self) -> String {
        format!("{},{},{}", self.name, self.cut_level, self.cook_level)
    }
}
