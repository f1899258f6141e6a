//! Parametros de configuracion de la cocina

/// Periodo (en ms) con el que avanza la coccion de los ingredientes en las parrillas
pub const TICK_PERIOD_IN_MS: u64 = 5000;

/// Nivel maximo de corte de un ingrediente (0 entero, 1 cortado)
pub const MAX_CUT_LEVEL: u8 = 1;

/// Nivel maximo de coccion de un ingrediente (0 crudo, 1 cocido, 2 quemado)
pub const MAX_COOK_LEVEL: u8 = 2;

/// Archivo de configuracion de la cocina que se lee si no se indica otro
pub const DEFAULT_KITCHEN_PATH: &str = "kitchen.json";
