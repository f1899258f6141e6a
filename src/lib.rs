pub mod constants;
pub mod errors;
pub mod grid;
pub mod ingredient;
pub mod kitchen;
pub mod kitchen_reader;
pub mod order;
pub mod order_ledger;
pub mod player;
pub mod station;
pub mod tick_scheduler;
pub mod ticker;
