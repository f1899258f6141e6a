//! Hilo que hace avanzar la cocina cada `tick_period`.
use std::{
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use log::{debug, error};

use crate::{errors::KitchenError, kitchen::Kitchen};

/// Comparte la cocina con el input a traves del mismo mutex, asi un tick
/// nunca se intercala con una accion del jugador.
pub struct Ticker {
    kitchen: Arc<Mutex<Kitchen>>,
    period: Duration,
    finish: Arc<Mutex<bool>>,
}

impl Ticker {
    /// El periodo sale de la propia cocina, asi no hay dos valores que puedan diferir.
    pub fn new(kitchen: Arc<Mutex<Kitchen>>) -> Result<Ticker, KitchenError> {
        let period = kitchen.lock()?.tick_period();
        Ok(Ticker {
            kitchen,
            period,
            finish: Arc::new(Mutex::new(false)),
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn finish(&self) {
        if let Ok(mut finish) = self.finish.lock() {
            *finish = true;
            return;
        }
        error!("Error setting ticker thread to finish");
    }

    pub fn run(&self) -> Result<(), KitchenError> {
        loop {
            thread::sleep(self.period);
            if *self.finish.lock()? {
                return Ok(());
            }
            let mut kitchen = self.kitchen.lock()?;
            kitchen.advance();
            debug!("[TICKER] Tick {}", kitchen.ticks());
        }
    }
}
