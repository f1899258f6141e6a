use std::{
    env,
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use kitchen_sim::{
    constants::DEFAULT_KITCHEN_PATH, errors::KitchenError, kitchen_reader::read_kitchen,
    player::Command, ticker::Ticker,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_KITCHEN_PATH.to_string());
    if let Err(err) = run(&path) {
        error!("[MAIN] {}", err);
        std::process::exit(1);
    }
}

/// Carga la cocina, arranca el ticker y reproduce el script de comandos.
fn run(path: &str) -> Result<(), KitchenError> {
    let configuration = read_kitchen(path)?;
    let mut menu = configuration.menu();
    let kitchen = Arc::new(Mutex::new(configuration.build_kitchen()?));

    let ticker = Arc::new(Ticker::new(kitchen.clone())?);
    let ticker_clone = ticker.clone();
    let ticker_thread = thread::spawn(move || ticker_clone.run());

    for command in &configuration.script {
        if let Command::Wait(millis) = command {
            thread::sleep(Duration::from_millis(*millis));
            continue;
        }
        let mut kitchen = kitchen.lock()?;
        let delivered = kitchen.apply(*command).is_some();
        if delivered && kitchen.ledger().is_empty() {
            kitchen.new_order(&mut menu);
        }
    }

    ticker.finish();
    ticker_thread.join().map_err(|_| KitchenError::LockError)??;

    let kitchen = kitchen.lock()?;
    info!("[MAIN] Final kitchen:\n{}", kitchen.render_text());
    info!(
        "[MAIN] Served {} orders, register at {}",
        kitchen.served().len(),
        kitchen.register()
    );
    for order in kitchen.ledger().pending() {
        info!("[MAIN] Still pending: order {} {:?}", order.id, order.items);
    }
    Ok(())
}
