/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::io::{stdin, stdout, Write};

use cbl::{
    config::{parse_capacity, Config},
    log_debug, log_info,
    logger::new_shared_logger,
    CircularBufferError, RingBuffer, CAPACITY_PROMPT,
};

/* -------------------------------------------------------------------------- */
/*                                    Main                                    */
/* -------------------------------------------------------------------------- */
#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CircularBufferError> {
    // an optional path to a config file can be given as first argument
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let shared_logger = new_shared_logger(&config.log_file, "driver")?;
    log_info!(shared_logger, "Starting a new driver instance");
    log_info!(shared_logger, "Loading Config: {config:?}");

    let capacity = match config.buffer_capacity() {
        Some(capacity) => capacity,
        None => prompt_capacity()?,
    };
    let mut buffer = RingBuffer::new(capacity)?;
    log_info!(shared_logger, "Buffer created with a capacity of {capacity}");

    for (step, operation) in config.scenario().iter().enumerate() {
        println!("{}. {operation}:", step + 1);
        let report = operation.apply(&mut buffer, &config.separator);
        println!("{}", report.message);
        if operation.is_mutating() && !report.empty_notice {
            println!("Buffer: {}", buffer.render_with(&config.separator));
        }
        let _ = shared_logger.log_report(operation, &report).await;
        log_debug!(shared_logger, "Buffer: {}", buffer.render_with(&config.separator));
    }

    log_info!(shared_logger, "Scenario finished");
    Ok(())
}

/// ask the user for the capacity on the standard input
fn prompt_capacity() -> Result<usize, CircularBufferError> {
    print!("{CAPACITY_PROMPT}");
    stdout().flush()?;

    let mut user_input = String::new();
    if stdin().read_line(&mut user_input)? == 0 {
        return Err(CircularBufferError::Custom(
            "no capacity was given".to_owned(),
        ));
    }
    parse_capacity(&user_input)
}
