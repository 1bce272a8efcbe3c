/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use cbl::{
    config::{parse_capacity, Config},
    log_error, log_info,
    logger::{new_shared_logger, SharedLogger},
    CircularBufferError, Operation, RingBuffer, CAPACITY_PROMPT,
};
use cli::{Cli, PROMPT};
use command::ShellCommand;

/* -------------------------------------------------------------------------- */
/*                                   Module                                   */
/* -------------------------------------------------------------------------- */
mod cli;
mod command;
mod history;

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
    let config = Config::load()?;
    let shared_logger = new_shared_logger(&config.log_file, "shell")?;
    log_info!(shared_logger, "Starting a new shell instance");
    log_info!(shared_logger, "Loading Config: {config:?}");

    let mut cli = Cli::new(config.history_size)?;
    let capacity = match config.buffer_capacity() {
        Some(capacity) => capacity,
        None => match ask_capacity(&mut cli, &shared_logger).await? {
            Some(capacity) => capacity,
            None => return Ok(()),
        },
    };
    let mut buffer = RingBuffer::new(capacity)?;
    log_info!(shared_logger, "Buffer created with a capacity of {capacity}");
    ShellCommand::help();

    while let Some(user_input) = cli.read_line(PROMPT)? {
        if user_input.trim().is_empty() {
            continue;
        }
        match ShellCommand::from_input(&user_input) {
            Ok(ShellCommand::Exit) => break,
            Ok(ShellCommand::Help) => ShellCommand::help(),
            Ok(ShellCommand::Operation(operation)) => {
                execute(&operation, &mut buffer, &config, &shared_logger).await
            }
            Err(error) => {
                eprintln!("{error}");
                log_error!(shared_logger, "`{user_input}`: {error}");
            }
        }
    }

    log_info!(
        shared_logger,
        "Shell closed with {} lines in history",
        cli.history_len()
    );
    Ok(())
}

/// keep asking until a valid capacity is typed, None if the input was closed
async fn ask_capacity(
    cli: &mut Cli,
    shared_logger: &SharedLogger,
) -> Result<Option<usize>, CircularBufferError> {
    while let Some(user_input) = cli.read_line(CAPACITY_PROMPT)? {
        match parse_capacity(&user_input) {
            Ok(capacity) => return Ok(Some(capacity)),
            Err(error) => {
                eprintln!("{error}");
                log_error!(shared_logger, "{error}");
            }
        }
    }
    Ok(None)
}

async fn execute(
    operation: &Operation,
    buffer: &mut RingBuffer<i64>,
    config: &Config,
    shared_logger: &SharedLogger,
) {
    let report = operation.apply(buffer, &config.separator);
    println!("{}", report.message);
    let _ = shared_logger.log_report(operation, &report).await;
}
