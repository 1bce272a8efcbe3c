/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use cbl::{CircularBufferError, Operation};

/* -------------------------------------------------------------------------- */
/*                                   Struct                                   */
/* -------------------------------------------------------------------------- */
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Operation(Operation),
    Exit,
    Help,
}

impl ShellCommand {
    pub fn from_input(user_input: &str) -> Result<ShellCommand, CircularBufferError> {
        let arguments: Vec<&str> = user_input.split_ascii_whitespace().collect();
        if let [command] = arguments.as_slice() {
            match command.to_ascii_lowercase().as_str() {
                "exit" | "quit" => return Ok(ShellCommand::Exit),
                "help" => return Ok(ShellCommand::Help),
                _ => {}
            }
        }
        Ok(ShellCommand::Operation(Operation::from_input(user_input)?))
    }

    pub fn help() {
        println!(
            "Circular Buffer Shell Commands:

    add <ITEM>          Add an item, overwriting the oldest one when full
    delete              Delete the oldest item
    find <ITEM>         Search an item
    first               Display the oldest item
    last                Display the newest item
    peek                Display the oldest and the newest item
    sum                 Add all items
    max                 Locate the largest item
    min                 Locate the smallest item
    extremes            Locate the largest and the smallest item
    clear               Clear the buffer
    empty               Check whether the buffer is empty
    show                Display the buffer from the oldest to the newest item
    exit                Exit the shell
    help                Show this help message"
        )
    }
}

/* -------------------------------------------------------------------------- */
/*                                    Test                                    */
/* -------------------------------------------------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_only_commands() {
        assert_eq!(ShellCommand::from_input("EXIT").unwrap(), ShellCommand::Exit);
        assert_eq!(ShellCommand::from_input(" help ").unwrap(), ShellCommand::Help);
    }

    #[test]
    fn operations_are_forwarded() {
        assert_eq!(
            ShellCommand::from_input("add 3").unwrap(),
            ShellCommand::Operation(Operation::Add(3))
        );
        assert!(ShellCommand::from_input("exit now").is_err());
    }
}
