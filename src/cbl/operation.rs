/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::CircularBufferError, ring_buffer::RingBuffer};

/* -------------------------------------------------------------------------- */
/*                                   Struct                                   */
/* -------------------------------------------------------------------------- */
/// one action a harness can perform on a buffer of integers,
/// read from the scenario of the config or typed in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add(i64),
    Delete,
    Find(i64),

    /// show the oldest item
    First,

    /// show the newest item
    Last,

    /// show both the oldest and the newest item
    Peek,
    Sum,
    Largest,
    Smallest,

    /// show both the largest and the smallest item
    Extremes,
    Clear,
    Empty,
    Show,
}

/// what happened when an operation was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// the line to display to the user
    pub message: String,

    /// the oldest item lost because an add was performed on a full buffer
    pub evicted: Option<i64>,

    /// set when a delete was attempted on an empty buffer
    pub empty_notice: bool,
}

/* -------------------------------------------------------------------------- */
/*                            Struct Implementation                           */
/* -------------------------------------------------------------------------- */
impl Operation {
    /// parse a line such as `add 15` or `delete`, the command is case insensitive
    pub fn from_input(user_input: &str) -> Result<Operation, CircularBufferError> {
        let arguments: Vec<&str> = user_input.split_ascii_whitespace().collect();
        let Some(command) = arguments.first() else {
            return Err(CircularBufferError::Custom(
                "your command contain nothing".to_owned(),
            ));
        };
        let command = command.to_ascii_lowercase();

        let operation = match (command.as_str(), arguments.len()) {
            ("add", 2) => Operation::Add(Self::parse_item(arguments[1])?),
            ("find" | "search", 2) => Operation::Find(Self::parse_item(arguments[1])?),
            ("delete", 1) => Operation::Delete,
            ("first", 1) => Operation::First,
            ("last", 1) => Operation::Last,
            ("peek", 1) => Operation::Peek,
            ("sum", 1) => Operation::Sum,
            ("max" | "largest", 1) => Operation::Largest,
            ("min" | "smallest", 1) => Operation::Smallest,
            ("extremes", 1) => Operation::Extremes,
            ("clear", 1) => Operation::Clear,
            ("empty", 1) => Operation::Empty,
            ("show" | "display", 1) => Operation::Show,
            (
                "add" | "find" | "search" | "delete" | "first" | "last" | "peek" | "sum" | "max"
                | "largest" | "min" | "smallest" | "extremes" | "clear" | "empty" | "show"
                | "display",
                _,
            ) => {
                return Err(CircularBufferError::Custom(format!(
                    "`{}` has a wrong number of arguments",
                    user_input.trim()
                )))
            }
            _ => return Err(CircularBufferError::Custom(format!("'{command}' Not found"))),
        };
        Ok(operation)
    }

    fn parse_item(argument: &str) -> Result<i64, CircularBufferError> {
        argument.parse::<i64>().map_err(|_| {
            CircularBufferError::Custom(format!("`{argument}` is not a valid integer"))
        })
    }

    /// true if the operation may change the content of the buffer
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Add(_) | Operation::Delete | Operation::Clear)
    }

    /// perform the operation on the buffer and describe the outcome
    pub fn apply(&self, buffer: &mut RingBuffer<i64>, separator: &str) -> Report {
        let mut evicted = None;
        let mut empty_notice = false;

        let message = match *self {
            Operation::Add(item) => {
                if buffer.is_full() {
                    evicted = buffer.peek_first().copied();
                }
                buffer.add(item);
                match evicted {
                    Some(old) => format!("{item} has been added, {old} was overwritten"),
                    None => format!("{item} has been added"),
                }
            }
            Operation::Delete => match buffer.try_delete() {
                Ok(item) => format!("{item} has been deleted"),
                Err(notice) => {
                    empty_notice = true;
                    notice.to_string()
                }
            },
            Operation::Find(item) => match buffer.find(&item) {
                true => format!("{item} is in the buffer"),
                false => format!("{item} is not in the buffer"),
            },
            Operation::First => Self::describe(buffer.peek_first(), "is the first item"),
            Operation::Last => Self::describe(buffer.peek_last(), "is the last item"),
            Operation::Peek => match (buffer.peek_first(), buffer.peek_last()) {
                (Some(first), Some(last)) => {
                    format!("{first} is the first item, and {last} is the last item")
                }
                _ => CircularBufferError::Empty.to_string(),
            },
            Operation::Sum => match buffer.checked_total() {
                Some(total) => format!("Sum = {total}"),
                None => "Sum does not fit in a 64 bit integer".to_owned(),
            },
            Operation::Largest => Self::describe_extreme("largest", buffer, buffer.largest()),
            Operation::Smallest => {
                Self::describe_extreme("smallest", buffer, buffer.smallest())
            }
            Operation::Extremes => match (buffer.largest(), buffer.smallest()) {
                (Some(largest), Some(smallest)) => format!(
                    "The largest item = {largest} and the smallest item = {smallest}"
                ),
                _ => CircularBufferError::Empty.to_string(),
            },
            Operation::Clear => {
                buffer.clear();
                "Buffer has been cleared".to_owned()
            }
            Operation::Empty => match buffer.is_empty() {
                true => CircularBufferError::Empty.to_string(),
                false => format!(
                    "Buffer holds {} of {} items",
                    buffer.len(),
                    buffer.capacity()
                ),
            },
            Operation::Show => buffer.render_with(separator),
        };

        Report {
            message,
            evicted,
            empty_notice,
        }
    }

    fn describe(item: Option<&i64>, what: &str) -> String {
        match item {
            Some(item) => format!("{item} {what}"),
            None => CircularBufferError::Empty.to_string(),
        }
    }

    /// the position is counted from the oldest item, ties report the oldest one
    fn describe_extreme(which: &str, buffer: &RingBuffer<i64>, item: Option<&i64>) -> String {
        match item.and_then(|item| Some((item, buffer.position_of(item)?))) {
            Some((item, position)) => {
                format!("The {which} item = {item}, at position {position}")
            }
            None => CircularBufferError::Empty.to_string(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(item) => write!(f, "Add {item}"),
            Operation::Delete => write!(f, "Delete operation"),
            Operation::Find(item) => write!(f, "Search {item}"),
            Operation::First => write!(f, "Display the first item"),
            Operation::Last => write!(f, "Display the last item"),
            Operation::Peek => write!(f, "Display items at first and last"),
            Operation::Sum => write!(f, "Add all items"),
            Operation::Largest => write!(f, "Locate the largest item"),
            Operation::Smallest => write!(f, "Locate the smallest item"),
            Operation::Extremes => write!(f, "Locate the largest/smallest item"),
            Operation::Clear => write!(f, "Clear the buffer"),
            Operation::Empty => write!(f, "Check if the buffer is empty"),
            Operation::Show => write!(f, "Display the buffer"),
        }
    }
}

/// the walkthrough replayed by the driver when no scenario is configured
pub fn default_scenario() -> Vec<Operation> {
    use Operation as O;
    vec![
        O::Delete,
        O::Add(15),
        O::Add(5),
        O::Delete,
        O::Add(3),
        O::Add(26),
        O::Delete,
        O::Add(76),
        O::Add(105),
        O::Find(48),
        O::Peek,
        O::Sum,
        O::Extremes,
        O::Clear,
    ]
}

/* -------------------------------------------------------------------------- */
/*                                    Test                                    */
/* -------------------------------------------------------------------------- */
