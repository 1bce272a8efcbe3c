use cbl::{CircularBufferError, RingBuffer};
use std::error::Error;
use std::fmt;

/// lines previously typed in the shell, once full the oldest line is forgotten
pub struct History {
    entries: RingBuffer<String>,

    /// logical position being browsed, entries.len() is the line being typed
    cursor: usize,

    /// the line being typed, kept aside while browsing older lines
    draft: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum HistoryError {
    Overflow,
    Underflow,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Overflow => write!(f, "forward overflow, not enough history"),
            HistoryError::Underflow => write!(f, "backward underflow, not enough history"),
        }
    }
}

impl Error for HistoryError {}

impl History {
    pub fn new(size: usize) -> Result<Self, CircularBufferError> {
        Ok(Self {
            entries: RingBuffer::new(size)?,
            cursor: 0,
            draft: String::new(),
        })
    }

    pub fn get_current_line(&self) -> String {
        self.entries
            .get(self.cursor)
            .cloned()
            .unwrap_or_else(|| self.draft.clone())
    }

    pub fn forward(&mut self) -> Result<(), HistoryError> {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
            Ok(())
        } else {
            Err(HistoryError::Overflow)
        }
    }

    pub fn backward(&mut self) -> Result<(), HistoryError> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Ok(())
        } else {
            Err(HistoryError::Underflow)
        }
    }

    pub fn is_last_line(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn set_draft(&mut self, line: String) {
        self.draft = line;
    }

    /// remember a validated line, empty lines are not kept
    pub fn commit(&mut self, line: String) {
        if !line.is_empty() {
            self.entries.add(line);
        }
        self.restore();
    }

    /// go back to an empty line being typed
    pub fn restore(&mut self) {
        self.cursor = self.entries.len();
        self.draft.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_back_and_forth() {
        let mut history = History::new(4).unwrap();
        history.commit("add 1".to_owned());
        history.commit("add 2".to_owned());
        history.set_draft("fin".to_owned());

        assert!(history.is_last_line());
        assert_eq!(history.backward(), Ok(()));
        assert_eq!(history.get_current_line(), "add 2");
        assert_eq!(history.backward(), Ok(()));
        assert_eq!(history.get_current_line(), "add 1");
        assert_eq!(history.backward(), Err(HistoryError::Underflow));
        assert_eq!(history.forward(), Ok(()));
        assert_eq!(history.forward(), Ok(()));
        assert_eq!(history.get_current_line(), "fin");
        assert_eq!(history.forward(), Err(HistoryError::Overflow));
    }

    #[test]
    fn oldest_lines_are_forgotten() {
        let mut history = History::new(2).unwrap();
        for line in ["add 1", "add 2", "add 3"] {
            history.commit(line.to_owned());
        }
        assert_eq!(history.len(), 2);
        history.backward().unwrap();
        history.backward().unwrap();
        assert_eq!(history.get_current_line(), "add 2");
        assert!(history.backward().is_err());
    }

    #[test]
    fn empty_lines_are_not_kept() {
        let mut history = History::new(2).unwrap();
        history.commit(String::new());
        assert_eq!(history.len(), 0);
        assert!(history.is_last_line());
        assert_eq!(history.get_current_line(), "");
    }
}
