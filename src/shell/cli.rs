use crate::history::History;
use cbl::CircularBufferError;
use libc::{tcgetattr, tcsetattr, termios, ECHO, ICANON, TCSANOW};
use std::io::{self, ErrorKind, Read, Write};
use std::os::unix::io::AsRawFd;

const ESCAPE_KEY: u8 = 0x1B;
const BACKSPACE: u8 = 0x7F;
const END_OF_TRANSMISSION: u8 = 0x04;
const CLEAR_LINE: &str = "\x1B[2K";
const CLEAR_CHAR: &str = "\x1B[1D \x1B[1D";
const RESET_CURSOR: &str = "\x1B[0G";
const ARROW_UP: [u8; 3] = [ESCAPE_KEY, b'[', b'A'];
const ARROW_DOWN: [u8; 3] = [ESCAPE_KEY, b'[', b'B'];
pub const PROMPT: &str = "> ";

pub struct Cli {
    line: String,
    prompt: &'static str,
    history: History,
}

impl Cli {
    pub fn new(history_size: usize) -> Result<Self, CircularBufferError> {
        Ok(Self {
            line: String::new(),
            prompt: PROMPT,
            history: History::new(history_size)?,
        })
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// read a line key by key, None is returned once the input is closed
    pub fn read_line(
        &mut self,
        prompt: &'static str,
    ) -> Result<Option<String>, CircularBufferError> {
        self.prompt = prompt;
        let origin_termios = Self::enable_raw_mode();
        let result = self.read_keys();
        if let Some(origin_termios) = origin_termios {
            Self::disable_raw_mode(origin_termios);
        }
        println!();

        let line = std::mem::take(&mut self.line);
        match result? {
            true => {
                self.history.commit(line.clone());
                Ok(Some(line))
            }
            false => {
                self.history.restore();
                Ok(None)
            }
        }
    }

    /// return false if the input was closed before a newline
    fn read_keys(&mut self) -> Result<bool, CircularBufferError> {
        self.display_prompt()?;
        self.history.restore();
        loop {
            let input = match Self::getch() {
                Ok(input) => input,
                Err(CircularBufferError::IoError(error))
                    if error.kind() == ErrorKind::UnexpectedEof =>
                {
                    return Ok(false)
                }
                Err(error) => return Err(error),
            };
            match input.as_slice() {
                [b'\n'] => return Ok(true),
                [END_OF_TRANSMISSION] if self.line.is_empty() => return Ok(false),
                _ => self.handle_input(&input)?,
            }
        }
    }

    /// Enable raw mode to read single keypresses without waiting for Enter,
    /// nothing is changed when the input is not a terminal
    fn enable_raw_mode() -> Option<termios> {
        let fd = io::stdin().as_raw_fd();
        let mut termios = unsafe {
            let mut termios = std::mem::zeroed();
            if tcgetattr(fd, &mut termios) != 0 {
                return None;
            }
            termios
        };

        let orig_termios = termios;
        // Disable canonical mode and echo
        termios.c_lflag &= !(ICANON | ECHO);
        // Apply changes immediately
        unsafe { tcsetattr(fd, TCSANOW, &termios) };

        Some(orig_termios)
    }

    /// Restore the terminal to its original settings
    fn disable_raw_mode(orig_termios: termios) {
        let fd = io::stdin().as_raw_fd();
        unsafe {
            tcsetattr(fd, TCSANOW, &orig_termios);
        }
    }

    /// Function to read a single keypress, including escape sequences
    fn getch() -> Result<Vec<u8>, CircularBufferError> {
        let stdin = io::stdin();
        let mut buffer = vec![0; 3];
        stdin.lock().read_exact(&mut buffer[..1])?;

        if buffer[0] == ESCAPE_KEY {
            stdin.lock().read_exact(&mut buffer[1..3])?;
        } else {
            buffer.truncate(1);
        }
        Ok(buffer)
    }

    fn handle_input(&mut self, input: &[u8]) -> Result<(), CircularBufferError> {
        if input.len() == 1 {
            self.handle_character_input(input[0])?;
        } else {
            self.handle_sequence_key(input)?;
        }
        Ok(())
    }

    fn handle_character_input(&mut self, ch: u8) -> Result<(), CircularBufferError> {
        if ch.is_ascii_graphic() || ch == b' ' {
            print!("{}", ch as char);
            self.line.push(ch as char);
        } else if ch == BACKSPACE && !self.line.is_empty() {
            self.line.pop();
            print!("{CLEAR_CHAR}");
        }
        if self.history.is_last_line() {
            self.history.set_draft(self.line.clone());
        }
        io::stdout().flush()?;
        Ok(())
    }

    fn handle_sequence_key(&mut self, input: &[u8]) -> Result<(), CircularBufferError> {
        if let Ok(sequence) = <[u8; 3]>::try_from(input) {
            let moved = match sequence {
                ARROW_UP => self.history.backward().is_ok(),
                ARROW_DOWN => self.history.forward().is_ok(),
                _ => false,
            };
            if moved {
                self.line = self.history.get_current_line();
                self.refresh_prompt()?;
            }
        }
        Ok(())
    }

    fn refresh_prompt(&self) -> Result<(), CircularBufferError> {
        print!("{}", CLEAR_LINE);
        print!("{}", RESET_CURSOR);
        print!("{}", self.prompt);
        print!("{}", self.line);
        io::stdout().flush()?;
        Ok(())
    }

    fn display_prompt(&self) -> Result<(), CircularBufferError> {
        print!("{}", self.prompt);
        io::stdout().flush()?;
        Ok(())
    }
}
