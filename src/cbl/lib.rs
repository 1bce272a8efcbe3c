/* -------------------------------------------------------------------------- */
/*                                   Module                                   */
/* -------------------------------------------------------------------------- */
pub mod aggregate;
pub mod config;
pub mod error;
pub mod logger;
pub mod operation;
pub mod ring_buffer;

/* -------------------------------------------------------------------------- */
/*                                   Export                                   */
/* -------------------------------------------------------------------------- */
pub use error::CircularBufferError;
pub use operation::{Operation, Report};
pub use ring_buffer::RingBuffer;

/* -------------------------------------------------------------------------- */
/*                                  Constant                                  */
/* -------------------------------------------------------------------------- */
pub const CAPACITY_PROMPT: &str = "Enter Buffer Capacity: ";
