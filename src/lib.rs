//! Named flag sets backed by a single `u32` bitmask.
//!
//! ```
//! let (flags, set) = named_flags::use_flags(["READ", "WRITE", "DELETE"])?;
//! let mut container = set.container();
//!
//! container.add_flag(&flags["READ"])?;
//! assert!(container.has_flag("READ")?);
//! assert!(!container.has_flag("WRITE")?);
//! # Ok::<(), named_flags::Error>(())
//! ```

mod error;

pub mod bit_ops;
mod container;
mod flag_set;
pub mod validator;

pub use container::FlagsContainer;
pub use error::{Error, ErrorKind, Result};
pub use flag_set::{use_flags, FlagSet, Flags};
pub use validator::Value;

/// Most flags a single set can hold, one per bit of the backing integer.
pub const MAX_FLAGS: usize = u32::BITS as usize;
