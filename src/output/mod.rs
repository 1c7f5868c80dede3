//! Where composed lines go. The logger writes to any `io::Write`; this module adds the
//! sinks a caller or a config file typically asks for.

mod file;
mod memory;
mod target;

pub use file::open_file;
pub use memory::MemoryOutput;
pub use target::OutputTarget;

use std::io::Write;

/// Boxed destination owned by a [`Logger`](crate::Logger).
pub type Sink = Box<dyn Write + Send>;
