//! Seam traits between the synchronizers, the line hardware, and
//! the byte-level protocol engine
//!
//! These traits define the interface between the synchronization
//! logic and its two collaborators: the physical line (implemented
//! by the driver crate) and the transport/framing engine that owns
//! everything above the bit level.

pub mod line;
pub mod transport;

pub use line::{LineLevel, LineReader, LineWriter};
pub use transport::Transport;
