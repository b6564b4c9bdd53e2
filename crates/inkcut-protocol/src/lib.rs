//! Inkcut Device Protocols
//!
//! This crate turns abstract plotter/cutter operations into the ASCII
//! instructions understood by the device. The only protocol implemented is
//! HPGL (Hewlett-Packard Graphics Language).
//!
//! # Protocol Overview
//!
//! HPGL instructions are a two-letter mnemonic, optional comma separated
//! decimal parameters, and a `;` terminator. Instructions are concatenated
//! back to back with no other separator:
//!
//! - `IN;` - initialize the device
//! - `PU<x>,<y>;` - move with the pen up (transit)
//! - `PD<x>,<y>;` - move with the pen down (cut/draw)
//! - `FS<f>;` - set the cutting force
//! - `VS<v>;` - set the velocity
//! - `SP<p>;` - select a pen
//!
//! Encoding is pure and stateless. Ordering (initializing before moving,
//! tracking the current pen) is up to the caller, and nothing here performs
//! I/O: the encoded bytes are handed to whatever transport the caller owns.
//!
//! # Example
//!
//! ```rust
//! use inkcut_protocol::{CommandBuffer, DeviceCommand, DeviceProtocol, HpglProtocol};
//!
//! let hpgl = HpglProtocol;
//! assert_eq!(hpgl.encode_move(100, -50, true), "PD100,-50;");
//!
//! let mut buffer = CommandBuffer::new(Box::new(hpgl));
//! buffer.initialize();
//! buffer.push(&DeviceCommand::Move { x: 0, y: 0, pen_down: false });
//! assert_eq!(buffer.as_str(), "IN;PU0,0;");
//! ```

mod codec;
mod commands;
mod error;
mod protocol;

pub use codec::*;
pub use commands::*;
pub use error::*;
pub use protocol::*;
