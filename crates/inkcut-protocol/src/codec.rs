//! Buffer for building a stream of encoded instructions.
//!
//! Instructions are appended back to back; the terminator is the only
//! delimiter. The buffer holds no device state of its own: it does not check
//! that the device was initialized or remember which pen is selected.

use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::commands::DeviceCommand;
use crate::protocol::{DeviceProtocol, HpglProtocol};

/// Initial buffer capacity in bytes.
pub const INITIAL_CAPACITY: usize = 256;

/// Accumulates encoded instructions for one job.
///
/// The protocol is chosen when the buffer is created.
pub struct CommandBuffer {
    /// Protocol used to encode each command.
    protocol: Box<dyn DeviceProtocol>,
    /// Encoded output.
    buffer: BytesMut,
    /// Number of instructions in the buffer.
    count: usize,
}

impl CommandBuffer {
    /// Create an empty buffer encoding with `protocol`.
    pub fn new(protocol: Box<dyn DeviceProtocol>) -> Self {
        CommandBuffer {
            protocol,
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
            count: 0,
        }
    }

    /// Create an empty HPGL buffer.
    pub fn hpgl() -> Self {
        Self::new(Box::new(HpglProtocol))
    }

    /// Get the protocol this buffer encodes with.
    pub fn protocol(&self) -> &dyn DeviceProtocol {
        self.protocol.as_ref()
    }

    /// Encode and append a command.
    pub fn push(&mut self, command: &DeviceCommand) {
        let encoded = self.protocol.encode(command);
        log::trace!("{}: queued {}", self.protocol.name(), encoded);
        self.buffer.extend_from_slice(encoded.as_bytes());
        self.count += 1;
    }

    /// Encode and append every command from `commands`, in order.
    pub fn extend<'a, I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = &'a DeviceCommand>,
    {
        for command in commands {
            self.push(command);
        }
    }

    /// Append an initialize instruction.
    pub fn initialize(&mut self) {
        self.push(&DeviceCommand::Initialize);
    }

    /// Append a move instruction.
    pub fn move_to(&mut self, x: i32, y: i32, pen_down: bool) {
        self.push(&DeviceCommand::Move { x, y, pen_down });
    }

    /// Append a force instruction.
    pub fn set_force(&mut self, force: i32) {
        self.push(&DeviceCommand::SetForce { force });
    }

    /// Append a velocity instruction.
    pub fn set_velocity(&mut self, velocity: i32) {
        self.push(&DeviceCommand::SetVelocity { velocity });
    }

    /// Append a pen select instruction.
    pub fn set_pen(&mut self, pen: i32) {
        self.push(&DeviceCommand::SetPen { pen });
    }

    /// Number of instructions appended since the last clear/take.
    pub fn instruction_count(&self) -> usize {
        self.count
    }

    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Encoded bytes so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Encoded instructions as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII produced by the protocol is ever appended.
        std::str::from_utf8(&self.buffer).unwrap_or_default()
    }

    /// Take the encoded bytes, leaving the buffer empty.
    pub fn take(&mut self) -> Bytes {
        self.count = 0;
        self.buffer.split().freeze()
    }

    /// Discard everything encoded so far.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.count = 0;
    }
}

impl fmt::Debug for CommandBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBuffer")
            .field("protocol", &self.protocol.name())
            .field("count", &self.count)
            .field("buffer", &self.as_str())
            .finish()
    }
}
