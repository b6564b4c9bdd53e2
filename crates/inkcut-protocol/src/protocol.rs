//! Device protocol interface and the HPGL implementation.
//!
//! Every instruction has the form:
//!
//! ```text
//! <mnemonic><params>;
//! ```
//!
//! - `mnemonic`: two uppercase ASCII characters (e.g. `PD`, `FS`).
//! - `params`: zero or more comma separated decimal integers.
//! - Terminator: `;` (0x3B).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::commands::DeviceCommand;
use crate::error::{ProtocolError, ProtocolResult};

/// Instruction terminator.
pub const TERMINATOR: char = ';';

/// Separator between numeric parameters of one instruction.
pub const PARAM_SEPARATOR: char = ',';

/// Two-letter HPGL instruction codes produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Initialize (`IN`).
    Initialize,
    /// Pen up move (`PU`).
    PenUp,
    /// Pen down move (`PD`).
    PenDown,
    /// Force select (`FS`).
    ForceSelect,
    /// Velocity select (`VS`).
    VelocitySelect,
    /// Select pen (`SP`).
    SelectPen,
}

impl Mnemonic {
    /// Get the mnemonic text used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mnemonic::Initialize => "IN",
            Mnemonic::PenUp => "PU",
            Mnemonic::PenDown => "PD",
            Mnemonic::ForceSelect => "FS",
            Mnemonic::VelocitySelect => "VS",
            Mnemonic::SelectPen => "SP",
        }
    }

    /// Mnemonic for a move with the given pen state.
    pub fn for_pen(pen_down: bool) -> Mnemonic {
        if pen_down {
            Mnemonic::PenDown
        } else {
            Mnemonic::PenUp
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode one instruction from its mnemonic and parameters.
///
/// Parameters are written as plain decimal integers joined by `,`, followed
/// by the terminator.
///
/// # Example
///
/// ```
/// use inkcut_protocol::{encode_instruction, Mnemonic};
///
/// assert_eq!(encode_instruction(Mnemonic::PenDown, &[100, -50]), "PD100,-50;");
/// assert_eq!(encode_instruction(Mnemonic::Initialize, &[]), "IN;");
/// ```
pub fn encode_instruction(mnemonic: Mnemonic, params: &[i32]) -> String {
    // Worst case per param: sign, 10 digits, separator.
    let mut out = String::with_capacity(3 + params.len() * 12);
    out.push_str(mnemonic.as_str());
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push(PARAM_SEPARATOR);
        }
        out.push_str(&param.to_string());
    }
    out.push(TERMINATOR);
    out
}

/// The operations a plotter/cutter protocol must be able to encode.
///
/// Implementations are stateless: the same inputs always give the same
/// output, so a protocol can be shared freely between threads.
pub trait DeviceProtocol: Send + Sync {
    /// Short protocol name (e.g. `"hpgl"`).
    fn name(&self) -> &'static str;

    /// Reset the device to its power-on state.
    fn encode_initialize(&self) -> String;

    /// Move to `(x, y)` with the tool engaged (`pen_down`) or lifted.
    fn encode_move(&self, x: i32, y: i32, pen_down: bool) -> String;

    /// Set the cutting/drawing force.
    fn encode_set_force(&self, force: i32) -> String;

    /// Set the tool velocity.
    fn encode_set_velocity(&self, velocity: i32) -> String;

    /// Select a pen/tool by index.
    fn encode_set_pen(&self, pen: i32) -> String;

    /// Encode any [`DeviceCommand`] by dispatching to the operation above.
    fn encode(&self, command: &DeviceCommand) -> String {
        match *command {
            DeviceCommand::Initialize => self.encode_initialize(),
            DeviceCommand::Move { x, y, pen_down } => self.encode_move(x, y, pen_down),
            DeviceCommand::SetForce { force } => self.encode_set_force(force),
            DeviceCommand::SetVelocity { velocity } => self.encode_set_velocity(velocity),
            DeviceCommand::SetPen { pen } => self.encode_set_pen(pen),
        }
    }
}

/// HPGL encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HpglProtocol;

impl DeviceProtocol for HpglProtocol {
    fn name(&self) -> &'static str {
        "hpgl"
    }

    fn encode_initialize(&self) -> String {
        encode_instruction(Mnemonic::Initialize, &[])
    }

    fn encode_move(&self, x: i32, y: i32, pen_down: bool) -> String {
        encode_instruction(Mnemonic::for_pen(pen_down), &[x, y])
    }

    fn encode_set_force(&self, force: i32) -> String {
        encode_instruction(Mnemonic::ForceSelect, &[force])
    }

    fn encode_set_velocity(&self, velocity: i32) -> String {
        encode_instruction(Mnemonic::VelocitySelect, &[velocity])
    }

    fn encode_set_pen(&self, pen: i32) -> String {
        encode_instruction(Mnemonic::SelectPen, &[pen])
    }
}

/// Available device protocols, chosen when the encoder is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolKind {
    /// Hewlett-Packard Graphics Language.
    #[default]
    Hpgl,
}

impl ProtocolKind {
    /// Get the protocol name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolKind::Hpgl => "hpgl",
        }
    }

    /// Construct the encoder for this protocol.
    pub fn build(&self) -> Box<dyn DeviceProtocol> {
        match self {
            ProtocolKind::Hpgl => Box::new(HpglProtocol),
        }
    }
}

impl FromStr for ProtocolKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> ProtocolResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hpgl" => Ok(ProtocolKind::Hpgl),
            _ => Err(ProtocolError::UnknownProtocol(s.to_string())),
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
