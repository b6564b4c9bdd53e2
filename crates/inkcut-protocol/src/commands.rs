//! Device commands and conversion of caller values into command parameters.
//!
//! A [`DeviceCommand`] is built right before it is encoded and thrown away
//! afterwards. Integer parameters are passed through unchecked; the device
//! enforces its own physical limits.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, ProtocolResult};
use crate::protocol::{DeviceProtocol, HpglProtocol, Mnemonic};

/// An abstract operation for a plotter or cutter.
///
/// In YAML/JSON job files commands are tagged by `op`:
///
/// ```yaml
/// - op: initialize
/// - op: move
///   x: 100
///   y: -50
///   pen_down: true
/// - op: set_force
///   force: 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DeviceCommand {
    /// Reset the device.
    Initialize,

    /// Move to an absolute position.
    Move {
        /// X coordinate in device units.
        x: i32,
        /// Y coordinate in device units.
        y: i32,
        /// `true` to cut/draw along the way, `false` to travel.
        pen_down: bool,
    },

    /// Set the cutting force.
    SetForce {
        /// Force value.
        force: i32,
    },

    /// Set the tool velocity.
    SetVelocity {
        /// Velocity value.
        velocity: i32,
    },

    /// Select a pen/tool.
    SetPen {
        /// Pen index.
        pen: i32,
    },
}

impl DeviceCommand {
    /// Encode the command as HPGL.
    pub fn encode(&self) -> String {
        HpglProtocol.encode(self)
    }

    /// Get the HPGL mnemonic this command is sent as.
    pub fn mnemonic(&self) -> Mnemonic {
        match self {
            DeviceCommand::Initialize => Mnemonic::Initialize,
            DeviceCommand::Move { pen_down, .. } => Mnemonic::for_pen(*pen_down),
            DeviceCommand::SetForce { .. } => Mnemonic::ForceSelect,
            DeviceCommand::SetVelocity { .. } => Mnemonic::VelocitySelect,
            DeviceCommand::SetPen { .. } => Mnemonic::SelectPen,
        }
    }

    /// Build a move from floating point coordinates.
    ///
    /// Fails rather than rounding when a coordinate is not a whole number.
    pub fn checked_move(x: f64, y: f64, pen_down: bool) -> ProtocolResult<DeviceCommand> {
        Ok(DeviceCommand::Move {
            x: to_device_int("x", x)?,
            y: to_device_int("y", y)?,
            pen_down,
        })
    }

    /// Build a force command from a floating point value.
    pub fn checked_set_force(force: f64) -> ProtocolResult<DeviceCommand> {
        Ok(DeviceCommand::SetForce {
            force: to_device_int("force", force)?,
        })
    }

    /// Build a velocity command from a floating point value.
    pub fn checked_set_velocity(velocity: f64) -> ProtocolResult<DeviceCommand> {
        Ok(DeviceCommand::SetVelocity {
            velocity: to_device_int("velocity", velocity)?,
        })
    }

    /// Build a pen select command from a floating point value.
    pub fn checked_set_pen(pen: f64) -> ProtocolResult<DeviceCommand> {
        Ok(DeviceCommand::SetPen {
            pen: to_device_int("pen", pen)?,
        })
    }
}

/// Convert a floating point value into an integer command parameter.
///
/// `name` is only used in the error. Values must be finite, whole, and fit
/// in an `i32`; nothing is truncated or rounded.
pub fn to_device_int(name: &'static str, value: f64) -> ProtocolResult<i32> {
    if !value.is_finite() {
        return Err(ProtocolError::NonFinite { name, value });
    }
    if value.fract() != 0.0 {
        return Err(ProtocolError::NonInteger { name, value });
    }
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(ProtocolError::OutOfRange {
            name,
            value,
            min: i32::MIN,
            max: i32::MAX,
        });
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_commands() {
        assert_eq!(DeviceCommand::Initialize.encode(), "IN;");
        assert_eq!(
            DeviceCommand::Move { x: 100, y: -50, pen_down: true }.encode(),
            "PD100,-50;"
        );
        assert_eq!(
            DeviceCommand::Move { x: 0, y: 0, pen_down: false }.encode(),
            "PU0,0;"
        );
        assert_eq!(DeviceCommand::SetForce { force: 30 }.encode(), "FS30;");
        assert_eq!(DeviceCommand::SetVelocity { velocity: 5 }.encode(), "VS5;");
        assert_eq!(DeviceCommand::SetPen { pen: 2 }.encode(), "SP2;");
    }

    #[test]
    fn test_encoding_starts_with_mnemonic() {
        let commands = [
            DeviceCommand::Initialize,
            DeviceCommand::Move { x: 1, y: 2, pen_down: true },
            DeviceCommand::Move { x: 1, y: 2, pen_down: false },
            DeviceCommand::SetForce { force: 80 },
            DeviceCommand::SetVelocity { velocity: 10 },
            DeviceCommand::SetPen { pen: 1 },
        ];
        for cmd in commands {
            assert!(cmd.encode().starts_with(cmd.mnemonic().as_str()));
            assert!(cmd.encode().ends_with(';'));
        }
    }

    #[test]
    fn test_checked_move_accepts_whole_numbers() {
        assert_eq!(
            DeviceCommand::checked_move(100.0, -50.0, true),
            Ok(DeviceCommand::Move { x: 100, y: -50, pen_down: true })
        );
    }

    #[test]
    fn test_checked_move_rejects_fraction() {
        assert_eq!(
            DeviceCommand::checked_move(1.5, 0.0, false),
            Err(ProtocolError::NonInteger { name: "x", value: 1.5 })
        );
    }

    #[test]
    fn test_checked_rejects_non_finite() {
        assert!(matches!(
            DeviceCommand::checked_set_force(f64::NAN),
            Err(ProtocolError::NonFinite { name: "force", .. })
        ));
        assert!(matches!(
            DeviceCommand::checked_set_velocity(f64::INFINITY),
            Err(ProtocolError::NonFinite { name: "velocity", .. })
        ));
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(matches!(
            DeviceCommand::checked_set_pen(4_294_967_296.0),
            Err(ProtocolError::OutOfRange { name: "pen", .. })
        ));
        assert_eq!(to_device_int("y", i32::MIN as f64), Ok(i32::MIN));
        assert_eq!(to_device_int("y", i32::MAX as f64), Ok(i32::MAX));
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(to_device_int("x", -0.0), Ok(0));
    }
}
