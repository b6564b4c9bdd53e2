//! Command jobs: YAML lists of device commands encoded into one stream.

use inkcut_protocol::{CommandBuffer, DeviceCommand, ProtocolKind};
use tracing::debug;

use crate::error::ExtensionResult;

/// Parse a YAML job.
pub fn parse_job(text: &str) -> ExtensionResult<Vec<DeviceCommand>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Encode a YAML job with `protocol` into a single instruction stream.
pub fn encode_job(text: &str, protocol: ProtocolKind) -> ExtensionResult<Vec<u8>> {
    let commands = parse_job(text)?;

    let mut buffer = CommandBuffer::new(protocol.build());
    buffer.extend(&commands);
    debug!(
        protocol = %protocol,
        instructions = buffer.instruction_count(),
        bytes = buffer.len(),
        "encoded job"
    );
    Ok(buffer.as_bytes().to_vec())
}
