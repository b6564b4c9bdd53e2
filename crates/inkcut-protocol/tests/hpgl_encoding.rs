//! Integration tests for the HPGL encoding contract.

use inkcut_protocol::{
    CommandBuffer, DeviceCommand, DeviceProtocol, HpglProtocol, ProtocolKind,
};
use std::sync::Arc;
use std::thread;

/// Sample of integers covering sign, zero, small, and extreme values.
const SAMPLES: &[i32] = &[
    0, 1, -1, 7, 10, -10, 99, 100, -50, 1016, 40_000, -40_000, i32::MIN, i32::MAX,
];

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_scenarios() {
    let hpgl = HpglProtocol;
    assert_eq!(hpgl.encode_initialize(), "IN;");
    assert_eq!(hpgl.encode_move(100, -50, true), "PD100,-50;");
    assert_eq!(hpgl.encode_move(0, 0, false), "PU0,0;");
    assert_eq!(hpgl.encode_set_force(30), "FS30;");
    assert_eq!(hpgl.encode_set_velocity(5), "VS5;");
    assert_eq!(hpgl.encode_set_pen(2), "SP2;");
}

// ============================================================================
// Format properties
// ============================================================================

#[test]
fn test_move_format() {
    let hpgl = HpglProtocol;
    for &x in SAMPLES {
        for &y in SAMPLES {
            assert_eq!(hpgl.encode_move(x, y, true), format!("PD{},{};", x, y));
            assert_eq!(hpgl.encode_move(x, y, false), format!("PU{},{};", x, y));
        }
    }
}

#[test]
fn test_single_parameter_format() {
    let hpgl = HpglProtocol;
    for &n in SAMPLES {
        assert_eq!(hpgl.encode_set_force(n), format!("FS{};", n));
        assert_eq!(hpgl.encode_set_velocity(n), format!("VS{};", n));
        assert_eq!(hpgl.encode_set_pen(n), format!("SP{};", n));
    }
}

#[test]
fn test_output_is_ascii_with_single_terminator() {
    let hpgl = HpglProtocol;
    for &n in SAMPLES {
        for encoded in [
            hpgl.encode_initialize(),
            hpgl.encode_move(n, n.wrapping_neg(), n % 2 == 0),
            hpgl.encode_set_force(n),
            hpgl.encode_set_velocity(n),
            hpgl.encode_set_pen(n),
        ] {
            assert!(encoded.is_ascii());
            assert_eq!(encoded.matches(';').count(), 1, "{}", encoded);
            assert!(encoded.ends_with(';'));
        }
    }
}

#[test]
fn test_idempotent() {
    let hpgl = HpglProtocol;
    assert_eq!(hpgl.encode_initialize(), hpgl.encode_initialize());
    for &n in SAMPLES {
        assert_eq!(hpgl.encode_move(n, n, true), hpgl.encode_move(n, n, true));
        assert_eq!(hpgl.encode_set_force(n), hpgl.encode_set_force(n));
        assert_eq!(hpgl.encode_set_velocity(n), hpgl.encode_set_velocity(n));
        assert_eq!(hpgl.encode_set_pen(n), hpgl.encode_set_pen(n));
    }
}

#[test]
fn test_previous_commands_do_not_affect_encoding() {
    let hpgl = HpglProtocol;
    let before = hpgl.encode_move(3, 4, false);
    let _ = hpgl.encode_set_pen(6);
    let _ = hpgl.encode_move(9, 9, true);
    assert_eq!(hpgl.encode_move(3, 4, false), before);
}

// ============================================================================
// Protocol selection and sharing
// ============================================================================

#[test]
fn test_protocol_selected_from_config_string() {
    let kind: ProtocolKind = "hpgl".parse().expect("hpgl should parse");
    let mut buffer = CommandBuffer::new(kind.build());
    buffer.initialize();
    buffer.move_to(100, -50, true);
    assert_eq!(buffer.as_str(), "IN;PD100,-50;");
}

#[test]
fn test_shared_across_threads() {
    let protocol: Arc<dyn DeviceProtocol> = Arc::new(HpglProtocol);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let protocol = Arc::clone(&protocol);
            thread::spawn(move || protocol.encode_move(i, -i, i % 2 == 0))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = i as i32;
        let expected = if i % 2 == 0 {
            format!("PD{},{};", i, -i)
        } else {
            format!("PU{},{};", i, -i)
        };
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}

// ============================================================================
// Job files
// ============================================================================

#[test]
fn test_yaml_job_encodes() {
    let yaml = r#"
- op: initialize
- op: set_pen
  pen: 2
- op: set_force
  force: 30
- op: set_velocity
  velocity: 5
- op: move
  x: 0
  y: 0
  pen_down: false
- op: move
  x: 100
  y: -50
  pen_down: true
"#;
    let job: Vec<DeviceCommand> = serde_yaml::from_str(yaml).expect("job should parse");

    let mut buffer = CommandBuffer::hpgl();
    buffer.extend(&job);
    assert_eq!(buffer.as_str(), "IN;SP2;FS30;VS5;PU0,0;PD100,-50;");
}

#[test]
fn test_yaml_job_rejects_fractional_parameters() {
    let yaml = "- op: move\n  x: 1.5\n  y: 0\n  pen_down: true\n";
    let result: Result<Vec<DeviceCommand>, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}
