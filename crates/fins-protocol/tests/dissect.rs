//! End-to-end dissection tests: known-good frames, malformed frames, and
//! property checks over arbitrary byte soup.

use fins_protocol::fields::{
    CONTROLLER_STATUS, CPU_MODES, DAYS_OF_WEEK, FAL_FALS_NUMBERS, MEMORY_AREAS, PARAMETER_AREAS,
    RESPONSE_CODES,
};
use fins_protocol::{
    AnnotationKind, Direction, Dissection, Dissector, DissectorConfig, FieldValue, FrameBuilder,
};

use proptest::prelude::*;

fn dissect(frame: &[u8]) -> Dissection {
    Dissector::new().dissect(frame).expect("frame not recognized")
}

fn value_of(d: &Dissection, label_prefix: &str) -> FieldValue {
    let id = d
        .tree
        .find_labeled(label_prefix)
        .unwrap_or_else(|| panic!("no node labeled `{label_prefix}` in:\n{}", d.tree.render()));
    d.tree
        .node(id)
        .value
        .clone()
        .unwrap_or_else(|| panic!("node `{label_prefix}` has no value"))
}

fn is_stop_annotation(kind: AnnotationKind) -> bool {
    matches!(
        kind,
        AnnotationKind::UnknownCommand
            | AnnotationKind::MalformedLength
            | AnnotationKind::UnknownAreaCode
            | AnnotationKind::Truncated
    )
}

#[test]
fn memory_area_read_command() {
    let frame = FrameBuilder::command(0x0101)
        .body(&[0x00, 0x00, 0x64, 0x00, 0x00, 0x0A])
        .build();
    let d = dissect(&frame);

    assert_eq!(d.header.unwrap().direction, Direction::Command);
    assert_eq!(d.command_name, Some("Memory Area Read"));
    assert_eq!(value_of(&d, "Memory area code:"), FieldValue::U8(0x00));
    assert_eq!(value_of(&d, "Beginning address:"), FieldValue::U16(0x0064));
    assert_eq!(
        value_of(&d, "Beginning address (bits):"),
        FieldValue::U8(0x00)
    );
    assert_eq!(value_of(&d, "Number of items:"), FieldValue::U16(10));
    assert_eq!(d.consumed, 18);
    assert!(d.tree.annotations().is_empty());
}

#[test]
fn stop_response_normal_completion() {
    let frame = FrameBuilder::response(0x0402).end_code(0x0000).build();
    let d = dissect(&frame);

    assert_eq!(d.header.unwrap().direction, Direction::Response);
    assert_eq!(d.command_name, Some("Stop"));
    assert_eq!(value_of(&d, "Response code:"), FieldValue::U16(0x0000));
    assert!(d
        .tree
        .find_labeled("Response code: Normal completion (0x0000)")
        .is_some());
    assert_eq!(d.consumed, 14);
    assert!(d.tree.annotations().is_empty());
}

#[test]
fn stop_command_with_body_is_malformed() {
    let frame = FrameBuilder::command(0x0402)
        .body(&[0x01, 0x02, 0x03, 0x04])
        .build();
    let d = dissect(&frame);

    let anns = d.tree.annotations();
    assert_eq!(anns.len(), 1, "no double report expected:\n{}", d.tree.render());
    assert_eq!(anns[0].kind, AnnotationKind::MalformedLength);
    assert_eq!(anns[0].message, "Unexpected Length (Should be 0)");
}

#[test]
fn unknown_command_keeps_header_only() {
    let frame = FrameBuilder::command(0xFFFF).body(&[0xDE, 0xAD]).build();
    let d = dissect(&frame);

    assert_eq!(d.command_name, None);
    let anns = d.tree.annotations();
    assert_eq!(anns.len(), 1);
    assert_eq!(anns[0].kind, AnnotationKind::UnknownCommand);
    assert_eq!(anns[0].message, "Unknown Command-Code");
    // Body is left unparsed: no command/response subtree at all
    assert!(d.tree.find_labeled("Command data").is_none());
    assert!(d.tree.find_labeled("Response data").is_none());
    assert_eq!(d.consumed, 12);
}

#[test]
fn short_buffer_is_not_recognized() {
    let ten_bytes = [0x80, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert!(Dissector::new().dissect(&ten_bytes).is_none());
}

#[test]
fn multiple_memory_area_read_response() {
    // One word-sized record: area 0x80, data 0x1234
    let frame = FrameBuilder::response(0x0104)
        .end_code(0x0000)
        .body(&[0x80, 0x12, 0x34])
        .build();
    let d = dissect(&frame);

    assert!(d.tree.annotations().is_empty(), "{}", d.tree.render());
    let record = d.tree.find_labeled("Memory area read data").unwrap();
    let children = &d.tree.node(record).children;
    assert_eq!(children.len(), 2);
    assert_eq!(
        d.tree.node(children[0]).value,
        Some(FieldValue::U8(0x80))
    );
    assert_eq!(
        d.tree.node(children[1]).value,
        Some(FieldValue::U16(0x1234))
    );
    assert_eq!(d.consumed, frame.len());
}

#[test]
fn unknown_memory_area_code_stops_the_record_loop() {
    let frame = FrameBuilder::response(0x0104)
        .end_code(0x0000)
        .body(&[0xEE, 0x12, 0x34])
        .build();
    let d = dissect(&frame);

    let anns = d.tree.annotations();
    assert_eq!(anns.len(), 1);
    assert_eq!(anns[0].kind, AnnotationKind::UnknownAreaCode);
    assert_eq!(anns[0].message, "Unknown Memory-Area-Code (0xEE)");
}

#[test]
fn controller_status_response_decomposes_bitmasks() {
    let mut body = Vec::new();
    body.extend_from_slice(&[0x00, 0x00]); // end code
    body.push(0x01); // status: run
    body.push(0x04); // mode: RUN
    body.extend_from_slice(&[0x82, 0x00]); // fatal: memory error + program error
    body.extend_from_slice(&[0x01, 0x00]); // non-fatal: battery error
    body.extend_from_slice(&[0x00, 0x01]); // message 0 present
    body.extend_from_slice(&[0x00, 0x32]); // FAL 0x32
    body.extend_from_slice(b"MEMORY ERR\0\0\0\0\0\0"); // 16-byte message
    let frame = FrameBuilder::response(0x0601).body(&body).build();
    let d = dissect(&frame);

    assert!(d.tree.annotations().is_empty(), "{}", d.tree.render());
    assert!(d.tree.find_labeled("Status: Run (0x01)").is_some());
    assert!(d.tree.find_labeled("Mode: RUN mode (0x04)").is_some());
    assert!(d.tree.find_labeled("Memory error: Present").is_some());
    assert!(d.tree.find_labeled("Program error: Present").is_some());
    assert!(d.tree.find_labeled("I/O bus error: Absent").is_some());
    assert!(d.tree.find_labeled("Battery error: Present").is_some());
    assert!(d.tree.find_labeled("Message 0: Message").is_some());
    assert!(d
        .tree
        .find_labeled("FAL/FALS number: FAL number (0x0032)")
        .is_some());
    assert!(d.tree.find_labeled("Error message: MEMORY ERR").is_some());
}

#[test]
fn run_command_accepts_both_layouts() {
    // Short form: program number only
    let d = dissect(&FrameBuilder::command(0x0401).body(&[0x00, 0x00]).build());
    assert!(d.tree.annotations().is_empty());

    // Full form: program number plus mode
    let d = dissect(
        &FrameBuilder::command(0x0401)
            .body(&[0x00, 0x00, 0x02])
            .build(),
    );
    assert!(d.tree.annotations().is_empty());
    assert!(d.tree.find_labeled("Mode: MONITOR mode (0x02)").is_some());

    // Neither length
    let d = dissect(
        &FrameBuilder::command(0x0401)
            .body(&[0x00, 0x00, 0x02, 0x03])
            .build(),
    );
    assert_eq!(
        d.tree.annotations()[0].kind,
        AnnotationKind::MalformedLength
    );
}

#[test]
fn error_log_response_parses_records_and_flags_leftover() {
    let mut body = Vec::new();
    body.extend_from_slice(&[0x00, 0x00]); // end code
    body.extend_from_slice(&[0x00, 0x40]); // max stored
    body.extend_from_slice(&[0x00, 0x02]); // stored
    body.extend_from_slice(&[0x00, 0x02]); // returned
    // Two 10-byte records
    body.extend_from_slice(&[0x80, 0xF0, 0x00, 0x00, 0x1E, 0x2D, 0x06, 0x0C, 0x19, 0x02]);
    body.extend_from_slice(&[0x80, 0xF1, 0x00, 0x01, 0x1F, 0x2E, 0x07, 0x0D, 0x19, 0x03]);
    // Three stray bytes, less than one record
    body.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
    let frame = FrameBuilder::response(0x2102).body(&body).build();
    let d = dissect(&frame);

    assert!(d.tree.find_labeled("Error log record 0").is_some());
    assert!(d.tree.find_labeled("Error log record 1").is_some());
    assert!(d.tree.find_labeled("Error log record 2").is_none());

    let anns = d.tree.annotations();
    assert_eq!(anns.len(), 1);
    assert_eq!(anns[0].kind, AnnotationKind::TrailingBytes);
    assert_eq!(anns[0].message, "Unexpected Length");
    assert_eq!(d.consumed, frame.len() - 3);
}

#[test]
fn legacy_mode_recovers_the_original_silence() {
    let config = DissectorConfig {
        legacy_silent_mismatch: true,
    };
    // Memory Area Read command with a short body: strict mode warns,
    // legacy mode parses nothing and says nothing
    let frame = FrameBuilder::command(0x0101).body(&[0x00, 0x00]).build();

    let strict = Dissector::new().dissect(&frame).unwrap();
    assert_eq!(
        strict.tree.annotations()[0].kind,
        AnnotationKind::MalformedLength
    );

    let legacy = Dissector::with_config(config).dissect(&frame).unwrap();
    assert!(legacy.tree.annotations().is_empty());
    assert_eq!(legacy.consumed, 12);
}

#[test]
fn reported_length_wins_over_captured_length() {
    // 18-byte frame captured, but only 14 bytes reported: the body no
    // longer matches the 6-byte command layout
    let frame = FrameBuilder::command(0x0101)
        .body(&[0x00, 0x00, 0x64, 0x00, 0x00, 0x0A])
        .build();
    let d = Dissector::new()
        .dissect_reported(&frame, 14)
        .expect("still recognized");

    assert_eq!(
        d.tree.annotations()[0].kind,
        AnnotationKind::MalformedLength
    );
    assert_eq!(d.consumed, 12);
}

#[test]
fn truncated_capture_is_annotated_not_fatal() {
    // Reported 18 bytes, capture kept 15: the length check passes but the
    // reads run out of captured bytes
    let frame = FrameBuilder::command(0x0101)
        .body(&[0x00, 0x00, 0x64, 0x00, 0x00, 0x0A])
        .build();
    let d = Dissector::new()
        .dissect_reported(&frame[..15], 18)
        .expect("still recognized");

    assert!(d
        .tree
        .annotations()
        .iter()
        .any(|a| a.kind == AnnotationKind::Truncated));
    assert!(d.consumed <= 15);
}

#[test]
fn response_to_broadcast_send_is_unexpected() {
    let frame = FrameBuilder::response(0x0803).end_code(0x0000).build();
    let d = dissect(&frame);
    assert_eq!(
        d.tree.annotations()[0].kind,
        AnnotationKind::MalformedLength
    );
}

#[cfg(feature = "serde")]
#[test]
fn dissection_serializes() {
    let frame = FrameBuilder::command(0x0402).build();
    let d = dissect(&frame);
    let json = serde_json::to_string(&d).unwrap();
    assert!(json.contains("Command code"));
}

proptest! {
    #[test]
    fn never_consumes_past_either_limit(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        reported in 0usize..96,
    ) {
        if let Some(d) = Dissector::new().dissect_reported(&data, reported) {
            prop_assert!(d.consumed <= reported.min(data.len()));
        }
    }

    #[test]
    fn short_buffers_always_decline(data in proptest::collection::vec(any::<u8>(), 0..12)) {
        prop_assert!(Dissector::new().dissect(&data).is_none());
    }

    #[test]
    fn marker_mismatch_always_declines(
        mut data in proptest::collection::vec(any::<u8>(), 12..40),
        marker in 1u8..,
    ) {
        data[1] = marker;
        prop_assert!(Dissector::new().dissect(&data).is_none());
    }

    #[test]
    fn trailing_annotation_tracks_leftover_bytes(
        code in any::<u16>(),
        body in proptest::collection::vec(any::<u8>(), 0..32),
        response in any::<bool>(),
    ) {
        let builder = if response {
            FrameBuilder::response(code)
        } else {
            FrameBuilder::command(code)
        };
        let frame = builder.body(&body).build();
        let d = Dissector::new().dissect(&frame).unwrap();

        let stopped = d.tree.annotations().iter().any(|a| is_stop_annotation(a.kind));
        let trailing = d
            .tree
            .annotations()
            .iter()
            .any(|a| a.kind == AnnotationKind::TrailingBytes);

        if stopped {
            // A stop already carries its cause; no double report
            prop_assert!(!trailing);
        } else {
            prop_assert_eq!(trailing, d.consumed != frame.len());
        }
    }

    #[test]
    fn lookups_are_total(value in any::<u32>()) {
        for table in [
            &RESPONSE_CODES,
            &MEMORY_AREAS,
            &PARAMETER_AREAS,
            &CPU_MODES,
            &CONTROLLER_STATUS,
            &DAYS_OF_WEEK,
        ] {
            prop_assert!(!table.label(value).is_empty());
        }
        prop_assert!(!FAL_FALS_NUMBERS.label(value).is_empty());
    }

    #[test]
    fn dissection_is_deterministic(
        data in proptest::collection::vec(any::<u8>(), 0..48),
        reported in 0usize..64,
    ) {
        let first = Dissector::new().dissect_reported(&data, reported);
        let second = Dissector::new().dissect_reported(&data, reported);
        prop_assert_eq!(first, second);
    }
}
