//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "tests"
//! clarity_type: "test"
//! clarity_scope: "code"
//! clarity_description: "End-to-end print calls against the bundled templates and in-memory entity logs."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::path::PathBuf;

use clarity_config::{
    ConfigIssue, ConfigSnapshot, EntityLog, Formatting, FunctionEntry, FunctionType,
    NodeDefinition, Settings,
};
use clarity_core::width::symbol_width;
use clarity_core::{
    Alert, Clarity, ClaritySources, MemorySink, MessageRegistry, PrintCall, RecordingAlertSink,
    Value,
};

fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn from_templates() -> (Clarity, MemorySink, RecordingAlertSink) {
    let snapshot = ConfigSnapshot::load_dir(templates_dir());
    assert!(snapshot.issues.is_empty(), "{:?}", snapshot.issues);
    let lines = MemorySink::new();
    let alerts = RecordingAlertSink::new();
    (
        Clarity::new(snapshot, lines.clone(), alerts.clone()),
        lines,
        alerts,
    )
}

#[test]
fn event_with_effect_renders_two_aligned_lines() {
    let (clarity, sink, alerts) = from_templates();
    let lines = clarity.print(35);
    assert_eq!(
        lines,
        [
            " ENTCC 🟪C 15     🔀.35  ✅ - An expected event occurred".to_owned(),
            format!("{}Effect:this should happen next", " ".repeat(30)),
        ]
    );
    assert_eq!(sink.lines(), lines);
    assert!(alerts.alerts().is_empty());
}

#[test]
fn value_report_lists_each_element_under_the_description() {
    let (clarity, _, _) = from_templates();
    let lines = clarity.print_value(5, vec![1, 2]);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], " ENTCC 🟪C 15     🔍.5   💬 - Value in myArray:");
    let readout = " ".repeat(30);
    assert_eq!(lines[1], format!("{readout}1"));
    assert_eq!(lines[2], format!("{readout}2"));

    let label = lines[0].find("Value in myArray").unwrap();
    assert_eq!(symbol_width(&lines[0][..label]), readout.len());
}

#[test]
fn error_report_uses_error_labels() {
    let (clarity, _, _) = from_templates();
    let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "unexpected end of input");
    let lines = clarity.print_error(6, &error);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - Error while decoding the payload:"));
    assert!(lines[0].contains("🚨"));
    assert!(lines[0].contains("💥"));
    assert_eq!(lines[1].trim_start(), "unexpected end of input");
}

#[test]
fn declared_function_call_point_renders_the_supplied_name() {
    let (clarity, _, _) = from_templates();
    let lines = clarity.print_function(34, "viewDidLoad");
    assert_eq!(lines, [" ENTCC 🟪C 15   .viewDidLoad"]);
}

#[test]
fn orphaned_print_number_alerts_once_per_call() {
    let (clarity, sink, alerts) = from_templates();
    assert!(clarity.print(999).is_empty());
    assert_eq!(
        alerts.alerts(),
        vec![Alert::OrphanedPrintNumber { print_number: 999 }]
    );
    clarity.print(999);
    assert_eq!(alerts.alerts().len(), 2);
    assert!(sink.lines().is_empty());
}

#[test]
fn orphan_alerts_follow_the_setting() {
    let alerts = RecordingAlertSink::new();
    let sources = ClaritySources::new(Settings::default(), Formatting::default(), Vec::new());
    let clarity = Clarity::new(sources, MemorySink::new(), alerts.clone());
    assert!(clarity.print(999).is_empty());
    assert!(alerts.alerts().is_empty());
}

#[test]
fn entity_codes_of_different_widths_share_columns() {
    let logs = vec![
        EntityLog::new("A").with_function(
            FunctionEntry::new(10, FunctionType::Action)
                .with_node(NodeDefinition::event(11, "narrow")),
        ),
        EntityLog::new("ENTCC🍎").with_function(
            FunctionEntry::new(20, FunctionType::Action)
                .with_node(NodeDefinition::event(21, "wide")),
        ),
    ];
    let clarity = Clarity::new(
        ClaritySources::new(Settings::default(), Formatting::default(), logs),
        MemorySink::new(),
        RecordingAlertSink::new(),
    );

    let narrow = clarity.print(11).remove(0);
    let wide = clarity.print(21).remove(0);
    for marker in ["10", " - "] {
        let narrow_at = narrow.find(marker).unwrap_or_else(|| panic!("{marker:?} in {narrow:?}"));
        let wide_marker = if marker == "10" { "20" } else { marker };
        let wide_at = wide.find(wide_marker).unwrap();
        assert_eq!(
            symbol_width(&narrow[..narrow_at]),
            symbol_width(&wide[..wide_at]),
            "{narrow:?} vs {wide:?}"
        );
    }
}

#[test]
fn suppress_all_silences_and_print_all_overrides_isolation() {
    let (clarity, _, _) = from_templates();
    let silent = Settings {
        suppress_all_clarity_logs: true,
        print_all_clarity_logs: true,
        ..Settings::default()
    };
    let value = Value::from(1);
    for print_number in [1, 2, 5, 34, 35, 36] {
        let call = PrintCall::new(print_number).with_settings(&silent);
        assert!(clarity.emit(&call).is_empty());
        assert!(clarity.emit(&call.with_value(&value)).is_empty());
    }

    let mut everything = Settings {
        print_all_clarity_logs: true,
        log_isolated_print_numbers_only: true,
        ..Settings::default()
    };
    everything.isolated_entities.insert("NOBODY".to_owned(), true);
    for print_number in [1, 2, 35, 36] {
        let call = PrintCall::new(print_number).with_settings(&everything);
        assert!(!clarity.emit(&call).is_empty(), "print {print_number}");
    }
}

#[test]
fn function_names_only_keeps_call_points() {
    let (clarity, _, _) = from_templates();
    let settings = Settings {
        log_function_names_only: true,
        ..Settings::default()
    };
    assert_eq!(
        clarity
            .emit(&PrintCall::new(1).with_function_name("init").with_settings(&settings))
            .len(),
        1
    );
    assert!(clarity.emit(&PrintCall::new(35).with_settings(&settings)).is_empty());
}

#[test]
fn duplicate_resolution_is_stable() {
    let logs = vec![
        EntityLog::new("AAA").with_function(
            FunctionEntry::new(1, FunctionType::Action)
                .with_node(NodeDefinition::event(7, "first in AAA"))
                .with_node(NodeDefinition::event(7, "second in AAA")),
        ),
        EntityLog::new("BBB").with_function(
            FunctionEntry::new(1, FunctionType::Action).with_node(NodeDefinition::event(7, "in BBB")),
        ),
    ];

    let first = MessageRegistry::build(&logs);
    let second = MessageRegistry::build(&logs);
    let winner = first.get(7).unwrap();
    assert_eq!(winner, second.get(7).unwrap());
    assert_eq!(winner.entity_code, "AAA");
    assert_eq!(winner.event_description, "second in AAA");

    let alerts = RecordingAlertSink::new();
    let clarity = Clarity::new(
        ClaritySources::new(
            Settings {
                alert_duplicate_print_numbers_detected: true,
                ..Settings::default()
            },
            Formatting::default(),
            logs,
        ),
        MemorySink::new(),
        alerts.clone(),
    );
    clarity.print(7);
    clarity.print(7);
    let recorded = alerts.alerts();
    assert_eq!(recorded.len(), 2);
    assert!(matches!(recorded[0], Alert::DuplicateWithinEntity { .. }));
    assert!(matches!(
        recorded[1],
        Alert::DuplicateAcrossEntities { print_number: 7, .. }
    ));
}

#[test]
fn missing_configuration_never_prints() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");
    let alerts = RecordingAlertSink::new();
    let sink = MemorySink::new();
    let clarity = Clarity::new(ConfigSnapshot::load_dir(&missing), sink.clone(), alerts.clone());

    assert!(clarity.print(35).is_empty());
    assert!(clarity.print_value(5, "x").is_empty());
    assert!(sink.lines().is_empty());
    assert_eq!(
        alerts.alerts(),
        vec![Alert::Configuration(ConfigIssue::DirectoryMissing { path: missing })]
    );
}
