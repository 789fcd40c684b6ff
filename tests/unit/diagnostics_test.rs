//! Tests for diagnostic sinks

use parking_grid::core::{DiagnosticSink, InMemorySink, NullSink, TracingSink};

#[test]
fn test_in_memory_sink() {
    let mut sink = InMemorySink::new(10);
    sink.fragment("search ");
    sink.line("bh234: 0-0-2");
    sink.line("done");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "search bh234: 0-0-2");
    assert_eq!(lines[1], "done");
}

#[test]
fn test_in_memory_sink_overflow() {
    let mut sink = InMemorySink::new(2);
    sink.line("one");
    sink.line("two");
    sink.line("three");

    let lines = sink.lines();
    assert_eq!(lines, ["two", "three"]); // First one popped
}

#[test]
fn test_other_sinks_accept_output() {
    let mut sinks: Vec<Box<dyn DiagnosticSink>> = vec![Box::new(NullSink), Box::new(TracingSink::new())];
    for sink in &mut sinks {
        sink.fragment("a");
        sink.line("b");
    }
}
