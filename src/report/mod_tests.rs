use super::*;

#[test]
fn filter_always_allows_info_and_error() {
    let filter = SeverityFilter::default();
    assert!(filter.allows(Severity::Info));
    assert!(filter.allows(Severity::Error));
    assert!(!filter.allows(Severity::Verbose));
    assert!(!filter.allows(Severity::Debug));
}

#[test]
fn filter_toggles_are_independent() {
    let verbose = SeverityFilter::new(true, false);
    assert!(verbose.allows(Severity::Verbose));
    assert!(!verbose.allows(Severity::Debug));

    let debug = SeverityFilter::new(false, true);
    assert!(!debug.allows(Severity::Verbose));
    assert!(debug.allows(Severity::Debug));
}

#[test]
fn reporter_fans_out_to_all_sinks() {
    let first = MemorySink::new();
    let second = MemorySink::new();
    let mut reporter = Reporter::new()
        .with_sink(SeverityFilter::default(), first.clone())
        .with_sink(SeverityFilter::default(), second.clone());

    reporter.info("hello").unwrap();
    reporter.error("oops").unwrap();

    assert_eq!(first.entries(), second.entries());
    assert_eq!(
        first.entries(),
        vec![
            (Severity::Info, "hello".to_string()),
            (Severity::Error, "oops".to_string())
        ]
    );
}

#[test]
fn each_sink_filters_independently() {
    let quiet = MemorySink::new();
    let chatty = MemorySink::new();
    let mut reporter = Reporter::new()
        .with_sink(SeverityFilter::default(), quiet.clone())
        .with_sink(SeverityFilter::new(true, true), chatty.clone());

    reporter.verbose("v").unwrap();
    reporter.debug("d").unwrap();
    reporter.info("i").unwrap();

    assert_eq!(quiet.messages(Severity::Info), vec!["i"]);
    assert!(quiet.messages(Severity::Verbose).is_empty());
    assert_eq!(chatty.entries().len(), 3);
}

#[test]
fn severity_labels() {
    assert_eq!(Severity::Debug.to_string(), "DEBUG");
    assert_eq!(Severity::Verbose.to_string(), "VERBOSE");
    assert_eq!(Severity::Info.to_string(), "INFO");
    assert_eq!(Severity::Error.to_string(), "ERROR");
}

#[test]
fn empty_reporter_accepts_messages() {
    let mut reporter = Reporter::new();
    assert!(reporter.error("nobody listens").is_ok());
}
