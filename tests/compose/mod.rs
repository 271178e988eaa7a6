use std::sync::mpsc;
use std::thread;

use error_tree::{
    from_any, join, recv, tag, value_of, with_message, with_stack, with_stack_trace, with_tags,
    with_types, wrap, Error, StackTrace, Value,
};

#[test]
fn absent_in_absent_out() {
    assert!(join(Vec::<Option<Error>>::new()).is_none());
    assert!(join([None::<Error>, None]).is_none());
    assert!(with_message(None, "x").is_none());
    assert!(wrap(None, "x").is_none());
    assert!(with_stack(None).is_none());
    assert!(with_stack_trace(None, StackTrace::empty()).is_none());
    assert!(with_types(None, ["T"]).is_none());
    assert!(with_tags(None, [tag("k", "v")]).is_none());
    assert!(from_any(None).is_none());
}

#[test]
fn join_keeps_present_errors_in_order() {
    let err = join([None, Some(Error::new("A")), None, Some(Error::new("B"))]).unwrap();

    assert_eq!(err.type_name(), "Multi");
    assert_eq!(err.to_string(), "A; B");
}

#[test]
fn join_of_one_error_is_still_multi_cause() {
    let err = join([Error::new("only")]).unwrap();

    assert_eq!(err.causes().map(<[Error]>::len), Some(1));
    assert_eq!(format!("{err:#}"), ".\n└── only");
}

#[test]
fn optional_builders_match_the_methods() {
    let err = wrap(Some(Error::new("inner")), "outer").unwrap();
    assert_eq!(err.to_string(), "outer: inner");
    assert_eq!(err.cause().unwrap().type_name(), "WithStack");

    let err = with_message(Some(Error::new("inner")), "outer").unwrap();
    assert_eq!(err.type_name(), "WithMessage");

    let err = with_stack(Some(Error::todo())).unwrap();
    assert!(err.stack_trace().is_some());

    let err = with_types(Some(Error::todo()), ["Timeout"]).unwrap();
    assert!(error_tree::is("Timeout", &err));

    let err = with_tags(Some(Error::todo()), [tag("k", "v")]).unwrap();
    assert_eq!(error_tree::lookup_tag(&err, "k"), Some("v"));
}

#[test]
fn recv_joins_everything_sent_until_senders_are_gone() {
    let (tx, rx) = mpsc::channel::<Option<Error>>();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tx = tx.clone();
            thread::spawn(move || {
                let err = (i % 2 == 0).then(|| Error::new(format!("task {i}")));
                tx.send(err).unwrap();
            })
        })
        .collect();
    drop(tx);

    let err = recv(rx).unwrap();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut messages: Vec<_> = error_tree::causes(&err).iter().map(ToString::to_string).collect();
    messages.sort();
    assert_eq!(messages, ["task 0", "task 2"]);
}

#[test]
fn recv_of_only_absent_errors_is_absent() {
    let (tx, rx) = mpsc::channel::<Option<Error>>();
    tx.send(None).unwrap();
    drop(tx);

    assert!(recv(rx).is_none());
}

#[test]
fn recv_accepts_plain_errors() {
    let (tx, rx) = mpsc::channel::<Error>();
    tx.send(Error::new("A")).unwrap();
    drop(tx);

    assert_eq!(recv(rx).unwrap().to_string(), "A");
}

#[test]
fn from_any_reads_panic_payloads() {
    let payload = std::panic::catch_unwind(|| panic!("answer {}", 42)).unwrap_err();
    assert_eq!(from_any(Some(payload)).unwrap().to_string(), "answer 42");

    let payload = std::panic::catch_unwind(|| panic!("static")).unwrap_err();
    let err = from_any(Some(payload)).unwrap();
    assert_eq!(err.to_string(), "static");
    assert!(err.stack_trace().is_some());
}

#[test]
fn from_any_passes_errors_through() {
    let original = Error::new("original");
    let err = from_any(Some(Box::new(original.clone()))).unwrap();
    assert!(err.ptr_eq(&original));

    assert!(from_any(Some(Box::new(None::<Error>))).is_none());
}

#[test]
fn from_any_rebuilds_snapshots_and_boxed_errors() {
    let value = value_of(Some(&Error::new("remote").with_types(["Timeout"])));
    let err = from_any(Some(Box::new(value))).unwrap();
    assert_eq!(err.type_name(), "Value");
    assert!(error_tree::is("Timeout", &err));

    assert!(from_any(Some(Box::new(Value::default()))).is_none());

    let boxed: Box<dyn std::error::Error + Send + Sync> = "boxed failure".into();
    let err = from_any(Some(Box::new(boxed))).unwrap();
    assert_eq!(err.to_string(), "boxed failure");
}

#[test]
fn from_any_describes_unknown_payloads() {
    let err = from_any(Some(Box::new(42u32))).unwrap();

    assert_eq!(err.to_string(), "Any { .. }");
}
