use std::fmt;

use error_tree::testing::{check_adapter, AdapterCase};
use error_tree::{tag, Error};

#[derive(Debug)]
struct Reset;

impl fmt::Display for Reset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset")
    }
}

impl std::error::Error for Reset {}

fn reset_adapter(err: &Error) -> Option<Error> {
    err.downcast_ref::<Reset>()
        .map(|_| err.clone().with_tags([tag("layer", "net")]).with_types(["Temporary"]))
}

#[test]
fn a_conforming_adapter_has_no_mismatches() {
    let mismatches = check_adapter(
        &reset_adapter,
        [AdapterCase::new(Error::from(Reset)).types(["Temporary"]).tags([tag("layer", "net")])],
    );

    assert!(mismatches.is_empty(), "{mismatches:#?}");
}

#[test]
fn wrong_expectations_are_reported() {
    let mismatches = check_adapter(
        &reset_adapter,
        [AdapterCase::new(Error::from(Reset)).types(["Timeout"]).message("reset")],
    );

    assert!(mismatches.iter().any(|m| m.contains("was expected to be a \"Timeout\" error")));
    assert!(mismatches.iter().any(|m| m.contains("types mismatch")));
    assert!(mismatches.iter().any(|m| m.contains("tags mismatch")));
    assert!(mismatches.iter().any(|m| m.contains("message mismatch")));
}

#[test]
fn greedy_and_blind_adapters_are_reported() {
    let greedy = |err: &Error| Some(Error::new("replaced").with_message(err.to_string()));
    let mismatches = check_adapter(&greedy, [AdapterCase::new(Error::from(Reset))]);
    assert!(mismatches.iter().any(|m| m.contains("invalid cause")));
    assert!(mismatches.iter().any(|m| m.contains("must not be recognized")));

    let blind = |_: &Error| -> Option<Error> { None };
    let mismatches = check_adapter(&blind, [AdapterCase::new(Error::from(Reset))]);
    assert_eq!(mismatches.len(), 1);
    assert!(mismatches[0].contains("not recognized"));
}
