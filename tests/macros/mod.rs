use std::fmt;

use error_tree::{format_err, join, predicates, Error, Node};

#[test]
fn format_err_builds_a_message_and_records_the_call_site() {
    let shard = 3;
    let err = format_err!("shard {shard} offline after {} retries", 2);

    assert_eq!(err.to_string(), "shard 3 offline after 2 retries");
    assert_eq!(err.type_name(), "Base");
    assert!(err.stack_trace().is_some());
}

#[test]
fn join_macro_mixes_errors_and_options() {
    let missing: Option<Error> = None;
    let present = Some(Error::new("B"));

    let err = join!(Error::new("A"), missing, present).unwrap();
    assert_eq!(err.to_string(), "A; B");

    let none: Option<Error> = None;
    assert!(join!(none).is_none());
}

struct Code(u16);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.0)
    }
}

impl Node for Code {
    predicates! {
        Temporary => |code| code.0 >= 500,
        NotFound => |code| code.0 == 404,
        Client => |code| (400..500).contains(&code.0),
    }
}

#[test]
fn predicates_macro_declares_names_in_order() {
    let code = Code(404);

    assert_eq!(code.predicate_names(), ["Temporary", "NotFound", "Client"]);
    assert_eq!(code.predicate("NotFound"), Some(true));
    assert_eq!(code.predicate("Temporary"), Some(false));
    assert_eq!(code.predicate("Other"), None);
    assert_eq!(error_tree::types(&Error::from_node(code)), ["Client", "NotFound"]);
}
