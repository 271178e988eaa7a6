use std::fmt;

use error_tree::{causes, join, predicates, types, Error, Node, StackTrace, Tag, Value};

/// Custom aggregate with its own message.
struct Batch {
    msg: String,
    failures: Vec<Error>,
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} failures)", self.msg, self.failures.len())
    }
}

impl Node for Batch {
    fn causes(&self) -> Option<&[Error]> {
        Some(self.failures.as_slice())
    }

    fn message(&self) -> Option<&str> {
        Some(self.msg.as_str())
    }
}

/// Leaf without an own message, carrying types, tags and a stack.
struct Status {
    code: u16,
    types: Vec<String>,
    tags: Vec<Tag>,
    stack: StackTrace,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.code)
    }
}

impl Node for Status {
    fn types(&self) -> &[String] {
        &self.types
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn stack_trace(&self) -> Option<&StackTrace> {
        Some(&self.stack)
    }

    predicates! {
        Temporary => |status| status.code == 503,
    }
}

fn status(code: u16) -> Error {
    Error::from_node(Status {
        code,
        types: vec!["Http".into()],
        tags: vec![Tag::new("code", code.to_string())],
        stack: StackTrace::empty(),
    })
}

#[test]
fn custom_multi_cause_nodes_render_as_branches() {
    let err = Error::from_node(Batch {
        msg: "sync".into(),
        failures: vec![status(503), status(404)],
    });

    assert_eq!(err.to_string(), "sync (2 failures)");
    assert_eq!(causes(&err).len(), 2);
    assert_eq!(
        format!("{err:#}"),
        "sync\n├── HTTP 503 (Http Temporary) [code:\"503\"]\n└── HTTP 404 (Http) [code:\"404\"]"
    );
}

#[test]
fn nodes_without_an_own_message_use_their_display() {
    let value = Value::of(&status(404));

    assert_eq!(value.message, "HTTP 404");
    assert_eq!(value.types, ["Http"]);
}

#[test]
fn predicates_and_declared_types_combine() {
    let err = join([status(503), status(404)]).unwrap();

    assert_eq!(types(&err), ["Http", "Temporary"]);
    assert!(error_tree::is("Temporary", &err));
    assert_eq!(err.causes().unwrap()[1].predicate("Temporary"), Some(false));
    assert_eq!(err.causes().unwrap()[1].predicate("Missing"), None);
}

#[test]
fn structure_dump_uses_the_node_type_name() {
    let dump = format!("{:?}", status(404));

    assert!(dump.ends_with(r#"Status { msg: "" }"#), "{dump}");
}
