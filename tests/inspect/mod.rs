use std::fmt;

use error_tree::{
    cause, causes, is, join, lookup_tag, predicates, tag, tags, types, walk, Error, Node, Tag,
};

/// Classifies whatever it wraps through predicates only.
struct Classified {
    cause: Error,
    temporary: bool,
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl Node for Classified {
    fn cause(&self) -> Option<&Error> {
        Some(&self.cause)
    }

    predicates! {
        Temporary => |node| node.temporary,
        Timeout => |_node| true,
    }
}

fn classified(cause: Error, temporary: bool) -> Error {
    Error::from_node(Classified { cause, temporary })
}

#[test]
fn cause_is_the_innermost_single_cause() {
    let root = Error::new("root");
    let err = root.clone().wrap("middle").with_message("outer");

    assert!(cause(&err).ptr_eq(&root));
    assert!(cause(&root).ptr_eq(&root));
}

#[test]
fn cause_stops_at_multi_cause_nodes() {
    let multi = join([Error::new("A"), Error::new("B")]).unwrap();
    let err = multi.clone().with_message("outer");

    assert!(cause(&err).ptr_eq(&multi));
}

#[test]
fn causes_of_a_leaf_are_empty() {
    assert!(causes(&Error::new("leaf")).is_empty());
    assert!(causes(&Error::todo()).is_empty());
}

#[test]
fn causes_of_a_chain_is_its_innermost_node() {
    let root = Error::new("root");
    let found = causes(&root.clone().wrap("outer"));

    assert_eq!(found.len(), 1);
    assert!(found[0].ptr_eq(&root));
}

#[test]
fn causes_of_a_join_are_its_children_in_order() {
    let a = Error::new("A");
    let b = Error::new("B");
    let err = join([Some(a.clone()), None, Some(b.clone())]).unwrap().wrap("outer");

    let found = causes(&err);
    assert_eq!(found.len(), 2);
    assert!(found[0].ptr_eq(&a));
    assert!(found[1].ptr_eq(&b));
}

#[test]
fn is_finds_types_anywhere_in_the_graph() {
    let err = join([Error::new("A"), Error::new("B").with_types(["Timeout"])])
        .unwrap()
        .wrap("outer");

    assert!(is("Timeout", &err));
    assert!(!is("Temporary", &err));
}

#[test]
fn declared_types_survive_wrapping() {
    let err = Error::new("x").with_types(["T"]).wrap("a").wrap("b");

    assert!(is("T", &err));
}

#[test]
fn predicates_answer_for_their_node() {
    let err = classified(Error::new("dial"), true);

    assert!(is("Temporary", &err));
    assert!(is("Timeout", &err));
    assert!(!is("NotFound", &err));
}

#[test]
fn a_predicate_answer_is_final() {
    let inner = Error::new("dial").with_types(["Temporary"]);
    let err = classified(inner, false);

    assert!(!is("Temporary", &err));
    assert!(is("Temporary", &err.with_types(["Temporary"])));
}

#[test]
fn types_are_sorted_and_deduplicated_across_the_graph() {
    let err = join([
        Error::new("A").with_types(["Timeout", "Temporary"]),
        classified(Error::new("B").with_types(["Timeout"]), false),
    ])
    .unwrap()
    .with_types(["Temporary"]);

    assert_eq!(types(&err), ["Temporary", "Timeout"]);
}

#[test]
fn types_include_true_predicates_only() {
    assert_eq!(types(&classified(Error::new("x"), false)), ["Timeout"]);
    assert_eq!(types(&classified(Error::new("x"), true)), ["Temporary", "Timeout"]);
}

#[test]
fn tags_are_sorted_and_keep_duplicates() {
    let err = join([
        Error::new("A").with_tags([tag("k", "2"), tag("a", "x")]),
        Error::new("B").with_tags([tag("k", "1")]),
    ])
    .unwrap()
    .with_tags([tag("k", "2")]);

    assert_eq!(
        tags(&err),
        [Tag::new("a", "x"), Tag::new("k", "1"), Tag::new("k", "2"), Tag::new("k", "2")]
    );
}

#[test]
fn lookup_tag_prefers_the_outermost_value() {
    let err = Error::new("x")
        .with_tags([tag("operation", "read")])
        .wrap("middle")
        .with_tags([tag("operation", "seek")]);

    assert_eq!(lookup_tag(&err, "operation"), Some("seek"));
    assert_eq!(lookup_tag(&err, "missing"), None);
}

#[test]
fn walk_visits_every_node_outermost_first() {
    let err = join([Error::new("A").with_message("a"), Error::new("B")])
        .unwrap()
        .with_message("outer");

    let names: Vec<_> = walk(&err).map(|node| node.type_name()).collect();
    assert_eq!(names, ["WithMessage", "Multi", "WithMessage", "Base", "Base"]);
}

#[test]
fn absent_errors_have_no_causes() {
    let err: Option<Error> = None;

    assert!(err.as_ref().map(causes).unwrap_or_default().is_empty());
    assert!(!err.as_ref().is_some_and(|err| is("Timeout", err)));
}
