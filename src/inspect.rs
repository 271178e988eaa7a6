//! Introspection of error graphs.
//!
//! These functions look through an [`Error`] and everything it was built
//! from: the innermost cause, the next level of causes, the classifications
//! and the tags. All of them follow single-cause links first and multi-cause
//! links otherwise, in the order the causes were given.
//!
//! # Examples
//!
//! ```
//! use error_tree::{causes, join, tag, tags, Error, Tag};
//!
//! let a = Error::new("A").with_tags([tag("x", "1")]);
//! let b = Error::new("B");
//! let err = join([a.clone(), b.clone()]).unwrap().with_tags([tag("x", "2")]);
//!
//! assert_eq!(tags(&err), [Tag::new("x", "1"), Tag::new("x", "2")]);
//! assert_eq!(error_tree::lookup_tag(&err, "x"), Some("2"));
//! assert_eq!(causes(&err).len(), 2);
//! ```

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::types::{Error, StackTrace, Tag};

/// Depth-first, pre-order iterator over every node reachable from a root.
///
/// Created by [`walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    pending: Vec<&'a Error>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<&'a Error> {
        let err = self.pending.pop()?;
        if let Some(cause) = err.cause() {
            self.pending.push(cause);
        } else if let Some(causes) = err.causes() {
            self.pending.extend(causes.iter().rev());
        }
        Some(err)
    }
}

/// Visits `err` and every node reachable from it, outermost first.
pub fn walk(err: &Error) -> Walk<'_> {
    Walk { pending: vec![err] }
}

/// The innermost error reachable through single-cause links.
///
/// Returns `err` itself when it has no cause.
pub fn cause(err: &Error) -> &Error {
    let mut err = err;
    while let Some(next) = err.cause() {
        err = next;
    }
    err
}

/// The next level of causes of `err`.
///
/// Single-cause links are followed until a multi-cause node is found, whose
/// causes are returned. When the chain ends on a plain node, that node is the
/// only cause, unless it is `err` itself, which has no causes.
pub fn causes(err: &Error) -> Vec<Error> {
    let mut node = err;
    loop {
        if let Some(causes) = node.causes() {
            return causes.to_vec();
        }
        match node.cause() {
            Some(next) => node = next,
            None if node.ptr_eq(err) => return Vec::new(),
            None => return vec![node.clone()],
        }
    }
}

/// Whether `err`, or anything it was built from, is of type `kind`.
///
/// Each visited node answers `true` when `kind` is among its declared types.
/// Otherwise, if it has a predicate named `kind`, the predicate's answer is
/// final. Otherwise the search continues in its cause, or in any of its
/// causes.
pub fn is(kind: &str, err: &Error) -> bool {
    let mut err = err;
    loop {
        if err.own_types().iter().any(|t| t == kind) {
            return true;
        }
        if let Some(answer) = err.predicate(kind) {
            return answer;
        }
        if let Some(cause) = err.cause() {
            err = cause;
            continue;
        }
        return err.causes().is_some_and(|causes| causes.iter().any(|cause| is(kind, cause)));
    }
}

/// Every type of `err` and its causes: declared types plus the names of
/// predicates answering `true`. Sorted, without duplicates.
pub fn types(err: &Error) -> Vec<String> {
    let mut types = Vec::new();
    for node in walk(err) {
        append_types(&mut types, node);
    }
    dedupe_types(&mut types);
    types
}

/// Every tag of `err` and its causes, sorted by name then value.
///
/// Duplicates are kept; [`lookup_tag`] picks the outermost one.
pub fn tags(err: &Error) -> Vec<Tag> {
    let mut tags: Vec<Tag> = walk(err).flat_map(|node| node.own_tags().iter().cloned()).collect();
    tags.sort();
    tags
}

/// Value of the tag called `name` closest to the outside of the graph.
pub fn lookup_tag<'a>(err: &'a Error, name: &str) -> Option<&'a str> {
    walk(err).find_map(|node| {
        node.own_tags()
            .iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.value.as_str())
    })
}

fn append_types(types: &mut Vec<String>, err: &Error) {
    types.extend(err.own_types().iter().cloned());
    types.extend(
        err.predicate_names()
            .iter()
            .filter(|name| err.predicate(name) == Some(true))
            .map(|name| (*name).to_owned()),
    );
}

fn dedupe_types(types: &mut Vec<String>) {
    types.sort_unstable();
    types.dedup();
}

/// What one line of a tree shows: a chain of single-cause nodes collapsed,
/// stopping at the first multi-cause node.
pub(crate) struct Inspection<'a> {
    pub(crate) messages: SmallVec<[Cow<'a, str>; 4]>,
    pub(crate) types: Vec<String>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) stacks: SmallVec<[&'a StackTrace; 2]>,
    pub(crate) causes: &'a [Error],
}

impl Inspection<'_> {
    /// Own messages joined by `": "`.
    pub(crate) fn message(&self) -> String {
        self.messages.join(": ")
    }
}

pub(crate) fn inspect(err: &Error) -> Inspection<'_> {
    let mut inspection = Inspection {
        messages: SmallVec::new(),
        types: Vec::new(),
        tags: Vec::new(),
        stacks: SmallVec::new(),
        causes: &[],
    };

    let mut node = Some(err);
    while let Some(err) = node {
        append_types(&mut inspection.types, err);
        inspection.tags.extend_from_slice(err.own_tags());

        let message = err.message();
        if let Some(msg) = message.filter(|msg| !msg.is_empty()) {
            inspection.messages.push(Cow::Borrowed(msg));
        }
        if let Some(stack) = err.stack_trace() {
            inspection.stacks.push(stack);
        }

        node = if let Some(causes) = err.causes() {
            inspection.causes = causes;
            None
        } else if let Some(cause) = err.cause() {
            Some(cause)
        } else {
            if message.is_none() {
                let full = err.to_string();
                if !full.is_empty() {
                    inspection.messages.push(Cow::Owned(full));
                }
            }
            None
        };
    }

    dedupe_types(&mut inspection.types);
    inspection.tags.sort();
    inspection
}
