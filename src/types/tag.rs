//! Key/value annotations attached to errors.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `name`/`value` pair.
///
/// Ordering is by name, then value, which is the order tag lists are kept in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Shorthand for [`Tag::new`].
///
/// ```
/// use error_tree::{tag, Error};
///
/// let err = Error::new("seek failed").with_tags([tag("operation", "seek")]);
/// assert_eq!(error_tree::lookup_tag(&err, "operation"), Some("seek"));
/// ```
#[inline]
pub fn tag(name: impl Into<String>, value: impl Into<String>) -> Tag {
    Tag::new(name, value)
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Tag {
    #[inline]
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Sorted copy of `tags`; duplicates are kept.
pub(crate) fn sorted_tags<I>(tags: I) -> Vec<Tag>
where
    I: IntoIterator,
    I::Item: Into<Tag>,
{
    let mut tags: Vec<Tag> = tags.into_iter().map(Into::into).collect();
    tags.sort();
    tags
}

/// Name-to-value map where the first occurrence of a name wins.
pub(crate) fn tags_to_map(tags: &[Tag]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for tag in tags {
        map.entry(tag.name.clone()).or_insert_with(|| tag.value.clone());
    }
    map
}

/// Sorted tag list from a name-to-value map.
pub(crate) fn tags_from_map(map: &BTreeMap<String, String>) -> Vec<Tag> {
    map.iter().map(|(name, value)| Tag::new(name.as_str(), value.as_str())).collect()
}
