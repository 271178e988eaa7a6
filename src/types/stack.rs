//! Captured call stacks.
//!
//! A [`StackTrace`] is recorded with [`std::backtrace::Backtrace::force_capture`]
//! and resolved into [`Frame`]s only when something asks for them, so building
//! errors on a hot path pays for the unwind but not for symbolication.
//!
//! # Examples
//!
//! ```
//! use error_tree::StackTrace;
//!
//! let stack = StackTrace::capture(0);
//! for frame in stack.iter() {
//!     let _ = (frame.function(), frame.file(), frame.line());
//! }
//! ```

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A single resolved call-site location, innermost first within a trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    /// Creates a frame from already-resolved parts.
    pub fn new(function: impl Into<String>, file: Option<String>, line: Option<u32>) -> Self {
        Self { function: function.into(), file, line }
    }

    /// Fully qualified function name, `<unknown>` when symbols are missing.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Function name without its module path.
    ///
    /// Closure frames keep their enclosing function so they stay recognizable,
    /// e.g. `handler::{{closure}}`.
    pub fn short_function(&self) -> &str {
        let name = self.function.as_str();
        let mut cut = name.len();
        let mut keep = 1;
        while let Some(pos) = name[..cut].rfind("::") {
            let segment = &name[pos + 2..cut];
            cut = pos;
            if !segment.starts_with("{{") {
                keep -= 1;
                if keep == 0 {
                    return &name[pos + 2..];
                }
            }
        }
        name
    }

    /// Source file path, if debug info was available.
    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Source line, if debug info was available.
    #[inline]
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for Frame {
    /// Writes `file:line`; `{:#}` writes the function name instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.function);
        }
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}"),
            (Some(file), None) => f.write_str(file),
            (None, _) => f.write_str("<unknown>"),
        }
    }
}

struct Inner {
    backtrace: Option<Backtrace>,
    skip: usize,
    frames: OnceLock<Vec<Frame>>,
}

/// Immutable sequence of [`Frame`]s, innermost (most recent call) first.
///
/// Cloning is cheap and clones share the lazily resolved frames.
#[derive(Clone)]
pub struct StackTrace {
    inner: Arc<Inner>,
}

impl StackTrace {
    /// Records the current call stack.
    ///
    /// `skip` is the number of caller frames to leave out on top of the
    /// capture machinery itself; `capture(0)` starts at the function that
    /// called `capture`. Returns an empty trace when the platform cannot
    /// unwind.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            return Self::empty();
        }
        Self {
            inner: Arc::new(Inner { backtrace: Some(backtrace), skip, frames: OnceLock::new() }),
        }
    }

    /// A trace with no frames.
    pub fn empty() -> Self {
        Self::from_frames(Vec::new())
    }

    /// Builds a trace from frames resolved elsewhere.
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self {
            inner: Arc::new(Inner { backtrace: None, skip: 0, frames: OnceLock::from(frames) }),
        }
    }

    /// Resolves (once) and returns the frames.
    pub fn frames(&self) -> &[Frame] {
        self.inner.frames.get_or_init(|| match &self.inner.backtrace {
            Some(backtrace) => resolve(backtrace, self.inner.skip),
            None => Vec::new(),
        })
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames().iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames().is_empty()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames()).finish()
    }
}

impl fmt::Display for StackTrace {
    /// One `function` line followed by one tab-indented `file:line` line per frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            write!(f, "{frame:#}\n\t{frame}")?;
        }
        Ok(())
    }
}

fn resolve(backtrace: &Backtrace, skip: usize) -> Vec<Frame> {
    let mut frames = parse_frames(&backtrace.to_string());
    let start = frames
        .iter()
        .rposition(is_capture_frame)
        .map_or(0, |i| i + 1)
        .saturating_add(skip)
        .min(frames.len());
    frames.drain(..start);
    frames
}

fn is_capture_frame(frame: &Frame) -> bool {
    let name = frame.function();
    name.starts_with("std::backtrace") || name.ends_with("StackTrace::capture")
}

/// Parses the rendering of a captured `std::backtrace::Backtrace`.
///
/// Numbered lines (`  3: path::to::function`) open a frame, unnumbered symbol
/// lines are inlined frames, and `at file:line:col` lines locate the frame
/// opened just before them.
fn parse_frames(rendered: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                let (file, line) = split_location(location);
                frame.file = Some(file.to_owned());
                frame.line = line;
            }
            continue;
        }

        let function = match trimmed.split_once(": ") {
            Some((index, rest)) if index.bytes().all(|b| b.is_ascii_digit()) => rest,
            _ => trimmed,
        };
        frames.push(Frame::new(function, None, None));
    }

    frames
}

/// Splits `file:line:col` (column optional) into the file and line.
fn split_location(location: &str) -> (&str, Option<u32>) {
    let mut rest = location;
    let mut numbers: [Option<u32>; 2] = [None, None];

    for slot in numbers.iter_mut() {
        match rest.rsplit_once(':') {
            Some((head, tail)) if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) => {
                *slot = tail.parse().ok();
                rest = head;
            }
            _ => break,
        }
    }

    let line = match numbers {
        [Some(_col), Some(line)] => Some(line),
        [Some(line), None] => Some(line),
        _ => None,
    };
    (rest, line)
}
