//! Error graph formatting.
//!
//! Besides the plain message, an [`Error`] renders as a tree in the style of
//! `tree(1)`: each line shows the messages of one chain of single-cause
//! nodes, and multi-cause nodes open a new level of branches.
//!
//! ```text
//! answer 42
//! ├── .
//! │   ├── A.1: TODO
//! │   ├── A.2
//! │   └── A.3
//! ├── B
//! └── C
//! ```

use std::fmt::{self, Display};

use crate::inspect::{inspect, Inspection};
use crate::types::repr::Repr;
use crate::types::{Error, StackTrace};

/// What a rendering shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verbosity {
    /// The full message, e.g. `outer: inner`.
    Plain,
    /// The full message, double-quoted and escaped.
    Quoted,
    /// Messages, types and tags as a cause tree.
    #[default]
    Tree,
    /// Like [`Verbosity::Tree`], with the stack traces of every line.
    Stacks,
    /// Variant names, own messages and causes, nested like a struct literal.
    Structure,
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub verbosity: Verbosity,
    /// Connector in front of a child that has siblings after it.
    pub branch: String,
    /// Connector in front of the last child.
    pub last_branch: String,
    /// Continues the line of a parent that has more children.
    pub continuation: String,
    /// Continues below the last child.
    pub last_continuation: String,
    /// Printed for a line that has no message, typically a bare join.
    pub placeholder: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Tree,
            branch: "├── ".into(),
            last_branch: "└── ".into(),
            continuation: "│   ".into(),
            last_continuation: "    ".into(),
            placeholder: ".".into(),
        }
    }
}

impl FormatConfig {
    #[inline]
    pub fn tree() -> Self {
        Self::default()
    }

    #[inline]
    pub fn verbose() -> Self {
        Self { verbosity: Verbosity::Stacks, ..Default::default() }
    }

    /// Tree connectors restricted to ASCII.
    #[inline]
    pub fn ascii() -> Self {
        Self {
            branch: "|-- ".into(),
            last_branch: "`-- ".into(),
            continuation: "|   ".into(),
            ..Default::default()
        }
    }
}

/// Builder for customizing error display output.
///
/// Obtained from [`Error::fmt`]; renders through [`Display`].
///
/// ```
/// use error_tree::{join, Error};
///
/// let err = join([Error::new("A"), Error::new("B")]).unwrap();
/// assert_eq!(err.fmt().plain().to_string(), "A; B");
/// assert_eq!(err.fmt().ascii().to_string(), ".\n|-- A\n`-- B");
/// ```
#[derive(Debug, Clone)]
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: FormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    /// Starts from the default tree rendering of `error`.
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: FormatConfig::default() }
    }

    /// Sets what the rendering shows.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    /// The full error string, as `{}` prints it.
    pub fn plain(self) -> Self {
        self.verbosity(Verbosity::Plain)
    }

    /// The full error string, quoted and escaped.
    pub fn quoted(self) -> Self {
        self.verbosity(Verbosity::Quoted)
    }

    /// One line per chain, branching at multi-cause nodes.
    pub fn tree(self) -> Self {
        self.verbosity(Verbosity::Tree)
    }

    /// The tree with each node's stack traces.
    pub fn stacks(self) -> Self {
        self.verbosity(Verbosity::Stacks)
    }

    /// Variant names and fields, as `{:?}` prints them.
    pub fn structure(self) -> Self {
        self.verbosity(Verbosity::Structure)
    }

    /// Switches to ASCII connectors, keeping the verbosity.
    pub fn ascii(mut self) -> Self {
        self.config = FormatConfig { verbosity: self.config.verbosity, ..FormatConfig::ascii() };
        self
    }

    /// Replaces the whole configuration, verbosity included.
    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.config.verbosity {
            Verbosity::Plain => self.error.write_plain(f),
            Verbosity::Quoted => {
                let mut plain = String::new();
                self.error.write_plain(&mut plain)?;
                write!(f, "{plain:?}")
            }
            Verbosity::Tree | Verbosity::Stacks => {
                let mut tree = TreeWriter {
                    out: f,
                    indent: Indent::new(&self.config),
                    config: &self.config,
                    stacks: self.config.verbosity == Verbosity::Stacks,
                };
                tree.node(TreeContext::root(), self.error)
            }
            Verbosity::Structure => write_structure(f, self.error),
        }
    }
}

impl Error {
    /// Returns a builder for customizing the error formatting.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Formats the error using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(ErrorFormatBuilder<'_>) -> ErrorFormatBuilder<'_>,
    {
        f(self.fmt()).to_string()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return self.write_plain(f);
        }
        Display::fmt(&self.fmt().tree(), f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt().structure(), f);
        }
        Display::fmt(&self.fmt().stacks(), f)
    }
}

fn write_structure<W: fmt::Write>(w: &mut W, err: &Error) -> fmt::Result {
    match err.repr() {
        Repr::Foreign { type_name, .. } => write!(w, "Foreign<{type_name}>")?,
        _ => w.write_str(err.type_name())?,
    }
    write!(w, " {{ msg: {:?}", err.message().unwrap_or_default())?;

    if let Some(causes) = err.causes() {
        w.write_str(", causes: [")?;
        for (i, cause) in causes.iter().enumerate() {
            if i != 0 {
                w.write_str(", ")?;
            }
            write_structure(w, cause)?;
        }
        w.write_char(']')?;
    } else if let Some(cause) = err.cause() {
        w.write_str(", cause: ")?;
        write_structure(w, cause)?;
    }

    w.write_str(" }")
}

/// Position of a node among its siblings.
#[derive(Debug, Clone, Copy, Default)]
struct TreeContext {
    index: usize,
    length: usize,
    need_new_line: bool,
}

impl TreeContext {
    fn root() -> Self {
        Self { length: 1, ..Default::default() }
    }

    fn last(&self) -> bool {
        self.index + 1 >= self.length
    }
}

/// Stack of connector symbols, one per ancestor level.
///
/// Only the innermost symbol changes between lines: it is a branch on the
/// first line of a node and a continuation on the following ones.
struct Indent<'c> {
    symbols: Vec<&'c str>,
    config: &'c FormatConfig,
}

impl<'c> Indent<'c> {
    fn new(config: &'c FormatConfig) -> Self {
        Self { symbols: Vec::new(), config }
    }

    fn push(&mut self, ctx: TreeContext) {
        self.next_line(ctx);
        self.symbols.push("");
    }

    fn pop(&mut self) {
        self.symbols.pop();
    }

    fn next_node(&mut self, ctx: TreeContext) {
        let config = self.config;
        self.set(if ctx.last() { &config.last_branch } else { &config.branch });
    }

    fn next_line(&mut self, ctx: TreeContext) {
        let config = self.config;
        self.set(if ctx.last() { &config.last_continuation } else { &config.continuation });
    }

    fn write_to<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| w.write_str(symbol))
    }

    fn set(&mut self, symbol: &'c str) {
        if let Some(last) = self.symbols.last_mut() {
            *last = symbol;
        }
    }
}

struct TreeWriter<'c, W> {
    out: W,
    indent: Indent<'c>,
    config: &'c FormatConfig,
    stacks: bool,
}

impl<W: fmt::Write> TreeWriter<'_, W> {
    fn node(&mut self, mut ctx: TreeContext, err: &Error) -> fmt::Result {
        let inspection = inspect(err);
        self.write_node(ctx, &inspection)?;

        self.indent.push(ctx);
        ctx.length = inspection.causes.len();
        ctx.need_new_line = true;
        for (index, cause) in inspection.causes.iter().enumerate() {
            ctx.index = index;
            self.node(ctx, cause)?;
        }
        self.indent.pop();
        Ok(())
    }

    fn write_node(&mut self, ctx: TreeContext, inspection: &Inspection<'_>) -> fmt::Result {
        if ctx.need_new_line {
            self.write_new_line(ctx)?;
        }
        self.indent.next_node(ctx);

        let message = if inspection.messages.is_empty() {
            self.config.placeholder.clone()
        } else {
            inspection.message()
        };
        for (i, line) in message.split('\n').enumerate() {
            if i != 0 {
                self.write_new_line(ctx)?;
            }
            self.write_indent()?;
            self.out.write_str(line)?;
        }

        if !inspection.types.is_empty() {
            write!(self.out, " ({})", inspection.types.join(" "))?;
        }
        if !inspection.tags.is_empty() {
            self.out.write_str(" [")?;
            for (i, tag) in inspection.tags.iter().enumerate() {
                if i != 0 {
                    self.out.write_char(' ')?;
                }
                write!(self.out, "{tag}")?;
            }
            self.out.write_char(']')?;
        }

        if self.stacks {
            self.write_stacks(ctx, &inspection.stacks)?;
        }
        Ok(())
    }

    fn write_stacks(&mut self, ctx: TreeContext, stacks: &[&StackTrace]) -> fmt::Result {
        let stacks = stacks.iter().filter(|stack| !stack.is_empty());
        for (i, stack) in stacks.enumerate() {
            if i != 0 {
                self.write_new_line(ctx)?;
                self.write_indent()?;
            }
            for frame in stack.iter() {
                self.write_new_line(ctx)?;
                self.write_indent()?;
                write!(self.out, "{frame:#}")?;
                self.write_new_line(ctx)?;
                self.write_indent()?;
                write!(self.out, "\t{frame}")?;
            }
            self.write_new_line(ctx)?;
            self.write_indent()?;
        }
        Ok(())
    }

    fn write_new_line(&mut self, ctx: TreeContext) -> fmt::Result {
        self.out.write_char('\n')?;
        self.indent.next_line(ctx);
        Ok(())
    }

    fn write_indent(&mut self) -> fmt::Result {
        self.indent.write_to(&mut self.out)
    }
}
