//! The contract this crate requires from the host reporting engine.
//!
//! The engine owns the report tree, drives the render pass and resolves
//! data-bound values; this crate only attaches callbacks to it and rewrites
//! element text. Everything here is single-threaded: handles are `Rc`, hooks
//! fire synchronously inside the engine's own render loop, and hook
//! registrations live no longer than one render pass.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Name of the element property that holds displayable text. Bindings that
/// target any other property are ignored by the fixer.
pub const TEXT_PROPERTY: &str = "Text";

/// A value resolved for the current record during the render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Date(chrono::NaiveDate),
    Null,
}

impl Value {
    /// The contained text, if this value is string-shaped.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// How a host engine formats a bound value into an element's text field.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Null => Ok(()),
        }
    }
}

/// A design-time association between an element property and a named data
/// member. Read-only for this crate: the fixer inspects bindings but never
/// rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Name of the element property the binding drives (e.g. `"Text"`).
    pub property: String,
    /// Name of the data member resolved per record, or of a report
    /// parameter.
    pub data_member: String,
}

impl Binding {
    pub fn new(property: impl Into<String>, data_member: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            data_member: data_member.into(),
        }
    }

    /// Whether this binding drives the element's text field.
    pub fn targets_text(&self) -> bool {
        self.property == TEXT_PROPERTY
    }
}

/// A report-level named value, constant for the whole render pass (unlike
/// per-record data members).
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Why the engine could not resolve a data member's current value.
///
/// The fixer never surfaces these: a failed resolution is handled exactly
/// like a non-string value (the element is left untouched and interception
/// stops).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown data member: {0}")]
    UnknownMember(String),

    #[error("no current record")]
    NoCurrentRecord,
}

/// The element kinds whose text the fixer corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    TableCell,
    Label,
}

/// Callback invoked by the engine just before an element (or the report
/// itself) is rendered.
pub type RenderHook = Box<dyn Fn()>;

/// Cancellation handle returned by hook registration.
///
/// `cancel` must be safe to call from inside the registered callback itself;
/// the engine may not invoke the callback again afterwards. Dropping the
/// handle does not deregister.
///
/// A handle may outlive the render pass (interceptors retain theirs), so it
/// must not keep the registered callback or its captured state alive: hold
/// the registration weakly and make `cancel` a no-op once the engine has
/// discarded its hook lists.
pub trait Subscription {
    fn cancel(&self);
}

pub type SubscriptionRef = Rc<dyn Subscription>;

/// Shared handle to a printable text element (label or table cell).
pub type ElementRef = Rc<dyn ReportElement>;

/// Shared handle to a report document.
pub type ReportRef = Rc<dyn Report>;

/// A printable element with a text field: a label or a table cell.
pub trait ReportElement {
    /// Current value of the text field.
    fn text(&self) -> String;

    /// Overwrite the text field.
    fn set_text(&self, text: &str);

    /// All data bindings declared on this element at design time, on any
    /// property.
    fn bindings(&self) -> Vec<Binding>;

    /// Register a callback fired once per record, just before this element's
    /// resolved text is committed to the output surface.
    fn on_before_render(&self, hook: RenderHook) -> SubscriptionRef;
}

/// An element that embeds another report.
pub trait SubReportElement {
    /// The nested report this element renders, or `None` when no report
    /// source was ever assigned.
    fn report_source(&self) -> Option<ReportRef>;
}

/// The root document of a report template.
pub trait Report {
    /// Register a callback fired once, before the first element of the tree
    /// is rendered.
    fn on_before_render(&self, hook: RenderHook) -> SubscriptionRef;

    /// All elements of `kind` across this report's visual tree. Excludes the
    /// internals of nested sub-reports; those are reached through
    /// [`Report::sub_report_elements`].
    fn elements_of(&self, kind: ElementKind) -> Vec<ElementRef>;

    /// All sub-report elements across this report's visual tree.
    fn sub_report_elements(&self) -> Vec<Rc<dyn SubReportElement>>;

    /// Resolve the current record's value for `data_member`.
    fn current_value(&self, data_member: &str) -> Result<Value, ResolveError>;

    /// The report's named parameters.
    fn parameters(&self) -> Vec<Parameter>;

    /// Look up a parameter by name.
    fn find_parameter(&self, name: &str) -> Option<Parameter> {
        self.parameters().into_iter().find(|p| p.name == name)
    }
}
