//! Classifies an element's text as design-time-static or data-bound.

use crate::engine::{Binding, ReportElement};

/// Where an element's final text value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// The current text value is final; it can be fixed once, permanently.
    Static,
    /// The engine overwrites the text from this binding on every render
    /// tick, so the fix must be re-applied per record via interception.
    Bound(Binding),
}

/// Determine whether `element`'s text is driven by a binding.
///
/// Only bindings targeting the `Text` property count; an element whose
/// bindings all drive other properties is static as far as its text is
/// concerned. Absent or malformed binding sets fall back to static, which
/// fixes whatever text is currently there and never intercepts.
pub fn classify(element: &dyn ReportElement) -> TextSource {
    match element.bindings().into_iter().find(Binding::targets_text) {
        Some(binding) => TextSource::Bound(binding),
        None => TextSource::Static,
    }
}
