//! Fixes right-to-left text direction in report element trees.
//!
//! Report layout engines built for left-to-right scripts render RTL text
//! (Arabic, Hebrew, Persian, ...) with scrambled word order unless each text
//! run carries its own directional context. This crate walks a report's
//! element tree, including nested sub-reports, and wraps every label's and
//! table cell's text in Unicode directional marks:
//!
//! - static text (fixed at template-authoring time) is wrapped once,
//!   up front;
//! - data-bound text is intercepted on every render tick, the moment the
//!   engine resolves the bound value and just before it is committed to the
//!   output surface, so per-record values get wrapped too.
//!
//! The host engine is abstracted behind the traits in [`engine`]; the crate
//! never owns the report, it only attaches render hooks and rewrites text
//! fields.
//!
//! ```no_run
//! # fn get_report() -> rtlmark::engine::ReportRef { unimplemented!() }
//! let report = get_report();
//! rtlmark::fix_rtl_text(&report);
//! // ... hand the report to the engine; correction happens during rendering
//! ```
//!
//! This is directional *marking*, not bidi reordering: no UAX #9
//! implementation, no script detection. Correction is applied to every label
//! and cell unconditionally.

pub mod engine;
pub mod marks;

mod classify;
mod fixer;
mod intercept;
mod log;
mod wrap;

pub use classify::{TextSource, classify};
pub use fixer::{RtlTextFixer, fix_rtl_text};
pub use wrap::fix_direction;
