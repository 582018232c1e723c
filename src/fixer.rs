//! Tree traversal and the public fixing entry point.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::classify::{TextSource, classify};
use crate::engine::{ElementKind, ReportRef};
use crate::intercept::Interceptor;
use crate::log::{debug, warn};
use crate::wrap::fix_direction;

/// Registers directional-mark correction on report trees.
///
/// One fixer can be reused across reports; it remembers every report it has
/// already registered (by handle identity), so registering the same report
/// twice is a no-op and cyclic sub-report graphs terminate instead of
/// stacking hooks forever.
#[derive(Clone, Default)]
pub struct RtlTextFixer {
    registered: Rc<RefCell<HashSet<usize>>>,
}

impl RtlTextFixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register RTL correction for `report` and, transitively, for every
    /// nested sub-report.
    ///
    /// Nothing is touched yet: one hook is placed on the report's own
    /// before-render event, and all the walking and per-element work happens
    /// when the engine fires it at the start of the render pass.
    pub fn register(&self, report: &ReportRef) {
        if !self.registered.borrow_mut().insert(report_identity(report)) {
            debug!("report already registered, skipping");
            return;
        }

        // The report's own hook list stores this closure, so it must not
        // hold the report strongly or the tree could never be freed.
        let fixer = self.clone();
        let walked = Rc::downgrade(report);
        report.on_before_render(Box::new(move || {
            if let Some(report) = walked.upgrade() {
                fixer.walk(&report);
            }
        }));
    }

    /// Fix every table cell and label of `report`, then recurse into its
    /// sub-reports.
    ///
    /// Runs inside the report-level before-render hook, when the element
    /// tree is final but no record has been rendered yet.
    fn walk(&self, report: &ReportRef) {
        for kind in [ElementKind::TableCell, ElementKind::Label] {
            for element in report.elements_of(kind) {
                match classify(element.as_ref()) {
                    TextSource::Static => {
                        let current = element.text();
                        element.set_text(&fix_direction(&current));
                    }
                    TextSource::Bound(binding) => {
                        Interceptor::arm(report, element, binding);
                    }
                }
            }
        }

        for sub in report.sub_report_elements() {
            match sub.report_source() {
                Some(nested) => self.register(&nested),
                None => warn!("sub-report has no report source, skipping"),
            }
        }
    }
}

/// Attach RTL text correction to `report`.
///
/// All effects are realized lazily at render time through the registered
/// hooks. Call this once per report instance: each call creates a fresh
/// [`RtlTextFixer`], so repeated calls stack independent hook sets and
/// double-wrap static text. Use one [`RtlTextFixer`] for all calls if the
/// same report may be passed in more than once.
pub fn fix_rtl_text(report: &ReportRef) {
    RtlTextFixer::new().register(report);
}

fn report_identity(report: &ReportRef) -> usize {
    Rc::as_ptr(report) as *const () as usize
}
