//! Per-element interception of data-bound text.
//!
//! A data-bound element gets its text overwritten by the engine on every
//! render tick, so a one-shot fix would be clobbered by the first record.
//! Each such element is given an interceptor registered on its before-render
//! hook; the interceptor rewrites the freshly resolved value just before it
//! is committed, and unhooks itself as soon as the binding turns out not to
//! be text-shaped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::engine::{Binding, ElementRef, Report, ReportElement, ReportRef, SubscriptionRef, Value};
use crate::log::{debug, warn};
use crate::wrap::fix_direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Registered and rewriting text on each tick.
    Active,
    /// Unhooked for the rest of the render pass. Terminal.
    Disarmed,
}

/// Interception state for one data-bound element.
///
/// Holds its own cancellation handle so it can deregister from inside its
/// own callback; the explicit [`State`] guards against a late tick the
/// engine delivers after cancellation.
///
/// The report and element handles are weak: the hook closure the element
/// stores owns the interceptor, so strong handles here would tie the whole
/// report tree into a reference cycle and keep it alive forever. The engine
/// side holds the only strong ownership; once it drops its hook lists the
/// interceptor goes with them.
pub(crate) struct Interceptor {
    report: Weak<dyn Report>,
    element: Weak<dyn ReportElement>,
    binding: Binding,
    state: Cell<State>,
    subscription: RefCell<Option<SubscriptionRef>>,
}

impl Interceptor {
    /// Arm interception for `element`: registers on its before-render hook.
    pub(crate) fn arm(report: &ReportRef, element: ElementRef, binding: Binding) {
        let interceptor = Rc::new(Interceptor {
            report: Rc::downgrade(report),
            element: Rc::downgrade(&element),
            binding,
            state: Cell::new(State::Active),
            subscription: RefCell::new(None),
        });

        let hooked = Rc::clone(&interceptor);
        let subscription = element.on_before_render(Box::new(move || hooked.on_tick()));
        *interceptor.subscription.borrow_mut() = Some(subscription);
    }

    fn on_tick(&self) {
        if self.state.get() == State::Disarmed {
            return;
        }

        // A tick can only arrive through the element's own hook list, so the
        // upgrades fail only if the engine is tearing the tree down mid-pass.
        let (Some(report), Some(element)) = (self.report.upgrade(), self.element.upgrade())
        else {
            return;
        };

        // A parameter-backed binding resolves to the same value for the
        // whole pass, and the engine has already formatted it into the text
        // field; only the directional correction is missing.
        if report.find_parameter(&self.binding.data_member).is_some() {
            let current = element.text();
            element.set_text(&fix_direction(&current));
            return;
        }

        match report.current_value(&self.binding.data_member) {
            Ok(Value::Text(value)) => {
                element.set_text(&fix_direction(&value));
            }
            Ok(_) => {
                debug!(
                    data_member = %self.binding.data_member,
                    "bound value is not text, disarming"
                );
                self.disarm();
            }
            Err(_err) => {
                warn!(
                    data_member = %self.binding.data_member,
                    error = %_err,
                    "could not resolve bound value, disarming"
                );
                self.disarm();
            }
        }
    }

    fn disarm(&self) {
        self.state.set(State::Disarmed);
        if let Some(subscription) = self.subscription.borrow_mut().take() {
            subscription.cancel();
        }
    }
}
