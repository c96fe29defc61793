use crate::{
    consts::{GuardTabIndex, DISABLED, TAB_KEY},
    tabbable::{first_tabbable_element, is_tabbable, FindFirstProps},
    types::{AcceptCondition, FocusOptions, TrapEvent, DOMAPI},
};
use std::cell::{Cell, RefCell};

/// The DOM independent half of a trap.
///
/// Forward wrapping: Tab from the last tabbable element lands on the guard,
/// which sends focus back to the first one. Backward wrapping: Shift+Tab on
/// the first tabbable element moves focus to the guard first, so the
/// browser's own Shift+Tab continues from the end of the content.
pub struct TrapCore<D: DOMAPI> {
    host: D::Element,
    slot: D::Element,
    guard: D::Element,
    is_wrapping: Cell<bool>,
    accept_condition: RefCell<Option<AcceptCondition<D::Element>>>,
}

impl<D: DOMAPI> TrapCore<D> {
    pub fn new(host: D::Element, slot: D::Element, guard: D::Element) -> Self {
        let this = Self {
            host,
            slot,
            guard,
            is_wrapping: Cell::new(false),
            accept_condition: RefCell::new(None),
        };
        this.sync_guard();
        this
    }

    pub fn host(&self) -> &D::Element {
        &self.host
    }

    pub fn guard(&self) -> &D::Element {
        &self.guard
    }

    pub fn disabled(&self) -> bool {
        D::has_attribute(&self.host, DISABLED)
    }

    pub fn attribute_changed(&self, name: &str, _old_value: Option<&str>, new_value: Option<&str>) {
        if name == DISABLED {
            D::set_tab_index(
                &self.guard,
                *GuardTabIndex::from_disabled(new_value.is_some()),
            );
        }
    }

    /// Takes the guard out of tab order while the host is disabled.
    pub fn sync_guard(&self) {
        D::set_tab_index(&self.guard, *GuardTabIndex::from_disabled(self.disabled()));
    }

    /// Replaces the default tabbability check. `None` restores the default.
    pub fn set_accept_condition(&self, accept_condition: Option<AcceptCondition<D::Element>>) {
        *self.accept_condition.borrow_mut() = accept_condition;
    }

    pub fn is_tabbable(&self, element: &D::Element) -> bool {
        // Cloned out so the condition may replace itself while running.
        let accept_condition = self.accept_condition.borrow().clone();
        match accept_condition {
            Some(accept_condition) => accept_condition(element),
            None => is_tabbable::<D>(element),
        }
    }

    pub fn first_tabbable_element(&self) -> Option<D::Element> {
        let accept_condition = self.accept_condition.borrow().clone();
        first_tabbable_element::<D>(FindFirstProps {
            container: &self.slot,
            scope: &self.host,
            accept_condition: accept_condition.as_deref(),
        })
    }

    /// Focuses the first tabbable element, returns it when there is one.
    pub fn focus(&self, options: Option<&FocusOptions>) -> Option<D::Element> {
        let first = self.first_tabbable_element()?;
        D::focus(&first, options);
        Some(first)
    }

    pub fn handle_event(&self, event: TrapEvent<D::Element>) {
        if self.disabled() {
            return;
        }

        match event {
            TrapEvent::Keydown {
                key,
                shift_key,
                target,
            } => {
                if shift_key
                    && key == TAB_KEY
                    && target.is_some()
                    && target == self.first_tabbable_element()
                {
                    self.is_wrapping.set(true);
                    D::focus(&self.guard, None);
                    self.is_wrapping.set(false);
                }
            }
            TrapEvent::GuardFocus => {
                if !self.is_wrapping.get() {
                    self.focus(None);
                }
            }
        }
    }
}
