use crate::{consts::DISABLED, trap::TrapCore, types::HostAPI};
use std::{cell::RefCell, rc::Rc};

/// Connection state of a trap: the listeners installed while the host is
/// connected, and the attribute observer of hosts that are not custom
/// elements.
pub struct TrapLifecycle<D: HostAPI> {
    core: Rc<TrapCore<D>>,
    listeners: RefCell<Option<D::Listeners>>,
    observer: RefCell<Option<D::Observer>>,
}

impl<D: HostAPI> TrapLifecycle<D> {
    pub fn new(core: TrapCore<D>) -> Self {
        Self {
            core: Rc::new(core),
            listeners: RefCell::new(None),
            observer: RefCell::new(None),
        }
    }

    pub fn core(&self) -> &Rc<TrapCore<D>> {
        &self.core
    }

    pub fn is_listening(&self) -> bool {
        self.listeners.borrow().is_some()
    }

    /// A `disabled` property assigned before the element was upgraded
    /// shadows the accessor, so it is moved over to the attribute. Listeners
    /// are installed once.
    pub fn connected(&self) {
        if let Some(disabled) = D::take_own_property(self.core.host(), DISABLED) {
            self.set_disabled(disabled);
        }

        if self.is_listening() {
            return;
        }

        let listeners = D::listen(&self.core);
        *self.listeners.borrow_mut() = Some(listeners);
    }

    pub fn disconnected(&self) {
        let listeners = self.listeners.borrow_mut().take();
        if let Some(listeners) = listeners {
            D::unlisten(&self.core, listeners);
        }
    }

    /// Connects a host that is not a registered custom element. Changes of
    /// its `disabled` attribute are picked up by an observer.
    pub fn attach(&self, disabled: Option<bool>) {
        if let Some(disabled) = disabled {
            self.set_disabled(disabled);
            self.core.sync_guard();
        }

        self.connected();

        if self.observer.borrow().is_none() {
            let observer = D::observe_attributes(&self.core);
            *self.observer.borrow_mut() = observer;
        }
    }

    pub fn detach(&self) {
        self.disconnected();

        let observer = self.observer.borrow_mut().take();
        if let Some(observer) = observer {
            D::unobserve(observer);
        }
    }

    pub fn disabled(&self) -> bool {
        self.core.disabled()
    }

    pub fn set_disabled(&self, disabled: bool) {
        D::toggle_attribute(self.core.host(), DISABLED, disabled);
    }
}
