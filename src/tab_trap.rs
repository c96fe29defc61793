use crate::{
    dom_api::Dom,
    error::Error,
    lifecycle::TrapLifecycle,
    tabbable,
    trap::TrapCore,
    types::{AcceptCondition, FocusOptions, TabTrapProps},
    utils::console_error,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{js_sys::Function, Element, HtmlElement};

/// A focus trap attached to one host element.
#[wasm_bindgen]
pub struct TabTrap {
    id: String,
    host: HtmlElement,
    lifecycle: TrapLifecycle<Dom>,
}

#[wasm_bindgen]
impl TabTrap {
    /// Builds the shadow subtree of `host`. Listeners are installed by
    /// `connectedCallback`.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<TabTrap, Error> {
        let id = uuid::Uuid::new_v4().to_string();
        let (slot, guard) = Dom::attach_trap_shadow(&host, &id)?;
        let lifecycle = TrapLifecycle::new(TrapCore::new(host.clone().into(), slot, guard));

        Ok(Self {
            id,
            host,
            lifecycle,
        })
    }

    /// Turns any element into a trap without registering a custom element.
    /// `disabled` changes are picked up with a `MutationObserver`.
    pub fn attach(host: HtmlElement, props: JsValue) -> Result<TabTrap, Error> {
        let props: Option<TabTrapProps> = serde_wasm_bindgen::from_value(props)?;

        let trap = Self::new(host)?;
        trap.lifecycle
            .attach(props.and_then(|props| props.disabled));

        Ok(trap)
    }

    /// Stops listening and observing. The shadow subtree stays in place.
    pub fn detach(&self) {
        self.lifecycle.detach();
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn host(&self) -> HtmlElement {
        self.host.clone()
    }

    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected(&self) {
        self.lifecycle.connected();
    }

    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected(&self) {
        self.lifecycle.disconnected();
    }

    #[wasm_bindgen(js_name = attributeChangedCallback)]
    pub fn attribute_changed(&self, name: &str, old_value: Option<String>, new_value: Option<String>) {
        self.lifecycle
            .core()
            .attribute_changed(name, old_value.as_deref(), new_value.as_deref());
    }

    #[wasm_bindgen(getter)]
    pub fn disabled(&self) -> bool {
        self.lifecycle.disabled()
    }

    #[wasm_bindgen(setter)]
    pub fn set_disabled(&self, disabled: bool) {
        self.lifecycle.set_disabled(disabled);
    }

    /// Focuses the first tabbable element, if any. `options` is an optional
    /// `FocusOptions` dictionary.
    pub fn focus(&self, options: JsValue) -> Result<(), Error> {
        let options: Option<FocusOptions> = serde_wasm_bindgen::from_value(options)?;
        self.lifecycle.core().focus(options.as_ref());
        Ok(())
    }

    #[wasm_bindgen(js_name = firstTabbableElement)]
    pub fn first_tabbable_element(&self) -> Option<Element> {
        self.lifecycle.core().first_tabbable_element()
    }

    /// Whether the trap considers `element` tabbable, using the custom
    /// condition when one is set.
    #[wasm_bindgen(js_name = isTabbable)]
    pub fn is_tabbable(&self, element: &Element) -> bool {
        self.lifecycle.core().is_tabbable(element)
    }

    /// The built-in check, for custom conditions that extend it.
    #[wasm_bindgen(js_name = defaultIsTabbable)]
    pub fn default_is_tabbable(element: &Element) -> bool {
        tabbable::is_tabbable::<Dom>(element)
    }

    /// Replaces the tabbability check with `callback(element) -> boolean`.
    /// Passing `null` restores the default.
    #[wasm_bindgen(js_name = setIsTabbable)]
    pub fn set_is_tabbable(&self, callback: Option<Function>) {
        let id = self.id.clone();
        let accept_condition = callback.map(|callback| -> AcceptCondition<Element> {
            Rc::new(move |element: &Element| match callback.call1(&JsValue::NULL, element) {
                Ok(accepted) => accepted.is_truthy(),
                Err(err) => {
                    console_error!("[{}] isTabbable callback threw: {:?}", id, err);
                    false
                }
            })
        });
        self.lifecycle.core().set_accept_condition(accept_condition);
    }
}

impl Drop for TabTrap {
    fn drop(&mut self) {
        self.lifecycle.detach();
    }
}
