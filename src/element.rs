use crate::{
    consts::{OBSERVED_ATTRIBUTES, TAB_GUARD_TAG_NAME, TAB_TRAP_TAG_NAME},
    error::Error,
    tab_trap::TabTrap,
    utils::is_valid_custom_element_name,
};
use wasm_bindgen::prelude::*;
use web_sys::{js_sys::Array, CustomElementRegistry, HtmlElement};

// Rust cannot extend HTMLElement, so a minimal class forwards the lifecycle
// callbacks and the public members to a `TabTrap` created per element.
#[wasm_bindgen(inline_js = r#"
export function defineTrapElement(registry, tagName, observedAttributes, createTrap) {
    const attributes = Array.from(observedAttributes);

    class TrapElement extends HTMLElement {
        #trap;

        static get observedAttributes() {
            return attributes;
        }

        constructor() {
            super();
            this.#trap = createTrap(this);
        }

        connectedCallback() {
            this.#trap.connectedCallback();
        }

        disconnectedCallback() {
            this.#trap.disconnectedCallback();
        }

        attributeChangedCallback(name, oldValue, newValue) {
            this.#trap.attributeChangedCallback(name, oldValue, newValue);
        }

        get disabled() {
            return this.#trap.disabled;
        }

        set disabled(disabled) {
            this.#trap.disabled = disabled;
        }

        focus(options) {
            this.#trap.focus(options);
        }

        firstTabbableElement() {
            return this.#trap.firstTabbableElement();
        }

        isTabbable(element) {
            return this.#trap.isTabbable(element);
        }

        setIsTabbable(callback) {
            this.#trap.setIsTabbable(callback);
        }
    }

    registry.define(tagName, TrapElement);
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = defineTrapElement)]
    fn define_trap_element(
        registry: &CustomElementRegistry,
        tag_name: &str,
        observed_attributes: &Array,
        create_trap: &JsValue,
    ) -> Result<(), JsValue>;
}

/// Where trap elements get registered.
pub trait ElementRegistry {
    fn is_defined(&self, tag_name: &str) -> bool;

    /// Registers the trap element under `tag_name`, which is not taken yet.
    fn register(&self, tag_name: &str) -> Result<(), Error>;
}

impl ElementRegistry for CustomElementRegistry {
    fn is_defined(&self, tag_name: &str) -> bool {
        !self.get(tag_name).is_undefined()
    }

    fn register(&self, tag_name: &str) -> Result<(), Error> {
        let create_trap = Closure::<dyn Fn(HtmlElement) -> Result<JsValue, JsValue>>::new(
            |host: HtmlElement| Ok(TabTrap::new(host)?.into()),
        );
        let observed_attributes = OBSERVED_ATTRIBUTES
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect::<Array>();

        // The registry keeps the constructor forever, so does the callback.
        define_trap_element(self, tag_name, &observed_attributes, &create_trap.into_js_value())
            .map_err(|err| Error::define(tag_name, err))
    }
}

/// Registers the trap under `tag_name` in `registry`. Does nothing when the
/// name is already taken.
pub fn define_in<R: ElementRegistry>(registry: &R, tag_name: &str) -> Result<(), Error> {
    if !is_valid_custom_element_name(tag_name) {
        return Err(Error::InvalidTagName(tag_name.to_string()));
    }

    if registry.is_defined(tag_name) {
        return Ok(());
    }

    registry.register(tag_name)
}

/// Registers `<tab-trap>` and its `<tab-guard>` alias in `registry`.
pub fn define_all_in<R: ElementRegistry>(registry: &R) -> Result<(), Error> {
    define_in(registry, TAB_TRAP_TAG_NAME)?;
    define_in(registry, TAB_GUARD_TAG_NAME)
}

fn custom_elements() -> Result<CustomElementRegistry, Error> {
    Ok(web_sys::window().ok_or(Error::NoWindow)?.custom_elements())
}

/// Registers the trap as a custom element named `tag_name`. Does nothing when
/// the name is already taken.
#[wasm_bindgen]
pub fn define(tag_name: &str) -> Result<(), Error> {
    define_in(&custom_elements()?, tag_name)
}

/// Registers `<tab-trap>`.
#[wasm_bindgen(js_name = defineDefault)]
pub fn define_default() -> Result<(), Error> {
    define(TAB_TRAP_TAG_NAME)
}

/// Registers `<tab-trap>` and its `<tab-guard>` alias.
#[wasm_bindgen(js_name = defineAll)]
pub fn define_all() -> Result<(), Error> {
    define_all_in(&custom_elements()?)
}
