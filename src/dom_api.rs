use crate::{
    consts::{FOCUS, GUARD_ATTRIBUTE_NAME, KEYDOWN, TABINDEX},
    error::{js_message, Error, Result},
    mutation_event::observe_attributes,
    trap::TrapCore,
    types::{FocusOptions, HostAPI, RadioButton, TrapEvent, DOMAPI},
    utils::{check_visibility, collection_to_vec, console_error, js_method},
};
use std::rc::Rc;
use web_sys::{
    js_sys::{Object, Reflect},
    wasm_bindgen::{prelude::Closure, JsCast, JsValue, UnwrapThrowExt},
    AssignedNodesOptions, Element, Event, FocusEvent, HtmlElement, HtmlInputElement,
    HtmlSlotElement, KeyboardEvent, ShadowRoot, ShadowRootInit, ShadowRootMode,
};

const RADIO_SELECTOR: &str = "input[type=radio]";

pub struct Dom;

impl DOMAPI for Dom {
    type Element = Element;

    fn is_html_element(element: &Element) -> bool {
        element.is_instance_of::<HtmlElement>()
    }

    fn local_name(element: &Element) -> String {
        element.local_name()
    }

    fn has_attribute(element: &Element, name: &str) -> bool {
        element.has_attribute(name)
    }

    fn get_attribute(element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn as_radio_button(element: &Element) -> Option<RadioButton> {
        let input = element.dyn_ref::<HtmlInputElement>()?;
        if input.type_() != "radio" {
            return None;
        }

        Some(RadioButton {
            name: input.name(),
            checked: input.checked(),
        })
    }

    fn tab_index(element: &Element) -> i32 {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            return element.tab_index();
        }

        // SVG and MathML elements expose tabIndex too.
        Reflect::get(element, &JsValue::from_str("tabIndex"))
            .ok()
            .and_then(|value| value.as_f64())
            .map_or(-1, |tab_index| tab_index as i32)
    }

    fn set_tab_index(element: &Element, tab_index: i32) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            element.set_tab_index(tab_index);
        } else {
            element
                .set_attribute(TABINDEX, &tab_index.to_string())
                .unwrap_throw();
        }
    }

    fn content_editable(element: &Element) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .map(HtmlElement::content_editable)
            .unwrap_or_else(|| "inherit".to_string())
    }

    fn check_visibility(element: &Element) -> bool {
        check_visibility(element)
    }

    fn shadow_root_children(element: &Element) -> Option<Vec<Element>> {
        // Closed shadow roots are not reachable and their hosts are walked as
        // regular elements.
        element
            .shadow_root()
            .map(|shadow_root| collection_to_vec(&shadow_root.children()))
    }

    fn assigned_elements(element: &Element) -> Option<Vec<Element>> {
        let slot = element.dyn_ref::<HtmlSlotElement>()?;
        let options = AssignedNodesOptions::new();
        options.set_flatten(true);

        Some(
            slot.assigned_nodes_with_options(&options)
                .iter()
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
        )
    }

    fn children(element: &Element) -> Vec<Element> {
        collection_to_vec(&element.children())
    }

    fn tree_host(element: &Element) -> Option<Element> {
        element
            .get_root_node()
            .dyn_into::<ShadowRoot>()
            .ok()
            .map(|shadow_root| shadow_root.host())
    }

    fn find_checked_radio(radio: &Element, scope: &Element, name: &str) -> Option<Element> {
        // Compared in Rust rather than with a `[name="..."]` selector so that
        // any group name is safe.
        let root = radio.get_root_node();
        let radios = match root.dyn_ref::<ShadowRoot>() {
            Some(shadow_root) if root != scope.get_root_node() => {
                shadow_root.query_selector_all(RADIO_SELECTOR)
            }
            _ => scope.query_selector_all(RADIO_SELECTOR),
        }
        .ok()?;

        (0..radios.length())
            .filter_map(|index| radios.item(index))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .find(|input| input.checked() && input.name() == name)
            .map(Into::into)
    }

    fn focus(element: &Element, options: Option<&FocusOptions>) {
        let options = match options {
            Some(options) => match serde_wasm_bindgen::to_value(options) {
                Ok(options) => options,
                Err(err) => {
                    console_error!("Invalid focus options: {}", err);
                    JsValue::UNDEFINED
                }
            },
            None => JsValue::UNDEFINED,
        };

        let Some(focus) = js_method(element, "focus") else {
            return;
        };

        if let Err(err) = focus.call1(element, &options) {
            console_error!("focus() failed on <{}>: {:?}", element.local_name(), err);
        }
    }
}

impl Dom {
    /// Creates the trap's open shadow root: a default slot projecting the
    /// host's children, followed by the guard.
    pub fn attach_trap_shadow(host: &HtmlElement, trap_id: &str) -> Result<(Element, Element)> {
        let shadow_root = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(|err| Error::AttachShadow(js_message(&err)))?;
        let document = host
            .owner_document()
            .or_else(|| web_sys::window().and_then(|window| window.document()))
            .ok_or(Error::NoWindow)?;

        let slot = document
            .create_element("slot")
            .map_err(|err| Error::create_element("slot", err))?;
        let guard = document
            .create_element("div")
            .map_err(|err| Error::create_element("div", err))?;

        guard.set_attribute(TABINDEX, "0").unwrap_throw();
        guard.set_attribute("aria-hidden", "true").unwrap_throw();
        guard
            .set_attribute(GUARD_ATTRIBUTE_NAME, trap_id)
            .unwrap_throw();

        shadow_root.append_child(&slot).unwrap_throw();
        shadow_root.append_child(&guard).unwrap_throw();

        Ok((slot, guard))
    }
}

pub struct DomListeners {
    keydown: Closure<dyn Fn(KeyboardEvent)>,
    guard_focus: Closure<dyn Fn(FocusEvent)>,
}

impl HostAPI for Dom {
    type Listeners = DomListeners;
    type Observer = Box<dyn Fn()>;

    fn listen(trap: &Rc<TrapCore<Dom>>) -> DomListeners {
        let keydown = Closure::<dyn Fn(KeyboardEvent)>::new({
            let trap = trap.clone();
            move |event: KeyboardEvent| {
                trap.handle_event(TrapEvent::keydown(
                    event.key(),
                    event.shift_key(),
                    composed_origin(&event),
                    event.target().and_then(|target| target.dyn_into().ok()),
                ));
            }
        });
        let guard_focus = Closure::<dyn Fn(FocusEvent)>::new({
            let trap = trap.clone();
            move |_: FocusEvent| trap.handle_event(TrapEvent::GuardFocus)
        });

        trap.host()
            .add_event_listener_with_callback(KEYDOWN, keydown.as_ref().unchecked_ref())
            .unwrap_throw();
        trap.guard()
            .add_event_listener_with_callback(FOCUS, guard_focus.as_ref().unchecked_ref())
            .unwrap_throw();

        DomListeners {
            keydown,
            guard_focus,
        }
    }

    fn unlisten(trap: &TrapCore<Dom>, listeners: DomListeners) {
        trap.host()
            .remove_event_listener_with_callback(KEYDOWN, listeners.keydown.as_ref().unchecked_ref())
            .unwrap_throw();
        trap.guard()
            .remove_event_listener_with_callback(
                FOCUS,
                listeners.guard_focus.as_ref().unchecked_ref(),
            )
            .unwrap_throw();
    }

    fn observe_attributes(trap: &Rc<TrapCore<Dom>>) -> Option<Box<dyn Fn()>> {
        observe_attributes(trap.host(), trap.clone())
    }

    fn unobserve(observer: Box<dyn Fn()>) {
        observer();
    }

    fn take_own_property(element: &Element, name: &str) -> Option<bool> {
        let object: &Object = element.unchecked_ref();
        let key = JsValue::from_str(name);
        if !Object::has_own(object, &key) {
            return None;
        }

        let value = Reflect::get(object, &key).unwrap_or(JsValue::UNDEFINED);
        if let Err(err) = Reflect::delete_property(object, &key) {
            console_error!("Failed to upgrade `{}`: {:?}", name, err);
            return None;
        }
        Some(value.is_truthy())
    }

    fn toggle_attribute(element: &Element, name: &str, force: bool) {
        element
            .toggle_attribute_with_force(name, force)
            .unwrap_throw();
    }
}

/// The element the event was dispatched on, looking through shadow
/// boundaries.
fn composed_origin(event: &Event) -> Option<Element> {
    event.composed_path().get(0).dyn_into::<Element>().ok()
}
