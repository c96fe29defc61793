use crate::{
    consts::OBSERVED_ATTRIBUTES,
    dom_api::Dom,
    trap::TrapCore,
    utils::console_error,
};
use std::rc::Rc;
use web_sys::{
    js_sys::Array,
    wasm_bindgen::{prelude::Closure, JsCast, JsValue},
    Element, MutationObserver, MutationObserverInit, MutationRecord,
};

/// Forwards changes of the observed attributes of `host` to the trap, for
/// hosts that are not registered custom elements. Returns the function that
/// stops observing.
pub fn observe_attributes(host: &Element, trap: Rc<TrapCore<Dom>>) -> Option<Box<dyn Fn()>> {
    let on_mutation = {
        let host = host.clone();

        move |mutations: Array, _: MutationObserver| {
            for mutation in mutations.iter() {
                let mutation: MutationRecord = mutation.unchecked_into();
                if mutation.type_() != "attributes" {
                    continue;
                }
                let Some(name) = mutation.attribute_name() else {
                    continue;
                };
                let new_value = host.get_attribute(&name);
                trap.attribute_changed(&name, mutation.old_value().as_deref(), new_value.as_deref());
            }
        }
    };
    let on_mutation = Closure::<dyn Fn(Array, MutationObserver)>::new(on_mutation);

    let observer = match MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            console_error!("MutationObserver is not available: {:?}", err);
            return None;
        }
    };

    let attribute_filter = OBSERVED_ATTRIBUTES
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect::<Array>();
    let init = MutationObserverInit::new();
    init.set_attributes(true);
    init.set_attribute_old_value(true);
    init.set_attribute_filter(&attribute_filter);

    if let Err(err) = observer.observe_with_options(host, &init) {
        console_error!("Failed to observe attributes: {:?}", err);
        return None;
    }

    Some(Box::new(move || {
        observer.disconnect();
        // Keeps the callback alive for as long as the observer is connected.
        let _ = &on_mutation;
    }))
}
