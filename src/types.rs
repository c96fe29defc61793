use crate::trap::TrapCore;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioButton {
    pub name: String,
    pub checked: bool,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusOptions {
    /// Do not scroll the newly focused element into view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_scroll: Option<bool>,
    /// Force (or suppress) the focus ring regardless of the input modality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_visible: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabTrapProps {
    /// Initial value of the `disabled` attribute. When unset, the attribute
    /// already present on the host is left untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// The two events the trap reacts to.
#[derive(Debug, Clone)]
pub enum TrapEvent<E> {
    /// A keydown that bubbled up to the host. `target` is the element the key
    /// was pressed on, looking through shadow boundaries.
    Keydown {
        key: String,
        shift_key: bool,
        target: Option<E>,
    },
    /// The trailing guard received focus.
    GuardFocus,
}

impl<E> TrapEvent<E> {
    /// `origin` is the first entry of the event's composed path. `target` is
    /// retargeted to the outermost shadow host and only used without one.
    pub fn keydown(
        key: impl Into<String>,
        shift_key: bool,
        origin: Option<E>,
        target: Option<E>,
    ) -> Self {
        TrapEvent::Keydown {
            key: key.into(),
            shift_key,
            target: origin.or(target),
        }
    }
}

/// el: element visited.
/// returns: if an element should be accepted as tabbable.
pub type AcceptCondition<E> = Rc<dyn Fn(&E) -> bool>;

/// Everything the trap needs from a DOM. Implemented by `dom_api::Dom` for
/// the browser DOM.
pub trait DOMAPI {
    type Element: Clone + PartialEq;

    fn is_html_element(element: &Self::Element) -> bool;

    fn local_name(element: &Self::Element) -> String;

    fn has_attribute(element: &Self::Element, name: &str) -> bool;

    fn get_attribute(element: &Self::Element, name: &str) -> Option<String>;

    /// `Some` for `<input type="radio">` only.
    fn as_radio_button(element: &Self::Element) -> Option<RadioButton>;

    fn tab_index(element: &Self::Element) -> i32;

    fn set_tab_index(element: &Self::Element, tab_index: i32);

    /// The `contentEditable` IDL value: "true", "false", "plaintext-only" or "inherit".
    fn content_editable(element: &Self::Element) -> String;

    /// Whether the element is rendered and not `visibility: hidden`.
    fn check_visibility(element: &Self::Element) -> bool;

    /// Children of an open shadow root attached to the element.
    fn shadow_root_children(element: &Self::Element) -> Option<Vec<Self::Element>>;

    /// Flattened assigned elements, `Some` for `<slot>` only.
    fn assigned_elements(element: &Self::Element) -> Option<Vec<Self::Element>>;

    fn children(element: &Self::Element) -> Vec<Self::Element>;

    /// The host of the shadow root containing the element, `None` in a
    /// document tree.
    fn tree_host(element: &Self::Element) -> Option<Self::Element>;

    /// The checked radio button of the group `name` that `radio` belongs to.
    /// Radio groups do not cross trees: when `radio` lives in the same tree
    /// as `scope` only the descendants of `scope` are searched, otherwise
    /// the tree of `radio` is.
    fn find_checked_radio(
        radio: &Self::Element,
        scope: &Self::Element,
        name: &str,
    ) -> Option<Self::Element>;

    fn focus(element: &Self::Element, options: Option<&FocusOptions>);
}

/// What a trap needs from its host beyond DOM reads: event listeners,
/// attribute observation and reflected properties.
pub trait HostAPI: DOMAPI + Sized {
    /// Returned by `listen`, handed back to `unlisten`.
    type Listeners;
    /// Returned by `observe_attributes`, handed back to `unobserve`.
    type Observer;

    /// Listens for keydown on the host and for focus on the guard.
    fn listen(trap: &Rc<TrapCore<Self>>) -> Self::Listeners;

    fn unlisten(trap: &TrapCore<Self>, listeners: Self::Listeners);

    /// Reports changes of the observed attributes of the host to the trap.
    fn observe_attributes(trap: &Rc<TrapCore<Self>>) -> Option<Self::Observer>;

    fn unobserve(observer: Self::Observer);

    /// Removes an own property named `name` that shadows the element's
    /// accessor, returning its truthiness.
    fn take_own_property(element: &Self::Element, name: &str) -> Option<bool>;

    fn toggle_attribute(element: &Self::Element, name: &str, force: bool);
}
