use crate::{
    consts::{gating_attribute, ContentEditable, DISABLED, GUARD_ATTRIBUTE_NAME, HIDDEN, INERT, TABINDEX},
    types::DOMAPI,
};

/// Determines whether an element is tabbable.
///
/// Relies on the host's `tabIndex` and visibility primitives, it does not try
/// to compute an accessibility tree. Elements that are only focusable with a
/// specific attribute (`<a href>`, `<audio controls>`, `<video controls>`) are
/// checked against that attribute.
pub fn is_tabbable<D: DOMAPI>(element: &D::Element) -> bool {
    // Another trap's guard is an implementation detail of that trap.
    if D::has_attribute(element, GUARD_ATTRIBUTE_NAME) {
        return false;
    }

    if ContentEditable::parse(&D::content_editable(element)).is_editing_host() {
        return !has_negative_tabindex_attribute::<D>(element) && D::check_visibility(element);
    }

    if D::tab_index(element) < 0 || D::has_attribute(element, DISABLED) {
        return false;
    }

    if !D::check_visibility(element) {
        return false;
    }

    match gating_attribute(&D::local_name(element)) {
        Some(attr) => D::has_attribute(element, attr),
        None => true,
    }
}

fn has_negative_tabindex_attribute<D: DOMAPI>(element: &D::Element) -> bool {
    D::get_attribute(element, TABINDEX)
        .and_then(|value| value.trim().parse::<i32>().ok())
        .map_or(false, |tab_index| tab_index < 0)
}

pub struct FindFirstProps<'a, D: DOMAPI> {
    /// The node the search starts from, included in the search.
    pub container: &'a D::Element,
    /// Where checked radio buttons are looked up.
    pub scope: &'a D::Element,
    /// Replaces `is_tabbable` when set.
    pub accept_condition: Option<&'a dyn Fn(&D::Element) -> bool>,
}

/// Finds the element sequential navigation would reach first inside `container`.
pub fn first_tabbable_element<D: DOMAPI>(props: FindFirstProps<'_, D>) -> Option<D::Element> {
    let default_condition = is_tabbable::<D>;
    let mut state = FirstTabbableState::<D> {
        scope: props.scope,
        accept_condition: props.accept_condition.unwrap_or(&default_condition),
        seen_radio_groups: Vec::new(),
    };

    state.visit(props.container)
}

struct FirstTabbableState<'a, D: DOMAPI> {
    scope: &'a D::Element,
    accept_condition: &'a dyn Fn(&D::Element) -> bool,
    /// Radio groups already resolved during this search, by tree and name.
    seen_radio_groups: Vec<(Option<D::Element>, String)>,
}

impl<'a, D: DOMAPI> FirstTabbableState<'a, D> {
    fn visit(&mut self, node: &D::Element) -> Option<D::Element> {
        if D::has_attribute(node, INERT) || D::has_attribute(node, HIDDEN) {
            return None;
        }

        if self.is_disabled_fieldset(node) {
            // The first <legend> of a disabled fieldset is not disabled.
            return D::children(node)
                .into_iter()
                .find(|child| D::is_html_element(child) && D::local_name(child) == "legend")
                .and_then(|legend| self.visit(&legend));
        }

        let node = self.resolve_radio_group(node);

        if D::is_html_element(&node) && (self.accept_condition)(&node) {
            return Some(node);
        }

        let children = D::shadow_root_children(&node)
            .or_else(|| D::assigned_elements(&node))
            .unwrap_or_else(|| D::children(&node));

        children.iter().find_map(|child| self.visit(child))
    }

    fn is_disabled_fieldset(&self, node: &D::Element) -> bool {
        D::is_html_element(node)
            && D::local_name(node) == "fieldset"
            && D::has_attribute(node, DISABLED)
    }

    /// An unchecked radio stands for its whole group, and tab order reaches
    /// the checked member of that group if there is one.
    fn resolve_radio_group(&mut self, node: &D::Element) -> D::Element {
        if !D::is_html_element(node) {
            return node.clone();
        }

        let Some(radio) = D::as_radio_button(node) else {
            return node.clone();
        };

        if radio.name.is_empty() || radio.checked {
            return node.clone();
        }

        let group = (D::tree_host(node), radio.name);
        if self.seen_radio_groups.contains(&group) {
            return node.clone();
        }
        let name = group.1.clone();
        self.seen_radio_groups.push(group);

        D::find_checked_radio(node, self.scope, &name).unwrap_or_else(|| node.clone())
    }
}
