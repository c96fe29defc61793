use std::ops::Deref;

pub const TAB_TRAP_TAG_NAME: &'static str = "tab-trap";
pub const TAB_GUARD_TAG_NAME: &'static str = "tab-guard";

pub const GUARD_ATTRIBUTE_NAME: &'static str = "data-tab-trap-guard";

pub const DISABLED: &'static str = "disabled";
pub const HIDDEN: &'static str = "hidden";
pub const INERT: &'static str = "inert";
pub const TABINDEX: &'static str = "tabindex";

pub const KEYDOWN: &'static str = "keydown";
pub const FOCUS: &'static str = "focus";
pub const TAB_KEY: &'static str = "Tab";

pub const OBSERVED_ATTRIBUTES: [&'static str; 1] = [DISABLED];

/// Some elements are only focusable when they carry a specific attribute.
pub const ATTRIBUTE_GATED: [(&'static str, &'static str); 3] =
    [("a", "href"), ("audio", "controls"), ("video", "controls")];

pub fn gating_attribute(local_name: &str) -> Option<&'static str> {
    ATTRIBUTE_GATED
        .iter()
        .find(|(name, _)| *name == local_name)
        .map(|(_, attr)| *attr)
}

pub enum GuardTabIndex {
    // The trap is active, Tab from the last element lands on the guard.
    Active,
    // The trap is disabled, the guard is out of the tab order.
    Disabled,
}

impl GuardTabIndex {
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            Self::Disabled
        } else {
            Self::Active
        }
    }
}

impl Deref for GuardTabIndex {
    type Target = i32;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Active => &0,
            Self::Disabled => &-1,
        }
    }
}

pub enum ContentEditable {
    True,
    PlaintextOnly,
    False,
    Inherit,
}

impl ContentEditable {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "true" | "" => Self::True,
            "plaintext-only" => Self::PlaintextOnly,
            "false" => Self::False,
            _ => Self::Inherit,
        }
    }

    /// Whether the element is an editing host on its own.
    pub fn is_editing_host(&self) -> bool {
        matches!(self, Self::True | Self::PlaintextOnly)
    }
}
