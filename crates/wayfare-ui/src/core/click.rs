//! Click decisions for both anchor flavours, extracted for non-wasm testing.

use crate::core::target::NavigationTarget;

/// `MouseEvent.button` value for the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// The parts of a mouse event the link logic looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClickInput {
    /// Pressed button as reported by the DOM.
    pub button: i16,
    /// Command (macOS) / Windows key.
    pub meta_key: bool,
    /// Control key.
    pub ctrl_key: bool,
    /// Shift key.
    pub shift_key: bool,
    /// Alt / Option key.
    pub alt_key: bool,
}

impl ClickInput {
    /// Unmodified press of `button`.
    #[must_use]
    pub const fn button(button: i16) -> Self {
        Self {
            button,
            meta_key: false,
            ctrl_key: false,
            shift_key: false,
            alt_key: false,
        }
    }

    /// Unmodified primary-button press.
    #[must_use]
    pub const fn primary() -> Self {
        Self::button(PRIMARY_BUTTON)
    }

    /// Same press with the meta key held.
    #[must_use]
    pub const fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Same press with the control key held.
    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Same press with the shift key held.
    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// True for the primary button.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        self.button == PRIMARY_BUTTON
    }

    /// True when any modifier key is held.
    #[must_use]
    pub const fn has_modifier(self) -> bool {
        self.meta_key || self.ctrl_key || self.shift_key || self.alt_key
    }
}

/// What a plain anchor does with a mouse-down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Not the primary button: leave the event untouched.
    Ignore,
    /// Hand the event to the caller-supplied handler.
    InvokeHandler,
    /// Open the URL in a new browsing context.
    OpenNewContext(String),
    /// Load the URL in the current browsing context.
    NavigateCurrent(String),
    /// Default prevented, nothing else happens.
    None,
}

impl ClickAction {
    /// Whether the browser's default anchor action must be prevented.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

/// Decides what a plain anchor does for a press.
///
/// Descriptor targets without a handler resolve to [`ClickAction::None`]:
/// those are expected to take the routed render path instead.
#[must_use]
pub fn resolve_click(
    input: ClickInput,
    target: Option<&NavigationTarget>,
    has_handler: bool,
    new_tab: bool,
) -> ClickAction {
    if !input.is_primary() {
        return ClickAction::Ignore;
    }
    if has_handler {
        return ClickAction::InvokeHandler;
    }
    match target.and_then(NavigationTarget::as_path) {
        Some(url) if input.meta_key || new_tab => ClickAction::OpenNewContext(url.to_string()),
        Some(url) => ClickAction::NavigateCurrent(url.to_string()),
        None => ClickAction::None,
    }
}

/// What a routed anchor does with a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterClick {
    /// Prevent default and transition through the router.
    Navigate {
        /// Replace the current history entry instead of pushing.
        replace: bool,
    },
    /// Prevent default and do nothing (disabled link).
    Suppress,
    /// Let the browser handle it (new tab, download, etc.).
    Browser,
}

/// Decides what a routed anchor does for a click.
#[must_use]
pub fn resolve_router_click(
    input: ClickInput,
    anchor_target: Option<&str>,
    disabled: bool,
    replace: bool,
) -> RouterClick {
    if disabled {
        return RouterClick::Suppress;
    }
    let same_context = anchor_target.is_none_or(|target| target.is_empty() || target == "_self");
    if input.is_primary() && !input.has_modifier() && same_context {
        RouterClick::Navigate { replace }
    } else {
        RouterClick::Browser
    }
}
