//! Scroll button controller.
//!
//! Holds the state a scroll button widget exposes (direction, labels,
//! disabled flag) and answers activations by asking the paging engine for
//! a scroll request. Rendering and event wiring live elsewhere; every method
//! takes a freshly sampled container snapshot.

use scrollpager_core::{
    can_scroll_toward, plan_page, resolve_direction, ContainerSnapshot, DirectionToken,
    PagingConfig, ScrollRequest,
};
use tracing::debug;

/// Attributes a host may set on a scroll button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAttribute {
    /// Id of the scroll container this button drives
    For,
    /// Direction token
    Direction,
    /// Author-set disabled flag (written by the button itself too)
    Disabled,
    /// Author-provided accessible label
    AriaLabel,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollButton {
    target: Option<String>,
    direction: DirectionToken,
    author_label: Option<String>,
    text: String,
    label: String,
    disabled: bool,
    aria_disabled: bool,
}

impl ScrollButton {
    pub fn new(direction: DirectionToken) -> Self {
        Self {
            direction,
            label: resolve_direction(direction, None).label.to_string(),
            ..Default::default()
        }
    }

    /// Builder: set the id of the target container
    pub fn with_target(mut self, id: impl Into<String>) -> Self {
        self.target = Some(id.into());
        self
    }

    /// Builder: set the visible text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn direction(&self) -> DirectionToken {
        self.direction
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn aria_disabled(&self) -> bool {
        self.aria_disabled
    }

    /// Accessible label as last rendered
    pub fn accessible_label(&self) -> &str {
        &self.label
    }

    /// Sync label and disabled state after the button is mounted
    pub fn connect(&mut self, container: Option<&ContainerSnapshot>) {
        self.render_label(container);
        self.update_disabled(container);
    }

    /// Current value of an attribute
    pub fn attribute(&self, attr: ButtonAttribute) -> Option<String> {
        match attr {
            ButtonAttribute::For => self.target.clone(),
            ButtonAttribute::Direction => Some(self.direction.to_string()),
            ButtonAttribute::Disabled => self.disabled.then(String::new),
            ButtonAttribute::AriaLabel => self.author_label.clone(),
        }
    }

    /// Apply an attribute change coming from outside the button.
    ///
    /// `container` is the snapshot of the (possibly new) target. Returns
    /// false when the value did not change. A `Disabled` change is stored
    /// but never reacted to, so the button's own writes cannot loop.
    pub fn set_attribute(
        &mut self,
        attr: ButtonAttribute,
        value: Option<&str>,
        container: Option<&ContainerSnapshot>,
    ) -> bool {
        if self.attribute(attr).as_deref() == value {
            return false;
        }

        match attr {
            ButtonAttribute::For => {
                self.target = value.map(str::to_string);
                self.update_disabled(container);
            }
            ButtonAttribute::Direction => {
                self.direction = value.map(DirectionToken::parse).unwrap_or_default();
                self.render_label(container);
                self.update_disabled(container);
            }
            ButtonAttribute::AriaLabel => {
                self.author_label = value.map(str::to_string);
                self.render_label(container);
            }
            ButtonAttribute::Disabled => {
                self.disabled = value.is_some();
            }
        }

        true
    }

    /// Replace the visible text content and refresh the label
    pub fn set_text(&mut self, text: impl Into<String>, container: Option<&ContainerSnapshot>) {
        self.text = text.into();
        self.render_label(container);
    }

    /// Recompute the disabled flag; writes only when it changes.
    ///
    /// Returns true when the state changed.
    pub fn update_disabled(&mut self, container: Option<&ContainerSnapshot>) -> bool {
        let should_disable = !can_scroll_toward(container, self.direction);
        if self.disabled == should_disable {
            return false;
        }

        debug!(
            direction = %self.direction,
            disabled = should_disable,
            "Scroll button state changed"
        );
        self.disabled = should_disable;
        self.aria_disabled = should_disable;
        true
    }

    /// Scroll and resize notifications only affect the disabled state
    pub fn on_scroll_or_resize(&mut self, container: Option<&ContainerSnapshot>) -> bool {
        self.update_disabled(container)
    }

    /// Handle a click or key activation
    pub fn activate(
        &self,
        container: Option<&ContainerSnapshot>,
        config: &PagingConfig,
    ) -> ScrollRequest {
        if self.disabled || self.target.is_none() {
            return ScrollRequest::None;
        }
        plan_page(container, self.direction, config)
    }

    fn render_label(&mut self, container: Option<&ContainerSnapshot>) {
        self.label = if let Some(label) = &self.author_label {
            label.clone()
        } else if !self.text.trim().is_empty() {
            self.text.trim().to_string()
        } else {
            resolve_direction(self.direction, container.map(|c| &c.style))
                .label
                .to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpager_core::geometry::{Point, Size};
    use scrollpager_core::{Axis, ContainerStyle, TextDirection};

    fn strip(offset: f64) -> ContainerSnapshot {
        ContainerSnapshot {
            scroll: Point::new(offset, 0.0),
            viewport: Size::new(200.0, 50.0),
            content: Size::new(1000.0, 50.0),
            ..Default::default()
        }
    }

    fn next_button() -> ScrollButton {
        ScrollButton::new(DirectionToken::Right).with_target("strip")
    }

    #[test]
    fn test_disabled_follows_boundary() {
        let mut button = next_button();
        button.connect(Some(&strip(0.0)));
        assert!(!button.is_disabled());

        assert!(button.on_scroll_or_resize(Some(&strip(800.0))));
        assert!(button.is_disabled());
        assert!(button.aria_disabled());

        assert!(button.on_scroll_or_resize(Some(&strip(400.0))));
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_update_disabled_is_idempotent() {
        let mut button = next_button();
        let container = strip(800.0);
        assert!(button.update_disabled(Some(&container)));
        assert!(!button.update_disabled(Some(&container)));
        assert!(button.is_disabled());
    }

    #[test]
    fn test_no_container_is_disabled() {
        let mut button = next_button();
        button.connect(None);
        assert!(button.is_disabled());
        assert_eq!(button.activate(None, &PagingConfig::default()), ScrollRequest::None);
    }

    #[test]
    fn test_disabled_button_does_not_scroll() {
        let mut button = next_button();
        let container = strip(800.0);
        button.connect(Some(&container));
        assert!(button.activate(Some(&container), &PagingConfig::default()).is_none());
    }

    #[test]
    fn test_activation_plans_page() {
        let mut button = next_button();
        let container = strip(0.0);
        button.connect(Some(&container));
        let request = button.activate(Some(&container), &PagingConfig::default());
        assert_eq!(request.axis(), Some(Axis::X));
        assert!(matches!(request, ScrollRequest::By { delta, .. } if delta == 170.0));
    }

    #[test]
    fn test_untargeted_button_does_nothing() {
        let mut button = ScrollButton::new(DirectionToken::Right);
        let container = strip(0.0);
        button.connect(Some(&container));
        assert!(button.activate(Some(&container), &PagingConfig::default()).is_none());
    }

    #[test]
    fn test_label_precedence() {
        let container = strip(0.0);
        let mut button = next_button();
        button.connect(Some(&container));
        assert_eq!(button.accessible_label(), "Scroll right");

        button.set_text("  More  ", Some(&container));
        assert_eq!(button.accessible_label(), "More");

        button.set_attribute(ButtonAttribute::AriaLabel, Some("Forward"), Some(&container));
        assert_eq!(button.accessible_label(), "Forward");

        button.set_attribute(ButtonAttribute::AriaLabel, None, Some(&container));
        assert_eq!(button.accessible_label(), "More");
    }

    #[test]
    fn test_direction_change_refreshes_label_and_state() {
        let mut container = strip(0.0);
        container.style = ContainerStyle {
            direction: TextDirection::Rtl,
            ..Default::default()
        };
        let mut button = next_button();
        button.connect(Some(&container));
        assert!(!button.is_disabled());

        // inline-end in rtl points left, and we are at offset 0
        assert!(button.set_attribute(
            ButtonAttribute::Direction,
            Some("inline-end"),
            Some(&container)
        ));
        assert_eq!(button.direction(), DirectionToken::InlineEnd);
        assert_eq!(button.accessible_label(), "Next");
        assert!(button.is_disabled());
    }

    #[test]
    fn test_unchanged_attribute_is_ignored() {
        let mut button = next_button();
        assert!(!button.set_attribute(ButtonAttribute::Direction, Some("right"), None));
        assert!(!button.set_attribute(ButtonAttribute::For, Some("strip"), None));
    }

    #[test]
    fn test_authored_disabled_is_not_recomputed() {
        let container = strip(0.0);
        let mut button = next_button();
        button.connect(Some(&container));
        assert!(button.set_attribute(ButtonAttribute::Disabled, Some(""), Some(&container)));
        assert!(button.is_disabled());
        // Until the next scroll/resize notification
        assert!(button.on_scroll_or_resize(Some(&container)));
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_retarget_reevaluates() {
        let mut button = next_button();
        button.connect(Some(&strip(0.0)));
        assert!(button.set_attribute(ButtonAttribute::For, Some("other"), Some(&strip(800.0))));
        assert_eq!(button.target(), Some("other"));
        assert!(button.is_disabled());
    }
}
