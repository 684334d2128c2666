//! Pressable collaborators.

use std::collections::HashMap;

use crate::element::Element;
use crate::handlers::{Handler, HandlerRegistry, ON_PRESS};
use crate::types::{Color, Style};

/// Input handed to a [`Touchable`] for one header.
#[derive(Clone)]
pub struct TouchableProps {
    pub id: String,
    pub disabled: bool,
    pub on_press: Handler,
    /// Press feedback colour. Invisible colours mean "no feedback".
    pub underlay_color: Color,
    /// Caller-supplied pass-through props.
    pub extra: HashMap<String, String>,
}

impl std::fmt::Debug for TouchableProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchableProps")
            .field("id", &self.id)
            .field("disabled", &self.disabled)
            .field("underlay_color", &self.underlay_color)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}

/// A primitive that turns a child into something pressable.
///
/// Implementations own press detection and feedback. They must not register
/// `on_press` for disabled props.
pub trait Touchable: Send + Sync {
    fn build(&self, props: TouchableProps, child: Element, registry: &HandlerRegistry) -> Element;
}

/// Shared shell for the built-in touchables.
fn pressable_shell(props: &TouchableProps, child: Element, registry: &HandlerRegistry) -> Element {
    let mut element = Element::box_()
        .id(&props.id)
        .clickable(!props.disabled)
        .focusable(!props.disabled)
        .disabled(props.disabled)
        .child(child);

    for (key, value) in &props.extra {
        element = element.data(key, value);
    }

    if !props.disabled {
        registry.register(&props.id, ON_PRESS, props.on_press.clone());
    }

    element
}

/// Paints the underlay colour behind the child while pressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchableHighlight;

impl Touchable for TouchableHighlight {
    fn build(&self, props: TouchableProps, child: Element, registry: &HandlerRegistry) -> Element {
        let mut element = pressable_shell(&props, child, registry)
            .data("underlay_color", props.underlay_color.to_dsl());

        if props.underlay_color.is_visible() {
            element = element.style_pressed(Style::new().background(props.underlay_color));
        }

        element
    }
}

/// Dims the child while pressed. Ignores the underlay colour.
#[derive(Debug, Clone, Copy)]
pub struct TouchableOpacity {
    pub active_opacity: f32,
}

impl Default for TouchableOpacity {
    fn default() -> Self {
        Self {
            active_opacity: 0.2,
        }
    }
}

impl Touchable for TouchableOpacity {
    fn build(&self, props: TouchableProps, child: Element, registry: &HandlerRegistry) -> Element {
        let mut element = pressable_shell(&props, child, registry)
            .data("active_opacity", self.active_opacity.to_string());

        if !props.disabled {
            element = element.style_pressed(Style::new().dim());
        }

        element
    }
}
