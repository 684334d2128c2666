//! Collapsible-region collaborator.
//!
//! The accordion decides *whether* a section's content is collapsed; an
//! [`Animator`] decides how the region gets there. The default
//! [`Collapsible`] emits a clipped region with a height transition and leaves
//! the frame-by-frame work to the host's animation loop, which reports back
//! through the `on_animation_end` handler.

use std::str::FromStr;
use std::time::Duration;

use crate::element::Element;
use crate::error::OptionError;
use crate::handlers::{Handler, HandlerRegistry, ON_ANIMATION_END};
use crate::transitions::{Easing, TransitionConfig};
use crate::types::{Justify, PointerEvents, Size, Style};

/// Where content sits inside a partially open region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Top,
    Center,
    Bottom,
}

impl From<Align> for Justify {
    fn from(align: Align) -> Self {
        match align {
            Align::Top => Justify::Start,
            Align::Center => Justify::Center,
            Align::Bottom => Justify::End,
        }
    }
}

impl FromStr for Align {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Align::Top),
            "center" => Ok(Align::Center),
            "bottom" => Ok(Align::Bottom),
            other => Err(OptionError::UnknownKeyword {
                option: "align",
                value: other.to_string(),
            }),
        }
    }
}

/// Options the accordion forwards to its animator.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorOptions {
    pub align: Align,
    pub duration: Duration,
    pub easing: Easing,
    /// Height of the region while collapsed.
    pub collapsed_height: u16,
    /// Keep children mounted while collapsed.
    pub render_children_collapsed: bool,
    /// Let presses reach collapsed content.
    pub enable_pointer_events: bool,
    pub style: Option<Style>,
}

impl AnimatorOptions {
    /// Option names the animator accepts.
    ///
    /// `collapsed` and `onAnimationEnd` are absent: the accordion supplies
    /// both per section.
    pub const KEYS: &'static [&'static str] = &[
        "align",
        "collapsedHeight",
        "duration",
        "easing",
        "enablePointerEvents",
        "renderChildrenCollapsed",
        "style",
    ];
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            align: Align::Top,
            duration: Duration::from_millis(300),
            easing: Easing::EaseOutCubic,
            collapsed_height: 0,
            render_children_collapsed: true,
            enable_pointer_events: false,
            style: None,
        }
    }
}

/// Per-region input handed to an [`Animator`].
#[derive(Clone)]
pub struct CollapsibleProps {
    pub id: String,
    pub collapsed: bool,
    pub options: AnimatorOptions,
    /// Fired by the host once the region has settled.
    pub on_animation_end: Handler,
}

impl std::fmt::Debug for CollapsibleProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapsibleProps")
            .field("id", &self.id)
            .field("collapsed", &self.collapsed)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A primitive that shows or hides a region of content.
pub trait Animator: Send + Sync {
    /// Wrap `content` in a region and register its completion handler.
    fn build(&self, props: CollapsibleProps, content: Element, registry: &HandlerRegistry)
    -> Element;
}

/// Default animator: a clipped column animated on height.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collapsible;

impl Animator for Collapsible {
    fn build(
        &self,
        props: CollapsibleProps,
        content: Element,
        registry: &HandlerRegistry,
    ) -> Element {
        let options = &props.options;

        let mut region = Element::col()
            .id(&props.id)
            .clip(true)
            .justify(options.align.into())
            .height_transition(TransitionConfig::new(options.duration, options.easing))
            .data("collapsed", props.collapsed.to_string());

        if let Some(style) = options.style.clone() {
            region = region.style(style);
        }

        if props.collapsed {
            region = region.height(Size::Fixed(options.collapsed_height));
            if !options.enable_pointer_events {
                region = region.pointer_events(PointerEvents::None);
            }
            if options.render_children_collapsed {
                region = region.child(content);
            }
        } else {
            region = region.child(content);
        }

        registry.register(&props.id, ON_ANIMATION_END, props.on_animation_end);

        region
    }
}
