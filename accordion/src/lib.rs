//! A multi-section accordion widget.
//!
//! The [`Accordion`] turns a list of sections into a render tree of headers,
//! collapsible content regions and optional titles and footers. Expansion
//! state belongs to the caller: toggles compute the next [`ActiveSet`] and
//! hand it back through `on_change`.

pub mod animator;
pub mod controller;
pub mod disabled;
pub mod element;
pub mod error;
pub mod handlers;
pub mod options;
pub mod section;
pub mod touchable;
pub mod transitions;
pub mod types;

pub use animator::{Align, Animator, AnimatorOptions, Collapsible, CollapsibleProps};
pub use controller::Accordion;
pub use disabled::Disabled;
pub use element::{Content, Element, find_element};
pub use error::{ContractViolation, OptionError};
pub use handlers::{Handler, HandlerRegistry, ON_ANIMATION_END, ON_PRESS};
pub use options::{
    AccordionProps, AnimationEndFn, ChangeFn, Destination, LayoutOptions, RenderFn, route_option,
};
pub use section::{ActiveSet, SectionContext, SectionIndex};
pub use touchable::{Touchable, TouchableHighlight, TouchableOpacity, TouchableProps};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
