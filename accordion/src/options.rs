//! Accordion configuration.
//!
//! Callers fill one flat [`AccordionProps`]. Each render cycle it is split by
//! [`AccordionProps::partition`] into the options the accordion consumes
//! itself, the options forwarded to the animator and the options forwarded
//! to the container view.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::animator::{Align, AnimatorOptions};
use crate::disabled::Disabled;
use crate::element::Element;
use crate::error::OptionError;
use crate::section::{ActiveSet, SectionContext, SectionIndex};
use crate::touchable::{Touchable, TouchableHighlight};
use crate::transitions::Easing;
use crate::types::{Color, PointerEvents, Style};

/// Renders one part of a section.
pub type RenderFn<S> = Arc<dyn Fn(&SectionContext<'_, S>) -> Element + Send + Sync>;

/// Receives the next active set after a toggle.
pub type ChangeFn = Arc<dyn Fn(ActiveSet) + Send + Sync>;

/// Receives the section whose region finished animating.
pub type AnimationEndFn<S> = Arc<dyn Fn(&S, SectionIndex) + Send + Sync>;

/// Element id of the container when no `testID` is given.
pub const DEFAULT_TEST_ID: &str = "accordion";

/// Where a named option ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Animator,
    Layout,
    Controller,
}

/// Option names the accordion consumes itself, pressable options included.
pub const CONTROLLER_KEYS: &[&str] = &[
    "activeSections",
    "containerStyle",
    "disabled",
    "expandFromBottom",
    "expandMultiple",
    "onAnimationEnd",
    "onChange",
    "renderContent",
    "renderFooter",
    "renderHeader",
    "renderSectionTitle",
    "sectionContainerStyle",
    "sections",
    "touchableComponent",
    "touchableProps",
    "underlayColor",
];

/// Resolve an option name to its destination.
///
/// Precedence is animator, then layout, then the accordion itself. `style`
/// is accepted by both collaborators and therefore reaches the animator.
/// Returns `None` for names nobody accepts.
pub fn route_option(name: &str) -> Option<Destination> {
    if AnimatorOptions::KEYS.contains(&name) {
        Some(Destination::Animator)
    } else if LayoutOptions::KEYS.contains(&name) {
        Some(Destination::Layout)
    } else if CONTROLLER_KEYS.contains(&name) {
        Some(Destination::Controller)
    } else {
        None
    }
}

/// Options forwarded to the container view.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub test_id: String,
    pub pointer_events: PointerEvents,
}

impl LayoutOptions {
    /// Option names the view accepts. `style` loses to the animator.
    pub const KEYS: &'static [&'static str] = &["pointerEvents", "style", "testID"];
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            test_id: DEFAULT_TEST_ID.into(),
            pointer_events: PointerEvents::Auto,
        }
    }
}

/// Options the accordion consumes itself.
pub struct ControllerOptions<S> {
    pub sections: Arc<[S]>,
    pub render_header: RenderFn<S>,
    pub render_content: RenderFn<S>,
    pub render_footer: Option<RenderFn<S>>,
    pub render_section_title: Option<RenderFn<S>>,
    pub active_sections: ActiveSet,
    pub on_change: Option<ChangeFn>,
    pub underlay_color: Color,
    pub touchable: Arc<dyn Touchable>,
    pub touchable_props: HashMap<String, String>,
    pub disabled: Disabled,
    pub expand_from_bottom: bool,
    pub expand_multiple: bool,
    pub on_animation_end: Option<AnimationEndFn<S>>,
    pub section_container_style: Style,
    pub container_style: Style,
}

/// The three option subsets produced by [`AccordionProps::partition`].
pub struct Partitioned<S> {
    pub controller: ControllerOptions<S>,
    pub animator: AnimatorOptions,
    pub layout: LayoutOptions,
}

/// Flat accordion configuration.
pub struct AccordionProps<S> {
    pub sections: Arc<[S]>,
    pub render_header: RenderFn<S>,
    pub render_content: RenderFn<S>,
    pub render_footer: Option<RenderFn<S>>,
    pub render_section_title: Option<RenderFn<S>>,
    pub active_sections: ActiveSet,
    pub on_change: Option<ChangeFn>,

    // Animator
    pub align: Align,
    pub duration: Duration,
    pub easing: Easing,
    pub collapsed_height: u16,
    pub render_children_collapsed: bool,
    pub enable_pointer_events: bool,
    pub style: Option<Style>,

    // Layout
    pub test_id: Option<String>,
    pub pointer_events: PointerEvents,

    // Pressable
    pub underlay_color: Color,
    pub touchable: Arc<dyn Touchable>,
    pub touchable_props: HashMap<String, String>,

    pub disabled: Disabled,
    pub expand_from_bottom: bool,
    pub expand_multiple: bool,
    pub on_animation_end: Option<AnimationEndFn<S>>,
    pub section_container_style: Style,
    pub container_style: Style,
}

impl<S> AccordionProps<S> {
    /// Create props from the required parts; everything else takes defaults.
    pub fn new<H, C>(sections: impl Into<Arc<[S]>>, render_header: H, render_content: C) -> Self
    where
        H: Fn(&SectionContext<'_, S>) -> Element + Send + Sync + 'static,
        C: Fn(&SectionContext<'_, S>) -> Element + Send + Sync + 'static,
    {
        let animator = AnimatorOptions::default();
        Self {
            sections: sections.into(),
            render_header: Arc::new(render_header),
            render_content: Arc::new(render_content),
            render_footer: None,
            render_section_title: None,
            active_sections: ActiveSet::new(),
            on_change: None,
            align: animator.align,
            duration: animator.duration,
            easing: animator.easing,
            collapsed_height: animator.collapsed_height,
            render_children_collapsed: animator.render_children_collapsed,
            enable_pointer_events: animator.enable_pointer_events,
            style: animator.style,
            test_id: None,
            pointer_events: PointerEvents::Auto,
            underlay_color: Color::BLACK,
            touchable: Arc::new(TouchableHighlight),
            touchable_props: HashMap::new(),
            disabled: Disabled::None,
            expand_from_bottom: false,
            expand_multiple: false,
            on_animation_end: None,
            section_container_style: Style::default(),
            container_style: Style::default(),
        }
    }

    pub fn render_footer<F>(mut self, render: F) -> Self
    where
        F: Fn(&SectionContext<'_, S>) -> Element + Send + Sync + 'static,
    {
        self.render_footer = Some(Arc::new(render));
        self
    }

    pub fn render_section_title<F>(mut self, render: F) -> Self
    where
        F: Fn(&SectionContext<'_, S>) -> Element + Send + Sync + 'static,
    {
        self.render_section_title = Some(Arc::new(render));
        self
    }

    pub fn active_sections(mut self, active: impl Into<ActiveSet>) -> Self {
        self.active_sections = active.into();
        self
    }

    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(ActiveSet) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn collapsed_height(mut self, height: u16) -> Self {
        self.collapsed_height = height;
        self
    }

    pub fn render_children_collapsed(mut self, render: bool) -> Self {
        self.render_children_collapsed = render;
        self
    }

    pub fn enable_pointer_events(mut self, enable: bool) -> Self {
        self.enable_pointer_events = enable;
        self
    }

    /// Style for each collapsible region.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = pointer_events;
        self
    }

    pub fn underlay_color(mut self, color: Color) -> Self {
        self.underlay_color = color;
        self
    }

    pub fn touchable(mut self, touchable: impl Touchable + 'static) -> Self {
        self.touchable = Arc::new(touchable);
        self
    }

    pub fn touchable_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.touchable_props.insert(key.into(), value.into());
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }

    pub fn expand_from_bottom(mut self, expand_from_bottom: bool) -> Self {
        self.expand_from_bottom = expand_from_bottom;
        self
    }

    pub fn expand_multiple(mut self, expand_multiple: bool) -> Self {
        self.expand_multiple = expand_multiple;
        self
    }

    pub fn on_animation_end<F>(mut self, on_animation_end: F) -> Self
    where
        F: Fn(&S, SectionIndex) + Send + Sync + 'static,
    {
        self.on_animation_end = Some(Arc::new(on_animation_end));
        self
    }

    pub fn section_container_style(mut self, style: Style) -> Self {
        self.section_container_style = style;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Set an option from its string form, as a host binding would.
    ///
    /// Unknown names are ignored. Sections, callbacks, styles and the
    /// pressable constructor have no string form and are rejected.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        if route_option(name).is_none() {
            log::trace!("[accordion] dropping unrecognized option {name}");
            return Ok(());
        }

        match name {
            "align" => self.align = value.parse()?,
            "duration" => {
                let millis = parse_value::<f64>("duration", value)?;
                if !millis.is_finite() || millis < 0.0 {
                    return Err(OptionError::InvalidValue {
                        option: "duration",
                        value: value.to_string(),
                    });
                }
                self.duration = Duration::from_secs_f64(millis / 1000.0);
            }
            "easing" => self.easing = value.parse()?,
            "collapsedHeight" => {
                self.collapsed_height = parse_value("collapsedHeight", value)?;
            }
            "renderChildrenCollapsed" => {
                self.render_children_collapsed = parse_value("renderChildrenCollapsed", value)?;
            }
            "enablePointerEvents" => {
                self.enable_pointer_events = parse_value("enablePointerEvents", value)?;
            }
            "testID" => self.test_id = Some(value.to_string()),
            "pointerEvents" => self.pointer_events = value.parse()?,
            "underlayColor" => self.underlay_color = value.parse()?,
            "activeSections" => self.active_sections = value.parse()?,
            "disabled" => {
                self.disabled = value.parse::<Disabled>().unwrap_or_else(|err| {
                    log::warn!("[accordion] {err}, treating every section as enabled");
                    Disabled::None
                });
            }
            "expandFromBottom" => {
                self.expand_from_bottom = parse_value("expandFromBottom", value)?;
            }
            "expandMultiple" => self.expand_multiple = parse_value("expandMultiple", value)?,
            // Sections, callbacks, styles and the pressable bag have no string form.
            _ => return Err(OptionError::NotStringSettable(name.to_string())),
        }

        Ok(())
    }

    /// Split into the accordion's own options and each collaborator's.
    pub fn partition(self) -> Partitioned<S> {
        let animator = AnimatorOptions {
            align: self.align,
            duration: self.duration,
            easing: self.easing,
            collapsed_height: self.collapsed_height,
            render_children_collapsed: self.render_children_collapsed,
            enable_pointer_events: self.enable_pointer_events,
            style: self.style,
        };

        let layout = LayoutOptions {
            test_id: self
                .test_id
                .unwrap_or_else(|| DEFAULT_TEST_ID.to_string()),
            pointer_events: self.pointer_events,
        };

        let controller = ControllerOptions {
            sections: self.sections,
            render_header: self.render_header,
            render_content: self.render_content,
            render_footer: self.render_footer,
            render_section_title: self.render_section_title,
            active_sections: self.active_sections,
            on_change: self.on_change,
            underlay_color: self.underlay_color,
            touchable: self.touchable,
            touchable_props: self.touchable_props,
            disabled: self.disabled,
            expand_from_bottom: self.expand_from_bottom,
            expand_multiple: self.expand_multiple,
            on_animation_end: self.on_animation_end,
            section_container_style: self.section_container_style,
            container_style: self.container_style,
        };

        Partitioned {
            controller,
            animator,
            layout,
        }
    }
}

impl<S> std::fmt::Debug for AccordionProps<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccordionProps")
            .field("section_count", &self.sections.len())
            .field("active_sections", &self.active_sections)
            .field("disabled", &self.disabled)
            .field("expand_from_bottom", &self.expand_from_bottom)
            .field("expand_multiple", &self.expand_multiple)
            .finish_non_exhaustive()
    }
}

fn parse_value<T: std::str::FromStr>(option: &'static str, value: &str) -> Result<T, OptionError> {
    value.trim().parse().map_err(|_| OptionError::InvalidValue {
        option,
        value: value.to_string(),
    })
}
