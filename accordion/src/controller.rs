//! The accordion controller.
//!
//! An [`Accordion`] lives for one render cycle. It owns no expansion state:
//! the caller supplies the active set, and toggles hand the next active set
//! back through `on_change`.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::animator::{Animator, AnimatorOptions, Collapsible, CollapsibleProps};
use crate::element::Element;
use crate::error::ContractViolation;
use crate::handlers::{Handler, HandlerRegistry};
use crate::options::{AccordionProps, ChangeFn, ControllerOptions, LayoutOptions, Partitioned};
use crate::section::{ActiveSet, SectionContext, SectionIndex};
use crate::touchable::TouchableProps;
use crate::types::Color;

/// Pass-through prop that may override the underlay colour of enabled headers.
const UNDERLAY_PROP: &str = "underlayColor";

/// Compute the toggle result and hand it to the owner, if there is one.
fn deliver_toggle(
    active: &ActiveSet,
    index: SectionIndex,
    expand_multiple: bool,
    on_change: Option<&ChangeFn>,
) -> ActiveSet {
    let next = active.toggled(index, expand_multiple);
    log::debug!(
        "[accordion] toggle section {index}: {:?} -> {:?}",
        active.as_slice(),
        next.as_slice()
    );

    match on_change {
        Some(on_change) => on_change(next.clone()),
        None => log::trace!("[accordion] no on_change, toggle result dropped"),
    }

    next
}

/// A vertical list of sections with expandable content.
pub struct Accordion<S> {
    options: ControllerOptions<S>,
    animator_options: AnimatorOptions,
    layout: LayoutOptions,
    animator: Arc<dyn Animator>,
}

impl<S: Send + Sync + 'static> Accordion<S> {
    pub fn new(props: AccordionProps<S>) -> Self {
        let Partitioned {
            controller,
            animator,
            layout,
        } = props.partition();

        Self {
            options: controller,
            animator_options: animator,
            layout,
            animator: Arc::new(Collapsible),
        }
    }

    /// Replace the collapsible-region primitive.
    pub fn with_animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Arc::new(animator);
        self
    }

    pub fn section_count(&self) -> usize {
        self.options.sections.len()
    }

    pub fn active_sections(&self) -> &ActiveSet {
        &self.options.active_sections
    }

    pub fn animator_options(&self) -> &AnimatorOptions {
        &self.animator_options
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout
    }

    pub fn is_disabled(&self, index: SectionIndex) -> bool {
        self.options.disabled.contains(index)
    }

    pub fn is_expanded(&self, index: SectionIndex) -> bool {
        self.options.active_sections.contains(index)
    }

    /// Compute the active set that results from toggling `index` and pass it
    /// to `on_change`.
    ///
    /// Does not check whether `index` is disabled; presses are filtered
    /// before they get here.
    pub fn toggle(&self, index: SectionIndex) -> ActiveSet {
        deliver_toggle(
            &self.options.active_sections,
            index,
            self.options.expand_multiple,
            self.options.on_change.as_ref(),
        )
    }

    /// Check the supplied active set against the section list and mode.
    pub fn violations(&self) -> Vec<ContractViolation> {
        let section_count = self.section_count();
        let active = &self.options.active_sections;
        let mut seen = BTreeSet::new();
        let mut violations = Vec::new();

        for index in active.iter() {
            if index >= section_count {
                violations.push(ContractViolation::IndexOutOfRange {
                    index,
                    section_count,
                });
            }
            if !seen.insert(index) {
                violations.push(ContractViolation::DuplicateIndex(index));
            }
        }

        if !self.options.expand_multiple && active.len() > 1 {
            violations.push(ContractViolation::MultipleActiveInSingleMode {
                count: active.len(),
            });
        }

        violations
    }

    /// Build the render tree and register its handlers.
    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        for violation in self.violations() {
            log::warn!("[accordion] {violation}");
        }

        let sections = (0..self.section_count()).map(|index| self.build_section(index, registry));

        Element::col()
            .id(&self.layout.test_id)
            .style(self.options.container_style.clone())
            .pointer_events(self.layout.pointer_events)
            .children(sections)
    }

    fn build_section(&self, index: SectionIndex, registry: &HandlerRegistry) -> Element {
        let options = &self.options;
        let base = &self.layout.test_id;
        let disabled = self.is_disabled(index);
        let expanded = self.is_expanded(index);
        let cx = SectionContext {
            section: &options.sections[index],
            index,
            expanded,
            sections: &options.sections,
            disabled,
        };

        let mut children = Vec::with_capacity(4);

        if let Some(render_title) = &options.render_section_title {
            children.push(render_title(&cx));
        }

        if options.expand_from_bottom {
            children.push(self.build_content(&cx, registry));
        }

        children.push(self.build_header(&cx, registry));

        if !options.expand_from_bottom {
            children.push(self.build_content(&cx, registry));
        }

        if let Some(render_footer) = &options.render_footer {
            children.push(render_footer(&cx));
        }

        Element::col()
            .id(format!("{base}-section-{index}"))
            .style(options.section_container_style.clone())
            .data("expanded", expanded.to_string())
            .data("disabled", disabled.to_string())
            .children(children)
    }

    fn build_header(&self, cx: &SectionContext<'_, S>, registry: &HandlerRegistry) -> Element {
        let options = &self.options;
        let index = cx.index;
        let disabled = cx.disabled;

        let mut extra = options.touchable_props.clone();
        let caller_underlay = extra.remove(UNDERLAY_PROP);

        // Disabled headers never show press feedback.
        let underlay_color = if disabled {
            Color::Transparent
        } else {
            match caller_underlay.map(|value| value.parse::<Color>()) {
                Some(Ok(color)) => color,
                Some(Err(err)) => {
                    log::warn!("[accordion] ignoring touchable {UNDERLAY_PROP}: {err}");
                    options.underlay_color.clone()
                }
                None => options.underlay_color.clone(),
            }
        };

        let active = options.active_sections.clone();
        let expand_multiple = options.expand_multiple;
        let on_change = options.on_change.clone();
        let on_press: Handler = Arc::new(move || {
            if disabled {
                log::trace!("[accordion] press on disabled section {index} ignored");
                return;
            }
            deliver_toggle(&active, index, expand_multiple, on_change.as_ref());
        });

        let props = TouchableProps {
            id: format!("{}-header-{index}", self.layout.test_id),
            disabled,
            on_press,
            underlay_color,
            extra,
        };

        options
            .touchable
            .build(props, (options.render_header)(cx), registry)
    }

    fn build_content(&self, cx: &SectionContext<'_, S>, registry: &HandlerRegistry) -> Element {
        let options = &self.options;
        let index = cx.index;

        let sections = Arc::clone(&options.sections);
        let on_animation_end = options.on_animation_end.clone();
        let on_end: Handler = Arc::new(move || {
            if let (Some(callback), Some(section)) = (&on_animation_end, sections.get(index)) {
                callback(section, index);
            }
        });

        let props = CollapsibleProps {
            id: format!("{}-content-{index}", self.layout.test_id),
            collapsed: !cx.expanded,
            options: self.animator_options.clone(),
            on_animation_end: on_end,
        };

        self.animator
            .build(props, (options.render_content)(cx), registry)
    }
}

impl<S> std::fmt::Debug for Accordion<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accordion")
            .field("section_count", &self.options.sections.len())
            .field("active_sections", &self.options.active_sections)
            .field("animator_options", &self.animator_options)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
