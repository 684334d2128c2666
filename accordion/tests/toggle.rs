use std::sync::{Arc, Mutex};

use accordion::{
    Accordion, AccordionProps, ActiveSet, Disabled, Element, HandlerRegistry, ON_PRESS, Touchable,
    TouchableProps,
};

fn props(count: usize) -> AccordionProps<String> {
    let sections: Vec<String> = (0..count).map(|i| format!("Section {i}")).collect();
    AccordionProps::new(
        sections,
        |cx| Element::text(cx.section.clone()),
        |cx| Element::text(format!("{} body", cx.section)),
    )
}

/// Attach an `on_change` that records every delivered active set.
fn recording(props: AccordionProps<String>) -> (AccordionProps<String>, Arc<Mutex<Vec<ActiveSet>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let props = props.on_change(move |next| sink.lock().unwrap().push(next));
    (props, log)
}

/// A pressable that wires `on_press` whether or not the header is disabled.
struct AlwaysPressable;

impl Touchable for AlwaysPressable {
    fn build(&self, props: TouchableProps, child: Element, registry: &HandlerRegistry) -> Element {
        registry.register(&props.id, ON_PRESS, props.on_press);
        Element::box_().id(&props.id).child(child)
    }
}

fn header_id(index: usize) -> String {
    format!("accordion-header-{index}")
}

// =============================================================================
// Toggle Semantics
// =============================================================================

#[test]
fn test_single_mode_replaces_active_section() {
    let (props, log) = recording(props(3).active_sections([1]));
    let accordion = Accordion::new(props);

    assert_eq!(accordion.toggle(2), ActiveSet::from([2]));
    assert_eq!(accordion.toggle(1), ActiveSet::new());

    let delivered = log.lock().unwrap();
    assert_eq!(*delivered, vec![ActiveSet::from([2]), ActiveSet::new()]);
}

#[test]
fn test_multiple_mode_appends_without_sorting() {
    let (props, log) = recording(props(3).expand_multiple(true).active_sections([0, 2]));
    let accordion = Accordion::new(props);

    accordion.toggle(1);

    assert_eq!(*log.lock().unwrap(), vec![ActiveSet::from([0, 2, 1])]);
}

#[test]
fn test_active_section_is_removed_in_both_modes() {
    for expand_multiple in [false, true] {
        let active = ActiveSet::from([2, 0]);
        assert_eq!(
            active.toggled(2, expand_multiple),
            ActiveSet::from([0]),
            "expand_multiple = {expand_multiple}"
        );
    }
}

#[test]
fn test_toggle_results_never_hold_duplicates() {
    let mut active = ActiveSet::new();
    for index in [0, 1, 1, 2, 0, 2, 2, 3] {
        active = active.toggled(index, true);
        let mut seen: Vec<usize> = active.iter().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), active.len());
    }
}

#[test]
fn test_single_mode_never_exceeds_one_active() {
    let mut active = ActiveSet::new();
    for index in [0, 1, 1, 2, 0, 3] {
        active = active.toggled(index, false);
        assert!(active.len() <= 1);
    }
}

#[test]
fn test_toggle_does_not_touch_supplied_active_set() {
    let accordion = Accordion::new(props(3).active_sections([0]));

    let next = accordion.toggle(1);

    assert_eq!(next, ActiveSet::from([1]));
    assert_eq!(accordion.active_sections(), &ActiveSet::from([0]));
}

#[test]
fn test_toggle_without_on_change_is_harmless() {
    let accordion = Accordion::new(props(3));

    assert_eq!(accordion.toggle(0), ActiveSet::from([0]));

    let registry = HandlerRegistry::new();
    accordion.build(&registry);
    assert!(registry.dispatch(&header_id(1), ON_PRESS));
}

// =============================================================================
// Disabled Classification
// =============================================================================

#[test]
fn test_disabled_all_covers_every_section() {
    let accordion = Accordion::new(props(4).disabled(true));
    assert!((0..4).all(|i| accordion.is_disabled(i)));
}

#[test]
fn test_disabled_set_covers_exactly_its_members() {
    let accordion = Accordion::new(props(4).disabled([1, 3]));
    let disabled: Vec<bool> = (0..4).map(|i| accordion.is_disabled(i)).collect();
    assert_eq!(disabled, vec![false, true, false, true]);
}

#[test]
fn test_disabled_false_covers_nothing() {
    let accordion = Accordion::new(props(2).disabled(Disabled::from(false)));
    assert!(!accordion.is_disabled(0));
    assert!(!accordion.is_disabled(1));
}

// =============================================================================
// Presses
// =============================================================================

#[test]
fn test_press_delivers_toggle_result() {
    let (props, log) = recording(props(3).active_sections([1]));
    let accordion = Accordion::new(props);
    let registry = HandlerRegistry::new();
    accordion.build(&registry);

    assert!(registry.dispatch(&header_id(2), ON_PRESS));

    assert_eq!(*log.lock().unwrap(), vec![ActiveSet::from([2])]);
}

#[test]
fn test_press_on_disabled_section_never_calls_on_change() {
    let (props, log) = recording(props(3).disabled([0]));
    let accordion = Accordion::new(props);
    let registry = HandlerRegistry::new();
    accordion.build(&registry);

    assert!(!registry.dispatch(&header_id(0), ON_PRESS));

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_all_disabled_registers_no_press_handlers() {
    let (props, log) = recording(props(3).disabled(true));
    let accordion = Accordion::new(props);
    let registry = HandlerRegistry::new();
    accordion.build(&registry);

    for index in 0..3 {
        assert!(!registry.dispatch(&header_id(index), ON_PRESS));
    }
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_disabled_press_is_ignored_even_when_the_pressable_fires() {
    let (props, log) = recording(props(3).disabled([0]).touchable(AlwaysPressable));
    let accordion = Accordion::new(props);
    let registry = HandlerRegistry::new();
    accordion.build(&registry);

    assert!(registry.dispatch(&header_id(0), ON_PRESS));
    assert!(log.lock().unwrap().is_empty());

    assert!(registry.dispatch(&header_id(1), ON_PRESS));
    assert_eq!(*log.lock().unwrap(), vec![ActiveSet::from([1])]);
}

#[test]
fn test_externally_active_disabled_section_can_still_render_expanded() {
    let accordion = Accordion::new(props(2).disabled([0]).active_sections([0]));
    assert!(accordion.is_expanded(0));
    assert!(accordion.violations().is_empty());
}

#[test]
fn test_presses_use_the_render_snapshot() {
    // The owner never re-rendered, so both presses start from [0].
    let (props, log) = recording(props(3).active_sections([0]));
    let accordion = Accordion::new(props);
    let registry = HandlerRegistry::new();
    accordion.build(&registry);

    registry.dispatch(&header_id(1), ON_PRESS);
    registry.dispatch(&header_id(1), ON_PRESS);

    assert_eq!(
        *log.lock().unwrap(),
        vec![ActiveSet::from([1]), ActiveSet::from([1])]
    );
}

#[test]
fn test_owner_loop_closes_over_renders() {
    let state = Arc::new(Mutex::new(ActiveSet::new()));
    let registry = HandlerRegistry::new();

    for press in [0, 1, 1] {
        let sink = Arc::clone(&state);
        let current = state.lock().unwrap().clone();
        let accordion = Accordion::new(
            props(3)
                .expand_multiple(true)
                .active_sections(current)
                .on_change(move |next| *sink.lock().unwrap() = next),
        );

        registry.clear();
        accordion.build(&registry);
        registry.dispatch(&header_id(press), ON_PRESS);
    }

    assert_eq!(*state.lock().unwrap(), ActiveSet::from([0]));
}
