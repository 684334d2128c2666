use std::time::Duration;

use accordion::options::CONTROLLER_KEYS;
use accordion::{
    AccordionProps, ActiveSet, Align, AnimatorOptions, Color, Destination, Disabled, Easing,
    Element, LayoutOptions, OptionError, PointerEvents, route_option,
};

fn props() -> AccordionProps<u32> {
    AccordionProps::new(
        vec![1, 2, 3],
        |cx| Element::text(cx.section.to_string()),
        |_| Element::empty(),
    )
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn test_shared_style_key_goes_to_animator() {
    assert!(AnimatorOptions::KEYS.contains(&"style"));
    assert!(LayoutOptions::KEYS.contains(&"style"));
    assert_eq!(route_option("style"), Some(Destination::Animator));
}

#[test]
fn test_collaborator_keys_route_to_their_owner() {
    assert_eq!(route_option("duration"), Some(Destination::Animator));
    assert_eq!(route_option("easing"), Some(Destination::Animator));
    assert_eq!(route_option("align"), Some(Destination::Animator));
    assert_eq!(route_option("testID"), Some(Destination::Layout));
    assert_eq!(route_option("pointerEvents"), Some(Destination::Layout));
}

#[test]
fn test_controller_keys_route_to_controller() {
    for key in CONTROLLER_KEYS {
        assert_eq!(route_option(key), Some(Destination::Controller), "{key}");
    }
}

#[test]
fn test_unknown_keys_route_nowhere() {
    assert_eq!(route_option("expandMultipel"), None);
    assert_eq!(route_option(""), None);
}

#[test]
fn test_every_key_has_exactly_one_destination() {
    let all = AnimatorOptions::KEYS
        .iter()
        .chain(LayoutOptions::KEYS)
        .chain(CONTROLLER_KEYS);

    for key in all {
        let destinations = [
            AnimatorOptions::KEYS.contains(key),
            LayoutOptions::KEYS.contains(key) && !AnimatorOptions::KEYS.contains(key),
            CONTROLLER_KEYS.contains(key),
        ];
        let count = destinations.iter().filter(|hit| **hit).count();
        assert_eq!(count, 1, "{key} routes to {count} destinations");
    }
}

// =============================================================================
// Partitioning
// =============================================================================

#[test]
fn test_defaults_partition_to_collaborator_defaults() {
    let parts = props().partition();

    assert_eq!(parts.animator, AnimatorOptions::default());
    assert_eq!(parts.animator.duration, Duration::from_millis(300));
    assert_eq!(parts.animator.easing, Easing::EaseOutCubic);
    assert_eq!(parts.layout, LayoutOptions::default());
    assert_eq!(parts.layout.test_id, "accordion");

    let controller = parts.controller;
    assert_eq!(controller.underlay_color, Color::BLACK);
    assert_eq!(controller.disabled, Disabled::None);
    assert!(!controller.expand_from_bottom);
    assert!(!controller.expand_multiple);
    assert!(controller.on_change.is_none());
    assert!(controller.render_footer.is_none());
    assert!(controller.render_section_title.is_none());
    assert!(controller.on_animation_end.is_none());
    assert!(controller.section_container_style.is_empty());
}

#[test]
fn test_builder_values_land_in_the_right_subset() {
    let parts = props()
        .align(Align::Bottom)
        .duration(Duration::from_millis(120))
        .easing(Easing::Linear)
        .collapsed_height(2)
        .render_children_collapsed(false)
        .enable_pointer_events(true)
        .test_id("menu")
        .pointer_events(PointerEvents::BoxNone)
        .expand_multiple(true)
        .partition();

    assert_eq!(
        parts.animator,
        AnimatorOptions {
            align: Align::Bottom,
            duration: Duration::from_millis(120),
            easing: Easing::Linear,
            collapsed_height: 2,
            render_children_collapsed: false,
            enable_pointer_events: true,
            style: None,
        }
    );
    assert_eq!(
        parts.layout,
        LayoutOptions {
            test_id: "menu".into(),
            pointer_events: PointerEvents::BoxNone,
        }
    );
    assert!(parts.controller.expand_multiple);
    assert_eq!(parts.controller.sections.len(), 3);
}

// =============================================================================
// String Options
// =============================================================================

#[test]
fn test_set_option_parses_values() {
    let mut props = props();
    props.set_option("duration", "150").unwrap();
    props.set_option("easing", "ease-in-out").unwrap();
    props.set_option("align", "center").unwrap();
    props.set_option("underlayColor", "#336699").unwrap();
    props.set_option("disabled", "0, 2").unwrap();
    props.set_option("activeSections", "1").unwrap();
    props.set_option("expandMultiple", "true").unwrap();
    props.set_option("expandFromBottom", "true").unwrap();
    props.set_option("collapsedHeight", "3").unwrap();
    props.set_option("testID", "faq").unwrap();
    props.set_option("pointerEvents", "box-only").unwrap();

    let parts = props.partition();
    assert_eq!(parts.animator.duration, Duration::from_millis(150));
    assert_eq!(parts.animator.easing, Easing::EaseInOut);
    assert_eq!(parts.animator.align, Align::Center);
    assert_eq!(parts.animator.collapsed_height, 3);
    assert_eq!(parts.layout.test_id, "faq");
    assert_eq!(parts.layout.pointer_events, PointerEvents::BoxOnly);
    assert_eq!(parts.controller.underlay_color, Color::rgb(0x33, 0x66, 0x99));
    assert_eq!(parts.controller.disabled, Disabled::from([0, 2]));
    assert_eq!(parts.controller.active_sections, ActiveSet::from([1]));
    assert!(parts.controller.expand_multiple);
    assert!(parts.controller.expand_from_bottom);
}

#[test]
fn test_set_option_disabled_boolean() {
    let mut props = props();
    props.set_option("disabled", "true").unwrap();
    assert_eq!(props.disabled, Disabled::All);
}

#[test]
fn test_set_option_unrecognized_disabled_shape_enables_everything() {
    let mut props = props().disabled(true);
    assert_eq!(props.set_option("disabled", "sometimes"), Ok(()));
    assert_eq!(props.disabled, Disabled::None);
}

#[test]
fn test_set_option_ignores_unknown_names() {
    let mut props = props();
    assert_eq!(props.set_option("expandMultipel", "true"), Ok(()));
    assert!(!props.expand_multiple);
}

#[test]
fn test_set_option_rejects_malformed_values() {
    let mut props = props();

    assert!(matches!(
        props.set_option("duration", "fast"),
        Err(OptionError::InvalidValue {
            option: "duration",
            ..
        })
    ));
    assert!(matches!(
        props.set_option("align", "left"),
        Err(OptionError::UnknownKeyword { option: "align", .. })
    ));
    assert!(matches!(
        props.set_option("underlayColor", "blurple"),
        Err(OptionError::InvalidColor(_))
    ));
    assert!(matches!(
        props.set_option("expandMultiple", "yes"),
        Err(OptionError::InvalidValue { .. })
    ));

    assert_eq!(props.duration, Duration::from_millis(300));
    assert_eq!(props.align, Align::Top);
}

#[test]
fn test_set_option_duration_accepts_fractional_millis() {
    let mut props = props();
    props.set_option("duration", "250.5").unwrap();
    assert!((props.duration.as_secs_f64() - 0.2505).abs() < 1e-9);

    props.set_option("duration", "0").unwrap();
    assert_eq!(props.duration, Duration::ZERO);
}

#[test]
fn test_set_option_duration_rejects_negative_and_non_finite() {
    let mut props = props();
    for value in ["-1", "NaN", "inf"] {
        assert!(
            matches!(
                props.set_option("duration", value),
                Err(OptionError::InvalidValue {
                    option: "duration",
                    ..
                })
            ),
            "{value}"
        );
    }
    assert_eq!(props.duration, Duration::from_millis(300));
}

#[test]
fn test_set_option_rejects_callbacks_and_styles() {
    let mut props = props();
    for name in [
        "onChange",
        "renderHeader",
        "sections",
        "style",
        "touchableComponent",
        "touchableProps",
    ] {
        assert_eq!(
            props.set_option(name, "x"),
            Err(OptionError::NotStringSettable(name.to_string())),
        );
    }
}
