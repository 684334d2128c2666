use std::fs::File;
use std::sync::{Arc, Mutex};

use accordion::{
    Accordion, AccordionProps, ActiveSet, Element, HandlerRegistry, ON_ANIMATION_END, ON_PRESS,
    Style,
};
use simplelog::{Config, LevelFilter, WriteLogger};

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 3] = [
    Faq {
        question: "What is this?",
        answer: "A list of sections that expand when their header is pressed.",
    },
    Faq {
        question: "Can several sections be open?",
        answer: "Only with expandMultiple.",
    },
    Faq {
        question: "Why is this one locked?",
        answer: "It is disabled, so presses are ignored.",
    },
];

fn faq_accordion(active: ActiveSet, state: Arc<Mutex<ActiveSet>>) -> Accordion<Faq> {
    let props = AccordionProps::<Faq>::new(
        FAQS,
        |cx| {
            let marker = if cx.expanded { "▼" } else { "▶" };
            Element::text(format!("{marker} {}", cx.section.question))
        },
        |cx| Element::text(cx.section.answer),
    )
    .render_section_title(|cx| Element::text(format!("#{}", cx.index + 1)))
    .render_footer(|cx| {
        if cx.disabled {
            Element::text("(locked)").style(Style::new().dim())
        } else {
            Element::empty()
        }
    })
    .active_sections(active)
    .disabled([2])
    .test_id("faq")
    .on_change(move |next| {
        if let Ok(mut current) = state.lock() {
            *current = next;
        }
    })
    .on_animation_end(|faq, index| log::info!("section {index} settled: {}", faq.question));

    Accordion::new(props)
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("accordion.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let state = Arc::new(Mutex::new(ActiveSet::new()));
    let registry = HandlerRegistry::new();

    // Each press re-renders from the state the owner holds.
    for press in [0, 1, 2, 1] {
        let active = state.lock().map(|s| s.clone()).unwrap_or_default();
        registry.clear();
        let root = faq_accordion(active, Arc::clone(&state)).build(&registry);

        let header = format!("faq-header-{press}");
        let handled = registry.dispatch(&header, ON_PRESS);
        registry.dispatch(&format!("faq-content-{press}"), ON_ANIMATION_END);

        println!("{}", root.outline());
        println!("pressed {header} (handled: {handled})");
    }

    let active = state.lock().map(|s| s.clone()).unwrap_or_default();
    println!("final active sections: {:?}", active.as_slice());

    Ok(())
}
