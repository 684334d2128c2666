use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::TransitionConfig;
use crate::types::{Justify, PointerEvents, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the render tree handed to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout
    pub height: Size,
    pub justify: Justify,
    /// Clip children to this element's box.
    pub clip: bool,

    // Visual
    pub style: Style,
    /// Style painted while a press is in progress.
    pub style_pressed: Option<Style>,
    /// Transition applied when `height` changes.
    pub height_transition: Option<TransitionConfig>,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,
    pub pointer_events: PointerEvents,

    // Custom data storage (handler hints, pass-through props)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            height: Size::Auto,
            justify: Justify::Start,
            clip: false,
            style: Style::default(),
            style_pressed: None,
            height_transition: None,
            clickable: false,
            focusable: false,
            disabled: false,
            pointer_events: PointerEvents::Auto,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            content: Content::Children(Vec::new()),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// An element that renders nothing.
    pub fn empty() -> Self {
        Self {
            id: generate_id("empty"),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_pressed(mut self, style: Style) -> Self {
        self.style_pressed = Some(style);
        self
    }

    pub fn height_transition(mut self, transition: TransitionConfig) -> Self {
        self.height_transition = Some(transition);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = pointer_events;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        let children: Vec<Element> = children.into_iter().collect();
        match &mut self.content {
            Content::Children(existing) => existing.extend(children),
            _ => self.content = Content::Children(children),
        }
        self
    }

    /// Direct children, empty for text and empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Indented one-line-per-node dump of the tree, for logs and demos.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}{}", "", self.id, indent = depth * 2);
        if let Content::Text(text) = &self.content {
            let _ = write!(out, " {text:?}");
        }
        if let Size::Fixed(h) = self.height {
            let _ = write!(out, " h={h}");
        }
        if self.disabled {
            out.push_str(" [disabled]");
        }
        out.push('\n');

        for child in self.child_elements() {
            child.write_outline(out, depth + 1);
        }
    }
}
