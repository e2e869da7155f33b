use std::collections::VecDeque;

/// Where a template lands relative to the selected container
///
/// Mirrors the positions accepted by `insertAdjacentHTML`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Immediately before the container's opening tag
    BeforeBegin,
    /// Before the container's first child
    AfterBegin,
    /// After the container's last child
    BeforeEnd,
    /// Immediately after the container's closing tag
    AfterEnd,
}

#[derive(Debug, Default)]
struct Container {
    before: Vec<String>,
    start: VecDeque<String>,
    end: Vec<String>,
    after: VecDeque<String>,
}

impl Container {
    fn insert(&mut self, position: InsertPosition, template: String) {
        match position {
            InsertPosition::BeforeBegin => self.before.push(template),
            InsertPosition::AfterBegin => self.start.push_front(template),
            InsertPosition::BeforeEnd => self.end.push(template),
            InsertPosition::AfterEnd => self.after.push_front(template),
        }
    }

    fn write(&self, out: &mut String, tag: &str, nested: &str) {
        self.before.iter().for_each(|t| out.push_str(t));
        out.push('<');
        out.push_str(tag);
        out.push('>');
        self.start.iter().for_each(|t| out.push_str(t));
        out.push_str(nested);
        self.end.iter().for_each(|t| out.push_str(t));
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        self.after.iter().for_each(|t| out.push_str(t));
    }
}

/// An HTML page with two insertion points: `body` and the `main` element
/// nested at its center
///
/// Content inserted at the start of `body` lands before `main`, content
/// appended to `body` lands after it.
#[derive(Debug)]
pub struct Document {
    title: String,
    body: Container,
    main: Container,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Container::default(),
            main: Container::default(),
        }
    }

    fn container_mut(&mut self, selector: &str) -> Option<&mut Container> {
        match selector {
            "body" => Some(&mut self.body),
            "main" => Some(&mut self.main),
            _ => None,
        }
    }

    /// Serializes the whole page
    pub fn to_html(&self) -> String {
        let mut main = String::new();
        self.main.write(&mut main, "main", "");

        let mut out = String::from("<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\">");
        out.push_str("<title>");
        out.push_str(&escape_html(&self.title));
        out.push_str("</title></head>");
        self.body.write(&mut out, "body", &main);
        out.push_str("</html>");
        out
    }
}

/// Inserts `template` into the container matching `selector`
///
/// Returns `false` when the document has no such container.
///
/// # Example
/// ```
/// use productos_api::web::{render, Document, InsertPosition};
///
/// let mut doc = Document::new("Productos");
/// assert!(render(&mut doc, "main", InsertPosition::BeforeEnd, "<p>hola</p>"));
/// assert!(!render(&mut doc, "aside", InsertPosition::BeforeEnd, "<p>no</p>"));
/// assert!(doc.to_html().contains("<main><p>hola</p></main>"));
/// ```
pub fn render(
    document: &mut Document,
    selector: &str,
    position: InsertPosition,
    template: impl Into<String>,
) -> bool {
    match document.container_mut(selector) {
        Some(container) => {
            container.insert(position, template.into());
            true
        }
        None => {
            tracing::warn!(selector, "Render target not found");
            false
        }
    }
}

/// Escapes text for use inside element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
