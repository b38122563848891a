//! # Views
//!
//! A deliberately small view layer: views render into a [`Node`] tree, and may
//! bail out of a render with an [`Interrupt`] instead.
//!
//! The [`RenderContext`] is threaded through every render. Suspense boundaries
//! record the suspenders they caught there, so the driver knows what to await
//! before the next pass.

use crate::framework::error::Interrupt;
use crate::framework::resource::Suspender;
use std::fmt;

/// Rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element(tag: &'static str, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns `true` if any text node in the tree contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Node::Text(text) => text.contains(needle),
            Node::Element { children, .. } => {
                children.iter().any(|child| child.contains_text(needle))
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => {
                for c in text.chars() {
                    match c {
                        '<' => f.write_str("&lt;")?,
                        '>' => f.write_str("&gt;")?,
                        '&' => f.write_str("&amp;")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                Ok(())
            }
            Node::Element { tag, children } => {
                write!(f, "<{}>", tag)?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", tag)
            }
        }
    }
}

/// Per-pass state shared by every view in the tree.
#[derive(Debug, Default)]
pub struct RenderContext {
    suspended: Vec<Suspender>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a suspender caught by a boundary. The same operation is recorded once.
    pub fn suspend(&mut self, suspender: Suspender) {
        if !self.suspended.iter().any(|s| s.ptr_eq(&suspender)) {
            self.suspended.push(suspender);
        }
    }

    pub fn is_suspended(&self) -> bool {
        !self.suspended.is_empty()
    }

    pub fn take_suspended(&mut self) -> Vec<Suspender> {
        std::mem::take(&mut self.suspended)
    }
}

/// Something that renders.
///
/// Views are stateful and long-lived: the driver calls `render` on the same
/// instance every pass, so hooks keep their state in fields.
pub trait View {
    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, Interrupt>;
}

impl View for Node {
    fn render(&mut self, _cx: &mut RenderContext) -> Result<Node, Interrupt> {
        Ok(self.clone())
    }
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, Interrupt> {
        (**self).render(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nests_and_escapes() {
        let node = Node::element(
            "div",
            vec![
                Node::element("h1", vec![Node::text("Fish & <Chips>")]),
                Node::element("p", vec![Node::text("body")]),
            ],
        );

        assert_eq!(
            node.to_string(),
            "<div><h1>Fish &amp; &lt;Chips&gt;</h1><p>body</p></div>"
        );
        assert!(node.contains_text("Chips"));
        assert!(!node.contains_text("Loading"));
    }

    #[test]
    fn test_node_renders_itself() {
        let mut node = Node::element("div", vec![Node::text("Loading...")]);
        let mut cx = RenderContext::new();

        assert_eq!(node.render(&mut cx).unwrap(), node);
        assert!(!cx.is_suspended());
    }
}
