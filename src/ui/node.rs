//! src/ui/node.rs
//!
//! Per-frame layout tree. Each child is paired with its own constraint, and
//! panels borrow application state, so a tree lives for one frame only.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Anything that can draw itself into a rectangle.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

pub enum Node<'a> {
    Split {
        direction: Direction,
        slots: Vec<(Constraint, Node<'a>)>,
    },
    Leaf(Box<dyn Panel + 'a>),
}

impl Node<'_> {
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split { direction, slots } => {
                let areas = Layout::default()
                    .direction(*direction)
                    .constraints(slots.iter().map(|(c, _)| *c))
                    .split(area);
                for ((_, child), rect) in slots.iter().zip(areas.iter()) {
                    child.draw(f, *rect);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

/// Children stacked top to bottom.
pub fn column<'a>(slots: Vec<(Constraint, Node<'a>)>) -> Node<'a> {
    Node::Split {
        direction: Direction::Vertical,
        slots,
    }
}

/// Children laid out left to right.
pub fn row<'a>(slots: Vec<(Constraint, Node<'a>)>) -> Node<'a> {
    Node::Split {
        direction: Direction::Horizontal,
        slots,
    }
}

pub fn leaf<'a>(panel: impl Panel + 'a) -> Node<'a> {
    Node::Leaf(Box::new(panel))
}
