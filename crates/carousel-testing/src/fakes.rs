//! Stand-ins for the host's renderer and measurer.

use std::cell::RefCell;

use carousel_core::Size;
use carousel_ui::{ItemRenderer, NodeMeasurer};

/// Node produced by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakeNode {
    pub index: usize,
    pub label: String,
}

/// Renders each element through `Display` and records which indices were
/// rendered.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    rendered: RefCell<Vec<usize>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices rendered since the last call.
    pub fn take_rendered(&self) -> Vec<usize> {
        std::mem::take(&mut *self.rendered.borrow_mut())
    }
}

impl<T: std::fmt::Display> ItemRenderer<T> for RecordingRenderer {
    type Node = FakeNode;

    fn render(&mut self, index: usize, item: &T) -> FakeNode {
        self.rendered.borrow_mut().push(index);
        FakeNode {
            index,
            label: item.to_string(),
        }
    }
}

/// Reports the same size for every node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasurer(pub Size);

impl<N> NodeMeasurer<N> for FixedMeasurer {
    fn measure(&self, _node: &N) -> Size {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_rendered_indices() {
        let mut renderer = RecordingRenderer::new();
        let node = renderer.render(3, &"x");
        assert_eq!(node.label, "x");
        assert_eq!(renderer.take_rendered(), vec![3]);
        assert!(renderer.take_rendered().is_empty());
    }

    #[test]
    fn fixed_measurer_ignores_node() {
        let measurer = FixedMeasurer(Size::new(10.0, 20.0));
        assert_eq!(measurer.measure(&"anything"), Size::new(10.0, 20.0));
    }
}
