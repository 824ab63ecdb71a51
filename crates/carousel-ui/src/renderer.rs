//! Capabilities the host supplies for item content.

use carousel_core::Size;

/// Produces the node for one data element.
///
/// Any `FnMut(usize, &T) -> N` closure is a renderer.
pub trait ItemRenderer<T> {
    type Node;

    fn render(&mut self, index: usize, item: &T) -> Self::Node;
}

impl<T, N, F> ItemRenderer<T> for F
where
    F: FnMut(usize, &T) -> N,
{
    type Node = N;

    fn render(&mut self, index: usize, item: &T) -> N {
        self(index, item)
    }
}

/// Reports the laid-out size of a rendered node.
pub trait NodeMeasurer<N> {
    fn measure(&self, node: &N) -> Size;
}

impl<N, F> NodeMeasurer<N> for F
where
    F: Fn(&N) -> Size,
{
    fn measure(&self, node: &N) -> Size {
        self(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_renderers_and_measurers() {
        let mut renderer = |index: usize, label: &&str| format!("{index}:{label}");
        let node = renderer.render(2, &"c");
        assert_eq!(node, "2:c");

        let measurer = |node: &String| Size::new(node.len() as f32 * 10.0, 20.0);
        assert_eq!(measurer.measure(&node), Size::new(30.0, 20.0));
    }
}
