//! Host-facing carousel component.

use std::time::Duration;

use carousel_core::Size;

use crate::config::{CarouselConfig, CarouselStyle, ConfigError, WidthMode};
use crate::culling::VisibleItem;
use crate::engine::{CarouselEngine, EnginePhase, MeasureReport};
use crate::renderer::{ItemRenderer, NodeMeasurer};

/// A node produced for one visible item, with its placement.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<N> {
    pub placement: VisibleItem,
    pub node: N,
}

/// Owns the data, the engine and the item renderer.
pub struct Carousel<T, R>
where
    R: ItemRenderer<T>,
{
    data: Vec<T>,
    renderer: R,
    engine: CarouselEngine,
}

impl<T, R> Carousel<T, R>
where
    R: ItemRenderer<T>,
{
    pub fn new(data: Vec<T>, config: CarouselConfig, renderer: R) -> Result<Self, ConfigError> {
        let engine = CarouselEngine::new(config, data.len())?;
        Ok(Self {
            data,
            renderer,
            engine,
        })
    }

    /// Like [`Carousel::new`] with `style` applied on top of `config`.
    pub fn with_style(
        data: Vec<T>,
        config: CarouselConfig,
        style: &CarouselStyle,
        renderer: R,
    ) -> Result<Self, ConfigError> {
        Self::new(data, style.apply_to(config), renderer)
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine {
        &mut self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.engine.set_item_count(self.data.len());
        if self.data.is_empty() {
            log::debug!("carousel data cleared");
        }
    }

    pub fn selected_item(&self) -> Option<&T> {
        let index = usize::try_from(self.engine.selected_index()).ok()?;
        self.data.get(index)
    }

    pub fn mount(&mut self, now: Duration) {
        self.engine.mount(now);
    }

    pub fn unmount(&mut self) {
        self.engine.unmount();
    }

    /// Reports the container size and, while measuring, renders the first
    /// item off screen to learn the item size.
    pub fn layout<M>(&mut self, container: Size, measurer: &M)
    where
        M: NodeMeasurer<R::Node>,
    {
        self.engine
            .on_geometry_measured(MeasureReport::Container(container));
        if self.engine.phase() != EnginePhase::Measuring {
            return;
        }
        if self.engine.config().item_layout.width != WidthMode::Measured {
            return;
        }
        let Some(first) = self.data.first() else {
            return;
        };
        let node = self.renderer.render(0, first);
        let size = measurer.measure(&node);
        log::debug!("measured first item: {:.1}x{:.1}", size.width, size.height);
        self.engine.on_geometry_measured(MeasureReport::Item(size));
    }

    /// Advances the engine to `now` and renders the visible items.
    pub fn frame(&mut self, now: Duration) -> Vec<RenderedItem<R::Node>> {
        self.engine.advance_frame(now);
        self.render()
    }

    /// Renders the items visible at the current engine state.
    pub fn render(&mut self) -> Vec<RenderedItem<R::Node>> {
        let placements = self.engine.visible_items();
        let mut rendered = Vec::with_capacity(placements.len());
        for placement in placements {
            let Some(item) = self.data.get(placement.data_index) else {
                continue;
            };
            rendered.push(RenderedItem {
                placement,
                node: self.renderer.render(placement.data_index, item),
            });
        }
        rendered
    }
}
