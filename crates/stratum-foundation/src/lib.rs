//! Item container generation and virtualized stacking layout for Stratum.
//!
//! # Architecture
//!
//! - [`items`] - the item source contract and collection change events
//! - [`generator`] - maps item indices to realized containers, in a standard
//!   or a recycling strategy
//! - [`virtualizing`] - [`VirtualizingStackPanel`], which realizes only the
//!   containers around the scroll position, lays them out and keeps the
//!   logical scroll state coherent across collection changes
//!
//! # Example
//!
//! ```rust,ignore
//! let items = VecItemSource::new((0..1000).collect::<Vec<u32>>());
//! let generator = RecyclingContainerGenerator::new(RowFactory::default());
//! let mut panel = VirtualizingStackPanel::new(items, generator);
//!
//! panel.measure(Size::new(320.0, 480.0));
//! panel.arrange(Size::new(320.0, 480.0));
//! panel.line_down();
//! ```

pub mod generator;
pub mod items;
pub mod virtualizing;

pub use generator::{
    ContainerFactory, ContainerGenerator, ContainerPool, ContainerPoolPolicy, GeneratorPosition,
    GeneratorStats, Realization, RealizedContainer, RealizedContainers,
    RecyclingContainerGenerator, StandardContainerGenerator, VirtualizationMode,
};
pub use items::{ItemSource, ItemsChanged, VecItemSource};
pub use virtualizing::{
    CleanUpHandler, CleanUpVirtualizedItem, PanelError, ScrollData, StackPanelConfig,
    VirtualizingStackPanel,
};

pub use stratum_core::{CallbackId, ContainerId};
pub use stratum_ui_graphics::{Point, Rect, Size};
pub use stratum_ui_layout::{DirtyPhase, LayoutElement, Orientation, PanelSizing};
