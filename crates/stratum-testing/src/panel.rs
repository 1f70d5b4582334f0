use stratum_foundation::{
    ContainerGenerator, ItemSource, RecyclingContainerGenerator, StackPanelConfig,
    StandardContainerGenerator, VecItemSource, VirtualizingStackPanel,
};
use stratum_ui_graphics::Size;

use crate::container::TestContainerFactory;

pub type RecyclingTestPanel<T> = VirtualizingStackPanel<
    VecItemSource<T>,
    RecyclingContainerGenerator<T, TestContainerFactory<T>>,
>;

pub type StandardTestPanel<T> = VirtualizingStackPanel<
    VecItemSource<T>,
    StandardContainerGenerator<T, TestContainerFactory<T>>,
>;

/// A recycling panel over `items` where every container has size `row`.
pub fn recycling_panel<T: Clone>(
    items: Vec<T>,
    row: Size,
    config: StackPanelConfig,
) -> RecyclingTestPanel<T> {
    VirtualizingStackPanel::with_config(
        VecItemSource::new(items),
        RecyclingContainerGenerator::new(TestContainerFactory::fixed(row)),
        config,
    )
}

/// A standard (non-recycling) panel over `items` where every container has
/// size `row`.
pub fn standard_panel<T: Clone>(
    items: Vec<T>,
    row: Size,
    config: StackPanelConfig,
) -> StandardTestPanel<T> {
    VirtualizingStackPanel::with_config(
        VecItemSource::new(items),
        StandardContainerGenerator::new(TestContainerFactory::fixed(row)),
        config,
    )
}

/// Runs measure then arrange with the same size, as a host would.
pub fn layout<S, G>(panel: &mut VirtualizingStackPanel<S, G>, size: Size) -> Size
where
    S: ItemSource,
    G: ContainerGenerator<S::Item>,
{
    panel.measure(size);
    panel.arrange(size)
}

/// Item indices of the realized children, in child order.
pub fn realized_items<S, G>(panel: &VirtualizingStackPanel<S, G>) -> Vec<usize>
where
    S: ItemSource,
    G: ContainerGenerator<S::Item>,
{
    panel.children().map(|child| child.item_index()).collect()
}
