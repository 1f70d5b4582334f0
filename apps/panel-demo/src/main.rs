mod rows;

use rows::{LogLine, LogRow, LogRowFactory, ROW_HEIGHT};
use stratum_foundation::{
    CleanUpVirtualizedItem, ContainerGenerator, ItemSource, PanelError,
    RecyclingContainerGenerator, Size, StackPanelConfig, VecItemSource, VirtualizingStackPanel,
};

type Panel = VirtualizingStackPanel<
    VecItemSource<LogLine>,
    RecyclingContainerGenerator<LogLine, LogRowFactory>,
>;

const WINDOW: Size = Size::new(72.0, ROW_HEIGHT * 8.0);

fn main() -> Result<(), PanelError> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let lines = (0..500u32).map(LogLine::generated).collect();
    let mut panel: Panel = VirtualizingStackPanel::with_config(
        VecItemSource::new(lines),
        RecyclingContainerGenerator::new(LogRowFactory::default()),
        StackPanelConfig::vertical(),
    );
    panel.add_scroll_owner(Box::new(|| log::debug!("scroll geometry changed")));
    panel.set_clean_up_handler(Box::new(|args: &mut CleanUpVirtualizedItem<'_, LogRow>| {
        // Early error rows keep their container while scrolled out of view.
        args.cancel = args.container.is_error() && args.item_index < 5;
    }));

    render(&mut panel, "initial");

    panel.line_down();
    panel.line_down();
    render(&mut panel, "two lines down");

    panel.mouse_wheel_down();
    render(&mut panel, "one wheel notch down");

    panel.page_down();
    render(&mut panel, "one page down");

    let change = panel
        .items_mut()
        .insert_many(0, (0..3).map(|n| LogLine::new(format!("late arrival {n}"))));
    panel.on_items_changed(change);
    render(&mut panel, "three lines inserted at the top");

    let change = panel.items_mut().remove_range(0..10);
    panel.on_items_changed(change);
    render(&mut panel, "first ten lines removed");

    let target = panel.children().nth(3).map(|child| child.id());
    if let Some(target) = target {
        let exposed = panel.make_visible(target, stratum_foundation::Rect::ZERO)?;
        println!("exposed {target} at {exposed:?}");
    }

    panel.set_vertical_offset(f32::MAX);
    render(&mut panel, "scrolled to the end");

    let change = panel.items_mut().reset(Vec::new());
    panel.on_items_changed(change);
    render(&mut panel, "cleared");

    Ok(())
}

fn render(panel: &mut Panel, caption: &str) {
    panel.measure(WINDOW);
    panel.arrange(WINDOW);

    println!(
        "-- {caption}: offset {} of {} ({} visible)",
        panel.vertical_offset(),
        panel.extent_height(),
        panel.viewport_height()
    );
    for child in panel.children() {
        println!("{}", child.container().line());
    }

    let stats = panel.generator().stats();
    log::info!(
        "{} items, {} realized, {} pooled, {} created, {} reused",
        panel.items().item_count(),
        stats.items_in_use,
        stats.items_in_pool,
        stats.total_created,
        stats.reuse_count
    );
}

