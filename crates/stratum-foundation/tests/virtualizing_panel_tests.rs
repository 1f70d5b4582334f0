//! End-to-end behaviour of the virtualizing stack panel driven through the
//! public API, the way a host layout loop and a scroll viewer would.

use stratum_foundation::{
    CleanUpVirtualizedItem, ContainerPoolPolicy, DirtyPhase, ItemsChanged, Orientation, PanelError, PanelSizing,
    RecyclingContainerGenerator, Size, StackPanelConfig, VecItemSource, VirtualizationMode,
    VirtualizingStackPanel,
};
use stratum_testing::prelude::*;
use stratum_testing::RecyclingTestPanel;

const VIEW: Size = Size::new(200.0, 100.0);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rows(count: u32) -> Vec<u32> {
    (0..count).collect()
}

fn vertical_list(count: u32, row: Size) -> RecyclingTestPanel<u32> {
    recycling_panel(rows(count), row, StackPanelConfig::default())
}

fn assert_offset_in_range(offset: f32, viewport: f32, extent: f32) {
    let max = (extent - viewport).max(0.0);
    assert!(
        (0.0..=max).contains(&offset),
        "offset {offset} outside [0, {max}]"
    );
}

#[test]
fn scrolling_through_a_long_list_keeps_a_bounded_window() {
    init_logging();
    let mut panel = vertical_list(10_000, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);

    for _ in 0..200 {
        panel.mouse_wheel_down();
        layout(&mut panel, VIEW);
        assert_eq!(panel.child_count(), 7);
    }

    assert_eq!(panel.vertical_offset(), 600.0);
    assert_eq!(realized_items(&panel), (600..607).collect::<Vec<_>>());

    let stats = panel.stats();
    assert_eq!(stats.items_in_use, 7);
    assert!(stats.total_created <= 7 + 3, "created {}", stats.total_created);
    assert!(stats.reuse_count > 0);
}

#[test]
fn children_are_bound_to_their_items_in_order() {
    init_logging();
    let mut panel = vertical_list(50, Size::new(80.0, 20.0));
    panel.set_vertical_offset(0.0);
    layout(&mut panel, VIEW);
    panel.page_down();
    layout(&mut panel, VIEW);

    let mut previous = None;
    for child in panel.children() {
        assert_eq!(child.container().item, Some(child.item_index() as u32));
        if let Some(previous) = previous {
            assert!(child.item_index() > previous);
        }
        previous = Some(child.item_index());
    }
}

#[test]
fn setters_always_land_inside_the_scrollable_range() {
    init_logging();
    let mut panel = vertical_list(40, Size::new(300.0, 20.0));
    layout(&mut panel, Size::new(120.0, 100.0));

    for offset in [-10.0, 0.0, 3.5, 34.0, 35.0, 36.0, 1e6, f32::NAN] {
        panel.set_vertical_offset(offset);
        assert_offset_in_range(
            panel.vertical_offset(),
            panel.viewport_height(),
            panel.extent_height(),
        );
        panel.set_horizontal_offset(offset);
        assert_offset_in_range(
            panel.horizontal_offset(),
            panel.viewport_width(),
            panel.extent_width(),
        );
    }
}

#[test]
fn identical_offsets_notify_the_scroll_owner_once() {
    init_logging();
    let mut panel = vertical_list(40, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    let owner = ScrollOwnerProbe::attach(&mut panel);

    panel.set_vertical_offset(7.0);
    panel.set_vertical_offset(7.0);
    assert_eq!(owner.count(), 1);

    assert!(panel.remove_scroll_owner(owner.id()));
    panel.set_vertical_offset(8.0);
    assert_eq!(owner.count(), 1);
}

#[test]
fn measure_notifies_only_when_scroll_geometry_changes() {
    init_logging();
    let mut panel = vertical_list(40, Size::new(80.0, 20.0));
    let owner = ScrollOwnerProbe::attach(&mut panel);

    layout(&mut panel, VIEW);
    assert_eq!(owner.count(), 1);
    layout(&mut panel, VIEW);
    assert_eq!(owner.count(), 1);
    layout(&mut panel, Size::new(200.0, 60.0));
    assert_eq!(owner.count(), 2);
}

#[test]
fn offsets_invalidate_the_matching_layout_pass() {
    init_logging();
    let mut panel = vertical_list(40, Size::new(300.0, 20.0));
    layout(&mut panel, Size::new(120.0, 100.0));
    let invalidations = InvalidationProbe::attach(&mut panel);

    panel.line_down();
    panel.line_right();

    assert_eq!(
        invalidations.take(),
        vec![DirtyPhase::MEASURE | DirtyPhase::ARRANGE, DirtyPhase::ARRANGE]
    );
}

#[test]
fn add_before_the_offset_keeps_the_same_items_in_view() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(20.0);
    layout(&mut panel, VIEW);

    let change = panel.items_mut().insert_many(0, [900, 901]);
    panel.on_items_changed(change);
    assert_eq!(panel.vertical_offset(), 22.0);

    layout(&mut panel, VIEW);
    let first = panel.children().next().and_then(|child| child.container().item);
    assert_eq!(first, Some(20));
}

#[test]
fn add_at_the_offset_counts_as_before() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(20.0);

    let change = panel.items_mut().insert(20, 777);
    panel.on_items_changed(change);

    assert_eq!(panel.vertical_offset(), 21.0);
}

#[test]
fn removing_the_window_then_measuring_regenerates_without_stale_containers() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(30.0);
    layout(&mut panel, VIEW);
    assert_eq!(realized_items(&panel), (30..37).collect::<Vec<_>>());

    let change = panel.items_mut().remove_range(30..37);
    panel.on_items_changed(change);
    assert_eq!(panel.child_count(), 0);
    assert!(panel.needs_measure());

    layout(&mut panel, VIEW);
    assert_eq!(realized_items(&panel), (30..37).collect::<Vec<_>>());
    for child in panel.children() {
        let expected = child.item_index() as u32 + 7;
        assert_eq!(child.container().item, Some(expected));
    }
}

#[test]
fn remove_shifts_before_clamping() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 10.0));
    layout(&mut panel, VIEW);
    assert_eq!(panel.extent_height(), 100.0);
    assert_eq!(panel.viewport_height(), 10.0);
    panel.set_vertical_offset(50.0);

    let change = panel.items_mut().remove_range(0..60);
    assert_eq!(change, ItemsChanged::Remove { index: 0, count: 60 });
    panel.on_items_changed(change);

    assert_eq!(panel.vertical_offset(), 0.0);
}

#[test]
fn reset_yields_an_empty_panel() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(40.0);
    layout(&mut panel, VIEW);
    let owner = ScrollOwnerProbe::attach(&mut panel);

    let change = panel.items_mut().reset(rows(3));
    panel.on_items_changed(change);

    assert_eq!(panel.child_count(), 0);
    assert_eq!(panel.scroll_data().extent, Size::ZERO);
    assert_eq!(panel.scroll_data().viewport, Size::ZERO);
    assert_eq!(panel.vertical_offset(), 0.0);
    assert_eq!(panel.horizontal_offset(), 0.0);
    assert_eq!(owner.count(), 1);

    layout(&mut panel, VIEW);
    assert_eq!(realized_items(&panel), vec![0, 1, 2]);
}

#[test]
fn stale_offset_past_the_end_releases_every_child() {
    init_logging();
    let mut panel = vertical_list(30, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(25.0);
    layout(&mut panel, VIEW);

    panel.items_mut().remove_range(0..30);
    // A host that forgets to report the change still ends up with no children.
    layout(&mut panel, VIEW);

    assert_eq!(panel.child_count(), 0);
}

#[test]
fn make_visible_rejects_released_containers() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    let first = panel.children().next().map(|child| child.id());
    let Some(first) = first else {
        panic!("no children realized");
    };

    panel.set_vertical_offset(50.0);
    layout(&mut panel, VIEW);

    let err = panel.make_visible(first, stratum_foundation::Rect::ZERO);
    assert_eq!(err, Err(PanelError::NotAChild { container: first }));
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err(format!("container {first} is not a child of this panel"))
    );
}

#[test]
fn make_visible_scrolls_back_to_an_item_above_the_viewport() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(10.0);
    layout(&mut panel, VIEW);

    let target = panel.container_for_item(10).map(|child| child.id());
    let Some(target) = target else {
        panic!("item 10 is not realized");
    };
    panel.line_down();
    panel.line_down();

    let exposed = panel.make_visible(target, stratum_foundation::Rect::ZERO);
    assert!(exposed.is_ok());
    assert_eq!(panel.vertical_offset(), 10.0);
}

#[test]
fn horizontal_panel_scrolls_items_along_x() {
    init_logging();
    let mut panel = recycling_panel(
        rows(100),
        Size::new(25.0, 40.0),
        StackPanelConfig::horizontal(),
    );
    layout(&mut panel, Size::new(100.0, 40.0));
    assert_eq!(panel.orientation(), Orientation::Horizontal);
    assert_eq!(panel.viewport_width(), 4.0);
    assert_eq!(panel.extent_width(), 100.0);

    panel.line_right();
    panel.page_right();
    assert_eq!(panel.horizontal_offset(), 5.0);
    layout(&mut panel, Size::new(100.0, 40.0));
    assert_eq!(realized_items(&panel), (5..11).collect::<Vec<_>>());

    let lefts: Vec<f32> = panel
        .children()
        .filter_map(|child| child.container().arranged.map(|rect| rect.x))
        .collect();
    assert_eq!(lefts, vec![0.0, 25.0, 50.0, 75.0, 100.0, 125.0]);
}

#[test]
fn cross_axis_constraint_follows_panel_sizing() {
    init_logging();
    let sizing = PanelSizing::new().width(150.0).width_range(0.0, 120.0);
    let config = StackPanelConfig::default().sizing(sizing);
    let mut panel = recycling_panel(rows(10), Size::new(300.0, 20.0), config);
    layout(&mut panel, VIEW);

    for child in panel.children() {
        assert_eq!(
            child.container().last_available,
            Some(Size::new(120.0, f32::INFINITY))
        );
    }
    assert_eq!(panel.extent_width(), 120.0);
}

#[test]
fn variable_row_heights_determine_the_viewport() {
    init_logging();
    let factory = TestContainerFactory::sized_by(|item: &u32| {
        Size::new(80.0, if item % 2 == 0 { 10.0 } else { 30.0 })
    });
    let mut panel = VirtualizingStackPanel::new(
        VecItemSource::new(rows(100)),
        RecyclingContainerGenerator::new(factory),
    );
    layout(&mut panel, VIEW);

    // 10 + 30 + 10 + 30 + 10 = 90, the sixth row overflows.
    assert_eq!(panel.viewport_height(), 5.0);
    assert_eq!(panel.child_count(), 7);
}

#[test]
fn recycling_respects_content_type_and_pool_policy() {
    init_logging();
    let factory = TestContainerFactory::fixed(Size::new(80.0, 20.0))
        .with_content_type(|item: &u32| Some(u64::from(item % 2)));
    let mut panel = VirtualizingStackPanel::new(
        VecItemSource::new(rows(100)),
        RecyclingContainerGenerator::with_policy(factory, ContainerPoolPolicy::new(2)),
    );
    assert_eq!(panel.virtualization_mode(), VirtualizationMode::Recycling);
    layout(&mut panel, VIEW);

    panel.set_vertical_offset(50.0);
    layout(&mut panel, VIEW);

    let stats = panel.stats();
    assert_eq!(stats.items_in_use, 7);
    assert_eq!(stats.items_in_pool, 4);
    for child in panel.children() {
        assert_eq!(child.content_type(), Some(child.item_index() as u64 % 2));
    }
}

#[test]
fn standard_mode_never_pools() {
    init_logging();
    let config = StackPanelConfig::default();
    let mut panel = standard_panel(rows(100), Size::new(80.0, 20.0), config);
    assert_eq!(panel.virtualization_mode(), VirtualizationMode::Standard);
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(50.0);
    layout(&mut panel, VIEW);

    let stats = panel.stats();
    assert_eq!(stats.items_in_pool, 0);
    assert_eq!(stats.total_created, 14);
    assert_eq!(panel.generator().factory().cleared, 7);
}

#[test]
fn cancelled_clean_up_does_not_displace_the_visible_window() {
    init_logging();
    let mut panel = vertical_list(100, Size::new(80.0, 20.0));
    panel.set_clean_up_handler(Box::new(
        |args: &mut CleanUpVirtualizedItem<'_, TestContainer<u32>>| {
            args.cancel = args.item_index == 0;
        },
    ));
    layout(&mut panel, VIEW);
    panel.set_vertical_offset(3.0);
    layout(&mut panel, VIEW);

    let placed: Vec<(usize, f32)> = panel
        .children()
        .filter_map(|child| Some((child.item_index(), child.container().arranged?.y)))
        .collect();
    assert_eq!(placed.first(), Some(&(3, 0.0)));
    assert_eq!(placed.len(), 7);

    let target = panel.container_for_item(3).map(|child| child.id());
    let Some(target) = target else {
        panic!("item 3 is not realized");
    };
    let exposed = panel.make_visible(target, stratum_foundation::Rect::ZERO);
    assert_eq!(exposed.map(|rect| rect.y), Ok(0.0));
}
