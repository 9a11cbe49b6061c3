//! Integration tests for continuous-mode virtualization.

mod common;

use std::sync::Arc;

use parking_lot::Mutex;
use pooled_list::{Container, LeadingSpacer, ListConfig, ListError, PooledList, Rect, ViewFactory};

use common::{MockFactory, MockHost, MockView, VIEWPORT_HEIGHT, bound_models, build_list, names};

fn slice(from: usize, to: usize) -> Vec<String> {
    names(to)[from..].to_vec()
}

#[test]
fn test_initial_window() {
    let (mut list, factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    // 23 rows of 50px with 10px gaps.
    assert_eq!(list.host().content_height, 1370.0);
    assert_eq!(list.host().offset, 0.0);
    assert_eq!(list.visible_range(), 0..4);
    assert_eq!(list.items_in_viewport(), 4);
    assert_eq!(list.culled_items(), 0);
    assert_eq!(list.active_view_count(), 5);
    assert_eq!(bound_models(&list), slice(0, 5));
    assert_eq!(list.host().spacer, LeadingSpacer::NONE);
    assert_eq!(list.bind_passes(), 1);
    assert_eq!(factory.bind_count(), 5);
}

#[test]
fn test_update_without_changes_binds_nothing() {
    let (mut list, factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    list.update_content(false);
    list.on_scroll_changed();

    assert_eq!(list.bind_passes(), 1);
    assert_eq!(factory.bind_count(), 5);
    assert_eq!(list.visible_range(), 0..4);
}

#[test]
fn test_scroll_moves_window_and_spacer() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    list.host_mut().scroll_to(130.0);
    list.on_scroll_changed();

    assert_eq!(list.culled_items(), 2);
    assert_eq!(list.visible_range(), 2..6);
    assert_eq!(list.first_visible_index(), 2);
    assert_eq!(list.last_visible_index(), 6);
    assert_eq!(bound_models(&list), slice(2, 7));
    assert_eq!(
        list.host().spacer,
        LeadingSpacer {
            extent: 110.0,
            participates: true
        }
    );
    assert_eq!(list.bind_passes(), 2);

    // Scrolling within the same row keeps the binding.
    list.host_mut().scroll_to(150.0);
    list.on_scroll_changed();
    assert_eq!(list.visible_range(), 2..6);
    assert_eq!(list.bind_passes(), 2);
}

#[test]
fn test_scroll_to_end() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    list.host_mut().scroll_to(f32::MAX);
    list.on_scroll_changed();

    assert_eq!(list.host().offset, 1170.0);
    assert_eq!(list.visible_range(), 19..23);
    assert_eq!(list.active_view_count(), 4);
    assert_eq!(bound_models(&list), slice(19, 23));
    assert_eq!(list.pool().idle_count(), 6);
}

#[test]
fn test_scroll_jump_converges() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    list.host_mut().scroll_to(900.0);
    list.on_scroll_changed();
    let plan = list.window_plan().copied();
    let passes = list.bind_passes();

    list.on_scroll_changed();
    list.on_scroll_changed();

    assert_eq!(list.window_plan().copied(), plan);
    assert_eq!(list.bind_passes(), passes);
    assert_eq!(list.visible_range(), 15..19);
    assert_eq!(bound_models(&list), slice(15, 20));

    // And straight back to the top.
    list.host_mut().scroll_to(0.0);
    list.on_scroll_changed();
    assert_eq!(list.visible_range(), 0..4);
    assert_eq!(bound_models(&list), slice(0, 5));
    assert_eq!(list.host().spacer, LeadingSpacer::NONE);
}

#[test]
fn test_pool_conservation() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    let check = |list: &common::TestList| {
        let pool = list.pool();
        assert_eq!(pool.idle_count() + list.active_view_count(), pool.created_count());
    };

    check(&list);
    list.set_items(names(23));
    check(&list);

    for offset in [130.0, 1170.0, 400.0, 0.0, 999.0] {
        list.host_mut().scroll_to(offset);
        list.on_scroll_changed();
        check(&list);
    }

    list.set_items(Vec::new());
    check(&list);
    assert_eq!(list.pool().created_count(), 10);
}

#[test]
fn test_active_and_idle_view_state() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    for view in list.active_views() {
        assert!(view.active);
        assert_eq!(view.parent, Container::Content);
    }
    for slot in list.pool().idle_views() {
        assert!(!slot.view().active);
        assert_eq!(slot.view().parent, Container::Pool);
    }
}

#[test]
fn test_empty_collection() {
    let (mut list, factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));
    list.set_items(Vec::new());

    assert_eq!(list.item_count(), 0);
    assert_eq!(list.active_view_count(), 0);
    assert_eq!(list.visible_range(), 0..0);
    assert_eq!(list.host().content_height, 0.0);
    assert_eq!(list.host().spacer, LeadingSpacer::NONE);
    assert_eq!(list.pool().idle_count(), 10);

    // Nothing to bind, so no pass is counted.
    assert_eq!(list.bind_passes(), 1);
    assert_eq!(factory.bind_count(), 5);
}

#[test]
fn test_collection_smaller_than_viewport() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(2));

    assert_eq!(list.active_view_count(), 2);
    assert_eq!(list.visible_range(), 0..2);
    assert_eq!(list.host().content_height, 110.0);
    assert_eq!(bound_models(&list), names(2));
}

#[test]
fn test_set_items_resets_scroll() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));
    list.host_mut().scroll_to(600.0);
    list.on_scroll_changed();

    let fruits: Vec<String> = ["Apple", "Banana", "Cherry"].map(String::from).to_vec();
    list.set_items(fruits.clone());

    assert_eq!(list.host().offset, 0.0);
    assert_eq!(list.visible_range(), 0..3);
    assert_eq!(list.active_view_count(), 3);
    assert_eq!(bound_models(&list), fruits);
    assert_eq!(list.items(), fruits.as_slice());
}

#[test]
fn test_set_items_twice_matches_once() {
    let (mut once, _once_factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    once.set_items(names(23));

    let (mut twice, _twice_factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    twice.set_items(names(23));
    twice.host_mut().scroll_to(500.0);
    twice.on_scroll_changed();
    twice.set_items(names(23));
    twice.set_items(names(23));

    assert_eq!(twice.window_plan(), once.window_plan());
    assert_eq!(bound_models(&twice), bound_models(&once));
    assert_eq!(twice.active_view_count(), once.active_view_count());
    assert_eq!(twice.pool().idle_count(), once.pool().idle_count());
    assert_eq!(twice.host().offset, once.host().offset);
    assert_eq!(twice.host().spacer, once.host().spacer);
}

#[test]
fn test_force_update_rebinds_in_place_edits() {
    let (mut list, factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    list.items_mut()[1] = "edited".to_string();
    list.on_scroll_changed();
    assert_eq!(bound_models(&list)[1], "item-1");

    list.force_update();
    assert_eq!(bound_models(&list)[1], "edited");
    assert_eq!(list.bind_passes(), 2);
    assert_eq!(factory.bind_count(), 10);
}

#[test]
fn test_viewport_growth_adds_views() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    list.set_items(names(23));

    list.host_mut().viewport = Rect::new(0.0, 0.0, 320.0, 400.0);
    list.on_scroll_changed();

    assert_eq!(list.items_in_viewport(), 7);
    assert_eq!(list.active_view_count(), 8);
    assert_eq!(bound_models(&list), slice(0, 8));
    assert_eq!(list.bind_passes(), 2);
}

#[test]
fn test_pool_overflow_creates_views() {
    let config = ListConfig::new().with_pool_capacity(2);
    let (mut list, _factory) = build_list(config, VIEWPORT_HEIGHT);
    list.set_items(names(23));

    assert_eq!(list.active_view_count(), 5);
    assert_eq!(list.pool().created_count(), 5);
    assert_eq!(list.pool().idle_count(), 0);

    // Released views all re-enter the pool, beyond its capacity.
    list.set_items(Vec::new());
    assert_eq!(list.pool().idle_count(), 5);
}

#[test]
fn test_clicks_are_routed_with_bound_model() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let clicked_clone = clicked.clone();
    list.item_clicked
        .connect(move |name: &String| clicked_clone.lock().push(name.clone()));

    list.set_items(names(23));
    list.active_views().nth(1).unwrap().click();

    list.host_mut().scroll_to(130.0);
    list.on_scroll_changed();
    list.active_views().next().unwrap().click();

    assert_eq!(*clicked.lock(), vec!["item-1".to_string(), "item-2".to_string()]);
}

#[test]
fn test_click_routing_is_not_duplicated() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    let clicks = Arc::new(Mutex::new(0));
    let clicks_clone = clicks.clone();
    list.item_clicked.connect(move |_| *clicks_clone.lock() += 1);

    // Cycle views through the pool several times.
    for _ in 0..3 {
        list.set_items(names(23));
        list.host_mut().scroll_to(1170.0);
        list.on_scroll_changed();
        list.set_items(Vec::new());
    }
    list.set_items(names(23));

    for view in list.active_views() {
        assert_eq!(view.clicked.connection_count(), 1);
    }
    list.active_views().next().unwrap().click();
    assert_eq!(*clicks.lock(), 1);
}

#[test]
fn test_parked_views_are_detached_from_router() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    let clicks = Arc::new(Mutex::new(0));
    let clicks_clone = clicks.clone();
    list.item_clicked.connect(move |_| *clicks_clone.lock() += 1);

    list.set_items(names(23));
    list.set_items(names(2));

    for slot in list.pool().idle_views() {
        assert!(slot.click_connection().is_none());
        assert_eq!(slot.view().clicked.connection_count(), 0);
    }
    for view in list.active_views() {
        assert_eq!(view.clicked.connection_count(), 1);
    }

    // A parked view clicked anyway stays silent.
    if let Some(slot) = list.pool().idle_views().next() {
        slot.view().clicked.emit("item-4".to_string());
    }
    assert_eq!(*clicks.lock(), 0);
}

#[test]
fn test_owner_can_replace_items_after_click() {
    let (mut list, _factory) = build_list(ListConfig::new(), VIEWPORT_HEIGHT);
    let selection = Arc::new(Mutex::new(None));
    let selection_clone = selection.clone();
    list.item_clicked
        .connect(move |name: &String| *selection_clone.lock() = Some(name.clone()));

    list.set_items(names(23));
    list.active_views().nth(2).unwrap().click();

    let selected = selection.lock().take();
    if let Some(name) = selected {
        let remaining: Vec<String> = names(23).into_iter().filter(|n| *n != name).collect();
        list.set_items(remaining);
    }

    assert_eq!(list.item_count(), 22);
    assert_eq!(
        bound_models(&list),
        vec!["item-0", "item-1", "item-3", "item-4", "item-5"]
    );
}

#[test]
fn test_invalid_item_height_is_rejected() {
    let factory: Arc<dyn ViewFactory<MockView>> = Arc::new(MockFactory::new(0.0));
    let result: Result<PooledList<String, MockView, MockHost>, ListError> =
        PooledList::new(ListConfig::new(), factory, MockHost::new(VIEWPORT_HEIGHT));

    assert_eq!(result.err(), Some(ListError::InvalidItemHeight { height: 0.0 }));
}

#[test]
fn test_zero_pool_capacity_is_rejected() {
    let factory: Arc<dyn ViewFactory<MockView>> = Arc::new(MockFactory::new(50.0));
    let result = PooledList::<String, MockView, MockHost>::new(
        ListConfig::new().with_pool_capacity(0),
        factory,
        MockHost::new(VIEWPORT_HEIGHT),
    );

    assert_eq!(result.err(), Some(ListError::ZeroPoolCapacity));
}
