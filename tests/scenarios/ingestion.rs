use backtrail::panel::{PanelConfig, RecallPanel};
use backtrail::test_utils::MemoryCatalog;

#[test]
fn test_selection_stream_dedupes_and_bounds_the_trail() {
    let mut catalog = MemoryCatalog::new();
    let items: Vec<_> = (0..4)
        .map(|index| catalog.add_persistent(&format!("assets/{index}")))
        .collect();

    let mut panel = RecallPanel::new(PanelConfig { max_history: 3 });
    let feed = panel.subscribe();
    for &item in &items {
        feed.selection_changed(Some(item));
    }
    panel.pump(&catalog);

    // A, B, C, D with max_history 3: A falls off the tail.
    assert_eq!(panel.history().entries(), &[items[3], items[2], items[1]]);

    // Re-selecting an existing entry moves it to the front, no duplicate.
    feed.selection_changed(Some(items[2]));
    panel.pump(&catalog);
    assert_eq!(panel.history().entries(), &[items[2], items[3], items[1]]);
}

#[test]
fn test_drop_commit_lands_in_trail_and_starred() {
    let mut catalog = MemoryCatalog::new();
    let existing = catalog.add_persistent("assets/q");
    let dropped = catalog.add_persistent("assets/p");

    let mut panel = RecallPanel::new(PanelConfig::default());
    let feed = panel.subscribe();
    feed.selection_changed(Some(existing));
    feed.drop_commit(vec![dropped]);
    panel.pump(&catalog);

    assert_eq!(panel.history().entries(), &[dropped, existing]);
    assert_eq!(panel.starred().entries(), &[dropped]);
}

#[test]
fn test_drop_commit_filters_ephemeral_items_from_batch() {
    let mut catalog = MemoryCatalog::new();
    let persistent = catalog.add_persistent("assets/p");
    let scene_local = catalog.add_transient();

    let mut panel = RecallPanel::new(PanelConfig::default());
    let feed = panel.subscribe();
    feed.drop_commit(vec![scene_local, persistent]);
    panel.pump(&catalog);

    assert_eq!(panel.history().entries(), &[persistent]);
    assert_eq!(panel.starred().entries(), &[persistent]);
}

#[test]
fn test_context_unload_clears_stale_entries_everywhere() {
    let mut catalog = MemoryCatalog::new();
    let asset = catalog.add_persistent("assets/kept");
    let scene_a = catalog.add_transient();
    let scene_b = catalog.add_transient();

    let mut panel = RecallPanel::new(PanelConfig::default());
    let feed = panel.subscribe();
    feed.selection_changed(Some(scene_a));
    feed.selection_changed(Some(asset));
    feed.selection_changed(Some(scene_b));
    panel.pump(&catalog);
    panel.starred_mut().add(asset);
    panel.starred_mut().add(scene_b);

    // Scene teardown kills the scene-local objects.
    catalog.delete(scene_a);
    catalog.delete(scene_b);
    feed.context_unloaded();
    panel.pump(&catalog);

    assert_eq!(panel.history().entries(), &[asset]);
    assert_eq!(panel.starred().entries(), &[asset]);
    assert!(panel.take_redraw_request());
}

#[test]
fn test_render_tick_sweeps_dead_entries_without_events() {
    let mut catalog = MemoryCatalog::new();
    let keeper = catalog.add_persistent("assets/keeper");
    let doomed = catalog.add_persistent("assets/doomed");

    let mut panel = RecallPanel::new(PanelConfig::default());
    let feed = panel.subscribe();
    feed.selection_changed(Some(keeper));
    feed.selection_changed(Some(doomed));
    panel.pump(&catalog);

    catalog.delete(doomed);
    // No event arrives; the per-frame sweep alone removes the dead entry.
    panel.pump(&catalog);

    assert_eq!(panel.history().entries(), &[keeper]);
}

#[test]
fn test_dropped_feed_stops_delivering() {
    let mut catalog = MemoryCatalog::new();
    let before = catalog.add_persistent("assets/before");
    let after = catalog.add_persistent("assets/after");

    let mut panel = RecallPanel::new(PanelConfig::default());
    let feed = panel.subscribe();
    feed.selection_changed(Some(before));
    panel.pump(&catalog);
    drop(feed);

    // A second, still-live feed keeps working after the first is disposed.
    let second = panel.subscribe();
    second.selection_changed(Some(after));
    panel.pump(&catalog);

    assert_eq!(panel.history().entries(), &[after, before]);
}
