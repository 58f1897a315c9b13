use backtrail::panel::{PanelConfig, RecallPanel};
use backtrail::persistence::RedbSettings;
use backtrail::test_utils::{MemoryCatalog, MemorySettings};
use tempfile::TempDir;

#[test]
fn test_full_session_round_trip_through_redb() {
    let dir = TempDir::new().unwrap();
    let mut catalog = MemoryCatalog::new();
    let starred_a = catalog.add_persistent("assets/a.mesh");
    let starred_b = catalog.add_persistent("assets/b.mat");

    {
        let mut store = RedbSettings::open(dir.path().to_path_buf()).unwrap();
        let mut panel = RecallPanel::open(&store, &catalog);
        assert!(panel.starred().is_empty());

        let feed = panel.subscribe();
        feed.drop_commit(vec![starred_a, starred_b]);
        panel.pump(&catalog);
        panel.starred_mut().reorder(1, 0).unwrap();
        panel.set_max_history(5);
        panel.close(&mut store, &catalog, &catalog).unwrap();
    }

    {
        let store = RedbSettings::open(dir.path().to_path_buf()).unwrap();
        let panel = RecallPanel::open(&store, &catalog);
        // User order survives the round trip.
        assert_eq!(panel.starred().entries(), &[starred_b, starred_a]);
        assert_eq!(panel.config().max_history, 5);
        assert!(panel.history().is_empty());
    }
}

#[test]
fn test_items_deleted_between_sessions_are_skipped_on_load() {
    let mut catalog = MemoryCatalog::new();
    let survivor = catalog.add_persistent("assets/survivor");
    let casualty = catalog.add_persistent("assets/casualty");

    let mut store = MemorySettings::new();
    {
        let mut panel = RecallPanel::new(PanelConfig::default());
        panel.starred_mut().add(survivor);
        panel.starred_mut().add(casualty);
        panel.close(&mut store, &catalog, &catalog).unwrap();
    }

    catalog.delete(casualty);
    let panel = RecallPanel::open(&store, &catalog);
    assert_eq!(panel.starred().entries(), &[survivor]);
}

#[test]
fn test_ephemeral_stars_never_reach_the_store() {
    let mut catalog = MemoryCatalog::new();
    let persistent = catalog.add_persistent("assets/persistent");
    let ephemeral = catalog.add_transient();

    let mut store = MemorySettings::new();
    {
        let mut panel = RecallPanel::new(PanelConfig::default());
        panel.starred_mut().add(persistent);
        panel.starred_mut().add(ephemeral);
        panel.close(&mut store, &catalog, &catalog).unwrap();
    }

    // Even with the ephemeral item still alive, only the persistent one
    // comes back.
    let panel = RecallPanel::open(&store, &catalog);
    assert_eq!(panel.starred().entries(), &[persistent]);
}

#[test]
fn test_corrupt_store_contents_fall_back_to_defaults() {
    use backtrail::persistence::{SettingsStore, MAX_HISTORY_KEY, STARRED_KEY};

    let catalog = MemoryCatalog::new();
    let mut store = MemorySettings::new();
    store.put(STARRED_KEY, "\u{1}garbage").unwrap();
    store.put(MAX_HISTORY_KEY, "-3").unwrap();

    let panel = RecallPanel::open(&store, &catalog);
    assert!(panel.starred().is_empty());
    assert_eq!(panel.config().max_history, PanelConfig::default().max_history);
}
