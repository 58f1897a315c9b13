mod ingestion;
mod lifecycle;

#[test]
fn scenarios_smoke_runs() {
    assert!(!backtrail::VERSION.is_empty());
}
