use std::fs;

use serde_json::Value;

use bowl_logging::{GameRejectedEventV1, GameScoredEventV1, LogConfig};

fn read_events(path: &std::path::Path) -> Vec<Value> {
    let s = fs::read_to_string(path).expect("read events");
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid json line"))
        .collect()
}

#[test]
fn scored_and_rejected_games_land_in_the_configured_log() {
    let dir = tempfile::tempdir().unwrap();
    let events_path = dir.path().join("events.ndjson");

    let yaml = format!(
        "events_path: \"{}\"\nflush_every: 2\n",
        events_path.display()
    );
    let cfg = LogConfig::from_yaml(&yaml).unwrap();
    let mut log = cfg.open().unwrap();

    // A mixed game, a perfect game, and a truncated scorecard.
    let mixed: Vec<u8> = vec![10, 9, 1, 5, 5, 7, 2, 10, 10, 10, 9, 0, 8, 2, 9, 1, 10];
    let perfect = [10u8; 12];
    let truncated = [0u8; 19];

    log.append(&GameScoredEventV1::from_rolls(&mixed).unwrap())
        .unwrap();
    log.append(&GameScoredEventV1::from_rolls(&perfect).unwrap())
        .unwrap();
    let err = bowl_core::score(&truncated).unwrap_err();
    log.append(&GameRejectedEventV1::from_error(&truncated, &err))
        .unwrap();
    log.flush().unwrap();

    let events = read_events(&events_path);
    assert_eq!(events.len(), 3);

    assert_eq!(events[0]["event"], "game_scored");
    assert_eq!(
        events[0]["total"].as_u64().unwrap(),
        u64::from(bowl_core::score(&mixed).unwrap())
    );
    assert_eq!(events[0]["running_totals"].as_array().unwrap().len(), 10);

    assert_eq!(events[1]["total"], 300);
    assert_eq!(
        events[1]["frame_scores"],
        serde_json::to_value([30u8; 10]).unwrap()
    );

    assert_eq!(events[2]["event"], "game_rejected");
    assert_eq!(events[2]["rolls"].as_array().unwrap().len(), 19);
    assert!(events[2]["reason"].as_str().unwrap().contains("frame 10"));

    // Every event is stamped with the schema version and ruleset.
    for ev in &events {
        assert_eq!(ev["schema_version"], 1);
        assert_eq!(ev["ruleset_id"], "tenpin_v1");
        assert!(ev["ts_ms"].as_u64().unwrap() > 0);
    }
}

#[test]
fn appending_across_reopens_accumulates_events() {
    let dir = tempfile::tempdir().unwrap();
    let events_path = dir.path().join("events.ndjson");
    let cfg = LogConfig {
        events_path: events_path.display().to_string(),
        flush_every: 0,
    };

    for _ in 0..2 {
        let mut log = cfg.open().unwrap();
        log.append(&GameScoredEventV1::from_rolls(&[0u8; 20]).unwrap())
            .unwrap();
        log.flush().unwrap();
    }

    assert_eq!(read_events(&events_path).len(), 2);
}
