use game_catalog_core::{LaunchMode, REQUIRED_COLUMNS, Record};

fn sample_record() -> Record {
    Record {
        id: 7,
        name: "2048".to_string(),
        category: "Puzzle".to_string(),
        thumbnail: "https://example.com/2048.png".to_string(),
        url: "https://example.com/2048/".to_string(),
        description: "Slide tiles to reach 2048.".to_string(),
        instructions: "Arrow keys".to_string(),
        launch: LaunchMode::Iframe,
    }
}

#[test]
fn record_serializes_fields_in_catalog_order() {
    let json = serde_json::to_string(&sample_record()).unwrap();
    let keys: Vec<&str> = [
        "\"id\"",
        "\"name\"",
        "\"category\"",
        "\"thumbnail\"",
        "\"url\"",
        "\"description\"",
        "\"instructions\"",
        "\"use\"",
    ]
    .to_vec();
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(json.ends_with("\"use\":\"iframe\"}"));
}

#[test]
fn launch_mode_reads_front_end_values() {
    let modes: Vec<LaunchMode> =
        serde_json::from_str(r#"["iframe", "redirect", "emulator"]"#).unwrap();
    assert_eq!(
        modes,
        vec![LaunchMode::Iframe, LaunchMode::Redirect, LaunchMode::Emulator]
    );
    assert_eq!(LaunchMode::default(), LaunchMode::Iframe);
    assert_eq!(LaunchMode::Redirect.to_string(), "redirect");
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn required_columns_are_lowercase() {
    for col in REQUIRED_COLUMNS {
        assert_eq!(col, col.trim().to_lowercase());
    }
    assert!(REQUIRED_COLUMNS.contains(&"url"));
}
