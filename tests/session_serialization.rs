use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{generate, Grid, PlayerId, Session, SessionId};

fn played_session(seed: u64) -> Session {
    let mut rng = SmallRng::seed_from_u64(seed);
    let grid = generate(&mut rng).unwrap();
    let mut session = Session::new(SessionId(seed), PlayerId(seed / 2), grid, Some("push-1".into()))
        .with_player_name(Some("Tester".into()));
    for _ in 0..rng.random_range(0..40) {
        let (col, row) = (rng.random_range(0..10), rng.random_range(0..10));
        if session.fire(col, row).is_err() {
            break;
        }
    }
    session
}

#[test]
fn test_grid_json_is_ten_rows_of_ordinals() {
    let grid = generate(&mut SmallRng::seed_from_u64(3)).unwrap();
    let value = serde_json::to_value(grid).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    for row in rows {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 10);
        assert!(row.iter().all(|v| v.as_u64().is_some_and(|n| n <= 1)));
    }
    let back: Grid = serde_json::from_value(value).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn test_grid_json_rejects_wrong_size() {
    let nine_rows = serde_json::json!(vec![vec![0; 10]; 9]);
    assert!(serde_json::from_value::<Grid>(nine_rows).is_err());
    let bad_ordinal = serde_json::json!(vec![vec![7; 10]; 10]);
    assert!(serde_json::from_value::<Grid>(bad_ordinal).is_err());
}

#[test]
fn test_session_json_roundtrip() {
    let session = played_session(11);
    let text = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&text).unwrap();
    assert_eq!(back, session);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn session_snapshot_roundtrip(seed in any::<u64>()) {
        let session = played_session(seed);
        let bytes = session.to_bytes().unwrap();
        let restored = Session::from_bytes(&bytes).unwrap();
        prop_assert_eq!(restored, session);
    }
}
