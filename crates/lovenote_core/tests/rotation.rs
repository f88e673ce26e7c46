use lovenote_core::catalog::LOVE_QUOTES;
use lovenote_core::{RotationError, RotationIndex};

#[test]
fn advancing_len_times_returns_to_start() {
    let mut rotation = RotationIndex::try_new(LOVE_QUOTES.to_vec()).unwrap();
    let start = *rotation.current();

    for _ in 0..rotation.len() {
        rotation.advance();
    }

    assert_eq!(rotation.position(), 0);
    assert_eq!(*rotation.current(), start);
}

#[test]
fn current_after_k_advances_is_k_mod_len() {
    let items = vec!['a', 'b', 'c'];
    let mut rotation = RotationIndex::try_new(items.clone()).unwrap();

    for k in 1..=10 {
        let advanced = *rotation.advance();
        assert_eq!(advanced, items[k % items.len()]);
        assert_eq!(*rotation.current(), items[k % items.len()]);
        assert!(rotation.position() < items.len());
    }
    assert_eq!(rotation.revision(), 10);
}

#[test]
fn empty_rotation_fails_at_setup() {
    let err = RotationIndex::<&str>::try_new(Vec::new()).unwrap_err();
    assert_eq!(err, RotationError::EmptyList);
    assert_eq!(err.to_string(), "rotation list must not be empty");
}
