//! Unit tests for argument fingerprints

use scoped_cache_domain::Fingerprint;

#[test]
fn test_equal_arguments_share_fingerprint() {
    assert_eq!(Fingerprint::of(&(1, 2)), Fingerprint::of(&(1, 2)));
    assert_eq!(
        Fingerprint::of(&("user", 42u64)),
        Fingerprint::of(&("user".to_string(), 42u64))
    );
}

#[test]
fn test_argument_order_matters() {
    assert_ne!(Fingerprint::of(&(1, 2)), Fingerprint::of(&(2, 1)));
    assert_ne!(Fingerprint::of(&(1, 2)), Fingerprint::of(&(1, 3)));
}

#[test]
fn test_nested_sequences_hash_by_value() {
    let a = (vec![vec![1, 2], vec![3]], "x");
    let b = (vec![vec![1, 2], vec![3]], "x");
    let c = (vec![vec![1], vec![2, 3]], "x");

    assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    assert_ne!(Fingerprint::of(&a), Fingerprint::of(&c));
}

#[test]
fn test_slices_and_vectors_agree() {
    let vector = vec![1u32, 2, 3];
    let slice: &[u32] = &[1, 2, 3];
    assert_eq!(Fingerprint::of(&vector), Fingerprint::of(slice));
}

#[test]
fn test_fingerprint_is_stable_across_threads() {
    let here = Fingerprint::of(&(7, "seven"));
    let there = std::thread::spawn(|| Fingerprint::of(&(7, "seven")))
        .join()
        .unwrap();
    assert_eq!(here, there);
}

#[test]
fn test_display_is_fixed_width_hex() {
    let fingerprint = Fingerprint::of(&0u8);
    let display = fingerprint.to_string();
    assert_eq!(display.len(), 16);
    assert_eq!(u64::from_str_radix(&display, 16).unwrap(), fingerprint.value());
}
