//! Tests for duplicate removal.

use super::*;
use config::constants::REMOVE_DUPLICATES_EPSILON;

const EPS: f64 = REMOVE_DUPLICATES_EPSILON;

fn p(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

#[test]
fn keeps_distinct_points() {
    let ring = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
    assert_eq!(remove_duplicates(&ring, EPS, true), ring);
}

#[test]
fn collapses_consecutive_runs() {
    let ring = vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 0.0, 1e-12),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
    ];
    let cleaned = remove_duplicates(&ring, EPS, false);
    assert_eq!(cleaned, vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
}

#[test]
fn non_consecutive_repeats_are_kept() {
    let ring = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
    assert_eq!(remove_duplicates(&ring, EPS, true).len(), 4);
}

#[test]
fn wrap_around_drops_closing_point() {
    let ring = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)];
    assert_eq!(remove_duplicates(&ring, EPS, true).len(), 3);
    assert_eq!(remove_duplicates(&ring, EPS, false).len(), 4);
}

#[test]
fn wrap_around_drops_repeated_closing_points() {
    let ring = vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(0.0, 0.0, 1e-13),
        p(0.0, 0.0, 0.0),
    ];
    assert_eq!(
        remove_duplicates(&ring, EPS, true),
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]
    );
}

#[test]
fn all_equal_points_collapse_to_one() {
    let ring = vec![p(2.0, 2.0, 2.0); 5];
    assert_eq!(remove_duplicates(&ring, EPS, true), vec![p(2.0, 2.0, 2.0)]);
}

#[test]
fn short_input_is_unchanged() {
    assert!(remove_duplicates(&[], EPS, true).is_empty());
    assert_eq!(remove_duplicates(&[p(1.0, 2.0, 3.0)], EPS, true).len(), 1);
}

#[test]
fn dedup_is_idempotent() {
    let rings = vec![
        vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0)],
        vec![p(5.0, 5.0, 5.0); 3],
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0)],
    ];
    for ring in rings {
        for wrap in [true, false] {
            let once = remove_duplicates(&ring, EPS, wrap);
            let twice = remove_duplicates(&once, EPS, wrap);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn larger_epsilon_merges_more() {
    let ring = vec![p(0.0, 0.0, 0.0), p(0.001, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
    assert_eq!(remove_duplicates(&ring, EPS, true).len(), 4);
    assert_eq!(remove_duplicates(&ring, 0.01, true).len(), 3);
}
