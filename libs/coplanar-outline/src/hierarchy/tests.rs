//! Tests for hierarchy packing.

use super::*;

fn triangle(z: f64) -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, z),
        Vec3::new(1.0, 0.0, z),
        Vec3::new(0.0, 1.0, z),
    ]
}

fn square(size: f64) -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(size, 0.0, 0.0),
        Vec3::new(size, size, 0.0),
        Vec3::new(0.0, size, 0.0),
    ]
}

/// Outer square, two holes, one of which holds an island.
fn nested() -> PolygonHierarchy {
    let island = PolygonHierarchy::new(triangle(0.5));
    PolygonHierarchy::with_holes(
        square(10.0),
        vec![
            PolygonHierarchy::with_holes(square(4.0), vec![island]),
            PolygonHierarchy::new(triangle(0.0)),
        ],
    )
}

fn round_trip(hierarchy: &PolygonHierarchy, offset: usize) -> (PolygonHierarchy, usize) {
    let mut buffer = vec![f64::NAN; offset + hierarchy.packed_length()];
    let end = hierarchy.pack_into(&mut buffer, offset).unwrap();
    assert_eq!(end, buffer.len());
    PolygonHierarchy::unpack_from(&buffer, offset).unwrap()
}

#[test]
fn packed_length_counts_every_ring() {
    assert_eq!(PolygonHierarchy::default().packed_length(), 2);
    assert_eq!(PolygonHierarchy::new(square(1.0)).packed_length(), 14);
    // 14 + 14 + 11 + 11
    assert_eq!(nested().packed_length(), 50);
}

#[test]
fn ring_count_includes_nested_islands() {
    assert_eq!(nested().ring_count(), 4);
    assert_eq!(PolygonHierarchy::default().ring_count(), 1);
}

#[test]
fn pack_writes_expected_layout() {
    let ring = PolygonHierarchy::new(triangle(2.0));
    let mut buffer = vec![0.0; ring.packed_length()];
    ring.pack_into(&mut buffer, 0).unwrap();
    assert_eq!(
        buffer,
        vec![3.0, 0.0, 0.0, 2.0, 1.0, 0.0, 2.0, 0.0, 1.0, 2.0, 0.0]
    );
}

#[test]
fn round_trip_without_holes() {
    let ring = PolygonHierarchy::new(square(3.0));
    let (unpacked, end) = round_trip(&ring, 0);
    assert_eq!(unpacked, ring);
    assert_eq!(end, ring.packed_length());
}

#[test]
fn round_trip_with_one_hole_at_offset() {
    let polygon = PolygonHierarchy::with_holes(square(5.0), vec![PolygonHierarchy::new(triangle(0.0))]);
    let (unpacked, end) = round_trip(&polygon, 7);
    assert_eq!(unpacked, polygon);
    assert_eq!(end, 7 + polygon.packed_length());
}

#[test]
fn round_trip_with_nested_holes() {
    let polygon = nested();
    let (unpacked, _) = round_trip(&polygon, 3);
    assert_eq!(unpacked, polygon);
    assert_eq!(unpacked.holes[0].holes.len(), 1);
}

#[test]
fn pack_rejects_short_buffer_without_writing() {
    let ring = PolygonHierarchy::new(square(1.0));
    let mut buffer = vec![-1.0; 10];
    let err = ring.pack_into(&mut buffer, 0).unwrap_err();
    assert_eq!(
        err,
        OutlineError::BufferTooSmall {
            required: 14,
            offset: 0,
            available: 10
        }
    );
    assert!(buffer.iter().all(|v| *v == -1.0));
}

#[test]
fn unpack_reports_truncated_buffer() {
    let ring = PolygonHierarchy::new(square(1.0));
    let mut buffer = vec![0.0; ring.packed_length()];
    ring.pack_into(&mut buffer, 0).unwrap();
    buffer.truncate(8);
    let err = PolygonHierarchy::unpack_from(&buffer, 0).unwrap_err();
    assert!(matches!(err, OutlineError::UnexpectedEndOfBuffer { .. }));
}

#[test]
fn unpack_reports_missing_hole_count() {
    let buffer = [1.0, 4.0, 5.0, 6.0];
    let err = PolygonHierarchy::unpack_from(&buffer, 0).unwrap_err();
    assert_eq!(err, OutlineError::end_of_buffer(4, 4));
}

#[test]
fn unpack_rejects_offset_past_end() {
    let err = PolygonHierarchy::unpack_from(&[0.0, 0.0], 5).unwrap_err();
    assert_eq!(err, OutlineError::end_of_buffer(5, 2));
}

#[test]
fn unpack_rejects_fractional_and_negative_counts() {
    let err = PolygonHierarchy::unpack_from(&[1.5, 0.0, 0.0, 0.0, 0.0], 0).unwrap_err();
    assert_eq!(err, OutlineError::InvalidCount { index: 0, value: 1.5 });

    let err = PolygonHierarchy::unpack_from(&[0.0, -2.0], 0).unwrap_err();
    assert_eq!(err, OutlineError::InvalidCount { index: 1, value: -2.0 });

    let err = PolygonHierarchy::unpack_from(&[f64::INFINITY, 0.0], 0).unwrap_err();
    assert!(matches!(err, OutlineError::InvalidCount { index: 0, .. }));
}

#[test]
fn unpack_rejects_oversized_count_without_allocating() {
    let err = PolygonHierarchy::unpack_from(&[1.0e15, 0.0, 0.0], 0).unwrap_err();
    assert_eq!(err, OutlineError::end_of_buffer(0, 3));

    let err = PolygonHierarchy::unpack_from(&[9.0, 0.0, 0.0, 0.0, 0.0, 7.0, 1.0, 2.0], 4).unwrap_err();
    assert_eq!(err, OutlineError::end_of_buffer(5, 8));
}

#[test]
fn unpack_rejects_chained_hole_counts() {
    // Every level claims as many holes as the rest of the buffer could hold
    let length = 1_000;
    let mut buffer = vec![0.0; length];
    for count_index in (1..length).step_by(2) {
        buffer[count_index] = ((length - count_index - 1) / 2) as f64;
    }
    let err = PolygonHierarchy::unpack_from(&buffer, 0).unwrap_err();
    assert_eq!(err, OutlineError::end_of_buffer(length, length));
}

#[test]
fn unpack_survives_deep_nesting() {
    let mut hierarchy = PolygonHierarchy::new(triangle(0.0));
    for _ in 0..2_000 {
        hierarchy = PolygonHierarchy::with_holes(Vec::new(), vec![hierarchy]);
    }
    let mut buffer = vec![0.0; hierarchy.packed_length()];
    hierarchy.pack_into(&mut buffer, 0).unwrap();
    let (unpacked, _) = PolygonHierarchy::unpack_from(&buffer, 0).unwrap();
    assert_eq!(unpacked.ring_count(), 2_001);
}

#[test]
fn very_deep_nesting_unpacks_and_drops() {
    let depth = 200_000;
    let mut buffer = Vec::with_capacity(2 * depth + 2);
    for _ in 0..depth {
        buffer.extend_from_slice(&[0.0, 1.0]);
    }
    buffer.extend_from_slice(&[0.0, 0.0]);

    let (unpacked, end) = PolygonHierarchy::unpack_from(&buffer, 0).unwrap();
    assert_eq!(end, buffer.len());
    assert_eq!(unpacked.ring_count(), depth + 1);
    assert_eq!(unpacked.packed_length(), buffer.len());
    drop(unpacked);
}

#[test]
fn very_deep_nesting_built_in_code_drops() {
    let mut hierarchy = PolygonHierarchy::new(triangle(0.0));
    for _ in 0..200_000 {
        hierarchy = PolygonHierarchy::with_holes(Vec::new(), vec![hierarchy]);
    }
    assert_eq!(hierarchy.ring_count(), 200_001);
    drop(hierarchy);
}

#[test]
fn serde_json_uses_coordinate_arrays() {
    let ring = PolygonHierarchy::new(triangle(0.0));
    let json = serde_json::to_string(&ring).unwrap();
    assert!(json.starts_with("{\"positions\":[[0.0,0.0,0.0]"));

    let parsed: PolygonHierarchy =
        serde_json::from_str(r#"{"positions":[[0,0,0],[1,0,0],[0,1,0]]}"#).unwrap();
    assert_eq!(parsed, ring);
}
