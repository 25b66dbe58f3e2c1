use profilecut_camtools::path_orderer::{OrderingParameters, PathOrderer, TieBreak};
use profilecut_core::{PathError, Point, Segment, DEFAULT_TOLERANCE};
use proptest::prelude::*;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1, 0.0), Point::new(x2, y2, 0.0))
}

fn orderer(tie_break: TieBreak) -> PathOrderer {
    PathOrderer::new(OrderingParameters {
        tolerance: DEFAULT_TOLERANCE,
        tie_break,
    })
}

fn assert_connected(segments: &[Segment]) {
    for pair in segments.windows(2) {
        let gap = pair[0].end.distance_2d(&pair[1].start);
        assert!(gap <= DEFAULT_TOLERANCE, "gap {gap} between {} and {}", pair[0], pair[1]);
    }
}

#[test]
fn test_orders_shuffled_square() {
    let mut segments = vec![
        seg(10.0, 10.0, 0.0, 10.0),
        seg(10.0, 0.0, 10.0, 10.0),
        seg(0.0, 0.0, 0.0, 10.0), // runs against the loop
        seg(0.0, 0.0, 10.0, 0.0),
    ];

    PathOrderer::default().order(&mut segments).unwrap();

    assert_eq!(segments[0], seg(0.0, 0.0, 0.0, 10.0));
    assert_connected(&segments);
    assert_eq!(segments.len(), 4);
    assert!(PathOrderer::default().validate_closed(&segments).is_ok());
}

#[test]
fn test_end_match_reverses_segment() {
    let mut segments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 1.0, 0.0)];

    PathOrderer::default().order(&mut segments).unwrap();

    assert_eq!(segments[1], seg(1.0, 0.0, 2.0, 0.0));
}

#[test]
fn test_start_match_preferred_over_end_match() {
    // Short segment whose both ends are within tolerance of the chain end.
    let mut segments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 1.01, 0.0)];

    PathOrderer::default().order(&mut segments).unwrap();

    assert_eq!(segments[1], seg(1.0, 0.0, 1.01, 0.0));
}

#[test]
fn test_tolerance_and_z_handling() {
    let mut near = vec![
        seg(0.0, 0.0, 1.0, 0.0),
        Segment::new(Point::new(1.01, 0.005, 4.0), Point::new(2.0, 0.0, 4.0)),
    ];
    assert!(PathOrderer::default().order(&mut near).is_ok());

    let mut far = vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.02, 0.0, 2.0, 0.0)];
    assert!(matches!(
        PathOrderer::default().order(&mut far),
        Err(PathError::OpenPath { position: 1, .. })
    ));
}

#[test]
fn test_disconnected_set_reports_open_path() {
    let mut segments = vec![
        seg(0.0, 0.0, 1.0, 0.0),
        seg(1.0, 0.0, 1.0, 1.0),
        seg(5.0, 5.0, 6.0, 6.0),
    ];

    let err = PathOrderer::default().order(&mut segments).unwrap_err();

    match err {
        PathError::OpenPath {
            position,
            after_index,
            x,
            y,
        } => {
            assert_eq!(position, 2);
            assert_eq!(after_index, 1);
            assert_eq!((x, y), (1.0, 1.0));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Placed prefix is kept.
    assert_eq!(segments[1], seg(1.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_origin_segment_moves_to_front() {
    let mut segments = vec![
        seg(3.0, 0.0, 3.0, 3.0),
        seg(3.0, 3.0, 0.1, 0.1),
        seg(0.1, 0.1, 3.0, 0.0),
    ];

    PathOrderer::default().order(&mut segments).unwrap();

    assert_eq!(segments[0], seg(0.1, 0.1, 3.0, 0.0));
    assert_connected(&segments);
}

#[test]
fn test_last_match_tie_break() {
    // Branch at (1, 0): B and C both continue from A.
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(1.0, 0.0, 2.0, 0.0);
    let c = seg(1.0, 0.0, 1.0, 1.0);

    let mut last = vec![a, b, c];
    let _ = orderer(TieBreak::LastMatch).order(&mut last);
    assert_eq!(last[1], c);

    let mut first = vec![a, b, c];
    let _ = orderer(TieBreak::FirstMatch).order(&mut first);
    assert_eq!(first[1], b);
}

#[test]
fn test_losing_candidate_keeps_orientation() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let loser = seg(2.0, 0.0, 1.0, 0.0);
    let winner = seg(1.0, 0.0, 1.0, 1.0);
    let mut segments = vec![a, loser, winner];

    let err = orderer(TieBreak::LastMatch).order(&mut segments).unwrap_err();

    assert!(matches!(err, PathError::OpenPath { position: 2, .. }));
    assert_eq!(segments[1], winner);
    assert_eq!(segments[2], loser);
}

#[test]
fn test_single_and_empty_inputs() {
    let mut single = vec![seg(4.0, 4.0, 5.0, 5.0)];
    PathOrderer::default().order(&mut single).unwrap();
    assert_eq!(single, vec![seg(4.0, 4.0, 5.0, 5.0)]);

    let mut empty: Vec<Segment> = Vec::new();
    assert!(matches!(
        PathOrderer::default().order(&mut empty),
        Err(PathError::EmptyPath)
    ));
}

#[test]
fn test_validate_closed_rejects_open_shape() {
    let l_shape = vec![seg(0.0, 0.0, 2.0, 0.0), seg(2.0, 0.0, 2.0, 2.0)];

    let err = PathOrderer::default().validate_closed(&l_shape).unwrap_err();

    match err {
        PathError::NotClosed { gap } => assert!((gap - 8.0_f64.sqrt()).abs() < 1e-9),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        PathOrderer::default().validate_closed(&[]),
        Err(PathError::EmptyPath)
    ));
}

fn shuffled_polygon() -> impl Strategy<Value = (Vec<usize>, Vec<bool>)> {
    (3usize..24).prop_flat_map(|n| {
        (
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

proptest! {
    #[test]
    fn prop_closed_polygon_orders_into_chain(
        (order, flips) in shuffled_polygon(),
        offset in -50.0f64..50.0,
    ) {
        let n = order.len();
        // Vertices are at least 3 units apart in X, so only true neighbours join.
        let vertex = |k: usize| Point::new(k as f64 * 3.0 + offset, ((k * k) % 7) as f64 * 2.0 - offset, 0.0);

        let mut segments: Vec<Segment> = order
            .iter()
            .zip(&flips)
            .map(|(&k, &flip)| {
                let s = Segment::new(vertex(k), vertex((k + 1) % n));
                if flip { s.reversed() } else { s }
            })
            .collect();
        let nearest = segments
            .iter()
            .map(|s| s.start.distance_2d(&Point::ORIGIN))
            .fold(f64::INFINITY, f64::min);

        let orderer = PathOrderer::default();
        prop_assert!(orderer.order(&mut segments).is_ok());

        prop_assert_eq!(segments.len(), n);
        prop_assert_eq!(segments[0].start.distance_2d(&Point::ORIGIN), nearest);
        for pair in segments.windows(2) {
            prop_assert!(pair[0].end.distance_2d(&pair[1].start) <= DEFAULT_TOLERANCE);
        }
        prop_assert!(orderer.validate_closed(&segments).is_ok());
    }
}
