//! Unit tests for bt-chain.

use bt_core::{LinkId, Point2};

use crate::{ChainError, ChainResolver, CollisionDetector, LinkLengths, VelocityEstimator};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The bench train: a 3.41 m lead and 222 links of 2.20 m.
fn bench_train() -> LinkLengths {
    LinkLengths::lead_and_trailing(223, 3.41, 2.20).unwrap()
}

/// Points along the x axis at the given coordinates.
fn on_x_axis(xs: &[f64]) -> Vec<Point2> {
    xs.iter().map(|&x| Point2::new(x, 0.0)).collect()
}

// ── LinkLengths ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod links {
    use super::*;

    #[test]
    fn lead_and_trailing_layout() {
        let lengths = bench_train();
        assert_eq!(lengths.len(), 223);
        assert_eq!(lengths.get(LinkId::LEAD), 3.41);
        assert!(lengths.as_slice()[1..].iter().all(|&l| l == 2.20));
        assert!((lengths.span() - 222.0 * 2.20).abs() < 1e-9);
    }

    #[test]
    fn empty_chain_rejected() {
        assert!(matches!(LinkLengths::new(vec![]), Err(ChainError::Empty)));
        assert!(matches!(
            LinkLengths::lead_and_trailing(0, 1.0, 1.0),
            Err(ChainError::Empty)
        ));
    }

    #[test]
    fn non_positive_length_names_the_link() {
        match LinkLengths::new(vec![1.0, 2.0, -0.5]) {
            Err(ChainError::InvalidLength { link, length }) => {
                assert_eq!(link, LinkId(2));
                assert_eq!(length, -0.5);
            }
            other => panic!("expected InvalidLength, got {other:?}"),
        }
        assert!(LinkLengths::new(vec![1.0, f64::NAN]).is_err());
    }
}

// ── ChainResolver ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;

    #[test]
    fn link_length_invariant_holds() {
        let resolver = ChainResolver::new(bench_train());
        let lengths = resolver.lengths().clone();
        for lead in [
            Point2::new(8.8, 0.0),
            Point2::from_polar(12.3, 2.1),
            Point2::from_polar(4.5, -0.7),
        ] {
            let config = resolver.resolve(0.0, lead).unwrap();
            assert_eq!(config.len(), 223);
            assert_eq!(config.lead(), lead);
            for (i, sep) in config.separations().enumerate() {
                let expected = lengths.get(LinkId(i as u32 + 1));
                assert!(
                    (sep - expected).abs() <= 1e-9 * expected,
                    "link {} separation {sep} != {expected}",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn first_trailing_link_points_back_through_origin() {
        let resolver = ChainResolver::new(LinkLengths::new(vec![3.41, 2.2]).unwrap());
        let config = resolver.resolve(0.0, Point2::new(8.8, 0.0)).unwrap();
        let p1 = config.position(LinkId(1));
        assert!((p1.x - 6.6).abs() < 1e-12);
        assert!(p1.y.abs() < 1e-12);
    }

    #[test]
    fn chain_folds_through_origin() {
        // 1.0 from the origin with 2.2 m links: the next link lands on the
        // opposite side at radius 1.2.
        let resolver = ChainResolver::new(LinkLengths::new(vec![1.0, 2.2]).unwrap());
        let config = resolver.resolve(0.0, Point2::new(1.0, 0.0)).unwrap();
        let p1 = config.position(LinkId(1));
        assert!((p1.x + 1.2).abs() < 1e-12);
    }

    #[test]
    fn lead_at_origin_is_undefined_direction() {
        let resolver = ChainResolver::new(LinkLengths::new(vec![1.0, 2.0]).unwrap());
        match resolver.resolve(7.0, Point2::ORIGIN) {
            Err(ChainError::UndefinedDirection { time, link }) => {
                assert_eq!(time, 7.0);
                assert_eq!(link, LinkId::LEAD);
            }
            other => panic!("expected UndefinedDirection, got {other:?}"),
        }
    }

    #[test]
    fn single_link_chain_at_origin_is_fine() {
        let resolver = ChainResolver::new(LinkLengths::new(vec![1.0]).unwrap());
        let config = resolver.resolve(0.0, Point2::ORIGIN).unwrap();
        assert_eq!(config.positions, vec![Point2::ORIGIN]);
    }

    #[test]
    fn resolve_is_bit_identical_on_repeat() {
        let resolver = ChainResolver::new(bench_train());
        let lead = Point2::from_polar(9.137, 3.3);
        let a = resolver.resolve(17.0, lead).unwrap();
        let b = resolver.resolve(17.0, lead).unwrap();
        assert_eq!(a.positions.len(), b.positions.len());
        for (p, q) in a.positions.iter().zip(&b.positions) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn resolve_into_appends() {
        let resolver = ChainResolver::new(LinkLengths::new(vec![1.0, 1.0, 1.0]).unwrap());
        let mut buf = vec![Point2::new(-1.0, -1.0)];
        resolver.resolve_into(0.0, Point2::new(5.0, 0.0), &mut buf).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf[1], Point2::new(5.0, 0.0));
    }
}

// ── VelocityEstimator ─────────────────────────────────────────────────────────

#[cfg(test)]
mod velocity {
    use super::*;

    #[test]
    fn first_sample_speed_is_zero() {
        let est = VelocityEstimator::new(1.0).unwrap();
        let speeds = est.speeds(None, &on_x_axis(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(speeds, vec![0.0, 0.0, 0.0]);
        assert_eq!(est.speed(None, Point2::new(9.0, 9.0)), 0.0);
    }

    #[test]
    fn backward_difference_divides_by_step() {
        let prev = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let curr = vec![Point2::new(3.0, 4.0), Point2::new(1.0, 1.0)];

        let unit = VelocityEstimator::new(1.0).unwrap();
        assert_eq!(unit.speeds(Some(&prev), &curr).unwrap(), vec![5.0, 0.0]);

        let half = VelocityEstimator::new(0.5).unwrap();
        assert_eq!(half.speeds(Some(&prev), &curr).unwrap(), vec![10.0, 0.0]);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let est = VelocityEstimator::new(1.0).unwrap();
        let err = est.speeds(Some(&on_x_axis(&[0.0])), &on_x_axis(&[0.0, 1.0]));
        assert!(matches!(err, Err(ChainError::LinkCountMismatch { .. })));
    }

    #[test]
    fn invalid_step_rejected() {
        assert!(VelocityEstimator::new(0.0).is_err());
        assert!(VelocityEstimator::new(f64::INFINITY).is_err());
    }
}

// ── CollisionDetector ─────────────────────────────────────────────────────────

#[cfg(test)]
mod collision {
    use super::*;

    #[test]
    fn reports_lowest_index_violation() {
        // Gaps below 0.30 between links 3–4 and 7–8.
        let positions = on_x_axis(&[0.0, 1.0, 2.0, 3.0, 3.1, 4.1, 5.1, 6.1, 6.15, 7.15]);
        let det = CollisionDetector::new(0.30).unwrap();
        let pair = det.detect(&positions).unwrap();
        assert_eq!((pair.front, pair.rear), (LinkId(3), LinkId(4)));
        assert!((pair.separation - 0.1).abs() < 1e-9);
    }

    #[test]
    fn clear_chain_reports_nothing() {
        let positions = on_x_axis(&[0.0, 2.2, 4.4, 6.6]);
        assert!(CollisionDetector::new(0.30).unwrap().detect(&positions).is_none());
    }

    #[test]
    fn separation_equal_to_clearance_is_not_a_collision() {
        let positions = on_x_axis(&[0.0, 0.5]);
        assert!(CollisionDetector::new(0.5).unwrap().detect(&positions).is_none());
    }

    #[test]
    fn last_adjacent_pair_is_scanned() {
        let positions = on_x_axis(&[0.0, 2.0, 4.0, 4.1]);
        let pair = CollisionDetector::new(0.3).unwrap().detect(&positions).unwrap();
        assert_eq!(pair.front, LinkId(2));
    }

    #[test]
    fn non_adjacent_proximity_is_ignored() {
        // Links 0 and 2 coincide; neighbours are 1.0 apart.
        let positions = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        assert!(CollisionDetector::new(0.3).unwrap().detect(&positions).is_none());
    }

    #[test]
    fn negative_clearance_rejected() {
        assert!(CollisionDetector::new(-0.1).is_err());
    }
}
