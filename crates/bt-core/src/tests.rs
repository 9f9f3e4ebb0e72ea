//! Unit tests for bt-core primitives.

#[cfg(test)]
mod ids {
    use crate::LinkId;

    #[test]
    fn index_roundtrip() {
        let id = LinkId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LinkId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_and_ordering() {
        assert_eq!(LinkId::LEAD.next(), LinkId(1));
        assert!(LinkId(3) < LinkId(7));
    }

    #[test]
    fn display() {
        assert_eq!(LinkId(7).to_string(), "LinkId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::Point2;

    #[test]
    fn distance_is_euclidean() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn polar_roundtrip() {
        let p = Point2::from_polar(3.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
        assert!((p.norm() - 3.0).abs() < 1e-12);
        assert!((p.polar_angle() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn inward_offset_points_at_origin() {
        let p = Point2::new(5.0, 0.0);
        let q = p.offset(2.0, p.inward_angle());
        assert!((q.x - 3.0).abs() < 1e-12);
        assert!(q.y.abs() < 1e-12);
        assert!((p.inward_angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn origin_detection_is_exact() {
        assert!(Point2::ORIGIN.is_origin());
        assert!(Point2::new(-0.0, 0.0).is_origin());
        assert!(!Point2::new(1e-300, 0.0).is_origin());
    }
}

#[cfg(test)]
mod time {
    use crate::{BtError, MAX_TICKS, SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(0).prev(), None);
        assert_eq!(Tick(4).prev(), Some(Tick(3)));
    }

    #[test]
    fn multiple_of_zero_interval_is_false() {
        assert!(!Tick(10).is_multiple_of(0));
        assert!(Tick(10).is_multiple_of(5));
        assert!(Tick(0).is_multiple_of(5));
    }

    #[test]
    fn clock_covers_inclusive_horizon() {
        let clock = SimClock::new(1.0, 300.0).unwrap();
        assert_eq!(clock.final_tick, Tick(300));
        assert_eq!(clock.sample_count(), 301);
    }

    #[test]
    fn fractional_step_maps_ticks_to_time() {
        let mut clock = SimClock::new(0.25, 10.0).unwrap();
        assert_eq!(clock.final_tick, Tick(40));
        clock.advance();
        clock.advance();
        assert!((clock.now() - 0.5).abs() < 1e-12);
        assert_eq!(clock.ticks_for(2.0), 8);
    }

    #[test]
    fn clock_finishes_after_final_tick() {
        let mut clock = SimClock::new(1.0, 2.0).unwrap();
        for _ in 0..3 {
            assert!(!clock.is_finished());
            clock.advance();
        }
        assert!(clock.is_finished());
    }

    #[test]
    fn invalid_step_rejected() {
        assert!(SimClock::new(0.0, 10.0).is_err());
        assert!(SimClock::new(-1.0, 10.0).is_err());
        assert!(SimClock::new(f64::NAN, 10.0).is_err());
        assert!(SimClock::new(1.0, -5.0).is_err());
    }

    #[test]
    fn tick_count_over_limit_rejected() {
        assert!(matches!(SimClock::new(1e-300, 1.0), Err(BtError::Config(_))));
        assert!(matches!(SimClock::new(f64::MIN_POSITIVE, f64::MAX), Err(BtError::Config(_))));
        assert!(SimClock::new(1.0, (MAX_TICKS + 1) as f64).is_err());

        let clock = SimClock::new(1.0, MAX_TICKS as f64).unwrap();
        assert_eq!(clock.final_tick, Tick(MAX_TICKS));
    }

    #[test]
    fn sample_count_saturates() {
        let mut clock = SimClock::new(1.0, 1.0).unwrap();
        clock.final_tick = Tick(u64::MAX);
        assert_eq!(clock.sample_count(), usize::MAX);
    }
}

#[cfg(test)]
mod error {
    use crate::error::ensure_finite;

    #[test]
    fn non_finite_values_are_named() {
        assert_eq!(ensure_finite("radius", 2.0).unwrap(), 2.0);
        let err = ensure_finite("radius", f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }
}
