//! Unit tests for am-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, ProcessId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(ProcessId(42).index(), 42);
        assert_eq!(NodeId(0).index(), 0);
    }

    #[test]
    fn ordered_by_inner() {
        assert!(ProcessId(3) < ProcessId(10));
    }

    #[test]
    fn display() {
        assert_eq!(ProcessId(7).to_string(), "ProcessId(7)");
        assert_eq!(NodeId(2).to_string(), "NodeId(2)");
    }
}

#[cfg(test)]
mod pos {
    use crate::{Move, Pos};

    #[test]
    fn offset_inside_bounds() {
        let p = Pos::new(1, 1);
        assert_eq!(p.offset(Move::UP, 3, 5), Some(Pos::new(0, 1)));
        assert_eq!(p.offset(Move::RIGHT, 3, 5), Some(Pos::new(1, 2)));
        assert_eq!(p.offset(Move::STAY, 3, 5), Some(p));
    }

    #[test]
    fn offset_rejects_out_of_bounds() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.offset(Move::UP, 3, 5), None);
        assert_eq!(corner.offset(Move::LEFT, 3, 5), None);
        assert_eq!(Pos::new(2, 4).offset(Move::DOWN, 3, 5), None);
        assert_eq!(Pos::new(2, 4).offset(Move::RIGHT, 3, 5), None);
    }

    #[test]
    fn reverse_detection() {
        assert!(Move::DOWN.is_reverse_of(Move::UP));
        assert!(Move::LEFT.is_reverse_of(Move::RIGHT));
        assert!(!Move::UP.is_reverse_of(Move::UP));
        // A stay is never "reversed": nothing is suppressed after standing still.
        assert!(!Move::STAY.is_reverse_of(Move::STAY));
        // The sentinel's reverse is (2, 2), which no candidate equals.
        assert!(Move::ALL.iter().all(|m| !m.is_reverse_of(Move::UNREACHABLE)));
    }

    #[test]
    fn candidate_order_is_fixed() {
        assert_eq!(Move::ALL[0], Move::new(-1, 0));
        assert_eq!(Move::ALL[4], Move::STAY);
        assert_eq!(&Move::ALL[..4], &Move::DIRECTIONS);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert!(Tick(5) < t);
        assert_eq!(t.to_string(), "T10");
    }

    #[test]
    fn clock_only_moves_forward() {
        let mut clock = SimClock::new();
        clock.advance_to(Tick(300));
        assert_eq!(clock.elapsed_ms(), 300);
        clock.advance_to(Tick(100));
        assert_eq!(clock.current_tick, Tick(300));
        assert!((clock.elapsed_secs() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new();
        clock.advance_to(Tick(1_500));
        clock.record_step();
        assert_eq!(clock.to_string(), "T1500 (1.500 s, 1 steps)");
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{ProcessId, ProcessRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ProcessRng::new(12345, ProcessId(0));
        let mut r2 = ProcessRng::new(12345, ProcessId(0));
        for _ in 0..100 {
            let a: f64 = r1.inner().r#gen();
            let b: f64 = r2.inner().r#gen();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_processes_differ() {
        let mut r0 = ProcessRng::new(1, ProcessId(0));
        let mut r1 = ProcessRng::new(1, ProcessId(1));
        let a: u64 = r0.inner().r#gen();
        let b: u64 = r1.inner().r#gen();
        assert_ne!(a, b, "seeds for adjacent processes should diverge");
    }

    #[test]
    fn maze_stream_differs_from_first_process() {
        for seed in [0, 1, 42, u64::MAX] {
            let mut maze = SimRng::new(seed);
            let mut first = ProcessRng::new(seed, ProcessId(0));
            let a: Vec<u64> = (0..4).map(|_| maze.random()).collect();
            let b: Vec<u64> = (0..4).map(|_| first.inner().r#gen()).collect();
            assert_ne!(a, b, "seed {seed}");
        }
    }

    #[test]
    fn sim_rng_deterministic() {
        let mut r1 = SimRng::new(9);
        let mut r2 = SimRng::new(9);
        for _ in 0..100 {
            assert_eq!(r1.randint(0, 1_000), r2.randint(0, 1_000));
        }
    }

    #[test]
    fn randint_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.randint(3, 7);
            assert!((3..7).contains(&v));
        }
    }
}
