use super::*;

use chrono::{Duration, TimeZone};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap()
}

fn sample_at(level: Level, offset_ms: i64) -> RawSample {
    RawSample::at(level, base_time() + Duration::milliseconds(offset_ms))
}

fn filter(seed: Level, debounce_ms: u64, active_level: Level) -> DebounceFilter {
    DebounceFilter::new(
        sample_at(seed, 0),
        DebounceInterval::millis(debounce_ms).unwrap(),
        active_level,
    )
}

mod seeding {
    use super::*;

    #[test]
    fn seed_becomes_initial_stable_state() {
        let filter = filter(Level::High, 300, Level::Low);

        let stable = filter.stable();
        assert_eq!(stable.level(), Level::High);
        assert!(!stable.is_active());
        assert_eq!(stable.confirmed_at(), base_time());
    }

    #[test]
    fn seed_at_active_level_is_reported_active() {
        let filter = filter(Level::Low, 300, Level::Low);

        assert!(filter.stable().is_active());
    }
}

mod commits {
    use super::*;

    #[test]
    fn value_held_for_debounce_interval_commits_exactly_once() {
        let mut filter = filter(Level::High, 300, Level::Low);

        assert!(filter.update(sample_at(Level::Low, 100)).is_none());
        assert!(filter.update(sample_at(Level::Low, 200)).is_none());
        assert!(filter.update(sample_at(Level::Low, 300)).is_none());

        // 300 ms held since the candidate started at 100 ms
        let transition = filter.update(sample_at(Level::Low, 400)).unwrap();
        assert_eq!(transition.level(), Level::Low);
        assert!(transition.is_active());
        assert_eq!(
            transition.confirmed_at(),
            base_time() + Duration::milliseconds(400)
        );

        // Further samples at the new stable level emit nothing
        assert!(filter.update(sample_at(Level::Low, 500)).is_none());
        assert!(filter.update(sample_at(Level::Low, 600)).is_none());
    }

    #[test]
    fn gas_sensor_scenario_100ms_poll_300ms_debounce_active_low() {
        // HIGH,HIGH,LOW,LOW,LOW,LOW at a 100 ms cadence; the LOW run starts at 200 ms and
        // reaches 300 ms held at the 500 ms tick
        let mut filter = filter(Level::High, 300, Level::Low);

        let mut transitions = Vec::new();
        for (level, offset) in [
            (Level::High, 100),
            (Level::Low, 200),
            (Level::Low, 300),
            (Level::Low, 400),
            (Level::Low, 500),
        ] {
            if let Some(transition) = filter.update(sample_at(level, offset)) {
                transitions.push(transition);
            }
        }

        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].level(), Level::Low);
        assert!(transitions[0].is_active());
        assert_eq!(
            transitions[0].confirmed_at(),
            base_time() + Duration::milliseconds(500)
        );
    }

    #[test]
    fn zero_debounce_commits_on_first_differing_sample() {
        let mut filter = filter(Level::High, 0, Level::Low);

        let transition = filter.update(sample_at(Level::Low, 100)).unwrap();
        assert_eq!(transition.level(), Level::Low);
        assert_eq!(
            transition.confirmed_at(),
            base_time() + Duration::milliseconds(100)
        );
    }

    #[test]
    fn commit_requires_the_full_interval() {
        let mut filter = filter(Level::High, 300, Level::Low);

        assert!(filter.update(sample_at(Level::Low, 100)).is_none());
        assert!(filter.update(sample_at(Level::Low, 399)).is_none());
        assert!(filter.update(sample_at(Level::Low, 400)).is_some());
    }

    #[test]
    fn transitions_work_in_both_directions() {
        let mut debounced = filter(Level::High, 200, Level::Low);

        // Drive to LOW
        assert!(debounced.update(sample_at(Level::Low, 100)).is_none());
        let down = debounced.update(sample_at(Level::Low, 300)).unwrap();
        assert_eq!(down.level(), Level::Low);
        assert!(down.is_active());

        // And back to HIGH
        assert!(debounced.update(sample_at(Level::High, 400)).is_none());
        let up = debounced.update(sample_at(Level::High, 600)).unwrap();
        assert_eq!(up.level(), Level::High);
        assert!(!up.is_active());
    }
}

mod rejection {
    use super::*;

    #[test]
    fn oscillation_faster_than_debounce_never_commits() {
        let mut filter = filter(Level::High, 300, Level::Low);

        for offset in (100..=1000).step_by(100) {
            let level = if (offset / 100) % 2 == 1 {
                Level::Low
            } else {
                Level::High
            };
            assert!(filter.update(sample_at(level, offset)).is_none());
        }

        assert_eq!(filter.stable().level(), Level::High);
        assert_eq!(filter.stable().confirmed_at(), base_time());
    }

    #[test]
    fn single_transient_sample_never_changes_stable_state() {
        let mut filter = filter(Level::High, 300, Level::Low);

        assert!(filter.update(sample_at(Level::Low, 100)).is_none());
        assert!(filter.update(sample_at(Level::High, 200)).is_none());

        assert_eq!(filter.stable().level(), Level::High);
    }

    #[test]
    fn returning_to_stable_restarts_the_hold_window() {
        let mut filter = filter(Level::High, 300, Level::Low);

        assert!(filter.update(sample_at(Level::Low, 100)).is_none());
        assert!(filter.update(sample_at(Level::Low, 200)).is_none());
        // Excursion ends; the earlier candidate must not be credited
        assert!(filter.update(sample_at(Level::High, 300)).is_none());

        assert!(filter.update(sample_at(Level::Low, 400)).is_none());
        assert!(filter.update(sample_at(Level::Low, 600)).is_none());

        // 300 ms held only counts from the restart at 400 ms
        let transition = filter.update(sample_at(Level::Low, 700)).unwrap();
        assert_eq!(
            transition.confirmed_at(),
            base_time() + Duration::milliseconds(700)
        );
    }

    #[test]
    fn samples_equal_to_stable_state_are_idempotent() {
        let mut filter = filter(Level::High, 300, Level::Low);

        for offset in (100..=500).step_by(100) {
            assert!(filter.update(sample_at(Level::High, offset)).is_none());
        }

        assert_eq!(filter.stable().level(), Level::High);
        assert_eq!(filter.stable().confirmed_at(), base_time());
    }
}
