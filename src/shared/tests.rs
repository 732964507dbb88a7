use super::*;

mod level {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("high".parse::<Level>().unwrap(), Level::High);
        assert_eq!("HIGH".parse::<Level>().unwrap(), Level::High);
        assert_eq!("Low".parse::<Level>().unwrap(), Level::Low);
    }

    #[test]
    fn rejects_unknown_value() {
        assert!("floating".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn toggled_flips_level() {
        assert_eq!(Level::High.toggled(), Level::Low);
        assert_eq!(Level::Low.toggled(), Level::High);
    }
}

mod pull {
    use super::*;

    #[test]
    fn parses_all_settings() {
        assert_eq!("none".parse::<Pull>().unwrap(), Pull::None);
        assert_eq!("up".parse::<Pull>().unwrap(), Pull::Up);
        assert_eq!("Down".parse::<Pull>().unwrap(), Pull::Down);
    }

    #[test]
    fn rejects_unknown_value() {
        assert!("strong".parse::<Pull>().is_err());
    }
}

mod bcm_pin {
    use super::*;

    #[test]
    fn accepts_header_range() {
        assert_eq!(BcmPin::try_from(0u8).unwrap().as_u8(), 0);
        assert_eq!(BcmPin::try_from(17u8).unwrap().as_u8(), 17);
        assert_eq!(BcmPin::try_from(27u8).unwrap().as_u8(), 27);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(BcmPin::try_from(28u8).is_err());
        assert!(BcmPin::try_from(255u8).is_err());
    }

    #[test]
    fn displays_bcm_name() {
        let pin = BcmPin::try_from(17u8).unwrap();
        assert_eq!(pin.to_string(), "GPIO17");
    }
}

mod poll_interval {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(PollInterval::millis(1).is_ok());
        assert!(PollInterval::millis(1000).is_ok());
        assert!(PollInterval::try_from(Duration::hours(1)).is_ok());
    }

    #[test]
    fn rejects_zero() {
        assert!(PollInterval::millis(0).is_err());
    }

    #[test]
    fn rejects_too_long() {
        let interval = Duration::hours(1) + Duration::milliseconds(1);
        assert!(PollInterval::try_from(interval).is_err());
    }

    #[test]
    fn converts_to_std() {
        let interval = PollInterval::millis(250).unwrap();
        assert_eq!(interval.to_std(), std::time::Duration::from_millis(250));
    }
}

mod debounce_interval {
    use super::*;

    #[test]
    fn accepts_zero() {
        assert_eq!(DebounceInterval::millis(0).unwrap(), DebounceInterval::ZERO);
    }

    #[test]
    fn accepts_typical_value() {
        let debounce = DebounceInterval::millis(300).unwrap();
        assert_eq!(debounce.as_duration(), Duration::milliseconds(300));
    }

    #[test]
    fn rejects_negative() {
        assert!(DebounceInterval::try_from(Duration::milliseconds(-1)).is_err());
    }

    #[test]
    fn rejects_too_long() {
        let debounce = Duration::hours(1) + Duration::milliseconds(1);
        assert!(DebounceInterval::try_from(debounce).is_err());
    }
}
