#[cfg(test)]
mod tests {
    use crate::models::{ValidationError, WeekdayMask};
    use chrono::Weekday;
    use proptest::prelude::*;

    #[test]
    fn test_mask_rejects_zero() {
        assert_eq!(
            WeekdayMask::new(0),
            Err(ValidationError::InvalidMask { value: 0 })
        );
    }

    #[test]
    fn test_mask_rejects_above_127() {
        assert_eq!(
            WeekdayMask::new(128),
            Err(ValidationError::InvalidMask { value: 128 })
        );
        assert_eq!(
            WeekdayMask::new(255),
            Err(ValidationError::InvalidMask { value: 255 })
        );
    }

    #[test]
    fn test_mask_accepts_bounds() {
        assert_eq!(WeekdayMask::new(1).unwrap().value(), 1);
        assert_eq!(WeekdayMask::new(127).unwrap().value(), 127);
    }

    #[test]
    fn test_matches_monday_is_bit_zero() {
        let mask = WeekdayMask::new(1).unwrap();
        assert!(mask.matches(Weekday::Mon));
        assert!(!mask.matches(Weekday::Tue));
        assert!(!mask.matches(Weekday::Sun));
    }

    #[test]
    fn test_matches_sunday_is_bit_six() {
        let mask = WeekdayMask::new(0b100_0000).unwrap();
        assert!(mask.matches(Weekday::Sun));
        assert!(!mask.matches(Weekday::Mon));
        assert!(!mask.matches(Weekday::Sat));
    }

    #[test]
    fn test_weekdays_mon_fri() {
        let mask = WeekdayMask::new(0b001_1111).unwrap();
        assert!(mask.matches(Weekday::Mon));
        assert!(mask.matches(Weekday::Fri));
        assert!(!mask.matches(Weekday::Sat));
        assert!(!mask.matches(Weekday::Sun));
    }

    #[test]
    fn test_encode_rejects_empty_set() {
        assert_eq!(
            WeekdayMask::encode(&[]),
            Err(ValidationError::InvalidMask { value: 0 })
        );
    }

    #[test]
    fn test_encode_decode_examples() {
        let mask = WeekdayMask::encode(&[Weekday::Mon, Weekday::Wed, Weekday::Sun]).unwrap();
        assert_eq!(mask.value(), 0b100_0101);
        assert_eq!(
            mask.decode(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]
        );
    }

    #[test]
    fn test_encode_is_idempotent_over_duplicates() {
        let once = WeekdayMask::encode(&[Weekday::Tue]).unwrap();
        let twice = WeekdayMask::encode(&[Weekday::Tue, Weekday::Tue]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_roundtrip_all_nonzero_masks() {
        // Exhaustive over the whole 7-bit domain.
        for value in 1u8..=127 {
            let mask = WeekdayMask::new(value).unwrap();
            let days = mask.decode();
            let back = WeekdayMask::encode(&days).unwrap();
            assert_eq!(back.value(), value);
        }
    }

    #[test]
    fn test_serde_rejects_invalid_mask() {
        let err = serde_json::from_str::<WeekdayMask>("0");
        assert!(err.is_err());
        let err = serde_json::from_str::<WeekdayMask>("200");
        assert!(err.is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mask = WeekdayMask::new(31).unwrap();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "31");
        let back: WeekdayMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
    }

    proptest! {
        #[test]
        fn prop_decode_encode_roundtrip(value in 1u8..=127) {
            let mask = WeekdayMask::new(value).unwrap();
            let back = WeekdayMask::encode(&mask.decode()).unwrap();
            prop_assert_eq!(back, mask);
        }

        #[test]
        fn prop_matches_agrees_with_decode(value in 1u8..=127) {
            let mask = WeekdayMask::new(value).unwrap();
            let days = mask.decode();
            for day in [
                chrono::Weekday::Mon,
                chrono::Weekday::Tue,
                chrono::Weekday::Wed,
                chrono::Weekday::Thu,
                chrono::Weekday::Fri,
                chrono::Weekday::Sat,
                chrono::Weekday::Sun,
            ] {
                prop_assert_eq!(mask.matches(day), days.contains(&day));
            }
        }
    }
}
