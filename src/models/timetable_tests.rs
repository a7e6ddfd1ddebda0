#[cfg(test)]
mod tests {
    use crate::api::{EventId, SoundId, TimetableId, UserId};
    use crate::models::{
        Timetable, TimetableDraft, TimetableEvent, ValidationError, WeekdayMask,
    };
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_timetable_valid() {
        let tt = Timetable::new(
            TimetableId::new(1),
            UserId::new(1),
            "Põhiplaan",
            date(2024, 1, 1),
            None,
            WeekdayMask::new(31).unwrap(),
        )
        .unwrap();
        assert_eq!(tt.name, "Põhiplaan");
        assert!(tt.events.is_empty());
    }

    #[test]
    fn test_new_timetable_rejects_inverted_window() {
        let err = Timetable::new(
            TimetableId::new(1),
            UserId::new(1),
            "Plaan",
            date(2024, 3, 31),
            Some(date(2024, 3, 1)),
            WeekdayMask::new(31).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWindow { .. }));
    }

    #[test]
    fn test_new_timetable_accepts_single_day_window() {
        let tt = Timetable::new(
            TimetableId::new(1),
            UserId::new(1),
            "Üks päev",
            date(2024, 3, 1),
            Some(date(2024, 3, 1)),
            WeekdayMask::ALL,
        )
        .unwrap();
        assert!(tt.window_contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_new_timetable_rejects_short_name() {
        let err = Timetable::new(
            TimetableId::new(1),
            UserId::new(1),
            "A",
            date(2024, 1, 1),
            None,
            WeekdayMask::ALL,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::NameLength { .. }));
    }

    #[test]
    fn test_window_contains_bounds() {
        let tt = Timetable::new(
            TimetableId::new(1),
            UserId::new(1),
            "Plaan",
            date(2024, 3, 1),
            Some(date(2024, 3, 31)),
            WeekdayMask::ALL,
        )
        .unwrap();

        assert!(!tt.window_contains(date(2024, 2, 29)));
        assert!(tt.window_contains(date(2024, 3, 1)));
        assert!(tt.window_contains(date(2024, 3, 31)));
        assert!(!tt.window_contains(date(2024, 4, 1)));
    }

    #[test]
    fn test_window_contains_open_ended() {
        let tt = Timetable::new(
            TimetableId::new(1),
            UserId::new(1),
            "Plaan",
            date(2024, 1, 1),
            None,
            WeekdayMask::ALL,
        )
        .unwrap();

        assert!(!tt.window_contains(date(2023, 12, 31)));
        assert!(tt.window_contains(date(2024, 1, 1)));
        assert!(tt.window_contains(date(2099, 12, 31)));
    }

    #[test]
    fn test_event_name_validation() {
        let err = TimetableEvent::new(
            EventId::new(1),
            TimetableId::new(1),
            "x",
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            SoundId::new(1),
            None,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::NameLength { .. }));
    }

    #[test]
    fn test_draft_validate_mirrors_constructor() {
        let draft = TimetableDraft {
            name: "Plaan".to_string(),
            valid_from: date(2024, 3, 31),
            valid_until: Some(date(2024, 3, 1)),
            weekdays: WeekdayMask::ALL,
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidWindow { .. })
        ));
    }
}
