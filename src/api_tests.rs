#[cfg(test)]
mod tests {
    use crate::api::{SoundId, TimetableId, UserId};

    #[test]
    fn test_id_value_roundtrip() {
        assert_eq!(UserId::new(7).value(), 7);
        assert_eq!(TimetableId::new(42).value(), 42);
        assert_eq!(SoundId::new(-1).value(), -1);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TimetableId::new(13).to_string(), "13");
        assert_eq!(UserId::new(0).to_string(), "0");
    }

    #[test]
    fn test_id_ordering() {
        assert!(TimetableId::new(1) < TimetableId::new(2));
    }

    #[test]
    fn test_id_serde() {
        let id = SoundId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let back: SoundId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
