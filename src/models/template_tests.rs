#[cfg(test)]
mod tests {
    use crate::api::{SoundId, TemplateId, TemplateItemId};
    use crate::models::{
        EventTemplate, EventTemplateItem, TemplateDraft, TemplateItemDraft, ValidationError,
    };

    fn item(offset: i32, name: &str) -> EventTemplateItem {
        EventTemplateItem::new(
            TemplateItemId::new(0),
            TemplateId::new(1),
            offset,
            name,
            SoundId::new(1),
        )
        .unwrap()
    }

    #[test]
    fn test_item_offset_bounds() {
        assert_eq!(item(-120, "Eelhelin").offset_minutes, -120);
        assert_eq!(item(120, "Lõpuhelin").offset_minutes, 120);

        let err = EventTemplateItem::new(
            TemplateItemId::new(0),
            TemplateId::new(1),
            121,
            "Helin",
            SoundId::new(1),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::OffsetOutOfRange { offset_minutes: 121 });

        let err = EventTemplateItem::new(
            TemplateItemId::new(0),
            TemplateId::new(1),
            -121,
            "Helin",
            SoundId::new(1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::OffsetOutOfRange {
                offset_minutes: -121
            }
        );
    }

    #[test]
    fn test_template_allows_shared_offsets() {
        let template = EventTemplate::new(
            TemplateId::new(1),
            "Tunni algus",
            None,
            vec![item(0, "Esimene kell"), item(0, "Teine kell")],
        )
        .unwrap();
        assert_eq!(template.items.len(), 2);
    }

    #[test]
    fn test_template_rejects_short_name() {
        let err = EventTemplate::new(TemplateId::new(1), "T", None, vec![]).unwrap_err();
        assert!(matches!(err, ValidationError::NameLength { .. }));
    }

    #[test]
    fn test_template_rejects_long_description() {
        let description = "x".repeat(501);
        let err =
            EventTemplate::new(TemplateId::new(1), "Tunnid", Some(description), vec![])
                .unwrap_err();
        assert!(matches!(err, ValidationError::NameLength { .. }));
    }

    #[test]
    fn test_draft_validates_items() {
        let draft = TemplateDraft {
            name: "Tunnid".to_string(),
            description: None,
            items: vec![TemplateItemDraft {
                offset_minutes: 500,
                event_name: "Helin".to_string(),
                sound_id: SoundId::new(1),
            }],
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::OffsetOutOfRange { .. })
        ));
    }
}
