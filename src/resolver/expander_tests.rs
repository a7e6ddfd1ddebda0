#[cfg(test)]
mod tests {
    use crate::api::{SoundId, TemplateId, TemplateItemId};
    use crate::models::{EventTemplate, EventTemplateItem};
    use crate::resolver::{expand, ResolveError};
    use chrono::NaiveTime;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn template(items: Vec<(i32, &str)>) -> EventTemplate {
        let template_id = TemplateId::new(1);
        let items = items
            .into_iter()
            .enumerate()
            .map(|(i, (offset, name))| {
                EventTemplateItem::new(
                    TemplateItemId::new(i as i64 + 1),
                    template_id,
                    offset,
                    name,
                    SoundId::new(1),
                )
                .unwrap()
            })
            .collect();
        EventTemplate::new(template_id, "Tunnid", None, items).unwrap()
    }

    #[test]
    fn test_lesson_template_expansion() {
        let template = template(vec![(-10, "Eelhelin"), (0, "Alghelin"), (15, "Lõpuhelin")]);
        let events = expand(&template, time(9, 0)).unwrap();

        let got: Vec<(NaiveTime, &str)> = events
            .iter()
            .map(|e| (e.time, e.event_name.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (time(8, 50), "Eelhelin"),
                (time(9, 0), "Alghelin"),
                (time(9, 15), "Lõpuhelin"),
            ]
        );
    }

    #[test]
    fn test_expansion_orders_by_resulting_time() {
        let template = template(vec![(15, "Lõpuhelin"), (-10, "Eelhelin"), (0, "Alghelin")]);
        let events = expand(&template, time(12, 0)).unwrap();
        let times: Vec<NaiveTime> = events.iter().map(|e| e.time).collect();
        assert_eq!(times, vec![time(11, 50), time(12, 0), time(12, 15)]);
    }

    #[test]
    fn test_shared_offset_keeps_authoring_order() {
        let template = template(vec![(0, "Esimene kell"), (0, "Teine kell")]);
        let events = expand(&template, time(10, 0)).unwrap();
        assert_eq!(events[0].event_name, "Esimene kell");
        assert_eq!(events[1].event_name, "Teine kell");
        assert_eq!(events[0].time, events[1].time);
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let template = template(vec![(-10, "Eelhelin"), (0, "Alghelin"), (15, "Lõpuhelin")]);
        let first = expand(&template, time(9, 0)).unwrap();
        let second = expand(&template, time(9, 0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_offset_past_midnight_is_rejected() {
        let template = template(vec![(90, "Hiline helin")]);
        let err = expand(&template, time(23, 0)).unwrap_err();
        assert_eq!(
            err,
            ResolveError::TemplateExpansionOutOfRange {
                anchor: time(23, 0),
                offset_minutes: 90,
            }
        );
    }

    #[test]
    fn test_offset_before_midnight_is_rejected() {
        let template = template(vec![(-30, "Varane helin")]);
        let err = expand(&template, time(0, 15)).unwrap_err();
        assert_eq!(
            err,
            ResolveError::TemplateExpansionOutOfRange {
                anchor: time(0, 15),
                offset_minutes: -30,
            }
        );
    }

    #[test]
    fn test_offset_reaching_exactly_midnight_is_allowed() {
        let template = template(vec![(-120, "Kesköö")]);
        let events = expand(&template, time(2, 0)).unwrap();
        assert_eq!(events[0].time, time(0, 0));
    }

    #[test]
    fn test_one_bad_item_rejects_whole_expansion() {
        let template = template(vec![(0, "Alghelin"), (120, "Hiline helin")]);
        assert!(expand(&template, time(23, 30)).is_err());
    }

    #[test]
    fn test_empty_template_expands_to_nothing() {
        let template = template(vec![]);
        assert!(expand(&template, time(9, 0)).unwrap().is_empty());
    }
}
