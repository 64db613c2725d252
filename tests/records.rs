#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tenure::libs::record::{Category, IdGenerator, IntervalRecord, RecordDraft, RecordError};

    const FORMAT: &str = "%Y-%m-%d";

    #[test]
    fn test_valid_draft() {
        let valid = RecordDraft::new("012345", "2021-01-10", "2021-04-10", "active").validate(FORMAT).unwrap();
        assert_eq!(valid.key.as_str(), "012345");
        assert_eq!(valid.start, NaiveDate::from_ymd_opt(2021, 1, 10).unwrap());
        assert_eq!(valid.end, NaiveDate::from_ymd_opt(2021, 4, 10).unwrap());
        assert_eq!(valid.category, Category::Active);
    }

    #[test]
    fn test_missing_fields_reported_first() {
        let draft = RecordDraft {
            key: Some("bad".to_string()),
            start: Some("2021-01-10".to_string()),
            end: None,
            category: Some("active".to_string()),
        };
        assert_eq!(draft.validate(FORMAT), Err(RecordError::MissingFields));

        let blank = RecordDraft::new("012345", "  ", "2021-04-10", "leave");
        assert_eq!(blank.validate(FORMAT), Err(RecordError::MissingFields));
    }

    #[test]
    fn test_key_must_be_six_digits() {
        for key in ["12345", "1234567", "12 456", "abcdef"] {
            let draft = RecordDraft::new(key, "2021-01-10", "2021-04-10", "active");
            assert!(matches!(draft.validate(FORMAT), Err(RecordError::InvalidKey(_))), "{key}");
        }
    }

    #[test]
    fn test_dates_follow_input_format() {
        let draft = RecordDraft::new("012345", "10/01/2021", "2021-04-10", "active");
        assert!(matches!(draft.validate(FORMAT), Err(RecordError::InvalidDate { .. })));

        let draft = RecordDraft::new("012345", "10/01/2021", "10/04/2021", "active");
        assert!(draft.validate("%d/%m/%Y").is_ok());
    }

    #[test]
    fn test_unknown_category() {
        let draft = RecordDraft::new("012345", "2021-01-10", "2021-04-10", "vacation");
        assert!(matches!(draft.validate(FORMAT), Err(RecordError::InvalidCategory(_))));
    }

    #[test]
    fn test_start_after_end_rejected() {
        let draft = RecordDraft::new("012345", "2021-04-11", "2021-04-10", "leave");
        assert!(matches!(draft.validate(FORMAT), Err(RecordError::StartAfterEnd { .. })));
    }

    #[test]
    fn test_same_day_interval_allowed() {
        let draft = RecordDraft::new("012345", "2021-04-10", "2021-04-10", "leave");
        assert!(draft.validate(FORMAT).is_ok());
    }

    #[test]
    fn test_record_constructor_enforces_order() {
        let mut ids = IdGenerator::new();
        let start = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let result = IntervalRecord::new(ids.next_id(), "000001".parse().unwrap(), start, end, Category::Active);
        assert_eq!(result, Err(RecordError::StartAfterEnd { start, end }));
    }

    #[test]
    fn test_record_round_trips_to_draft() {
        let mut ids = IdGenerator::new();
        let record = IntervalRecord::new(
            ids.next_id(),
            "000042".parse().unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            Category::Leave,
        )
        .unwrap();

        let draft = record.to_draft("%d/%m/%Y");
        assert_eq!(draft, RecordDraft::new("000042", "01/03/2020", "01/05/2020", "leave"));
    }
}
