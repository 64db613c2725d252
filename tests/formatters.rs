#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tenure::libs::aggregator::contributions;
    use tenure::libs::date_diff::DateDifference;
    use tenure::libs::formatter::{format_date, format_difference, FormattedContribution, FormattedRecord, NOTHING_COUNTED};
    use tenure::libs::messages::Message;
    use tenure::libs::record::{Category, IdGenerator, IntervalRecord};

    fn record(ids: &mut IdGenerator, key: &str, start: (i32, u32, u32), end: (i32, u32, u32), category: Category) -> IntervalRecord {
        IntervalRecord::new(
            ids.next_id(),
            key.parse().unwrap(),
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            category,
        )
        .unwrap()
    }

    #[test]
    fn test_format_date_default_locale_style() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "05/01/2021");
        assert_eq!(format_date(date, "%Y-%m-%d"), "2021-01-05");
    }

    #[test]
    fn test_format_difference() {
        assert_eq!(format_difference(&DateDifference::zero()), "0 years, 0 months, 0 days");
        assert_eq!(format_difference(&DateDifference::new(1, 1, 1)), "1 year, 1 month, 1 day");
        assert_eq!(format_difference(&DateDifference::new(3, 0, 12)), "3 years, 0 months, 12 days");
    }

    #[test]
    fn test_formatted_record() {
        let mut ids = IdGenerator::new();
        let r = record(&mut ids, "000001", (2021, 1, 10), (2021, 4, 10), Category::Active);

        let formatted = FormattedRecord::new(1, &r, "%d/%m/%Y");
        assert_eq!(formatted.number, 1);
        assert_eq!(formatted.key, "000001");
        assert_eq!(formatted.start, "10/01/2021");
        assert_eq!(formatted.end, "10/04/2021");
        assert_eq!(formatted.category, "Active");
    }

    #[test]
    fn test_formatted_contributions() {
        let mut ids = IdGenerator::new();
        let records = vec![
            record(&mut ids, "000001", (2020, 1, 1), (2020, 12, 1), Category::Active),
            record(&mut ids, "000002", (2020, 3, 1), (2020, 5, 1), Category::Leave),
            record(&mut ids, "000003", (2020, 11, 1), (2021, 1, 1), Category::Active),
        ];
        let parts = contributions(&records);

        let counted = FormattedContribution::new(&parts[0], "%Y-%m-%d");
        assert_eq!(counted.counted_from, "2020-01-01");
        assert_eq!(counted.counted, "0 years, 11 months, 0 days");

        let nested = FormattedContribution::new(&parts[1], "%Y-%m-%d");
        assert_eq!(nested.category, "Leave");
        assert_eq!(nested.counted_from, NOTHING_COUNTED);
        assert_eq!(nested.counted, NOTHING_COUNTED);

        let clipped = FormattedContribution::new(&parts[2], "%Y-%m-%d");
        assert_eq!(clipped.counted_from, "2020-12-01");
        assert_eq!(clipped.counted, "0 years, 1 month, 0 days");
    }

    #[test]
    fn test_total_messages() {
        let total = format_difference(&DateDifference::new(0, 3, 0));
        assert_eq!(Message::ActiveTotal(total).to_string(), "Active time: 0 years, 3 months, 0 days");
        assert_eq!(Message::RecordsCleared(2).to_string(), "Deleted 2 record(s).");
    }
}
