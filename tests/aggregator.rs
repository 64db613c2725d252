#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tenure::libs::aggregator::{aggregate, contributions, Aggregate};
    use tenure::libs::date_diff::DateDifference;
    use tenure::libs::record::{Category, IdGenerator, IntervalRecord};

    struct Builder {
        ids: IdGenerator,
        records: Vec<IntervalRecord>,
    }

    impl Builder {
        fn new() -> Self {
            Builder {
                ids: IdGenerator::new(),
                records: Vec::new(),
            }
        }

        fn push(mut self, key: &str, start: &str, end: &str, category: Category) -> Self {
            let record = IntervalRecord::new(self.ids.next_id(), key.parse().unwrap(), parse(start), parse(end), category).unwrap();
            self.records.push(record);
            self
        }

        fn active(self, start: &str, end: &str) -> Self {
            self.push("000001", start, end, Category::Active)
        }

        fn leave(self, start: &str, end: &str) -> Self {
            self.push("000002", start, end, Category::Leave)
        }

        fn build(self) -> Vec<IntervalRecord> {
            self.records
        }
    }

    fn parse(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_list_is_zero() {
        let result = aggregate(&[]);
        assert!(result.active.is_zero());
        assert!(result.leave.is_zero());
    }

    #[test]
    fn test_active_and_leave_scenario() {
        let records = Builder::new()
            .push("000001", "2021-01-10", "2021-04-10", Category::Active)
            .push("000002", "2021-04-10", "2021-04-20", Category::Leave)
            .build();

        let result = aggregate(&records);
        assert_eq!(result.active, DateDifference::new(0, 3, 0));
        assert_eq!(result.leave, DateDifference::new(0, 0, 10));
    }

    #[test]
    fn test_overlap_is_counted_once() {
        let overlapping = Builder::new().active("2020-01-01", "2020-06-01").active("2020-03-01", "2020-08-01").build();
        let merged = Builder::new().active("2020-01-01", "2020-08-01").build();

        assert_eq!(aggregate(&overlapping).active, aggregate(&merged).active);
        assert_eq!(aggregate(&overlapping).active, DateDifference::new(0, 7, 0));
    }

    #[test]
    fn test_nested_interval_adds_nothing() {
        let records = Builder::new().active("2020-01-01", "2020-12-01").active("2020-03-01", "2020-05-01").build();

        let result = aggregate(&records);
        assert_eq!(result.active, DateDifference::new(0, 11, 0));

        let parts = contributions(&records);
        assert_eq!(parts[1].difference, None);
        assert_eq!(parts[1].effective_start, parse("2020-12-01"));
        assert!(parts[1].is_clipped());
    }

    #[test]
    fn test_clipping_uses_furthest_end_not_latest_end() {
        // B ends before A, C starts inside A: C must be clipped to A's end, not B's
        let records = Builder::new()
            .active("2020-01-01", "2020-12-01")
            .leave("2020-02-01", "2020-03-01")
            .active("2020-04-01", "2021-01-01")
            .build();

        let result = aggregate(&records);
        assert_eq!(result.active, DateDifference::new(1, 0, 0));
        assert!(result.leave.is_zero());
    }

    #[test]
    fn test_categories_are_independent() {
        let records = Builder::new().active("2020-01-01", "2020-03-15").leave("2020-04-01", "2020-04-11").build();

        let result = aggregate(&records);
        assert_eq!(result.active, DateDifference::new(0, 2, 14));
        assert_eq!(result.leave, DateDifference::new(0, 0, 10));
    }

    #[test]
    fn test_overlap_clipping_spans_categories() {
        let records = Builder::new().active("2021-01-01", "2021-03-01").leave("2021-02-01", "2021-04-01").build();

        let result = aggregate(&records);
        assert_eq!(result.active, DateDifference::new(0, 2, 0));
        assert_eq!(result.leave, DateDifference::new(0, 1, 0));
    }

    #[test]
    fn test_month_end_starts_use_calendar_borrow() {
        let records = Builder::new().active("2021-03-31", "2021-05-30").leave("2022-01-31", "2022-03-01").build();

        let result = aggregate(&records);
        assert_eq!(result.get(Category::Active), DateDifference::new(0, 1, 29));
        assert_eq!(result.get(Category::Leave), DateDifference::new(0, 0, 29));
    }

    #[test]
    fn test_zero_length_interval_adds_nothing() {
        let records = Builder::new().active("2021-05-05", "2021-05-05").build();

        let result = aggregate(&records);
        assert!(result.active.is_zero());
        assert_eq!(contributions(&records)[0].difference, None);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let sorted = Builder::new()
            .active("2019-01-01", "2019-07-01")
            .leave("2019-06-01", "2019-09-15")
            .active("2020-02-10", "2020-03-05")
            .build();
        let mut shuffled = sorted.clone();
        shuffled.reverse();

        assert_eq!(aggregate(&sorted), aggregate(&shuffled));
    }

    #[test]
    fn test_input_is_not_reordered() {
        let records = Builder::new().active("2021-06-01", "2021-07-01").active("2021-01-01", "2021-02-01").build();
        let before = records.clone();

        let _ = aggregate(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_contributions_are_in_start_order() {
        let records = Builder::new().active("2021-06-01", "2021-07-01").leave("2021-01-01", "2021-02-01").build();

        let parts = records.contributions();
        assert_eq!(parts[0].start, parse("2021-01-01"));
        assert_eq!(parts[0].category, Category::Leave);
        assert_eq!(parts[1].start, parse("2021-06-01"));
        assert!(!parts[1].is_clipped());
    }

    #[test]
    fn test_days_carry_into_months() {
        let records = Builder::new().active("2020-01-01", "2020-01-21").active("2020-02-01", "2020-02-21").build();
        assert_eq!(aggregate(&records).active, DateDifference::new(0, 1, 10));
    }

    #[test]
    fn test_months_carry_into_years_after_days() {
        let records = Builder::new()
            .active("2018-01-01", "2018-11-01")
            .active("2019-01-01", "2019-02-20")
            .active("2019-03-01", "2019-03-17")
            .build();
        // 11 months 35 days -> 12 months 5 days -> 1 year 0 months 5 days
        assert_eq!(aggregate(&records).active, DateDifference::new(1, 0, 5));
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let records = Builder::new()
            .active("2010-03-15", "2014-08-02")
            .leave("2012-01-01", "2015-01-01")
            .active("2016-02-29", "2017-02-28")
            .build();

        let first = records.aggregate();
        let second = records.aggregate();
        assert_eq!(first, second);
        assert_eq!(records.as_slice().aggregate(), first);
    }
}
