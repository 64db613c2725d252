use super::aggregator::{AggregateResult, Contribution};
use super::formatter::{format_difference, FormattedContribution, FormattedRecord};
use super::messages::Message;
use super::record::IntervalRecord;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the records in insertion order.
    pub fn records(records: &[IntervalRecord], date_format: &str) -> Result<()> {
        if records.is_empty() {
            msg_print!(Message::NoRecords);
            return Ok(());
        }

        msg_print!(Message::RecordsHeader(records.len()));
        let mut table = Table::new();
        table.add_row(row!["NO.", "KEY", "START", "END", "CATEGORY"]);
        for (index, record) in records.iter().enumerate() {
            let r = FormattedRecord::new(index + 1, record, date_format);
            table.add_row(row![r.number, r.key, r.start, r.end, r.category]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints what each record adds after overlap clipping, in start order.
    pub fn contributions(records: &[IntervalRecord], contributions: &[Contribution], date_format: &str) -> Result<()> {
        if contributions.is_empty() {
            return Ok(());
        }

        msg_print!(Message::ContributionsHeader, true);
        let mut table = Table::new();
        table.add_row(row!["KEY", "CATEGORY", "COUNTED FROM", "END", "COUNTED"]);
        for contribution in contributions {
            let key = records
                .iter()
                .find(|r| r.id() == contribution.id)
                .map(|r| r.key().to_string())
                .unwrap_or_default();
            let c = FormattedContribution::new(contribution, date_format);
            table.add_row(row![key, c.category, c.counted_from, c.end, c.counted]);
        }
        table.printstd();

        Ok(())
    }

    pub fn totals(result: &AggregateResult) -> Result<()> {
        msg_print!(Message::TotalsHeader, true);
        msg_print!(Message::ActiveTotal(format_difference(&result.active)));
        msg_print!(Message::LeaveTotal(format_difference(&result.leave)));
        Ok(())
    }
}
