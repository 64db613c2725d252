use crate::{
    libs::{config::Config, date_diff::DateDifference, formatter::format_difference, messages::Message, record::parse_date},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[arg(help = "Start date")]
    start: String,
    #[arg(help = "End date")]
    end: String,
}

/// Prints the raw calendar difference and its normalized form.
pub fn cmd(args: DiffArgs) -> Result<()> {
    let input_format = Config::read()?.input_date_format();
    let start = parse_date(&args.start, &input_format)?;
    let end = parse_date(&args.end, &input_format)?;

    let difference = DateDifference::between(start, end)?;
    msg_print!(Message::RawDifference(format_difference(&difference)));
    msg_print!(Message::NormalizedDifference(format_difference(&difference.normalized())));

    Ok(())
}
