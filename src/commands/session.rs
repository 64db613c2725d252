//! Interactive record session.
//!
//! The session owns one [`RecordStore`] for its lifetime and drives it from
//! a menu: add, edit, delete, calculate, show, clear all and quit. Records
//! live in memory only and are discarded on quit.
//!
//! Editing follows delete + re-add: the chosen record is removed and its
//! fields pre-fill the form, and submitting the form adds it back under a
//! new id.

use crate::{
    libs::{
        aggregator::AggregateResult,
        config::{Config, SessionConfig},
        formatter::format_date,
        import::{read_drafts, validate_drafts},
        messages::Message,
        record::{parse_date, Category, IntervalRecord, RecordDraft, RecordId, RecordKey},
        store::RecordStore,
        view::View,
    },
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[arg(short, long, help = "Preload records from a CSV or JSON file")]
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Delete,
    Calculate,
    Show,
    ClearAll,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Calculate,
        Action::Show,
        Action::ClearAll,
        Action::Quit,
    ];

    fn label(&self) -> Message {
        match self {
            Action::Add => Message::MenuAddRecord,
            Action::Edit => Message::MenuEditRecord,
            Action::Delete => Message::MenuDeleteRecord,
            Action::Calculate => Message::MenuCalculate,
            Action::Show => Message::MenuShowRecords,
            Action::ClearAll => Message::MenuClearAll,
            Action::Quit => Message::MenuQuit,
        }
    }
}

/// Session-wide settings resolved once from the configuration.
struct Session {
    store: RecordStore,
    date_format: String,
    input_format: String,
    settings: SessionConfig,
    theme: ColorfulTheme,
}

pub fn cmd(args: SessionArgs) -> Result<()> {
    let config = Config::read()?;
    let mut session = Session {
        store: RecordStore::new(),
        date_format: config.date_format(),
        input_format: config.input_date_format(),
        settings: config.session_settings(),
        theme: ColorfulTheme::default(),
    };

    if let Some(path) = &args.file {
        session.preload(path)?;
    }

    msg_info!(Message::SessionStarted(session.input_format.clone()), true);
    session.run()?;
    msg_print!(Message::SessionEnded);
    Ok(())
}

impl Session {
    fn preload(&mut self, path: &Path) -> Result<()> {
        let valid = read_drafts(path)
            .and_then(|drafts| validate_drafts(&drafts, &self.input_format))
            .map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;
        let count = valid.len();
        for draft in valid {
            self.store.insert(draft)?;
        }
        msg_success!(Message::RecordsLoaded {
            count,
            path: path.display().to_string(),
        });
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
        loop {
            let selection = Select::with_theme(&self.theme)
                .with_prompt(Message::PromptSessionAction.to_string())
                .items(&labels)
                .default(0)
                .interact()?;

            match Action::ALL[selection] {
                Action::Add => self.submit(RecordDraft::default())?,
                Action::Edit => self.edit()?,
                Action::Delete => self.delete()?,
                Action::Calculate => self.calculate()?,
                Action::Show => View::records(self.store.records(), &self.date_format)?,
                Action::ClearAll => self.clear_all()?,
                Action::Quit => return Ok(()),
            }
        }
    }

    /// Prompts for a record until it validates, then adds it.
    fn submit(&mut self, mut draft: RecordDraft) -> Result<()> {
        loop {
            draft = self.prompt_draft(&draft)?;
            match self.store.add(&draft, &self.input_format) {
                Ok(id) => {
                    let key = self.store.get(id).map(|r| r.key().to_string()).unwrap_or_default();
                    msg_success!(Message::RecordAdded(key));
                    return Ok(());
                }
                Err(e) => msg_error!(Message::RecordInvalid(e.to_string())),
            }
        }
    }

    fn edit(&mut self) -> Result<()> {
        let Some(id) = self.select_record()? else {
            return Ok(());
        };
        let key = self.store.get(id).map(|r| r.key().to_string()).unwrap_or_default();

        if !confirm_removal(&self.settings, || self.confirm(Message::ConfirmEditRecord(key.clone())))? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        if let Some(draft) = self.store.take_for_edit(id, &self.input_format) {
            msg_info!(Message::RecordEditing(draft.key.clone().unwrap_or_default()));
            self.submit(draft)?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.select_record()? else {
            return Ok(());
        };
        let key = self.store.get(id).map(|r| r.key().to_string()).unwrap_or_default();

        if !confirm_removal(&self.settings, || self.confirm(Message::ConfirmDeleteRecord(key.clone())))? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        if self.store.delete(id).is_some() {
            msg_success!(Message::RecordDeleted(key));
        }
        Ok(())
    }

    fn calculate(&self) -> Result<()> {
        let contributions = self.store.contributions();
        View::contributions(self.store.records(), &contributions, &self.date_format)?;
        View::totals(&self.store.aggregate())
    }

    fn clear_all(&mut self) -> Result<()> {
        if self.store.is_empty() {
            msg_info!(Message::NoRecords);
            return Ok(());
        }
        if self.settings.confirm_clear && !self.confirm(Message::ConfirmClearAll(self.store.len()))? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        let removed = self.store.clear();
        msg_success!(Message::RecordsCleared(removed));
        View::totals(&AggregateResult::default())
    }

    fn confirm(&self, prompt: Message) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?)
    }

    fn select_record(&self) -> Result<Option<RecordId>> {
        let records = self.store.records();
        if records.is_empty() {
            msg_info!(Message::NoRecords);
            return Ok(None);
        }

        let items: Vec<String> = records.iter().map(|r| self.describe(r)).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(Message::PromptSelectRecord.to_string())
            .items(&items)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|index| records[index].id()))
    }

    fn describe(&self, record: &IntervalRecord) -> String {
        format!(
            "{}  {} → {}  {}",
            record.key(),
            format_date(record.start(), &self.date_format),
            format_date(record.end(), &self.date_format),
            record.category()
        )
    }

    /// Collects one record's fields, pre-filled from `defaults`.
    ///
    /// Each field is checked as it is typed; the start/end ordering is
    /// checked by the store on submission.
    fn prompt_draft(&self, defaults: &RecordDraft) -> Result<RecordDraft> {
        let key = prompt_text(&self.theme, Message::PromptRecordKey, defaults.key.clone(), |input: &String| {
            input.parse::<RecordKey>().map(|_| ()).map_err(|e| e.to_string())
        })?;

        let format = self.input_format.as_str();
        let date_check = |input: &String| parse_date(input, format).map(|_| ()).map_err(|e| e.to_string());
        let start = prompt_text(&self.theme, Message::PromptStartDate(format.to_string()), defaults.start.clone(), date_check)?;
        let end = prompt_text(&self.theme, Message::PromptEndDate(format.to_string()), defaults.end.clone(), date_check)?;

        let current = defaults
            .category
            .as_deref()
            .and_then(|c| c.parse::<Category>().ok())
            .unwrap_or(Category::Active);
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(Message::PromptCategory.to_string())
            .items(&labels)
            .default(Category::ALL.iter().position(|c| *c == current).unwrap_or(0))
            .interact()?;

        Ok(RecordDraft {
            key: Some(key),
            start: Some(start),
            end: Some(end),
            category: Some(Category::ALL[index].label().to_lowercase()),
        })
    }
}

/// Edit and delete both take the record out of the store, so both go
/// through the `confirm_delete` setting. `ask` only runs when it is on.
fn confirm_removal<F>(settings: &SessionConfig, ask: F) -> Result<bool>
where
    F: FnOnce() -> Result<bool>,
{
    if settings.confirm_delete {
        ask()
    } else {
        Ok(true)
    }
}

fn prompt_text<'a, F>(theme: &'a ColorfulTheme, prompt: Message, default: Option<String>, validator: F) -> Result<String>
where
    F: FnMut(&String) -> Result<(), String> + 'a,
{
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt.to_string());
    if let Some(default) = default.filter(|d| !d.is_empty()) {
        input = input.default(default);
    }
    Ok(input.validate_with(validator).interact_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(confirm_delete: bool) -> SessionConfig {
        SessionConfig {
            confirm_delete,
            confirm_clear: true,
        }
    }

    #[test]
    fn test_removal_asks_when_confirmation_is_on() {
        let mut asked = false;
        let confirmed = confirm_removal(&settings(true), || {
            asked = true;
            Ok(false)
        })
        .unwrap();
        assert!(asked);
        assert!(!confirmed);
    }

    #[test]
    fn test_removal_skips_prompt_when_confirmation_is_off() {
        let mut asked = false;
        let confirmed = confirm_removal(&settings(false), || {
            asked = true;
            Ok(false)
        })
        .unwrap();
        assert!(!asked);
        assert!(confirmed);
    }

    #[test]
    fn test_edit_confirmation_names_the_record() {
        assert_eq!(
            Message::ConfirmEditRecord("000042".to_string()).to_string(),
            "Record 000042 is removed while it is edited. Continue?"
        );
    }
}
