//! Display implementation for tenure application messages.
//!
//! Every user-facing string lives here, so the rest of the code base works
//! with structured [`Message`] values and never formats text inline.
//!
//! ```rust
//! use tenure::libs::messages::Message;
//!
//! let message = Message::RecordAdded("000123".to_string());
//! assert_eq!(message.to_string(), "Record 000123 added");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to remove".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::ConfigModuleSession => "Session settings".to_string(),
            Message::ConfigInvalidDateFormat(format) => format!("`{}` is not a usable date format", format),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptDateFormat => "Enter the date display format (chrono strftime)".to_string(),
            Message::PromptInputDateFormat => "Enter the date input format (chrono strftime)".to_string(),
            Message::PromptConfirmDeleteSetting => "Ask for confirmation before deleting a record?".to_string(),
            Message::PromptConfirmClearSetting => "Ask for confirmation before clearing all records?".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionStarted(format) => format!("New session started. Dates are entered as {}. Records are kept until you quit.", format),
            Message::SessionEnded => "Session ended, records discarded.".to_string(),
            Message::PromptSessionAction => "What would you like to do?".to_string(),
            Message::MenuAddRecord => "Add record".to_string(),
            Message::MenuEditRecord => "Edit record".to_string(),
            Message::MenuDeleteRecord => "Delete record".to_string(),
            Message::MenuCalculate => "Calculate totals".to_string(),
            Message::MenuShowRecords => "Show records".to_string(),
            Message::MenuClearAll => "Delete all records".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === RECORD MESSAGES ===
            Message::PromptRecordKey => "Enter the 6-digit key".to_string(),
            Message::PromptStartDate(format) => format!("Enter the start date ({})", format),
            Message::PromptEndDate(format) => format!("Enter the end date ({})", format),
            Message::PromptCategory => "Select the category".to_string(),
            Message::PromptSelectRecord => "Select a record".to_string(),
            Message::RecordAdded(key) => format!("Record {} added", key),
            Message::RecordDeleted(key) => format!("Record {} deleted", key),
            Message::RecordEditing(key) => format!("Editing record {}. Submit to save it again.", key),
            Message::RecordInvalid(reason) => format!("Record not saved: {}", reason),
            Message::NoRecords => "No records yet.".to_string(),
            Message::ConfirmDeleteRecord(key) => format!("Are you sure you want to delete record {}?", key),
            Message::ConfirmEditRecord(key) => format!("Record {} is removed while it is edited. Continue?", key),
            Message::ConfirmClearAll(count) => format!("Are you sure you want to delete all {} records?", count),
            Message::RecordsCleared(count) => format!("Deleted {} record(s).", count),

            // === RESULT MESSAGES ===
            Message::RecordsHeader(count) => format!("Records ({})", count),
            Message::ContributionsHeader => "Counted time per record (overlaps removed)".to_string(),
            Message::TotalsHeader => "Totals".to_string(),
            Message::ActiveTotal(total) => format!("Active time: {}", total),
            Message::LeaveTotal(total) => format!("Leave time: {}", total),
            Message::RawDifference(diff) => format!("Difference: {}", diff),
            Message::NormalizedDifference(diff) => format!("Normalized: {}", diff),

            // === IMPORT MESSAGES ===
            Message::RecordsLoaded { count, path } => format!("Loaded {} record(s) from {}", count, path),
            Message::ImportFailed(error) => format!("Failed to load records: {}", error),
        };
        write!(f, "{}", text)
    }
}
