#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleDisplay,
    ConfigModuleSession,
    ConfigInvalidDateFormat(String), // format
    PromptSelectModules,
    PromptDateFormat,
    PromptInputDateFormat,
    PromptConfirmDeleteSetting,
    PromptConfirmClearSetting,

    // === SESSION MESSAGES ===
    SessionStarted(String), // input date format
    SessionEnded,
    PromptSessionAction,
    MenuAddRecord,
    MenuEditRecord,
    MenuDeleteRecord,
    MenuCalculate,
    MenuShowRecords,
    MenuClearAll,
    MenuQuit,
    OperationCancelled,

    // === RECORD MESSAGES ===
    PromptRecordKey,
    PromptStartDate(String), // format
    PromptEndDate(String),   // format
    PromptCategory,
    PromptSelectRecord,
    RecordAdded(String),   // key
    RecordDeleted(String), // key
    RecordEditing(String), // key
    RecordInvalid(String), // reason
    NoRecords,
    ConfirmDeleteRecord(String), // key
    ConfirmEditRecord(String),   // key
    ConfirmClearAll(usize),
    RecordsCleared(usize),

    // === RESULT MESSAGES ===
    RecordsHeader(usize),
    ContributionsHeader,
    TotalsHeader,
    ActiveTotal(String),
    LeaveTotal(String),
    RawDifference(String),
    NormalizedDifference(String),

    // === IMPORT MESSAGES ===
    RecordsLoaded { count: usize, path: String },
    ImportFailed(String),
}
