//! Configuration management for the tenure application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). Every module is optional. A missing file or a
//! missing module means defaults apply, so tenure works with no setup at all.
//!
//! ## Modules
//!
//! - **Display**: how dates are rendered in tables and how they are typed in
//! - **Session**: which destructive session actions ask for confirmation
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tenure::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Dates are shown as {}", config.date_format());
//!
//! // Interactive wizard, then persist
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::record::DEFAULT_INPUT_DATE_FORMAT;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default display format, rendering dates the way the `es-MX` locale does.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Represents a configurable module in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Date rendering and parsing settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// `strftime` pattern used when printing dates.
    pub date_format: String,

    /// `strftime` pattern expected when reading dates from prompts and files.
    pub input_date_format: String,
}

/// Interactive session behavior.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Ask before deleting a single record.
    pub confirm_delete: bool,

    /// Ask before clearing every record.
    pub confirm_clear: bool,
}

/// Main configuration container.
///
/// Unconfigured modules are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            input_date_format: DEFAULT_INPUT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            confirm_delete: true,
            confirm_clear: true,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: the default configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        if let Some(display) = &self.display {
            for format in [&display.date_format, &display.input_date_format] {
                if !is_valid_date_format(format) {
                    msg_bail_anyhow!(Message::ConfigInvalidDateFormat(format.clone()));
                }
            }
        }

        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn date_format(&self) -> String {
        self.display.clone().unwrap_or_default().date_format
    }

    pub fn input_date_format(&self) -> String {
        self.display.clone().unwrap_or_default().input_date_format
    }

    pub fn session_settings(&self) -> SessionConfig {
        self.session.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// The current configuration pre-fills every prompt. Only the modules
    /// picked in the first step are touched.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "display".to_string(),
                name: Message::ConfigModuleDisplay.to_string(),
            },
            ConfigModule {
                key: "session".to_string(),
                name: Message::ConfigModuleSession.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        date_format: prompt_format(Message::PromptDateFormat, default.date_format)?,
                        input_date_format: prompt_format(Message::PromptInputDateFormat, default.input_date_format)?,
                    });
                }
                "session" => {
                    let default = config.session.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSession);
                    config.session = Some(SessionConfig {
                        confirm_delete: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConfirmDeleteSetting.to_string())
                            .default(default.confirm_delete)
                            .interact()?,
                        confirm_clear: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConfirmClearSetting.to_string())
                            .default(default.confirm_clear)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn prompt_format(prompt: Message, default: String) -> Result<String> {
    let format = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default)
        .validate_with(|input: &String| -> Result<(), String> {
            if is_valid_date_format(input) {
                Ok(())
            } else {
                Err(Message::ConfigInvalidDateFormat(input.clone()).to_string())
            }
        })
        .interact_text()?;
    Ok(format)
}

/// True when `format` is a well-formed chrono `strftime` pattern.
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
