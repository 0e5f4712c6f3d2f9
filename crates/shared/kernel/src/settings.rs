//! User settings persisted between sessions.
//!
//! The file is a sectioned key/value document (`[Section]` tables in TOML). Subsystems read
//! and write it through [`SettingsSource`] and [`SettingsSink`] so they never depend on the
//! concrete format.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, warn};

#[tinct_derive::tinct_error]
pub enum SettingsError {
    #[error("Settings I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed settings{}: {source}", format_context(.context))]
    Parse { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Cannot serialize settings{}: {source}", format_context(.context))]
    Serialize { source: toml::ser::Error, context: Option<Cow<'static, str>> },
}

/// Read access to persisted settings. Absent or malformed keys read as `None`.
pub trait SettingsSource {
    fn get_string_list(&self, section: &str, key: &str) -> Option<Vec<String>>;

    fn get_bool_list(&self, section: &str, key: &str) -> Option<Vec<bool>>;

    fn get_string_with_default(&self, section: &str, key: &str, default: &str) -> String;
}

/// Write access to persisted settings. Writes replace any previous value of the key.
pub trait SettingsSink {
    fn set_string_list(&mut self, section: &str, key: &str, values: &[String]);

    fn set_bool_list(&mut self, section: &str, key: &str, values: &[bool]);

    fn set_string(&mut self, section: &str, key: &str, value: &str);
}

/// In-memory settings document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    root: Table,
}

impl Settings {
    /// Reads the settings file at `path`. A file that does not exist yet yields empty settings.
    ///
    /// # Errors
    /// Returns [`SettingsError::Io`] if the file cannot be read and [`SettingsError::Parse`]
    /// if it is not a valid document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file yet");
                return Ok(Self::default());
            },
            Err(source) => {
                return Err(SettingsError::Io {
                    source,
                    context: Some(path.display().to_string().into()),
                });
            },
        };
        Self::parse(&text).context(path.display().to_string())
    }

    /// Parses a settings document.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] on malformed input.
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        Ok(Self { root: toml::from_str(text)? })
    }

    /// Writes the settings to `path`, creating the parent directory if needed.
    ///
    /// The document is written to a sibling temporary file first and then renamed over `path`.
    ///
    /// # Errors
    /// Returns [`SettingsError::Serialize`] or [`SettingsError::Io`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Creating settings directory")?;
        }

        let text = self.to_toml_string()?;
        let staging = path.with_extension("tmp");
        fs::write(&staging, text).context(staging.display().to_string())?;
        fs::rename(&staging, path).context(path.display().to_string())?;

        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Serializes the document.
    ///
    /// # Errors
    /// Returns [`SettingsError::Serialize`] if the document cannot be rendered.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(&self.root)?)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn value(&self, section: &str, key: &str) -> Option<&Value> {
        self.root.get(section)?.as_table()?.get(key)
    }

    /// Inserts `key` into `section`, replacing a section that is not a table.
    fn insert(&mut self, section: &str, key: &str, value: Value) {
        let mut table = match self.root.remove(section) {
            Some(Value::Table(table)) => table,
            Some(_) => {
                warn!(section, "Settings section is not a table; replacing it");
                Table::new()
            },
            None => Table::new(),
        };
        table.insert(key.to_owned(), value);
        self.root.insert(section.to_owned(), Value::Table(table));
    }

    fn array(&self, section: &str, key: &str) -> Option<&Vec<Value>> {
        let value = self.value(section, key)?;
        let array = value.as_array();
        if array.is_none() {
            warn!(section, key, "Settings value is not a list; ignoring it");
        }
        array
    }
}

impl SettingsSource for Settings {
    fn get_string_list(&self, section: &str, key: &str) -> Option<Vec<String>> {
        let items = self.array(section, key)?;
        let list: Option<Vec<String>> =
            items.iter().map(|v| v.as_str().map(str::to_owned)).collect();
        if list.is_none() {
            warn!(section, key, "Settings list holds non-string items; ignoring it");
        }
        list
    }

    fn get_bool_list(&self, section: &str, key: &str) -> Option<Vec<bool>> {
        let items = self.array(section, key)?;
        let list: Option<Vec<bool>> = items.iter().map(parse_bool).collect();
        if list.is_none() {
            warn!(section, key, "Settings list holds non-boolean items; ignoring it");
        }
        list
    }

    fn get_string_with_default(&self, section: &str, key: &str, default: &str) -> String {
        self.value(section, key).and_then(Value::as_str).unwrap_or(default).to_owned()
    }
}

impl SettingsSink for Settings {
    fn set_string_list(&mut self, section: &str, key: &str, values: &[String]) {
        let array = values.iter().cloned().map(Value::String).collect();
        self.insert(section, key, Value::Array(array));
    }

    fn set_bool_list(&mut self, section: &str, key: &str, values: &[bool]) {
        let array = values.iter().copied().map(Value::Boolean).collect();
        self.insert(section, key, Value::Array(array));
    }

    fn set_string(&mut self, section: &str, key: &str, value: &str) {
        self.insert(section, key, Value::String(value.to_owned()));
    }
}

/// Booleans are also accepted as `0`/`1` and as the strings `"true"`/`"false"`.
fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Integer(0) => Some(false),
        Value::Integer(1) => Some(true),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
