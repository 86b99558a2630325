use crate::error::DemoError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

/// One line of demonstration output, tagged with the section it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub section: String,
    pub line: String,
}

#[derive(Debug, Default)]
struct Transcript {
    current_section: String,
    entries: Vec<TranscriptEntry>,
}

/// Shared output sink for the demonstration driver.
///
/// Cloning a `Console` aliases the same transcript, so entities that need to
/// report something later (e.g. a broker on teardown) can hold their own
/// handle.
#[derive(Clone, Debug, Default)]
pub struct Console(Rc<RefCell<Transcript>>);

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new section; subsequent lines are tagged with `title`.
    pub fn section(&self, title: &str) {
        tracing::debug!("section: {}", title);
        self.0.borrow_mut().current_section = title.to_string();
    }

    /// Append a line to the transcript.
    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!("{}", line);
        let mut transcript = self.0.borrow_mut();
        let section = transcript.current_section.clone();
        transcript.entries.push(TranscriptEntry { section, line });
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.0.borrow().entries.clone()
    }

    /// Lines only, in the order they were written.
    pub fn lines(&self) -> Vec<String> {
        self.0
            .borrow()
            .entries
            .iter()
            .map(|e| e.line.clone())
            .collect()
    }

    /// Lines written under a given section.
    pub fn lines_in(&self, section: &str) -> Vec<String> {
        self.0
            .borrow()
            .entries
            .iter()
            .filter(|e| e.section == section)
            .map(|e| e.line.clone())
            .collect()
    }

    /// Render the transcript in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, DemoError> {
        let transcript = self.0.borrow();
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&transcript.entries)?),
            OutputFormat::Text => {
                let mut out = String::new();
                let mut last_section: Option<&str> = None;
                for entry in &transcript.entries {
                    if last_section != Some(entry.section.as_str()) {
                        if last_section.is_some() {
                            out.push('\n');
                        }
                        out.push_str(&format!("== {} ==\n", entry.section));
                        last_section = Some(entry.section.as_str());
                    }
                    out.push_str(&entry.line);
                    out.push('\n');
                }
                Ok(out)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(DemoError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Format a rupee amount the way the transcript shows prices.
///
/// Whole amounts keep one fractional digit (`3500.0`), others print as-is.
pub fn rupees(amount: f64) -> String {
    format!("₹{:?}", amount)
}
