use crate::config;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Value of one named control at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// File control. Only the selected file's name is kept, never its bytes.
    File(Option<String>),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::File(Some(name)) if !name.is_empty() => name,
            FieldValue::File(_) => config::NO_FILES_SELECTED.to_string(),
        }
    }
}

/// Flat key/value payload posted to the webhook.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormRecord {
    fields: BTreeMap<String, String>,
}

impl FormRecord {
    /// Builds a record from form entries in document order. A name that
    /// appears twice keeps its last value.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        let fields = entries
            .into_iter()
            .map(|(name, value)| (name.into(), value.into_text()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Adds the lead metadata and the combined display name.
    pub fn with_derived(mut self, submitted_at: DateTime<Utc>) -> Self {
        let full_name = format!(
            "{} {}",
            self.get("firstName").unwrap_or_default(),
            self.get("lastName").unwrap_or_default()
        );
        self.fields.insert("leadSource".into(), config::LEAD_SOURCE.into());
        self.fields.insert("leadType".into(), config::LEAD_TYPE.into());
        self.fields.insert("timestamp".into(), iso_timestamp(submitted_at));
        self.fields.insert("fullName".into(), full_name);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Millisecond-precision UTC timestamp, e.g. `2024-12-01T18:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
