//! Secret presence inspection.
//!
//! Builds the `/secrets` report: for each tracked variable, whether it is set,
//! its length and a short preview, plus the sorted names of every variable
//! visible to the process. Nothing is cached; each report reflects the
//! environment at the moment it is built.

use std::collections::BTreeSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::config::{TrackedVar, NOT_SET_MESSAGE, PREVIEW_SUFFIX, TRACKED_VARS};

/// Presence of a single tracked variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretStatus {
    /// Set to a non-empty value
    Present { length: usize, preview: String },
    /// Unset or empty
    Missing,
}

impl SecretStatus {
    /// Classify a raw value. Empty values count as missing.
    ///
    /// `length` and `preview` count Unicode scalar values, not UTF-16 code
    /// units, so `"😀"` has length 1.
    pub fn from_value(value: Option<&str>, preview_len: usize) -> Self {
        match value {
            Some(v) if !v.is_empty() => SecretStatus::Present {
                length: v.chars().count(),
                preview: preview(v, preview_len),
            },
            _ => SecretStatus::Missing,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self, SecretStatus::Present { .. })
    }
}

impl Serialize for SecretStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SecretStatus::Present { length, preview } => {
                let mut s = serializer.serialize_struct("SecretStatus", 3)?;
                s.serialize_field("exists", &true)?;
                s.serialize_field("length", length)?;
                s.serialize_field("preview", preview)?;
                s.end()
            }
            SecretStatus::Missing => {
                let mut s = serializer.serialize_struct("SecretStatus", 2)?;
                s.serialize_field("exists", &false)?;
                s.serialize_field("error", NOT_SET_MESSAGE)?;
                s.end()
            }
        }
    }
}

/// First `len` characters of `value` followed by the preview suffix.
///
/// Counts characters, not bytes, and never pads: a value shorter than `len`
/// is returned whole with the suffix appended.
pub fn preview(value: &str, len: usize) -> String {
    let mut out: String = value.chars().take(len).collect();
    out.push_str(PREVIEW_SUFFIX);
    out
}

/// Tracked variables keyed by name, serialized in `TRACKED_VARS` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEnvironment(Vec<(&'static str, SecretStatus)>);

impl TrackedEnvironment {
    pub fn inspect<F>(tracked: &[TrackedVar], lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self(
            tracked
                .iter()
                .map(|var| {
                    let value = lookup(var.name);
                    (var.name, SecretStatus::from_value(value.as_deref(), var.preview_len))
                })
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&SecretStatus> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SecretStatus)> {
        self.0.iter().map(|(n, s)| (*n, s))
    }
}

impl Serialize for TrackedEnvironment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, status) in &self.0 {
            map.serialize_entry(name, status)?;
        }
        map.end()
    }
}

/// Body of the `/secrets` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretsReport {
    pub timestamp: String,
    pub environment: TrackedEnvironment,
    pub all_env_vars: Vec<String>,
}

impl SecretsReport {
    /// Build a report from the live process environment.
    pub fn collect() -> Self {
        Self::build(Utc::now(), process_lookup, process_var_names())
    }

    /// Build a report from an explicit clock reading, lookup and name list.
    ///
    /// Names are sorted and de-duplicated.
    pub fn build<F, I>(now: DateTime<Utc>, lookup: F, names: I) -> Self
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let all_env_vars: BTreeSet<String> = names.into_iter().collect();

        Self {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            environment: TrackedEnvironment::inspect(&TRACKED_VARS, lookup),
            all_env_vars: all_env_vars.into_iter().collect(),
        }
    }
}

/// Look up a variable in the process environment.
///
/// Non-UTF-8 values are still reported as present.
pub fn process_lookup(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

fn process_var_names() -> impl Iterator<Item = String> {
    std::env::vars_os().map(|(k, _)| k.to_string_lossy().into_owned())
}
