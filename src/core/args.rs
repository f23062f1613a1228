//! Loose `--key value` argument source.
//!
//! Instance options are free-form: any `--key` or `-key` is accepted, a key
//! followed by a non-flag token takes that token as its value, and a key
//! followed by another flag (or nothing) is recorded as a boolean presence.
//! Unknown keys are kept and simply never looked up.

use std::collections::BTreeMap;

/// A single parsed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// `--key value`
    Text(String),
    /// `--key` with no value
    Flag,
}

/// Parsed invocation options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSource {
    values: BTreeMap<String, ArgValue>,
}

impl ArgumentSource {
    /// Parse raw tokens.
    ///
    /// Later occurrences of a key replace earlier ones. A value token with no
    /// pending key is ignored.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = BTreeMap::new();
        let mut current: Option<String> = None;

        for token in tokens {
            let token = token.as_ref();
            let key = token
                .strip_prefix("--")
                .or_else(|| token.strip_prefix('-'));

            match key {
                Some(key) => {
                    values.insert(key.to_string(), ArgValue::Flag);
                    current = Some(key.to_string());
                }
                None => {
                    if let Some(key) = current.take() {
                        values.insert(key, ArgValue::Text(token.to_string()));
                    }
                }
            }
        }

        Self { values }
    }

    /// Build from explicit key/value pairs.
    #[cfg(test)]
    pub(crate) fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), ArgValue::Text(v.to_string())))
            .collect();
        Self { values }
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.values.get(key)
    }

    /// Text value for a key.
    ///
    /// A bare flag carries no text and reads as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ArgValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Text value for a key, with the empty string treated as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|value| !value.is_empty())
    }

    /// All parsed keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
