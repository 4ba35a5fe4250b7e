//! Raw field values as collected from a submitted form
//!
//! The caller owns the DOM (or whatever collects the input). It passes a
//! [`FormFields`] snapshot in, and every lookup comes back as a trimmed
//! [`FieldValue`]. A control that was never sent reads as the empty string.

use indexmap::IndexMap;
use std::fmt;
use std::ops::Deref;

/// A single field value, trimmed of leading and trailing whitespace.
///
/// ```
/// use bikeform::FieldValue;
///
/// let v = FieldValue::new("  Monday \n");
/// assert_eq!(v.as_str(), "Monday");
/// assert!(FieldValue::new("   ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldValue(String);

impl FieldValue {
    /// Trim `raw` and wrap it
    pub fn new(raw: &str) -> Self {
        FieldValue(raw.trim().to_owned())
    }

    /// The trimmed text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the trimmed `String`
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for FieldValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::new(raw)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of a submitted form: field name to raw value.
///
/// Keeps insertion order. Raw values are stored untouched; trimming happens
/// on lookup.
///
/// ```
/// use bikeform::FormFields;
///
/// let fields: FormFields = [("name", " Al "), ("age", "30")].into_iter().collect();
/// assert_eq!(fields.get("name").as_str(), "Al");
/// assert_eq!(fields.get("email").as_str(), "");
/// assert_eq!(fields.raw("email"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormFields {
    values: IndexMap<String, String>,
}

impl FormFields {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    ///
    /// ```
    /// use bikeform::FormFields;
    ///
    /// let fields = FormFields::new().with("day", "Monday").with("time", "14:00");
    /// assert_eq!(fields.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(name, raw);
        self
    }

    /// Set a field, returning the previous raw value if any
    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), raw.into())
    }

    /// Trimmed value of `name`, or empty if the field is missing
    pub fn get(&self, name: &str) -> FieldValue {
        self.values
            .get(name)
            .map(|raw| FieldValue::new(raw))
            .unwrap_or_default()
    }

    /// Raw, untrimmed value of `name`
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field was sent at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate raw `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormFields {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
