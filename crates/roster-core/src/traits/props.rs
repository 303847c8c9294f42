//! Traits implemented by domain props types.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Domain fields carried by an [`Entity`](crate::Entity).
pub trait Props: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity kind, used in not-found messages.
    const KIND: &'static str = "Entity";
}

/// Props that support filtering and sorting in a searchable store.
pub trait Searchable: Props {
    /// Field names accepted as a sort key. Anything else leaves order unchanged.
    const SORTABLE_FIELDS: &'static [&'static str];

    /// Text matched (case-insensitively) against the search filter.
    fn filter_field(&self) -> &str;

    /// Value of a sortable field, or `None` if the field is unknown.
    fn sort_value(&self, field: &str) -> Option<SortValue<'_>>;
}

/// A comparable field value.
///
/// Text compares ordinally (byte-wise), numbers numerically and timestamps
/// chronologically. Values of different variants order by variant.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum SortValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl SortValue<'_> {
    /// Total comparison; incomparable floats (NaN) compare equal.
    pub fn compare(a: Option<&Self>, b: Option<&Self>) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(s: &'a str) -> Self {
        SortValue::Text(s)
    }
}

impl From<i64> for SortValue<'_> {
    fn from(n: i64) -> Self {
        SortValue::Integer(n)
    }
}

impl From<f64> for SortValue<'_> {
    fn from(n: f64) -> Self {
        SortValue::Float(n)
    }
}

impl From<DateTime<Utc>> for SortValue<'_> {
    fn from(t: DateTime<Utc>) -> Self {
        SortValue::Timestamp(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn text_compares_ordinally() {
        let upper = SortValue::Text("TEST");
        let lower = SortValue::Text("test");
        assert_eq!(
            SortValue::compare(Some(&upper), Some(&lower)),
            Ordering::Less
        );
    }

    #[test]
    fn timestamps_compare_chronologically() {
        let early = SortValue::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let late = SortValue::from(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(SortValue::compare(Some(&early), Some(&late)), Ordering::Less);
    }

    #[test]
    fn missing_values_sort_first() {
        let v = SortValue::Integer(1);
        assert_eq!(SortValue::compare(None, Some(&v)), Ordering::Less);
    }

    #[test]
    fn nan_compares_equal() {
        let nan = SortValue::Float(f64::NAN);
        let one = SortValue::Float(1.0);
        assert_eq!(SortValue::compare(Some(&nan), Some(&one)), Ordering::Equal);
    }
}
