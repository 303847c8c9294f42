//! Search parameter sanitization.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInputError;

/// Page size used when the input gives none (or an invalid one).
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Orient an ascending comparison.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = InvalidInputError;

    /// Case-insensitive parse of `asc` / `desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(InvalidInputError::UnknownOption {
                option: "sort direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Ordering applied when a search names no sort field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsortedOrder {
    /// Most recently inserted records first.
    #[default]
    NewestFirst,
    /// Storage (insertion) order.
    InsertionOrder,
}

impl UnsortedOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsortedOrder::NewestFirst => "newest-first",
            UnsortedOrder::InsertionOrder => "insertion-order",
        }
    }
}

impl fmt::Display for UnsortedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnsortedOrder {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest-first" => Ok(UnsortedOrder::NewestFirst),
            "insertion-order" => Ok(UnsortedOrder::InsertionOrder),
            _ => Err(InvalidInputError::UnknownOption {
                option: "unsorted order",
                value: s.to_string(),
            }),
        }
    }
}

/// Deployment-level defaults applied during sanitization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchDefaults {
    /// Page size when the input has none. Treated as 1 if set to 0.
    pub per_page: u32,
    /// Direction when a sort field is given without a valid direction.
    pub sort_dir: SortDirection,
    /// Ordering when no sort field is given.
    pub unsorted: UnsortedOrder,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            sort_dir: SortDirection::Desc,
            unsorted: UnsortedOrder::NewestFirst,
        }
    }
}

/// Raw search input, typically straight from a query string or JSON body.
///
/// Every field may hold any JSON value. Nothing here is validated; see
/// [`SearchParams::new`] for how each field is normalized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInput {
    pub page: Option<Value>,
    pub per_page: Option<Value>,
    pub sort: Option<Value>,
    pub sort_dir: Option<Value>,
    pub filter: Option<Value>,
}

impl SearchInput {
    pub fn with_page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_sort_dir(mut self, sort_dir: impl Into<Value>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Build input from query-string style key/value pairs.
    ///
    /// Both `perPage` and `per_page` (and likewise `sortDir`) are accepted.
    /// Unknown keys are ignored; later duplicates win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut input = Self::default();
        for (key, value) in pairs {
            let value = Some(Value::String(value.into()));
            match key.as_ref() {
                "page" => input.page = value,
                "perPage" | "per_page" => input.per_page = value,
                "sort" => input.sort = value,
                "sortDir" | "sort_dir" => input.sort_dir = value,
                "filter" => input.filter = value,
                _ => {}
            }
        }
        input
    }
}

/// Canonical, sanitized search parameters.
///
/// Construction never fails: malformed values fall back to defaults.
///
/// - `page`: positive integers pass through, everything else becomes 1.
/// - `per_page`: same rule, default [`DEFAULT_PER_PAGE`].
/// - `sort` / `filter`: null, absent or empty become `None`; other values
///   are stringified (`0` → `"0"`, `true` → `"true"`, objects →
///   `"[object Object]"`).
/// - `sort_dir`: `None` without a sort field; otherwise the lower-cased
///   input if it is `asc` or `desc`, else the default (`desc`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    page: u32,
    per_page: u32,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
    unsorted: UnsortedOrder,
}

impl SearchParams {
    /// Sanitize input using [`SearchDefaults::default`].
    pub fn new(input: SearchInput) -> Self {
        Self::with_defaults(input, &SearchDefaults::default())
    }

    /// Sanitize input using explicit defaults.
    pub fn with_defaults(input: SearchInput, defaults: &SearchDefaults) -> Self {
        let sort = coerce_text(input.sort.as_ref());
        let sort_dir = sort
            .as_ref()
            .map(|_| coerce_direction(input.sort_dir.as_ref(), defaults.sort_dir));

        Self {
            page: positive_integer(input.page.as_ref()).unwrap_or(1),
            per_page: positive_integer(input.per_page.as_ref())
                .unwrap_or_else(|| defaults.per_page.max(1)),
            sort,
            sort_dir,
            filter: coerce_text(input.filter.as_ref()),
            unsorted: defaults.unsorted,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Ordering used when no sort field is set.
    pub fn unsorted(&self) -> UnsortedOrder {
        self.unsorted
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(SearchInput::default())
    }
}

impl From<SearchInput> for SearchParams {
    fn from(input: SearchInput) -> Self {
        Self::new(input)
    }
}

/// Accept finite, integral values ≥ 1 (numbers or numeric strings).
fn positive_integer(value: Option<&Value>) -> Option<u32> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if n.is_finite() && n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        other => Some(stringify(other)).filter(|s| !s.is_empty()),
    }
}

fn coerce_direction(value: Option<&Value>, fallback: SortDirection) -> SortDirection {
    match value {
        Some(Value::String(s)) => s.parse().unwrap_or(fallback),
        _ => fallback,
    }
}

/// String form of a loose value, matching how query layers usually coerce.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64's Display drops a trailing ".0", unlike Number's.
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}
