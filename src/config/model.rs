// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::Value;

/// Delimiter used when a skin's `pattern` is written as a single string.
///
/// `pattern: "Ruby, Sapphire"` and
///
/// ```yaml
/// pattern:
///   - Ruby
///   - Sapphire
/// ```
///
/// mean the same thing after normalization.
pub const PATTERN_DELIMITER: &str = ", ";

/// Top-level configuration as read from a YAML file.
///
/// This is a direct mapping of the documented config shape:
///
/// ```yaml
/// skins:
///   - url: "https://market.example.com/listings?item=karambit-doppler"
///     float: 0.08
///     pattern: "Ruby, Sapphire"
///
/// timeouts:
///   per_skin: 2
///   per_page: 2
///
/// proxy_url: "http://127.0.0.1:8080"
/// ```
///
/// Every field is optional at this level; which ones are actually required
/// is decided by normalization, not deserialization. Top-level keys we do
/// not recognize are collected into `extra` and carried through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    /// The watch list from `skins`.
    #[serde(default)]
    pub skins: Option<Vec<RawSkin>>,

    /// Pacing values from `timeouts`, all individually optional.
    #[serde(default)]
    pub timeouts: Option<RawTimeouts>,

    /// Optional forwarding proxy for downstream requests.
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Any other top-level keys, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One `skins` entry as written by the user.
///
/// `url` is the only required field; everything else narrows the search.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSkin {
    /// Maximum acceptable wear value.
    #[serde(default)]
    pub float: Option<f64>,

    /// Paint seed / phase patterns to match. Either a `", "`-joined string
    /// or an explicit list; see [`PatternField`].
    #[serde(default)]
    pub pattern: Option<PatternField>,

    /// Maximum acceptable price.
    #[serde(default)]
    pub price: Option<f64>,

    /// How many result pages to scan.
    #[serde(default)]
    pub pages: Option<u32>,

    /// Listing URL to watch.
    pub url: String,

    /// Whether results should be ordered by wear value.
    #[serde(default)]
    pub sort_by_float: Option<bool>,

    /// Unrecognized per-skin keys, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A skin's `pattern` field before normalization.
///
/// Users may write either form; [`PatternField::into_list`] folds both into
/// an ordered list of pattern strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PatternField {
    /// Already a list: kept exactly as written.
    List(Vec<String>),
    /// A single `", "`-joined string: split on the delimiter.
    Joined(String),
}

impl PatternField {
    /// Resolve to the normalized list form.
    ///
    /// Splitting is on the literal `", "` delimiter, so `"Ruby, Sapphire"`
    /// becomes `["Ruby", "Sapphire"]` and `"Solo"` becomes `["Solo"]`. An
    /// empty string yields `[""]`, which is accepted rather than rejected.
    pub fn into_list(self) -> Vec<String> {
        match self {
            PatternField::List(items) => items,
            PatternField::Joined(joined) => joined
                .split(PATTERN_DELIMITER)
                .map(str::to_string)
                .collect(),
        }
    }
}

/// The `timeouts` mapping as written by the user.
///
/// Keys are individually optional; missing (or zero, see normalization)
/// values fall back to [`Timeouts::default`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawTimeouts {
    #[serde(default)]
    pub per_skin: Option<u64>,

    #[serde(default)]
    pub per_page: Option<u64>,

    #[serde(default)]
    pub after_server_error: Option<u64>,

    #[serde(default)]
    pub after_too_many_requests: Option<u64>,
}

/// Fully resolved pacing values, in seconds.
///
/// These are configuration *values* for downstream consumers to honor; the
/// loader itself never waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Pause between two watched skins.
    pub per_skin: u64,

    /// Pause between two result pages of the same skin.
    pub per_page: u64,

    /// Back-off after a server-side error response.
    pub after_server_error: u64,

    /// Back-off after a rate-limit response.
    pub after_too_many_requests: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            per_skin: 2,
            per_page: 2,
            after_server_error: 10,
            after_too_many_requests: 60,
        }
    }
}

/// A normalized `skins` entry.
///
/// Identical to [`RawSkin`] except that `pattern`, when present, is always
/// the list form.
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    pub float: Option<f64>,
    pub pattern: Option<Vec<String>>,
    pub price: Option<f64>,
    pub pages: Option<u32>,
    pub url: String,
    pub sort_by_float: Option<bool>,
    pub extra: BTreeMap<String, Value>,
}

/// The normalized configuration handed to the rest of the application.
///
/// Compared to [`RawConfig`]: the skin list is guaranteed non-empty with
/// patterns in list form, every timeout has a value, and everything else is
/// carried over unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub skins: Vec<Skin>,
    pub timeouts: Timeouts,
    pub proxy_url: Option<String>,
    pub extra: BTreeMap<String, Value>,
}
