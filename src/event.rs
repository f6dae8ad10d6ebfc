use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::level::Level;

/// Structured key-value data attached to an [`Event`].
pub type Fields = BTreeMap<String, serde_json::Value>;

/// One log occurrence, built by the [`Logger`](crate::Logger) for each
/// accepted call and handed to every sink by reference.
///
/// Serializes to the JSON line shape used by the console sink: `time`
/// (RFC3339), `level`, `service`, `env`, `message` and `fields`, the latter
/// omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    #[serde(serialize_with = "serialize_rfc3339")]
    pub time: DateTime<Utc>,
    pub level: Level,
    pub service: String,
    pub env: String,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: Fields,
}

impl Event {
    /// Build an event stamped with the current time.
    pub fn new(
        level: Level,
        service: impl Into<String>,
        env: impl Into<String>,
        message: impl Into<String>,
        fields: Fields,
    ) -> Self {
        Event {
            time: Utc::now(),
            level,
            service: service.into(),
            env: env.into(),
            message: message.into(),
            fields,
        }
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

fn serialize_rfc3339<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Build a [`Fields`] map from `key => value` pairs.
///
/// Values go through `serde_json::json!`, so anything serializable works.
///
/// ```
/// let fields = sink::fields! { "user_id" => "u123", "retry_count" => 3 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::serde_json::json!($value));
        )+
        fields
    }};
}
