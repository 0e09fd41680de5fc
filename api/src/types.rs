// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// An event as carried on the wire.
///
/// `id` is absent on create payloads and assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEvent {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Calendar date, written as `YYYY-MM-DD`.
    #[serde(with = "date_format")]
    pub date: Date,
    /// Start time, `HH:MM`.
    #[serde(rename = "initHour")]
    pub init_hour: String,
    /// End time, `HH:MM`.
    #[serde(rename = "endHour")]
    pub end_hour: String,
}

/// A record returned by create or update, with the server's message when it sent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved<T> {
    /// Human-readable message from the server.
    pub message: Option<String>,
    /// The saved record.
    pub data: T,
}

/// Delete confirmation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Confirmation {
    /// Human-readable message from the server.
    #[serde(default)]
    pub message: Option<String>,
}

/// Create/update responses come either wrapped as `{ message, data }` or as the bare event.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SavedBody {
    Enveloped {
        message: Option<String>,
        data: RemoteEvent,
    },
    Bare(RemoteEvent),
}

impl From<SavedBody> for Saved<RemoteEvent> {
    fn from(body: SavedBody) -> Self {
        match body {
            SavedBody::Enveloped { message, data } => Saved { message, data },
            SavedBody::Bare(data) => Saved {
                message: None,
                data,
            },
        }
    }
}

/// Dates are written as `YYYY-MM-DD`. On read only the leading date is used, so a full
/// timestamp such as `2026-10-19T00:00:00.000Z` is accepted too.
mod date_format {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        let head = s.get(..10).unwrap_or(&s);
        head.parse::<Date>()
            .map_err(|e| de::Error::custom(format!("invalid date `{s}`: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    fn standup() -> RemoteEvent {
        RemoteEvent {
            id: None,
            name: "Standup".to_string(),
            description: "Daily sync".to_string(),
            date: date(2026, 10, 19),
            init_hour: "09:00".to_string(),
            end_hour: "09:15".to_string(),
        }
    }

    #[test]
    fn serializes_camel_case_hours_without_id() {
        let value = serde_json::to_value(standup()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Standup",
                "description": "Daily sync",
                "date": "2026-10-19",
                "initHour": "09:00",
                "endHour": "09:15",
            })
        );
    }

    #[test]
    fn deserializes_timestamp_dates() {
        let event: RemoteEvent = serde_json::from_value(json!({
            "id": 7,
            "name": "Standup",
            "description": "Daily sync",
            "date": "2026-10-19T00:00:00.000Z",
            "initHour": "09:00",
            "endHour": "09:15",
        }))
        .unwrap();
        assert_eq!(event.id, Some(7));
        assert_eq!(event.date, date(2026, 10, 19));
    }

    #[test]
    fn rejects_garbage_dates() {
        let result = serde_json::from_value::<RemoteEvent>(json!({
            "name": "a", "description": "b", "date": "tomorrow",
            "initHour": "09:00", "endHour": "10:00",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn saved_body_accepts_envelope_and_bare() {
        let mut bare = serde_json::to_value(standup()).unwrap();
        bare["id"] = json!(3);

        let enveloped: SavedBody =
            serde_json::from_value(json!({ "message": "Evento criado!", "data": bare.clone() }))
                .unwrap();
        let saved = Saved::from(enveloped);
        assert_eq!(saved.message.as_deref(), Some("Evento criado!"));
        assert_eq!(saved.data.id, Some(3));

        let saved = Saved::from(serde_json::from_value::<SavedBody>(bare).unwrap());
        assert_eq!(saved.message, None);
        assert_eq!(saved.data.id, Some(3));
    }
}
