//! JSON serialization for Record.
//!
//! A record is a flat JSON object with an `id` member holding a string or an
//! integer. Every other member becomes a field; arrays and nested objects are
//! kept as their JSON text.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::RecordId;
use super::Value;

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;

        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();
        for key in keys {
            let value = &self.fields[key];
            // Null fields are left out rather than written as `null`
            if !value.is_null() {
                map.serialize_entry(key, value)?;
            }
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object with an `id` member")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut id: Option<RecordId> = None;
        let mut fields: HashMap<String, Value> = HashMap::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;

            if key == "id" {
                if id.is_some() {
                    return Err(de::Error::duplicate_field("id"));
                }
                id = Some(json_to_id(value).map_err(de::Error::custom)?);
            } else {
                fields.insert(key, Value::from(value));
            }
        }

        let id = id.ok_or_else(|| de::Error::missing_field("id"))?;
        Ok(Record { id, fields })
    }
}

fn json_to_id(value: serde_json::Value) -> Result<RecordId, String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Ok(RecordId::Text(s)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(RecordId::Number)
            .ok_or_else(|| format!("id {} is not an integer", n)),
        other => Err(format!("id must be a non-empty string or an integer, got {}", other)),
    }
}
