//! Total decoders for loosely-typed payload fields.
//!
//! Recipient lists and attachment metadata arrive either as JSON arrays or as
//! JSON-encoded strings containing an array. Every function here accepts any
//! [`Value`] and returns a typed empty value when the input is absent or
//! malformed; none of them can fail.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::{Attachment, AttachmentId, Category, Timestamp};

/// Attachment entry as produced by the sync pipeline.
#[derive(Debug, Deserialize)]
struct AttachmentRecord {
    filename: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
    #[serde(rename = "attachmentId")]
    attachment_id: String,
    #[serde(default)]
    size: u64,
}

/// Unwraps a JSON-encoded string into the value it encodes.
fn unwrap_encoded(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => serde_json::from_str(s).ok(),
        Value::Null => None,
        other => Some(other.clone()),
    }
}

/// Decodes an address list. Anything but an array of strings yields an empty list.
#[must_use]
pub fn decode_address_list(value: &Value) -> Vec<String> {
    let Some(Value::Array(items)) = unwrap_encoded(value) else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

/// Decodes attachment metadata. Any malformed entry yields no attachments.
#[must_use]
pub fn decode_attachments(value: &Value) -> Vec<Attachment> {
    let Some(Value::Array(items)) = unwrap_encoded(value) else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value::<AttachmentRecord>(item).ok())
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
        .into_iter()
        .map(|record| Attachment {
            id: AttachmentId::new(record.attachment_id),
            filename: record.filename,
            mime_type: record.mime_type,
            size: record.size,
        })
        .collect()
}

/// Decodes the `is_job_related` flag (bool, 0/1, or their string forms).
#[must_use]
pub fn decode_category_flag(value: &Value) -> Option<Category> {
    let is_job = match value {
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_i64() {
            Some(0) => false,
            Some(1) => true,
            _ => return None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => return None,
        },
        _ => return None,
    };
    Some(Category::from_is_job(is_job))
}

/// Decodes a date string. Unrecognised formats keep the raw text only.
#[must_use]
pub fn decode_timestamp(raw: Option<&str>) -> Timestamp {
    let raw = raw.unwrap_or_default().trim().to_string();
    let parsed = DateTime::parse_from_rfc3339(&raw)
        .or_else(|_| DateTime::parse_from_rfc2822(&raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        });
    Timestamp { raw, parsed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_list_from_encoded_string() {
        let value = json!("[\"Jane <jane@example.com>\", \"bob@example.com\"]");
        assert_eq!(
            decode_address_list(&value),
            vec!["Jane <jane@example.com>", "bob@example.com"]
        );
    }

    #[test]
    fn test_address_list_from_array() {
        let value = json!(["a@example.com"]);
        assert_eq!(decode_address_list(&value), vec!["a@example.com"]);
    }

    #[test]
    fn test_address_list_malformed_is_empty() {
        for value in [
            json!(null),
            json!(""),
            json!("not json"),
            json!("{\"to\": 1}"),
            json!(["ok@example.com", 42]),
            json!(17),
        ] {
            assert!(decode_address_list(&value).is_empty(), "{value}");
        }
    }

    #[test]
    fn test_attachments_from_encoded_string() {
        let value = json!(
            "[{\"filename\": \"cv.pdf\", \"mimeType\": \"application/pdf\", \"attachmentId\": \"ANGjdJ8\", \"size\": 1024}]"
        );
        let attachments = decode_attachments(&value);
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].id.as_str(), "ANGjdJ8");
        assert_eq!(attachments[0].filename, "cv.pdf");
        assert_eq!(attachments[0].mime_type, "application/pdf");
        assert_eq!(attachments[0].size, 1024);
    }

    #[test]
    fn test_attachments_size_defaults_to_zero() {
        let value = json!([{"filename": "a.png", "mimeType": "image/png", "attachmentId": "x"}]);
        assert_eq!(decode_attachments(&value)[0].size, 0);
    }

    #[test]
    fn test_attachments_malformed_is_empty() {
        for value in [
            json!(null),
            json!("[{"),
            json!([{"filename": "a.png"}]),
            json!({"filename": "a.png", "mimeType": "image/png", "attachmentId": "x"}),
        ] {
            assert!(decode_attachments(&value).is_empty(), "{value}");
        }
    }

    #[test]
    fn test_category_flag() {
        assert_eq!(decode_category_flag(&json!(1)), Some(Category::Jobs));
        assert_eq!(decode_category_flag(&json!(0)), Some(Category::Others));
        assert_eq!(decode_category_flag(&json!(true)), Some(Category::Jobs));
        assert_eq!(decode_category_flag(&json!("0")), Some(Category::Others));
        assert_eq!(decode_category_flag(&json!(null)), None);
        assert_eq!(decode_category_flag(&json!(7)), None);
    }

    #[test]
    fn test_timestamp_formats() {
        let iso = decode_timestamp(Some("2025-03-04T10:15:00+00:00"));
        assert!(iso.parsed.is_some());
        assert_eq!(iso.short_label(), "Mar 4");

        let rfc2822 = decode_timestamp(Some("Tue, 4 Mar 2025 10:15:00 +0000"));
        assert_eq!(rfc2822.parsed, iso.parsed);

        let sqlite = decode_timestamp(Some("2025-03-04 10:15:00"));
        assert_eq!(sqlite.parsed, iso.parsed);
    }

    #[test]
    fn test_timestamp_unparseable_keeps_raw() {
        let ts = decode_timestamp(Some("sometime last week"));
        assert!(ts.parsed.is_none());
        assert_eq!(ts.short_label(), "sometime last week");
        assert_eq!(decode_timestamp(None), Timestamp::default());
    }
}
