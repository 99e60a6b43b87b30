use serde::{Deserialize, Deserializer, Serialize};

/// Store-wide statistics from `GET /api/stats`.
///
/// `total_keys` here is advisory (shown in the header); pagination math uses
/// the `total` of the most recent key listing instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub db_path: String,
    pub total_keys: u64,
    #[serde(default)]
    pub db_size_bytes: i64,
}

/// One page of keys from `GET /api/keys`.
///
/// The server echoes `offset`/`limit` back; they are accepted but the client
/// keeps its own pagination state authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keys: Vec<String>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// A single fetched value from `GET /api/key/{key}`.
///
/// `value_hex` is the lower-case hex encoding of the raw bytes; it decodes to
/// exactly `size` bytes. `value` is the server's text rendition of the same
/// bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueRecord {
    pub key: String,
    pub value: String,
    pub value_hex: String,
    pub size: u64,
}

// The server serializes an empty key set as JSON null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_parse() {
        let json = r#"{"db_path":"/data/pebble","total_keys":1234,"db_size_bytes":52428800}"#;
        let stats: StoreStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.db_path, "/data/pebble");
        assert_eq!(stats.total_keys, 1234);
        assert_eq!(stats.db_size_bytes, 52_428_800);
    }

    #[test]
    fn stats_parse_without_size() {
        let json = r#"{"db_path":"/data/pebble","total_keys":7}"#;
        let stats: StoreStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.db_size_bytes, 0);
    }

    #[test]
    fn key_page_parse() {
        let json = r#"{"keys":["a","b"],"total":2,"offset":0,"limit":50}"#;
        let page: KeyPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.keys, vec!["a", "b"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn key_page_parse_null_keys() {
        let json = r#"{"keys":null,"total":0,"offset":0,"limit":50}"#;
        let page: KeyPage = serde_json::from_str(json).unwrap();
        assert!(page.keys.is_empty());
    }

    #[test]
    fn key_page_parse_missing_keys() {
        let json = r#"{"total":0}"#;
        let page: KeyPage = serde_json::from_str(json).unwrap();
        assert!(page.keys.is_empty());
    }

    #[test]
    fn value_record_parse() {
        let json = r#"{"key":"a","value":"{\"x\":1}","value_hex":"7b2278223a317d","size":7}"#;
        let record: ValueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.key, "a");
        assert_eq!(record.value, r#"{"x":1}"#);
        assert_eq!(record.value_hex.len(), record.size as usize * 2);
    }
}
