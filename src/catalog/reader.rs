//! Reading one item out of a catalog file.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::{CatalogEntry, CatalogError, CatalogKind};

/// Look up `id` in the catalog at `path`.
///
/// The file is read and parsed on every call. An identifier that is not
/// in the catalog yields [`CatalogEntry::default`]; anything wrong with
/// the file itself is an error.
pub fn read_entry(kind: CatalogKind, path: &Path, id: &str) -> Result<CatalogEntry, CatalogError> {
    debug!(catalog = %kind, path = %path.display(), id, "Reading catalog");

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: Value = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    lookup_entry(kind, path, &doc, id)
}

/// Re-key catalog records by one of their own string fields.
///
/// Later records win when two share the same value. Fails with the key of
/// the first record that is not an object or lacks a string `field`.
pub fn rekey<'a>(
    records: &'a Map<String, Value>,
    field: &str,
) -> Result<HashMap<&'a str, &'a Value>, String> {
    let mut keyed = HashMap::with_capacity(records.len());

    for (key, record) in records {
        let stable = record
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| key.clone())?;
        keyed.insert(stable, record);
    }

    Ok(keyed)
}

fn lookup_entry(
    kind: CatalogKind,
    path: &Path,
    doc: &Value,
    id: &str,
) -> Result<CatalogEntry, CatalogError> {
    let key = kind.top_level_key();
    let records = doc
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| CatalogError::MissingKey {
            path: path.to_path_buf(),
            key,
        })?;

    let record = match kind.rekey_field() {
        Some(field) => {
            let keyed = rekey(records, field).map_err(|record| CatalogError::MalformedRecord {
                path: path.to_path_buf(),
                record,
                reason: format!("missing string field '{}'", field),
            })?;
            keyed.get(id).copied()
        }
        None => records.get(id),
    };

    let record = match record {
        Some(record) if !record.is_null() => record,
        _ => return Ok(CatalogEntry::default()),
    };

    let malformed = |reason: String| CatalogError::MalformedRecord {
        path: path.to_path_buf(),
        record: id.to_string(),
        reason,
    };

    let download_url = match record.get(kind.url_field()) {
        Some(Value::String(url)) => url.clone(),
        Some(Value::Null) => String::new(),
        Some(other) => {
            return Err(malformed(format!(
                "'{}' is not a string: {}",
                kind.url_field(),
                other
            )))
        }
        None => return Err(malformed(format!("missing field '{}'", kind.url_field()))),
    };

    let raw = raw_size(record.get(kind.size_field())).map_err(malformed)?;
    let size = kind
        .to_bytes(raw)
        .ok_or_else(|| malformed(format!("size {} overflows", raw)))?;

    Ok(CatalogEntry { download_url, size })
}

/// Parse a raw size field: integers, floats (truncated), or numeric strings.
/// Missing or null counts as 0.
fn raw_size(value: Option<&Value>) -> Result<i64, String> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(|| format!("size {} out of range", n)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("size '{}' is not an integer", s)),
        Some(other) => Err(format!("size {} is not a number", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_rekey_by_perma_ref() {
        let records = records(json!({
            "a": {"perma_ref": "first", "size": 1},
            "b": {"perma_ref": "second", "size": 2}
        }));

        let keyed = rekey(&records, "perma_ref").unwrap();
        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed["first"]["size"], 1);
        assert_eq!(keyed["second"]["size"], 2);
    }

    #[test]
    fn test_rekey_duplicate_last_write_wins() {
        let records = records(json!({
            "z_old": {"perma_ref": "dup", "size": 1},
            "a_new": {"perma_ref": "dup", "size": 2}
        }));

        // File order, not key order
        let keyed = rekey(&records, "perma_ref").unwrap();
        assert_eq!(keyed.len(), 1);
        assert_eq!(keyed["dup"]["size"], 2);
    }

    #[test]
    fn test_rekey_missing_field_names_record() {
        let records = records(json!({
            "ok": {"perma_ref": "fine"},
            "bad": {"size": 3}
        }));

        assert_eq!(rekey(&records, "perma_ref").unwrap_err(), "bad");
    }

    #[test]
    fn test_raw_size_forms() {
        assert_eq!(raw_size(None), Ok(0));
        assert_eq!(raw_size(Some(&Value::Null)), Ok(0));
        assert_eq!(raw_size(Some(&json!(42))), Ok(42));
        assert_eq!(raw_size(Some(&json!(42.9))), Ok(42));
        assert_eq!(raw_size(Some(&json!(" 512 "))), Ok(512));
        assert!(raw_size(Some(&json!("12kb"))).is_err());
        assert!(raw_size(Some(&json!(true))).is_err());
    }

    #[test]
    fn test_lookup_soft_miss() {
        let doc = json!({"zims": {"x": {"perma_ref": "present", "download_url": "u", "size": 1}}});
        let entry = lookup_entry(CatalogKind::Zim, Path::new("k.json"), &doc, "absent").unwrap();
        assert_eq!(entry, CatalogEntry::default());
    }

    #[test]
    fn test_lookup_null_record_is_miss() {
        let doc = json!({"modules": {"en-phet": null}});
        let entry = lookup_entry(CatalogKind::Module, Path::new("o.json"), &doc, "en-phet").unwrap();
        assert_eq!(entry.size, 0);
    }

    #[test]
    fn test_lookup_missing_top_level_key() {
        let doc = json!({"modules": {}});
        let err = lookup_entry(CatalogKind::Zim, Path::new("k.json"), &doc, "x").unwrap_err();
        assert!(matches!(err, CatalogError::MissingKey { key: "zims", .. }));
    }

    #[test]
    fn test_lookup_hit_without_url_is_malformed() {
        let doc = json!({"base": {"k": {"perma_ref": "osm", "size": 10}}});
        let err = lookup_entry(CatalogKind::Map, Path::new("m.json"), &doc, "osm").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { .. }));
    }
}
