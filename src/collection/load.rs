//! Bulk loading from the spreadsheet's JSON export.
//!
//! Load policy: entries are appended in file order and the first entry that
//! fails to convert aborts the load. Entries appended before the failure stay
//! in the collection. The error is logged here and also returned, so callers
//! decide whether to surface it.

use super::OrderCollection;
use crate::error::LedgerError;
use crate::model::OrderEntry;
use serde_json::Value;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use tracing::{info, instrument, warn};

impl OrderCollection {
    /// Converts and appends every decoded entry, returning how many were added.
    ///
    /// # Errors
    /// - [`LedgerError::Decode`] if an entry is not a JSON object.
    /// - [`LedgerError::InvalidValue`] if an entry has a non-numeric tax value.
    pub fn load_entries(&mut self, entries: &[Value]) -> Result<usize, LedgerError> {
        let mut added = 0;
        for (index, entry) in entries.iter().enumerate() {
            let result = match entry {
                Value::Object(fields) => OrderEntry::from_fields(fields),
                other => Err(LedgerError::Decode(format!(
                    "entry {index} is not an object: {other}"
                ))),
            };
            match result {
                Ok(order) => {
                    self.add(order);
                    added += 1;
                }
                Err(e) => {
                    warn!(index, added, error = %e, "Load aborted");
                    return Err(e);
                }
            }
        }
        info!(added, size = self.len(), "Loaded");
        Ok(added)
    }

    /// Decodes a JSON document holding an array of order objects and loads it.
    pub fn load_json(&mut self, json: &str) -> Result<usize, LedgerError> {
        let decoded: Value = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Error decoding JSON");
            LedgerError::from(e)
        })?;
        match decoded {
            Value::Array(entries) => self.load_entries(&entries),
            other => {
                let e = LedgerError::Decode(format!(
                    "expected an array of orders, found {}",
                    json_type(&other)
                ));
                warn!(error = %e, "Error decoding JSON");
                Err(e)
            }
        }
    }

    /// Reads `path` and loads its orders.
    ///
    /// # Errors
    /// [`LedgerError::NotFound`] when the file does not exist; nothing is
    /// added in that case.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LedgerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => LedgerError::NotFound {
                path: path.display().to_string(),
            },
            // read_to_string reports bad UTF-8 as InvalidData
            IoErrorKind::InvalidData => LedgerError::Decode(e.to_string()),
            _ => LedgerError::Io(e),
        });
        let contents = match contents {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, "Could not read orders file");
                return Err(e);
            }
        };
        self.load_json(&contents)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn stops_at_first_bad_entry() {
        let mut orders = OrderCollection::new();
        let entries = vec![
            json!({ "Order Number": "1", "Estimated Tax Value": "1.00" }),
            json!({ "Order Number": "2", "Estimated Tax Value": "N/A" }),
            json!({ "Order Number": "3" }),
        ];

        let err = orders.load_entries(&entries).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(orders.len(), 1);
        assert!(orders.get_by_number("1").is_some());
        assert!(orders.get_by_number("3").is_none());
    }

    #[test]
    fn non_object_entry_is_a_decode_error() {
        let mut orders = OrderCollection::new();
        let err = orders.load_entries(&[json!("100-1")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(orders.is_empty());
    }

    #[test]
    fn top_level_must_be_an_array() {
        let mut orders = OrderCollection::new();
        let err = orders.load_json(r#"{"Order Number": "1"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(
            err.to_string(),
            "Error decoding JSON: expected an array of orders, found an object"
        );

        let err = orders.load_json("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(orders.is_empty());
    }

    #[test]
    fn empty_array_loads_nothing() {
        let mut orders = OrderCollection::new();
        assert_eq!(orders.load_json("[]").unwrap(), 0);
        assert!(orders.is_empty());
    }
}
