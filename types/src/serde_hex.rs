//! Serde helpers for byte fields carried as hex strings.
//!
//! Use with `#[serde(default, with = "nem_types::serde_hex::option")]` on
//! `Option<Vec<u8>>` fields.

pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        s.map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "super::option")]
        key: Option<Vec<u8>>,
    }

    #[test]
    fn decodes_hex_and_missing_fields() {
        let h: Holder = serde_json::from_str(r#"{"key":"00ff10"}"#).unwrap();
        assert_eq!(h.key, Some(vec![0x00, 0xff, 0x10]));
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(h.key, None);
        let h: Holder = serde_json::from_str(r#"{"key":null}"#).unwrap();
        assert_eq!(h.key, None);
    }

    #[test]
    fn empty_string_is_present_but_empty() {
        let h: Holder = serde_json::from_str(r#"{"key":""}"#).unwrap();
        assert_eq!(h.key, Some(vec![]));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(serde_json::from_str::<Holder>(r#"{"key":"zz"}"#).is_err());
    }
}
