use crate::common::*;

#[doc = r#"
    Deserializes a boolean column written by the upstream pandas pipeline.

    The CSV datasets are produced with `DataFrame.to_csv`, which serializes
    booleans as `True`/`False`; plain serde only accepts `true`/`false`. This
    helper accepts both spellings plus `1`/`0`.

    # Returns
    * `Result<bool, D::Error>` - The parsed flag, or a custom error for any
      other value
"#]
pub fn deserialize_py_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = String::deserialize(deserializer)?;

    match raw.trim() {
        "True" | "true" | "TRUE" | "1" => Ok(true),
        "False" | "false" | "FALSE" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value: '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "deserialize_py_bool")]
        value: bool,
    }

    #[test]
    fn accepts_pandas_and_plain_spellings() {
        for (raw, expected) in [
            ("True", true),
            ("true", true),
            ("1", true),
            ("False", false),
            ("false", false),
            ("0", false),
        ] {
            let flag: Flag =
                serde_json::from_str(&format!(r#"{{"value": "{}"}}"#, raw)).unwrap();
            assert_eq!(flag.value, expected);
        }
    }

    #[test]
    fn rejects_anything_else() {
        let parsed: Result<Flag, _> = serde_json::from_str(r#"{"value": "maybe"}"#);
        assert!(parsed.is_err());
    }
}
