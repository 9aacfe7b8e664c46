//! Medical profile record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::domain::foundation::ProfileId;

/// Client-supplied attributes of a profile.
///
/// Every attribute is free text and optional. Absent and `null` values are
/// stored as SQL `NULL` and read back as `null`. Non-string JSON values are
/// kept in their text form (see [`deserialize_column_text`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    #[serde(deserialize_with = "deserialize_column_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub dob: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub bloodtype: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub allergies: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub conditions: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub socialsecuritynumber: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub insurancepolicy: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub emergencycontactname: Option<String>,
    #[serde(deserialize_with = "deserialize_column_text")]
    pub emergencycontactphone: Option<String>,
}

/// Reads any JSON value as the text a TEXT column would hold.
///
/// Strings are taken unquoted and `null` becomes `None`. Numbers, booleans
/// and nested values keep their JSON text, so `5551234` is stored as
/// `"5551234"` and `true` as `"true"`.
pub fn deserialize_column_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

/// One row of `medical_profiles`.
///
/// Serializes with the column names as keys, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalProfile {
    pub id: ProfileId,
    #[serde(flatten)]
    pub fields: ProfileFields,
    /// Display link. `None` for rows written before the column existed.
    pub url: Option<String>,
}

impl MedicalProfile {
    pub fn new(id: ProfileId, fields: ProfileFields, url: Option<String>) -> Self {
        Self { id, fields, url }
    }

    /// Overwrites every mutable column. The id is never touched.
    pub fn replace(&mut self, fields: ProfileFields, url: Option<String>) {
        self.fields = fields;
        self.url = url;
    }

    /// Ascending order by name with `NULL` names sorting last.
    pub fn name_order(a: &MedicalProfile, b: &MedicalProfile) -> Ordering {
        match (&a.fields.name, &b.fields.name) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: Option<&str>) -> MedicalProfile {
        MedicalProfile::new(
            ProfileId::generate(),
            ProfileFields {
                name: name.map(String::from),
                ..Default::default()
            },
            None,
        )
    }

    #[test]
    fn serializes_with_column_names_as_keys() {
        let profile = MedicalProfile::new(
            ProfileId::new("p-1").unwrap(),
            ProfileFields {
                name: Some("Ana".to_string()),
                bloodtype: Some("O+".to_string()),
                ..Default::default()
            },
            Some("https://example.org/display.html?id=p-1".to_string()),
        );

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "p-1",
                "name": "Ana",
                "dob": null,
                "bloodtype": "O+",
                "allergies": null,
                "conditions": null,
                "socialsecuritynumber": null,
                "insurancepolicy": null,
                "emergencycontactname": null,
                "emergencycontactphone": null,
                "url": "https://example.org/display.html?id=p-1"
            })
        );
    }

    #[test]
    fn fields_deserialize_with_missing_keys_as_none() {
        let fields: ProfileFields =
            serde_json::from_value(json!({"name": "Ana", "dob": null})).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Ana"));
        assert!(fields.dob.is_none());
        assert!(fields.emergencycontactphone.is_none());
    }

    #[test]
    fn fields_ignore_unknown_keys() {
        let fields: ProfileFields =
            serde_json::from_value(json!({"name": "Ana", "id": "client-chosen", "url": "x"}))
                .unwrap();
        assert_eq!(fields.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn fields_keep_text_form_of_non_string_values() {
        let fields: ProfileFields = serde_json::from_value(json!({
            "emergencycontactphone": 5551234,
            "allergies": true,
            "dob": 1990.5,
            "conditions": ["asthma"],
            "name": null
        }))
        .unwrap();

        assert_eq!(fields.emergencycontactphone.as_deref(), Some("5551234"));
        assert_eq!(fields.allergies.as_deref(), Some("true"));
        assert_eq!(fields.dob.as_deref(), Some("1990.5"));
        assert_eq!(fields.conditions.as_deref(), Some(r#"["asthma"]"#));
        assert!(fields.name.is_none());
    }

    #[test]
    fn replace_keeps_id() {
        let mut profile = named(Some("Ana"));
        let id = profile.id.clone();

        profile.replace(
            ProfileFields {
                name: Some("Luis".to_string()),
                ..Default::default()
            },
            Some("u".to_string()),
        );

        assert_eq!(profile.id, id);
        assert_eq!(profile.fields.name.as_deref(), Some("Luis"));
        assert_eq!(profile.url.as_deref(), Some("u"));
    }

    #[test]
    fn name_order_is_case_sensitive_with_nulls_last() {
        let mut profiles = vec![
            named(None),
            named(Some("ana")),
            named(Some("Luis")),
            named(Some("Ana")),
        ];
        profiles.sort_by(MedicalProfile::name_order);

        let names: Vec<Option<&str>> =
            profiles.iter().map(|p| p.fields.name.as_deref()).collect();
        assert_eq!(names, vec![Some("Ana"), Some("Luis"), Some("ana"), None]);
    }
}
