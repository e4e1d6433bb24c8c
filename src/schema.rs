use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A contract award record as received from the data source.
///
/// Two key shapes are accepted: the capitalized field names returned by
/// the USAspending award search endpoint ("Award ID", "Recipient Name",
/// "Award Amount", "Action Date", "Description") and a compact lower-case
/// shape (`id`, `recipient`, `amount`, `date`, `description`). The
/// capitalized shape is the canonical wire contract; the compact shape is
/// kept as a legacy alias, resolved by an explicit key-priority adapter
/// rather than field probing scattered across consumers.
///
/// Every field is an optional raw JSON value so that a single malformed
/// record can never fail deserialization of a whole result page. Keys the
/// contract does not name are retained opaquely in `extra` for detail
/// display.
#[derive(Debug, Clone, Default, JsonSchema)]
pub struct RawRecord {
    #[schemars(rename = "Award ID", description = "Award identifier (PIID). May be absent.")]
    pub award_id: Option<Value>,

    #[schemars(
        rename = "Recipient Name",
        description = "Legal name of the awarded vendor. May be absent."
    )]
    pub recipient_name: Option<Value>,

    #[schemars(
        rename = "Award Amount",
        description = "Obligated award amount. Arrives as a JSON number or a numeric string depending on the upstream serializer."
    )]
    pub award_amount: Option<Value>,

    #[schemars(
        rename = "Action Date",
        description = "Date of the award action in YYYY-MM-DD format. May be absent."
    )]
    pub action_date: Option<Value>,

    #[schemars(
        rename = "Description",
        description = "Free-text description of the awarded work."
    )]
    pub description: Option<Value>,

    #[schemars(flatten)]
    pub extra: Map<String, Value>,
}

// Canonical key first, legacy alias second.
const AWARD_ID_KEYS: [&str; 2] = ["Award ID", "id"];
const RECIPIENT_KEYS: [&str; 2] = ["Recipient Name", "recipient"];
const AMOUNT_KEYS: [&str; 2] = ["Award Amount", "amount"];
const DATE_KEYS: [&str; 2] = ["Action Date", "date"];
const DESCRIPTION_KEYS: [&str; 2] = ["Description", "description"];

impl RawRecord {
    /// The two-shape adapter: known fields are pulled out under either
    /// spelling (canonical wins when both appear); everything else stays
    /// in `extra` untouched.
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        RawRecord {
            award_id: take_field(&mut fields, &AWARD_ID_KEYS),
            recipient_name: take_field(&mut fields, &RECIPIENT_KEYS),
            award_amount: take_field(&mut fields, &AMOUNT_KEYS),
            action_date: take_field(&mut fields, &DATE_KEYS),
            description: take_field(&mut fields, &DESCRIPTION_KEYS),
            extra: fields,
        }
    }

    fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        let named = [
            (AWARD_ID_KEYS[0], &self.award_id),
            (RECIPIENT_KEYS[0], &self.recipient_name),
            (AMOUNT_KEYS[0], &self.award_amount),
            (DATE_KEYS[0], &self.action_date),
            (DESCRIPTION_KEYS[0], &self.description),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                fields.insert(key.to_string(), value.clone());
            }
        }
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RawRecord)
    }

    /// Emits the wire contract as a JSON Schema document, used to confirm
    /// the integration contract with the retrieval service.
    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

fn take_field(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    let mut found = None;
    for key in keys {
        if let Some(value) = fields.remove(*key) {
            found.get_or_insert(value);
        }
    }
    found
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::deserialize(deserializer)?;
        Ok(RawRecord::from_fields(fields))
    }
}

impl Serialize for RawRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_fields().serialize(serializer)
    }
}

/// A fully-defaulted, type-coerced award record safe for downstream
/// computation. Produced by [`crate::normalize::normalize_record`]; every
/// field is populated, so no consumer needs to re-check the raw shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanonicalRecord {
    pub award_id: String,

    pub recipient_name: String,

    /// Coerced to 0.0 when the source value is absent or non-numeric. A
    /// negative source amount passes through unchanged.
    pub award_amount: f64,

    /// `None` when the source date is absent or unparseable.
    pub action_date: Option<NaiveDate>,

    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl CanonicalRecord {
    /// Display label for the action date; unparseable dates render as the
    /// fixed "N/A" sentinel rather than erroring.
    pub fn action_date_label(&self) -> String {
        crate::utils::format_date_label(self.action_date)
    }

    /// Display label for the award amount, e.g. "$1,250,000".
    pub fn award_amount_label(&self) -> String {
        crate::utils::format_usd(self.award_amount)
    }
}

impl From<&CanonicalRecord> for RawRecord {
    fn from(record: &CanonicalRecord) -> Self {
        RawRecord {
            award_id: Some(Value::String(record.award_id.clone())),
            recipient_name: Some(Value::String(record.recipient_name.clone())),
            award_amount: Number::from_f64(record.award_amount).map(Value::Number),
            action_date: record
                .action_date
                .map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
            description: record.description.clone().map(Value::String),
            extra: record.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_generation() {
        let schema_json = RawRecord::schema_as_json().unwrap();
        assert!(schema_json.contains("Award ID"));
        assert!(schema_json.contains("Recipient Name"));
        assert!(schema_json.contains("Award Amount"));
    }

    #[test]
    fn test_deserialize_capitalized_shape() {
        let record: RawRecord = serde_json::from_value(json!({
            "Award ID": "CONT_AWD_001",
            "Recipient Name": "Lockheed Martin Corporation",
            "Award Amount": 1500000.0,
            "Action Date": "2023-03-15",
            "Description": "Aircraft maintenance"
        }))
        .unwrap();

        assert_eq!(record.award_id, Some(json!("CONT_AWD_001")));
        assert_eq!(record.award_amount, Some(json!(1500000.0)));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_deserialize_compact_shape() {
        let record: RawRecord = serde_json::from_value(json!({
            "id": "W9128F",
            "recipient": "Acme",
            "amount": "1000000",
            "date": "2023-01-02"
        }))
        .unwrap();

        assert_eq!(record.recipient_name, Some(json!("Acme")));
        assert_eq!(record.award_amount, Some(json!("1000000")));
        assert!(record.description.is_none());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_canonical_key_wins_over_alias() {
        let record: RawRecord = serde_json::from_value(json!({
            "Award Amount": 500.0,
            "amount": 999.0
        }))
        .unwrap();

        assert_eq!(record.award_amount, Some(json!(500.0)));
        // Both spellings are recognized fields; neither leaks into extra.
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_retained() {
        let record: RawRecord = serde_json::from_value(json!({
            "Award ID": "A-1",
            "Awarding Agency": "Department of Defense",
            "generated_internal_id": 42
        }))
        .unwrap();

        assert_eq!(record.extra.len(), 2);
        assert_eq!(
            record.extra.get("Awarding Agency"),
            Some(&json!("Department of Defense"))
        );
    }

    #[test]
    fn test_serialize_uses_canonical_keys() {
        let record: RawRecord = serde_json::from_value(json!({
            "id": "A-1",
            "recipient": "Acme",
            "amount": 10.0
        }))
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("Award ID").is_some());
        assert!(value.get("Recipient Name").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_wire_round_trip() {
        let original = json!({
            "Award ID": "CONT_AWD_001",
            "Recipient Name": "Acme",
            "Award Amount": 10.0,
            "naics_code": "336411"
        });

        let record: RawRecord = serde_json::from_value(original.clone()).unwrap();
        let reserialized = serde_json::to_value(&record).unwrap();
        assert_eq!(reserialized, original);
    }
}
