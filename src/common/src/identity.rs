use crate::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};

/// The five descriptive attributes that name a process instance.
///
/// Missing attributes deserialize as empty strings so the positional layout
/// used for the fingerprint never shifts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessIdentity {
    #[serde(default, rename = "prop1", alias = "Prop1")]
    pub prop1: String,
    #[serde(default, rename = "prop2", alias = "Prop2")]
    pub prop2: String,
    #[serde(default, rename = "prop3", alias = "Prop3")]
    pub prop3: String,
    #[serde(default, rename = "prop4", alias = "Prop4")]
    pub prop4: String,
    #[serde(default, rename = "prop5", alias = "Prop5")]
    pub prop5: String,
}

impl ProcessIdentity {
    pub fn new(
        prop1: impl Into<String>,
        prop2: impl Into<String>,
        prop3: impl Into<String>,
        prop4: impl Into<String>,
        prop5: impl Into<String>,
    ) -> Self {
        Self {
            prop1: prop1.into(),
            prop2: prop2.into(),
            prop3: prop3.into(),
            prop4: prop4.into(),
            prop5: prop5.into(),
        }
    }

    /// Attributes in their fixed fingerprint order.
    pub fn attributes(&self) -> [&str; 5] {
        [
            self.prop1.as_str(),
            self.prop2.as_str(),
            self.prop3.as_str(),
            self.prop4.as_str(),
            self.prop5.as_str(),
        ]
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::derive(self.attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fingerprint_follows_attribute_order() {
        let identity = ProcessIdentity::new("A", "B", "C", "D", "E");
        assert_eq!(
            identity.fingerprint(),
            Fingerprint::derive(["A", "B", "C", "D", "E"])
        );
    }

    #[test]
    fn test_accepts_pascal_case_and_missing_fields() {
        let identity: ProcessIdentity =
            serde_json::from_value(json!({ "Prop1": "A", "prop2": "B", "Prop5": "E" })).unwrap();
        assert_eq!(identity, ProcessIdentity::new("A", "B", "", "", "E"));
    }

    #[test]
    fn test_serializes_lower_camel_case() {
        let value = serde_json::to_value(ProcessIdentity::new("A", "B", "C", "D", "E")).unwrap();
        assert_eq!(
            value,
            json!({ "prop1": "A", "prop2": "B", "prop3": "C", "prop4": "D", "prop5": "E" })
        );
    }
}
