use serde::{Deserialize, Serialize};

/// Reference to another record. Depending on whether the endpoint
/// populates the relation, the backend sends either a bare id string or
/// an embedded `{_id, name}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceRef {
    Id(String),
    Embedded(NamedRef),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl ResourceRef {
    pub fn id(&self) -> &str {
        match self {
            ResourceRef::Id(id) => id,
            ResourceRef::Embedded(r) => &r.id,
        }
    }

    /// Display name when the relation was populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            ResourceRef::Id(_) => None,
            ResourceRef::Embedded(r) => Some(&r.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_ref_both_wire_shapes() {
        let bare: ResourceRef = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(bare.id(), "abc123");
        assert_eq!(bare.name(), None);

        let embedded: ResourceRef =
            serde_json::from_value(serde_json::json!({ "_id": "abc123", "name": "Sarees" }))
                .unwrap();
        assert_eq!(embedded.id(), "abc123");
        assert_eq!(embedded.name(), Some("Sarees"));
    }
}
