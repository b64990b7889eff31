use serde::{Deserialize, Serialize};

/// Open Library stores some free text either as a bare string or as a
/// `{"type": "/type/text", "value": "..."}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Simple(String),
    Complex(TextValueComplex),
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValueComplex {
    #[serde(rename = "type")]
    pub kind:  Option<String>,
    pub value: String,
}

impl TextValue {
    pub fn into_text(self) -> String {
        match self {
            TextValue::Simple(s) => s,
            TextValue::Complex(c) => c.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_shapes_yield_text() {
        let simple: TextValue = serde_json::from_str(r#""A tale.""#).unwrap();
        let complex: TextValue =
            serde_json::from_str(r#"{"type": "/type/text", "value": "A tale."}"#).unwrap();
        assert_eq!(simple.into_text(), "A tale.");
        assert_eq!(complex.into_text(), "A tale.");
    }
}
