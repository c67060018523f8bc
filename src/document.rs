use serde::{Deserialize, Serialize};

/// A text note posted to the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub description: String,
}

/// An uploaded image, payload stored inline in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,

    #[serde(rename = "contentType")]
    pub content_type: String,
}

/// One document in the board collection, discriminated by its `kind` tag.
///
/// The collection is heterogeneous: notes and images live side by side in
/// the same table and only the tag tells them apart. Documents carrying a
/// tag this version does not know decode to [`Document::Unrecognized`]
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Document {
    Note(Note),
    Image(Image),

    #[serde(other)]
    Unrecognized,
}

impl Document {
    /// Decodes a stored JSON body.
    ///
    /// Unknown `kind` tags come back as [`Document::Unrecognized`] via the
    /// serde catch-all; bodies that are not valid JSON, or that carry a
    /// known tag with a malformed shape, are folded into the same variant.
    /// Feed scans skip them rather than erroring out.
    pub fn decode(body: &str) -> Document {
        serde_json::from_str(body).unwrap_or(Document::Unrecognized)
    }

    /// Encodes this document into its stored JSON body.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Inline binary payloads are carried as base64 strings inside the JSON
/// document body.
mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
