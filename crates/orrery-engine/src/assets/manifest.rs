use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest overriding texture paths by name.
/// Loaded from a JSON file at runtime.
///
/// ```json
/// { "textures": { "earth": "hires/earth_8k.jpg" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Texture name → relative path.
    #[serde(default)]
    pub textures: HashMap<String, String>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_texture_overrides() {
        let json = r#"{
            "textures": {
                "earth": "hires/earth.jpg",
                "saturn_ring": "rings/saturn.png"
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["earth"], "hires/earth.jpg");
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json("{ \"textures\": 3 }").is_err());
    }
}
