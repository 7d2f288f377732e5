use std::collections::HashMap;
use crate::api::types::TextureId;
use crate::assets::manifest::AssetManifest;

/// Registry of named textures.
/// Ids are dense and issued in registration order; the host loads paths in id order.
pub struct TextureRegistry {
    by_name: HashMap<String, TextureId>,
    paths: Vec<String>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            paths: Vec::new(),
        }
    }

    /// Register a texture. Registering an existing name returns its id unchanged.
    pub fn register(&mut self, name: &str, path: &str) -> TextureId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = TextureId(self.paths.len() as u32);
        self.by_name.insert(name.to_string(), id);
        self.paths.push(path.to_string());
        id
    }

    /// Look up a texture by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.paths.get(id.0 as usize).map(String::as_str)
    }

    /// Override paths of registered textures. Returns how many were applied.
    pub fn apply_manifest(&mut self, manifest: &AssetManifest) -> usize {
        let mut applied = 0;
        for (name, path) in &manifest.textures {
            match self.by_name.get(name) {
                Some(id) => {
                    self.paths[id.0 as usize] = path.clone();
                    applied += 1;
                }
                None => log::warn!("manifest names unknown texture '{name}'"),
            }
        }
        applied
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
