use serde::{Deserialize, Serialize};

use crate::assets::loader::AssetRequest;

/// One asset the viewer waits for before revealing itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetEntry {
    /// Tracking name, unique within the session.
    pub name: String,
    /// Path or URL handed to the loader.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Assets fetched at session start.
pub struct AssetOptions {
    /// Assets in load-initiation order.
    pub entries: Vec<AssetEntry>,
    /// Loading-indicator text shown when any asset fails.
    pub error_text: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            entries: vec![
                AssetEntry {
                    name: "Temple".into(),
                    path: "assets/3D Models/konark_texture_reprojected_8k_8.glb"
                        .into(),
                },
                AssetEntry {
                    name: "Environment".into(),
                    path: "assets/hdri/kloofendal_48d_partly_cloudy_puresky_1k.hdr"
                        .into(),
                },
            ],
            error_text: "Error loading model".into(),
        }
    }
}

impl AssetOptions {
    /// Loader requests for every entry, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<AssetRequest> {
        self.entries
            .iter()
            .map(|e| AssetRequest::new(e.name.clone(), e.path.clone()))
            .collect()
    }
}
