//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the vista crate.
#[derive(Debug)]
pub enum VistaError {
    /// An asset with this name is already tracked.
    DuplicateAsset(String),
    /// No asset with this name was registered.
    UnknownAsset(String),
    /// A registration beyond the tracker's fixed expected count.
    UnexpectedAsset {
        /// Name of the rejected asset.
        name: String,
        /// The tracker's fixed expected count.
        expected: usize,
    },
    /// A camera transition was requested with non-finite coordinates.
    InvalidTarget {
        /// Requested camera position.
        position: Vec3,
        /// Requested look-at target.
        target: Vec3,
    },
    /// An asset failed to load. Terminal for that asset; there is no retry.
    AssetLoad {
        /// Name the asset was registered under.
        name: String,
        /// Loader-reported cause.
        cause: String,
    },
    /// A named view was requested that has no preset.
    UnknownView(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A page element the surface needs is missing or has the wrong type.
    Surface(String),
}

impl fmt::Display for VistaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAsset(name) => {
                write!(f, "asset already registered: {name}")
            }
            Self::UnknownAsset(name) => write!(f, "unknown asset: {name}"),
            Self::UnexpectedAsset { name, expected } => write!(
                f,
                "asset {name} exceeds the expected count of {expected}"
            ),
            Self::InvalidTarget { position, target } => write!(
                f,
                "invalid camera target: position {position}, target {target}"
            ),
            Self::AssetLoad { name, cause } => {
                write!(f, "{name} loading failed: {cause}")
            }
            Self::UnknownView(name) => write!(f, "unknown view: {name}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Surface(msg) => write!(f, "surface error: {msg}"),
        }
    }
}

impl std::error::Error for VistaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VistaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_message_names_the_asset() {
        let err = VistaError::AssetLoad {
            name: "Temple".into(),
            cause: "404".into(),
        };
        assert_eq!(err.to_string(), "Temple loading failed: 404");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = VistaError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(VistaError::UnknownAsset("x".into()).source().is_none());
    }
}
