use std::path::{Path, PathBuf};

use crate::{
    assets::decode::decode_skin,
    foundation::{
        core::SkinImage,
        error::{TeeError, TeeResult},
    },
};

/// Resolves a skin name to decoded pixels.
///
/// Implementations own all IO; rendering only ever sees the returned
/// [`SkinImage`].
pub trait SkinSource {
    fn fetch(&self, name: &str) -> TeeResult<SkinImage>;
}

/// Skins stored as `<root>/<name>.png`.
#[derive(Clone, Debug)]
pub struct DirSkinSource {
    root: PathBuf,
}

impl DirSkinSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a skin name maps to, after rejecting anything that is not a
    /// single plain file name.
    pub fn path_for(&self, name: &str) -> TeeResult<PathBuf> {
        if name.is_empty() {
            return Err(TeeError::validation("skin name must be non-empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(TeeError::validation(format!(
                "skin name '{name}' must be a plain file name"
            )));
        }
        Ok(self.root.join(format!("{name}.png")))
    }
}

impl SkinSource for DirSkinSource {
    fn fetch(&self, name: &str) -> TeeResult<SkinImage> {
        let path = self.path_for(name)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TeeError::source_not_found(name));
            }
            Err(e) => {
                return Err(TeeError::from(
                    anyhow::Error::new(e)
                        .context(format!("read skin bytes from '{}'", path.display())),
                ));
            }
        };
        tracing::debug!(skin = name, bytes = bytes.len(), "loaded skin");
        decode_skin(&bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
