use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{CageError, CageResult};

/// Font bytes plus the face index and pixel size used to draw them.
///
/// Construction parses the face once, so a `Font` always refers to usable font data.
#[derive(Clone)]
pub struct Font {
    data: Arc<[u8]>,
    index: u32,
    size: f32,
}

impl Font {
    pub fn from_bytes(data: impl Into<Arc<[u8]>>, index: u32, size: f32) -> CageResult<Self> {
        let data = data.into();
        if data.is_empty() {
            return Err(CageError::invalid_argument("font data must not be empty"));
        }
        check_size(size)?;
        skrifa::FontRef::from_index(&data, index)
            .map_err(|e| CageError::font(format!("parse face {index}: {e}")))?;
        Ok(Self { data, index, size })
    }

    pub fn from_path(path: &Path, size: f32) -> CageResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| CageError::font(format!("read font '{}': {e}", path.display())))?;
        Self::from_bytes(bytes, 0, size)
    }

    /// Same face at another pixel size; shares the underlying bytes.
    pub fn with_size(&self, size: f32) -> CageResult<Self> {
        check_size(size)?;
        Ok(Self {
            data: Arc::clone(&self.data),
            index: self.index,
            size,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub(crate) fn font_ref(&self) -> CageResult<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, self.index)
            .map_err(|e| CageError::font(format!("parse face {}: {e}", self.index)))
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .field("size", &self.size)
            .finish()
    }
}

fn check_size(size: f32) -> CageResult<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(CageError::invalid_argument(format!(
            "font size must be a positive number, got {size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
