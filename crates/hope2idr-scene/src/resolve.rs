use std::path::{Path, PathBuf};

use crate::error::SceneError;

/// Find the RGB image matching an annotation base name.
///
/// HOPE-Video names images `{base}_rgb.jpg` by default; plain-name and
/// alternate-extension fallbacks are probed in fixed priority order. The
/// first candidate that exists on disk wins and no fuzzy matching is
/// attempted, since a silently wrong image would corrupt the dataset.
///
/// # Arguments
///
/// * `scene_dir` - The source scene directory.
/// * `base` - The annotation base name (file name without extension).
///
/// # Returns
///
/// The resolved image path, or [`SceneError::MissingAsset`] when none of the
/// candidates exist.
pub fn resolve_rgb_image(scene_dir: impl AsRef<Path>, base: &str) -> Result<PathBuf, SceneError> {
    let scene_dir = scene_dir.as_ref();

    let candidates = [
        format!("{}_rgb.jpg", base),
        format!("{}_rgb.png", base),
        format!("{}.jpg", base),
        format!("{}.png", base),
    ];

    for name in &candidates {
        let path = scene_dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }

    Err(SceneError::MissingAsset {
        base: base.to_string(),
        scene_dir: scene_dir.to_path_buf(),
    })
}
