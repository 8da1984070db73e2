use std::{
    fs::{self, File},
    path::Path,
};

use ndarray_npy::NpzWriter;

use crate::{annotation, camera, error::SceneError, resolve, select};

/// Configuration for converting a source scene.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Maximum number of frames to sample per scene.
    pub num_frames: usize,
    /// Seed for the frame sampling generator.
    pub seed: u64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            num_frames: 100,
            seed: 0,
        }
    }
}

/// Convert one HOPE-Video scene into an IDR-style scene directory.
///
/// Selected frames are copied byte-for-byte to `image/{idx:04}.png` in
/// ascending base-name order; the source bytes are never re-encoded, so JPEG
/// data may end up under a `.png` name. Consumers are expected to sniff
/// content rather than trust the extension. The per-frame `world_mat_{idx}`
/// and `scale_mat_{idx}` matrices are aggregated into a single
/// `cameras.npz`, written only after every frame succeeded so that a failed
/// conversion never leaves an archive inconsistent with `image/`.
///
/// # Arguments
///
/// * `src_dir` - The source scene directory.
/// * `out_dir` - The converted scene directory, created as needed. Any
///   pre-existing `image/` directory and `cameras.npz` are removed before
///   the scene is rebuilt.
/// * `config` - Frame budget and sampling seed.
///
/// # Returns
///
/// The number of converted frames.
pub fn convert_scene(
    src_dir: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &ConvertConfig,
) -> Result<usize, SceneError> {
    let src_dir = src_dir.as_ref();
    let out_dir = out_dir.as_ref();

    if !src_dir.is_dir() {
        return Err(SceneError::SourceNotFound(src_dir.to_path_buf()));
    }

    let annotations = select::list_annotations(src_dir)?;
    let selected = select::sample_frames(annotations, config.num_frames, config.seed);

    let image_dir = out_dir.join("image");
    if image_dir.is_dir() {
        // drop stale indices from a previous run with a larger frame budget
        fs::remove_dir_all(&image_dir)?;
    }
    let cameras_path = out_dir.join("cameras.npz");
    if cameras_path.exists() {
        // a stale archive next to a failed rebuild would look complete
        fs::remove_file(&cameras_path)?;
    }
    fs::create_dir_all(&image_dir)?;

    let mut world_mats = Vec::with_capacity(selected.len());
    for (idx, json_path) in selected.iter().enumerate() {
        let record = annotation::read_annotation(json_path)?;
        world_mats.push(camera::world_matrix(
            &record.camera.intrinsics,
            &record.camera.extrinsics,
        ));

        let rgb_src = resolve::resolve_rgb_image(src_dir, &record.base)?;
        fs::copy(&rgb_src, image_dir.join(format!("{:04}.png", idx)))?;
    }

    let mut npz = NpzWriter::new(File::create(&cameras_path)?);
    for (idx, world_mat) in world_mats.iter().enumerate() {
        npz.add_array(format!("world_mat_{}", idx), world_mat)?;
    }
    for idx in 0..world_mats.len() {
        npz.add_array(format!("scale_mat_{}", idx), &camera::scale_matrix())?;
    }
    npz.finish()?;

    Ok(selected.len())
}

/// Convert a batch of named scenes under a common root.
///
/// A scene whose source directory does not exist is skipped with a warning;
/// any other error aborts the batch. Scenes converted before an abort remain
/// on disk.
///
/// # Arguments
///
/// * `hope_root` - Root directory containing the source scenes.
/// * `out_root` - Root directory for the converted scenes.
/// * `scenes` - Scene identifiers (directory names under `hope_root`).
/// * `config` - Frame budget and sampling seed, shared by all scenes.
pub fn convert_scenes(
    hope_root: impl AsRef<Path>,
    out_root: impl AsRef<Path>,
    scenes: &[String],
    config: &ConvertConfig,
) -> Result<(), SceneError> {
    let hope_root = hope_root.as_ref();
    let out_root = out_root.as_ref();

    for scene in scenes {
        let src_dir = hope_root.join(scene);
        let out_dir = out_root.join(scene);

        match convert_scene(&src_dir, &out_dir, config) {
            Ok(count) => log::info!(
                "converted {} frames from '{}' into '{}'",
                count,
                src_dir.display(),
                out_dir.display()
            ),
            Err(SceneError::SourceNotFound(dir)) => {
                log::warn!("scene directory not found, skipping: {}", dir.display());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
