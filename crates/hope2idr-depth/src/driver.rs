use std::{
    fs,
    path::{Path, PathBuf},
};

use ndarray_npy::write_npy;

use crate::{
    error::DepthError,
    estimator::{DepthEstimator, DepthPass},
};

/// Number of images fed to the model per inference call, to bound peak
/// memory on the accelerator.
pub const BATCH_SIZE: usize = 4;

/// List the images of a converted scene's `image` directory, sorted by name.
///
/// # Arguments
///
/// * `scene_dir` - The converted scene directory.
///
/// # Returns
///
/// The sorted image paths, or [`DepthError::EmptyScene`] when the directory
/// is missing or holds no images.
pub fn list_scene_images(scene_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, DepthError> {
    let image_dir = scene_dir.as_ref().join("image");
    if !image_dir.is_dir() {
        return Err(DepthError::EmptyScene(image_dir));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(&image_dir)? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .map_or(false, |ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg"));
        if is_image {
            images.push(path);
        }
    }

    if images.is_empty() {
        return Err(DepthError::EmptyScene(image_dir));
    }

    images.sort();
    Ok(images)
}

/// Run one depth pass over a converted scene.
///
/// Images are processed in fixed batches of [`BATCH_SIZE`]; for every image
/// one `depth/{base}_{suffix}_depth.npy` array (f32) is written, overwriting
/// any previous file of the same name. A failure inside the estimator is not
/// retried and aborts the pass, so a scene either gets a complete set of
/// depth maps for this pass or none labeled as such.
///
/// # Arguments
///
/// * `scene_dir` - The converted scene directory.
/// * `estimator` - The injected depth estimation capability.
/// * `pass` - Which pass is running; determines the file name suffix.
///
/// # Returns
///
/// The number of images processed.
pub fn run_depth_pass(
    scene_dir: impl AsRef<Path>,
    estimator: &mut dyn DepthEstimator,
    pass: DepthPass,
) -> Result<usize, DepthError> {
    let scene_dir = scene_dir.as_ref();
    let images = list_scene_images(scene_dir)?;
    log::info!(
        "scene: {}, pass: {}, images: {}",
        scene_dir.display(),
        pass.suffix(),
        images.len()
    );

    let depth_dir = scene_dir.join("depth");
    fs::create_dir_all(&depth_dir)?;

    for (batch_idx, batch) in images.chunks(BATCH_SIZE).enumerate() {
        let start = batch_idx * BATCH_SIZE;
        log::info!("batch {} - {}", start, start + batch.len() - 1);

        let depths = estimator.estimate_batch(batch)?;
        if depths.len() != batch.len() {
            return Err(DepthError::BatchMismatch {
                expected: batch.len(),
                actual: depths.len(),
            });
        }

        for (path, depth) in batch.iter().zip(depths) {
            let base = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            write_npy(
                depth_dir.join(format!("{}_{}_depth.npy", base, pass.suffix())),
                &depth,
            )?;
        }
    }

    log::info!("done: {}, pass: {}", scene_dir.display(), pass.suffix());
    Ok(images.len())
}
