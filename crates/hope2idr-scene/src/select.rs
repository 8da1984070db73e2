use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{rngs::StdRng, SeedableRng};

use crate::error::SceneError;

/// List the annotation (`.json`) files of a source scene, sorted by name.
///
/// Sorting gives a deterministic base ordering independent of the file
/// system enumeration order.
///
/// # Arguments
///
/// * `scene_dir` - The source scene directory.
///
/// # Returns
///
/// The sorted annotation file paths, or [`SceneError::EmptyScene`] if none
/// are found.
pub fn list_annotations(scene_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, SceneError> {
    let scene_dir = scene_dir.as_ref();

    let mut files = Vec::new();
    for entry in fs::read_dir(scene_dir)? {
        let path = entry?.path();
        if path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(SceneError::EmptyScene(scene_dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// Select a reproducible subset of at most `num_frames` files.
///
/// When more files are available than requested, exactly `num_frames` are
/// drawn without replacement from a generator seeded with `seed`; otherwise
/// all files are kept. The result is re-sorted by name so that final indices
/// follow ascending base-name order regardless of the sampling order.
pub fn sample_frames(mut files: Vec<PathBuf>, num_frames: usize, seed: u64) -> Vec<PathBuf> {
    files.sort();

    let mut selected = if files.len() > num_frames {
        let mut rng = StdRng::seed_from_u64(seed);
        rand::seq::index::sample(&mut rng, files.len(), num_frames)
            .into_iter()
            .map(|i| files[i].clone())
            .collect()
    } else {
        files
    };

    selected.sort();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn fake_files(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| PathBuf::from(format!("{:04}.json", i)))
            .collect()
    }

    #[test]
    fn sample_is_reproducible() {
        let first = sample_frames(fake_files(50), 10, 7);
        let second = sample_frames(fake_files(50), 10, 7);
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn sample_differs_across_seeds() {
        let seed_a = sample_frames(fake_files(200), 10, 0);
        let seed_b = sample_frames(fake_files(200), 10, 1);
        assert_ne!(seed_a, seed_b);
    }

    #[test]
    fn sample_output_is_sorted_subset() {
        let all = fake_files(30);
        let selected = sample_frames(all.clone(), 5, 3);

        let mut resorted = selected.clone();
        resorted.sort();
        assert_eq!(selected, resorted);
        assert!(selected.iter().all(|f| all.contains(f)));
    }

    #[test]
    fn sample_takes_all_when_budget_exceeds_available() {
        // presented shuffled on purpose; any seed must return everything sorted
        let files = vec![
            PathBuf::from("0002.json"),
            PathBuf::from("0000.json"),
            PathBuf::from("0001.json"),
        ];
        for seed in [0, 1, 42] {
            let selected = sample_frames(files.clone(), 10, seed);
            assert_eq!(selected, fake_files(3));
        }
    }

    #[test]
    fn list_annotations_sorts_and_filters() -> Result<(), SceneError> {
        let tmp_dir = tempfile::tempdir()?;
        for name in ["0002.json", "0000.json", "0001.json", "notes.txt"] {
            File::create(tmp_dir.path().join(name))?;
        }

        let files = list_annotations(tmp_dir.path())?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["0000.json", "0001.json", "0002.json"]);

        Ok(())
    }

    #[test]
    fn list_annotations_rejects_empty_scene() -> Result<(), SceneError> {
        let tmp_dir = tempfile::tempdir()?;
        match list_annotations(tmp_dir.path()) {
            Err(SceneError::EmptyScene(dir)) => {
                assert_eq!(dir, tmp_dir.path());
                Ok(())
            }
            other => panic!("expected EmptyScene, got {:?}", other),
        }
    }
}
