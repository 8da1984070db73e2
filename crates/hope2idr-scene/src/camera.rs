use ndarray::{s, Array2};

/// Compose the 3x4 projective matrix `P = K * E[0:3, 0:4]`.
///
/// # Arguments
///
/// * `intrinsics` - Row-major 3x3 intrinsic matrix `K`.
/// * `extrinsics` - Row-major 4x4 world-to-camera extrinsic matrix `E`.
///
/// # Returns
///
/// The 3x4 matrix mapping world-homogeneous to image-homogeneous coordinates.
pub fn projection_matrix(intrinsics: &[[f32; 3]; 3], extrinsics: &[[f32; 4]; 4]) -> Array2<f32> {
    let k = Array2::from_shape_fn((3, 3), |(i, j)| intrinsics[i][j]);
    let rt = Array2::from_shape_fn((3, 4), |(i, j)| extrinsics[i][j]);
    k.dot(&rt)
}

/// Embed the projective matrix into a homogeneous 4x4 `world_mat`.
///
/// The top-left 3x4 block is `P = K * E[0:3, 0:4]` and the bottom row stays
/// `[0, 0, 0, 1]`, the layout the IDR cameras archive expects.
pub fn world_matrix(intrinsics: &[[f32; 3]; 3], extrinsics: &[[f32; 4]; 4]) -> Array2<f32> {
    let mut world = Array2::<f32>::eye(4);
    world
        .slice_mut(s![0..3, 0..4])
        .assign(&projection_matrix(intrinsics, extrinsics));
    world
}

/// Per-scene normalization matrix of the IDR format.
///
/// This pipeline applies no normalization, so the matrix is always the 4x4
/// identity; the entry exists for compatibility with consumers that support
/// an optional affine pre-normalization per scene.
pub fn scale_matrix() -> Array2<f32> {
    Array2::eye(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const IDENTITY_K: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    const IDENTITY_E: [[f32; 4]; 4] = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    #[test]
    fn world_matrix_identity() {
        let world = world_matrix(&IDENTITY_K, &IDENTITY_E);
        assert_eq!(world, Array2::<f32>::eye(4));
    }

    #[test]
    fn world_matrix_composes_intrinsics_and_translation() {
        let intrinsics = [[500.0, 0.0, 320.0], [0.0, 500.0, 240.0], [0.0, 0.0, 1.0]];
        let extrinsics = [
            [1.0, 0.0, 0.0, 0.1],
            [0.0, 1.0, 0.0, 0.2],
            [0.0, 0.0, 1.0, 0.3],
            [0.0, 0.0, 0.0, 1.0],
        ];

        let world = world_matrix(&intrinsics, &extrinsics);
        let projection = projection_matrix(&intrinsics, &extrinsics);

        // top-left 3x4 block carries K * E[0:3, 0:4]
        for i in 0..3 {
            for j in 0..4 {
                assert_relative_eq!(world[[i, j]], projection[[i, j]]);
            }
        }

        // P[:, 3] = K * t
        assert_relative_eq!(world[[0, 3]], 500.0 * 0.1 + 320.0 * 0.3);
        assert_relative_eq!(world[[1, 3]], 500.0 * 0.2 + 240.0 * 0.3);
        assert_relative_eq!(world[[2, 3]], 0.3);

        // bottom row stays homogeneous
        assert_eq!(world.row(3).to_vec(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn scale_matrix_is_identity() {
        assert_eq!(scale_matrix(), Array2::<f32>::eye(4));
    }
}
