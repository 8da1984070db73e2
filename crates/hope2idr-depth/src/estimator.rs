use std::path::PathBuf;

use ndarray::Array2;

use crate::error::DepthError;

/// The two depth passes run over a converted scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPass {
    /// Scale-ambiguous monocular depth.
    Relative,
    /// Absolute-scale depth.
    Metric,
}

impl DepthPass {
    /// Suffix appended to depth file names produced by this pass.
    pub fn suffix(&self) -> &'static str {
        match self {
            DepthPass::Relative => "rel",
            DepthPass::Metric => "metric",
        }
    }
}

/// Batched monocular depth estimation capability.
///
/// Implementations take a batch of image paths and return one 2-D depth map
/// per image, in the same order as the input. The driver owns batching and
/// persistence, so a stub implementation is enough to test it.
pub trait DepthEstimator {
    /// Estimate one depth map per image in the batch.
    fn estimate_batch(&mut self, images: &[PathBuf]) -> Result<Vec<Array2<f32>>, DepthError>;
}
