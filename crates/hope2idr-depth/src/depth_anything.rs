use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use candle_core::{DType, Device, Module, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::depth_anything_v2::{DepthAnythingV2, DepthAnythingV2Config};
use candle_transformers::models::dinov2;
use image::imageops::FilterType;
use ndarray::Array2;

use crate::{
    error::DepthError,
    estimator::{DepthEstimator, DepthPass},
};

// normalization constants of the DINOv2 backbone, see
// https://huggingface.co/spaces/depth-anything/Depth-Anything-V2/blob/main/depth_anything_v2/dpt.py#L207
const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// DINOv2 ViT patch size; the processing resolution must be a multiple.
const PATCH_SIZE: usize = 14;

/// Hub repository holding the DINOv2 backbone weights.
pub const DINOV2_REPO: &str = "lmz/candle-dino-v2";
/// Backbone weights file inside [`DINOV2_REPO`].
pub const DINOV2_WEIGHTS: &str = "dinov2_vits14.safetensors";

/// Hub repository holding the relative-depth head weights.
pub const RELATIVE_REPO: &str = "jeroenvlek/depth-anything-v2-safetensors";
/// Head weights file for the relative pass.
pub const RELATIVE_WEIGHTS: &str = "depth_anything_v2_vits.safetensors";

/// Hub repository holding the metric-depth head weights.
pub const METRIC_REPO: &str = "depth-anything/Depth-Anything-V2-Metric-Indoor-Small";
/// Head weights file for the metric pass.
pub const METRIC_WEIGHTS: &str = "depth_anything_v2_metric_indoor_vits.safetensors";

/// Options for building a [`DepthAnything`] estimator.
#[derive(Debug, Clone)]
pub struct DepthAnythingOptions {
    /// Local DINOv2 backbone safetensors; fetched from the hub when `None`.
    pub dinov2_weights: Option<PathBuf>,
    /// Local depth head safetensors; fetched from the hub when `None`.
    pub head_weights: Option<PathBuf>,
    /// Side length of the square model input, rounded down to a multiple of
    /// the ViT patch size.
    pub process_res: usize,
}

impl Default for DepthAnythingOptions {
    fn default() -> Self {
        Self {
            dinov2_weights: None,
            head_weights: None,
            process_res: 504,
        }
    }
}

/// Monocular depth estimator backed by Depth Anything V2 on candle.
///
/// The same architecture serves both passes; [`DepthPass`] selects which
/// head checkpoint is loaded.
pub struct DepthAnything {
    #[allow(unused)]
    dinov2: Arc<dinov2::DinoVisionTransformer>,
    depth_head: DepthAnythingV2,
    device: Device,
    process_res: usize,
}

impl DepthAnything {
    /// Build an estimator for one depth pass on the given device.
    ///
    /// Weights are memory-mapped from local safetensors when provided in
    /// `options`, otherwise fetched from the hub checkpoints for `pass`.
    pub fn new(
        pass: DepthPass,
        device: &Device,
        options: &DepthAnythingOptions,
    ) -> Result<Self, DepthError> {
        let dinov2_file = match &options.dinov2_weights {
            Some(path) => path.clone(),
            None => fetch_weights(DINOV2_REPO, DINOV2_WEIGHTS)?,
        };
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[dinov2_file], DType::F32, device)? };
        let dinov2 = Arc::new(dinov2::vit_small(vb)?);

        let head_file = match &options.head_weights {
            Some(path) => path.clone(),
            None => {
                let (repo, file) = match pass {
                    DepthPass::Relative => (RELATIVE_REPO, RELATIVE_WEIGHTS),
                    DepthPass::Metric => (METRIC_REPO, METRIC_WEIGHTS),
                };
                fetch_weights(repo, file)?
            }
        };
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[head_file], DType::F32, device)? };
        let depth_head = DepthAnythingV2::new(dinov2.clone(), DepthAnythingV2Config::vit_small(), vb)?;

        let process_res = (options.process_res / PATCH_SIZE).max(1) * PATCH_SIZE;

        Ok(Self {
            dinov2,
            depth_head,
            device: device.clone(),
            process_res,
        })
    }

    /// Decode and normalize one image into a `(1, 3, res, res)` tensor.
    fn preprocess(&self, path: &Path) -> Result<Tensor, DepthError> {
        // converted scenes may carry JPEG bytes under a .png name, so the
        // format is sniffed from the content rather than the extension
        let image = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .resize_exact(
                self.process_res as u32,
                self.process_res as u32,
                FilterType::Triangle,
            )
            .to_rgb8();

        let mut data = Vec::with_capacity(self.process_res * self.process_res * 3);
        for pixel in image.pixels() {
            for channel in 0..3 {
                let value = pixel.0[channel] as f32 / 255.0;
                data.push((value - IMAGENET_MEAN[channel]) / IMAGENET_STD[channel]);
            }
        }

        let img_t = Tensor::from_vec(
            data,
            (self.process_res, self.process_res, 3),
            &self.device,
        )?;
        Ok(img_t.permute((2, 0, 1))?.unsqueeze(0)?)
    }

    /// Run the model on one image and return its 2-D depth map.
    fn estimate(&self, path: &Path) -> Result<Array2<f32>, DepthError> {
        let img_t = self.preprocess(path)?;
        let depth_t = self.depth_head.forward(&img_t)?;

        let (_batch, _channels, rows, cols) = depth_t.dims4()?;
        let data = depth_t.flatten_all()?.to_vec1::<f32>()?;
        Ok(Array2::from_shape_vec((rows, cols), data)?)
    }
}

impl DepthEstimator for DepthAnything {
    fn estimate_batch(&mut self, images: &[PathBuf]) -> Result<Vec<Array2<f32>>, DepthError> {
        images.iter().map(|path| self.estimate(path)).collect()
    }
}

/// Parse a CLI device identifier: `cpu`, `cuda` or `cuda:N`.
pub fn parse_device(name: &str) -> Result<Device, DepthError> {
    match name {
        "cpu" => Ok(Device::Cpu),
        "cuda" => Ok(Device::new_cuda(0)?),
        other => match other.strip_prefix("cuda:") {
            Some(ordinal) => {
                let ordinal = ordinal
                    .parse::<usize>()
                    .map_err(|_| DepthError::InvalidDevice(other.to_string()))?;
                Ok(Device::new_cuda(ordinal)?)
            }
            None => Err(DepthError::InvalidDevice(name.to_string())),
        },
    }
}

fn fetch_weights(repo: &str, file: &str) -> Result<PathBuf, DepthError> {
    let api = hf_hub::api::sync::Api::new()?;
    Ok(api.model(repo.to_string()).get(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_device_cpu() -> Result<(), DepthError> {
        assert!(parse_device("cpu")?.is_cpu());
        Ok(())
    }

    #[test]
    fn parse_device_rejects_unknown_names() {
        for name in ["gpu", "cuda:x", ""] {
            match parse_device(name) {
                Err(DepthError::InvalidDevice(_)) => {}
                other => panic!("expected InvalidDevice for '{}', got {:?}", name, other.map(|_| ())),
            }
        }
    }
}
