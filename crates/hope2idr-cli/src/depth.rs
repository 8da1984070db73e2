use std::path::PathBuf;

use argh::FromArgs;

use hope2idr_depth::{
    list_scene_images, parse_device, run_depth_pass, DepthAnything, DepthAnythingOptions,
    DepthPass,
};

/// Run relative and metric depth inference over a converted scene.
#[derive(FromArgs)]
struct Args {
    /// converted scene directory, e.g. data/hope_video/scene_0000
    #[argh(option)]
    scene: PathBuf,

    /// compute device: cpu, cuda or cuda:N
    #[argh(option, default = "String::from(\"cuda\")")]
    device: String,

    /// side length of the square model input
    #[argh(option, default = "504")]
    process_res: usize,

    /// local DINOv2 backbone safetensors (fetched from the hub when absent)
    #[argh(option)]
    dinov2_weights: Option<PathBuf>,

    /// local relative-depth head safetensors (fetched from the hub when absent)
    #[argh(option)]
    rel_weights: Option<PathBuf>,

    /// local metric-depth head safetensors (fetched from the hub when absent)
    #[argh(option)]
    metric_weights: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let device = parse_device(&args.device)?;

    // an empty scene must fail before any model weights are fetched
    list_scene_images(&args.scene)?;

    for (pass, head_weights) in [
        (DepthPass::Relative, args.rel_weights.clone()),
        (DepthPass::Metric, args.metric_weights.clone()),
    ] {
        let options = DepthAnythingOptions {
            dinov2_weights: args.dinov2_weights.clone(),
            head_weights,
            process_res: args.process_res,
        };
        let mut estimator = DepthAnything::new(pass, &device, &options)?;
        run_depth_pass(&args.scene, &mut estimator, pass)?;
    }

    Ok(())
}
