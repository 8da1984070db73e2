use std::path::PathBuf;

use argh::FromArgs;

use hope2idr_scene::{convert_scenes, ConvertConfig};

/// Convert HOPE-Video scenes to an IDR-style multiview dataset.
#[derive(FromArgs)]
struct Args {
    /// root directory of HOPE-Video scenes (containing scene_0000, ...)
    #[argh(option)]
    hope_root: PathBuf,

    /// output root for the converted scenes
    #[argh(option)]
    out_root: PathBuf,

    /// scene id to convert; repeatable, defaults to scene_0000 and scene_0001
    #[argh(option)]
    scene: Vec<String>,

    /// maximum number of frames to sample per scene
    #[argh(option, default = "100")]
    num_frames: usize,

    /// random seed for frame sampling
    #[argh(option, default = "0")]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let scenes = if args.scene.is_empty() {
        vec!["scene_0000".to_string(), "scene_0001".to_string()]
    } else {
        args.scene
    };

    let config = ConvertConfig {
        num_frames: args.num_frames,
        seed: args.seed,
    };
    convert_scenes(&args.hope_root, &args.out_root, &scenes, &config)?;

    Ok(())
}
