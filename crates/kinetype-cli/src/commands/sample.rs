use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use kinetype_core::{AppConfig, FixedAdvanceMeasure, FrameInputs, Scene, Viewport};

pub struct SampleArgs {
    pub progress: f64,
    pub paragraph: f64,
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
}

pub fn run(config: &AppConfig, args: SampleArgs) -> Result<()> {
    let scene = match args.seed {
        Some(seed) => Scene::from_config_with_rng(config, &mut StdRng::seed_from_u64(seed))?,
        None => Scene::from_config(config)?,
    };

    let viewport = Viewport::new(args.width.max(1.0), args.height.max(1.0));
    let inputs = FrameInputs::at_progress(
        viewport,
        config.ui.hero_screens,
        config.ui.movement_screens,
        args.progress,
        args.paragraph,
    );
    let measure = FixedAdvanceMeasure::new(config.hero.font_size);
    let frame = scene.render(&inputs, &measure);
    tracing::debug!(phase = ?frame.hero.phase, "sampled frame");

    println!("{}", frame.to_json_pretty()?);
    Ok(())
}
