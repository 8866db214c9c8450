use anyhow::Result;

use kinetype_core::style::pool_length;
use kinetype_core::timeline::PhaseTimeline;
use kinetype_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    let timeline = PhaseTimeline::from_config(&config.timeline)?;
    let lock = timeline.final_style_start(config.style.final_switch_fraction);

    println!("Hero phase timeline:\n");
    println!("  fly-in ends        {:.5}", timeline.fly_in_end);
    println!("  final style locks  {:.5}", lock);
    println!("  final hold starts  {:.5}", timeline.final_hold_start);
    println!("  burst starts       {:.5}", timeline.burst_start);
    println!("  fade starts        {:.5}", timeline.fade_start);
    println!("  fade ends          {:.5}", timeline.fade_end);
    println!();
    println!("  hold span          {:.5}", timeline.hold_span);
    println!(
        "  style variants     {}",
        pool_length(config.style.target_steps, config.style.rate_multiplier)
    );

    Ok(())
}
