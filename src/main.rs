use sdfmarch::{ FrameDriver, RenderConfig, Scene, WindowSurface };

use anyhow::{ Context, Result };

fn main() -> Result<()> {
    env_logger::init();

    #[cfg(feature = "profile")]
    thread_profiler::register_thread_with_profiler();

    let config = RenderConfig::default();
    config.validate().context("invalid render configuration")?;

    let scene = Scene::reference(config.march.camera);

    // the window plays the part of the display panel; opening it is the
    // one-off hardware setup step
    let mut surface = WindowSurface::open("sdfmarch", config.sampling.width, config.sampling.height)
        .context("failed to initialise display")?;

    let stats = FrameDriver::new(config)
        .run(&scene, &mut surface)
        .context("render loop failed")?;
    log::info!("done after {} ticks", stats.ticks);

    #[cfg(feature = "profile")]
    thread_profiler::write_profile("profile.json");

    Ok(())
}
