mod cli_options;
mod directlighting;
mod image;
mod settings;
mod tracer;

use anyhow::{bail, Context, Result};
use log::info;

use image::Canvas;
use math::Angle;
use scene::{preset, Scene};
use settings::TraceSettings;
use tracer::Renderer;

fn build_scene(options: &cli_options::CliOptions) -> Result<Scene> {
    let scene_name = options.scene_name.as_deref().unwrap_or("cornell_box");
    let scene = match (scene_name, options.mesh_dir.as_ref()) {
        ("cornell_box", None) => preset::cornell_box(),
        ("cornell_box", Some(dir)) => preset::cornell_box_from_dir(dir)
            .with_context(|| format!("loading Cornell box meshes from {}", dir.display()))?,
        ("empty", _) => preset::empty(),
        (other, _) => bail!("Unknown scene name: {}", other),
    };
    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();
    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\nusage: {}", message, cli_options::CliOptions::message());
            std::process::exit(1);
        }
    };
    if options.show_help {
        println!("usage: {}", cli_options::CliOptions::message());
        return Ok(());
    }

    let scene = build_scene(&options)?;
    info!("{}", scene.summary());
    if scene.lights.is_empty() {
        log::warn!("Scene has no lights; only the background will show");
    }

    let settings = TraceSettings::default()
        .with_fov(Angle::new_deg(options.fov_degrees))
        .with_gamma(options.gamma);
    info!("Settings: {}", settings.summary());
    if options.width != options.height {
        log::warn!(
            "Film is {}x{}; pixels are not corrected for aspect ratio",
            options.width,
            options.height
        );
    }

    let mut canvas = Canvas::new(options.width, options.height);
    let start_time = std::time::Instant::now();
    Renderer::new(&scene, &settings, (options.width, options.height)).render(&mut canvas);
    info!("Render time: {:.3} seconds", start_time.elapsed().as_secs_f32());

    canvas
        .write(&options.output)
        .with_context(|| format!("writing {}", options.output.display()))?;
    info!("Image written to {}", options.output.display());
    Ok(())
}
