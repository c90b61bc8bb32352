use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coverwall", version)]
struct Cli {
    /// JSON configuration file; built-in defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Sort cover files by name instead of using directory order.
    #[arg(long, global = true)]
    sorted: bool,

    /// Log debug diagnostics to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Scene to render. Without one, renders `artist-albums` as a 5x5 grid and then
    /// `example-albums` as the top albums collage.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render 25 covers as an unlabelled 5x5 grid.
    Grid(GridArgs),
    /// Render 42 covers as three labelled tiers.
    TopAlbums(DirArgs),
    /// Render 81 covers as a padded 9x9 grid with one label column.
    FirstListens(GridArgs),
}

#[derive(Parser, Debug)]
struct DirArgs {
    /// Directory holding the cover images.
    #[arg(long = "in")]
    in_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Directory holding the cover images.
    #[arg(long = "in")]
    in_dir: PathBuf,

    /// Cell side length in pixels.
    #[arg(long, default_value_t = 500)]
    cell: u32,

    /// Spacing between cells in pixels.
    #[arg(long, default_value_t = 10)]
    border: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => coverwall::CollageConfig::from_json_path(path)?,
        None => coverwall::CollageConfig::default(),
    };
    let opts = coverwall::RunOptions { sorted: cli.sorted };

    let jobs = match cli.cmd {
        Some(Command::Grid(args)) => vec![(
            coverwall::Scene::five_by_five(args.cell, args.border),
            args.in_dir,
        )],
        Some(Command::TopAlbums(args)) => vec![(coverwall::Scene::top_albums(), args.in_dir)],
        Some(Command::FirstListens(args)) => vec![(
            coverwall::Scene::first_listens(args.cell, args.border),
            args.in_dir,
        )],
        None => vec![
            (
                coverwall::Scene::five_by_five(500, 10),
                PathBuf::from("artist-albums"),
            ),
            (coverwall::Scene::top_albums(), PathBuf::from("example-albums")),
        ],
    };

    let mut text = None;
    for (scene, dir) in &jobs {
        run_one(scene, dir, &config, opts, &mut text)?;
    }
    Ok(())
}

fn run_one(
    scene: &coverwall::Scene,
    dir: &Path,
    config: &coverwall::CollageConfig,
    opts: coverwall::RunOptions,
    text: &mut Option<coverwall::TextColumnRenderer>,
) -> anyhow::Result<()> {
    if scene.needs_text() && text.is_none() {
        *text = Some(config.text_renderer()?);
    }
    let rasterizer = if scene.needs_text() {
        text.as_mut()
            .map(|t| t as &mut dyn coverwall::TextRasterizer)
    } else {
        None
    };

    let out = coverwall::run_scene(scene, dir, config, opts, rasterizer)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
