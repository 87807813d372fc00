use clap::{Args, Parser, Subcommand};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherlab::assets::AssetLoader;
use ditherlab::models::AppConfig;
use ditherlab::rendering::{OutputTarget, PngPresenter};
use ditherlab::services::{load_image, run_browser, PaletteSource};
use rgb_dither::{Algorithm, DitherSession};

/// File that `browse` keeps overwriting with the current frame
const PREVIEW_FILE: &str = "preview.png";

#[derive(Parser)]
#[command(name = "ditherlab")]
#[command(about = "Render images through classic dithering algorithms")]
struct Cli {
    /// Configuration file (default: $DITHERLAB_CONFIG, then ./ditherlab.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one algorithm to a PNG file
    Render {
        /// Input PNG image
        image: PathBuf,

        /// Algorithm name, e.g. "palette floyd-steinberg" (default from config)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Output PNG file (default: <output_dir>/<NN>-<algorithm>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Render every algorithm in selection order
    All {
        /// Input PNG image
        image: PathBuf,

        /// Output directory (default from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Step through algorithms with commands read from stdin
    Browse {
        /// Input PNG image
        image: PathBuf,

        /// Directory for preview.png (default from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// List algorithm names in selection order
    Algorithms {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available palettes
    Palettes,
}

#[derive(Args)]
struct PaletteArgs {
    /// Hex palette file, one RRGGBB color per line
    #[arg(long, conflicts_with = "builtin_palette")]
    palette: Option<PathBuf>,

    /// Named palette (see `ditherlab palettes`)
    #[arg(long)]
    builtin_palette: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherlab=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    let assets = AssetLoader::from_env();

    match cli.command {
        Commands::Algorithms { json } => run_algorithms_command(json),
        Commands::Palettes => {
            for name in assets.list_palettes() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Render {
            image,
            algorithm,
            output,
            palette,
        } => {
            let config = AppConfig::discover(cli.config.as_deref());
            run_render_command(&config, &assets, &image, algorithm, output, palette)
        }
        Commands::All {
            image,
            out_dir,
            palette,
        } => {
            let config = AppConfig::discover(cli.config.as_deref());
            run_all_command(&config, &assets, &image, out_dir, palette)
        }
        Commands::Browse {
            image,
            out_dir,
            palette,
        } => {
            let config = AppConfig::discover(cli.config.as_deref());
            run_browse_command(&config, &assets, &image, out_dir, palette)
        }
    }
}

fn open_session(
    config: &AppConfig,
    assets: &AssetLoader,
    image: &Path,
    palette: PaletteArgs,
) -> anyhow::Result<DitherSession> {
    let source = load_image(image)?;
    let palette = PaletteSource::resolve(palette.palette, palette.builtin_palette, config)
        .load(assets)?;
    Ok(DitherSession::new(source, palette))
}

fn run_render_command(
    config: &AppConfig,
    assets: &AssetLoader,
    image: &Path,
    algorithm: Option<String>,
    output: Option<PathBuf>,
    palette: PaletteArgs,
) -> anyhow::Result<()> {
    let algorithm = match algorithm {
        Some(name) => name.parse::<Algorithm>()?,
        None => config.start_algorithm()?,
    };
    let target = match output {
        Some(path) => OutputTarget::File(path),
        None => OutputTarget::Directory(config.output_dir.clone()),
    };

    let mut session = open_session(config, assets, image, palette)?.with_algorithm(algorithm);
    let mut presenter = PngPresenter::new(target).optimize(config.optimize_png);
    session.show(&mut presenter)?;

    for path in presenter.written() {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_all_command(
    config: &AppConfig,
    assets: &AssetLoader,
    image: &Path,
    out_dir: Option<PathBuf>,
    palette: PaletteArgs,
) -> anyhow::Result<()> {
    let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
    let mut session = open_session(config, assets, image, palette)?;
    let mut presenter =
        PngPresenter::new(OutputTarget::Directory(out_dir)).optimize(config.optimize_png);

    for _ in Algorithm::ALL {
        session.show(&mut presenter)?;
        session.next();
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for path in presenter.written() {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

fn run_browse_command(
    config: &AppConfig,
    assets: &AssetLoader,
    image: &Path,
    out_dir: Option<PathBuf>,
    palette: PaletteArgs,
) -> anyhow::Result<()> {
    let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
    let start = config.start_algorithm()?;
    let mut session = open_session(config, assets, image, palette)?.with_algorithm(start);
    let mut presenter = PngPresenter::new(OutputTarget::File(out_dir.join(PREVIEW_FILE)))
        .optimize(config.optimize_png);

    let presented = run_browser(
        &mut session,
        &mut presenter,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    tracing::info!(frames = presented, "Browse finished");
    Ok(())
}

fn run_algorithms_command(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<_> = Algorithm::ALL
            .iter()
            .map(|a| {
                serde_json::json!({
                    "index": a.index(),
                    "name": a.name(),
                    "monochrome": a.is_monochrome(),
                    "palette": a.uses_palette(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for algorithm in Algorithm::ALL {
            println!("{:2}  {}", algorithm.index(), algorithm);
        }
    }
    Ok(())
}
