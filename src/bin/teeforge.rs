use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use teeforge::SkinSource as _;

#[derive(Parser, Debug)]
#[command(name = "teeforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one skin file to an avatar PNG.
    Render(RenderArgs),
    /// Render several skins from a directory.
    Batch(BatchArgs),
    /// Print the part catalog as JSON.
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input skin sheet (PNG).
    #[arg(long)]
    skin: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Eye expression; a custom catalog keeps its own eyes unless this is set.
    #[arg(long, value_enum)]
    eyes: Option<EyeChoice>,

    /// Catalog JSON to use instead of the builtin layout.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Background color as RRGGBB or RRGGBBAA hex.
    #[arg(long, value_parser = parse_hex_rgba)]
    background: Option<[u8; 4]>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory holding `<name>.png` skins.
    #[arg(long)]
    skins_dir: PathBuf,

    /// Skin names, comma separated.
    #[arg(long, value_delimiter = ',', required = true)]
    names: Vec<String>,

    /// Directory receiving `<name>.png` avatars.
    #[arg(long)]
    out_dir: PathBuf,

    /// Worker threads (defaults to one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Eye expression.
    #[arg(long, value_enum)]
    eyes: Option<EyeChoice>,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Eye expression.
    #[arg(long, value_enum)]
    eyes: Option<EyeChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EyeChoice {
    Normal,
    Angry,
    Blink,
    Happy,
    Cross,
    Surprised,
}

impl From<EyeChoice> for teeforge::EyeStyle {
    fn from(choice: EyeChoice) -> Self {
        match choice {
            EyeChoice::Normal => teeforge::EyeStyle::Normal,
            EyeChoice::Angry => teeforge::EyeStyle::Angry,
            EyeChoice::Blink => teeforge::EyeStyle::Blink,
            EyeChoice::Happy => teeforge::EyeStyle::Happy,
            EyeChoice::Cross => teeforge::EyeStyle::Cross,
            EyeChoice::Surprised => teeforge::EyeStyle::Surprised,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Catalog(args) => cmd_catalog(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_hex_rgba(s: &str) -> Result<[u8; 4], String> {
    let hex = s.trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{s}' is not RRGGBB or RRGGBBAA hex"));
    }
    let mut out = [0u8, 0, 0, 255];
    for (i, slot) in out.iter_mut().enumerate().take(hex.len() / 2) {
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|e| e.to_string())?;
    }
    Ok(out)
}

fn read_catalog_json(path: &Path) -> anyhow::Result<teeforge::Catalog> {
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    let r = BufReader::new(f);
    let catalog: teeforge::Catalog =
        serde_json::from_reader(r).with_context(|| "parse catalog JSON")?;
    catalog.validate()?;
    Ok(catalog)
}

fn load_catalog(
    path: Option<&Path>,
    eyes: Option<EyeChoice>,
) -> anyhow::Result<teeforge::Catalog> {
    let base = match path {
        Some(p) => read_catalog_json(p)?,
        None => teeforge::Catalog::builtin().clone(),
    };
    Ok(match eyes {
        Some(choice) => base.with_eyes(choice.into()),
        None => base,
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), args.eyes)?;

    let bytes = std::fs::read(&args.skin)
        .with_context(|| format!("read skin '{}'", args.skin.display()))?;
    let skin = teeforge::decode_skin(&bytes)?;

    let settings = teeforge::RenderSettings {
        clear_rgba: args.background,
    };
    let avatar = teeforge::render_with(&skin, &catalog, &settings)
        .with_context(|| format!("render skin '{}'", args.skin.display()))?;

    teeforge::write_png(&avatar, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(None, args.eyes)?;
    let source = teeforge::DirSkinSource::new(&args.skins_dir);

    let mut names = Vec::with_capacity(args.names.len());
    let mut skins = Vec::with_capacity(args.names.len());
    let mut failed = 0usize;
    for name in &args.names {
        match source.fetch(name) {
            Ok(skin) => {
                names.push(name.as_str());
                skins.push(skin);
            }
            Err(e) => {
                tracing::error!(skin = %name, error = %e, "skipping skin");
                failed += 1;
            }
        }
    }

    let threading = teeforge::RenderThreading {
        parallel: true,
        threads: args.threads,
    };
    let results = teeforge::render_batch(
        &skins,
        &catalog,
        &teeforge::RenderSettings::default(),
        &threading,
    )?;

    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(avatar) => {
                let out = args.out_dir.join(format!("{name}.png"));
                teeforge::write_png(&avatar, &out)?;
                eprintln!("wrote {}", out.display());
            }
            Err(e) => {
                tracing::error!(skin = %name, error = %e, "render failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} skins failed", args.names.len());
    }
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(None, args.eyes)?;
    let json = serde_json::to_string_pretty(&catalog).context("serialize catalog")?;
    println!("{json}");
    Ok(())
}
