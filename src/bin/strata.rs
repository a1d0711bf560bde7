use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "strata", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one or more generations to PNG.
    Render(RenderArgs),
    /// List the built-in palettes.
    Palettes,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path. With `--count` > 1, files are named `<stem>-<i>.png`.
    #[arg(long)]
    out: PathBuf,

    /// Number of generations to render.
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Draw the debug panel onto the output.
    #[arg(long)]
    debug: bool,

    /// Write the debug records of every generation to this JSON file.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Sketch config JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(serde::Serialize)]
struct RenderRecord<'a> {
    file: String,
    seed: u64,
    generation: u32,
    debug: &'a strata::DebugInfo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Palettes => cmd_palettes(),
    }
}

fn load_config(args: &RenderArgs) -> anyhow::Result<strata::SketchConfig> {
    let mut config = match &args.config {
        Some(path) => strata::SketchConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => strata::SketchConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.debug |= args.debug;
    config.validate()?;
    Ok(config)
}

fn output_path(out: &Path, index: u32, count: u32) -> PathBuf {
    if count <= 1 {
        return out.to_path_buf();
    }
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "strata".to_owned());
    out.with_file_name(format!("{stem}-{index}.png"))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.count == 0 {
        anyhow::bail!("--count must be at least 1");
    }
    let config = load_config(&args)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut sketch = strata::Sketch::new(config).context("create sketch")?;
    let mut debug_records = Vec::with_capacity(args.count as usize);
    let mut files = Vec::with_capacity(args.count as usize);

    for i in 0..args.count {
        if i > 0 {
            sketch
                .regenerate()
                .with_context(|| format!("render generation {i}"))?;
        }
        let path = output_path(&args.out, i, args.count);
        sketch
            .display()
            .save_png(&path)
            .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());

        if let Some(debug) = sketch.debug_info() {
            debug_records.push(debug.clone());
        }
        files.push(path);
    }

    if let Some(params_path) = &args.params {
        let records: Vec<RenderRecord<'_>> = files
            .iter()
            .zip(&debug_records)
            .zip(0u32..)
            .map(|((file, debug), generation)| RenderRecord {
                file: file.display().to_string(),
                seed: sketch.seed(),
                generation,
                debug,
            })
            .collect();
        let json = serde_json::to_string_pretty(&records).context("serialize debug records")?;
        std::fs::write(params_path, json)
            .with_context(|| format!("write params '{}'", params_path.display()))?;
        eprintln!("wrote {}", params_path.display());
    }
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    for (i, palette) in strata::BUILTIN_PALETTES.iter().enumerate() {
        let hex: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
        println!("Palette #{i}: {}", hex.join(" "));
    }
    Ok(())
}
