use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use animlib::{
    AnimationPreviewState, Catalog, CatalogFilter, ClassHeader, CssTarget, DemoKind, Direction,
    Easing, FileStylesheet, FillMode, IterationCount, KeyframesHeader, ResolvedPreview,
};

#[derive(Parser, Debug)]
#[command(name = "animlib", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single rule block from a stylesheet.
    Extract(ExtractArgs),
    /// Build copy/download-ready CSS for a catalog entry.
    Css(CssArgs),
    /// Print an absolute share link for a preview.
    Share(ShareArgs),
    /// Resolve a share query against the catalog.
    Restore(RestoreArgs),
    /// List catalog entries.
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Stylesheet to scan.
    #[arg(long)]
    stylesheet: PathBuf,

    /// Keyframes name to extract.
    #[arg(long, conflicts_with = "class", required_unless_present = "class")]
    keyframes: Option<String>,

    /// Match `@-webkit-keyframes` instead of `@keyframes`.
    #[arg(long, requires = "keyframes")]
    webkit: bool,

    /// Class name to extract (without the leading dot).
    #[arg(long)]
    class: Option<String>,
}

#[derive(Parser, Debug)]
struct CssArgs {
    /// Animation catalog JSON.
    #[arg(long)]
    catalog: PathBuf,

    /// Stylesheet holding the animation rules.
    #[arg(long)]
    stylesheet: PathBuf,

    /// Animation id.
    #[arg(long)]
    id: String,

    /// Write the CSS to this file instead of stdout.
    #[arg(long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// Write the CSS to `<out-dir>/<id>.css`.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ShareArgs {
    /// Location the link is built from (URL of the current page, or an absolute file path).
    #[arg(long)]
    location: String,

    /// Page the link points at, relative to the location's directory.
    #[arg(long, default_value = "playground.html")]
    page: String,

    /// Animation catalog JSON; when given, unset parameters are filled from the entry defaults.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Animation id.
    #[arg(long)]
    id: String,

    /// Duration in milliseconds.
    #[arg(long)]
    dur: Option<f64>,

    /// Delay in milliseconds.
    #[arg(long)]
    delay: Option<f64>,

    /// Timing function (keyword or any CSS timing function).
    #[arg(long)]
    ease: Option<String>,

    /// Iteration count or `infinite`.
    #[arg(long)]
    iter: Option<IterationCount>,

    #[arg(long)]
    dir: Option<Direction>,

    #[arg(long)]
    fill: Option<FillMode>,

    #[arg(long)]
    demo: Option<DemoKind>,
}

#[derive(Parser, Debug)]
struct RestoreArgs {
    /// Animation catalog JSON.
    #[arg(long)]
    catalog: PathBuf,

    /// Output form.
    #[arg(long, value_enum, default_value_t = RestoreFormat::Json)]
    format: RestoreFormat,

    /// Query string (with or without the leading `?`) or a full share URL.
    query: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RestoreFormat {
    /// Resolved preview as JSON.
    Json,
    /// Custom properties, one per line.
    Vars,
    /// `animation` shorthand value.
    Shorthand,
    /// Settings export JSON.
    Settings,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Animation catalog JSON.
    #[arg(long)]
    catalog: PathBuf,

    /// Case-insensitive search over name, tags and category.
    #[arg(long)]
    query: Option<String>,

    /// Only this category (`all` for every category).
    #[arg(long)]
    category: Option<String>,

    /// Print the distinct categories instead of entries.
    #[arg(long, conflicts_with_all = ["query", "category"])]
    categories: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Extract(args) => cmd_extract(args),
        Command::Css(args) => cmd_css(args),
        Command::Share(args) => cmd_share(args),
        Command::Restore(args) => cmd_restore(args),
        Command::List(args) => cmd_list(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let catalog = Catalog::load(path)?;
    catalog
        .validate()
        .with_context(|| format!("validate catalog '{}'", path.display()))?;
    Ok(catalog)
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.stylesheet)
        .with_context(|| format!("read stylesheet '{}'", args.stylesheet.display()))?;

    let block = match (&args.keyframes, &args.class) {
        (Some(name), _) if args.webkit => {
            animlib::extract_block(&text, &KeyframesHeader::webkit(name))
        }
        (Some(name), _) => animlib::extract_block(&text, &KeyframesHeader::standard(name)),
        (None, Some(name)) => animlib::extract_block(&text, &ClassHeader::new(name)),
        (None, None) => anyhow::bail!("one of --keyframes or --class is required"),
    };

    let Some(block) = block else {
        anyhow::bail!(
            "no matching block in '{}' (missing header or unbalanced braces)",
            args.stylesheet.display()
        );
    };
    println!("{}", block.text());
    Ok(())
}

fn cmd_css(args: CssArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    let record = catalog
        .get(&args.id)
        .with_context(|| format!("animation '{}' not in catalog", args.id))?;

    let target = CssTarget::from(record);
    let css = animlib::export_animation_css(&target, &FileStylesheet(args.stylesheet));

    let out = match (args.out, args.out_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => dir.join(animlib::export_file_name(&record.id)),
        (None, None) => {
            println!("{css}");
            return Ok(());
        }
    };

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, format!("{css}\n"))
        .with_context(|| format!("write css '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_share(args: ShareArgs) -> anyhow::Result<()> {
    let mut state = AnimationPreviewState {
        duration_ms: args.dur,
        delay_ms: args.delay,
        easing: args.ease.as_deref().map(Easing::from),
        iteration_count: args.iter,
        direction: args.dir,
        fill_mode: args.fill,
        demo_kind: args.demo,
        ..AnimationPreviewState::for_animation(args.id.as_str())
    };

    if let Some(path) = &args.catalog {
        let catalog = read_catalog(path)?;
        let record = catalog
            .get(&args.id)
            .with_context(|| format!("animation '{}' not in catalog", args.id))?;
        state = ResolvedPreview::resolve(record, &state).to_share_state();
    }

    let url = animlib::build_share_url(&args.page, &args.location, &state)?;
    println!("{url}");
    Ok(())
}

fn cmd_restore(args: RestoreArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;

    // Accept a full link as well as a bare query.
    let query = match args.query.split_once('?') {
        Some((_, q)) => q.split('#').next().unwrap_or(q),
        None => args.query.as_str(),
    };

    let preview = animlib::restore(&catalog, query)
        .context("query does not name an animation in the catalog")?;

    match args.format {
        RestoreFormat::Json => println!("{}", serde_json::to_string_pretty(&preview)?),
        RestoreFormat::Vars => {
            for (name, value) in preview.css_vars() {
                println!("{name}: {value};");
            }
        }
        RestoreFormat::Shorthand => println!("{}", preview.animation_shorthand()),
        RestoreFormat::Settings => println!("{}", preview.settings_json()?),
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;

    if args.categories {
        for cat in catalog.categories() {
            println!("{cat}");
        }
        return Ok(());
    }

    let filter = CatalogFilter {
        query: args.query,
        category: args.category,
    };
    for record in catalog.filter(&filter) {
        println!("{}\t{}\t{}", record.id, record.name, record.category);
    }
    Ok(())
}
