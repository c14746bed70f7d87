//! pdfreflow CLI - layout reconstruction for scanned CJK books

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfreflow::postprocess::{QuoteExtractor, VolumeSplitter, DEFAULT_EXCLUDES};
use pdfreflow::{
    direction_signal, pipeline, GlyphSource, JsonFormat, JsonGlyphSource, MergePolicy, Reflow,
};

#[derive(Parser)]
#[command(name = "pdfreflow")]
#[command(version)]
#[command(about = "Reconstruct scanned CJK book layout into HTML, Markdown, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Shared options for the reconstruction commands.
#[derive(Args)]
struct ExtractArgs {
    /// Input glyph dump (JSON array of pages)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Skip the first N pages (front matter)
    #[arg(long, value_name = "N", default_value = "0")]
    skip_pages: u32,

    /// Consider at most N pages of the source
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Traditional-to-Simplified mapping table (JSON object file)
    #[arg(long, value_name = "FILE")]
    t2s_table: Option<PathBuf>,

    /// Document title (defaults to the input file stem)
    #[arg(long)]
    title: Option<String>,

    /// Process pages sequentially
    #[arg(long)]
    sequential: bool,

    /// Drop placeholder blocks for empty pages
    #[arg(long)]
    skip_empty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct to all formats (HTML, Markdown, JSON)
    Convert {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Reconstruct to styled HTML
    Html {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Reconstruct to two-tier Markdown (scripture bold, commentary plain)
    #[command(alias = "md")]
    Markdown {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Reconstruct to JSON
    Json {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show glyph dump information (per-page counts and detected direction)
    Info {
        /// Input glyph dump
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Extract bracketed quote blocks from converted Markdown
    Quotes {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Section markers to exclude (replaces the defaults)
        #[arg(long, value_name = "MARKER")]
        exclude: Vec<String>,
    },

    /// Split converted Markdown into per-volume files
    Split {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Volume heading pattern with one capture group for the label,
        /// e.g. "## .*第(.+?)卷"
        #[arg(long, value_name = "REGEX")]
        pattern: String,

        /// Output file name prefix
        #[arg(long, default_value = "volume_")]
        prefix: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { extract, output } => cmd_convert(&extract, output.as_deref()),
        Commands::Html { extract, output } => cmd_html(&extract, output.as_deref()),
        Commands::Markdown { extract, output } => cmd_markdown(&extract, output.as_deref()),
        Commands::Json {
            extract,
            output,
            compact,
        } => cmd_json(&extract, output.as_deref(), compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Quotes {
            input,
            output,
            exclude,
        } => cmd_quotes(&input, output.as_deref(), &exclude),
        Commands::Split {
            input,
            output,
            pattern,
            prefix,
        } => cmd_split(&input, &output, &pattern, &prefix),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Build a configured reflow builder for the given merge policy.
fn build_reflow(args: &ExtractArgs, policy: MergePolicy) -> CliResult<Reflow> {
    let mut reflow = Reflow::new()
        .skip_pages(args.skip_pages)
        .with_policy(policy)
        .with_title(default_title(args));

    if let Some(n) = args.max_pages {
        reflow = reflow.max_pages(n);
    }
    if args.sequential {
        reflow = reflow.sequential();
    }
    if args.skip_empty {
        reflow = reflow.skip_empty_pages();
    }
    if let Some(table) = &args.t2s_table {
        reflow = reflow.with_mapping_table(table)?;
    }
    Ok(reflow)
}

fn default_title(args: &ExtractArgs) -> String {
    args.title.clone().unwrap_or_else(|| {
        args.input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    })
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(args: &ExtractArgs, output: Option<&Path>) -> CliResult {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });
    log::info!(
        "converting {} into {}",
        args.input.display(),
        output_dir.display()
    );

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // HTML wants style runs, Markdown wants size runs: two passes.
    pb.set_message("Generating HTML...");
    let styled = build_reflow(args, MergePolicy::Styled)?.extract(&args.input)?;
    fs::write(output_dir.join("reflow.html"), styled.to_html()?)?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let sized = build_reflow(args, MergePolicy::Sized)?.extract(&args.input)?;
    fs::write(output_dir.join("reflow.md"), sized.to_markdown()?)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    fs::write(
        output_dir.join("content.json"),
        styled.to_json(JsonFormat::Pretty)?,
    )?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} reflow.html", "├─".dimmed());
    println!("  {} reflow.md", "├─".dimmed());
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(args: &ExtractArgs, output: Option<&Path>) -> CliResult {
    let result = build_reflow(args, MergePolicy::Styled)?.extract(&args.input)?;
    write_or_print(output, &result.to_html()?)
}

fn cmd_markdown(args: &ExtractArgs, output: Option<&Path>) -> CliResult {
    let result = build_reflow(args, MergePolicy::Sized)?.extract(&args.input)?;
    write_or_print(output, &result.to_markdown()?)
}

fn cmd_json(args: &ExtractArgs, output: Option<&Path>, compact: bool) -> CliResult {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let result = build_reflow(args, MergePolicy::Styled)?.extract(&args.input)?;
    write_or_print(output, &result.to_json(format)?)
}

fn cmd_info(input: &Path) -> CliResult {
    let source = JsonGlyphSource::open(input)?;

    println!("{}", "Glyph Dump Information".cyan().bold());
    println!("{}", "─".repeat(60).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), source.page_count());
    println!();
    println!(
        "{:>5}  {:>7}  {:>8}  {:>9}  {:>9}  {}",
        "page".bold(),
        "glyphs".bold(),
        "in-band".bold(),
        "unique-x".bold(),
        "unique-y".bold(),
        "direction".bold()
    );

    for number in 1..=source.page_count() {
        let glyphs = source.page_glyphs(number)?;
        let banded: Vec<_> = glyphs
            .iter()
            .filter(|g| pipeline::in_size_band(g.size))
            .cloned()
            .collect();
        let signal = direction_signal(&banded);
        let direction = pdfreflow::classify_direction(&banded);

        println!(
            "{:>5}  {:>7}  {:>8}  {:>9}  {:>9}  {:?}",
            number,
            glyphs.len(),
            banded.len(),
            signal.unique_x,
            signal.unique_y,
            direction
        );
    }

    Ok(())
}

fn cmd_quotes(input: &Path, output: Option<&Path>, exclude: &[String]) -> CliResult {
    let content = fs::read_to_string(input)?;

    let extractor = if exclude.is_empty() {
        QuoteExtractor::new(&DEFAULT_EXCLUDES)?
    } else {
        QuoteExtractor::new(exclude)?
    };

    let blocks = extractor.extract(&content);
    println!(
        "{} {} blocks extracted",
        "Done!".green().bold(),
        blocks.len()
    );

    write_or_print(output, &blocks.join("\n\n"))
}

fn cmd_split(input: &Path, output: &Path, pattern: &str, prefix: &str) -> CliResult {
    let content = fs::read_to_string(input)?;

    let splitter = VolumeSplitter::new(pattern)?;
    let volumes = splitter.split(&content);

    if volumes.is_empty() {
        println!("{}", "No volume headings matched".yellow());
        return Ok(());
    }

    fs::create_dir_all(output)?;
    for volume in &volumes {
        let path = output.join(format!("{}{}.md", prefix, volume.label));
        fs::write(&path, &volume.content)?;
        println!("{} {}", "Wrote".green(), path.display());
    }

    println!(
        "\n{} {} volumes written to {}",
        "Done!".green().bold(),
        volumes.len(),
        output.display()
    );

    Ok(())
}
