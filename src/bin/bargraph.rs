use anyhow::{Context, Result, bail};
use bargraph_rs::render::bitmap::save_png;
use bargraph_rs::render::svg::save_svg;
use bargraph_rs::render::RecordingRenderer;
use bargraph_rs::models::parse_list;
use bargraph_rs::{BarGraphGeneric, ChartInput, storage};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bargraph",
    version,
    about = "Render bar charts with error bars from JSON or CSV"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a chart and write it as SVG or PNG.
    Render(RenderArgs),
    /// Draw a chart and print what was drawn as JSON.
    Inspect(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Chart request (.json or .csv).
    #[arg(short, long)]
    input: PathBuf,
    /// Horizontal axis description (overrides the input file).
    #[arg(long)]
    x_label: Option<String>,
    /// Tick labels separated by comma or semicolon (overrides the input file).
    #[arg(long)]
    tick_labels: Option<String>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(200..=3000))]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(200..=3000))]
    height: u32,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Output file (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
}

fn load_input(args: &InputArgs) -> Result<ChartInput> {
    let mut input = storage::load(&args.input)?;
    if let Some(label) = &args.x_label {
        input.options.axis_label = Some(label.clone());
    }
    if let Some(ticks) = &args.tick_labels {
        input.options.tick_labels = Some(parse_list(ticks));
    }
    Ok(input)
}

fn draw(args: &InputArgs) -> Result<BarGraphGeneric<RecordingRenderer>> {
    let input = load_input(args)?;
    let mut widget = BarGraphGeneric::new(RecordingRenderer::default());
    widget.resize((args.width, args.height))?;
    widget
        .draw(&input.categories, &input.values, &input.options)
        .with_context(|| format!("drawing {}", args.input.display()))?;
    Ok(widget)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let widget = draw(&args.input)?;
    let figure = widget
        .figure()
        .context("nothing was drawn")?;
    let size = (args.input.width, args.input.height);

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "svg" => save_svg(figure, &args.out, size)?,
        "png" => save_png(figure, &args.out, size)?,
        other => bail!("unsupported output format: {:?} (expected .svg or .png)", other),
    }
    info!("wrote {} bars to {}", figure.bar_count(), args.out.display());
    eprintln!("Wrote chart to {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: InputArgs) -> Result<()> {
    let widget = draw(&args)?;
    let summary = widget.canvas().context("nothing was drawn")?;
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
