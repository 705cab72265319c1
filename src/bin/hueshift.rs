//! Command-line front end: prints a palette for a base color as CSS, JSON, or a labelled list.
//!
//! ```text
//! hueshift '#336699' --kind triadic --count 6 --format list
//! ```
//!
//! Set `RUST_LOG=hueshift=debug` to see what was generated on stderr.

use std::error::Error;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use serde_derive::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hueshift::css::{css_variables, gradient_background, parse_count, swatch_label};
use hueshift::hex::normalize_hex;
use hueshift::{generate_palette, PaletteType};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// A `:root` block of `--color-N` custom properties
    Css,
    /// `{"kind", "base", "colors"}`
    Json,
    /// One labelled swatch per line
    List,
}

#[derive(Debug, Parser)]
#[command(name = "hueshift", version, about = "Generate a color palette from a base color")]
struct Args {
    /// Base color as hex, like "#336699" or "abc". Anything unreadable means black.
    #[arg(default_value = "#000000")]
    base: String,

    /// complementary, analogous, triadic, monochrome, or gradient
    #[arg(short, long, default_value = "complementary")]
    kind: String,

    /// Number of swatches, clamped to 2-8. Defaults to 3 for triadic, 2 for gradient, 5 otherwise
    #[arg(short = 'n', long)]
    count: Option<String>,

    /// How to print the palette
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct PaletteOutput<'a> {
    kind: PaletteType,
    base: &'a str,
    colors: &'a [String],
}

/// Logs go to stderr so they never mix with the palette on stdout.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Formats a palette for printing. Every format ends with a newline.
fn render(
    kind: PaletteType,
    base: &str,
    colors: &[String],
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let rendered = match format {
        OutputFormat::Css => format!("{}\n", css_variables(colors, kind, base)),
        OutputFormat::Json => {
            let output = PaletteOutput { kind, base, colors };
            format!("{}\n", serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::List => {
            let mut lines: Vec<String> = colors
                .iter()
                .enumerate()
                .map(|(i, color)| format!("{:<9} {}", swatch_label(kind, i), color))
                .collect();
            if kind == PaletteType::Gradient {
                lines.extend(gradient_background(colors));
            }
            lines.iter().map(|line| format!("{}\n", line)).collect::<String>()
        }
    };
    Ok(rendered)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args = Args::parse();
    let kind = PaletteType::from_name(&args.kind);
    let base = normalize_hex(&args.base);
    let count = match args.count {
        Some(ref text) => parse_count(text),
        None => kind.default_count(),
    };
    let colors = generate_palette(kind, &base, count);
    debug!(?colors, "palette ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(render(kind, &base, &colors, args.format)?.as_bytes())?;
    Ok(())
}
