use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hexchroma::{convert, report, Conversion};

const INVALID_COLOR: &str = "Please enter a valid hex color (e.g., #FF5733)";

#[derive(Debug, Parser)]
#[command(name = "hexchroma", version)]
#[command(about = "Convert a hexadecimal sRGB color into nine other color models")]
struct Cli {
    /// Color as six hexadecimal digits with optional leading '#'; read from
    /// standard input when omitted
    color: Option<String>,

    /// Print the conversion as JSON instead of report cards
    #[arg(long)]
    json: bool,

    /// When to show a color swatch before the report cards
    #[arg(long, value_enum, default_value_t = SwatchPolicy::Auto)]
    swatch: SwatchPolicy,

    /// Log more details; repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SwatchPolicy {
    /// Show a swatch on terminals, honoring NO_COLOR and FORCE_COLOR
    Auto,
    Always,
    Never,
}

impl SwatchPolicy {
    fn resolve(self, has_tty: bool) -> bool {
        match self {
            Self::Auto => report::swatch_from_environment(has_tty),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Determine the default log filter for the given verbosity.
const fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "hexchroma=warn",
        1 => "hexchroma=info",
        2 => "hexchroma=debug",
        _ => "hexchroma=trace",
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_directive(verbose).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn read_line<R: BufRead>(reader: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("could not read color from standard input")?;
    Ok(line)
}

/// Convert the color given as argument or, if absent, read from the reader.
/// Either way, the color is trimmed before conversion.
fn resolve<R: BufRead>(color: Option<String>, stdin: &mut R) -> anyhow::Result<Conversion> {
    let input = color.map_or_else(|| read_line(stdin), Ok)?;
    let input = input.trim();
    tracing::info!(input, "converting color");

    convert(input)
        .inspect_err(|err| tracing::error!(input, %err, "invalid color"))
        .context(INVALID_COLOR)
}

fn render<W: Write>(
    out: &mut W,
    conversion: &Conversion,
    json: bool,
    swatch: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, conversion)
            .context("could not serialize conversion")?;
        writeln!(out)?;
        return Ok(());
    }

    if swatch {
        writeln!(out, "{} {}\n", conversion.srgb.swatch(), conversion.srgb)?;
    }
    writeln!(out, "{}", conversion)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let Cli {
        color,
        json,
        swatch,
        verbose,
    } = Cli::parse();
    init_logging(verbose);

    let conversion = resolve(color, &mut std::io::stdin().lock())?;

    let stdout = std::io::stdout();
    let show_swatch = !json && swatch.resolve(stdout.is_terminal());
    let mut out = stdout.lock();
    render(&mut out, &conversion, json, show_swatch)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{log_directive, render, resolve, Cli, SwatchPolicy, INVALID_COLOR};
    use clap::Parser;
    use hexchroma::{convert, error::ColorFormatError};
    use std::io::Cursor;

    #[test]
    fn test_arguments() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["hexchroma"])?;
        assert_eq!(cli.color, None, "color should be optional");
        assert!(!cli.json, "JSON should be off by default");
        assert_eq!(cli.swatch, SwatchPolicy::Auto, "swatch should default to auto");
        assert_eq!(cli.verbose, 0, "verbosity should default to zero");

        let cli = Cli::try_parse_from(["hexchroma", "--json", "-vv", "#FF5733"])?;
        assert_eq!(cli.color.as_deref(), Some("#FF5733"), "color should be positional");
        assert!(cli.json, "JSON should be on");
        assert_eq!(cli.verbose, 2, "verbosity should count flags");

        let cli = Cli::try_parse_from(["hexchroma", "--swatch", "never", "ff5733"])?;
        assert_eq!(cli.swatch, SwatchPolicy::Never, "swatch should parse");

        assert!(
            Cli::try_parse_from(["hexchroma", "--swatch", "sometimes"]).is_err(),
            "unknown swatch policy should be rejected"
        );
        assert!(
            Cli::try_parse_from(["hexchroma", "ff5733", "00ff00"]).is_err(),
            "only one color should be accepted"
        );
        Ok(())
    }

    #[test]
    fn test_swatch_policy() {
        assert!(SwatchPolicy::Always.resolve(false), "always means always");
        assert!(!SwatchPolicy::Never.resolve(true), "never means never");
    }

    #[test]
    fn test_log_directive() {
        assert_eq!(log_directive(0), "hexchroma=warn", "default is warn");
        assert_eq!(log_directive(1), "hexchroma=info", "-v is info");
        assert_eq!(log_directive(2), "hexchroma=debug", "-vv is debug");
        assert_eq!(log_directive(7), "hexchroma=trace", "more is trace");
    }

    #[test]
    fn test_resolve_trims() -> anyhow::Result<()> {
        let conversion = resolve(None, &mut Cursor::new(" #ff5733\n"))?;
        assert_eq!(conversion.srgb.to_24bit(), [0xff, 0x57, 0x33], "stdin should be trimmed");

        let conversion = resolve(Some("\t3178EA  ".to_string()), &mut Cursor::new("#000000\n"))?;
        assert_eq!(
            conversion.srgb.to_24bit(),
            [0x31, 0x78, 0xea],
            "argument should win over stdin and be trimmed"
        );
        Ok(())
    }

    #[test]
    fn test_resolve_invalid() {
        for (color, stdin) in [
            (Some("#12345Z"), ""),
            (None, "#12345Z\n"),
            (None, ""),
            (Some("#FF 5733"), ""),
        ] {
            let result = resolve(color.map(String::from), &mut Cursor::new(stdin));
            let Err(error) = result else {
                panic!("color {:?} with stdin {:?} should be rejected", color, stdin);
            };

            assert_eq!(error.to_string(), INVALID_COLOR, "user-facing message");
            assert_eq!(
                error.downcast_ref::<ColorFormatError>(),
                Some(&ColorFormatError::InvalidFormat),
                "library error should be the cause"
            );
        }
    }

    #[test]
    fn test_render_cards() -> anyhow::Result<()> {
        let conversion = convert("#FF5733")?;

        let mut out = Vec::new();
        render(&mut out, &conversion, false, true)?;
        let text = String::from_utf8(out)?;
        assert!(
            text.starts_with("\x1b[48;2;255;87;51m  \x1b[0m #FF5733\n\nsRGB\n"),
            "swatch should precede cards"
        );
        assert!(text.contains("\n  hsla(11, 100%, 60%, 1)\n"), "HSL card is missing");
        assert!(text.ends_with("  h: 33.68°\n"), "Oklch card should come last");

        let mut out = Vec::new();
        render(&mut out, &conversion, false, false)?;
        let text = String::from_utf8(out)?;
        assert!(text.starts_with("sRGB\n"), "no swatch expected");
        Ok(())
    }

    #[test]
    fn test_render_json() -> anyhow::Result<()> {
        let conversion = convert("ff0000")?;

        let mut out = Vec::new();
        render(&mut out, &conversion, true, true)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["srgb"]["r"], 255, "sRGB red channel");
        assert_eq!(value["hsl"]["s"], 100.0, "HSL saturation");
        assert_eq!(value["cmyk"]["k"], 0.0, "CMYK key");
        assert!(value["oklch"]["h"].is_number(), "Oklch hue");
        Ok(())
    }
}
