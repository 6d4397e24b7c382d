use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use alphawall::{
    Alphabet, ConsoleSource, EventDispatcher, EventSource, FileEventSource, TerminalStrip,
    WallConfig, color,
};

/// Chat-triggered alphabet-wall light show
///
/// Watches a chat event stream and plays one animation per message: the wall
/// lights up, flickers, spells the message against its letter layout, then
/// closes with the "run" finale. Without --debug, messages are read from
/// stdin.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Chat API token (flag takes precedence over the environment)
    #[arg(long, env = "CHAT_TOKEN", hide_env_values = true)]
    token: String,

    /// Replay events from a file instead of connecting live
    #[arg(long, value_name = "FILE")]
    debug: Option<PathBuf>,

    /// Number of pixels on the strip
    #[arg(long, default_value_t = 50)]
    led_count: usize,

    /// Offset of the mapped region along the strip
    #[arg(long, default_value_t = 0)]
    shift: usize,

    /// Flicker sub-iterations per flickered pixel
    #[arg(long, default_value_t = 3)]
    flicker_loops: u32,

    /// Override the wall's letter layout
    #[arg(long, value_name = "GLYPHS")]
    alphabet: Option<String>,

    /// Override the init palette: `;`-separated `r,g,b` triples
    #[arg(long, value_name = "COLORS")]
    palette: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = WallConfig {
        led_count: cli.led_count,
        shift: cli.shift,
        flicker_loops: cli.flicker_loops,
        ..WallConfig::default()
    };
    if let Some(glyphs) = &cli.alphabet {
        config.alphabet = Alphabet::new(glyphs);
    }
    if let Some(colors) = &cli.palette {
        config.palette = color::parse_palette(colors).context("invalid --palette")?;
    }
    config.validate().context("invalid wall configuration")?;

    let mut strip = TerminalStrip::new(config.led_count);
    match &cli.debug {
        Some(path) => {
            let source = FileEventSource::open(path)
                .with_context(|| format!("cannot open replay file {}", path.display()))?;
            listen(source, &config, &mut strip)
        }
        None => listen(ConsoleSource::new(cli.token), &config, &mut strip),
    }
}

fn listen<E: EventSource>(
    source: E,
    config: &WallConfig,
    strip: &mut TerminalStrip,
) -> anyhow::Result<()> {
    EventDispatcher::new(source, config)
        .run(strip)
        .context("dispatcher terminated")?;
    Ok(())
}
