use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use decode::{Decoder, DecoderConfig, Mode, ResolvedInstruction};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode ARM and Thumb instruction words", long_about = None)]
struct Cli {
    /// Instruction words, decimal or hex with a `0x` prefix
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,
    /// Decode as 16-bit Thumb words
    #[arg(short, long)]
    thumb: bool,
    /// Print one JSON object per word
    #[arg(long)]
    json: bool,
    /// Print the bit diagram of each word
    #[arg(long, conflicts_with = "json")]
    layout: bool,
    /// Classify condition 1111 with selector 11 as unconditional
    #[arg(long)]
    escalate_unconditional: bool,
    /// JSON decoder options, flags are applied on top
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    const fn mode(&self) -> Mode {
        if self.thumb { Mode::Thumb } else { Mode::Arm }
    }

    fn decoder_config(&self) -> Result<DecoderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => DecoderConfig::default(),
        };

        if self.escalate_unconditional {
            config.escalate_unconditional = true;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let decoder = Decoder::new(cli.decoder_config()?);
    let mode = cli.mode();
    tracing::debug!("decoding {} word(s) in {mode} mode", cli.words.len());

    for word in &cli.words {
        let raw = parse_word(word).with_context(|| format!("invalid word `{word}`"))?;
        let resolved = decoder.decode(raw, mode)?;
        println!("{}", render(&cli, &resolved)?);
    }

    Ok(())
}

fn render(cli: &Cli, resolved: &ResolvedInstruction) -> Result<String> {
    if cli.json {
        return serde_json::to_string(resolved).context("serializing instruction");
    }

    if cli.layout {
        return Ok(resolved.layout().to_string());
    }

    Ok(resolved.mnemonic.to_string())
}

fn parse_word(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}
