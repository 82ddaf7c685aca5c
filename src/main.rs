// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command-line entry point: timecode helpers and headless crop requests.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};

use clipcrop::app::{CropSession, EditorMessage, Outcome, update};
use clipcrop::config::EditorConfig;
use clipcrop::domain::operations::crop::CropRegion;
use clipcrop::domain::timecode;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "clipcrop", version, about = "Timecode and crop-region helpers for video cutting")]
pub struct Args {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Minutes between two timecodes, in half-minute steps.
    Duration { start: String, end: String },
    /// Print timecodes in canonical form.
    Normalize {
        #[arg(required = true)]
        values: Vec<String>,
        /// Always print milliseconds (`HH:MM:SS.mmm`).
        #[arg(long)]
        precise: bool,
    },
    /// Build the crop request for a video frame and print it as JSON.
    Crop(CropArgs),
}

#[derive(ClapArgs, Debug, Clone)]
struct CropArgs {
    /// Video path the backend should crop.
    #[arg(long)]
    video: PathBuf,
    /// Still frame to take the native size from.
    #[arg(long, conflicts_with = "size", required_unless_present = "size")]
    frame: Option<PathBuf>,
    /// Native frame size as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    size: Option<(u32, u32)>,
    /// Region in native pixels as `x,y,width,height` (default: full frame).
    #[arg(long, value_parser = parse_region)]
    region: Option<CropRegion>,
    /// Start marker (default: beginning of the video).
    #[arg(long)]
    start: Option<String>,
    /// End marker (default: `--media-duration`).
    #[arg(long)]
    end: Option<String>,
    /// Video length in seconds.
    #[arg(long, default_value_t = 0.0)]
    media_duration: f64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Duration { start, end } => {
            println!("{}", timecode::duration(&start, &end));
        }
        Command::Normalize { values, precise } => {
            for value in values {
                let out = if precise {
                    timecode::format_precise(timecode::parse(&value))
                } else {
                    timecode::normalize(&value)
                };
                println!("{out}");
            }
        }
        Command::Crop(crop) => {
            let config = EditorConfig::load(args.config.as_deref())?;
            let json = crop_request(crop, config)?;
            println!("{json}");
        }
    }
    Ok(())
}

fn crop_request(args: CropArgs, config: EditorConfig) -> anyhow::Result<String> {
    let mut session = CropSession::new(config);
    update(&mut session, EditorMessage::SelectVideo(args.video));
    update(
        &mut session,
        EditorMessage::MediaLoaded {
            duration: args.media_duration,
        },
    );

    let captured = match (args.frame, args.size) {
        (Some(path), _) => capture_from_file(&mut session, &path)?,
        (None, Some((width, height))) => {
            update(&mut session, EditorMessage::CaptureFrame { width, height });
            session.editor.has_frame()
        }
        (None, None) => bail!("Either --frame or --size is required"),
    };
    if !captured {
        bail!("Frame has no pixels");
    }

    if let Some(region) = args.region {
        update(&mut session, EditorMessage::ManualInput(region));
    }
    if let Some(start) = args.start {
        update(&mut session, EditorMessage::SetStartText(start));
    }
    if let Some(end) = args.end {
        update(&mut session, EditorMessage::SetEndText(end));
    }

    match update(&mut session, EditorMessage::ApplyCrop) {
        Outcome::Request(request) => request.to_json().context("Failed to encode crop request"),
        Outcome::Rejected(e) => Err(e.into()),
        other => bail!("Unexpected outcome {other:?}"),
    }
}

#[cfg(feature = "image")]
fn capture_from_file(session: &mut CropSession, path: &std::path::Path) -> anyhow::Result<bool> {
    let frame = image::open(path)
        .with_context(|| format!("Failed to open frame {}", path.display()))?;
    Ok(session.editor.capture_frame(&frame))
}

#[cfg(not(feature = "image"))]
fn capture_from_file(_session: &mut CropSession, path: &std::path::Path) -> anyhow::Result<bool> {
    bail!(
        "Cannot read {}: built without the `image` feature, use --size",
        path.display()
    )
}

fn parse_size(text: &str) -> Result<(u32, u32), String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{text}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension `{v}`: {e}"))
    };
    Ok((parse(w)?, parse(h)?))
}

fn parse_region(text: &str) -> Result<CropRegion, String> {
    let fields: Vec<&str> = text.split(',').collect();
    let fields: [&str; 4] = fields
        .try_into()
        .map_err(|_| format!("expected x,y,width,height, got `{text}`"))?;
    Ok(CropRegion::from_fields(fields))
}
