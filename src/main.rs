//! handwave-replay: run recorded joint traces through the gesture
//! recognizers and report what they detect.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;

use handwave::config::{BeckonConfig, PoseConfig, WaveConfig};
use handwave::recognizer::GestureKind;
use handwave::tracking::HandJoint;
use handwave::{replay, GestureTracker};

#[derive(Parser, Debug)]
#[command(name = "handwave-replay", about = "Replay a joint trace through the gesture recognizers")]
struct Cli {
    /// Trace file: JSON lines of per-frame joint samples
    trace: PathBuf,

    /// Joint to feed to the recognizers (e.g. wrist, index-tip)
    #[arg(long, default_value = "wrist")]
    joint: String,

    /// Comma-separated gestures to recognize: wave, beckon, static-pose
    #[arg(long, default_value = "wave,beckon")]
    gestures: String,

    /// Minimum seconds between recognizer passes (omit to check every sample)
    #[arg(long)]
    interval: Option<f64>,
}

fn parse_kinds(list: &str) -> anyhow::Result<Vec<GestureKind>> {
    let mut kinds = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match name {
            "wave" => kinds.push(GestureKind::Wave(WaveConfig::default())),
            "beckon" => kinds.push(GestureKind::Beckon(BeckonConfig::default())),
            "static-pose" => kinds.push(GestureKind::StaticPose(PoseConfig::default())),
            other => bail!("unknown gesture {other:?} (expected wave, beckon, or static-pose)"),
        }
    }
    if kinds.is_empty() {
        bail!("no gestures selected");
    }
    Ok(kinds)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handwave=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let Some(joint) = HandJoint::from_str(&cli.joint) else {
        bail!("unknown joint {:?}", cli.joint);
    };
    let kinds = parse_kinds(&cli.gestures)?;

    let mut tracker = GestureTracker::new(&kinds, cli.interval)?;
    let file = File::open(&cli.trace)
        .with_context(|| format!("opening trace {}", cli.trace.display()))?;
    let events = replay::replay(BufReader::new(file), &mut tracker, joint)?;

    for event in &events {
        info!(
            "{} {} at {:.3}s",
            event.hand.as_str(),
            event.event.as_str(),
            event.timestamp_s,
        );
    }
    println!(
        "{}: {} event(s) from {} joint",
        cli.trace.display(),
        events.len(),
        joint.as_str(),
    );

    Ok(())
}
