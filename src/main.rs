use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use chan_hull::io::{parse_points, report};

#[derive(Parser)]
#[command(name = "chan-hull")]
#[command(about = "Convex hull of planar points with Chan's algorithm")]
struct Cmd {
  /// File with a point count followed by one `x y` pair per line. Reads stdin
  /// when omitted.
  input: Option<PathBuf>,

  /// Only print the final hull, not the chunk hulls of every guess
  #[arg(short, long)]
  quiet: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .with_target(false)
    .init();
  let cmd = Cmd::parse();

  let text = match &cmd.input {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("reading {}", path.display()))?,
    None => {
      let mut text = String::new();
      io::stdin().read_to_string(&mut text).context("reading stdin")?;
      text
    }
  };
  let points = parse_points(&text)?;
  tracing::info!(points = points.len(), "parsed input");

  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  let hull = report(points, cmd.quiet, &mut out)?;
  tracing::info!(vertices = hull.len(), "done");
  out.flush()?;
  Ok(())
}
