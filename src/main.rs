use {
  std::path::PathBuf,
  anyhow::{Context, Result},
  clap::{Parser, ValueEnum},
  tracing::Level,
  sdf_icons::{
    icons::Spokes,
    renderer::{Renderer, RenderConfig}
  }
};

/// Draw the toolbar icons as 24x24 PNG files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// Output directory, created if missing
  #[arg(default_value = "icons")]
  out_dir: PathBuf,
  /// Layout of the settings gear spokes
  #[arg(long, value_enum, default_value_t = SpokesArg::Collapsed)]
  spokes: SpokesArg,
  /// Log more; repeat for more detail
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum SpokesArg {
  Collapsed,
  Rotated,
}

impl From<SpokesArg> for Spokes {
  fn from(arg: SpokesArg) -> Self {
    match arg {
      SpokesArg::Collapsed => Spokes::Collapsed,
      SpokesArg::Rotated => Spokes::Rotated,
    }
  }
}

fn main() -> Result<()> {
  let args = Args::parse();

  // stdout is reserved for the final status line
  tracing_subscriber::fmt()
    .with_max_level(match args.verbose {
      0 => Level::WARN,
      1 => Level::INFO,
      2 => Level::DEBUG,
      _ => Level::TRACE
    })
    .with_writer(std::io::stderr)
    .init();

  let config = RenderConfig {
    out_dir: args.out_dir,
    spokes: args.spokes.into()
  };
  Renderer::new(config.clone())
    .run()
    .with_context(|| format!("failed to generate icons in {}", config.out_dir.display()))?;

  println!("Icons created successfully in '{}' directory.", config.out_dir.display());
  Ok(())
}
