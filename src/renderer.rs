//! Writes the icon set to disk.
use {
  std::{fs, path::PathBuf},
  humansize::{FileSize, file_size_opts},
  image::ImageFormat,
  tracing::{debug, info},
  crate::{
    error::{Error, Result},
    icons::{self, Icon, Spokes}
  }
};

#[derive(Debug, Clone)]
pub struct RenderConfig {
  /// Created on demand, including missing parents.
  pub out_dir: PathBuf,
  pub spokes: Spokes
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      out_dir: PathBuf::from("icons"),
      spokes: Spokes::default()
    }
  }
}

/// A file produced by [`Renderer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
  pub name: &'static str,
  pub path: PathBuf,
  pub bytes: u64
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
  pub config: RenderConfig
}

impl Renderer {
  pub fn new(config: RenderConfig) -> Self {
    Self { config }
  }

  /// Draw every icon and save it as `<out_dir>/<name>.png`, in order.
  /// Stops at the first failure; files written up to that point are left in place.
  pub fn run(&self) -> Result<Vec<Written>> {
    let out_dir = &self.config.out_dir;
    fs::create_dir_all(out_dir)
      .map_err(|source| Error::CreateDir { path: out_dir.clone(), source })?;

    icons::all(self.config.spokes)
      .iter()
      .map(|icon| self.write(icon))
      .collect()
  }

  pub fn write(&self, icon: &Icon) -> Result<Written> {
    let path = self.config.out_dir.join(format!("{}.png", icon.name));
    debug!(icon = icon.name, primitives = icon.primitives.len(), "drawing");

    icon.render()
      .save_with_format(&path, ImageFormat::Png)
      .map_err(|source| Error::Write { path: path.clone(), source })?;
    let bytes = fs::metadata(&path)
      .map_err(|source| Error::Stat { path: path.clone(), source })?
      .len();

    info!(
      icon = icon.name,
      path = %path.display(),
      size = %bytes.file_size(file_size_opts::CONVENTIONAL).unwrap_or_default(),
      "written"
    );
    Ok(Written { name: icon.name, path, bytes })
  }
}
