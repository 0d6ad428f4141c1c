use {
  std::fs,
  anyhow::Result,
  image::{GenericImageView, Rgba},
  crate::{
    error::Error,
    icons::{FILL, SIZE, Spokes},
    renderer::{Renderer, RenderConfig}
  }
};

const NAMES: [&str; 5] = ["home", "code", "lock", "settings", "message"];

fn renderer(out_dir: impl Into<std::path::PathBuf>, spokes: Spokes) -> Renderer {
  Renderer::new(RenderConfig { out_dir: out_dir.into(), spokes })
}

#[test] fn writes_all_icons() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let out_dir = tmp.path().join("nested").join("icons");
  let written = renderer(&out_dir, Spokes::default()).run()?;

  assert_eq!(written.iter().map(|w| w.name).collect::<Vec<_>>(), NAMES);
  for w in &written {
    assert_eq!(w.path, out_dir.join(format!("{}.png", w.name)));
    assert_eq!(w.bytes, fs::metadata(&w.path)?.len());

    let image = image::open(&w.path)?;
    assert_eq!(image.dimensions(), (SIZE, SIZE));
    assert!(image.color().has_alpha());
    let image = image.to_rgba8();
    assert!(image.pixels().any(|&px| px == FILL));
    assert!(image.pixels().all(|&px| px == FILL || px == Rgba([0, 0, 0, 0])));
  }
  Ok(())
}

#[test] fn idempotent() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let renderer = renderer(tmp.path(), Spokes::default());

  let first = renderer.run()?.into_iter()
    .map(|w| fs::read(w.path))
    .collect::<std::io::Result<Vec<_>>>()?;
  let second = renderer.run()?.into_iter()
    .map(|w| fs::read(w.path))
    .collect::<std::io::Result<Vec<_>>>()?;
  assert_eq!(first, second);
  Ok(())
}

#[test] fn spokes_only_affect_settings() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let collapsed = renderer(tmp.path().join("collapsed"), Spokes::Collapsed).run()?;
  let rotated = renderer(tmp.path().join("rotated"), Spokes::Rotated).run()?;

  for (a, b) in collapsed.iter().zip(&rotated) {
    let same = fs::read(&a.path)? == fs::read(&b.path)?;
    assert_eq!(same, a.name != "settings", "{}", a.name);
  }
  Ok(())
}

#[test] fn out_dir_is_a_file() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let out_dir = tmp.path().join("icons");
  fs::write(&out_dir, b"not a directory")?;

  let err = renderer(&out_dir, Spokes::default()).run().unwrap_err();
  assert!(matches!(err, Error::CreateDir { ref path, .. } if *path == out_dir), "{err:?}");
  Ok(())
}

#[test] fn icon_path_is_a_directory() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let blocked = tmp.path().join("home.png");
  fs::create_dir(&blocked)?;

  let err = renderer(tmp.path(), Spokes::default()).run().unwrap_err();
  assert!(matches!(err, Error::Write { ref path, .. } if *path == blocked), "{err:?}");
  Ok(())
}

#[test] fn default_config() {
  let config = RenderConfig::default();
  assert_eq!(config.out_dir, std::path::Path::new("icons"));
  assert_eq!(config.spokes, Spokes::Collapsed);
}
