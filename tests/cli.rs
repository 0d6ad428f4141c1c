use {
  std::{fs, process::Command},
  anyhow::Result
};

const BIN: &str = env!("CARGO_BIN_EXE_sdf-icons");
const NAMES: [&str; 5] = ["home", "code", "lock", "settings", "message"];

#[test] fn default_out_dir() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let output = Command::new(BIN)
    .current_dir(tmp.path())
    .output()?;

  assert!(output.status.success(), "{output:?}");
  let stdout = String::from_utf8(output.stdout)?;
  assert!(stdout.contains("Icons created successfully in 'icons' directory."), "{stdout}");
  for name in NAMES {
    assert!(tmp.path().join("icons").join(format!("{name}.png")).is_file(), "{name}");
  }
  Ok(())
}

#[test] fn explicit_out_dir() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let out_dir = tmp.path().join("assets").join("toolbar");
  let output = Command::new(BIN)
    .arg(&out_dir)
    .args(["--spokes", "rotated", "-vv"])
    .output()?;

  assert!(output.status.success(), "{output:?}");
  assert!(String::from_utf8(output.stdout)?.contains("Icons created successfully"));
  assert_eq!(fs::read_dir(&out_dir)?.count(), NAMES.len());
  Ok(())
}

#[test] fn unwritable_out_dir() -> Result<()> {
  let tmp = tempfile::tempdir()?;
  let out_dir = tmp.path().join("icons");
  fs::write(&out_dir, b"")?;
  let output = Command::new(BIN)
    .arg(&out_dir)
    .output()?;

  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8(output.stderr)?.contains("unable to create output directory"));
  Ok(())
}
