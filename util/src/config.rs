use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Search order:
/// - working directory
/// - executable path
pub fn find_config_file<P>(p: P) -> io::Result<PathBuf>
where
  P: AsRef<Path>,
{
  let p = p.as_ref();
  if p.try_exists()? {
    return Ok(PathBuf::from(p));
  }
  let exe = env::current_exe()?;
  let dir = exe.parent().ok_or_else(|| {
    io::Error::new(io::ErrorKind::NotFound, "executable has no parent")
  })?;
  Ok(dir.join(p))
}

pub fn load_config_file<P>(p: P) -> io::Result<String>
where
  P: AsRef<Path>,
{
  fs::read_to_string(find_config_file(p)?)
}
