use crate::{Either, Maybe, Unit, Utf8Str, Utf8String};
use config::ConfigError;
use tagged_maybe as tagged;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationAction {
  Panic,
  Abort,
}

impl From<config::ViolationAction> for ViolationAction {
  fn from(action: config::ViolationAction) -> Self {
    match action {
      config::ViolationAction::Panic => Self::Panic,
      config::ViolationAction::Abort => Self::Abort,
    }
  }
}

pub type LoadConfigResult = Either<Utf8String, Unit>;

/// Loads the config file and installs it for the rest of the process.
#[no_mangle]
pub extern "C" fn load_config() -> LoadConfigResult {
  match Either::from(load_and_install()) {
    Either::Left(msg) => Either::Left(Utf8String::new(msg)),
    Either::Right(()) => Either::Right(Unit::new()),
  }
}

fn load_and_install() -> tagged::Either<String, ()> {
  match config::load_config() {
    Ok(config) => match config::install(config) {
      Ok(()) => tagged::Either::new(()),
      Err(_) => {
        tagged::Either::new("configuration already installed".to_owned())
      }
    },
    Err(err) => tagged::Either::new(config_error_to_string(err)),
  }
}

/// The action in effect, whether or not a config file was loaded.
#[no_mangle]
pub extern "C" fn violation_action() -> ViolationAction {
  config::current().contract.on_violation.into()
}

/// The action from the loaded config file, or nothing if none was loaded.
#[no_mangle]
pub extern "C" fn installed_violation_action() -> Maybe<ViolationAction> {
  let action = config::installed()
    .map(|c| ViolationAction::from(c.contract.on_violation));
  Maybe::from(tagged::Maybe::from(action))
}

#[no_mangle]
pub extern "C" fn config_file_name() -> Utf8Str {
  Utf8Str::new(config::CONFIG_FILE)
}

fn config_error_to_string(err: ConfigError) -> String {
  match err {
    ConfigError::Io(err) => format!("failed to read config file: {}", err),
    ConfigError::Yaml(err) => format!("failed to parse config file: {}", err),
    ConfigError::Other(err) => format!("config file error: {}", err),
  }
}
