use linked_hash_map::LinkedHashMap;
use log::debug;
use std::io;
use std::sync::OnceLock;
use util::config;
use yaml_rust::{Yaml, YamlLoader};

pub const CONFIG_FILE: &str = "tagged.yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub contract: ContractConfig,
}

/// What happens when a value is read from the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
  pub on_violation: ViolationAction,
  pub log: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationAction {
  Panic,
  Abort,
}

pub const DEFAULT_CONFIG: Config = Config {
  contract: ContractConfig {
    on_violation: ViolationAction::Panic,
    log: true,
  },
};

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug)]
pub enum ConfigError {
  Io(io::Error),
  Yaml(yaml_rust::ScanError),
  Other(String),
}

impl From<io::Error> for ConfigError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<yaml_rust::ScanError> for ConfigError {
  fn from(err: yaml_rust::ScanError) -> Self {
    Self::Yaml(err)
  }
}

impl From<String> for ConfigError {
  fn from(err: String) -> Self {
    Self::Other(err)
  }
}

impl From<&str> for ConfigError {
  fn from(err: &str) -> Self {
    Self::Other(err.to_owned())
  }
}

/// Installs `config` for the rest of the process.
///
/// Only the first call succeeds; later calls hand the config back.
pub fn install(config: Config) -> Result<(), Config> {
  CONFIG.set(config)
}

pub fn installed() -> Option<&'static Config> {
  CONFIG.get()
}

/// The installed config, or [`DEFAULT_CONFIG`] if none was installed.
pub fn current() -> &'static Config {
  installed().unwrap_or(&DEFAULT_CONFIG)
}

pub fn load_config() -> Result<Config, ConfigError> {
  let content = config::load_config_file(CONFIG_FILE)?;
  let config = parse_config(&content)?;
  debug!("loaded {}: {:?}", CONFIG_FILE, config);
  Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
  let mut docs = YamlLoader::load_from_str(content)?;
  let mut config = DEFAULT_CONFIG.clone();
  let doc = match docs.pop() {
    Some(doc) if !doc.is_null() => doc,
    _ => return Ok(config),
  };

  let mut obj = doc.into_hash().ok_or("toplevel is not object")?;

  // contract
  if let Some(contract) = obj.remove(&Yaml::String("contract".to_owned())) {
    if !contract.is_null() {
      let contract =
        contract.into_hash().ok_or("contract is not object")?;
      config.contract = load_contract_config(contract)?;
    }
  }

  if let Some((key, _)) = obj.pop_front() {
    return Err(format!("superfluous field {}", yaml_to_string(&key)).into());
  }

  Ok(config)
}

fn load_contract_config(
  mut contract: LinkedHashMap<Yaml, Yaml>,
) -> Result<ContractConfig, ConfigError> {
  let mut contract_config = DEFAULT_CONFIG.contract.clone();

  if let Some(action) =
    contract.remove(&Yaml::String("on-violation".into()))
  {
    let action = action
      .into_string()
      .ok_or("contract.on-violation is not string")?;
    contract_config.on_violation = match action.as_str() {
      "panic" => ViolationAction::Panic,
      "abort" => ViolationAction::Abort,
      _ => {
        return Err(
          format!("contract.on-violation is invalid action '{}'", action)
            .into(),
        )
      }
    };
  }

  if let Some(log) = contract.remove(&Yaml::String("log".into())) {
    contract_config.log =
      log.as_bool().ok_or("contract.log is not boolean")?;
  }

  if let Some((key, _)) = contract.pop_front() {
    return Err(
      format!("superfluous field {} in contract", yaml_to_string(&key))
        .into(),
    );
  }

  Ok(contract_config)
}

fn yaml_to_string(yaml: &Yaml) -> String {
  match yaml {
    Yaml::Null => "~".to_owned(),
    Yaml::Boolean(true) => "true".to_owned(),
    Yaml::Boolean(false) => "false".to_owned(),
    Yaml::Hash(_) => "<object>".to_owned(),
    Yaml::Array(_) => "<array>".to_owned(),
    Yaml::String(s) => format!("'{}'", s.replace('\'', "\\'")),
    Yaml::Integer(n) => n.to_string(),
    Yaml::Real(n) => n.to_string(),
    _ => "<unknown>".to_owned(),
  }
}
