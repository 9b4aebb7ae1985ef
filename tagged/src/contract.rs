use crate::AccessError;
use config::{ContractConfig, ViolationAction};
use log::error;
use std::panic::Location;
use std::process;

/// Reports a read from a variant the caller should have checked first.
#[cold]
#[track_caller]
pub(crate) fn violation(err: AccessError) -> ! {
  let action = report(&config::current().contract, &err, Location::caller());
  fail(action, err)
}

/// Logs the violation if configured to, and returns what to do about it.
fn report(
  contract: &ContractConfig,
  err: &AccessError,
  location: &Location<'_>,
) -> ViolationAction {
  if contract.log {
    error!("contract violation at {}: {}", location, err);
  }
  contract.on_violation
}

#[track_caller]
fn fail(action: ViolationAction, err: AccessError) -> ! {
  match action {
    ViolationAction::Panic => panic!("contract violation: {}", err),
    ViolationAction::Abort => process::abort(),
  }
}
