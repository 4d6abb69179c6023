//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, ENV_BIND_ADDR, ENV_LOG_LEVEL, ENV_PRIMARY_DATA,
  ENV_SUPPLEMENTARY_DATA, MAX_TEXT_LENGTH,
};
pub use env::Config;
