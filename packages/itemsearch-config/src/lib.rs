mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Engine, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.engine.url.trim().is_empty() {
		return Err(Error::Validation { message: "engine.url must be non-empty.".to_string() });
	}
	if cfg.engine.index.trim().is_empty() {
		return Err(Error::Validation { message: "engine.index must be non-empty.".to_string() });
	}
	if cfg.engine.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "engine.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.engine.username.is_none() && cfg.engine.password.is_some() {
		return Err(Error::Validation {
			message: "engine.password requires engine.username.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.engine.url.ends_with('/') {
		cfg.engine.url.pop();
	}
	if cfg.engine.username.as_deref().map(|value| value.trim().is_empty()).unwrap_or(false) {
		cfg.engine.username = None;
	}
	if cfg.engine.password.as_deref().map(|value| value.trim().is_empty()).unwrap_or(false) {
		cfg.engine.password = None;
	}
}
