use crate::Result;
use color_eyre::eyre::{ContextCompat as _, WrapErr as _};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
	Decimal,
	Hex,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	pub radix: Radix,
	pub dedup: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			radix: Radix::Decimal,
			dedup: true,
		}
	}
}

impl Config {
	pub fn read_from_config_file() -> Result<Self> {
		let home_dir = std::env::home_dir().context("failed to get home dir")?;
		let home_dir = home_dir.to_str().context("home dir not utf-8")?;

		let config_path =
			std::path::PathBuf::from_iter([home_dir, ".config", "ctxh", "config.json"]);

		Self::read_from(&config_path)
	}

	/// Loads the config at `config_path`. A file that cannot be read yields the defaults.
	pub fn read_from(config_path: &std::path::Path) -> Result<Self> {
		let config_file = match std::fs::read_to_string(config_path) {
			Ok(x) => x,
			Err(err) => {
				log::debug!("no config at {}: {err}", config_path.display());
				String::from("{}")
			}
		};

		Self::from_json(&config_file)
			.wrap_err_with(|| format!("failed to parse {}", config_path.display()))
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Command-line flags win over the file.
	pub fn apply_args(&mut self, hex: bool, keep_duplicates: bool) {
		if hex {
			self.radix = Radix::Hex;
		}

		if keep_duplicates {
			self.dedup = false;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_default() {
		assert_eq!(Config::from_json("{}").unwrap(), Config::default());
	}

	#[test]
	fn partial() {
		let config = Config::from_json(r#"{ "radix": "hex", "unknown": 1 }"#).unwrap();

		assert_eq!(config.radix, Radix::Hex);
		assert!(config.dedup);
	}

	#[test]
	fn malformed() {
		assert!(Config::from_json("{ radix").is_err());
		assert!(Config::from_json(r#"{ "radix": "octal" }"#).is_err());
	}

	#[test]
	fn missing_file_is_default() {
		let dir = tempfile::tempdir().unwrap();

		assert_eq!(
			Config::read_from(&dir.path().join("config.json")).unwrap(),
			Config::default()
		);
	}

	#[test]
	fn read_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");

		std::fs::write(&path, r#"{ "dedup": false }"#).unwrap();
		assert_eq!(
			Config::read_from(&path).unwrap(),
			Config {
				radix: Radix::Decimal,
				dedup: false,
			}
		);

		std::fs::write(&path, "{ radix").unwrap();
		assert!(Config::read_from(&path).is_err());
	}

	#[test]
	fn args_override_file() {
		let mut config = Config {
			radix: Radix::Decimal,
			dedup: true,
		};

		config.apply_args(false, false);
		assert_eq!(config, Config::default());

		config.apply_args(true, true);
		assert_eq!(config.radix, Radix::Hex);
		assert!(!config.dedup);

		// unset flags leave file values alone
		let mut config = Config {
			radix: Radix::Hex,
			dedup: false,
		};
		config.apply_args(false, false);
		assert_eq!(config.radix, Radix::Hex);
		assert!(!config.dedup);
	}
}
