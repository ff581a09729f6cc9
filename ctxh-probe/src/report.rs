use crate::config::{Config, Radix};
use ctxh::ContextHandle;

/// Handles in handle order, rendered one per line.
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
	lines: Vec<String>,
}

impl std::fmt::Display for Report {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for line in &self.lines {
			writeln!(f, "{line}")?;
		}

		Ok(())
	}
}

pub fn build(mut handles: Vec<ContextHandle>, config: &Config) -> Report {
	handles.sort();

	if config.dedup {
		let len = handles.len();
		handles.dedup();

		if handles.len() != len {
			log::info!("dropped {} duplicate handle(s)", len - handles.len());
		}
	}

	let lines = handles
		.into_iter()
		.map(|handle| {
			let mut line = match config.radix {
				Radix::Decimal => handle.to_string(),
				Radix::Hex => format!("{handle:#x}"),
			};

			if handle.is_zero() {
				line.push_str(" (zero)");
			}

			line
		})
		.collect();

	Report { lines }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn handles(raw: &[usize]) -> Vec<ContextHandle> {
		raw.iter().copied().map(ContextHandle::from_raw).collect()
	}

	#[test]
	fn descending_and_deduplicated() {
		let report = build(handles(&[0x1000, 0, 0x2000, 0x1000]), &Config::default());

		assert_eq!(report.to_string(), "8192\n4096\n0 (zero)\n");
	}

	#[test]
	fn hex_with_duplicates() {
		let config = Config {
			radix: Radix::Hex,
			dedup: false,
		};
		let report = build(handles(&[0x1000, 0x1000, 0xff]), &config);

		assert_eq!(report.to_string(), "0x1000\n0x1000\n0xff\n");
	}

	#[test]
	fn empty() {
		assert_eq!(build(Vec::new(), &Config::default()).to_string(), "");
	}
}
