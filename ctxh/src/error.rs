/// Errors returned when parsing a [`ContextHandle`](crate::ContextHandle) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHandleError {
	Empty,

	Invalid { input: String },
}

impl std::fmt::Display for ParseHandleError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Empty => f.write_str("empty context handle"),
			Self::Invalid { input } => write!(f, "invalid context handle '{input}'"),
		}
	}
}

impl std::error::Error for ParseHandleError {}
