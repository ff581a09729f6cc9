use crate::ParseHandleError;

/// Handle to a native OpenGL/EGL or OpenAL context.
///
/// The wrapped value is an opaque pointer-sized token. It is never dereferenced
/// and the context it names is owned by whoever created it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ContextHandle {
	handle: usize,
}

impl ContextHandle {
	/// The handle that names no context.
	pub const ZERO: Self = Self::new(0);

	pub const fn new(handle: usize) -> Self {
		Self { handle }
	}

	pub const fn from_raw(raw: usize) -> Self {
		Self::new(raw)
	}

	/// Unwraps the handle for a native call. [`Self::ZERO`] always yields 0.
	pub const fn to_raw(self) -> usize {
		if self.is_zero() {
			0
		} else {
			self.handle
		}
	}

	pub const fn handle(&self) -> usize {
		self.handle
	}

	pub const fn is_zero(&self) -> bool {
		self.handle == 0
	}

	pub fn from_ptr(ptr: *const std::ffi::c_void) -> Self {
		Self::new(ptr as usize)
	}

	pub fn as_ptr(&self) -> *mut std::ffi::c_void {
		self.handle as _
	}

	pub fn from_non_zero(value: Option<std::num::NonZeroUsize>) -> Self {
		value.map_or(Self::ZERO, |x| Self::new(x.get()))
	}

	pub fn to_non_zero(self) -> Option<std::num::NonZeroUsize> {
		std::num::NonZeroUsize::new(self.handle)
	}

	/// Compares against a value of any type. Anything that is not a
	/// `ContextHandle` compares unequal.
	pub fn equals(&self, other: &dyn std::any::Any) -> bool {
		other
			.downcast_ref::<Self>()
			.is_some_and(|other| self == other)
	}

	/// Returns the signed distance `other - self`.
	///
	/// Handles order descending: a larger raw value compares as less than a
	/// smaller one. The magnitude saturates when the distance does not fit an
	/// `isize`, the sign is always exact.
	pub fn compare_to(&self, other: &Self) -> isize {
		if other.handle >= self.handle {
			isize::try_from(other.handle - self.handle).unwrap_or(isize::MAX)
		} else {
			-isize::try_from(self.handle - other.handle).unwrap_or(isize::MAX)
		}
	}
}

impl PartialOrd for ContextHandle {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ContextHandle {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		other.handle.cmp(&self.handle)
	}
}

impl std::fmt::Display for ContextHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(&self.handle, f)
	}
}

impl std::fmt::LowerHex for ContextHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::LowerHex::fmt(&self.handle, f)
	}
}

impl std::fmt::UpperHex for ContextHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::UpperHex::fmt(&self.handle, f)
	}
}

impl std::str::FromStr for ContextHandle {
	type Err = ParseHandleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();

		if s.is_empty() {
			return Err(ParseHandleError::Empty);
		}

		let invalid = || ParseHandleError::Invalid {
			input: s.to_owned(),
		};

		let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
			Some(digits) => (digits, 16),
			None => (s, 10),
		};

		// from_str_radix takes a leading '+'
		if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		usize::from_str_radix(digits, radix)
			.map(Self::new)
			.map_err(|_| invalid())
	}
}

impl serde::Serialize for ContextHandle {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(self.handle as u64)
	}
}

struct Visitor;

impl<'de> serde::de::Visitor<'de> for Visitor {
	type Value = usize;

	fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
		usize::try_from(value)
			.map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
	}

	fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
		usize::try_from(value)
			.map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
	}

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a pointer-sized unsigned integer")
	}
}

impl<'de> serde::Deserialize<'de> for ContextHandle {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(Self::new(deserializer.deserialize_u64(Visitor)?))
	}
}
