//! Numeric precision tags.

use std::fmt;

mod sealed {
	pub trait Sealed {}
	impl Sealed for f32 {}
	impl Sealed for f64 {}
}

/// Compile-time tag selecting which of the parallel registries a
/// registration or lookup targets.
///
/// Implemented for `f32` (`"float"`) and `f64` (`"double"`) only.
pub trait Precision: sealed::Sealed + Copy + Default + PartialOrd + Send + Sync + fmt::Debug + 'static {
	/// Name used in diagnostics.
	const NAME: &'static str;
}

impl Precision for f32 {
	const NAME: &'static str = "float";
}

impl Precision for f64 {
	const NAME: &'static str = "double";
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names() {
		assert_eq!(<f32 as Precision>::NAME, "float");
		assert_eq!(<f64 as Precision>::NAME, "double");
	}
}
