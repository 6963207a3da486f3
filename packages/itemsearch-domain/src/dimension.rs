use serde::{Deserialize, Serialize};

/// A physical measurement an item may carry. The set is closed: unknown
/// dimension names are not representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
	Length,
	Height,
	Width,
	Depth,
	Weight,
	Diameter,
	Volume,
	Thickness,
}

impl Dimension {
	/// Fixed enumeration order. Everything that iterates over dimensions
	/// (filter clause assembly in particular) must use this order so the
	/// output is reproducible across calls.
	pub const ALL: [Self; 8] = [
		Self::Length,
		Self::Height,
		Self::Width,
		Self::Depth,
		Self::Weight,
		Self::Diameter,
		Self::Volume,
		Self::Thickness,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Length => "length",
			Self::Height => "height",
			Self::Width => "width",
			Self::Depth => "depth",
			Self::Weight => "weight",
			Self::Diameter => "diameter",
			Self::Volume => "volume",
			Self::Thickness => "thickness",
		}
	}
}

impl std::fmt::Display for Dimension {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
