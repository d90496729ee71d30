use std::fmt::{Debug, Formatter};

/// The maximum number of distinct [component](crate::components::Component) types
/// a process can register.
pub const MAX_COMPONENTS: usize = 32;

const BITS: usize = 32;
const WORDS: usize = (MAX_COMPONENTS + BITS - 1) / BITS;
const FIRST_BIT: u32 = 1 << (BITS - 1);

/// A fixed-size bit-field with one bit per [component id](crate::components::ComponentId).
///
/// An entity's signature records which components it currently has,
/// a system's signature records which components it requires.
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Signature {
	values: [u32; WORDS],
}

impl Signature {
	/// Create a new, empty [Signature].
	pub const fn new() -> Self {
		Self { values: [0; WORDS] }
	}

	/// Get the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the bit to retrieve
	#[inline(always)]
	pub fn get(&self, i: usize) -> bool {
		if i >= MAX_COMPONENTS {
			return false;
		}
		let (position, shift) = Self::pos_shift(i);
		(self.values[position] & (FIRST_BIT >> shift)) != 0
	}

	/// Set the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the bit to modify
	///
	/// # Panics
	/// If `i` is not lower than [MAX_COMPONENTS].
	#[inline(always)]
	pub fn set(&mut self, i: usize, value: bool) {
		assert!(i < MAX_COMPONENTS, "Signature index {i} is out of range");
		let (position, shift) = Self::pos_shift(i);
		let bit = FIRST_BIT >> shift;

		match value {
			true => self.values[position] |= bit,
			false => self.values[position] &= !bit,
		}
	}

	/// Check if every bit set in `self` is also set in `other`.
	///
	/// An empty [Signature] is a subset of every signature.
	///
	/// # Arguments
	/// * `other` - The signature to check against
	pub fn is_subset_of(&self, other: &Signature) -> bool {
		self.values.iter().zip(other.values.iter()).all(|(mask, bits)| (*bits & *mask) == *mask)
	}

	/// Bitwise intersection of two signatures.
	pub fn intersection(&self, other: &Signature) -> Signature {
		let mut result = *self;
		for (value, other) in result.values.iter_mut().zip(other.values.iter()) {
			*value &= *other;
		}
		result
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.values.fill(0);
	}

	pub fn is_empty(&self) -> bool {
		self.values.iter().all(|v| *v == 0)
	}

	/// Number of set bits.
	pub fn count(&self) -> usize {
		self.values.iter().map(|v| v.count_ones() as usize).sum()
	}

	/// Iterate over the indices of the set bits, in ascending order.
	pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
		(0..MAX_COMPONENTS).filter(move |i| self.get(*i))
	}

	#[inline(always)]
	fn pos_shift(a: usize) -> (usize, usize) {
		(a / BITS, a % BITS)
	}
}

impl FromIterator<usize> for Signature {
	fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
		let mut signature = Signature::new();
		for i in iter {
			signature.set(i, true);
		}
		signature
	}
}

impl Debug for Signature {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("Signature(")?;
		for i in 0..MAX_COMPONENTS {
			f.write_str(if self.get(i) { "1" } else { "0" })?;
		}
		f.write_str(")")
	}
}
