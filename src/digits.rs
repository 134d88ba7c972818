//! Factoradic algorithms over plain digit sequences.
//!
//! The functions in this module work directly on slices and vectors of
//! [`BigUint`] digits, most-significant digit first, and are what
//! [`Factoradic`](crate::Factoradic) is built on. They are available for
//! callers who would rather work with bare digit vectors and skip the
//! validation the wrapper type performs on construction, for instance when
//! creating large numbers of permutations in a tight loop.
//!
//! A digit sequence of length `L` gives position `i` (counting from zero at
//! the left) the place value `(L - 1 - i)!`. It is well formed when every
//! digit is smaller than its distance from the end of the sequence, i.e.
//! `digits[i] < L - i`, which makes the final digit always zero.
//!

//	These lint checks are unnecessary in this module because all arithmetic
//	is performed on BigUint values, which grow rather than overflow, and the
//	small usize counters are bounded by the length of a Vec.
#![allow(clippy::arithmetic_side_effects, reason = "BigUint arithmetic does not overflow")]

//	All indexing here is bounded by the sequence length checked just before.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are always derived from the sequence length"
)]



//		Modules																											

#[cfg(test)]
#[path = "tests/digits.rs"]
mod tests;



//		Packages																										

use crate::errors::FactoradicError;
use core::{iter, mem};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};



//		Functions																										

//		cascade																	
/// Normalises a digit sequence, returning a new well-formed sequence.
///
/// This is the non-mutating form of [`cascade_in_place()`], and follows the
/// same rules. The input is left untouched.
///
/// # Parameters
///
/// * `digits` - The digit sequence to normalise.
///
#[must_use]
pub fn cascade(digits: &[BigUint]) -> Vec<BigUint> {
	let mut result = digits.to_vec();
	cascade_in_place(&mut result);
	result
}

//		cascade_in_place														
/// Normalises a digit sequence in place, making it well formed.
///
/// Any digit that has reached the rank of its position is carried into the
/// digit to its left, working from right to left. Once the carries have been
/// propagated, the leading digit is checked against the rank the next position
/// would have, and the sequence grows at the front for as long as it needs to
/// in order to hold the full value.
///
/// # Last digit
///
/// The final digit always has a place value of `0! = 1`, and is required to
/// be zero in a well-formed sequence. It is therefore set to zero before the
/// carries are made, and **any value it held is discarded rather than carried**.
/// The sequences produced by this crate never rely on that digit, as increments
/// are applied to the second-to-last position (which also has a place value of
/// `1! = 1`). Callers passing hand-built sequences should note that a non-zero
/// final digit does not survive normalisation.
///
/// A single-digit sequence can therefore only ever normalise to `[0]`, and an
/// empty sequence is normalised to `[0]` as well.
///
/// # Parameters
///
/// * `digits` - The digit sequence to normalise.
///
pub fn cascade_in_place(digits: &mut Vec<BigUint>) {
	let Some(last) = digits.last_mut() else {
		digits.push(BigUint::zero());
		return;
	};
	last.set_zero();
	
	//	Carry right to left, stopping short of the leading digit
	let len      = digits.len();
	let mut rank = 1_usize;
	for i in (1..len.saturating_sub(1)).rev() {
		rank += 1;
		let radix = BigUint::from(rank);
		if digits[i] >= radix {
			let carry      = &digits[i] / &radix;
			digits[i]     %= &radix;
			digits[i - 1] += carry;
		}
	}
	
	//	Grow at the front until the leading digit fits its rank
	rank += 1;
	let mut head  = mem::take(&mut digits[0]);
	let mut radix = BigUint::from(rank);
	let mut grown = Vec::new();
	while head >= radix {
		grown.push(&head % &radix);
		head  /= &radix;
		rank  += 1;
		radix  = BigUint::from(rank);
	}
	if grown.is_empty() {
		digits[0] = head;
	} else {
		let mut result = Vec::with_capacity(grown.len() + len);
		result.push(head);
		result.extend(grown.into_iter().rev());
		result.extend(digits.drain(1..));
		*digits = result;
	}
}

//		factorial																
/// Calculates `n!`.
///
/// This is the number of distinct permutations of `n` elements, and so the
/// size of the index space a factoradic of length `n` addresses.
///
#[must_use]
pub fn factorial(n: usize) -> BigUint {
	(2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

//		increment_by_in_place													
/// Adds a non-negative amount to a digit sequence in place.
///
/// The amount is added to the second-to-last digit, which has a place value of
/// `1! = 1`, and the sequence is then normalised using [`cascade_in_place()`].
/// Adding zero leaves the sequence exactly as it was. A sequence shorter than
/// two digits is padded to two digits first, so that there is a position to
/// add to.
///
/// # Parameters
///
/// * `digits` - The digit sequence to increment.
/// * `delta`  - The amount to add.
///
pub fn increment_by_in_place(digits: &mut Vec<BigUint>, delta: &BigUint) {
	if delta.is_zero() {
		return;
	}
	if digits.len() < 2 {
		*digits = pad_to_length(digits, 2);
	}
	let pos      = digits.len() - 2;
	digits[pos] += delta;
	cascade_in_place(digits);
}

//		is_well_formed															
/// Determines whether a digit sequence is well formed.
///
/// Each digit must be strictly less than its distance from the end of the
/// sequence, i.e. `digits[i] < L - i`. This includes the leading digit, so
/// `[2, 0]` is not well formed, whereas `[1, 0]` is. An empty sequence has no
/// digits to violate the rule.
///
/// # Parameters
///
/// * `digits` - The digit sequence to check.
///
#[must_use]
pub fn is_well_formed(digits: &[BigUint]) -> bool {
	let len = digits.len();
	digits.iter().enumerate().all(|(i, digit)| digit.to_usize().is_some_and(|d| d < len - i))
}

//		pad_to_length															
/// Left-pads a digit sequence with zeros up to the given length.
///
/// Leading zeros have no effect on the value. If the sequence is already at
/// least as long as requested, an unchanged copy is returned.
///
/// # Parameters
///
/// * `digits` - The digit sequence to pad.
/// * `length` - The length to pad to.
///
#[must_use]
pub fn pad_to_length(digits: &[BigUint], length: usize) -> Vec<BigUint> {
	iter::repeat(BigUint::zero())
		.take(length.saturating_sub(digits.len()))
		.chain(digits.iter().cloned())
		.collect()
}

//		parse_digit_string														
/// Parses a string holding one decimal digit per position.
///
/// For example, `"341010"` becomes `[3, 4, 1, 0, 1, 0]`. This form can only
/// express digits up to `9`, which is enough for sequences of up to ten
/// positions. The result is not checked for well-formedness.
///
/// # Parameters
///
/// * `s` - The string to parse.
///
/// # Errors
///
/// Returns [`FactoradicError::EmptyValue`] if the string is empty, or
/// [`FactoradicError::InvalidDigit`] for the first character that is not a
/// decimal digit.
///
pub fn parse_digit_string(s: &str) -> Result<Vec<BigUint>, FactoradicError> {
	if s.is_empty() {
		return Err(FactoradicError::EmptyValue);
	}
	s.chars()
		.map(|c| c.to_digit(10).map(BigUint::from).ok_or(FactoradicError::InvalidDigit(c)))
		.collect()
}

//		permutation																
/// Decodes a digit sequence into a permutation of the given elements.
///
/// This is the non-destructive form of [`permutation_in_place()`], which
/// operates on a copy of the elements. See that function for the rules.
///
/// # Parameters
///
/// * `digits`   - The Lehmer code to decode.
/// * `elements` - The elements to permute.
///
/// # Errors
///
/// Returns [`FactoradicError::IndexOutOfRange`] if a digit does not index into
/// the remaining elements.
///
pub fn permutation<T: Clone>(digits: &[BigUint], elements: &[T]) -> Result<Vec<T>, FactoradicError> {
	permutation_in_place(digits, &mut elements.to_vec())
}

//		permutation_in_place													
/// Decodes a digit sequence into a permutation of the given elements,
/// consuming them.
///
/// The digit sequence is treated as a Lehmer code: each digit in turn selects
/// the element at that index among those not yet chosen, removes it, and
/// appends it to the result. The elements are taken out of the supplied
/// [`Vec`], which should not be relied upon afterwards.
///
/// # Length mismatch
///
/// When there are more digits than elements, only the last `m` digits are
/// used, where `m` is the number of elements. The high-order digits are simply
/// ignored, so sequences differing only in those digits decode to the same
/// permutation, which makes the permutations cycle. This is done by position,
/// not by reducing the value modulo `m!`, and so a leading digit that is
/// larger than its position allows is dropped just like any other.
///
/// When there are fewer digits than elements, the sequence is treated as if
/// padded with leading zeros, which does not change its value.
///
/// # Performance
///
/// Each step removes an element from the middle of a [`Vec`], making decoding
/// quadratic in the number of elements. This is fine for the sizes in
/// practical use.
///
/// # Parameters
///
/// * `digits`   - The Lehmer code to decode.
/// * `elements` - The elements to permute. These are drained.
///
/// # Errors
///
/// Returns [`FactoradicError::IndexOutOfRange`] if a digit does not index into
/// the remaining elements, which can only happen if the sequence is not well
/// formed for the number of elements. The elements drained up to that point
/// are lost.
///
pub fn permutation_in_place<T>(digits: &[BigUint], elements: &mut Vec<T>) -> Result<Vec<T>, FactoradicError> {
	let count = elements.len();
	let zero  = BigUint::zero();
	let code  = iter::repeat(&zero)
		.take(count.saturating_sub(digits.len()))
		.chain(digits.iter().skip(digits.len().saturating_sub(count)))
	;
	let mut result = Vec::with_capacity(count);
	for digit in code {
		let remaining = elements.len();
		let index     = digit.to_usize()
			.filter(|&index| index < remaining)
			.ok_or_else(|| FactoradicError::IndexOutOfRange { index: digit.clone(), len: remaining })?
		;
		result.push(elements.remove(index));
	}
	Ok(result)
}

//		successor																
/// Returns the digit sequence representing the next value.
///
/// A sequence of fewer than two digits can only represent zero, so the result
/// in that case is `[1, 0]`. Otherwise one is added to the second-to-last
/// digit, which has a place value of `1! = 1`, and the result is normalised.
/// The input is left untouched.
///
/// # Parameters
///
/// * `digits` - The digit sequence to take the successor of.
///
#[must_use]
pub fn successor(digits: &[BigUint]) -> Vec<BigUint> {
	if digits.len() < 2 {
		return vec![BigUint::one(), BigUint::zero()];
	}
	let mut result = digits.to_vec();
	let pos        = result.len() - 2;
	result[pos]   += 1_u32;
	cascade_in_place(&mut result);
	result
}

//		to_digits																
/// Converts an integer into its canonical factoradic digits.
///
/// Zero is `[0]`, one is `[1, 0]`, and every other non-negative integer has
/// exactly one such representation. The result is always well formed.
///
/// # Parameters
///
/// * `value` - The integer to convert.
///
#[must_use]
pub fn to_digits(value: &BigUint) -> Vec<BigUint> {
	let mut remaining = value.clone();
	let mut radix     = BigUint::one();
	let mut digits    = Vec::new();
	
	//	Built least-significant first, then flipped
	while remaining >= radix {
		digits.push(&remaining % &radix);
		remaining /= &radix;
		radix     += 1_u32;
	}
	digits.push(remaining);
	digits.reverse();
	digits
}

//		to_value																
/// Evaluates a digit sequence as an integer.
///
/// This is the sum of each digit multiplied by the factorial of its place, and
/// is defined for any digit sequence, whether well formed or not. An empty
/// sequence evaluates to zero.
///
/// # Parameters
///
/// * `digits` - The digit sequence to evaluate.
///
#[must_use]
pub fn to_value(digits: &[BigUint]) -> BigUint {
	let len = digits.len();
	digits.iter().enumerate().fold(BigUint::zero(), |acc, (i, digit)| acc * (len - i) + digit)
}

//		trim_leading_zeros														
/// Strips redundant leading zeros from a digit sequence.
///
/// At least one digit is always kept, so a sequence of zeros trims to `[0]`.
/// Trimming does not affect the value, and a well-formed sequence remains
/// well formed.
///
#[must_use]
pub fn trim_leading_zeros(digits: &[BigUint]) -> &[BigUint] {
	let start = digits.iter()
		.position(|digit| !digit.is_zero())
		.unwrap_or_else(|| digits.len().saturating_sub(1))
	;
	&digits[start..]
}
