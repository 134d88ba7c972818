//! The factoradic number type.



//		Modules																											

#[cfg(test)]
#[path = "tests/factoradic.rs"]
mod tests;



//		Packages																										

use crate::{
	digits::{
		increment_by_in_place,
		is_well_formed,
		pad_to_length,
		parse_digit_string,
		permutation,
		permutation_in_place,
		successor,
		to_digits,
		to_value,
		trim_leading_zeros,
	},
	errors::FactoradicError,
	value::{describe, integer_of},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Display, Formatter, self},
	hash::{Hash, Hasher},
	str::FromStr,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, SeqAccess, Visitor},
	ser::SerializeSeq,
};
use serde_json::{Error as JsonError, Value};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs																											

//		Factoradic																
/// A non-negative integer of unbounded size, held in the factorial number
/// system.
///
/// Each digit has a place value of the factorial of its distance from the end
/// of the sequence, so `[3, 4, 1, 0, 1, 0]` is `3×5! + 4×4! + 1×3! + 0×2! +
/// 1×1! + 0×0! = 463`. Each digit must be less than its distance from the end,
/// which gives every non-negative integer exactly one representation, and
/// means the final digit is always zero.
///
/// # Lehmer codes
///
/// The main use of factoradics is as Lehmer codes: a factoradic of `n` digits
/// with a value in `[0, n!)` selects one specific permutation of `n` elements,
/// and every permutation has exactly one such code. See
/// [`permutation()`](Factoradic::permutation()) for the details, including how
/// a mismatch between the number of digits and the number of elements is
/// handled.
///
/// # Construction
///
/// Factoradics can be created from:
///
///   - Integers, using [`from_integer()`](Factoradic::from_integer()) or any of
///     the [`From`] and [`TryFrom`] implementations for the integer types and
///     [`BigUint`] and [`BigInt`].
///   - Digit sequences, using [`from_digits()`](Factoradic::from_digits()). The
///     digits are copied, and must be well formed.
///   - Digit strings such as `"341010"`, using
///     [`from_digit_string()`](Factoradic::from_digit_string()).
///   - The rendered form `"[3, 4, 1, 0, 1, 0]"`, using [`FromStr`].
///   - Untyped JSON values, using the [`TryFrom<&Value>`](Value)
///     implementation.
///
/// # Equality and ordering
///
/// Leading zeros do not change the value, and are ignored when comparing and
/// hashing, so `[0, 1, 0]` is equal to `[1, 0]`. Ordering follows the value.
///
/// # Mutation
///
/// The digits are owned by the factoradic and never shared with the caller.
/// The only operations that change a factoradic in place are
/// [`increment()`](Factoradic::increment()) and
/// [`increment_by()`](Factoradic::increment_by()), which leave it well formed
/// when they return.
///
#[derive(Clone)]
pub struct Factoradic(Vec<BigUint>);

//󰭅		Factoradic																
impl Factoradic {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`Factoradic`] with a value of zero, i.e. `[0]`.
	#[must_use]
	pub fn new() -> Self {
		Self(vec![BigUint::zero()])
	}
	
	//		from_digit_string													
	/// Creates a [`Factoradic`] from a string of single decimal digits, one per
	/// position.
	///
	/// # Parameters
	///
	/// * `s` - The digit string, e.g. `"341010"`.
	///
	/// # Errors
	///
	/// Returns an error if the string is empty or contains a character that is
	/// not a decimal digit, or if the digits are not well formed.
	///
	pub fn from_digit_string(s: &str) -> Result<Self, FactoradicError> {
		Self::from_vec(parse_digit_string(s)?)
	}
	
	//		from_digits															
	/// Creates a [`Factoradic`] from a sequence of digits, most significant
	/// first.
	///
	/// The digits are always copied into new storage. They must be well formed,
	/// i.e. each digit must be less than its distance from the end of the
	/// sequence, which includes the leading digit. Leading zeros are accepted
	/// and kept.
	///
	/// # Parameters
	///
	/// * `digits` - The digits.
	///
	/// # Errors
	///
	/// Returns [`FactoradicError::EmptyValue`] if there are no digits, and
	/// [`FactoradicError::MalformedSequence`] if they are not well formed.
	///
	pub fn from_digits<I, D>(digits: I) -> Result<Self, FactoradicError>
	where
		I: IntoIterator<Item = D>,
		D: Into<BigUint>,
	{
		Self::from_vec(digits.into_iter().map(Into::into).collect())
	}
	
	//		from_instance														
	/// Creates a [`Factoradic`] as a deep copy of another.
	///
	/// This is the same as [`Clone`], and is provided for symmetry with the
	/// other constructors.
	///
	#[must_use]
	pub fn from_instance(other: &Self) -> Self {
		other.clone()
	}
	
	//		from_integer														
	/// Creates a [`Factoradic`] from a non-negative integer.
	///
	/// # Parameters
	///
	/// * `value` - The integer. Anything that converts losslessly into a
	///             [`BigUint`] is accepted.
	///
	#[must_use]
	pub fn from_integer<T: Into<BigUint>>(value: T) -> Self {
		Self(to_digits(&value.into()))
	}
	
	//		Public methods														
	
	//		digits																
	/// The digits, most significant first, including any leading zeros.
	#[must_use]
	pub fn digits(&self) -> &[BigUint] {
		&self.0
	}
	
	//		from_json															
	/// Deserialises a JSON string into a [`Factoradic`].
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or does not describe a valid factoradic,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		increment															
	/// Increases the value by one, in place.
	pub fn increment(&mut self) {
		self.0 = successor(&self.0);
	}
	
	//		increment_by														
	/// Increases the value by the given amount, in place.
	///
	/// The amount is added straight onto the digits, without converting to an
	/// integer and back. Adding zero is a no-op.
	///
	/// # Parameters
	///
	/// * `delta` - The amount to add. Any integer type can be used, but the
	///             amount must not be negative.
	///
	/// # Errors
	///
	/// Returns [`FactoradicError::NegativeIncrement`] if the amount is
	/// negative, as decrementing is not supported. The value is left unchanged.
	///
	pub fn increment_by<T: Into<BigInt>>(&mut self, delta: T) -> Result<(), FactoradicError> {
		let delta = delta.into();
		if delta.sign() == Sign::Minus {
			return Err(FactoradicError::NegativeIncrement);
		}
		increment_by_in_place(&mut self.0, delta.magnitude());
		Ok(())
	}
	
	//		increment_by_value													
	/// Increases the value by an amount given as an untyped JSON value.
	///
	/// # Parameters
	///
	/// * `delta` - The amount to add, which must be a non-negative integer.
	///
	/// # Errors
	///
	/// Returns [`FactoradicError::InvalidIncrementType`] if the value is not an
	/// integer, and [`FactoradicError::NegativeIncrement`] if it is negative.
	///
	pub fn increment_by_value(&mut self, delta: &Value) -> Result<(), FactoradicError> {
		let amount = integer_of(delta).ok_or_else(|| FactoradicError::InvalidIncrementType(describe(delta)))?;
		self.increment_by(amount)
	}
	
	//		into_digits															
	/// Consumes the [`Factoradic`] and returns its digits.
	#[must_use]
	pub fn into_digits(self) -> Vec<BigUint> {
		self.0
	}
	
	//		is_well_formed														
	/// Determines whether the digits are well formed.
	///
	/// This is always the case for a [`Factoradic`], as every constructor and
	/// operation guarantees it, but it is provided as a check.
	///
	#[must_use]
	pub fn is_well_formed(&self) -> bool {
		is_well_formed(&self.0)
	}
	
	//		is_zero																
	/// Determines whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(Zero::is_zero)
	}
	
	//		len																	
	/// The number of digits, including any leading zeros. This is never zero.
	#[expect(clippy::len_without_is_empty, reason = "There is always at least one digit")]
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}
	
	//		padded_to_length													
	/// Returns a copy padded with leading zeros up to the given length.
	///
	/// The value is unchanged. If the factoradic already has at least that many
	/// digits, an identical copy is returned.
	///
	/// # Parameters
	///
	/// * `length` - The number of digits to pad to.
	///
	#[must_use]
	pub fn padded_to_length(&self, length: usize) -> Self {
		Self(pad_to_length(&self.0, length))
	}
	
	//		permutation															
	/// Returns the permutation of the given elements that this factoradic
	/// encodes as a Lehmer code.
	///
	/// Each digit in turn picks the element at that index among those not yet
	/// chosen. The elements are left untouched, and the permutation is built
	/// from clones of them.
	///
	/// When there are more digits than elements, only the last digits are used,
	/// one per element, so that the permutations cycle: with three elements,
	/// `6` (`[1, 0, 0, 0]`) gives the same permutation as `0` (`[0]`). When there
	/// are fewer digits than elements, the digits are padded with leading zeros.
	///
	/// Elements do not have to be distinct, but if they are not then the result
	/// is not a true permutation.
	///
	/// # Parameters
	///
	/// * `elements` - The elements to permute.
	///
	/// # Errors
	///
	/// As a [`Factoradic`] is always well formed, every digit that is used is
	/// within range, but [`FactoradicError::IndexOutOfRange`] is returned if
	/// that ever turns out not to be the case.
	///
	pub fn permutation<T: Clone>(&self, elements: &[T]) -> Result<Vec<T>, FactoradicError> {
		permutation(&self.0, elements)
	}
	
	//		permutation_in_place												
	/// Returns the permutation of the given elements that this factoradic
	/// encodes, moving the elements out of the supplied [`Vec`].
	///
	/// This avoids cloning the elements, but leaves the supplied [`Vec`]
	/// drained. Otherwise it behaves the same as
	/// [`permutation()`](Factoradic::permutation()).
	///
	/// # Parameters
	///
	/// * `elements` - The elements to permute. These are drained.
	///
	/// # Errors
	///
	/// See [`permutation()`](Factoradic::permutation()).
	///
	pub fn permutation_in_place<T>(&self, elements: &mut Vec<T>) -> Result<Vec<T>, FactoradicError> {
		permutation_in_place(&self.0, elements)
	}
	
	//		successor															
	/// Returns a new [`Factoradic`] with a value one higher.
	#[must_use]
	pub fn successor(&self) -> Self {
		Self(successor(&self.0))
	}
	
	//		to_biguint															
	/// Evaluates the value as a [`BigUint`].
	#[must_use]
	pub fn to_biguint(&self) -> BigUint {
		to_value(&self.0)
	}
	
	//		to_json																
	/// Serialises the [`Factoradic`] to a JSON string.
	///
	/// # Errors
	///
	/// Serialisation of a valid factoradic should not fail, but any error from
	/// the JSON serialiser is passed on.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		try_eq																
	/// Compares against an untyped JSON value.
	///
	/// The value is interpreted in the same way as when constructing from it,
	/// and the comparison is by value.
	///
	/// # Parameters
	///
	/// * `other` - The value to compare against.
	///
	/// # Errors
	///
	/// Returns [`FactoradicError::IncomparableType`] if the value does not
	/// describe a factoradic, rather than treating it as unequal.
	///
	pub fn try_eq(&self, other: &Value) -> Result<bool, FactoradicError> {
		match Self::try_from(other) {
			Ok(factoradic) => Ok(factoradic == *self),
			Err(_)         => Err(FactoradicError::IncomparableType(describe(other))),
		}
	}
	
	//		Private methods														
	
	//		from_vec															
	/// Takes ownership of a freshly-built digit vector after validating it.
	fn from_vec(digits: Vec<BigUint>) -> Result<Self, FactoradicError> {
		if digits.is_empty() {
			return Err(FactoradicError::EmptyValue);
		}
		if !is_well_formed(&digits) {
			return Err(FactoradicError::MalformedSequence);
		}
		Ok(Self(digits))
	}
	
	//		significant_digits													
	/// The digits without any leading zeros, which is the canonical form.
	fn significant_digits(&self) -> &[BigUint] {
		trim_leading_zeros(&self.0)
	}
}

//󰭅		Debug																	
impl Debug for Factoradic {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Factoradic({self})")?;
		
		//	For alternate formatting (#), show the value as well
		if f.alternate() {
			write!(f, " = {}", self.to_biguint())?;
		}
		
		Ok(())
	}
}

//󰭅		Default																	
impl Default for Factoradic {
	//		default																
	fn default() -> Self {
		Self::new()
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for Factoradic {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept numbers, strings, and lists
			deserializer.deserialize_any(FactoradicVisitor)
		} else {
			//	For binary formats, expect the big-endian bytes of the value
			deserializer.deserialize_bytes(FactoradicVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for Factoradic {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (i, digit) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{digit}")?;
		}
		write!(f, "]")
	}
}

//󰭅		Eq																		
impl Eq for Factoradic {}

//󰭅		From: u8 -> Factoradic													
impl From<u8> for Factoradic {
	//		from																
	fn from(v: u8) -> Self {
		Self::from_integer(v)
	}
}

//󰭅		From: u16 -> Factoradic													
impl From<u16> for Factoradic {
	//		from																
	fn from(v: u16) -> Self {
		Self::from_integer(v)
	}
}

//󰭅		From: u32 -> Factoradic													
impl From<u32> for Factoradic {
	//		from																
	fn from(v: u32) -> Self {
		Self::from_integer(v)
	}
}

//󰭅		From: u64 -> Factoradic													
impl From<u64> for Factoradic {
	//		from																
	fn from(v: u64) -> Self {
		Self::from_integer(v)
	}
}

//󰭅		From: u128 -> Factoradic												
impl From<u128> for Factoradic {
	//		from																
	fn from(v: u128) -> Self {
		Self::from_integer(v)
	}
}

//󰭅		From: usize -> Factoradic												
impl From<usize> for Factoradic {
	//		from																
	fn from(v: usize) -> Self {
		Self::from_integer(v)
	}
}

//󰭅		From: BigUint -> Factoradic												
impl From<BigUint> for Factoradic {
	//		from																
	fn from(v: BigUint) -> Self {
		Self(to_digits(&v))
	}
}

//󰭅		From: Factoradic -> BigUint												
impl From<Factoradic> for BigUint {
	//		from																
	fn from(v: Factoradic) -> Self {
		v.to_biguint()
	}
}

//󰭅		From: &Factoradic -> BigUint											
impl From<&Factoradic> for BigUint {
	//		from																
	fn from(v: &Factoradic) -> Self {
		v.to_biguint()
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for Factoradic {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2                  => Ok(Self::try_from(i16::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::INT4                  => Ok(Self::try_from(i32::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::INT8                  => Ok(Self::try_from(i64::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::TEXT | &Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>().map_err(Box::new)?),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Factoradic: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr																	
impl FromStr for Factoradic {
	type Err = FactoradicError;
	
	//		from_str															
	/// Parses either the rendered list form, e.g. `"[3, 4, 1, 0, 1, 0]"`, or a
	/// compact digit string, e.g. `"341010"`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		
		if trimmed.is_empty() {
			return Err(FactoradicError::EmptyValue);
		}
		
		//	Without brackets, expect one character per digit
		let Some(inner) = trimmed.strip_prefix('[') else {
			return Self::from_digit_string(trimmed);
		};
		let list = inner.strip_suffix(']').ok_or(FactoradicError::UnterminatedList)?;
		if list.trim().is_empty() {
			return Err(FactoradicError::EmptyValue);
		}
		
		let mut digits = Vec::new();
		for item in list.split(',').map(str::trim) {
			if let Some(c) = item.chars().find(|c| !c.is_ascii_digit()) {
				return Err(FactoradicError::InvalidDigit(c));
			}
			digits.push(BigUint::parse_bytes(item.as_bytes(), 10).ok_or(FactoradicError::EmptyValue)?);
		}
		Self::from_vec(digits)
	}
}

//󰭅		Hash																	
impl Hash for Factoradic {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.significant_digits().hash(state);
	}
}

//󰭅		Ord																		
impl Ord for Factoradic {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		//	Canonical digits of a longer sequence always denote a larger value
		let (lhs, rhs) = (self.significant_digits(), other.significant_digits());
		lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
	}
}

//󰭅		PartialEq																
impl PartialEq for Factoradic {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.significant_digits() == other.significant_digits()
	}
}

//󰭅		PartialOrd																
impl PartialOrd for Factoradic {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Serialize																
impl Serialize for Factoradic {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise the list of digits
			let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
			for digit in &self.0 {
				match digit.to_u64() {
					Some(small) => seq.serialize_element(&small)?,
					None        => seq.serialize_element(&digit.to_string())?,
				}
			}
			seq.end()
		} else {
			//	For binary formats, serialise the value as big-endian bytes
			serializer.serialize_bytes(&self.to_biguint().to_bytes_be())
		}
	}
}

//󰭅		ToSql																	
impl ToSql for Factoradic {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		let value = self.to_biguint();
		match ty {
			&Type::INT2                  => value.to_i16().ok_or(FactoradicError::ValueTooLarge)?.to_sql(ty, out),
			&Type::INT4                  => value.to_i32().ok_or(FactoradicError::ValueTooLarge)?.to_sql(ty, out),
			&Type::INT8                  => value.to_i64().ok_or(FactoradicError::ValueTooLarge)?.to_sql(ty, out),
			&Type::TEXT | &Type::VARCHAR => self.to_string().to_sql(ty, out),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Factoradic: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: i8 -> Factoradic												
impl TryFrom<i8> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: i8) -> Result<Self, Self::Error> {
		(v >= 0).then(|| Self::from_integer(v.unsigned_abs())).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: i16 -> Factoradic												
impl TryFrom<i16> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: i16) -> Result<Self, Self::Error> {
		(v >= 0).then(|| Self::from_integer(v.unsigned_abs())).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: i32 -> Factoradic												
impl TryFrom<i32> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: i32) -> Result<Self, Self::Error> {
		(v >= 0).then(|| Self::from_integer(v.unsigned_abs())).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: i64 -> Factoradic												
impl TryFrom<i64> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: i64) -> Result<Self, Self::Error> {
		(v >= 0).then(|| Self::from_integer(v.unsigned_abs())).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: i128 -> Factoradic												
impl TryFrom<i128> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: i128) -> Result<Self, Self::Error> {
		(v >= 0).then(|| Self::from_integer(v.unsigned_abs())).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: isize -> Factoradic											
impl TryFrom<isize> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: isize) -> Result<Self, Self::Error> {
		(v >= 0).then(|| Self::from_integer(v.unsigned_abs())).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: BigInt -> Factoradic											
impl TryFrom<BigInt> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		v.to_biguint().map(Self::from_integer).ok_or(FactoradicError::ValueIsNegative)
	}
}

//󰭅		TryFrom: Factoradic -> i64												
impl TryFrom<Factoradic> for i64 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_i64().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> i128												
impl TryFrom<Factoradic> for i128 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_i128().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> u8												
impl TryFrom<Factoradic> for u8 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_u8().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> u16												
impl TryFrom<Factoradic> for u16 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_u16().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> u32												
impl TryFrom<Factoradic> for u32 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_u32().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> u64												
impl TryFrom<Factoradic> for u64 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_u64().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> u128												
impl TryFrom<Factoradic> for u128 {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_u128().ok_or(FactoradicError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Factoradic -> usize											
impl TryFrom<Factoradic> for usize {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(v: Factoradic) -> Result<Self, Self::Error> {
		v.to_biguint().to_usize().ok_or(FactoradicError::ValueTooLarge)
	}
}



//		Visitors																										

//		DigitVisitor															
/// A visitor for parsing single digits, which may be numbers or decimal
/// strings.
struct DigitVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for DigitVisitor {
	type Value = BigUint;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a non-negative integer digit")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		(v >= 0).then(|| BigUint::from(v.unsigned_abs())).ok_or_else(|| E::custom(FactoradicError::ValueIsNegative))
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigUint::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if let Some(c) = v.chars().find(|c| !c.is_ascii_digit()) {
			return Err(E::custom(FactoradicError::InvalidDigit(c)));
		}
		BigUint::parse_bytes(v.as_bytes(), 10).ok_or_else(|| E::custom(FactoradicError::EmptyValue))
	}
}

//		Digit																	
/// A single digit inside a serialised digit list.
struct Digit(BigUint);

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for Digit {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(DigitVisitor).map(Digit)
	}
}

//		FactoradicVisitor														
/// A visitor for parsing factoradics from integers, strings, digit lists, and
/// bytes.
struct FactoradicVisitor;

//󰭅		Visitor																	
impl<'de> Visitor<'de> for FactoradicVisitor {
	type Value = Factoradic;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a non-negative integer, a digit string, or a list of digits")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Factoradic::try_from(v).map_err(E::custom)
	}
	
	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Factoradic::try_from(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Factoradic::from(v))
	}
	
	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Factoradic::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
	
	//		visit_seq															
	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut digits = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(Digit(digit)) = seq.next_element()? {
			digits.push(digit);
		}
		Factoradic::from_vec(digits).map_err(SerdeError::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Factoradic::from(BigUint::from_bytes_be(v)))
	}
}
