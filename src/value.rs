//! Conversions from untyped JSON values.
//!
//! Factoradics are normally built with the typed constructors, but values that
//! arrive without a fixed type, e.g. from JSON payloads or configuration, need
//! to be dispatched on their kind at runtime. The rules are:
//!
//!   - `null` is zero.
//!   - A non-negative integer is converted directly. A negative integer is
//!     rejected as negative, and a floating-point number as unsupported.
//!   - A string is read as a digit string, one decimal digit per position, e.g.
//!     `"341010"`.
//!   - An array is read as a list of digits. Each item must be a non-negative
//!     integer, or a string of decimal digits for digits too large for a
//!     number.
//!   - Booleans and objects are not supported.
//!



//		Modules																											

#[cfg(test)]
#[path = "tests/value.rs"]
mod tests;



//		Packages																										

use crate::{errors::FactoradicError, factoradic::Factoradic};
use num_bigint::{BigInt, BigUint};
use serde_json::{Number, Value};



//		Functions																										

//		describe																
/// Describes the kind of a JSON value, for use in error messages.
pub(crate) fn describe(value: &Value) -> String {
	let kind = match *value {
		Value::Null                           => "null",
		Value::Bool(_)                        => "a boolean",
		Value::Number(ref n) if is_integer(n) => "an integer",
		Value::Number(_)                      => "a floating-point number",
		Value::String(_)                      => "a string",
		Value::Array(_)                       => "an array",
		Value::Object(_)                      => "an object",
	};
	kind.to_owned()
}

//		digit_of																
/// Interprets a single item of a digit list.
fn digit_of(item: &Value) -> Result<BigUint, FactoradicError> {
	match *item {
		Value::Number(ref n) => {
			if let Some(digit) = n.as_u64() {
				Ok(BigUint::from(digit))
			} else if n.as_i64().is_some() {
				Err(FactoradicError::ValueIsNegative)
			} else {
				Err(FactoradicError::UnsupportedValueType(describe(item)))
			}
		},
		Value::String(ref s) => {
			if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
				return Err(FactoradicError::InvalidDigit(c));
			}
			BigUint::parse_bytes(s.as_bytes(), 10).ok_or(FactoradicError::EmptyValue)
		},
		Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
			Err(FactoradicError::UnsupportedValueType(describe(item)))
		},
	}
}

//		integer_of																
/// Extracts an integer from a JSON value, if it holds one.
///
/// Floating-point numbers are not integers, even when they have no fractional
/// part, and neither are strings of digits.
///
pub(crate) fn integer_of(value: &Value) -> Option<BigInt> {
	match *value {
		Value::Number(ref n) => n.as_u64().map(BigInt::from).or_else(|| n.as_i64().map(BigInt::from)),
		Value::Null | Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => None,
	}
}

//		is_integer																
/// Determines whether a JSON number is an integer.
fn is_integer(n: &Number) -> bool {
	n.is_u64() || n.is_i64()
}



//		Implementations																									

//󰭅		TryFrom: &Value -> Factoradic											
impl TryFrom<&Value> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		match *value {
			Value::Null                       => Ok(Self::new()),
			Value::Number(ref n)              => {
				if let Some(v) = n.as_u64() {
					Ok(Self::from(v))
				} else if let Some(v) = n.as_i64() {
					Self::try_from(v)
				} else {
					Err(FactoradicError::UnsupportedValueType(describe(value)))
				}
			},
			Value::String(ref s)              => Self::from_digit_string(s),
			Value::Array(ref items)           => {
				Self::from_digits(items.iter().map(digit_of).collect::<Result<Vec<_>, _>>()?)
			},
			Value::Bool(_) | Value::Object(_) => Err(FactoradicError::UnsupportedValueType(describe(value))),
		}
	}
}

//󰭅		TryFrom: Value -> Factoradic											
impl TryFrom<Value> for Factoradic {
	type Error = FactoradicError;
	
	//		try_from															
	fn try_from(value: Value) -> Result<Self, Self::Error> {
		Self::try_from(&value)
	}
}
