//! Contains error types used throughout the library.



//		Packages																										

use num_bigint::BigUint;
use thiserror::Error as ThisError;



//		Enums																											

//		FactoradicError															
/// Represents all possible errors that can occur when building, converting,
/// incrementing, or decoding factoradics.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum FactoradicError {
	/// The incoming value is empty, e.g. an empty digit sequence or string.
	#[error("Empty value")]
	EmptyValue,
	
	/// Comparison against a value that cannot denote a factoradic. The
	/// description of the offending value's kind is included.
	#[error("Cannot compare a factoradic with {0}")]
	IncomparableType(String),
	
	/// A digit used during permutation decoding does not index into the
	/// elements that remain at that step.
	#[error("Index {index} out of range for {len} remaining elements")]
	IndexOutOfRange {
		/// The offending digit.
		index: BigUint,
		
		/// The number of elements that remained.
		len:   usize,
	},
	
	/// A digit string or rendered digit list contains an invalid character.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// Incrementing by a value that is not an integer. The description of the
	/// offending value's kind is included.
	#[error("Increment must be an integer, not {0}")]
	InvalidIncrementType(String),
	
	/// The digit sequence violates the factoradic bound, where each digit
	/// must be less than its distance from the end of the sequence.
	#[error("Digit sequence is not well formed")]
	MalformedSequence,
	
	/// Incrementing by a negative amount. Decrement is not supported.
	#[error("Increment is negative")]
	NegativeIncrement,
	
	/// The incoming value is of a kind that cannot be turned into a factoradic.
	/// The description of the offending value's kind is included.
	#[error("Unsupported value type: {0}")]
	UnsupportedValueType(String),
	
	/// A rendered digit list opens with `[` but has no closing `]`.
	#[error("Digit list is not terminated")]
	UnterminatedList,
	
	/// The incoming value is negative, which cannot be represented.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
