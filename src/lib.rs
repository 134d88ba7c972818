//! The Factoradic crate provides non-negative integers of unbounded size in the
//! factorial number system, and their use as Lehmer codes for selecting
//! permutations.
//!
//! The main type is [`Factoradic`], which keeps its digits well formed at all
//! times. The algorithms it is built on are also available as free functions
//! over plain digit vectors in the [`digits`] module.
//!
//! # Example
//!
//! ```
//! use factoradic::Factoradic;
//!
//! let code = Factoradic::from(463_u32);
//! assert_eq!(code.to_string(), "[3, 4, 1, 0, 1, 0]");
//!
//! let perm = code.permutation(&['a', 'b', 'c', 'd', 'e', 'f']).unwrap();
//! assert_eq!(perm, vec!['d', 'f', 'b', 'a', 'e', 'c']);
//! ```
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

pub mod digits;
mod errors;
mod factoradic;
mod value;



//		Packages

pub use errors::FactoradicError;
pub use factoradic::Factoradic;
pub use num_bigint::BigUint;
