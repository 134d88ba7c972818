//		Packages

use super::*;
use claims::{assert_err_eq, assert_none, assert_ok_eq, assert_some_eq};
use rubedo::sugar::s;
use serde_json::json;



//		Tests

mod functions {
	use super::*;
	
	//		describe															
	#[test]
	fn describe__all_kinds() {
		assert_eq!(describe(&json!(null)),    "null");
		assert_eq!(describe(&json!(false)),   "a boolean");
		assert_eq!(describe(&json!(42)),      "an integer");
		assert_eq!(describe(&json!(-42)),     "an integer");
		assert_eq!(describe(&json!(4.2)),     "a floating-point number");
		assert_eq!(describe(&json!("42")),    "a string");
		assert_eq!(describe(&json!([4, 2])),  "an array");
		assert_eq!(describe(&json!({"a": 1})), "an object");
	}
	
	//		digit_of															
	#[test]
	fn digit_of__number() {
		assert_ok_eq!(digit_of(&json!(0)),        BigUint::from(0_u8));
		assert_ok_eq!(digit_of(&json!(u64::MAX)), BigUint::from(u64::MAX));
	}
	#[test]
	fn digit_of__string() {
		assert_ok_eq!(digit_of(&json!("7")), BigUint::from(7_u8));
		assert_ok_eq!(
			digit_of(&json!("340282366920938463463374607431768211456")),
			BigUint::from(u128::MAX) + 1_u8
		);
	}
	#[test]
	fn digit_of__invalid() {
		assert_err_eq!(digit_of(&json!(-1)),   FactoradicError::ValueIsNegative);
		assert_err_eq!(digit_of(&json!(1.5)),  FactoradicError::UnsupportedValueType(s!("a floating-point number")));
		assert_err_eq!(digit_of(&json!("1a")), FactoradicError::InvalidDigit('a'));
		assert_err_eq!(digit_of(&json!("")),   FactoradicError::EmptyValue);
		assert_err_eq!(digit_of(&json!(null)), FactoradicError::UnsupportedValueType(s!("null")));
		assert_err_eq!(digit_of(&json!([1])),  FactoradicError::UnsupportedValueType(s!("an array")));
	}
	
	//		integer_of															
	#[test]
	fn integer_of__integers() {
		assert_some_eq!(integer_of(&json!(42)),       BigInt::from(42));
		assert_some_eq!(integer_of(&json!(-42)),      BigInt::from(-42));
		assert_some_eq!(integer_of(&json!(u64::MAX)), BigInt::from(u64::MAX));
	}
	#[test]
	fn integer_of__not_integers() {
		assert_none!(integer_of(&json!(4.0)));
		assert_none!(integer_of(&json!("42")));
		assert_none!(integer_of(&json!(null)));
		assert_none!(integer_of(&json!(true)));
		assert_none!(integer_of(&json!([42])));
	}
}

mod conversions {
	use super::*;
	
	//		TryFrom: &Value -> Factoradic										
	#[test]
	fn try_from__null() {
		assert_ok_eq!(Factoradic::try_from(&json!(null)), Factoradic::new());
	}
	#[test]
	fn try_from__integer() {
		assert_ok_eq!(Factoradic::try_from(&json!(463)),      Factoradic::from(463_u16));
		assert_ok_eq!(Factoradic::try_from(&json!(0)),        Factoradic::new());
		assert_ok_eq!(Factoradic::try_from(&json!(u64::MAX)), Factoradic::from(u64::MAX));
	}
	#[test]
	fn try_from__negative() {
		assert_err_eq!(Factoradic::try_from(&json!(-1)), FactoradicError::ValueIsNegative);
	}
	#[test]
	fn try_from__float() {
		assert_err_eq!(Factoradic::try_from(&json!(1.0)), FactoradicError::UnsupportedValueType(s!("a floating-point number")));
	}
	#[test]
	fn try_from__digit_string() {
		assert_ok_eq!(Factoradic::try_from(&json!("341010")), Factoradic::from(463_u16));
		assert_err_eq!(Factoradic::try_from(&json!("3x")),    FactoradicError::InvalidDigit('x'));
		assert_err_eq!(Factoradic::try_from(&json!("20")),    FactoradicError::MalformedSequence);
		assert_err_eq!(Factoradic::try_from(&json!("")),      FactoradicError::EmptyValue);
	}
	#[test]
	fn try_from__array() {
		assert_ok_eq!(Factoradic::try_from(&json!([3, 4, 1, 0, 1, 0])),     Factoradic::from(463_u16));
		assert_ok_eq!(Factoradic::try_from(&json!(["3", 4, "1", 0, 1, 0])), Factoradic::from(463_u16));
		assert_ok_eq!(Factoradic::try_from(&json!([0, 0, 1, 0])),           Factoradic::from(1_u8));
	}
	#[test]
	fn try_from__array_invalid() {
		assert_err_eq!(Factoradic::try_from(&json!([])),         FactoradicError::EmptyValue);
		assert_err_eq!(Factoradic::try_from(&json!([2, 0])),     FactoradicError::MalformedSequence);
		assert_err_eq!(Factoradic::try_from(&json!([1, -1])),    FactoradicError::ValueIsNegative);
		assert_err_eq!(Factoradic::try_from(&json!([1.0, 0])),   FactoradicError::UnsupportedValueType(s!("a floating-point number")));
		assert_err_eq!(Factoradic::try_from(&json!([[1], 0])),   FactoradicError::UnsupportedValueType(s!("an array")));
		assert_err_eq!(Factoradic::try_from(&json!([true, 0])), FactoradicError::UnsupportedValueType(s!("a boolean")));
	}
	#[test]
	fn try_from__unsupported() {
		assert_err_eq!(Factoradic::try_from(&json!(true)),     FactoradicError::UnsupportedValueType(s!("a boolean")));
		assert_err_eq!(Factoradic::try_from(&json!({"a": 1})), FactoradicError::UnsupportedValueType(s!("an object")));
	}
	
	//		TryFrom: Value -> Factoradic										
	#[test]
	fn try_from__owned() {
		assert_ok_eq!(Factoradic::try_from(json!(463)),          Factoradic::from(463_u16));
		assert_ok_eq!(Factoradic::try_from(json!([2, 1, 0])),    Factoradic::from(5_u8));
		assert_err_eq!(Factoradic::try_from(json!("nope")),      FactoradicError::InvalidDigit('n'));
	}
}
