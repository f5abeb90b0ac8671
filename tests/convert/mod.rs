use outcome_rail::convert::*;
use outcome_rail::traits::OutcomeOps;
use outcome_rail::{Outcome, DEFAULT_MESSAGE};

#[test]
fn result_and_outcome_convert_both_ways() {
    let ok: Result<u8, &str> = Ok(1);
    let failed: Result<u8, &str> = Err("bad");

    assert_eq!(Outcome::from(ok), Outcome::Success(1));
    assert_eq!(failed.into_outcome(), Outcome::Failure("bad"));

    let back: Result<u8, &str> = Outcome::Failure("bad").into();
    assert_eq!(back, Err("bad"));
    assert_eq!(outcome_to_result(Outcome::<u8, &str>::Success(2)), Ok(2));
}

#[test]
fn outcome_works_with_question_mark_through_result() {
    fn double(input: &str) -> Result<i32, std::num::ParseIntError> {
        let parsed: Outcome<i32, _> = input.parse::<i32>().into();
        let n = parsed.into_result()?;
        Ok(n * 2)
    }

    assert_eq!(double("21"), Ok(42));
    assert!(double("x").is_err());
}

#[test]
fn option_converts_to_absent_failure() {
    assert_eq!(option_to_outcome(Some("v")), Outcome::Success("v"));

    let missing: Outcome<&str, ()> = None.into();
    assert_eq!(missing, Outcome::Failure(()));
}

#[test]
#[should_panic(expected = "There was an error! No specific error message was provided.")]
fn missing_option_throws_default_message() {
    let missing: Outcome<u8, ()> = option_to_outcome(None);
    missing.throw();
}

#[test]
fn result_to_outcome_keeps_error_value() {
    let outcome = result_to_outcome::<(), String>(Err(DEFAULT_MESSAGE.to_string()));
    assert_eq!(outcome.error().map(String::as_str), Some(DEFAULT_MESSAGE));
}
