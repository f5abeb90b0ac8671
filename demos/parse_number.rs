//! Parses command-line arguments into numbers, showing each accessor.
//!
//! ```text
//! cargo run --example parse_number -- 123 abc
//! ```

use outcome_rail::prelude::*;

fn to_number(input: &str) -> Outcome<i64, ErrorObject> {
    match input.trim().parse() {
        Ok(n) => ok!(n).widen_err(),
        Err(_) => err!(ErrorObject::new(format!("Couldn't convert {input} to number"))).widen_ok(),
    }
}

fn main() {
    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = vec!["123".to_string(), "abc".to_string()];
    }

    for input in &inputs {
        to_number(input).and_consume(|n| println!("{input}: parsed {n}"));

        let value = to_number(input).or_fallback(100);
        println!("{input}: with fallback -> {value}");

        let recovered = to_number(input).or_recover(|e| {
            println!("{input}: recovering from \"{e}\"");
            -1
        });
        println!("{input}: recovered -> {recovered}");
    }

    // A failing first input aborts here with the error object as panic payload.
    let first = inputs[0].as_str();
    println!("{first}: thrown -> {}", to_number(first).throw());
}
