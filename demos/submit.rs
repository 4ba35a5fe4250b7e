//! The imperative shell around the validation core.
//!
//! Reads one submission as JSON from stdin, validates it, and prints what a
//! page would show: the summary line, then one line per failed rule.
//!
//! Run with:
//! echo '{"kind":"registration","fields":{"name":"A","age":"200"}}' \
//!   | cargo run --example submit --features serde,tracing

use std::io::{self, Read};
use std::process::ExitCode;

use bikeform::{FormFields, FormKind, FormValidator};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Submission {
    kind: FormKind,
    #[serde(default)]
    fields: FormFields,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        tracing::error!("could not read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let submission: Submission = match serde_json::from_str(&input) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("malformed submission: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = FormValidator::new().validate(submission.kind, &submission.fields);

    println!("{}", result.summary(submission.kind));
    for failure in &result.failures {
        println!("  - {}", failure.message);
    }

    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
