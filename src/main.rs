use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

use curp::{FieldKind, PersonalData};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[rustfmt::skip]
const USAGE: &str = "
Usage:
    curp generate <paterno> <materno> <nombre> <DD/MM/AAAA> <sexo> <estado>
    curp validate <curp>
    curp validate -
    curp check (nombre|apellido) <texto>...

With the `generate` command, curp will derive a code from the given fields and
print it as JSON together with its validation, exiting with status 0 on
success and status 1 if any field is rejected. Use an empty argument ('') for a
missing maternal surname.

With the `validate` command, it will check the structure of a code, exiting
with status 0 if it is valid and status 1 otherwise. If `-` is the argument, it
will expect newline-separated codes from stdin and print one JSON line each.

With the `check` command, it will spell-check a given name or surname and print
any suggestions, exiting with status 0 if the text is recognized.

Set RUST_LOG (e.g. RUST_LOG=curp=debug) to log to stderr.
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() == 8 && args[1] == "generate" {
        generate_mode(&args[2..]);
    } else if args.len() == 3 && args[1] == "validate" {
        validate_mode(&args[2]);
    } else if args.len() > 3 && args[1] == "check" {
        check_mode(&args[2], &args[3..]);
    } else {
        writeln!(&mut io::stderr(), "{}", USAGE).ok();
        process::exit(64);
    }
}

fn generate_mode(fields: &[String]) {
    let data = PersonalData::new(
        &fields[0], &fields[1], &fields[2], &fields[3], &fields[4], &fields[5],
    );

    match curp::generate_curp(&data) {
        Ok(code) => {
            let validation = curp::validate_curp(&code);
            println!(
                "{}",
                json!({
                    "success": true,
                    "curp": code,
                    "validacion": validation.to_value(),
                })
            );
        }
        Err(e) => {
            println!("{}", json!({ "success": false, "error": e.to_string() }));
            process::exit(1);
        }
    }
}

fn validate_mode(arg: &str) {
    if arg == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };
            if input.trim().is_empty() {
                continue;
            }

            let result = curp::validate_curp(&input);
            if writeln!(&mut io::stdout(), "{}", result.to_json()).is_err() {
                break;
            }
        }
    } else {
        let result = curp::validate_curp(arg);
        println!("{}", result.to_json());
        if !result.valid {
            process::exit(1);
        }
    }
}

fn check_mode(kind: &str, words: &[String]) {
    let kind: FieldKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            writeln!(&mut io::stderr(), "{}\n{}", e, USAGE).ok();
            process::exit(64);
        }
    };

    let result = curp::validate_field(&words.join(" "), kind);
    println!("{}", result.to_json());
    if !result.valid {
        process::exit(1);
    }
}
