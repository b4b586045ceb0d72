use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LexiconData {
    given_names: Vec<String>,
    surnames: Vec<String>,
    compound_surnames: Vec<String>,
    surname_connectives: Vec<String>,
}

#[derive(Deserialize)]
struct CurpData {
    states: BTreeMap<String, String>,
    forbidden_initials: Vec<String>,
    ignorable_given_names: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/lexicon_data.json")?;
    let lexicon: LexiconData = serde_json::from_str(&json)?;
    write_set(&output.join("given_names.rs"), &lexicon.given_names)?;
    let mut surnames = lexicon.surnames.clone();
    surnames.extend_from_slice(&lexicon.compound_surnames);
    write_set(&output.join("surnames.rs"), &surnames)?;
    write_set(
        &output.join("surname_connectives.rs"),
        &lexicon.surname_connectives,
    )?;

    let json = read_file(&input, "build/curp_data.json")?;
    let curp: CurpData = serde_json::from_str(&json)?;
    if curp.states.len() != 33 {
        return Err(format!("expected 33 state codes, found {}", curp.states.len()).into());
    }
    write_map(&output.join("states.rs"), &curp.states, |v| {
        format!("\"{}\"", v)
    })?;
    write_set(
        &output.join("forbidden_initials.rs"),
        &curp.forbidden_initials,
    )?;
    write_set(
        &output.join("ignorable_given_names.rs"),
        &curp.ignorable_given_names,
    )?;

    Ok(())
}

fn write_map<'a, F>(output: &Path, map: &'a BTreeMap<String, String>, transform: F) -> Result<()>
where
    F: Fn(&'a String) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.as_str(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

// phf_codegen panics on duplicate keys, and the source lists are
// hand-maintained, so dedupe while preserving order.
fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut builder = phf_codegen::Set::new();
    for v in set {
        if seen.insert(v.as_str()) {
            builder.entry(v.as_str());
        }
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
