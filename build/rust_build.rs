/**
 * Compiles resources/countries.txt and resources/common_names.txt into a
 * static Rust module that is included by src/generated.
 */

use std::{collections::HashSet, env, fmt::Write as _, fs::{self, File}, io::{BufRead, BufReader}, path::Path};

use thiserror::Error;

const COUNTRIES_PATH: &str = "resources/countries.txt";
const COMMON_NAMES_PATH: &str = "resources/common_names.txt";
const GENERATED_FILE: &str = "directory_gen.rs";

/// First code point of the regional indicator symbols (U+1F1E6 is `A`).
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("OUT_DIR is not set: {0}")]
    OutDir(#[from] env::VarError),

    #[error("{file}:{line_num}: expected {expected}")]
    MalformedLine { file: &'static str, line_num: usize, expected: &'static str },

    #[error("{file}:{line_num}: '{code}' is not a two-letter upper-case ISO code")]
    InvalidIsoCode { file: &'static str, line_num: usize, code: String },

    #[error("{file}:{line_num}: '{dial_code}' is not a '+' followed by digits")]
    InvalidDialCode { file: &'static str, line_num: usize, dial_code: String },

    #[error("{file}:{line_num}: ISO code '{code}' is listed twice")]
    DuplicateIsoCode { file: &'static str, line_num: usize, code: String },

    #[error("{file}:{line_num}: aliases given for unknown ISO code '{code}'")]
    DanglingAlias { file: &'static str, line_num: usize, code: String },

    #[error("{0} does not contain any country")]
    EmptyDirectory(&'static str),
}

struct CountryEntry {
    iso2: String,
    dial_code: String,
    name: String,
}

struct CommonNamesEntry {
    iso2: String,
    aliases: Vec<String>,
}

/// Calls `handle_line` for every meaningful line of the file with its
/// 1-based line number. Blank lines and `#` comments are skipped.
fn for_each_data_line(
    path: &str,
    mut handle_line: impl FnMut(usize, &str) -> Result<(), BuildError>,
) -> Result<(), BuildError> {
    let input = File::open(path)?;
    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(256);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        handle_line(line_number, line)?;
    }

    Ok(())
}

fn is_valid_iso_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_valid_dial_code(dial_code: &str) -> bool {
    dial_code
        .strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_countries(path: &'static str) -> Result<Vec<CountryEntry>, BuildError> {
    let mut countries = Vec::with_capacity(256);
    let mut seen = HashSet::new();

    for_each_data_line(path, |line_num, line| {
        let mut fields = line.splitn(3, '|');
        let (Some(iso2), Some(dial_code), Some(name)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(BuildError::MalformedLine { file: path, line_num, expected: "ISO2|+dial code|Name" });
        };
        let (iso2, dial_code, name) = (iso2.trim(), dial_code.trim(), name.trim());

        if !is_valid_iso_code(iso2) {
            return Err(BuildError::InvalidIsoCode { file: path, line_num, code: iso2.to_string() });
        }
        if !is_valid_dial_code(dial_code) {
            return Err(BuildError::InvalidDialCode { file: path, line_num, dial_code: dial_code.to_string() });
        }
        if name.is_empty() {
            return Err(BuildError::MalformedLine { file: path, line_num, expected: "a non-empty country name" });
        }
        if !seen.insert(iso2.to_string()) {
            return Err(BuildError::DuplicateIsoCode { file: path, line_num, code: iso2.to_string() });
        }

        countries.push(CountryEntry {
            iso2: iso2.to_string(),
            dial_code: dial_code.to_string(),
            name: name.to_string(),
        });
        Ok(())
    })?;

    if countries.is_empty() {
        return Err(BuildError::EmptyDirectory(path));
    }
    Ok(countries)
}

fn parse_common_names(
    path: &'static str,
    countries: &[CountryEntry],
) -> Result<Vec<CommonNamesEntry>, BuildError> {
    let known: HashSet<&str> = countries.iter().map(|c| c.iso2.as_str()).collect();
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for_each_data_line(path, |line_num, line| {
        let Some((iso2, aliases)) = line.split_once('|') else {
            return Err(BuildError::MalformedLine { file: path, line_num, expected: "ISO2|alias;alias" });
        };
        let iso2 = iso2.trim();
        if !is_valid_iso_code(iso2) {
            return Err(BuildError::InvalidIsoCode { file: path, line_num, code: iso2.to_string() });
        }
        if !known.contains(iso2) {
            return Err(BuildError::DanglingAlias { file: path, line_num, code: iso2.to_string() });
        }
        if !seen.insert(iso2.to_string()) {
            return Err(BuildError::DuplicateIsoCode { file: path, line_num, code: iso2.to_string() });
        }

        let aliases = aliases
            .split(';')
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .map(str::to_string)
            .collect();
        entries.push(CommonNamesEntry { iso2: iso2.to_string(), aliases });
        Ok(())
    })?;

    Ok(entries)
}

/// Builds the flag emoji from the two regional indicator symbols of the code.
fn flag_for_iso_code(iso2: &str) -> String {
    iso2.bytes()
        .filter_map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
        .collect()
}

fn render_module(countries: &[CountryEntry], common_names: &[CommonNamesEntry]) -> String {
    let mut out = String::with_capacity(countries.len() * 80 + common_names.len() * 80);

    // `{:?}` of a str is a valid, escaped Rust string literal.
    out.push_str("// @generated by build/rust_build.rs, do not edit.\n\n");
    out.push_str("pub static COUNTRIES: &[Country] = &[\n");
    for country in countries {
        let _ = writeln!(
            out,
            "    Country::new({:?}, {:?}, {:?}, {:?}),",
            country.name,
            country.iso2,
            country.dial_code,
            flag_for_iso_code(&country.iso2),
        );
    }
    out.push_str("];\n\n");

    out.push_str("pub static COMMON_NAMES: &[(&str, &[&str])] = &[\n");
    for entry in common_names {
        let _ = writeln!(out, "    ({:?}, &{:?}),", entry.iso2, entry.aliases);
    }
    out.push_str("];\n");
    out
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", COUNTRIES_PATH);
    println!("cargo:rerun-if-changed={}", COMMON_NAMES_PATH);

    let countries = parse_countries(COUNTRIES_PATH)?;
    let common_names = parse_common_names(COMMON_NAMES_PATH, &countries)?;

    let out_dir = env::var("OUT_DIR")?;
    let dest = Path::new(&out_dir).join(GENERATED_FILE);
    fs::write(dest, render_module(&countries, &common_names))?;
    Ok(())
}
