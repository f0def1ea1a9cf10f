use std::fs;

use toml::{Table, Value};

// Keys `Config` reads from each section, with the TOML type it expects.
const SCHEMA: &[(&str, &[(&str, &str)])] = &[
    (
        "html",
        &[
            ("wrapper_class", "string"),
            ("quote_class", "string"),
            ("code_class", "string"),
        ],
    ),
    (
        "template",
        &[("truncate_at", "integer"), ("empty_preview", "string")],
    ),
];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table = match content.parse::<Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    if let Err(e) = check_schema(&table) {
        panic!("Invalid default_config.toml: {}", e);
    }
}

fn check_schema(table: &Table) -> Result<(), String> {
    for (name, value) in table {
        let Some((_, keys)) = SCHEMA.iter().find(|(section, _)| *section == name.as_str()) else {
            return Err(format!("unknown section [{name}]"));
        };
        let Value::Table(section) = value else {
            return Err(format!("[{name}] must be a table"));
        };

        for (key, value) in section {
            let Some((_, expected)) = keys.iter().find(|(k, _)| *k == key.as_str()) else {
                return Err(format!("unknown key {name}.{key}"));
            };
            let ok = match *expected {
                "string" => value.is_str(),
                "integer" => value.as_integer().is_some_and(|n| n >= 0),
                _ => false,
            };
            if !ok {
                return Err(format!("{name}.{key} must be a {expected}"));
            }
        }
    }
    Ok(())
}
