//! # pagegrid CLI
//!
//! Usage:
//!   pagegrid layout.json resolve <id> [--strategy compress|push|none]
//!   pagegrid layout.json compress
//!   pagegrid layout.json place <w> <h>
//!   pagegrid layout.json fold <id>
//!   pagegrid layout.json inspect <id>
//!   cat layout.json | pagegrid - resolve <id>
//!   pagegrid --example > layout.json
//!
//! Results are written to stdout as JSON. Set `RUST_LOG=pagegrid=debug` to
//! see what the engine decided.

use std::env;
use std::fs;
use std::io::{self, Read};

use pagegrid::config::ResolveStrategy;
use pagegrid::layout::LayoutEngine;
use pagegrid::model::Item;
use pagegrid::store::PageItems;
use pagegrid::GridError;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_layout_json());
        return;
    }

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String, GridError> {
    let (source, command) = match args {
        [source, command, ..] => (source.as_str(), command.as_str()),
        _ => return Err(GridError::Usage("expected <layout.json|-> <command> [args]".to_string())),
    };

    let input = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source)?
    };

    let document = pagegrid::parse_document(&input)?;
    let mut engine = LayoutEngine::new(document.config);
    if let Some(strategy) = flag_value(args, "--strategy") {
        engine.set_strategy(strategy.parse::<ResolveStrategy>().map_err(GridError::Usage)?);
    }

    let operands = &args[2..];
    match command {
        "resolve" => {
            let id = operand(operands, 0, "resolve <id>")?;
            to_json(&engine.resolve(&document.items, id))
        }
        "compress" => to_json(&engine.compress(&document.items)),
        "place" => {
            let w = number(operand(operands, 0, "place <w> <h>")?)?;
            let h = number(operand(operands, 1, "place <w> <h>")?)?;
            to_json(&engine.first_available_position(w, h, &document.items))
        }
        "fold" => {
            let id = operand(operands, 0, "fold <id>")?;
            let mut store = PageItems::new();
            store.set_items(document.items);
            store.swap_folded(&engine, id, None);
            store.resolve(&engine, id);
            to_json(&store.into_items())
        }
        "inspect" => {
            let id = operand(operands, 0, "inspect <id>")?;
            let item = find(&document.items, id)?;
            to_json(&engine.inspect(item))
        }
        other => Err(GridError::Usage(format!("unknown command '{}'", other))),
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

/// Flags that take a value in the next argument.
const VALUE_FLAGS: &[&str] = &["--strategy"];

/// The `index`-th positional argument, skipping flags and their values.
fn operand<'a>(operands: &'a [String], index: usize, usage: &str) -> Result<&'a str, GridError> {
    let mut positional = Vec::new();
    let mut args = operands.iter();
    while let Some(arg) = args.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            args.next();
        } else if !arg.starts_with("--") {
            positional.push(arg.as_str());
        }
    }
    positional
        .get(index)
        .copied()
        .ok_or_else(|| GridError::Usage(format!("expected {}", usage)))
}

fn number(raw: &str) -> Result<f64, GridError> {
    raw.parse::<f64>()
        .map_err(|_| GridError::Usage(format!("'{}' is not a number", raw)))
}

fn find<'a>(items: &'a [Item], id: &str) -> Result<&'a Item, GridError> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| GridError::Usage(format!("no item with id '{}'", id)))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, GridError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn example_layout_json() -> &'static str {
    r##"{
  "config": {
    "collisionMode": "legacy",
    "strategy": "compress",
    "maxCols": 6,
    "cellSize": { "width": 100, "height": 50 },
    "gap": 10
  },
  "items": [
    { "id": "revenue", "name": "Revenue", "x": 0, "y": 0, "w": 4, "h": 3, "movable": true, "folded": false },
    { "id": "notes", "name": "Notes", "x": 4, "y": 0, "w": 2, "h": 4, "headed": true, "folded": false },
    { "id": "pipeline", "name": "Sales pipeline by region and quarter", "x": 0, "y": 3, "w": 4, "h": 5, "movable": true, "folded": true },
    { "id": "banner", "x": 0, "y": 9, "w": 6, "h": 1 },
    { "id": "archive", "name": "Archive", "x": 0, "y": 12, "w": 2, "h": 2, "visible": false }
  ]
}
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_operand_skips_flag_values() {
        let operands = args(&["--strategy", "push", "a"]);
        assert_eq!(operand(&operands, 0, "resolve <id>").unwrap(), "a");

        let operands = args(&["a", "--strategy", "push"]);
        assert_eq!(operand(&operands, 0, "resolve <id>").unwrap(), "a");
        assert!(operand(&operands, 1, "resolve <id>").is_err());
    }

    #[test]
    fn test_flag_value() {
        let all = args(&["doc.json", "resolve", "--strategy", "push", "a"]);
        assert_eq!(flag_value(&all, "--strategy"), Some("push"));
        assert_eq!(flag_value(&all, "--missing"), None);
    }
}
