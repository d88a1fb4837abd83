//! pretty-textarea - highlighted text input in the terminal

use std::env;
use std::path::PathBuf;
use std::process;

use pretty_textarea::host::{App, Terminal};
use pretty_textarea::{register, registry, HostConfig, Result, TextareaError, TAG_NAME};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(Some(value)) => println!("{}", value),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Run the host; returns the final value when the user quits
fn run() -> Result<Option<String>> {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--config" | "-c" => {
                let path = args.get(i + 1).ok_or_else(|| {
                    TextareaError::Message("--config requires a path".to_string())
                })?;
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            other => {
                return Err(TextareaError::Message(format!("unknown argument: {}", other)));
            }
        }
        i += 1;
    }

    let config = HostConfig::load(config_path.as_deref())?;

    register()?;
    let mut textarea = registry::create(TAG_NAME)?;
    for (name, value) in config.to_attributes()?.iter() {
        textarea.set_attribute(name, value);
    }

    let terminal = Terminal::new()?;
    let mut app = App::new(terminal, textarea);
    app.run()?;

    Ok(Some(app.into_value()))
}

fn print_usage() {
    println!(
        "pretty-textarea {} - highlighted text input",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: pretty-textarea [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config PATH  Read settings from PATH instead of ~/.pretty-textarea.toml");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Key bindings:");
    println!("  Arrows, Home, End  Move the caret (Shift extends the selection)");
    println!("  C-Home, C-End      Move to start/end of text");
    println!("  PageUp, PageDown   Scroll one page");
    println!("  C-a                Select all");
    println!("  C-x, C-c, C-v      Cut, copy, paste");
    println!("  C-q, Esc           Quit and print the value");
    println!();
    println!("Set RUST_LOG=debug to see rule fallbacks on stderr.");
}

fn print_version() {
    println!("pretty-textarea {}", env!("CARGO_PKG_VERSION"));
}
