use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rand::Rng;

use ql_core::WorldTemplate;
use ql_fiction::{GameConfig, LogEntry, LogKind, Session};

pub fn run(
    class: &str,
    seed: Option<u64>,
    world: Option<&Path>,
    name: Option<&str>,
    transcript: Option<&Path>,
) -> Result<(), String> {
    let template = match world {
        Some(path) => super::load_world(path)?,
        None => WorldTemplate::standard().clone(),
    };
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut config = GameConfig::default().with_seed(seed).with_class(class);
    if let Some(name) = name {
        config = config.with_name(name);
    }

    let mut session =
        Session::new(config, template).map_err(|e| format!("failed to start game: {e}"))?;

    println!("  {} Questline", "Starting".bold());
    println!("  Class: {class} | Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    print_entries(session.state().log.entries());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("  Farewell, adventurer.");
            break;
        }
        if input.eq_ignore_ascii_case("restart") {
            let entries = session
                .restart()
                .map_err(|e| format!("failed to restart: {e}"))?;
            println!();
            print_entries(entries);
            continue;
        }

        let was_over = session.is_over();
        print_entries(session.submit(input));
        if session.is_over() && !was_over {
            println!("  Type 'restart' to try again or 'quit' to exit.");
        }
        println!();
    }

    if let Some(path) = transcript {
        std::fs::write(path, session.state().log.export_text())
            .map_err(|e| format!("failed to write transcript: {e}"))?;
        println!("  Transcript saved to {}", path.display());
    }
    Ok(())
}

fn print_entries(entries: &[LogEntry]) {
    for entry in entries {
        println!("{}", colorize(entry));
    }
}

fn colorize(entry: &LogEntry) -> colored::ColoredString {
    let text = entry.text.as_str();
    match entry.kind {
        LogKind::Info => text.normal(),
        LogKind::Success => text.green(),
        LogKind::Warning => text.yellow(),
        LogKind::Error => text.red().bold(),
        LogKind::Combat => text.red(),
        LogKind::Dialogue => text.cyan(),
    }
}
