use clap::Parser;
use colored::Colorize;
use parkade::command::{Command, KEYWORDS};
use parkade::scenario::Scenario;
use parkade::session::{Outcome, Session};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Stdio};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parkade", about = "Single-floor parking lot console")]
struct Args {
    /// Path to a JSON scenario file that sizes the lot and parks the initial vehicles
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Execute the commands in FILE instead of starting the interactive shell
    #[arg(short, long, value_name = "FILE")]
    commands: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn paginate(content: &str) {
    let pager = Process::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Process::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(e) => {
            warn!(error = %e, "no pager available");
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

/// Prints an outcome; returns false once the session should end.
fn report(outcome: Outcome, interactive: bool) -> bool {
    match outcome {
        Outcome::Message(text) if interactive && text.lines().count() > 40 => paginate(&text),
        Outcome::Message(text) => println!("{}", text),
        Outcome::Failure(text) => println!("{}", text.red()),
        Outcome::Exit => return false,
    }
    true
}

fn run_batch(session: &mut Session, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let script = std::fs::read_to_string(path)?;
    for (idx, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !report(session.execute(command), false) {
                    break;
                }
            }
            Err(e) => eprintln!("{}", format!("line {}: {}", idx + 1, e).red()),
        }
    }
    Ok(())
}

fn run_shell(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: KEYWORDS.iter().map(|k| k.to_string()).collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed)?;

                if !report(session.run_line(trimmed), true) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut session = match &args.scenario {
        Some(path) => {
            let lot = Scenario::load_from_file(path)?.build()?;
            println!(
                "{}",
                format!(
                    "Lot open. Loaded {} of {} slots from {}",
                    lot.occupied_count(),
                    lot.num_slots(),
                    path.display()
                )
                .green()
            );
            Session::with_lot(lot)
        }
        None => Session::new(),
    };

    match &args.commands {
        Some(path) => run_batch(&mut session, path)?,
        None => {
            println!("Type 'help' for the command list, 'exit' to quit");
            run_shell(&mut session)?
        }
    }

    if let Some(lot) = session.lot() {
        info!(occupied = lot.occupied_count(), slots = lot.num_slots(), "session closed");
    }
    Ok(())
}
