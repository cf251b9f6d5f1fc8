use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pocketcalc::calculator::CalcResult;
use pocketcalc::config::Config;
use pocketcalc::display::DisplaySnapshot;
use pocketcalc::history::{HistoryEntry, HistoryLog, HistoryRecorder, recall_actions};
use pocketcalc::input::actions_for_line;
use pocketcalc::state::Calculator;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pocketcalc", version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not keep a calculation history.
    #[arg(long, global = true)]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an expression once and print the result.
    Eval {
        /// The expression, e.g. "2×(3−1)" or "sqrt(16)".
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Type keys into an interactive calculator (the default).
    Repl,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting pocketcalc");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Eval { expression, json } => eval(&expression.join(" "), json),
        Command::Repl => {
            let keep_history = config.history.enabled && !cli.no_history;
            run_repl(&config, keep_history)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn eval(expression: &str, json: bool) -> Result<ExitCode> {
    let outcome = CalcResult::evaluate(expression);

    if json {
        let text = serde_json::to_string(&outcome).context("Failed to serialize result")?;
        println!("{}", text);
    } else if outcome.is_success() {
        println!("{}", outcome.display());
    } else {
        eprintln!("{}", outcome.display());
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_repl(config: &Config, keep_history: bool) -> Result<()> {
    let mut repl = Repl::new(config, keep_history);
    let mut stdout = io::stdout().lock();
    repl.print_display(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        if !repl.handle_line(&line, &mut stdout)? {
            break;
        }
    }

    Ok(())
}

/// Interactive session state: the calculator and its history.
struct Repl {
    calc: Calculator,
    history: HistoryLog,
    receiver: flume::Receiver<HistoryEntry>,
    group_thousands: bool,
}

impl Repl {
    fn new(config: &Config, keep_history: bool) -> Self {
        let (recorder, receiver) = HistoryRecorder::channel();
        let mut calc = Calculator::new();
        if keep_history {
            calc.set_on_complete(recorder);
        }

        Self {
            calc,
            history: HistoryLog::new(config.history.limit),
            receiver,
            group_thousands: config.display.group_thousands,
        }
    }

    /// Handle one line of input. Returns `false` when the session should end.
    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let mut words = line.split_whitespace();
        self.history.drain(&self.receiver);

        match words.next() {
            Some("quit" | "exit") => return Ok(false),
            Some("history") => {
                if words.next() == Some("clear") {
                    self.history.clear();
                    writeln!(out, "history cleared")?;
                } else {
                    print_history(out, &self.history)?;
                }
                return Ok(true);
            }
            Some("recall") => {
                let entry = match words.next() {
                    Some(n) => n
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| self.history.entries().nth(n.saturating_sub(1))),
                    None => self.history.latest(),
                };
                match entry {
                    Some(entry) => {
                        let actions = recall_actions(&entry.expression);
                        self.calc.dispatch_all(actions);
                    }
                    None => writeln!(out, "no such history entry")?,
                }
            }
            _ => {
                let (actions, unknown) = actions_for_line(line);
                for word in unknown {
                    tracing::warn!(%word, "unrecognized key");
                }
                self.calc.dispatch_all(actions);
                self.history.drain(&self.receiver);
            }
        }

        self.print_display(out)?;
        Ok(true)
    }

    fn print_display(&self, out: &mut impl Write) -> Result<()> {
        let snapshot = DisplaySnapshot::from_state(self.calc.state(), self.group_thousands);
        let marker = if snapshot.is_error { "!" } else { "=" };
        writeln!(out, "  {}", snapshot.expression_text)?;
        writeln!(out, "{} {}", marker, snapshot.value_text)?;
        out.flush()?;
        Ok(())
    }
}

fn print_history(out: &mut impl Write, history: &HistoryLog) -> Result<()> {
    if history.is_empty() {
        writeln!(out, "no calculations yet")?;
        return Ok(());
    }

    writeln!(out, "last {} of at most {}:", history.len(), history.limit())?;
    for (i, entry) in history.entries().enumerate() {
        writeln!(out, "{:>3}. {} = {}", i + 1, entry.expression, entry.result)?;
    }
    out.flush()?;
    Ok(())
}
