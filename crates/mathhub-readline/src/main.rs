use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use mathhub_application::{HubController, HubEvent};
use mathhub_core::config::HubConfig;
use mathhub_core::settings::Settings;
use mathhub_interaction::GeminiTutor;

mod command;
mod render;

use command::Command;

/// Math Formula Hub - grade-aware formula explanations in your terminal.
#[derive(Parser, Debug)]
#[command(name = "mathhub", version)]
struct Args {
    /// Gemini model to use instead of the configured one.
    #[arg(long)]
    model: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: command::COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = HubConfig::load()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.request_timeout_secs = timeout_secs;
    }
    tracing::debug!(model = %config.model, "configuration loaded");

    let tutor = Arc::new(GeminiTutor::new(config)?);
    let (event_tx, mut event_rx) = mpsc::channel::<HubEvent>(32);
    let controller = HubController::new(tutor, Settings::default(), event_tx);
    let dashboard = controller.dashboard();

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    // ===== Login =====
    loop {
        match rl.readline("What's your name, Scholar? ") {
            Ok(line) => {
                if controller.login(&line).await {
                    break;
                }
                // Empty submissions are silently ignored.
            }
            Err(rustyline::error::ReadlineError::Interrupted) => continue,
            Err(rustyline::error::ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }

    {
        let dashboard = dashboard.read().await;
        render::banner(&dashboard.session().name, &dashboard.palette());
    }

    // Spawn renderer for fetch results so the prompt never blocks on them.
    let render_dashboard = Arc::clone(&dashboard);
    let render_handle = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                HubEvent::ExplanationReady { explanation, .. } => {
                    let settings = render_dashboard.read().await.settings().clone();
                    render::explanation(&explanation, &settings);
                }
                HubEvent::ExplanationFailed { message, .. } => {
                    println!("{}", message.red());
                }
                HubEvent::SyllabusReady { syllabus, .. } => {
                    render::syllabus(&syllabus);
                }
                HubEvent::SyllabusFailed { message, .. } => {
                    println!("{}", message.red());
                }
            }
        }
    });

    let initial_grade = dashboard.read().await.settings().grade_level;
    controller.request_syllabus(initial_grade).await;

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let parsed = match command::parse(trimmed) {
                    Ok(parsed) => parsed,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                match parsed {
                    Command::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Command::Topic(topic) => {
                        println!(
                            "{}",
                            format!("Fetching explanation for '{topic}'...").bright_black()
                        );
                        controller.request_explanation(topic).await;
                    }
                    Command::Settings => {
                        let dashboard = dashboard.read().await;
                        render::settings(dashboard.settings(), &dashboard.palette());
                    }
                    Command::Grade(grade) => {
                        let new = current_settings(&controller).await.with_grade_level(grade);
                        controller.apply_settings(new).await;
                        println!(
                            "{}",
                            format!("Switched to grade {grade}. Fetching syllabus...")
                                .bright_black()
                        );
                    }
                    Command::Depth(depth) => {
                        let new = current_settings(&controller)
                            .await
                            .with_explanation_depth(depth);
                        controller.apply_settings(new).await;
                        println!("{}", format!("Explanation depth: {depth}").bright_black());
                    }
                    Command::Theme(theme) => {
                        let new = current_settings(&controller).await.with_theme(theme);
                        controller.apply_settings(new).await;
                        let dashboard = dashboard.read().await;
                        render::settings(dashboard.settings(), &dashboard.palette());
                    }
                    Command::Thinking(enabled) => {
                        let new = current_settings(&controller).await.with_thinking(enabled);
                        controller.apply_settings(new).await;
                        println!(
                            "{}",
                            format!("Deep thinking {}", if enabled { "on" } else { "off" })
                                .bright_black()
                        );
                    }
                    Command::Voice(enabled) => {
                        let new = current_settings(&controller).await.with_voice(enabled);
                        controller.apply_settings(new).await;
                        println!(
                            "{}",
                            format!("Voice hints {}", if enabled { "on" } else { "off" })
                                .bright_black()
                        );
                    }
                    Command::Syllabus => {
                        let dashboard = dashboard.read().await;
                        render::syllabus_state(dashboard.syllabus());
                    }
                    Command::History => {
                        let dashboard = dashboard.read().await;
                        render::history(dashboard.history());
                    }
                    Command::Help => render::help(),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    // Dropping the controller releases the event sender so the renderer ends.
    drop(controller);
    let _ = render_handle.await;

    Ok(())
}

async fn current_settings(controller: &HubController) -> Settings {
    controller.dashboard().read().await.settings().clone()
}
