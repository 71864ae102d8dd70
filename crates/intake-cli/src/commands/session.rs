//! Session command - interactive chat that fills in the application.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, warn};

use intake_core::assistant::respond;
use intake_core::{ApplicationField, ExtractionResult, RuleAssistant, Session, ToolBox};

use super::{load_config, read_document};

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Resume to upload before the chat starts (PDF or plain text)
    #[arg(short, long)]
    resume: Option<PathBuf>,

    /// Write the application summary here once complete
    #[arg(short, long)]
    summary_out: Option<PathBuf>,

    /// Save the summary under the configured file name in the current directory
    #[arg(long, conflicts_with = "summary_out")]
    save: bool,
}

#[derive(Debug, Clone, Copy)]
enum Speaker {
    User,
    Bot,
    Status,
}

pub fn run(args: SessionArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let summary_path = args
        .summary_out
        .clone()
        .or_else(|| args.save.then(|| PathBuf::from(&config.summary.file_name)));

    let mut session = Session::new(config);
    let mut assistant = RuleAssistant;
    let mut transcript: Vec<(Speaker, String)> = Vec::new();
    let mut announced = false;

    println!("{}", style("Job Application Assistant").bold());
    println!("Tell me your name, email, and skills to complete your application!");
    println!("Commands: /status, /history, /tools, /reset, /quit");

    if let Some(path) = &args.resume {
        upload_resume(&mut session, path);
        announced = announce_completion(&session, summary_path.as_deref(), announced)?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", style(">").cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/status" => {
                println!("{}", style(session.readiness()).blue());
                continue;
            }
            "/tools" => {
                let tools = ToolBox::new(&mut session);
                for tool in tools.tools() {
                    println!("  {} - {}", style(tool.name()).bold(), tool.description());
                }
                continue;
            }
            "/history" => {
                print_history(&transcript);
                continue;
            }
            "/reset" => {
                session.reset();
                transcript.clear();
                announced = false;
                println!("{} Session reset.", style("↺").yellow());
                continue;
            }
            _ => {}
        }

        transcript.push((Speaker::User, input.to_string()));

        let reply = match respond(&mut assistant, &mut session, input) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Assistant failed: {}", e);
                format!("Sorry, something went wrong: {}", e)
            }
        };
        println!("{}", reply);
        transcript.push((Speaker::Bot, reply));

        let status = session.readiness().to_string();
        debug!("Status after turn: {}", status);
        transcript.push((Speaker::Status, status));

        announced = announce_completion(&session, summary_path.as_deref(), announced)?;
    }

    Ok(())
}

fn upload_resume(session: &mut Session, path: &Path) {
    let outcome = read_document(path)
        .and_then(|(data, kind)| Ok(session.ingest_document(&data, kind)?));

    match outcome {
        Ok(found) => {
            println!("{} Resume uploaded!", style("✓").green());
            println!("Extracted info from resume:");
            print_fields(&found);
        }
        Err(e) => {
            eprintln!("{} Could not read resume: {}", style("✗").red(), e);
        }
    }
}

fn print_fields(result: &ExtractionResult) {
    for field in ApplicationField::ALL {
        println!("  {}: {}", field.label(), result.get(field).unwrap_or("None"));
    }
}

fn print_history(transcript: &[(Speaker, String)]) {
    for (speaker, message) in transcript {
        match speaker {
            Speaker::User => println!("{} {}", style("you:").bold(), message),
            Speaker::Bot => println!("{} {}", style("bot:").green(), message),
            Speaker::Status => println!("{} {}", style("status:").blue(), message),
        }
    }
}

/// Print the completion banner and summary once per completion.
fn announce_completion(
    session: &Session,
    summary_path: Option<&Path>,
    announced: bool,
) -> anyhow::Result<bool> {
    if announced || !session.completed() {
        return Ok(announced);
    }

    let Some(summary) = session.summary() else {
        return Ok(announced);
    };

    println!(
        "{} All information collected! You're ready to apply!",
        style("🎉").green()
    );

    match summary_path {
        Some(path) => {
            fs::write(path, &summary)?;
            println!(
                "{} Application summary written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => print!("{}", summary),
    }

    Ok(true)
}
