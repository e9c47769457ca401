use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use novachat_api::HttpChatClient;
use novachat_chat::{Conversation, SendOutcome};

use crate::app::render::{render_error, render_pending, render_resolution, render_transcript};
use crate::app::setup::AppConfig;

/// One line of REPL input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Empty,
    Exit,
    Help,
    History,
    Clear,
    Message(&'a str),
}

impl<'a> ReplInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => ReplInput::Empty,
            "exit" | "quit" | "/exit" | "/quit" => ReplInput::Exit,
            "/help" | "/?" => ReplInput::Help,
            "/history" => ReplInput::History,
            "/clear" => ReplInput::Clear,
            _ => ReplInput::Message(line),
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_cyan());
    println!("  /history   - Show what the backend remembers of this conversation");
    println!("  /clear     - Forget the conversation, here and on the backend");
    println!("  /help      - Show this help");
    println!("  exit, quit - Leave");
}

/// Run interactive REPL mode
pub async fn run_repl_mode(client: HttpChatClient, app_config: AppConfig) -> Result<()> {
    println!("{}", "🤖 Nova Chat".bright_cyan().bold());
    println!(
        "{}",
        format!("Backend: {} • User: {}", app_config.client_config.base_url, app_config.user_id).bright_black()
    );
    println!("{}", "Type 'exit' or 'quit' to exit, or '/help' for commands\n".bright_black());

    let mut conversation = Conversation::new(client, app_config.user_id);
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => match ReplInput::parse(&line) {
                ReplInput::Empty => continue,
                ReplInput::Exit => {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }
                ReplInput::Help => print_help(),
                ReplInput::History => show_history(&conversation).await,
                ReplInput::Clear => clear_session(&mut conversation).await,
                ReplInput::Message(text) => {
                    remember(&mut rl, text)?;

                    println!("{}", render_pending());
                    let outcome = conversation.send_message(text).await;
                    if outcome == SendOutcome::Skipped {
                        continue;
                    }

                    for rendered in render_resolution(&conversation.state()) {
                        println!("{}", rendered);
                    }
                    println!();
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red(), err);
                return Err(err.into());
            }
        }
    }

    Ok(())
}

fn remember(rl: &mut DefaultEditor, text: &str) -> Result<()> {
    rl.add_history_entry(text)?;
    Ok(())
}

async fn show_history(conversation: &Conversation<HttpChatClient>) {
    match conversation.transport().history(conversation.user_id()).await {
        Ok(history) => {
            let turns = history.turns();
            if turns.is_empty() {
                println!("{}", "The backend has no conversation stored yet.".bright_black());
            }
            for line in render_transcript(&turns) {
                println!("{}", line);
            }
        }
        Err(e) => println!("{}", render_error(e.message())),
    }
}

async fn clear_session(conversation: &mut Conversation<HttpChatClient>) {
    match conversation.transport().clear_session(conversation.user_id()).await {
        Ok(_) => {
            conversation.reset();
            println!("{}", "🧹 Conversation cleared.".bright_cyan());
        }
        Err(e) => println!("{}", render_error(e.message())),
    }
}
