use anyhow::Result;
use colored::Colorize;
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use sentinel_chat::QUICK_ACTIONS;

use super::TerminalController;
use crate::config::AppConfig;

/// One line of REPL input, after local commands are recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Exit,
    Help,
    Clear,
    /// `/ai` alone toggles; `/ai on|off` sets
    Ai(Option<bool>),
    /// `/quick` alone lists the presets; `/quick N` sends the N-th (1-based)
    Quick(Option<usize>),
    /// Anything else goes to the controller, `/web` included
    Submit(&'a str),
    /// A local command used the wrong way; holds the usage line
    Invalid(String),
}

impl<'a> ReplCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        let head = parts.next().unwrap_or("");
        let arg = parts.next();
        let extra = parts.next().is_some();

        match head {
            "exit" | "quit" if arg.is_none() => Self::Exit,
            "/help" if arg.is_none() => Self::Help,
            "/help" => Self::usage("/help"),
            "/clear" if arg.is_none() => Self::Clear,
            "/clear" => Self::usage("/clear"),
            "/ai" => match arg {
                _ if extra => Self::usage("/ai [on|off]"),
                None => Self::Ai(None),
                Some("on") => Self::Ai(Some(true)),
                Some("off") => Self::Ai(Some(false)),
                Some(_) => Self::usage("/ai [on|off]"),
            },
            "/quick" => {
                let usage = format!("/quick [1-{}]", QUICK_ACTIONS.len());
                match arg {
                    _ if extra => Self::usage(&usage),
                    None => Self::Quick(None),
                    Some(n) => match n.parse::<usize>() {
                        Ok(n) if (1..=QUICK_ACTIONS.len()).contains(&n) => Self::Quick(Some(n)),
                        _ => Self::usage(&usage),
                    },
                }
            }
            _ => Self::Submit(line),
        }
    }

    fn usage(syntax: &str) -> Self {
        Self::Invalid(format!("Usage: {}", syntax))
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_cyan().bold());
    println!("  {}  read a web page", "/web <url>".cyan());
    println!("  {}  switch the AI on or off", "/ai [on|off]".cyan());
    println!("  {}  list or send a quick action", "/quick [n]".cyan());
    println!("  {}  forget the conversation", "/clear".cyan());
    println!("  {}  leave", "exit | quit".cyan());
}

fn print_quick_actions() {
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), action.label);
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode(chat: &mut TerminalController, config: &AppConfig) -> Result<()> {
    println!("{}", "🤖 AGi Sentinel".bright_cyan().bold());
    println!(
        "{}",
        format!("Backend: {}", config.endpoints.chat_url).bright_black()
    );
    println!(
        "{}",
        "Type 'exit' or 'quit' to exit, or '/help' for commands\n".bright_black()
    );

    chat.boot();

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "›".bright_green().bold()));

        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    warn!("Could not record line history: {}", e);
                }

                match ReplCommand::parse(&line) {
                    ReplCommand::Exit => break,
                    ReplCommand::Help => print_help(),
                    ReplCommand::Clear => chat.clear(),
                    ReplCommand::Ai(setting) => {
                        let enabled = setting.unwrap_or(!chat.ai_enabled());
                        chat.set_ai_enabled(enabled);
                    }
                    ReplCommand::Quick(None) => print_quick_actions(),
                    ReplCommand::Quick(Some(n)) => {
                        let action = &QUICK_ACTIONS[n - 1];
                        chat.quick_action(action.prompt).await;
                    }
                    ReplCommand::Submit(text) => {
                        chat.submit(text).await;
                    }
                    ReplCommand::Invalid(usage) => println!("{}", usage.yellow()),
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exit_words() {
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse("  quit "), ReplCommand::Exit);
        // a sentence starting with "exit" is a normal message
        assert_eq!(
            ReplCommand::parse("exit strategy ideas"),
            ReplCommand::Submit("exit strategy ideas")
        );
    }

    #[test]
    fn test_ai_toggle() {
        assert_eq!(ReplCommand::parse("/ai"), ReplCommand::Ai(None));
        assert_eq!(ReplCommand::parse("/ai on"), ReplCommand::Ai(Some(true)));
        assert_eq!(ReplCommand::parse("/ai off"), ReplCommand::Ai(Some(false)));
        assert!(matches!(ReplCommand::parse("/ai maybe"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_quick_index_is_one_based_and_bounded() {
        assert_eq!(ReplCommand::parse("/quick"), ReplCommand::Quick(None));
        assert_eq!(ReplCommand::parse("/quick 1"), ReplCommand::Quick(Some(1)));
        assert_eq!(ReplCommand::parse("/quick 4"), ReplCommand::Quick(Some(4)));
        assert!(matches!(ReplCommand::parse("/quick 0"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/quick 5"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/quick x"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert_eq!(
            ReplCommand::parse("/clear foo"),
            ReplCommand::Invalid("Usage: /clear".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/help me"),
            ReplCommand::Invalid("Usage: /help".to_string())
        );
        assert!(matches!(ReplCommand::parse("/ai on now"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/quick 1 2"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_quick_usage_follows_preset_count() {
        let expected = format!("Usage: /quick [1-{}]", QUICK_ACTIONS.len());
        assert_eq!(ReplCommand::parse("/quick 99"), ReplCommand::Invalid(expected));
    }

    #[test]
    fn test_web_and_chat_pass_through() {
        assert_eq!(
            ReplCommand::parse("/web http://example.com"),
            ReplCommand::Submit("/web http://example.com")
        );
        assert_eq!(ReplCommand::parse("hola"), ReplCommand::Submit("hola"));
        assert_eq!(ReplCommand::parse("/clear"), ReplCommand::Clear);
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
    }
}
