//! Interactive chat session

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use finassist_core::{
    Demographic, QuickAction, Role, SentimentLoader, Session, UserProfile,
};

pub async fn cmd_chat(profile: UserProfile) -> Result<()> {
    let mut session = Session::with_profile(profile);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│        💬 FinAssist Chat                │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Commands: /summary /insights /history /profile <demographic> [age]");
    println!("  Type 'exit' or 'quit' to leave.");
    println!();

    // Optional model warm-up; never blocks the conversation.
    let loader = SentimentLoader::from_env();
    match loader.get().await {
        Some(info) => println!("  🧠 Sentiment model ready: {}", info.id),
        None => println!("  ⚠️  Sentiment model unavailable (responses unaffected)"),
    }
    println!();

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(rest) = input.strip_prefix('/') {
            handle_command(&mut session, rest);
            continue;
        }

        debug!("Routing free-text input ({} chars)", input.len());
        let reply = session.submit(input);
        println!("bot> {}", reply);
    }

    println!();
    println!("👋 Session ended ({} messages)", session.messages().len());
    Ok(())
}

fn handle_command(session: &mut Session, command: &str) {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("summary") => {
            let reply = session.quick_action(QuickAction::BudgetSummary);
            println!("bot> {}", reply);
        }
        Some("insights") => {
            let reply = session.quick_action(QuickAction::SpendingInsights);
            println!("bot> {}", reply);
        }
        Some("history") => {
            if session.messages().is_empty() {
                println!("  (no messages yet)");
            }
            for message in session.messages() {
                let prefix = match message.role {
                    Role::User => "you>",
                    Role::Assistant => "bot>",
                };
                println!("{} {}", prefix, message.content);
            }
        }
        Some("profile") => match parts.next() {
            Some(demographic) => match Demographic::from_str(demographic) {
                Ok(demographic) => {
                    session.profile_mut().demographic = demographic;
                    if let Some(age) = parts.next() {
                        session.profile_mut().age = age.to_string();
                    }
                    println!(
                        "  ✅ Profile updated: {} (age {})",
                        session.profile().demographic,
                        session.profile().age
                    );
                }
                Err(e) => println!("  ❌ {}", e),
            },
            None => println!(
                "  Current profile: {} (age {})",
                session.profile().demographic,
                session.profile().age
            ),
        },
        _ => println!("  ❌ Unknown command: /{}", command),
    }
}
