// plain console mode - one line in, one reply out

use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::ExportOptions;
use crate::{Error, Session, wants_exit};

pub async fn run(mut session: Session, delay: Duration, export: &ExportOptions) -> Result<(), Error> {
    let bot = session.bot_name().to_string();
    println!("{}", session.greeting());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        // eof ends the conversation
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        if !wants_exit(&line) {
            println!("{bot} is typing...");
            tokio::time::sleep(delay).await;
        }

        let reply = session.respond(&line);
        println!("{bot}: {}", reply.text);

        if reply.is_farewell() {
            break;
        }

        if let Some(reminder) = session.crisis_reminder() {
            for line in reminder {
                println!("{bot}: {line}");
            }
        }
    }

    if export.enabled {
        let path = session.export(export.path.as_deref(), export.format)?;
        println!("conversation saved to {}", path.display());
    }

    Ok(())
}
