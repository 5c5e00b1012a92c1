// SPDX-License-Identifier: GPL-3.0-only

//! Interactive terminal session
//!
//! The terminal stands in for the single screen: commands typed on stdin
//! become coordinator messages, notices and the busy indicator are printed.

use collage::app::{self, AppModel, Backends, Message, Notice, Screen, SnapshotStore};
use collage::config::Config;
use collage::constants::NoticeLength;
use collage::errors::AppResult;
use std::future::Future;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Prints screen feedback to stdout
pub struct ConsoleScreen;

impl Screen for ConsoleScreen {
    fn show_notice(&self, notice: Notice) {
        match notice.length() {
            NoticeLength::Short => println!("» {}", notice),
            NoticeLength::Long => println!("»» {}", notice),
        }
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("Uploading…");
        }
    }
}

/// Map a line of input to a message
pub fn parse_command(line: &str) -> Option<Message> {
    match line.trim().to_ascii_lowercase().as_str() {
        "capture" | "c" => Some(Message::CaptureRequested),
        "upload" | "u" => Some(Message::UploadRequested),
        "focus" | "f" => Some(Message::FocusChanged(true)),
        "blur" => Some(Message::FocusChanged(false)),
        "quit" | "q" | "exit" => Some(Message::Quit),
        _ => None,
    }
}

fn print_help() {
    println!("Commands: capture (c), upload (u), focus (f), blur, quit (q)");
}

/// Run the session until the user quits, stdin closes or Ctrl-C is pressed
pub async fn run_session(config: Config, snapshots: SnapshotStore) -> AppResult<()> {
    let snapshot = snapshots.load().unwrap_or_else(|e| {
        warn!(path = %snapshots.path().display(), error = %e, "Ignoring unreadable snapshot");
        None
    });
    println!("Preview: {}", config.preview.output.display());

    let backends = Backends::from_config(&config, Arc::new(ConsoleScreen));
    let model = AppModel::new(config, backends, snapshot);

    let (sender, receiver) = mpsc::unbounded_channel();
    // The screen is shown for the first time
    let _ = sender.send(Message::FocusChanged(true));

    // Ctrl-C goes through the same drain-then-save path as `quit`
    quit_on(tokio::signal::ctrl_c(), sender.clone());

    // Blocking stdin reads get their own thread so they never hold up shutdown
    std::thread::spawn(move || read_commands(sender));
    print_help();

    finish_session(model, receiver, &snapshots).await
}

/// Send [`Message::Quit`] once `signal` fires
fn quit_on<F>(signal: F, sender: mpsc::UnboundedSender<Message>) -> JoinHandle<()>
where
    F: Future<Output = std::io::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(()) => {
                info!("Interrupted, closing session");
                let _ = sender.send(Message::Quit);
            }
            Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C"),
        }
    })
}

/// Drive `model` to the end and save its snapshot
async fn finish_session(
    model: AppModel,
    receiver: mpsc::UnboundedReceiver<Message>,
    snapshots: &SnapshotStore,
) -> AppResult<()> {
    let model = app::run(model, receiver).await;
    snapshots.save(&model.snapshot())?;
    Ok(())
}

fn read_commands(sender: mpsc::UnboundedSender<Message>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match parse_command(&line) {
            Some(message) => {
                let quit = matches!(message, Message::Quit);
                if sender.send(message).is_err() || quit {
                    break;
                }
            }
            None if line.trim().is_empty() => {}
            None => print_help(),
        }
    }
}

/// Print the effective configuration
pub fn show_config(config: &Config, path: &Path) -> AppResult<()> {
    println!("# {}", path.display());
    println!(
        "{}",
        serde_json::to_string_pretty(config).map_err(std::io::Error::from)?
    );
    Ok(())
}
