//! Command runner: resolves settings, wires the context and executes the
//! requested command.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, Instrument};

use cs_app::models::{menu_title, MenuModel};
use cs_app::{AppContext, AppPaths};
use cs_core::ports::{AppDirsPort, HistoryObserverPort};
use cs_platform::app_dirs::DirsAppDirsAdapter;

use super::{
    attach_clipboard_watcher, build_context, resolve_config, resolve_settings, ResolvedSettings,
    WiringOptions,
};
use crate::cli::{Cli, Command};

/// Resolve the per-user paths through the app dirs port.
pub fn resolve_app_paths() -> Result<AppPaths> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application data directory")?;
    Ok(AppPaths::from_app_dirs(&app_dirs))
}

/// Forwards history changes to the watch loop, which reprints the menu.
struct MenuUpdates {
    tx: mpsc::UnboundedSender<Vec<String>>,
}

impl HistoryObserverPort for MenuUpdates {
    fn on_history_changed(&self, entries: &[String]) {
        if self.tx.send(entries.to_vec()).is_err() {
            debug!("Menu update dropped, watch loop is gone");
        }
    }
}

/// Menu lines for `entries`, with pinned clips re-read from storage so pins
/// edited by other commands during `watch` show up.
async fn refreshed_menu(context: &AppContext, entries: &[String]) -> Vec<String> {
    let pinned = context.pinned();
    pinned.load().await;
    MenuModel::build(entries, &pinned.pinned().await).render_lines()
}

fn print_lines(lines: &[String]) {
    println!();
    for line in lines {
        println!("{line}");
    }
}

pub async fn run(cli: Cli, paths: &AppPaths) -> Result<()> {
    let config = resolve_config(cli.config.as_deref(), paths)?;
    let settings = resolve_settings(&config, paths);
    info!(
        poll_interval_ms = settings.poll_interval.as_millis() as u64,
        paste_delay_ms = settings.app.paste_delay.as_millis() as u64,
        store = %settings.store_path.display(),
        "Resolved settings"
    );

    let options = WiringOptions {
        ephemeral: cli.ephemeral,
        no_keystroke: matches!(
            cli.command,
            Command::Paste {
                no_keystroke: true,
                ..
            }
        ),
    };
    let (mut context, clipboard) = build_context(&settings, options).await;

    match cli.command {
        Command::Watch => {
            attach_clipboard_watcher(&mut context, clipboard, &settings);
            watch(&context, &settings).await
        }
        Command::List => {
            let entries = context.usecases().list_history().execute().await;
            if entries.is_empty() {
                println!("No copies yet");
            }
            for (index, entry) in entries.iter().enumerate() {
                println!("{index:>2}  {}", menu_title(entry));
            }
            Ok(())
        }
        Command::Clear => {
            context.usecases().clear_history().execute().await;
            println!("History cleared");
            Ok(())
        }
        Command::Copy(clip) => {
            let text = context.usecases().copy_clip().execute(clip.source()?).await?;
            println!("Copied: {}", menu_title(&text));
            Ok(())
        }
        Command::Paste { clip, .. } => {
            let text = context.usecases().paste_clip().execute(clip.source()?).await?;
            println!("Pasted: {}", menu_title(&text));
            Ok(())
        }
        Command::Pins => {
            let pinned = context.usecases().list_pinned_clips().execute().await;
            for (slot, text) in pinned.slots().iter().enumerate() {
                let shown = if text.is_empty() {
                    "(unset)".to_string()
                } else {
                    menu_title(text)
                };
                println!("p{slot}  {shown}");
            }
            Ok(())
        }
        Command::Pin(pin) => {
            context.usecases().edit_pinned_clip().execute(pin.edit()?).await?;
            println!("Pinned clips updated");
            Ok(())
        }
        Command::Menu => {
            let menu = context.usecases().build_menu().execute().await;
            print_lines(&menu.render_lines());
            Ok(())
        }
    }
}

async fn watch(context: &AppContext, settings: &ResolvedSettings) -> Result<()> {
    let span = info_span!("command.watch", poll_interval_ms = settings.poll_interval.as_millis() as u64);

    async {
        let usecases = context.usecases();
        let start = usecases
            .start_clipboard_watcher()
            .ok_or_else(|| anyhow!("clipboard watcher not attached"))?;
        let stop = usecases
            .stop_clipboard_watcher()
            .ok_or_else(|| anyhow!("clipboard watcher not attached"))?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = context
            .history()
            .subscribe(Arc::new(MenuUpdates { tx }))
            .await;

        print_lines(&usecases.build_menu().execute().await.render_lines());
        start.execute().await?;
        info!("Watching the clipboard, press Ctrl+C to stop");

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        loop {
            tokio::select! {
                signal = &mut ctrl_c => {
                    signal.context("Failed to listen for Ctrl+C")?;
                    break;
                }
                Some(entries) = rx.recv() => {
                    print_lines(&refreshed_menu(context, &entries).await);
                }
            }
        }

        stop.execute().await?;
        context.history().unsubscribe(subscription).await;
        info!("Stopped watching");
        Ok(())
    }
    .instrument(span)
    .await
}
