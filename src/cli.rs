//! Command line interface.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use cs_app::usecases::{ClipSource, PinnedEdit};

#[derive(Debug, Parser)]
#[command(name = "clipshelf", version, about = "Clipboard history with pinned clips")]
pub struct Cli {
    /// Config file (defaults to <data dir>/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep history and pinned clips in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record clipboard copies until Ctrl+C, printing the menu on each change
    Watch,
    /// Print the clipboard history, newest first
    List,
    /// Remove every history entry
    Clear,
    /// Put a history entry or pinned clip on the clipboard
    Copy(ClipArgs),
    /// Copy a clip, then send the paste shortcut to the focused application
    Paste {
        #[command(flatten)]
        clip: ClipArgs,

        /// Only copy, do not send the keystroke
        #[arg(long)]
        no_keystroke: bool,
    },
    /// Print the pinned clip slots
    Pins,
    /// Edit pinned clips
    Pin(PinArgs),
    /// Print the menu projection
    Menu,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ClipArgs {
    /// History index, 0 is the newest entry
    pub index: Option<usize>,

    /// Pinned slot instead of a history entry
    #[arg(long, value_name = "SLOT")]
    pub pinned: Option<usize>,
}

impl ClipArgs {
    pub fn source(&self) -> Result<ClipSource> {
        match (self.index, self.pinned) {
            (_, Some(slot)) => Ok(ClipSource::Pinned(slot)),
            (Some(index), None) => Ok(ClipSource::History(index)),
            (None, None) => bail!("either a history index or --pinned <SLOT> is required"),
        }
    }
}

#[derive(Debug, Args)]
pub struct PinArgs {
    /// Slot to edit
    #[arg(required_unless_present = "all")]
    pub slot: Option<usize>,

    /// New text; empty text unsets the slot
    #[arg(required_unless_present = "all")]
    pub text: Option<String>,

    /// Replace all three slots at once
    #[arg(
        long,
        num_args = 3,
        value_names = ["FIRST", "SECOND", "THIRD"],
        conflicts_with_all = ["slot", "text"]
    )]
    pub all: Option<Vec<String>>,
}

impl PinArgs {
    pub fn edit(&self) -> Result<PinnedEdit> {
        if let Some(all) = &self.all {
            let slots: [String; 3] = match all.as_slice() {
                [a, b, c] => [a.clone(), b.clone(), c.clone()],
                _ => bail!("--all takes exactly three values"),
            };
            return Ok(PinnedEdit::All(slots));
        }

        match (self.slot, &self.text) {
            (Some(slot), Some(text)) => Ok(PinnedEdit::Slot {
                slot,
                text: text.clone(),
            }),
            _ => bail!("a slot and its text are required"),
        }
    }
}
