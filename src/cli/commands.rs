use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "nook", about = concat!("nook v", env!("CARGO_PKG_VERSION"), " - a personal dashboard for your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Store directory (default: $NOOK_DATA_DIR or ~/.local/share/nook)
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/nook/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List checklist items
    List,
    /// Add a checklist item
    Add(AddArgs),
    /// Check or uncheck an item
    Toggle(ItemArgs),
    /// Delete an item
    Rm(ItemArgs),
    /// Show, set or clear the notepad
    Notepad(NotepadArgs),
    /// Show a month with its notes
    Cal(CalArgs),
    /// Show or set the note for a day
    CalNote(CalNoteArgs),
    /// Show or set the accent color
    Accent(AccentArgs),
    /// Show or change the wallpaper mode
    Wallpaper(WallpaperArgs),
}

// ---------------------------------------------------------------------------
// Checklist args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Item text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ItemArgs {
    /// Item number as shown by `list` (starting at 1)
    pub number: usize,
}

// ---------------------------------------------------------------------------
// Notepad / calendar args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct NotepadArgs {
    /// Replace the notepad content
    #[arg(long, conflicts_with = "clear")]
    pub set: Option<String>,
    /// Empty the notepad
    #[arg(long)]
    pub clear: bool,
}

#[derive(Args)]
pub struct CalArgs {
    /// Month to show (default: this month)
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<String>,
}

#[derive(Args)]
pub struct CalNoteArgs {
    /// Day to read or write
    #[arg(value_name = "YYYY-MM-DD")]
    pub date: String,
    /// New note text; an empty string removes the note
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Appearance args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AccentArgs {
    /// Hex color (#RGB or #RRGGBB)
    pub hex: Option<String>,
}

#[derive(Args)]
pub struct WallpaperArgs {
    pub mode: Option<WallpaperAction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WallpaperAction {
    Video,
    Image,
    Toggle,
}
