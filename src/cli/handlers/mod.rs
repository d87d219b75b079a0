mod calendar;

use std::error::Error;
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::{FileStore, keys};
use crate::model::checklist::ChecklistItem;
use crate::model::color::AccentColor;
use crate::model::config::DashboardConfig;
use crate::model::wallpaper::WallpaperMode;
use crate::ops::field::{PersistedField, Plain};
use crate::ops::record_list::{RecordError, RecordListStore};

/// What every subcommand needs: the opened store, the config and the
/// output mode.
pub struct Context {
    pub store: FileStore,
    pub config: DashboardConfig,
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    data_dir: &Path,
    config: DashboardConfig,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let store = FileStore::open(data_dir)?;
    let mut ctx = Context { store, config, json };

    match command {
        // Checklist
        Commands::List => cmd_list(&ctx),
        Commands::Add(args) => cmd_add(&mut ctx, args),
        Commands::Toggle(args) => cmd_toggle(&mut ctx, args),
        Commands::Rm(args) => cmd_rm(&mut ctx, args),

        Commands::Notepad(args) => cmd_notepad(&mut ctx, args),

        // Calendar
        Commands::Cal(args) => calendar::cmd_cal(&ctx, args),
        Commands::CalNote(args) => calendar::cmd_cal_note(&mut ctx, args),

        // Appearance
        Commands::Accent(args) => cmd_accent(&mut ctx, args),
        Commands::Wallpaper(args) => cmd_wallpaper(&mut ctx, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn checklist() -> RecordListStore<ChecklistItem> {
    RecordListStore::new(keys::CHECKLIST)
}

/// Turn a 1-based item number into a list index.
fn item_index(number: usize) -> Result<usize, Box<dyn Error>> {
    number
        .checked_sub(1)
        .ok_or_else(|| "item numbers start at 1".into())
}

/// Report out-of-range errors with the number the user typed.
fn item_error(number: usize, err: RecordError) -> Box<dyn Error> {
    match err {
        RecordError::IndexOutOfRange { len, .. } => {
            format!("no item {} (list has {})", number, len).into()
        }
        other => other.into(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Checklist commands
// ---------------------------------------------------------------------------

fn cmd_list(ctx: &Context) -> Result<(), Box<dyn Error>> {
    let items = checklist().load_all(&ctx.store);
    if ctx.json {
        let out: Vec<ItemJson> = items
            .iter()
            .enumerate()
            .map(|(i, item)| item_to_json(i, item))
            .collect();
        return print_json(&out);
    }
    for (i, item) in items.iter().enumerate() {
        println!("{}", format_item_line(i, item));
    }
    Ok(())
}

fn cmd_add(ctx: &mut Context, args: AddArgs) -> Result<(), Box<dyn Error>> {
    let text = args.text.join(" ");
    let item = ChecklistItem::new(&text).ok_or("nothing to add: text is empty")?;
    let items = checklist().add(&mut ctx.store, item)?;
    let index = items.len() - 1;
    log::info!("cli: added checklist item {}", index + 1);
    if ctx.json {
        return print_json(&item_to_json(index, &items[index]));
    }
    println!("{}", format_item_line(index, &items[index]));
    Ok(())
}

fn cmd_toggle(ctx: &mut Context, args: ItemArgs) -> Result<(), Box<dyn Error>> {
    let index = item_index(args.number)?;
    let items = checklist()
        .toggle_at(&mut ctx.store, index)
        .map_err(|e| item_error(args.number, e))?;
    if ctx.json {
        return print_json(&item_to_json(index, &items[index]));
    }
    println!("{}", format_item_line(index, &items[index]));
    Ok(())
}

fn cmd_rm(ctx: &mut Context, args: ItemArgs) -> Result<(), Box<dyn Error>> {
    let index = item_index(args.number)?;
    let list = checklist();
    let removed = list.load_all(&ctx.store).get(index).cloned();
    let items = list
        .delete_at(&mut ctx.store, index)
        .map_err(|e| item_error(args.number, e))?;
    log::info!("cli: removed checklist item {}", args.number);
    if ctx.json {
        let out: Vec<ItemJson> = items
            .iter()
            .enumerate()
            .map(|(i, item)| item_to_json(i, item))
            .collect();
        return print_json(&out);
    }
    if let Some(item) = removed {
        println!("removed: {}", item.text);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Notepad
// ---------------------------------------------------------------------------

fn cmd_notepad(ctx: &mut Context, args: NotepadArgs) -> Result<(), Box<dyn Error>> {
    let field: PersistedField<String, Plain> = PersistedField::new(keys::NOTEPAD, String::new());
    if let Some(text) = args.set {
        field.save(&mut ctx.store, &text)?;
    } else if args.clear {
        field.clear(&mut ctx.store)?;
    }
    let content = field.load(&ctx.store);
    if ctx.json {
        return print_json(&NotepadJson { content });
    }
    if !content.is_empty() {
        println!("{}", content);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

fn cmd_accent(ctx: &mut Context, args: AccentArgs) -> Result<(), Box<dyn Error>> {
    let field: PersistedField<AccentColor, Plain> =
        PersistedField::new(keys::ACCENT_COLOR, AccentColor::default());
    if let Some(hex) = args.hex {
        let color =
            AccentColor::parse(&hex).ok_or_else(|| format!("not a hex color: {}", hex.trim()))?;
        field.save(&mut ctx.store, &color)?;
        log::info!("cli: accent set to {}", color);
    }
    let accent = field.load(&ctx.store);
    if ctx.json {
        return print_json(&accent_to_json(&accent));
    }
    println!("{}", format_accent(&accent));
    Ok(())
}

fn cmd_wallpaper(ctx: &mut Context, args: WallpaperArgs) -> Result<(), Box<dyn Error>> {
    let field: PersistedField<WallpaperMode, Plain> =
        PersistedField::new(keys::WALLPAPER, WallpaperMode::default());
    let current = field.load(&ctx.store);
    let mode = match args.mode {
        None => current,
        Some(WallpaperAction::Video) => WallpaperMode::Video,
        Some(WallpaperAction::Image) => WallpaperMode::Image,
        Some(WallpaperAction::Toggle) => current.toggled(),
    };
    if args.mode.is_some() {
        field.save(&mut ctx.store, &mode)?;
    }
    if ctx.json {
        return print_json(&WallpaperJson {
            mode: mode.to_string(),
        });
    }
    println!("{}", mode);
    Ok(())
}
