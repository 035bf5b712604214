//! Haunt Merge - Entry Point
//!
//! Sets up logging and the async runtime, starts background icon
//! generation and runs a line-oriented game loop on stdin.

use haunt_merge::assets::{AssetLoader, AssetStatus, IconCache, TileVisual};
use haunt_merge::core::config::GameConfig;
use haunt_merge::core::error::Result;
use haunt_merge::core::types::{SlotKey, GRID_COLS, GRID_ROWS};
use haunt_merge::game::{ClickOutcome, CompletionOutcome, GameSession, LogKind, MergeOutcome};
use haunt_merge::llm::{LlmClient, LlmIconArtist, LlmNarrator};
use haunt_merge::story::{OfflineNarrator, StoryTeller};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "haunt-merge")]
#[command(about = "Merge cursed relics in a haunted house")]
struct Args {
    /// TOML file with game tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible task generation
    #[arg(long)]
    seed: Option<u64>,

    /// Skip background icon generation
    #[arg(long)]
    no_assets: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("haunt_merge=info")),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    tracing::info!("Haunt Merge starting...");

    // Runtime for LLM calls and the icon loader
    let rt = Runtime::new()?;
    let cache = IconCache::new();

    // Try to create LLM client (optional - works without it)
    let llm_client = LlmClient::from_env().ok();

    match llm_client {
        Some(client) => {
            if !args.no_assets {
                let loader = AssetLoader::new(cache.clone(), &config);
                rt.spawn(loader.run(LlmIconArtist::new(client.clone())));
            }
            play(&rt, GameSession::new(config, LlmNarrator::new(client)), &cache)
        }
        None => {
            tracing::warn!("LLM_API_KEY not set - running with offline narration and glyph icons");
            play(&rt, GameSession::new(config, OfflineNarrator), &cache)
        }
    }
}

fn play<S: StoryTeller>(rt: &Runtime, mut session: GameSession<S>, cache: &IconCache) -> Result<()> {
    println!("\n=== HAUNT MERGE ===");
    println!("Merge cursed relics. Finish tasks. Do not look behind you.");
    println!();
    println!("Commands:");
    println!("  click <r-c> / c   - Click a slot (e.g. c 0-0 spawns from the archive)");
    println!("  task <n>          - Hand in the n-th task");
    println!("  grid / g          - Show the board");
    println!("  tasks             - Show active tasks");
    println!("  log               - Show recent messages");
    println!("  status            - Show progress and the haunting");
    println!("  quit / q          - Leave the house");
    println!();

    display_grid(&session, cache);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        let (command, arg) = match input.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "quit" | "q" => break,
            "grid" | "g" => display_grid(&session, cache),
            "tasks" => display_tasks(&session),
            "log" => display_log(&session),
            "status" => display_status(&session, cache),
            "click" | "c" => {
                match session.click_str(arg) {
                    Ok(outcome) => report_click(&outcome),
                    Err(e) => println!("Can't click '{}': {}", arg, e),
                }
                display_grid(&session, cache);
            }
            "task" => {
                let Some(index) = arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                    println!("Usage: task <number>");
                    continue;
                };
                match rt.block_on(session.complete_task_at(index)) {
                    Ok(CompletionOutcome::Completed {
                        task,
                        flavor,
                        new_task,
                        ..
                    }) => {
                        println!("Completed: {} (+{} stars)", task.description, task.reward_stars);
                        println!("  {}", flavor);
                        if let Some(t) = new_task {
                            println!("New task: {}", t.description);
                        }
                    }
                    Ok(CompletionOutcome::MissingRequirement) => display_log(&session),
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Unknown command. Available: click, task, grid, tasks, log, status, quit"),
        }
    }

    let progress = &session.state.progress;
    println!(
        "\nYou flee the house with {} stars after {} tasks.",
        progress.stars, session.state.completed_tasks
    );
    Ok(())
}

fn report_click(outcome: &ClickOutcome) {
    match outcome {
        ClickOutcome::Ignored => {}
        ClickOutcome::Spawned { slot } => println!("Something appears at {}.", slot),
        ClickOutcome::GridFull => println!("No room left on the board."),
        ClickOutcome::Selected(key) => println!("Selected {}.", key),
        ClickOutcome::Deselected => println!("Selection cleared."),
        ClickOutcome::Resolved {
            source,
            target,
            outcome,
        } => match outcome {
            MergeOutcome::Moved => println!("Moved {} -> {}.", source, target),
            MergeOutcome::Swapped => println!("Swapped {} <-> {}.", source, target),
            MergeOutcome::Merged(item) => {
                println!("Merged into {} (tier {}) at {}.", item.name(), item.tier(), target)
            }
        },
    }
}

fn display_grid<S>(session: &GameSession<S>, cache: &IconCache) {
    let selected = session.controller.selected();
    println!();
    print!("     ");
    for col in 0..GRID_COLS {
        print!("  {}   ", col);
    }
    println!();
    for row in 0..GRID_ROWS {
        print!("  {}  ", row);
        for col in 0..GRID_COLS {
            let key = SlotKey::new(row, col);
            let cell = match session.state.inventory.item(key) {
                Ok(Some(item)) => {
                    let symbol = match cache.visual_for(item) {
                        TileVisual::Image(_) => "\u{1f5bc}",
                        TileVisual::Glyph(glyph) => glyph.symbol(),
                    };
                    if item.is_generator() {
                        format!("{} G", symbol)
                    } else {
                        format!("{} {}", symbol, item.tier())
                    }
                }
                _ => " .  ".to_string(),
            };
            if selected == Some(key) {
                print!("[{:^4}]", cell);
            } else {
                print!(" {:^4} ", cell);
            }
        }
        println!();
    }
    println!();
}

fn display_tasks<S>(session: &GameSession<S>) {
    println!();
    for (i, task) in session.state.tasks.iter().enumerate() {
        let ready = if session.state.can_complete(&task.id) {
            "ready"
        } else {
            "     "
        };
        println!(
            "  {}. [{}] {} - needs tier {} {} ({} stars, {} exp)",
            i + 1,
            ready,
            task.description,
            task.required_tier,
            task.required_item_name,
            task.reward_stars,
            task.reward_exp
        );
    }
    println!();
}

fn display_log<S>(session: &GameSession<S>) {
    println!();
    for entry in session.state.log.iter() {
        let tag = match entry.kind {
            LogKind::Story => "~",
            LogKind::System => "!",
        };
        println!("  {} {}", tag, entry.message);
    }
    println!();
}

fn display_status<S>(session: &GameSession<S>, cache: &IconCache) {
    let progress = &session.state.progress;
    let haunting = progress.haunting();
    println!();
    println!(
        "Level {} | Stars {} | Exp {} | Chapter {}",
        progress.level, progress.stars, progress.exp, progress.story_chapter
    );
    println!(
        "Haunting: reveal {}, ghost {:.0}%, fog {:.0}%{}{}",
        haunting.reveal_level,
        haunting.ghost_opacity * 100.0,
        haunting.fog_intensity * 100.0,
        if haunting.eyes_visible { ", eyes in the dark" } else { "" },
        if haunting.bloodstain_visible { ", blood on the wall" } else { "" },
    );
    let icons = match cache.status() {
        AssetStatus::Idle => "idle".to_string(),
        AssetStatus::Generating => format!("generating ({} left)", cache.pending()),
        AssetStatus::RateLimited => format!("rate limited ({} left)", cache.pending()),
    };
    println!("Icons: {} cached, {}", cache.len(), icons);
    println!();
}
