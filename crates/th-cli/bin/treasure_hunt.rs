//! Treasure Hunt in the terminal
//!
//! Main entry point for the game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use th_cli::{InputError, Theme, menu, parse_command, parse_item, render_news};
use th_core::{Command, Difficulty, GameConfig, GameLoop, GameLoopResult, GameRng, GameState};

/// Travel from town to town in search of three treasures
#[derive(Parser, Debug)]
#[command(name = "treasure-hunt")]
#[command(author, version, about = "Treasure Hunt - find three treasures before your gold runs out!", long_about = None)]
struct Args {
    /// Hunter name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Difficulty preset
    #[arg(short = 'm', long = "difficulty", value_enum, ignore_case = true, default_value_t)]
    difficulty: Difficulty,

    /// Seed for a reproducible game
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file overriding the difficulty settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print messages without color
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "treasure_hunt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let difficulty = args.difficulty;

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path, difficulty)
            .with_context(|| format!("failed to load settings for {difficulty} mode"))?,
        None => difficulty.config(),
    };

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(%difficulty, seed = rng.seed(), "starting game");

    let theme = if args.no_color { None } else { Some(Theme::detect()) };
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    writeln!(out, "Welcome to Treasure Hunt!")?;
    writeln!(out, "Going hunting for the big treasure, eh?")?;
    let name = match args.name {
        Some(name) => name,
        None => match prompt(&mut out, &mut lines, "What's your name, Hunter? ")? {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            Some(_) => "Hunter".to_string(),
            None => return Ok(()),
        },
    };

    let state = GameState::new(name, config, rng).context("failed to set up the first town")?;
    let mut game = GameLoop::new(state);

    loop {
        let news = game.latest_news();
        if !news.is_empty() {
            writeln!(out, "\n{}", render_news(&news, theme.as_ref()))?;
        }
        writeln!(out, "***")?;
        write!(out, "{}", menu(theme.as_ref()))?;

        let Some(line) = prompt(&mut out, &mut lines, "> ")? else {
            debug!("input closed");
            break;
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(InputError::MissingItem(key)) => {
                let Some(answer) = prompt(&mut out, &mut lines, "What item? ")? else {
                    break;
                };
                let words: Vec<&str> = answer.split_whitespace().collect();
                match parse_item(key, &words) {
                    Ok(item) if key == 'b' => Command::Buy(item),
                    Ok(item) => Command::Sell(item),
                    Err(err) => {
                        writeln!(out, "Yikes! {err}.")?;
                        continue;
                    }
                }
            }
            Err(err) => {
                writeln!(out, "Yikes! {err}.")?;
                continue;
            }
        };

        match game.tick(command).context("the hunter went missing")? {
            GameLoopResult::Continue => {}
            GameLoopResult::PlayerWon(report) | GameLoopResult::PlayerLost(report) => {
                let mut news = game.latest_news();
                if !news.is_empty() {
                    news.newline();
                }
                news.append(report);
                writeln!(out, "\n{}", render_news(&news, theme.as_ref()))?;
                break;
            }
            GameLoopResult::PlayerQuit => {
                writeln!(out, "Fare thee well, {}!", hunter_name(&game))?;
                break;
            }
        }
    }

    Ok(())
}

/// Print a prompt and read one line, `None` once input is closed.
fn prompt(
    out: &mut impl Write,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    lines
        .next()
        .transpose()
        .context("failed to read from stdin")
}

fn hunter_name(game: &GameLoop) -> String {
    game.state()
        .hunter()
        .map_or_else(|| "Hunter".to_string(), |hunter| hunter.name().to_string())
}
