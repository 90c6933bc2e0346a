use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minesweep_core::{
    Difficulty, EventKind, Game, GameConfig, GameEvent, GameStatus, RandomLayoutGenerator,
};

use command::Command;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Play Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Difficulty preset, ignored when a custom size is given
    #[arg(short, long, value_enum, default_value_t = Level::Beginner)]
    difficulty: Level,

    /// Custom number of rows
    #[arg(long, requires_all = ["columns", "mines"])]
    rows: Option<u16>,

    /// Custom number of columns
    #[arg(long, requires_all = ["rows", "mines"])]
    columns: Option<u16>,

    /// Custom number of mines
    #[arg(long, requires_all = ["rows", "columns"])]
    mines: Option<u32>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final statistics as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Difficulty::Beginner,
            Level::Intermediate => Difficulty::Intermediate,
            Level::Expert => Difficulty::Expert,
        }
    }
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        match (self.rows, self.columns, self.mines) {
            (Some(rows), Some(columns), Some(mines)) => GameConfig::new((rows, columns), mines)
                .with_context(|| format!("Cannot build a {rows}x{columns} board")),
            _ => Ok(Difficulty::from(self.difficulty).config()),
        }
    }
}

fn announce_game_events(game: &mut Game) {
    game.register_handler(EventKind::GameStarted, |_| {
        println!("\nThe game has started!");
    });
    game.register_handler(EventKind::GameWon, |event| {
        if let GameEvent::GameWon { moves } = event {
            println!("\nVICTORY! You cleared the board in {moves} moves.");
        }
    });
    game.register_handler(EventKind::GameLost, |event| {
        if let GameEvent::GameLost { coords: (row, column) } = event {
            println!("\nBOOM! You hit a mine at ({row}, {column}).");
        }
    });
}

fn display(game: &Game) {
    println!("\n{}", render::render_board(&game.board_state()));
    println!("\n{}", render::render_statistics(&game.statistics()));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.game_config()?;
    let generator = args
        .seed
        .map_or_else(RandomLayoutGenerator::from_entropy, RandomLayoutGenerator::new);
    log::debug!("config: {:?}, seed: {}", config, generator.seed());

    let mut game = Game::generate(config, generator);
    announce_game_events(&mut game);

    println!("=== MINESWEEPER ===");
    println!("Commands:");
    println!("  o row col  - open a cell");
    println!("  m row col  - mark/unmark a cell");
    println!("  q          - quit");
    display(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.status() == GameStatus::Ongoing {
        print!("\nCommand: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match line.context("Failed to read command")?.parse::<Command>() {
            Ok(Command::Quit) => {
                println!("Game over!");
                break;
            }
            Ok(Command::Play(action)) => {
                game.apply(action);
                display(&game);
            }
            Err(err) => println!("{err}"),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.statistics())?);
    }
    Ok(())
}
