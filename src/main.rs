use anyhow::{bail, Result};
use clap::Parser;
use indicatif::ProgressBar;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};
use std::time::Instant;

use simacogo_ai::{
    board::Marker,
    node::{new_game, GameNode},
    search::{SearchOptions, Searcher},
    BOARD_SIZE,
};

mod render;

/// Play Simacogo against a minimax agent
#[derive(Parser)]
#[command(name = "simacogo", about = "Play Simacogo against the computer")]
struct Cli {
    /// Search depth in plies (0-10), asked for interactively if omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    ply: Option<u8>,

    /// Use plain minimax instead of alpha-beta pruning
    #[arg(long)]
    minimax: bool,

    /// Mirror the human's last column when all computer moves look equal
    #[arg(long)]
    avoid_winning: bool,

    /// Let the computer place the first piece
    #[arg(long)]
    computer_first: bool,
}

fn read_line() -> Result<String> {
    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        bail!("input closed");
    }
    Ok(buffer)
}

fn prompt_ply() -> Result<usize> {
    loop {
        print!("Choose a ply: (0 - 10) ");
        stdout().flush()?;
        match read_line()?.trim().parse::<usize>() {
            Ok(ply @ 0..=10) => return Ok(ply),
            Ok(ply) => println!("A ply of {} is out of range", ply),
            Err(_) => println!("Oops! That's not a number. Try again!"),
        }
    }
}

fn human_move(node: &GameNode) -> Result<Option<GameNode>> {
    print!(
        "It's your move! Choose a slot number (1 - {}) to drop your X marker in > ",
        BOARD_SIZE
    );
    stdout().flush()?;
    let input_str = read_line()?;

    let column = match input_str.trim().parse::<usize>() {
        Ok(column @ 1..=BOARD_SIZE) => column - 1,
        Ok(column) => {
            println!("Slot {} doesn't exist, try choosing another number...", column);
            return Ok(None);
        }
        Err(_) => {
            println!("Invalid number: {}", input_str.trim());
            return Ok(None);
        }
    };

    match node.apply_move(column, Marker::X) {
        Ok(next) => Ok(Some(next)),
        Err(err) => {
            println!("{}", err);
            Ok(None)
        }
    }
}

fn computer_move(node: &GameNode, options: SearchOptions) -> Result<GameNode> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("The computer is thinking...");
    spinner.enable_steady_tick(100);

    let start_time = Instant::now();
    let mut searcher = Searcher::new(options);
    let decision = searcher.decide(node);
    let finish_time = Instant::now();
    spinner.finish_and_clear();

    let column = decision?;
    println!("The computer chose slot {}", column + 1);
    println!(
        "Decision took {} ms, {} positions searched",
        (finish_time - start_time).as_millis(),
        searcher.node_count
    );
    Ok(node.apply_move(column, Marker::O)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Let's play Simacogo!\n");

    let depth = match cli.ply {
        Some(ply) => ply as usize,
        None => prompt_ply()?,
    };
    let options = SearchOptions {
        depth,
        use_alpha_beta: !cli.minimax,
        avoid_winning: cli.avoid_winning,
    };

    let mut node = new_game();
    let mut human_turn = !cli.computer_first;

    // game loop
    while !node.is_terminal() {
        println!("\nThe current board looks like this: \n");
        render::display_board(node.board())?;
        render::display_score(&node);

        if human_turn {
            match human_move(&node)? {
                Some(next) => node = next,
                // try the move again
                None => continue,
            }
        } else {
            node = computer_move(&node, options)?;
        }
        human_turn = !human_turn;
    }

    // end state
    render::display_board(node.board())?;
    render::display_score(&node);
    match node.x_score().cmp(&node.o_score()) {
        Ordering::Greater => println!("You win!"),
        Ordering::Less => println!("The computer wins!"),
        Ordering::Equal => println!("It's a tie!"),
    }
    Ok(())
}
