use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use simacogo_ai::{
    board::{Board, Cell},
    node::GameNode,
    BOARD_SIZE,
};

pub fn display_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: Vec<String> = (1..=BOARD_SIZE).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols.join(" ") + "\n")))?;

    for row in board.rows() {
        for cell in row {
            stdout
                .queue(PrintStyledContent(
                    style(format!("{} ", cell.symbol()))
                        .attribute(Attribute::Bold)
                        .with(match cell {
                            Cell::X => Color::Red,
                            Cell::O => Color::Yellow,
                            Cell::Empty => Color::DarkGrey,
                        }),
                ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn display_score(node: &GameNode) {
    println!("\nThe current score is: ");
    println!("X : {}", node.x_score());
    println!("O : {}\n", node.o_score());
}
