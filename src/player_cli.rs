#![cfg(feature = "std")]

//! Terminal presentation: board rendering, coordinate input and the status
//! line observer.

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::{Cell, Side},
    config::{BoardView, GRID_SIZE},
    game::{Game, GameObserver, ShotReport},
};
use rand::Rng;

/// Format a coordinate as the user types it, e.g. `(0, 2)` -> `C1`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse a column letter followed by a row number (`B4`, `f6`) into
/// zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    let last_col = (b'A' + GRID_SIZE as u8 - 1) as char;
    if input.len() < 2 {
        return Err(format!(
            "need a column letter and a row number (e.g. A{})",
            GRID_SIZE
        ));
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("no column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("invalid column '{}', use A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("column '{}' out of range, use A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}', use 1-{}", row_str, GRID_SIZE))?;
    if row == 0 || row > GRID_SIZE {
        return Err(format!("row {} out of range, use 1-{}", row, GRID_SIZE));
    }
    Ok((row - 1, col))
}

/// Render two boards side by side: the human's fleet and their shots at
/// the AI.
pub fn render_boards(own: &BoardView, target: &BoardView) -> String {
    let mut out = String::new();
    let header: String = (0..GRID_SIZE)
        .map(|c| format!(" {}", (b'A' + c as u8) as char))
        .collect();
    let width = GRID_SIZE * 2 + 3;
    out.push_str(&format!("{:<w$}    {}\n", "Your Board", "AI Board", w = width));
    out.push_str(&format!("  {:<w$}    {}\n", header, header, w = width - 2));
    for r in 0..GRID_SIZE {
        let left: String = own[r].iter().map(|c| format!(" {}", c.glyph())).collect();
        let right: String = target[r].iter().map(|c| format!(" {}", c.glyph())).collect();
        out.push_str(&format!("{:2}{}     {:2}{}\n", r + 1, left, r + 1, right));
    }
    out.push_str("Legend: S=Ship  X=Hit  O=Miss  .=Unknown/Water\n");
    out
}

pub fn print_boards<R: Rng>(game: &Game<R>) {
    print!(
        "{}",
        render_boards(&game.board_view(Side::Player), &game.board_view(Side::Ai))
    );
}

/// Reads target coordinates for the human from a line-oriented input.
pub struct CliPlayer<I: BufRead> {
    input: I,
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<I: BufRead> CliPlayer<I> {
    pub fn with_input(input: I) -> Self {
        Self { input }
    }

    /// Prompt until a well-formed coordinate is entered.
    ///
    /// Returns `Ok(None)` when the input is closed or the user types `quit`.
    pub fn prompt_target(&mut self) -> anyhow::Result<Option<(usize, usize)>> {
        loop {
            print!("Fire at (e.g. B3, or 'quit'): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match parse_coord(line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(msg) => println!("{}", msg),
            }
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no.
    pub fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        print!("{} [y/N]: ", question);
        io::stdout().flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Prints the status line for each shot and the final result.
pub struct StatusLine;

impl GameObserver for StatusLine {
    fn on_shot(&mut self, report: &ShotReport) {
        println!("{}", report);
    }

    fn on_game_over(&mut self, winner: Side) {
        match winner {
            Side::Player => println!("\n*** You win! ***"),
            Side::Ai => println!("\n*** AI wins! ***"),
        }
    }
}

/// Count of each rendered state, for a one-line summary.
pub fn tally(view: &BoardView) -> (usize, usize) {
    let mut hits = 0;
    let mut misses = 0;
    for cell in view.iter().flatten() {
        match cell {
            Cell::Hit => hits += 1,
            Cell::Miss => misses += 1,
            Cell::Empty | Cell::Ship => {}
        }
    }
    (hits, misses)
}
