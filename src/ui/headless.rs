use std::io::{self, BufRead, Write};

use crate::game::{Board, Cell, EventSink, GameEngine, GameEvent, COLS, ROWS};

/// A line of input to the headless driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop(usize),
    Start,
    Restart,
    HumanVsHuman,
    HumanVsComputer,
    Board,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if let Ok(column) = line.parse::<usize>() {
            return Some(Command::Drop(column));
        }
        match line.to_ascii_lowercase().as_str() {
            "start" | "s" => Some(Command::Start),
            "restart" | "r" => Some(Command::Restart),
            "hvh" => Some(Command::HumanVsHuman),
            "hvc" => Some(Command::HumanVsComputer),
            "board" | "b" => Some(Command::Board),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Writes each event on its own line.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        LineSink { out }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for LineSink<W> {
    fn emit(&mut self, event: GameEvent) {
        // Output errors surface on the next explicit write by the driver.
        let _ = writeln!(self.out, "{event}");
    }
}

/// Plain-text rendering of the board, top row first.
pub fn board_to_string(board: &Board, symbols: [char; 2]) -> String {
    let mut text = String::new();
    for col in 0..COLS {
        text.push_str(&col.to_string());
    }
    text.push('\n');
    for row in 0..ROWS {
        for col in 0..COLS {
            text.push(match board.get(row, col) {
                Cell::Empty => '.',
                Cell::Occupied(id) => symbols[id.index()],
            });
        }
        text.push('\n');
    }
    text
}

/// Drive the engine from line commands until input ends or `quit`.
///
/// Events go to the engine's [`LineSink`]; errors and board dumps are written
/// to the same writer so the transcript stays in order.
pub fn run<R: BufRead, W: Write>(engine: &mut GameEngine<LineSink<W>>, input: R) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse(&line) else {
            writeln!(engine.sink_mut().get_mut(), "unknown command: {}", line.trim())?;
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Board => {
                let text = board_to_string(engine.board(), ['X', 'O']);
                write!(engine.sink_mut().get_mut(), "{text}")?;
                continue;
            }
            Command::Drop(column) => engine.request_drop(column),
            Command::Start => engine.start(),
            Command::Restart => engine.restart(),
            Command::HumanVsHuman => engine.switch_mode(true),
            Command::HumanVsComputer => engine.switch_mode(false),
        };

        if let Err(err) = result {
            tracing::warn!(%err, "command rejected");
            writeln!(engine.sink_mut().get_mut(), "error: {err}")?;
        }
        engine.sink_mut().get_mut().flush()?;
    }
    Ok(())
}
