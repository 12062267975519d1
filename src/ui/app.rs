use crate::game::{GameEngine, GameEvent, GameStatus, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::error;

/// Lines of event history kept for display.
const LOG_CAPACITY: usize = 64;

pub struct App {
    engine: GameEngine<Vec<GameEvent>>,
    selected_column: usize,
    should_quit: bool,
    log: Vec<String>,
}

impl App {
    pub fn new(engine: GameEngine<Vec<GameEvent>>) -> Self {
        let mut app = App {
            engine,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            log: Vec::new(),
        };
        app.push_message("Press 's' to start.");
        app
    }

    pub fn engine(&self) -> &GameEngine<Vec<GameEvent>> {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
                Ok(())
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_token(),
            KeyCode::Char('s') => self.engine.start().map(|_| ()),
            KeyCode::Char('r') => self.engine.restart().map(|_| ()),
            KeyCode::Char('h') => self.engine.switch_mode(true).map(|_| ()),
            KeyCode::Char('c') => self.engine.switch_mode(false).map(|_| ()),
            _ => Ok(()),
        };

        if let Err(err) = result {
            error!(%err, "command failed");
            self.push_message(format!("Error: {err}"));
        }
        self.collect_events();
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) -> Result<(), crate::error::GameError> {
        match self.engine.status() {
            GameStatus::NotStarted => {
                self.push_message("Press 's' to start the game.");
                Ok(())
            }
            GameStatus::Won(_) | GameStatus::Draw => {
                self.push_message("Game over! Press 'r' to restart.");
                Ok(())
            }
            GameStatus::InProgress => self.engine.request_drop(self.selected_column).map(|_| ()),
        }
    }

    fn collect_events(&mut self) {
        for event in self.engine.drain_events() {
            self.push_message(event.to_string());
        }
    }

    fn push_message(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
        if self.log.len() > LOG_CAPACITY {
            let excess = self.log.len() - LOG_CAPACITY;
            self.log.drain(..excess);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}
