use std::io::{self, stdout, Stdout};

use crate::board::{Board, N_COLS, N_ROWS};
use crate::keyboard::Keyboard;
use crate::suggest::SuggestClient;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{execute, terminal::*};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use actions::Action;
use ui::ScreenLayout;

mod actions;
mod events;
mod ui;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore().unwrap();
        original_hook(panic_info);
    }));
}

/// Initialize the terminal. Mouse capture is on: cells and keyboard
/// buttons are clickable.
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    exit: bool,
    board: Board,
    keyboard: Keyboard,
    suggestions: Vec<String>,
    client: SuggestClient,
    layout: ScreenLayout,
    action_tx: mpsc::UnboundedSender<Option<Action>>,
    action_rx: mpsc::UnboundedReceiver<Option<Action>>,
    token: CancellationToken,
    child_token: Option<CancellationToken>,
}

impl App {
    pub fn init(client: SuggestClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        App {
            exit: false,
            board: Board::new(N_ROWS, N_COLS),
            keyboard: Keyboard::russian(),
            suggestions: vec![],
            client,
            layout: ScreenLayout::default(),
            action_tx,
            action_rx,
            token: CancellationToken::new(),
            child_token: None,
        }
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let task = self.handle_events(self.action_tx.clone());

        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;

            if let Some(action) = self.action_rx.recv().await {
                self.update(action);
            }
        }
        task.abort();
        Ok(())
    }

    fn render_frame(&mut self, frame: &mut Frame) {
        // Kept so mouse clicks resolve against the rectangles this
        // frame was drawn into.
        self.layout = ScreenLayout::compute(frame.size(), &self.board, &self.keyboard);
        frame.render_widget(&*self, frame.size());
    }
}
