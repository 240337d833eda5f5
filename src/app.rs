//! App: terminal init, fixed-rate main loop, key dispatch, gravity cadence.

use crate::GameConfig;
use crate::figure::Rotation;
use crate::game::GameState;
use crate::input::{Action, key_to_action};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    GameOver,
}

pub struct App {
    config: GameConfig,
    theme: Theme,
    state: GameState,
    screen: Screen,
    paused: bool,
    /// Frame counter driving the gravity cadence (one fall per fall_period).
    frame: u64,
}

impl App {
    pub fn new(config: GameConfig, theme: Theme) -> Self {
        let state = GameState::new(config.width, config.height);
        Self {
            config,
            theme,
            state,
            screen: Screen::Playing,
            paused: false,
            frame: 0,
        }
    }

    /// Run the game to completion and return the final score. Terminal state
    /// is restored even when the loop exits mid-frame on game over.
    pub fn run(&mut self) -> Result<u32> {
        use crossterm::{
            execute,
            terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

        let result = self.run_loop(&mut terminal);

        execute!(std::io::stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;

        result.map(|()| self.state.score)
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        // Input poll budget per frame; input arriving earlier ends the wait.
        let frame_budget = Duration::from_millis(1000 / u64::from(self.config.fps.max(1)));
        loop {
            terminal.draw(|f| {
                crate::ui::draw(f, &self.state, &self.theme, self.screen, self.paused);
            })?;

            // At most one pending key per frame; an empty window is a no-op.
            if event::poll(frame_budget)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release {
                        match self.screen {
                            // One final key press acknowledges the score.
                            Screen::GameOver => return Ok(()),
                            Screen::Playing => {
                                if self.dispatch(key_to_action(key)) {
                                    return Ok(());
                                }
                            }
                        }
                    }
                }
            }

            if self.screen == Screen::Playing && !self.paused {
                if self.frame % self.config.fall_period == 0 {
                    self.state.tick_gravity();
                }
                self.frame += 1;
                if self.state.game_over {
                    self.screen = Screen::GameOver;
                }
            }
        }
    }

    /// Apply one action to the game. Returns true when the app should quit.
    fn dispatch(&mut self, action: Action) -> bool {
        if self.paused {
            match action {
                Action::Quit => return true,
                Action::Pause => self.paused = false,
                _ => {}
            }
            return false;
        }
        match action {
            Action::Quit => return true,
            Action::Pause => self.paused = true,
            Action::MoveLeft => {
                self.state.move_left();
            }
            Action::MoveRight => {
                self.state.move_right();
            }
            Action::RotateLeft => {
                self.state.try_rotate(Rotation::Left);
            }
            Action::RotateRight => {
                self.state.try_rotate(Rotation::Right);
            }
            Action::SoftDrop => self.state.soft_drop(),
            Action::HardDrop => {
                self.state.hard_drop();
                if self.state.game_over {
                    self.screen = Screen::GameOver;
                }
            }
            Action::None => {}
        }
        false
    }
}
