use std::time::{Duration, Instant};

use byeol_config::Config;
use byeol_core::{ColorTheme, EffectSpeed};
use byeol_effects::EffectState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Load config before touching the terminal so a malformed file reports
    // cleanly instead of into a raw-mode screen.
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the effect paused?
    paused: bool,
    /// Current color theme.
    theme: ColorTheme,
    /// Current effect speed.
    speed: EffectSpeed,
    /// Whether the twinkling backdrop is drawn.
    backdrop: bool,
    /// Star effect state.
    effect: EffectState,
    /// Effect clock in milliseconds; frozen while paused.
    elapsed_ms: u64,
    /// Wall-clock instant of the previous frame.
    last_frame: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            paused: false,
            theme: config.theme,
            speed: config.speed,
            backdrop: config.backdrop,
            effect: EffectState::new(config.stars),
            elapsed_ms: 0,
            last_frame: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.last_frame = Instant::now();
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance the effect clock. Paused frames contribute nothing, so the
    /// effect resumes exactly where it stopped.
    fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        if !self.paused {
            self.elapsed_ms += delta.as_millis() as u64;
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.effect
            .render(frame, self.elapsed_ms, self.speed, self.theme, self.backdrop);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Effect
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let color = self.theme.color();
        let mut help = vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "space".bold().fg(color),
            " pause  ".dark_gray(),
            "c".bold().fg(color),
            " theme  ".dark_gray(),
            "s".bold().fg(color),
            " speed  ".dark_gray(),
            "b".bold().fg(color),
            " backdrop".dark_gray(),
        ];
        if self.paused {
            help.push("  paused".bold().fg(color));
        }
        frame.render_widget(Line::from(help).centered(), chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout for smooth animation updates.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('b')) => self.toggle_backdrop(),
            _ => {}
        }
    }

    /// Freeze or resume the effect clock.
    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Cycle through effect speeds.
    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
    }

    /// Toggle the twinkling backdrop.
    fn toggle_backdrop(&mut self) {
        self.backdrop = !self.backdrop;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
