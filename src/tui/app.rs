use anyhow::Result;
use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::models::{ProgressSnapshot, VisitLog, WeekTracker};
use crate::progress::{Clock, KeyValueStore, ProgressModel};
use crate::tui::confetti::Confetti;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, milestones, progress, stats, statusbar, toast, tracker};
use crate::AppModel;

const FRAME_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub until: Instant,
}

pub struct App<S, C> {
    pub model: ProgressModel<S, C>,
    pub config: AppConfig,
    pub view: View,
    pub should_quit: bool,

    // Cached state (refreshed on tick/action)
    pub now: NaiveDateTime,
    pub snapshot: ProgressSnapshot,
    pub tracker: WeekTracker,
    pub tracker_focus: usize,
    pub toast: Option<Toast>,
    pub confetti: Confetti,
    pub size: (u16, u16),
    last_refresh: Instant,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    pub fn new(model: ProgressModel<S, C>, config: AppConfig) -> Self {
        let now = model.clock().now();
        let snapshot = model.snapshot(now);
        let tracker = WeekTracker::load(model.store());

        App {
            model,
            config,
            view: View::Dashboard,
            should_quit: false,
            now,
            snapshot,
            tracker,
            tracker_focus: 0,
            toast: None,
            confetti: Confetti::default(),
            size: (80, 24),
            last_refresh: Instant::now(),
        }
    }

    /// First frame: greet on a new day and claim a pending celebration.
    pub fn start(&mut self) {
        if !self.model.is_preview() && VisitLog::check_new_day(self.model.store_mut(), self.now.date()) {
            self.show_toast("👋 New day, new progress. Keep going!");
        }
        self.refresh();
    }

    /// Recompute from the clock. Runs on every action and on the slow timer.
    pub fn refresh(&mut self) {
        self.now = self.model.clock().now();
        let tick = self.model.tick();
        self.snapshot = tick.snapshot;
        self.last_refresh = Instant::now();
        if tick.celebrate {
            self.celebrate();
        }
    }

    pub fn on_frame(&mut self) {
        let (w, h) = self.size;
        self.confetti.update(w, h);

        if let Some(t) = &self.toast {
            if Instant::now() >= t.until {
                self.toast = None;
            }
        }

        let refresh_every = Duration::from_secs(self.config.display.refresh_secs.max(1));
        if self.last_refresh.elapsed() >= refresh_every {
            log::debug!("Periodic progress refresh");
            self.refresh();
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }

    fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            until: Instant::now() + Duration::from_secs(self.config.display.toast_secs),
        });
    }

    fn celebrate(&mut self) {
        if self.config.display.confetti {
            let (w, h) = self.size;
            self.confetti.burst(w, h);
        }
        self.show_toast("🎉 GOAL REACHED! The plan is complete!");
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses, ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('a') => {
                self.model.add_day();
                self.show_toast("➕ Day added: great work!");
                self.refresh();
            }
            KeyCode::Char('w') => {
                self.model.add_week();
                self.show_toast("➕ Full week added: impressive!");
                self.refresh();
            }
            KeyCode::Char('r') => {
                self.model.remove_day();
                self.show_toast("➖ Rest day logged: resting is productive too!");
                self.refresh();
            }
            KeyCode::Char('0') => {
                self.model.reset_manual();
                self.show_toast("🔄 Progress reset to automatic");
                self.refresh();
            }
            // Debug: jump to 100% and always show the celebration
            KeyCode::Char('!') => {
                let already = self.model.has_celebrated();
                self.model.jump_to_complete();
                self.refresh();
                if already {
                    self.celebrate();
                }
            }
            KeyCode::Left if self.config.tracker.enabled => {
                self.tracker_focus = self.tracker_focus.saturating_sub(1);
            }
            KeyCode::Right if self.config.tracker.enabled => {
                if self.tracker_focus < 6 {
                    self.tracker_focus += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.config.tracker.enabled => {
                if self.model.is_preview() {
                    self.show_toast("Preview only: the tracker is read-only");
                    return;
                }
                let day = self.tracker_focus as u8;
                if let Err(e) = self.tracker.toggle(self.model.store_mut(), day) {
                    log::warn!("Tracker toggle failed: {}", e);
                }
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }

        if self.confetti.is_active() {
            frame.render_widget(&self.confetti, frame.area());
        }

        if let Some(t) = &self.toast {
            toast::render(frame, &t.message);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let tracker_height = if self.config.tracker.enabled { 3 } else { 0 };
        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),              // header
                Constraint::Length(8),              // progress
                Constraint::Min(0),                 // body
                Constraint::Length(tracker_height), // week tracker
                Constraint::Length(1),              // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.model.plan(),
            self.now,
            self.model.clock().is_pinned(),
        );
        progress::render(frame, outer_chunks[1], &self.snapshot);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[2]);

        stats::render(frame, columns[0], &self.snapshot);
        milestones::render(frame, columns[1], self.snapshot.total_days_counted);

        if self.config.tracker.enabled {
            tracker::render(frame, outer_chunks[3], &self.tracker, self.tracker_focus);
        }

        statusbar::render(frame, outer_chunks[4], self.config.tracker.enabled);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box, shrinking it on short terminals
        let y = area.height / 4;
        let popup_area = Rect {
            x: area.width / 4,
            y,
            width: area.width / 2,
            height: (area.height / 2).max(14).min(area.height - y),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [a]          ", "Add a study day"),
            ("  [w]          ", "Add a full week"),
            ("  [r]          ", "Log a rest day (-1)"),
            ("  [0]          ", "Reset to automatic"),
            ("  [← →]        ", "Select tracker day"),
            ("  [space]      ", "Tick / clear tracker day"),
            ("  [?]          ", "Toggle help"),
            ("  [Esc] / [q]  ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::gold()),
                Span::styled(label, theme::dim()),
            ]));
        }
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            format!("  Progress refreshes every {}s", self.config.display.refresh_secs),
            theme::dim(),
        )));

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(model: AppModel, config: AppConfig) -> Result<()> {
    let mut app = App::new(model, config);

    let mut terminal = ratatui::init();
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.start();

    let events = EventHandler::new(FRAME_RATE);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize(w, h)) => app.resize(w, h),
            Ok(Event::Frame) => app.on_frame(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    result
}
