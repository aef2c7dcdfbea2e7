//! Ratatui-based terminal UI.
//!
//! The TUI provides a sheet list and model selector, then renders the samples
//! and the fitted curve with its equation as the chart caption. Fit errors
//! (degenerate sheets, log-domain violations) surface in the status line
//! instead of exiting.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::pipeline::{self, LoadedSession, RunOutput};
use crate::cli::FitArgs;
use crate::domain::ModelKind;
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::FitChart;

/// Start the TUI.
pub fn run(args: FitArgs) -> Result<(), AppError> {
    let config = crate::app::fit_config_from_args(&args);

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: crate::domain::FitConfig,
    loaded: LoadedSession,
    selected_field: usize,
    selected_sheet: usize,
    run: Option<RunOutput>,
    status: String,
}

impl App {
    fn new(config: crate::domain::FitConfig) -> Result<Self, AppError> {
        let loaded = pipeline::load_session(&config)?;
        let selected_sheet = match &config.sheet {
            Some(name) => loaded
                .session
                .datasets
                .iter()
                .position(|d| &d.name == name)
                .ok_or_else(|| AppError::new(2, format!("No sheet named '{name}'.")))?,
            None => 0,
        };

        let mut app = Self {
            config,
            loaded,
            selected_field: 0,
            selected_sheet,
            run: None,
            status: String::new(),
        };
        app.refit();
        Ok(app)
    }

    fn is_demo(&self) -> bool {
        self.config.data_path.is_none()
    }

    /// Re-run the fit for the selected sheet/model; fit failures become
    /// status messages, not exits.
    fn refit(&mut self) {
        self.config.sheet = self
            .loaded
            .session
            .datasets
            .get(self.selected_sheet)
            .map(|d| d.name.clone());

        match pipeline::run_fit_with_session(&self.config, &self.loaded.session) {
            Ok(run) => {
                self.status = run.fit.to_string();
                self.run = Some(run);
            }
            Err(err) => {
                self.run = None;
                self.status = err.to_string();
            }
        }
    }

    /// Regenerate the demo session (after count/seed changes).
    fn reload_demo(&mut self) {
        match pipeline::load_session(&self.config) {
            Ok(loaded) => {
                self.loaded = loaded;
                let last = self.loaded.session.datasets.len().saturating_sub(1);
                self.selected_sheet = self.selected_sheet.min(last);
                self.refit();
            }
            Err(err) => {
                self.run = None;
                self.status = err.to_string();
            }
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 2 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('m') => {
                self.config.model = next_model(self.config.model);
                self.refit();
            }
            KeyCode::Char('r') => {
                if self.is_demo() {
                    self.config.sample_seed = self.config.sample_seed.wrapping_add(1);
                    self.reload_demo();
                } else {
                    self.status = "Reseeding only applies to demo sheets.".to_string();
                }
            }
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => {
                let n = self.loaded.session.datasets.len();
                if n == 0 {
                    return;
                }
                self.selected_sheet = if delta >= 0 {
                    (self.selected_sheet + 1) % n
                } else {
                    (self.selected_sheet + n - 1) % n
                };
                self.refit();
            }
            1 => {
                self.config.model = if delta >= 0 {
                    next_model(self.config.model)
                } else {
                    prev_model(self.config.model)
                };
                self.refit();
            }
            2 => {
                if !self.is_demo() {
                    self.status = "Point count only applies to demo sheets.".to_string();
                    return;
                }
                let next = if delta >= 0 {
                    self.config.sample_count.saturating_add(5)
                } else {
                    self.config.sample_count.saturating_sub(5)
                };
                self.config.sample_count = next.max(2);
                self.reload_demo();
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("lsq", Style::default().fg(Color::Cyan)),
            Span::raw(" — least-squares curve fitting"),
        ]));

        let sheet = self
            .loaded
            .session
            .datasets
            .get(self.selected_sheet)
            .map(|d| d.name.as_str())
            .unwrap_or("-");
        let n = self.run.as_ref().map(|r| r.stats.n_points).unwrap_or(0);

        lines.push(Line::from(Span::styled(
            format!(
                "sheet: {sheet} | model: {} | n={n}",
                self.config.model.display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(run) = &self.run {
            lines.push(Line::from(Span::styled(
                run.fit.to_string(),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Fit").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new(self.status.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let (points, x_bounds, y_bounds) = chart_series(run);

        let widget = FitChart {
            curve: &run.curve,
            points: &points,
            x_bounds,
            y_bounds,
            caption: &self.status,
            x_label: "x",
            y_label: "y",
        };

        frame.render_widget(widget, inner);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let sheet = self
            .loaded
            .session
            .datasets
            .get(self.selected_sheet)
            .map(|d| d.name.as_str())
            .unwrap_or("-");

        let count_label = if self.is_demo() {
            format!("Count: {}", self.config.sample_count)
        } else {
            "Count: (from file)".to_string()
        };

        let items = vec![
            ListItem::new(format!(
                "Sheet: {sheet} ({}/{})",
                self.selected_sheet + 1,
                self.loaded.session.datasets.len()
            )),
            ListItem::new(format!("Model: {}", self.config.model.display_name())),
            ListItem::new(count_label),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  m model  r reseed  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Build the scatter series and chart bounds for Plotters.
fn chart_series(run: &RunOutput) -> (Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let points: Vec<(f64, f64)> = run.dataset.samples.pairs().collect();

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points.iter().chain(run.curve.iter()) {
        if x.is_finite() && y.is_finite() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !(x_min.is_finite() && x_max.is_finite()) || x_max <= x_min {
        x_min = 0.0;
        x_max = 1.0;
    }
    if !(y_min.is_finite() && y_max.is_finite()) || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (points, [x_min, x_max], y_bounds)
}

fn next_model(cur: ModelKind) -> ModelKind {
    match cur {
        ModelKind::Linear => ModelKind::Power,
        ModelKind::Power => ModelKind::Exponential,
        ModelKind::Exponential => ModelKind::Linear,
    }
}

fn prev_model(cur: ModelKind) -> ModelKind {
    match cur {
        ModelKind::Linear => ModelKind::Exponential,
        ModelKind::Power => ModelKind::Linear,
        ModelKind::Exponential => ModelKind::Power,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_cycle_is_a_bijection() {
        for kind in [ModelKind::Linear, ModelKind::Power, ModelKind::Exponential] {
            assert_eq!(prev_model(next_model(kind)), kind);
        }
    }
}
