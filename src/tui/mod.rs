// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): one document, three input
//! modes, a cell-grid viewport, and a one-row status line. The event loop is
//! tick-driven — it polls fast while the camera interpolates and drops to an
//! idle cadence once motion converges.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::model::{Camera, Document, NodeId};
use crate::ops;
use crate::query;
use crate::render::{render_scene, Canvas};
use crate::store;

/// Fraction of the remaining distance the camera covers per tick.
const CAMERA_SMOOTHNESS: f64 = 0.25;
/// World cells per pan key press at zoom 1; zoomed-out panning covers more.
const PAN_STEP: f64 = 5.0;
/// Poll timeout while the camera is interpolating (~60 Hz).
const TICK_POLL: Duration = Duration::from_millis(16);
/// Poll timeout once motion has converged.
const IDLE_POLL: Duration = Duration::from_millis(250);

const STATUS_FG: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
const STATUS_BG: Color = Color::Rgb(0x2A, 0x2A, 0x2A);
const BADGE_NORMAL_BG: Color = Color::Rgb(0x00, 0xD7, 0x87);
const BADGE_EDIT_BG: Color = Color::Rgb(0xFF, 0xB8, 0x6C);
const BADGE_LINK_BG: Color = Color::Rgb(0xFF, 0x79, 0xC6);

const HELP_HINT: &str = "arrows:select wasd:pan +/-:zoom Enter:sibling Tab:child \
                         e:edit x:delete L:link c:center Ctrl+S:save q:quit";

/// What an edit-mode commit does with the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditTarget {
    NewChild,
    NewSibling,
    Existing,
}

/// Interaction mode with its mode-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Normal,
    Edit { buffer: String, target: EditTarget },
    Link { source: NodeId },
}

struct App {
    document: Document,
    mode: Mode,
    status: String,
    file_path: PathBuf,
    camera_moving: bool,
    should_quit: bool,
}

/// Runs the interactive editor against `path`.
///
/// An existing file is loaded on startup; otherwise the editor starts with a
/// fresh single-root document and writes to that path on save.
pub fn run(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(path);
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        let timeout = if app.camera_moving { TICK_POLL } else { IDLE_POLL };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
        app.tick();
    }

    Ok(())
}

impl App {
    fn new(file_path: PathBuf) -> Self {
        let mut app = Self {
            document: Document::new(),
            mode: Mode::Normal,
            status: String::new(),
            file_path,
            camera_moving: false,
            should_quit: false,
        };
        if app.file_path.exists() {
            app.load_from_disk();
        }
        app
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Advances camera interpolation; disarms fast polling on convergence.
    fn tick(&mut self) {
        if self.camera_moving {
            self.camera_moving = self.document.camera_mut().update(CAMERA_SMOOTHNESS);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Edit { .. } => self.handle_edit_key(key),
            Mode::Link { .. } => self.handle_link_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('o') => self.load_from_disk(),
                _ => {}
            }
            return;
        }

        let pan_step = PAN_STEP / self.document.camera().zoom;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Up => self.select_in_direction(0.0, -1.0),
            KeyCode::Down => self.select_in_direction(0.0, 1.0),
            KeyCode::Left => self.select_in_direction(-1.0, 0.0),
            KeyCode::Right => self.select_in_direction(1.0, 0.0),

            KeyCode::Char('w') | KeyCode::Char('k') => self.pan(0.0, -pan_step),
            KeyCode::Char('s') | KeyCode::Char('j') => self.pan(0.0, pan_step),
            KeyCode::Char('a') | KeyCode::Char('h') => self.pan(-pan_step, 0.0),
            KeyCode::Char('d') | KeyCode::Char('l') => self.pan(pan_step, 0.0),

            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.document.camera_mut().zoom_in();
                self.camera_moving = true;
                self.set_status("");
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.document.camera_mut().zoom_out();
                self.camera_moving = true;
                self.set_status("");
            }
            KeyCode::Char('0') => {
                self.document.set_camera(Camera::new());
                self.camera_moving = false;
                self.set_status("Camera reset");
            }

            KeyCode::Enter => self.begin_create(EditTarget::NewSibling),
            KeyCode::Tab => self.begin_create(EditTarget::NewChild),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => self.delete_selected(),
            KeyCode::Char('L') => self.begin_link(),

            KeyCode::Char(']') => self.cycle_selection(query::cycle_next(&self.document)),
            KeyCode::Char('[') => self.cycle_selection(query::cycle_prev(&self.document)),

            KeyCode::Char('c') => self.center_on_selected(),
            KeyCode::Char('?') => self.set_status(HELP_HINT),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.set_status("Cancelled");
            }
            KeyCode::Enter => {
                let mode = std::mem::replace(&mut self.mode, Mode::Normal);
                if let Mode::Edit { buffer, target } = mode {
                    if !buffer.is_empty() {
                        self.commit_edit(&buffer, target);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Mode::Edit { buffer, .. } = &mut self.mode {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Mode::Edit { buffer, .. } = &mut self.mode {
                    buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    fn handle_link_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.set_status("Link cancelled");
            }
            KeyCode::Tab => self.cycle_selection(query::cycle_next(&self.document)),
            KeyCode::BackTab => self.cycle_selection(query::cycle_prev(&self.document)),
            KeyCode::Enter => {
                let mode = std::mem::replace(&mut self.mode, Mode::Normal);
                if let Mode::Link { source } = mode {
                    let Some(target) = self.document.selected().cloned() else {
                        return;
                    };
                    match ops::link(&mut self.document, &source, &target) {
                        Ok(()) => {
                            self.set_status(format!("Created link {source} \u{2192} {target}"));
                        }
                        Err(err) => self.set_status(err.to_string()),
                    }
                }
            }
            _ => {}
        }
    }

    fn begin_create(&mut self, target: EditTarget) {
        self.mode = Mode::Edit {
            buffer: String::new(),
            target,
        };
        let hint = match target {
            EditTarget::NewChild => "New child: type text and press Enter",
            _ => "New sibling: type text and press Enter",
        };
        self.set_status(hint);
    }

    fn begin_edit(&mut self) {
        let Some(node) = self.document.selected_node() else {
            return;
        };
        self.mode = Mode::Edit {
            buffer: node.text.clone(),
            target: EditTarget::Existing,
        };
        self.set_status("Edit node text (ESC to cancel, Enter to save)");
    }

    fn begin_link(&mut self) {
        let Some(source) = self.document.selected().cloned() else {
            return;
        };
        self.mode = Mode::Link { source };
        self.set_status("Select target node (ESC to cancel)");
    }

    fn commit_edit(&mut self, text: &str, target: EditTarget) {
        let Some(anchor) = self.document.selected().cloned() else {
            return;
        };
        let result = match target {
            EditTarget::NewChild => ops::create_child(&mut self.document, &anchor, text)
                .map(|id| format!("Created child node {id}")),
            EditTarget::NewSibling => ops::create_sibling(&mut self.document, &anchor, text)
                .map(|id| format!("Created sibling node {id}")),
            EditTarget::Existing => ops::set_text(&mut self.document, &anchor, text)
                .map(|()| "Node updated".to_owned()),
        };
        match result {
            Ok(status) => self.set_status(status),
            Err(err) => self.set_status(err.to_string()),
        }
    }

    fn select_in_direction(&mut self, dx: f64, dy: f64) {
        if let Some(id) = query::select_in_direction(&self.document, dx, dy) {
            self.document.set_selected(Some(id));
            self.set_status("");
        }
    }

    fn cycle_selection(&mut self, next: Option<NodeId>) {
        if let Some(id) = next {
            self.document.set_selected(Some(id));
            self.set_status("");
        }
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        self.document.camera_mut().pan(dx, dy);
        self.camera_moving = true;
        self.set_status("");
    }

    fn center_on_selected(&mut self) {
        let Some(node) = self.document.selected_node() else {
            return;
        };
        let (cx, cy) = node.center();
        self.document.camera_mut().center_on(cx, cy);
        self.camera_moving = true;
        self.set_status("Centered on node");
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.document.selected().cloned() else {
            return;
        };
        match ops::delete_node(&mut self.document, &id) {
            Ok(()) => self.set_status(format!("Deleted node {id}")),
            Err(err) => self.set_status(err.to_string()),
        }
    }

    fn save(&mut self) {
        match store::save(&self.file_path, &self.document) {
            Ok(()) => self.set_status(format!("Saved to {}", self.file_path.display())),
            Err(err) => self.set_status(format!("Error saving: {err}")),
        }
    }

    fn load_from_disk(&mut self) {
        match store::load(&self.file_path) {
            Ok(mut document) => {
                // The palette cursor is session state and survives reloads.
                document.set_palette_cursor(self.document.palette_cursor());
                self.document = document;
                self.camera_moving = false;
                self.set_status(format!("Loaded from {}", self.file_path.display()));
            }
            Err(err) => self.set_status(format!("Error loading: {err}")),
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());
    let canvas_area = layout[0];
    let status_area = layout[1];

    let canvas = render_scene(
        &app.document,
        canvas_area.width as usize,
        canvas_area.height as usize,
    );
    frame.render_widget(Paragraph::new(canvas_text(&canvas)), canvas_area);
    frame.render_widget(
        Paragraph::new(status_line(app, status_area.width as usize)),
        status_area,
    );
}

/// Converts canvas rows into styled lines, one span per color run.
fn canvas_text(canvas: &Canvas) -> Text<'static> {
    let mut lines = Vec::with_capacity(canvas.height());
    for row in canvas.rows() {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_color: Option<Color> = None;

        for cell in row {
            if cell.color != run_color {
                if !run.is_empty() {
                    spans.push(color_span(std::mem::take(&mut run), run_color));
                }
                run_color = cell.color;
            }
            run.push(cell.ch);
        }
        if !run.is_empty() {
            spans.push(color_span(run, run_color));
        }

        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn color_span(text: String, color: Option<Color>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(text, Style::default().fg(color)),
        None => Span::raw(text),
    }
}

fn status_line(app: &App, width: usize) -> Line<'static> {
    let (badge, badge_bg) = match &app.mode {
        Mode::Normal => (" NORMAL ".to_owned(), BADGE_NORMAL_BG),
        Mode::Edit { buffer, .. } => (format!(" EDIT: {buffer}_ "), BADGE_EDIT_BG),
        Mode::Link { source } => (format!(" LINK: {source} \u{2192} ? "), BADGE_LINK_BG),
    };
    let badge_style = Style::default()
        .fg(Color::Black)
        .bg(badge_bg)
        .add_modifier(Modifier::BOLD);

    let message = format!(" {}", app.status);
    let camera = app.document.camera();
    let summary = format!(
        " Nodes: {} | Zoom: {:.1}x | Pos: ({:.0}, {:.0}) | ?: help ",
        app.document.nodes().len(),
        camera.zoom,
        camera.x,
        camera.y,
    );

    let used = badge.chars().count() + message.chars().count() + summary.chars().count();
    let spacing = " ".repeat(width.saturating_sub(used));

    let base = Style::default().fg(STATUS_FG).bg(STATUS_BG);
    Line::from(vec![
        Span::styled(badge, badge_style),
        Span::styled(message, base),
        Span::styled(spacing, base),
        Span::styled(summary, base),
    ])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
