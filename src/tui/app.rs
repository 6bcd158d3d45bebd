//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the project data and
//! navigation state, applies logical input actions to it, and renders the
//! two-pane layout: project list on the left, the selected project's
//! tasks on the right, and a help line along the bottom.

use std::io;

use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame, Terminal,
};

use crate::project::Project;
use crate::tui::colors::{HOT_PINK, STEEL_BLUE};
use crate::tui::enums::{Action, Pane};
use crate::tui::keymap::{action_for, help_line};

/// Main application state for the terminal user interface.
///
/// Owns the full data set and the navigation position. The event loop is
/// the only mutator, so every transition is a plain method call that can
/// be driven by synthetic actions in tests.
pub struct App {
    projects: Vec<Project>,
    focus: Pane,
    project_index: usize,
    task_index: usize,
    width: u16,
    height: u16,
}

impl App {
    /// Create a new App over the given projects, focused on the first one.
    pub fn new(projects: Vec<Project>) -> Self {
        App {
            projects,
            focus: Pane::Projects,
            project_index: 0,
            task_index: 0,
            width: 0,
            height: 0,
        }
    }

    /// The currently selected project.
    fn selected_project(&self) -> &Project {
        &self.projects[self.project_index]
    }

    /// Task cursor clamped to the selected project's list.
    ///
    /// `task_index` is not reset when the selected project changes, so it
    /// can point past the end of a shorter task list.
    fn clamped_task_index(&self) -> usize {
        let len = self.selected_project().tasks.len();
        self.task_index.min(len.saturating_sub(1))
    }

    /// Toggle the completion state of the task under the cursor.
    fn toggle_selected_task(&mut self) {
        let idx = self.clamped_task_index();
        if let Some(task) = self.projects[self.project_index].tasks.get_mut(idx) {
            task.toggle();
        }
    }

    /// Record the viewport size; panes are sized from it on the next draw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Apply one logical action to the navigation state.
    ///
    /// Transitions are total: out-of-range moves clamp silently and do
    /// not wrap. Returns true if the application should quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Up => match self.focus {
                Pane::Projects => {
                    if self.project_index > 0 {
                        self.project_index -= 1;
                    }
                }
                Pane::Tasks => {
                    if self.task_index > 0 {
                        self.task_index -= 1;
                    }
                }
            },
            Action::Down => match self.focus {
                Pane::Projects => {
                    if self.project_index + 1 < self.projects.len() {
                        self.project_index += 1;
                    }
                }
                Pane::Tasks => {
                    if self.task_index + 1 < self.selected_project().tasks.len() {
                        self.task_index += 1;
                    }
                }
            },
            Action::Left => {
                self.focus = Pane::Projects;
                self.task_index = 0;
            }
            Action::Right => self.focus = Pane::Tasks,
            Action::Select => match self.focus {
                Pane::Projects => self.focus = Pane::Tasks,
                Pane::Tasks => self.toggle_selected_task(),
            },
            // Bound and shown in help; no creation flow.
            Action::New => {}
        }
        false
    }

    /// Block for the next terminal event and apply it.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for(key) {
                    return Ok(self.apply(action));
                }
            }
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        Ok(false)
    }

    /// Build the left-pane lines: one per project, the selected entry
    /// highlighted regardless of focus.
    fn project_lines(&self) -> Vec<Line<'_>> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                if i == self.project_index {
                    Line::from(Span::styled(
                        project.name.as_str(),
                        Style::default().bg(HOT_PINK),
                    ))
                } else {
                    Line::from(project.name.as_str())
                }
            })
            .collect()
    }

    /// Build the right-pane lines: the selected project's name as a
    /// header, then one row per task showing the cursor glyph, the
    /// completion marker, and the task name.
    fn task_lines(&self) -> Vec<Line<'_>> {
        let project = self.selected_project();
        let cursor_row = self.clamped_task_index();

        let mut lines = vec![
            Line::from(Span::styled(
                project.name.as_str(),
                Style::default().fg(STEEL_BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, task) in project.tasks.iter().enumerate() {
            let cursor = if self.focus == Pane::Tasks && i == cursor_row {
                Span::styled(">", Style::default().fg(HOT_PINK))
            } else {
                Span::raw(" ")
            };
            let marker = if task.done { "[x]" } else { "[ ]" };
            let name = if task.done {
                Span::styled(
                    task.name.as_str(),
                    Style::default().add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                Span::raw(task.name.as_str())
            };
            lines.push(Line::from(vec![cursor, Span::raw(marker), Span::raw(" "), name]));
        }

        lines
    }

    /// Render the project and task panes side by side. The left pane
    /// takes a quarter of the last known viewport width, the right pane
    /// the rest, separated by the right pane's left border.
    fn render_panes(&self, f: &mut Frame, area: Rect) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(self.width / 4), Constraint::Min(0)].as_ref())
            .split(area);

        let projects = Paragraph::new(self.project_lines())
            .block(Block::default().padding(Padding::new(2, 2, 1, 1)));
        f.render_widget(projects, panes[0]);

        let tasks = Paragraph::new(self.task_lines()).block(
            Block::default()
                .borders(Borders::LEFT)
                .padding(Padding::new(2, 2, 1, 1)),
        );
        f.render_widget(tasks, panes[1]);
    }

    /// Render the help line at the bottom of the screen.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(help_line()), area);
    }

    /// Render the full frame: two panes above a single help line. The
    /// panes get the viewport height minus the help line.
    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.height.saturating_sub(1)),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_panes(f, chunks[0]);
        self.render_help(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Seeds the viewport from the current terminal size, then renders
    /// and processes input until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let (width, height) = crossterm::terminal::size()?;
        self.resize(width, height);

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
