//! TUI rendering with ratatui
//!
//! Draws the guess board, message log, input box and status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ATTEMPT_LIMIT, CODE_LENGTH, DigitStatus};
use crate::output::formatters::distribution_lines;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Legend and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile color for a board cell; `None` is an empty or pending cell
#[must_use]
pub fn cell_style(status: Option<DigitStatus>) -> Style {
    match status {
        Some(DigitStatus::Correct) => Style::new()
            .fg(Color::White)
            .bg(Color::Rgb(0x6a, 0xaa, 0x64))
            .add_modifier(Modifier::BOLD),
        Some(DigitStatus::Misplaced) => Style::new()
            .fg(Color::White)
            .bg(Color::Rgb(0xc9, 0xb4, 0x58))
            .add_modifier(Modifier::BOLD),
        Some(DigitStatus::Wrong) => Style::new()
            .fg(Color::White)
            .bg(Color::Rgb(0x78, 0x7c, 0x7e))
            .add_modifier(Modifier::BOLD),
        None => Style::new().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 NUMBERLE - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); ATTEMPT_LIMIT])
        .flex(Flex::Center)
        .split(inner);

    let history = app.game.history();
    for (row, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); CODE_LENGTH])
            .flex(Flex::Center)
            .split(*row_area);

        for (col, cell_area) in cells.iter().enumerate() {
            let (text, status) = if let Some(feedback) = history.get(row) {
                let slot = feedback[col];
                (slot.value.to_string(), Some(slot.status))
            } else if row == history.len() && app.input_mode == InputMode::Guess {
                let pending = app.input_buffer.chars().nth(col);
                (pending.map(String::from).unwrap_or_default(), None)
            } else {
                (String::new(), None)
            };

            let border_style = if status.is_some() {
                cell_style(status)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let cell = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(cell_style(status))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Plain)
                        .border_style(border_style),
                );
            f.render_widget(cell, *cell_area);
        }
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                       // Legend
            Constraint::Length(ATTEMPT_LIMIT as u16 + 2), // Wins by attempt
            Constraint::Min(3),                          // Messages
        ])
        .split(area);

    render_legend(f, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = distribution_lines(&app.stats)
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(Color::Green)))
        .collect();

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Wins by Attempt ")
            .borders(Borders::ALL),
    );

    f.render_widget(distribution, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let entry = |status: DigitStatus, text: &'static str| {
        Line::from(vec![
            Span::styled(" 5 ", cell_style(Some(status))),
            Span::raw(" "),
            Span::raw(text),
        ])
    };

    let legend = Paragraph::new(vec![
        entry(DigitStatus::Correct, "right digit, right spot"),
        entry(DigitStatus::Misplaced, "in the code, wrong spot"),
        entry(DigitStatus::Wrong, "no unclaimed match"),
    ])
    .block(Block::default().title(" Legend ").borders(Borders::ALL));

    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.game.is_won() => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " Out of attempts | Press 'n' for new game or 'q' to quit ",
            format!("The code was {}", app.game.secret()),
            Color::Red,
        ),
        InputMode::Guess => (
            " Enter 4 digits | Enter to submit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts = Paragraph::new(format!("Attempts left: {}", app.game.attempts_left()))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("q/Esc: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
