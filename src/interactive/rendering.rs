//! TUI rendering with ratatui
//!
//! Gallows, masked word and guess history for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, Outcome};
use crate::output::formatters::{gallows, letter_list, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

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
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Tries and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

    let Some(game) = app.game.as_ref() else {
        let paragraph = Paragraph::new("Waiting for a word...")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut content: Vec<Line> = gallows(game.tries_remaining(), game.max_tries())
        .iter()
        .map(|&row| Line::from(row))
        .collect();
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        board_word(game),
        Style::default()
            .fg(word_color(game.outcome()))
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Incorrect guesses: "),
        Span::styled(
            letter_list(game.wrong_guesses()),
            Style::default().fg(Color::Red),
        ),
    ]));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Masked word while playing, the full word once the game is decided
fn board_word(game: &GameState) -> String {
    if game.outcome().is_terminal() {
        spaced(game.target().text())
    } else {
        spaced(&game.render_masked())
    }
}

const fn word_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::InProgress => Color::Yellow,
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tries gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_tries(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, max) = app
        .game
        .as_ref()
        .map_or((app.config.max_tries, app.config.max_tries), |g| {
            (g.tries_remaining(), g.max_tries())
        });

    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(remaining) / f64::from(max)
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Remaining Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
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
    let hidden = "*".repeat(app.word_buffer.chars().count());
    let (title, content, color) = match app.input_mode {
        InputMode::WordEntry => (
            " Enter the word to guess | Enter to start | ESC to quit ",
            hidden,
            Color::Cyan,
        ),
        InputMode::Guessing => (
            " Press a letter to guess | ESC to quit ",
            String::new(),
            Color::Yellow,
        ),
        InputMode::Finished => (
            " Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
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
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, area);
}
