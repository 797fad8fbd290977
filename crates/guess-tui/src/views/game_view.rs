//! Game View
//!
//! The single game screen: title, guess input box, feedback message,
//! attempt gauge, and key-hint footer, centered in the terminal.

use crate::state::AppState;
use crate::view_models::{GameViewModel, MessageKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, frame: &mut Frame) {
    let theme = &state.theme;
    let vm = GameViewModel::from_state(&state.game);

    // Paint the whole screen background
    let background = Block::default().style(Style::default().bg(theme.bg_primary));
    frame.render_widget(background, area);

    let panel = centered_panel(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // input box
            Constraint::Length(2), // message
            Constraint::Length(1), // attempts gauge
            Constraint::Length(1), // attempts counter
            Constraint::Length(2), // hints
        ])
        .split(panel);

    let title = Paragraph::new("Number Guessing Game")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.text_header)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, rows[0]);

    let input = Paragraph::new(vm.input_display.as_str())
        .style(Style::default().fg(theme.text_primary).bg(theme.bg_panel))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.input_border(vm.input_locked))
                .title(" Your guess (0-99) "),
        );
    frame.render_widget(input, rows[1]);

    let message_color = match vm.message_kind {
        MessageKind::None | MessageKind::Info => theme.status_info,
        MessageKind::Warning => theme.status_warning,
        MessageKind::Win => theme.status_success,
        MessageKind::Loss => theme.status_error,
    };
    let message = Paragraph::new(vm.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(message_color));
    frame.render_widget(message, rows[2]);

    let gauge = Gauge::default()
        .ratio(vm.budget_ratio)
        .use_unicode(true)
        .gauge_style(Style::default().fg(gauge_color(state, &vm)).bg(theme.bg_panel))
        .label("");
    frame.render_widget(gauge, rows[3]);

    let attempts = Paragraph::new(vm.attempts_label.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text_muted));
    frame.render_widget(attempts, rows[4]);

    let hints = Paragraph::new(vm.hints.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text_muted));
    frame.render_widget(hints, rows[5]);
}

/// Budget gauge shifts from accent to warning to error as attempts mount
fn gauge_color(state: &AppState, vm: &GameViewModel) -> ratatui::style::Color {
    let theme = &state.theme;
    if vm.budget_ratio >= 0.9 {
        theme.status_error
    } else if vm.budget_ratio >= 0.6 {
        theme.status_warning
    } else {
        theme.accent_primary
    }
}

/// Fixed-size panel centered in the available area
fn centered_panel(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = 11.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
