//! TUI pane rendering
//!
//! Stateless render functions for each visible region: the tape strip, the
//! instruction stream, captured program output, and the status bar.

use crate::interpreter::window::WindowView;
use crate::memory::Address;
use crate::parser::instruction::Instruction;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
}

/// Render the tape window as a strip of cells with their addresses, the
/// cell under the head highlighted.
pub fn render_tape_pane(frame: &mut Frame, area: Rect, view: &WindowView) {
    let mut address_spans = Vec::with_capacity(view.cells.len());
    let mut value_spans = Vec::with_capacity(view.cells.len());

    for (i, (address, value)) in view.cells.iter().enumerate() {
        address_spans.push(Span::styled(
            format!(" {:^5} ", address),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        let value_style = if i == view.cursor {
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.head_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        value_spans.push(Span::styled(format!(" {:^5} ", value), value_style));
    }

    let lines = vec![Line::from(address_spans), Line::from(value_spans)];
    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Tape "))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the instruction stream with the next instruction highlighted.
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    instructions: &[Instruction],
    program_counter: usize,
    finished: bool,
) {
    let spans: Vec<Span> = instructions
        .iter()
        .enumerate()
        .map(|(i, instruction)| {
            let style = if !finished && i == program_counter {
                Style::default()
                    .fg(Color::Black)
                    .bg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else if i < program_counter || finished {
                // Already executed (or at least passed over by a jump)
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Span::styled(instruction.symbol().to_string(), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(pane_block(" Program "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render captured program output, keeping the tail visible.
pub fn render_output_pane(frame: &mut Frame, area: Rect, lines: &[String]) {
    let block = pane_block(" Output ");

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = lines.len().saturating_sub(visible_height);
    let visible: Vec<Line> = lines[skip..]
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let paragraph = Paragraph::new(visible)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);
}

/// Render the status bar: execution state on the left, keybindings on the
/// right.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    steps: usize,
    pointer: Address,
    reading_input: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let badge_bg = if reading_input {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.primary
    };

    let left_spans = vec![
        Span::styled(
            format!(" Step {} ", steps),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" head {} ", pointer),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        " \u{2192} step   space play/pause   f fast-forward   q quit ",
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.comment),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
