//! Terminal rendering for the shell and the generator form

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::InputMode;
use crate::messages::{ActiveView, RenderState};

const PROMPT_PLACEHOLDER: &str = "Enter a creative prompt...";

/// Draw the whole screen: a centered container holding the generator, plus a status bar
pub fn draw_shell(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Container
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let container = centered_rect(70, 90, chunks[0]);
    draw_generator(f, state, container);
    draw_status_bar(f, state, chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Draw the generator card: prompt, submit button, error line, result
pub fn draw_generator(f: &mut Frame, state: &RenderState, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(format!(" {} ", APP_NAME)).centered().bold());
    let inner = card.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Prompt
            Constraint::Length(3), // Button
            Constraint::Length(1), // Error
            Constraint::Min(4),    // Result
        ])
        .split(inner);

    draw_prompt(f, state, chunks[0]);
    draw_submit_button(f, state, chunks[1]);
    draw_error(f, state, chunks[2]);
    draw_result(f, state, chunks[3]);
}

fn draw_prompt(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Prompt ");

    let text = if state.prompt.is_empty() && !editing {
        Text::styled(PROMPT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Text::raw(state.prompt.as_str())
    };

    let inner = block.inner(area);
    let prompt = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(prompt, area);

    if editing && inner.width > 0 && inner.height > 0 {
        let (col, row) = wrapped_cursor(&state.prompt, state.cursor_position, inner.width);
        let cursor_x = inner.x.saturating_add(col);
        let cursor_y = inner.y.saturating_add(row).min(inner.y + inner.height - 1);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Column and row of the cursor once `text` is hard-wrapped at `width` cells
fn wrapped_cursor(text: &str, byte_pos: usize, width: u16) -> (u16, u16) {
    let chars_before = text
        .get(..byte_pos)
        .map(|s| s.chars().count())
        .unwrap_or_else(|| text.chars().count());
    let width = width as usize;
    let row = u16::try_from(chars_before / width).unwrap_or(u16::MAX);
    ((chars_before % width) as u16, row)
}

fn draw_submit_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let style = if state.is_loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White).bg(Color::Blue).bold()
    };

    let button = Paragraph::new(Line::from(format!(" {} ", state.submit_label())).style(style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if state.is_loading {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Blue)
                }),
        );
    f.render_widget(button, area);
}

fn draw_error(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(error) = &state.error {
        let line = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(line, area);
    }
}

fn draw_result(f: &mut Frame, state: &RenderState, area: Rect) {
    let status_text = match state.meta.status_code {
        Some(code) => Span::styled(
            format!(" {} ", code),
            Style::default().fg(status_color(code)).bold(),
        ),
        None => Span::raw(" Generated Image "),
    };

    let time_text = match state.meta.received_at {
        Some(at) => format!(" {}ms @ {} ", state.meta.time_ms, at.format("%H:%M:%S")),
        None => String::new(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(status_text)
        .title_bottom(Line::from(time_text).right_aligned());

    let lines: Vec<Line> = match &state.image_url {
        Some(url) => {
            // A stale image next to a fresh error is dimmed
            let url_style = if state.error.is_some() || state.is_loading {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Green).underlined()
            };
            vec![
                Line::from("Generated Image:").bold(),
                Line::from(Span::styled(url.as_str(), url_style)),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No image yet. Press 'e' to write a prompt, 's' to generate.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let result = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(result, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.active_view() {
        ActiveView::Loading => " Generating... ".to_string(),
        _ if state.input_mode == InputMode::Editing => {
            " ESC:stop editing | arrows:move | Enter:generate ".to_string()
        }
        _ => format!(" e:edit | s:generate | c:clear | ?:help | q:quit | {} ", state.endpoint),
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} v{} - Keyboard Shortcuts

 PROMPT
   e / Enter          Edit prompt
   Esc                Stop editing
   ← / →              Move cursor
   c                  Clear prompt

 GENERATE
   s                  Generate image
   Enter (editing)    Generate image

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
