// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat screen rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::ChatApp;
use super::keymap::{bindings_for_mode, ChatMode};
use super::palette::Palette;
use super::widgets::{history_lines, AttachmentPreview, HistoryView, InputArea, TitleBar};

const TITLE: &str = "lingochat";

/// Draw the whole chat screen
pub fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let palette = app.palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let preview_height = if app.chat.composer().is_preview_visible() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(preview_height),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    draw_title(frame, app, &palette, chunks[0]);
    draw_history(frame, app, &palette, chunks[1]);

    if let Some(filename) = app.chat.composer().preview_label() {
        frame.render_widget(AttachmentPreview::new(filename, &palette), chunks[2]);
    }

    let input_area = chunks[3];
    let cursor = if app.mode == ChatMode::PickFile {
        let widget = InputArea::new(&app.file_prompt, "Attach file (path)", &palette)
            .placeholder("~/notes.txt");
        let cursor = widget.cursor_position(input_area);
        frame.render_widget(widget, input_area);
        Some(cursor)
    } else {
        let focused = app.mode == ChatMode::Input;
        let widget = InputArea::new(&app.chat.composer().input, "Message", &palette)
            .placeholder("Type a message and press Enter")
            .focused(focused);
        let cursor = widget.cursor_position(input_area);
        frame.render_widget(widget, input_area);
        focused.then_some(cursor)
    };

    draw_hints(frame, app.mode, &palette, chunks[4]);

    if app.mode == ChatMode::Help {
        draw_help(frame, &palette, area);
    } else if let Some((x, y)) = cursor {
        frame.set_cursor_position((x, y));
    }
}

fn draw_title(frame: &mut Frame, app: &ChatApp, palette: &Palette, area: Rect) {
    let session = app.chat.session();
    let (message, is_error) = match (app.chat.last_error(), app.chat.status()) {
        (Some(error), _) => (Some(error), true),
        (None, status) => (status, false),
    };
    let title = TitleBar::new(TITLE, session.user_name(), session.language().name(), palette)
        .toggle(app.theme.toggle_control().map(|t| t.glyph()))
        .status(message, is_error)
        .waiting(app.chat.is_waiting());
    frame.render_widget(title, area);
}

fn draw_history(frame: &mut Frame, app: &mut ChatApp, palette: &Palette, area: Rect) {
    if app.chat.history().is_empty() {
        app.sync_scroll(area.height, 0);
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No messages yet.",
                Style::default().fg(palette.foreground).bold(),
            )),
            Line::from(Span::styled(
                "Type below and press Enter. Ctrl+O attaches a file.",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .style(palette.base());
        frame.render_widget(welcome, area);
        return;
    }

    let lines = history_lines(app.chat.history().entries(), area.width, palette);
    app.sync_scroll(area.height, lines.len());
    frame.render_widget(
        HistoryView::new(lines, palette).offset(app.scroll.scroll_offset),
        area,
    );
}

fn draw_hints(frame: &mut Frame, mode: ChatMode, palette: &Palette, area: Rect) {
    let mut spans = Vec::new();
    for binding in bindings_for_mode(mode) {
        spans.push(Span::styled(
            format!(" {} ", binding.keys),
            Style::default().fg(palette.accent).bold(),
        ));
        spans.push(Span::styled(
            format!("{} ", binding.description),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.bar()), area);
}

fn draw_help(frame: &mut Frame, palette: &Palette, area: Rect) {
    let overlay_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, overlay_area);

    let mut lines = vec![Line::from(Span::styled(
        "Typing",
        Style::default().fg(palette.accent).bold(),
    ))];
    for mode in [ChatMode::Input, ChatMode::Scroll] {
        if mode == ChatMode::Scroll {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Scrolling",
                Style::default().fg(palette.accent).bold(),
            )));
        }
        for binding in bindings_for_mode(mode) {
            lines.push(Line::from(format!("  {:<10} {}", binding.keys, binding.description)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(palette.muted),
    )));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Help "),
        )
        .style(palette.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(help, overlay_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = r.width * percent_x / 100;
    let height = r.height * percent_y / 100;
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
