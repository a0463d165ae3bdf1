use ratatui::{
    prelude::*,
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::{Notice, NoticeLevel};

use super::centered_rect;

const NOTICE_WIDTH: u16 = 60;

pub(crate) fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let color = match notice.level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
    };
    let lines: Vec<Line> = notice.body.lines().map(Line::from).collect();

    // grow to the longest line so reminders stay on one row when they fit
    let longest = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = (longest as u16).saturating_add(2).max(NOTICE_WIDTH);
    let width = width.min(frame.size().width);
    let area = centered_rect(width, popup_height(&lines, width), frame.size());

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(notice.title.as_str())
            .title(
                Title::from(Span::styled(
                    "press any key",
                    Style::default().fg(Color::DarkGray),
                ))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Rows needed for `lines` wrapped inside a bordered box `width` wide.
fn popup_height(lines: &[Line], width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2).max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}
