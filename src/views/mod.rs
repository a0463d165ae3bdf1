pub mod add_task;
pub mod home;
mod notice;

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    AddTask,
    Exit,
}

/// A `width` x `height` box centred in `area`, shrunk to fit when needed.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tui_textarea::{Input, Key};

    pub(crate) fn key(key: Key) -> Input {
        Input {
            key,
            ..Input::default()
        }
    }

    pub(crate) fn ctrl(c: char) -> Input {
        Input {
            key: Key::Char(c),
            ctrl: true,
            ..Input::default()
        }
    }

    pub(crate) fn type_text(text: &str) -> Vec<Input> {
        text.chars().map(|c| key(Key::Char(c))).collect()
    }

    pub(crate) fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    /// Every row of the buffer joined with newlines.
    pub(crate) fn screen(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
