use std::io::{self, stdout};

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::warn;

use crate::error::{Error, Result};

pub fn enter() -> io::Result<()> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()
}

pub fn leave() -> io::Result<()> {
    restore_with(disable_raw_mode, || {
        stdout().execute(LeaveAlternateScreen).map(drop)
    })
}

/// Runs both restore steps even when the first fails; the first error wins.
fn restore_with<R, S>(raw_mode: R, screen: S) -> io::Result<()>
where
    R: FnOnce() -> io::Result<()>,
    S: FnOnce() -> io::Result<()>,
{
    let raw = raw_mode();
    let screen = screen();
    raw.and(screen)
}

/// Runs `body` between `setup` and `restore`. `restore` runs whether setup or
/// body failed, and an earlier error is reported in preference to its own.
pub fn with_terminal<T, U, B, R>(setup: U, body: B, restore: R) -> Result<T>
where
    U: FnOnce() -> io::Result<()>,
    B: FnOnce() -> Result<T>,
    R: FnOnce() -> io::Result<()>,
{
    let outcome = setup().map_err(Error::from).and_then(|()| body());
    let restored = restore();
    if let (Err(_), Err(e)) = (&outcome, &restored) {
        warn!("Could not restore the terminal: {e}");
    }
    let value = outcome?;
    restored?;
    Ok(value)
}
