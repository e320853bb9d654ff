use std::io::stdout;

use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

/// Mouse reporting for the lifetime of the guard.
#[derive(Debug)]
pub struct MouseCapture;

impl MouseCapture {
    pub fn enable() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}
