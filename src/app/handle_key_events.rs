use color_eyre::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::AppEvent;

use super::{App, AppMode};

const PAGE_ROWS: u16 = 10;

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if let KeyCode::Char('c' | 'C') = key_event.code {
            if key_event.modifiers == KeyModifiers::CONTROL {
                self.events.send(AppEvent::Quit);
                return Ok(());
            }
        }

        match &mut self.mode {
            AppMode::UploadPrompt { input } => {
                match key_event.code {
                    KeyCode::Esc => self.mode = AppMode::Reading,
                    KeyCode::Enter => {
                        let path = std::mem::take(input);
                        self.events.send(AppEvent::SubmitUpload(path));
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(ch) => input.push(ch),
                    _ => {}
                }
                return Ok(());
            }
            AppMode::Rooms { selected } => {
                let rooms = self.config.seed.focus_rooms.len();
                match key_event.code {
                    KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
                    KeyCode::Down | KeyCode::Char('j') => {
                        if *selected + 1 < rooms {
                            *selected += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let index = *selected;
                        self.events.send(AppEvent::JoinRoom(index));
                    }
                    KeyCode::Esc | KeyCode::Char('f') => self.events.send(AppEvent::Back),
                    KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                    _ => {}
                }
                return Ok(());
            }
            AppMode::Reading => {}
        }

        if self.fault.is_some() {
            match key_event.code {
                KeyCode::Esc => self.dismiss_fault(),
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                _ => {}
            }
            return Ok(());
        }

        if self.popup.is_some() && key_event.code == KeyCode::Esc {
            self.events.send(AppEvent::DismissPopup);
            return Ok(());
        }

        match key_event.code {
            KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('o') => self.events.send(AppEvent::BeginUpload),
            KeyCode::Char(' ') => self.events.send(AppEvent::ToggleTimer),
            KeyCode::Char('r') => self.events.send(AppEvent::ResetTimer),
            KeyCode::Char('+') | KeyCode::Char('=') => self.events.send(AppEvent::ZoomIn),
            KeyCode::Char('-') => self.events.send(AppEvent::ZoomOut),
            KeyCode::Char('f') => self.events.send(AppEvent::OpenRooms),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::ScrollDown(1)),
            KeyCode::PageUp => self.events.send(AppEvent::ScrollUp(PAGE_ROWS)),
            KeyCode::PageDown => self.events.send(AppEvent::ScrollDown(PAGE_ROWS)),
            _ => {}
        }
        Ok(())
    }
}
