use color_eyre::{eyre::OptionExt, Result};

use crate::event::AppEvent;
use crate::log_debug;
use crate::timer::{TimerEvent, TimerPhase};

use super::{App, AppMode};

impl App {
    pub async fn handle_app_event(&mut self, app_event: AppEvent) -> Result<()> {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::Back => self.mode = AppMode::Reading,

            AppEvent::ScrollUp(rows) => self.scroll = self.scroll.saturating_sub(usize::from(rows)),
            AppEvent::ScrollDown(rows) => {
                let visible = usize::from(self.layout().document_content.height);
                let max = self.document_lines().len().saturating_sub(visible);
                self.scroll = (self.scroll + usize::from(rows)).min(max);
            }

            AppEvent::OpenRooms => self.mode = AppMode::Rooms { selected: 0 },
            AppEvent::JoinRoom(index) => {
                let room = self
                    .config
                    .seed
                    .focus_rooms
                    .get(index)
                    .ok_or_eyre(format!("no focus room at index {}", index))?;
                let (name, locked) = (room.name.clone(), room.is_locked);
                if locked {
                    self.set_error(format!("{} requires sign up", name));
                } else {
                    self.set_info(format!("Joined {}", name));
                    self.joined_room = Some(name);
                    self.mode = AppMode::Reading;
                }
            }

            AppEvent::BeginUpload => {
                self.popup = None;
                self.mode = AppMode::UploadPrompt { input: String::new() };
            }
            AppEvent::SubmitUpload(input) => self.submit_upload(input).await,
            AppEvent::ZoomIn => {
                if self.zoom.zoom_in() {
                    self.zoom_changed();
                }
            }
            AppEvent::ZoomOut => {
                if self.zoom.zoom_out() {
                    self.zoom_changed();
                }
            }

            AppEvent::ToggleTimer => {
                if self.timer.phase() == TimerPhase::Expired {
                    self.set_info("Session complete. Press r to start a new one.");
                } else if self.timer.toggle() {
                    if self.timer.is_running() {
                        self.tick_driver.start(self.events.sender());
                    } else {
                        self.tick_driver.stop();
                    }
                }
            }
            AppEvent::ResetTimer => {
                self.tick_driver.stop();
                self.timer.reset();
            }
            AppEvent::TimerTick => {
                if let Some(TimerEvent::SessionComplete) = self.timer.tick() {
                    self.tick_driver.stop();
                    self.set_info("Session complete! Time for a quick comprehension check.");
                }
            }

            AppEvent::AssistantReplied { ticket, text } => {
                let accepted = self
                    .popup
                    .as_mut()
                    .is_some_and(|popup| popup.accept_reply(ticket, text));
                if !accepted {
                    log_debug!("Dropping assistant reply {:?} for a closed popup", ticket);
                }
            }
            AppEvent::DismissPopup => self.popup = None,
        }
        Ok(())
    }

    fn zoom_changed(&mut self) {
        self.session.set_pdf_scale(self.zoom.scale());
        self.scroll = 0;
    }
}
