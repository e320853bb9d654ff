// src/selection/mod.rs

//! Text selection over the document pane and the scripted assistant it
//! opens. Nothing here touches document state.

mod assistant;
mod subscription;
mod watcher;

pub use assistant::{AssistantPopup, ReplyTicket, ScriptedAssistant};
pub use subscription::SelectionSubscription;
pub use watcher::{SelectionPrompt, SelectionSurface, SelectionWatcher};
