use std::time::Duration;

use rand::seq::SliceRandom;
use ratatui::layout::Position;
use tokio::sync::mpsc;

use crate::config::AssistantConfig;
use crate::event::{AppEvent, Event};
use crate::log_debug;

use super::SelectionPrompt;

/// Identifies one assistant request; replies carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

/// Canned, delayed replies standing in for a real assistant.
#[derive(Debug)]
pub struct ScriptedAssistant {
    responses: Vec<String>,
    delay: Duration,
    next_ticket: u64,
}

impl ScriptedAssistant {
    pub fn new(responses: Vec<String>, delay: Duration) -> Self {
        Self {
            responses,
            delay,
            next_ticket: 0,
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(config.responses.clone(), Duration::from_millis(config.reply_delay_ms))
    }

    /// Schedule a reply for `excerpt`. It arrives as
    /// [`AppEvent::AssistantReplied`] after the configured delay.
    pub fn request(&mut self, excerpt: &str, sender: mpsc::UnboundedSender<Event>) -> ReplyTicket {
        self.next_ticket += 1;
        let ticket = ReplyTicket(self.next_ticket);
        let text = self
            .responses
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| "I have nothing to add about this passage yet.".to_string());
        log_debug!("Assistant asked about {} chars, ticket {:?}", excerpt.chars().count(), ticket);

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Event::App(AppEvent::AssistantReplied { ticket, text }));
        });
        ticket
    }
}

/// The open assistant popup. Only the reply for its own ticket is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantPopup {
    pub excerpt: String,
    pub anchor: Position,
    pub ticket: ReplyTicket,
    pub reply: Option<String>,
}

impl AssistantPopup {
    pub fn open(prompt: SelectionPrompt, ticket: ReplyTicket) -> Self {
        Self {
            excerpt: prompt.excerpt,
            anchor: prompt.anchor,
            ticket,
            reply: None,
        }
    }

    /// Returns false (and changes nothing) for a reply meant for an
    /// earlier popup.
    pub fn accept_reply(&mut self, ticket: ReplyTicket, text: String) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.reply = Some(text);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(text: &str) -> SelectionPrompt {
        SelectionPrompt { excerpt: text.to_string(), anchor: Position::new(0, 0) }
    }

    #[tokio::test(start_paused = true)]
    async fn replies_after_the_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut assistant = ScriptedAssistant::new(vec!["Only answer".to_string()], Duration::from_millis(1500));
        let ticket = assistant.request("wave-particle duality", tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await.unwrap() {
            Event::App(AppEvent::AssistantReplied { ticket: got, text }) => {
                assert_eq!(got, ticket);
                assert_eq!(text, "Only answer");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stale_reply_is_dropped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut assistant = ScriptedAssistant::new(vec!["a".to_string()], Duration::from_millis(10));
        let first = assistant.request("first selection", tx.clone());
        let second = assistant.request("second selection", tx);
        assert_ne!(first, second);

        let mut popup = AssistantPopup::open(prompt("second selection"), second);
        assert!(!popup.accept_reply(first, "old".to_string()));
        assert_eq!(popup.reply, None);
        assert!(popup.accept_reply(second, "new".to_string()));
        assert_eq!(popup.reply.as_deref(), Some("new"));
    }
}
