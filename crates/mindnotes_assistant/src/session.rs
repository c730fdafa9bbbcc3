//! Chat session orchestration.
//!
//! # Responsibility
//! - Keep the in-memory message log for one chat surface.
//! - Enforce at-most-one in-flight assistant request per session.
//! - Apply response effects: reply append, fallback on failure, delayed
//!   task-list auto-creation with a switch back to the notes tab.
//!
//! # Invariants
//! - Gateway failures never propagate; the session appends a fixed fallback
//!   reply instead.
//! - A rejected send (empty input, request outstanding) leaves the message
//!   log untouched.

use std::time::{Duration, Instant};

use log::{error, info, warn};
use uuid::Uuid;

use mindnotes_core::model::now_epoch_ms;
use mindnotes_core::{
    extract_task_list, ActiveTab, ListId, StateRepository, TaskListService,
};

use crate::gateway::AssistantGateway;

/// Canned prompts offered on an empty chat surface.
pub const CHAT_SUGGESTIONS: [&str; 4] = [
    "Create a task list about daily productivity habits",
    "Build a study routine for learning programming",
    "Organize my morning routine for better focus",
    "Plan a workout schedule for this week",
];

/// Reply appended when the gateway fails in any way.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

/// Pause before auto-creating an extracted list, so the reply can render
/// first on surfaces that animate message arrival.
const AUTO_CREATE_DELAY: Duration = Duration::from_millis(1000);

/// Stable identifier for a chat message.
pub type MessageId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the session's message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    /// Unix epoch milliseconds.
    pub sent_at: i64,
}

/// What a `send_message` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The assistant answered; a task list may have been auto-created.
    Replied { created_list: Option<ListId> },
    /// The gateway failed and the fallback reply was appended.
    FallbackDelivered,
    /// Blank input; nothing happened.
    RejectedEmpty,
    /// A request is already outstanding; nothing happened.
    RejectedBusy,
}

/// Message log plus request state for one chat surface.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while an assistant request is outstanding; callers should
    /// disable resubmission while this holds.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Sends user text to the assistant and applies the response effects.
    ///
    /// On success the reply is appended and, when it carries the structured
    /// task-list shape, the list is created through `tasks` after a short
    /// delay and the active tab switched to notes. On failure the fixed
    /// fallback reply is appended; errors never propagate.
    pub async fn send_message<R: StateRepository>(
        &mut self,
        gateway: &dyn AssistantGateway,
        tasks: &mut TaskListService<R>,
        input: &str,
    ) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SendOutcome::RejectedEmpty;
        }
        if self.in_flight {
            warn!("event=assistant_request module=session status=rejected reason=busy");
            return SendOutcome::RejectedBusy;
        }

        let text = text.to_string();
        self.push(Sender::User, &text);
        self.in_flight = true;
        let started_at = Instant::now();
        info!("event=assistant_request module=session status=start");

        let result = gateway.complete(&text).await;
        self.in_flight = false;

        let reply = match result {
            Ok(reply) => reply,
            Err(err) => {
                warn!(
                    "event=assistant_request module=session status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                self.push(Sender::Assistant, FALLBACK_REPLY);
                return SendOutcome::FallbackDelivered;
            }
        };

        info!(
            "event=assistant_request module=session status=ok duration_ms={} reply_chars={}",
            started_at.elapsed().as_millis(),
            reply.chars().count()
        );
        self.push(Sender::Assistant, &reply);

        let created_list = match extract_task_list(&reply) {
            Some(draft) => {
                tokio::time::sleep(AUTO_CREATE_DELAY).await;
                self.create_from_draft(tasks, &draft.title, &draft.tasks)
            }
            None => None,
        };

        SendOutcome::Replied { created_list }
    }

    /// Creates the extracted list and returns to the notes tab.
    ///
    /// Store failures are logged and swallowed; the chat reply already stands
    /// on its own.
    fn create_from_draft<R: StateRepository>(
        &self,
        tasks: &mut TaskListService<R>,
        title: &str,
        task_texts: &[String],
    ) -> Option<ListId> {
        match tasks.create_list(title, task_texts) {
            Ok(list) => {
                info!(
                    "event=list_autocreate module=session status=ok list_id={} tasks={}",
                    list.id,
                    list.tasks.len()
                );
                if let Err(err) = tasks.set_active_tab(ActiveTab::Notes) {
                    warn!("event=tab_switch module=session status=error error={err}");
                }
                Some(list.id)
            }
            Err(err) => {
                error!("event=list_autocreate module=session status=error error={err}");
                None
            }
        }
    }

    fn push(&mut self, sender: Sender, content: &str) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            sender,
            content: content.to_string(),
            sent_at: now_epoch_ms(),
        });
    }
}
