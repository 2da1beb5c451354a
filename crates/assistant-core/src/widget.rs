//! Chat Widget State Machine
//!
//! The widget is driven by discrete events (visitor submitted, snapshot
//! arrived, stream ended). Each transition returns the effects the host must
//! run: sending the conversation upstream and scrolling the message list.
//!
//! ```text
//!            submit             first assistant snapshot
//!   Ready ───────────▶ Submitted ─────────────────────▶ Streaming
//!     ▲                    │                                │
//!     │    finished        │ failed                failed   │ finished
//!     └────────────────────┴──────▶ Error ◀─────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::indicators::{is_assistant_text_streaming, tool_loading_copy};
use crate::message::ConversationMessage;
use crate::suggestion::PromptSuggestion;

/// Request lifecycle of the widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetStatus {
    #[default]
    Ready,
    /// Conversation sent, nothing received yet
    Submitted,
    /// Assistant snapshots arriving
    Streaming,
    /// Last request failed
    Error,
}

/// Identifies one submitted request. Stream events carry the id of the
/// request they answer; events for anything but the current one are dropped.
pub type RequestId = u64;

/// Input events
#[derive(Clone, Debug)]
pub enum WidgetEvent {
    Opened,
    Closed,
    MessageSubmitted(String),
    SuggestionSelected(PromptSuggestion),
    StreamStarted { request: RequestId },
    MessageReceived { request: RequestId, message: ConversationMessage },
    StreamFinished { request: RequestId },
    StreamFailed { request: RequestId, reason: String },
    Reset,
}

impl WidgetEvent {
    fn request(&self) -> Option<RequestId> {
        match self {
            WidgetEvent::StreamStarted { request }
            | WidgetEvent::MessageReceived { request, .. }
            | WidgetEvent::StreamFinished { request }
            | WidgetEvent::StreamFailed { request, .. } => Some(*request),
            _ => None,
        }
    }
}

/// Work the host performs after a transition
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ScrollToBottom,
    /// Post the full history to the assistant runtime
    SendConversation {
        request: RequestId,
        history: Vec<ConversationMessage>,
    },
}

/// The three signals the auto-scroll behavior observes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ScrollSignals {
    revision: u64,
    text_streaming: bool,
    loading: bool,
}

#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    messages: Vec<ConversationMessage>,
    status: WidgetStatus,
    open: bool,
    error: Option<String>,
    /// Bumped whenever the message list changes
    revision: u64,
    /// Current request; bumped on submit and on reset
    request: RequestId,
    observed: ScrollSignals,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn status(&self) -> WidgetStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// A reply is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.status, WidgetStatus::Submitted | WidgetStatus::Streaming)
    }

    pub fn is_text_streaming(&self) -> bool {
        is_assistant_text_streaming(&self.messages)
    }

    /// Show the shimmer instead of text
    pub fn show_thinking(&self) -> bool {
        self.is_loading() && !self.is_text_streaming()
    }

    /// Suggestion chips only make sense before the first message
    pub fn show_suggestions(&self) -> bool {
        self.messages.is_empty() && !self.is_loading()
    }

    /// Tool-specific loading line while a reply is in flight
    pub fn loading_copy(&self, copy: &HashMap<String, String>) -> Option<String> {
        if !self.is_loading() {
            return None;
        }
        tool_loading_copy(&self.messages, copy)
    }

    /// Apply one event and return the effects to run
    pub fn apply(&mut self, event: WidgetEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(request) = event.request().filter(|r| *r != self.request) {
            tracing::debug!(request, current = self.request, "dropping stale stream event");
            return effects;
        }

        match event {
            WidgetEvent::Opened => self.open = true,
            WidgetEvent::Closed => self.open = false,
            WidgetEvent::MessageSubmitted(text) => self.submit(text, &mut effects),
            WidgetEvent::SuggestionSelected(suggestion) => {
                self.submit(suggestion.message, &mut effects);
            }
            WidgetEvent::StreamStarted { .. } => {
                if self.status == WidgetStatus::Submitted {
                    self.status = WidgetStatus::Streaming;
                }
            }
            WidgetEvent::MessageReceived { message, .. } => self.receive(message),
            WidgetEvent::StreamFinished { .. } => {
                if self.is_loading() {
                    self.status = WidgetStatus::Ready;
                }
            }
            WidgetEvent::StreamFailed { reason, .. } => {
                tracing::warn!(%reason, "assistant stream failed");
                self.status = WidgetStatus::Error;
                self.error = Some(reason);
            }
            WidgetEvent::Reset => {
                // any reply still streaming belongs to the old conversation
                self.request += 1;
                self.messages.clear();
                self.status = WidgetStatus::Ready;
                self.error = None;
                self.revision += 1;
            }
        }

        let signals = self.signals();
        if signals != self.observed {
            self.observed = signals;
            effects.push(Effect::ScrollToBottom);
        }

        effects
    }

    fn submit(&mut self, text: String, effects: &mut Vec<Effect>) {
        let text = text.trim();
        if text.is_empty() || self.is_loading() {
            return;
        }

        self.messages.push(ConversationMessage::user(text));
        self.revision += 1;
        self.request += 1;
        self.status = WidgetStatus::Submitted;
        self.error = None;
        self.open = true;
        effects.push(Effect::SendConversation {
            request: self.request,
            history: self.messages.clone(),
        });
    }

    fn receive(&mut self, message: ConversationMessage) {
        if message.is_assistant() && self.status == WidgetStatus::Submitted {
            self.status = WidgetStatus::Streaming;
        }

        match self.messages.iter_mut().find(|m| m.id == message.id) {
            Some(existing) if *existing == message => return,
            Some(existing) => *existing = message,
            None => self.messages.push(message),
        }
        self.revision += 1;
    }

    fn signals(&self) -> ScrollSignals {
        ScrollSignals {
            revision: self.revision,
            text_streaming: self.is_text_streaming(),
            loading: self.is_loading(),
        }
    }
}
