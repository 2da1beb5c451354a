//! Conversation Messages
//!
//! Message shape streamed by the hosted assistant runtime. A message carries an
//! ordered list of typed parts; the widget only reads them to derive UI state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System prompt/instructions
    System,
    /// Visitor input
    User,
    /// Assistant response
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Lifecycle of a tool invocation inside an assistant message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCallState {
    /// Arguments are still being streamed
    InputStreaming,
    /// Arguments complete, tool running
    #[default]
    InputAvailable,
    /// Tool returned
    OutputAvailable,
    /// Tool failed
    OutputError,
}

/// One typed piece of message content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum MessagePart {
    /// Visible text
    Text { text: String },

    /// Model reasoning, never rendered as an answer
    Reasoning { text: String },

    /// Request to run a named tool
    ToolCall {
        tool_call_id: String,
        tool_name: String,
        #[serde(default)]
        input: serde_json::Value,
        #[serde(default)]
        state: ToolCallState,
    },

    /// Output of a previous tool call
    ToolResult {
        tool_call_id: String,
        tool_name: String,
        #[serde(default)]
        output: serde_json::Value,
        #[serde(default)]
        is_error: bool,
    },
}

impl MessagePart {
    pub fn text(text: impl Into<String>) -> Self {
        MessagePart::Text { text: text.into() }
    }

    pub fn tool_call(tool_call_id: impl Into<String>, tool_name: impl Into<String>) -> Self {
        MessagePart::ToolCall {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            input: serde_json::Value::Null,
            state: ToolCallState::default(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, MessagePart::Text { .. })
    }

    /// Tool name when this part is a tool call
    pub fn tool_call_name(&self) -> Option<&str> {
        match self {
            MessagePart::ToolCall { tool_name, .. } => Some(tool_name),
            _ => None,
        }
    }
}

/// A single message in a conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,

    pub role: Role,

    #[serde(default)]
    pub parts: Vec<MessagePart>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ConversationMessage {
    /// Create a new message with a fresh id
    pub fn new(role: Role, parts: Vec<MessagePart>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            parts,
            created_at: Some(Utc::now()),
        }
    }

    /// Create a user message with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![MessagePart::text(text)])
    }

    /// Create an assistant message
    pub fn assistant(parts: Vec<MessagePart>) -> Self {
        Self::new(Role::Assistant, parts)
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    pub fn has_text(&self) -> bool {
        self.parts.iter().any(MessagePart::is_text)
    }

    /// Concatenated visible text
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                MessagePart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Name of the most recently invoked tool on this message
    pub fn last_tool_call(&self) -> Option<&str> {
        self.parts.iter().rev().find_map(MessagePart::tool_call_name)
    }

    /// Parse one line of the newline-delimited snapshot stream
    pub fn from_stream_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(line)
            .map(Some)
            .map_err(|e| AssistantError::Parse(e.to_string()))
    }
}

/// Splits a chunked snapshot stream into messages. Chunks may end anywhere,
/// including inside a multi-byte character.
#[derive(Debug, Default)]
pub struct SnapshotDecoder {
    pending: Vec<u8>,
}

impl SnapshotDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning one result per line completed by it, in
    /// stream order. A bad line does not hide the ones before it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<ConversationMessage>> {
        self.pending.extend_from_slice(chunk);

        let mut decoded = Vec::new();
        while let Some(end) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            if let Some(result) = ConversationMessage::from_stream_line(&String::from_utf8_lossy(&line)).transpose() {
                decoded.push(result);
            }
        }
        decoded
    }

    /// Flush a final line that had no trailing newline
    pub fn finish(self) -> Result<Option<ConversationMessage>> {
        ConversationMessage::from_stream_line(&String::from_utf8_lossy(&self.pending))
    }
}
