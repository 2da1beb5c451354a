//! # assistant-core
//!
//! Shared pieces of the site assistant: the conversation message model
//! streamed by the hosted runtime, the tool framework the server exposes to
//! it, and the chat widget state machine the frontend runs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐  snapshots   ┌──────────────────────────────┐
//! │  Hosted AI runtime   │─────────────▶│  WidgetState (event loop)    │
//! │                      │              │   indicators · suggestions   │
//! └──────────┬───────────┘              └──────────────────────────────┘
//!            │ tool calls
//!            ▼
//! ┌──────────────────────┐
//! │  ToolRegistry        │
//! └──────────────────────┘
//! ```
//!
//! This crate builds for `wasm32-unknown-unknown`; keep it free of runtime
//! and network dependencies.

pub mod error;
pub mod indicators;
pub mod message;
pub mod suggestion;
pub mod tool;
pub mod widget;

pub use error::{AssistantError, Result};
pub use indicators::{is_assistant_text_streaming, tool_loading_copy};
pub use message::{ConversationMessage, MessagePart, Role, SnapshotDecoder, ToolCallState};
pub use suggestion::PromptSuggestion;
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};
pub use widget::{Effect, RequestId, WidgetEvent, WidgetState, WidgetStatus};
