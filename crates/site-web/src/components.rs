//! UI Components

use chrono::Datelike;
use leptos::prelude::*;

use assistant_core::{ConversationMessage, MessagePart, PromptSuggestion};

/// Message bubble component
#[component]
pub fn MessageBubble(message: ConversationMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    // Tool calls and results surface through the loading line, not here
    let parts = message
        .parts
        .into_iter()
        .filter_map(|part| match part {
            MessagePart::Text { text } => Some(view! { <p class="content">{text}</p> }.into_any()),
            MessagePart::Reasoning { text } => Some(
                view! {
                    <details class="reasoning">
                        <summary>"Raciocínio"</summary>
                        <p>{text}</p>
                    </details>
                }
                .into_any(),
            ),
            MessagePart::ToolCall { .. } | MessagePart::ToolResult { .. } => None,
        })
        .collect_view();

    view! { <div class=class>{parts}</div> }
}

/// Shimmer shown while waiting for the first words of a reply
#[component]
pub fn ThinkingIndicator(#[prop(into)] label: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="message message-assistant thinking">
            <span class="shimmer">{move || label.get().unwrap_or_else(|| "Pensando...".into())}</span>
        </div>
    }
}

/// Starter prompts shown on an empty conversation
#[component]
pub fn SuggestionChips(
    suggestions: Vec<PromptSuggestion>,
    on_select: Callback<PromptSuggestion>,
) -> impl IntoView {
    view! {
        <div class="suggestions">
            {suggestions
                .into_iter()
                .map(|suggestion| {
                    let label = suggestion.label.clone();
                    view! {
                        <button class="chip" on:click=move |_| on_select.run(suggestion.clone())>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <p>{format!("© {year} Vitrine")}</p>
            <a href="/politica-de-privacidade">"Política de Privacidade"</a>
            <a href="/termos-de-uso">"Termos de Uso"</a>
        </footer>
    }
}
