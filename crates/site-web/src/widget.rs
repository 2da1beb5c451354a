//! Floating Chat Widget
//!
//! Thin host for [`WidgetState`]: DOM events become [`WidgetEvent`]s and the
//! returned [`Effect`]s are run here.

use futures::StreamExt;
use leptos::{html::Div, prelude::*};

use assistant_core::{
    ConversationMessage, Effect, RequestId, SnapshotDecoder, WidgetEvent, WidgetState,
    indicators::default_tool_copy_table, suggestion::default_suggestions,
};

use crate::api;
use crate::components::{MessageBubble, SuggestionChips, ThinkingIndicator};

fn dispatch(state: RwSignal<WidgetState>, list: NodeRef<Div>, event: WidgetEvent) {
    let effects = state.try_update(|s| s.apply(event)).unwrap_or_default();

    for effect in effects {
        match effect {
            Effect::ScrollToBottom => {
                // after the DOM has picked up the new content
                request_animation_frame(move || {
                    if let Some(el) = list.get_untracked() {
                        el.set_scroll_top(el.scroll_height());
                    }
                });
            }
            Effect::SendConversation { request, history } => {
                leptos::task::spawn_local(stream_reply(state, list, request, history));
            }
        }
    }
}

async fn stream_reply(
    state: RwSignal<WidgetState>,
    list: NodeRef<Div>,
    request: RequestId,
    history: Vec<ConversationMessage>,
) {
    let failed = |reason: String| WidgetEvent::StreamFailed { request, reason };

    let response = match api::stream_chat(&history).await {
        Ok(response) => response,
        Err(e) => return dispatch(state, list, failed(e)),
    };

    dispatch(state, list, WidgetEvent::StreamStarted { request });

    let mut decoder = SnapshotDecoder::new();
    let mut chunks = response.bytes_stream();

    while let Some(chunk) = chunks.next().await {
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => return dispatch(state, list, failed(e.to_string())),
        };
        for decoded in decoder.push(&bytes) {
            match decoded {
                Ok(message) => dispatch(state, list, WidgetEvent::MessageReceived { request, message }),
                Err(e) => return dispatch(state, list, failed(e.to_string())),
            }
        }
    }

    match decoder.finish() {
        Ok(Some(message)) => dispatch(state, list, WidgetEvent::MessageReceived { request, message }),
        Ok(None) => {}
        Err(e) => return dispatch(state, list, failed(e.to_string())),
    }

    dispatch(state, list, WidgetEvent::StreamFinished { request });
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = RwSignal::new(WidgetState::new());
    let list = NodeRef::<Div>::new();
    let (input, set_input) = signal(String::new());
    let copy = StoredValue::new(default_tool_copy_table());

    let send = move || {
        let text = input.get_untracked();
        set_input.set(String::new());
        dispatch(state, list, WidgetEvent::MessageSubmitted(text));
    };

    let on_suggestion = Callback::new(move |suggestion| {
        dispatch(state, list, WidgetEvent::SuggestionSelected(suggestion));
    });

    let is_open = move || state.with(WidgetState::is_open);
    let loading = move || state.with(WidgetState::is_loading);
    let loading_copy = Signal::derive(move || state.with(|s| copy.with_value(|c| s.loading_copy(c))));

    view! {
        <div class="chat-widget" class:open=is_open>
            <button
                class="chat-toggle"
                on:click=move |_| {
                    let event = if is_open() { WidgetEvent::Closed } else { WidgetEvent::Opened };
                    dispatch(state, list, event);
                }
            >
                {move || if is_open() { "×" } else { "Fale com a gente" }}
            </button>

            <Show when=is_open>
                <section class="chat-panel">
                    <header class="chat-header">
                        <h2>"Assistente"</h2>
                        <button class="chat-reset" on:click=move |_| dispatch(state, list, WidgetEvent::Reset)>
                            "Nova conversa"
                        </button>
                    </header>

                    <div class="messages" node_ref=list>
                        <Show when=move || state.with(WidgetState::show_suggestions)>
                            <SuggestionChips suggestions=default_suggestions() on_select=on_suggestion />
                        </Show>
                        <For
                            each=move || state.with(|s| s.messages().to_vec())
                            key=|msg| (msg.id.clone(), msg.parts.len(), msg.text().len())
                            children=move |msg| view! { <MessageBubble message=msg /> }
                        />
                        <Show when=move || state.with(WidgetState::show_thinking)>
                            <ThinkingIndicator label=loading_copy />
                        </Show>
                        {move || {
                            state
                                .with(|s| s.error().map(str::to_string))
                                .map(|error| view! { <div class="message error">{error}</div> })
                        }}
                    </div>

                    <div class="input-area">
                        <textarea
                            placeholder="Digite sua mensagem..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button on:click=move |_| send() disabled=loading>
                            {move || if loading() { "..." } else { "Enviar" }}
                        </button>
                    </div>
                </section>
            </Show>
        </div>
    }
}
