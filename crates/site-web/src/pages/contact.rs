//! Contact Page

use leptos::prelude::*;

use lead_capture::LeadForm;

use crate::api;

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (volume, set_volume) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    // read once, on the landing page URL
    let utm = StoredValue::new(api::current_utm());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }

        let form = LeadForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: optional(company.get_untracked()),
            phone: optional(phone.get_untracked()),
            volume: optional(volume.get_untracked()),
            message: optional(message.get_untracked()),
        };

        // same checks the server runs, without the round trip
        if let Err(e) = form.clone().normalized() {
            set_status.set(SubmitStatus::Failed(e.user_message()));
            return;
        }

        set_status.set(SubmitStatus::Sending);
        leptos::task::spawn_local(async move {
            let utm = utm.get_value();
            match api::create_lead(&form, &utm).await {
                Ok(_) => set_status.set(SubmitStatus::Sent),
                Err(e) => set_status.set(SubmitStatus::Failed(e)),
            }
        });
    };

    view! {
        <div class="contact">
            <h1>"Fale com a gente"</h1>
            <p>"Conte um pouco sobre sua empresa e retornamos em até um dia útil."</p>

            <Show
                when=move || status.get() == SubmitStatus::Sent
                fallback=move || view! {
                    <form class="contact-form" on:submit=on_submit>
                        <div class="field">
                            <label>"Nome"</label>
                            <input type="text" required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev)) />
                        </div>
                        <div class="field">
                            <label>"E-mail"</label>
                            <input type="email" required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev)) />
                        </div>
                        <div class="field">
                            <label>"Empresa"</label>
                            <input type="text"
                                prop:value=move || company.get()
                                on:input=move |ev| set_company.set(event_target_value(&ev)) />
                        </div>
                        <div class="field">
                            <label>"Telefone"</label>
                            <input type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev)) />
                        </div>
                        <div class="field">
                            <label>"Conversas por mês"</label>
                            <select on:change=move |ev| set_volume.set(event_target_value(&ev))>
                                <option value="">"Selecione"</option>
                                <option value="ate-1000">"Até 1.000"</option>
                                <option value="1000-10000">"1.000 a 10.000"</option>
                                <option value="mais-10000">"Mais de 10.000"</option>
                            </select>
                        </div>
                        <div class="field">
                            <label>"Mensagem"</label>
                            <textarea
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev)) />
                        </div>

                        {move || match status.get() {
                            SubmitStatus::Failed(error) => Some(view! { <p class="error">{error}</p> }),
                            _ => None,
                        }}

                        <button type="submit" class="btn btn-primary"
                            disabled=move || status.get() == SubmitStatus::Sending>
                            {move || if status.get() == SubmitStatus::Sending { "Enviando..." } else { "Enviar" }}
                        </button>
                    </form>
                }
            >
                <p class="success">"Recebemos seu contato. Obrigado!"</p>
            </Show>
        </div>
    }
}
