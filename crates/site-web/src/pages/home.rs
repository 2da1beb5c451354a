//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Atendimento que não dorme"</h1>
                <p class="tagline">"Um assistente que responde dúvidas e agenda demonstrações direto no seu site."</p>
                <div class="cta">
                    <a href="/contato" class="btn btn-primary">"Fale com vendas"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"💬 Respostas na hora"</h3>
                    <p>"O assistente conhece seu produto e responde em português, a qualquer hora."</p>
                </div>
                <div class="feature">
                    <h3>"📅 Agenda integrada"</h3>
                    <p>"Entende \"terça que vem\", confere horários livres e confirma a reunião."</p>
                </div>
                <div class="feature">
                    <h3>"📈 Leads com origem"</h3>
                    <p>"Cada contato chega com a campanha que o trouxe até você."</p>
                </div>
            </section>
        </div>
    }
}
