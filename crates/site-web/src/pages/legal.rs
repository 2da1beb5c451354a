//! Privacy and Terms Pages

use leptos::prelude::*;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <article class="legal">
            <h1>"Política de Privacidade"</h1>
            <p>"Coletamos nome, e-mail e os dados que você informar no formulário de contato, além dos parâmetros de campanha (UTM) do endereço de acesso."</p>
            <p>"Usamos essas informações apenas para responder ao seu contato e medir nossas campanhas. As conversas com o assistente servem para agendar demonstrações."</p>
            <p>"Para corrigir ou excluir seus dados, escreva para nós pela página de contato."</p>
        </article>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <article class="legal">
            <h1>"Termos de Uso"</h1>
            <p>"O conteúdo deste site é informativo. Respostas do assistente virtual não constituem proposta comercial."</p>
            <p>"Reuniões agendadas pelo assistente seguem o horário de Brasília e podem ser remarcadas pela nossa equipe."</p>
        </article>
    }
}
