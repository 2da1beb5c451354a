//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::Footer;
use crate::pages::{ContactPage, HomePage, PrivacyPage, TermsPage};
use crate::theme::{ThemePreference, provide_theme, use_theme};
use crate::widget::ChatWidget;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_theme(ThemePreference::LIGHT);
    let theme = use_theme();

    view! {
        <Router>
            <div class=format!("app {}", theme.class())>
                <nav class="navbar">
                    <A href="/">"Início"</A>
                    <A href="/contato">"Contato"</A>
                </nav>
                <main>
                    // Unknown paths go home instead of a 404 page
                    <Routes fallback=|| view! { <Redirect path="/" /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/contato") view=ContactPage />
                        <Route path=path!("/politica-de-privacidade") view=PrivacyPage />
                        <Route path=path!("/termos-de-uso") view=TermsPage />
                    </Routes>
                </main>
                <Footer />
                <ChatWidget />
            </div>
        </Router>
    }
}
