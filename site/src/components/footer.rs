use leptos::prelude::*;

#[component]
pub fn Footer(brand: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer-inner">
                <span class="footer-brand">{brand}</span>
                <div class="footer-links">
                    <a href="#features" class="footer-link">"Features"</a>
                    <a href="#pricing" class="footer-link">"Pricing"</a>
                    <a href="#faq" class="footer-link">"FAQ"</a>
                </div>
            </div>
        </footer>
    }
}
