use crate::types::NavLink;
use leptos::prelude::*;

#[component]
pub fn Header(brand: String, nav: Vec<NavLink>, theme: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a class="brand" href="index.html">
                    <span class="brand-mark"></span>
                    <span class="brand-name">{brand}</span>
                </a>
                <nav class="nav-links">
                    {nav.into_iter().map(|link| view! {
                        <a class="nav-link" href=link.href>{link.label}</a>
                    }).collect::<Vec<_>>()}
                </nav>
                <span class="theme-badge" title="Theme">{theme}</span>
            </div>
        </header>
    }
}
