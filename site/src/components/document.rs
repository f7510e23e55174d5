//! Root document component - the complete HTML page

use super::{Footer, Header, Hero};
use crate::styles::{CSP, SITE_CSS};
use crate::types::SitePage;
use leptos::prelude::*;

/// The complete HTML document for one calendar window.
#[component]
pub fn SiteDocument(page: SitePage) -> impl IntoView {
    let SitePage {
        brand,
        theme,
        nav,
        dashboard,
        calendar,
    } = page;
    let title = format!("{} - {}", brand, calendar.title);
    let root_theme = theme.clone();

    view! {
        <html lang="en" data-theme=root_theme>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <Header brand=brand.clone() nav=nav theme=theme />
                <main>
                    <Hero dashboard=dashboard calendar=calendar />
                </main>
                <Footer brand=brand />
            </body>
        </html>
    }
}
