mod homepage;
mod navbar;
mod project;
mod resume;
mod tech_badge;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{build_year, site_config};
use homepage::HomePage;
use navbar::Navbar;
use project::ProjectPage;
use resume::ResumePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = site_config().owner.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=site_config().tagline.clone() />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/resume") view=ResumePage />
                    <Route path=path!("/:slug") view=ProjectPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 px-4 text-center">
            <h1 class="text-6xl font-bold text-primary">"404"</h1>
            <p class="text-lg">"This page doesn't exist."</p>
            <a href="/" class="text-primary underline">
                "Back to home"
            </a>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = site_config();
    let year = build_year().map(|y| y.to_string()).unwrap_or_default();
    view! {
        <footer class="w-full py-8 px-4 border-t border-muted/30 text-center text-sm text-muted">
            {format!("© {year} {}", config.owner)}
        </footer>
    }
}
