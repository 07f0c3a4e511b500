use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{tech_badge::TechBadge, NotFound};
use crate::content::{project_detail, ProjectDetail};

/// `/:slug`. Slugs without a detail page fall through to the 404 view.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let detail = move || params.with(|p| p.get("slug").and_then(|slug| project_detail(&slug)));

    move || match detail() {
        Some(detail) => view! { <ProjectDetailView detail /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn ProjectDetailView(detail: &'static ProjectDetail) -> impl IntoView {
    view! {
        <Title text=detail.title />
        <div class="w-full">
            <div class="w-full h-[40vh] relative flex items-end bg-gradient-to-b from-brightBlack/40 to-background">
                <div class="max-w-5xl w-full mx-auto px-4 pb-8">
                    <h1 class="text-4xl md:text-5xl font-bold text-primary mb-2">{detail.title}</h1>
                    <h3 class="text-lg text-muted">{detail.subtitle}</h3>
                </div>
            </div>
            <div class="max-w-5xl mx-auto px-4 py-8 grid md:grid-cols-5 gap-8">
                <div class="md:col-span-4">
                    <p class="uppercase tracking-widest text-sm text-primary">"Project"</p>
                    <h2 class="text-2xl font-bold py-2">"Overview"</h2>
                    <p class="leading-relaxed">{detail.overview}</p>
                    <div class="flex gap-4 mt-8">
                        <a
                            href=detail.code_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-2 rounded-lg border border-primary text-primary hover:bg-primary/15"
                        >
                            "Code"
                        </a>
                        <a
                            href=detail.demo_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-2 rounded-lg bg-primary text-background hover:opacity-90"
                        >
                            "Demo"
                        </a>
                    </div>
                </div>
                <div class="md:col-span-1 p-4 rounded-xl border border-muted/30 h-fit">
                    <p class="text-center font-bold pb-2">"Technologies"</p>
                    <div class="flex flex-wrap md:flex-col gap-2">
                        {detail
                            .tech
                            .iter()
                            .map(|t| view! { <TechBadge tech=*t /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <a href="/#projects" class="block max-w-5xl mx-auto px-4 pb-16 text-primary underline">
                "Back"
            </a>
        </div>
    }
}
