use leptos::prelude::*;
use leptos_meta::Title;

use super::tech_badge::TechBadge;
use crate::config::site_config;
use crate::content::{Project, ProjectFilter, PROJECTS, SKILLS};
use crate::tech::BadgeVariant;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let config = site_config();
    view! {
        <section id="home" class="w-full min-h-screen text-center pt-36 px-4">
            <div class="max-w-[1240px] mx-auto p-8 md:p-12 rounded-2xl border border-muted/30">
                <h1 class="py-4 text-4xl font-bold">
                    "Hi, I'm " <span class="text-primary">{config.owner.clone()}</span>
                </h1>
                <h2 class="py-2 text-2xl sm:text-3xl font-bold">{config.tagline.clone()}</h2>
                <p class="py-4 text-muted sm:max-w-[70%] m-auto max-w-[90%] text-base sm:text-lg leading-relaxed">
                    "Specializing in WordPress, Next.js, and React to build modern, responsive web applications."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mt-6">
                    <a
                        href="/#projects"
                        class="bg-primary/20 hover:bg-primary/30 text-primary px-6 py-3 rounded-md font-medium border border-primary/30"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="/#contact"
                        class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:bg-brightBlack/30"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="flex items-center w-full p-4 py-16 md:py-24 md:min-h-screen">
            <div class="max-w-[1240px] m-auto">
                <p class="uppercase text-xl tracking-widest text-primary font-semibold">"About"</p>
                <h2 class="py-4 text-3xl font-bold">"Who I Am"</h2>
                <p class="py-2 leading-relaxed">
                    "I'm a self-taught frontend developer who builds responsive, accessible websites for businesses and individuals. Most of my client work is in WordPress, while my own projects lean on React and Next.js."
                </p>
                <p class="py-2 leading-relaxed">
                    "Before moving into development full time I spent several years supporting technology operations for ministries, NGOs and retail, which taught me to build for the people who actually use the software."
                </p>
                <a href="/#projects" class="inline-block mt-4 text-primary underline">
                    "Check out some of my latest projects."
                </a>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="w-full lg:min-h-screen p-4 py-16 md:py-24">
            <div class="max-w-[1240px] mx-auto flex flex-col justify-center h-full">
                <p class="text-xl tracking-widest uppercase text-primary font-semibold">"Skills"</p>
                <h2 class="py-4 text-3xl font-bold">"My Skillset"</h2>
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 md:gap-8">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            let width = format!("width: {}%", skill.proficiency);
                            view! {
                                <div class="p-4 md:p-6 rounded-lg border border-muted/30 group">
                                    <h3 class="text-base md:text-lg font-bold mb-2">
                                        {skill.name}
                                    </h3>
                                    <div class="text-xs text-muted mb-3">{skill.category}</div>
                                    <div class="flex justify-between items-center mb-1 text-xs">
                                        <span class="text-muted">"Proficiency"</span>
                                        <span class="font-semibold text-primary">
                                            {format!("{}%", skill.proficiency)}
                                        </span>
                                    </div>
                                    <div class="w-full bg-muted/30 rounded-full h-2 overflow-hidden">
                                        <div class="h-full bg-primary rounded-full" style=width></div>
                                    </div>
                                    {skill
                                        .years
                                        .map(|y| {
                                            view! {
                                                <div class="text-xs text-muted mt-2 opacity-0 group-hover:opacity-100 transition-opacity">
                                                    {format!("{y}+ years")}
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);

    view! {
        <section id="projects" class="w-full py-16 md:py-24 px-4">
            <div class="max-w-[1240px] mx-auto">
                <p class="text-xl tracking-widest uppercase text-primary font-semibold">
                    "Projects"
                </p>
                <h2 class="py-4 text-3xl font-bold">"What I've Built"</h2>
                <div class="flex flex-wrap gap-2 mb-8" role="tablist">
                    {ProjectFilter::tabs()
                        .into_iter()
                        .map(|tab| {
                            let selected = move || filter.get() == tab;
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || selected().to_string()
                                    class=move || {
                                        if selected() {
                                            "px-4 py-2 rounded-md bg-primary/20 text-primary border border-primary/30"
                                        } else {
                                            "px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                                        }
                                    }
                                    on:click=move |_| set_filter(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter
                            .get()
                            .apply(PROJECTS)
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <div class="p-6 rounded-xl border border-muted/30 hover:bg-brightBlack/20 transition-colors">
                                        <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                                        <p class="text-sm text-muted mb-4">{project.description}</p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .tech
                                                .iter()
                                                .map(|t| view! { <TechBadge tech=*t /> })
                                                .collect_view()}
                                        </div>
                                        <ProjectLinks project />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

/// "More Info" only appears when the card has its own detail page; client
/// sites link straight to the live site.
#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    let more_info = project.has_detail_page().then(|| {
        view! {
            <a href=project.project_url class="text-primary text-sm font-medium">
                "More Info →"
            </a>
        }
    });
    let live = project.live_url.map(|url| {
        view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm font-medium hover:text-primary"
            >
                "Live"
            </a>
        }
    });
    let code = project.github_url.map(|url| {
        view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm font-medium hover:text-primary"
            >
                <i class="devicon-github-plain mr-1" />
                "Code"
            </a>
        }
    });
    view! { <div class="flex items-center gap-4">{more_info} {live} {code}</div> }
}

#[component]
fn Contact() -> impl IntoView {
    let config = site_config();
    let mailto = format!("mailto:{}", config.email);
    view! {
        <section id="contact" class="w-full lg:min-h-screen py-16 md:py-24 px-4">
            <div class="max-w-[1240px] mx-auto">
                <p class="text-xl tracking-widest uppercase text-primary font-semibold">"Contact"</p>
                <h2 class="py-4 text-3xl font-bold">"Get In Touch"</h2>
                <div class="p-6 rounded-lg border border-muted/30 max-w-2xl">
                    <p class="mb-4">
                        "I'm available for freelance work and full-time roles. Send me a message and I'll get back to you."
                    </p>
                    <a
                        href=mailto
                        class="inline-block bg-primary/20 hover:bg-primary/30 text-primary px-6 py-3 rounded-md font-medium border border-primary/30"
                    >
                        {config.email.clone()}
                    </a>
                    <p class="text-sm text-muted mt-6 mb-2">"Currently building with"</p>
                    <div class="flex flex-wrap gap-2 p-3 rounded-md bg-black/60">
                        {["React", "Next.js", "WordPress", "Tailwind"]
                            .into_iter()
                            .map(|t| view! { <TechBadge tech=t variant=BadgeVariant::Light /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
