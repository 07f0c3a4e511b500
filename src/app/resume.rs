use leptos::prelude::*;
use leptos_meta::Title;

use super::tech_badge::TechBadge;
use crate::config::site_config;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    location: &'static str,
    duties: &'static [&'static str],
}

const EXPERIENCE: &[Role] = &[
    Role {
        title: "Front-End Developer & Customer Care Head",
        company: "Jendie Automobiles Ltd",
        period: "Jun 2022 - Oct 2025",
        location: "Nairobi",
        duties: &[
            "Designed and implemented responsive websites using HTML, CSS (Tailwind), and React",
            "Developed dynamic UI components, conducted testing and performance tuning",
            "Provided customer support for IoT systems and coordinated NTSA-related services",
        ],
    },
    Role {
        title: "Business Support Executive - Data and Technology",
        company: "Various Organizations",
        period: "2018 - 2021",
        location: "Nairobi & Nyeri",
        duties: &[
            "Supported tech operations in ministries, NGOs and supermarkets",
            "Implemented stock systems, managed tech data, and trained users",
        ],
    },
    Role {
        title: "Asset Administrator",
        company: "Alma Kilifi Properties & Nyali Capital Ltd",
        period: "2015 - 2018",
        location: "Nairobi",
        duties: &["Handled payroll, reporting, account management, and admin functions"],
    },
];

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <div class="grid mx-auto pt-24 pb-16 px-4">
            <h1 class="font-bold text-2xl text-center mb-8">
                "Resume"
                <a
                    href="/Geoffrey_Muthoni_CV.pdf"
                    download="Geoffrey_Muthoni_CV.pdf"
                    class="relative top-1 ml-4"
                    aria-label="Download CV"
                >
                    <i class="extra-download" />
                </a>
            </h1>
            <Resume />
        </div>
    }
}

#[component]
fn Resume() -> impl IntoView {
    view! {
        <div
            id="resume"
            class="grid max-w-4xl grid-cols-1 md:grid-cols-3 p-8 leading-snug shadow-2xl rounded-lg border border-muted/20"
        >
            <Sidebar />
            <Experience />
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let config = site_config();
    let mailto = format!("mailto:{}", config.email);
    view! {
        <div class="space-y-4 p-2">
            <div class="text-center">
                <h2 class="text-2xl font-bold">{config.owner.clone()}</h2>
                <p class="text-sm text-muted">{config.tagline.clone()}</p>
            </div>
            <div class="flex flex-col items-start gap-y-1.5 text-sm border border-primary rounded-sm px-3 py-4">
                <div class="flex items-center gap-x-1.5">
                    <i class="extra-location"></i>
                    <div>"Nairobi, Kenya"</div>
                </div>
                <div class="flex items-center gap-x-1.5">
                    <i class="extra-email"></i>
                    <a href=mailto>{config.email.clone()}</a>
                </div>
                {config
                    .social_links
                    .iter()
                    .filter(|s| !s.internal)
                    .map(|s| {
                        view! {
                            <div class="flex items-center gap-x-1.5">
                                <i class=s.icon.class() />
                                <a href=s.href.clone() target="_blank" rel="noreferrer">
                                    {s.label.clone()}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <section id="resume-skills" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Skills"</h3>
                <div class="flex flex-wrap gap-2">
                    {["HTML", "CSS", "JavaScript", "TypeScript", "React", "Next.js", "Tailwind"]
                        .into_iter()
                        .map(|t| view! { <TechBadge tech=t /> })
                        .collect_view()}
                </div>
            </section>
            <section id="education" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Education"</h3>
                <div class="space-y-2 text-sm">
                    <div>
                        <strong>"Certificate in Web Development"</strong>
                        <div>"Udemy.com"</div>
                        <div class="font-bold">"2021"</div>
                    </div>
                    <div>
                        <strong>"Life Skills, Business Management & Technology"</strong>
                        <div>"KEPSA"</div>
                        <div class="font-bold">"2014-2018"</div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="col-span-2 space-y-4 p-2">
            <section id="experience" class="grid gap-y-3">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Experience"</h3>
                {EXPERIENCE
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="space-y-2">
                                <div class="flex items-start justify-between">
                                    <div class="text-left">
                                        <strong>{role.title}</strong>
                                        <div>{role.company} " · " {role.location}</div>
                                    </div>
                                    <div class="shrink-0 text-right font-bold">{role.period}</div>
                                </div>
                                <ul class="list-disc pl-5 text-sm">
                                    {role
                                        .duties
                                        .iter()
                                        .map(|d| view! { <li>{*d}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
