use leptos::prelude::*;

use crate::api::load_home;
use crate::frontend::components::{
    ButtonVariant, CardImage, Chips, DetailSkeleton, ErrorPanel, Heading, LinkButton,
};
use crate::frontend::{use_motion, use_site, use_source};
use crate::models::{lenient, Personal, Project, SkillLevel, Skills};
use crate::services::project_href;
use crate::types::{HomeData, ViewState};

const FEATURED_TECHS: usize = 4;
const FEATURED_FEATURES: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let source = use_source();
    let home = LocalResource::new(move || {
        let source = source.clone();
        async move { load_home(&source).await }
    });

    view! {
        <Suspense fallback=|| view! { <div class="pt-24 container mx-auto px-4"><DetailSkeleton/></div> }>
            {move || Suspend::new(async move {
                match home.await {
                    ViewState::Ready(data) => view! { <HomeContent data=data/> }.into_any(),
                    ViewState::Error(message) => view! {
                        <div class="pt-24 container mx-auto px-4">
                            <ErrorPanel message=message/>
                        </div>
                    }
                    .into_any(),
                    ViewState::Loading | ViewState::NotFound => view! {
                        <div class="pt-24 container mx-auto px-4"><DetailSkeleton/></div>
                    }
                    .into_any(),
                }
            })}
        </Suspense>
    }
}

#[component]
fn HomeContent(data: HomeData) -> impl IntoView {
    let HomeData {
        personal,
        featured,
        skills,
    } = data;
    let email = personal.email.clone();

    view! {
        <Hero personal=personal/>
        <SkillsOverview skills=skills/>
        <FeaturedProjects projects=featured/>
        <CallToAction email=email/>
    }
}

#[component]
fn Hero(personal: Personal) -> impl IntoView {
    let site = use_site();
    let motion = use_motion();
    let tagline = lenient::non_empty(&personal.tagline)
        .unwrap_or(site.default_tagline.as_str())
        .to_string();
    let image = lenient::non_empty(&personal.image)
        .unwrap_or(site.profile_image.as_str())
        .to_string();
    let name = if personal.name.trim().is_empty() {
        site.owner_name.clone()
    } else {
        personal.name.clone()
    };

    view! {
        <section class="pt-32 pb-20 bg-gradient-to-b from-[#E1F5F6] to-white">
            <div class="container mx-auto px-4 md:px-6 flex flex-col-reverse md:flex-row items-center gap-12">
                <div class="md:w-1/2" style=motion.header_style()>
                    <p class="text-[#089BAB] font-medium mb-2">"Hello, I'm"</p>
                    <h1 class="text-4xl md:text-5xl font-bold text-[#002B48] mb-4">{name.clone()}</h1>
                    <h2 class="text-xl md:text-2xl text-[#002B48]/80 mb-6">{personal.title.clone()}</h2>
                    <p class="text-[#002B48]/70 mb-8 max-w-xl">{tagline}</p>
                    <div class="flex flex-wrap gap-4 mb-8">
                        <LinkButton href="/projects">"View Projects"</LinkButton>
                        <LinkButton href="/about" variant=ButtonVariant::Outline>"About Me"</LinkButton>
                    </div>
                    <div class="flex gap-4">
                        {personal
                            .social
                            .iter()
                            .map(|link| view! {
                                <a
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title=link.name.clone()
                                    class="w-10 h-10 rounded-full bg-white shadow-md flex items-center justify-center hover:bg-[#089BAB] hover:text-white transition"
                                >
                                    {link.kind().glyph()}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="md:w-1/2 flex justify-center" style=motion.section_style(1)>
                    <img
                        src=image
                        alt=name
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-8 border-white shadow-2xl"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsOverview(skills: Skills) -> impl IntoView {
    (!skills.is_empty()).then(move || {
        view! {
            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 md:px-6">
                    <Heading lead="My" accent="Skills"/>
                    <div class="grid md:grid-cols-2 gap-12">
                        <SkillBars title="Programming" skills=skills.programming/>
                        <SkillBars title="Web Development" skills=skills.web/>
                    </div>
                    <div class="grid md:grid-cols-2 gap-12 mt-12">
                        {(!skills.tools.is_empty()).then(|| view! {
                            <div>
                                <h3 class="text-xl font-bold text-[#002B48] mb-4">"Tools"</h3>
                                <Chips items=skills.tools/>
                            </div>
                        })}
                        {(!skills.concepts.is_empty()).then(|| view! {
                            <div>
                                <h3 class="text-xl font-bold text-[#002B48] mb-4">"Concepts"</h3>
                                <Chips items=skills.concepts tone="bg-[#002B48]/10 text-[#002B48]"/>
                            </div>
                        })}
                    </div>
                </div>
            </section>
        }
    })
}

#[component]
pub fn SkillBars(#[prop(into)] title: String, skills: Vec<SkillLevel>) -> impl IntoView {
    (!skills.is_empty()).then(move || {
        view! {
            <div>
                <h3 class="text-xl font-bold text-[#002B48] mb-6">{title}</h3>
                <div class="space-y-4">
                    {skills
                        .into_iter()
                        .map(|skill| {
                            let width = skill.bar_style();
                            view! {
                                <div>
                                    <div class="flex justify-between mb-1 text-[#002B48]">
                                        <span class="font-medium">{skill.name}</span>
                                        <span class="text-sm">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="w-full bg-[#E1F5F6] rounded-full h-2.5">
                                        <div class="bg-[#089BAB] h-2.5 rounded-full" style=width></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

#[component]
fn FeaturedProjects(projects: Vec<(usize, Project)>) -> impl IntoView {
    let motion = use_motion();

    view! {
        <section class="py-16 bg-gradient-to-b from-white to-[#E1F5F6]">
            <div class="container mx-auto px-4 md:px-6">
                <Heading lead="Featured" accent="Projects"/>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(position, (index, project))| view! {
                            <FeaturedCard index=index project=project style=motion.item_style(position)/>
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <LinkButton href="/projects" variant=ButtonVariant::Outline>"View All Projects →"</LinkButton>
                </div>
            </div>
        </section>
    }
}

/// Compact project card: a few technologies and features, the rest folded
/// into an overflow chip.
#[component]
fn FeaturedCard(index: usize, project: Project, #[prop(into)] style: String) -> impl IntoView {
    let href = project_href(index);
    let hidden_features = project.features.len().saturating_sub(FEATURED_FEATURES);
    let features: Vec<String> = project
        .features
        .iter()
        .take(FEATURED_FEATURES)
        .cloned()
        .collect();

    view! {
        <div
            class="bg-white rounded-xl shadow-lg overflow-hidden border border-[#E1F5F6] hover:shadow-xl transition-all duration-300 flex flex-col"
            style=style
        >
            <div class="h-48 overflow-hidden relative group">
                <CardImage project=project.clone()/>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-xl font-bold text-[#002B48] mb-2">{project.title.clone()}</h3>
                <p class="text-[#002B48]/80 mb-4">{project.tagline.clone()}</p>
                <div class="mb-4">
                    <Chips items=project.technologies.clone() max=FEATURED_TECHS/>
                </div>
                <ul class="mb-4 list-disc list-inside text-sm text-[#002B48]/80 space-y-1">
                    {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                </ul>
                {(hidden_features > 0).then(|| view! {
                    <span class="self-start bg-[#E1F5F6] text-[#089BAB] text-xs px-3 py-1 rounded-full mb-4">
                        {format!("+{hidden_features} more")}
                    </span>
                })}
                <a href=href class="mt-auto text-[#089BAB] hover:text-[#002B48] font-medium">
                    "View Details →"
                </a>
            </div>
        </div>
    }
}

#[component]
fn CallToAction(email: Option<String>) -> impl IntoView {
    let site = use_site();
    let mailto = site.mailto(email.as_deref());

    view! {
        <section class="py-20 bg-[#002B48] text-white">
            <div class="container mx-auto px-4 md:px-6 text-center">
                <h2 class="text-3xl font-bold mb-4">"Let's Work Together"</h2>
                <p class="text-white/80 max-w-xl mx-auto mb-8">
                    "Have a project in mind or just want to say hello? My inbox is open."
                </p>
                <LinkButton href=mailto variant=ButtonVariant::Light>"Get In Touch"</LinkButton>
            </div>
        </section>
    }
}
