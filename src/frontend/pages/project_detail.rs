use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::load_project;
use crate::frontend::components::{
    BulletList, ButtonVariant, CardImage, Chips, DetailSkeleton, ErrorPanel, LinkButton,
    NotFoundPanel,
};
use crate::frontend::{use_motion, use_source};
use crate::models::{lenient, BuildInstructions, Member, Project, Screenshot, Team};
use crate::services::media::{next_index, prev_index, youtube_embed_url};
use crate::types::ViewState;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let source = use_source();
    let params = use_params_map();
    let project = LocalResource::new(move || {
        let source = source.clone();
        let route_id = params.with(|p| p.get("id")).unwrap_or_default();
        async move { load_project(&source, &route_id).await }
    });

    view! {
        <div class="pt-24 pb-16 bg-gradient-to-b from-[#E1F5F6] to-white min-h-screen">
            <Suspense fallback=|| view! { <DetailSkeleton/> }>
                {move || Suspend::new(async move {
                    match project.await {
                        ViewState::Ready(project) => view! { <ProjectDetail project=project/> }.into_any(),
                        ViewState::NotFound => view! {
                            <NotFoundPanel
                                title="Project Not Found"
                                message="The project you're looking for doesn't exist or has been removed."
                                back_href="/projects"
                                back_label="Back to Projects"
                            />
                        }
                        .into_any(),
                        ViewState::Error(message) => view! {
                            <div class="container mx-auto px-4">
                                <ErrorPanel
                                    message=message
                                    back_href="/projects"
                                    back_label="Back to Projects"
                                />
                            </div>
                        }
                        .into_any(),
                        ViewState::Loading => view! { <DetailSkeleton/> }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let motion = use_motion();
    let category = project.category.primary().map(str::to_string);
    let embed = project.video.as_deref().and_then(youtube_embed_url);

    view! {
        <article class="container mx-auto px-4 md:px-6 max-w-5xl">
            <a href="/projects" class="inline-flex items-center gap-2 text-[#089BAB] hover:text-[#002B48] font-medium mb-8">
                "← Back to Projects"
            </a>

            <header class="mb-10" style=motion.header_style()>
                <div class="flex flex-wrap items-center gap-3 mb-4">
                    {project.is_academic.then(|| view! {
                        <span class="bg-[#009C9C] text-white px-3 py-1 rounded-full text-xs font-medium">"Academic"</span>
                    })}
                    {category.map(|c| view! {
                        <span class="bg-[#FF9801] text-white px-3 py-1 rounded-full text-xs font-medium">{c}</span>
                    })}
                    <span class="bg-[#089BAB] text-white px-3 py-1 rounded-full text-xs font-medium">
                        {project.date_label().to_string()}
                    </span>
                    {(project.playable == Some(true)).then(|| view! {
                        <span class="bg-green-500 text-white px-3 py-1 rounded-full text-xs font-medium">"▶ Playable"</span>
                    })}
                </div>
                <h1 class="text-3xl md:text-5xl font-bold text-[#002B48] mb-4">{project.title.clone()}</h1>
                <p class="text-xl text-[#002B48]/80">{project.tagline.clone()}</p>
            </header>

            <Testimonials quotes=project.testimonials.clone()/>

            <div class="h-64 md:h-96 rounded-xl overflow-hidden shadow-xl mb-12 relative group" style=motion.section_style(1)>
                <CardImage project=project.clone()/>
            </div>

            <div class="grid md:grid-cols-3 gap-12">
                <div class="md:col-span-2" style=motion.section_style(2)>
                    {project.description.clone().map(|d| view! {
                        <section class="mb-8">
                            <h2 class="text-2xl font-bold text-[#002B48] mb-4">"Overview"</h2>
                            <p class="text-[#002B48]/80 leading-relaxed">{d}</p>
                        </section>
                    })}
                    {project.purpose.clone().map(|p| view! {
                        <section class="mb-8">
                            <h2 class="text-2xl font-bold text-[#002B48] mb-4">"Purpose"</h2>
                            <p class="text-[#002B48]/80 leading-relaxed">{p}</p>
                        </section>
                    })}
                    <BulletList title="Key Features" items=project.features.clone()/>
                    <BulletList title="Challenges" items=project.challenges.clone() marker="⚡"/>
                    <BulletList title="What I Learned" items=project.learnings.clone() marker="💡"/>
                    <Gallery screenshots=project.screenshots.clone()/>
                    {embed.map(|src| view! {
                        <section class="mb-8">
                            <h2 class="text-2xl font-bold text-[#002B48] mb-4">"Video"</h2>
                            <div class="aspect-video rounded-xl overflow-hidden shadow-lg">
                                <iframe
                                    src=src
                                    title=format!("{} video", project.title)
                                    class="w-full h-full"
                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                    allowfullscreen=true
                                ></iframe>
                            </div>
                        </section>
                    })}
                </div>

                <aside style=motion.section_style(3)>
                    {(!project.technologies.is_empty()).then(|| view! {
                        <section class="bg-white rounded-xl shadow-lg p-6 mb-8 border border-[#E1F5F6]">
                            <h3 class="text-lg font-bold text-[#002B48] mb-4">"Technologies"</h3>
                            <Chips items=project.technologies.clone()/>
                        </section>
                    })}
                    <ProjectLinks project=project.clone()/>
                    <ExtraDocs project=project.clone()/>
                    {project.team.clone().map(|team| view! { <TeamCard team=team/> })}
                    {(!project.awards.is_empty()).then(|| view! {
                        <section class="bg-white rounded-xl shadow-lg p-6 mb-8 border border-[#E1F5F6]">
                            <BulletList title="Awards" items=project.awards.clone() marker="🏆"/>
                        </section>
                    })}
                </aside>
            </div>
        </article>
    }
}

#[component]
fn Testimonials(quotes: Vec<String>) -> impl IntoView {
    (!quotes.is_empty()).then(move || {
        view! {
            <section class="mb-10 space-y-4">
                {quotes
                    .into_iter()
                    .map(|q| view! {
                        <blockquote class="border-l-4 border-[#089BAB] bg-white/70 p-4 italic text-[#002B48]/80 rounded-r-lg">
                            {q}
                        </blockquote>
                    })
                    .collect_view()}
            </section>
        }
    })
}

#[component]
fn ProjectLinks(project: Project) -> impl IntoView {
    (project.github.is_some() || project.demo.is_some()).then(move || {
        view! {
            <section class="bg-white rounded-xl shadow-lg p-6 mb-8 border border-[#E1F5F6] flex flex-col gap-3">
                <h3 class="text-lg font-bold text-[#002B48] mb-1">"Links"</h3>
                {project.github.map(|href| view! {
                    <LinkButton href=href external=true>"🐙 GitHub Repository"</LinkButton>
                })}
                {project.demo.map(|href| view! {
                    <LinkButton href=href external=true variant=ButtonVariant::Outline>"💻 Live Demo"</LinkButton>
                })}
            </section>
        }
    })
}

/// Documentation, schema and build instructions.
#[component]
fn ExtraDocs(project: Project) -> impl IntoView {
    project.has_extra_docs().then(move || {
        view! {
            <section class="bg-white rounded-xl shadow-lg p-6 mb-8 border border-[#E1F5F6]">
                <h3 class="text-lg font-bold text-[#002B48] mb-4">"Documentation"</h3>
                <div class="flex flex-col gap-2 mb-4">
                    {project.documentation.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="text-[#089BAB] hover:text-[#002B48]">
                            "📄 Project Documentation"
                        </a>
                    })}
                    {project.database_schema.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="text-[#089BAB] hover:text-[#002B48]">
                            "🗄 Database Schema"
                        </a>
                    })}
                </div>
                {project.build_instructions.map(|build| match build {
                    BuildInstructions::Steps(steps) => view! {
                        <ol class="list-decimal list-inside space-y-1 text-sm text-[#002B48]/80">
                            {steps.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                        </ol>
                    }
                    .into_any(),
                    BuildInstructions::Text(text) => view! {
                        <pre class="bg-[#002B48] text-white text-sm p-4 rounded-lg whitespace-pre-wrap">{text}</pre>
                    }
                    .into_any(),
                })}
            </section>
        }
    })
}

/// Screenshot viewer with wrap-around navigation and thumbnails.
#[component]
fn Gallery(screenshots: Vec<Screenshot>) -> impl IntoView {
    let len = screenshots.len();
    let shots = StoredValue::new(screenshots);
    let (current, set_current) = signal(0usize);

    let shown = move || shots.with_value(|all| all.get(current.get()).cloned());

    (len > 0).then(move || {
        view! {
            <section class="mb-8">
                <h2 class="text-2xl font-bold text-[#002B48] mb-4">"Screenshots"</h2>
                <div class="relative rounded-xl overflow-hidden shadow-lg bg-white">
                    {move || shown().map(|shot| view! {
                        <img
                            src=shot.src.clone()
                            alt=shot.caption.clone().unwrap_or_else(|| "Project screenshot".to_string())
                            class="w-full max-h-[28rem] object-contain"
                        />
                        {shot.caption.map(|c| view! {
                            <p class="text-center text-sm text-[#002B48]/70 p-3">{c}</p>
                        })}
                    })}
                    {(len > 1).then(|| view! {
                        <button
                            on:click=move |_| set_current.update(|i| *i = prev_index(*i, len))
                            class="absolute left-3 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 shadow"
                            aria-label="Previous screenshot"
                        >
                            "‹"
                        </button>
                        <button
                            on:click=move |_| set_current.update(|i| *i = next_index(*i, len))
                            class="absolute right-3 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 shadow"
                            aria-label="Next screenshot"
                        >
                            "›"
                        </button>
                    })}
                </div>
                {(len > 1).then(|| view! {
                    <div class="flex gap-2 mt-4 overflow-x-auto">
                        {shots
                            .get_value()
                            .into_iter()
                            .enumerate()
                            .map(|(i, shot)| view! {
                                <button
                                    on:click=move |_| set_current.set(i)
                                    class=move || {
                                        if current.get() == i {
                                            "w-20 h-14 rounded overflow-hidden border-2 border-[#089BAB]"
                                        } else {
                                            "w-20 h-14 rounded overflow-hidden border-2 border-transparent opacity-70"
                                        }
                                    }
                                >
                                    <img src=shot.src alt="" class="w-full h-full object-cover"/>
                                </button>
                            })
                            .collect_view()}
                    </div>
                })}
            </section>
        }
    })
}

#[component]
fn TeamCard(team: Team) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-lg p-6 mb-8 border border-[#E1F5F6]">
            <div class="flex items-center gap-3 mb-4">
                {team.team_logo.map(|src| view! {
                    <img src=src alt="Team logo" class="w-12 h-12 rounded-full object-cover"/>
                })}
                <h3 class="text-lg font-bold text-[#002B48]">
                    {lenient::non_empty(&team.team_name).unwrap_or("Team").to_string()}
                </h3>
            </div>
            {team.team_leader.map(|leader| view! {
                <p class="text-sm text-[#002B48]/60 mb-1">"Leader"</p>
                <MemberLink member=leader/>
            })}
            {(!team.team_members.is_empty()).then(|| view! {
                <p class="text-sm text-[#002B48]/60 mt-3 mb-1">"Members"</p>
                <ul class="space-y-1">
                    {team
                        .team_members
                        .into_iter()
                        .map(|m| view! { <li><MemberLink member=m/></li> })
                        .collect_view()}
                </ul>
            })}
        </section>
    }
}

#[component]
fn MemberLink(member: Member) -> impl IntoView {
    if member.link.trim().is_empty() {
        view! { <span class="text-[#002B48]">{member.name}</span> }.into_any()
    } else {
        view! {
            <a href=member.link target="_blank" rel="noopener noreferrer" class="text-[#089BAB] hover:text-[#002B48]">
                {member.name}
            </a>
        }
        .into_any()
    }
}
