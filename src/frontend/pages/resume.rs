use leptos::prelude::*;

use super::home::SkillBars;
use crate::api::load_resume;
use crate::frontend::components::{
    ButtonVariant, Chips, DetailSkeleton, ErrorPanel, Heading, LinkButton,
};
use crate::frontend::{use_motion, use_site, use_source};
use crate::types::{ResumeData, ViewState};

/// Only skills rated at least this high make the summary.
const SUMMARY_SKILL_THRESHOLD: u8 = 70;

#[component]
pub fn ResumePage() -> impl IntoView {
    let site = use_site();
    let source = use_source();
    let resume = LocalResource::new(move || {
        let source = source.clone();
        async move { load_resume(&source).await }
    });

    view! {
        <div class="pt-24 pb-16 bg-gradient-to-b from-[#E1F5F6] to-white min-h-screen">
            <section class="container mx-auto px-4 md:px-6 max-w-4xl">
                <Heading
                    lead="My"
                    accent="Resume"
                    subtitle="A summary of my education and skills. Download the full CV for details."
                    page=true
                />
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    <LinkButton href=site.cv_path.clone() download=true>"⬇ Download CV"</LinkButton>
                    <LinkButton href=site.cv_path external=true variant=ButtonVariant::Outline>
                        "View in Browser"
                    </LinkButton>
                </div>
                <Suspense fallback=|| view! { <DetailSkeleton/> }>
                    {move || Suspend::new(async move {
                        match resume.await {
                            ViewState::Ready(data) => view! { <ResumeSummary data=data/> }.into_any(),
                            ViewState::Error(message) => view! { <ErrorPanel message=message/> }.into_any(),
                            ViewState::Loading | ViewState::NotFound => view! { <DetailSkeleton/> }.into_any(),
                        }
                    })}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn ResumeSummary(data: ResumeData) -> impl IntoView {
    let motion = use_motion();
    let ResumeData {
        personal,
        education,
        skills,
    } = data;
    let strongest: Vec<_> = skills
        .strongest(SUMMARY_SKILL_THRESHOLD)
        .into_iter()
        .cloned()
        .collect();

    view! {
        <div class="bg-white rounded-xl shadow-lg p-8 border border-[#E1F5F6] space-y-10" style=motion.section_style(1)>
            <header>
                <h2 class="text-3xl font-bold text-[#002B48]">{personal.name}</h2>
                <p class="text-lg text-[#089BAB] mb-4">{personal.title}</p>
                <p class="text-[#002B48]/80 leading-relaxed">{personal.about}</p>
                <div class="flex flex-wrap gap-x-6 gap-y-1 text-sm text-[#002B48]/70 mt-4">
                    {personal.location.map(|l| view! { <span>"📍 "{l}</span> })}
                    {personal.email.map(|e| view! { <span>"✉ "{e}</span> })}
                    {personal.phone.map(|p| view! { <span>"📞 "{p}</span> })}
                </div>
            </header>

            {(!education.is_empty()).then(|| view! {
                <section>
                    <h3 class="text-xl font-bold text-[#002B48] mb-4">"Education"</h3>
                    <ul class="space-y-4">
                        {education
                            .into_iter()
                            .map(|e| {
                                let grade = e.cgpa.or(e.gpa);
                                view! {
                                    <li>
                                        <p class="font-medium text-[#002B48]">{e.degree}</p>
                                        <p class="text-sm text-[#002B48]/70">
                                            {e.institution}" · "{e.period}
                                            {grade.map(|g| format!(" · {g}"))}
                                        </p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            })}

            <SkillBars title="Core Skills" skills=strongest/>

            {(!skills.tools.is_empty()).then(|| view! {
                <section>
                    <h3 class="text-xl font-bold text-[#002B48] mb-4">"Tools"</h3>
                    <Chips items=skills.tools.clone()/>
                </section>
            })}
        </div>
    }
}
