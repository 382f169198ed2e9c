use leptos::prelude::*;

use crate::api::load_about;
use crate::frontend::components::{BulletList, DetailSkeleton, ErrorPanel, Heading};
use crate::frontend::{use_motion, use_site, use_source};
use crate::models::{lenient, Achievement, Affiliation, Certification, Education, Personal};
use crate::types::{AboutData, ViewState};

#[component]
pub fn AboutPage() -> impl IntoView {
    let source = use_source();
    let about = LocalResource::new(move || {
        let source = source.clone();
        async move { load_about(&source).await }
    });

    view! {
        <div class="pt-24 pb-16 bg-gradient-to-b from-[#E1F5F6] to-white min-h-screen">
            <section class="container mx-auto px-4 md:px-6">
                <Heading lead="About" accent="Me" page=true/>
                <Suspense fallback=|| view! { <DetailSkeleton/> }>
                    {move || Suspend::new(async move {
                        match about.await {
                            ViewState::Ready(data) => view! { <AboutContent data=data/> }.into_any(),
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
fn AboutContent(data: AboutData) -> impl IntoView {
    let motion = use_motion();
    let AboutData {
        personal,
        education,
        affiliations,
        achievements,
        certifications,
    } = data;
    let languages = personal.languages.clone();

    view! {
        <Profile personal=personal/>

        <div class="grid md:grid-cols-2 gap-12 mt-16">
            <div style=motion.section_style(2)>
                <SectionTitle text="Education"/>
                {education
                    .into_iter()
                    .map(|e| view! { <EducationCard education=e/> })
                    .collect_view()}
            </div>
            <div style=motion.section_style(3)>
                <SectionTitle text="Achievements"/>
                {achievements
                    .into_iter()
                    .map(|a| view! { <AchievementCard achievement=a/> })
                    .collect_view()}
            </div>
        </div>

        {(!certifications.is_empty()).then(|| view! {
            <div class="mt-16" style=motion.section_style(4)>
                <SectionTitle text="Certifications"/>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {certifications
                        .into_iter()
                        .map(|c| view! { <CertificationCard certification=c/> })
                        .collect_view()}
                </div>
            </div>
        })}

        <div class="grid md:grid-cols-2 gap-12 mt-16">
            {(!languages.is_empty()).then(|| view! {
                <div>
                    <SectionTitle text="Languages"/>
                    <ul class="space-y-2">
                        {languages
                            .into_iter()
                            .map(|l| view! {
                                <li class="flex justify-between bg-white rounded-lg shadow p-4">
                                    <span class="font-medium text-[#002B48]">{l.name}</span>
                                    <span class="text-[#089BAB]">{l.level}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
            {(!affiliations.is_empty()).then(|| view! {
                <div>
                    <SectionTitle text="Affiliations"/>
                    {affiliations
                        .into_iter()
                        .map(|a| view! { <AffiliationCard affiliation=a/> })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

#[component]
fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <h2 class="text-2xl font-bold text-[#002B48] mb-6 border-l-4 border-[#089BAB] pl-4">{text}</h2>
    }
}

#[component]
fn Profile(personal: Personal) -> impl IntoView {
    let site = use_site();
    let motion = use_motion();
    let image = lenient::non_empty(&personal.image)
        .unwrap_or(site.profile_image.as_str())
        .to_string();
    let mailto = site.mailto(personal.email.as_deref());

    view! {
        <div class="grid md:grid-cols-3 gap-12 items-start" style=motion.section_style(1)>
            <div class="flex flex-col items-center">
                <img
                    src=image
                    alt=personal.name.clone()
                    class="w-56 h-56 rounded-full object-cover border-8 border-white shadow-2xl mb-6"
                />
                <div class="flex gap-3">
                    {personal
                        .social
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                title=link.name.clone()
                                class="w-10 h-10 rounded-full bg-white shadow-md flex items-center justify-center hover:bg-[#089BAB] transition"
                            >
                                {link.kind().glyph()}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="md:col-span-2">
                <h2 class="text-3xl font-bold text-[#002B48] mb-2">{personal.name.clone()}</h2>
                <p class="text-xl text-[#089BAB] mb-6">{personal.title.clone()}</p>
                <p class="text-[#002B48]/80 leading-relaxed mb-8 whitespace-pre-line">{personal.about.clone()}</p>
                <ul class="space-y-2 text-[#002B48]/80">
                    {personal.location.clone().map(|l| view! { <li>"📍 "{l}</li> })}
                    {personal.email.clone().map(|e| view! {
                        <li>"✉ "<a href=mailto class="text-[#089BAB] hover:text-[#002B48]">{e}</a></li>
                    })}
                    {personal.phone.clone().map(|p| view! { <li>"📞 "{p}</li> })}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn EducationCard(education: Education) -> impl IntoView {
    let grade = education
        .cgpa
        .clone()
        .map(|c| format!("CGPA: {c}"))
        .or_else(|| education.gpa.clone().map(|g| format!("GPA: {g}")));

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 mb-6 border border-[#E1F5F6]">
            <h3 class="text-lg font-bold text-[#002B48]">{education.degree}</h3>
            <p class="text-[#089BAB]">{education.institution}</p>
            <p class="text-sm text-[#002B48]/60 mb-2">{education.period}</p>
            {grade.map(|g| view! { <p class="text-sm font-medium text-[#002B48] mb-2">{g}</p> })}
            <BulletList items=education.highlights marker="•"/>
        </div>
    }
}

#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 mb-6 border border-[#E1F5F6] flex gap-4 items-center">
            {achievement.image.map(|src| view! {
                <img src=src alt="" class="w-16 h-16 object-contain"/>
            })}
            <div>
                <h3 class="text-lg font-bold text-[#002B48]">{achievement.title}</h3>
                <p class="text-[#089BAB]">{achievement.organization}</p>
                <p class="text-sm text-[#002B48]/60">{achievement.year}</p>
            </div>
        </div>
    }
}

/// Badge image, or an initial on a tinted placeholder.
#[component]
fn CertificationCard(certification: Certification) -> impl IntoView {
    let initial = certification.title.chars().next().unwrap_or('★').to_string();
    let alt = lenient::non_empty(&certification.alt)
        .unwrap_or(certification.title.as_str())
        .to_string();

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 border border-[#E1F5F6] flex flex-col items-center text-center">
            {match certification.badge {
                Some(src) => view! { <img src=src alt=alt class="w-20 h-20 object-contain mb-4"/> }.into_any(),
                None => view! {
                    <div class="w-20 h-20 rounded-full bg-[#E1F5F6] text-[#089BAB] text-3xl font-bold flex items-center justify-center mb-4">
                        {initial}
                    </div>
                }
                .into_any(),
            }}
            <h3 class="font-bold text-[#002B48]">{certification.title}</h3>
            <p class="text-[#089BAB] text-sm">{certification.issuer}</p>
            <p class="text-xs text-[#002B48]/60 mb-2">{certification.date}</p>
            {certification.credentials.map(|c| view! {
                <p class="text-xs text-[#002B48]/60 mb-2">{format!("Credential ID: {c}")}</p>
            })}
            {certification.url.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="text-sm text-[#089BAB] hover:text-[#002B48] font-medium">
                    "View Credential →"
                </a>
            })}
        </div>
    }
}

#[component]
fn AffiliationCard(affiliation: Affiliation) -> impl IntoView {
    let alt = lenient::non_empty(&affiliation.alt)
        .unwrap_or(affiliation.organization.as_str())
        .to_string();

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 mb-6 border border-[#E1F5F6] flex gap-4 items-start">
            {affiliation.image.map(|src| view! {
                <img src=src alt=alt class="w-16 h-16 object-contain"/>
            })}
            <div>
                <h3 class="text-lg font-bold text-[#002B48]">{affiliation.organization}</h3>
                <p class="text-sm text-[#002B48]/60 mb-2">{affiliation.period}</p>
                {affiliation.description.map(|d| view! { <p class="text-[#002B48]/80">{d}</p> })}
            </div>
        </div>
    }
}
