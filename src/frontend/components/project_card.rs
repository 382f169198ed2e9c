use leptos::prelude::*;

use super::Chips;
use crate::models::Project;
use crate::services::project_href;

/// Grid card for the projects index. `index` is the project's position in the
/// loaded collection and becomes its detail link.
#[component]
pub fn ProjectCard(index: usize, project: Project, #[prop(into)] style: String) -> impl IntoView {
    let href = project_href(index);
    let badge = if project.is_academic {
        Some(("Academic".to_string(), "bg-[#009C9C]"))
    } else {
        project
            .category
            .primary()
            .map(|c| (c.to_string(), "bg-[#FF9801]"))
    };
    let features: Vec<String> = project.features.iter().take(4).cloned().collect();

    view! {
        <div
            class="bg-white rounded-xl shadow-lg overflow-hidden border border-[#E1F5F6] hover:shadow-xl hover:-translate-y-2 transition-all duration-300 flex flex-col"
            style=style
        >
            <div class="h-48 overflow-hidden relative group">
                <CardImage project=project.clone()/>
                <CardLinks github=project.github.clone() demo=project.demo.clone()/>
                <div class="absolute top-4 left-4 bg-[#089BAB] text-white px-3 py-1 rounded-full text-xs font-medium shadow-md">
                    {project.date_label().to_string()}
                </div>
                {badge.map(|(label, tone)| view! {
                    <div class=format!("absolute top-4 right-4 {tone} text-white px-3 py-1 rounded-full text-xs font-medium shadow-md")>
                        {label}
                    </div>
                })}
            </div>

            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-xl font-bold text-[#002B48] mb-2">{project.title.clone()}</h3>
                <p class="text-[#002B48]/80 mb-4 flex-1">{project.tagline.clone()}</p>

                {(!features.is_empty()).then(|| view! {
                    <ul class="mb-4 list-disc list-inside text-[#089BAB] text-sm space-y-1">
                        {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                    </ul>
                })}

                <div class="mb-4">
                    <Chips items=project.technologies.clone() max=5/>
                </div>

                <div class="flex justify-between items-center mt-auto pt-4 border-t border-[#E1F5F6]">
                    <a
                        href=href
                        class="w-full bg-[#089BAB] hover:bg-[#002B48] text-white px-6 py-3 rounded-lg font-medium transition-all duration-300 shadow-lg hover:shadow-xl text-center flex items-center justify-center gap-2 group"
                    >
                        "View Details"
                        <span class="ml-2 group-hover:ml-3 transition-all">"→"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Featured image, or the title on a gradient when there is none.
#[component]
pub fn CardImage(project: Project) -> impl IntoView {
    match project.image_src() {
        Some(src) => view! {
            <img
                src=src.to_string()
                alt=project.image_alt().to_string()
                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
            />
        }
        .into_any(),
        None => view! {
            <div class="w-full h-full flex items-center justify-center bg-gradient-to-r from-[#089BAB] to-[#009C9C]">
                <span class="text-white text-xl font-bold px-4 text-center">{project.title.clone()}</span>
            </div>
        }
        .into_any(),
    }
}

/// Hover overlay with repository and demo links.
#[component]
fn CardLinks(github: Option<String>, demo: Option<String>) -> impl IntoView {
    (github.is_some() || demo.is_some()).then(move || {
        view! {
            <div class="absolute inset-0 flex items-center justify-center gap-4 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity duration-300 z-10">
                {github.map(|href| view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        title="GitHub Repository"
                        class="bg-white text-[#002B48] hover:bg-[#089BAB] hover:text-white rounded-full p-3 shadow-lg transition"
                    >
                        "🐙"
                    </a>
                })}
                {demo.map(|href| view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        title="Live Demo"
                        class="bg-white text-[#002B48] hover:bg-[#089BAB] hover:text-white rounded-full p-3 shadow-lg transition"
                    >
                        "💻"
                    </a>
                })}
            </div>
        }
    })
}
