use leptos::prelude::*;

use crate::api::load_projects;
use crate::frontend::components::{
    EmptyFilterPanel, ErrorPanel, FilterButton, GridSkeleton, Heading, ProjectCard,
};
use crate::frontend::{use_motion, use_source};
use crate::models::Project;
use crate::services::{derive_categories, filter_indexed, ALL};
use crate::types::ViewState;

/// Shows the back-to-top button past this many cards.
const BACK_TO_TOP_AFTER: usize = 3;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let source = use_source();
    let projects = LocalResource::new(move || {
        let source = source.clone();
        async move { load_projects(&source).await }
    });

    view! {
        <div class="pt-24 pb-16 bg-gradient-to-b from-[#E1F5F6] to-white min-h-screen">
            <section class="container mx-auto px-4 md:px-6">
                <Heading
                    lead="My"
                    accent="Projects"
                    subtitle="Explore my portfolio of projects showcasing my skills in web development, AI, and problem-solving"
                    page=true
                />
                <Suspense fallback=|| view! { <GridSkeleton/> }>
                    {move || Suspend::new(async move {
                        match projects.await {
                            ViewState::Ready(list) => view! { <ProjectBrowser projects=list/> }.into_any(),
                            ViewState::Error(message) => view! {
                                <ErrorPanel message=message reload_label="Reload Projects"/>
                            }
                            .into_any(),
                            ViewState::Loading | ViewState::NotFound => view! { <GridSkeleton/> }.into_any(),
                        }
                    })}
                </Suspense>
            </section>
        </div>
    }
}

/// Category filter bar plus the filtered grid.
#[component]
fn ProjectBrowser(projects: Vec<Project>) -> impl IntoView {
    let motion = use_motion();
    let categories = derive_categories(&projects);
    let projects = StoredValue::new(projects);
    let (active, set_active) = signal(ALL.to_string());

    let visible = Memo::new(move |_| {
        let selected = active.get();
        projects.with_value(|all| {
            filter_indexed(all, &selected)
                .into_iter()
                .map(|(index, project)| (index, project.clone()))
                .collect::<Vec<_>>()
        })
    });
    let reset = Callback::new(move |_: ()| set_active.set(ALL.to_string()));

    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12" style=motion.section_style(2)>
            <div class="flex items-center gap-2 text-[#002B48] font-medium">"Category:"</div>
            {categories
                .into_iter()
                .map(|category| {
                    let is_active = {
                        let category = category.clone();
                        Signal::derive(move || active.get() == category)
                    };
                    let select = {
                        let category = category.clone();
                        Callback::new(move |_: ()| set_active.set(category.clone()))
                    };
                    view! { <FilterButton label=category active=is_active on_select=select/> }
                })
                .collect_view()}
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! {
                        <EmptyFilterPanel
                            message="No projects found in this category"
                            reset_label="View All Projects"
                            on_reset=reset
                        />
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(position, (index, project))| view! {
                            <ProjectCard index=index project=project style=motion.item_style(position)/>
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>

        <Show when=move || visible.with(|v| v.len() > BACK_TO_TOP_AFTER)>
            <div class="fixed bottom-8 right-8">
                <button
                    on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                    class="w-12 h-12 rounded-full bg-[#089BAB] text-white flex items-center justify-center shadow-lg hover:bg-[#002B48] transition-all duration-300"
                    aria-label="Back to top"
                >
                    "↑"
                </button>
            </div>
        </Show>
    }
}
