use leptos::prelude::*;

use crate::api::load_blog;
use crate::frontend::components::{
    EmptyFilterPanel, ErrorPanel, FilterButton, GridSkeleton, Heading, PostCard,
};
use crate::frontend::{use_motion, use_source};
use crate::services::{blog_categories, filter_by_facet, ALL};
use crate::types::{BlogIndex, ViewState};

#[component]
pub fn BlogPage() -> impl IntoView {
    let source = use_source();
    let blog = LocalResource::new(move || {
        let source = source.clone();
        async move { load_blog(&source).await }
    });

    view! {
        <div class="pt-24 pb-16 bg-gradient-to-b from-[#E1F5F6] to-white min-h-screen">
            <section class="container mx-auto px-4 md:px-6">
                <Heading
                    lead="My"
                    accent="Blog"
                    subtitle="Thoughts, tutorials and notes from my journey in software development"
                    page=true
                />
                <Suspense fallback=|| view! { <GridSkeleton/> }>
                    {move || Suspend::new(async move {
                        match blog.await {
                            ViewState::Ready(index) => view! { <BlogBrowser index=index/> }.into_any(),
                            ViewState::Error(message) => view! {
                                <ErrorPanel message=message reload_label="Reload Blog"/>
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

/// Tag chips with post counts above the filtered post grid.
#[component]
fn BlogBrowser(index: BlogIndex) -> impl IntoView {
    let motion = use_motion();
    let categories = blog_categories(&index.posts, &index.categories);
    let posts = StoredValue::new(index.posts);
    let (active, set_active) = signal(ALL.to_string());

    let visible = Memo::new(move |_| {
        let selected = active.get();
        posts.with_value(|all| {
            filter_by_facet(all, &selected)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let reset = Callback::new(move |_: ()| set_active.set(ALL.to_string()));

    view! {
        <div class="flex flex-wrap justify-center gap-3 mb-12" style=motion.section_style(2)>
            {categories
                .into_iter()
                .map(|category| {
                    let name = category.name;
                    let is_active = {
                        let name = name.clone();
                        Signal::derive(move || active.get() == name)
                    };
                    let select = {
                        let name = name.clone();
                        Callback::new(move |_: ()| set_active.set(name.clone()))
                    };
                    view! {
                        <FilterButton label=name count=category.count active=is_active on_select=select/>
                    }
                })
                .collect_view()}
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! {
                        <EmptyFilterPanel
                            message="No posts found in this category"
                            reset_label="View All Posts"
                            on_reset=reset
                        />
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(position, post)| view! {
                            <PostCard post=post style=motion.item_style(position)/>
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
