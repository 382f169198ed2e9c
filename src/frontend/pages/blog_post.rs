use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::load_post;
use crate::frontend::components::{Chips, DetailSkeleton, ErrorPanel, NotFoundPanel};
use crate::frontend::{use_motion, use_site, use_source};
use crate::models::{Block, BlogPost, PostBody, Section};
use crate::services::media::{format_date, reading_progress};
use crate::services::TextBlock;
use crate::types::ViewState;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let source = use_source();
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let source = source.clone();
        let route_id = params.with(|p| p.get("id")).unwrap_or_default();
        async move { load_post(&source, &route_id).await }
    });

    view! {
        <div class="pt-24 pb-16 bg-gradient-to-b from-[#E1F5F6] to-white min-h-screen">
            <Suspense fallback=|| view! { <DetailSkeleton/> }>
                {move || Suspend::new(async move {
                    match post.await {
                        ViewState::Ready(post) => view! { <PostView post=post/> }.into_any(),
                        ViewState::NotFound => view! {
                            <NotFoundPanel
                                title="Post Not Found"
                                message="The blog post you're looking for doesn't exist or has been removed."
                                back_href="/blog"
                                back_label="Back to Blog"
                            />
                        }
                        .into_any(),
                        ViewState::Error(message) => view! {
                            <div class="container mx-auto px-4">
                                <ErrorPanel message=message back_href="/blog" back_label="Back to Blog"/>
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
fn PostView(post: BlogPost) -> impl IntoView {
    let motion = use_motion();
    let content = NodeRef::<Div>::new();
    let (progress, set_progress) = signal(0.0f64);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(el) = content.get_untracked() {
            let scroll_y = window().scroll_y().unwrap_or_default();
            set_progress.set(reading_progress(
                scroll_y,
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            ));
        }
    });
    on_cleanup(move || handle.remove());

    let date = format_date(&post.date);
    let image = post
        .image
        .clone()
        .map(|src| (src, post.image_alt().to_string()));

    view! {
        <div class="fixed top-0 left-0 right-0 h-1 z-50 bg-transparent">
            <div
                class="h-full bg-[#089BAB] transition-[width] duration-150"
                style=move || format!("width: {}%", progress.get())
            ></div>
        </div>

        <article class="container mx-auto px-4 md:px-6 max-w-4xl">
            <a href="/blog" class="inline-flex items-center gap-2 text-[#089BAB] hover:text-[#002B48] font-medium mb-8">
                "← Back to Blog"
            </a>

            <header class="mb-10" style=motion.header_style()>
                <div class="flex items-center gap-4 text-sm text-[#002B48]/60 mb-4">
                    <span>"📅 "{date}</span>
                    {post.read_time.clone().map(|t| view! { <span>"⏱ "{t}</span> })}
                </div>
                <h1 class="text-3xl md:text-5xl font-bold text-[#002B48] mb-4">{post.title.clone()}</h1>
                {post.excerpt.clone().map(|e| view! { <p class="text-xl text-[#002B48]/80">{e}</p> })}
            </header>

            {image.map(|(src, alt)| view! {
                <div class="rounded-xl overflow-hidden shadow-xl mb-12" style=motion.section_style(1)>
                    <img src=src alt=alt class="w-full max-h-[28rem] object-cover"/>
                </div>
            })}

            <div node_ref=content class="prose max-w-none text-[#002B48]/90" style=motion.section_style(2)>
                <PostContent post=post.clone()/>
            </div>

            <footer class="mt-12 pt-8 border-t border-[#E1F5F6] space-y-6">
                {(!post.tags.is_empty()).then(|| view! {
                    <div>
                        <h3 class="text-sm font-bold text-[#002B48] mb-2">"Tags"</h3>
                        <Chips items=post.tags.clone()/>
                    </div>
                })}
                {(!post.categories.is_empty()).then(|| view! {
                    <div>
                        <h3 class="text-sm font-bold text-[#002B48] mb-2">"Categories"</h3>
                        <Chips items=post.categories.clone() tone="bg-[#002B48]/10 text-[#002B48]"/>
                    </div>
                })}
                <AuthorCard/>
                <a href="/blog" class="inline-flex items-center gap-2 text-[#089BAB] hover:text-[#002B48] font-medium">
                    "← Back to all posts"
                </a>
            </footer>
        </article>
    }
}

#[component]
fn PostContent(post: BlogPost) -> impl IntoView {
    match post.body() {
        PostBody::Sections(sections) => sections
            .iter()
            .cloned()
            .map(|section| view! { <SectionView section=section/> })
            .collect_view()
            .into_any(),
        PostBody::Markup(markup) => view! { <div inner_html=markup.to_string()></div> }.into_any(),
        PostBody::Empty => view! {
            <p class="italic text-[#002B48]/60">"This post has no content yet."</p>
        }
        .into_any(),
    }
}

#[component]
fn SectionView(section: Section) -> impl IntoView {
    view! {
        <section class="mb-10">
            {section.title.map(|t| view! { <h2 class="text-2xl font-bold text-[#002B48] mb-4">{t}</h2> })}
            {section
                .blocks
                .into_iter()
                .map(|block| view! { <BlockView block=block/> })
                .collect_view()}
        </section>
    }
}

/// Text, trailing text, link and image of one block, in that order.
#[component]
fn BlockView(block: Block) -> impl IntoView {
    let Block {
        text,
        text2,
        link,
        image,
        alt,
        description,
    } = block;

    view! {
        <div class="mb-6">
            {text.map(|t| render_text(TextBlock::parse(&t)))}
            {text2.map(|t| view! { <p class="mb-4 leading-relaxed">{t}</p> })}
            {link.map(|l| view! {
                <a
                    href=l.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block text-[#089BAB] hover:text-[#002B48] font-medium underline mb-4"
                >
                    {l.text}
                </a>
            })}
            {image.map(|src| view! {
                <figure class="my-6">
                    <img
                        src=src
                        alt=alt.unwrap_or_default()
                        class="rounded-xl shadow-lg w-full"
                    />
                    {description.map(|d| view! {
                        <figcaption class="text-center text-sm text-[#002B48]/60 mt-2">{d}</figcaption>
                    })}
                </figure>
            })}
        </div>
    }
}

fn render_text(block: TextBlock) -> AnyView {
    match block {
        TextBlock::Heading { level, text } => match TextBlock::heading_tag(level) {
            "h2" => view! { <h2 class="text-2xl font-bold text-[#002B48] mb-4">{text}</h2> }.into_any(),
            "h3" => view! { <h3 class="text-xl font-bold text-[#002B48] mb-3">{text}</h3> }.into_any(),
            _ => view! { <h4 class="text-lg font-bold text-[#002B48] mb-2">{text}</h4> }.into_any(),
        },
        TextBlock::Code(code) => view! {
            <pre class="bg-[#002B48] text-white text-sm p-4 rounded-lg overflow-x-auto mb-4"><code>{code}</code></pre>
        }
        .into_any(),
        TextBlock::List(items) => view! {
            <ul class="list-disc list-inside space-y-1 mb-4">
                {items.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        TextBlock::Paragraph(text) => view! { <p class="mb-4 leading-relaxed">{text}</p> }.into_any(),
    }
}

#[component]
fn AuthorCard() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="flex items-center gap-4 bg-white rounded-xl shadow-md p-6 border border-[#E1F5F6]">
            <img src=site.profile_image.clone() alt=site.owner_name.clone() class="w-16 h-16 rounded-full object-cover"/>
            <div>
                <p class="font-bold text-[#002B48]">{site.owner_name.clone()}</p>
                <p class="text-sm text-[#002B48]/70">{site.author_bio.clone()}</p>
            </div>
        </div>
    }
}
