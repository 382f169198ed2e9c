use leptos::prelude::*;

use super::Chips;
use crate::models::BlogPost;
use crate::services::media::format_date;

#[component]
pub fn PostCard(post: BlogPost, #[prop(into)] style: String) -> impl IntoView {
    let href = post.href();
    let date = format_date(&post.date);
    let image = post
        .image
        .clone()
        .map(|src| (src, post.image_alt().to_string()));

    view! {
        <div
            class="bg-white rounded-xl shadow-lg overflow-hidden border border-[#E1F5F6] hover:shadow-xl hover:-translate-y-2 transition-all duration-300 flex flex-col"
            style=style
        >
            {image.map(|(src, alt)| view! {
                <div class="h-48 overflow-hidden">
                    <img src=src alt=alt class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"/>
                </div>
            })}
            <div class="p-6 flex-1 flex flex-col">
                <div class="flex items-center gap-4 text-sm text-[#002B48]/60 mb-3">
                    <span>"📅 "{date}</span>
                    {post.read_time.clone().map(|t| view! { <span>"⏱ "{t}</span> })}
                </div>
                <h3 class="text-xl font-bold text-[#002B48] mb-3">{post.title.clone()}</h3>
                <p class="text-[#002B48]/80 mb-4 flex-1">{post.excerpt.clone()}</p>
                <div class="mb-4">
                    <Chips items=post.tags.clone()/>
                </div>
                <a
                    href=href
                    class="mt-auto inline-flex items-center gap-2 text-[#089BAB] hover:text-[#002B48] font-medium transition"
                >
                    "Read Article →"
                </a>
            </div>
        </div>
    }
}
