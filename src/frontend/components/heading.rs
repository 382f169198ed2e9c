use leptos::prelude::*;

use crate::frontend::use_motion;

/// Two-tone page or section title with an accent bar, e.g. "My *Projects*".
#[component]
pub fn Heading(
    #[prop(into)] lead: String,
    #[prop(into)] accent: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] page: bool,
) -> impl IntoView {
    let motion = use_motion();
    let title_class = if page {
        "text-3xl md:text-4xl font-bold text-[#002B48] mb-4"
    } else {
        "text-2xl md:text-3xl font-bold text-[#002B48] mb-4"
    };

    view! {
        <div class="text-center mb-12" style=motion.header_style()>
            <h1 class=title_class>
                {lead}" "<span class="text-[#089BAB]">{accent}</span>
            </h1>
            <div class="h-1 w-20 bg-[#089BAB] mx-auto mb-4"></div>
            {subtitle.map(|s| view! { <p class="text-[#002B48]/80 max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}
