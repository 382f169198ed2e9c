use leptos::prelude::*;

use crate::services::media::split_overflow;

/// Row of pill labels. Past `max` items a `+N` pill lists the rest on hover.
#[component]
pub fn Chips(
    items: Vec<String>,
    #[prop(default = usize::MAX)] max: usize,
    #[prop(default = "bg-[#089BAB]/10 text-[#089BAB]")] tone: &'static str,
) -> impl IntoView {
    let (shown, hidden) = split_overflow(&items, max);
    let hidden_count = hidden.len();
    let hidden_text = hidden.join(", ");
    let pill = format!("{tone} text-xs px-3 py-1 rounded-full");

    let shown_view = shown
        .iter()
        .cloned()
        .map(|item| view! { <span class=pill.clone()>{item}</span> })
        .collect_view();

    view! {
        <div class="flex flex-wrap gap-2">
            {shown_view}
            {(hidden_count > 0).then(|| view! {
                <div class="relative group">
                    <span class=format!("{pill} cursor-pointer select-none")>
                        {format!("+{hidden_count}")}
                    </span>
                    <div class="absolute left-1/2 -translate-x-1/2 top-full mt-2 px-3 py-2 rounded bg-white text-[#002B48] text-xs shadow-lg opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none whitespace-nowrap z-20 border border-[#E1F5F6] min-w-max">
                        {hidden_text}
                    </div>
                </div>
            })}
        </div>
    }
}

/// Bulleted list; renders nothing for an empty list.
#[component]
pub fn BulletList(
    items: Vec<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = "✓")] marker: &'static str,
) -> impl IntoView {
    (!items.is_empty()).then(move || {
        view! {
            <div class="mb-8">
                {title.map(|t| view! { <h3 class="text-xl font-bold text-[#002B48] mb-4">{t}</h3> })}
                <ul class="space-y-2">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <li class="flex items-start gap-3 text-[#002B48]/80">
                                <span class="text-[#089BAB] mt-1">{marker}</span>
                                <span>{item}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}
