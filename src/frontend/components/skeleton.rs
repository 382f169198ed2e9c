use leptos::prelude::*;

/// Placeholder card shown while a collection loads.
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-hidden border border-[#E1F5F6]">
            <div class="h-48 bg-gradient-to-r from-[#69C3CC]/20 to-[#089BAB]/20 animate-pulse"></div>
            <div class="p-6">
                <div class="h-6 bg-gray-200 rounded w-3/4 mb-4"></div>
                <div class="h-4 bg-gray-200 rounded w-full mb-2"></div>
                <div class="h-4 bg-gray-200 rounded w-5/6 mb-4"></div>
                <div class="flex flex-wrap gap-2 mb-4">
                    {(0..4).map(|_| view! { <div class="h-6 bg-gray-200 rounded-full w-20"></div> }).collect_view()}
                </div>
                <div class="h-10 bg-gray-200 rounded-lg w-32"></div>
            </div>
        </div>
    }
}

#[component]
pub fn GridSkeleton(#[prop(default = 6)] cards: usize) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {(0..cards).map(|_| view! { <CardSkeleton/> }).collect_view()}
        </div>
    }
}

/// Placeholder for a detail page: title bar, hero image and text lines.
#[component]
pub fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="pt-24 pb-16 min-h-screen">
            <div class="container mx-auto px-4 md:px-6 max-w-4xl animate-pulse">
                <div class="h-6 bg-gray-200 rounded w-32 mb-8"></div>
                <div class="h-10 bg-gray-200 rounded w-3/4 mb-6"></div>
                <div class="h-80 bg-gradient-to-r from-[#69C3CC]/20 to-[#089BAB]/20 rounded-xl mb-8"></div>
                {(0..5).map(|_| view! { <div class="h-4 bg-gray-200 rounded w-full mb-3"></div> }).collect_view()}
            </div>
        </div>
    }
}
