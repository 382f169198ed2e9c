use leptos::prelude::*;

use crate::frontend::components::LinkButton;

/// Fallback for any path outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="pt-24 min-h-screen flex items-center justify-center px-6 bg-gradient-to-b from-[#E1F5F6] to-white">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold text-[#089BAB] mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-[#002B48] mb-2">"Page not found"</p>
                <p class="text-[#002B48]/70 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <LinkButton href="/">"Return Home"</LinkButton>
            </div>
        </div>
    }
}
