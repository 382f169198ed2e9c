use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Light,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-[#089BAB] text-white hover:bg-[#002B48] shadow-lg hover:shadow-xl",
            Self::Outline => "border-2 border-[#089BAB] text-[#089BAB] hover:bg-[#089BAB] hover:text-white",
            Self::Light => "bg-white text-[#002B48] hover:bg-[#E1F5F6] shadow-lg",
        }
    }
}

/// Anchor styled as a button. External targets open in a new tab; `download`
/// asks the browser to save the target.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] external: bool,
    #[prop(optional)] download: bool,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center gap-2 px-6 py-3 rounded-lg font-medium transition-all duration-300 {}",
        variant.classes()
    );

    if external {
        view! {
            <a href=href class=classes target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else if download {
        view! {
            <a href=href class=classes download="">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any()
    }
}

/// Round toggle used by the category filters.
#[component]
pub fn FilterButton(
    #[prop(into)] label: String,
    #[prop(optional)] count: Option<usize>,
    #[prop(into)] active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if active.get() {
                    "filter-btn px-5 py-2 rounded-full font-medium transition-all duration-300 shadow-md text-white bg-[#089BAB]"
                } else {
                    "filter-btn px-5 py-2 rounded-full font-medium transition-all duration-300 shadow-md text-[#002B48] bg-white hover:bg-gray-50"
                }
            }
            on:click=move |_| on_select.run(())
        >
            {label}
            {count.map(|n| view! { <span class="ml-2 text-xs opacity-80">{n}</span> })}
        </button>
    }
}
