use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Notice,
    Error,
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let classes = match variant {
        AlertVariant::Notice => "bg-white border-[#E1F5F6] text-[#002B48] shadow-md",
        AlertVariant::Error => "bg-red-50 border-red-200 text-red-500",
    };

    view! {
        <div class=format!("col-span-full text-center p-8 rounded-xl border {}", classes)>
            <p class="text-xl font-medium mb-4">{message}</p>
            {children.map(|c| view! { <div class="mt-4">{c()}</div> })}
        </div>
    }
}

/// Page-level fetch failure. The only recovery offered is a full reload.
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(into, default = "Reload".to_string())] reload_label: String,
    #[prop(optional, into)] back_href: Option<String>,
    #[prop(optional, into)] back_label: Option<String>,
) -> impl IntoView {
    let reload = move |_| {
        if let Err(err) = window().location().reload() {
            crate::log_err!("reloading page", format!("{err:?}"));
        }
    };

    view! {
        <Alert message=message variant=AlertVariant::Error>
            <button
                on:click=reload
                class="bg-[#089BAB] text-white px-4 py-2 rounded-lg font-medium hover:bg-[#002B48] transition"
            >
                {reload_label}
            </button>
            {back_href.map(|href| view! {
                <a href=href class="ml-4 text-[#089BAB] hover:text-[#002B48] font-medium">
                    {back_label.unwrap_or_else(|| "Back".to_string())}
                </a>
            })}
        </Alert>
    }
}

/// A detail route whose identifier matched nothing.
#[component]
pub fn NotFoundPanel(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <div class="pt-24 pb-16 min-h-screen flex items-center justify-center px-6">
            <div class="text-center bg-white p-10 rounded-xl shadow-lg border border-[#E1F5F6] max-w-lg">
                <h2 class="text-3xl font-bold text-[#002B48] mb-4">{title}</h2>
                <p class="text-[#002B48]/80 mb-8">{message}</p>
                <a href=back_href class="btn-primary inline-flex items-center gap-2">
                    "← "{back_label}
                </a>
            </div>
        </div>
    }
}

/// A filter that matched nothing, with a way back to the full list.
#[component]
pub fn EmptyFilterPanel(
    #[prop(into)] message: String,
    #[prop(into)] reset_label: String,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <Alert message=message>
            <button
                on:click=move |_| on_reset.run(())
                class="bg-[#089BAB] text-white px-4 py-2 rounded-lg font-medium hover:bg-[#002B48] transition"
            >
                {reset_label}
            </button>
        </Alert>
    }
}
