use leptos::prelude::*;

use crate::frontend::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();

    view! {
        <footer class="bg-[#002B48] text-white py-6 text-center">
            {format!("© {} {}. All rights reserved.", site.copyright_year, site.owner_name)}
        </footer>
    }
}
