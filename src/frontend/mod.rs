pub mod components;
pub mod motion;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::HttpSource;
use crate::config::SiteConfig;
use components::{Footer, Nav};
use motion::MotionConfig;
use pages::{
    AboutPage, BlogPage, BlogPostPage, HomePage, NotFound, ProjectDetailPage, ProjectsPage,
    ResumePage,
};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::default());
    provide_context(MotionConfig::default());

    let site = use_site();

    view! {
        <Title text=format!("{} | Portfolio", site.owner_name)/>
        <Meta name="description" content=format!("{} - {}", site.owner_name, site.role)/>

        <Router>
            <Nav/>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/projects/:id") view=ProjectDetailPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/resume") view=ResumePage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:id") view=BlogPostPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

pub(crate) fn use_site() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

pub(crate) fn use_motion() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// Document source rooted at the configured data directory.
pub(crate) fn use_source() -> HttpSource {
    HttpSource::new(use_site().data_root)
}
