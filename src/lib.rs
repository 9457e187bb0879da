//! orbit-folio: a personal portfolio site rendered client-side with Leptos.
//!
//! The pages are static content from [`content`]; the interesting parts are
//! the decorative effects under [`components`], each an engine driven through
//! the [`runtime::Host`] abstraction so that it can be mounted, animated and
//! torn down against a virtual clock in tests.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod routes;
pub mod runtime;
pub mod theme;

use components::effects::CustomCursor;
use components::layout::{BackToTop, Footer, Navbar};
use config::load_site_config;
use content::load_site_content;
use pages::{
	AboutPage, CertificatesPage, ContactPage, ExperiencePage, HomePage, NotFoundPage, ProjectsPage,
	SkillsPage,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("orbit-folio: logging initialized");
}

/// Main application component.
///
/// Reads the effect configuration and site content from the DOM, provides
/// both as context and mounts the router.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_site_config();
	let content = load_site_content();
	info!(
		"orbit-folio: {} projects, {} certificates",
		content.projects.len(),
		content.certificates.len()
	);
	provide_context(config);
	provide_context(content);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<CustomCursor />
			<div class="app-shell">
				<Navbar />
				<main class="app-main">
					<Routes fallback=|| view! { <NotFoundPage /> }>
						<Route path=path!("/") view=HomePage />
						<Route path=path!("/about") view=AboutPage />
						<Route path=path!("/skills") view=SkillsPage />
						<Route path=path!("/projects") view=ProjectsPage />
						<Route path=path!("/experience") view=ExperiencePage />
						<Route path=path!("/certificates") view=CertificatesPage />
						<Route path=path!("/contact") view=ContactPage />
					</Routes>
				</main>
				<Footer />
				<BackToTop />
			</div>
		</Router>
	}
}
