use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::warn;

use crate::components::layout::Page;
use crate::routes::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
	let pathname = use_location().pathname;
	warn!("no route for {}", pathname.get_untracked());

	view! {
		<Page route=SiteRoute::NotFound>
			<section class="section not-found">
				<h1 class="gradient-text">"404"</h1>
				<p>"Oops! Page not found"</p>
				<a href=SiteRoute::Home.path() class="button primary">
					"Return to Home"
				</a>
			</section>
		</Page>
	}
}
