//! Site footer.

use leptos::prelude::*;

use crate::content::SiteContent;
use crate::routes::SiteRoute;

const QUICK_LINKS: [SiteRoute; 3] = [SiteRoute::About, SiteRoute::Projects, SiteRoute::Contact];

fn current_year() -> i32 {
	js_sys::Date::new_0().get_full_year() as i32
}

#[component]
pub fn Footer() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let profile = content.profile.clone();

	let socials = content
		.socials
		.iter()
		.map(|s| {
			let target = s.is_external().then_some("_blank");
			let rel = s.is_external().then_some("noopener noreferrer");
			view! {
				<li>
					<a href=s.href.clone() target=target rel=rel aria-label=s.label.clone()>
						{s.label.clone()}
					</a>
				</li>
			}
		})
		.collect_view();

	let quick_links = QUICK_LINKS
		.into_iter()
		.map(|route| view! { <li><a href=route.path()>{route.label()}</a></li> })
		.collect_view();

	view! {
		<footer class="footer">
			<div class="footer-inner">
				<div class="footer-brand">
					<span class="footer-mark gradient-text">{profile.initials()}</span>
					<p>{profile.role.clone()}</p>
				</div>
				<nav aria-label="Quick links">
					<h4>"Quick Links"</h4>
					<ul>{quick_links}</ul>
				</nav>
				<nav aria-label="Social links">
					<h4>"Connect"</h4>
					<ul class="socials">{socials}</ul>
				</nav>
			</div>
			<p class="copyright">
				{format!("\u{a9} {} {}. All rights reserved.", current_year(), profile.name)}
			</p>
		</footer>
	}
}
