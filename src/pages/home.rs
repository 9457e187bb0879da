use leptos::prelude::*;

use crate::components::effects::{StaggerText, TypewriterText};
use crate::components::layout::Page;
use crate::components::solar_system::SolarSystem;
use crate::content::SiteContent;
use crate::routes::SiteRoute;

/// Landing page: the orbital scene behind the introduction.
#[component]
pub fn HomePage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let profile = content.profile;

	let socials = content
		.socials
		.into_iter()
		.map(|s| {
			let external = s.is_external();
			view! {
				<a
					href=s.href
					class="social-button glass-card"
					target=external.then_some("_blank")
					rel=external.then_some("noopener noreferrer")
				>
					{s.label}
				</a>
			}
		})
		.collect_view();

	view! {
		<Page route=SiteRoute::Home>
			<section class="hero">
				<SolarSystem />
				<div class="hero-shade" />
				<div class="hero-content">
					<span class="status-badge glass-card">
						<span class="status-dot" />
						{profile.status}
					</span>
					<h1 class="hero-title">
						<span class="hero-greeting">"HI, I'M"</span>
						<StaggerText text=profile.name.to_uppercase() class="gradient-text" />
					</h1>
					<p class="hero-role">
						<TypewriterText text=profile.role />
					</p>
					<p class="hero-tagline">{profile.tagline}</p>
					<div class="hero-actions">
						<a href=SiteRoute::Projects.path() class="button primary neon-glow">
							"View Projects"
						</a>
						<a href=profile.resume download=profile.resume_file_name class="button outline">
							"Download Resume"
						</a>
						<a href=SiteRoute::Contact.path() class="button glass-card">
							"Contact Me"
						</a>
					</div>
					<div class="hero-socials">{socials}</div>
				</div>
				<div class="scroll-indicator" aria-hidden="true">
					<span />
				</div>
			</section>
		</Page>
	}
}
