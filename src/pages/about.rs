use leptos::prelude::*;

use crate::components::layout::{Page, SectionHeading};
use crate::content::SiteContent;
use crate::routes::SiteRoute;

#[component]
pub fn AboutPage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let profile = content.profile;

	let bio = profile
		.bio
		.into_iter()
		.map(|paragraph| view! { <p>{paragraph}</p> })
		.collect_view();

	let stats = profile
		.stats
		.into_iter()
		.map(|stat| {
			view! {
				<div class="stat glass-card">
					<span class="stat-value gradient-text">{stat.value}</span>
					<span class="stat-label">{stat.label}</span>
				</div>
			}
		})
		.collect_view();

	let timeline = content
		.timeline
		.into_iter()
		.map(|entry| {
			view! {
				<li class="timeline-entry glass-card">
					<span class="timeline-period">{entry.period}</span>
					<h3>{entry.title}</h3>
					<p class="timeline-subtitle">{entry.subtitle}</p>
					<p>{entry.description}</p>
				</li>
			}
		})
		.collect_view();

	view! {
		<Page route=SiteRoute::About>
			<section class="section">
				<SectionHeading eyebrow="// about" title="About" highlight="Me" />
				<div class="about-grid">
					<div class="about-photo glass-card">
						<img src=profile.photo alt=profile.name.clone() loading="lazy" />
					</div>
					<div class="about-bio">
						{bio}
						<p class="about-location">{profile.location}</p>
						<div class="stats">{stats}</div>
					</div>
				</div>
				<h2 class="subheading">"Journey"</h2>
				<ol class="timeline">{timeline}</ol>
			</section>
		</Page>
	}
}
