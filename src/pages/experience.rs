use leptos::prelude::*;

use crate::components::layout::{Page, SectionHeading};
use crate::components::solar_system::SolarSystem;
use crate::content::SiteContent;
use crate::routes::SiteRoute;

#[component]
pub fn ExperiencePage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();

	let roles = content
		.experience
		.into_iter()
		.map(|role| {
			let duties = role
				.responsibilities
				.into_iter()
				.map(|r| view! { <li>{r}</li> })
				.collect_view();
			let highlights = role
				.achievements
				.into_iter()
				.map(|a| {
					view! {
						<div class="stat">
							<span class="stat-value gradient-text">{a.value}</span>
							<span class="stat-label">{a.label}</span>
						</div>
					}
				})
				.collect_view();
			let skills = role
				.skills
				.into_iter()
				.map(|s| view! { <span class="chip">{s}</span> })
				.collect_view();
			view! {
				<article class="experience-card glass-card">
					<header>
						<h3>{role.title}</h3>
						<p class="experience-company">{role.company}</p>
						<p class="experience-meta">
							<span>{role.location}</span>
							<span>{role.duration}</span>
						</p>
					</header>
					<p>{role.description}</p>
					<ul class="feature-list">{duties}</ul>
					<div class="stats">{highlights}</div>
					<div class="chips">{skills}</div>
				</article>
			}
		})
		.collect_view();

	let achievements = content
		.achievements
		.into_iter()
		.map(|a| {
			view! {
				<div class="achievement glass-card">
					<h3>{a.title}</h3>
					<p>{a.description}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<Page route=SiteRoute::Experience class="with-scene">
			<SolarSystem />
			<section class="section">
				<SectionHeading eyebrow="// experience" title="Work" highlight="Experience" />
				<div class="experience-list">{roles}</div>
				<h2 class="subheading">"Achievements"</h2>
				<div class="achievement-grid">{achievements}</div>
			</section>
		</Page>
	}
}
