use leptos::prelude::*;

use crate::components::layout::{Page, SectionHeading};
use crate::components::solar_system::SolarSystem;
use crate::content::{Project, SiteContent};
use crate::routes::SiteRoute;

fn chips(items: Vec<String>) -> impl IntoView {
	items
		.into_iter()
		.map(|item| view! { <span class="chip">{item}</span> })
		.collect_view()
}

/// Project summary that unfolds into features, stack and impact.
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
	let expanded = RwSignal::new(false);

	let features = project
		.features
		.into_iter()
		.map(|f| view! { <li>{f}</li> })
		.collect_view();
	let metrics = project
		.metrics
		.into_iter()
		.map(|m| {
			view! {
				<div class="metric">
					<span class="metric-value gradient-text">{m.value}</span>
					<span class="metric-label">{m.label}</span>
				</div>
			}
		})
		.collect_view();
	let github = project.github.map(|href| {
		view! {
			<a href=href class="icon-link glass-card" target="_blank" rel="noopener noreferrer">
				"GitHub"
			</a>
		}
	});

	view! {
		<article class="project-card glass-card" class:featured=project.featured>
			<header class="project-header">
				<div>
					<h3>{project.title}</h3>
					<p class="project-subtitle">{project.subtitle}</p>
					<span class="project-duration">{project.duration}</span>
				</div>
				{github}
			</header>
			<p>{project.description}</p>
			<div class="project-details" class:open=move || expanded.get()>
				<h4>"Problem"</h4>
				<p>{project.problem}</p>
				<h4>"Key Features"</h4>
				<ul class="feature-list">{features}</ul>
				<h4>"Tech Stack"</h4>
				<div class="chips">{chips(project.tech_stack)}</div>
				<h4>"Impact"</h4>
				<div class="metrics">{metrics}</div>
			</div>
			<button
				class="expand-toggle"
				aria-expanded=move || expanded.get().to_string()
				on:click=move |_| expanded.update(|e| *e = !*e)
			>
				{move || if expanded.get() { "Show Less" } else { "Show More" }}
			</button>
		</article>
	}
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let cards = content
		.projects
		.into_iter()
		.map(|project| view! { <ProjectCard project=project /> })
		.collect_view();

	view! {
		<Page route=SiteRoute::Projects class="with-scene">
			<SolarSystem />
			<section class="section">
				<SectionHeading
					eyebrow="// projects"
					title="Featured"
					highlight="Projects"
					lead="Full-stack applications built end to end, from schema to UI."
				/>
				<div class="project-grid">{cards}</div>
			</section>
		</Page>
	}
}
