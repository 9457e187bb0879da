use leptos::prelude::*;

use crate::components::layout::{Page, SectionHeading};
use crate::content::{SiteContent, Skill};
use crate::routes::SiteRoute;

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
	let percent = skill.percent();
	view! {
		<div class="skill">
			<div class="skill-header">
				<span>{skill.name}</span>
				<span class="skill-level">{format!("{percent}%")}</span>
			</div>
			<div class="skill-track">
				<div class="skill-fill" style=format!("width: {percent}%;") />
			</div>
		</div>
	}
}

/// Skill bars grouped by category, one category shown at a time.
#[component]
pub fn SkillsPage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let categories = StoredValue::new(content.skills);
	let active = RwSignal::new(0_usize);

	let tabs = categories
		.get_value()
		.into_iter()
		.enumerate()
		.map(|(i, category)| {
			view! {
				<button
					class="tab glass-card"
					class:active=move || active.get() == i
					on:click=move |_| active.set(i)
				>
					{category.name}
				</button>
			}
		})
		.collect_view();

	let bars = move || {
		categories.with_value(|c| {
			c.get(active.get())
				.map(|category| {
					category
						.skills
						.iter()
						.cloned()
						.map(|skill| view! { <SkillBar skill=skill /> })
						.collect_view()
				})
		})
	};

	let technologies = content
		.technologies
		.into_iter()
		.map(|tech| view! { <span class="chip">{tech}</span> })
		.collect_view();

	view! {
		<Page route=SiteRoute::Skills>
			<section class="section">
				<SectionHeading
					eyebrow="// skills"
					title="Technical"
					highlight="Skills"
					lead="Languages, frameworks and tools I use to build for the web."
				/>
				<div class="tabs" role="tablist">{tabs}</div>
				<div class="skill-list glass-card">{bars}</div>
				<h2 class="subheading">"Technologies I Work With"</h2>
				<div class="chips">{technologies}</div>
			</section>
		</Page>
	}
}
