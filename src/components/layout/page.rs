//! Per-page frame: document head and the enter transition.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::SiteContent;
use crate::routes::SiteRoute;

/// Wraps a page body, sets its title and description, and fades it in.
#[component]
pub fn Page(route: SiteRoute, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let title = route.title(&content.profile);
	let description = content.description(route.key()).to_string();

	view! {
		<Title text=title />
		<Meta name="description" content=description />
		<div class=format!("page page-{} {class}", route.key())>{children()}</div>
	}
}

/// Centered heading block used at the top of inner pages.
#[component]
pub fn SectionHeading(
	#[prop(into)] eyebrow: String,
	#[prop(into)] title: String,
	#[prop(into)] highlight: String,
	#[prop(optional, into)] lead: Option<String>,
) -> impl IntoView {
	view! {
		<header class="section-heading">
			<span class="eyebrow">{eyebrow}</span>
			<h1>{title} " " <span class="gradient-text">{highlight}</span></h1>
			{lead.map(|lead| view! { <p class="lead">{lead}</p> })}
		</header>
	}
}
