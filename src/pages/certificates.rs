use leptos::prelude::*;

use crate::components::effects::BubbleBackground;
use crate::components::layout::{Page, SectionHeading};
use crate::content::SiteContent;
use crate::routes::SiteRoute;

#[component]
pub fn CertificatesPage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();

	let cards = content
		.certificates
		.into_iter()
		.map(|cert| {
			let skills = cert
				.skills
				.into_iter()
				.map(|s| view! { <span class="chip">{s}</span> })
				.collect_view();
			let link = cert.link.map(|href| {
				view! {
					<a href=href class="icon-link" target="_blank" rel="noopener noreferrer">
						"View Certificate"
					</a>
				}
			});
			view! {
				<article class="certificate-card glass-card">
					<header>
						<h3>{cert.title}</h3>
						<p class="certificate-issuer">{cert.issuer}</p>
						<p class="certificate-meta">
							<span>{cert.date}</span>
							{cert.duration.map(|d| view! { <span>{d}</span> })}
						</p>
					</header>
					<p>{cert.description}</p>
					<div class="chips">{skills}</div>
					{link}
				</article>
			}
		})
		.collect_view();

	view! {
		<Page route=SiteRoute::Certificates>
			<BubbleBackground />
			<section class="section">
				<SectionHeading
					eyebrow="// certificates"
					title="Licenses &"
					highlight="Certifications"
				/>
				<div class="certificate-grid">{cards}</div>
			</section>
		</Page>
	}
}
