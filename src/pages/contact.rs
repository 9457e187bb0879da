use leptos::prelude::*;

use crate::components::contact::ContactPanel;
use crate::components::layout::{Page, SectionHeading};
use crate::content::SiteContent;
use crate::routes::SiteRoute;

#[component]
pub fn ContactPage() -> impl IntoView {
	let content = use_context::<SiteContent>().unwrap_or_default();
	let profile = content.profile;

	let details = [
		("Email", format!("mailto:{}", profile.email), profile.email.clone()),
		("Phone", format!("tel:{}", profile.phone.replace('-', "")), profile.phone.clone()),
	]
	.into_iter()
	.map(|(label, href, text)| {
		view! {
			<li class="contact-detail glass-card">
				<span class="contact-label">{label}</span>
				<a href=href>{text}</a>
			</li>
		}
	})
	.collect_view();

	view! {
		<Page route=SiteRoute::Contact>
			<section class="section">
				<SectionHeading
					eyebrow="// contact"
					title="Get In"
					highlight="Touch"
					lead="Have a project in mind or want to collaborate? Send a message."
				/>
				<div class="contact-grid">
					<aside>
						<ul class="contact-details">
							{details}
							<li class="contact-detail glass-card">
								<span class="contact-label">"Location"</span>
								<span>{profile.location}</span>
							</li>
						</ul>
					</aside>
					<ContactPanel />
				</div>
			</section>
		</Page>
	}
}
