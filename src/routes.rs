//! Route table.
//!
//! The router itself is `leptos_router`; this module names the pages and
//! maps raw location strings onto them for the navbar and document titles.

use crate::content::Profile;

/// One page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
	Home,
	About,
	Skills,
	Projects,
	Experience,
	Certificates,
	Contact,
	NotFound,
}

impl SiteRoute {
	/// Navbar order.
	pub const NAV: [SiteRoute; 7] = [
		SiteRoute::Home,
		SiteRoute::About,
		SiteRoute::Skills,
		SiteRoute::Projects,
		SiteRoute::Experience,
		SiteRoute::Certificates,
		SiteRoute::Contact,
	];

	pub const fn path(self) -> &'static str {
		match self {
			SiteRoute::Home => "/",
			SiteRoute::About => "/about",
			SiteRoute::Skills => "/skills",
			SiteRoute::Projects => "/projects",
			SiteRoute::Experience => "/experience",
			SiteRoute::Certificates => "/certificates",
			SiteRoute::Contact => "/contact",
			SiteRoute::NotFound => "/404",
		}
	}

	pub const fn label(self) -> &'static str {
		match self {
			SiteRoute::Home => "Home",
			SiteRoute::About => "About",
			SiteRoute::Skills => "Skills",
			SiteRoute::Projects => "Projects",
			SiteRoute::Experience => "Experience",
			SiteRoute::Certificates => "Certificates",
			SiteRoute::Contact => "Contact",
			SiteRoute::NotFound => "Not Found",
		}
	}

	/// Lookup key into the content's page descriptions.
	pub const fn key(self) -> &'static str {
		match self {
			SiteRoute::Home => "home",
			SiteRoute::About => "about",
			SiteRoute::Skills => "skills",
			SiteRoute::Projects => "projects",
			SiteRoute::Experience => "experience",
			SiteRoute::Certificates => "certificates",
			SiteRoute::Contact => "contact",
			SiteRoute::NotFound => "not-found",
		}
	}

	/// Document title for this page.
	pub fn title(self, profile: &Profile) -> String {
		match self {
			SiteRoute::Home => format!("{} | {}", profile.name, profile.role),
			other => format!("{} | {}", other.label(), profile.name),
		}
	}

	/// Map a location (`pathname`, optionally with query or fragment) to a route.
	///
	/// A single trailing slash is ignored and matching is case-sensitive.
	/// Anything unknown resolves to [`SiteRoute::NotFound`].
	pub fn resolve(location: &str) -> SiteRoute {
		let path = location
			.split(['?', '#'])
			.next()
			.unwrap_or_default();
		let path = match path.strip_suffix('/') {
			Some("") | None => path,
			Some(trimmed) => trimmed,
		};
		let path = if path.is_empty() { "/" } else { path };
		Self::NAV
			.into_iter()
			.find(|route| route.path() == path)
			.unwrap_or(SiteRoute::NotFound)
	}

	/// Whether a navbar link for `self` is active at `location`.
	pub fn is_active_at(self, location: &str) -> bool {
		Self::resolve(location) == self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_nav_path_resolves_to_itself() {
		for route in SiteRoute::NAV {
			assert_eq!(SiteRoute::resolve(route.path()), route);
		}
	}

	#[test]
	fn trailing_slash_query_and_fragment_are_ignored() {
		assert_eq!(SiteRoute::resolve("/about/"), SiteRoute::About);
		assert_eq!(SiteRoute::resolve("/projects?tab=all"), SiteRoute::Projects);
		assert_eq!(SiteRoute::resolve("/contact#form"), SiteRoute::Contact);
		assert_eq!(SiteRoute::resolve(""), SiteRoute::Home);
		assert_eq!(SiteRoute::resolve("/?x=1"), SiteRoute::Home);
	}

	#[test]
	fn unknown_paths_are_not_found() {
		assert_eq!(SiteRoute::resolve("/blog"), SiteRoute::NotFound);
		assert_eq!(SiteRoute::resolve("/about/team"), SiteRoute::NotFound);
		assert_eq!(SiteRoute::resolve("/About"), SiteRoute::NotFound);
		assert_eq!(SiteRoute::resolve("/about//"), SiteRoute::NotFound);
	}

	#[test]
	fn titles() {
		let profile = Profile {
			name: "Ada".into(),
			role: "Engineer".into(),
			..Profile::default()
		};
		assert_eq!(SiteRoute::Home.title(&profile), "Ada | Engineer");
		assert_eq!(SiteRoute::Skills.title(&profile), "Skills | Ada");
	}

	#[test]
	fn only_the_current_link_is_active() {
		let active: Vec<_> = SiteRoute::NAV
			.into_iter()
			.filter(|r| r.is_active_at("/experience/"))
			.collect();
		assert_eq!(active, [SiteRoute::Experience]);
	}
}
