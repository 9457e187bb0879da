//! Site content: profile, skills, projects, experience and certificates.
//!
//! The bundled `content/site.json` is compiled in. A page may replace it by
//! embedding `<script id="site-data" type="application/json">`.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::config::{BootstrapError, read_json_script};

/// Element id of the content override script.
pub const CONTENT_ELEMENT_ID: &str = "site-data";

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Stat {
	pub value: String,
	pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	pub role: String,
	/// Availability badge shown in the hero.
	pub status: String,
	pub tagline: String,
	pub location: String,
	pub email: String,
	pub phone: String,
	/// Path of the downloadable resume.
	pub resume: String,
	pub resume_file_name: String,
	pub photo: String,
	pub bio: Vec<String>,
	pub stats: Vec<Stat>,
}

impl Profile {
	/// Initials for the footer mark, e.g. "AK".
	pub fn initials(&self) -> String {
		self.name
			.split_whitespace()
			.filter_map(|w| w.chars().next())
			.flat_map(char::to_uppercase)
			.collect()
	}

	/// First name in upper case, used as the navbar brand.
	pub fn brand(&self) -> String {
		self.name
			.split_whitespace()
			.next()
			.unwrap_or_default()
			.to_uppercase()
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
	pub label: String,
	pub href: String,
}

impl SocialLink {
	/// Whether the link leaves the site and should open in a new tab.
	pub fn is_external(&self) -> bool {
		self.href.starts_with("http://") || self.href.starts_with("https://")
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimelineEntry {
	pub period: String,
	pub title: String,
	pub subtitle: String,
	pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Proficiency in percent.
	pub level: u8,
}

impl Skill {
	/// Level clamped to 0..=100 for the progress bar width.
	pub fn percent(&self) -> u8 {
		self.level.min(100)
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillCategory {
	pub name: String,
	pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Metric {
	pub label: String,
	pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	pub title: String,
	pub subtitle: String,
	pub duration: String,
	pub description: String,
	pub problem: String,
	pub features: Vec<String>,
	pub tech_stack: Vec<String>,
	#[serde(default)]
	pub metrics: Vec<Metric>,
	#[serde(default)]
	pub github: Option<String>,
	#[serde(default)]
	pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
	pub title: String,
	pub company: String,
	pub location: String,
	pub duration: String,
	pub description: String,
	pub responsibilities: Vec<String>,
	#[serde(default)]
	pub achievements: Vec<Stat>,
	#[serde(default)]
	pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Achievement {
	pub title: String,
	pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Certificate {
	pub title: String,
	pub issuer: String,
	pub date: String,
	#[serde(default)]
	pub duration: Option<String>,
	pub description: String,
	#[serde(default)]
	pub skills: Vec<String>,
	#[serde(default)]
	pub link: Option<String>,
}

/// Everything the pages render.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	pub profile: Profile,
	/// Meta description per route key.
	pub descriptions: BTreeMap<String, String>,
	pub socials: Vec<SocialLink>,
	pub timeline: Vec<TimelineEntry>,
	pub skills: Vec<SkillCategory>,
	pub technologies: Vec<String>,
	pub projects: Vec<Project>,
	pub experience: Vec<Experience>,
	pub achievements: Vec<Achievement>,
	pub certificates: Vec<Certificate>,
}

impl SiteContent {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Content compiled into the binary.
	pub fn bundled() -> Self {
		match Self::from_json(BUNDLED) {
			Ok(content) => content,
			Err(e) => {
				warn!("site: bundled content is invalid: {}", e);
				Self::default()
			}
		}
	}

	pub fn description(&self, key: &str) -> &str {
		self.descriptions.get(key).map(String::as_str).unwrap_or_default()
	}

	pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
		self.projects.iter().filter(|p| p.featured)
	}
}

/// Load [`SiteContent`] from the page, falling back to the bundled copy.
pub fn load_site_content() -> SiteContent {
	match read_json_script::<SiteContent>(CONTENT_ELEMENT_ID) {
		Ok(content) => {
			info!(
				"site: content loaded from #{} ({} projects)",
				CONTENT_ELEMENT_ID,
				content.projects.len()
			);
			content
		}
		Err(BootstrapError::Missing(_)) => {
			debug!("site: using bundled content");
			SiteContent::bundled()
		}
		Err(e) => {
			warn!("site: {}", e);
			SiteContent::bundled()
		}
	}
}
