//! Site configuration bootstrapped from the page.
//!
//! The host page may embed `<script id="site-config" type="application/json">`
//! to override any effect setting. Every field is optional; anything missing
//! or unparsable falls back to the built-in defaults.

use log::{debug, info, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::contact::SubmissionConfig;
use crate::components::effects::{CursorConfig, FieldConfig, RevealConfig, ScrollConfig};
use crate::components::solar_system::SceneConfig;

/// Element id of the configuration script.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Why an embedded JSON block could not be used.
#[derive(Debug, Error)]
pub enum BootstrapError {
	#[error("no element with id `{0}`")]
	Missing(String),
	#[error("element `{0}` is not a readable script")]
	NotAScript(String),
	#[error("failed to parse `{id}`: {source}")]
	Parse {
		id: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Tunables for every effect on the site.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Fixed RNG seed. Unset means a fresh layout on every load.
	pub seed: Option<u64>,
	pub particles: FieldConfig,
	pub cursor: CursorConfig,
	pub scroll: ScrollConfig,
	pub reveal: RevealConfig,
	pub scene: SceneConfig,
	pub contact: SubmissionConfig,
}

impl SiteConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// RNG for one generator, seeded from [`seed`](Self::seed) when set.
	pub fn rng(&self) -> fastrand::Rng {
		match self.seed {
			Some(seed) => fastrand::Rng::with_seed(seed),
			None => fastrand::Rng::new(),
		}
	}
}

/// Read and deserialize the JSON text of the script element `id`.
pub fn read_json_script<T: DeserializeOwned>(id: &str) -> Result<T, BootstrapError> {
	let element = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.ok_or_else(|| BootstrapError::Missing(id.to_string()))?;
	let text = element
		.dyn_into::<HtmlScriptElement>()
		.ok()
		.and_then(|script| script.text().ok())
		.ok_or_else(|| BootstrapError::NotAScript(id.to_string()))?;
	serde_json::from_str(&text).map_err(|source| BootstrapError::Parse {
		id: id.to_string(),
		source,
	})
}

/// Load [`SiteConfig`] from the page, or the defaults.
pub fn load_site_config() -> SiteConfig {
	match read_json_script::<SiteConfig>(CONFIG_ELEMENT_ID) {
		Ok(config) => {
			info!("site: configuration loaded from #{}", CONFIG_ELEMENT_ID);
			config
		}
		Err(BootstrapError::Missing(_)) => {
			debug!("site: no embedded configuration, using defaults");
			SiteConfig::default()
		}
		Err(e) => {
			warn!("site: {}", e);
			SiteConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::theme::Color;

	#[test]
	fn partial_json_keeps_other_defaults() {
		let config = SiteConfig::from_json(
			r##"{
				"seed": 7,
				"cursor": { "trail_cap": 4 },
				"scene": { "sun": { "color": "#ff8800" }, "belt": null },
				"particles": { "count": 5, "size": { "min": 1.0, "max": 2.0 } }
			}"##,
		)
		.unwrap();
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.cursor.trail_cap, 4);
		assert_eq!(config.cursor.trail_fade_ms, 500.0);
		assert_eq!(config.scene.sun.color, Color::rgb(0xff, 0x88, 0x00));
		assert_eq!(config.scene.sun.radius, 1.2);
		assert!(config.scene.belt.is_none());
		assert_eq!(config.scene.planets.len(), 4);
		assert_eq!(config.particles.count, 5);
		assert_eq!(config.particles.palette.len(), 4);
		assert_eq!(config.scroll.navbar_threshold, 20.0);
		assert_eq!(config.contact.send_delay_ms, 1500.0);
	}

	#[test]
	fn bad_color_is_a_parse_error() {
		let err = SiteConfig::from_json(r#"{ "scene": { "sun": { "color": "blue" } } }"#).unwrap_err();
		assert!(err.to_string().contains("invalid color"));
	}

	#[test]
	fn seeded_rngs_repeat() {
		let config = SiteConfig {
			seed: Some(11),
			..SiteConfig::default()
		};
		assert_eq!(config.rng().u64(..), config.rng().u64(..));
	}
}
