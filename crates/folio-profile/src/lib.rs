//! Profile data store.
//!
//! A read-only record of biographical and professional content. The terminal
//! only ever borrows it; commands never mutate the profile.
//!
//! The default profile ships embedded in the crate as TOML. Alternative
//! profiles can be loaded from TOML or JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use folio_types::error::{FolioError, Result};

const BUILTIN_PROFILE: &str = include_str!("../data/profile.toml");

/// Environment variable naming a profile file to load instead of the builtin.
pub const PROFILE_ENV: &str = "FOLIO_PROFILE";

/// The full portfolio record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    /// Host + path, without scheme (e.g. `github.com/user`).
    pub github: String,
    pub linkedin: String,
    pub website: String,
    pub location: String,
    /// One-line motto shown in the banner and `whoami`.
    pub tagline: String,
    /// Profile picture resource, relative to the public assets root.
    pub photo: String,
    pub summary: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Ordered skill categories.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Spoken languages.
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub stack: Vec<StackGroup>,
    #[serde(default)]
    pub availability: Vec<Availability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub year: String,
    pub title: String,
    pub school: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// A skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: String,
    pub url: String,
    pub status: String,
    #[serde(default)]
    pub stats: Option<String>,
}

impl Project {
    /// Absolute URL for the project link.
    pub fn full_url(&self) -> String {
        if self.url.starts_with("http") {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }
}

/// A spoken language with a 0-100 level and a human label ("natif", "B2").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackGroup {
    pub label: String,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub label: String,
    pub value: String,
}

impl Profile {
    /// The profile embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_PROFILE)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FolioError::Profile(format!("profile.toml: {e}")))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a profile file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&text),
            Some("json") => Self::from_json(&text),
            other => Err(FolioError::Profile(format!(
                "{}: unsupported format {:?} (expected .toml or .json)",
                path.display(),
                other.unwrap_or("")
            ))),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn website_url(&self) -> String {
        format!("https://{}", self.website)
    }
}

/// Resolve the profile to serve.
///
/// Resolution order:
/// 1. Explicit path argument
/// 2. Path in the `FOLIO_PROFILE` environment variable
/// 3. Builtin profile
///
/// A requested path that does not exist falls back to the builtin with a
/// warning. A file that exists but fails to parse is an error.
pub fn resolve_profile(path: Option<&str>) -> Result<Profile> {
    let requested = path
        .map(str::to_string)
        .or_else(|| std::env::var(PROFILE_ENV).ok());

    if let Some(p) = requested {
        let path = Path::new(&p);
        if path.is_file() {
            let profile = Profile::load(path)?;
            log::info!("Loaded profile '{}' from {}", profile.name, path.display());
            return Ok(profile);
        }
        log::warn!("Profile '{p}' not found -- falling back to builtin");
    }

    Profile::builtin()
}
