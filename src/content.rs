use gray_matter::{engine::YAML, Matter};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PROFILE_FILE: &str = "profile.md";

static BUNDLED_PROFILE: LazyLock<ProfileData> = LazyLock::new(|| {
    let file = Content::get(PROFILE_FILE).expect("Should be able to get profile content");
    let raw = String::from_utf8(file.data.into()).expect("Couldn't read profile content");
    ProfileData::parse(&raw).expect("Couldn't parse profile content")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Deserialize, Debug)]
struct FrontMatter {
    name: String,
    role: String,
    profile_image: String,
    resume: String,
    #[serde(default)]
    taglines: Vec<String>,
    #[serde(default)]
    skills: Vec<String>,
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    education: Vec<EducationEntry>,
    #[serde(default)]
    socials: Vec<SocialLink>,
}

/// Everything the page says about its owner.
///
/// Loaded once from `content/profile.md` (YAML front matter plus a markdown
/// body holding the about text) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub role: String,
    pub about: String,
    pub profile_image: String,
    pub taglines: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub socials: Vec<SocialLink>,
    pub resume: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Profile content has no readable front matter")]
    FrontMatter,
    #[error("Profile content has an empty about section")]
    EmptyAbout,
    #[error("Profile content lists no projects")]
    NoProjects,
}

impl ProfileData {
    /// The profile compiled into the binary.
    pub fn bundled() -> &'static ProfileData {
        &BUNDLED_PROFILE
    }

    pub fn parse(raw: &str) -> Result<ProfileData, ContentError> {
        let matter = Matter::<YAML>::new();
        let parsed = matter
            .parse_with_struct::<FrontMatter>(raw)
            .ok_or(ContentError::FrontMatter)?;
        let fm = parsed.data;

        let about = reflow(&parsed.content);
        if about.is_empty() {
            return Err(ContentError::EmptyAbout);
        }
        if fm.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }

        Ok(ProfileData {
            name: fm.name,
            role: fm.role,
            about,
            profile_image: fm.profile_image,
            taglines: fm.taglines,
            skills: fm.skills,
            projects: fm.projects,
            education: fm.education,
            socials: fm.socials,
            resume: fm.resume,
        })
    }
}

// joins hard-wrapped lines, keeps blank-line paragraph breaks
fn reflow(body: &str) -> String {
    body.split("\n\n")
        .map(|para| para.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|para| !para.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Year stamped by `build.rs`, used for the footer copyright line.
pub fn build_year() -> Option<i32> {
    use chrono::{DateTime, Datelike};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
