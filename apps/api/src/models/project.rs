use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of audience lenses. No lens is added or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensId {
    Recruiter,
    Engineer,
    Designer,
    Source,
}

impl LensId {
    /// Every lens, in display order.
    pub const ALL: [LensId; 4] = [
        LensId::Recruiter,
        LensId::Engineer,
        LensId::Designer,
        LensId::Source,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LensId::Recruiter => "recruiter",
            LensId::Engineer => "engineer",
            LensId::Designer => "designer",
            LensId::Source => "source",
        }
    }
}

impl fmt::Display for LensId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lens '{0}'")]
pub struct UnknownLens(pub String);

impl FromStr for LensId {
    type Err = UnknownLens;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LensId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownLens(s.to_string()))
    }
}

/// Which lens the reader is looking at. `Home` means no lens is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActiveLens {
    Home,
    Lens(LensId),
}

impl Default for ActiveLens {
    fn default() -> Self {
        ActiveLens::Lens(LensId::Recruiter)
    }
}

impl FromStr for ActiveLens {
    type Err = UnknownLens;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "home" {
            return Ok(ActiveLens::Home);
        }
        s.parse().map(ActiveLens::Lens)
    }
}

impl TryFrom<String> for ActiveLens {
    type Error = UnknownLens;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActiveLens> for String {
    fn from(value: ActiveLens) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ActiveLens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveLens::Home => f.write_str("home"),
            ActiveLens::Lens(id) => id.fmt(f),
        }
    }
}

/// One curated rendering of the case study for one audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    pub headline: String,
    /// Markdown body. Sections are delimited by `###` headings.
    pub content: String,
    /// First-person rationale for the editorial slant.
    pub reasoning: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
}

/// Total mapping from `LensId` to `Lens`. Unknown keys are rejected so a
/// document can never carry more than the four lenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lenses {
    pub recruiter: Lens,
    pub engineer: Lens,
    pub designer: Lens,
    pub source: Lens,
}

impl Lenses {
    pub fn get(&self, id: LensId) -> &Lens {
        match id {
            LensId::Recruiter => &self.recruiter,
            LensId::Engineer => &self.engineer,
            LensId::Designer => &self.designer,
            LensId::Source => &self.source,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LensId, &Lens)> {
        LensId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub title: String,
    pub role: String,
    pub timeline: String,
    pub awards: Vec<String>,
}

/// The aggregate unit of content: metadata plus all four lenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    pub lenses: Lenses,
}

const DEFAULT_PROJECT_JSON: &str = include_str!("../../assets/default_project.json");

impl Project {
    /// Parses the bundled seed project shown before any generation runs.
    pub fn seed() -> Result<Self, serde_json::Error> {
        serde_json::from_str(DEFAULT_PROJECT_JSON)
    }
}
