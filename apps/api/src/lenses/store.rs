//! Content store — the process-lifetime holder of the displayed `Project`
//! and the active lens selection.
//!
//! The project is only ever swapped wholesale through `replace`. Nothing is
//! persisted; a restart returns to the seed project.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::lenses::catalog::{describe, params_for, GenerationParam};
use crate::lenses::sections::{split_sections, Section};
use crate::models::{ActiveLens, LensId, Project, ProjectMeta};

#[derive(Debug, Clone)]
struct StoreState {
    project: Arc<Project>,
    active: ActiveLens,
    revision: u64,
    updated_at: DateTime<Utc>,
}

/// A consistent read of the store at one revision.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub project: Arc<Project>,
    pub active_lens: ActiveLens,
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LensView {
    pub lens: LensId,
    pub label: &'static str,
    pub headline: String,
    pub reasoning: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
    pub sections: Vec<Section>,
    pub params: &'static [GenerationParam],
}

/// What a reader sees for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ActiveView {
    Home {
        meta: ProjectMeta,
        params: &'static [GenerationParam],
    },
    Lens(LensView),
}

impl ActiveView {
    /// Derives the view for `active` from `project`. Pure; safe to recompute.
    pub fn derive(project: &Project, active: ActiveLens) -> Self {
        match active {
            ActiveLens::Home => ActiveView::Home {
                meta: project.meta.clone(),
                params: params_for(ActiveLens::Home),
            },
            ActiveLens::Lens(id) => {
                let lens = project.lenses.get(id);
                let descriptor = describe(id);
                ActiveView::Lens(LensView {
                    lens: id,
                    label: descriptor.label,
                    headline: lens.headline.clone(),
                    reasoning: lens.reasoning.clone(),
                    status: lens.status.clone(),
                    artifact: lens.artifact.clone(),
                    sections: split_sections(&lens.content),
                    params: descriptor.params,
                })
            }
        }
    }
}

pub struct ContentStore {
    state: RwLock<StoreState>,
}

impl ContentStore {
    pub fn new(project: Project) -> Self {
        Self {
            state: RwLock::new(StoreState {
                project: Arc::new(project),
                active: ActiveLens::default(),
                revision: 0,
                updated_at: Utc::now(),
            }),
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            project: Arc::clone(&state.project),
            active_lens: state.active,
            revision: state.revision,
            updated_at: state.updated_at,
        }
    }

    /// Swaps in a whole new project and resets the selection to the recruiter lens.
    /// Returns the new revision.
    pub async fn replace(&self, project: Project) -> u64 {
        let mut state = self.state.write().await;
        state.project = Arc::new(project);
        state.active = ActiveLens::Lens(LensId::Recruiter);
        state.revision += 1;
        state.updated_at = Utc::now();
        state.revision
    }

    pub async fn select_lens(&self, active: ActiveLens) {
        self.state.write().await.active = active;
    }
}
