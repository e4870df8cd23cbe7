//! Project Store
//!
//! Fetched project listing, the project under detail view, and the status of
//! both fetches.
//!
//! Each fetch kind carries a generation counter: a response is applied only
//! if no newer request of the same kind was issued while it was in flight.
//! The `error` slot is shared by both kinds. Dropping superseded responses
//! deliberately replaces "last response to arrive wins".

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ProjectQuery, SortDirection, Transport};
use crate::error::{describe, CREATE_PROJECT_FAILED, FETCH_PROJECTS_FAILED, FETCH_PROJECT_FAILED};
use crate::models::{Project, ProjectDraft, ProjectStatus};

/// Number of projects in the featured view
pub const FEATURED_COUNT: usize = 3;

#[derive(Clone, Debug, Default, Store)]
pub struct ProjectState {
    /// Current page, in server order
    pub items: Vec<Project>,
    /// Server-reported count across all pages
    pub total: u64,
    /// Project under detail view
    pub current: Option<Project>,
    pub loading_list: bool,
    pub loading_current: bool,
    pub error: Option<String>,
}

/// Listing parameters; every field is optional and the server owns defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchProjectsParams {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl From<&FetchProjectsParams> for ProjectQuery {
    fn from(params: &FetchProjectsParams) -> Self {
        Self {
            search: params.search.clone(),
            page: params.page,
            limit: params.limit,
            sort_by: params.sort_by.clone(),
            sort_dir: params.sort_direction,
        }
    }
}

/// First projects in collection order
pub fn featured(items: &[Project]) -> Vec<Project> {
    items.iter().take(FEATURED_COUNT).cloned().collect()
}

/// Projects still accepting funding
pub fn active(items: &[Project]) -> Vec<Project> {
    items
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .cloned()
        .collect()
}

fn next_generation(counter: StoredValue<u64>) -> u64 {
    counter.update_value(|g| *g += 1);
    counter.get_value()
}

/// Handle to the project state, constructed once at startup
#[derive(Clone, Copy)]
pub struct ProjectStore {
    state: Store<ProjectState>,
    list_generation: StoredValue<u64>,
    current_generation: StoredValue<u64>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(ProjectState::default()),
            list_generation: StoredValue::new(0),
            current_generation: StoredValue::new(0),
        }
    }

    // ========================
    // Actions
    // ========================

    /// Load one page of projects, replacing `items` and `total` together
    pub async fn fetch_projects<T: Transport + ?Sized>(self, transport: &T, params: FetchProjectsParams) {
        let generation = next_generation(self.list_generation);
        self.state.update(|state| {
            state.loading_list = true;
            state.error = None;
        });
        tracing::debug!(?params, generation, "fetching projects");

        let result = transport.list_projects(&ProjectQuery::from(&params)).await;

        if self.list_generation.get_value() != generation {
            tracing::debug!(generation, "discarding superseded project list response");
            return;
        }

        self.state.update(|state| {
            match result {
                Ok(page) => {
                    state.items = page.items;
                    state.total = page.total;
                }
                Err(err) => state.error = Some(describe(&err, FETCH_PROJECTS_FAILED)),
            }
            state.loading_list = false;
        });
    }

    /// Load a single project into `current`
    pub async fn fetch_project<T: Transport + ?Sized>(self, transport: &T, id: &str) {
        let generation = next_generation(self.current_generation);

        if id.is_empty() {
            tracing::warn!("fetch_project called without an id");
            self.state.update(|state| {
                state.current = None;
                state.loading_current = false;
                state.error = Some(FETCH_PROJECT_FAILED.to_string());
            });
            return;
        }

        self.state.update(|state| {
            state.loading_current = true;
            state.error = None;
        });
        tracing::debug!(id, generation, "fetching project");

        let result = transport.get_project(id).await;

        if self.current_generation.get_value() != generation {
            tracing::debug!(id, generation, "discarding superseded project response");
            return;
        }

        self.state.update(|state| {
            match result {
                Ok(project) => state.current = Some(project),
                Err(err) => state.error = Some(describe(&err, FETCH_PROJECT_FAILED)),
            }
            state.loading_current = false;
        });
    }

    pub fn clear_current_project(&self) {
        self.state.current().set(None);
    }

    /// Submit a new project. Listing state is left alone; callers refetch.
    pub async fn create_project<T: Transport + ?Sized>(
        self,
        transport: &T,
        token: &str,
        draft: &ProjectDraft,
    ) -> Result<(), String> {
        transport
            .create_project(token, draft)
            .await
            .map_err(|e| describe(&e, CREATE_PROJECT_FAILED))?;
        tracing::info!(title = %draft.title, "project created");
        Ok(())
    }

    // ========================
    // Readers
    // ========================

    pub fn items(&self) -> Vec<Project> {
        self.state.items().get()
    }

    pub fn total(&self) -> u64 {
        self.state.total().get()
    }

    pub fn current(&self) -> Option<Project> {
        self.state.current().get()
    }

    pub fn loading_list(&self) -> bool {
        self.state.loading_list().get()
    }

    pub fn loading_current(&self) -> bool {
        self.state.loading_current().get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    pub fn featured(&self) -> Vec<Project> {
        self.state.items().with(|items| featured(items))
    }

    pub fn active(&self) -> Vec<Project> {
        self.state.items().with(|items| active(items))
    }

    pub fn snapshot(&self) -> ProjectState {
        self.state.get_untracked()
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
