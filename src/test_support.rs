//! Test Helpers
//!
//! Scripted transport and fixture builders shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use leptos::prelude::Owner;
use tokio::sync::oneshot;

use crate::api::{ProjectQuery, Transport};
use crate::error::TransportError;
use crate::models::{
    LoginCredentials, LoginResponse, Project, ProjectDraft, ProjectPage, ProjectStatus,
    RegisterCredentials, User,
};

/// Reactive owner for signals created in a test; keep it alive for the test body
pub fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

pub fn project(id: &str, status: ProjectStatus) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {}", id),
        description: format!("Description of {}", id),
        funding_goal: 1000.0,
        current_funding: 250.0,
        deadline: "2027-06-30T00:00:00Z".parse().unwrap(),
        status,
        creator_id: "creator-1".to_string(),
        created_at: "2026-01-15T09:30:00Z".parse().unwrap(),
        updated_at: "2026-02-01T12:00:00Z".parse().unwrap(),
    }
}

pub fn page(items: Vec<Project>, total: u64) -> ProjectPage {
    ProjectPage { items, total }
}

pub fn user(id: u64) -> User {
    User {
        id,
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
    }
}

type Reply<T> = Result<T, TransportError>;

/// Either an immediate reply or one released later through a oneshot
enum Scripted<T> {
    Ready(Reply<T>),
    Gated(oneshot::Receiver<Reply<T>>),
}

impl<T> Scripted<T> {
    async fn resolve(self) -> Reply<T> {
        match self {
            Scripted::Ready(reply) => reply,
            Scripted::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".to_string()))),
        }
    }
}

fn unscripted<T>(call: &str) -> Reply<T> {
    Err(TransportError::Network(format!("no scripted reply for {}", call)))
}

/// Transport answering from per-call queues, recording what it was asked
#[derive(Default)]
pub struct FakeTransport {
    list: RefCell<VecDeque<Scripted<ProjectPage>>>,
    project: RefCell<VecDeque<Scripted<Project>>>,
    create: RefCell<VecDeque<Reply<()>>>,
    login: RefCell<VecDeque<Reply<LoginResponse>>>,
    register: RefCell<VecDeque<Reply<()>>>,
    profile: RefCell<VecDeque<Reply<User>>>,
    queries: RefCell<Vec<ProjectQuery>>,
    project_ids: RefCell<Vec<String>>,
    tokens: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, reply: Reply<ProjectPage>) {
        self.list.borrow_mut().push_back(Scripted::Ready(reply));
    }

    /// Queue a list reply that resolves when the returned sender fires
    pub fn gate_list(&self) -> oneshot::Sender<Reply<ProjectPage>> {
        let (tx, rx) = oneshot::channel();
        self.list.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn push_project(&self, reply: Reply<Project>) {
        self.project.borrow_mut().push_back(Scripted::Ready(reply));
    }

    pub fn gate_project(&self) -> oneshot::Sender<Reply<Project>> {
        let (tx, rx) = oneshot::channel();
        self.project.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn push_create(&self, reply: Reply<()>) {
        self.create.borrow_mut().push_back(reply);
    }

    pub fn push_login(&self, reply: Reply<LoginResponse>) {
        self.login.borrow_mut().push_back(reply);
    }

    pub fn push_register(&self, reply: Reply<()>) {
        self.register.borrow_mut().push_back(reply);
    }

    pub fn push_profile(&self, reply: Reply<User>) {
        self.profile.borrow_mut().push_back(reply);
    }

    pub fn queries(&self) -> Vec<ProjectQuery> {
        self.queries.borrow().clone()
    }

    pub fn project_ids(&self) -> Vec<String> {
        self.project_ids.borrow().clone()
    }

    /// Bearer tokens sent by authenticated calls, in call order
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<ProjectPage, TransportError> {
        self.queries.borrow_mut().push(query.clone());
        let next = self.list.borrow_mut().pop_front();
        match next {
            Some(scripted) => scripted.resolve().await,
            None => unscripted("list_projects"),
        }
    }

    async fn get_project(&self, id: &str) -> Result<Project, TransportError> {
        self.project_ids.borrow_mut().push(id.to_string());
        let next = self.project.borrow_mut().pop_front();
        match next {
            Some(scripted) => scripted.resolve().await,
            None => unscripted("get_project"),
        }
    }

    async fn create_project(&self, token: &str, _draft: &ProjectDraft) -> Result<(), TransportError> {
        self.tokens.borrow_mut().push(token.to_string());
        let next = self.create.borrow_mut().pop_front();
        next.unwrap_or_else(|| unscripted("create_project"))
    }

    async fn login(&self, _credentials: &LoginCredentials) -> Result<LoginResponse, TransportError> {
        let next = self.login.borrow_mut().pop_front();
        next.unwrap_or_else(|| unscripted("login"))
    }

    async fn register(&self, _credentials: &RegisterCredentials) -> Result<(), TransportError> {
        let next = self.register.borrow_mut().pop_front();
        next.unwrap_or_else(|| unscripted("register"))
    }

    async fn profile(&self, token: &str) -> Result<User, TransportError> {
        self.tokens.borrow_mut().push(token.to_string());
        let next = self.profile.borrow_mut().pop_front();
        next.unwrap_or_else(|| unscripted("profile"))
    }
}
