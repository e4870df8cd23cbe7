//! Frontend Models
//!
//! Data structures matching the API's JSON bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Canceled,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Canceled => "Canceled",
        }
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub funding_goal: f64,
    pub current_funding: f64,
    pub deadline: DateTime<Utc>,
    pub status: ProjectStatus,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Percentage of the goal reached, clamped to 0..=100
    pub fn progress_percent(&self) -> f64 {
        if self.funding_goal <= 0.0 {
            return 0.0;
        }
        (self.current_funding / self.funding_goal * 100.0).clamp(0.0, 100.0)
    }
}

/// One page of the project listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub total: u64,
}

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Body of a project creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub funding_goal: f64,
    pub deadline: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_reads_camel_case_body() {
        let body = json!({
            "id": "42",
            "title": "Solar kiosk",
            "description": "Off-grid charging",
            "fundingGoal": 5000.0,
            "currentFunding": 1250.5,
            "deadline": "2026-12-01T00:00:00Z",
            "status": "active",
            "creatorId": "7",
            "createdAt": "2026-01-01T10:00:00Z",
            "updatedAt": "2026-02-01T10:00:00Z"
        });

        let project: Project = serde_json::from_value(body).unwrap();
        assert_eq!(project.id, "42");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.funding_goal, 5000.0);
        assert_eq!(project.creator_id, "7");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<ProjectStatus>(json!("paused"));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_ignores_password_field() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "username": "ada",
            "email": "ada@example.com",
            "password": "$2a$10$hash"
        }))
        .unwrap();
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn test_progress_percent() {
        let mut project = crate::test_support::project("1", ProjectStatus::Active);
        project.funding_goal = 200.0;
        project.current_funding = 50.0;
        assert_eq!(project.progress_percent(), 25.0);

        project.current_funding = 500.0;
        assert_eq!(project.progress_percent(), 100.0);

        project.funding_goal = 0.0;
        assert_eq!(project.progress_percent(), 0.0);
    }

    #[test]
    fn test_draft_uses_wire_names() {
        let draft = ProjectDraft {
            title: "Library".to_string(),
            description: "Books".to_string(),
            funding_goal: 900.0,
            deadline: "2027-03-01T00:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["fundingGoal"], json!(900.0));
        assert!(value.get("funding_goal").is_none());
    }
}
