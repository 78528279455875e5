//! Typed webhook events.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    types::{
        generic::GhGenericEvent,
        issues::{GhIssueCommentEvent, GhIssuesEvent},
        ping::GhPingEvent,
        pulls::{GhPullRequestEvent, GhPullRequestReviewCommentEvent},
        push::GhPushEvent,
        refs::{GhCreateEvent, GhDeleteEvent},
    },
    EventError, EventType, Result,
};

/// Parsed webhook event, tagged by event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhEvent {
    /// Ping.
    Ping(GhPingEvent),
    /// Issue activity.
    Issues(GhIssuesEvent),
    /// Branch or tag created.
    Create(GhCreateEvent),
    /// Branch or tag deleted.
    Delete(GhDeleteEvent),
    /// Commits pushed.
    Push(GhPushEvent),
    /// Issue or pull request comment.
    IssueComment(GhIssueCommentEvent),
    /// Pull request activity.
    PullRequest(GhPullRequestEvent),
    /// Pull request review comment.
    PullRequestReviewComment(GhPullRequestReviewCommentEvent),
    /// Known event which is accepted without any notification.
    Acknowledged(EventType),
    /// Event without a dedicated shape.
    Unsupported {
        /// Raw event name, as sent in the header.
        event_name: String,
        /// Common fields.
        payload: GhGenericEvent,
    },
}

impl GhEvent {
    /// Build an event from its declared type and its JSON payload.
    ///
    /// `event_name` is the raw header value, kept for unsupported events.
    pub fn parse(event_type: EventType, event_name: Option<&str>, payload: &Value) -> Result<Self> {
        let event = match event_type {
            EventType::Ping => Self::Ping(parse_as(event_type, payload)?),
            EventType::Issues => Self::Issues(parse_as(event_type, payload)?),
            EventType::Create => Self::Create(parse_as(event_type, payload)?),
            EventType::Delete => Self::Delete(parse_as(event_type, payload)?),
            EventType::Push => Self::Push(parse_as(event_type, payload)?),
            EventType::IssueComment => Self::IssueComment(parse_as(event_type, payload)?),
            EventType::PullRequest => Self::PullRequest(parse_as(event_type, payload)?),
            EventType::PullRequestReviewComment => {
                Self::PullRequestReviewComment(parse_as(event_type, payload)?)
            }
            EventType::PullRequestReview
            | EventType::Label
            | EventType::Gollum
            | EventType::Member
            | EventType::Public
            | EventType::Watch
            | EventType::Project
            | EventType::ProjectColumn
            | EventType::ProjectCard
            | EventType::Status => Self::Acknowledged(event_type),
            EventType::CommitComment
            | EventType::Deployment
            | EventType::DeploymentStatus
            | EventType::Download
            | EventType::Follow
            | EventType::Fork
            | EventType::ForkApply
            | EventType::Gist
            | EventType::Installation
            | EventType::InstallationRepositories
            | EventType::MarketplacePurchase
            | EventType::Membership
            | EventType::Milestone
            | EventType::Organization
            | EventType::OrgBlock
            | EventType::PageBuild
            | EventType::Release
            | EventType::Repository
            | EventType::Team
            | EventType::TeamAdd
            | EventType::Unknown => Self::Unsupported {
                event_name: event_name.unwrap_or(EventType::Unknown.to_str()).to_string(),
                payload: parse_as(event_type, payload)?,
            },
        };

        Ok(event)
    }

    /// Event type of this event.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Ping(_) => EventType::Ping,
            Self::Issues(_) => EventType::Issues,
            Self::Create(_) => EventType::Create,
            Self::Delete(_) => EventType::Delete,
            Self::Push(_) => EventType::Push,
            Self::IssueComment(_) => EventType::IssueComment,
            Self::PullRequest(_) => EventType::PullRequest,
            Self::PullRequestReviewComment(_) => EventType::PullRequestReviewComment,
            Self::Acknowledged(event_type) => *event_type,
            Self::Unsupported { event_name, .. } => EventType::from_header(Some(event_name)),
        }
    }
}

fn parse_as<'a, T: Deserialize<'a>>(event_type: EventType, payload: &'a Value) -> Result<T> {
    T::deserialize(payload).map_err(|source| EventError::InvalidPayload { event_type, source })
}
