//! Event types.

/// Event type, as declared by the `X-GitHub-Event` header.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Ping,
    Issues,
    Create,
    Delete,
    Push,
    IssueComment,
    PullRequest,
    PullRequestReviewComment,
    PullRequestReview,
    Label,
    Gollum,
    Member,
    Public,
    Watch,
    Project,
    ProjectColumn,
    ProjectCard,
    Status,
    CommitComment,
    Deployment,
    DeploymentStatus,
    Download,
    Follow,
    Fork,
    ForkApply,
    Gist,
    Installation,
    InstallationRepositories,
    MarketplacePurchase,
    Membership,
    Milestone,
    Organization,
    OrgBlock,
    PageBuild,
    Release,
    Repository,
    Team,
    TeamAdd,
    Unknown,
}

impl EventType {
    /// Every known event type, `Unknown` excluded.
    pub const KNOWN: [EventType; 38] = [
        Self::Ping,
        Self::Issues,
        Self::Create,
        Self::Delete,
        Self::Push,
        Self::IssueComment,
        Self::PullRequest,
        Self::PullRequestReviewComment,
        Self::PullRequestReview,
        Self::Label,
        Self::Gollum,
        Self::Member,
        Self::Public,
        Self::Watch,
        Self::Project,
        Self::ProjectColumn,
        Self::ProjectCard,
        Self::Status,
        Self::CommitComment,
        Self::Deployment,
        Self::DeploymentStatus,
        Self::Download,
        Self::Follow,
        Self::Fork,
        Self::ForkApply,
        Self::Gist,
        Self::Installation,
        Self::InstallationRepositories,
        Self::MarketplacePurchase,
        Self::Membership,
        Self::Milestone,
        Self::Organization,
        Self::OrgBlock,
        Self::PageBuild,
        Self::Release,
        Self::Repository,
        Self::Team,
        Self::TeamAdd,
    ];

    /// Resolve an event type from a header value.
    ///
    /// Underscores are ignored and matching is case-insensitive, so `pull_request`,
    /// `PullRequest` and `PULLREQUEST` all resolve to the same type.
    /// Missing or unmatched values resolve to `Unknown`.
    pub fn from_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Unknown;
        };

        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Self::KNOWN
            .into_iter()
            .find(|event_type| event_type.to_str().replace('_', "") == normalized)
            .unwrap_or(Self::Unknown)
    }

    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl From<EventType> for &'static str {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Ping => "ping",
            EventType::Issues => "issues",
            EventType::Create => "create",
            EventType::Delete => "delete",
            EventType::Push => "push",
            EventType::IssueComment => "issue_comment",
            EventType::PullRequest => "pull_request",
            EventType::PullRequestReviewComment => "pull_request_review_comment",
            EventType::PullRequestReview => "pull_request_review",
            EventType::Label => "label",
            EventType::Gollum => "gollum",
            EventType::Member => "member",
            EventType::Public => "public",
            EventType::Watch => "watch",
            EventType::Project => "project",
            EventType::ProjectColumn => "project_column",
            EventType::ProjectCard => "project_card",
            EventType::Status => "status",
            EventType::CommitComment => "commit_comment",
            EventType::Deployment => "deployment",
            EventType::DeploymentStatus => "deployment_status",
            EventType::Download => "download",
            EventType::Follow => "follow",
            EventType::Fork => "fork",
            EventType::ForkApply => "fork_apply",
            EventType::Gist => "gist",
            EventType::Installation => "installation",
            EventType::InstallationRepositories => "installation_repositories",
            EventType::MarketplacePurchase => "marketplace_purchase",
            EventType::Membership => "membership",
            EventType::Milestone => "milestone",
            EventType::Organization => "organization",
            EventType::OrgBlock => "org_block",
            EventType::PageBuild => "page_build",
            EventType::Release => "release",
            EventType::Repository => "repository",
            EventType::Team => "team",
            EventType::TeamAdd => "team_add",
            EventType::Unknown => "unknown",
        }
    }
}
