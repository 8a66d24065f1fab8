//! Core types for gha — the event taxonomy and the engine's output unit.

/// Classification of a record's `type` tag.
///
/// The tag set is open on the wire; everything not enumerated here lands on
/// [`EventKind::Other`], so dispatch over this enum is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    Watch,
    Fork,
    Create,
    Delete,
    Issues,
    PullRequest,
    Release,
    IssueComment,
    CommitComment,
    Member,
    Public,
    Other,
}

impl EventKind {
    /// Map a raw type tag to its kind. Unrecognized tags are [`EventKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => EventKind::Push,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "CreateEvent" => EventKind::Create,
            "DeleteEvent" => EventKind::Delete,
            "IssuesEvent" => EventKind::Issues,
            "PullRequestEvent" => EventKind::PullRequest,
            "ReleaseEvent" => EventKind::Release,
            "IssueCommentEvent" => EventKind::IssueComment,
            "CommitCommentEvent" => EventKind::CommitComment,
            "MemberEvent" => EventKind::Member,
            "PublicEvent" => EventKind::Public,
            _ => EventKind::Other,
        }
    }
}

/// A described event: a message-catalog key plus its positional arguments,
/// deliberately not a rendered string so language stays a presentation
/// concern.
///
/// Field spans borrow from the record text they were extracted from; the
/// defaults (`"unknown"` repo, `"repository"` / `"branch"` ref types) are
/// `'static` and coerce into the same lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedEvent<'a> {
    Pushed { commits: usize, repo: &'a str },
    Starred { repo: &'a str },
    Forked { repo: &'a str },
    Created { ref_type: &'a str, repo: &'a str },
    Deleted { ref_type: &'a str, repo: &'a str },
    IssueOpened { repo: &'a str },
    IssueClosed { repo: &'a str },
    IssueUpdated { repo: &'a str },
    PullRequestOpened { repo: &'a str },
    PullRequestClosed { repo: &'a str },
    PullRequestUpdated { repo: &'a str },
    ReleasePublished { repo: &'a str },
    IssueCommented { repo: &'a str },
    CommitCommented { repo: &'a str },
    BecameCollaborator { repo: &'a str },
    MadePublic { repo: &'a str },
    DidSomething { repo: &'a str },
}

impl<'a> FormattedEvent<'a> {
    /// Stable message-catalog key for this description.
    pub fn key(&self) -> &'static str {
        match self {
            FormattedEvent::Pushed { .. } => "event.push",
            FormattedEvent::Starred { .. } => "event.watch",
            FormattedEvent::Forked { .. } => "event.fork",
            FormattedEvent::Created { .. } => "event.create",
            FormattedEvent::Deleted { .. } => "event.delete",
            FormattedEvent::IssueOpened { .. } => "event.issues.opened",
            FormattedEvent::IssueClosed { .. } => "event.issues.closed",
            FormattedEvent::IssueUpdated { .. } => "event.issues.other",
            FormattedEvent::PullRequestOpened { .. } => "event.pull_request.opened",
            FormattedEvent::PullRequestClosed { .. } => "event.pull_request.closed",
            FormattedEvent::PullRequestUpdated { .. } => "event.pull_request.other",
            FormattedEvent::ReleasePublished { .. } => "event.release",
            FormattedEvent::IssueCommented { .. } => "event.issue_comment",
            FormattedEvent::CommitCommented { .. } => "event.commit_comment",
            FormattedEvent::BecameCollaborator { .. } => "event.member",
            FormattedEvent::MadePublic { .. } => "event.public",
            FormattedEvent::DidSomething { .. } => "event.unknown",
        }
    }

    /// Positional arguments for the catalog template, in `{0}`, `{1}` order.
    pub fn args(&self) -> Vec<String> {
        match self {
            FormattedEvent::Pushed { commits, repo } => {
                vec![commits.to_string(), (*repo).to_string()]
            }
            FormattedEvent::Created { ref_type, repo }
            | FormattedEvent::Deleted { ref_type, repo } => {
                vec![(*ref_type).to_string(), (*repo).to_string()]
            }
            FormattedEvent::Starred { repo }
            | FormattedEvent::Forked { repo }
            | FormattedEvent::IssueOpened { repo }
            | FormattedEvent::IssueClosed { repo }
            | FormattedEvent::IssueUpdated { repo }
            | FormattedEvent::PullRequestOpened { repo }
            | FormattedEvent::PullRequestClosed { repo }
            | FormattedEvent::PullRequestUpdated { repo }
            | FormattedEvent::ReleasePublished { repo }
            | FormattedEvent::IssueCommented { repo }
            | FormattedEvent::CommitCommented { repo }
            | FormattedEvent::BecameCollaborator { repo }
            | FormattedEvent::MadePublic { repo }
            | FormattedEvent::DidSomething { repo } => vec![(*repo).to_string()],
        }
    }

    /// The repository the event names (already defaulted to `"unknown"` when
    /// extraction failed).
    pub fn repo(&self) -> &'a str {
        match self {
            FormattedEvent::Pushed { repo, .. }
            | FormattedEvent::Starred { repo }
            | FormattedEvent::Forked { repo }
            | FormattedEvent::Created { repo, .. }
            | FormattedEvent::Deleted { repo, .. }
            | FormattedEvent::IssueOpened { repo }
            | FormattedEvent::IssueClosed { repo }
            | FormattedEvent::IssueUpdated { repo }
            | FormattedEvent::PullRequestOpened { repo }
            | FormattedEvent::PullRequestClosed { repo }
            | FormattedEvent::PullRequestUpdated { repo }
            | FormattedEvent::ReleasePublished { repo }
            | FormattedEvent::IssueCommented { repo }
            | FormattedEvent::CommitCommented { repo }
            | FormattedEvent::BecameCollaborator { repo }
            | FormattedEvent::MadePublic { repo }
            | FormattedEvent::DidSomething { repo } => repo,
        }
    }
}
