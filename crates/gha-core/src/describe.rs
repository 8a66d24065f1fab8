//! Per-record classification and the end-to-end `summarize` pipeline.
//!
//! [`describe`] pulls exactly the fields its event kind needs and always
//! yields a [`FormattedEvent`] — absent fields resolve to documented
//! defaults, unrecognized types land on the generic fallback. [`summarize`]
//! runs the whole engine over a response body: split, filter, describe.

use crate::extract;
use crate::filter::EventFilter;
use crate::scan;
use crate::types::{EventKind, FormattedEvent};

/// Sentinel used when `repo.name` cannot be extracted.
const UNKNOWN_REPO: &str = "unknown";

/// Turn a user-events response body into descriptions of the retained
/// records, in source order.
///
/// With a filter, records whose type tag fails [`EventFilter::matches`] are
/// skipped before any formatting happens. This never fails; malformed
/// records degrade per [`describe`].
pub fn summarize<'a>(body: &'a str, filter: Option<&EventFilter>) -> Vec<FormattedEvent<'a>> {
    let mut events = Vec::new();

    for record in scan::split_objects(body) {
        if let Some(filter) = filter {
            if !filter.matches(extract::scalar(record, "type")) {
                continue;
            }
        }
        events.push(describe(record));
    }

    events
}

/// Describe one record. Total: every input, however malformed, produces a
/// [`FormattedEvent`].
pub fn describe(record: &str) -> FormattedEvent<'_> {
    let repo = extract::block(record, "repo")
        .and_then(|block| extract::scalar(block, "name"))
        .unwrap_or(UNKNOWN_REPO);

    let kind = match extract::scalar(record, "type") {
        Some(tag) => EventKind::from_tag(tag),
        None => EventKind::Other,
    };

    let payload = extract::block(record, "payload");

    match kind {
        EventKind::Push => FormattedEvent::Pushed {
            commits: commit_count(payload),
            repo,
        },
        EventKind::Watch => FormattedEvent::Starred { repo },
        EventKind::Fork => FormattedEvent::Forked { repo },
        EventKind::Create => FormattedEvent::Created {
            ref_type: ref_type(payload, "repository"),
            repo,
        },
        EventKind::Delete => FormattedEvent::Deleted {
            ref_type: ref_type(payload, "branch"),
            repo,
        },
        EventKind::Issues => match action(payload) {
            Some("opened") => FormattedEvent::IssueOpened { repo },
            Some("closed") => FormattedEvent::IssueClosed { repo },
            _ => FormattedEvent::IssueUpdated { repo },
        },
        EventKind::PullRequest => match action(payload) {
            Some("opened") => FormattedEvent::PullRequestOpened { repo },
            Some("closed") => FormattedEvent::PullRequestClosed { repo },
            _ => FormattedEvent::PullRequestUpdated { repo },
        },
        EventKind::Release => FormattedEvent::ReleasePublished { repo },
        EventKind::IssueComment => FormattedEvent::IssueCommented { repo },
        EventKind::CommitComment => FormattedEvent::CommitCommented { repo },
        EventKind::Member => FormattedEvent::BecameCollaborator { repo },
        EventKind::Public => FormattedEvent::MadePublic { repo },
        EventKind::Other => FormattedEvent::DidSomething { repo },
    }
}

/// Commit count for a push: length of the `commits` array when present and
/// positive, else the `size` scalar when it parses positive, else 1 — a
/// push is never reported as zero commits.
fn commit_count(payload: Option<&str>) -> usize {
    let mut commits = payload
        .and_then(|p| extract::block(p, "commits"))
        .map(scan::count_objects)
        .unwrap_or(0);

    if commits == 0 {
        commits = payload
            .and_then(|p| extract::scalar(p, "size"))
            .and_then(|token| token.trim().parse().ok())
            .unwrap_or(0);
    }

    if commits == 0 {
        commits = 1;
    }
    commits
}

fn ref_type<'a>(payload: Option<&'a str>, default: &'static str) -> &'a str {
    payload
        .and_then(|p| extract::scalar(p, "ref_type"))
        .unwrap_or(default)
}

fn action(payload: Option<&str>) -> Option<&str> {
    payload.and_then(|p| extract::scalar(p, "action"))
}
