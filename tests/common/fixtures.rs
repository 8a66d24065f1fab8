//! Static event corpora used across harnesses.
//!
//! [`SAMPLE_FEED`] is shaped like a real `GET /users/{user}/events` response:
//! full records with `id`, `actor`, `public`, `created_at` noise around the
//! fields the engine actually reads. [`SAMPLE_FEED_EN`] is the expected
//! English rendering, in order.

/// Ten realistic event records covering the common types plus one the engine
/// does not recognize (`GollumEvent`).
pub const SAMPLE_FEED: &str = r#"[
  {
    "id": "33410461562",
    "type": "PushEvent",
    "actor": {
      "id": 583231,
      "login": "octocat",
      "url": "https://api.github.com/users/octocat"
    },
    "repo": {
      "id": 1296269,
      "name": "octocat/hello-world",
      "url": "https://api.github.com/repos/octocat/hello-world"
    },
    "payload": {
      "repository_id": 1296269,
      "push_id": 16148102763,
      "size": 3,
      "distinct_size": 3,
      "ref": "refs/heads/main",
      "commits": [
        {"sha": "7638417db6d59f3c431d3e1f261cc637155684cd", "message": "fix flaky splitter test", "distinct": true},
        {"sha": "9b2f6c1a2e8d4b7a9c0d1e2f3a4b5c6d7e8f9a0b", "message": "tighten extractor bounds", "distinct": true},
        {"sha": "1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b", "message": "release prep", "distinct": true}
      ]
    },
    "public": true,
    "created_at": "2024-03-02T08:14:22Z"
  },
  {
    "id": "33410461563",
    "type": "WatchEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 724712, "name": "rust-lang/rust", "url": "https://api.github.com/repos/rust-lang/rust"},
    "payload": {"action": "started"},
    "public": true,
    "created_at": "2024-03-02T07:55:01Z"
  },
  {
    "id": "33410461564",
    "type": "CreateEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 9101467, "name": "octocat/new-tool", "url": "https://api.github.com/repos/octocat/new-tool"},
    "payload": {
      "ref": "v0.1.0",
      "ref_type": "tag",
      "master_branch": "main",
      "description": "A small tool",
      "pusher_type": "user"
    },
    "public": true,
    "created_at": "2024-03-01T19:02:48Z"
  },
  {
    "id": "33410461565",
    "type": "IssuesEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 1296269, "name": "octocat/hello-world", "url": "https://api.github.com/repos/octocat/hello-world"},
    "payload": {
      "action": "opened",
      "issue": {"number": 42, "title": "Splitter loses the last record", "state": "open"}
    },
    "public": true,
    "created_at": "2024-03-01T16:40:12Z"
  },
  {
    "id": "33410461566",
    "type": "PullRequestEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 724712, "name": "rust-lang/rust", "url": "https://api.github.com/repos/rust-lang/rust"},
    "payload": {
      "action": "closed",
      "number": 118,
      "pull_request": {"title": "Widen lifetime on extractor", "merged": true}
    },
    "public": true,
    "created_at": "2024-03-01T14:03:59Z"
  },
  {
    "id": "33410461567",
    "type": "ForkEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 1300192, "name": "octocat/spoon-knife", "url": "https://api.github.com/repos/octocat/spoon-knife"},
    "payload": {"forkee": {"id": 99301144, "full_name": "octofan/spoon-knife", "fork": true}},
    "public": true,
    "created_at": "2024-02-29T22:17:30Z"
  },
  {
    "id": "33410461568",
    "type": "DeleteEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 1296269, "name": "octocat/hello-world", "url": "https://api.github.com/repos/octocat/hello-world"},
    "payload": {"ref": "feature/old-scanner", "ref_type": "branch", "pusher_type": "user"},
    "public": true,
    "created_at": "2024-02-29T18:44:07Z"
  },
  {
    "id": "33410461569",
    "type": "IssueCommentEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 724712, "name": "rust-lang/rust", "url": "https://api.github.com/repos/rust-lang/rust"},
    "payload": {
      "action": "created",
      "issue": {"number": 42, "title": "Splitter loses the last record"},
      "comment": {"id": 201993, "body": "Reproduced on the nested-payload corpus."}
    },
    "public": true,
    "created_at": "2024-02-29T12:30:55Z"
  },
  {
    "id": "33410461570",
    "type": "ReleaseEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 9101467, "name": "octocat/new-tool", "url": "https://api.github.com/repos/octocat/new-tool"},
    "payload": {
      "action": "published",
      "release": {"tag_name": "v0.1.0", "name": "First cut", "draft": false, "prerelease": false}
    },
    "public": true,
    "created_at": "2024-02-28T09:12:40Z"
  },
  {
    "id": "33410461571",
    "type": "GollumEvent",
    "actor": {"id": 583231, "login": "octocat", "url": "https://api.github.com/users/octocat"},
    "repo": {"id": 1296269, "name": "octocat/hello-world", "url": "https://api.github.com/repos/octocat/hello-world"},
    "payload": {"pages": [{"page_name": "Home", "action": "edited"}]},
    "public": true,
    "created_at": "2024-02-28T08:01:19Z"
  }
]"#;

/// Expected English rendering of [`SAMPLE_FEED`], in source order.
pub const SAMPLE_FEED_EN: &[&str] = &[
    "Pushed 3 commit(s) to octocat/hello-world",
    "Starred rust-lang/rust",
    "Created tag in octocat/new-tool",
    "Opened an issue in octocat/hello-world",
    "Closed a pull request in rust-lang/rust",
    "Forked octocat/spoon-knife",
    "Deleted branch in octocat/hello-world",
    "Commented on an issue in rust-lang/rust",
    "Published a release in octocat/new-tool",
    "Did something in octocat/hello-world",
];

/// Expected Vietnamese rendering of [`SAMPLE_FEED`], in source order.
pub const SAMPLE_FEED_VI: &[&str] = &[
    "Đã đẩy 3 commit lên octocat/hello-world",
    "Đã gắn sao rust-lang/rust",
    "Đã tạo tag trong octocat/new-tool",
    "Đã mở issue trong octocat/hello-world",
    "Đã đóng pull request trong rust-lang/rust",
    "Đã fork octocat/spoon-knife",
    "Đã xóa branch trong octocat/hello-world",
    "Đã bình luận issue trong rust-lang/rust",
    "Đã phát hành release trong octocat/new-tool",
    "Đã thực hiện hành động trong octocat/hello-world",
];
