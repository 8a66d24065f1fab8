//! The static message catalog.
//!
//! Every user-facing string lives here, in both languages, keyed by the same
//! stable identifiers the engine's [`FormattedEvent::key`] produces plus the
//! CLI-level info/error keys. Templates use positional `{0}`, `{1}`
//! placeholders.
//!
//! The catalog is a compile-time perfect hash map; adding a language means
//! adding a field to [`Entry`] and an arm to [`Entry::text`], nothing else.
//!
//! [`FormattedEvent::key`]: gha_core::FormattedEvent::key

use crate::Language;

/// One catalog entry: the same message in every supported language.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub en: &'static str,
    pub vi: &'static str,
}

impl Entry {
    pub fn text(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Vi => self.vi,
        }
    }
}

pub static CATALOG: phf::Map<&'static str, Entry> = phf::phf_map! {
    // Event descriptions
    "event.push" => Entry {
        en: "Pushed {0} commit(s) to {1}",
        vi: "Đã đẩy {0} commit lên {1}",
    },
    "event.watch" => Entry {
        en: "Starred {0}",
        vi: "Đã gắn sao {0}",
    },
    "event.fork" => Entry {
        en: "Forked {0}",
        vi: "Đã fork {0}",
    },
    "event.create" => Entry {
        en: "Created {0} in {1}",
        vi: "Đã tạo {0} trong {1}",
    },
    "event.delete" => Entry {
        en: "Deleted {0} in {1}",
        vi: "Đã xóa {0} trong {1}",
    },
    "event.issues.opened" => Entry {
        en: "Opened an issue in {0}",
        vi: "Đã mở issue trong {0}",
    },
    "event.issues.closed" => Entry {
        en: "Closed an issue in {0}",
        vi: "Đã đóng issue trong {0}",
    },
    "event.issues.other" => Entry {
        en: "Updated an issue in {0}",
        vi: "Đã cập nhật issue trong {0}",
    },
    "event.pull_request.opened" => Entry {
        en: "Opened a pull request in {0}",
        vi: "Đã mở pull request trong {0}",
    },
    "event.pull_request.closed" => Entry {
        en: "Closed a pull request in {0}",
        vi: "Đã đóng pull request trong {0}",
    },
    "event.pull_request.other" => Entry {
        en: "Updated a pull request in {0}",
        vi: "Đã cập nhật pull request trong {0}",
    },
    "event.release" => Entry {
        en: "Published a release in {0}",
        vi: "Đã phát hành release trong {0}",
    },
    "event.issue_comment" => Entry {
        en: "Commented on an issue in {0}",
        vi: "Đã bình luận issue trong {0}",
    },
    "event.commit_comment" => Entry {
        en: "Commented on a commit in {0}",
        vi: "Đã bình luận commit trong {0}",
    },
    "event.member" => Entry {
        en: "Became a collaborator on {0}",
        vi: "Đã trở thành cộng tác viên trong {0}",
    },
    "event.public" => Entry {
        en: "Made {0} public",
        vi: "Đã công khai {0}",
    },
    "event.unknown" => Entry {
        en: "Did something in {0}",
        vi: "Đã thực hiện hành động trong {0}",
    },

    // Info
    "info.no_activity" => Entry {
        en: "No recent activity found for '{0}'.",
        vi: "Không tìm thấy hoạt động gần đây của '{0}'.",
    },

    // HTTP errors
    "error.http.not_found" => Entry {
        en: "Error: User '{0}' not found.",
        vi: "Lỗi: Không tìm thấy người dùng '{0}'.",
    },
    "error.http.rate_limit" => Entry {
        en: "Error: GitHub API rate limit exceeded. Please try again later.",
        vi: "Lỗi: Đã vượt quá giới hạn GitHub API. Vui lòng thử lại sau.",
    },
    "error.http.generic" => Entry {
        en: "Error: GitHub API returned status {0}.",
        vi: "Lỗi: GitHub API trả về trạng thái {0}.",
    },
    "error.http.connection" => Entry {
        en: "Error: Could not connect to GitHub API. Check your internet connection.",
        vi: "Lỗi: Không thể kết nối GitHub API. Kiểm tra kết nối mạng.",
    },

    // CLI
    "error.default.missing_username" => Entry {
        en: "Error: Missing Username. Usage: gha <username>",
        vi: "Lỗi: Thiếu Username. Cách dùng: gha <username>",
    },
    "language.switched" => Entry {
        en: "Language switched to English.",
        vi: "Đã chuyển ngôn ngữ sang Tiếng Việt.",
    },
    "error.language.invalid" => Entry {
        en: "Error: Invalid language '{0}'. Use 'en' or 'vi'.",
        vi: "Lỗi: Ngôn ngữ '{0}' không hợp lệ. Dùng 'en' hoặc 'vi'.",
    },
    "help.text" => Entry {
        en: "Usage: gha <command> [options]\n\n\
             Commands:\n\
             \x20 <username>                         Fetch recent GitHub activity for a user\n\n\
             Options:\n\
             \x20 -h, --help                         Show this help message\n\
             \x20 -l, --language <en|vi>             Switch display language (persisted)\n\
             \x20 -f, --filter <type>                Filter activity by event type\n\n\
             Event types for --filter:\n\
             \x20 push, watch, fork, create, delete,\n\
             \x20 issues, pullrequest, release,\n\
             \x20 issuecomment, commitcomment\n\n\
             Examples:\n\
             \x20 gha kamranahmedse\n\
             \x20 gha kamranahmedse --filter push\n\
             \x20 gha --language vi\n\
             \x20 gha --help\n",
        vi: "Cách dùng: gha <lệnh> [tùy chọn]\n\n\
             Lệnh:\n\
             \x20 <username>                         Lấy hoạt động GitHub gần đây của người dùng\n\n\
             Tùy chọn:\n\
             \x20 -h, --help                         Hiển thị trợ giúp này\n\
             \x20 -l, --language <en|vi>             Chuyển đổi ngôn ngữ hiển thị (được lưu lại)\n\
             \x20 -f, --filter <type>                Lọc hoạt động theo loại sự kiện\n\n\
             Loại sự kiện cho --filter:\n\
             \x20 push, watch, fork, create, delete,\n\
             \x20 issues, pullrequest, release,\n\
             \x20 issuecomment, commitcomment\n\n\
             Ví dụ:\n\
             \x20 gha kamranahmedse\n\
             \x20 gha kamranahmedse --filter push\n\
             \x20 gha --language vi\n\
             \x20 gha --help\n",
    },
};
