use chrono::{DateTime, Utc};
use comfy_table::{presets::ASCII_FULL, Table};
use std::fmt::Write as _;

use crate::analysis::AnalysisResult;
use crate::core::{Comment, User, UserRole, Video};
use crate::formatting::OutputFormatter;

const RULE_WIDTH: usize = 60;
const DELETED_AUTHOR: &str = "[deleted user]";
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders entities and analysis results as terminal text.
///
/// Entities carry no display logic; everything a user sees is produced here.
pub struct TerminalRenderer<'a> {
    formatter: &'a dyn OutputFormatter,
    date_format: &'a str,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(formatter: &'a dyn OutputFormatter, date_format: &'a str) -> Self {
        Self {
            formatter,
            date_format,
        }
    }

    /// Dates in the configured format, or ISO dates if chrono rejects it.
    fn date(&self, at: DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", at.format(self.date_format)).is_err() {
            return at.format(FALLBACK_DATE_FORMAT).to_string();
        }
        out
    }

    pub fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }

    pub fn thin_rule(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }

    pub fn banner(&self, title: &str) -> String {
        format!(
            "{}\n{}\n{}",
            self.rule(),
            self.formatter.header(title),
            self.rule()
        )
    }

    pub fn user_details(&self, user: &User) -> String {
        let mut lines = vec![
            format!("User ID: {}", user.id()),
            format!("Username: {}", user.username()),
            format!("Email: {}", user.email()),
            format!("Type: {}", user.kind().label()),
            format!(
                "Registration Date: {}",
                self.date(user.registered_at())
            ),
        ];
        match user.role() {
            UserRole::Plain => {}
            UserRole::Creator(creator) => {
                lines.push(format!("Subscribers: {}", creator.subscriber_count()));
                lines.push(format!("Total Videos: {}", creator.total_videos()));
                lines.push(format!("Verified: {}", yes_no(creator.is_verified())));
            }
            UserRole::Viewer(viewer) => {
                lines.push(format!("Videos Watched: {}", viewer.watch_history().len()));
                let favorites: Vec<&str> = viewer.favorite_categories().collect();
                lines.push(format!(
                    "Favorite Categories: {}",
                    if favorites.is_empty() {
                        "-".to_string()
                    } else {
                        favorites.join(", ")
                    }
                ));
            }
        }
        lines.join("\n")
    }

    pub fn users_table<'u>(&self, users: impl IntoIterator<Item = &'u User>) -> String {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_header(vec!["ID", "Username", "Email", "Type", "Videos", "Watched"]);
        for user in users {
            let videos = user
                .as_creator()
                .map_or_else(|| "-".to_string(), |c| c.total_videos().to_string());
            let watched = user
                .as_viewer()
                .map_or_else(|| "-".to_string(), |v| v.watch_history().len().to_string());
            table.add_row(vec![
                user.id().to_string(),
                user.username().to_string(),
                user.email().to_string(),
                user.kind().label().to_string(),
                videos,
                watched,
            ]);
        }
        table.to_string()
    }

    pub fn video_details(&self, video: &Video, owner: Option<&User>) -> String {
        [
            self.formatter.bold("--- Video Information ---"),
            format!("ID: {}", video.id()),
            format!("Title: {}", video.title()),
            format!("URL: {}", video.url()),
            format!("Duration: {} seconds", video.duration_secs()),
            format!("Views: {}", video.view_count()),
            format!("Category: {}", video.category()),
            format!("Uploaded: {}", self.date(video.uploaded_at())),
            format!("Creator: {}", owner.map_or("-", User::username)),
            format!("Comments: {}", video.comment_count()),
        ]
        .join("\n")
    }

    pub fn videos_table<'v>(&self, videos: impl IntoIterator<Item = &'v Video>) -> String {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_header(vec!["ID", "Title", "Category", "Duration (s)", "Views", "Comments"]);
        for video in videos {
            table.add_row(vec![
                video.id().to_string(),
                video.title().to_string(),
                video.category().to_string(),
                video.duration_secs().to_string(),
                video.view_count().to_string(),
                video.comment_count().to_string(),
            ]);
        }
        table.to_string()
    }

    pub fn comment(&self, comment: &Comment, author: Option<&str>) -> String {
        format!(
            "[{}] Comment by {}: {}\nLikes: {}, Dislikes: {}",
            comment.id(),
            author.unwrap_or(DELETED_AUTHOR),
            comment.content(),
            comment.likes(),
            comment.dislikes()
        )
    }

    pub fn analysis_result(&self, result: &AnalysisResult) -> String {
        [
            self.banner("ANALYSIS RESULT"),
            format!(
                "Quality Score: {}/10",
                self.formatter.score(result.quality_score())
            ),
            format!(
                "Total Comments Analyzed: {}",
                result.total_comments_analyzed()
            ),
            format!("Recommendation: {}", result.recommendation()),
            format!("Analyzer: {} ({})", result.analyzer_id(), result.method()),
            format!(
                "Analysis Date: {}",
                result.analyzed_at().format("%Y-%m-%d %H:%M:%S")
            ),
            self.rule(),
        ]
        .join("\n")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::QualityScore;
    use crate::formatting::{ColoredFormatter, FormattingConfig};

    fn with_renderer(check: impl FnOnce(&TerminalRenderer<'_>)) {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        let renderer = TerminalRenderer::new(&formatter, "%Y-%m-%d");
        check(&renderer);
    }

    #[test]
    fn creator_details_include_video_total() {
        let mut alice = User::creator("u1", "alice", "alice@example.com");
        alice.creator_mut().unwrap().upload_video("v1");
        with_renderer(|r| {
            let text = r.user_details(&alice);
            assert!(text.contains("Username: alice"));
            assert!(text.contains("Type: Video Creator"));
            assert!(text.contains("Total Videos: 1"));
            assert!(text.contains("Verified: no"));
        });
    }

    #[test]
    fn video_details_show_comment_count() {
        let mut video = Video::new("v1", "Demo", "http://x", 120, "Education");
        video.add_comment(Comment::new("c1", "great", "u2"));
        with_renderer(|r| {
            let text = r.video_details(&video, None);
            assert!(text.contains("Duration: 120 seconds"));
            assert!(text.contains("Comments: 1"));
            assert!(text.contains("Creator: -"));
        });
    }

    #[test]
    fn unrenderable_date_format_falls_back_to_iso_date() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        let renderer = TerminalRenderer::new(&formatter, "%Q");
        let alice = User::new("u1", "alice", "a@x");
        let text = renderer.user_details(&alice);
        let expected = alice.registered_at().format("%Y-%m-%d").to_string();
        assert!(text.contains(&format!("Registration Date: {expected}")));
    }

    #[test]
    fn orphaned_comment_shows_placeholder() {
        let comment = Comment::new("c1", "great", "u2");
        with_renderer(|r| {
            assert_eq!(
                r.comment(&comment, None),
                "[c1] Comment by [deleted user]: great\nLikes: 0, Dislikes: 0"
            );
            assert!(r.comment(&comment, Some("bob")).contains("Comment by bob"));
        });
    }

    #[test]
    fn analysis_result_block() {
        let result = AnalysisResult::new("a1", "sentiment_analysis", QualityScore::new(5.0), 3);
        with_renderer(|r| {
            let text = r.analysis_result(&result);
            assert!(text.contains("ANALYSIS RESULT"));
            assert!(text.contains("Quality Score: 5.00/10"));
            assert!(text.contains("Total Comments Analyzed: 3"));
            assert!(text.contains("Analyzer: a1 (sentiment_analysis)"));
            assert!(text.contains("Recommendation: Mixed reviews. Watch at your own discretion."));
        });
    }

    #[test]
    fn tables_list_every_row() {
        let users = [
            User::creator("u1", "alice", "a@x"),
            User::viewer("u2", "bob", "b@x"),
        ];
        with_renderer(|r| {
            let table = r.users_table(&users);
            assert!(table.contains("alice"));
            assert!(table.contains("bob"));
            assert!(table.contains("Viewer"));
        });
    }
}
