//! The interactive menu session.
//!
//! Reads commands from any `BufRead` and writes the transcript to any
//! `Write`, so the whole session can be driven from a script. Errors from
//! the platform are printed and the loop returns to the prompt; only I/O
//! failures on the session streams end it.

use std::io::{BufRead, ErrorKind, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use super::menu::{parse_reaction, parse_user_kind, MenuChoice};
use crate::config::VidalyzerConfig;
use crate::core::{Error, Result};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::io::{export_result, TerminalRenderer};
use crate::platform::{NewVideo, Platform};

pub struct Session<R, W> {
    platform: Platform,
    input: R,
    output: W,
    formatter: ColoredFormatter,
    date_format: String,
    pause_after_command: bool,
    results_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &VidalyzerConfig, formatting: FormattingConfig, input: R, output: W) -> Self {
        Self {
            platform: Platform::new(&config.analysis),
            input,
            output,
            formatter: ColoredFormatter::new(formatting),
            date_format: config.display.date_format.clone(),
            pause_after_command: config.session.pause_after_command,
            results_dir: config.export.results_dir.clone(),
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.say("Welcome to YouTube Video Analyzer System!")?;
        loop {
            self.show_menu()?;
            let line = match self.prompt("\nEnter your choice: ") {
                Ok(line) => line,
                Err(err) if is_end_of_input(&err) => break,
                Err(err) => return Err(err),
            };

            let outcome = line
                .parse::<MenuChoice>()
                .and_then(|choice| self.dispatch(choice));
            match outcome {
                Ok(Flow::Exit) => {
                    self.say("\nThank you for using YouTube Video Analyzer System!")?;
                    self.say("Goodbye!")?;
                    return Ok(());
                }
                Ok(Flow::Continue) => {}
                Err(err) if is_end_of_input(&err) => break,
                Err(err) if err.is_recoverable() => self.report_error(&err)?,
                Err(err) => return Err(err),
            }

            if self.pause_after_command {
                match self.prompt("\nPress Enter to continue...") {
                    Ok(_) => {}
                    Err(err) if is_end_of_input(&err) => break,
                    Err(err) => return Err(err),
                }
            }
        }
        debug!("Input closed, ending session");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(command = choice.label(), "Dispatching menu command");
        match choice {
            MenuChoice::CreateUser => self.create_user()?,
            MenuChoice::CreateVideo => self.create_video()?,
            MenuChoice::CreateComment => self.create_comment()?,
            MenuChoice::AnalyzeVideo => self.analyze_video()?,
            MenuChoice::ListUsers => self.list_users()?,
            MenuChoice::ListVideos => self.list_videos()?,
            MenuChoice::ListComments => self.list_comments()?,
            MenuChoice::SearchUser => self.search_user()?,
            MenuChoice::SearchVideo => self.search_video()?,
            MenuChoice::DeleteUser => self.delete_user()?,
            MenuChoice::DeleteVideo => self.delete_video()?,
            MenuChoice::VideoDetails => self.video_details()?,
            MenuChoice::WatchVideo => self.watch_video()?,
            MenuChoice::ReactToComment => self.react_to_comment()?,
            MenuChoice::AddFavoriteCategory => self.add_favorite_category()?,
            MenuChoice::SaveResult => self.save_result()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    // ----- commands -----

    fn create_user(&mut self) -> Result<()> {
        self.say("\nSelect user type:\n1. Regular User\n2. Video Creator\n3. Viewer")?;
        let kind = parse_user_kind(&self.prompt("Choice: ")?)?;
        let id = self.prompt_required("Enter User ID: ", "User ID")?;
        let username = self.prompt_required("Enter Username: ", "Username")?;
        let email = self.prompt("Enter Email: ")?;

        let message = {
            let user = self.platform.create_user(kind, id, username, email)?;
            format!("\n{} {} created successfully!", kind.label(), user.username())
        };
        self.success(&message)
    }

    fn create_video(&mut self) -> Result<()> {
        if self.platform.creators().next().is_none() {
            return self.warn("\nNo video creators available. Create a creator first!");
        }
        let creators: Vec<String> = self
            .platform
            .creators()
            .map(|c| format!("  {}: {}", c.id(), c.username()))
            .collect();
        self.say("\nAvailable creators:")?;
        self.say(creators.join("\n"))?;

        let creator_id = self.prompt("\nEnter Creator ID: ")?;
        self.platform.creator(&creator_id)?;

        let id = self.prompt_required("Enter Video ID: ", "Video ID")?;
        let title = self.prompt("Enter Title: ")?;
        let url = self.prompt("Enter URL: ")?;
        let duration_secs = parse_duration(&self.prompt("Enter Duration (seconds): ")?)?;
        let category = self.prompt("Enter Category: ")?;

        let message = {
            let video = self.platform.create_video(
                &creator_id,
                NewVideo {
                    id,
                    title,
                    url,
                    duration_secs,
                    category,
                },
            )?;
            format!("\nVideo '{}' created successfully!", video.title())
        };
        self.success(&message)
    }

    fn create_comment(&mut self) -> Result<()> {
        if self.platform.videos().next().is_none() {
            return self.warn("\nNo videos available. Create a video first!");
        }
        if self.platform.users().next().is_none() {
            return self.warn("\nNo users available. Create a user first!");
        }

        self.list_video_choices(false)?;
        let video_id = self.prompt("\nEnter Video ID: ")?;
        self.platform.video(&video_id)?;

        let users: Vec<String> = self
            .platform
            .users()
            .map(|u| format!("  {}: {}", u.id(), u.username()))
            .collect();
        self.say("\nAvailable users:")?;
        self.say(users.join("\n"))?;
        let author_id = self.prompt("\nEnter User ID (author): ")?;
        self.platform.user(&author_id)?;

        let comment_id = self.prompt_required("Enter Comment ID: ", "Comment ID")?;
        let content = self.prompt("Enter Comment Content: ")?;
        self.platform
            .create_comment(&video_id, &author_id, comment_id, content)?;
        self.success("\nComment added successfully!")
    }

    fn analyze_video(&mut self) -> Result<()> {
        if self.platform.videos().next().is_none() {
            return self.warn("\nNo videos available!");
        }
        self.list_video_choices(true)?;
        let video_id = self.prompt("\nEnter Video ID to analyze: ")?;

        let count = self.platform.video(&video_id)?.comment_count();
        if count == 0 {
            return Err(Error::empty_input(video_id));
        }
        self.say(format!("\nAnalyzing {count} comments..."))?;

        self.platform.analyze_video(&video_id)?;
        let text = self
            .renderer()
            .analysis_result(self.platform.analysis_result(&video_id)?);
        self.say(text)
    }

    fn list_users(&mut self) -> Result<()> {
        if self.platform.users().next().is_none() {
            return self.say("\nNo users in the system.");
        }
        let text = format!(
            "\n{}\n{}",
            self.renderer().banner("ALL USERS"),
            self.renderer().users_table(self.platform.users())
        );
        self.say(text)
    }

    fn list_videos(&mut self) -> Result<()> {
        if self.platform.videos().next().is_none() {
            return self.say("\nNo videos in the system.");
        }
        let text = format!(
            "\n{}\n{}",
            self.renderer().banner("ALL VIDEOS"),
            self.renderer().videos_table(self.platform.videos())
        );
        self.say(text)
    }

    fn list_comments(&mut self) -> Result<()> {
        if self.platform.comments().next().is_none() {
            return self.say("\nNo comments in the system.");
        }
        let renderer = self.renderer();
        let mut blocks = vec![format!("\n{}", renderer.banner("ALL COMMENTS"))];
        for comment in self.platform.comments() {
            blocks.push(renderer.comment(comment, self.platform.author_name(comment)));
            blocks.push(renderer.thin_rule());
        }
        let text = blocks.join("\n");
        self.say(text)
    }

    fn search_user(&mut self) -> Result<()> {
        let id = self.prompt("\nEnter User ID to search: ")?;
        let text = format!(
            "\nUser found:\n{}",
            self.renderer().user_details(self.platform.user(&id)?)
        );
        self.say(text)
    }

    fn search_video(&mut self) -> Result<()> {
        let id = self.prompt("\nEnter Video ID to search: ")?;
        let video = self.platform.video(&id)?;
        let text = format!(
            "\nVideo found:\n{}",
            self.renderer()
                .video_details(video, self.platform.video_owner(&id))
        );
        self.say(text)
    }

    fn delete_user(&mut self) -> Result<()> {
        let id = self.prompt("\nEnter User ID to delete: ")?;
        let user = self.platform.delete_user(&id)?;
        self.success(&format!("User {} deleted successfully!", user.username()))
    }

    fn delete_video(&mut self) -> Result<()> {
        let id = self.prompt("\nEnter Video ID to delete: ")?;
        let video = self.platform.delete_video(&id)?;
        self.success(&format!("Video '{}' deleted successfully!", video.title()))
    }

    fn video_details(&mut self) -> Result<()> {
        let id = self.prompt("\nEnter Video ID: ")?;
        let video = self.platform.video(&id)?;
        let renderer = self.renderer();

        let mut blocks = vec![
            String::new(),
            renderer.video_details(video, self.platform.video_owner(&id)),
            "\nComments on this video:".to_string(),
        ];
        for comment in video.comments() {
            blocks.push(renderer.comment(comment, self.platform.author_name(comment)));
        }
        if let Ok(result) = self.platform.analysis_result(&id) {
            blocks.push("\nAnalysis Result:".to_string());
            blocks.push(renderer.analysis_result(result));
        }
        let text = blocks.join("\n");
        self.say(text)
    }

    fn watch_video(&mut self) -> Result<()> {
        let viewer_id = self.prompt("\nEnter Viewer ID: ")?;
        let video_id = self.prompt("Enter Video ID to watch: ")?;
        self.platform.watch_video(&viewer_id, &video_id)?;
        let message = format!(
            "{} is watching: {}",
            self.platform.user(&viewer_id)?.username(),
            self.platform.video(&video_id)?.title()
        );
        self.say(message)
    }

    fn react_to_comment(&mut self) -> Result<()> {
        let comment_id = self.prompt("\nEnter Comment ID: ")?;
        self.platform.comment(&comment_id)?;
        self.say("1. Like\n2. Dislike")?;
        let reaction = parse_reaction(&self.prompt("Choice: ")?)?;
        let text = {
            let comment = self.platform.react_to_comment(&comment_id, reaction)?;
            format!(
                "Likes: {}, Dislikes: {}",
                comment.likes(),
                comment.dislikes()
            )
        };
        self.say(text)
    }

    fn add_favorite_category(&mut self) -> Result<()> {
        let viewer_id = self.prompt("\nEnter Viewer ID: ")?;
        let category = self.prompt_required("Enter Category: ", "Category")?;
        if self.platform.add_favorite_category(&viewer_id, &category)? {
            self.success(&format!("Category '{category}' added to favorites."))
        } else {
            self.say(format!("Category '{category}' is already a favorite."))
        }
    }

    fn save_result(&mut self) -> Result<()> {
        let video_id = self.prompt("\nEnter Video ID: ")?;
        self.platform.video(&video_id)?;
        let result = self.platform.analysis_result(&video_id)?;
        match export_result(result, &video_id, &self.results_dir) {
            Ok(path) => {
                let message = format!("Result saved to {}", path.display());
                self.success(&message)
            }
            Err(e) => {
                warn!("Failed to save analysis result: {e:#}");
                let painted = self.formatter.error(&format!("\nFailed to save result: {e:#}"));
                self.say(painted)
            }
        }
    }

    // ----- helpers -----

    fn renderer(&self) -> TerminalRenderer<'_> {
        TerminalRenderer::new(&self.formatter, &self.date_format)
    }

    fn show_menu(&mut self) -> Result<()> {
        let mut lines = vec![
            String::new(),
            self.renderer().banner("YOUTUBE VIDEO ANALYZER SYSTEM"),
        ];
        for choice in MenuChoice::ALL {
            lines.push(format!("{}. {}", choice.number(), choice.label()));
        }
        lines.push(self.renderer().rule());
        self.say(lines.join("\n"))
    }

    fn list_video_choices(&mut self, with_comment_counts: bool) -> Result<()> {
        let videos: Vec<String> = self
            .platform
            .videos()
            .map(|v| {
                if with_comment_counts {
                    format!("  {}: {} ({} comments)", v.id(), v.title(), v.comment_count())
                } else {
                    format!("  {}: {}", v.id(), v.title())
                }
            })
            .collect();
        self.say("\nAvailable videos:")?;
        self.say(videos.join("\n"))
    }

    fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    fn success(&mut self, text: &str) -> Result<()> {
        let painted = self.formatter.success(text);
        self.say(painted)
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        let painted = self.formatter.warning(text);
        self.say(painted)
    }

    fn report_error(&mut self, err: &Error) -> Result<()> {
        debug!(code = err.code(), "{err}");
        let painted = self.formatter.error(&format!("\n{err}"));
        self.say(painted)
    }

    /// Print `label`, read one line, strip the line ending.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_required(&mut self, label: &str, field: &str) -> Result<String> {
        let value = self.prompt(label)?.trim().to_string();
        if value.is_empty() {
            return Err(Error::invalid_input(field, "must not be empty"));
        }
        Ok(value)
    }
}

enum Flow {
    Continue,
    Exit,
}

fn is_end_of_input(err: &Error) -> bool {
    matches!(err, Error::Io(io) if io.kind() == ErrorKind::UnexpectedEof)
}

fn parse_duration(raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        Error::invalid_input("duration", format!("{:?} is not a whole number of seconds", raw.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Recommendation;
    use indoc::indoc;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Platform) {
        run_script_with(&VidalyzerConfig::default(), script)
    }

    fn run_script_with(config: &VidalyzerConfig, script: &str) -> (String, Platform) {
        let mut output = Vec::new();
        let platform = {
            let mut session = Session::new(
                config,
                FormattingConfig::plain(),
                Cursor::new(script.to_string()),
                &mut output,
            );
            session.run().unwrap();
            session.platform
        };
        (String::from_utf8(output).unwrap(), platform)
    }

    const SETUP: &str = indoc! {"
        1
        2
        u1
        alice
        alice@example.com
        1
        3
        u2
        bob
        bob@example.com
        2
        u1
        v1
        Demo Video
        http://example.com/v1
        120
        Education
    "};

    #[test]
    fn full_analysis_scenario() {
        let script = format!(
            "{SETUP}{}",
            indoc! {"
                3
                v1
                u2
                c1
                great video
                3
                v1
                u2
                c2
                terrible content
                3
                v1
                u1
                c3
                okay I guess
                4
                v1
                0
            "}
        );
        let (out, platform) = run_script(&script);

        assert!(out.contains("Video Creator alice created successfully!"));
        assert!(out.contains("Video 'Demo Video' created successfully!"));
        assert!(out.contains("Analyzing 3 comments..."));
        assert!(out.contains("Quality Score: 5.00/10"));
        assert!(out.contains("Recommendation: Mixed reviews. Watch at your own discretion."));
        assert!(out.contains("Goodbye!"));

        let result = platform.analysis_result("v1").unwrap();
        assert_eq!(result.recommendation(), Recommendation::Mixed);
    }

    #[test]
    fn analyzing_video_without_comments_creates_no_result() {
        let script = format!("{SETUP}4\nv1\n0\n");
        let (out, platform) = run_script(&script);
        assert!(out.contains("has no comments to analyze"));
        assert!(!out.contains("ANALYSIS RESULT"));
        assert!(platform.analysis_result("v1").is_err());
    }

    #[test]
    fn invalid_choices_return_to_menu() {
        let (out, platform) = run_script("42\n1\n9\n0\n");
        assert!(out.contains("Invalid choice: \"42\""));
        assert!(out.contains("Invalid choice: \"9\""));
        assert!(out.contains("Goodbye!"));
        assert_eq!(platform.users().count(), 0);
    }

    #[test]
    fn missing_entities_are_reported() {
        let (out, _) = run_script("8\nghost\n11\nnope\n0\n");
        assert!(out.contains("User not found: ghost"));
        assert!(out.contains("Video not found: nope"));
    }

    #[test]
    fn bad_duration_leaves_no_video() {
        let script = indoc! {"
            1
            2
            u1
            alice
            a@x
            2
            u1
            v1
            Title
            http://x
            two minutes
            Music
            0
        "};
        let (out, platform) = run_script(script);
        assert!(out.contains("Invalid duration"));
        assert_eq!(platform.videos().count(), 0);
    }

    #[test]
    fn creating_video_without_creators_is_guarded() {
        let (out, _) = run_script("2\n0\n");
        assert!(out.contains("No video creators available. Create a creator first!"));
    }

    #[test]
    fn end_of_input_ends_session_quietly() {
        let (out, _) = run_script("1\n2\nu1\n");
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn watch_and_details_flow() {
        let script = format!("{SETUP}13\nu2\nv1\n12\nv1\n0\n");
        let (out, platform) = run_script(&script);
        assert!(out.contains("bob is watching: Demo Video"));
        assert!(out.contains("Views: 1"));
        assert!(out.contains("Creator: alice"));
        assert_eq!(platform.video("v1").unwrap().view_count(), 1);
    }

    fn pausing_config() -> VidalyzerConfig {
        let mut config = VidalyzerConfig::default();
        config.session.pause_after_command = true;
        config
    }

    #[test]
    fn pause_follows_every_command() {
        // list users, Enter, bad choice, Enter, exit
        let (out, _) = run_script_with(&pausing_config(), "5\n\n42\n\n0\n");
        assert_eq!(out.matches("Press Enter to continue...").count(), 2);
        assert!(out.contains("Invalid choice: \"42\""));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn input_closing_at_pause_ends_session() {
        let (out, _) = run_script_with(&pausing_config(), "5\n");
        assert!(out.contains("No users in the system."));
        assert!(out.ends_with("Press Enter to continue..."));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn pause_is_off_by_default() {
        let (out, _) = run_script("5\n0\n");
        assert!(!out.contains("Press Enter to continue..."));
    }

    #[test]
    fn unrenderable_date_format_does_not_abort_session() {
        let mut config = VidalyzerConfig::default();
        config.display.date_format = "%Q".to_string();
        let script = format!("{SETUP}8\nu1\n12\nv1\n0\n");
        let (out, _) = run_script_with(&config, &script);
        assert!(out.contains("Registration Date: "));
        assert!(out.contains("Uploaded: "));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn configured_analyzer_appears_in_result_block() {
        let mut config = VidalyzerConfig::default();
        config.analysis.analyzer_id = "night_batch".to_string();
        config.analysis.method = "keyword_lexicon".to_string();
        let script = format!("{SETUP}3\nv1\nu2\nc1\ngood stuff\n4\nv1\n0\n");
        let (out, platform) = run_script_with(&config, &script);

        assert!(out.contains("Analyzer: night_batch (keyword_lexicon)"));
        let result = platform.analysis_result("v1").unwrap();
        assert_eq!(result.analyzer_id(), "night_batch");
        assert_eq!(result.method(), "keyword_lexicon");
    }
}
