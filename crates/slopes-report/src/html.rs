//! HTML snapshot of a session.
//!
//! Produces a self-contained page with all CSS inlined: the point, the
//! three counters, the feedback styling, the graph as inline SVG and, once
//! triggered, the full-screen tutorial overlay.

use anyhow::{Context, Result};
use std::path::Path;

use slopes_core::session::{SessionSnapshot, TutorialState};
use slopes_core::tutorial::TUTORIAL;

use crate::svg::{escape, generate_svg};

/// Generate an HTML page from a session snapshot.
pub fn generate_html(snapshot: &SessionSnapshot) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Slopes and Hopes</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Slopes and Hopes</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Session {} | started {}</p>\n",
        snapshot.id,
        snapshot.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Main pane, styled by the last feedback
    let pane_class = match snapshot.feedback {
        Some(feedback) => format!("main-pane {}", feedback.class()),
        None => "main-pane".to_string(),
    };
    html.push_str(&format!("<section class=\"{pane_class}\">\n"));
    html.push_str("<p>Write the equation of the line through</p>\n");
    html.push_str(&format!(
        "<p id=\"coord\" class=\"coord\">{}</p>\n",
        escape(&snapshot.problem.point().to_string())
    ));
    html.push_str("<p class=\"hint\">Answer format: <code>y= mx + b</code></p>\n");
    let message = snapshot.feedback.map(|f| f.message()).unwrap_or("");
    html.push_str(&format!("<p id=\"feedback\">{message}</p>\n"));
    html.push_str("</section>\n");

    // Counters
    html.push_str("<section class=\"score\">\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Correct</th><th>Incorrect</th><th>Total</th></tr></thead>\n");
    html.push_str(&format!(
        "<tbody><tr><td id=\"correct-tries\">{}</td><td id=\"incorrect-tries\">{}</td><td id=\"total-tries\">{}</td></tr></tbody>\n",
        snapshot.score.correct, snapshot.score.incorrect, snapshot.score.total
    ));
    html.push_str("</table>\n");
    html.push_str("</section>\n");

    // Graph
    html.push_str("<section id=\"graph\" class=\"graph\">\n");
    html.push_str(&generate_svg(&snapshot.plot()));
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Session JSON</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&escape(
        &serde_json::to_string_pretty(snapshot).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    if snapshot.tutorial == TutorialState::Shown {
        html.push_str(&tutorial_overlay());
    }

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML snapshot to a file.
pub fn write_html_report(snapshot: &SessionSnapshot, path: &Path) -> Result<()> {
    let html = generate_html(snapshot);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML to {}", path.display()))?;
    Ok(())
}

fn tutorial_overlay() -> String {
    let mut html = String::from("<div id=\"tutorial-pane\">\n<div class=\"tutorial-content\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape(TUTORIAL.title)));
    html.push_str(&format!("<p>{}</p>\n", escape(TUTORIAL.intro)));
    html.push_str("<ul>\n");
    for step in TUTORIAL.steps {
        html.push_str(&format!("<li>{}</li>\n", escape(step)));
    }
    html.push_str("</ul>\n");
    html.push_str("<p>Watch this video for more help:</p>\n");
    html.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>\n",
        escape(TUTORIAL.video_url),
        escape(TUTORIAL.video_label)
    ));
    html.push_str("</div>\n</div>\n");
    html
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: #f7f3ed; color: #1a1a1a; }
.meta { color: #6b7280; }
.main-pane { padding: 1rem 2rem; border: 2px solid #d1d5db; border-radius: 8px; }
.main-pane.correct { border-color: #22c55e; background: #dcfce7; }
.main-pane.incorrect { border-color: #ef4444; background: #fde2e2; }
.coord { font-size: 2rem; font-weight: bold; }
#feedback { font-size: 1.5rem; min-height: 2rem; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #e5e7eb; padding: 0.5rem 1rem; text-align: center; }
.graph svg { margin: 1rem 0; border: 1px solid #e5e7eb; }
pre { overflow-x: auto; padding: 1rem; background: #e5e7eb; border-radius: 8px; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
#tutorial-pane { position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; background: rgba(247,243,237,0.98); z-index: 1000; display: flex; justify-content: center; align-items: center; }
.tutorial-content { max-width: 40rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use slopes_core::render::Canvas;
    use slopes_core::session::{NoopSurface, Session};
    use slopes_core::LinearProblem;

    fn make_session() -> Session {
        let problem = LinearProblem::new(2, -5, 4).unwrap();
        Session::new(problem, Canvas::default(), 3)
    }

    #[test]
    fn html_contains_point_counters_and_graph() {
        let mut session = make_session();
        session.submit("y= 2x + -5", &mut NoopSurface);
        let html = generate_html(&session.snapshot());

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains(">(4, 3)</p>"));
        assert!(html.contains("class=\"main-pane correct\""));
        assert!(html.contains("<td id=\"correct-tries\">1</td>"));
        assert!(html.contains("<td id=\"total-tries\">1</td>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("\u{2705}"));
        assert!(!html.contains("id=\"tutorial-pane\""));
    }

    #[test]
    fn fresh_session_has_no_feedback_style() {
        let html = generate_html(&make_session().snapshot());
        assert!(html.contains("<section class=\"main-pane\">"));
        assert!(html.contains("<td id=\"incorrect-tries\">0</td>"));
    }

    #[test]
    fn tutorial_overlay_appears_once_shown() {
        let mut session = make_session();
        for _ in 0..4 {
            session.submit("y = 2x - 5", &mut NoopSurface);
        }
        let html = generate_html(&session.snapshot());
        assert!(html.contains("class=\"main-pane incorrect\""));
        assert_eq!(html.matches("id=\"tutorial-pane\"").count(), 1);
        assert!(html.contains("How to Find the Slope of a Line"));
        assert!(html.contains("href=\"https://www.youtube.com/watch?v=c-iK1SCCINc\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.html");

        write_html_report(&make_session().snapshot(), &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
