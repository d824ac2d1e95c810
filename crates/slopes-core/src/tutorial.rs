//! Tutorial content shown after repeated incorrect answers.

/// Text of the tutorial overlay, independent of how a surface lays it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    pub title: &'static str,
    pub intro: &'static str,
    pub steps: &'static [&'static str],
    pub video_label: &'static str,
    pub video_url: &'static str,
}

pub const TUTORIAL: Tutorial = Tutorial {
    title: "How to Find the Slope of a Line",
    intro: "The slope-intercept form of a line is y = mx + b, where m is the slope and b is the y-intercept.",
    steps: &[
        "Find the slope (m) by using two points: m = (y2 - y1) / (x2 - x1)",
        "The y-intercept (b) is where the line crosses the y-axis.",
        "Plug the values into the equation: y = mx + b",
    ],
    video_label: "Slope Tutorial Video",
    video_url: "https://www.youtube.com/watch?v=c-iK1SCCINc",
};

impl Tutorial {
    /// Plain-text rendering for terminal surfaces.
    pub fn to_plain_text(&self) -> String {
        let mut text = format!("{}\n\n{}\n\n", self.title, self.intro);
        for step in self.steps {
            text.push_str("  - ");
            text.push_str(step);
            text.push('\n');
        }
        text.push_str(&format!(
            "\nWatch this video for more help:\n  {}: {}\n",
            self.video_label, self.video_url
        ));
        text
    }
}
