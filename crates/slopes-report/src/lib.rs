//! slopes-report: Drawing and display surfaces for slopes.
//!
//! Turns the renderer's draw commands into SVG and a session snapshot into a
//! self-contained HTML page.

pub mod html;
pub mod svg;

pub use html::{generate_html, write_html_report};
pub use svg::{generate_svg, write_svg};
