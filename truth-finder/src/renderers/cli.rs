//! CLI renderer for terminal output with colors and score bars

use super::{format_score, OutputRenderer};
use crate::classify::{score_width_percent, sensationalism_tier, trust_tier, Severity};
use crate::controller::RequestState;
use crate::types::AnalysisResult;
use colored::{Color, Colorize};

const BAR_WIDTH: usize = 20;

/// Terminal renderer for analysis reports
pub struct CliRenderer {
    /// Whether to draw score bars
    pub show_bars: bool,
}

impl CliRenderer {
    pub fn new() -> Self {
        Self { show_bars: true }
    }

    /// Renderer that prints scores without bars
    pub fn without_bars() -> Self {
        Self { show_bars: false }
    }

    fn render_result(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();

        if let Some(title) = &result.title {
            output.push_str(&format!("\n{}\n", title.bold()));
            output.push_str(&format!("{}\n", "═".repeat(title.chars().count().min(60))));
        }

        let trust = trust_tier(result.trust_score);
        let trust_color = severity_color(trust.severity());
        output.push_str(&format!(
            "\n{} {} {}  {}\n",
            trust.icon().glyph(),
            format!("{:<16}", "Trust Score").bold(),
            format!("{}/10", format_score(result.trust_score)).color(trust_color).bold(),
            trust.label().color(trust_color)
        ));
        if self.show_bars {
            output.push_str(&format!("   {}\n", score_bar(result.trust_score, trust_color)));
        }

        let sensationalism = sensationalism_tier(result.sensationalism_score);
        let sensationalism_color = severity_color(sensationalism.severity());
        output.push_str(&format!(
            "📈 {} {}  {}\n",
            format!("{:<16}", "Sensationalism").bold(),
            format!("{}/10", format_score(result.sensationalism_score))
                .color(sensationalism_color)
                .bold(),
            sensationalism.label().color(sensationalism_color)
        ));
        if self.show_bars {
            output.push_str(&format!(
                "   {}\n",
                score_bar(result.sensationalism_score, sensationalism_color)
            ));
        }

        if let Some(summary) = &result.summary {
            output.push_str(&format!("\n{}\n{}\n", "Summary".cyan().bold(), summary));
        }

        if let Some(tone) = &result.tone_analysis {
            output.push_str(&format!("\n{}\n{}\n", "Tone Analysis".cyan().bold(), tone));
        }

        if !result.manipulative_techniques.is_empty() {
            output.push_str(&format!("\n{}\n", "Manipulative Techniques".cyan().bold()));
            for (i, technique) in result.manipulative_techniques.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {}: {}\n",
                    i + 1,
                    technique.technique.yellow(),
                    technique.explanation
                ));
            }
        }

        output.push_str(&format!(
            "\n{}\n{}\n",
            "Final Verdict".cyan().bold(),
            result.final_verdict
        ));

        output
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for CliRenderer {
    fn render(&self, state: &RequestState) -> String {
        match state {
            RequestState::Idle => "No analysis requested yet\n".to_string(),
            RequestState::Loading => format!("{}\n", "Analyzing...".yellow()),
            RequestState::Error(message) => format!("{} {}\n", "❌", message.red().bold()),
            RequestState::Success(result) => self.render_result(result),
        }
    }
}

/// Terminal colour for a severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Green => Color::Green,
        Severity::Yellow => Color::Yellow,
        Severity::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        Severity::Red => Color::Red,
    }
}

/// Draw a score bar. The reported percentage is the raw `score * 10`; only the
/// number of filled cells is bounded by the bar width.
fn score_bar(score: f64, color: Color) -> String {
    let percent = score_width_percent(score);
    let filled = ((percent / 100.0) * BAR_WIDTH as f64)
        .round()
        .clamp(0.0, BAR_WIDTH as f64) as usize;
    format!(
        "{}{} {}%",
        "█".repeat(filled).color(color),
        "░".repeat(BAR_WIDTH - filled).dimmed(),
        format_score(percent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ManipulativeTechnique;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            trust_score: 9.0,
            sensationalism_score: 2.0,
            final_verdict: "Reliable".to_string(),
            title: Some("Markets rally".to_string()),
            summary: Some("Stocks rose on Monday.".to_string()),
            tone_analysis: None,
            manipulative_techniques: vec![ManipulativeTechnique {
                technique: "Loaded language".to_string(),
                explanation: "Uses emotive verbs".to_string(),
            }],
        }
    }

    #[test]
    fn test_renders_full_report() {
        let output = CliRenderer::new().render(&RequestState::Success(sample_result()));

        assert!(output.contains("Markets rally"));
        assert!(output.contains("9/10"));
        assert!(output.contains("Good"));
        assert!(output.contains("2/10"));
        assert!(output.contains("Low"));
        assert!(output.contains("Stocks rose on Monday."));
        assert!(output.contains("Loaded language"));
        assert!(output.contains("Reliable"));
        assert!(output.contains("90%"));
    }

    #[test]
    fn test_missing_optional_fields_are_omitted() {
        let result = AnalysisResult {
            trust_score: 5.0,
            sensationalism_score: 7.0,
            final_verdict: "Mixed".to_string(),
            title: None,
            summary: None,
            tone_analysis: None,
            manipulative_techniques: Vec::new(),
        };
        let output = CliRenderer::new().render(&RequestState::Success(result));

        assert!(output.contains("Poor"));
        assert!(output.contains("High"));
        assert!(output.contains("Mixed"));
        assert!(!output.contains("Summary"));
        assert!(!output.contains("Tone Analysis"));
        assert!(!output.contains("Manipulative Techniques"));
    }

    #[test]
    fn test_renders_non_terminal_and_error_states() {
        let renderer = CliRenderer::new();
        assert!(renderer.render(&RequestState::Idle).contains("No analysis"));
        assert!(renderer.render(&RequestState::Loading).contains("Analyzing"));
        assert!(renderer
            .render(&RequestState::Error("Unreachable content".to_string()))
            .contains("Unreachable content"));
    }

    #[test]
    fn test_score_bar_reports_unclamped_percentage() {
        let bar = score_bar(12.0, Color::Green);
        assert!(bar.contains("120%"));
        assert!(!bar.contains('░'));

        let bar = score_bar(-1.0, Color::Red);
        assert!(bar.contains("-10%"));
        assert!(!bar.contains('█'));
    }

    #[test]
    fn test_without_bars() {
        let output = CliRenderer::without_bars().render(&RequestState::Success(sample_result()));
        assert!(!output.contains("90%"));
    }
}
