//! Quality badges for a score.

use crate::models::Grade;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

const SHIELDS_BASE: &str = "https://img.shields.io/badge/";
const LABEL: &str = "MasterCheck";

/// Output format of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BadgeFormat {
    /// Markdown image linking the shields.io badge
    #[default]
    Markdown,
    /// HTML `<img>` tag
    Html,
    /// Bare shields.io URL
    Shields,
    /// Standalone SVG
    Svg,
    /// Badge data as JSON
    Json,
}

/// shields.io badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BadgeStyle {
    Flat,
    FlatSquare,
    #[default]
    ForTheBadge,
}

impl BadgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::ForTheBadge => "for-the-badge",
        }
    }
}

/// Badge data, also the JSON badge format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub grade: Grade,
    pub score: u8,
    /// `#rrggbb`
    pub color: String,
    pub emoji: String,
    pub timestamp: DateTime<Utc>,
    pub schema_version: u8,
}

impl Badge {
    pub fn new(score: u8) -> Self {
        let grade = Grade::from_score(score);
        Self {
            grade,
            score,
            color: format!("#{}", grade.color()),
            emoji: grade.emoji().to_string(),
            timestamp: Utc::now(),
            schema_version: 1,
        }
    }

    /// The shields.io URL, with the message percent-encoded.
    pub fn shields_url(&self, style: BadgeStyle) -> Result<String> {
        let mut url = Url::parse(SHIELDS_BASE).context("Invalid shields.io base URL")?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("shields.io base URL cannot take path segments"))?
            .pop_if_empty()
            .push(&format!(
                "{}-{} {}%-{}",
                LABEL,
                self.grade,
                self.score,
                self.grade.color()
            ));
        url.query_pairs_mut().append_pair("style", style.as_str());
        Ok(url.into())
    }

    pub fn render(&self, format: BadgeFormat, style: BadgeStyle) -> Result<String> {
        let rendered = match format {
            BadgeFormat::Shields => self.shields_url(style)?,
            BadgeFormat::Markdown => format!(
                "![{} {} {}]({})",
                LABEL,
                self.grade,
                self.emoji,
                self.shields_url(style)?
            ),
            BadgeFormat::Html => format!(
                "<img src=\"{}\" alt=\"{} {} {}\" />",
                self.shields_url(style)?,
                LABEL,
                self.grade,
                self.emoji
            ),
            BadgeFormat::Svg => self.svg(),
            BadgeFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize badge")?
            }
        };
        Ok(rendered)
    }

    fn svg(&self) -> String {
        let color = self.grade.color();
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="35">
  <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="0%">
    <stop offset="0%" style="stop-color:#{};stop-opacity:1" />
    <stop offset="100%" style="stop-color:#{};stop-opacity:1" />
  </linearGradient>
  <rect width="200" height="35" rx="5" fill="url(#gradient)"/>
  <text x="100" y="22" font-family="Arial, sans-serif" font-size="14" font-weight="bold" fill="white" text-anchor="middle">{} {} {}%</text>
</svg>
"##,
            color,
            darken(color),
            self.emoji,
            self.grade,
            self.score
        )
    }
}

/// Subtract 0x33 from each channel of a `rrggbb` color, clamping at 0.
fn darken(hex: &str) -> String {
    let value = u32::from_str_radix(hex, 16).unwrap_or(0);
    let channel = |shift: u32| ((value >> shift) & 0xff).saturating_sub(0x33);
    format!("{:02x}{:02x}{:02x}", channel(16), channel(8), channel(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_grade_and_color() {
        let badge = Badge::new(92);
        assert_eq!(badge.grade, Grade::Gold);
        assert_eq!(badge.color, "#fbbf24");
        assert_eq!(badge.emoji, "🥇");
    }

    #[test]
    fn test_shields_url_is_encoded() {
        let url = Badge::new(85).shields_url(BadgeStyle::Flat).unwrap();
        assert_eq!(
            url,
            "https://img.shields.io/badge/MasterCheck-SILVER%2085%25-d1d5db?style=flat"
        );
    }

    #[test]
    fn test_markdown_badge() {
        let badge = Badge::new(40)
            .render(BadgeFormat::Markdown, BadgeStyle::ForTheBadge)
            .unwrap();
        assert!(badge.starts_with("![MasterCheck PENDING ⏳](https://img.shields.io/badge/"));
        assert!(badge.ends_with("?style=for-the-badge)"));
    }

    #[test]
    fn test_json_badge() {
        let json = Badge::new(97)
            .render(BadgeFormat::Json, BadgeStyle::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grade"], "PLATINUM");
        assert_eq!(value["score"], 97);
        assert_eq!(value["color"], "#9333ea");
        assert_eq!(value["schemaVersion"], 1);
    }

    #[test]
    fn test_svg_badge_darkens_gradient() {
        let svg = Badge::new(75).render(BadgeFormat::Svg, BadgeStyle::default()).unwrap();
        assert!(svg.contains("stop-color:#f97316"));
        assert!(svg.contains("stop-color:#c64000"));
        assert!(svg.contains("BRONZE 75%"));
    }

    #[test]
    fn test_darken_clamps() {
        assert_eq!(darken("000000"), "000000");
        assert_eq!(darken("ffffff"), "cccccc");
    }
}
