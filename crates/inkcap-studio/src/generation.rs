//! Generation-service contract
//!
//! The remote model is an external collaborator. This module defines the
//! narrow interface the studio consumes: an analysis call that yields a
//! caption, a placement hint, and a refined prompt; and an image call that
//! yields encoded bytes. Transport, retries, and prompt engineering live in
//! the host's implementation.

use serde::{Deserialize, Serialize};

use crate::placement::PlacementHint;

/// Post format the image is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostFormat {
    /// Feed, square 1:1
    #[default]
    FeedSquare,
    /// Feed, portrait 4:5 (generated with the closest supported 3:4 tag)
    FeedPortrait,
    /// Story, 9:16
    Story,
}

impl PostFormat {
    /// Display-canvas aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        match self {
            PostFormat::FeedSquare => 1.0,
            PostFormat::FeedPortrait => 4.0 / 5.0,
            PostFormat::Story => 9.0 / 16.0,
        }
    }

    /// Aspect tag understood by the image model
    pub fn aspect_tag(&self) -> &'static str {
        match self {
            PostFormat::FeedSquare => "1:1",
            PostFormat::FeedPortrait => "3:4",
            PostFormat::Story => "9:16",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostFormat::FeedSquare => "Feed (Square 1:1)",
            PostFormat::FeedPortrait => "Feed (Portrait 4:5)",
            PostFormat::Story => "Story (9:16)",
        }
    }
}

/// Color mood steering the generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMood {
    #[default]
    Vibrant,
    Pastel,
    Monochrome,
    Earthy,
    Neon,
}

/// Art style steering the generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArtStyle {
    #[default]
    Photorealistic,
    Minimalist,
    Fantasy,
    Abstract,
    Vintage,
}

/// Input to the analysis call
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub prompt: &'a str,
    pub format: PostFormat,
    pub mood: ColorMood,
    pub style: ArtStyle,
    /// A caption the user already typed; implementations must keep it
    /// verbatim instead of writing a new one.
    pub existing_caption: Option<&'a str>,
}

/// Result of the analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub caption: String,
    /// Suggested vertical placement for the caption
    #[serde(rename = "position")]
    pub placement: PlacementHint,
    #[serde(rename = "refinedPrompt")]
    pub refined_prompt: String,
}

/// Generation failure; surfaces to the user, never corrupts studio state
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Image generation failed: {0}")]
    ImageGeneration(String),
}

/// Remote generative model, as the studio sees it
pub trait GenerationService {
    /// Analyze the user's idea into a caption, placement, and refined prompt
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<Analysis, GenerationError>;

    /// Generate an image for the prompt; returns encoded PNG/JPEG bytes
    fn generate_image(&self, prompt: &str, aspect_tag: &str)
        -> Result<Vec<u8>, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_tags_and_ratios() {
        assert_eq!(PostFormat::FeedSquare.aspect_tag(), "1:1");
        assert_eq!(PostFormat::FeedPortrait.aspect_tag(), "3:4");
        assert_eq!(PostFormat::Story.aspect_tag(), "9:16");
        assert!((PostFormat::Story.aspect_ratio() - 0.5625).abs() < 0.001);
    }

    #[test]
    fn test_analysis_json_field_names() {
        let json = r#"{"caption":"Hi","position":"bottom","refinedPrompt":"a sunset"}"#;
        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.caption, "Hi");
        assert_eq!(analysis.placement, crate::PlacementHint::Bottom);
        assert_eq!(analysis.refined_prompt, "a sunset");
    }
}
