//! Prompt construction for the production backend

use crate::models::{ContentLength, ContentType, GenerationRequest, TemplateStyle};
use crate::templates::{BUSINESS_TERMS, CULTURAL_EVENTS, MARKET_REFERENCES};

/// Target length hint for a content type
pub fn length_guide(length: ContentLength, content_type: ContentType) -> &'static str {
    use ContentLength::*;
    use ContentType::*;

    match (length, content_type) {
        (Short, Blog) => "300-500 words",
        (Medium, Blog) => "800-1200 words",
        (Long, Blog) => "1500-2500 words",
        (Short, Social) => "50-100 words",
        (Medium, Social) => "100-200 words",
        (Long, Social) => "200-300 words",
        (Short, Ad) => "50-150 words",
        (Medium, Ad) => "150-300 words",
        (Long, Ad) => "300-500 words",
        (Short, Email) => "100-200 words",
        (Medium, Email) => "200-400 words",
        (Long, Email) => "400-600 words",
        (_, Headline) => "10 headlines, one per line",
        (_, Hashtag) => "15 hashtags",
    }
}

/// System prompt describing the writer persona
pub fn build_system_prompt(request: &GenerationRequest) -> String {
    let regional = if request.style() == TemplateStyle::Regional {
        format!(
            "\nYou have deep knowledge of Nigerian and African markets. When relevant:\n\
             - Reference local markets like {}\n\
             - Be aware of cultural events like {}\n\
             - Use Nigerian business expressions such as {} naturally\n\
             - Consider the Nigerian/African audience perspective\n\
             - If Nigerian Pidgin tone is selected, write authentically in Nigerian Pidgin English\n",
            MARKET_REFERENCES[..3].join(", "),
            CULTURAL_EVENTS[..3].join(", "),
            BUSINESS_TERMS[..4].join(", "),
        )
    } else {
        String::new()
    };

    format!(
        "You are an expert content creator and copywriter specializing in high-quality, engaging content for African businesses and global audiences.\n\
         {}\n\
         Your writing should be:\n\
         - Engaging and valuable to the target audience\n\
         - SEO-optimized with natural keyword integration\n\
         - Clear, well-structured, and easy to read\n\
         - Authentic to the requested tone\n\
         - Free of stock AI phrases like \"dive into\", \"in conclusion\", \"it's important to note\"\n\n\
         Always provide practical value and actionable insights when relevant.",
        regional
    )
}

/// User prompt describing the piece to write and the JSON shape to return
pub fn build_content_prompt(request: &GenerationRequest) -> String {
    let mut lines = vec![
        format!(
            "Create a {} {} about: \"{}\"",
            request.tone.label().to_lowercase(),
            request.content_type.label().to_lowercase(),
            request.topic.trim()
        ),
        format!(
            "Target length: {}",
            length_guide(request.length, request.content_type)
        ),
    ];

    if !request.keywords.is_empty() {
        lines.push(format!("Keywords: {}", request.keywords.join(", ")));
    }
    if let Some(audience) = request.target_audience.as_deref().filter(|a| !a.trim().is_empty()) {
        lines.push(format!("Target audience: {}", audience));
    }
    if let Some(extra) = request.extra_instructions.as_deref().filter(|e| !e.trim().is_empty()) {
        lines.push(extra.to_string());
    }
    if matches!(request.content_type, ContentType::Social | ContentType::Hashtag) {
        lines.push("Include a \"hashtags\" array.".to_string());
    }

    lines.push(String::new());
    lines.push(
        "Return as JSON: { \"content\": \"...\", \"title\": \"...\", \"seoTitle\": \"...\", \"seoDescription\": \"...\", \"suggestedKeywords\": [...], \"readabilityScore\": 0-100 }"
            .to_string(),
    );
    lines.join("\n")
}
