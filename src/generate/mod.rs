pub mod parse;

mod client;

use log::{debug, warn};
use serde_json::{Value, json};
use thiserror::Error;

use crate::model::{OPTIONS_PER_QUESTION, QuizQuestion};
use parse::ParseError;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("could not parse model response: {0}")]
    Parse(#[from] ParseError),

    #[error("model request failed: {0}")]
    Transport(String),
}

const MODEL: &str = "gemini-1.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const TEMPERATURE: f64 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Requests `count` validated multiple-choice questions about `topic`
/// from the model service. Fails with [`GenerationError`] on any
/// transport, empty-response, parse, or validation problem; never
/// returns a partially valid list. Callers are expected to fall back
/// to [`crate::data::sample_questions`] on failure.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(
    topic: &str,
    count: usize,
    instructions: &str,
) -> Result<Vec<QuizQuestion>, GenerationError> {
    let api_key = client::api_key()?;
    let body = request_body(&build_prompt(topic, count, instructions));
    let text = client::generate_content(&api_key, &body)?;
    questions_from_text(&text)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(
    topic: &str,
    count: usize,
    instructions: &str,
) -> Result<Vec<QuizQuestion>, GenerationError> {
    let api_key = client::api_key()?;
    let body = request_body(&build_prompt(topic, count, instructions));
    let text = client::generate_content(&api_key, &body).await?;
    questions_from_text(&text)
}

fn build_prompt(topic: &str, count: usize, instructions: &str) -> String {
    let mut prompt = format!(
        "Generate {count} multiple choice questions about {topic}.\n\
         Return ONLY a valid JSON object with this exact structure:\n\
         {{\n\
           \"questions\": [\n\
             {{\n\
               \"id\": 1,\n\
               \"question\": \"What is...\",\n\
               \"options\": [\"option1\", \"option2\", \"option3\", \"option4\"],\n\
               \"correctAnswer\": \"option2\"\n\
             }}\n\
           ]\n\
         }}\n\
         Requirements:\n\
         - The correctAnswer MUST exactly match one of the options\n\
         - Each question MUST have exactly {OPTIONS_PER_QUESTION} options\n\
         - Return ONLY the JSON, no other text or explanations\n\
         - Ensure the JSON is properly formatted and valid"
    );
    if !instructions.trim().is_empty() {
        prompt.push_str("\nAdditional instructions from the quiz author:\n");
        prompt.push_str(instructions.trim());
    }
    prompt
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "topK": TOP_K,
            "topP": TOP_P,
            "maxOutputTokens": MAX_OUTPUT_TOKENS,
        },
        "safetySettings": [
            {
                "category": "HARM_CATEGORY_HARASSMENT",
                "threshold": "BLOCK_MEDIUM_AND_ABOVE",
            },
            {
                "category": "HARM_CATEGORY_HATE_SPEECH",
                "threshold": "BLOCK_MEDIUM_AND_ABOVE",
            },
        ],
    })
}

fn endpoint_url(api_key: &str) -> String {
    format!("{API_BASE}/{MODEL}:generateContent?key={api_key}")
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: &Value) -> String {
    response["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn questions_from_text(text: &str) -> Result<Vec<QuizQuestion>, GenerationError> {
    if text.trim().is_empty() {
        warn!("empty response from model");
        return Err(GenerationError::EmptyResponse);
    }
    parse_questions_logged(text)
}

fn parse_questions_logged(text: &str) -> Result<Vec<QuizQuestion>, GenerationError> {
    match parse::parse_questions(text) {
        Ok(questions) => Ok(questions),
        Err(err) => {
            warn!("failed to parse model response: {err}");
            debug!("raw model response: {text}");
            Err(err.into())
        }
    }
}
