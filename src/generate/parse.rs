use serde_json::Value;
use thiserror::Error;

use crate::model::{OPTIONS_PER_QUESTION, QuizQuestion};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in response")]
    NoJsonFound,

    #[error("malformed JSON in response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("response JSON has no `questions` array")]
    MissingQuestionsArray,

    #[error("question {index}: {reason}")]
    SchemaViolation { index: usize, reason: String },
}

/// Extracts structured questions from free-form model output.
///
/// The model is told to emit only JSON but routinely wraps it in prose
/// or code fences, so the first balanced `{...}` substring is located
/// and parsed. Ids are reassigned from the 1-based position; whatever
/// the model put in `id` is ignored so ids stay dense and unique. One
/// invalid question rejects the whole batch.
pub fn parse_questions(raw: &str) -> Result<Vec<QuizQuestion>, ParseError> {
    let start = raw.find('{').ok_or(ParseError::NoJsonFound)?;
    // An opening brace that never balances is handed to serde_json
    // whole, so the failure surfaces as a syntax error.
    let json_text = extract_json_object(&raw[start..]).unwrap_or(&raw[start..]);
    let value: Value = serde_json::from_str(json_text)?;

    let entries = value
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingQuestionsArray)?;

    let mut questions = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        questions.push(question_from_value(entry, i + 1)?);
    }
    Ok(questions)
}

fn question_from_value(entry: &Value, id: usize) -> Result<QuizQuestion, ParseError> {
    let violation = |reason: &str| ParseError::SchemaViolation {
        index: id,
        reason: reason.to_owned(),
    };

    let question = entry
        .get("question")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| violation("missing or empty `question` text"))?;

    let options: Vec<String> = entry
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| violation("missing `options` array"))?
        .iter()
        .map(|o| {
            o.as_str()
                .map(str::to_owned)
                .ok_or_else(|| violation("non-string entry in `options`"))
        })
        .collect::<Result<_, _>>()?;

    if options.len() != OPTIONS_PER_QUESTION {
        return Err(violation(&format!(
            "expected {} options, got {}",
            OPTIONS_PER_QUESTION,
            options.len()
        )));
    }

    let correct_answer = entry
        .get("correctAnswer")
        .and_then(Value::as_str)
        .ok_or_else(|| violation("missing `correctAnswer`"))?;

    if !options.iter().any(|o| o == correct_answer) {
        return Err(violation("`correctAnswer` is not one of the options"));
    }

    Ok(QuizQuestion {
        id: id as u32,
        question: question.to_owned(),
        options,
        correct_answer: correct_answer.to_owned(),
    })
}

/// Returns the first balanced `{...}` substring of `raw` (which must
/// start at an opening brace), tracking string literals and escapes so
/// braces inside strings don't count.
fn extract_json_object(raw: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[..offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
