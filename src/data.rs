use crate::model::QuizQuestion;

/// Loads the bundled sample bank from the embedded YAML.
fn sample_bank() -> Vec<QuizQuestion> {
    let file_content = include_str!("data/sample_questions.yaml");
    serde_yaml::from_str(file_content).expect("bundled sample question bank must parse")
}

/// Fallback questions for a session of `count` questions: the bank
/// truncated to `count` (or the whole bank when `count` exceeds it),
/// ids renumbered 1..n.
pub fn sample_questions(count: usize) -> Vec<QuizQuestion> {
    let mut questions = sample_bank();
    questions.truncate(count);
    for (i, q) in questions.iter_mut().enumerate() {
        q.id = (i + 1) as u32;
    }
    questions
}
