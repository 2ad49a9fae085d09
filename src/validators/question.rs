//! Trivia question validators.

use validator::ValidationError;

use crate::constants::{ERR_BLANK_ANSWER, ERR_BLANK_QUESTION};

use super::require_text;

/// Question text must contain something other than whitespace.
pub fn validate_question_text(question: &str) -> Result<(), ValidationError> {
    require_text(question, ERR_BLANK_QUESTION)
}

/// Answer must contain something other than whitespace.
pub fn validate_answer_text(answer: &str) -> Result<(), ValidationError> {
    require_text(answer, ERR_BLANK_ANSWER)
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use crate::constants::{ERR_BLANK_ANSWER, ERR_DIFFICULTY_RANGE};
    use crate::errors::ApiError;
    use crate::models::CreateQuestionRequest;
    use crate::validators::validation_errors_to_api_error;

    fn request(question: &str, answer: &str, difficulty: i32) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: question.to_string(),
            answer: answer.to_string(),
            category: 1,
            difficulty,
        }
    }

    #[test]
    fn test_valid_question_passes() {
        assert!(request("How many spoons in a dish?", "9", 3).validate().is_ok());
    }

    #[test]
    fn test_blank_answer_rejected() {
        let err = request("How many spoons in a dish?", "   ", 3)
            .validate()
            .unwrap_err();
        match validation_errors_to_api_error(err) {
            ApiError::ValidationError { errors, .. } => {
                assert_eq!(errors, vec![ERR_BLANK_ANSWER.to_string()]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_difficulty_out_of_range_rejected() {
        for difficulty in [0, 6] {
            let err = request("Q?", "A", difficulty).validate().unwrap_err();
            match validation_errors_to_api_error(err) {
                ApiError::ValidationError { errors, .. } => {
                    assert_eq!(errors, vec![ERR_DIFFICULTY_RANGE.to_string()]);
                }
                other => panic!("unexpected error: {}", other),
            }
        }
    }
}
