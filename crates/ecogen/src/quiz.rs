use crate::constants::*;
use crate::error::{EcoError, Result};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub label: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: Vec<QuizOption>,
}

impl Question {
    fn new(id: u32, prompt: &'static str, options: [(&'static str, u8); 4]) -> Self {
        Self {
            id,
            prompt,
            options: options
                .into_iter()
                .map(|(label, value)| QuizOption { label, value })
                .collect(),
        }
    }

    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// The four lead-generation questions. Each option scores 1 to 4, higher
/// meaning more room for improvement.
pub fn catalog() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "How many packaging items does your company use per month?",
            [
                ("Less than 1,000", 1),
                ("1,000 - 5,000", 2),
                ("5,000 - 10,000", 3),
                ("More than 10,000", 4),
            ],
        ),
        Question::new(
            2,
            "What type of packaging do you currently use most?",
            [
                ("Plastic packaging", 4),
                ("Mixed materials", 3),
                ("Some recycled content", 2),
                ("Fully sustainable materials", 1),
            ],
        ),
        Question::new(
            3,
            "How important is sustainability to your business?",
            [
                ("Not a priority", 1),
                ("Somewhat important", 2),
                ("Very important", 3),
                ("Critical to our mission", 4),
            ],
        ),
        Question::new(
            4,
            "What's your annual packaging budget?",
            [
                ("Under $10,000", 1),
                ("$10,000 - $50,000", 2),
                ("$50,000 - $200,000", 3),
                ("Over $200,000", 4),
            ],
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Asking(usize),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactLevel {
    Starter,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::Starter => "Starter Impact",
            ImpactLevel::Medium => "Medium Impact",
            ImpactLevel::High => "High Impact",
        }
    }

    pub fn savings_range(self) -> &'static str {
        match self {
            ImpactLevel::Starter => STARTER_SAVINGS,
            ImpactLevel::Medium => MEDIUM_SAVINGS,
            ImpactLevel::High => HIGH_SAVINGS,
        }
    }

    pub fn color(self) -> ImpactColor {
        match self {
            ImpactLevel::Starter => ImpactColor::Blue,
            ImpactLevel::Medium => ImpactColor::Yellow,
            ImpactLevel::High => ImpactColor::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactColor {
    Blue,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactResult {
    pub level: ImpactLevel,
    pub savings_range: &'static str,
    pub color: ImpactColor,
    pub total: u32,
    pub percentage: f32,
}

/// Buckets a summed score. Tier bounds are inclusive from below and compared
/// in integers so 50% and 75% land exactly on their tier.
pub fn classify(total: u32, max_score: u32) -> ImpactResult {
    let scaled = total * 100;
    let level = if scaled >= HIGH_IMPACT_PERCENT * max_score {
        ImpactLevel::High
    } else if scaled >= MEDIUM_IMPACT_PERCENT * max_score {
        ImpactLevel::Medium
    } else {
        ImpactLevel::Starter
    };
    let percentage = if max_score == 0 {
        0.0
    } else {
        scaled as f32 / max_score as f32
    };
    ImpactResult {
        level,
        savings_range: level.savings_range(),
        color: level.color(),
        total,
        percentage,
    }
}

/// One quiz session. Answers only move forward; a new session starts from a
/// fresh instance.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    questions: Vec<Question>,
    answers: Vec<u8>,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::start()
    }
}

impl QuizFlow {
    pub fn start() -> Self {
        Self {
            questions: catalog(),
            answers: Vec::with_capacity(QUESTION_COUNT),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.answers.len() >= self.questions.len() {
            QuizPhase::Complete
        } else {
            QuizPhase::Asking(self.answers.len())
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == QuizPhase::Complete
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase() {
            QuizPhase::Asking(index) => self.questions.get(index),
            QuizPhase::Complete => None,
        }
    }

    pub fn answers(&self) -> &[u8] {
        &self.answers
    }

    /// Fill of the progress bar while a question is on screen.
    pub fn progress(&self) -> f32 {
        let shown = match self.phase() {
            QuizPhase::Asking(index) => index + 1,
            QuizPhase::Complete => self.questions.len(),
        };
        shown as f32 / self.questions.len() as f32
    }

    pub fn answer(&mut self, value: u8) -> Result<QuizPhase> {
        let Some(question) = self.current_question() else {
            return Err(EcoError::QuizComplete);
        };
        if !question.accepts(value) {
            return Err(EcoError::InvalidAnswer {
                question: question.id,
                value,
            });
        }
        debug!("Question {} answered with {value}", question.id);

        self.answers.push(value);
        let phase = self.phase();
        if phase == QuizPhase::Complete {
            info!("Quiz complete with answers {:?}", self.answers);
        }
        Ok(phase)
    }

    pub fn result(&self) -> Result<ImpactResult> {
        if !self.is_complete() {
            return Err(EcoError::NotReady);
        }
        let total = self.answers.iter().map(|&a| a as u32).sum();
        let max_score = self.questions.len() as u32 * MAX_OPTION_VALUE as u32;
        Ok(classify(total, max_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn completed(answers: [u8; 4]) -> QuizFlow {
        let mut quiz = QuizFlow::start();
        for value in answers {
            quiz.answer(value).unwrap();
        }
        quiz
    }

    #[test]
    fn catalog_has_four_questions_scoring_one_to_four() {
        let questions = catalog();
        assert_eq!(questions.len(), QUESTION_COUNT);
        for question in &questions {
            let mut values: Vec<u8> = question.options.iter().map(|o| o.value).collect();
            values.sort_unstable();
            assert_eq!(values, vec![1, 2, 3, 4], "question {}", question.id);
        }
    }

    #[rstest]
    #[case([1, 1, 1, 1])]
    #[case([4, 3, 2, 1])]
    #[case([2, 4, 4, 3])]
    fn visits_every_question_in_order(#[case] answers: [u8; 4]) {
        let mut quiz = QuizFlow::start();
        assert_eq!(quiz.phase(), QuizPhase::Asking(0));

        let mut visited = vec![quiz.phase()];
        for value in answers {
            assert_eq!(quiz.answers().len(), visited.len() - 1);
            visited.push(quiz.answer(value).unwrap());
        }

        assert_eq!(
            visited,
            vec![
                QuizPhase::Asking(0),
                QuizPhase::Asking(1),
                QuizPhase::Asking(2),
                QuizPhase::Asking(3),
                QuizPhase::Complete,
            ]
        );
        assert_eq!(quiz.answers(), &answers);
    }

    #[rstest]
    #[case([4, 4, 4, 4], ImpactLevel::High, "40-60%")]
    #[case([1, 1, 1, 1], ImpactLevel::Starter, "10-25%")]
    #[case([2, 2, 2, 2], ImpactLevel::Medium, "25-40%")]
    #[case([3, 3, 3, 3], ImpactLevel::High, "40-60%")]
    #[case([1, 2, 2, 2], ImpactLevel::Starter, "10-25%")]
    #[case([3, 3, 3, 2], ImpactLevel::Medium, "25-40%")]
    fn buckets_by_percentage(
        #[case] answers: [u8; 4],
        #[case] level: ImpactLevel,
        #[case] savings: &str,
    ) {
        let result = completed(answers).result().unwrap();
        assert_eq!(result.level, level);
        assert_eq!(result.savings_range, savings);
        assert_eq!(result.color, level.color());
    }

    #[test]
    fn boundary_percentages_are_exact() {
        assert_eq!(completed([2, 2, 2, 2]).result().unwrap().percentage, 50.0);
        assert_eq!(completed([3, 3, 3, 3]).result().unwrap().percentage, 75.0);
        assert_eq!(completed([1, 1, 1, 1]).result().unwrap().total, 4);
    }

    #[test]
    fn result_is_stable_across_calls() {
        let quiz = completed([4, 2, 3, 1]);
        let first = quiz.result().unwrap();
        assert_eq!(quiz.result().unwrap(), first);
        assert_eq!(quiz.result().unwrap(), first);
    }

    #[test]
    fn result_before_completion_is_not_ready() {
        let mut quiz = QuizFlow::start();
        assert!(matches!(quiz.result(), Err(EcoError::NotReady)));
        quiz.answer(3).unwrap();
        assert!(matches!(quiz.result(), Err(EcoError::NotReady)));
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(255)]
    fn rejects_values_outside_the_options(#[case] value: u8) {
        let mut quiz = QuizFlow::start();
        let err = quiz.answer(value).unwrap_err();
        assert!(matches!(err, EcoError::InvalidAnswer { question: 1, value: v } if v == value));
        assert_eq!(quiz.phase(), QuizPhase::Asking(0));
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn answering_after_completion_fails() {
        let mut quiz = completed([1, 2, 3, 4]);
        assert!(matches!(quiz.answer(2), Err(EcoError::QuizComplete)));
        assert_eq!(quiz.answers().len(), 4);
    }

    #[test]
    fn progress_tracks_the_visible_question() {
        let mut quiz = QuizFlow::start();
        assert_eq!(quiz.progress(), 0.25);
        quiz.answer(1).unwrap();
        assert_eq!(quiz.progress(), 0.5);
        assert_eq!(quiz.current_question().map(|q| q.id), Some(2));
    }
}
