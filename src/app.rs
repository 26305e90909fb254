use crate::grading::{self, GradeReport, Submission};
use crate::models::{AppState, Mcq};

/// Terminal quiz session over one generated batch.
///
/// Questions carry between one and four options, so the option cursor wraps
/// modulo the current question's option count rather than a fixed width.
pub struct App {
    pub state: AppState,
    mcqs: Vec<Mcq>,
    current_question_index: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    result_scroll: usize,
    report: Option<GradeReport>,
}

impl App {
    pub fn with_questions(mcqs: Vec<Mcq>) -> Self {
        let num_questions = mcqs.len();

        Self {
            state: AppState::Welcome,
            mcqs,
            current_question_index: 0,
            selected_option: 0,
            answers: vec![None; num_questions],
            result_scroll: 0,
            report: None,
        }
    }

    pub fn current_question(&self) -> &Mcq {
        &self.mcqs[self.current_question_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.mcqs.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn questions(&self) -> &[Mcq] {
        &self.mcqs
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Graded report; present once the quiz reaches the result screen.
    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_question().options.len();
        self.selected_option = (self.selected_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_question().options.len();
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
    }

    pub fn submit_answer(&mut self) {
        self.answers[self.current_question_index] = Some(self.selected_option);
        self.current_question_index += 1;
        self.selected_option = 0;

        if self.current_question_index >= self.mcqs.len() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let submissions: Vec<Submission> = self
            .mcqs
            .iter()
            .zip(self.answers.iter())
            .map(|(mcq, answer)| Submission {
                id: mcq.id,
                question: mcq.question.clone(),
                selected: answer.map(|index| mcq.options[index].clone()),
                answer: mcq.answer.clone(),
            })
            .collect();
        self.report = Some(grading::grade(&submissions));
        self.state = AppState::Result;
    }

    pub fn score(&self) -> usize {
        self.report.as_ref().map_or(0, |report| report.score)
    }

    pub fn scroll_results_down(&mut self) {
        let max = self.mcqs.len().saturating_sub(1);
        if self.result_scroll < max {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Retake the same batch from the top.
    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.answers = vec![None; self.mcqs.len()];
        self.result_scroll = 0;
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::BLANK;

    fn sample_batch() -> Vec<Mcq> {
        vec![
            Mcq {
                id: 0,
                question: format!("The {} sat on the mat.", BLANK),
                options: vec!["dog".into(), "cat".into(), "park".into()],
                answer: "cat".into(),
            },
            Mcq {
                id: 1,
                question: format!("The dog ran in the {}.", BLANK),
                options: vec!["park".into(), "mat".into()],
                answer: "park".into(),
            },
        ]
    }

    #[test]
    fn full_take_through_grades_the_batch() {
        let mut app = App::with_questions(sample_batch());
        assert_eq!(app.state, AppState::Welcome);

        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        // Pick "cat" (correct) for question 0.
        app.select_next_option();
        app.submit_answer();
        assert_eq!(app.state, AppState::Quiz);

        // Pick "mat" (incorrect) for question 1.
        app.select_next_option();
        app.submit_answer();

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.score(), 1);
        let report = app.report().expect("graded report");
        assert!(report.results[0].is_correct);
        assert!(!report.results[1].is_correct);
        assert_eq!(report.results[1].your_answer.as_deref(), Some("mat"));
    }

    #[test]
    fn option_cursor_wraps_modulo_option_count() {
        let mut app = App::with_questions(sample_batch());
        app.start_quiz();

        app.select_next_option();
        app.select_next_option();
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);

        app.select_previous_option();
        assert_eq!(app.selected_option(), 2);
    }

    #[test]
    fn restart_clears_progress_and_report() {
        let mut app = App::with_questions(sample_batch());
        app.start_quiz();
        app.submit_answer();
        app.submit_answer();
        assert!(app.report().is_some());

        app.restart();
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.current_question_number(), 1);
        assert!(app.report().is_none());
        assert!(app.answers().iter().all(Option::is_none));
    }
}
