use crate::commands::QuestionDetail;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: i64) -> Result<QuestionDetail> {
    Ok(QuestionDetail {
        question: store.get_question(id)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriviaError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn fetches_existing_question() {
        let fixture = StoreFixture::new().with_sample_questions();
        let detail = run(&fixture.store, 3).unwrap();
        assert_eq!(detail.question.answer, "Apollo 13");
    }

    #[test]
    fn missing_question_is_not_found() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.store, 1),
            Err(TriviaError::QuestionNotFound(1))
        ));
    }
}
