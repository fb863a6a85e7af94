//! Quiz draws.
//!
//! The candidate pool is every question, or the questions of one category.
//! Previously served ids are removed *before* sampling, so a draw never repeats
//! a question. When the pool is non-empty but fully served the result is
//! `question: None`, which clients read as the end of the quiz. An empty pool
//! (no questions at all for the selector) is a client error.

use crate::commands::QuizResult;
use crate::error::{Result, TriviaError};
use crate::model::{Question, QuizRequest, ALL_CATEGORIES};
use crate::store::DataStore;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, warn};

pub fn candidate_pool<S: DataStore>(store: &S, category: i64) -> Result<Vec<Question>> {
    if category == ALL_CATEGORIES {
        store.list_questions()
    } else {
        store.questions_in_category(category)
    }
}

pub fn run<S: DataStore, R: Rng + ?Sized>(
    store: &S,
    request: &QuizRequest,
    rng: &mut R,
) -> Result<QuizResult> {
    let category = request.category_id()?;
    let pool = candidate_pool(store, category)?;
    if pool.is_empty() {
        warn!(category, "quiz requested for an empty pool");
        return Err(TriviaError::EmptyQuizPool(category));
    }

    let served: HashSet<i64> = request
        .previous_questions
        .iter()
        .flatten()
        .copied()
        .collect();
    let unseen: Vec<&Question> = pool.iter().filter(|q| !served.contains(&q.id)).collect();
    debug!(
        category,
        pool = pool.len(),
        unseen = unseen.len(),
        "drawing quiz question"
    );

    Ok(QuizResult {
        question: unseen.choose(rng).map(|q| (*q).clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn draws_from_requested_category() {
        let fixture = StoreFixture::new().with_sample_questions();
        let mut rng = rng();
        for _ in 0..20 {
            let result = run(&fixture.store, &QuizRequest::new(vec![], 5), &mut rng).unwrap();
            assert_eq!(result.question.unwrap().category, 5);
        }
    }

    #[test]
    fn all_categories_draws_from_everything() {
        let fixture = StoreFixture::new().with_sample_questions();
        let mut rng = rng();
        let mut categories = HashSet::new();
        for _ in 0..200 {
            let result = run(
                &fixture.store,
                &QuizRequest::new(vec![], ALL_CATEGORIES),
                &mut rng,
            )
            .unwrap();
            categories.insert(result.question.unwrap().category);
        }
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn empty_pool_is_bad_request() {
        let fixture = StoreFixture::new().with_questions(3, 1);
        let err = run(&fixture.store, &QuizRequest::new(vec![], 6), &mut rng()).unwrap_err();
        assert!(matches!(err, TriviaError::EmptyQuizPool(6)));
        assert_eq!(err.kind().status_code(), 400);
    }

    #[test]
    fn unknown_category_is_an_empty_pool() {
        let fixture = StoreFixture::new().with_sample_questions();
        assert!(matches!(
            run(&fixture.store, &QuizRequest::new(vec![], 42), &mut rng()),
            Err(TriviaError::EmptyQuizPool(42))
        ));
    }

    #[test]
    fn missing_category_selector_is_invalid() {
        let fixture = StoreFixture::new().with_sample_questions();
        let request = QuizRequest::default();
        assert!(matches!(
            run(&fixture.store, &request, &mut rng()),
            Err(TriviaError::InvalidRequest(_))
        ));
    }

    // Exclusion happens before sampling: a served question can never come back,
    // and a fully served pool ends the quiz instead of returning a repeat.
    #[test]
    fn previously_served_questions_are_never_drawn() {
        let fixture = StoreFixture::new().with_sample_questions();
        let mut rng = rng();
        let mut served = Vec::new();

        loop {
            let result = run(
                &fixture.store,
                &QuizRequest::new(served.clone(), 5),
                &mut rng,
            )
            .unwrap();
            match result.question {
                Some(q) => {
                    assert!(!served.contains(&q.id));
                    served.push(q.id);
                }
                None => break,
            }
        }

        assert_eq!(served.len(), 3);
    }

    #[test]
    fn only_one_unseen_question_is_always_chosen() {
        let fixture = StoreFixture::new().with_questions(3, 2);
        let mut rng = rng();
        for _ in 0..10 {
            let result = run(&fixture.store, &QuizRequest::new(vec![1, 3], 2), &mut rng).unwrap();
            assert_eq!(result.question.unwrap().id, 2);
        }
    }

    #[test]
    fn fully_served_pool_returns_no_question() {
        let fixture = StoreFixture::new().with_questions(2, 1);
        let result = run(&fixture.store, &QuizRequest::new(vec![1, 2], 1), &mut rng()).unwrap();
        assert!(result.is_exhausted());
    }

    #[test]
    fn same_seed_gives_same_draws() {
        let fixture = StoreFixture::new().with_sample_questions();
        let request = QuizRequest::new(vec![], ALL_CATEGORIES);
        let draw = |seed: u64| -> Vec<i64> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| {
                    run(&fixture.store, &request, &mut rng)
                        .unwrap()
                        .question
                        .unwrap()
                        .id
                })
                .collect()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn null_previous_questions_means_none_served() {
        let fixture = StoreFixture::new().with_questions(1, 1);
        let request: QuizRequest =
            serde_json::from_str(r#"{"previous_questions": null, "quiz_category": {"id": 1}}"#)
                .unwrap();
        let result = run(&fixture.store, &request, &mut rng()).unwrap();
        assert_eq!(result.question.unwrap().id, 1);
    }
}
