use super::DataStore;
use crate::error::{Result, TriviaError};
use crate::model::{Category, NewQuestion, Question};

/// In-memory store for tests and throwaway servers.
///
/// Rows live in id-ordered vectors, so listings need no sorting.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_question_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category(&self, id: i64) -> Result<Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(TriviaError::CategoryNotFound(id))
    }

    fn insert_category(&mut self, id: Option<i64>, label: &str) -> Result<Category> {
        let id = match id {
            Some(id) if self.categories.iter().any(|c| c.id == id) => {
                return Err(TriviaError::Store(format!("Category {} already exists", id)));
            }
            Some(id) => id,
            None => self.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1,
        };
        let category = Category {
            id,
            label: label.to_string(),
        };
        let pos = self.categories.partition_point(|c| c.id < id);
        self.categories.insert(pos, category.clone());
        Ok(category)
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.questions.clone())
    }

    fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn get_question(&self, id: i64) -> Result<Question> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(TriviaError::QuestionNotFound(id))
    }

    fn insert_question(&mut self, question: NewQuestion) -> Result<Question> {
        self.last_question_id += 1;
        let stored = question.into_question(self.last_question_id);
        self.questions.push(stored.clone());
        Ok(stored)
    }

    fn delete_question(&mut self, id: i64) -> Result<()> {
        let pos = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(TriviaError::QuestionNotFound(id))?;
        self.questions.remove(pos);
        Ok(())
    }

    fn count_questions(&self) -> Result<usize> {
        Ok(self.questions.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::QuestionDraft;

    /// A dozen questions spread over the default categories. Exactly two
    /// question texts contain "title"; category 5 holds three.
    pub const SAMPLE_QUESTIONS: [(&str, &str, i64, i64); 12] = [
        ("Whose autobiography is 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
        ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
        ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
        ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
        ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
        ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
        ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
        ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
        ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
        ("Whose title is 'La Giaconda'?", "Mona Lisa", 3, 2),
        ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ];

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Empty store with the default categories.
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.seed_default_categories().unwrap();
            Self { store }
        }

        pub fn with_sample_questions(mut self) -> Self {
            for (question, answer, difficulty, category) in SAMPLE_QUESTIONS {
                let draft = QuestionDraft::new(question, answer, difficulty, category);
                self.store.insert_question(draft.validate().unwrap()).unwrap();
            }
            self
        }

        /// `count` numbered questions, all in `category`.
        pub fn with_questions(mut self, count: usize, category: i64) -> Self {
            for i in 0..count {
                let draft = QuestionDraft::new(
                    &format!("Generated question {}", i + 1),
                    &format!("Answer {}", i + 1),
                    1,
                    category,
                );
                self.store.insert_question(draft.validate().unwrap()).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{StoreFixture, SAMPLE_QUESTIONS};
    use super::*;
    use crate::model::QuestionDraft;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        QuestionDraft::new(text, "answer", 1, category)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_delete_not_found() {
        let mut store = InMemoryStore::new();
        match store.delete_question(42) {
            Err(TriviaError::QuestionNotFound(id)) => assert_eq!(id, 42),
            _ => panic!("Expected QuestionNotFound"),
        }
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::new();
        let first = store.insert_question(new_question("one", 1)).unwrap();
        let second = store.insert_question(new_question("two", 1)).unwrap();
        store.delete_question(second.id).unwrap();
        let third = store.insert_question(new_question("three", 1)).unwrap();
        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }

    #[test]
    fn test_search_ignores_case() {
        let mut store = InMemoryStore::new();
        store.insert_question(new_question("What is the TITLE?", 1)).unwrap();
        store.insert_question(new_question("Unrelated", 1)).unwrap();
        let found = store.search_questions("title").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "What is the TITLE?");
    }

    #[test]
    fn test_categories_stay_ordered() {
        let mut store = InMemoryStore::new();
        store.insert_category(Some(3), "C").unwrap();
        store.insert_category(Some(1), "A").unwrap();
        let next = store.insert_category(None, "D").unwrap();
        assert_eq!(next.id, 4);
        let ids: Vec<i64> = store.list_categories().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_duplicate_category_id_rejected() {
        let mut store = InMemoryStore::new();
        store.insert_category(Some(1), "A").unwrap();
        assert!(matches!(
            store.insert_category(Some(1), "B"),
            Err(TriviaError::Store(_))
        ));
    }

    #[test]
    fn test_seed_only_once() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.seed_default_categories().unwrap(), 6);
        assert_eq!(store.seed_default_categories().unwrap(), 0);
        assert_eq!(store.get_category(5).unwrap().label, "Entertainment");
    }

    #[test]
    fn test_fixtures_coverage() {
        let fixture = StoreFixture::default()
            .with_sample_questions()
            .with_questions(3, 2);
        assert_eq!(
            fixture.store.count_questions().unwrap(),
            SAMPLE_QUESTIONS.len() + 3
        );
        assert_eq!(fixture.store.questions_in_category(5).unwrap().len(), 3);
        assert_eq!(fixture.store.search_questions("title").unwrap().len(), 2);
    }
}
