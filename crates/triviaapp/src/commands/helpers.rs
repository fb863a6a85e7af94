use crate::commands::QuestionPage;
use crate::error::Result;
use crate::model::Question;
use crate::pagination::Paginator;
use crate::store::DataStore;

pub fn category_labels<S: DataStore>(store: &S) -> Result<Vec<String>> {
    Ok(store
        .list_categories()?
        .into_iter()
        .map(|c| c.label)
        .collect())
}

/// Category of each question, in order, duplicates kept.
pub fn current_categories(questions: &[Question]) -> Vec<i64> {
    questions.iter().map(|q| q.category).collect()
}

/// Page `page` of all questions, plus totals and category labels.
/// An empty page is returned as is; callers decide whether that is an error.
pub fn question_page<S: DataStore>(
    store: &S,
    paginator: &Paginator,
    page: i64,
) -> Result<QuestionPage> {
    let all = store.list_questions()?;
    let questions = paginator.paginate(page, &all);
    Ok(QuestionPage {
        current_category: current_categories(&questions),
        total_questions: all.len(),
        categories: category_labels(store)?,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn page_reports_total_and_categories() {
        let fixture = StoreFixture::new().with_questions(13, 2);
        let page = question_page(&fixture.store, &Paginator::default(), 2).unwrap();
        assert_eq!(page.questions.len(), 3);
        assert_eq!(page.total_questions, 13);
        assert_eq!(page.categories.len(), 6);
        assert_eq!(page.current_category, vec![2, 2, 2]);
    }

    #[test]
    fn empty_page_is_not_an_error_here() {
        let fixture = StoreFixture::new();
        let page = question_page(&fixture.store, &Paginator::default(), 1).unwrap();
        assert!(page.questions.is_empty());
        assert_eq!(page.total_questions, 0);
    }
}
