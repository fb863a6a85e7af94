use crate::commands::helpers::category_labels;
use crate::commands::CategoryQuestions;
use crate::error::Result;
use crate::pagination::Paginator;
use crate::store::DataStore;

/// Questions filed under `category_id`. Unknown ids fail with
/// [`TriviaError::CategoryNotFound`](crate::error::TriviaError::CategoryNotFound);
/// a known category with no questions is an empty success.
pub fn run<S: DataStore>(
    store: &S,
    paginator: &Paginator,
    category_id: i64,
    page: i64,
) -> Result<CategoryQuestions> {
    let category = store.get_category(category_id)?;
    let matching = store.questions_in_category(category.id)?;
    Ok(CategoryQuestions {
        categories: category_labels(store)?,
        current_category: category.label,
        questions: paginator.paginate(page, &matching),
        total_questions: matching.len(),
    })
}
