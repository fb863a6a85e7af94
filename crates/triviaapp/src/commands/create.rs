use crate::commands::helpers::question_page;
use crate::commands::Created;
use crate::error::{Result, TriviaError};
use crate::model::{NewQuestion, QuestionDraft};
use crate::pagination::Paginator;
use crate::store::DataStore;
use tracing::info;

/// Validates a draft. With `strict_categories`, the category must exist.
pub fn validate<S: DataStore>(
    store: &S,
    draft: QuestionDraft,
    strict_categories: bool,
) -> Result<NewQuestion> {
    let question = draft.validate()?;
    if strict_categories {
        match store.get_category(question.category) {
            Ok(_) => {}
            Err(TriviaError::CategoryNotFound(id)) => return Err(TriviaError::UnknownCategory(id)),
            Err(e) => return Err(e),
        }
    }
    Ok(question)
}

pub fn run<S: DataStore>(
    store: &mut S,
    paginator: &Paginator,
    draft: QuestionDraft,
    page: i64,
    strict_categories: bool,
) -> Result<Created> {
    let new_question = validate(store, draft, strict_categories)?;
    let stored = store.insert_question(new_question)?;
    info!(id = stored.id, category = stored.category, "question created");

    Ok(Created {
        created: stored.id,
        page: question_page(store, paginator, page)?,
    })
}
