use crate::commands::helpers::question_page;
use crate::commands::QuestionPage;
use crate::error::{Result, TriviaError};
use crate::pagination::Paginator;
use crate::store::DataStore;
use tracing::debug;

/// One page of every question, ordered by id.
///
/// Fails with [`TriviaError::EmptyPage`] when the page holds nothing, which
/// includes any page past the last one.
pub fn run<S: DataStore>(store: &S, paginator: &Paginator, page: i64) -> Result<QuestionPage> {
    let result = question_page(store, paginator, page)?;
    if result.questions.is_empty() {
        debug!(page, total = result.total_questions, "requested page is empty");
        return Err(TriviaError::EmptyPage(page));
    }
    Ok(result)
}
