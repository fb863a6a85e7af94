use crate::commands::helpers::question_page;
use crate::commands::Deleted;
use crate::error::{Result, TriviaError};
use crate::pagination::Paginator;
use crate::store::DataStore;
use tracing::info;

/// Deletes question `id` and returns its last snapshot with a fresh listing page.
///
/// A missing target, including one that disappears between the lookup and
/// the delete, fails with [`TriviaError::DeleteTargetMissing`].
pub fn run<S: DataStore>(
    store: &mut S,
    paginator: &Paginator,
    id: i64,
    page: i64,
) -> Result<Deleted> {
    let snapshot = store.get_question(id).map_err(|e| missing_target(e, id))?;
    store.delete_question(id).map_err(|e| missing_target(e, id))?;
    info!(id, "question deleted");

    Ok(Deleted {
        deleted: snapshot.id,
        question: snapshot,
        page: question_page(store, paginator, page)?,
    })
}

fn missing_target(err: TriviaError, id: i64) -> TriviaError {
    match err {
        TriviaError::QuestionNotFound(_) => TriviaError::DeleteTargetMissing(id),
        other => other,
    }
}
