use crate::commands::helpers::current_categories;
use crate::commands::SearchResult;
use crate::error::Result;
use crate::pagination::Paginator;
use crate::store::DataStore;
use tracing::debug;

/// Questions whose text contains `term`, ignoring case. No match is a valid,
/// empty result.
pub fn run<S: DataStore>(
    store: &S,
    paginator: &Paginator,
    term: &str,
    page: i64,
) -> Result<SearchResult> {
    let matches = store.search_questions(term)?;
    debug!(term, matches = matches.len(), "search");
    let questions = paginator.paginate(page, &matches);
    Ok(SearchResult {
        current_category: current_categories(&questions),
        total_questions: matches.len(),
        questions,
    })
}
