use crate::commands::helpers::category_labels;
use crate::commands::CategoryList;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CategoryList> {
    Ok(CategoryList {
        categories: category_labels(store)?,
    })
}
