use std::collections::BTreeMap;

use crate::domain::category::Category;

/// Category labels keyed by id; serialises as a JSON object ordered by id.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id.get(), c.kind.into_inner()))
        .collect()
}
