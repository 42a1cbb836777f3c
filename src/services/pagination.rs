use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::error::AppResult;

/// A 1-based page of `page_size` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
}

impl PageWindow {
    /// 0-based offset of the first record in the window, `None` when it lies beyond any
    /// offset the store can address. Such a window is past the end of every result set.
    pub fn start_index(&self) -> Option<u64> {
        (self.page.max(1) - 1)
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

#[derive(Debug)]
pub struct Page<T> {
    pub total_count: i64,
    pub items: Vec<T>,
    pub window: PageWindow,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_count: self.total_count,
            items: self.items.into_iter().map(f).collect(),
            window: self.window,
        }
    }
}

/// Count the whole result set of `finder` and return the records in
/// `[start_index, start_index + page_size)`.
///
/// `finder` must carry a total ordering; the window is applied as offset/limit by the store,
/// which is observably the same as slicing the fully collected set.
pub async fn list_page<E, C>(db: &C, finder: Select<E>, window: PageWindow) -> AppResult<Page<E::Model>>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
    C: ConnectionTrait,
{
    let total_count = i64::try_from(finder.clone().count(db).await?).unwrap_or(i64::MAX);

    let items = match window.start_index() {
        Some(offset) => {
            finder
                .offset(offset)
                .limit(window.page_size)
                .all(db)
                .await?
        }
        None => Vec::new(),
    };

    tracing::debug!(
        total_count,
        page = window.page,
        page_size = window.page_size,
        returned = items.len(),
        "listed page"
    );

    Ok(Page {
        total_count,
        items,
        window,
    })
}
