/// Computes one page of `entries` along with the page count and the page
/// actually served.
///
/// `page` and `page_size` are clamped to at least 1. A `page` beyond the last
/// page of a non-empty collection is clamped down to the last page rather
/// than producing an empty slice.
pub fn paginate<T>(entries: Vec<T>, page: usize, page_size: usize) -> (Vec<T>, usize, usize) {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let total_pages = entries.len().div_ceil(page_size);
    let page = if total_pages > 0 {
        page.min(total_pages)
    } else {
        page
    };

    let skip = (page - 1) * page_size;
    let slice = entries.into_iter().skip(skip).take(page_size).collect();

    (slice, total_pages, page)
}
