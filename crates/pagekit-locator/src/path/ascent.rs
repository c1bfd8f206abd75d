/// Lazy iterator over the ancestor directories of a page path.
///
/// For page `/Pages/Customers/Edit`, yields `Pages/Customers/` →
/// `Pages/` → `` (the empty prefix for the pages root itself). Each
/// item is the directory portion with the page's leading separator
/// stripped and a trailing separator kept, ready to be substituted for
/// a `{1}/` marker in a location template.
///
/// The walk is bounded by the number of `/`-separated segments and
/// stops after the root level; nothing past the pages root is ever
/// produced.
///
/// # Examples
///
/// ```
/// use pagekit_locator::path::DirectoryAscent;
///
/// let dirs: Vec<&str> = DirectoryAscent::new("/Customers/Add").collect();
/// assert_eq!(dirs, vec!["Customers/", ""]);
/// ```
///
/// Items are borrowed slices of the input; the iterator allocates
/// nothing and is safe to re-create for deterministic re-runs.
pub struct DirectoryAscent<'a> {
    page: &'a str,
    end: usize,
}

impl<'a> DirectoryAscent<'a> {
    /// Starts an ascent from the full page path.
    ///
    /// Expects a canonical path (leading `/`, no doubled separators);
    /// see [`normalize_path`](crate::path::normalize_path). A path
    /// with no separator at all yields nothing.
    pub fn new(page: &'a str) -> Self {
        Self {
            page,
            end: page.len(),
        }
    }
}

impl<'a> Iterator for DirectoryAscent<'a> {
    type Item = &'a str;

    /// Returns the next ancestor directory, deepest first.
    ///
    /// Each step locates the previous `/` strictly before the current
    /// cut point and yields the slice between the leading separator
    /// and that `/` (inclusive). The cut point then moves onto the
    /// found separator, so the step after the shallowest directory
    /// yields the empty prefix and the one after that ends iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.end == 0 {
            return None;
        }

        match self.page[..self.end].rfind('/') {
            Some(pos) => {
                self.end = pos;
                Some(&self.page[1..pos + 1])
            }
            None => {
                self.end = 0;
                None
            }
        }
    }
}

impl<'a> Clone for DirectoryAscent<'a> {
    fn clone(&self) -> Self {
        Self {
            page: self.page,
            end: self.end,
        }
    }
}
