//! List and filter handlers

use crate::TodoHandler;
use crate::formatting;
use crate::todo::Filter;
use chrono::NaiveDate;

impl TodoHandler {
    /// Render a view without changing the active filter
    ///
    /// # Arguments
    /// * `filter` - View to render; `None` renders the active filter
    /// * `today` - Reference date for today/overdue/scheduled
    pub fn handle_list(&self, filter: Option<Filter>, today: NaiveDate) -> String {
        let filter = filter.unwrap_or(self.active_filter);
        formatting::render_view(&self.list.view(filter, today))
    }

    /// Make `filter` the active filter and render it
    pub fn handle_filter(&mut self, filter: Filter, today: NaiveDate) -> String {
        self.set_active_filter(filter);
        formatting::render_view(&self.current_view(today))
    }
}
