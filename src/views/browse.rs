use crate::client::{ClientResult, RecipeSource};
use crate::models::{Category, RecipeRow};
use crate::views::messages;

/// Which list page the state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMode {
    /// Home page: free-text search and toggleable category buttons
    Home,
    /// Category browser: one category selected at a time, first one on mount
    Categories,
}

/// Filters captured when a fetch starts.
///
/// Only the ticket of the most recent fetch may write its result back, so a
/// slow response to an older filter can never replace newer results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub search: String,
    pub category_id: String,
}

/// State of a recipe list view
#[derive(Debug, Clone)]
pub struct BrowseView {
    mode: BrowseMode,
    categories: Vec<Category>,
    search_term: String,
    selected_category: String,
    recipes: Vec<RecipeRow>,
    loading: bool,
    error: Option<&'static str>,
    generation: u64,
}

impl BrowseView {
    pub fn new(mode: BrowseMode) -> Self {
        Self {
            mode,
            categories: Vec::new(),
            search_term: String::new(),
            selected_category: String::new(),
            recipes: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }

    pub fn home() -> Self {
        Self::new(BrowseMode::Home)
    }

    pub fn categories_page() -> Self {
        Self::new(BrowseMode::Categories)
    }

    /// Load categories, then the first page of recipes
    pub async fn mount<S: RecipeSource>(&mut self, source: &S) {
        self.loading = true;

        let categories = match source.categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::error!("Failed to load categories: {}", e);
                self.fail(self.initial_error());
                return;
            }
        };

        if self.mode == BrowseMode::Categories && self.selected_category.is_empty() {
            if let Some(first) = categories.first() {
                self.selected_category = first.id.to_string();
            }
        }
        self.categories = categories;

        let ticket = self.begin_fetch();
        let result = source.recipes(&ticket.search, &ticket.category_id).await;
        if let Err(e) = &result {
            tracing::error!("Failed to load recipes: {}", e);
            self.fail(self.initial_error());
            return;
        }
        self.finish_fetch(&ticket, result);
    }

    /// Search by free text. Clears the category filter.
    pub fn search(&mut self, term: &str) -> FetchTicket {
        self.search_term = term.to_string();
        self.selected_category.clear();
        self.begin_fetch()
    }

    /// Select a category. Clears the search term.
    ///
    /// On the home page selecting the active category again clears it.
    pub fn select_category(&mut self, category_id: &str) -> FetchTicket {
        if self.mode == BrowseMode::Home && self.selected_category == category_id {
            self.selected_category.clear();
        } else {
            self.selected_category = category_id.to_string();
        }
        self.search_term.clear();
        self.begin_fetch()
    }

    /// Drop both filters
    pub fn reset(&mut self) -> FetchTicket {
        self.search_term.clear();
        self.selected_category.clear();
        self.begin_fetch()
    }

    /// Start a fetch for the current filters
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            search: self.search_term.clone(),
            category_id: self.selected_category.clone(),
        }
    }

    /// Apply the result of a fetch. Returns false if a newer fetch superseded it.
    pub fn finish_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: ClientResult<Vec<RecipeRow>>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale recipe response (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Failed to fetch recipes: {}", e);
                self.error = Some(self.refetch_error());
            }
        }
        true
    }

    /// Run a fetch to completion
    pub async fn fetch<S: RecipeSource>(&mut self, ticket: FetchTicket, source: &S) -> bool {
        let result = source.recipes(&ticket.search, &ticket.category_id).await;
        self.finish_fetch(&ticket, result)
    }

    pub fn heading(&self) -> String {
        if !self.search_term.is_empty() {
            return messages::heading_search(&self.search_term);
        }
        let name = self.selected_category_name();
        match self.mode {
            BrowseMode::Home if self.selected_category.is_empty() => {
                messages::HEADING_LATEST.to_string()
            }
            BrowseMode::Home => messages::heading_category(name.unwrap_or_default()),
            BrowseMode::Categories if self.selected_category.is_empty() => {
                messages::heading_in_category(messages::ALL_CATEGORIES)
            }
            BrowseMode::Categories => messages::heading_in_category(name.unwrap_or_default()),
        }
    }

    pub fn selected_category_name(&self) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id.to_string() == self.selected_category)
            .map(|c| c.name.as_str())
    }

    /// Whether a "show all recipes" control should be offered
    pub fn has_active_filter(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_category.is_empty()
    }

    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn recipes(&self) -> &[RecipeRow] {
        &self.recipes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    fn fail(&mut self, message: &'static str) {
        self.loading = false;
        self.error = Some(message);
    }

    fn initial_error(&self) -> &'static str {
        match self.mode {
            BrowseMode::Home => messages::ERR_LOAD_INITIAL,
            BrowseMode::Categories => messages::ERR_LOAD_CATEGORY_PAGE,
        }
    }

    fn refetch_error(&self) -> &'static str {
        match self.mode {
            BrowseMode::Home => messages::ERR_LOAD_RECIPES,
            BrowseMode::Categories => messages::ERR_LOAD_CATEGORY_RECIPES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::FakeSource;

    #[tokio::test]
    async fn test_mount_loads_categories_and_latest_recipes() {
        let source = FakeSource::seeded();
        let mut view = BrowseView::home();

        view.mount(&source).await;

        assert!(!view.is_loading());
        assert_eq!(view.error(), None);
        assert_eq!(view.categories().len(), 2);
        assert_eq!(view.recipes().len(), 3);
        assert_eq!(view.heading(), "Resep Terbaru");
    }

    #[tokio::test]
    async fn test_search_clears_category() {
        let source = FakeSource::seeded();
        let mut view = BrowseView::home();
        view.mount(&source).await;

        let ticket = view.select_category("2");
        view.fetch(ticket, &source).await;
        assert_eq!(view.selected_category(), "2");

        let ticket = view.search("ayam");
        assert_eq!(ticket.category_id, "");
        view.fetch(ticket, &source).await;

        assert_eq!(view.selected_category(), "");
        assert_eq!(view.search_term(), "ayam");
        assert_eq!(view.recipes().len(), 1);
        assert_eq!(view.heading(), "Hasil Pencarian untuk \"ayam\"");
    }

    #[tokio::test]
    async fn test_category_clears_search_and_toggles() {
        let source = FakeSource::seeded();
        let mut view = BrowseView::home();
        view.mount(&source).await;

        let ticket = view.search("ayam");
        view.fetch(ticket, &source).await;

        let ticket = view.select_category("1");
        assert_eq!(ticket.search, "");
        view.fetch(ticket, &source).await;
        assert_eq!(view.search_term(), "");
        assert_eq!(view.heading(), "Resep Kategori: Makanan Utama");
        assert!(view.has_active_filter());

        let ticket = view.select_category("1");
        view.fetch(ticket, &source).await;
        assert_eq!(view.selected_category(), "");
        assert_eq!(view.recipes().len(), 3);
        assert!(!view.has_active_filter());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let source = FakeSource::seeded();
        let mut view = BrowseView::home();
        view.mount(&source).await;

        let slow = view.search("ayam");
        let fast = view.search("teh");

        let fast_result = source.recipes(&fast.search, &fast.category_id).await;
        assert!(view.finish_fetch(&fast, fast_result));
        let newest = view.recipes().to_vec();

        let slow_result = source.recipes(&slow.search, &slow.category_id).await;
        assert!(!view.finish_fetch(&slow, slow_result));

        assert_eq!(view.recipes().len(), newest.len());
        assert_eq!(view.recipes()[0].id, newest[0].id);
        assert_eq!(view.search_term(), "teh");
    }

    #[tokio::test]
    async fn test_failed_fetch_sets_localized_error() {
        let source = FakeSource::seeded();
        let mut view = BrowseView::home();
        view.mount(&source).await;

        source.fail_requests(true);
        let ticket = view.reset();
        view.fetch(ticket, &source).await;

        assert_eq!(view.error(), Some(messages::ERR_LOAD_RECIPES));
    }

    #[tokio::test]
    async fn test_initial_failure() {
        let source = FakeSource::seeded();
        source.fail_requests(true);
        let mut view = BrowseView::home();

        view.mount(&source).await;

        assert!(!view.is_loading());
        assert_eq!(view.error(), Some(messages::ERR_LOAD_INITIAL));
    }

    #[tokio::test]
    async fn test_categories_page_preselects_first_category() {
        let source = FakeSource::seeded();
        let mut view = BrowseView::categories_page();

        view.mount(&source).await;

        assert_eq!(view.selected_category(), "1");
        assert!(view.recipes().iter().all(|r| r.category_id == 1));
        assert_eq!(view.heading(), "Resep di Makanan Utama");

        // Selecting the active category keeps it on this page
        let ticket = view.select_category("1");
        view.fetch(ticket, &source).await;
        assert_eq!(view.selected_category(), "1");

        let ticket = view.reset();
        view.fetch(ticket, &source).await;
        assert_eq!(view.heading(), "Resep di Semua Kategori");
        assert_eq!(view.recipes().len(), 3);
    }
}
