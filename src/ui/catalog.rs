//! The catalog screen: a live list of pets fed by the background loader, the
//! two menu actions, and the navigation requests that open the editor.

use std::cmp::min;
use std::mem;
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::contract::PetUri;
use crate::loader::{LoaderEvent, QueryLoader};
use crate::models::{Gender, PetSummary, PetValues};
use crate::provider::PetProvider;

use super::editor::EditorIntent;
use super::helpers::StatusMessage;

/// Actions offered by the catalog menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    InsertDummyData,
    DeleteAllEntries,
}

impl MenuAction {
    pub(crate) const ALL: [MenuAction; 2] =
        [MenuAction::InsertDummyData, MenuAction::DeleteAllEntries];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuAction::InsertDummyData => "Insert Dummy Data",
            MenuAction::DeleteAllEntries => "Delete All Pets",
        }
    }
}

/// The sample record added by "Insert Dummy Data".
pub(crate) fn dummy_pet() -> PetValues {
    PetValues {
        name: Some("Toto".into()),
        breed: Some("Terrier".into()),
        gender: Some(Gender::Male),
        weight: Some(7),
    }
}

/// Binds query rows to list items and tracks the highlighted row. `None`
/// means no result set is attached, which renders the same as an empty one.
#[derive(Default)]
pub(crate) struct PetCursorAdapter {
    rows: Option<Vec<PetSummary>>,
    selected: usize,
}

impl PetCursorAdapter {
    /// Attach a new result set and hand back the previous one.
    pub(crate) fn swap_cursor(
        &mut self,
        rows: Option<Vec<PetSummary>>,
    ) -> Option<Vec<PetSummary>> {
        let previous = mem::replace(&mut self.rows, rows);
        self.ensure_in_bounds();
        previous
    }

    pub(crate) fn rows(&self) -> &[PetSummary] {
        self.rows.as_deref().unwrap_or(&[])
    }

    pub(crate) fn count(&self) -> usize {
        self.rows().len()
    }

    pub(crate) fn has_cursor(&self) -> bool {
        self.rows.is_some()
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    /// Row id at `position`.
    pub(crate) fn item_id(&self, position: usize) -> Option<i64> {
        self.rows().get(position).map(|pet| pet.id)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        let count = self.count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + offset;
        self.selected = next.clamp(0, count as isize - 1) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.count().saturating_sub(1);
    }

    fn ensure_in_bounds(&mut self) {
        self.selected = min(self.selected, self.count().saturating_sub(1));
    }

    /// Two-line list items: the name, then the breed in a muted color.
    pub(crate) fn list_items(&self) -> Vec<ListItem<'static>> {
        self.rows()
            .iter()
            .map(|pet| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        pet.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        pet.breed_label().to_string(),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect()
    }
}

/// State of the catalog screen.
pub(crate) struct CatalogScreen {
    provider: Arc<dyn PetProvider>,
    adapter: PetCursorAdapter,
    loader: QueryLoader,
}

impl CatalogScreen {
    /// Create the screen with an empty adapter and kick off the first query.
    pub(crate) fn start(provider: Arc<dyn PetProvider>) -> Result<Self> {
        let loader = QueryLoader::start(provider.clone())?;
        Ok(Self {
            provider,
            adapter: PetCursorAdapter::default(),
            loader,
        })
    }

    pub(crate) fn adapter(&self) -> &PetCursorAdapter {
        &self.adapter
    }

    pub(crate) fn adapter_mut(&mut self) -> &mut PetCursorAdapter {
        &mut self.adapter
    }

    /// Apply every loader event that has arrived. Returns whether anything
    /// changed.
    pub(crate) fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.loader.try_next() {
            self.apply(event);
            changed = true;
        }
        changed
    }

    /// Block until the loader delivers one event and apply it.
    #[cfg(test)]
    pub(crate) fn await_load(&mut self, timeout: Duration) -> bool {
        match self.loader.next_timeout(timeout) {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, event: LoaderEvent) {
        match event {
            LoaderEvent::Finished(rows) => self.on_load_finished(rows),
            LoaderEvent::Reset => self.on_loader_reset(),
        }
    }

    pub(crate) fn on_load_finished(&mut self, rows: Vec<PetSummary>) {
        self.adapter.swap_cursor(Some(rows));
    }

    /// Drop the current rows so nothing stale stays on screen.
    pub(crate) fn on_loader_reset(&mut self) {
        self.adapter.swap_cursor(None);
    }

    /// Re-run the query without waiting for a change notification.
    pub(crate) fn refresh(&self) {
        self.loader.force_load();
    }

    /// Editor request for the row at `position`.
    pub(crate) fn on_item_click(&self, position: usize) -> Option<EditorIntent> {
        self.adapter
            .item_id(position)
            .map(|id| EditorIntent::edit(PetUri::with_appended_id(id)))
    }

    pub(crate) fn open_selected(&self) -> Option<EditorIntent> {
        self.on_item_click(self.adapter.selected())
    }

    /// Editor request for a brand new pet.
    pub(crate) fn on_fab_click(&self) -> EditorIntent {
        EditorIntent::create()
    }

    /// Run a menu action. Returns the message to show, if any.
    pub(crate) fn on_menu_action(&self, action: MenuAction) -> Option<StatusMessage> {
        match action {
            MenuAction::InsertDummyData => Some(self.insert_dummy_data()),
            MenuAction::DeleteAllEntries => {
                self.delete_all_pets();
                None
            }
        }
    }

    /// Insert the sample pet. The list itself updates once the loader sees
    /// the change.
    pub(crate) fn insert_dummy_data(&self) -> StatusMessage {
        match self.provider.insert(PetUri::Collection, &dummy_pet()) {
            Ok(uri) => {
                log::info!("inserted dummy pet at {uri}");
                StatusMessage::info("Pet saved")
            }
            Err(err) => {
                log::warn!("dummy pet insert failed: {err}");
                StatusMessage::error("Error with saving pet")
            }
        }
    }

    /// Remove every pet, without confirmation. Failures are only logged.
    pub(crate) fn delete_all_pets(&self) {
        match self.provider.delete(PetUri::Collection) {
            Ok(count) => log::info!("deleted all pets ({count} row(s))"),
            Err(err) => log::warn!("delete all pets failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SqlitePetProvider;

    const WAIT: Duration = Duration::from_secs(5);

    fn summary(id: i64, name: &str) -> PetSummary {
        PetSummary {
            id,
            name: name.into(),
            breed: String::new(),
        }
    }

    fn started() -> (Arc<SqlitePetProvider>, CatalogScreen) {
        let _ = env_logger::builder().is_test(true).try_init();
        let provider = Arc::new(SqlitePetProvider::in_memory().unwrap());
        let mut catalog = CatalogScreen::start(provider.clone()).unwrap();
        assert!(catalog.await_load(WAIT));
        (provider, catalog)
    }

    /// Apply loader events until the list shows `count` rows. Change
    /// notifications may or may not be coalesced, so the number of events is
    /// not fixed.
    fn await_count(catalog: &mut CatalogScreen, count: usize) {
        while catalog.adapter().count() != count || !catalog.adapter().has_cursor() {
            assert!(catalog.await_load(WAIT), "timed out waiting for {count} row(s)");
        }
    }

    #[test]
    fn adapter_swap_returns_previous_rows_and_clamps_selection() {
        let mut adapter = PetCursorAdapter::default();
        assert!(!adapter.has_cursor());

        adapter.swap_cursor(Some(vec![summary(1, "a"), summary(2, "b"), summary(3, "c")]));
        adapter.select_last();
        assert_eq!(adapter.selected(), 2);

        let previous = adapter.swap_cursor(Some(vec![summary(1, "a")]));
        assert_eq!(previous.map(|rows| rows.len()), Some(3));
        assert_eq!(adapter.selected(), 0);

        adapter.swap_cursor(None);
        assert_eq!(adapter.count(), 0);
        assert!(adapter.item_id(0).is_none());
    }

    #[test]
    fn adapter_selection_stays_in_range() {
        let mut adapter = PetCursorAdapter::default();
        adapter.move_selection(3);
        assert_eq!(adapter.selected(), 0);

        adapter.swap_cursor(Some(vec![summary(1, "a"), summary(2, "b")]));
        adapter.move_selection(5);
        assert_eq!(adapter.selected(), 1);
        adapter.move_selection(-5);
        assert_eq!(adapter.selected(), 0);
    }

    #[test]
    fn insert_dummy_data_adds_exactly_one_toto() {
        let (provider, mut catalog) = started();
        assert_eq!(catalog.adapter().count(), 0);

        let status = catalog.on_menu_action(MenuAction::InsertDummyData);
        assert_eq!(status, Some(StatusMessage::info("Pet saved")));
        assert!(catalog.await_load(WAIT));

        assert_eq!(catalog.adapter().count(), 1);
        let row = &catalog.adapter().rows()[0];
        assert_eq!(row.name, "Toto");
        assert_eq!(row.breed, "Terrier");

        let pet = &provider.query(PetUri::Item(row.id)).unwrap()[0];
        assert_eq!(pet.gender, Gender::Male);
        assert_eq!(pet.weight, 7);
    }

    #[test]
    fn delete_all_entries_empties_the_list() {
        let (provider, mut catalog) = started();
        provider.insert(PetUri::Collection, &dummy_pet()).unwrap();
        provider.insert(PetUri::Collection, &dummy_pet()).unwrap();
        await_count(&mut catalog, 2);

        assert_eq!(catalog.on_menu_action(MenuAction::DeleteAllEntries), None);
        await_count(&mut catalog, 0);
        assert!(provider.query_catalog().unwrap().is_empty());
    }

    #[test]
    fn row_click_carries_row_uri_and_fab_carries_none() {
        let (provider, mut catalog) = started();
        let uri = provider.insert(PetUri::Collection, &dummy_pet()).unwrap();
        assert!(catalog.await_load(WAIT));

        assert_eq!(catalog.on_item_click(0), Some(EditorIntent::edit(uri)));
        assert_eq!(catalog.open_selected(), Some(EditorIntent::edit(uri)));
        assert_eq!(catalog.on_item_click(1), None);
        assert_eq!(catalog.on_fab_click().data, None);
    }

    #[test]
    fn reset_clears_displayed_rows() {
        let (provider, mut catalog) = started();
        provider.insert(PetUri::Collection, &dummy_pet()).unwrap();
        assert!(catalog.await_load(WAIT));
        assert_eq!(catalog.adapter().count(), 1);

        catalog.on_loader_reset();
        assert!(!catalog.adapter().has_cursor());
        assert_eq!(catalog.adapter().count(), 0);

        catalog.refresh();
        assert!(catalog.await_load(WAIT));
        assert_eq!(catalog.adapter().count(), 1);
    }
}
