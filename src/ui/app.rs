use std::mem;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::provider::PetProvider;

use super::catalog::{CatalogScreen, MenuAction};
use super::editor::{EditorIntent, EditorScreen, PetField, SaveOutcome};
use super::helpers::{centered_rect, key_hint, surface_error, StatusKind, StatusMessage};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows moved by PageUp/PageDown in the catalog.
const PAGE_SIZE: isize = 5;

/// Which screen is in front. The catalog stays alive underneath the editor so
/// its loader keeps the list current.
enum Screen {
    Catalog,
    Editor(EditorScreen),
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    /// Catalog menu open with the highlighted entry.
    Menu(usize),
    ConfirmDiscard,
    ConfirmDelete,
}

/// Central application state shared across the TUI.
pub struct App {
    provider: Arc<dyn PetProvider>,
    catalog: CatalogScreen,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    /// Build the app on top of `provider` and start the catalog query.
    pub fn new(provider: Arc<dyn PetProvider>) -> Result<Self> {
        let catalog = CatalogScreen::start(provider.clone())?;
        Ok(Self {
            provider,
            catalog,
            screen: Screen::Catalog,
            mode: Mode::Normal,
            status: None,
        })
    }

    /// Apply query results that arrived since the last frame.
    pub(crate) fn tick(&mut self) {
        self.catalog.pump();
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => match self.screen {
                Screen::Catalog => self.handle_catalog_key(code, &mut exit)?,
                Screen::Editor(_) => self.handle_editor_key(code)?,
            },
            Mode::Menu(selected) => self.handle_menu_key(code, selected)?,
            Mode::ConfirmDiscard => self.handle_confirm_discard(code)?,
            Mode::ConfirmDelete => self.handle_confirm_delete(code)?,
        };

        Ok(exit)
    }

    /// Ctrl-D in the editor asks to delete the pet being edited.
    pub(crate) fn handle_ctrl_d(&mut self) -> Result<()> {
        if !matches!(self.mode, Mode::Normal) {
            return Ok(());
        }
        if let Screen::Editor(editor) = &self.screen {
            if editor.is_editing() {
                self.mode = Mode::ConfirmDelete;
            } else {
                self.set_status("A new pet cannot be deleted.", StatusKind::Error);
            }
        }
        Ok(())
    }

    fn handle_catalog_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.catalog.adapter_mut().move_selection(-1),
            KeyCode::Down => self.catalog.adapter_mut().move_selection(1),
            KeyCode::PageUp => self.catalog.adapter_mut().move_selection(-PAGE_SIZE),
            KeyCode::PageDown => self.catalog.adapter_mut().move_selection(PAGE_SIZE),
            KeyCode::Home => self.catalog.adapter_mut().select_first(),
            KeyCode::End => self.catalog.adapter_mut().select_last(),
            KeyCode::Enter => {
                if let Some(intent) = self.catalog.open_selected() {
                    self.start_editor(intent);
                } else {
                    self.set_status("No pet selected.", StatusKind::Error);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('a') => {
                let intent = self.catalog.on_fab_click();
                self.start_editor(intent);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.clear_status();
                return Ok(Mode::Menu(0));
            }
            KeyCode::Char('i') => self.run_menu_action(MenuAction::InsertDummyData),
            KeyCode::Char('D') => self.run_menu_action(MenuAction::DeleteAllEntries),
            KeyCode::Char('r') => {
                self.clear_status();
                self.catalog.refresh();
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_menu_key(&mut self, code: KeyCode, selected: usize) -> Result<Mode> {
        let last = MenuAction::ALL.len() - 1;
        match code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Ok(Mode::Normal),
            KeyCode::Up => Ok(Mode::Menu(selected.saturating_sub(1))),
            KeyCode::Down => Ok(Mode::Menu((selected + 1).min(last))),
            KeyCode::Enter => {
                self.run_menu_action(MenuAction::ALL[selected.min(last)]);
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::Menu(selected)),
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode) -> Result<Mode> {
        let Screen::Editor(editor) = &mut self.screen else {
            return Ok(Mode::Normal);
        };

        match code {
            KeyCode::Esc => {
                if editor.form.touched {
                    return Ok(Mode::ConfirmDiscard);
                }
                self.close_editor();
            }
            KeyCode::Tab => editor.form.toggle_field(true),
            KeyCode::BackTab => editor.form.toggle_field(false),
            KeyCode::Up => editor.form.toggle_field(false),
            KeyCode::Down => editor.form.toggle_field(true),
            KeyCode::Left => {
                editor.form.cycle_gender(-1);
            }
            KeyCode::Right => {
                editor.form.cycle_gender(1);
            }
            KeyCode::Backspace => editor.form.backspace(),
            KeyCode::Enter => match editor.save(self.provider.as_ref()) {
                SaveOutcome::Skipped => self.close_editor(),
                SaveOutcome::Saved(message) => {
                    self.close_editor();
                    self.status = Some(message);
                }
                SaveOutcome::Failed(message) => self.status = Some(message),
            },
            KeyCode::Char(' ') if editor.form.active == PetField::Gender => {
                editor.form.cycle_gender(1);
            }
            KeyCode::Char(ch) => {
                if editor.form.push_char(ch) {
                    editor.form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_confirm_discard(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.close_editor();
                self.set_status("Changes discarded.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Ok(Mode::Normal),
            _ => Ok(Mode::ConfirmDiscard),
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Screen::Editor(editor) = &self.screen {
                    let message = editor.delete(self.provider.as_ref());
                    self.close_editor();
                    self.status = Some(message);
                }
                Ok(Mode::Normal)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmDelete),
        }
    }

    fn run_menu_action(&mut self, action: MenuAction) {
        self.clear_status();
        if let Some(message) = self.catalog.on_menu_action(action) {
            self.status = Some(message);
        }
    }

    fn start_editor(&mut self, intent: EditorIntent) {
        match EditorScreen::open(self.provider.as_ref(), intent) {
            Ok(editor) => {
                self.clear_status();
                self.screen = Screen::Editor(editor);
            }
            Err(err) => {
                log::warn!("could not open editor: {err:#}");
                self.set_status(surface_error(&err), StatusKind::Error);
            }
        }
    }

    fn close_editor(&mut self) {
        self.screen = Screen::Catalog;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Catalog => self.draw_catalog(frame, content_area),
            Screen::Editor(editor) => self.draw_editor(frame, content_area, editor),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Menu(selected) => self.draw_menu(frame, area, *selected),
            Mode::ConfirmDiscard => self.draw_confirm(
                frame,
                area,
                "Discard changes",
                "Discard your changes and quit editing?",
            ),
            Mode::ConfirmDelete => {
                self.draw_confirm(frame, area, "Delete pet", "Delete this pet?")
            }
            Mode::Normal => {}
        }
    }

    fn draw_catalog(&self, frame: &mut Frame, area: Rect) {
        let adapter = self.catalog.adapter();
        let title = if adapter.has_cursor() {
            format!("Pets ({})", adapter.count())
        } else {
            "Pets".to_string()
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        if adapter.count() == 0 {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "It's a bit lonely here...",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Get started by adding a pet",
                    Style::default().fg(Color::Gray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(message, area);
            return;
        }

        let list = List::new(adapter.list_items())
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(adapter.selected()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_editor(&self, frame: &mut Frame, area: Rect, editor: &EditorScreen) {
        let block = Block::default().title(editor.title()).borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let fields = [
            PetField::Name,
            PetField::Breed,
            PetField::Gender,
            PetField::Weight,
        ];
        let mut lines: Vec<Line> = fields
            .iter()
            .map(|field| editor.form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &editor.form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • ←/→ to change gender • Esc to go back",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let active = editor.form.active;
        if active != PetField::Gender {
            let row = fields.iter().position(|field| *field == active).unwrap_or(0) as u16;
            let prefix = format!("{}: ", active.label()).len() as u16;
            let cursor_x = inner.x + prefix + editor.form.value_len(active) as u16;
            frame.set_cursor_position((cursor_x, inner.y + row));
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect, selected: usize) {
        let popup_area = centered_rect(40, 30, area);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = MenuAction::ALL
            .iter()
            .map(|action| ListItem::new(action.label()))
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Menu").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, popup_area, &mut state);
    }

    fn draw_confirm(&self, frame: &mut Frame, area: Rect, title: &str, question: &str) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(question.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm • N or Esc to cancel",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(title.to_string()).borders(Borders::ALL));
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::Menu(_)) => &[("↑↓", "Navigate"), ("Enter", "Run"), ("Esc", "Close")],
            (_, Mode::ConfirmDiscard) | (_, Mode::ConfirmDelete) => {
                &[("y", "Confirm"), ("n", "Cancel")]
            }
            (Screen::Editor(editor), _) if editor.is_editing() => &[
                ("Tab", "Next Field"),
                ("Enter", "Save"),
                ("Ctrl-D", "Delete"),
                ("Esc", "Back"),
            ],
            (Screen::Editor(_), _) => &[("Tab", "Next Field"), ("Enter", "Save"), ("Esc", "Back")],
            (Screen::Catalog, _) => &[
                ("↑↓", "Select"),
                ("Enter", "Edit"),
                ("+", "Add"),
                ("m", "Menu"),
                ("i", "Insert Dummy Data"),
                ("D", "Delete All"),
                ("q", "Quit"),
            ],
        };

        Line::from(
            hints
                .iter()
                .flat_map(|(key, label)| key_hint(key, label))
                .collect::<Vec<_>>(),
        )
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::contract::PetUri;
    use crate::models::{Gender, Pet, PetSummary, PetValues};
    use crate::provider::{ContentObserver, ProviderError, SqlitePetProvider};
    use crate::ui::catalog::dummy_pet;

    const WAIT: Duration = Duration::from_secs(5);

    fn app_with(provider: Arc<dyn PetProvider>) -> App {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut app = App::new(provider).unwrap();
        assert!(app.catalog.await_load(WAIT));
        app
    }

    fn await_count(app: &mut App, count: usize) {
        while app.catalog.adapter().count() != count {
            assert!(app.catalog.await_load(WAIT), "timed out waiting for {count} row(s)");
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press_all(app: &mut App, keys: &str) {
        for ch in keys.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    fn status_text(app: &App) -> Option<&str> {
        app.status.as_ref().map(|status| status.text.as_str())
    }

    /// Delegates to SQLite but refuses every insert.
    struct RejectingProvider(SqlitePetProvider);

    impl PetProvider for RejectingProvider {
        fn query_catalog(&self) -> Result<Vec<PetSummary>, ProviderError> {
            self.0.query_catalog()
        }
        fn query(&self, uri: PetUri) -> Result<Vec<Pet>, ProviderError> {
            self.0.query(uri)
        }
        fn insert(&self, _uri: PetUri, _values: &PetValues) -> Result<PetUri, ProviderError> {
            Err(ProviderError::Validation("insert refused".into()))
        }
        fn update(&self, uri: PetUri, values: &PetValues) -> Result<usize, ProviderError> {
            self.0.update(uri, values)
        }
        fn delete(&self, uri: PetUri) -> Result<usize, ProviderError> {
            self.0.delete(uri)
        }
        fn register_observer(&self, observer: Box<dyn ContentObserver>) {
            self.0.register_observer(observer)
        }
    }

    #[test]
    fn empty_catalog_shows_placeholder() {
        let app = app_with(Arc::new(SqlitePetProvider::in_memory().unwrap()));
        let screen = render(&app);
        assert!(screen.contains("It's a bit lonely here..."));
        assert!(screen.contains("Pets (0)"));
    }

    #[test]
    fn insert_shortcut_adds_toto_and_renders_it() {
        let mut app = app_with(Arc::new(SqlitePetProvider::in_memory().unwrap()));

        app.handle_key(KeyCode::Char('i')).unwrap();
        assert_eq!(status_text(&app), Some("Pet saved"));
        await_count(&mut app, 1);

        let screen = render(&app);
        assert!(screen.contains("Toto"));
        assert!(screen.contains("Terrier"));
        assert!(screen.contains("Pet saved"));
    }

    #[test]
    fn menu_runs_delete_all_without_confirmation() {
        let provider = Arc::new(SqlitePetProvider::in_memory().unwrap());
        let mut app = app_with(provider.clone());
        app.handle_key(KeyCode::Char('i')).unwrap();
        await_count(&mut app, 1);

        app.handle_key(KeyCode::Char('m')).unwrap();
        assert!(render(&app).contains("Delete All Pets"));
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        await_count(&mut app, 0);
        assert!(provider.query_catalog().unwrap().is_empty());
    }

    #[test]
    fn rejected_insert_shows_failure_and_keeps_list() {
        let inner = SqlitePetProvider::in_memory().unwrap();
        inner.insert(PetUri::Collection, &dummy_pet()).unwrap();
        let mut app = app_with(Arc::new(RejectingProvider(inner)));
        assert_eq!(app.catalog.adapter().count(), 1);

        app.handle_key(KeyCode::Char('i')).unwrap();
        let status = app.status.clone().unwrap();
        assert_eq!(status.text, "Error with saving pet");
        assert_eq!(status.kind, StatusKind::Error);

        assert!(!app.catalog.await_load(Duration::from_millis(200)));
        assert_eq!(app.catalog.adapter().count(), 1);
    }

    #[test]
    fn enter_opens_editor_for_selected_row() {
        let mut app = app_with(Arc::new(SqlitePetProvider::in_memory().unwrap()));
        app.handle_key(KeyCode::Char('i')).unwrap();
        await_count(&mut app, 1);
        let id = app.catalog.adapter().item_id(0).unwrap();

        app.handle_key(KeyCode::Enter).unwrap();
        match &app.screen {
            Screen::Editor(editor) => {
                assert_eq!(editor.uri, Some(PetUri::Item(id)));
                assert_eq!(editor.form.name, "Toto");
                assert_eq!(editor.form.gender, Gender::Male);
            }
            Screen::Catalog => panic!("editor did not open"),
        }
        assert!(render(&app).contains("Edit Pet"));
    }

    #[test]
    fn fab_opens_blank_editor_and_saves_new_pet() {
        let provider = Arc::new(SqlitePetProvider::in_memory().unwrap());
        let mut app = app_with(provider.clone());

        app.handle_key(KeyCode::Char('+')).unwrap();
        match &app.screen {
            Screen::Editor(editor) => assert_eq!(editor.uri, None),
            Screen::Catalog => panic!("editor did not open"),
        }
        assert!(render(&app).contains("Add a Pet"));

        press_all(&mut app, "Luna");
        app.handle_key(KeyCode::Tab).unwrap();
        press_all(&mut app, "Siamese");
        app.handle_key(KeyCode::Tab).unwrap();
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Tab).unwrap();
        press_all(&mut app, "4");
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.screen, Screen::Catalog));
        assert_eq!(status_text(&app), Some("Pet saved"));
        await_count(&mut app, 1);

        let pets = provider.query(PetUri::Collection).unwrap();
        assert_eq!(pets[0].name, "Luna");
        assert_eq!(pets[0].breed, "Siamese");
        assert_eq!(pets[0].gender, Gender::Female);
        assert_eq!(pets[0].weight, 4);
    }

    #[test]
    fn esc_on_touched_form_asks_before_discarding() {
        let provider = Arc::new(SqlitePetProvider::in_memory().unwrap());
        let mut app = app_with(provider.clone());

        app.handle_key(KeyCode::Char('+')).unwrap();
        press_all(&mut app, "Rex");
        app.handle_key(KeyCode::Esc).unwrap();
        assert!(matches!(app.mode, Mode::ConfirmDiscard));

        app.handle_key(KeyCode::Char('n')).unwrap();
        assert!(matches!(app.screen, Screen::Editor(_)));

        app.handle_key(KeyCode::Esc).unwrap();
        app.handle_key(KeyCode::Char('y')).unwrap();
        assert!(matches!(app.screen, Screen::Catalog));
        assert!(provider.query_catalog().unwrap().is_empty());
    }

    #[test]
    fn ctrl_d_deletes_pet_after_confirmation() {
        let provider = Arc::new(SqlitePetProvider::in_memory().unwrap());
        let mut app = app_with(provider.clone());
        app.handle_key(KeyCode::Char('i')).unwrap();
        await_count(&mut app, 1);

        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_ctrl_d().unwrap();
        assert!(matches!(app.mode, Mode::ConfirmDelete));
        assert!(render(&app).contains("Delete this pet?"));

        app.handle_key(KeyCode::Char('y')).unwrap();
        assert!(matches!(app.screen, Screen::Catalog));
        assert_eq!(status_text(&app), Some("Pet deleted"));
        await_count(&mut app, 0);
    }

    #[test]
    fn ctrl_d_is_refused_for_new_pet() {
        let mut app = app_with(Arc::new(SqlitePetProvider::in_memory().unwrap()));
        app.handle_key(KeyCode::Char('a')).unwrap();
        app.handle_ctrl_d().unwrap();
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), Some("A new pet cannot be deleted."));
    }

    #[test]
    fn enter_on_empty_catalog_reports_no_selection() {
        let mut app = app_with(Arc::new(SqlitePetProvider::in_memory().unwrap()));
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(matches!(app.screen, Screen::Catalog));
        assert_eq!(status_text(&app), Some("No pet selected."));
    }

    #[test]
    fn q_exits_from_catalog_but_types_in_editor() {
        let mut app = app_with(Arc::new(SqlitePetProvider::in_memory().unwrap()));
        app.handle_key(KeyCode::Char('+')).unwrap();
        assert!(!app.handle_key(KeyCode::Char('q')).unwrap());

        app.handle_key(KeyCode::Esc).unwrap();
        app.handle_key(KeyCode::Char('y')).unwrap();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }
}
