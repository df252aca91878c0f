use crate::contact::{ContactForm, MeetingForm, TimeSlot, SERVICES};
use crate::error::Field;
use crate::export::{default_file_name, export_csv, export_json, export_to_dir};
use crate::model::{Addon, Complexity, Feature, ProjectType, TechStack};
use crate::search::{search, KindFilter, SearchResults, SortBy};
use crate::settings::{SettingsStore, Theme};
use crate::wizard::{Step, Wizard};
use chrono::Utc;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Wizard,
    Search,
    Contact,
}

/// One selectable line of a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    ProjectType(ProjectType),
    TeamSize,
    Duration,
    Complexity,
    Location,
    Feature(Feature),
    Addon(Addon),
    /// Index into [`TechStack::PRESETS`].
    Stack(usize),
    CustomStack,
    Requirements,
    AddDocument,
    Document(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Service,
    Message,
    MeetingDate,
    MeetingSlot,
}

impl ContactField {
    pub const ALL: [ContactField; 7] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Service,
        ContactField::Message,
        ContactField::MeetingDate,
        ContactField::MeetingSlot,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Company => "Company",
            ContactField::Service => "Service",
            ContactField::Message => "Message",
            ContactField::MeetingDate => "Meeting date",
            ContactField::MeetingSlot => "Meeting time",
        }
    }
}

/// Text field currently being typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    TeamSize,
    Duration,
    Location,
    CustomStack,
    Requirements,
    AddDocument,
    Contact(ContactField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug)]
pub struct SearchState {
    pub query: String,
    pub results: SearchResults,
    pub kind: KindFilter,
    pub sort: SortBy,
    pub selected: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: search(""),
            kind: KindFilter::All,
            sort: SortBy::Relevance,
            selected: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub meeting: MeetingForm,
    pub cursor: usize,
}

pub struct App {
    pub wizard: Wizard,
    pub settings: SettingsStore,
    pub view: View,
    pub cursor: usize,
    pub editing: Option<EditTarget>,
    pub buffer: String,
    pub search: SearchState,
    pub contact: ContactState,
    pub status: Option<Status>,
    pub out_dir: PathBuf,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(wizard: Wizard, settings: SettingsStore, out_dir: PathBuf) -> Self {
        Self {
            wizard,
            settings,
            view: View::Wizard,
            cursor: 0,
            editing: None,
            buffer: String::new(),
            search: SearchState::default(),
            contact: ContactState::default(),
            status: None,
            out_dir,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Wizard => super::wizard_view::draw_wizard(frame, self),
            View::Search => super::search_view::draw_search(frame, self),
            View::Contact => super::contact_view::draw_contact(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                self.should_quit = true;
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    /// Dispatches one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.editing.is_some() {
            self.handle_edit_keys(code);
            return;
        }
        match self.view {
            View::Wizard => self.handle_wizard_keys(code),
            View::Search => self.handle_search_keys(code),
            View::Contact => self.handle_contact_keys(code),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    /// Rows of the current wizard step, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        match self.wizard.step() {
            Step::ProjectType => ProjectType::ALL.into_iter().map(Row::ProjectType).collect(),
            Step::Details => {
                let mut rows = vec![Row::TeamSize, Row::Duration, Row::Complexity, Row::Location];
                rows.extend(Feature::ALL.into_iter().map(Row::Feature));
                rows.extend(Addon::ALL.into_iter().map(Row::Addon));
                rows
            }
            Step::TechAndRequirements => {
                let mut rows: Vec<Row> = (0..TechStack::PRESETS.len()).map(Row::Stack).collect();
                rows.extend([Row::CustomStack, Row::Requirements, Row::AddDocument]);
                rows.extend((0..self.wizard.input().documents.len()).map(Row::Document));
                rows
            }
            Step::Results => Vec::new(),
        }
    }

    /// Missing fields to show while the Next action is disabled.
    #[must_use]
    pub fn blocking_fields(&self) -> Vec<Field> {
        match self.wizard.step() {
            Step::ProjectType | Step::Details => self.wizard.blocking_fields(),
            Step::TechAndRequirements | Step::Results => Vec::new(),
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!(%text, "action failed");
        self.status = Some(Status {
            text,
            is_error: true,
        });
    }

    fn handle_wizard_keys(&mut self, code: KeyCode) {
        self.status = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.rows().len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_row(),
            KeyCode::Right | KeyCode::Char('n') => self.next_step(),
            KeyCode::Left | KeyCode::Char('b') => self.previous_step(),
            KeyCode::Char('g') => self.generate(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('/') => {
                self.view = View::Search;
            }
            KeyCode::Char('e') if self.wizard.step() == Step::Results => self.export_json(),
            KeyCode::Char('c') if self.wizard.step() == Step::Results => self.export_csv(),
            KeyCode::Char('p') if self.wizard.step() == Step::Results => {
                self.view = View::Contact;
                self.contact.cursor = 0;
            }
            KeyCode::Char('r') if self.wizard.step() == Step::Results => {
                self.wizard.restart();
                self.cursor = 0;
                self.set_status("Started a new estimate");
            }
            _ => {}
        }
    }

    fn next_step(&mut self) {
        match self.wizard.next() {
            Ok(_) => self.cursor = 0,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn previous_step(&mut self) {
        if self.wizard.back().is_ok() {
            self.cursor = 0;
        }
    }

    fn generate(&mut self) {
        match self.wizard.generate() {
            Ok(_) => self.cursor = 0,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn toggle_theme(&mut self) {
        match self.settings.toggle_theme() {
            Ok(theme) => self.set_status(format!("Theme: {theme}")),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn activate_row(&mut self) {
        let Some(row) = self.rows().get(self.cursor).copied() else {
            return;
        };
        let input = self.wizard.input_mut();
        match row {
            Row::ProjectType(project_type) => input.project_type = Some(project_type),
            Row::Complexity => input.complexity = Some(Complexity::cycle(input.complexity)),
            Row::Feature(feature) => {
                input.toggle_feature(feature);
            }
            Row::Addon(addon) => input.addons.toggle(addon),
            Row::Stack(index) => input.tech_stack = TechStack::PRESETS.get(index).cloned(),
            Row::Document(index) => {
                input.remove_document(index);
                let len = self.rows().len();
                self.cursor = self.cursor.min(len.saturating_sub(1));
            }
            Row::TeamSize => {
                let current = input.team_size.map(|n| n.to_string()).unwrap_or_default();
                self.start_editing(EditTarget::TeamSize, current);
            }
            Row::Duration => {
                let current = input.duration.map(|n| n.to_string()).unwrap_or_default();
                self.start_editing(EditTarget::Duration, current);
            }
            Row::Location => {
                let current = input.location.clone();
                self.start_editing(EditTarget::Location, current);
            }
            Row::CustomStack => {
                let current = input
                    .tech_stack
                    .as_ref()
                    .filter(|s| s.is_custom())
                    .map(|s| s.label().to_string())
                    .unwrap_or_default();
                self.start_editing(EditTarget::CustomStack, current);
            }
            Row::Requirements => {
                let current = input.requirements.clone();
                self.start_editing(EditTarget::Requirements, current);
            }
            Row::AddDocument => self.start_editing(EditTarget::AddDocument, String::new()),
        }
    }

    fn start_editing(&mut self, target: EditTarget, current: String) {
        self.editing = Some(target);
        self.buffer = current;
    }

    fn handle_edit_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => {
                self.editing = None;
                self.buffer.clear();
            }
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Char(c) => self.buffer.push(c),
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let Some(target) = self.editing.take() else {
            return;
        };
        let text = std::mem::take(&mut self.buffer);
        let trimmed = text.trim();
        let input = self.wizard.input_mut();

        match target {
            EditTarget::TeamSize | EditTarget::Duration => {
                let value = if trimmed.is_empty() {
                    Ok(0)
                } else {
                    trimmed.parse::<u32>()
                };
                match value {
                    Ok(n) if target == EditTarget::TeamSize => input.set_team_size(n),
                    Ok(n) => input.set_duration(n),
                    Err(_) => self.set_error(format!("'{trimmed}' is not a whole number")),
                }
            }
            EditTarget::Location => input.location = trimmed.to_string(),
            EditTarget::Requirements => input.requirements = trimmed.to_string(),
            EditTarget::CustomStack => {
                if !trimmed.is_empty() {
                    input.tech_stack = Some(TechStack::Custom(trimmed.to_string()));
                } else if input.tech_stack.as_ref().is_some_and(TechStack::is_custom) {
                    input.tech_stack = None;
                }
            }
            EditTarget::AddDocument => {
                if !trimmed.is_empty() {
                    input.add_document(PathBuf::from(trimmed));
                }
            }
            EditTarget::Contact(field) => self.set_contact_text(field, trimmed.to_string()),
        }
    }

    fn export_json(&mut self) {
        let Some(result) = self.wizard.result() else {
            return;
        };
        match export_to_dir(result, &self.out_dir) {
            Ok(path) => self.set_status(format!("Saved {}", path.display())),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn export_csv(&mut self) {
        let Some(result) = self.wizard.result() else {
            return;
        };
        let path = self
            .out_dir
            .join(default_file_name(Utc::now()))
            .with_extension("csv");
        match export_csv(result, &path) {
            Ok(()) => self.set_status(format!("Saved {}", path.display())),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn handle_search_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.view = View::Wizard,
            KeyCode::Up => self.search.selected = self.search.selected.saturating_sub(1),
            KeyCode::Down => {
                let count = self.search_view().len();
                if self.search.selected + 1 < count {
                    self.search.selected += 1;
                }
            }
            KeyCode::Tab => {
                self.search.kind = next_kind(&self.search.results, self.search.kind);
                self.search.selected = 0;
            }
            KeyCode::BackTab => {
                self.search.sort = self.search.sort.cycle();
                self.search.selected = 0;
            }
            KeyCode::Backspace => {
                self.search.query.pop();
                self.refresh_search();
            }
            KeyCode::Char(c) => {
                self.search.query.push(c);
                self.refresh_search();
            }
            _ => {}
        }
    }

    fn refresh_search(&mut self) {
        self.search.results = search(&self.search.query);
        self.search.selected = 0;
        let kind_present = self
            .search
            .results
            .kind_counts()
            .iter()
            .any(|(k, _)| *k == self.search.kind);
        if !kind_present {
            self.search.kind = KindFilter::All;
        }
    }

    /// Hits shown in the search view under the current filter and sort.
    #[must_use]
    pub fn search_view(&self) -> Vec<&crate::search::SearchHit> {
        self.search.results.view(self.search.kind, self.search.sort)
    }

    fn handle_contact_keys(&mut self, code: KeyCode) {
        self.status = None;
        match code {
            KeyCode::Esc => self.view = View::Wizard,
            KeyCode::Up | KeyCode::Char('k') => {
                self.contact.cursor = self.contact.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.contact.cursor + 1 < ContactField::ALL.len() {
                    self.contact.cursor += 1;
                }
            }
            KeyCode::Enter => self.activate_contact_field(),
            KeyCode::Char('s') => self.submit_contact(),
            _ => {}
        }
    }

    #[must_use]
    pub fn contact_value(&self, field: ContactField) -> String {
        let form = &self.contact.form;
        match field {
            ContactField::Name => form.name.clone(),
            ContactField::Email => form.email.clone(),
            ContactField::Company => form.company.clone(),
            ContactField::Service => form.service.clone().unwrap_or_default(),
            ContactField::Message => form.message.clone(),
            ContactField::MeetingDate => self.contact.meeting.date.clone(),
            ContactField::MeetingSlot => self.contact.meeting.slot.clone(),
        }
    }

    fn set_contact_text(&mut self, field: ContactField, text: String) {
        let form = &mut self.contact.form;
        match field {
            ContactField::Name => form.name = text,
            ContactField::Email => form.email = text,
            ContactField::Company => form.company = text,
            ContactField::Message => form.message = text,
            ContactField::MeetingDate => self.contact.meeting.date = text,
            ContactField::Service | ContactField::MeetingSlot => {}
        }
    }

    fn activate_contact_field(&mut self) {
        let Some(field) = ContactField::ALL.get(self.contact.cursor).copied() else {
            return;
        };
        match field {
            ContactField::Service => {
                let form = &mut self.contact.form;
                form.service = cycle_option(&SERVICES, form.service.as_deref());
            }
            ContactField::MeetingSlot => {
                let labels = TimeSlot::ALL.map(TimeSlot::label);
                let current = Some(self.contact.meeting.slot.as_str()).filter(|s| !s.is_empty());
                self.contact.meeting.slot = cycle_option(&labels, current).unwrap_or_default();
            }
            _ => {
                let current = self.contact_value(field);
                self.start_editing(EditTarget::Contact(field), current);
            }
        }
    }

    /// Validates the proposal request and saves the outbound payload next to
    /// the exported estimates.
    fn submit_contact(&mut self) {
        if let Some(result) = self.wizard.result() {
            if let Err(e) = self.contact.form.attach_quote(result) {
                self.set_error(e.to_string());
                return;
            }
        }

        let mut payload = match self.contact.form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        let mut meeting_form = self.contact.meeting.clone();
        meeting_form.name.clone_from(&self.contact.form.name);
        if !(meeting_form.date.trim().is_empty() && meeting_form.slot.trim().is_empty()) {
            match meeting_form.validate() {
                Ok(meeting) => {
                    if let (Some(fields), Ok(value)) =
                        (payload.as_object_mut(), serde_json::to_value(&meeting))
                    {
                        fields.insert("meeting".to_string(), value);
                    }
                }
                Err(e) => {
                    self.set_error(e.to_string());
                    return;
                }
            }
        }

        let path = self
            .out_dir
            .join(format!("proposal-{}.json", Utc::now().timestamp_millis()));
        match export_json(&payload, &path) {
            Ok(()) => {
                self.contact = ContactState::default();
                self.view = View::Wizard;
                self.set_status(format!("Proposal request saved to {}", path.display()));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

/// Steps `None → first → … → last → None` through `options`.
fn cycle_option(options: &[&str], current: Option<&str>) -> Option<String> {
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None => options.first(),
        Some(i) => options.get(i + 1),
    };
    next.map(|s| (*s).to_string())
}

fn next_kind(results: &SearchResults, current: KindFilter) -> KindFilter {
    let kinds: Vec<KindFilter> = results.kind_counts().into_iter().map(|(k, _)| k).collect();
    let position = kinds.iter().position(|k| *k == current).unwrap_or(0);
    kinds
        .get((position + 1) % kinds.len().max(1))
        .copied()
        .unwrap_or(KindFilter::All)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ContentKind;
    use pretty_assertions::assert_eq;

    fn app(dir: &std::path::Path) -> App {
        let settings = SettingsStore::load(dir.join("settings.json")).unwrap();
        App::new(Wizard::default(), settings, dir.to_path_buf())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn select_row(app: &mut App, row: Row) {
        app.cursor = app.rows().iter().position(|r| *r == row).unwrap();
        app.handle_key(KeyCode::Enter);
    }

    fn drive_to_results(app: &mut App) {
        select_row(app, Row::ProjectType(ProjectType::Web));
        app.handle_key(KeyCode::Char('n'));

        select_row(app, Row::TeamSize);
        type_text(app, "4");
        app.handle_key(KeyCode::Enter);
        select_row(app, Row::Duration);
        type_text(app, "8");
        app.handle_key(KeyCode::Enter);
        select_row(app, Row::Complexity);
        select_row(app, Row::Complexity);
        select_row(app, Row::Feature(Feature::Authentication));
        select_row(app, Row::Feature(Feature::Analytics));
        select_row(app, Row::Addon(Addon::Cloud));
        app.handle_key(KeyCode::Char('n'));

        select_row(app, Row::Stack(0));
        app.handle_key(KeyCode::Char('g'));
    }

    #[test]
    fn keys_drive_the_wizard_to_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        drive_to_results(&mut app);

        assert_eq!(app.wizard.step(), Step::Results);
        assert_eq!(app.wizard.result().map(|r| r.total_cost), Some(98_500));
        assert_eq!(app.wizard.input().tech_stack, Some(TechStack::Mern));
    }

    #[test]
    fn blocked_next_sets_error_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.handle_key(KeyCode::Char('n'));

        assert_eq!(app.wizard.step(), Step::ProjectType);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
        assert_eq!(app.blocking_fields(), vec![Field::ProjectType]);
    }

    #[test]
    fn invalid_number_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        select_row(&mut app, Row::ProjectType(ProjectType::Mobile));
        app.handle_key(KeyCode::Char('n'));
        select_row(&mut app, Row::TeamSize);
        type_text(&mut app, "five");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.wizard.input().team_size, None);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn export_writes_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        drive_to_results(&mut app);
        app.handle_key(KeyCode::Char('e'));
        app.handle_key(KeyCode::Char('c'));

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .filter(|n| n.starts_with("AI-Estimate-"))
            .collect();
        assert!(names.iter().any(|n| n.ends_with(".json")));
        assert!(names.iter().any(|n| n.ends_with(".csv")));
    }

    #[test]
    fn theme_toggle_goes_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.handle_key(KeyCode::Char('t'));

        assert_eq!(app.theme(), Theme::Light);
        let reloaded = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn search_view_filters_as_you_type() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.handle_key(KeyCode::Char('/'));
        type_text(&mut app, "success");
        assert_eq!(app.search_view().len(), 3);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.search.kind, KindFilter::Only(ContentKind::Page));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.search.kind, KindFilter::Only(ContentKind::CaseStudy));
        assert_eq!(app.search_view().len(), 2);

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.view, View::Wizard);
    }

    #[test]
    fn proposal_request_saves_payload_with_quote() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        drive_to_results(&mut app);
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.view, View::Contact);

        for (field, text) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.com"),
            (ContactField::Message, "Let's talk"),
        ] {
            app.contact.cursor = ContactField::ALL.iter().position(|f| *f == field).unwrap();
            app.handle_key(KeyCode::Enter);
            type_text(&mut app, text);
            app.handle_key(KeyCode::Enter);
        }
        app.handle_key(KeyCode::Char('s'));

        assert_eq!(app.view, View::Wizard);
        let saved = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .find(|p| p.file_name().is_some_and(|n| n.to_string_lossy().starts_with("proposal-")))
            .unwrap();
        let payload: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(saved).unwrap()).unwrap();
        assert_eq!(payload["name"], "Ada");
        assert!(payload["quoteDetails"].as_str().unwrap().contains("\"totalCost\": 98500"));
    }

    #[test]
    fn cycle_option_wraps_to_none() {
        let options = ["a", "b"];
        assert_eq!(cycle_option(&options, None).as_deref(), Some("a"));
        assert_eq!(cycle_option(&options, Some("a")).as_deref(), Some("b"));
        assert_eq!(cycle_option(&options, Some("b")), None);
    }
}
