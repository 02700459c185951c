//! Dashboard state and key handling.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use medidash_clinic::{
    pages::{DetailTab, PatientDetailsPage},
    shell::{self, NAV_ITEMS},
    Clinic,
};
use medidash_contracts::{
    error::{MedidashError, MedidashResult},
    navigation::{Navigation, View},
};
use medidash_core::{
    fields::{PatientField, RecordField},
    traits::RouteResolver,
    SessionManager,
};
use medidash_forms::options::{APPOINTMENT_TYPES, RECORD_TYPES};
use medidash_router::TomlRouteTable;

use crate::form::{cycle, DraftFields, FieldId, FieldKind, Modal};

// ── Login form ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Guest,
}

impl LoginFocus {
    fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Guest,
            LoginFocus::Guest => LoginFocus::Email,
        }
    }

    fn previous(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Guest,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Guest => LoginFocus::Password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginFocus,
    pub error: Option<String>,
}

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    pub session: SessionManager,
    pub routes: TomlRouteTable,
    pub clinic: Clinic,
    pub today: NaiveDate,

    // Where the router put us.
    pub path: String,
    pub view: View,
    pub details: Option<PatientDetailsPage>,

    pub login: LoginForm,

    // Typing goes into the page's search box.
    pub searching: bool,
    // Highlighted row of the patient or record table.
    pub row: usize,
    // Highlighted sortable column.
    pub column: usize,

    // Open modal, focused field, and the reasons the last submit was refused.
    pub modal: Option<Modal>,
    pub field: usize,
    pub form_errors: Vec<String>,

    // One-line message for the footer.
    pub status: Option<String>,
    pub quit: bool,
}

impl App {
    /// Build the app and open the dashboard root, which lands on the login
    /// screen when nobody is signed in.
    pub fn start(
        session: SessionManager,
        routes: TomlRouteTable,
        clinic: Clinic,
        today: NaiveDate,
    ) -> MedidashResult<Self> {
        let mut app = Self {
            session,
            routes,
            clinic,
            today,
            path: String::new(),
            view: View::Login,
            details: None,
            login: LoginForm::default(),
            searching: false,
            row: 0,
            column: 0,
            modal: None,
            field: 0,
            form_errors: Vec::new(),
            status: None,
            quit: false,
        };
        app.navigate("/")?;
        app.status = None;
        Ok(app)
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// Follow a link. Gated paths land on the login path instead.
    pub fn navigate(&mut self, path: &str) -> MedidashResult<()> {
        let mut target = path.to_string();
        let mut nav = self.routes.resolve(&self.session.navigation_request(&target))?;
        if let Navigation::Redirect { to } = nav {
            self.status = Some(format!("Sign in or continue as a guest to open {}", path));
            nav = self.routes.resolve(&self.session.navigation_request(&to))?;
            target = to;
        }
        let Navigation::Render { view, params } = nav else {
            return Err(MedidashError::RouteTable {
                reason: format!("login path '{}' redirects again", target),
            });
        };

        let mut view = view;
        self.details = None;
        if view == View::PatientDetails {
            let id = params.get("id").map(String::as_str).unwrap_or_default();
            self.details = self.clinic.patient_details(id)?;
            if self.details.is_none() {
                view = View::NotFound;
            }
        }

        debug!(path = %target, view = ?view, "navigated");
        self.path = target;
        self.view = view;
        self.searching = false;
        self.row = 0;
        self.column = 0;
        Ok(())
    }

    fn sign_out(&mut self) -> MedidashResult<()> {
        let next = shell::sign_out(&mut self.session, &self.routes)?;
        self.login = LoginForm::default();
        self.navigate(&next)?;
        self.status = Some("Signed out".to_string());
        Ok(())
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> MedidashResult<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        if let Some(modal) = self.modal {
            return self.handle_modal_key(modal, key);
        }
        if self.view == View::Login {
            return self.handle_login_key(key);
        }
        if self.searching {
            self.handle_search_key(key);
            return Ok(());
        }
        self.handle_page_key(key)
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> MedidashResult<()> {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.login.focus = self.login.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.login.focus = self.login.focus.previous(),
            KeyCode::Char(c) => match self.login.focus {
                LoginFocus::Email => self.login.email.push(c),
                LoginFocus::Password => self.login.password.push(c),
                LoginFocus::Guest => {}
            },
            KeyCode::Backspace => match self.login.focus {
                LoginFocus::Email => {
                    self.login.email.pop();
                }
                LoginFocus::Password => {
                    self.login.password.pop();
                }
                LoginFocus::Guest => {}
            },
            KeyCode::Enter if self.login.focus == LoginFocus::Guest => {
                self.session.guest_enter()?;
                self.login = LoginForm::default();
                self.navigate("/")?;
                self.status = None;
            }
            KeyCode::Enter => {
                let (email, password) = (self.login.email.clone(), self.login.password.clone());
                if self.session.login(&email, &password)? {
                    self.login = LoginForm::default();
                    self.navigate("/")?;
                    self.status = None;
                } else {
                    self.login.error = Some("Invalid email or password".to_string());
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(mut text) = self.search_text().map(str::to_string) else {
            self.searching = false;
            return;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.searching = false;
                return;
            }
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => return,
        }
        self.set_search_text(text);
        self.row = 0;
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> MedidashResult<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('o') => return self.sign_out(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(item) = NAV_ITEMS.get(index) {
                    return self.navigate(item.path);
                }
                return Ok(());
            }
            KeyCode::Char('/') if self.search_text().is_some() => {
                self.searching = true;
                return Ok(());
            }
            _ => {}
        }

        match self.view {
            View::Patients => self.handle_patients_key(key),
            View::Appointments => {
                self.handle_appointments_key(key);
                Ok(())
            }
            View::MedicalRecords => {
                self.handle_records_key(key);
                Ok(())
            }
            View::PatientDetails => self.handle_details_key(key),
            View::NotFound => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.navigate("/"),
                _ => Ok(()),
            },
            View::Dashboard | View::Login => Ok(()),
        }
    }

    fn handle_patients_key(&mut self, key: KeyEvent) -> MedidashResult<()> {
        let rows = self.clinic.patients.visible().len();
        match key.code {
            KeyCode::Up => self.row = self.row.saturating_sub(1),
            KeyCode::Down => self.row = (self.row + 1).min(rows.saturating_sub(1)),
            KeyCode::Left => self.column = self.column.saturating_sub(1),
            KeyCode::Right => self.column = (self.column + 1).min(PatientField::SORTABLE.len() - 1),
            KeyCode::Char('s') => self.clinic.patients.sort_by(PatientField::SORTABLE[self.column]),
            KeyCode::Char('n') => {
                self.clinic.patients.open_add();
                self.open_modal(Modal::AddPatient);
            }
            KeyCode::Enter => {
                let id = self.clinic.patients.visible().get(self.row).map(|p| p.id.clone());
                if let Some(id) = id {
                    return self.navigate(&format!("/patients/{}", id));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_appointments_key(&mut self, key: KeyEvent) {
        let page = &mut self.clinic.appointments;
        match key.code {
            KeyCode::Char('t') => {
                let next = next_filter(&APPOINTMENT_TYPES, page.type_filter());
                page.set_type_filter(next);
            }
            KeyCode::Char('d') => {
                let dates: BTreeSet<NaiveDate> = page.appointments().iter().map(|a| a.date).collect();
                let next = match page.date_filter() {
                    None => dates.first().copied(),
                    Some(current) => dates.range(current.succ_opt().unwrap_or(current)..).next().copied(),
                };
                page.set_date_filter(next);
            }
            KeyCode::Char('x') => {
                page.set_date_filter(None);
                page.set_type_filter(None);
                page.set_search("");
            }
            KeyCode::Char('n') => {
                page.open_schedule(self.today);
                self.open_modal(Modal::Schedule);
            }
            _ => {}
        }
    }

    fn handle_records_key(&mut self, key: KeyEvent) {
        let rows = self.clinic.records.visible().len();
        match key.code {
            KeyCode::Up => self.row = self.row.saturating_sub(1),
            KeyCode::Down => self.row = (self.row + 1).min(rows.saturating_sub(1)),
            KeyCode::Left => self.column = self.column.saturating_sub(1),
            KeyCode::Right => self.column = (self.column + 1).min(RecordField::SORTABLE.len() - 1),
            KeyCode::Char('s') => self.clinic.records.sort_by(RecordField::SORTABLE[self.column]),
            KeyCode::Char('t') => {
                let next = next_filter(&RECORD_TYPES, self.clinic.records.type_filter());
                self.clinic.records.set_type_filter(next);
                self.row = 0;
            }
            KeyCode::Char('n') => {
                self.clinic.records.open_upload();
                self.open_modal(Modal::UploadRecord);
            }
            _ => {}
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> MedidashResult<()> {
        if key.code == KeyCode::Esc {
            return self.navigate("/patients");
        }
        let Some(details) = self.details.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Right | KeyCode::Tab => details.select_tab(details.tab().next()),
            KeyCode::Left | KeyCode::BackTab => details.select_tab(details.tab().previous()),
            KeyCode::Char(c @ 'a'..='e') => {
                let index = c as usize - 'a' as usize;
                details.select_tab(DetailTab::ALL[index]);
            }
            KeyCode::Char('n') => {
                details.open_note();
                self.open_modal(Modal::AddNote);
            }
            _ => {}
        }
        Ok(())
    }

    // ── Search ────────────────────────────────────────────────────────────────

    /// The current page's search text, if the page has a search box.
    pub fn search_text(&self) -> Option<&str> {
        match self.view {
            View::Patients => Some(self.clinic.patients.search()),
            View::Appointments => Some(self.clinic.appointments.search()),
            View::MedicalRecords => Some(self.clinic.records.search()),
            _ => None,
        }
    }

    fn set_search_text(&mut self, text: String) {
        match self.view {
            View::Patients => self.clinic.patients.set_search(text),
            View::Appointments => self.clinic.appointments.set_search(text),
            View::MedicalRecords => self.clinic.records.set_search(text),
            _ => {}
        }
    }

    // ── Modals ────────────────────────────────────────────────────────────────

    fn open_modal(&mut self, modal: Modal) {
        debug!(modal = ?modal, "opened modal");
        self.modal = Some(modal);
        self.field = 0;
        self.form_errors.clear();
    }

    fn close_modal(&mut self) {
        match self.modal {
            Some(Modal::AddPatient) => self.clinic.patients.cancel_add(),
            Some(Modal::Schedule) => self.clinic.appointments.cancel_schedule(),
            Some(Modal::UploadRecord) => self.clinic.records.cancel_upload(),
            Some(Modal::AddNote) => {
                if let Some(details) = self.details.as_mut() {
                    details.cancel_note();
                }
            }
            None => {}
        }
        self.modal = None;
        self.field = 0;
        self.form_errors.clear();
    }

    fn handle_modal_key(&mut self, modal: Modal, key: KeyEvent) -> MedidashResult<()> {
        let fields = modal.fields();
        let id = fields[self.field.min(fields.len() - 1)];
        match key.code {
            KeyCode::Esc => self.close_modal(),
            KeyCode::Tab | KeyCode::Down => self.field = (self.field + 1) % fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.field = (self.field + fields.len() - 1) % fields.len()
            }
            KeyCode::Enter => return self.submit_modal(modal),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match id.kind() {
                    FieldKind::Choice => {
                        let options = self.choices(modal, id);
                        if let Some(slot) = self.slot(modal, id) {
                            let next = cycle(&options, slot, forward);
                            *slot = next;
                        }
                    }
                    FieldKind::Date => self.shift_date(forward),
                    FieldKind::Text => {}
                }
            }
            KeyCode::Char(c) if id.kind() == FieldKind::Text => {
                if let Some(slot) = self.slot(modal, id) {
                    slot.push(c);
                }
            }
            KeyCode::Backspace if id.kind() == FieldKind::Text => {
                if let Some(slot) = self.slot(modal, id) {
                    slot.pop();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn submit_modal(&mut self, modal: Modal) -> MedidashResult<()> {
        let outcome = match modal {
            Modal::AddPatient => self
                .clinic
                .add_patient(self.today)
                .map(|p| p.map(|p| format!("Added patient {}", p.name))),
            Modal::Schedule => self.clinic.schedule_appointment().map(|a| {
                a.map(|a| format!("Scheduled {} for {} at {}", a.appointment_type, a.patient_name, a.time))
            }),
            Modal::UploadRecord => {
                if let Some(draft) = self.clinic.records.draft_mut() {
                    if draft.file_name.as_deref().is_some_and(str::is_empty) {
                        draft.file_name = None;
                    }
                }
                self.clinic
                    .upload_record(self.today)
                    .map(|r| r.map(|r| format!("Uploaded {} for {}", r.record_type, r.patient_name)))
            }
            Modal::AddNote => match self.details.as_mut() {
                Some(details) => details
                    .submit_note(self.clinic.verifier())
                    .map(|n| n.map(|n| format!("Saved note \"{}\"", n.title))),
                None => Ok(None),
            },
        };

        match outcome {
            Ok(Some(message)) => {
                info!(modal = ?modal, "form submitted");
                // The page already dropped its draft.
                self.modal = None;
                self.field = 0;
                self.form_errors.clear();
                self.status = Some(message);
            }
            // Only the scheduler drops a submission, when no roster patient
            // is selected.
            Ok(None) => self.form_errors = vec!["Select a patient to schedule".to_string()],
            Err(MedidashError::FormInvalid { reasons, .. }) => self.form_errors = reasons,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Options of choice field `id` in `modal`. The patient picker starts
    /// with the empty "no selection" entry.
    fn choices(&self, modal: Modal, id: FieldId) -> Vec<String> {
        if id != FieldId::Patient {
            return id.options();
        }
        let roster = match modal {
            Modal::Schedule => self.clinic.appointments.patient_choices(),
            Modal::UploadRecord => self.clinic.records.patient_choices(),
            _ => Vec::new(),
        };
        std::iter::once(String::new())
            .chain(roster.into_iter().map(|p| p.id))
            .collect()
    }

    fn slot(&mut self, modal: Modal, id: FieldId) -> Option<&mut String> {
        match modal {
            Modal::AddPatient => self.clinic.patients.draft_mut()?.slot(id),
            Modal::Schedule => self.clinic.appointments.draft_mut()?.slot(id),
            Modal::UploadRecord => self.clinic.records.draft_mut()?.slot(id),
            Modal::AddNote => self.details.as_mut()?.note_draft_mut()?.slot(id),
        }
    }

    /// Text shown for field `id` of the open modal.
    pub fn field_value(&self, modal: Modal, id: FieldId) -> String {
        if id == FieldId::Date {
            return self
                .clinic
                .appointments
                .draft()
                .map(|d| d.date.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
        }
        let value = match modal {
            Modal::AddPatient => self.clinic.patients.draft().and_then(|d| d.value(id)),
            Modal::Schedule => self.clinic.appointments.draft().and_then(|d| d.value(id)),
            Modal::UploadRecord => self.clinic.records.draft().and_then(|d| d.value(id)),
            Modal::AddNote => self
                .details
                .as_ref()
                .and_then(|d| d.note_draft())
                .and_then(|d| d.value(id)),
        }
        .unwrap_or_default();

        if id == FieldId::Patient {
            if value.is_empty() {
                return "Select a patient".to_string();
            }
            return self
                .clinic
                .patients
                .patients()
                .iter()
                .find(|p| p.id == value)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| value.to_string());
        }
        value.to_string()
    }

    fn shift_date(&mut self, forward: bool) {
        if let Some(draft) = self.clinic.appointments.draft_mut() {
            let shifted = if forward {
                draft.date.succ_opt()
            } else {
                draft.date.pred_opt()
            };
            if let Some(date) = shifted {
                draft.date = date;
            }
        }
    }
}

/// Step an exact-match filter: cleared → first option → … → last → cleared.
fn next_filter(options: &[&str], current: Option<&str>) -> Option<String> {
    let next = match current {
        None => options.first(),
        Some(value) => options
            .iter()
            .position(|o| *o == value)
            .and_then(|i| options.get(i + 1)),
    };
    next.map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medidash_storage::InMemoryStore;

    // ── 1. Login screen ───────────────────────────────────────────────────────

    #[test]
    fn anonymous_start_lands_on_login() {
        let app = app();
        assert_eq!(app.view, View::Login);
        assert_eq!(app.path, "/login");
    }

    #[test]
    fn demo_account_signs_in_to_dashboard() {
        let mut app = app();
        sign_in(&mut app);
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(app.path, "/");
        assert_eq!(app.session.display().name, "Dr. John Smith");
    }

    #[test]
    fn wrong_password_stays_on_login() {
        let mut app = app();
        type_text(&mut app, "doctor@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "nope");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::Login);
        assert_eq!(app.login.error.as_deref(), Some("Invalid email or password"));
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn guest_entry_opens_dashboard() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.login.focus, LoginFocus::Guest);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::Dashboard);
        assert!(app.session.is_guest());
    }

    // ── 2. Navigation ─────────────────────────────────────────────────────────

    #[test]
    fn number_keys_follow_sidebar_links() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view, View::Patients);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view, View::MedicalRecords);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.view, View::NotFound);
        assert_eq!(app.path, "/settings");
    }

    #[test]
    fn sign_out_then_gated_page_redirects() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.view, View::Login);
        assert!(!app.session.is_authenticated());

        // Typed keys now go to the login form, so navigate directly.
        app.navigate("/patients").unwrap();
        assert_eq!(app.view, View::Login);
        assert_eq!(app.path, "/login");
        assert!(app.status.is_some());
    }

    #[test]
    fn enter_on_patient_row_opens_chart() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::PatientDetails);
        assert_eq!(app.path, "/patients/1");

        press(&mut app, KeyCode::Right);
        let tab = app.details.as_ref().unwrap().tab();
        assert_eq!(tab, DetailTab::MedicalHistory);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Patients);
    }

    #[test]
    fn unknown_patient_id_is_not_found() {
        let mut app = signed_in();
        app.navigate("/patients/99").unwrap();
        assert_eq!(app.view, View::NotFound);
        assert!(app.details.is_none());
    }

    // ── 3. Listings ───────────────────────────────────────────────────────────

    #[test]
    fn search_box_filters_patients() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "wilson");
        press(&mut app, KeyCode::Enter);
        assert!(!app.searching);

        let names: Vec<_> = app.clinic.patients.visible().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Emma Wilson", "David Wilson"]);
    }

    #[test]
    fn sort_key_sorts_highlighted_column() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.clinic.patients.sort().field(), Some(PatientField::Age));

        let ages: Vec<i64> = app.clinic.patients.visible().iter().map(|p| p.age).collect();
        let mut sorted = ages.clone();
        sorted.sort();
        assert_eq!(ages, sorted);
    }

    #[test]
    fn type_filter_cycles_and_clears() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.clinic.appointments.type_filter(), Some(APPOINTMENT_TYPES[0]));

        for _ in 0..APPOINTMENT_TYPES.len() {
            press(&mut app, KeyCode::Char('t'));
        }
        assert_eq!(app.clinic.appointments.type_filter(), None);
    }

    #[test]
    fn date_filter_steps_through_days() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        let first = app.clinic.appointments.date_filter().unwrap();
        press(&mut app, KeyCode::Char('d'));
        let second = app.clinic.appointments.date_filter().unwrap();
        assert!(second > first);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.clinic.appointments.date_filter(), None);
    }

    // ── 4. Modals ─────────────────────────────────────────────────────────────

    #[test]
    fn add_patient_modal_submits() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.modal, Some(Modal::AddPatient));

        type_text(&mut app, "Test Patient");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "40");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        for value in ["(555) 000-0000", "test@example.com", "1 Test Way", "Checkup"] {
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, value);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modal, None);
        let patients = app.clinic.patients.patients();
        assert_eq!(patients.len(), 11);
        assert_eq!(patients[0].id, "11");
        assert_eq!(patients[0].gender, "Male");
    }

    #[test]
    fn invalid_patient_keeps_modal_open() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modal, Some(Modal::AddPatient));
        assert!(!app.form_errors.is_empty());
        assert_eq!(app.clinic.patients.patients().len(), 10);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
        assert!(app.clinic.patients.draft().is_none());
    }

    #[test]
    fn schedule_needs_a_patient() {
        let mut app = signed_in();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::Schedule));
        assert_eq!(app.form_errors, vec!["Select a patient to schedule"]);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.field_value(Modal::Schedule, FieldId::Patient), "Emma Wilson");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, None);
        assert_eq!(app.clinic.appointments.appointments().len(), 11);
    }

    #[test]
    fn note_modal_adds_note() {
        let mut app = signed_in();
        app.navigate("/patients/1").unwrap();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Follow-up");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Recheck in two weeks");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.modal, None);
        let notes = app.details.as_ref().unwrap().notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Follow-up");
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn app() -> App {
        let session = SessionManager::new(Box::new(InMemoryStore::new()), Box::new(InMemoryStore::new()));
        App::start(
            session,
            TomlRouteTable::builtin().unwrap(),
            Clinic::load().unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        )
        .unwrap()
    }

    fn signed_in() -> App {
        let mut app = app();
        sign_in(&mut app);
        app
    }

    fn sign_in(app: &mut App) {
        type_text(app, "doctor@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "password");
        press(app, KeyCode::Enter);
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }
}
