//! Rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use medidash_clinic::{
    pages::{DetailTab, PatientDetailsPage},
    shell::{active_item, NAV_ITEMS},
};
use medidash_contracts::navigation::View;
use medidash_core::{
    fields::{PatientField, RecordField},
    listing::SortState,
    session::demo_emails,
};

use crate::{
    app::{App, LoginFocus},
    form::FieldKind,
};

pub fn ui(f: &mut Frame, app: &App) {
    if app.view == View::Login {
        render_login(f, app);
        return;
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // sidebar + page
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, outer[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(outer[1]);

    render_sidebar(f, body[0], app);
    match app.view {
        View::Dashboard => render_dashboard(f, body[1], app),
        View::Patients => render_patients(f, body[1], app),
        View::PatientDetails => render_details(f, body[1], app),
        View::Appointments => render_appointments(f, body[1], app),
        View::MedicalRecords => render_records(f, body[1], app),
        View::NotFound | View::Login => render_not_found(f, body[1]),
    }
    render_footer(f, outer[2], app);

    if app.modal.is_some() {
        render_modal(f, app);
    }
}

// ── Login ─────────────────────────────────────────────────────────────────────

fn render_login(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 22, f.area());
    f.render_widget(Clear, area);

    let focus_style = |focus: LoginFocus| {
        if app.login.focus == focus {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        }
    };
    let masked: String = "•".repeat(app.login.password.chars().count());

    let mut lines = vec![
        Line::from(Span::styled(
            "MEDIDASH",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Sign in to your account"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Email     "),
            Span::styled(format!(" {:<36}", app.login.email), focus_style(LoginFocus::Email)),
        ]),
        Line::from(vec![
            Span::raw("Password  "),
            Span::styled(format!(" {:<36}", masked), focus_style(LoginFocus::Password)),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Continue as Guest ", focus_style(LoginFocus::Guest))),
        Line::from(""),
    ];

    if let Some(error) = &app.login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Demo accounts (password: password)",
        Style::default().fg(Color::DarkGray),
    )));
    for email in demo_emails() {
        lines.push(Line::from(Span::styled(
            format!("  {}", email),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Tab] ", Style::default().fg(Color::Cyan)),
        Span::raw("Next field  "),
        Span::styled("[Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw("Submit  "),
        Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
        Span::raw("Quit"),
    ]));
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(status.clone(), Style::default().fg(Color::Yellow))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Shell ─────────────────────────────────────────────────────────────────────

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let display = app.session.display();
    let mut spans = vec![
        Span::styled(
            "MEDIDASH    ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.view.title(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("    "),
    ];
    if app.session.is_guest() {
        spans.push(Span::styled(
            " GUEST MODE ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!(" {} ", display.initial),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));
    spans.push(Span::raw(format!(" {} ", display.name)));
    spans.push(Span::styled(display.role, Style::default().fg(Color::DarkGray)));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let active = active_item(&app.path);
    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if active == Some(item) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<18}", item.label), style),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(List::new(items).block(block), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let mut spans = if app.modal.is_some() {
        vec![
            key(" [Tab] "),
            Span::raw("Next field  "),
            key("[←/→] "),
            Span::raw("Change  "),
            key("[Enter] "),
            Span::raw("Submit  "),
            key("[Esc] "),
            Span::raw("Cancel"),
        ]
    } else if app.searching {
        vec![key(" [Enter/Esc] "), Span::raw("Done searching")]
    } else {
        let mut spans = vec![key(" [1-5] "), Span::raw("Menu  ")];
        match app.view {
            View::Patients => spans.extend([
                key("[/] "),
                Span::raw("Search  "),
                key("[←/→ s] "),
                Span::raw("Sort  "),
                key("[↑/↓ Enter] "),
                Span::raw("Open  "),
                key("[n] "),
                Span::raw("Add  "),
            ]),
            View::Appointments => spans.extend([
                key("[/] "),
                Span::raw("Search  "),
                key("[d] "),
                Span::raw("Date  "),
                key("[t] "),
                Span::raw("Type  "),
                key("[x] "),
                Span::raw("Clear  "),
                key("[n] "),
                Span::raw("Schedule  "),
            ]),
            View::MedicalRecords => spans.extend([
                key("[/] "),
                Span::raw("Search  "),
                key("[←/→ s] "),
                Span::raw("Sort  "),
                key("[t] "),
                Span::raw("Type  "),
                key("[n] "),
                Span::raw("Upload  "),
            ]),
            View::PatientDetails => spans.extend([
                key("[←/→] "),
                Span::raw("Tab  "),
                key("[n] "),
                Span::raw("Note  "),
                key("[Esc] "),
                Span::raw("Back  "),
            ]),
            View::NotFound => spans.extend([key("[Enter] "), Span::raw("Dashboard  ")]),
            View::Dashboard | View::Login => {}
        }
        spans.extend([key("[o] "), Span::raw("Sign out  "), key("[q] "), Span::raw("Quit")]);
        spans
    };

    if let Some(status) = &app.status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Yellow)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Pages ─────────────────────────────────────────────────────────────────────

fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let page = app.clinic.dashboard(&app.session.display());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Min(6),
        ])
        .split(area);

    let mut stats = vec![Span::styled(
        format!("{}   ", page.welcome()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for stat in page.stats() {
        stats.push(Span::styled(
            format!("{}: ", stat.name),
            Style::default().fg(Color::DarkGray),
        ));
        stats.push(Span::styled(
            format!("{}   ", stat.value),
            Style::default().fg(Color::Cyan),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(stats)).block(panel(" Overview ")),
        chunks[0],
    );

    let recent: Vec<ListItem> = page
        .recent_patients()
        .iter()
        .map(|p| {
            ListItem::new(format!(
                "{:<18} {:>3}  {:<13} {}  {}",
                p.name, p.age, p.status, p.date, p.condition
            ))
        })
        .collect();
    f.render_widget(List::new(recent).block(panel(" Recent Patients ")), chunks[1]);

    let upcoming: Vec<ListItem> = page
        .upcoming_appointments()
        .iter()
        .map(|a| {
            ListItem::new(format!(
                "{:<9} {:<18} {:<13} {}",
                a.time, a.patient, a.appointment_type, a.doctor
            ))
        })
        .collect();
    f.render_widget(
        List::new(upcoming).block(panel(" Upcoming Appointments ")),
        chunks[2],
    );
}

fn render_patients(f: &mut Frame, area: Rect, app: &App) {
    let page = &app.clinic.patients;
    let chunks = list_layout(area);
    render_search(f, chunks[0], app, page.search(), "name, email or condition");

    let header = Line::from(vec![
        sort_header(PatientField::Name, PatientField::Name.label(), 18, page.sort(), app.column == 0),
        Span::raw(" "),
        sort_header(PatientField::Age, PatientField::Age.label(), 5, page.sort(), app.column == 1),
        Span::raw(" "),
        Span::styled(format!("{:<7}", "Gender"), Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        sort_header(PatientField::LastVisit, PatientField::LastVisit.label(), 12, page.sort(), app.column == 2),
        Span::raw(" "),
        Span::styled("Condition", Style::default().fg(Color::DarkGray)),
    ]);

    let mut items = vec![ListItem::new(header)];
    for (i, p) in page.visible().iter().enumerate() {
        let line = format!(
            "{:<18} {:>5} {:<7} {:<12} {}",
            truncate(&p.name, 18),
            p.age,
            p.gender,
            p.last_visit,
            p.condition
        );
        items.push(row_item(line, i == app.row));
    }
    f.render_widget(List::new(items).block(panel(" Patients ")), chunks[1]);

    f.render_widget(
        Paragraph::new(page.summary()).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_appointments(f: &mut Frame, area: Rect, app: &App) {
    let page = &app.clinic.appointments;
    let chunks = list_layout(area);
    render_search(f, chunks[0], app, page.search(), "patient, type or doctor");

    let mut items: Vec<ListItem> = Vec::new();
    if page.is_empty_state() {
        items.push(ListItem::new(Span::styled(
            "No appointments found",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        items.push(ListItem::new(Span::styled(
            "Try adjusting your search or filter criteria.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for group in page.grouped() {
        items.push(ListItem::new(Span::styled(
            group.date.format("%A, %B %-d, %Y").to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for a in &group.appointments {
            items.push(ListItem::new(format!(
                "  {:<9} {:>3} min  {:<18} {:<13} {:<18} {}",
                a.time, a.duration, a.patient_name, a.appointment_type, a.doctor, a.status
            )));
        }
        items.push(ListItem::new(""));
    }
    f.render_widget(List::new(items).block(panel(" Appointments ")), chunks[1]);

    let date = page
        .date_filter()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "any".to_string());
    let kind = page.type_filter().unwrap_or("All Types");
    f.render_widget(
        Paragraph::new(format!("Date: {}   Type: {}", date, kind))
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_records(f: &mut Frame, area: Rect, app: &App) {
    let page = &app.clinic.records;
    let chunks = list_layout(area);
    render_search(f, chunks[0], app, page.search(), "patient, description or doctor");

    let widths = [18, 18, 22, 11, 18];
    let mut header = Vec::new();
    for (i, field) in RecordField::SORTABLE.iter().enumerate() {
        header.push(sort_header(*field, field.label(), widths[i], page.sort(), app.column == i));
        header.push(Span::raw(" "));
    }
    header.push(Span::styled("File", Style::default().fg(Color::DarkGray)));

    let mut items = vec![ListItem::new(Line::from(header))];
    for (i, r) in page.visible().iter().enumerate() {
        let line = format!(
            "{:<18} {:<18} {:<22} {:<11} {:<18} {}",
            truncate(&r.patient_name, 18),
            truncate(&r.record_type, 18),
            truncate(&r.description, 22),
            r.date,
            r.doctor,
            r.file_name
        );
        items.push(row_item(line, i == app.row));
    }
    f.render_widget(List::new(items).block(panel(" Medical Records ")), chunks[1]);

    let kind = page.type_filter().unwrap_or("All Types");
    f.render_widget(
        Paragraph::new(format!("Type: {}", kind)).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let Some(details) = &app.details else {
        render_not_found(f, area);
        return;
    };
    let p = details.patient();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // identity
            Constraint::Length(1), // tabs
            Constraint::Min(6),    // tab content
            Constraint::Length(7), // notes
        ])
        .split(area);

    let identity = vec![
        Line::from(vec![
            Span::styled(p.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("   {}, {} years   ", p.gender, p.age)),
            Span::styled(p.condition.clone(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            format!("{} | {} | {}", p.phone, p.email, p.address),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(identity).block(panel(" Patient ")), chunks[0]);

    let mut tabs = Vec::new();
    for (i, tab) in DetailTab::ALL.iter().enumerate() {
        let style = if *tab == details.tab() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let letter = (b'a' + i as u8) as char;
        tabs.push(Span::styled(format!(" {} {} ", letter, tab.label()), style));
        tabs.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), chunks[1]);

    f.render_widget(
        Paragraph::new(tab_lines(details))
            .block(panel(&format!(" {} ", details.tab().label())))
            .wrap(Wrap { trim: false }),
        chunks[2],
    );

    let notes: Vec<ListItem> = if details.notes().is_empty() {
        vec![ListItem::new(Span::styled(
            "No notes yet. Press n to add one.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        details
            .notes()
            .iter()
            .map(|n| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", n.created_at.format("%Y-%m-%d %H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{}: ", n.title), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(truncate(&n.content, 60)),
                ]))
            })
            .collect()
    };
    f.render_widget(List::new(notes).block(panel(" Clinical Notes ")), chunks[3]);
}

fn tab_lines(details: &PatientDetailsPage) -> Vec<Line<'static>> {
    let chart = details.chart();
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    match details.tab() {
        DetailTab::Overview => {
            let value = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());
            lines.push(Line::from(format!(
                "Blood type {}   Height {}   Weight {}",
                value(&chart.blood_type),
                value(&chart.height),
                value(&chart.weight)
            )));
            if !chart.allergies.is_empty() {
                lines.push(Line::from(format!("Allergies: {}", chart.allergies.join(", "))));
            }
            if let Some(contact) = &chart.emergency_contact {
                lines.push(Line::from(format!(
                    "Emergency contact: {} ({}) {}",
                    contact.name, contact.relation, contact.phone
                )));
            }
            if let Some(vitals) = chart.vital_signs.first() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(format!("Latest vitals, {}", vitals.date), dim)));
                lines.push(Line::from(format!(
                    "BP {}   HR {}   Temp {}   RR {}",
                    vitals.blood_pressure, vitals.heart_rate, vitals.temperature, vitals.respiratory_rate
                )));
            }
        }
        DetailTab::MedicalHistory => {
            for h in &chart.medical_history {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}  ", h.date), dim),
                    Span::raw(format!("{:<16} {:<16} {}", h.diagnosis, h.doctor, h.notes)),
                ]));
            }
        }
        DetailTab::Medications => {
            for m in &chart.medications {
                lines.push(Line::from(format!(
                    "{:<16} {:<8} {:<18} since {}",
                    m.name, m.dosage, m.frequency, m.start_date
                )));
            }
        }
        DetailTab::Appointments => {
            for v in &chart.appointments {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} {:<9} ", v.date, v.time), dim),
                    Span::raw(format!("{:<14} {:<16} {}", v.visit_type, v.doctor, v.status)),
                ]));
            }
        }
        DetailTab::LabResults => {
            for l in &chart.lab_results {
                let result_style = if l.is_abnormal() {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{}  ", l.date), dim),
                    Span::raw(format!("{:<28} ", l.test)),
                    Span::styled(format!("{:<9} ", l.result), result_style),
                    Span::raw(l.notes.clone()),
                ]));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("Nothing charted.", dim)));
    }
    lines
}

fn render_not_found(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "404",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Page not found", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("The page you are looking for does not exist."),
    ];
    f.render_widget(Paragraph::new(lines).block(panel(" Not Found ")), area);
}

// ── Modal ─────────────────────────────────────────────────────────────────────

fn render_modal(f: &mut Frame, app: &App) {
    let Some(modal) = app.modal else {
        return;
    };
    let fields = modal.fields();
    let height = fields.len() as u16 + app.form_errors.len() as u16 + 6;
    let area = centered_rect(64, height, f.area());
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, id) in fields.iter().enumerate() {
        let focused = i == app.field;
        let value = app.field_value(modal, *id);
        let shown = match id.kind() {
            FieldKind::Text if focused => format!("{}▏", value),
            FieldKind::Text => value,
            FieldKind::Choice | FieldKind::Date => format!("‹ {} ›", value),
        };
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", id.label()), Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {:<40}", truncate(&shown, 40)), style),
        ]));
    }

    lines.push(Line::from(""));
    for reason in &app.form_errors {
        lines.push(Line::from(Span::styled(
            format!("• {}", reason),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{}  ", modal.submit_label())),
        Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
        Span::raw("Cancel"),
    ]));

    let block = Block::default()
        .title(modal.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Widgets ───────────────────────────────────────────────────────────────────

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Search box, results, and a one-line summary.
fn list_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area)
}

fn render_search(f: &mut Frame, area: Rect, app: &App, text: &str, placeholder: &str) {
    let line = if app.searching {
        Line::from(vec![Span::raw(text.to_string()), Span::styled("▏", Style::default().fg(Color::Cyan))])
    } else if text.is_empty() {
        Line::from(Span::styled(
            format!("Search by {}…", placeholder),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(text.to_string())
    };
    let border = if app.searching { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Column header with the sort arrow when `field` is the active sort.
fn sort_header<F: Copy + Eq>(
    field: F,
    label: &str,
    width: usize,
    sort: &SortState<F>,
    highlighted: bool,
) -> Span<'static> {
    let text = match sort.indicator(field) {
        Some(arrow) => format!("{} {}", label, arrow),
        None => label.to_string(),
    };
    let mut style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
    if highlighted {
        style = style.add_modifier(Modifier::UNDERLINED).fg(Color::Cyan);
    }
    Span::styled(format!("{:<width$}", text, width = width), style)
}

fn row_item(line: String, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default()
    };
    ListItem::new(Span::styled(line, style))
}

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// A `width` × `height` rectangle centred in `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
