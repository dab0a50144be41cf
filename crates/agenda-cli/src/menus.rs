//! Interactive menu loops for both roles.
//!
//! Every action that shows or mutates events first runs the time-driven
//! status update and persists when it changed anything, so the on-disk
//! file never lags behind what the user was shown.

use chrono::{Local, NaiveDate, NaiveDateTime};

use agenda_core::{
    aggregate, apply_column_filters, events_on_day, filter_by_date_range, filter_by_period,
    filter_week_full, ColumnFilter, Event, EventDraft, EventId, EventPatch, EventStatus,
    EventStore, EventTable, Period, RowChoice, SelectionPolicy, StoreError, TextField,
};

use crate::auth::{self, Role, User};
use crate::i18n::Catalog;
use crate::storage::{DataDir, Settings};
use crate::term;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Top-level loop: register/login until the user quits. Each successful
/// login runs a full role session, after which control returns here.
pub fn run(data: &DataDir) -> anyhow::Result<()> {
    loop {
        let settings = data.load_settings();
        let t = Catalog::for_lang(&settings.lang).unwrap_or_else(Catalog::fallback);

        term::clear_screen();
        term::title(t.msg("menu_title"));
        // Empty input (including end-of-input) quits, same as "0", so the
        // loop can never spin on a closed stdin.
        match term::prompt(t.msg("prompt_register_or_login")).as_str() {
            "" | "0" => {
                term::info(t.msg("bye"));
                return Ok(());
            }
            "1" => {
                auth::register_interactive(data, t)?;
                term::pause(t.msg("press_enter"));
            }
            "2" => match auth::login_interactive(data, t) {
                Some(user) => {
                    let mut session = Session::open(data.clone(), settings, user)?;
                    session.run()?;
                }
                None => term::pause(t.msg("press_enter")),
            },
            _ => {
                term::error(t.msg("invalid_choice"));
                term::pause(t.msg("press_enter"));
            }
        }
    }
}

/// One logged-in user's state: the loaded store, their settings, and the
/// active message catalog.
struct Session {
    data: DataDir,
    store: EventStore,
    settings: Settings,
    catalog: &'static Catalog,
    user: User,
}

impl Session {
    fn open(data: DataDir, settings: Settings, user: User) -> anyhow::Result<Self> {
        let catalog = Catalog::for_lang(&settings.lang).unwrap_or_else(Catalog::fallback);
        let mut session = Self {
            store: EventStore::new(data.load_events()),
            data,
            settings,
            catalog,
            user,
        };
        session.refresh()?;
        Ok(session)
    }

    fn t(&self, key: &str) -> &'static str {
        self.catalog.msg(key)
    }

    fn persist(&self) -> anyhow::Result<()> {
        self.data.save_events(self.store.events())
    }

    /// Apply the scheduled-to-finished transition and persist if anything
    /// moved. Runs before every menu action.
    fn refresh(&mut self) -> anyhow::Result<()> {
        if self.store.auto_update(now()) {
            self.persist()?;
        }
        Ok(())
    }

    fn run(&mut self) -> anyhow::Result<()> {
        match self.user.role {
            Role::Visitor => self.visitor_loop(),
            Role::Organizer => self.organizer_loop(),
        }
    }

    fn print_menu(&self, title_key: &str, items: &[&str]) {
        term::clear_screen();
        term::title(self.t(title_key));
        for (i, item) in items.iter().enumerate() {
            println!("{}. {item}", i + 1);
        }
        println!("{}", self.t("menu_exit_item"));
    }

    fn visitor_loop(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu("menu_visitor_title", self.catalog.visitor_menu);
            let choice = term::prompt(self.t("prompt_choice"));
            self.refresh()?;
            match choice.as_str() {
                "" | "0" => return Ok(()),
                "1" => self.list_all()?,
                "2" => self.view_day()?,
                "3" => self.filter_menu()?,
                "4" => self.filter_by_time()?,
                "5" => self.filter_by_range()?,
                "6" => self.filter_full_week()?,
                "7" => self.attend()?,
                "8" => self.my_attendance()?,
                "9" => self.review()?,
                "10" => self.statistics()?,
                "11" => self.change_language()?,
                "12" => self.set_location()?,
                _ => {
                    term::error(self.t("invalid_choice"));
                    term::pause(self.t("press_enter"));
                }
            }
        }
    }

    fn organizer_loop(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu("menu_organizer_title", self.catalog.organizer_menu);
            let choice = term::prompt(self.t("prompt_choice"));
            self.refresh()?;
            match choice.as_str() {
                "" | "0" => return Ok(()),
                "1" => self.add_event()?,
                "2" => self.edit_event()?,
                "3" => self.delete_event()?,
                "4" => self.list_all()?,
                "5" => self.view_day()?,
                "6" => self.filter_menu()?,
                "7" => self.filter_by_time()?,
                "8" => self.filter_by_range()?,
                "9" => self.update_status()?,
                "10" => self.statistics()?,
                "11" => self.change_language()?,
                "12" => self.set_location()?,
                _ => {
                    term::error(self.t("invalid_choice"));
                    term::pause(self.t("press_enter"));
                }
            }
        }
    }

    // ----- browsing ------------------------------------------------------

    /// Render `events` as a numbered table and loop: a row number opens the
    /// detail view, cancel returns, bad input re-prompts.
    fn browse(
        &self,
        events: &[Event],
        policy: SelectionPolicy,
        header: Option<&str>,
    ) -> anyhow::Result<()> {
        loop {
            term::clear_screen();
            if let Some(h) = header {
                term::heading(h);
            }
            let table = EventTable::build(events, policy, today());
            if table.is_empty() {
                term::notice(self.t("no_events"));
                term::pause(self.t("press_enter"));
                return Ok(());
            }
            println!("{}", table.render(self.catalog.table_headers));
            if policy == SelectionPolicy::HidePast {
                term::info(self.t("show_all_hint"));
            }
            match table.resolve_input(&term::prompt(self.t("prompt_select_row"))) {
                Ok(RowChoice::Cancel) => return Ok(()),
                Ok(RowChoice::Row(id)) => {
                    if let Some(event) = events.iter().find(|e| e.id == id) {
                        self.show_detail(event);
                    }
                }
                Err(_) => {
                    term::error(self.t("invalid_input"));
                    term::pause(self.t("press_enter"));
                }
            }
        }
    }

    fn show_detail(&self, event: &Event) {
        term::clear_screen();
        term::title(self.t("detail_title"));
        let rows = [
            ("label_name", event.name.clone()),
            (
                "label_when",
                agenda_core::temporal::format_for_display(&event.datetime),
            ),
            ("label_location", event.location.clone()),
            ("label_address", event.address.clone()),
            ("label_organizer", event.organizer.clone()),
            ("label_category", event.category.clone()),
            ("label_status", event.status.to_string()),
            ("label_ticket", event.ticket_price.clone()),
            ("label_desc", event.description.clone()),
        ];
        for (key, value) in rows {
            println!("{:<14}: {value}", self.t(key));
        }

        term::heading(self.t("detail_attendees"));
        if event.attendees.is_empty() {
            println!("{}", self.t("no_attendees"));
        } else {
            for a in &event.attendees {
                println!(
                    "  - {} | {}",
                    a.username,
                    agenda_core::temporal::format_for_display(&a.timestamp)
                );
            }
        }

        term::heading(self.t("detail_reviews"));
        if event.reviews.is_empty() {
            println!("{}", self.t("no_reviews"));
        } else {
            for r in &event.reviews {
                println!("  - {} [{}/5] {}", r.username, r.rating, r.comment);
            }
        }

        term::pause(self.t("detail_back"));
    }

    /// Show the picker table and resolve a row choice to an event id,
    /// re-prompting on bad input until the user picks or cancels.
    fn pick_event(&self, policy: SelectionPolicy) -> Option<EventId> {
        loop {
            term::clear_screen();
            let table = EventTable::build(self.store.events(), policy, today());
            if table.is_empty() {
                term::notice(self.t("no_selectable"));
                term::pause(self.t("press_enter"));
                return None;
            }
            println!("{}", table.render(self.catalog.table_headers));
            match table.resolve_input(&term::prompt(self.t("prompt_select_row"))) {
                Ok(RowChoice::Cancel) => return None,
                Ok(RowChoice::Row(id)) => return Some(id),
                Err(_) => {
                    term::error(self.t("invalid_input"));
                    term::pause(self.t("press_enter"));
                }
            }
        }
    }

    fn list_all(&mut self) -> anyhow::Result<()> {
        let events = self.store.events().to_vec();
        self.browse(&events, SelectionPolicy::HidePast, Some(self.t("list_header")))
    }

    fn view_day(&mut self) -> anyhow::Result<()> {
        let Some(day) = self.prompt_date_or_today() else {
            return Ok(());
        };
        let matches = events_on_day(self.store.events(), day);
        self.browse(&matches, SelectionPolicy::ShowAll, Some(self.t("list_header")))
    }

    // ----- filters -------------------------------------------------------

    /// Empty input means today; a bad date shows a message and cancels.
    fn prompt_date_or_today(&self) -> Option<NaiveDate> {
        let input = term::prompt(self.t("prompt_reference_date"));
        if input.is_empty() {
            return Some(today());
        }
        match agenda_core::temporal::parse_date(&input) {
            Some(day) => Some(day),
            None => {
                term::error(self.t("invalid_date"));
                term::pause(self.t("press_enter"));
                None
            }
        }
    }

    fn prompt_date(&self, key: &str) -> Option<NaiveDate> {
        let input = term::prompt(self.t(key));
        if input.is_empty() || input == "0" {
            return None;
        }
        match agenda_core::temporal::parse_date(&input) {
            Some(day) => Some(day),
            None => {
                term::error(self.t("invalid_date"));
                term::pause(self.t("press_enter"));
                None
            }
        }
    }

    fn filter_by_time(&mut self) -> anyhow::Result<()> {
        let token = term::prompt(self.t("prompt_time_filter"));
        if token.is_empty() || token == "0" {
            return Ok(());
        }
        let Some(period) = Period::from_menu_token(&token) else {
            term::error(self.t("invalid_choice"));
            term::pause(self.t("press_enter"));
            return Ok(());
        };
        let Some(reference) = self.prompt_date_or_today() else {
            return Ok(());
        };
        let matches = filter_by_period(self.store.events(), period, reference);
        self.browse(
            &matches,
            SelectionPolicy::ShowAll,
            Some(self.t("filter_results_header")),
        )
    }

    fn filter_by_range(&mut self) -> anyhow::Result<()> {
        let Some(start) = self.prompt_date("prompt_range_start") else {
            return Ok(());
        };
        let Some(end) = self.prompt_date("prompt_range_end") else {
            return Ok(());
        };
        let matches = filter_by_date_range(self.store.events(), start, end);
        self.browse(
            &matches,
            SelectionPolicy::ShowAll,
            Some(self.t("filter_results_header")),
        )
    }

    fn filter_full_week(&mut self) -> anyhow::Result<()> {
        let Some(reference) = self.prompt_date_or_today() else {
            return Ok(());
        };
        let (matches, monday, sunday) = filter_week_full(self.store.events(), reference);
        let header = format!("{} {monday} - {sunday}", self.t("week_showing"));
        self.browse(&matches, SelectionPolicy::ShowAll, Some(header.as_str()))
    }

    /// Composite column filter: the user picks columns by number, supplies
    /// a keyword (or date mode) per column, and the steps intersect left to
    /// right.
    fn filter_menu(&mut self) -> anyhow::Result<()> {
        term::clear_screen();
        term::title(self.t("filter_title"));
        for (i, label) in self.catalog.filter_columns.iter().enumerate() {
            println!("{}. {label}", i + 1);
        }
        term::info(self.t("filter_columns_hint"));

        let input = term::prompt(self.t("filter_column_prompt"));
        if input.is_empty() || input == "0" {
            return Ok(());
        }
        let columns: Vec<usize> = input
            .split(',')
            .filter_map(|tok| tok.trim().parse().ok())
            .filter(|n| (1..=self.catalog.filter_columns.len()).contains(n))
            .collect();
        if columns.is_empty() {
            term::error(self.t("invalid_input"));
            term::pause(self.t("press_enter"));
            return Ok(());
        }

        let mut filters = Vec::new();
        for column in columns {
            match column {
                2 => {
                    let Some(filter) = self.prompt_datetime_filter() else {
                        return Ok(());
                    };
                    filters.push(filter);
                }
                n => {
                    let field = match n {
                        1 => TextField::Name,
                        3 => TextField::Location,
                        4 => TextField::Address,
                        5 => TextField::Organizer,
                        6 => TextField::Category,
                        7 => TextField::Status,
                        _ => TextField::TicketPrice,
                    };
                    let label = self.catalog.filter_columns[n - 1];
                    let prompt = self.t("filter_keyword_prompt").replace("{}", label);
                    filters.push(ColumnFilter::Text {
                        field,
                        keyword: term::prompt(&prompt),
                    });
                }
            }
        }

        let matches = apply_column_filters(self.store.events(), &filters);
        self.browse(
            &matches,
            SelectionPolicy::ShowAll,
            Some(self.t("filter_results_header")),
        )
    }

    fn prompt_datetime_filter(&self) -> Option<ColumnFilter> {
        term::info(self.t("filter_datetime_modes"));
        match term::prompt(self.t("filter_mode_prompt")).as_str() {
            "1" => self.prompt_date("prompt_reference_date").map(ColumnFilter::DateExact),
            "2" => {
                let start = self.prompt_date("prompt_range_start")?;
                let end = self.prompt_date("prompt_range_end")?;
                Some(ColumnFilter::DateRange(start, end))
            }
            _ => {
                let keyword = term::prompt(self.t("filter_datetime_keyword_prompt"));
                Some(ColumnFilter::DateSubstring(keyword))
            }
        }
    }

    // ----- organizer actions ---------------------------------------------

    /// Prompt for a datetime, looping on bad format. Empty input cancels.
    fn prompt_event_datetime(&self) -> Option<NaiveDateTime> {
        loop {
            let input = term::prompt(self.t("prompt_datetime"));
            if input.is_empty() || input == "0" {
                return None;
            }
            match agenda_core::temporal::parse_datetime(&input) {
                Some(dt) => return Some(dt),
                None => term::error(self.t("invalid_date")),
            }
        }
    }

    fn add_event(&mut self) -> anyhow::Result<()> {
        term::clear_screen();
        term::heading(self.t("add_header"));

        let name = term::prompt(self.t("prompt_name"));
        if name.is_empty() || name == "0" {
            return Ok(());
        }
        let Some(datetime) = self.prompt_event_datetime() else {
            return Ok(());
        };
        let draft = EventDraft {
            name,
            datetime,
            location: term::prompt(self.t("prompt_location")),
            address: term::prompt(self.t("prompt_address")),
            organizer: term::prompt(self.t("prompt_organizer")),
            description: term::prompt(self.t("prompt_description")),
            ticket_price: term::prompt(self.t("prompt_ticket")),
            category: term::prompt(self.t("prompt_category")),
        };
        self.store.create(draft);
        self.persist()?;
        term::success(self.t("event_added"));
        term::pause(self.t("press_enter"));
        Ok(())
    }

    fn edit_event(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_event(SelectionPolicy::ShowAll) else {
            return Ok(());
        };
        let Some(current) = self.store.get(id).cloned() else {
            return Ok(());
        };

        term::clear_screen();
        term::heading(self.t("edit_header"));
        self.print_current(&current);

        let name = non_empty(term::prompt(self.t("prompt_name")));
        // One bad datetime aborts the whole edit; no field has been
        // applied yet at this point.
        let datetime = {
            let input = term::prompt(self.t("prompt_datetime"));
            if input.is_empty() {
                None
            } else {
                match agenda_core::temporal::parse_datetime(&input) {
                    Some(dt) => Some(dt),
                    None => {
                        term::error(self.t("invalid_date"));
                        term::pause(self.t("press_enter"));
                        return Ok(());
                    }
                }
            }
        };
        let location = non_empty(term::prompt(self.t("prompt_location")));
        let address = non_empty(term::prompt(self.t("prompt_address")));
        let organizer = non_empty(term::prompt(self.t("prompt_organizer")));
        let description = non_empty(term::prompt(self.t("prompt_description")));
        let ticket_price = non_empty(term::prompt(self.t("prompt_ticket")));
        let category = non_empty(term::prompt(self.t("prompt_category")));

        println!("{} {}", self.t("current_status"), current.status);
        // Any token outside 1..=4 leaves the status unchanged.
        let status = EventStatus::from_menu_token(&term::prompt(self.t("prompt_status_num")));

        let patch = EventPatch {
            name,
            datetime,
            location,
            address,
            organizer,
            description,
            ticket_price,
            category,
            status,
        };

        self.store.apply_patch(id, patch)?;
        self.persist()?;
        term::success(self.t("event_updated"));
        term::pause(self.t("press_enter"));
        Ok(())
    }

    fn print_current(&self, event: &Event) {
        println!(
            "{}: {} | {} | {} | {} | {} | {} | {} | {}",
            event.id,
            event.name,
            agenda_core::temporal::format_for_display(&event.datetime),
            event.location,
            event.address,
            event.organizer,
            event.category,
            event.status,
            event.ticket_price,
        );
    }

    fn delete_event(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_event(SelectionPolicy::ShowAll) else {
            return Ok(());
        };
        if let Some(event) = self.store.get(id) {
            self.print_current(event);
        }
        let confirm = term::prompt(self.t("prompt_confirm_delete"));
        if confirm.eq_ignore_ascii_case("yes") || confirm.eq_ignore_ascii_case("ya") {
            self.store.delete(id)?;
            self.persist()?;
            term::success(self.t("event_deleted"));
        } else {
            term::error(self.t("invalid_choice"));
        }
        term::pause(self.t("press_enter"));
        Ok(())
    }

    fn update_status(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_event(SelectionPolicy::ShowAll) else {
            return Ok(());
        };
        if let Some(event) = self.store.get(id) {
            println!("{} {}", self.t("current_status"), event.status);
        }
        let token = term::prompt(self.t("prompt_status_num"));
        match EventStatus::from_menu_token(&token) {
            Some(status) => {
                self.store.set_status(id, status)?;
                self.persist()?;
                term::success(self.t("status_updated"));
            }
            None => term::error(self.t("invalid_choice")),
        }
        term::pause(self.t("press_enter"));
        Ok(())
    }

    // ----- visitor actions -----------------------------------------------

    fn attend(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_event(SelectionPolicy::HidePast) else {
            return Ok(());
        };
        let username = self.user.username.clone();
        match self.store.attend(id, &username, now()) {
            Ok(()) => {
                self.persist()?;
                term::success(self.t("attend_confirmed"));
            }
            Err(StoreError::AlreadyAttending) => term::notice(self.t("already_attending")),
            Err(err) => return Err(err.into()),
        }
        term::pause(self.t("press_enter"));
        Ok(())
    }

    fn my_attendance(&mut self) -> anyhow::Result<()> {
        let mine = self.store.attended_by(&self.user.username);
        if mine.is_empty() {
            term::notice(self.t("my_attendance_empty"));
            term::pause(self.t("press_enter"));
            return Ok(());
        }
        self.browse(&mine, SelectionPolicy::ShowAll, Some(self.t("list_header")))
    }

    fn review(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_event(SelectionPolicy::HidePast) else {
            return Ok(());
        };
        let username = self.user.username.clone();

        // Pre-check before prompting so the user is not asked for a rating
        // that could never be accepted.
        if let Some(event) = self.store.get(id) {
            if event.status != EventStatus::Finished {
                term::error(self.t("not_allowed_review"));
                term::pause(self.t("press_enter"));
                return Ok(());
            }
            if event.has_review_by(&username) {
                term::notice(self.t("already_reviewed"));
                term::pause(self.t("press_enter"));
                return Ok(());
            }
        }

        let rating = loop {
            let input = term::prompt(self.t("prompt_review_rating"));
            if input.is_empty() || input == "0" {
                return Ok(());
            }
            match input.parse::<u8>() {
                Ok(n) if (1..=5).contains(&n) => break n,
                _ => term::error(self.t("invalid_rating")),
            }
        };
        let comment = term::prompt(self.t("prompt_review_comment"));

        match self.store.add_review(id, &username, rating, &comment, now()) {
            Ok(()) => {
                self.persist()?;
                term::success(self.t("review_added"));
            }
            Err(StoreError::NotFinished) => term::error(self.t("not_allowed_review")),
            Err(StoreError::AlreadyReviewed) => term::notice(self.t("already_reviewed")),
            Err(StoreError::InvalidRating(_)) => term::error(self.t("invalid_rating")),
            Err(err) => return Err(err.into()),
        }
        term::pause(self.t("press_enter"));
        Ok(())
    }

    // ----- shared actions ------------------------------------------------

    fn statistics(&mut self) -> anyhow::Result<()> {
        let stats = aggregate(self.store.events());
        term::clear_screen();
        term::title(self.t("stats_title"));
        for (header, table) in [
            ("stats_by_category", &stats.by_category),
            ("stats_by_month", &stats.by_month),
            ("stats_by_city", &stats.by_city),
        ] {
            term::heading(self.t(header));
            for (name, count) in table {
                println!("  {name}: {count}");
            }
        }
        term::pause(self.t("press_enter"));
        Ok(())
    }

    fn change_language(&mut self) -> anyhow::Result<()> {
        let code = term::prompt(self.t("prompt_lang"));
        if code.is_empty() || code == "0" {
            return Ok(());
        }
        match Catalog::for_lang(&code) {
            Some(catalog) => {
                self.catalog = catalog;
                self.settings.lang = catalog.code.to_string();
                self.data.save_settings(&self.settings)?;
                term::success(&format!("{}{}", self.t("lang_changed"), catalog.code));
            }
            None => term::error(self.t("invalid_choice")),
        }
        term::pause(self.t("press_enter"));
        Ok(())
    }

    fn set_location(&mut self) -> anyhow::Result<()> {
        let input = term::prompt(self.t("prompt_set_location"));
        if input.is_empty() {
            return Ok(());
        }
        self.settings.user_location = input;
        self.data.save_settings(&self.settings)?;
        term::success(self.t("settings_saved"));
        term::pause(self.t("press_enter"));
        Ok(())
    }
}

fn non_empty(input: String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}
