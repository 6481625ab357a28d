// File: ./src/page.rs
//! Page initialization and the two disclosure buttons.
//!
//! `Page` owns all state that lives for the lifetime of a page load: the
//! calendar controller, the rendered teacher list, the JSON-LD blocks for the
//! head and the visibility of the "show less" button.
use crate::calendar::MilongaCalendar;
use crate::client::FeedClient;
use crate::config::Config;
use crate::controller::DisclosureController;
use crate::markup::html_escape;
use crate::model::Teacher;
use crate::schema::{self, SchemaOptions};
use crate::status::StatusRegion;
use crate::surface::HtmlList;
use crate::teachers::TeacherDirectory;
use chrono::{Local, NaiveDate};

pub struct Page {
    config: Config,
    head_scripts: Vec<String>,
    calendar: DisclosureController<HtmlList>,
    teacher_list: HtmlList,
    teachers: Vec<Teacher>,
    show_less_visible: bool,
}

impl Page {
    pub async fn init(config: Config, client: &FeedClient) -> Self {
        Self::init_with(config, client, Local::now().date_naive(), fastrand::Rng::new()).await
    }

    /// Loads both feeds and renders the first batch of milongas.
    ///
    /// The teacher directory loads independently of the calendar. The
    /// structured data is derived inside the calendar branch, after the
    /// calendar is final.
    pub async fn init_with(
        config: Config,
        client: &FeedClient,
        today: NaiveDate,
        mut rng: fastrand::Rng,
    ) -> Self {
        let schema_opts = SchemaOptions::from_config(&config);

        let calendar_branch = async {
            let mut surface = HtmlList::new();
            let milongas =
                MilongaCalendar::load(client, &config.events_path, today, &mut surface).await;
            let scripts = schema::script_tags(&milongas, &schema_opts);
            (milongas, surface, scripts)
        };

        let teacher_branch = async {
            let mut surface = HtmlList::new();
            let teachers =
                TeacherDirectory::load(client, &config.teachers_path, &mut rng, &mut surface)
                    .await;
            (teachers, surface)
        };

        let ((milongas, calendar_surface, head_scripts), (teachers, teacher_list)) =
            tokio::join!(calendar_branch, teacher_branch);

        let default_visible = config.default_visible();
        let mut calendar = DisclosureController::new(
            milongas,
            calendar_surface,
            default_visible,
            StatusRegion::new(),
            config.announce_clear_after(),
        );
        calendar.reveal_next(default_visible);

        Self {
            config,
            head_scripts,
            calendar,
            teacher_list,
            teachers,
            show_less_visible: false,
        }
    }

    /// "Mehr anzeigen"
    pub fn show_more(&mut self) -> usize {
        let batch = self.calendar.default_visible();
        let added = self.calendar.reveal_next(batch);
        self.show_less_visible = true;
        added
    }

    /// "Weniger anzeigen"
    pub fn show_less(&mut self) {
        self.calendar.collapse();
        self.show_less_visible = false;
    }

    pub fn show_less_visible(&self) -> bool {
        self.show_less_visible
    }

    pub fn calendar(&self) -> &DisclosureController<HtmlList> {
        &self.calendar
    }

    pub fn teacher_list(&self) -> &HtmlList {
        &self.teacher_list
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn head_scripts(&self) -> &[String] {
        &self.head_scripts
    }

    pub fn status_text(&self) -> String {
        self.calendar.status().text()
    }

    /// Snapshot of the whole document in its current state.
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!(
            "<title>{}</title>\n",
            html_escape(&self.config.page_title)
        ));
        for script in &self.head_scripts {
            html.push_str(script);
            html.push('\n');
        }
        html.push_str("</head>\n<body>\n<main>\n");

        html.push_str("<section aria-labelledby=\"cal-heading\">\n");
        html.push_str("<h2 id=\"cal-heading\">Milongas</h2>\n");
        html.push_str("<ul id=\"cal\">\n");
        html.push_str(&self.calendar.surface().inner_html());
        html.push_str("\n</ul>\n");
        html.push_str(&format!(
            "<div id=\"status-message\" class=\"sr-only\" role=\"status\" aria-live=\"polite\">{}</div>\n",
            html_escape(&self.status_text())
        ));
        html.push_str("<button id=\"show-more\" type=\"button\">Mehr anzeigen</button>\n");
        html.push_str(&format!(
            "<button id=\"show-less\" type=\"button\"{}>Weniger anzeigen</button>\n",
            if self.show_less_visible { "" } else { " hidden" }
        ));
        html.push_str("</section>\n");

        html.push_str("<section aria-labelledby=\"teacher-heading\">\n");
        html.push_str("<h2 id=\"teacher-heading\">Lehrer:innen</h2>\n");
        html.push_str("<ul class=\"teacher-container\">\n");
        html.push_str(&self.teacher_list.inner_html());
        html.push_str("\n</ul>\n</section>\n");

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}
