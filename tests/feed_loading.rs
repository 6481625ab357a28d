// Tests for fetching both feeds over HTTP, including the degrade path.
use chrono::NaiveDate;
use mockito::Server;
use tangoboard::calendar::MilongaCalendar;
use tangoboard::client::{FeedClient, LoadError};
use tangoboard::markup::{ERROR_CLASS, TEACHER_CLASS, calendar_error, teacher_error};
use tangoboard::surface::{HtmlList, ListSurface};
use tangoboard::teachers::TeacherDirectory;

const MILONGAS: &str = r#"[
    {"date": "2026-11-14", "title": "Novembermilonga", "dj": "Ana"},
    {"date": "2026-10-01", "title": "Vorbei"},
    {"date": "2026-10-24", "title": "Oktobermilonga", "dj": "Ben"}
]"#;

const TEACHERS: &str = r#"[
    {"name": "Lia", "location": "Tübingen", "link": "https://example.org/lia"},
    {"name": "Tom", "location": "Reutlingen", "link": "https://example.org/tom"},
    {"name": "Eva", "location": "Stuttgart", "link": "https://example.org/eva"}
]"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn test_calendar_loads_and_normalizes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/data/milongas.json")
        .match_header("user-agent", "tangoboard-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MILONGAS)
        .create_async()
        .await;

    let client = FeedClient::new(&server.url(), "tangoboard-test");
    let mut surface = HtmlList::new();
    let milongas =
        MilongaCalendar::load(&client, "./data/milongas.json", today(), &mut surface).await;

    mock.assert_async().await;
    let titles: Vec<_> = milongas.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Oktobermilonga", "Novembermilonga"]);
    // Loading does not render; that is up to the disclosure controller.
    assert!(surface.is_empty());
}

#[tokio::test]
async fn test_calendar_non_success_status_degrades() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/milongas.json")
        .with_status(404)
        .create_async()
        .await;

    let client = FeedClient::new(&server.url(), "tangoboard-test");

    let err = MilongaCalendar::fetch(&client, "data/milongas.json", today())
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }));
    assert_eq!(err.status_code().map(|s| s.as_u16()), Some(404));

    let mut surface = HtmlList::new();
    let milongas =
        MilongaCalendar::load(&client, "data/milongas.json", today(), &mut surface).await;
    assert!(milongas.is_empty());
    assert_eq!(surface.nodes(), &[calendar_error()]);
    assert_eq!(surface.peek_last_class(), Some(ERROR_CLASS));
}

#[tokio::test]
async fn test_calendar_invalid_json_degrades() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/milongas.json")
        .with_status(200)
        .with_body("[{\"date\": \"2026-11-14\",")
        .create_async()
        .await;

    let client = FeedClient::new(&server.url(), "tangoboard-test");

    let err = MilongaCalendar::fetch(&client, "data/milongas.json", today())
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));

    let mut surface = HtmlList::new();
    let milongas =
        MilongaCalendar::load(&client, "data/milongas.json", today(), &mut surface).await;
    assert!(milongas.is_empty());
    assert_eq!(surface.nodes(), &[calendar_error()]);
}

#[tokio::test]
async fn test_unreachable_server_degrades() {
    // Port 9 (discard) on localhost is not served by anything in the test environment.
    let client = FeedClient::new("http://127.0.0.1:9", "tangoboard-test");
    let mut surface = HtmlList::new();
    let teachers =
        TeacherDirectory::load(&client, "data/teachers.json", &mut fastrand::Rng::new(), &mut surface)
            .await;

    assert!(teachers.is_empty());
    assert_eq!(surface.nodes(), &[teacher_error()]);
}

#[tokio::test]
async fn test_teachers_load_shuffle_and_render() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/teachers.json")
        .with_status(200)
        .with_body(TEACHERS)
        .create_async()
        .await;

    let client = FeedClient::new(&server.url(), "tangoboard-test");
    let mut surface = HtmlList::new();
    let mut rng = fastrand::Rng::with_seed(3);
    let teachers = TeacherDirectory::load(&client, "data/teachers.json", &mut rng, &mut surface).await;

    assert_eq!(teachers.len(), 3);
    let mut names: Vec<_> = teachers.iter().map(|t| t.name.clone()).collect();
    names.sort();
    assert_eq!(names, vec!["Eva", "Lia", "Tom"]);

    // Rendered in the shuffled order, once.
    assert_eq!(surface.count_class(TEACHER_CLASS), 3);
    for (node, t) in surface.nodes().iter().zip(&teachers) {
        assert!(node.html.contains(&t.name));
    }
}

#[tokio::test]
async fn test_teachers_server_error_degrades() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/teachers.json")
        .with_status(500)
        .create_async()
        .await;

    let client = FeedClient::new(&server.url(), "tangoboard-test");
    let mut surface = HtmlList::new();
    let teachers =
        TeacherDirectory::load(&client, "data/teachers.json", &mut fastrand::Rng::new(), &mut surface)
            .await;

    assert!(teachers.is_empty());
    assert_eq!(surface.nodes(), &[teacher_error()]);
}
