use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use studio_cms::config::Config;
use studio_cms::locale::{Locale, LocalizedText};
use studio_cms::models::{CrewMember, FeaturedConfig, Work};
use studio_cms::routes::create_routes;
use studio_cms::state::AppState;

const ADMIN_PASSWORD: &str = "hunter2";

struct TestApp {
    app: Router,
    data_dir: tempfile::TempDir,
    uploads_dir: tempfile::TempDir,
}

fn test_app() -> TestApp {
    let data_dir = tempfile::tempdir().unwrap();
    let uploads_dir = tempfile::tempdir().unwrap();

    let salt = SaltString::generate(&mut OsRng);
    let admin_password_hash = Argon2::default()
        .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string();

    let config = Config {
        bind_addr: "127.0.0.1:0".to_string(),
        data_dir: data_dir.path().to_path_buf(),
        uploads_dir: uploads_dir.path().to_path_buf(),
        jwt_secret: "test-secret".to_string(),
        admin_username: "admin".to_string(),
        admin_password_hash,
        default_locale: Locale::Tr,
    };

    TestApp {
        app: create_routes(AppState::new(config)),
        data_dir,
        uploads_dir,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({"username": "admin", "password": ADMIN_PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

fn seed_work(title: &str, order: u32, description: LocalizedText) -> Work {
    Work {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description,
        prod_year: Some(2022),
        genre: Some("Drama".to_string()),
        platform: Some("Netflix".to_string()),
        trailer: None,
        gallery: Vec::new(),
        image: None,
        order,
        client: None,
    }
}

fn seed_crew(name: &str, order: u32) -> CrewMember {
    CrewMember {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: LocalizedText::Plain("Editor".to_string()),
        department: LocalizedText::Plain("Post".to_string()),
        cv: None,
        image: None,
        linkedin: None,
        order,
    }
}

fn write_collection<T: serde::Serialize>(dir: &std::path::Path, file: &str, items: &[T]) {
    std::fs::write(dir.join(file), serde_json::to_vec_pretty(items).unwrap()).unwrap();
}

#[tokio::test]
async fn login_rejects_bad_credentials_and_issues_tokens() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login(&test.app).await;
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "admin");
}

#[tokio::test]
async fn mutations_without_token_are_rejected_with_no_side_effects() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/works",
            None,
            json!({"title": "Gece", "description": "desc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!test.data_dir.path().join(Work::FILE).exists());

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/works",
            Some("not-a-real-token"),
            json!({"title": "Gece", "description": "desc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!test.data_dir.path().join(Work::FILE).exists());
}

#[tokio::test]
async fn created_work_is_retrievable_by_slug() {
    let test = test_app();
    let token = login(&test.app).await;

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/works",
            Some(&token),
            json!({
                "title": "Köprü Altı",
                "description": {"tr": "Köprünün altında", "en": "Under the bridge"},
                "prod_year": 2021,
                "genre": "Drama"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["order"], 1);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/works/kopru-alti")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], created["id"]);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/works/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_merges_partial_payload() {
    let test = test_app();
    let token = login(&test.app).await;

    let work = seed_work("Sahil", 1, LocalizedText::Plain("kumsal".to_string()));
    write_collection(test.data_dir.path(), Work::FILE, &[work.clone()]);

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/works/{}", work.id),
            Some(&token),
            json!({"genre": "Documentary"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["genre"], "Documentary");
    assert_eq!(updated["title"], "Sahil");
    // Normalized on write: the legacy plain description became a locale map.
    assert_eq!(updated["description"]["tr"], "kumsal");
}

#[tokio::test]
async fn works_list_filters_and_reports_facets() {
    let test = test_app();
    let mut a = seed_work("A", 1, LocalizedText::Plain(String::new()));
    a.genre = Some("Comedy".to_string());
    a.prod_year = Some(2019);
    let b = seed_work("B", 2, LocalizedText::Plain(String::new()));
    write_collection(test.data_dir.path(), Work::FILE, &[a, b]);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/works?genre=drama")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["works"].as_array().unwrap().len(), 1);
    assert_eq!(body["works"][0]["title"], "B");
    // Facets always come from the unfiltered set.
    assert_eq!(body["facets"]["genres"], json!(["Comedy", "Drama"]));
    assert_eq!(body["facets"]["years"], json!([2022, 2019]));
}

#[tokio::test]
async fn featured_rejects_oversized_and_duplicate_configs_wholesale() {
    let test = test_app();
    let token = login(&test.app).await;

    let works: Vec<Work> = (1..=2)
        .map(|i| seed_work(&format!("W{}", i), i, LocalizedText::Plain(String::new())))
        .collect();
    write_collection(test.data_dir.path(), Work::FILE, &works);

    let existing = FeaturedConfig {
        ids: vec![works[0].id],
    };
    std::fs::write(
        test.data_dir.path().join(FeaturedConfig::FILE),
        serde_json::to_vec_pretty(&existing).unwrap(),
    )
    .unwrap();

    let seven: Vec<Uuid> = (0..7).map(|_| Uuid::new_v4()).collect();
    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/featured-projects",
            Some(&token),
            json!({"ids": seven}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let dup = works[0].id;
    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/featured-projects",
            Some(&token),
            json!({"ids": [dup, dup]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Both rejections left the stored config untouched.
    let stored: FeaturedConfig = serde_json::from_slice(
        &std::fs::read(test.data_dir.path().join(FeaturedConfig::FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(stored.ids, vec![works[0].id]);

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/featured-projects",
            Some(&token),
            json!({"ids": [works[1].id, works[0].id]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/featured-projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["W2", "W1"]);
}

#[tokio::test]
async fn featured_falls_back_to_first_six_works() {
    let test = test_app();
    let works: Vec<Work> = (1..=8)
        .map(|i| seed_work(&format!("W{}", i), i, LocalizedText::Plain(String::new())))
        .collect();
    write_collection(test.data_dir.path(), Work::FILE, &works);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/featured-projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["W1", "W2", "W3", "W4", "W5", "W6"]);
}

#[tokio::test]
async fn reorder_moves_one_position_and_renumbers() {
    let test = test_app();
    let token = login(&test.app).await;

    let crew: Vec<CrewMember> = ["A", "B", "C"]
        .iter()
        .enumerate()
        .map(|(i, name)| seed_crew(name, i as u32 + 1))
        .collect();
    write_collection(test.data_dir.path(), CrewMember::FILE, &crew);

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/crew/reorder",
            Some(&token),
            json!({"id": crew[2].id, "direction": "up"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mapping = body_json(response).await;
    assert_eq!(mapping[0]["id"], json!(crew[0].id));
    assert_eq!(mapping[0]["order"], 1);
    assert_eq!(mapping[1]["id"], json!(crew[2].id));
    assert_eq!(mapping[1]["order"], 2);
    assert_eq!(mapping[2]["id"], json!(crew[1].id));
    assert_eq!(mapping[2]["order"], 3);

    // Boundary move: first item "up" is a no-op.
    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/crew/reorder",
            Some(&token),
            json!({"id": crew[0].id, "direction": "up"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mapping = body_json(response).await;
    assert_eq!(mapping[0]["id"], json!(crew[0].id));
    assert_eq!(mapping[0]["order"], 1);

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/crew/reorder",
            Some(&token),
            json!({"id": Uuid::new_v4(), "direction": "down"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unlocalized_page_paths_redirect_with_query_preserved() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/about")
                .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/en/about");

    let response = test
        .app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/tr");

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/projects?genre=drama")
                .header(header::ACCEPT_LANGUAGE, "de-DE,fr;q=0.7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/fr/projects?genre=drama"
    );

    // Malformed header degrades to the default locale.
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/about")
                .header(header::ACCEPT_LANGUAGE, ";;;invalid;;;")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/tr/about");

    // API paths are exempt from the locale rewrite.
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/works")
                .header(header::ACCEPT_LANGUAGE, "en")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn localized_pages_resolve_text_with_fallback() {
    let test = test_app();
    let description = serde_json::from_value::<LocalizedText>(json!({
        "tr": "Köprünün altında",
        "en": "Under the bridge"
    }))
    .unwrap();
    let work = seed_work("Köprü Altı", 1, description);
    write_collection(test.data_dir.path(), Work::FILE, &[work]);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/en/works")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["locale"], "en");
    assert_eq!(body["works"][0]["description"], "Under the bridge");

    // Locale without a translation falls back to the default.
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/ru/works/kopru-alti")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["description"], "Köprünün altında");
    assert_eq!(body["slug"], "kopru-alti");
}

#[tokio::test]
async fn contact_flow() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contact",
            None,
            json!({"name": "Ayşe", "email": "not-an-email", "message": "hi"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/contact",
            None,
            json!({
                "name": "Ayşe",
                "email": "ayse@example.com",
                "subject": "Teklif",
                "message": "Merhaba"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["status"], "new");
    let id = created["id"].as_str().unwrap().to_string();

    // The inbox is admin-only.
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login(&test.app).await;
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/contact")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = test
        .app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/contact/{}", id),
            Some(&token),
            json!({"status": "read"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "read");

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/contact/{}", id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

fn multipart_request(
    uri: &str,
    token: &str,
    parts: &[(&str, Option<&str>, &[u8])],
) -> Request<Body> {
    let boundary = "test-boundary-7d93a1";
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_validates_then_stores_and_serves() {
    let test = test_app();
    let token = login(&test.app).await;

    // No file field at all.
    let response = test
        .app
        .clone()
        .oneshot(multipart_request(
            "/upload",
            &token,
            &[("type", None, b"work")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // CV uploads must be PDFs; nothing is written on rejection.
    let response = test
        .app
        .clone()
        .oneshot(multipart_request(
            "/upload",
            &token,
            &[
                ("type", None, b"team-cv"),
                ("file", Some("cv.png"), b"not a pdf"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        std::fs::read_dir(test.uploads_dir.path()).unwrap().count(),
        0
    );

    let response = test
        .app
        .clone()
        .oneshot(multipart_request(
            "/upload",
            &token,
            &[
                ("type", None, b"work"),
                ("file", Some("poster.png"), b"\x89PNGdata"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let filename = body["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(body["url"], format!("/uploads/{}", filename));

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/uploads/{}", filename))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    // Traversal attempts are rejected before touching the disk.
    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/uploads/..%2Fsecret.txt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/uploads/missing.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
