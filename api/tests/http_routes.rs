use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use food_energy_api::{
    application::http::{
        server::http_server::{router, state},
        upload::MAX_IMAGE_SIZE,
    },
    args::Args,
};
use serde_json::{Value, json};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3, 4];

fn test_server_with(extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "food-energy-api",
        "--server-metrics-enabled",
        "false",
        "--identification-strategy",
        "hash",
    ];
    argv.extend_from_slice(extra_args);

    let args = Arc::new(Args::try_parse_from(argv).unwrap());
    let app = router(state(args).unwrap()).unwrap();
    TestServer::new(app).unwrap()
}

fn test_server() -> TestServer {
    test_server_with(&[])
}

fn image_part(bytes: Vec<u8>, mime_type: &str) -> Part {
    Part::bytes(bytes).file_name("meal.png").mime_type(mime_type)
}

#[tokio::test]
async fn test_root_liveness() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "message": "Food Energy API is running!",
        "version": "1.0.0"
    }));
}

#[tokio::test]
async fn test_root_path_prefix() {
    let server = test_server_with(&["--server-root-path", "/api"]);

    server.get("/api").await.assert_status_ok();
    server.get("/api/seasons/winter/foods").await.assert_status_ok();
    server
        .get("/seasons/winter/foods")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_path_without_leading_slash() {
    let server = test_server_with(&["--server-root-path", "api/"]);

    server.get("/api").await.assert_status_ok();
    server.get("/api/foods/1").await.assert_status_ok();
}

#[test]
fn test_invalid_root_path_is_a_startup_error() {
    let args = Args::try_parse_from([
        "food-energy-api",
        "--server-metrics-enabled",
        "false",
        "--server-root-path",
        "my api",
    ])
    .unwrap();

    assert!(state(Arc::new(args)).is_err());
}

#[tokio::test]
async fn test_seasonal_foods() {
    let server = test_server();

    let response = server.get("/seasons/Winter/foods").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["season"], "winter");

    let names: Vec<&str> = body["foods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|food| food["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ginger", "Lamb", "Walnut", "Black Sesame"]);

    let placeholder = &body["foods"][3];
    assert_eq!(placeholder["id"], "temp_black sesame");
    assert_eq!(placeholder["energeticType"], "neutral");
    assert_eq!(placeholder["benefits"], "Seasonal food for winter");
}

#[tokio::test]
async fn test_invalid_season_is_not_found() {
    let server = test_server();

    let response = server.get("/seasons/autumn/foods").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["message"], "Season autumn not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_list_seasons() {
    let server = test_server();

    let body: Value = server.get("/seasons").await.json();
    let seasons = body["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 4);
    assert_eq!(seasons[0]["season"], "spring");
    assert_eq!(seasons[0]["foodKeys"][1], "bamboo shoots");
}

#[tokio::test]
async fn test_search_foods() {
    let server = test_server();

    let body: Value = server.get("/foods/search").add_query_param("name", "GIN").await.json();
    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["name"], "Ginger");
    assert_eq!(foods[0]["commonUses"], json!(["tea", "stir-fry", "soup"]));

    let body: Value = server.get("/foods/search").await.json();
    assert_eq!(body["foods"].as_array().unwrap().len(), 18);
}

#[tokio::test]
async fn test_get_food() {
    let server = test_server();

    let response = server.get("/foods/1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Ginger");
    assert_eq!(body["energeticType"], "warm");
    assert!(body["imageUrl"].is_string());

    server
        .get("/foods/does-not-exist")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recipes() {
    let server = test_server();

    let body: Value = server.get("/recipes/by-food/1").await.json();
    let recipes = body["recipes"].as_array().unwrap();
    assert!(!recipes.is_empty());
    assert!(recipes.iter().all(|recipe| {
        recipe["ingredients"]
            .as_array()
            .unwrap()
            .iter()
            .any(|ingredient| ingredient == "ginger")
    }));
    assert_eq!(recipes[0]["id"], "r1");
    assert_eq!(recipes[0]["prepTime"], 15);

    server
        .get("/recipes/by-food/missing")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let body: Value = server.get("/recipes").await.json();
    assert_eq!(body["recipes"][1]["id"], "r2");
}

#[tokio::test]
async fn test_health_conditions() {
    let server = test_server();

    let body: Value = server.get("/health-conditions").await.json();
    let conditions = body["conditions"].as_array().unwrap();
    assert_eq!(conditions.len(), 8);
    assert_eq!(conditions[0], "Cold constitution");
}

#[tokio::test]
async fn test_identify_json_is_deterministic() {
    let server = test_server();
    let encoded = general_purpose::STANDARD.encode(PNG_BYTES);

    let first: Value = server
        .post("/food/identify")
        .json(&json!({ "imageBase64": encoded }))
        .await
        .json();
    let second: Value = server
        .post("/food/identify")
        .json(&json!({ "imageBase64": format!("data:image/png;base64,{encoded}") }))
        .await
        .json();

    assert_eq!(first, second);
    assert_ne!(first["foodName"], "Unknown Food");
    assert_eq!(
        first["description"],
        format!(
            "{} is a {} food",
            first["foodName"].as_str().unwrap(),
            first["energeticType"].as_str().unwrap()
        )
    );
    assert!(first["recipes"].as_array().unwrap().len() <= 3);
}

#[tokio::test]
async fn test_identify_multipart_matches_json() {
    let server = test_server();

    let from_json: Value = server
        .post("/food/identify")
        .json(&json!({ "imageBase64": general_purpose::STANDARD.encode(PNG_BYTES) }))
        .await
        .json();

    let form = MultipartForm::new().add_part("image", image_part(PNG_BYTES.to_vec(), "image/png"));
    let response = server.post("/food/identify").multipart(form).await;
    response.assert_status_ok();

    assert_eq!(response.json::<Value>(), from_json);
}

#[tokio::test]
async fn test_identify_rejects_bad_uploads() {
    let server = test_server();

    let form = MultipartForm::new().add_part("image", image_part(b"hello".to_vec(), "text/plain"));
    server
        .post("/food/identify")
        .multipart(form)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let form = MultipartForm::new().add_part("image", image_part(Vec::new(), "image/png"));
    server
        .post("/food/identify")
        .multipart(form)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/food/identify")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/food/identify")
        .json(&json!({ "imageBase64": "%%%not-base64%%%" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_identify_rejects_oversized_image() {
    let server = test_server();

    let form = MultipartForm::new().add_part(
        "image",
        image_part(vec![0u8; MAX_IMAGE_SIZE + 1], "image/jpeg"),
    );
    let response = server.post("/food/identify").multipart(form).await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    let encoded = general_purpose::STANDARD.encode(vec![0u8; MAX_IMAGE_SIZE + 1]);
    server
        .post("/food/identify")
        .json(&json!({ "imageBase64": encoded }))
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    let encoded = general_purpose::STANDARD.encode(vec![0u8; 7 * 1024 * 1024]);
    server
        .post("/food/identify")
        .json(&json!({ "imageBase64": encoded }))
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_analyze_combination_with_ingredients() {
    let server = test_server();

    let response = server
        .post("/combinations/analyze")
        .json(&json!({
            "healthNotes": "I often feel COLD and have poor digestion",
            "ingredients": ["ginger", "Honey", "rice"]
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ingredients"], json!(["Ginger", "Honey", "Rice"]));

    let good = body["goodCombinations"].as_array().unwrap();
    assert_eq!(good.len(), 2);
    assert_eq!(good[0]["food1"], "ginger");
    assert_eq!(good[0]["food2"], "honey");
    assert_eq!(good[1]["food1"], "rice");
    assert_eq!(good[1]["food2"], "ginger");
    assert!(body["badCombinations"].as_array().unwrap().is_empty());

    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_analyze_combination_multipart_image() {
    let server = test_server();

    let form = MultipartForm::new()
        .add_part("image", image_part(PNG_BYTES.to_vec(), "image/png"))
        .add_text("healthNotes", "nothing special");
    let response = server.post("/combinations/analyze").multipart(form).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["recommendations"],
        json!(["Balance your meal with neutral foods like rice"])
    );
}

#[tokio::test]
async fn test_analyze_combination_empty_ingredients_use_image() {
    let server = test_server();

    let form = MultipartForm::new()
        .add_part("image", image_part(PNG_BYTES.to_vec(), "image/png"))
        .add_text("ingredients", "")
        .add_text("healthNotes", "cold");
    let response = server.post("/combinations/analyze").multipart(form).await;
    response.assert_status_ok();
    let from_multipart: Value = response.json();
    assert_eq!(from_multipart["ingredients"].as_array().unwrap().len(), 3);

    let response = server
        .post("/combinations/analyze")
        .json(&json!({
            "imageBase64": general_purpose::STANDARD.encode(PNG_BYTES),
            "healthNotes": "cold",
            "ingredients": []
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), from_multipart);

    server
        .post("/combinations/analyze")
        .json(&json!({ "ingredients": [] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_combination_requires_input() {
    let server = test_server();

    server
        .post("/combinations/analyze")
        .json(&json!({ "healthNotes": "cold" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compatibility_rules() {
    let server = test_server();

    let body: Value = server.get("/combinations/rules").await.json();
    assert_eq!(body["good"].as_array().unwrap().len(), 3);
    assert_eq!(body["bad"][2]["food1"], "crab");
    assert_eq!(body["bad"][2]["polarity"], "bad");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["paths"]["/food/identify"].is_object());
}
