use crate::application::http::{
    combination::{
        handlers::get_health_conditions::__path_get_health_conditions,
        router::CombinationApiDoc,
    },
    food::router::FoodApiDoc,
    health::__path_root,
    identification::router::IdentificationApiDoc,
    recipe::router::RecipeApiDoc,
    season::router::SeasonApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Energy API"
    ),
    paths(root, get_health_conditions),
    nest(
        (path = "/seasons", api = SeasonApiDoc),
        (path = "/food", api = IdentificationApiDoc),
        (path = "/combinations", api = CombinationApiDoc),
        (path = "/foods", api = FoodApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        for expected in [
            "/",
            "/health-conditions",
            "/seasons",
            "/seasons/{season}/foods",
            "/food/identify",
            "/combinations/analyze",
            "/combinations/rules",
            "/foods/search",
            "/foods/{food_id}",
            "/recipes",
            "/recipes/by-food/{food_id}",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
