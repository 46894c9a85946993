use crate::application::http::{
    fasting::router::FastingApiDoc, meal_ai::router::MealAiApiDoc, profile::router::ProfileApiDoc,
    stats::router::StatsApiDoc, summary::router::SummaryApiDoc, tracking::router::TrackingApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ginger API"
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

// The derive macro rejects `nest(path = "", ...)`, so the nesting is done
// through the runtime `nest` API instead, with the same path prefixes.
impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        BaseApiDoc::openapi()
            .nest("", ProfileApiDoc::openapi())
            .nest("", TrackingApiDoc::openapi())
            .nest("/fasting", FastingApiDoc::openapi())
            .nest("/stats", StatsApiDoc::openapi())
            .nest("", SummaryApiDoc::openapi())
            .nest("/ai", MealAiApiDoc::openapi())
    }
}
