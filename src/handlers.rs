use crate::errors::AppError;
use crate::html::ViewResponse;
use crate::models::{AnalysisResult, MealQuery, MealRequest, MealsQuery, MealsResponse};
use crate::page::Page;
use crate::render::RenderModel;
use crate::state::AppState;
use crate::suggest::{KNOWN_MEALS, filter_meals};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use tracing::{debug, info};

pub async fn index() -> Html<String> {
    Html(render_index(&KNOWN_MEALS))
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    Ok(Json(run_analysis(&state, &payload)?))
}

pub async fn meals(Query(query): Query<MealsQuery>) -> Json<MealsResponse> {
    let matches = filter_meals(&KNOWN_MEALS, &query.q)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(MealsResponse {
        query: query.q,
        matches,
    })
}

/// Same analysis as `/analyze`, returned as rendered region markup and chart
/// specs for the meal page.
pub async fn view_analyze(
    State(state): State<AppState>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let result = run_analysis(&state, &payload)?;
    let mut page = Page::new();
    page.render(RenderModel::from_result(&result));
    Ok(Json(ViewResponse::from_regions(page.regions())))
}

fn run_analysis(state: &AppState, payload: &MealRequest) -> Result<AnalysisResult, AppError> {
    let query = MealQuery::parse(&payload.meal)
        .ok_or_else(|| AppError::bad_request("meal must not be empty"))?;

    let result = state.catalog.analyze(query.as_str());
    info!(
        foods = result.breakdown.len(),
        missing = result.missing.len(),
        "analyzed meal"
    );
    if !result.missing.is_empty() {
        debug!("unrecognised items: {:?}", result.missing);
    }
    Ok(result)
}
