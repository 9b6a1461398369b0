//! HTTP request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Form, State},
    http::{header, HeaderMap},
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::model::{class_label, FeatureVector, NUM_FEATURES};

use super::error::{Result, ServerError};
use super::state::AppState;

// ============================================================================
// Form surface
// ============================================================================

/// Raw form fields. All optional so a missing field becomes an inline error
/// on the page instead of an extractor rejection.
#[derive(Deserialize)]
pub struct MeasurementForm {
    sepal_length: Option<String>,
    sepal_width: Option<String>,
    petal_length: Option<String>,
    petal_width: Option<String>,
}

impl MeasurementForm {
    fn parse(&self) -> std::result::Result<FeatureVector, String> {
        Ok([
            parse_field(&self.sepal_length, "sepal_length")?,
            parse_field(&self.sepal_width, "sepal_width")?,
            parse_field(&self.petal_length, "petal_length")?,
            parse_field(&self.petal_width, "petal_width")?,
        ])
    }
}

fn parse_field(value: &Option<String>, name: &str) -> std::result::Result<f64, String> {
    let raw = value.as_deref().ok_or_else(|| format!("missing field '{}'", name))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("field '{}' is not a number: '{}'", name, raw))
}

/// Render the form with no prediction shown
pub async fn serve_index() -> Html<String> {
    Html(render_page(None))
}

/// Form submission: parse, classify, and re-render the page with the result.
/// Every failure is rendered inline; this surface always returns 200.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MeasurementForm>,
) -> Html<String> {
    let outcome = form.parse().and_then(|features| {
        classify_and_label(&state, &features).map(|(_, label)| label.to_string())
    });

    let result = match outcome {
        Ok(label) => label,
        Err(message) => format!("Error: {}", message),
    };
    Html(render_page(Some(&result)))
}

// ============================================================================
// JSON surface
// ============================================================================

/// `POST /predict` with `{"features": [a, b, c, d]}`.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that every malformed-input case gets the same `{"error": ...}` body with
/// status 400. Strict validation: the request must declare a JSON content
/// type and `features` must be an array of exactly four numbers.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>> {
    if !has_json_content_type(&headers) {
        return Err(ServerError::BadRequest(
            "JSON with a 'features' array is required".to_string(),
        ));
    }

    if body.is_empty() {
        return Err(ServerError::BadRequest(
            "JSON with a 'features' array is required".to_string(),
        ));
    }

    let payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let features = payload
        .get("features")
        .ok_or_else(|| ServerError::BadRequest("JSON with a 'features' array is required".to_string()))?;

    let values = features.as_array().ok_or_else(|| {
        ServerError::BadRequest(format!("'features' must be an array of {} numbers", NUM_FEATURES))
    })?;

    if values.len() != NUM_FEATURES {
        return Err(ServerError::BadRequest(format!(
            "'features' must contain exactly {} values, got {}",
            NUM_FEATURES,
            values.len()
        )));
    }

    let mut vector: FeatureVector = [0.0; NUM_FEATURES];
    for (i, value) in values.iter().enumerate() {
        vector[i] = value.as_f64().ok_or_else(|| {
            ServerError::BadRequest(format!("'features[{}]' is not a number", i))
        })?;
    }

    let (index, label) = classify_and_label(&state, &vector).map_err(ServerError::Prediction)?;

    info!(prediction = index, label = %label, "Prediction served");

    Ok(Json(serde_json::json!({
        "prediction": index,
        "label": label,
    })))
}

/// Requests without a declared JSON media type are rejected before the body
/// is touched, matching the original service.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// Invoke the classifier and resolve the label, collapsing both failure modes
/// into a message string for the surface to format.
fn classify_and_label(
    state: &AppState,
    features: &FeatureVector,
) -> std::result::Result<(usize, &'static str), String> {
    let index = state
        .classifier
        .classify(features)
        .map_err(|e| e.to_string())?;
    let label = class_label(index).map_err(|e| e.to_string())?;
    Ok((index, label))
}

// ============================================================================
// System handlers
// ============================================================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model_path": state.config.model_path,
    }))
}

// ============================================================================
// Page rendering
// ============================================================================

fn render_page(result: Option<&str>) -> String {
    let result_block = match result {
        Some(text) => format!(
            "<div class=\"result\">Prediction: {}</div>",
            html_escape(text)
        ),
        None => String::new(),
    };
    EMBEDDED_INDEX_HTML.replace("<!--RESULT-->", &result_block)
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const EMBEDDED_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Iris Prediction</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            padding: 20px;
            max-width: 500px;
            margin: auto;
            background: #f4f4f4;
        }
        h2 {
            text-align: center;
        }
        form {
            background: white;
            padding: 20px;
            border-radius: 10px;
        }
        label {
            display: block;
            margin-top: 15px;
        }
        input[type="number"] {
            width: 100%;
            padding: 8px;
            margin-top: 5px;
        }
        button {
            margin-top: 20px;
            padding: 10px;
            width: 100%;
            background: #007bff;
            color: white;
            border: none;
            border-radius: 5px;
        }
        .result {
            margin-top: 20px;
            text-align: center;
            font-weight: bold;
        }
    </style>
</head>
<body>
    <h2>Iris Flower Prediction</h2>
    <form method="post" action="/">
        <label>Sepal Length (cm):</label>
        <input type="number" name="sepal_length" step="0.1" required>

        <label>Sepal Width (cm):</label>
        <input type="number" name="sepal_width" step="0.1" required>

        <label>Petal Length (cm):</label>
        <input type="number" name="petal_length" step="0.1" required>

        <label>Petal Width (cm):</label>
        <input type="number" name="petal_width" step="0.1" required>

        <button type="submit">Submit &amp; Predict</button>
    </form>
    <!--RESULT-->
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_missing() {
        let err = parse_field(&None, "sepal_length").unwrap_err();
        assert!(err.contains("missing field 'sepal_length'"));
    }

    #[test]
    fn test_parse_field_non_numeric() {
        let err = parse_field(&Some("abc".to_string()), "petal_width").unwrap_err();
        assert!(err.contains("not a number"));
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/ld+json".parse().unwrap());
        assert!(has_json_content_type(&headers));
    }

    #[test]
    fn test_render_page_without_result() {
        let page = render_page(None);
        assert!(!page.contains("Prediction:"));
        assert!(page.contains("Iris Flower Prediction"));
    }

    #[test]
    fn test_render_page_escapes_result() {
        let page = render_page(Some("<script>"));
        assert!(page.contains("Prediction: &lt;script&gt;"));
    }
}
