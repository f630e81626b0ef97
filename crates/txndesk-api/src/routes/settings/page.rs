//! Settings page rendering

use crate::AppState;
use txndesk_utils::escape_html;

/// Settings page - shows the active configuration
pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;

    let seed_source = match &config.data.seed_file {
        Some(path) => escape_html(&path.to_string_lossy()),
        None => "embedded dataset".to_string(),
    };

    let rows = [
        ("Server host", escape_html(&config.server.host)),
        ("Server port", config.server.port.to_string()),
        ("Seed source", seed_source),
        ("Log level", escape_html(&config.logging.level)),
    ];

    let mut table = String::from(
        r#"<div class='bg-white rounded-xl shadow-sm p-6 max-w-2xl'>
        <table class='min-w-full divide-y divide-gray-200'>
        <tbody class='divide-y divide-gray-200'>"#,
    );
    for (label, value) in rows {
        table.push_str(&format!(
            r#"<tr><td class='px-4 py-3 text-sm font-medium text-gray-500'>{}</td><td class='px-4 py-3 text-sm'>{}</td></tr>"#,
            label, value
        ));
    }
    table.push_str("</tbody></table></div>");

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2></div>{}"#,
        table
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Settings",
        "/settings",
        &inner_content,
    ))
}
