//! Record page rendering - full page and list fragment
//!
//! Endpoints:
//! - page_records: Main record browser page
//!
//! Helper functions:
//! - render_records_partial: Count heading plus the records table

use crate::AppState;
use txndesk_core::{Record, RecordStatus, UserEntry, ALL, BRANCHES};
use txndesk_utils::{escape_html, format_amount};

/// Record browser page - search controls, filter controls and the table
///
/// Inputs and selectors only update control state; recomputation happens
/// exclusively through the two buttons and the per-row remove action.
pub async fn page_records(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let store = state.store.read().await;
    let criteria = store.criteria();
    let search_term = store.search_term();

    let branch_options: Vec<&str> = std::iter::once(ALL).chain(BRANCHES).collect();
    let type_options = [ALL, "Full", "Short"];
    let status_options = [ALL, "Pending", "Approved", "Rejected"];

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-6'>
            <h2 class='text-2xl font-bold'>Record Browser</h2>
            <div class='flex gap-2'>
                <input type='text' id='record-search' name='q' value='{}' placeholder='Search by ID, Type, or Status'
                    class='px-4 py-2 border rounded-lg w-64'>
                <button hx-get='/records/search' hx-include='#record-search' hx-target='#records-content'
                    class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Search By ID</button>
            </div>
        </div>
        <div class='flex flex-wrap items-end gap-3 mb-4 p-4 bg-white rounded-lg border shadow-sm'>
            <div>
                <label class='block text-xs font-medium text-gray-500 mb-1'>From Date</label>
                <input type='date' name='from' value='{}' class='filter-field px-3 py-2 border rounded-lg'>
            </div>
            <div>
                <label class='block text-xs font-medium text-gray-500 mb-1'>To Date</label>
                <input type='date' name='to' value='{}' class='filter-field px-3 py-2 border rounded-lg'>
            </div>
            <div>
                <label class='block text-xs font-medium text-gray-500 mb-1'>Branch</label>
                <select name='branch' class='filter-field px-3 py-2 border rounded-lg bg-white'>{}</select>
            </div>
            <div>
                <label class='block text-xs font-medium text-gray-500 mb-1'>Type</label>
                <select name='type' class='filter-field px-3 py-2 border rounded-lg bg-white'>{}</select>
            </div>
            <div>
                <label class='block text-xs font-medium text-gray-500 mb-1'>Status</label>
                <select name='status' class='filter-field px-3 py-2 border rounded-lg bg-white'>{}</select>
            </div>
            <button hx-get='/records/filter' hx-include='.filter-field' hx-target='#records-content'
                class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Search</button>
        </div>
        <div id='records-content' hx-get='/records/list' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6'>
            <p class='text-gray-500 text-center'>Loading...</p>
        </div>"#,
        escape_html(&search_term),
        escape_html(&criteria.date_from),
        escape_html(&criteria.date_to),
        select_options(&branch_options, &criteria.branch),
        select_options(&type_options, &criteria.record_type),
        select_options(&status_options, &criteria.status),
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Records",
        "/records",
        &inner_content,
    ))
}

/// Render option elements, marking the currently selected value
fn select_options(options: &[&str], selected: &str) -> String {
    options
        .iter()
        .map(|option| {
            let flag = if *option == selected { " selected" } else { "" };
            format!("<option value='{}'{}>{}</option>", option, flag, option)
        })
        .collect()
}

/// Render the count heading and the records table fragment
pub(crate) fn render_records_partial(records: &[Record], users: &[UserEntry]) -> String {
    let mut html = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h3 class='text-xl font-bold'>Total ({})</h3>
        </div>"#,
        records.len()
    );

    if records.is_empty() {
        html.push_str(
            r#"<div class='text-center py-12 text-gray-500'><p>No records to display</p></div>"#,
        );
        return html;
    }

    html.push_str(
        r#"<div class='overflow-x-auto'><table class='min-w-full divide-y divide-gray-200'>
        <thead class='bg-gray-50'><tr>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>ID</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Date</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Branch</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Type</th>
            <th class='px-4 py-3 text-right text-xs font-medium text-gray-500 uppercase'>Amount (in rupees)</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Bank</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Requested By</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Status</th>
            <th class='px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase'>Actions</th>
        </tr></thead><tbody class='bg-white divide-y divide-gray-200'>"#,
    );

    for record in records {
        let status_class = match record.status {
            RecordStatus::Pending => "text-amber-700 bg-amber-50",
            RecordStatus::Approved => "text-green-700 bg-green-50",
            RecordStatus::Rejected => "text-red-700 bg-red-50",
        };
        let requester_name = txndesk_core::resolve_user(users, &record.requested_by);

        html.push_str(&format!(
            r#"<tr class='hover:bg-gray-50'>
                <td class='px-4 py-3 font-medium'>{}</td>
                <td class='px-4 py-3'>{}</td>
                <td class='px-4 py-3'>{}</td>
                <td class='px-4 py-3'>{}</td>
                <td class='px-4 py-3 text-right'>{}</td>
                <td class='px-4 py-3'>{}</td>
                <td class='px-4 py-3'>
                    <div>
                        <p class='text-sm text-gray-600'>{}</p>
                        <p class='text-sm font-medium'>{}</p>
                    </div>
                </td>
                <td class='px-4 py-3'><span class='px-2 py-1 text-xs rounded-full {}'>{}</span></td>
                <td class='px-4 py-3'>
                    <button hx-delete='/records/{}' hx-target='#records-content'
                        class='px-3 py-1.5 text-sm border border-red-200 text-red-600 rounded-lg hover:bg-red-50'>Remove</button>
                </td>
            </tr>"#,
            escape_html(&record.id),
            record.date,
            escape_html(&record.branch),
            record.record_type,
            format_amount(&record.amount),
            escape_html(&record.bank),
            escape_html(&requester_name),
            escape_html(&record.requested_by),
            status_class,
            record.status,
            urlencoding::encode(&record.id),
        ));
    }

    html.push_str("</tbody></table></div>");
    html
}
