//! Server-rendered HTML pages.
//!
//! Pages are assembled with `format!`; every interpolated value goes through
//! [`escape`] (text and attributes) or [`path_segment`] (URLs).

use std::fmt::Write as _;

use assetcheck_core::{
    Asset, AssetListing, ComplianceSummary, Inspection, ItemResult, SearchFilter, DATE_FORMAT,
    ITEM_COUNT,
};
use assetcheck_storage::photo_file_name;
use axum::http::StatusCode;
use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path segments keep the RFC 3986 unreserved set and encode the rest.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape(raw: &str) -> String {
    handlebars::html_escape(raw)
}

/// Percent-encodes a single URL path segment.
pub fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title}</title></head><body>\
<nav><a href=\"/\">Assets</a> | <a href=\"/dashboard\">Dashboard</a> | <a href=\"/export\">Export</a></nav>\
<main>{body}</main></body></html>",
        title = escape(title),
    )
}

/// Roster listing with the search box.
pub fn index_page(listings: &[AssetListing], filter: &SearchFilter) -> String {
    let q = escape(filter.needle().unwrap_or_default());
    let mut rows = String::new();
    for listing in listings {
        let asset = &listing.asset;
        let status = listing.status.map_or("pending", |s| s.as_str());
        let _ = write!(
            rows,
            "<tr><td><a href=\"/detail/{href}\">{no}</a></td><td>{name}</td><td>{dept}</td>\
<td>{sticker}</td><td class=\"status-{status}\">{status}</td></tr>",
            href = path_segment(asset.asset_no.as_str()),
            no = escape(asset.asset_no.as_str()),
            name = escape(&asset.name),
            dept = escape(&asset.department),
            sticker = escape(&asset.sticker_no),
        );
    }
    if listings.is_empty() {
        rows.push_str("<tr><td colspan=\"5\">No matching assets.</td></tr>");
    }

    let body = format!(
        "<h1>Asset inspection</h1>\
<form method=\"get\" action=\"/\"><input type=\"search\" name=\"q\" value=\"{q}\" \
placeholder=\"Name, department or asset number\"><button type=\"submit\">Search</button></form>\
<table><thead><tr><th>Asset</th><th>Owner</th><th>Department</th><th>Sticker</th><th>Status</th></tr></thead>\
<tbody>{rows}</tbody></table>"
    );
    page("Assets", &body)
}

fn item_select(n: usize, current: Option<ItemResult>) -> String {
    let current = current.unwrap_or_default();
    let option = |value: ItemResult, label: &str| {
        let selected = if value == current { " selected" } else { "" };
        format!(
            "<option value=\"{}\"{selected}>{label}</option>",
            value.as_flag()
        )
    };
    format!(
        "<label>Item {n} <select name=\"item{n}\">{}{}</select></label><br>",
        option(ItemResult::Pass, "Pass"),
        option(ItemResult::Fail, "Fail"),
    )
}

/// Inspection form for one asset, prefilled from its latest inspection.
pub fn detail_page(asset: &Asset, inspection: Option<&Inspection>, today: NaiveDate) -> String {
    let no = escape(asset.asset_no.as_str());
    let action = path_segment(asset.asset_no.as_str());

    let mut items = String::new();
    for n in 1..=ITEM_COUNT {
        items.push_str(&item_select(n, inspection.and_then(|i| i.items.item(n))));
    }

    let sticker = inspection.map_or(asset.sticker_no.as_str(), |i| i.sticker_no.as_str());
    let date = inspection.map_or(today, |i| i.inspect_date).format(DATE_FORMAT);
    let inspector = inspection
        .and_then(|i| i.inspector.as_deref())
        .unwrap_or_default();
    let comment = inspection.map_or("", |i| i.comment.as_str());

    let status = match inspection {
        None => "<p>Status: pending</p>".to_string(),
        Some(i) => {
            let photo = i
                .photo_path
                .as_deref()
                .and_then(photo_file_name)
                .map(|f| {
                    format!(
                        " | <a href=\"/photos/{}\">photo</a>",
                        path_segment(f)
                    )
                })
                .unwrap_or_default();
            format!(
                "<p>Status: {} ({} of {ITEM_COUNT} passed, inspected {}){photo}</p>",
                i.status,
                i.items.passed(),
                i.inspect_date.format(DATE_FORMAT),
            )
        }
    };

    let body = format!(
        "<h1>{no}</h1>\
<dl><dt>Owner</dt><dd>{name}</dd><dt>Department</dt><dd>{dept}</dd>\
<dt>Registered sticker</dt><dd>{default_sticker}</dd></dl>{status}\
<form method=\"post\" action=\"/detail/{action}\" enctype=\"multipart/form-data\">\
{items}\
<label>Sticker number <input name=\"sticker_no\" value=\"{sticker}\"></label><br>\
<label>Inspection date <input type=\"date\" name=\"inspect_date\" value=\"{date}\"></label><br>\
<label>Inspector <input name=\"inspector\" value=\"{inspector}\"></label><br>\
<label>Comment <textarea name=\"comment\">{comment}</textarea></label><br>\
<label>Photo <input type=\"file\" name=\"photo\" accept=\"image/*\"></label><br>\
<button type=\"submit\">Submit</button></form>",
        name = escape(&asset.name),
        dept = escape(&asset.department),
        default_sticker = escape(&asset.sticker_no),
        sticker = escape(sticker),
        inspector = escape(inspector),
        comment = escape(comment),
    );
    page(asset.asset_no.as_str(), &body)
}

/// Compliance summary.
pub fn dashboard_page(summary: &ComplianceSummary) -> String {
    let body = format!(
        "<h1>Dashboard</h1><dl>\
<dt>Inspections submitted</dt><dd id=\"total\">{}</dd>\
<dt>Compliance</dt><dd id=\"compliance\">{:.1}%</dd>\
<dt>Failed items</dt><dd id=\"weak-count\">{}</dd></dl>",
        summary.total, summary.compliance, summary.weak_count
    );
    page("Dashboard", &body)
}

/// Error page for a failed request.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!("<h1>{}</h1><p>{}</p>", escape(&title), escape(message));
    page(&title, &body)
}
