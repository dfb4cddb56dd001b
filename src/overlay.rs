use chrono::{DateTime, NaiveDateTime};

use crate::models::ContainerInfo;

/// One display line of the result overlay. Rows carrying `href` render as
/// links opened in a new browsing context.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRow {
    pub label: &'static str,
    pub value: String,
    pub href: Option<String>,
}

impl OverlayRow {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            href: None,
        }
    }

    fn link(label: &'static str, value: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            href: Some(href.into()),
        }
    }
}

/// Open/close contract of the result overlay: visible only once explicitly
/// opened, dismissed by an explicit close or a click on the background.
/// Clicks inside the overlay body stop there and never dismiss it.
#[derive(Debug, Clone, Default)]
pub struct ResultOverlay {
    open: bool,
}

impl ResultOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn background_clicked(&mut self) {
        self.close();
    }

    pub fn body_clicked(&mut self) {}
}

pub fn overlay_title(info: &ContainerInfo) -> String {
    format!("Container {}", info.container_number)
}

/// Rows shown for a lookup result. Fields absent from the result are
/// omitted, never rendered as empty rows.
pub fn result_rows(info: &ContainerInfo) -> Vec<OverlayRow> {
    let mut rows = vec![OverlayRow::text("Status", &info.status)];

    if let Some(pol) = &info.pol {
        rows.push(OverlayRow::text("POL", pol));
    }
    if let Some(pod) = &info.pod {
        rows.push(OverlayRow::text("POD", pod));
    }
    if let Some(vessel) = &info.vessel {
        let value = match &info.vessel_voyage {
            Some(voyage) => format!("{} (Voyage {})", vessel, voyage),
            None => vessel.clone(),
        };
        rows.push(OverlayRow::text("Vessel", value));
    }
    if let Some(arrival) = &info.arrival_date {
        rows.push(OverlayRow::text("ETA", format_display_date(&arrival.date)));
    }
    if let Some(delay) = &info.eta {
        rows.push(OverlayRow::text("Delay", delay));
    }
    if let Some(co2) = &info.co2_emission {
        rows.push(OverlayRow::text("CO₂", co2));
    }
    if let Some(url) = &info.live_map_url {
        rows.push(OverlayRow::link("Live Map", url.clone(), url.clone()));
    }

    rows
}

/// Formats a provider date string as YYYY-MM-DD for display. The provider is
/// not consistent about date shapes, so unparseable input falls back to the
/// raw text rather than failing the render.
pub fn format_display_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, fmt) {
            return parsed.date().format("%Y-%m-%d").to_string();
        }
    }

    raw.to_string()
}
