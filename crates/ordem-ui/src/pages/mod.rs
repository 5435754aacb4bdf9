pub mod auth;
pub mod campaign;
pub mod dashboard;
pub mod home;

use ordem_types::CampaignStatus;

/// `2025-06-01T20:30:00` -> `01/06/2025 20:30`. Display-only; input that
/// does not look like an ISO timestamp is shown as-is.
pub(crate) fn format_date(iso: &str) -> String {
    let date = iso.get(0..10);
    let time = iso.get(11..16);
    match (date, time) {
        (Some(date), Some(time)) => {
            let mut parts = date.split('-');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(year), Some(month), Some(day)) => format!("{day}/{month}/{year} {time}"),
                _ => iso.to_string(),
            }
        }
        _ => iso.to_string(),
    }
}

pub(crate) fn status_label(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "ATIVA",
        CampaignStatus::Paused => "PAUSADA",
        CampaignStatus::Archived => "ARQUIVADA",
    }
}

pub(crate) fn status_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "status-active",
        CampaignStatus::Paused => "status-paused",
        CampaignStatus::Archived => "status-archived",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamps_render_in_day_first_order() {
        assert_eq!(format_date("2025-06-01T20:30:00"), "01/06/2025 20:30");
        assert_eq!(format_date("2024-12-31T09:05:59.123Z"), "31/12/2024 09:05");
    }

    #[test]
    fn unrecognized_dates_pass_through() {
        assert_eq!(format_date("ontem"), "ontem");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn every_status_has_a_label_and_class() {
        assert_eq!(status_label(CampaignStatus::Active), "ATIVA");
        assert_eq!(status_label(CampaignStatus::Paused), "PAUSADA");
        assert_eq!(status_label(CampaignStatus::Archived), "ARQUIVADA");
        assert_eq!(status_class(CampaignStatus::Active), "status-active");
        assert_eq!(status_class(CampaignStatus::Archived), "status-archived");
    }
}
