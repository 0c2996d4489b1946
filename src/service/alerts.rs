use chrono::{Datelike, Utc};
use serde::Serialize;

/// Seasonal local-health advisory shown on the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthAlert {
    pub level: &'static str,
    pub illness: &'static str,
    pub message: &'static str,
    pub color_class: &'static str,
}

pub fn current_alert() -> HealthAlert {
    alert_for_month(Utc::now().month())
}

/// Post-monsoon months (August through November) carry the dengue warning.
pub fn alert_for_month(month: u32) -> HealthAlert {
    if (8..=11).contains(&month) {
        HealthAlert {
            level: "High Risk",
            illness: "Dengue Fever",
            message: "Post-monsoon season is a peak time for Dengue. \
                      Ensure no stagnant water is near your home.",
            color_class: "alert-orange",
        }
    } else {
        HealthAlert {
            level: "Low Risk",
            illness: "General Alert",
            message: "Health risks are currently low. \
                      Continue to follow good hygiene practices.",
            color_class: "alert-green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_monsoon_window_is_high_risk() {
        assert_eq!(alert_for_month(8).level, "High Risk");
        assert_eq!(alert_for_month(11).illness, "Dengue Fever");
    }

    #[test]
    fn window_boundaries_are_low_risk() {
        assert_eq!(alert_for_month(7).level, "Low Risk");
        assert_eq!(alert_for_month(12).level, "Low Risk");
        assert_eq!(alert_for_month(1).color_class, "alert-green");
    }
}
