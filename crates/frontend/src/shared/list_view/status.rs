//! Static projection from raw status strings to badge presentation.

use contracts::shared::normalize::PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
    Warning,
    Primary,
    Neutral,
}

impl StatusTone {
    pub fn style_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "badge badge--success",
            StatusTone::Error => "badge badge--error",
            StatusTone::Warning => "badge badge--warning",
            StatusTone::Primary => "badge badge--primary",
            StatusTone::Neutral => "badge badge--neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusProjection {
    pub label: String,
    pub tone: StatusTone,
}

impl StatusProjection {
    pub fn style_class(&self) -> &'static str {
        self.tone.style_class()
    }
}

// (normalized raw value, label, tone)
const STATUS_TABLE: &[(&str, &str, StatusTone)] = &[
    ("online", "Online", StatusTone::Success),
    ("offline", "Offline", StatusTone::Error),
    ("synced", "Synced", StatusTone::Success),
    ("success", "Success", StatusTone::Success),
    ("completed", "Completed", StatusTone::Success),
    ("failed", "Failed", StatusTone::Error),
    ("error", "Error", StatusTone::Error),
    ("pending", "Pending", StatusTone::Warning),
    ("warning", "Warning", StatusTone::Warning),
    ("warn", "Warning", StatusTone::Warning),
    ("in_progress", "In progress", StatusTone::Primary),
    ("active", "Active", StatusTone::Success),
    ("disabled", "Disabled", StatusTone::Neutral),
    ("inactive", "Inactive", StatusTone::Neutral),
    ("expired", "Expired", StatusTone::Error),
    ("paired", "Paired", StatusTone::Warning),
    ("push", "Push", StatusTone::Primary),
    ("pull", "Pull", StatusTone::Neutral),
    ("admin", "Admin", StatusTone::Warning),
    ("support", "Support", StatusTone::Primary),
    ("info", "Info", StatusTone::Primary),
    ("debug", "Debug", StatusTone::Neutral),
    ("resolved", "Resolved", StatusTone::Success),
    ("open", "Open", StatusTone::Warning),
];

fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Never fails: unknown values keep their raw text with the neutral tone.
pub fn project_status(raw: &str) -> StatusProjection {
    let key = normalize_key(raw);
    match STATUS_TABLE.iter().find(|(known, _, _)| *known == key) {
        Some((_, label, tone)) => StatusProjection {
            label: (*label).to_string(),
            tone: *tone,
        },
        None => StatusProjection {
            label: if raw.trim().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                raw.trim().to_string()
            },
            tone: StatusTone::Neutral,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_are_case_insensitive() {
        let online = project_status("ONLINE");
        assert_eq!(online.label, "Online");
        assert_eq!(online.style_class(), "badge badge--success");

        assert_eq!(project_status(" failed ").tone, StatusTone::Error);
        assert_eq!(project_status("In Progress").tone, StatusTone::Primary);
        assert_eq!(project_status("in-progress").label, "In progress");
        assert_eq!(project_status("Paired").tone, StatusTone::Warning);
    }

    #[test]
    fn test_unknown_values_fall_back_to_neutral() {
        let odd = project_status("Quarantined");
        assert_eq!(odd.label, "Quarantined");
        assert_eq!(odd.tone, StatusTone::Neutral);

        let empty = project_status("   ");
        assert_eq!(empty.label, PLACEHOLDER);
        assert_eq!(empty.style_class(), "badge badge--neutral");
    }
}
