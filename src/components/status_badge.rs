use leptos::prelude::*;

use crate::catalog::CopyStatus;
use crate::state::use_finder;

/// Transient "Copied!" / "Copy failed" indicator for the last clipboard export.
#[component]
pub fn CopyStatusBadge() -> impl IntoView {
    let finder = use_finder();

    move || {
        let feedback = finder.feedback.get();
        let class = match feedback.status {
            CopyStatus::Idle => "status-badge status-idle",
            CopyStatus::Succeeded => "status-badge status-pass",
            CopyStatus::Failed => "status-badge status-fail",
        };
        let (icon, text) = match feedback.status {
            CopyStatus::Idle => ("", ""),
            CopyStatus::Succeeded => ("\u{2713}", feedback.label().unwrap_or_default()),
            CopyStatus::Failed => ("\u{2717}", feedback.label().unwrap_or_default()),
        };

        view! {
            <span class=class role="status">
                <span class="status-icon">{icon}</span>
                <span class="status-text">{text}</span>
            </span>
        }
    }
}
