use super::matches_any;
use crate::types::config::Patterns;
use crate::types::event::{EventDetails, EventType, RiskEvent};
use crate::types::record::ReflogEntry;

/// Scans the reference log for operations that rewrite history. The
/// three keyword groups are tested independently, so an entry matching
/// several groups emits one event per group.
pub fn detect(entries: &[ReflogEntry], patterns: &Patterns) -> Vec<RiskEvent> {
    let groups: [(&[String], &'static str); 3] = [
        (patterns.rebase.as_slice(), "rebase"),
        (patterns.reset.as_slice(), "reset --hard"),
        (patterns.force_push.as_slice(), "force push"),
    ];

    let mut events = Vec::new();
    for entry in entries {
        let message = entry.message.to_lowercase();
        for (group, action) in groups {
            if matches_any(&message, group) {
                events.push(RiskEvent::for_reflog(
                    EventType::HistoryRewrite,
                    entry,
                    EventDetails::Rewrite {
                        action,
                        selector: entry.selector.clone(),
                        message: entry.message.clone(),
                    },
                ));
            }
        }
    }
    events
}
