//! Suggestion catalog view

use std::fmt::Write;

use chore_core::SuggestedTask;

pub const EMPTY_CATALOG: &str = "No suggested tasks available.";

/// `$20.00`, or `None` when the catalog has no estimate
pub fn format_cost(cost: Option<f64>) -> Option<String> {
    cost.map(|c| format!("${c:.2}"))
}

pub fn render_suggestions(suggestions: &[SuggestedTask]) -> String {
    if suggestions.is_empty() {
        return EMPTY_CATALOG.to_string();
    }

    let mut out = String::from("Suggested tasks");
    for suggestion in suggestions {
        let id = suggestion.id.to_string();
        let _ = write!(out, "\n\n#{id:<5} {}", suggestion.name);
        if let Some(cost) = format_cost(suggestion.estimated_cost) {
            let _ = write!(out, "  ({cost})");
        }
        if !suggestion.description.is_empty() {
            let _ = write!(out, "\n       {}", suggestion.description);
        }
        let _ = write!(out, "\n       -> Add to To-do List: chore-board accept {}", suggestion.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(Some(20.0)), Some("$20.00".to_string()));
        assert_eq!(format_cost(Some(4.5)), Some("$4.50".to_string()));
        assert_eq!(format_cost(None), None);
    }

    #[test]
    fn test_render_catalog() {
        let out = render_suggestions(&[
            SuggestedTask::new(5, "Mow lawn", "Front yard").with_cost(20.0),
            SuggestedTask::new(6, "Clean gutters", ""),
        ]);
        assert!(out.contains("#5     Mow lawn  ($20.00)"));
        assert!(out.contains("Front yard"));
        assert!(out.contains("#6     Clean gutters\n"));
        assert!(out.contains("chore-board accept 6"));
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(render_suggestions(&[]), EMPTY_CATALOG);
    }
}
