use crate::domain::method::{Market, PaymentMethod};
use crate::interfaces::format::format_amount;
use serde::Serialize;

/// How many methods can sit side by side.
pub const MAX_COMPARED: usize = 3;
const FLOW_PREVIEW_CHARS: usize = 60;

/// Ordered set of method ids picked for side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` if selected, otherwise adds it while there is room.
    ///
    /// Returns whether the selection changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            true
        } else if self.ids.len() < MAX_COMPARED {
            self.ids.push(id.to_string());
            true
        } else {
            false
        }
    }

    /// A market switch invalidates every pick.
    pub fn on_market_change(&mut self, previous: Market, next: Market) {
        if previous != next {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARED
    }
}

/// One labelled line of the comparison table, one cell per compared method.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub cells: Vec<String>,
}

/// Builds the comparison table for `methods`, in the order given.
pub fn comparison_rows(methods: &[&PaymentMethod]) -> Vec<ComparisonRow> {
    vec![
        row(methods, "Confirmation time", |m| m.confirmation_time.badge().to_string()),
        row(methods, "Success rate", |m| {
            format!("{}%", (m.success_rate * 100.0).round() as u32)
        }),
        row(methods, "Bank account needed", |m| yes_no(m.requires_bank_account)),
        row(methods, "Smartphone needed", |m| yes_no(m.requires_smartphone)),
        row(methods, "Store visit needed", |m| yes_no(m.requires_physical_visit)),
        row(methods, "Max amount", |m| format_amount(m.max_amount, m.currency)),
        row(methods, "Expiration window", |m| m.expiration_window.clone()),
        row(methods, "Payment flow", |m| truncate(&m.flow_description, FLOW_PREVIEW_CHARS)),
    ]
}

fn row(
    methods: &[&PaymentMethod],
    label: &'static str,
    cell: impl Fn(&PaymentMethod) -> String,
) -> ComparisonRow {
    ComparisonRow {
        label,
        cells: methods.iter().map(|m| cell(*m)).collect(),
    }
}

fn yes_no(value: bool) -> String {
    let answer = if value { "Yes" } else { "No" };
    answer.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head.trim_end())
    }
}
