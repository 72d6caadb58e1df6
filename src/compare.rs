use crate::model::row::AggregateRow;

pub const MAX_SELECTED: usize = 5;
pub const MIN_COMPARE: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    selected: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns false only when an append was refused at capacity; the caller
    // surfaces the limit to the user, the selection itself stays silent.
    pub fn toggle(&mut self, method_name: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|name| name == method_name) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() >= MAX_SELECTED {
            return false;
        }
        self.selected.push(method_name.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn contains(&self, method_name: &str) -> bool {
        self.selected.iter().any(|name| name == method_name)
    }

    // Names that vanished from the current aggregate set are kept in the
    // selection; they resolve to nothing until a filter brings them back.
    pub fn resolve<'a>(&self, rows: &'a [AggregateRow]) -> Vec<&'a AggregateRow> {
        rows.iter()
            .filter(|row| self.contains(&row.method_name))
            .collect()
    }
}
