use std::collections::HashSet;

/// Stack of declared names, innermost scope last.
///
/// The root scope is never popped, so the table is usable even when braces in
/// the input do not pair up.
#[derive(Debug, Clone)]
pub struct ScopeTable {
    scopes: Vec<HashSet<String>>,
}

impl Default for ScopeTable {
    fn default() -> Self {
        Self { scopes: vec![HashSet::new()] }
    }
}

impl ScopeTable {
    pub fn enter(&mut self) {
        self.scopes.push(HashSet::new());
    }

    pub fn exit(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Adds `name` to the innermost scope. Returns `false` if it was already
    /// declared there.
    pub fn declare(&mut self, name: &str) -> bool {
        self.scopes
            .last_mut()
            .is_some_and(|scope| scope.insert(name.to_string()))
    }

    #[must_use]
    pub fn declared_here(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.contains(name))
    }

    /// Whether `name` is declared in any enclosing scope.
    #[must_use]
    pub fn is_visible(&self, name: &str) -> bool {
        self.scopes
            .iter()
            .rev()
            .any(|scope| scope.contains(name))
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::ScopeTable;

    #[test]
    fn inner_names_vanish_on_exit() {
        let mut table = ScopeTable::default();
        assert!(table.declare("a"));
        table.enter();
        assert!(table.declare("b"));
        assert!(table.is_visible("a"));
        assert!(!table.declared_here("a"));
        table.exit();
        assert!(!table.is_visible("b"));
    }

    #[test]
    fn shadowing_is_allowed_but_redeclaring_is_not() {
        let mut table = ScopeTable::default();
        assert!(table.declare("a"));
        assert!(!table.declare("a"));
        table.enter();
        assert!(table.declare("a"));
    }

    #[test]
    fn root_scope_survives_extra_exits() {
        let mut table = ScopeTable::default();
        table.exit();
        table.exit();
        assert_eq!(table.depth(), 1);
        assert!(table.declare("a"));
    }
}
