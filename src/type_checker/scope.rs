use std::collections::HashMap;

use crate::{
    ast::types::TypeDescriptor,
    errors::errors::{Error, ErrorImpl},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Constant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub id: String,
    pub kind: SymbolKind,
    /// `None` until inferred from an initializer.
    pub data_type: Option<TypeDescriptor>,
    pub mutable: bool,
}

impl Symbol {
    pub fn new(id: impl Into<String>, mutable: bool, data_type: Option<TypeDescriptor>) -> Self {
        Symbol {
            id: id.into(),
            kind: if mutable {
                SymbolKind::Variable
            } else {
                SymbolKind::Constant
            },
            data_type,
            mutable,
        }
    }
}

/// A symbol table chained to the table of its enclosing block.
///
/// A scope owns its symbols; the parent is only consulted on lookup, so
/// an inner declaration shadows an outer one of the same name.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    symbols: HashMap<String, Symbol>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// The root scope of a program.
    pub fn new() -> Self {
        Scope {
            symbols: HashMap::new(),
            parent: None,
        }
    }

    pub fn child(parent: &'p Scope<'p>) -> Self {
        Scope {
            symbols: HashMap::new(),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Adds a symbol to this scope. Fails if this scope, not an enclosing
    /// one, already declares the id.
    pub fn register(&mut self, symbol: Symbol, line: u32) -> Result<(), Error> {
        if self.symbols.contains_key(&symbol.id) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: symbol.id,
                },
                line,
            ));
        }

        self.symbols.insert(symbol.id.clone(), symbol);
        Ok(())
    }

    /// Innermost symbol named `id` along the scope chain.
    pub fn lookup(&self, id: &str) -> Option<&Symbol> {
        match self.symbols.get(id) {
            Some(symbol) => Some(symbol),
            None => self.parent.and_then(|parent| parent.lookup(id)),
        }
    }

    pub fn lookup_local(&self, id: &str) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    /// Back-patches the type of a symbol declared in this scope.
    pub fn resolve_type(&mut self, id: &str, data_type: TypeDescriptor) {
        if let Some(symbol) = self.symbols.get_mut(id) {
            symbol.data_type = Some(data_type);
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
