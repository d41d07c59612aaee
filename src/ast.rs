use crate::config::ArityMarkers;

/// Number of operands a ufunc accepts.
///
/// The lowercase name is what the generated wrapper templates are called
/// after (`ufunc_unary`, `ufunc_binary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Resolves the arity of a signature from its parameter list.
    ///
    /// The binary marker is checked first since the unary marker is
    /// usually a substring of it.
    pub fn resolve(params: &str, markers: &ArityMarkers) -> Option<Self> {
        if params.contains(markers.binary.as_str()) {
            Some(Arity::Binary)
        } else if params.contains(markers.unary.as_str()) {
            Some(Arity::Unary)
        } else {
            None
        }
    }
}

/// The ufunc opened by the most recent signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationEntry {
    pub name: String,
    pub arity: Arity,
}

/// One item of the trailing declarations block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `ufunc_<arity><_name> name;`
    Field { name: String, arity: Arity },
    /// `auto name = expr;`
    Alias { name: String, expr: String },
    Description(String),
    Banner(String),
}

impl Fragment {
    pub fn is_declaration(&self) -> bool {
        matches!(self, Fragment::Field { .. } | Fragment::Alias { .. })
    }
}

/// Ordered buffer of fragments, flushed once after the whole input is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBuffer {
    fragments: Vec<Fragment>,
}

impl DeclarationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Replaces the most recently appended fragment, returning the previous one.
    /// Nothing is stored when the buffer is empty.
    pub fn replace_last(&mut self, fragment: Fragment) -> Option<Fragment> {
        self.fragments
            .last_mut()
            .map(|existing| std::mem::replace(existing, fragment))
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }
}
