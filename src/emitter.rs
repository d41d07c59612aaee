//! C++ rendering for the generated header.
//!
//! The emitter only produces text. Whether a piece goes straight to the
//! output or waits in the declaration buffer is decided by the parser.

use crate::ast::{Arity, Fragment};
use crate::config::GeneratorConfig;

pub struct Emitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Provenance comment, includes and the opening of the namespace.
    pub fn preamble(&self) -> String {
        let mut output = format!("// {}\n\n#pragma once\n", self.config.provenance);
        for include in &self.config.includes {
            output.push_str(&format!("#include <{}>\n", include));
        }
        output.push_str(&format!("namespace {} {{\n\n", self.config.namespace));
        output
    }

    /// The function object `_name` evaluating `expr`.
    pub fn type_definition(&self, name: &str, arity: Arity, expr: &str) -> String {
        let (template, call) = match arity {
            Arity::Unary => (
                "template <class Type>",
                format!("auto operator()(const Type& x) -> decltype({})", expr),
            ),
            Arity::Binary => (
                "template <class Type1, class Type2>",
                format!(
                    "constexpr auto operator()(const Type1& x1, const Type2& x2) -> decltype({})",
                    expr
                ),
            ),
        };

        [
            format!("  {}", template),
            format!("  struct _{} {{", name),
            format!("    constexpr _{}() = default;", name),
            format!("    {} {{", call),
            format!("      return {};", expr),
            "    }".to_string(),
            "  };\n\n".to_string(),
        ]
        .join("\n")
    }

    /// Renders a single fragment. Declarations carry no line terminator so a
    /// following description can trail on the same line.
    pub fn fragment(&self, fragment: &Fragment) -> String {
        match fragment {
            Fragment::Field { name, arity } => {
                format!("  ufunc_{}<_{}> {};", arity, name, name)
            }
            Fragment::Alias { name, expr } => format!("  auto {} = {};", name, expr),
            Fragment::Description(text) => format!("\t// {}\n", text),
            Fragment::Banner(title) => self.banner(title),
        }
    }

    /// Fixed width divider, e.g. `/****** Math ******/`.
    pub fn banner(&self, title: &str) -> String {
        let label = format!(" {} ", title);
        format!(
            "\n\n  /{:*^width$}/\n",
            label,
            width = self.config.banner_width
        )
    }

    /// Renders the whole declarations block in buffer order.
    ///
    /// A declaration not followed by a description ends its own line, where
    /// the numpy generator script ran it into the next declaration.
    pub fn declarations(&self, fragments: &[Fragment]) -> String {
        let mut output = String::new();
        for (index, fragment) in fragments.iter().enumerate() {
            output.push_str(&self.fragment(fragment));
            let described = matches!(fragments.get(index + 1), Some(Fragment::Description(_)));
            if fragment.is_declaration() && !described {
                output.push('\n');
            }
        }
        output
    }

    pub fn closing(&self) -> String {
        "\n}\n".to_string()
    }
}
