//! The single-pass state machine.
//!
//! [`ParserContext`] is threaded through every classified line. It remembers
//! the entry opened by the last signature and owns the declaration buffer
//! until the pass is finished. Type definitions are handed back to the
//! caller as soon as they are produced; everything else waits in the buffer.

use tracing::debug;

use crate::ast::{Arity, DeclarationBuffer, Fragment, OperationEntry};
use crate::classifier::LineKind;
use crate::config::ArityMarkers;
use crate::emitter::Emitter;
use crate::{GenResult, UfuncGenError};

#[derive(Debug, Clone, Default)]
pub struct ParserContext {
    current: Option<OperationEntry>,
    buffer: DeclarationBuffer,
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry opened by the most recent signature, if any.
    pub fn current(&self) -> Option<&OperationEntry> {
        self.current.as_ref()
    }

    pub fn buffer(&self) -> &DeclarationBuffer {
        &self.buffer
    }

    /// Applies one classified line.
    ///
    /// Returns the text that must be written to the output immediately,
    /// which is only ever a type definition.
    pub fn apply(
        &mut self,
        line: usize,
        kind: LineKind,
        markers: &ArityMarkers,
        emitter: &Emitter<'_>,
    ) -> GenResult<Option<String>> {
        match kind {
            LineKind::Comment | LineKind::Insignificant => Ok(None),
            LineKind::Signature { name, params } => {
                self.open(line, name, &params, markers)?;
                Ok(None)
            }
            LineKind::CodeExpression(expr) => {
                let entry = self.require_entry(line, &expr, LineKind::CodeExpression)?;
                debug!(name = %entry.name, arity = %entry.arity, "type definition");
                Ok(Some(emitter.type_definition(&entry.name, entry.arity, &expr)))
            }
            LineKind::EquivalentExpression(expr) => {
                let name = self
                    .require_entry(line, &expr, LineKind::EquivalentExpression)?
                    .name
                    .clone();
                debug!(name = %name, expr = %expr, "alias replaces last fragment");
                // Only the signature's own field is expected here; no check is made
                self.buffer.replace_last(Fragment::Alias { name, expr });
                Ok(None)
            }
            LineKind::Description(text) => {
                self.buffer.push(Fragment::Description(text));
                Ok(None)
            }
            LineKind::SectionHeader(title) => {
                self.buffer.push(Fragment::Banner(title));
                Ok(None)
            }
        }
    }

    /// Ends the pass and hands the buffered fragments over for rendering.
    pub fn finish(self) -> DeclarationBuffer {
        self.buffer
    }

    fn open(
        &mut self,
        line: usize,
        name: String,
        params: &str,
        markers: &ArityMarkers,
    ) -> GenResult<()> {
        let arity = Arity::resolve(params, markers).ok_or_else(|| UfuncGenError::Arity {
            line,
            name: name.clone(),
            params: params.to_string(),
        })?;

        self.buffer.push(Fragment::Field {
            name: name.clone(),
            arity,
        });
        debug!(name = %name, arity = %arity, "signature opened");
        self.current = Some(OperationEntry { name, arity });
        Ok(())
    }

    fn require_entry(
        &self,
        line: usize,
        expr: &str,
        kind: fn(String) -> LineKind,
    ) -> GenResult<&OperationEntry> {
        self.current
            .as_ref()
            .ok_or_else(|| UfuncGenError::OrphanExpression {
                line,
                kind: kind(expr.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::config::GeneratorConfig;

    fn run(context: &mut ParserContext, lines: &[&str]) -> GenResult<Vec<String>> {
        let config = GeneratorConfig::default();
        let emitter = Emitter::new(&config);
        let mut emitted = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let kind = classify(line);
            if let Some(text) = context.apply(index + 1, kind, &config.markers, &emitter)? {
                emitted.push(text);
            }
        }
        Ok(emitted)
    }

    #[test]
    fn test_signature_opens_entry() {
        let mut context = ParserContext::new();
        run(&mut context, &["add(x1, x2)"]).unwrap();

        assert_eq!(
            context.current(),
            Some(&OperationEntry {
                name: "add".to_string(),
                arity: Arity::Binary,
            })
        );
        assert_eq!(
            context.buffer().fragments(),
            &[Fragment::Field {
                name: "add".to_string(),
                arity: Arity::Binary,
            }]
        );
    }

    #[test]
    fn test_code_expression_is_not_buffered() {
        let mut context = ParserContext::new();
        let emitted = run(&mut context, &["negative(x)", "cpp[-x]"]).unwrap();

        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].contains("struct _negative"));
        assert!(emitted[0].contains("decltype(-x)"));
        assert_eq!(context.buffer().len(), 1);
    }

    #[test]
    fn test_equivalent_replaces_field() {
        let mut context = ParserContext::new();
        let emitted = run(&mut context, &["reciprocal(x)", "eq[1 / x]"]).unwrap();

        assert!(emitted.is_empty());
        assert_eq!(
            context.finish().into_fragments(),
            vec![Fragment::Alias {
                name: "reciprocal".to_string(),
                expr: "1 / x".to_string(),
            }]
        );
    }

    #[test]
    fn test_equivalent_replaces_interposed_description() {
        let mut context = ParserContext::new();
        run(&mut context, &["sin(x)", "Trigonometric sine.", "eq[foo]"]).unwrap();

        assert_eq!(
            context.finish().into_fragments(),
            vec![
                Fragment::Field {
                    name: "sin".to_string(),
                    arity: Arity::Unary,
                },
                Fragment::Alias {
                    name: "sin".to_string(),
                    expr: "foo".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_equivalent_replaces_interposed_banner() {
        let mut context = ParserContext::new();
        run(&mut context, &["sin(x)", "Trig", "eq[foo]"]).unwrap();

        assert_eq!(
            context.finish().into_fragments(),
            vec![
                Fragment::Field {
                    name: "sin".to_string(),
                    arity: Arity::Unary,
                },
                Fragment::Alias {
                    name: "sin".to_string(),
                    expr: "foo".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_older_entries_are_immutable() {
        let mut context = ParserContext::new();
        run(&mut context, &["sin(x)", "cos(x)", "eq[sin]"]).unwrap();

        let fragments = context.finish().into_fragments();
        assert_eq!(
            fragments[0],
            Fragment::Field {
                name: "sin".to_string(),
                arity: Arity::Unary,
            }
        );
        assert_eq!(
            fragments[1],
            Fragment::Alias {
                name: "cos".to_string(),
                expr: "sin".to_string(),
            }
        );
    }

    #[test]
    fn test_arity_error() {
        let mut context = ParserContext::new();
        let result = run(&mut context, &["# header", "clip(a, lo, hi)"]);

        match result {
            Err(UfuncGenError::Arity { line, name, params }) => {
                assert_eq!(line, 2);
                assert_eq!(name, "clip");
                assert_eq!(params, "a, lo, hi");
            }
            other => panic!("expected arity error, got {:?}", other),
        }
        assert!(context.buffer().is_empty());
    }

    #[test]
    fn test_orphan_code_expression() {
        let mut context = ParserContext::new();
        let result = run(&mut context, &["Math", "cpp[x + 1]"]);
        assert!(matches!(
            result,
            Err(UfuncGenError::OrphanExpression {
                line: 2,
                kind: LineKind::CodeExpression(_)
            })
        ));
    }

    #[test]
    fn test_orphan_equivalent() {
        let mut context = ParserContext::new();
        let result = run(&mut context, &["eq[1 / x]"]);
        assert!(matches!(
            result,
            Err(UfuncGenError::OrphanExpression {
                line: 1,
                kind: LineKind::EquivalentExpression(_)
            })
        ));
    }

    #[test]
    fn test_banner_description_alias_order() {
        let mut context = ParserContext::new();
        let emitted = run(
            &mut context,
            &["Misc", "Return the reciprocal.", "reciprocal(x)", "eq[1 / x]"],
        )
        .unwrap();

        assert!(emitted.is_empty());
        assert_eq!(
            context.finish().into_fragments(),
            vec![
                Fragment::Banner("Misc".to_string()),
                Fragment::Description("Return the reciprocal.".to_string()),
                Fragment::Alias {
                    name: "reciprocal".to_string(),
                    expr: "1 / x".to_string(),
                },
            ]
        );
    }
}
