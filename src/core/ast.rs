//! Owned syntax tree for the JavaScript subset the transforms understand.
//!
//! The tree-sitter concrete tree is lowered into these types once, right
//! after parsing (see [`crate::parser`]). Every kind the transforms do not
//! understand is kept as an `Other { kind }` node carrying the tree-sitter
//! kind name, so consumers match exhaustively and reject explicitly.

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Empty,
    FunctionDeclaration {
        name: String,
        params: Vec<Pattern>,
    },
    /// `var`, `let` and `const` declarations
    VariableDeclaration {
        declarations: Vec<VariableDeclarator>,
    },
    Expression(Expression),
    Other {
        kind: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
}

/// Binding target of a parameter or declarator
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Identifier(String),
    Other { kind: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// Non-computed member access, `object.property`
    Member {
        object: Box<Expression>,
        property: String,
    },
    Identifier(String),
    Literal(Literal),
    /// Unary and update operators; `prefix` is false for `x++`
    Unary {
        operator: String,
        argument: Box<Expression>,
        prefix: bool,
    },
    Array {
        elements: Vec<Expression>,
    },
    Object {
        properties: Vec<Property>,
    },
    New {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// Template literal; `quasis` holds the raw static segments, always one
    /// more than `expressions`
    Template {
        quasis: Vec<String>,
        expressions: Vec<Expression>,
    },
    /// Function expressions and arrow functions
    Function {
        params: Vec<Pattern>,
    },
    Other {
        kind: String,
    },
}

impl Expression {
    /// Name of the called function when this is a call to a plain identifier
    pub fn called_name(&self) -> Option<&str> {
        match self {
            Expression::Call { callee, .. } => match callee.as_ref() {
                Expression::Identifier(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Tree-sitter kind name for this node
    pub fn kind(&self) -> &str {
        match self {
            Expression::Call { .. } => "call_expression",
            Expression::Member { .. } => "member_expression",
            Expression::Identifier(_) => "identifier",
            Expression::Literal(_) => "literal",
            Expression::Unary { .. } => "unary_expression",
            Expression::Array { .. } => "array",
            Expression::Object { .. } => "object",
            Expression::New { .. } => "new_expression",
            Expression::Template { .. } => "template_string",
            Expression::Function { .. } => "function_expression",
            Expression::Other { kind } => kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Cooked string value, escapes already decoded
    String(String),
    /// Number as written in the source
    Number(String),
    Boolean(bool),
    Null,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    KeyValue { key: PropertyKey, value: Expression },
    Spread(Expression),
    Other { kind: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKey {
    Identifier(String),
    Literal(Literal),
    Computed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_called_name() {
        let call = Expression::Call {
            callee: Box::new(Expression::Identifier("double".into())),
            arguments: vec![],
        };
        assert_eq!(call.called_name(), Some("double"));

        let method_call = Expression::Call {
            callee: Box::new(Expression::Member {
                object: Box::new(Expression::Identifier("Math".into())),
                property: "max".into(),
            }),
            arguments: vec![],
        };
        assert_eq!(method_call.called_name(), None);
        assert_eq!(Expression::Identifier("x".into()).called_name(), None);
    }

    #[test]
    fn test_other_kind_passes_through() {
        let other = Expression::Other {
            kind: "binary_expression".into(),
        };
        assert_eq!(other.kind(), "binary_expression");
    }
}
