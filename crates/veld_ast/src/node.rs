//! Composite node and symbol record definitions.
//!
//! Every variant declares its fields in a fixed order. [`Node::fields`] is
//! the single source of truth for that order: traversal and rendering walk
//! the list it returns instead of reflecting over storage, so output is
//! deterministic by construction.

use serde::Serialize;

use crate::Value;

/// Borrowed view of one declared field.
#[derive(Debug, Clone)]
pub enum FieldRef<'a> {
    /// Single field value.
    One(&'a Value),
    /// Optional field; `None` when absent.
    Opt(Option<&'a Value>),
    /// Sequence field.
    Many(&'a [Value]),
    /// Primitive field materialized from typed storage.
    Owned(Value),
}

/// A composite node or symbol record in the Veld AST.
///
/// Composite nodes carry the program structure; the `Variable` and
/// `Function` variants are the symbol records the analyzer links identifier
/// tokens to. All of them live in an [`AstArena`](crate::AstArena) and are
/// referred to by [`NodeId`](crate::NodeId).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// Root of a program.
    Program { statements: Vec<Value> },
    /// `let`/`var`-style declaration.
    VariableDeclaration {
        ty: Value,
        variable: Value,
        initializer: Value,
    },
    /// Ternary conditional expression.
    Conditional {
        test: Value,
        consequent: Value,
        alternate: Value,
    },
    /// If statement with optional else-if and else clauses.
    If {
        condition: Value,
        block: Vec<Value>,
        elseifs: Vec<Value>,
        else_statement: Option<Value>,
    },
    /// One else-if clause of an if statement.
    ElseIf { condition: Value, block: Vec<Value> },
    /// Final else clause of an if statement.
    Else { block: Vec<Value> },
    /// Function declaration.
    FunctionDeclaration {
        ty: Value,
        id: Value,
        params: Vec<Value>,
        block: Vec<Value>,
    },
    /// One declared function parameter.
    FuncParam { ty: Value, id: Value },
    /// Assignment statement.
    Assignment { target: Value, source: Value },
    /// While loop.
    WhileStatement { test: Value, body: Vec<Value> },
    /// Return statement.
    ReturnStatement { value: Value },
    /// Print statement.
    PrintStatement { argument: Value },
    /// Break statement.
    BreakStatement,
    /// Function call.
    Call { callee: Value, args: Vec<Value> },
    /// Binary operator application.
    BinaryExpression {
        op: Value,
        left: Value,
        right: Value,
    },
    /// Unary operator application.
    UnaryExpression { op: Value, operand: Value },
    /// Array subscript.
    SubscriptExpression { array: Value, index: Value },
    /// Member access.
    MemberExpression { object: Value, field: Value },
    /// Array literal.
    ArrayLiteral { values: Vec<Value> },
    /// Symbol record for a declared variable.
    Variable { name: String, mutable: bool },
    /// Symbol record for a declared or builtin function.
    Function {
        name: String,
        param_count: usize,
        builtin: bool,
    },
}

impl Node {
    /// Creates a program node.
    pub fn program(statements: Vec<Value>) -> Self {
        Node::Program { statements }
    }

    /// Creates a variable declaration.
    pub fn variable_declaration(ty: Value, variable: Value, initializer: Value) -> Self {
        Node::VariableDeclaration {
            ty,
            variable,
            initializer,
        }
    }

    /// Creates a ternary conditional expression.
    pub fn conditional(test: Value, consequent: Value, alternate: Value) -> Self {
        Node::Conditional {
            test,
            consequent,
            alternate,
        }
    }

    /// Creates an if statement.
    pub fn if_statement(
        condition: Value,
        block: Vec<Value>,
        elseifs: Vec<Value>,
        else_statement: Option<Value>,
    ) -> Self {
        Node::If {
            condition,
            block,
            elseifs,
            else_statement,
        }
    }

    /// Creates an else-if clause.
    pub fn else_if(condition: Value, block: Vec<Value>) -> Self {
        Node::ElseIf { condition, block }
    }

    /// Creates an else clause.
    pub fn else_clause(block: Vec<Value>) -> Self {
        Node::Else { block }
    }

    /// Creates a function declaration.
    pub fn function_declaration(ty: Value, id: Value, params: Vec<Value>, block: Vec<Value>) -> Self {
        Node::FunctionDeclaration {
            ty,
            id,
            params,
            block,
        }
    }

    /// Creates a function parameter.
    pub fn func_param(ty: Value, id: Value) -> Self {
        Node::FuncParam { ty, id }
    }

    /// Creates an assignment statement.
    pub fn assignment(target: Value, source: Value) -> Self {
        Node::Assignment { target, source }
    }

    /// Creates a while loop.
    pub fn while_statement(test: Value, body: Vec<Value>) -> Self {
        Node::WhileStatement { test, body }
    }

    /// Creates a return statement.
    pub fn return_statement(value: Value) -> Self {
        Node::ReturnStatement { value }
    }

    /// Creates a print statement.
    pub fn print_statement(argument: Value) -> Self {
        Node::PrintStatement { argument }
    }

    /// Creates a break statement.
    pub fn break_statement() -> Self {
        Node::BreakStatement
    }

    /// Creates a function call.
    pub fn call(callee: Value, args: Vec<Value>) -> Self {
        Node::Call { callee, args }
    }

    /// Creates a binary operator application.
    pub fn binary(op: Value, left: Value, right: Value) -> Self {
        Node::BinaryExpression { op, left, right }
    }

    /// Creates a unary operator application.
    pub fn unary(op: Value, operand: Value) -> Self {
        Node::UnaryExpression { op, operand }
    }

    /// Creates an array subscript expression.
    pub fn subscript(array: Value, index: Value) -> Self {
        Node::SubscriptExpression { array, index }
    }

    /// Creates a member access expression.
    pub fn member(object: Value, field: Value) -> Self {
        Node::MemberExpression { object, field }
    }

    /// Creates an array literal.
    pub fn array_literal(values: Vec<Value>) -> Self {
        Node::ArrayLiteral { values }
    }

    /// Creates a variable symbol record.
    pub fn variable(name: impl Into<String>, mutable: bool) -> Self {
        Node::Variable {
            name: name.into(),
            mutable,
        }
    }

    /// Creates a function symbol record.
    pub fn function(name: impl Into<String>, param_count: usize, builtin: bool) -> Self {
        Node::Function {
            name: name.into(),
            param_count,
            builtin,
        }
    }

    /// Name of this variant as printed by diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::Conditional { .. } => "Conditional",
            Node::If { .. } => "If",
            Node::ElseIf { .. } => "ElseIf",
            Node::Else { .. } => "Else",
            Node::FunctionDeclaration { .. } => "FunctionDeclaration",
            Node::FuncParam { .. } => "FuncParam",
            Node::Assignment { .. } => "Assignment",
            Node::WhileStatement { .. } => "WhileStatement",
            Node::ReturnStatement { .. } => "ReturnStatement",
            Node::PrintStatement { .. } => "PrintStatement",
            Node::BreakStatement => "BreakStatement",
            Node::Call { .. } => "Call",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::UnaryExpression { .. } => "UnaryExpression",
            Node::SubscriptExpression { .. } => "SubscriptExpression",
            Node::MemberExpression { .. } => "MemberExpression",
            Node::ArrayLiteral { .. } => "ArrayLiteral",
            Node::Variable { .. } => "Variable",
            Node::Function { .. } => "Function",
        }
    }

    /// Declared fields of this node, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, FieldRef<'_>)> {
        match self {
            Node::Program { statements } => {
                vec![("statements", FieldRef::Many(statements))]
            }
            Node::VariableDeclaration {
                ty,
                variable,
                initializer,
            } => vec![
                ("type", FieldRef::One(ty)),
                ("variable", FieldRef::One(variable)),
                ("initializer", FieldRef::One(initializer)),
            ],
            Node::Conditional {
                test,
                consequent,
                alternate,
            } => vec![
                ("test", FieldRef::One(test)),
                ("consequent", FieldRef::One(consequent)),
                ("alternate", FieldRef::One(alternate)),
            ],
            Node::If {
                condition,
                block,
                elseifs,
                else_statement,
            } => vec![
                ("condition", FieldRef::One(condition)),
                ("block", FieldRef::Many(block)),
                ("elseifs", FieldRef::Many(elseifs)),
                ("else_statement", FieldRef::Opt(else_statement.as_ref())),
            ],
            Node::ElseIf { condition, block } => vec![
                ("condition", FieldRef::One(condition)),
                ("block", FieldRef::Many(block)),
            ],
            Node::Else { block } => vec![("block", FieldRef::Many(block))],
            Node::FunctionDeclaration {
                ty,
                id,
                params,
                block,
            } => vec![
                ("type", FieldRef::One(ty)),
                ("id", FieldRef::One(id)),
                ("params", FieldRef::Many(params)),
                ("block", FieldRef::Many(block)),
            ],
            Node::FuncParam { ty, id } => vec![
                ("type", FieldRef::One(ty)),
                ("id", FieldRef::One(id)),
            ],
            Node::Assignment { target, source } => vec![
                ("target", FieldRef::One(target)),
                ("source", FieldRef::One(source)),
            ],
            Node::WhileStatement { test, body } => vec![
                ("test", FieldRef::One(test)),
                ("body", FieldRef::Many(body)),
            ],
            Node::ReturnStatement { value } => vec![("value", FieldRef::One(value))],
            Node::PrintStatement { argument } => vec![("argument", FieldRef::One(argument))],
            Node::BreakStatement => vec![],
            Node::Call { callee, args } => vec![
                ("callee", FieldRef::One(callee)),
                ("args", FieldRef::Many(args)),
            ],
            Node::BinaryExpression { op, left, right } => vec![
                ("op", FieldRef::One(op)),
                ("left", FieldRef::One(left)),
                ("right", FieldRef::One(right)),
            ],
            Node::UnaryExpression { op, operand } => vec![
                ("op", FieldRef::One(op)),
                ("operand", FieldRef::One(operand)),
            ],
            Node::SubscriptExpression { array, index } => vec![
                ("array", FieldRef::One(array)),
                ("index", FieldRef::One(index)),
            ],
            Node::MemberExpression { object, field } => vec![
                ("object", FieldRef::One(object)),
                ("field", FieldRef::One(field)),
            ],
            Node::ArrayLiteral { values } => vec![("values", FieldRef::Many(values))],
            Node::Variable { name, mutable } => vec![
                ("name", FieldRef::Owned(Value::Str(name.clone()))),
                ("mutable", FieldRef::Owned(Value::Bool(*mutable))),
            ],
            Node::Function {
                name,
                param_count,
                builtin,
            } => vec![
                ("name", FieldRef::Owned(Value::Str(name.clone()))),
                ("param_count", FieldRef::Owned(Value::Int(*param_count as i64))),
                ("builtin", FieldRef::Owned(Value::Bool(*builtin))),
            ],
        }
    }
}
