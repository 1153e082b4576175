//! End-to-end dump tests over hand-built node graphs.

use pretty_assertions::assert_eq;
use veld_ast::{AstArena, Node, Token, TokenCategory, Type, Value, standard_library};
use veld_dump::dump;

#[test]
fn single_declaration_program() {
    let mut arena = AstArena::new();
    let variable = arena.alloc(Node::variable("x", true));
    let decl = arena.alloc(Node::variable_declaration(
        Value::Type(Type::Int),
        Value::Node(variable),
        Value::Token(Token::new(TokenCategory::Number, "5")),
    ));
    let program = arena.alloc(Node::program(vec![Value::Node(decl)]));

    let expected = [
        "   1 | Program statements=[#2]",
        "   2 | VariableDeclaration type=int variable=#3 initializer=(number,\"5\")",
        "   3 | Variable name=\"x\" mutable=true",
    ]
    .join("\n");
    assert_eq!(dump(&arena, program), expected);
}

#[test]
fn dump_is_deterministic() {
    let mut arena = AstArena::new();
    let variable = arena.alloc(Node::variable("n", false));
    let assign = arena.alloc(Node::assignment(
        Value::Node(variable),
        Value::Token(Token::new(TokenCategory::Number, "1")),
    ));
    let program = arena.alloc(Node::program(vec![Value::Node(assign)]));

    assert_eq!(dump(&arena, program), dump(&arena, program));
}

#[test]
fn cycle_renders_back_reference_and_terminates() {
    let mut arena = AstArena::new();
    let a = arena.alloc(Node::break_statement());
    let b = arena.alloc(Node::return_statement(Value::Node(a)));
    arena.replace(a, Node::print_statement(Value::Node(b)));

    let expected = [
        "   1 | PrintStatement argument=#2",
        "   2 | ReturnStatement value=#1",
    ]
    .join("\n");
    assert_eq!(dump(&arena, a), expected);
}

#[test]
fn self_reference_renders_own_tag() {
    let mut arena = AstArena::new();
    let expr = arena.alloc(Node::break_statement());
    arena.replace(
        expr,
        Node::unary(
            Value::Token(Token::new(TokenCategory::Operator, "-")),
            Value::Node(expr),
        ),
    );

    assert_eq!(
        dump(&arena, expr),
        "   1 | UnaryExpression op=(operator,\"-\") operand=#1"
    );
}

#[test]
fn shared_node_is_rendered_once() {
    let mut arena = AstArena::new();
    let x = arena.alloc(Node::variable("x", true));
    let assign = arena.alloc(Node::assignment(Value::Node(x), Value::Node(x)));

    let out = dump(&arena, assign);
    let expected = [
        "   1 | Assignment target=#2 source=#2",
        "   2 | Variable name=\"x\" mutable=true",
    ]
    .join("\n");
    assert_eq!(out, expected);
    assert_eq!(out.matches("Variable").count(), 1);
}

#[test]
fn tags_follow_discovery_order() {
    let mut arena = AstArena::new();
    let symbol = arena.alloc(Node::function("square", 1, false));
    let param = arena.alloc(Node::func_param(
        Value::Type(Type::Int),
        Value::Token(Token::new(TokenCategory::Identifier, "x")),
    ));
    let ret = arena.alloc(Node::return_statement(Value::Token(Token::new(
        TokenCategory::Identifier,
        "x",
    ))));
    let mut id_token = Token::new(TokenCategory::Identifier, "square");
    id_token.resolve(Value::Node(symbol));
    let func = arena.alloc(Node::function_declaration(
        Value::Type(Type::function(vec![Type::Int], Type::Int)),
        Value::Token(id_token),
        vec![Value::Node(param)],
        vec![Value::Node(ret)],
    ));
    let program = arena.alloc(Node::program(vec![Value::Node(func)]));

    // The id token is transparent: its resolved symbol is discovered (tag 3)
    // before the params and block, but the token itself still renders as a
    // leaf.
    let expected = [
        "   1 | Program statements=[#2]",
        "   2 | FunctionDeclaration type=(int)->int id=(identifier,\"square\") params=[#4] block=[#5]",
        "   3 | Function name=\"square\" param_count=1 builtin=false",
        "   4 | FuncParam type=int id=(identifier,\"x\")",
        "   5 | ReturnStatement value=(identifier,\"x\")",
    ]
    .join("\n");
    assert_eq!(dump(&arena, program), expected);
}

#[test]
fn unresolved_token_is_never_tagged() {
    let mut arena = AstArena::new();
    let print = arena.alloc(Node::print_statement(Value::Token(Token::new(
        TokenCategory::StringLit,
        "hi",
    ))));

    assert_eq!(
        dump(&arena, print),
        "   1 | PrintStatement argument=(string,\"hi\")"
    );
}

#[test]
fn absent_optional_field_renders_null() {
    let mut arena = AstArena::new();
    let brk = arena.alloc(Node::break_statement());
    let iff = arena.alloc(Node::if_statement(
        Value::Token(Token::new(TokenCategory::Keyword, "true")),
        vec![Value::Node(brk)],
        vec![],
        None,
    ));

    let expected = [
        "   1 | If condition=(keyword,\"true\") block=[#2] elseifs=[] else_statement=null",
        "   2 | BreakStatement",
    ]
    .join("\n");
    assert_eq!(dump(&arena, iff), expected);
}

#[test]
fn else_clause_and_elseifs_are_walked_in_order() {
    let mut arena = AstArena::new();
    let brk = arena.alloc(Node::break_statement());
    let elseif = arena.alloc(Node::else_if(
        Value::Token(Token::new(TokenCategory::Keyword, "false")),
        vec![Value::Node(brk)],
    ));
    let els = arena.alloc(Node::else_clause(vec![Value::Node(brk)]));
    let iff = arena.alloc(Node::if_statement(
        Value::Token(Token::new(TokenCategory::Keyword, "true")),
        vec![Value::Node(brk)],
        vec![Value::Node(elseif)],
        Some(Value::Node(els)),
    ));

    let expected = [
        "   1 | If condition=(keyword,\"true\") block=[#2] elseifs=[#3] else_statement=#4",
        "   2 | BreakStatement",
        "   3 | ElseIf condition=(keyword,\"false\") block=[#2]",
        "   4 | Else block=[#2]",
    ]
    .join("\n");
    assert_eq!(dump(&arena, iff), expected);
}

#[test]
fn annotations_render_after_declared_fields() {
    let mut arena = AstArena::new();
    let lit = arena.alloc(Node::array_literal(vec![
        Value::Token(Token::new(TokenCategory::Number, "1")),
        Value::Token(Token::new(TokenCategory::Number, "2")),
    ]));
    arena.annotate(lit, "inferred_type", Value::Type(Type::array(Type::Int)));

    assert_eq!(
        dump(&arena, lit),
        "   1 | ArrayLiteral values=[(number,\"1\"),(number,\"2\")] inferred_type=[int]"
    );
}

#[test]
fn foreign_id_renders_marker_instead_of_failing() {
    let mut other = AstArena::new();
    for _ in 0..5 {
        other.alloc(Node::break_statement());
    }
    let foreign = other.alloc(Node::break_statement());

    let mut arena = AstArena::new();
    let print = arena.alloc(Node::print_statement(Value::Node(foreign)));

    assert_eq!(dump(&arena, print), "   1 | PrintStatement argument=<node 5>");
}

#[test]
fn expression_nodes_and_stdlib_symbol() {
    let mut arena = AstArena::new();
    let hypot = arena.alloc(standard_library()["hypot"].clone());
    let mut callee = Token::new(TokenCategory::Identifier, "hypot");
    callee.resolve(Value::Node(hypot));
    let call = arena.alloc(Node::call(
        Value::Token(callee),
        vec![
            Value::Token(Token::new(TokenCategory::Number, "3")),
            Value::Token(Token::new(TokenCategory::Number, "4")),
        ],
    ));
    let member = arena.alloc(Node::member(
        Value::Token(Token::new(TokenCategory::Identifier, "p")),
        Value::Token(Token::new(TokenCategory::Identifier, "x")),
    ));
    let sub = arena.alloc(Node::subscript(
        Value::Node(member),
        Value::Token(Token::new(TokenCategory::Number, "0")),
    ));
    let cond = arena.alloc(Node::conditional(
        Value::Token(Token::new(TokenCategory::Keyword, "true")),
        Value::Node(call),
        Value::Node(sub),
    ));

    let expected = [
        "   1 | Conditional test=(keyword,\"true\") consequent=#2 alternate=#4",
        "   2 | Call callee=(identifier,\"hypot\") args=[(number,\"3\"),(number,\"4\")]",
        "   3 | Function name=\"hypot\" param_count=2 builtin=true",
        "   4 | SubscriptExpression array=#5 index=(number,\"0\")",
        "   5 | MemberExpression object=(identifier,\"p\") field=(identifier,\"x\")",
    ]
    .join("\n");
    assert_eq!(dump(&arena, cond), expected);
}

#[test]
fn while_loop_with_shared_condition_symbol() {
    let mut arena = AstArena::new();
    let n = arena.alloc(Node::variable("n", true));
    let mut cond_token = Token::new(TokenCategory::Identifier, "n");
    cond_token.resolve(Value::Node(n));
    let test = arena.alloc(Node::binary(
        Value::Token(Token::new(TokenCategory::Operator, ">")),
        Value::Token(cond_token),
        Value::Token(Token::new(TokenCategory::Number, "0")),
    ));
    let body = arena.alloc(Node::assignment(
        Value::Node(n),
        Value::Token(Token::new(TokenCategory::Number, "0")),
    ));
    let while_stmt = arena.alloc(Node::while_statement(
        Value::Node(test),
        vec![Value::Node(body)],
    ));

    let expected = [
        "   1 | WhileStatement test=#2 body=[#4]",
        "   2 | BinaryExpression op=(operator,\">\") left=(identifier,\"n\") right=(number,\"0\")",
        "   3 | Variable name=\"n\" mutable=true",
        "   4 | Assignment target=#3 source=(number,\"0\")",
    ]
    .join("\n");
    assert_eq!(dump(&arena, while_stmt), expected);
}
