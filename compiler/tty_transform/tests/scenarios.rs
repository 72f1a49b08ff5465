//! Literal scenario tests: each checks the body text a minimal template
//! produces, after stripping the fixed framer boilerplate (or, for the
//! empty-template case, checking the boilerplate itself).

use pretty_assertions::assert_eq;
use tty_ir::ast::{
    Expression, HashPair, Literal, MustacheStatement, PathExpression, PathHead, PathSegment,
    Statement, SubExpression, Template,
};
use tty_ir::Span;
use tty_transform::{template_to_typescript, TransformOptions};

fn span(n: u32) -> Span {
    Span::new(n, n + 1)
}

fn bare_path(name: &str) -> PathExpression {
    PathExpression {
        head: PathHead::Bare(name.to_string()),
        tail: Vec::new(),
        head_span: span(0),
        span: span(0),
    }
}

fn at_expr(name: &str) -> Expression {
    Expression::Path(PathExpression {
        head: PathHead::AtName(name.to_string()),
        tail: Vec::new(),
        head_span: span(0),
        span: span(0),
    })
}

fn string(value: &str) -> Expression {
    Expression::String(Literal {
        value: value.to_string(),
        span: span(0),
    })
}

fn number(value: f64) -> Expression {
    Expression::Number(Literal { value, span: span(0) })
}

/// Extract the single indented body line(s) out of the framer's fixed
/// wrapper, trimming the `Γ;` prologue line the framer always emits first.
fn body_only(code: &str) -> String {
    let start = code.find("Γ;\n").expect("framer prologue") + "Γ;\n".len();
    let end = code.rfind("  });\n").expect("framer epilogue");
    code[start..end]
        .lines()
        .map(|line| line.strip_prefix("    ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

fn template(body: Vec<Statement>) -> Template {
    Template { body, span: span(0) }
}

#[test]
fn scenario_1_inline_if_two_params() {
    let stmt = Statement::Mustache(MustacheStatement {
        path: bare_path("if"),
        params: vec![at_expr("foo"), string("ok")],
        hash: Vec::new(),
        span: span(0),
    });
    let result = template_to_typescript("", &template(vec![stmt]), &TransformOptions::default());
    let code = result.result.expect("code present").code;
    assert_eq!(body_only(&code), "(Γ.args.foo) ? (\"ok\") : (undefined);\n");
    assert!(result.errors.is_empty());
}

#[test]
fn scenario_2_inline_if_three_params() {
    let stmt = Statement::Mustache(MustacheStatement {
        path: bare_path("if"),
        params: vec![at_expr("foo"), string("ok"), string("nope")],
        hash: Vec::new(),
        span: span(0),
    });
    let result = template_to_typescript("", &template(vec![stmt]), &TransformOptions::default());
    let code = result.result.expect("code present").code;
    assert_eq!(body_only(&code), "(Γ.args.foo) ? (\"ok\") : (\"nope\");\n");
    assert!(result.errors.is_empty());
}

#[test]
fn scenario_3_yield_with_to() {
    let stmt = Statement::Mustache(MustacheStatement {
        path: bare_path("yield"),
        params: vec![number(123.0)],
        hash: vec![HashPair {
            key: "to".to_string(),
            value: string("body"),
            span: span(0),
        }],
        span: span(0),
    });
    let result = template_to_typescript("", &template(vec![stmt]), &TransformOptions::default());
    let code = result.result.expect("code present").code;
    assert_eq!(body_only(&code), "yield toBlock(\"body\", 123);\n");
    assert!(result.errors.is_empty());
}

#[test]
fn scenario_4_hash_named_args() {
    let stmt = Statement::Mustache(MustacheStatement {
        path: bare_path("hash"),
        params: Vec::new(),
        hash: vec![
            HashPair {
                key: "a".to_string(),
                value: number(1.0),
                span: span(0),
            },
            HashPair {
                key: "b".to_string(),
                value: string("ok"),
                span: span(0),
            },
        ],
        span: span(0),
    });
    let result = template_to_typescript("", &template(vec![stmt]), &TransformOptions::default());
    let code = result.result.expect("code present").code;
    assert_eq!(body_only(&code), "({ a: 1, b: \"ok\", });\n");
    assert!(result.errors.is_empty());
}

#[test]
fn scenario_5_in_scope_dotted_path() {
    let path = PathExpression {
        head: PathHead::Bare("obj".to_string()),
        tail: vec![
            PathSegment {
                name: "foo-bar".to_string(),
                span: span(0),
            },
            PathSegment {
                name: "baz".to_string(),
                span: span(0),
            },
        ],
        head_span: span(0),
        span: span(0),
    };
    let stmt = Statement::Mustache(MustacheStatement {
        path,
        params: Vec::new(),
        hash: Vec::new(),
        span: span(0),
    });
    let mut options = TransformOptions::default();
    options.identifiers_in_scope.insert("obj".to_string());
    let result = template_to_typescript("", &template(vec![stmt]), &options);
    let code = result.result.expect("code present").code;
    assert_eq!(
        body_only(&code),
        "invokeInline(resolveOrReturn(obj?.[\"foo-bar\"]?.baz)({}));\n"
    );
    assert!(result.errors.is_empty());
}

#[test]
fn scenario_6_empty_template_boilerplate() {
    let mut options = TransformOptions::default();
    options.type_params = Some("<T extends string>".to_string());
    options.context_type = Some("MyComponent<T>".to_string());
    let result = template_to_typescript("", &template(Vec::new()), &options);
    let code = result.result.expect("code present").code;
    assert_eq!(
        code,
        "(() => {\n  let χ!: typeof import(\"@typed-templates/runtime/-private/dsl\");\n  return χ.template(function*<T extends string>(Γ: import(\"@typed-templates/runtime/-private/dsl\").ResolveContext<MyComponent<T>>) {\n    Γ;\n  });\n})()"
    );
    assert!(result.errors.is_empty());
}

#[test]
fn subexpression_form_of_hash_matches_inline_mustache_form() {
    let sub = Expression::SubExpression(SubExpression {
        callee: bare_path("hash"),
        params: Vec::new(),
        hash: vec![HashPair {
            key: "a".to_string(),
            value: number(1.0),
            span: span(0),
        }],
        span: span(0),
    });
    let stmt = Statement::Mustache(MustacheStatement {
        path: bare_path("array"),
        params: vec![sub],
        hash: Vec::new(),
        span: span(0),
    });
    let result = template_to_typescript("", &template(vec![stmt]), &TransformOptions::default());
    let code = result.result.expect("code present").code;
    assert_eq!(body_only(&code), "[({ a: 1, })];\n");
    assert!(result.errors.is_empty());
}
