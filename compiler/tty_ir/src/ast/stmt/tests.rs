use super::*;

fn path(name: &str, span: Span) -> PathExpression {
    PathExpression {
        head: crate::ast::PathHead::Bare(name.to_string()),
        tail: Vec::new(),
        head_span: span,
        span,
    }
}

#[test]
fn statement_span_delegates_to_variant() {
    let text = Statement::Text(TextNode {
        chars: "hi".into(),
        span: Span::new(0, 2),
    });
    assert_eq!(text.span(), Span::new(0, 2));

    let mustache = Statement::Mustache(MustacheStatement {
        path: path("foo", Span::new(2, 5)),
        params: Vec::new(),
        hash: Vec::new(),
        span: Span::new(0, 7),
    });
    assert_eq!(mustache.span(), Span::new(0, 7));
}

#[test]
fn element_node_carries_children_in_order() {
    let element = ElementNode {
        tag: "div".into(),
        tag_span: Span::new(0, 3),
        attributes: Vec::new(),
        modifiers: Vec::new(),
        block_params: Vec::new(),
        children: vec![Statement::Text(TextNode {
            chars: "hi".into(),
            span: Span::new(4, 6),
        })],
        span: Span::new(0, 10),
    };
    assert_eq!(element.children.len(), 1);
}
