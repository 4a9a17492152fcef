//! 树工厂单元测试
//! 覆盖分发、属性拷贝、子节点顺序、错误传播等规约

use crate::dom::{Node, PropertyBag, Value};
use crate::error::RenderError;
use crate::event::Event;
use crate::factory::{Child, ComponentProps, ElementDescriptor, TreeFactory, UnknownTagPolicy};
use std::cell::Cell;
use std::rc::Rc;

/// 已知标签构建出的节点类型与标签一致
#[test]
fn test_tag_kind_matches() {
    let factory = TreeFactory::new();
    let node = factory
        .create_element(&ElementDescriptor::tag("button"), None, vec![])
        .unwrap();

    assert!(!node.is_text());
    assert_eq!(node.tag(), "button");
    assert!(node.children().is_empty());
}

/// 属性包逐键原样出现在节点上
#[test]
fn test_properties_copied_verbatim() {
    let factory = TreeFactory::new();
    let bag = PropertyBag::new()
        .with("className", "what")
        .with("tabindex", 3)
        .with("disabled", true);

    let node = factory
        .create_element(&ElementDescriptor::tag("div"), Some(bag.clone()), vec![])
        .unwrap();

    for (key, value) in bag.iter() {
        assert_eq!(node.get_prop(key), Some(value));
    }
    assert_eq!(node.properties().len(), 3);
}

/// 子节点列表长度与顺序保持，文本 1:1 换成文本节点
#[test]
fn test_children_order_preserved() {
    let factory = TreeFactory::new();
    let inner = factory
        .create_element(&ElementDescriptor::tag("span"), None, vec![])
        .unwrap();

    let node = factory
        .create_element(
            &ElementDescriptor::tag("p"),
            None,
            vec![
                Child::Text("before".to_string()),
                Child::Node(inner.clone()),
                Child::Text("after".to_string()),
            ],
        )
        .unwrap();

    assert_eq!(node.children().len(), 3);
    assert!(node.children()[0].is_text());
    assert_eq!(node.children()[0].text(), "before");
    assert_eq!(node.children()[1], inner);
    assert_eq!(node.children()[2].text(), "after");
}

/// 规约例：div + className + 文本子节点
#[test]
fn test_div_hello_example() {
    let factory = TreeFactory::new();
    let node = factory
        .create_element(
            &ElementDescriptor::tag("div"),
            Some(PropertyBag::new().with("className", "what")),
            vec![Child::from("Hello")],
        )
        .unwrap();

    assert_eq!(node.tag(), "div");
    assert_eq!(node.get_prop("className"), Some(&Value::Str("what".to_string())));
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].text(), "Hello");
}

/// 组件返回的节点就是结果，外层不再包节点
#[test]
fn test_component_not_wrapped() {
    let factory = TreeFactory::new();
    let button = ElementDescriptor::component(|props: ComponentProps| {
        let msg = props
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let node = TreeFactory::new().create_element(
            &ElementDescriptor::tag("button"),
            Some(
                PropertyBag::new()
                    .with("label", msg)
                    .with("onclick", Value::handler(|_| {})),
            ),
            vec![],
        )?;
        Ok(Value::from(node))
    });

    let node = factory
        .create_element(
            &button,
            Some(PropertyBag::new().with("msg", "Yay")),
            vec![],
        )
        .unwrap();

    // 结果直接是 button 节点
    assert_eq!(node.tag(), "button");
    assert_eq!(node.get_prop("label"), Some(&Value::Str("Yay".to_string())));
    assert!(matches!(node.get_prop("onclick"), Some(Value::Handler(_))));
}

/// 组件收到的 children 是归一化后的节点列表
#[test]
fn test_component_receives_normalized_children() {
    let factory = TreeFactory::new();
    let descriptor = ElementDescriptor::component(|props: ComponentProps| {
        assert_eq!(props.children.len(), 2);
        assert!(props.children[0].is_text());
        assert_eq!(props.children[0].text(), "hi");
        assert_eq!(props.children[1].tag(), "span");

        let mut node = Node::new_element("div");
        for child in props.children {
            node.append_child(child);
        }
        Ok(Value::from(node))
    });

    let span = Node::new_element("span");
    let node = factory
        .create_element(
            &descriptor,
            None,
            vec![Child::from("hi"), Child::from(span)],
        )
        .unwrap();
    assert_eq!(node.children().len(), 2);
}

/// 未知标签默认整树失败
#[test]
fn test_unknown_tag_rejected() {
    let factory = TreeFactory::new();
    let result = factory.create_element(&ElementDescriptor::tag("frobnicator"), None, vec![]);

    match result {
        Err(RenderError::UnknownElementKind { tag }) => assert_eq!(tag, "frobnicator"),
        other => panic!("expected UnknownElementKind, got {:?}", other),
    }
}

/// Fallback 策略下未知标签替换为通用容器
#[test]
fn test_unknown_tag_fallback() {
    let factory = TreeFactory::with_policy(UnknownTagPolicy::Fallback);
    let node = factory
        .create_element(
            &ElementDescriptor::tag("frobnicator"),
            Some(PropertyBag::new().with("id", "x")),
            vec![],
        )
        .unwrap();

    assert_eq!(node.tag(), "div");
    assert_eq!(node.get_prop("id"), Some(&Value::Str("x".to_string())));
}

/// 注册自定义元素类型后不再失败
#[test]
fn test_custom_tag_registered() {
    let mut factory = TreeFactory::new();
    factory.registry_mut().register("frobnicator");

    let node = factory
        .create_element(&ElementDescriptor::tag("frobnicator"), None, vec![])
        .unwrap();
    assert_eq!(node.tag(), "frobnicator");
}

/// 组件返回非节点值是契约违反
#[test]
fn test_contract_violation() {
    let factory = TreeFactory::new();
    let descriptor = ElementDescriptor::component(|_| Ok(Value::Str("oops".to_string())));

    let result = factory.create_element(&descriptor, None, vec![]);
    match result {
        Err(RenderError::ContractViolation { returned }) => assert_eq!(returned, "string"),
        other => panic!("expected ContractViolation, got {:?}", other),
    }
}

/// 组件抛出的错误原样传到调用者，source 可取回内部错误
#[test]
fn test_component_error_propagates() {
    use std::error::Error;

    let factory = TreeFactory::new();
    let failing = ElementDescriptor::component(|_| Err(RenderError::component("boom")));

    let result = factory.create_element(&failing, None, vec![]);
    match result {
        Err(err @ RenderError::Component(_)) => {
            assert_eq!(err.to_string(), "component failed: boom");
            assert_eq!(err.source().unwrap().to_string(), "boom");
        }
        other => panic!("expected Component error, got {:?}", other),
    }
}

/// 相同输入两次构建结构相同但身份不同
#[test]
fn test_idempotent_distinct_identity() {
    let factory = TreeFactory::new();
    let build = || {
        factory
            .create_element(
                &ElementDescriptor::tag("ul"),
                Some(PropertyBag::new().with("id", "list")),
                vec![Child::from("a"), Child::from("b")],
            )
            .unwrap()
    };

    let mut first = build();
    let second = build();
    assert_eq!(first, second);

    // 修改一棵不影响另一棵
    first.set_prop("id", "changed");
    assert_ne!(first, second);
    assert_eq!(second.get_prop("id"), Some(&Value::Str("list".to_string())));
}

/// 事件分发：处理函数属性被调用，其余属性忽略
#[test]
fn test_event_dispatch() {
    let factory = TreeFactory::new();
    let fired = Rc::new(Cell::new(0));
    let fired_in_handler = fired.clone();

    let node = factory
        .create_element(
            &ElementDescriptor::tag("button"),
            Some(
                PropertyBag::new()
                    .with("onclick", Value::handler(move |event: &Event| {
                        assert_eq!(event.event_type, "click");
                        fired_in_handler.set(fired_in_handler.get() + 1);
                    }))
                    .with("onhover", "not-a-handler"),
            ),
            vec![],
        )
        .unwrap();

    assert!(node.dispatch_event(&Event::new("click")));
    assert_eq!(fired.get(), 1);
    // 属性存在但不是处理函数
    assert!(!node.dispatch_event(&Event::new("hover")));
    // 属性不存在
    assert!(!node.dispatch_event(&Event::new("keydown")));
}
