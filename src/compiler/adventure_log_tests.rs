use crate::compiler::adventure_log::AdventureLogHandler;
use crate::compiler::ValueProducer;
use crate::error::CompileError;
use crate::operation::Param;
use crate::special_ops::OP_FLAG_SET_ADVENTURE_LOG;
use test_log::test;

#[test]
fn collect_without_value_is_a_compile_error() {
    let handler = AdventureLogHandler::new();
    let err = handler.collect().unwrap_err();
    assert_eq!(err, CompileError::MissingValue("adventure_log".to_string()));
    assert_eq!(err.to_string(), "No value for adventure_log set.");
}

#[test]
fn collect_emits_single_flag_operation() {
    let mut handler = AdventureLogHandler::new();
    handler
        .add(ValueProducer::IntegerLike(Param::Int(12)))
        .unwrap();
    let op = handler.collect().unwrap();
    assert_eq!(op.op_code.name, OP_FLAG_SET_ADVENTURE_LOG);
    assert!(op.op_code.id < 0);
    assert_eq!(op.offset, -1);
    assert_eq!(op.params.values(), vec![Param::Int(12)]);
}

#[test]
fn engine_constants_count_as_integer_like() {
    let mut handler = AdventureLogHandler::new();
    handler
        .add(ValueProducer::IntegerLike(Param::Constant(
            "EVENT_CLEARED".to_string(),
        )))
        .unwrap();
    assert!(handler.collect().is_ok());
}

#[test]
fn text_values_are_rejected() {
    let mut handler = AdventureLogHandler::new();
    let err = handler
        .add(ValueProducer::Text("hello".to_string()))
        .unwrap_err();
    assert!(matches!(err, CompileError::UnsupportedValue(_)));
    // The handler still has no value afterwards.
    assert!(handler.collect().is_err());
}

#[test]
fn string_params_wrapped_as_integer_like_are_rejected() {
    let mut handler = AdventureLogHandler::new();
    let err = handler
        .add(ValueProducer::IntegerLike(Param::Str("12".to_string())))
        .unwrap_err();
    assert!(matches!(err, CompileError::UnsupportedValue(_)));
}
