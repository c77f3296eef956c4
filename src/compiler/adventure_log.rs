// Assignment handler for the adventure log flag.

use crate::compiler::ValueProducer;
use crate::error::CompileError;
use crate::operation::{OpCode, Operation, Param};
use crate::special_ops::OP_FLAG_SET_ADVENTURE_LOG;

/// Collects the single integer-like value of an `adventure_log = …`
/// assignment and emits the one flag operation for it.
#[derive(Debug, Default)]
pub struct AdventureLogHandler {
    value: Option<Param>,
}

impl AdventureLogHandler {
    pub fn new() -> Self {
        AdventureLogHandler::default()
    }

    /// Accept a collected value. Only integer-like producers are valid.
    pub fn add(&mut self, producer: ValueProducer) -> Result<(), CompileError> {
        match producer {
            ValueProducer::IntegerLike(p) if p.is_integer_like() => {
                self.value = Some(p);
                Ok(())
            }
            ValueProducer::IntegerLike(p) => {
                Err(CompileError::UnsupportedValue(p.to_string()))
            }
            ValueProducer::Text(s) => Err(CompileError::UnsupportedValue(format!("'{}'", s))),
        }
    }

    /// Emit the flag operation. Fails if no value was supplied.
    pub fn collect(&self) -> Result<Operation, CompileError> {
        let value = self
            .value
            .as_ref()
            .ok_or_else(|| CompileError::MissingValue("adventure_log".to_string()))?;
        Ok(Operation::new(
            -1,
            OpCode::synthesized(OP_FLAG_SET_ADVENTURE_LOG.to_string()),
            vec![value.clone()],
        ))
    }
}
