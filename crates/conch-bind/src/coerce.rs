//! Type coercion and array-tail aggregation.
//!
//! Walks a canonical bucket's raw values against its parameter's declared
//! type list. Positions inside the non-array prefix convert one token to
//! one scalar; once the array tail is reached, every remaining token
//! converts to the tail's element type and accumulates in an ephemeral
//! [`ArrayBuffer`] that becomes the bucket's single trailing array value.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use conch_schema::{ParamSpec, Scalar};

use crate::error::BindError;
use crate::value::{coerce_token, Value};

static NEXT_BUFFER_KEY: AtomicU64 = AtomicU64::new(1);
static LIVE_BUFFERS: AtomicUsize = AtomicUsize::new(0);

/// Ephemeral accumulator for one array-tail binding attempt.
///
/// Each buffer gets a unique key from a process-wide monotonic counter, so
/// successive or interleaved binding attempts can never collide, and it is
/// destroyed when it goes out of scope — on the success path via
/// [`into_value`](Self::into_value), on every failure path via `Drop`. The
/// [`live`](Self::live) gauge exists so tests can assert that no buffer
/// outlives the invocation that created it.
#[derive(Debug)]
pub struct ArrayBuffer {
    key: u64,
    element: Scalar,
    items: Vec<Value>,
}

impl ArrayBuffer {
    /// Creates an empty buffer for the given element kind.
    pub fn new(element: Scalar) -> Self {
        LIVE_BUFFERS.fetch_add(1, Ordering::Relaxed);
        Self {
            key: NEXT_BUFFER_KEY.fetch_add(1, Ordering::Relaxed),
            element,
            items: Vec::new(),
        }
    }

    /// The buffer's unique key.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// The element kind every item is converted to.
    pub fn element(&self) -> Scalar {
        self.element
    }

    /// Appends one already-coerced element.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Number of accumulated elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the buffer into a single array value, destroying it.
    pub fn into_value(mut self) -> Value {
        Value::Array(self.element, std::mem::take(&mut self.items))
    }

    /// Number of buffers currently alive anywhere in the process.
    pub fn live() -> usize {
        LIVE_BUFFERS.load(Ordering::Relaxed)
    }
}

impl Drop for ArrayBuffer {
    fn drop(&mut self) {
        LIVE_BUFFERS.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Coerces a canonical bucket's raw values into typed values.
///
/// The validator has already guaranteed `raw.len() >= param.kinds().len()`.
/// When the parameter declares no array tail, surplus values past the
/// declared list are rejected — only a declared array tail accepts a
/// variable number of values.
///
/// # Errors
///
/// [`BindError::TypeMismatch`] naming the offending token and expected
/// type, or [`BindError::ValueCountMismatch`] for surplus values without
/// an array tail.
pub fn coerce_bucket(param: &ParamSpec, raw: &[String]) -> Result<Vec<Value>, BindError> {
    let kinds = param.kinds();
    let tail = param.array_tail();
    let prefix_len = kinds.len() - usize::from(tail.is_some());

    if tail.is_none() && raw.len() > kinds.len() {
        return Err(BindError::ValueCountMismatch {
            param: param.name().to_string(),
        });
    }

    let mut values = Vec::with_capacity(kinds.len());

    for (token, kind) in raw.iter().zip(&kinds[..prefix_len]) {
        let scalar = kind.element();
        let value = coerce_token(token, scalar).ok_or_else(|| BindError::TypeMismatch {
            token: token.clone(),
            expected: scalar.to_string(),
        })?;
        values.push(value);
    }

    if let Some(tail) = tail {
        let element = tail.element();
        let mut buffer = ArrayBuffer::new(element);
        for token in &raw[prefix_len..] {
            // An early return drops the buffer; it never outlives the
            // binding attempt.
            let value = coerce_token(token, element).ok_or_else(|| BindError::TypeMismatch {
                token: token.clone(),
                expected: element.to_string(),
            })?;
            buffer.push(value);
        }
        values.push(buffer.into_value());
    }

    Ok(values)
}
