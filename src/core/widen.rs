//! VM-003: Widening integer sequences and appending through a mutable borrow.

use crate::core::types::Value;
use tracing::debug;

/// The string appended by [`append_greeting`].
pub const GREETING: &str = "Hello world";

/// Convert each integer into [`Value::Number`], keeping order.
pub fn widen<I>(nums: I) -> Vec<Value>
where
    I: IntoIterator<Item = i64>,
{
    nums.into_iter().map(Value::from).collect()
}

/// Push [`GREETING`] onto the caller's storage. One element per call.
pub fn append_greeting(items: &mut Vec<Value>) {
    items.push(Value::from(GREETING));
    debug!(len = items.len(), "appended greeting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::SOURCE;

    #[test]
    fn test_vm003_widen_preserves_order() {
        assert_eq!(
            widen(SOURCE),
            vec![Value::Number(1), Value::Number(2), Value::Number(3)]
        );
    }

    #[test]
    fn test_vm003_append_once() {
        let mut items = widen(SOURCE);
        append_greeting(&mut items);
        assert_eq!(items.len(), 4);
        assert_eq!(items.last(), Some(&Value::Text(GREETING.to_string())));
        assert_eq!(&items[..3], widen(SOURCE).as_slice());
    }

    #[test]
    fn test_vm003_each_call_appends() {
        let mut items = widen(SOURCE);
        append_greeting(&mut items);
        append_greeting(&mut items);
        assert_eq!(items.len(), 5);
        assert_eq!(items[3], items[4]);
    }

    #[test]
    fn test_vm003_append_mutates_callers_storage() {
        let mut items = widen(SOURCE);
        items.reserve(1);
        let before = items.as_ptr();
        append_greeting(&mut items);
        assert_eq!(before, items.as_ptr());
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_vm003_append_to_empty() {
        let mut items = Vec::new();
        append_greeting(&mut items);
        assert_eq!(items, vec![Value::from(GREETING)]);
    }
}
