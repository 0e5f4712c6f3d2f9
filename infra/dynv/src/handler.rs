use crate::value::{Value, ValueKind};
use std::fmt::Debug;
use tinct_domain::Color;
use tinct_domain::constants::{TAG_COLOR, TAG_FLOAT, TAG_INT32, TAG_PTR, TAG_STRING};

/// Behavior for one kind of value, registered under a unique type tag.
///
/// The store never inspects values itself: it asks the handler registered for a tag
/// whether a value is acceptable, how to copy it out, how to destroy it and how to
/// move it to and from text.
pub trait ValueHandler: Debug + Send + Sync {
    /// The type tag this handler is registered under.
    fn tag(&self) -> &str;

    /// The value kind this handler manages.
    fn kind(&self) -> ValueKind;

    /// Constructs the default value of this kind.
    fn create(&self) -> Value;

    fn accepts(&self, value: &Value) -> bool {
        value.kind() == self.kind()
    }

    fn copy(&self, value: &Value) -> Value {
        value.clone()
    }

    fn destroy(&self, value: Value) {
        drop(value);
    }

    /// Textual form of `value`, or `None` if this kind is not serializable.
    fn serialize(&self, _value: &Value) -> Option<String> {
        None
    }

    fn deserialize(&self, _text: &str) -> Option<Value> {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StringHandler;

impl ValueHandler for StringHandler {
    fn tag(&self) -> &str {
        TAG_STRING
    }

    fn kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn create(&self) -> Value {
        Value::String(String::new())
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn deserialize(&self, text: &str) -> Option<Value> {
        Some(Value::String(text.to_owned()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Int32Handler;

impl ValueHandler for Int32Handler {
    fn tag(&self) -> &str {
        TAG_INT32
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Int32
    }

    fn create(&self) -> Value {
        Value::Int32(0)
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        match value {
            Value::Int32(v) => Some(v.to_string()),
            _ => None,
        }
    }

    fn deserialize(&self, text: &str) -> Option<Value> {
        text.trim().parse().ok().map(Value::Int32)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FloatHandler;

impl ValueHandler for FloatHandler {
    fn tag(&self) -> &str {
        TAG_FLOAT
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn create(&self) -> Value {
        Value::Float(0.0)
    }

    // `Display` for f32 prints the shortest text that parses back to the same bits.
    fn serialize(&self, value: &Value) -> Option<String> {
        match value {
            Value::Float(v) => Some(v.to_string()),
            _ => None,
        }
    }

    fn deserialize(&self, text: &str) -> Option<Value> {
        text.trim().parse().ok().map(Value::Float)
    }
}

/// Colors serialize as three space separated channel floats.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorHandler;

impl ValueHandler for ColorHandler {
    fn tag(&self) -> &str {
        TAG_COLOR
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Color
    }

    fn create(&self) -> Value {
        Value::Color(Color::BLACK)
    }

    fn serialize(&self, value: &Value) -> Option<String> {
        match value {
            Value::Color(c) => Some(format!("{} {} {}", c.red, c.green, c.blue)),
            _ => None,
        }
    }

    fn deserialize(&self, text: &str) -> Option<Value> {
        let mut channels = text.split_whitespace().map(str::parse::<f32>);
        let red = channels.next()?.ok()?;
        let green = channels.next()?.ok()?;
        let blue = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        Some(Value::Color(Color { red, green, blue }))
    }
}

/// Non-owning references to subsystems. Never serialized.
#[derive(Debug, Default, Clone, Copy)]
pub struct PtrHandler;

impl ValueHandler for PtrHandler {
    fn tag(&self) -> &str {
        TAG_PTR
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Ptr
    }

    fn create(&self) -> Value {
        Value::Ptr(crate::value::Pointer::dangling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_text_form_roundtrips() {
        let color = Value::Color(Color { red: 0.1, green: 0.333_333_34, blue: 1.0 });
        let text = ColorHandler.serialize(&color).unwrap();
        assert_eq!(ColorHandler.deserialize(&text), Some(color));
    }

    #[test]
    fn color_rejects_malformed_text() {
        assert_eq!(ColorHandler.deserialize("0.1 0.2"), None);
        assert_eq!(ColorHandler.deserialize("0.1 0.2 0.3 0.4"), None);
        assert_eq!(ColorHandler.deserialize("red green blue"), None);
    }

    #[test]
    fn handlers_only_accept_their_kind() {
        assert!(Int32Handler.accepts(&Value::Int32(3)));
        assert!(!Int32Handler.accepts(&Value::Float(3.0)));
        assert!(StringHandler.accepts(&StringHandler.create()));
        assert!(PtrHandler.accepts(&PtrHandler.create()));
    }

    #[test]
    fn pointers_are_not_serializable() {
        assert_eq!(PtrHandler.serialize(&PtrHandler.create()), None);
        assert_eq!(PtrHandler.deserialize("0xdeadbeef"), None);
    }
}
