use num_bigint::BigInt;
use serde_json::Value;
use shared::Result;
use std::collections::BTreeMap;

const BIGINT_PREFIX: &str = "<bigint: ";
const BIGINT_SUFFIX: &str = "n>";
const BYTES_PREFIX: &str = "<Uint8Array: 0x";
const BYTES_SUFFIX: &str = ">";

/// A JSON value extended with two extra leaf kinds: arbitrary-precision
/// integers and raw byte buffers.
#[derive(Debug, Clone, PartialEq)]
pub enum XValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    BigInt(BigInt),
    Bytes(Vec<u8>),
    Array(Vec<XValue>),
    Object(BTreeMap<String, XValue>),
}

impl From<bool> for XValue {
    fn from(v: bool) -> Self {
        XValue::Bool(v)
    }
}

impl From<i64> for XValue {
    fn from(v: i64) -> Self {
        XValue::Number(v.into())
    }
}

impl From<&str> for XValue {
    fn from(v: &str) -> Self {
        XValue::String(v.to_string())
    }
}

impl From<BigInt> for XValue {
    fn from(v: BigInt) -> Self {
        XValue::BigInt(v)
    }
}

impl From<Vec<u8>> for XValue {
    fn from(v: Vec<u8>) -> Self {
        XValue::Bytes(v)
    }
}

/// Serialize a value to JSON text.
///
/// Everything passes through standard JSON except the two extended leaves:
/// a big integer becomes the tagged string `<bigint: DIGITSn>`, a byte
/// buffer becomes `<Uint8Array: 0xHEX>` with lowercase hex. An ordinary
/// string that already looks like a tag is emitted unchanged and will
/// come back as the typed leaf; the ambiguity is accepted, not escaped.
pub fn stringify(value: &XValue) -> Result<String> {
    Ok(serde_json::to_string(&encode(value))?)
}

/// Parse JSON text produced by [`stringify`] (or plain JSON).
///
/// Every string is tested against the bigint tag first, the byte tag
/// second; a match reconstructs the typed leaf, anything else passes
/// through as a string. Malformed text fails with whatever the JSON
/// parser reports.
pub fn parse(text: &str) -> Result<XValue> {
    let value: Value = serde_json::from_str(text)?;
    Ok(decode(value))
}

fn encode(value: &XValue) -> Value {
    match value {
        XValue::Null => Value::Null,
        XValue::Bool(b) => Value::Bool(*b),
        XValue::Number(n) => Value::Number(n.clone()),
        XValue::String(s) => Value::String(s.clone()),
        XValue::BigInt(n) => Value::String(format!("{}{}{}", BIGINT_PREFIX, n, BIGINT_SUFFIX)),
        XValue::Bytes(b) => Value::String(format!(
            "{}{}{}",
            BYTES_PREFIX,
            hex::encode(b),
            BYTES_SUFFIX
        )),
        XValue::Array(items) => Value::Array(items.iter().map(encode).collect()),
        XValue::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), encode(v)))
                .collect(),
        ),
    }
}

fn decode(value: Value) -> XValue {
    match value {
        Value::Null => XValue::Null,
        Value::Bool(b) => XValue::Bool(b),
        Value::Number(n) => XValue::Number(n),
        Value::String(s) => decode_string(s),
        Value::Array(items) => XValue::Array(items.into_iter().map(decode).collect()),
        Value::Object(map) => XValue::Object(
            map.into_iter()
                .map(|(k, v)| (k, decode(v)))
                .collect(),
        ),
    }
}

fn decode_string(s: String) -> XValue {
    if let Some(n) = match_bigint(&s) {
        return XValue::BigInt(n);
    }
    if let Some(b) = match_bytes(&s) {
        return XValue::Bytes(b);
    }
    XValue::String(s)
}

fn match_bigint(s: &str) -> Option<BigInt> {
    let body = s
        .strip_prefix(BIGINT_PREFIX)?
        .strip_suffix(BIGINT_SUFFIX)?;
    let digits = body.strip_prefix('-').unwrap_or(body);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(body.as_bytes(), 10)
}

fn match_bytes(s: &str) -> Option<Vec<u8>> {
    let body = s.strip_prefix(BYTES_PREFIX)?.strip_suffix(BYTES_SUFFIX)?;
    if body.len() % 2 != 0
        || !body
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return None;
    }
    hex::decode(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Error;

    fn obj(entries: Vec<(&str, XValue)>) -> XValue {
        XValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn bigint_is_tagged() {
        let n: BigInt = "123456789012345678901234567890".parse().unwrap();
        let value = obj(vec![("n", n.clone().into())]);

        let text = stringify(&value).unwrap();
        assert_eq!(text, r#"{"n":"<bigint: 123456789012345678901234567890n>"}"#);

        assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn bytes_are_tagged_as_lowercase_hex() {
        let value = obj(vec![("key", vec![0xde, 0xad, 0xbe, 0xef].into())]);

        let text = stringify(&value).unwrap();
        assert_eq!(text, r#"{"key":"<Uint8Array: 0xdeadbeef>"}"#);

        assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn nested_mixed_value_round_trips() {
        let n: BigInt = "-98765432109876543210".parse().unwrap();
        let value = obj(vec![
            ("balance", n.into()),
            ("address", "46abc...".into()),
            ("height", 3_123_456i64.into()),
            ("synced", true.into()),
            ("nothing", XValue::Null),
            (
                "outputs",
                XValue::Array(vec![
                    obj(vec![("blob", vec![0u8, 1, 2, 255].into())]),
                    obj(vec![("blob", Vec::<u8>::new().into())]),
                ]),
            ),
        ]);

        let round_tripped = parse(&stringify(&value).unwrap()).unwrap();
        assert_eq!(round_tripped, value);
    }

    #[test]
    fn plain_strings_pass_through() {
        let value = obj(vec![
            ("a", "hello".into()),
            ("b", "<bigint: not-digits n>".into()),
            ("c", "<Uint8Array: 0xzz>".into()),
        ]);

        let round_tripped = parse(&stringify(&value).unwrap()).unwrap();
        assert_eq!(round_tripped, value);
    }

    #[test]
    fn tag_lookalike_string_collides_by_design() {
        // A legitimate string matching a tag pattern comes back typed.
        // Accepted ambiguity of the format, not escaped.
        let value = obj(vec![("s", "<bigint: 42n>".into())]);
        let round_tripped = parse(&stringify(&value).unwrap()).unwrap();
        assert_eq!(round_tripped, obj(vec![("s", BigInt::from(42).into())]));
    }

    #[test]
    fn empty_byte_buffer_round_trips() {
        let text = stringify(&XValue::Bytes(Vec::new())).unwrap();
        assert_eq!(text, r#""<Uint8Array: 0x>""#);
        assert_eq!(parse(&text).unwrap(), XValue::Bytes(Vec::new()));
    }

    #[test]
    fn malformed_text_is_a_codec_error() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, Error::Codec(_)));
    }
}
