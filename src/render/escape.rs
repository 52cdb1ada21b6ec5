/// Append `value` to `out`, escaped for a quoted HTML attribute.
///
/// `&`, `<`, `>`, `"` and `'` become character references. NUL is replaced
/// with U+FFFD first.
pub fn escape_attribute_into(value: &str, out: &mut String) {
    if value.contains('\0') {
        let replaced = value.replace('\0', "\u{FFFD}");
        html_escape::encode_quoted_attribute_to_string(&replaced, out);
    } else {
        html_escape::encode_quoted_attribute_to_string(value, out);
    }
}
