use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace `{{ key }}` placeholders in stub text.
///
/// Whitespace inside the braces is ignored. Unknown placeholders are left
/// untouched so a later pass (or the user) can still see them.
pub fn render(stub: &str, values: &HashMap<&str, String>) -> String {
    let mut output = String::with_capacity(stub.len());
    let mut rest = stub;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = after_open[..end].trim();
        match values.get(key) {
            Some(value) => output.push_str(value),
            None => output.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }

        rest = &after_open[end + CLOSE.len()..];
    }

    output.push_str(rest);
    output
}
