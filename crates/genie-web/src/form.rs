//! `application/x-www-form-urlencoded` and query-string decoding.

/// Decode every `key=value` pair in an urlencoded body, in order.
///
/// `+` decodes to a space; invalid UTF-8 is replaced rather than rejected.
#[must_use]
pub fn parse(body: &[u8]) -> Vec<(String, String)> {
    body.split(|b| *b == b'&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = match pair.iter().position(|b| *b == b'=') {
                Some(at) => (&pair[..at], &pair[at + 1..]),
                None => (pair, &[][..]),
            };
            (decode(key), decode(value))
        })
        .collect()
}

/// First value of `name`, if present.
#[must_use]
pub fn field(body: &[u8], name: &str) -> Option<String> {
    parse(body)
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}

fn decode(component: &[u8]) -> String {
    let spaced: Vec<u8> = component
        .iter()
        .map(|b| if *b == b'+' { b' ' } else { *b })
        .collect();
    let bytes = urlencoding::decode_binary(&spaced);
    String::from_utf8_lossy(&bytes).into_owned()
}
